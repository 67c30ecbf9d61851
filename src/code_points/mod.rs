mod specs;
mod types;

pub use specs::CodePointsSpecs;
pub use types::*;
