mod tokenize;
mod types;

pub use tokenize::{TokenizedLabel, TokenizedName};
pub use types::*;
