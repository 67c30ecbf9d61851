mod beautify;
mod code_points;
mod config;
pub(crate) mod constants;
mod cure;
mod error;
mod join;
mod normalizations;
mod normalizer;
mod static_data;
mod tokens;
mod utils;
mod validate;

pub use code_points::*;
pub use config::Config;
pub use cure::{cure, CuredSequence};
pub use error::{CurrableError, DisallowedSequence, ProcessError};
pub use normalizations::{NormalizableSequence, NormalizableSequenceType};
pub use normalizer::{
    beautify, is_normalizable, normalize, normalizations, process, tokenize, validate_name,
    EnsNameNormalizer, ProcessFlags, ProcessOutput, ProcessedName,
};
pub use tokens::*;
pub use validate::{LabelType, ValidatedLabel};
