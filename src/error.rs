use crate::CodePoint;

/// Top-level failure of the validation pipeline.
///
/// `CurrableError` variants correspond to wire-stable diagnostic codes that a
/// caller can attempt to repair (e.g. by stripping the offending sequence);
/// `DisallowedSequence` variants mean the name cannot be salvaged.
#[derive(Debug, Clone, thiserror::Error, PartialEq, Eq)]
pub enum ProcessError {
    #[error("invalid character ('{sequence}') at position {index}: {inner}")]
    CurrableError {
        inner: CurrableError,
        index: usize,
        sequence: String,
        maybe_suggest: Option<String>,
    },
    #[error("disallowed sequence: {0}")]
    DisallowedSequence(#[from] DisallowedSequence),
}

impl ProcessError {
    /// Wire-stable short code for this error, as listed by ENSIP-15.
    pub fn code(&self) -> &'static str {
        match self {
            ProcessError::CurrableError { inner, .. } => inner.code(),
            ProcessError::DisallowedSequence(inner) => inner.code(),
        }
    }

    /// True if the underlying cause is one this crate's curer can act on.
    pub fn is_curable(&self) -> bool {
        matches!(self, ProcessError::CurrableError { .. })
    }
}

#[derive(Debug, Clone, thiserror::Error, PartialEq, Eq)]
pub enum CurrableError {
    #[error("underscore in middle")]
    UnderscoreInMiddle,
    #[error("hyphen at second and third position")]
    HyphenAtSecondAndThird,
    #[error("combining mark in disallowed position at the start of the label")]
    CmStart,
    #[error("combining mark in disallowed position after an emoji")]
    CmAfterEmoji,
    #[error("fenced character at the start of a label")]
    FencedLeading,
    #[error("fenced character at the end of a label")]
    FencedTrailing,
    #[error("consecutive sequence of fenced characters")]
    FencedConsecutive,
    #[error("disallowed character")]
    Disallowed,
    #[error("invisible character")]
    Invisible,
    #[error("empty label")]
    EmptyLabel,
    #[error("contains visually confusing characters from {group1} and {group2} scripts")]
    ConfMixed { group1: String, group2: String },
}

impl CurrableError {
    pub fn code(&self) -> &'static str {
        match self {
            CurrableError::UnderscoreInMiddle => "UNDERSCORE",
            CurrableError::HyphenAtSecondAndThird => "HYPHEN",
            CurrableError::CmStart => "CM_START",
            CurrableError::CmAfterEmoji => "CM_EMOJI",
            CurrableError::FencedLeading => "FENCED_LEADING",
            CurrableError::FencedTrailing => "FENCED_TRAILING",
            CurrableError::FencedConsecutive => "FENCED_MULTI",
            CurrableError::Disallowed => "DISALLOWED",
            CurrableError::Invisible => "INVISIBLE",
            CurrableError::EmptyLabel => "EMPTY_LABEL",
            CurrableError::ConfMixed { .. } => "CONF_MIXED",
        }
    }
}

#[derive(Debug, Clone, thiserror::Error, PartialEq, Eq)]
pub enum DisallowedSequence {
    #[error("empty name")]
    EmptyName,
    #[error("non-spacing mark repeated: {0}")]
    NsmRepeated(CodePoint),
    #[error("too many non-spacing marks")]
    NsmTooMany,
    #[error("contains whole-script confusable characters from {group1} and {group2} scripts")]
    ConfWhole { group1: String, group2: String },
}

impl DisallowedSequence {
    pub fn code(&self) -> &'static str {
        match self {
            DisallowedSequence::EmptyName => "EMPTY_NAME",
            DisallowedSequence::NsmRepeated(_) => "NSM_REPEATED",
            DisallowedSequence::NsmTooMany => "NSM_TOO_MANY",
            DisallowedSequence::ConfWhole { .. } => "CONF_WHOLE",
        }
    }
}
