use crate::CodePoint;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EnsNameToken {
    Valid(TokenValid),
    Mapped(TokenMapped),
    Ignored(TokenIgnored),
    Disallowed(TokenDisallowed),
    Stop(TokenStop),
    Nfc(TokenNfc),
    Emoji(TokenEmoji),
}

impl EnsNameToken {
    pub fn cps(&self) -> Vec<CodePoint> {
        match self {
            EnsNameToken::Valid(t) => t.cps.clone(),
            EnsNameToken::Mapped(t) => t.cps.clone(),
            EnsNameToken::Nfc(t) => t.cps.clone(),
            EnsNameToken::Emoji(t) => t.cps.clone(),
            _ => vec![],
        }
    }

    /// Code points this token occupies in the *original input*, not its
    /// (possibly shorter or longer) output. A mapped or ignored code point
    /// is always one input code point even though it contributes zero or
    /// several output code points; an NFC or emoji token's width is its
    /// `input`, not its `cps`.
    pub fn size(&self) -> usize {
        match self {
            EnsNameToken::Valid(t) => t.cps.len(),
            EnsNameToken::Mapped(_) => 1,
            EnsNameToken::Ignored(_) => 1,
            EnsNameToken::Disallowed(_) => 1,
            EnsNameToken::Stop(_) => 1,
            EnsNameToken::Nfc(t) => t.input.len(),
            EnsNameToken::Emoji(t) => t.input.len(),
        }
    }

    pub fn is_text(&self) -> bool {
        matches!(
            self,
            EnsNameToken::Valid(_) | EnsNameToken::Mapped(_) | EnsNameToken::Nfc(_)
        )
    }

    pub fn is_emoji(&self) -> bool {
        matches!(self, EnsNameToken::Emoji(_))
    }

    pub fn ignored(&self) -> bool {
        matches!(self, EnsNameToken::Ignored(_))
    }

    pub fn is_disallowed(&self) -> bool {
        matches!(self, EnsNameToken::Disallowed(_))
    }

    /// Codepoints as the caller typed them, ignoring any mapping/NFC substitution.
    pub fn as_string(&self) -> String {
        match self {
            EnsNameToken::Valid(t) => crate::utils::cps2str(&t.cps),
            EnsNameToken::Mapped(t) => crate::utils::cp2str(t.cp),
            EnsNameToken::Ignored(t) => crate::utils::cp2str(t.cp),
            EnsNameToken::Disallowed(t) => crate::utils::cp2str(t.cp),
            EnsNameToken::Stop(t) => crate::utils::cp2str(t.cp),
            EnsNameToken::Nfc(t) => crate::utils::cps2str(&t.input),
            EnsNameToken::Emoji(t) => crate::utils::cps2str(&t.input),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TokenValid {
    pub cps: Vec<CodePoint>,
}
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TokenMapped {
    pub cps: Vec<CodePoint>,
    pub cp: CodePoint,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TokenIgnored {
    pub cp: CodePoint,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TokenDisallowed {
    pub cp: CodePoint,
}
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TokenStop {
    pub cp: CodePoint,
}
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TokenNfc {
    pub cps: Vec<CodePoint>,
    pub input: Vec<CodePoint>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TokenEmoji {
    pub input: Vec<CodePoint>,
    pub emoji: Vec<CodePoint>,
    pub cps: Vec<CodePoint>,
}

/// Output of [`crate::TokenizedLabel::collapse_into_text_or_emoji`]: consecutive
/// text tokens are fused, emoji tokens stay distinct.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CollapsedEnsNameToken {
    Text(TokenValid),
    Emoji(TokenEmoji),
}

/// Code point span a single token occupies in the original input: the
/// common unit every diagnostic index and [`crate::normalizations`] entry is
/// expressed in. Equivalent to [`EnsNameToken::size`]; kept as a free
/// function so offset-walking code outside this module doesn't need a
/// method receiver.
pub fn token_span(token: &EnsNameToken) -> usize {
    token.size()
}

/// Sum of [`token_span`] over a run of tokens: the offset the next token
/// after `tokens` starts at, given `tokens` started at offset 0.
pub fn offset_of(tokens: &[EnsNameToken]) -> usize {
    tokens.iter().map(token_span).sum()
}
