use crate::{tokens, utils, EnsNameToken, TokenizedName};

/// One place tokenization changed `input` on the way to a normalized (or
/// curably-failing) result: a mapped code point, a silently dropped ignored
/// code point, an NFC recomposition, or an emoji that gained its FE0F
/// variation selectors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NormalizableSequence {
    pub code: NormalizableSequenceType,
    /// Code point offset of `sequence` within the tokenized input.
    pub index: usize,
    /// The unnormalized subsequence as it appeared in the input.
    pub sequence: String,
    /// What `sequence` was (or would be) replaced with.
    pub suggested: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NormalizableSequenceType {
    Mapped,
    Ignored,
    Fe0f,
    Nfc,
}

impl NormalizableSequenceType {
    pub fn code(&self) -> &'static str {
        match self {
            NormalizableSequenceType::Mapped => "MAPPED",
            NormalizableSequenceType::Ignored => "IGNORED",
            NormalizableSequenceType::Fe0f => "FE0F",
            NormalizableSequenceType::Nfc => "NFC",
        }
    }
}

/// Walks every token of a tokenized name once, reporting every place the
/// tokenizer changed the input. Does not validate; call this on the output
/// of [`TokenizedName::from_input`] directly, before or independently of
/// label validation.
pub fn collect_normalizations(tokenized: &TokenizedName) -> Vec<NormalizableSequence> {
    let mut out = Vec::new();
    let mut index = 0;
    for token in tokenized.iter_tokens() {
        match token {
            EnsNameToken::Mapped(t) => out.push(NormalizableSequence {
                code: NormalizableSequenceType::Mapped,
                index,
                sequence: utils::cp2str(t.cp),
                suggested: utils::cps2str(&t.cps),
            }),
            EnsNameToken::Ignored(t) => out.push(NormalizableSequence {
                code: NormalizableSequenceType::Ignored,
                index,
                sequence: utils::cp2str(t.cp),
                suggested: String::new(),
            }),
            EnsNameToken::Nfc(t) => out.push(NormalizableSequence {
                code: NormalizableSequenceType::Nfc,
                index,
                sequence: utils::cps2str(&t.input),
                suggested: utils::cps2str(&t.cps),
            }),
            EnsNameToken::Emoji(t) if t.input != t.emoji => out.push(NormalizableSequence {
                code: NormalizableSequenceType::Fe0f,
                index,
                sequence: utils::cps2str(&t.input),
                suggested: utils::cps2str(&t.emoji),
            }),
            _ => {}
        }
        index += tokens::token_span(token);
    }
    out
}
