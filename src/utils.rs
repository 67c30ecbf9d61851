use crate::{CodePoint, CodePointsSpecs};
use unicode_normalization::UnicodeNormalization;

const FE0F: CodePoint = 0xfe0f;

pub fn filter_fe0f(cps: &[CodePoint]) -> Vec<CodePoint> {
    cps.iter().filter(|cp| **cp != FE0F).cloned().collect()
}

pub fn cps2str(cps: &[CodePoint]) -> String {
    cps.iter().filter_map(|cp| char::from_u32(*cp)).collect()
}

pub fn cp2str(cp: CodePoint) -> String {
    cps2str(&[cp])
}

pub fn str2cps(str: &str) -> Vec<CodePoint> {
    str.chars().map(|c| c as CodePoint).collect()
}

pub fn is_ascii(cp: CodePoint) -> bool {
    cp < 0x80
}

/// Applies real Unicode NFC normalization to a string.
pub fn nfc(s: &str) -> String {
    s.nfc().collect()
}

/// Decomposes a sequence of code points using the spec's own decomposition
/// table first, falling back to real Unicode NFD for anything left over.
pub fn nfd_cps(cps: &[CodePoint], specs: &CodePointsSpecs) -> Vec<CodePoint> {
    let mut expanded = Vec::with_capacity(cps.len());
    for cp in cps {
        match specs.decompose(*cp) {
            Some(parts) => expanded.extend(parts.iter().copied()),
            None => expanded.push(*cp),
        }
    }
    let s = cps2str(&expanded);
    s.nfd().map(|c| c as CodePoint).collect()
}
