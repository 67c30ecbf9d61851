/// Tunable behavior of an [`crate::EnsNameNormalizer`] instance.
///
/// The defaults reproduce the upstream ENSIP-15 reference behavior; the
/// knobs exist for callers embedding this crate in contexts (fuzzing,
/// benchmarking, offline pipelines) that need to deviate from it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Config {
    /// Whether the tokenizer applies NFC recomposition. Disabling this is
    /// only useful for inspecting the pre-NFC token stream; a normalizer
    /// built with this `false` will reject names a conforming ENS resolver
    /// accepts.
    pub apply_nfc: bool,
    /// Upper bound on [`crate::EnsNameNormalizer::cure`]'s retry loop. `None`
    /// (the default) bounds the loop by the input's own code point count,
    /// per ENSIP-15's guarantee that each iteration consumes at least one
    /// code point of diagnostic attention.
    pub cure_max_iterations: Option<usize>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            apply_nfc: true,
            cure_max_iterations: None,
        }
    }
}
