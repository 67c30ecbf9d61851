fn main() {
    // Using normalizer to reuse preloaded data
    let normalizer = ens_normalize_core::EnsNameNormalizer::default();
    let name = "\u{1f4a9}.eth";
    let processed = normalizer.validate_name(name).unwrap();
    let beautified_name = processed.beautify();
    let normalized_name = processed.normalize();

    assert_eq!(normalized_name, "\u{1f4a9}.eth");
    assert_eq!(beautified_name, "\u{1f4a9}\u{fe0f}.eth");

    // Using normalize directly
    let normalized = normalizer.normalize("Levvv.eth").unwrap();
    assert_eq!(normalized, "levvv.eth");
}
