use ens_normalize_core::EnsNameNormalizer;

fn main() {
    let normalizer = EnsNameNormalizer::default();

    let name = "Na\u{300}me \u{1f9d9}\u{200d}\u{2642}\u{fe0f}.eth";
    let result = normalizer.tokenize(name);

    for token in result.tokens {
        if token.is_disallowed() {
            println!("disallowed: {:?}", token.as_string());
        }
    }
}
