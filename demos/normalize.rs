use ens_normalize_core::EnsNameNormalizer;

fn main() {
    let normalizer = EnsNameNormalizer::default();
    for name in ["Nick.ETH", "1\u{fe0f}\u{20e3}.eth"] {
        let tokens = normalizer.tokenize(name);
        println!("{:?}", tokens);
        let result = normalizer.validate_name(name).unwrap();
        println!("normalized: {}", result.normalize());
        println!("beautified: {}", result.beautify());
    }
}
