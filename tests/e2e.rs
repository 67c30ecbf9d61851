use ens_normalize_core::{
    CurrableError, DisallowedSequence, EnsNameNormalizer, ProcessError, ProcessFlags,
};
use pretty_assertions::assert_eq;
use rstest::{fixture, rstest};

#[fixture]
#[once]
fn normalizer() -> EnsNameNormalizer {
    EnsNameNormalizer::default()
}

#[rstest]
#[case("vitalik.eth", Ok(("vitalik.eth", "vitalik.eth")))]
#[case("VITALIK.ETH", Ok(("vitalik.eth", "vitalik.eth")))]
#[case("Nick.ETH", Ok(("nick.eth", "nick.eth")))]
#[case("1\u{20e3}", Ok(("1\u{20e3}", "1\u{fe0f}\u{20e3}")))]
#[case("\u{1f4a9}\u{fe0f}", Ok(("\u{1f4a9}", "\u{1f4a9}\u{fe0f}")))]
#[case("______________vitalik", Ok(("______________vitalik", "______________vitalik")))]
#[case(
    "vitalik__",
    Err(currable_error(CurrableError::UnderscoreInMiddle, 7, "_", Some("")))
)]
#[case(
    "xx--xx",
    Err(currable_error(CurrableError::HyphenAtSecondAndThird, 2, "--", Some("")))
)]
#[case(
    "\u{2019}abcd",
    Err(currable_error(CurrableError::FencedLeading, 0, "\u{2019}", Some("")))
)]
#[case(
    "abcd\u{2019}",
    Err(currable_error(CurrableError::FencedTrailing, 4, "\u{2019}", Some("")))
)]
#[case("vitalik .eth", Err(disallowed(7, " ")))]
#[case("vitalik..eth", Err(empty_label(8)))]
#[case("..", Err(empty_label(0)))]
#[case(
    "a\u{441}",
    Err(currable_error(
        CurrableError::ConfMixed { group1: "ASCII".to_string(), group2: "Cyrillic".to_string() },
        1,
        "a\u{441}",
        None,
    ))
)]
fn e2e_tests(
    #[case] name: &str,
    #[case] expected: Result<(&str, &str), ProcessError>,
    normalizer: &EnsNameNormalizer,
) {
    let actual = normalizer.validate_name(name);
    match expected {
        Ok((expected_normalized, expected_beautified)) => {
            let res = actual.expect("validate_name should succeed");
            let normalized = res.normalize();
            assert_eq!(
                normalized, expected_normalized,
                "expected '{expected_normalized}', got '{normalized}'"
            );
            let beautified = res.beautify();
            assert_eq!(
                beautified, expected_beautified,
                "expected '{expected_beautified}', got '{beautified}'"
            );
        }
        Err(expected) => assert_eq!(actual.unwrap_err(), expected),
    }
}

#[rstest]
fn whole_script_confusable_is_not_curable(normalizer: &EnsNameNormalizer) {
    let err = normalizer
        .validate_name("\u{430}\u{435}\u{43e}")
        .unwrap_err();
    assert_eq!(
        err,
        ProcessError::DisallowedSequence(DisallowedSequence::ConfWhole {
            group1: "Cyrillic".to_string(),
            group2: "Latin".to_string(),
        })
    );
    assert!(!err.is_curable());
}

#[rstest]
fn process_combines_every_requested_view(normalizer: &EnsNameNormalizer) {
    let out = normalizer.process("Nick.ETH", ProcessFlags::all());
    assert_eq!(out.normalized.as_deref(), Some("nick.eth"));
    assert_eq!(out.beautified.as_deref(), Some("nick.eth"));
    assert!(out.tokens.is_some());
    assert!(!out.normalizations.unwrap().is_empty());
    assert_eq!(out.cured.as_deref(), Some("nick.eth"));
    assert!(out.error.is_none());
}

fn disallowed(index: usize, sequence: &str) -> ProcessError {
    currable_error(CurrableError::Disallowed, index, sequence, Some(""))
}

fn empty_label(index: usize) -> ProcessError {
    currable_error(CurrableError::EmptyLabel, index, "", Some(""))
}

fn currable_error(
    inner: CurrableError,
    index: usize,
    sequence: &str,
    maybe_suggest: Option<&str>,
) -> ProcessError {
    ProcessError::CurrableError {
        inner,
        index,
        sequence: sequence.to_string(),
        maybe_suggest: maybe_suggest.map(|s| s.to_string()),
    }
}
