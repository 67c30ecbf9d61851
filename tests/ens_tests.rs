//! Bulk regression suite over a curated set of ENSIP-15 boundary cases,
//! run in parallel the way the upstream project's own `tests.json` runner
//! does. The full upstream fixture isn't part of this crate's bundled
//! `spec.json`/`nf.json` data, so the cases below are handwritten to cover
//! the same categories (case folding, NFC, emoji FE0F, confusables, label
//! structure rules) rather than included verbatim.

use ens_normalize_core::EnsNameNormalizer;
use lazy_static::lazy_static;
use rayon::prelude::*;
use rstest::rstest;

#[derive(Debug, Clone)]
struct TestCase {
    comment: &'static str,
    name: &'static str,
    /// `None` means "expect success, normalized form equals `name`".
    norm: Option<&'static str>,
    /// `None` with `should_error = true` means "expect any error".
    should_error: bool,
}

impl TestCase {
    const fn ok(comment: &'static str, name: &'static str, norm: &'static str) -> Self {
        Self {
            comment,
            name,
            norm: Some(norm),
            should_error: false,
        }
    }

    const fn identity(comment: &'static str, name: &'static str) -> Self {
        Self {
            comment,
            name,
            norm: None,
            should_error: false,
        }
    }

    const fn error(comment: &'static str, name: &'static str) -> Self {
        Self {
            comment,
            name,
            norm: None,
            should_error: true,
        }
    }
}

lazy_static! {
    static ref ENS_TESTS: Vec<TestCase> = vec![
        TestCase::ok("simple case folding", "Nick.ETH", "nick.eth"),
        TestCase::ok("full upper", "VITALIK.ETH", "vitalik.eth"),
        TestCase::identity("already normalized", "vitalik.eth"),
        TestCase::identity("leading underscores are allowed", "______________vitalik"),
        TestCase::ok("roman numeral mapping", "\u{2165}", "vi"),
        TestCase::ok("trademark sign mapping", "a\u{2122}", "atm"),
        TestCase::ok("NFC composition", "a\u{300}", "\u{e0}"),
        TestCase::ok(
            "FE0F-free keycap stays FE0F-free after normalize",
            "1\u{fe0f}\u{20e3}",
            "1\u{20e3}"
        ),
        TestCase::identity("plain emoji", "\u{1f600}"),
        TestCase::error("space is disallowed", "vitalik .eth"),
        TestCase::error("empty label between two dots", "vitalik..eth"),
        TestCase::error("underscore not allowed mid-label", "vi_talik"),
        TestCase::error("xn-- style hyphen reservation", "xx--xx"),
        TestCase::error("fenced apostrophe leading", "\u{2019}85"),
        TestCase::error("mixed ASCII/Cyrillic script", "a\u{441}"),
        TestCase::error("whole-script confusable", "\u{430}\u{435}\u{43e}"),
    ];
}

fn test_cases(cases: &[&TestCase], normalizer: &EnsNameNormalizer) {
    for case in cases {
        process_test_case(normalizer, case).expect("case failed");
    }
}

#[rstest]
fn ens_tests() {
    let normalizer = EnsNameNormalizer::default();
    let cases = ENS_TESTS.iter().collect::<Vec<_>>();
    let results = cases
        .par_iter()
        .map(|case| process_test_case(&normalizer, case))
        .filter_map(|r| r.err())
        .collect::<Vec<_>>();

    if !results.is_empty() {
        panic!("{} case(s) failed:\n{}", results.len(), results.join("\n"));
    }
}

#[rstest]
#[ignore = "for debugging a single case"]
fn ens_test_debug() {
    let normalizer = EnsNameNormalizer::default();
    test_cases(&[&TestCase::ok("debug", "Nick.ETH", "nick.eth")], &normalizer);
}

fn process_test_case(normalizer: &EnsNameNormalizer, case: &TestCase) -> Result<(), String> {
    let result = normalizer.normalize(case.name);
    match result {
        Err(e) if case.should_error => {
            let _ = e;
            Ok(())
        }
        Ok(actual) if !case.should_error => {
            let expected = case.norm.unwrap_or(case.name);
            if actual == expected {
                Ok(())
            } else {
                Err(format!(
                    "in case '{}': expected '{expected}', got '{actual}'",
                    case.comment
                ))
            }
        }
        Err(e) => Err(format!(
            "in case '{}': expected success, got error {e}",
            case.comment
        )),
        Ok(actual) => Err(format!(
            "in case '{}': expected error, got success '{actual}'",
            case.comment
        )),
    }
}
