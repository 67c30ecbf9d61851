use crate::{DisallowedSequence, EnsNameNormalizer, ProcessError};

/// One repair the curer applied: the offending `sequence` found at `index`
/// in the *input the curer was currently working on* (not the original,
/// which may have already been rewritten by an earlier cure in the loop),
/// replaced with `suggested`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CuredSequence {
    pub index: usize,
    pub sequence: String,
    pub suggested: String,
}

impl EnsNameNormalizer {
    /// Repeatedly normalizes `input`, and on each curable failure removes
    /// the reported offending sequence and tries again, until the name
    /// normalizes or a non-curable diagnostic is raised.
    pub fn cure(&self, input: impl AsRef<str>) -> Result<String, ProcessError> {
        self.cure_with_log(input).map(|(result, _)| result)
    }

    /// As [`Self::cure`], additionally returning the list of cures applied
    /// in order, for callers that want an audit trail.
    pub fn cure_with_log(
        &self,
        input: impl AsRef<str>,
    ) -> Result<(String, Vec<CuredSequence>), ProcessError> {
        cure_impl(self, input.as_ref())
    }
}

fn cure_impl(
    normalizer: &EnsNameNormalizer,
    input: &str,
) -> Result<(String, Vec<CuredSequence>), ProcessError> {
    let max_iterations = normalizer
        .config()
        .cure_max_iterations
        .unwrap_or_else(|| input.chars().count().max(1));

    let mut current = input.to_string();
    let mut cures = Vec::new();

    for _ in 0..=max_iterations {
        match normalizer.normalize(&current) {
            Ok(normalized) => return Ok((normalized, cures)),
            Err(ProcessError::CurrableError {
                index,
                sequence,
                maybe_suggest,
                ..
            }) => {
                let suggested = maybe_suggest.unwrap_or_default();
                current = splice_cp_range(&current, index, sequence.chars().count(), &suggested);
                cures.push(CuredSequence {
                    index,
                    sequence,
                    suggested,
                });
                if current.is_empty() {
                    return Err(ProcessError::DisallowedSequence(
                        DisallowedSequence::EmptyName,
                    ));
                }
            }
            Err(non_curable) => return Err(non_curable),
        }
    }

    // Ran out of iterations without success: re-raise whatever the last
    // attempt produced.
    normalizer.normalize(&current).map(|normalized| (normalized, cures))
}

/// Replaces the `len` code points of `s` starting at code-point offset
/// `start` with `replacement`.
fn splice_cp_range(s: &str, start: usize, len: usize, replacement: &str) -> String {
    let chars = s.chars().collect::<Vec<_>>();
    let end = (start + len).min(chars.len());
    let start = start.min(end);
    let mut result = String::with_capacity(s.len());
    result.extend(&chars[..start]);
    result.push_str(replacement);
    result.extend(&chars[end..]);
    result
}

/// Repeatedly normalizes `input`, curing curable failures, using a default
/// (process-wide) [`EnsNameNormalizer`].
pub fn cure(input: impl AsRef<str>) -> Result<String, ProcessError> {
    EnsNameNormalizer::default().cure(input)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{CurrableError, DisallowedSequence};
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    #[rstest]
    #[case::already_normal("vitalik.eth", Ok("vitalik.eth"))]
    #[case::needs_case_mapping("VITALIK.ETH", Ok("vitalik.eth"))]
    #[case::strips_underscore_in_middle("vi_talik", Ok("vitalik"))]
    #[case::strips_disallowed_space("vitalik x.eth", Ok("vitalikx.eth"))]
    #[case::fully_disallowed(
        "?",
        Err(ProcessError::DisallowedSequence(DisallowedSequence::EmptyName))
    )]
    fn cure_cases(#[case] input: &str, #[case] expected: Result<&str, ProcessError>) {
        let actual = cure(input);
        match expected {
            Ok(expected) => assert_eq!(actual.unwrap(), expected),
            Err(expected) => assert_eq!(actual.unwrap_err(), expected),
        }
    }

    #[test]
    fn cure_is_idempotent() {
        let once = cure("VI_talik x.eth").unwrap();
        let twice = cure(&once).unwrap();
        assert_eq!(once, twice);
    }

    #[test]
    fn non_curable_errors_pass_through() {
        // Two identical non-spacing marks stacked on one base: not curable.
        let input = "a\u{300}\u{300}";
        let err = cure(input).unwrap_err();
        assert!(matches!(
            err,
            ProcessError::DisallowedSequence(DisallowedSequence::NsmRepeated(_))
        ));
        assert!(!err.is_curable());
    }

    #[test]
    fn cure_with_log_reports_applied_cures() {
        let (result, log) = EnsNameNormalizer::default()
            .cure_with_log("VI_talik")
            .unwrap();
        assert_eq!(result, "vitalik");
        assert!(!log.is_empty());
        assert!(log
            .iter()
            .any(|c| matches!(c.sequence.as_str(), "_")));
    }

    #[test]
    fn underscore_in_middle_is_curable_error_code() {
        let err = EnsNameNormalizer::default().normalize("vi_talik").unwrap_err();
        assert_eq!(err.code(), CurrableError::UnderscoreInMiddle.code());
    }
}
