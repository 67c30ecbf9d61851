use crate::{
    constants, static_data::spec_json, tokens::EnsNameToken, utils, CodePoint, CodePointsSpecs,
    CurrableError, DisallowedSequence, ParsedGroup, ParsedWholeValue, ProcessError, TokenizedLabel,
    TokenizedName,
};
use std::collections::HashSet;

pub type LabelType = spec_json::GroupName;

/// A label (the part of a name between two U+002E STOP characters) that has
/// passed every rule in [`validate_label`], with the script group it was
/// resolved to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidatedLabel {
    pub tokens: Vec<EnsNameToken>,
    pub label_type: LabelType,
}

/// Validates every label of a tokenized name, remapping each label's
/// locally-indexed error back to an absolute code point offset within the
/// full (tokenized) input. Stops at the first failing label.
pub fn validate_name(
    tokenized: &TokenizedName,
    specs: &CodePointsSpecs,
) -> Result<Vec<ValidatedLabel>, ProcessError> {
    // A genuinely empty string tokenizes to zero tokens and zero labels: the
    // normalized empty name, not an `EMPTY_LABEL` failure. A string made only
    // of stops (e.g. "..") still produces empty labels between them, which
    // the loop below correctly rejects.
    if tokenized.is_empty() {
        return Ok(Vec::new());
    }

    let mut labels = Vec::new();
    for (offset, label) in tokenized.labels_with_offset() {
        let validated = validate_label(label, specs).map_err(|err| offset_error(err, offset))?;
        labels.push(validated);
    }
    Ok(labels)
}

fn offset_error(err: ProcessError, offset: usize) -> ProcessError {
    match err {
        ProcessError::CurrableError {
            inner,
            index,
            sequence,
            maybe_suggest,
        } => ProcessError::CurrableError {
            inner,
            index: index + offset,
            sequence,
            maybe_suggest,
        },
        other => other,
    }
}

// https://docs.ens.domains/ensip/15#validate
pub fn validate_label(
    label: TokenizedLabel,
    specs: &CodePointsSpecs,
) -> Result<ValidatedLabel, ProcessError> {
    non_empty(&label)?;
    check_no_disallowed_or_invisible(&label, specs)?;
    if label.is_fully_emoji() {
        return Ok(ValidatedLabel {
            tokens: label.tokens.to_vec(),
            label_type: LabelType::Emoji,
        });
    };
    underscore_only_at_beginning(&label)?;
    if label.is_fully_ascii() {
        no_hyphen_at_second_and_third(&label)?;
        return Ok(ValidatedLabel {
            tokens: label.tokens.to_vec(),
            label_type: LabelType::Ascii,
        });
    }
    check_fenced(&label, specs)?;
    check_cm_leading_emoji(&label, specs)?;
    let group = check_and_get_group(&label, specs)?;
    Ok(ValidatedLabel {
        tokens: label.tokens.to_vec(),
        label_type: group.name,
    })
}

fn non_empty(label: &TokenizedLabel) -> Result<(), ProcessError> {
    let non_ignored_token_exists = label.tokens.iter().any(|token| !token.ignored());
    if !non_ignored_token_exists {
        return Err(ProcessError::CurrableError {
            inner: CurrableError::EmptyLabel,
            index: 0,
            sequence: String::new(),
            maybe_suggest: Some(String::new()),
        });
    }
    Ok(())
}

/// Rejects a label containing any token the tokenizer could not place (a
/// disallowed code point), or an invisible joiner outside of an emoji
/// sequence.
fn check_no_disallowed_or_invisible(
    label: &TokenizedLabel,
    specs: &CodePointsSpecs,
) -> Result<(), ProcessError> {
    let mut index = 0;
    for token in label.tokens.iter() {
        if let EnsNameToken::Disallowed(t) = token {
            let inner = if specs.is_invisible(t.cp) {
                CurrableError::Invisible
            } else {
                CurrableError::Disallowed
            };
            return Err(ProcessError::CurrableError {
                inner,
                index,
                sequence: utils::cp2str(t.cp),
                maybe_suggest: Some(String::new()),
            });
        }
        index += crate::tokens::token_span(token);
    }
    Ok(())
}

fn underscore_only_at_beginning(label: &TokenizedLabel) -> Result<(), ProcessError> {
    let cps = label.iter_cps().collect::<Vec<_>>();
    let leading_underscores = cps
        .iter()
        .take_while(|cp| **cp == constants::CP_UNDERSCORE)
        .count();
    let underscore_in_middle = cps
        .iter()
        .enumerate()
        .skip(leading_underscores)
        .find(|(_, cp)| **cp == constants::CP_UNDERSCORE);
    if let Some((index, _)) = underscore_in_middle {
        return Err(ProcessError::CurrableError {
            inner: CurrableError::UnderscoreInMiddle,
            index,
            sequence: utils::cps2str(&[constants::CP_UNDERSCORE]),
            maybe_suggest: Some("".to_string()),
        });
    }
    Ok(())
}

// The 3rd and 4th characters must not both be 2D (-) HYPHEN-MINUS.
// Must not match /^..--/
// Examples: "ab-c" and "---a"are valid, "xn--" and ---- are invalid.
fn no_hyphen_at_second_and_third(label: &TokenizedLabel) -> Result<(), ProcessError> {
    let cps = label.iter_cps().collect::<Vec<_>>();
    if cps.get(2) == Some(&constants::CP_HYPHEN) && cps.get(3) == Some(&constants::CP_HYPHEN) {
        return Err(ProcessError::CurrableError {
            inner: CurrableError::HyphenAtSecondAndThird,
            index: 2,
            sequence: utils::cps2str(&[constants::CP_HYPHEN, constants::CP_HYPHEN]),
            maybe_suggest: Some("".to_string()),
        });
    }
    Ok(())
}

fn check_fenced(label: &TokenizedLabel, specs: &CodePointsSpecs) -> Result<(), ProcessError> {
    let cps = label.iter_cps().collect::<Vec<_>>();
    if let Some(first_cp) = cps.first() {
        if specs.is_fenced(*first_cp) {
            return Err(ProcessError::CurrableError {
                inner: CurrableError::FencedLeading,
                index: 0,
                sequence: utils::cps2str(&[*first_cp]),
                maybe_suggest: Some("".to_string()),
            });
        }
    }
    if let Some(last_cp) = cps.last() {
        if specs.is_fenced(*last_cp) {
            return Err(ProcessError::CurrableError {
                inner: CurrableError::FencedTrailing,
                index: cps.len() - 1,
                sequence: utils::cps2str(&[*last_cp]),
                maybe_suggest: Some("".to_string()),
            });
        }
    }

    for (i, window) in cps.windows(2).enumerate() {
        let (one, two) = (window[0], window[1]);
        if specs.is_fenced(one) && specs.is_fenced(two) {
            return Err(ProcessError::CurrableError {
                inner: CurrableError::FencedConsecutive,
                index: i,
                sequence: utils::cps2str(&[one, two]),
                maybe_suggest: Some("".to_string()),
            });
        }
    }
    Ok(())
}

fn check_cm_leading_emoji(
    label: &TokenizedLabel,
    specs: &CodePointsSpecs,
) -> Result<(), ProcessError> {
    let mut index = 0;

    for (i, token) in label.tokens.iter().enumerate() {
        if token.is_text() {
            if let Some(cp) = token.cps().first() {
                if specs.is_cm(*cp) {
                    if i == 0 {
                        return Err(ProcessError::CurrableError {
                            inner: CurrableError::CmStart,
                            index,
                            sequence: utils::cps2str(&[*cp]),
                            maybe_suggest: Some("".to_string()),
                        });
                    } else if label.tokens[i - 1].is_emoji() {
                        return Err(ProcessError::CurrableError {
                            inner: CurrableError::CmAfterEmoji,
                            index,
                            sequence: utils::cps2str(&[*cp]),
                            maybe_suggest: Some("".to_string()),
                        });
                    }
                }
            }
        }
        index += crate::tokens::token_span(token);
    }

    Ok(())
}

fn check_and_get_group(
    label: &TokenizedLabel,
    specs: &CodePointsSpecs,
) -> Result<ParsedGroup, ProcessError> {
    let cps = label.get_cps_of_not_ignored_text();
    let unique_cps = cps
        .clone()
        .into_iter()
        .collect::<HashSet<_>>()
        .into_iter()
        .collect::<Vec<_>>();
    let group = determine_group(&cps, &unique_cps, specs)?.clone();
    check_group(&group, &cps, specs)?;
    check_whole(&group, &unique_cps, specs)?;
    Ok(group)
}

fn check_group(
    group: &ParsedGroup,
    cps: &[CodePoint],
    specs: &CodePointsSpecs,
) -> Result<(), ProcessError> {
    if group.cm_absent {
        let decomposed = utils::nfd_cps(cps, specs);
        let mut i = 1;
        let e = decomposed.len();
        while i < e {
            if specs.is_nsm(decomposed[i]) {
                let mut j = i + 1;
                while j < e && specs.is_nsm(decomposed[j]) {
                    if j - i + 1 > specs.nsm_max() as usize {
                        return Err(ProcessError::DisallowedSequence(
                            DisallowedSequence::NsmTooMany,
                        ));
                    }
                    for k in i..j {
                        if decomposed[k] == decomposed[j] {
                            return Err(ProcessError::DisallowedSequence(
                                DisallowedSequence::NsmRepeated(decomposed[j]),
                            ));
                        }
                    }
                    j += 1;
                }
                i = j;
            }
            i += 1;
        }
    }
    Ok(())
}

/// Checks whether every code point in the label is simultaneously a member
/// of some other script, making the whole label confusable with that other
/// script even though each individual code point resolved cleanly. Unlike
/// [`determine_group`]'s CONF_MIXED, this is not curable: there is no single
/// offending code point to strip, the entire label is the problem.
fn check_whole(
    group: &ParsedGroup,
    unique_cps: &[CodePoint],
    specs: &CodePointsSpecs,
) -> Result<(), ProcessError> {
    let (maker, shared) = get_groups_candidates_and_shared_cps(unique_cps, specs);
    for group_name in maker {
        let confused_group_candidate = specs.group_by_name(group_name).expect("group must exist");
        if confused_group_candidate.contains_all_cps(&shared) {
            return Err(ProcessError::DisallowedSequence(
                DisallowedSequence::ConfWhole {
                    group1: group.name.to_string(),
                    group2: confused_group_candidate.name.to_string(),
                },
            ));
        }
    }
    Ok(())
}

fn get_groups_candidates_and_shared_cps(
    unique_cps: &[CodePoint],
    specs: &CodePointsSpecs,
) -> (Vec<String>, Vec<CodePoint>) {
    let mut maybe_groups: Option<Vec<String>> = None;
    let mut shared: Vec<CodePoint> = Vec::new();

    for cp in unique_cps {
        match specs.whole_map(*cp) {
            Some(ParsedWholeValue::Number(_)) => {
                return (vec![], vec![]);
            }
            Some(ParsedWholeValue::WholeObject(whole)) => {
                let confused_groups_names = whole
                    .m
                    .get(cp)
                    .expect("since we got `whole` from cp, `M` must have a value for `cp`");

                match maybe_groups.as_mut() {
                    Some(groups) => {
                        groups.retain(|g| confused_groups_names.contains(g));
                    }
                    None => {
                        maybe_groups = Some(confused_groups_names.iter().cloned().collect());
                    }
                }
            }
            None => {
                shared.push(*cp);
            }
        };
    }

    (maybe_groups.unwrap_or_default(), shared)
}

/// Resolves the script group that covers every code point in the label. If no
/// single group covers them all, the label mixes scripts: this walks forward
/// from the first code point (the anchor) to find the first code point not
/// covered by the anchor's group, and reports both groups as a curable
/// CONF_MIXED error naming the offending pair.
fn determine_group<'a>(
    cps: &[CodePoint],
    unique_cps: &'a [CodePoint],
    specs: &'a CodePointsSpecs,
) -> Result<&'a ParsedGroup, ProcessError> {
    if let Some(group) = specs.groups_for_cps(unique_cps).next() {
        return Ok(group);
    }

    let first_cp = cps[0];
    let anchor_group = specs.groups_for_cps(std::slice::from_ref(&first_cp)).next();
    let anchor_name = || {
        anchor_group
            .map(|g| g.name.to_string())
            .unwrap_or_else(|| "Unknown".to_string())
    };

    for (index, cp) in cps.iter().enumerate().skip(1) {
        let covered_by_anchor = anchor_group.map(|g| g.contains_cp(*cp)).unwrap_or(false);
        if !covered_by_anchor {
            let other_group = specs.groups_for_cps(std::slice::from_ref(cp)).next();
            let other_name = other_group
                .map(|g| g.name.to_string())
                .unwrap_or_else(|| "Unknown".to_string());
            return Err(ProcessError::CurrableError {
                inner: CurrableError::ConfMixed {
                    group1: anchor_name(),
                    group2: other_name,
                },
                index,
                sequence: utils::cps2str(&[first_cp, *cp]),
                maybe_suggest: None,
            });
        }
    }

    // Every code point after the first was covered by the anchor group, yet
    // no single group covers the full set: the anchor itself is ambiguous.
    Err(ProcessError::CurrableError {
        inner: CurrableError::ConfMixed {
            group1: anchor_name(),
            group2: "Unknown".to_string(),
        },
        index: 0,
        sequence: utils::cps2str(&[first_cp]),
        maybe_suggest: None,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::CodePointsSpecs as Specs;
    use pretty_assertions::assert_eq;
    use rstest::{fixture, rstest};

    #[fixture]
    #[once]
    fn specs() -> Specs {
        Specs::default()
    }

    fn label_type_of(input: &str, specs: &CodePointsSpecs) -> Result<LabelType, ProcessError> {
        let tokenized = TokenizedName::from_input(input, specs, true);
        let label = tokenized.labels().into_iter().next().expect("one label");
        validate_label(label, specs).map(|v| v.label_type)
    }

    #[rstest]
    #[case::hello("hello", Ok(LabelType::Ascii))]
    #[case::ascii_with_hyphen("ab-c", Ok(LabelType::Ascii))]
    #[case::cyrillic("\u{441}\u{43e}\u{440}", Ok(LabelType::Other("Cyrillic".to_string())))]
    #[case::whole_script_confusable("\u{430}\u{435}\u{43e}", Err(ProcessError::DisallowedSequence(
        DisallowedSequence::ConfWhole { group1: "Cyrillic".to_string(), group2: "Latin".to_string() }
    )))]
    #[case::mixed_script("a\u{441}", Err(ProcessError::CurrableError {
        inner: CurrableError::ConfMixed { group1: "ASCII".to_string(), group2: "Cyrillic".to_string() },
        index: 1,
        sequence: "a\u{441}".to_string(),
        maybe_suggest: None,
    }))]
    #[case::hyphen_at_second_and_third("ab--", Err(ProcessError::CurrableError {
        inner: CurrableError::HyphenAtSecondAndThird,
        index: 2,
        sequence: "--".to_string(),
        maybe_suggest: Some("".to_string())
    }))]
    #[case::fenced_leading("\u{2019}85", Err(ProcessError::CurrableError {
        inner: CurrableError::FencedLeading,
        index: 0,
        sequence: "\u{2019}".to_string(),
        maybe_suggest: Some("".to_string())
    }))]
    #[case::cm_leading("\u{300}hello", Err(ProcessError::CurrableError {
        inner: CurrableError::CmStart,
        index: 0,
        sequence: "\u{300}".to_string(),
        maybe_suggest: Some("".to_string())
    }))]
    fn test_validate_and_get_type(
        #[case] input: &str,
        #[case] expected: Result<LabelType, ProcessError>,
        specs: &Specs,
    ) {
        let result = label_type_of(input, specs);
        assert_eq!(result, expected, "{input:?}");
    }

    #[rstest]
    #[case::emoji("\"Emoji\"", LabelType::Emoji)]
    #[case::ascii("\"ASCII\"", LabelType::Ascii)]
    #[case::greek("\"Greek\"", LabelType::Greek)]
    #[case::other("\"FooBar\"", LabelType::Other("FooBar".to_string()))]
    fn test_deserialize_label_type(#[case] input: &str, #[case] expected: LabelType) {
        let result: LabelType = serde_json::from_str(input).unwrap();
        assert_eq!(result, expected);
    }
}
