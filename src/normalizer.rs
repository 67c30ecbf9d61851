use crate::{
    beautify::beautify_labels, join::join_labels, normalizations::collect_normalizations,
    validate::validate_name, CodePointsSpecs, Config, NormalizableSequence, ProcessError,
    TokenizedName, ValidatedLabel,
};

#[derive(Default)]
pub struct EnsNameNormalizer {
    specs: CodePointsSpecs,
    config: Config,
}

/// A name whose labels have all passed [`crate::validate::validate_label`];
/// the result of [`EnsNameNormalizer::validate_name`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProcessedName {
    pub labels: Vec<ValidatedLabel>,
    pub tokenized: TokenizedName,
}

impl EnsNameNormalizer {
    /// Builds a normalizer over `specs` with default [`Config`]. Kept for
    /// source compatibility with callers that only ever customized the
    /// spec tables.
    pub fn new(specs: CodePointsSpecs) -> Self {
        Self::with_config(specs, Config::default())
    }

    pub fn with_config(specs: CodePointsSpecs, config: Config) -> Self {
        Self { specs, config }
    }

    pub fn specs(&self) -> &CodePointsSpecs {
        &self.specs
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Tokenizes `input`. Total: every code point of `input` is covered by
    /// exactly one token, there is no failure mode.
    pub fn tokenize(&self, input: impl AsRef<str>) -> TokenizedName {
        TokenizedName::from_input(input.as_ref(), &self.specs, self.config.apply_nfc)
    }

    /// Tokenizes, splits into labels, and validates each label in turn.
    /// Stops at the first label that fails a rule.
    pub fn validate_name(&self, input: impl AsRef<str>) -> Result<ProcessedName, ProcessError> {
        let tokenized = self.tokenize(input);
        let labels = validate_name(&tokenized, &self.specs)?;
        Ok(ProcessedName { tokenized, labels })
    }

    pub fn normalize(&self, input: impl AsRef<str>) -> Result<String, ProcessError> {
        self.validate_name(input)
            .map(|processed| processed.normalize())
    }

    pub fn beautify(&self, input: impl AsRef<str>) -> Result<String, ProcessError> {
        self.validate_name(input)
            .map(|processed| processed.beautify())
    }

    pub fn is_normalizable(&self, input: impl AsRef<str>) -> bool {
        self.validate_name(input).is_ok()
    }

    /// Every place tokenization rewrote `input` on its way through the
    /// pipeline: mapped code points, dropped ignorables, NFC recompositions,
    /// and emoji that gained their FE0F selectors. Does not itself validate
    /// labels, so it can be called on inputs that will ultimately fail.
    pub fn normalizations(&self, input: impl AsRef<str>) -> Vec<NormalizableSequence> {
        collect_normalizations(&self.tokenize(input))
    }

    /// Runs any subset of normalize/beautify/tokenize/normalizations/cure
    /// requested by `flags` in one pass, capturing a failure into
    /// [`ProcessOutput::error`] instead of raising.
    pub fn process(&self, input: impl AsRef<str>, flags: ProcessFlags) -> ProcessOutput {
        let input = input.as_ref();
        let tokens = flags.want_tokens.then(|| self.tokenize(input));
        let normalizations = flags
            .want_normalizations
            .then(|| self.normalizations(input));

        let processed = if flags.want_normalized || flags.want_beautified {
            Some(self.validate_name(input))
        } else {
            None
        };

        let mut error = None;
        let normalized = processed.as_ref().and_then(|r| match r {
            Ok(p) if flags.want_normalized => Some(p.normalize()),
            Ok(_) => None,
            Err(e) => {
                error.get_or_insert_with(|| e.clone());
                None
            }
        });
        let beautified = processed.as_ref().and_then(|r| match r {
            Ok(p) if flags.want_beautified => Some(p.beautify()),
            _ => None,
        });

        let (cured, cures) = if flags.want_cured {
            match self.cure_with_log(input) {
                Ok((cured, cures)) => (Some(cured), Some(cures)),
                Err(e) => {
                    error.get_or_insert(e);
                    (None, None)
                }
            }
        } else {
            (None, None)
        };

        ProcessOutput {
            normalized,
            beautified,
            tokens,
            normalizations,
            cured,
            cures,
            error,
        }
    }
}

impl ProcessedName {
    pub fn normalize(&self) -> String {
        join_labels(&self.labels)
    }

    pub fn beautify(&self) -> String {
        beautify_labels(&self.labels)
    }
}

/// Which parts of [`EnsNameNormalizer::process`]'s output the caller wants
/// computed. Unset fields are simply omitted from [`ProcessOutput`] rather
/// than computed and discarded.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ProcessFlags {
    pub want_normalized: bool,
    pub want_beautified: bool,
    pub want_tokens: bool,
    pub want_normalizations: bool,
    pub want_cured: bool,
}

impl ProcessFlags {
    pub fn all() -> Self {
        Self {
            want_normalized: true,
            want_beautified: true,
            want_tokens: true,
            want_normalizations: true,
            want_cured: true,
        }
    }
}

/// Output of [`EnsNameNormalizer::process`]: each field is populated iff the
/// corresponding [`ProcessFlags`] flag was set and that computation
/// succeeded; `error` carries whatever the first requested, failing
/// computation raised.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProcessOutput {
    pub normalized: Option<String>,
    pub beautified: Option<String>,
    pub tokens: Option<TokenizedName>,
    pub normalizations: Option<Vec<NormalizableSequence>>,
    pub cured: Option<String>,
    pub cures: Option<Vec<crate::cure::CuredSequence>>,
    pub error: Option<ProcessError>,
}

pub fn tokenize(input: impl AsRef<str>) -> TokenizedName {
    EnsNameNormalizer::default().tokenize(input)
}

pub fn validate_name(input: impl AsRef<str>) -> Result<ProcessedName, ProcessError> {
    EnsNameNormalizer::default().validate_name(input)
}

pub fn normalize(input: impl AsRef<str>) -> Result<String, ProcessError> {
    EnsNameNormalizer::default().normalize(input)
}

pub fn beautify(input: impl AsRef<str>) -> Result<String, ProcessError> {
    EnsNameNormalizer::default().beautify(input)
}

pub fn is_normalizable(input: impl AsRef<str>) -> bool {
    EnsNameNormalizer::default().is_normalizable(input)
}

pub fn normalizations(input: impl AsRef<str>) -> Vec<NormalizableSequence> {
    EnsNameNormalizer::default().normalizations(input)
}

pub fn process(input: impl AsRef<str>, flags: ProcessFlags) -> ProcessOutput {
    EnsNameNormalizer::default().process(input, flags)
}
