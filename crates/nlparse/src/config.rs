//! Parser configuration and requests.
//!
//! A [`ParserRequest`] names a language and carries the two switches every
//! parser accepts. Requests can be built in code or loaded from YAML:
//!
//! ```yaml
//! language: de
//! lemmas: true
//! resolve_corefs: false
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Switches forwarded verbatim to a parser constructor.
///
/// The two flags are independent; no combination is rejected.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default)]
pub struct ParserConfig {
    /// Generate lemma (base form) annotations for tokens.
    pub lemmas: bool,
    /// Perform coreference resolution.
    pub resolve_corefs: bool,
}

impl ParserConfig {
    /// Create a configuration with both switches set explicitly.
    #[must_use]
    pub fn new(lemmas: bool, resolve_corefs: bool) -> Self {
        Self {
            lemmas,
            resolve_corefs,
        }
    }

    /// Return a copy with lemma generation set.
    #[must_use]
    pub fn with_lemmas(mut self, lemmas: bool) -> Self {
        self.lemmas = lemmas;
        self
    }

    /// Return a copy with coreference resolution set.
    #[must_use]
    pub fn with_resolve_corefs(mut self, resolve_corefs: bool) -> Self {
        self.resolve_corefs = resolve_corefs;
        self
    }
}

/// A request for a parser: the language identifier plus its configuration.
///
/// Decoding rejects unknown keys, so a misspelt flag is an error rather than
/// a silently disabled switch.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "RequestFields")]
pub struct ParserRequest {
    /// Language identifier, matched exactly against the registry (e.g. `"en"`).
    pub language: String,
    /// Flags for the parser constructor.
    #[serde(flatten)]
    pub config: ParserConfig,
}

/// Flat on-disk shape of a [`ParserRequest`].
#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
struct RequestFields {
    language: String,
    #[serde(default)]
    lemmas: bool,
    #[serde(default)]
    resolve_corefs: bool,
}

impl From<RequestFields> for ParserRequest {
    fn from(fields: RequestFields) -> Self {
        Self {
            language: fields.language,
            config: ParserConfig::new(fields.lemmas, fields.resolve_corefs),
        }
    }
}

impl ParserRequest {
    /// Create a request with default flags.
    #[must_use]
    pub fn new(language: impl Into<String>) -> Self {
        Self {
            language: language.into(),
            config: ParserConfig::default(),
        }
    }

    /// Return a copy with the given configuration.
    #[must_use]
    pub fn with_config(mut self, config: ParserConfig) -> Self {
        self.config = config;
        self
    }

    /// Decode a request from YAML text.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Config`] if the YAML is malformed or lacks `language`.
    pub fn from_yaml_str(yaml: &str) -> Result<Self> {
        Self::decode(yaml, Path::new("<inline>"))
    }

    /// Load a request from a YAML file.
    ///
    /// # Errors
    ///
    /// - [`Error::Io`] if the file cannot be read
    /// - [`Error::Config`] if its contents are not a valid request
    pub fn load(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        Self::decode(&contents, path)
    }

    fn decode(yaml: &str, source: &Path) -> Result<Self> {
        serde_yaml::from_str(yaml).map_err(|e| Error::Config {
            path: source.to_path_buf(),
            message: e.to_string(),
        })
    }
}
