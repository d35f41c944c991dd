//! Mapping from language identifiers to parser constructors.
//!
//! Dispatch is a lookup rather than a chain of comparisons, so a language is
//! added by registering a constructor. Identifiers are matched exactly:
//! `"EN"` does not find the `"en"` parser.

use std::collections::BTreeMap;
use std::fmt;
use std::sync::LazyLock;

use tracing::{debug, warn};

use crate::config::{ParserConfig, ParserRequest};
use crate::error::{Error, Result};
use crate::languages;
use crate::parser::Parser;

/// Builds a parser from its configuration.
pub type ParserConstructor = Box<dyn Fn(ParserConfig) -> Box<dyn Parser> + Send + Sync>;

static BUILTIN: LazyLock<ParserRegistry> = LazyLock::new(ParserRegistry::with_builtin);

/// A set of parser constructors keyed by language identifier.
pub struct ParserRegistry {
    constructors: BTreeMap<String, ParserConstructor>,
}

impl ParserRegistry {
    /// Create an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self {
            constructors: BTreeMap::new(),
        }
    }

    /// Create a registry holding every language shipped with this crate.
    #[must_use]
    pub fn with_builtin() -> Self {
        let mut registry = Self::new();
        languages::register_builtin(&mut registry);
        registry
    }

    /// The process-wide registry of built-in languages.
    ///
    /// Initialised on first use and never modified afterwards.
    #[must_use]
    pub fn builtin() -> &'static Self {
        &BUILTIN
    }

    /// Register `constructor` under `language`.
    ///
    /// Returns `true` if an existing registration was replaced.
    pub fn register<F>(&mut self, language: impl Into<String>, constructor: F) -> bool
    where
        F: Fn(ParserConfig) -> Box<dyn Parser> + Send + Sync + 'static,
    {
        let language = language.into();
        let replaced = self
            .constructors
            .insert(language.clone(), Box::new(constructor))
            .is_some();
        if replaced {
            warn!(language = %language, "Replaced existing parser registration");
        }
        replaced
    }

    /// Whether a parser is registered for `language`.
    #[must_use]
    pub fn contains(&self, language: &str) -> bool {
        self.constructors.contains_key(language)
    }

    /// Registered identifiers in sorted order.
    pub fn languages(&self) -> impl Iterator<Item = &str> {
        self.constructors.keys().map(String::as_str)
    }

    /// Construct the parser registered for `language`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnsupportedLanguage`] if nothing is registered under
    /// `language`. No parser is constructed in that case.
    pub fn create(&self, language: &str, config: ParserConfig) -> Result<Box<dyn Parser>> {
        let Some(constructor) = self.constructors.get(language) else {
            return Err(Error::unsupported_language(language, self.languages()));
        };
        debug!(
            language,
            lemmas = config.lemmas,
            resolve_corefs = config.resolve_corefs,
            "Creating parser"
        );
        Ok(constructor(config))
    }

    /// Construct the parser described by `request`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnsupportedLanguage`] if the requested language is not
    /// registered.
    pub fn create_from_request(&self, request: &ParserRequest) -> Result<Box<dyn Parser>> {
        self.create(&request.language, request.config)
    }
}

impl Default for ParserRegistry {
    fn default() -> Self {
        Self::with_builtin()
    }
}

impl fmt::Debug for ParserRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ParserRegistry")
            .field("languages", &self.languages().collect::<Vec<_>>())
            .finish()
    }
}

/// Create a parser for `language` from the built-in registry.
///
/// # Errors
///
/// Returns [`Error::UnsupportedLanguage`] for identifiers other than the
/// built-in ones (`"de"`, `"en"`).
pub fn create_parser(language: &str, config: ParserConfig) -> Result<Box<dyn Parser>> {
    ParserRegistry::builtin().create(language, config)
}

/// Create the parser described by `request` from the built-in registry.
///
/// # Errors
///
/// Returns [`Error::UnsupportedLanguage`] if the requested language is not
/// built in.
pub fn create_parser_from_request(request: &ParserRequest) -> Result<Box<dyn Parser>> {
    ParserRegistry::builtin().create_from_request(request)
}
