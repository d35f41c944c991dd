//! The parser capability and its output model.
//!
//! Every language implementation satisfies [`Parser`]. Callers receive a
//! `Box<dyn Parser>` from the registry and never need to know the concrete
//! type behind it.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::config::ParserConfig;
use crate::error::Result;

/// A language-specific natural-language parser.
pub trait Parser: Send + Sync {
    /// Identifier this parser is registered under (e.g. `"en"`).
    fn language(&self) -> &str;

    /// Human-readable language name (e.g. `"English"`).
    fn name(&self) -> &str;

    /// Configuration the parser was constructed with.
    fn config(&self) -> ParserConfig;

    /// Analyze `text` into sentences and tokens.
    ///
    /// # Errors
    ///
    /// Implementations backed by external models may fail; the built-in
    /// parsers never do.
    fn parse(&self, text: &str) -> Result<Parse>;
}

impl fmt::Debug for dyn Parser {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Parser")
            .field("language", &self.language())
            .field("config", &self.config())
            .finish()
    }
}

/// Category of a token.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TokenKind {
    /// Alphabetic or mixed word
    Word,
    /// Numeral, possibly with internal separators (`3.14`, `1,000`)
    Number,
    /// Punctuation or symbol
    Punctuation,
}

/// A single token with byte offsets into the parsed text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Token {
    /// Surface form
    pub text: String,
    /// Token category
    pub kind: TokenKind,
    /// Byte offset of the first character
    pub start: usize,
    /// Byte offset one past the last character
    pub end: usize,
    /// Base form, present only when lemma generation is enabled
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub lemma: Option<String>,
}

/// A sentence: its source text and tokens.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Sentence {
    /// Source text from the first token to the last
    pub text: String,
    /// Tokens in order of appearance
    pub tokens: Vec<Token>,
}

/// Result of parsing a text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Parse {
    /// Identifier of the parser that produced this result
    pub language: String,
    /// Configuration the parser ran with
    pub config: ParserConfig,
    /// Sentences in order of appearance
    pub sentences: Vec<Sentence>,
}

impl Parse {
    /// Total number of tokens across all sentences.
    #[must_use]
    pub fn token_count(&self) -> usize {
        self.sentences.iter().map(|s| s.tokens.len()).sum()
    }

    /// Iterate over all tokens in document order.
    pub fn tokens(&self) -> impl Iterator<Item = &Token> {
        self.sentences.iter().flat_map(|s| s.tokens.iter())
    }
}

/// Renders the parse as an indented tree, one block per sentence.
///
/// ```text
/// [en] lemmas=true resolve_corefs=false
/// sentence 1: Cats sleep.
///   word         Cats  (cats)
///   word         sleep  (sleep)
///   punctuation  .
/// ```
impl fmt::Display for Parse {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "[{}] lemmas={} resolve_corefs={}",
            self.language, self.config.lemmas, self.config.resolve_corefs
        )?;
        for (index, sentence) in self.sentences.iter().enumerate() {
            writeln!(f, "sentence {}: {}", index + 1, sentence.text)?;
            for token in &sentence.tokens {
                let kind = match token.kind {
                    TokenKind::Word => "word",
                    TokenKind::Number => "number",
                    TokenKind::Punctuation => "punctuation",
                };
                match &token.lemma {
                    Some(lemma) => writeln!(f, "  {kind:<12} {}  ({lemma})", token.text)?,
                    None => writeln!(f, "  {kind:<12} {}", token.text)?,
                }
            }
        }
        Ok(())
    }
}
