//! # nlparse: language-keyed natural-language parsers
//!
//! `nlparse` hands out a parser for a language identifier. Every parser
//! implements the same [`Parser`] trait and is constructed with two
//! independent switches: lemma generation and coreference resolution.
//!
//! ## Quick Start
//!
//! ```
//! use nlparse::{Parser, ParserConfig, create_parser};
//!
//! let parser = create_parser("en", ParserConfig::default().with_lemmas(true))?;
//! assert_eq!(parser.language(), "en");
//!
//! let parse = parser.parse("The cat sat. It slept.")?;
//! assert_eq!(parse.sentences.len(), 2);
//!
//! // Identifiers are matched exactly.
//! assert!(create_parser("EN", ParserConfig::default()).is_err());
//! # Ok::<(), nlparse::Error>(())
//! ```
//!
//! ## Extending
//!
//! Languages beyond the built-in ones (`"en"`, `"de"`) are added to a
//! [`ParserRegistry`] with [`ParserRegistry::register`].

mod config;
mod error;
pub mod languages;
mod parser;
mod registry;

pub use config::{ParserConfig, ParserRequest};
pub use error::{Error, Result};
pub use languages::{EnglishParser, GermanParser};
pub use parser::{Parse, Parser, Sentence, Token, TokenKind};
pub use registry::{ParserConstructor, ParserRegistry, create_parser, create_parser_from_request};
