//! Language-specific parsers.
//!
//! Each supported language implements the [`Parser`](crate::Parser) trait and
//! is registered with the built-in registry under its identifier.
//!
//! ## Adding a New Language
//!
//! 1. Create a new module (e.g., `french.rs`) with its abbreviation list and
//!    base-form rule
//! 2. Implement `Parser` on a struct constructed from `ParserConfig`
//! 3. Add it to `register_builtin()`
//!
//! Languages living outside this crate can instead be added at runtime with
//! [`ParserRegistry::register`](crate::ParserRegistry::register).

mod common;
pub mod english;
pub mod german;

pub use english::EnglishParser;
pub use german::GermanParser;

use crate::registry::ParserRegistry;

/// Register every language shipped with this crate.
pub(crate) fn register_builtin(registry: &mut ParserRegistry) {
    registry.register(english::LANGUAGE, |config| Box::new(EnglishParser::new(config)));
    registry.register(german::LANGUAGE, |config| Box::new(GermanParser::new(config)));
}
