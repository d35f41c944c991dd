//! `nlparse languages` command implementation.

use nlparse::{Parser, ParserConfig, ParserRegistry};

/// Run the languages command.
pub fn run() {
    let registry = ParserRegistry::builtin();
    for language in registry.languages() {
        match registry.create(language, ParserConfig::default()) {
            Ok(parser) => println!("{language}\t{}", parser.name()),
            Err(e) => tracing::warn!(language, error = %e, "Failed to construct registered parser"),
        }
    }
}
