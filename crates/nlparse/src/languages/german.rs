//! German parser.
//!
//! German capitalises nouns, so base forms keep the capital letter of any
//! word that is capitalised away from the start of a sentence.

use tracing::debug;

use super::common::{self, Rules};
use crate::config::ParserConfig;
use crate::error::Result;
use crate::parser::{Parse, Parser};

/// Registry identifier for German.
pub const LANGUAGE: &str = "de";

const ABBREVIATIONS: &[&str] = &[
    "z.B.", "z.T.", "d.h.", "u.a.", "o.ä.", "bzw.", "usw.", "ca.", "vgl.", "etc.", "evtl.",
    "ggf.", "Nr.", "Dr.", "Prof.", "Hr.", "Fr.", "Str.", "S.", "bspw.",
];

const RULES: Rules<'static> = Rules {
    abbreviations: ABBREVIATIONS,
    base_form,
};

fn base_form(word: &str, sentence_initial: bool) -> String {
    let capitalised = word.chars().next().is_some_and(char::is_uppercase);
    if capitalised && !sentence_initial {
        word.to_string()
    } else {
        word.to_lowercase()
    }
}

/// Parser for German text.
#[derive(Debug, Clone)]
pub struct GermanParser {
    config: ParserConfig,
}

impl GermanParser {
    /// Create a German parser with the given switches.
    #[must_use]
    pub fn new(config: ParserConfig) -> Self {
        Self { config }
    }
}

impl Parser for GermanParser {
    fn language(&self) -> &str {
        LANGUAGE
    }

    fn name(&self) -> &str {
        "German"
    }

    fn config(&self) -> ParserConfig {
        self.config
    }

    fn parse(&self, text: &str) -> Result<Parse> {
        let parse = common::segment(LANGUAGE, self.config, text, &RULES);
        debug!(
            language = LANGUAGE,
            sentences = parse.sentences.len(),
            tokens = parse.token_count(),
            "Parsed text"
        );
        Ok(parse)
    }
}
