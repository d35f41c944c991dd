//! English parser.

use tracing::debug;

use super::common::{self, Rules};
use crate::config::ParserConfig;
use crate::error::Result;
use crate::parser::{Parse, Parser};

/// Registry identifier for English.
pub const LANGUAGE: &str = "en";

// "No." and "Co." are left out: "no." and "co." end sentences too often.
const ABBREVIATIONS: &[&str] = &[
    "Mr.", "Mrs.", "Ms.", "Dr.", "Prof.", "St.", "Jr.", "Sr.", "vs.", "etc.", "e.g.", "i.e.",
    "a.m.", "p.m.", "U.S.", "U.K.", "Inc.", "Ltd.",
];

const RULES: Rules<'static> = Rules {
    abbreviations: ABBREVIATIONS,
    base_form,
};

fn base_form(word: &str, _sentence_initial: bool) -> String {
    word.to_lowercase()
}

/// Parser for English text.
#[derive(Debug, Clone)]
pub struct EnglishParser {
    config: ParserConfig,
}

impl EnglishParser {
    /// Create an English parser with the given switches.
    #[must_use]
    pub fn new(config: ParserConfig) -> Self {
        Self { config }
    }
}

impl Parser for EnglishParser {
    fn language(&self) -> &str {
        LANGUAGE
    }

    fn name(&self) -> &str {
        "English"
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

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[test]
    fn reports_identity_and_config() {
        let parser = EnglishParser::new(ParserConfig::new(true, false));

        assert_eq!(parser.language(), "en");
        assert_eq!(parser.name(), "English");
        assert_eq!(parser.config(), ParserConfig::new(true, false));
    }

    #[test]
    fn titles_do_not_split_sentences() {
        let parser = EnglishParser::new(ParserConfig::default());

        let parse = parser
            .parse("Mr. Smith met Dr. Jones at 9 a.m. today. They talked.")
            .expect("parse should succeed");

        assert_eq!(parse.sentences.len(), 2);
        assert_eq!(parse.sentences[1].text, "They talked.");
    }

    #[rstest]
    #[case::no("I said no. He left.", &["I said no.", "He left."])]
    #[case::co("We met the co. Then we left.", &["We met the co.", "Then we left."])]
    #[case::title_after_comma("Ask Dr., then go.", &["Ask Dr., then go."])]
    fn ordinary_words_still_end_sentences(#[case] text: &str, #[case] expected: &[&str]) {
        let parser = EnglishParser::new(ParserConfig::default());

        let parse = parser.parse(text).expect("parse should succeed");

        let sentences: Vec<&str> = parse.sentences.iter().map(|s| s.text.as_str()).collect();
        assert_eq!(sentences, expected);
    }

    #[test]
    fn lemmas_are_lowercase_forms() {
        let parser = EnglishParser::new(ParserConfig::new(true, false));

        let parse = parser.parse("The Cat sat.").expect("parse should succeed");

        let lemmas: Vec<_> = parse.tokens().filter_map(|t| t.lemma.as_deref()).collect();
        assert_eq!(lemmas, ["the", "cat", "sat"]);
    }

    #[test]
    fn parse_output_carries_parser_config() {
        let parser = EnglishParser::new(ParserConfig::new(false, true));

        let parse = parser.parse("Hi.").expect("parse should succeed");

        assert_eq!(parse.language, "en");
        assert_eq!(parse.config, ParserConfig::new(false, true));
    }
}
