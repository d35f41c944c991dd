//! Rule-based segmentation shared across language implementations.
//!
//! Each language supplies its abbreviation list and a base-form rule; the
//! chunking, punctuation splitting, and sentence boundary detection here are
//! the same for all of them.

use crate::config::ParserConfig;
use crate::parser::{Parse, Sentence, Token, TokenKind};

/// Characters that end a sentence.
const SENTENCE_TERMINATORS: &[char] = &['.', '!', '?', '…'];

/// Punctuation peeled off a chunk before looking it up as an abbreviation.
const TRAILING_NON_TERMINATORS: &[char] = &[
    ',', ';', ':', ')', ']', '}', '"', '\'', '»', '«', '“', '”', '’',
];

/// Language-specific rules plugged into [`segment`].
pub(crate) struct Rules<'a> {
    /// Tokens kept whole despite their trailing period.
    ///
    /// Entries containing an uppercase letter (`Dr.`) match exactly; all-lowercase
    /// entries (`e.g.`) also match any capitalisation of themselves.
    pub abbreviations: &'a [&'a str],
    /// Base form of a word; `sentence_initial` is true for the first word of a sentence
    pub base_form: fn(word: &str, sentence_initial: bool) -> String,
}

/// Split `text` into sentences of tokens and attach base forms when enabled.
///
/// A sentence ends after a terminator unless the next token touches the
/// previous one (closing quotes, `example.com`) or an ellipsis is followed by
/// a lowercase word.
pub(crate) fn segment(
    language: &str,
    config: ParserConfig,
    text: &str,
    rules: &Rules<'_>,
) -> Parse {
    let mut tokens = Vec::new();
    for (offset, chunk) in chunks(text) {
        split_chunk(offset, chunk, rules.abbreviations, &mut tokens);
    }

    let mut sentences = Vec::new();
    let mut current: Vec<Token> = Vec::new();
    let mut ended = false;
    let mut ellipsis = false;
    for token in tokens {
        let attached = current.last().is_some_and(|last| last.end == token.start);
        let continues = attached || (ellipsis && starts_lowercase(&token));
        if ended && !continues {
            sentences.push(finish(text, std::mem::take(&mut current)));
            ended = false;
        }
        if is_terminator(&token) {
            ended = true;
            ellipsis = is_ellipsis(&token);
        } else if token.kind != TokenKind::Punctuation {
            ended = false;
        }
        current.push(token);
    }
    if !current.is_empty() {
        sentences.push(finish(text, current));
    }

    if config.lemmas {
        for sentence in &mut sentences {
            let mut sentence_initial = true;
            for token in &mut sentence.tokens {
                token.lemma = match token.kind {
                    TokenKind::Word => Some((rules.base_form)(&token.text, sentence_initial)),
                    TokenKind::Number => Some(token.text.clone()),
                    TokenKind::Punctuation => continue,
                };
                sentence_initial = false;
            }
        }
    }

    Parse {
        language: language.to_string(),
        config,
        sentences,
    }
}

/// Whitespace-delimited chunks with their byte offsets.
fn chunks(text: &str) -> Vec<(usize, &str)> {
    let mut chunks = Vec::new();
    let mut start = None;
    for (i, c) in text.char_indices() {
        if c.is_whitespace() {
            if let Some(s) = start.take() {
                chunks.push((s, &text[s..i]));
            }
        } else if start.is_none() {
            start = Some(i);
        }
    }
    if let Some(s) = start {
        chunks.push((s, &text[s..]));
    }
    chunks
}

fn split_chunk(offset: usize, chunk: &str, abbreviations: &[&str], out: &mut Vec<Token>) {
    let body = chunk.trim_end_matches(TRAILING_NON_TERMINATORS);
    if !body.is_empty() && is_abbreviation(body, abbreviations) {
        out.push(make_token(offset, body, TokenKind::Word));
        push_punctuation(offset + body.len(), &chunk[body.len()..], out);
        return;
    }

    let Some(core_start) = chunk.find(char::is_alphanumeric) else {
        // Pure punctuation such as "--" or "...".
        out.push(make_token(offset, chunk, TokenKind::Punctuation));
        return;
    };
    let core_end = chunk
        .char_indices()
        .rev()
        .find(|(_, c)| c.is_alphanumeric())
        .map_or(chunk.len(), |(i, c)| i + c.len_utf8());

    push_punctuation(offset, &chunk[..core_start], out);
    let core = &chunk[core_start..core_end];
    out.push(make_token(offset + core_start, core, classify(core)));
    push_punctuation(offset + core_end, &chunk[core_end..], out);
}

fn is_abbreviation(candidate: &str, abbreviations: &[&str]) -> bool {
    abbreviations.iter().any(|entry| {
        if entry.chars().any(char::is_uppercase) {
            *entry == candidate
        } else {
            candidate.to_lowercase() == *entry
        }
    })
}

/// Push one token per run of identical punctuation characters (`...`, `!!`).
fn push_punctuation(offset: usize, run: &str, out: &mut Vec<Token>) {
    let mut chars = run.char_indices().peekable();
    while let Some((i, c)) = chars.next() {
        let mut end = i + c.len_utf8();
        while let Some((j, d)) = chars.next_if(|&(_, d)| d == c) {
            end = j + d.len_utf8();
        }
        out.push(make_token(offset + i, &run[i..end], TokenKind::Punctuation));
    }
}

fn classify(core: &str) -> TokenKind {
    let numeric = core.chars().next().is_some_and(|c| c.is_ascii_digit())
        && core.chars().all(|c| c.is_ascii_digit() || matches!(c, '.' | ',' | ':'));
    if numeric {
        TokenKind::Number
    } else {
        TokenKind::Word
    }
}

fn make_token(start: usize, text: &str, kind: TokenKind) -> Token {
    Token {
        text: text.to_string(),
        kind,
        start,
        end: start + text.len(),
        lemma: None,
    }
}

fn is_terminator(token: &Token) -> bool {
    token.kind == TokenKind::Punctuation
        && token.text.chars().any(|c| SENTENCE_TERMINATORS.contains(&c))
}

fn is_ellipsis(token: &Token) -> bool {
    token.text != "." && token.text.chars().all(|c| c == '.' || c == '…')
}

fn starts_lowercase(token: &Token) -> bool {
    token.text.chars().next().is_some_and(char::is_lowercase)
}

fn finish(text: &str, tokens: Vec<Token>) -> Sentence {
    let start = tokens.first().map_or(0, |t| t.start);
    let end = tokens.last().map_or(start, |t| t.end);
    Sentence {
        text: text[start..end].to_string(),
        tokens,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lowercase(word: &str, _sentence_initial: bool) -> String {
        word.to_lowercase()
    }

    const RULES: Rules<'static> = Rules {
        abbreviations: &["e.g.", "Dr.", "No."],
        base_form: lowercase,
    };

    fn texts(sentence: &Sentence) -> Vec<&str> {
        sentence.tokens.iter().map(|t| t.text.as_str()).collect()
    }

    #[test]
    fn empty_and_blank_text_yield_no_sentences() {
        assert!(segment("xx", ParserConfig::default(), "", &RULES).sentences.is_empty());
        assert!(segment("xx", ParserConfig::default(), " \n\t ", &RULES).sentences.is_empty());
    }

    #[test]
    fn punctuation_is_split_from_words() {
        let parse = segment("xx", ParserConfig::default(), "(Hello), world!", &RULES);

        assert_eq!(parse.sentences.len(), 1);
        assert_eq!(texts(&parse.sentences[0]), ["(", "Hello", ")", ",", "world", "!"]);
    }

    #[test]
    fn offsets_point_into_source_text() {
        let text = "  Grüße, Welt.";
        let parse = segment("xx", ParserConfig::default(), text, &RULES);

        for token in parse.tokens() {
            assert_eq!(&text[token.start..token.end], token.text);
        }
    }

    #[test]
    fn sentences_split_after_terminators() {
        let parse = segment("xx", ParserConfig::default(), "One. Two? Three!", &RULES);

        let sentences: Vec<&str> = parse.sentences.iter().map(|s| s.text.as_str()).collect();
        assert_eq!(sentences, ["One.", "Two?", "Three!"]);
    }

    #[test]
    fn abbreviations_do_not_end_sentences() {
        let parse = segment("xx", ParserConfig::default(), "Ask Dr. Who, e.g. today.", &RULES);

        assert_eq!(parse.sentences.len(), 1);
        assert!(texts(&parse.sentences[0]).contains(&"Dr."));
        assert!(texts(&parse.sentences[0]).contains(&"e.g."));
    }

    #[test]
    fn closing_quote_stays_with_ending_sentence() {
        let parse = segment("xx", ParserConfig::default(), "He said \"stop.\" Then left.", &RULES);

        assert_eq!(parse.sentences.len(), 2);
        assert_eq!(parse.sentences[0].text, "He said \"stop.\"");
        assert_eq!(parse.sentences[1].text, "Then left.");
    }

    #[test]
    fn opening_quote_after_space_starts_new_sentence() {
        let parse = segment("xx", ParserConfig::default(), "Stop. \"Why?\"", &RULES);

        assert_eq!(parse.sentences.len(), 2);
        assert_eq!(parse.sentences[0].text, "Stop.");
        assert_eq!(parse.sentences[1].text, "\"Why?\"");
    }

    #[test]
    fn numbers_keep_internal_separators() {
        let parse = segment("xx", ParserConfig::default(), "Pi is 3.14 and 1,000 more", &RULES);

        let numbers: Vec<&str> = parse
            .tokens()
            .filter(|t| t.kind == TokenKind::Number)
            .map(|t| t.text.as_str())
            .collect();
        assert_eq!(numbers, ["3.14", "1,000"]);
    }

    #[test]
    fn lemmas_only_attached_when_enabled() {
        let off = segment("xx", ParserConfig::default(), "Big Dogs.", &RULES);
        assert!(off.tokens().all(|t| t.lemma.is_none()));

        let on = segment("xx", ParserConfig::new(true, false), "Big Dogs.", &RULES);
        let lemmas: Vec<Option<&str>> = on.tokens().map(|t| t.lemma.as_deref()).collect();
        assert_eq!(lemmas, [Some("big"), Some("dogs"), None]);
    }

    #[test]
    fn pure_punctuation_chunk_is_one_token() {
        let parse = segment("xx", ParserConfig::default(), "wait ... what", &RULES);

        let tokens: Vec<&str> = parse.tokens().map(|t| t.text.as_str()).collect();
        assert_eq!(tokens, ["wait", "...", "what"]);
        assert_eq!(parse.sentences.len(), 1);
    }

    #[test]
    fn ellipsis_before_capitalised_word_ends_sentence() {
        let parse = segment("xx", ParserConfig::default(), "Wait... What now?", &RULES);

        let sentences: Vec<&str> = parse.sentences.iter().map(|s| s.text.as_str()).collect();
        assert_eq!(sentences, ["Wait...", "What now?"]);
        assert_eq!(texts(&parse.sentences[0]), ["Wait", "..."]);
    }

    #[test]
    fn titlecase_abbreviation_matches_exactly() {
        let parse = segment("xx", ParserConfig::default(), "I said no. He left.", &RULES);

        let sentences: Vec<&str> = parse.sentences.iter().map(|s| s.text.as_str()).collect();
        assert_eq!(sentences, ["I said no.", "He left."]);
    }

    #[test]
    fn lowercase_abbreviation_matches_any_case() {
        let parse = segment("xx", ParserConfig::default(), "E.g. this one. Done.", &RULES);

        assert_eq!(parse.sentences.len(), 2);
        assert_eq!(parse.sentences[0].tokens[0].text, "E.g.");
    }

    #[test]
    fn abbreviation_followed_by_comma_stays_whole() {
        let parse = segment("xx", ParserConfig::default(), "Ask Dr., then go.", &RULES);

        assert_eq!(parse.sentences.len(), 1);
        assert_eq!(texts(&parse.sentences[0]), ["Ask", "Dr.", ",", "then", "go", "."]);
    }

    #[test]
    fn attached_token_never_starts_sentence() {
        let parse = segment("xx", ParserConfig::default(), "Visit example.com today. Bye.", &RULES);

        let sentences: Vec<&str> = parse.sentences.iter().map(|s| s.text.as_str()).collect();
        assert_eq!(sentences, ["Visit example.com today.", "Bye."]);
    }
}
