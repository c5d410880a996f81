//! Sentence and word tokenization.
//!
//! Word tokens are the purely alphanumeric tokens of the text, lowercased;
//! tokens carrying punctuation (hyphens, apostrophes, symbols) are dropped
//! entirely. Stop-word removal is a separate step applied only to the
//! sentiment inputs: readability statistics always run on the raw token
//! sequence, stop words included.

use std::collections::HashSet;

use regex::Regex;

/// Tokens ending a run of text before a period that do not close a sentence.
const ABBREVIATIONS: &[&str] = &[
    "mr", "mrs", "ms", "dr", "prof", "rev", "sr", "jr", "st", "vs", "etc", "e.g", "i.e", "inc", "ltd", "co", "corp",
    "no", "fig", "al", "approx",
];

/// Splits text into sentences.
///
/// Paragraph breaks always end a sentence. Within a paragraph, a run of
/// `.`/`!`/`?` ends a sentence when it is followed by whitespace and the next
/// visible character starts a new sentence (uppercase, digit, or opening
/// quote), unless the period belongs to an abbreviation or an initial.
pub fn sentences(text: &str) -> Vec<String> {
    let paragraph_break = Regex::new(r"\n\s*\n").unwrap();
    let mut out = Vec::new();
    for paragraph in paragraph_break.split(text) {
        split_paragraph(paragraph, &mut out);
    }
    out
}

fn split_paragraph(paragraph: &str, out: &mut Vec<String>) {
    let chars: Vec<(usize, char)> = paragraph.char_indices().collect();
    let mut start = 0usize;
    let mut i = 0usize;

    while i < chars.len() {
        let (pos, c) = chars[i];
        if !matches!(c, '.' | '!' | '?') {
            i += 1;
            continue;
        }

        // consume the terminator run plus any closing quotes or brackets
        let mut j = i + 1;
        while j < chars.len() && matches!(chars[j].1, '.' | '!' | '?') {
            j += 1;
        }
        while j < chars.len() && matches!(chars[j].1, '"' | '\'' | '\u{201d}' | '\u{2019}' | ')' | ']') {
            j += 1;
        }

        let lone_period = c == '.' && j == i + 1;
        if lone_period && is_abbreviation(&paragraph[start..pos]) {
            i = j;
            continue;
        }

        let mut k = j;
        while k < chars.len() && chars[k].1.is_whitespace() {
            k += 1;
        }
        if k == j && j < chars.len() {
            // terminator embedded in a token, e.g. "3.14"
            i = j;
            continue;
        }
        if k >= chars.len() {
            push_sentence(out, &paragraph[start..]);
            return;
        }

        let next = chars[k].1;
        if next.is_uppercase() || next.is_ascii_digit() || matches!(next, '"' | '\'' | '\u{201c}' | '\u{2018}') {
            push_sentence(out, &paragraph[start..chars[j].0]);
            start = chars[k].0;
            i = k;
        } else {
            i = j;
        }
    }

    push_sentence(out, &paragraph[start..]);
}

fn push_sentence(out: &mut Vec<String>, raw: &str) {
    let sentence = raw.trim();
    if !sentence.is_empty() {
        out.push(sentence.to_string());
    }
}

/// Whether the text before a period ends in an abbreviation, an acronym
/// written with internal periods, or a single-letter initial.
fn is_abbreviation(preceding: &str) -> bool {
    let token: String = preceding
        .chars()
        .rev()
        .take_while(|c| c.is_ascii_alphabetic() || *c == '.')
        .collect::<String>()
        .chars()
        .rev()
        .collect();
    let token = token.trim_matches('.').to_lowercase();

    if token.is_empty() {
        return false;
    }
    token.chars().count() == 1 || token.contains('.') || ABBREVIATIONS.contains(&token.as_str())
}

/// Splits text into lowercased, purely alphanumeric word tokens.
///
/// Word-ish tokens (letters, digits, internal apostrophes or hyphens) are
/// found first, then any token containing a non-alphanumeric character is
/// dropped, mirroring a tokenize-then-isalnum filter.
pub fn words(text: &str) -> Vec<String> {
    let token_pattern = Regex::new(r"[\w'-]+").unwrap();
    token_pattern
        .find_iter(text)
        .map(|m| m.as_str())
        .filter(|token| !token.is_empty() && token.chars().all(char::is_alphanumeric))
        .map(str::to_lowercase)
        .collect()
}

/// Drops every token present in `stop_words`. Feeds the sentiment scores
/// and the WORD COUNT metric only; readability inputs keep stop words.
pub fn remove_stop_words<'a>(words: &'a [String], stop_words: &HashSet<String>) -> Vec<&'a str> {
    words
        .iter()
        .filter(|w| !stop_words.contains(w.as_str()))
        .map(String::as_str)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[test]
    fn test_sentences_basic() {
        let text = "The first sentence. The second one! Is this the third? Yes.";
        let sents = sentences(text);
        assert_eq!(sents.len(), 4);
        assert_eq!(sents[0], "The first sentence.");
        assert_eq!(sents[2], "Is this the third?");
    }

    #[test]
    fn test_sentences_abbreviations_do_not_split() {
        let text = "Mr. Smith met Dr. Jones at the clinic. They spoke briefly.";
        let sents = sentences(text);
        assert_eq!(sents.len(), 2);
        assert!(sents[0].starts_with("Mr. Smith"));
    }

    #[test]
    fn test_sentences_acronyms_do_not_split() {
        let text = "The U.S. economy grew last year. Analysts were surprised.";
        let sents = sentences(text);
        assert_eq!(sents.len(), 2);
    }

    #[test]
    fn test_sentences_initials_do_not_split() {
        let text = "J. R. Tolkien wrote slowly. He revised often.";
        assert_eq!(sentences(text).len(), 2);
    }

    #[test]
    fn test_sentences_decimal_numbers_do_not_split() {
        let text = "Growth hit 3.14 percent. Nobody expected that.";
        assert_eq!(sentences(text).len(), 2);
    }

    #[test]
    fn test_sentences_closing_quote_after_terminator() {
        let text = "\"It was over.\" Then silence fell.";
        let sents = sentences(text);
        assert_eq!(sents.len(), 2);
    }

    #[test]
    fn test_sentences_paragraph_break() {
        let text = "A headline without punctuation\n\nThe body starts here. It continues.";
        let sents = sentences(text);
        assert_eq!(sents.len(), 3);
        assert_eq!(sents[0], "A headline without punctuation");
    }

    #[test]
    fn test_sentences_empty_input() {
        assert!(sentences("").is_empty());
        assert!(sentences("   \n\n  ").is_empty());
    }

    #[test]
    fn test_words_lowercases_and_filters() {
        let tokens = words("Hello, World! It's a 2-in-1 deal for 100 people.");
        assert_eq!(tokens, vec!["hello", "world", "a", "deal", "for", "100", "people"]);
    }

    #[rstest]
    #[case("", 0)]
    #[case("one two three", 3)]
    #[case("--- ... !!!", 0)]
    #[case("well-known plan", 1)]
    #[case("don't stop", 1)]
    fn test_words_counts(#[case] text: &str, #[case] expected: usize) {
        assert_eq!(words(text).len(), expected);
    }

    #[test]
    fn test_remove_stop_words() {
        let tokens = words("the quick brown fox and the lazy dog");
        let stop_words: HashSet<String> = ["the", "and"].iter().map(|s| s.to_string()).collect();
        let cleaned = remove_stop_words(&tokens, &stop_words);

        assert_eq!(cleaned, vec!["quick", "brown", "fox", "lazy", "dog"]);
        assert!(cleaned.len() <= tokens.len());
    }

    #[test]
    fn test_remove_stop_words_empty_set() {
        let tokens = words("a few tokens");
        let cleaned = remove_stop_words(&tokens, &HashSet::new());
        assert_eq!(cleaned.len(), tokens.len());
    }
}
