//! The scoring engine: one pass over a document's text producing the full
//! [`MetricsRecord`].
//!
//! `analyze` is a pure, total function: any input, including the empty
//! string, yields finite numbers. Every denominator carries a small epsilon
//! so degenerate documents degrade toward zero instead of dividing by zero.

use regex::Regex;

use crate::extract::Page;
use crate::lexicon::Lexicon;
use crate::metrics::MetricsRecord;
use crate::syllable::{count_syllables, is_complex};
use crate::tokenize::{remove_stop_words, sentences, words};

/// Added to every denominator so empty or degenerate input never divides by
/// zero.
const EPSILON: f64 = 1e-6;

/// Personal pronouns counted in the raw text. Matched case-insensitively,
/// but a match whose literal is exactly `US` is excluded so the country
/// abbreviation is not counted.
const PRONOUN_PATTERN: &str = r"(?i)\b(I|we|my|ours|us)\b";

/// Computes all 13 metrics for one document.
///
/// Stop-word removal applies only to the sentiment inputs (POSITIVE SCORE,
/// NEGATIVE SCORE, and through them POLARITY and SUBJECTIVITY, plus the
/// WORD COUNT field); every readability statistic runs on the raw token
/// sequence with stop words included. That asymmetry is part of the output
/// contract.
pub fn analyze(text: &str, lexicon: &Lexicon) -> MetricsRecord {
    let num_sentences = sentences(text).len() as f64;

    let words = words(text);
    let num_words_total = words.len() as f64;

    let cleaned_words = remove_stop_words(&words, &lexicon.stop_words);
    let num_cleaned_words = cleaned_words.len() as f64;

    let positive_score = cleaned_words.iter().filter(|w| lexicon.is_positive(w)).count() as u32;
    let negative_score = cleaned_words.iter().filter(|w| lexicon.is_negative(w)).count() as u32;
    let pos = f64::from(positive_score);
    let neg = f64::from(negative_score);

    let polarity_score = (pos - neg) / (pos + neg + EPSILON);
    let subjectivity_score = (pos + neg) / (num_cleaned_words + EPSILON);

    let avg_sentence_length = num_words_total / (num_sentences + EPSILON);

    let complex_word_count = words.iter().filter(|w| is_complex(w)).count() as u32;
    let pct_complex_words = f64::from(complex_word_count) / (num_words_total + EPSILON);

    let fog_index = 0.4 * (avg_sentence_length + pct_complex_words);

    let total_syllables: u32 = words.iter().map(|w| count_syllables(w)).sum();
    let syllables_per_word = f64::from(total_syllables) / (num_words_total + EPSILON);

    let total_chars: usize = words.iter().map(|w| w.chars().count()).sum();
    let avg_word_length = total_chars as f64 / (num_words_total + EPSILON);

    MetricsRecord {
        positive_score,
        negative_score,
        polarity_score,
        subjectivity_score,
        avg_sentence_length,
        pct_complex_words,
        fog_index,
        avg_words_per_sentence: avg_sentence_length,
        complex_word_count,
        word_count: cleaned_words.len() as u32,
        syllables_per_word,
        personal_pronouns: count_personal_pronouns(text),
        avg_word_length,
    }
}

/// Counts personal pronouns in the raw, untokenized text.
///
/// Runs on the original casing so the uppercase `US` exclusion can apply;
/// no other pronoun or casing is special-cased.
pub fn count_personal_pronouns(text: &str) -> u32 {
    let pattern = Regex::new(PRONOUN_PATTERN).unwrap();
    pattern.find_iter(text).filter(|m| m.as_str() != "US").count() as u32
}

/// Scores one fetched page, applying the substitution rule: a page with
/// neither title nor body gets the all-zero record without invoking the
/// engine.
pub fn score_page(page: &Page, lexicon: &Lexicon) -> MetricsRecord {
    match page.full_text() {
        Some(text) => analyze(&text, lexicon),
        None => MetricsRecord::zeroed(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    fn set(words: &[&str]) -> HashSet<String> {
        words.iter().map(|w| w.to_string()).collect()
    }

    fn test_lexicon() -> Lexicon {
        Lexicon::new(
            set(&["the", "a", "and", "of"]),
            set(&["happy", "bright", "calm"]),
            set(&["sad"]),
        )
    }

    #[test]
    fn test_empty_text_is_all_finite() {
        let record = analyze("", &test_lexicon());
        assert!(record.is_well_formed());
        assert_eq!(record.positive_score, 0);
        assert_eq!(record.word_count, 0);
        assert_eq!(record.polarity_score, 0.0);
        assert_eq!(record.fog_index, 0.0);
    }

    #[test]
    fn test_whitespace_only_text() {
        let record = analyze("   \n\t  ", &test_lexicon());
        assert!(record.is_well_formed());
        assert_eq!(record.avg_word_length, 0.0);
    }

    #[test]
    fn test_no_lexicon_hits_means_zero_sentiment() {
        let record = analyze("Plain neutral text with no scored vocabulary here.", &test_lexicon());
        assert_eq!(record.positive_score, 0);
        assert_eq!(record.negative_score, 0);
        assert_eq!(record.polarity_score, 0.0);
        assert_eq!(record.subjectivity_score, 0.0);
    }

    #[test]
    fn test_word_count_never_exceeds_total() {
        let record = analyze("The happy dog and the sad cat ran.", &test_lexicon());
        // 8 raw tokens, 3 of them stop words
        assert_eq!(record.word_count, 5);
        assert!((record.avg_word_length - 26.0 / (8.0 + 1e-6)).abs() < 1e-9);
    }

    #[test]
    fn test_full_formula_parity() {
        // 2 sentences, 10 raw tokens, 4 stop words, 3 positive hits, 1
        // negative hit, 2 complex words (beautiful, wonderful)
        let text = "The happy and a bright beautiful. Calm wonderful of sad.";
        let record = analyze(text, &test_lexicon());

        assert_eq!(record.positive_score, 3);
        assert_eq!(record.negative_score, 1);
        assert_eq!(record.word_count, 6);
        assert_eq!(record.complex_word_count, 2);

        assert!((record.polarity_score - (3.0 - 1.0) / (4.0 + 1e-6)).abs() < 1e-9);
        assert!((record.subjectivity_score - 4.0 / (6.0 + 1e-6)).abs() < 1e-9);
        assert!((record.avg_sentence_length - 10.0 / (2.0 + 1e-6)).abs() < 1e-9);
        assert!((record.pct_complex_words - 2.0 / (10.0 + 1e-6)).abs() < 1e-9);
        assert!((record.fog_index - 0.4 * (10.0 / (2.0 + 1e-6) + 2.0 / (10.0 + 1e-6))).abs() < 1e-9);
        assert_eq!(record.avg_words_per_sentence, record.avg_sentence_length);

        // syllables: the 1, happy 2, and 1, a 1, bright 1, beautiful 3,
        // calm 1, wonderful 3, of 1, sad 1 = 15 over 10 tokens
        assert!((record.syllables_per_word - 15.0 / (10.0 + 1e-6)).abs() < 1e-9);

        // chars: 3+5+3+1+6+9+4+9+2+3 = 45 over 10 tokens
        assert!((record.avg_word_length - 45.0 / (10.0 + 1e-6)).abs() < 1e-9);

        assert!((record.polarity_score - 0.4999998).abs() < 1e-4);
        assert!((record.fog_index - 2.08).abs() < 1e-3);
    }

    #[test]
    fn test_personal_pronouns_excludes_uppercase_us() {
        assert_eq!(count_personal_pronouns("I and we are with US and us"), 3);
        assert_eq!(count_personal_pronouns("The US signed it for us; US did."), 1);
        assert_eq!(count_personal_pronouns("My plan is ours, not theirs."), 2);
        assert_eq!(count_personal_pronouns("Business as usual."), 0);
        assert_eq!(count_personal_pronouns(""), 0);
    }

    #[test]
    fn test_pronouns_counted_from_raw_text_not_tokens() {
        // "US" survives only because the raw casing is visible; the token
        // stream would have lowercased it
        let record = analyze("We sold it in the US. It cost us plenty.", &test_lexicon());
        assert_eq!(record.personal_pronouns, 2); // We, us
    }

    #[test]
    fn test_idempotence() {
        let lexicon = test_lexicon();
        let text = "The happy and a bright beautiful. Calm wonderful of sad.";
        assert_eq!(analyze(text, &lexicon), analyze(text, &lexicon));
    }

    #[test]
    fn test_score_page_substitutes_zero_record() {
        let lexicon = test_lexicon();
        assert_eq!(score_page(&Page::empty(), &lexicon), MetricsRecord::zeroed());
    }

    #[test]
    fn test_score_page_concatenates_title_and_body() {
        let lexicon = test_lexicon();
        let page = Page { title: Some("A happy day".to_string()), body: Some("It was bright.".to_string()) };

        let record = score_page(&page, &lexicon);
        assert_eq!(record.positive_score, 2); // happy, bright
        // title paragraph plus one body sentence, 6 tokens in all
        assert_eq!(record.avg_sentence_length, 6.0 / (2.0 + 1e-6));
    }

    #[test]
    fn test_all_stop_words_document() {
        let record = analyze("The and of a the.", &test_lexicon());
        assert_eq!(record.word_count, 0);
        assert_eq!(record.subjectivity_score, 0.0);
        assert!(record.avg_word_length > 0.0); // raw tokens still counted
        assert!(record.is_well_formed());
    }
}
