//! The metrics record produced for every scored document.

use serde::Serialize;

/// The 13 metric column names, in the fixed output order.
///
/// Output rows append these columns, in this order, after the passthrough
/// input columns. The names are the legacy report headers and are kept
/// verbatim, including "WORD COUNT" naming the *stop-word-filtered* count.
pub const METRIC_COLUMNS: [&str; 13] = [
    "POSITIVE SCORE",
    "NEGATIVE SCORE",
    "POLARITY SCORE",
    "SUBJECTIVITY SCORE",
    "AVG SENTENCE LENGTH",
    "PERCENTAGE OF COMPLEX WORDS",
    "FOG INDEX",
    "AVG NUMBER OF WORDS PER SENTENCE",
    "COMPLEX WORD COUNT",
    "WORD COUNT",
    "SYLLABLE PER WORD",
    "PERSONAL PRONOUNS",
    "AVG WORD LENGTH",
];

/// Immutable value object holding the 13 computed metrics for one document.
///
/// Always fully populated: either computed from text, or all zeros when no
/// text was obtainable (the `Default` value). Counts are integers; every
/// ratio is a finite `f64` thanks to the epsilon-guarded denominators in
/// [`crate::analyze`].
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct MetricsRecord {
    #[serde(rename = "POSITIVE SCORE")]
    pub positive_score: u32,
    #[serde(rename = "NEGATIVE SCORE")]
    pub negative_score: u32,
    #[serde(rename = "POLARITY SCORE")]
    pub polarity_score: f64,
    #[serde(rename = "SUBJECTIVITY SCORE")]
    pub subjectivity_score: f64,
    #[serde(rename = "AVG SENTENCE LENGTH")]
    pub avg_sentence_length: f64,
    #[serde(rename = "PERCENTAGE OF COMPLEX WORDS")]
    pub pct_complex_words: f64,
    #[serde(rename = "FOG INDEX")]
    pub fog_index: f64,
    #[serde(rename = "AVG NUMBER OF WORDS PER SENTENCE")]
    pub avg_words_per_sentence: f64,
    #[serde(rename = "COMPLEX WORD COUNT")]
    pub complex_word_count: u32,
    #[serde(rename = "WORD COUNT")]
    pub word_count: u32,
    #[serde(rename = "SYLLABLE PER WORD")]
    pub syllables_per_word: f64,
    #[serde(rename = "PERSONAL PRONOUNS")]
    pub personal_pronouns: u32,
    #[serde(rename = "AVG WORD LENGTH")]
    pub avg_word_length: f64,
}

impl MetricsRecord {
    /// The all-zero record substituted when a document could not be fetched.
    pub fn zeroed() -> Self {
        Self::default()
    }

    /// Field values rendered as strings, in [`METRIC_COLUMNS`] order.
    pub fn column_values(&self) -> [String; 13] {
        [
            self.positive_score.to_string(),
            self.negative_score.to_string(),
            self.polarity_score.to_string(),
            self.subjectivity_score.to_string(),
            self.avg_sentence_length.to_string(),
            self.pct_complex_words.to_string(),
            self.fog_index.to_string(),
            self.avg_words_per_sentence.to_string(),
            self.complex_word_count.to_string(),
            self.word_count.to_string(),
            self.syllables_per_word.to_string(),
            self.personal_pronouns.to_string(),
            self.avg_word_length.to_string(),
        ]
    }

    /// True when every field is finite (polarity may be negative, the rest
    /// are non-negative).
    pub fn is_well_formed(&self) -> bool {
        let ratios = [
            self.polarity_score,
            self.subjectivity_score,
            self.avg_sentence_length,
            self.pct_complex_words,
            self.fog_index,
            self.avg_words_per_sentence,
            self.syllables_per_word,
            self.avg_word_length,
        ];
        ratios.iter().all(|v| v.is_finite())
            && ratios[1..].iter().all(|v| *v >= 0.0)
            && self.polarity_score >= -1.0 - f64::EPSILON
    }
}
