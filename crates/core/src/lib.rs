pub mod analyze;
pub mod error;
pub mod extract;
#[cfg(feature = "fetch")]
pub mod fetch;
pub mod lexicon;
pub mod metrics;
#[cfg(feature = "fetch")]
pub mod pipeline;
pub mod rows;
pub mod syllable;
pub mod tokenize;

pub use analyze::{analyze, count_personal_pronouns, score_page};
pub use error::{FoglineError, Result};
pub use extract::{Page, extract_page};
#[cfg(feature = "fetch")]
pub use fetch::{FetchConfig, fetch_page, fetch_url};
pub use lexicon::{Lexicon, LexiconPaths, load_stop_words, load_word_set};
pub use metrics::{METRIC_COLUMNS, MetricsRecord};
#[cfg(feature = "fetch")]
pub use pipeline::{PipelineConfig, RunSummary, run};
pub use rows::{InputBatch, write_output};
pub use syllable::{count_syllables, is_complex};
pub use tokenize::{remove_stop_words, sentences, words};
