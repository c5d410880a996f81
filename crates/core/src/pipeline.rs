//! The batch pipeline: fetch, extract, score, and write, one row at a time.
//!
//! Rows are processed strictly in input order with no cross-row state; each
//! document's metrics depend only on its own text and the lexicons loaded
//! once at the start of the run. A fetch failure degrades that row to the
//! all-zero record and the run continues.

use std::fs;
use std::path::PathBuf;
use std::time::Duration;

use tracing::{debug, info};

use crate::Result;
use crate::analyze::score_page;
use crate::fetch::{FetchConfig, fetch_page};
use crate::lexicon::{Lexicon, LexiconPaths};
use crate::rows::{InputBatch, write_output};

/// Everything a batch run needs, passed in explicitly instead of living in
/// process-wide globals.
#[derive(Debug, Clone)]
pub struct PipelineConfig {
    /// Input CSV with at least URL_ID and URL columns.
    pub input: PathBuf,
    /// Output CSV path.
    pub output: PathBuf,
    /// Locations of the three lexicon resources.
    pub lexicon: LexiconPaths,
    /// When set, each document's extracted text is saved as
    /// `<dir>/<URL_ID>.txt`.
    pub extracted_dir: Option<PathBuf>,
    /// HTTP settings for the fetch step.
    pub fetch: FetchConfig,
    /// Voluntary pacing delay between documents, in milliseconds.
    pub delay_ms: u64,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            input: PathBuf::from("Input.csv"),
            output: PathBuf::from("Output.csv"),
            lexicon: LexiconPaths::default(),
            extracted_dir: Some(PathBuf::from("extracted_articles")),
            fetch: FetchConfig::default(),
            delay_ms: 500,
        }
    }
}

/// Counters reported after a run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunSummary {
    /// Rows processed (always equals the input row count on success).
    pub processed: usize,
    /// Rows scored from fetched text.
    pub scored: usize,
    /// Rows that got the all-zero substitution record.
    pub substituted: usize,
}

/// Runs the full batch: load lexicons once, then fetch and score every
/// input row in order, writing one output row per input row.
pub async fn run(config: &PipelineConfig) -> Result<RunSummary> {
    let lexicon = Lexicon::load(&config.lexicon);
    info!(
        stop_words = lexicon.stop_words.len(),
        positive = lexicon.positive_words.len(),
        negative = lexicon.negative_words.len(),
        "lexicons loaded"
    );

    let batch = InputBatch::read(&config.input)?;
    info!(rows = batch.len(), input = %config.input.display(), "input batch read");

    if let Some(dir) = &config.extracted_dir {
        fs::create_dir_all(dir)?;
    }

    let mut records = Vec::with_capacity(batch.len());
    let mut summary = RunSummary::default();

    for row in &batch.rows {
        let url_id = batch.url_id(row);
        let url = batch.url(row);
        debug!(url_id, url, "processing document");

        let page = fetch_page(url, &config.fetch).await;

        if page.is_empty() {
            summary.substituted += 1;
        } else {
            summary.scored += 1;
            if let (Some(dir), Some(text)) = (&config.extracted_dir, page.full_text()) {
                fs::write(dir.join(format!("{url_id}.txt")), &text)?;
            }
        }

        records.push(score_page(&page, &lexicon));
        summary.processed += 1;

        if config.delay_ms > 0 {
            tokio::time::sleep(Duration::from_millis(config.delay_ms)).await;
        }
    }

    write_output(&config.output, &batch, &records)?;
    info!(output = %config.output.display(), scored = summary.scored, substituted = summary.substituted, "run complete");

    Ok(summary)
}
