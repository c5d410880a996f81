//! Row-oriented input and output.
//!
//! Input is a CSV file whose header names at least `URL_ID` and `URL`;
//! every other column passes through to the output untouched. Output rows
//! are the input columns followed by the 13 metric columns in the fixed
//! [`METRIC_COLUMNS`] order.

use std::path::Path;

use csv::StringRecord;

use crate::metrics::{METRIC_COLUMNS, MetricsRecord};
use crate::{FoglineError, Result};

/// The parsed input batch: header row plus data rows, with the positions of
/// the two required columns resolved up front.
#[derive(Debug, Clone)]
pub struct InputBatch {
    pub headers: StringRecord,
    pub rows: Vec<StringRecord>,
    url_id_idx: usize,
    url_idx: usize,
}

impl InputBatch {
    /// Reads the batch from a CSV file. Fails if the file is unreadable or
    /// the header lacks `URL_ID` or `URL`.
    pub fn read(path: &Path) -> Result<Self> {
        let mut reader = csv::Reader::from_path(path)?;
        let headers = reader.headers()?.clone();

        let url_id_idx = headers
            .iter()
            .position(|h| h == "URL_ID")
            .ok_or_else(|| FoglineError::MalformedInput("missing URL_ID column".to_string()))?;
        let url_idx = headers
            .iter()
            .position(|h| h == "URL")
            .ok_or_else(|| FoglineError::MalformedInput("missing URL column".to_string()))?;

        let rows = reader.records().collect::<std::result::Result<Vec<_>, _>>()?;

        Ok(Self { headers, rows, url_id_idx, url_idx })
    }

    pub fn url_id<'a>(&self, row: &'a StringRecord) -> &'a str {
        row.get(self.url_id_idx).unwrap_or("")
    }

    pub fn url<'a>(&self, row: &'a StringRecord) -> &'a str {
        row.get(self.url_idx).unwrap_or("")
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

/// Writes the output batch: each input row with its metrics appended.
///
/// `records` must be in input row order, one record per row.
pub fn write_output(path: &Path, batch: &InputBatch, records: &[MetricsRecord]) -> Result<()> {
    debug_assert_eq!(batch.rows.len(), records.len());

    let mut writer = csv::Writer::from_path(path)?;

    let mut header = batch.headers.clone();
    for column in METRIC_COLUMNS {
        header.push_field(column);
    }
    writer.write_record(&header)?;

    for (row, record) in batch.rows.iter().zip(records) {
        let mut out = row.clone();
        for value in record.column_values() {
            out.push_field(&value);
        }
        writer.write_record(&out)?;
    }

    writer.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn write_input(dir: &TempDir, content: &str) -> std::path::PathBuf {
        let path = dir.path().join("input.csv");
        fs::write(&path, content).unwrap();
        path
    }

    #[test]
    fn test_read_batch() {
        let dir = TempDir::new().unwrap();
        let path = write_input(&dir, "URL_ID,URL\n101,https://example.com/a\n102,https://example.com/b\n");
        let batch = InputBatch::read(&path).unwrap();

        assert_eq!(batch.len(), 2);
        assert_eq!(batch.url_id(&batch.rows[0]), "101");
        assert_eq!(batch.url(&batch.rows[1]), "https://example.com/b");
    }

    #[test]
    fn test_read_batch_extra_columns() {
        let dir = TempDir::new().unwrap();
        let path = write_input(&dir, "CATEGORY,URL_ID,URL\nnews,7,https://example.com\n");
        let batch = InputBatch::read(&path).unwrap();

        assert_eq!(batch.url_id(&batch.rows[0]), "7");
        assert_eq!(batch.url(&batch.rows[0]), "https://example.com");
        assert_eq!(batch.rows[0].get(0), Some("news"));
    }

    #[test]
    fn test_read_batch_missing_required_column() {
        let dir = TempDir::new().unwrap();
        let path = write_input(&dir, "ID,LINK\n1,https://example.com\n");
        let result = InputBatch::read(&path);

        assert!(matches!(result, Err(FoglineError::MalformedInput(_))));
    }

    #[test]
    fn test_read_batch_missing_file() {
        let result = InputBatch::read(Path::new("/nonexistent/input.csv"));
        assert!(result.is_err());
    }

    #[test]
    fn test_write_output_appends_metric_columns() {
        let dir = TempDir::new().unwrap();
        let input = write_input(&dir, "URL_ID,URL,EXTRA\n1,https://example.com,x\n");
        let batch = InputBatch::read(&input).unwrap();

        let record = MetricsRecord { positive_score: 3, fog_index: 2.08, ..Default::default() };
        let output = dir.path().join("output.csv");
        write_output(&output, &batch, &[record]).unwrap();

        let written = fs::read_to_string(&output).unwrap();
        let mut lines = written.lines();

        let header = lines.next().unwrap();
        assert!(header.starts_with("URL_ID,URL,EXTRA,POSITIVE SCORE,"));
        assert!(header.ends_with("PERSONAL PRONOUNS,AVG WORD LENGTH"));

        let row = lines.next().unwrap();
        assert!(row.starts_with("1,https://example.com,x,3,"));
        assert!(row.contains("2.08"));
    }

    #[test]
    fn test_write_output_zero_record() {
        let dir = TempDir::new().unwrap();
        let input = write_input(&dir, "URL_ID,URL\n9,https://down.example.com\n");
        let batch = InputBatch::read(&input).unwrap();

        let output = dir.path().join("output.csv");
        write_output(&output, &batch, &[MetricsRecord::zeroed()]).unwrap();

        let written = fs::read_to_string(&output).unwrap();
        let row = written.lines().nth(1).unwrap();
        assert_eq!(row, "9,https://down.example.com,0,0,0,0,0,0,0,0,0,0,0,0,0");
    }
}
