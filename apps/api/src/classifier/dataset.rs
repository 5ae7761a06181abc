use std::io::Read;
use std::path::Path;

use anyhow::{bail, Context, Result};
use tracing::{info, warn};

/// One labeled resume from the training CSV.
#[derive(Debug, Clone, PartialEq)]
pub struct LabeledResume {
    pub text: String,
    pub label: String,
}

pub fn load_csv(path: &Path, text_column: &str, label_column: &str) -> Result<Vec<LabeledResume>> {
    let file = std::fs::File::open(path)
        .with_context(|| format!("Failed to open dataset '{}'", path.display()))?;
    let records = read_records(file, text_column, label_column)
        .with_context(|| format!("Failed to load dataset '{}'", path.display()))?;
    info!("Loaded {} labeled resumes from {}", records.len(), path.display());
    Ok(records)
}

/// Reads labeled rows from CSV with a header line. Rows with an empty label are skipped.
pub fn read_records<R: Read>(
    reader: R,
    text_column: &str,
    label_column: &str,
) -> Result<Vec<LabeledResume>> {
    let mut csv_reader = csv::ReaderBuilder::new().flexible(true).from_reader(reader);

    let headers = csv_reader.headers().context("Failed to read CSV header")?.clone();
    let column = |name: &str| {
        headers
            .iter()
            .position(|h| h.trim() == name)
            .with_context(|| {
                format!(
                    "Missing column '{name}' (found: {})",
                    headers.iter().collect::<Vec<_>>().join(", ")
                )
            })
    };
    let text_idx = column(text_column)?;
    let label_idx = column(label_column)?;

    let mut records = Vec::new();
    let mut skipped = 0usize;
    for (line, row) in csv_reader.records().enumerate() {
        let row = row.with_context(|| format!("Malformed CSV record at data row {}", line + 1))?;
        let label = row.get(label_idx).unwrap_or("").trim();
        if label.is_empty() {
            skipped += 1;
            continue;
        }
        records.push(LabeledResume {
            text: row.get(text_idx).unwrap_or("").to_string(),
            label: label.to_string(),
        });
    }

    if skipped > 0 {
        warn!("Skipped {skipped} rows with an empty '{label_column}' value");
    }
    if records.is_empty() {
        bail!("dataset contains no labeled rows");
    }
    Ok(records)
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = "ID,Resume,Category\n\
        1,\"Python, pandas and numpy\",Data Science\n\
        2,Recruitment and onboarding,HR\n\
        3,No label here,\n";

    #[test]
    fn test_reads_named_columns() {
        let records = read_records(SAMPLE.as_bytes(), "Resume", "Category").unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].text, "Python, pandas and numpy");
        assert_eq!(records[0].label, "Data Science");
        assert_eq!(records[1].label, "HR");
    }

    #[test]
    fn test_missing_column_is_error() {
        let err = read_records(SAMPLE.as_bytes(), "Resume_str", "Category").unwrap_err();
        let message = format!("{err:#}");
        assert!(message.contains("Resume_str"));
        assert!(message.contains("Category"));
    }

    #[test]
    fn test_no_labeled_rows_is_error() {
        let csv = "Resume,Category\nsome text,\n";
        assert!(read_records(csv.as_bytes(), "Resume", "Category").is_err());
    }

    #[test]
    fn test_load_csv_missing_file() {
        let err = load_csv(Path::new("/nonexistent/Resume.csv"), "Resume", "Category").unwrap_err();
        assert!(format!("{err:#}").contains("/nonexistent/Resume.csv"));
    }

    #[test]
    fn test_load_csv_from_disk() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("Resume.csv");
        std::fs::write(&path, SAMPLE).unwrap();
        assert_eq!(load_csv(&path, "Resume", "Category").unwrap().len(), 2);
    }
}
