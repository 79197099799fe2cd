//! Classification output writers.
//!
//! Two files per run: a detail file with one
//! `<excerpt>, <positive>, <negative>, <label>` line per document, and a
//! summary file with one label per line in document order. Scores in the
//! detail file are rounded to two decimals; the summary is what accuracy
//! scoring consumes.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use crate::classify::ClassificationResult;
use crate::error::Result;

/// Default detail file name.
pub const DETAILS_FILE_NAME: &str = "classification.txt";

/// Default summary file name.
pub const SUMMARY_FILE_NAME: &str = "summary.txt";

/// Write the per-document detail file.
pub fn write_details<P: AsRef<Path>>(path: P, results: &[ClassificationResult]) -> Result<()> {
    let file = File::create(path)?;
    let mut writer = BufWriter::new(file);

    for result in results {
        writeln!(
            writer,
            "{}, {:.2}, {:.2}, {}",
            result.excerpt, result.positive_score, result.negative_score, result.label
        )?;
    }

    writer.flush()?;
    Ok(())
}

/// Write the per-document summary file.
pub fn write_summary<P: AsRef<Path>>(path: P, results: &[ClassificationResult]) -> Result<()> {
    let file = File::create(path)?;
    let mut writer = BufWriter::new(file);

    for result in results {
        writeln!(writer, "{}", result.label)?;
    }

    writer.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::ClassLabel;
    use tempfile::tempdir;

    fn sample_results() -> Vec<ClassificationResult> {
        vec![
            ClassificationResult {
                excerpt: "loved it".to_string(),
                positive_score: -3.14159,
                negative_score: -4.5,
                label: ClassLabel::Positive,
            },
            ClassificationResult {
                excerpt: "awful".to_string(),
                positive_score: -6.0,
                negative_score: -2.25,
                label: ClassLabel::Negative,
            },
        ]
    }

    #[test]
    fn test_write_details() {
        let dir = tempdir().unwrap();
        let path = dir.path().join(DETAILS_FILE_NAME);

        write_details(&path, &sample_results()).unwrap();

        let contents = std::fs::read_to_string(&path).unwrap();
        let lines: Vec<&str> = contents.lines().collect();
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[0], "loved it, -3.14, -4.50, positive");
        assert_eq!(lines[1], "awful, -6.00, -2.25, negative");
    }

    #[test]
    fn test_write_summary() {
        let dir = tempdir().unwrap();
        let path = dir.path().join(SUMMARY_FILE_NAME);

        write_summary(&path, &sample_results()).unwrap();

        let contents = std::fs::read_to_string(&path).unwrap();
        assert_eq!(contents, "positive\nnegative\n");
    }
}
