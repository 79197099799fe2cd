//! Tabular document sources.
//!
//! The core only needs a source of raw documents with optional class
//! labels; this module reads them from delimited text files (TSV by
//! default). One row per document: a text column and, for training
//! corpora, a label column.

use std::path::Path;

use csv::ReaderBuilder;
use serde::{Deserialize, Serialize};

use crate::error::{PolarityError, Result};
use crate::model::ClassLabel;

/// One document from a tabular source.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Document {
    /// The raw document text.
    pub text: String,
    /// The gold class label, present in training corpora only.
    pub label: Option<ClassLabel>,
}

/// Options for reading a delimited corpus file.
#[derive(Debug, Clone)]
pub struct CorpusFormat {
    /// Field delimiter, tab by default.
    pub delimiter: u8,
    /// Zero-based index of the text column.
    pub text_column: usize,
    /// Zero-based index of the label column, if the corpus is labeled.
    pub label_column: Option<usize>,
}

impl Default for CorpusFormat {
    fn default() -> Self {
        CorpusFormat {
            delimiter: b'\t',
            text_column: 0,
            label_column: None,
        }
    }
}

impl CorpusFormat {
    /// A labeled corpus with the label in the given column.
    pub fn labeled(label_column: usize) -> Self {
        CorpusFormat {
            label_column: Some(label_column),
            ..Default::default()
        }
    }
}

/// Read all documents from a delimited corpus file.
///
/// Rows shorter than the requested columns are an error: silently skipping
/// them would desynchronize predictions from gold labels.
pub fn read_documents<P: AsRef<Path>>(path: P, format: &CorpusFormat) -> Result<Vec<Document>> {
    let path = path.as_ref();
    let mut reader = ReaderBuilder::new()
        .delimiter(format.delimiter)
        .has_headers(false)
        .flexible(true)
        .quoting(false)
        .from_path(path)
        .map_err(|e| PolarityError::not_found(format!("corpus file {}: {e}", path.display())))?;

    let mut documents = Vec::new();
    for (index, record) in reader.records().enumerate() {
        let record = record?;
        let text = record.get(format.text_column).ok_or_else(|| {
            PolarityError::corpus(format!(
                "row {} of {} has no text column {}",
                index + 1,
                path.display(),
                format.text_column
            ))
        })?;

        let label = match format.label_column {
            Some(column) => {
                let field = record.get(column).ok_or_else(|| {
                    PolarityError::corpus(format!(
                        "row {} of {} has no label column {column}",
                        index + 1,
                        path.display()
                    ))
                })?;
                Some(field.parse::<ClassLabel>()?)
            }
            None => None,
        };

        documents.push(Document {
            text: text.to_string(),
            label,
        });
    }

    Ok(documents)
}

/// Split labeled documents into (positive, negative) text lists.
///
/// Unlabeled rows in a supposedly labeled corpus are an error.
pub fn split_by_label(documents: &[Document]) -> Result<(Vec<&str>, Vec<&str>)> {
    let mut positive = Vec::new();
    let mut negative = Vec::new();

    for (index, document) in documents.iter().enumerate() {
        match document.label {
            Some(ClassLabel::Positive) => positive.push(document.text.as_str()),
            Some(ClassLabel::Negative) => negative.push(document.text.as_str()),
            None => {
                return Err(PolarityError::corpus(format!(
                    "document {} has no label",
                    index + 1
                )));
            }
        }
    }

    Ok((positive, negative))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_read_unlabeled_corpus() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("test.tsv");
        std::fs::write(&path, "feeling great today\nworst day ever\n").unwrap();

        let documents = read_documents(&path, &CorpusFormat::default()).unwrap();
        assert_eq!(documents.len(), 2);
        assert_eq!(documents[0].text, "feeling great today");
        assert_eq!(documents[0].label, None);
    }

    #[test]
    fn test_read_labeled_corpus() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("train.tsv");
        std::fs::write(
            &path,
            "feeling great today\tPositive\nworst day ever\tNegative\n",
        )
        .unwrap();

        let documents = read_documents(&path, &CorpusFormat::labeled(1)).unwrap();
        assert_eq!(documents.len(), 2);
        assert_eq!(documents[0].label, Some(ClassLabel::Positive));
        assert_eq!(documents[1].label, Some(ClassLabel::Negative));
    }

    #[test]
    fn test_bad_label_is_an_error() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("train.tsv");
        std::fs::write(&path, "some text\tMaybe\n").unwrap();

        assert!(read_documents(&path, &CorpusFormat::labeled(1)).is_err());
    }

    #[test]
    fn test_missing_label_column_is_an_error() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("train.tsv");
        std::fs::write(&path, "text only row\n").unwrap();

        assert!(read_documents(&path, &CorpusFormat::labeled(1)).is_err());
    }

    #[test]
    fn test_split_by_label() {
        let documents = vec![
            Document {
                text: "yay".to_string(),
                label: Some(ClassLabel::Positive),
            },
            Document {
                text: "ugh".to_string(),
                label: Some(ClassLabel::Negative),
            },
            Document {
                text: "wow".to_string(),
                label: Some(ClassLabel::Positive),
            },
        ];

        let (positive, negative) = split_by_label(&documents).unwrap();
        assert_eq!(positive, vec!["yay", "wow"]);
        assert_eq!(negative, vec!["ugh"]);
    }
}
