//! Plain-text model persistence.
//!
//! One file per class:
//!
//! ```text
//! Number_of_documents: <int>
//! Number_of_words: <int>
//! Word:<token> Frec:<int> LogProb:<float>
//! ...
//! ```
//!
//! with one `Word:` line per vocabulary token plus one for the
//! out-of-vocabulary marker. Log-priors are not stored; they are
//! recomputed from the two document counts when a pair is loaded.
//!
//! A malformed line fails the whole load: a partially loaded model would
//! silently corrupt every downstream score.

use std::collections::HashMap;
use std::fs::File;
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::path::Path;

use crate::error::{PolarityError, Result};
use crate::model::class_model::{ClassModel, ModelPair, WordStat};
use crate::vocabulary::UNK_TOKEN;

/// File name of the persisted positive-class model.
pub const POSITIVE_MODEL_FILE_NAME: &str = "language_model_positive.txt";

/// File name of the persisted negative-class model.
pub const NEGATIVE_MODEL_FILE_NAME: &str = "language_model_negative.txt";

/// A model file before priors are attached.
#[derive(Debug, Clone)]
pub struct ModelRecord {
    /// Number of training documents declared in the header.
    pub document_count: usize,
    /// Word statistics, marker excluded.
    pub words: HashMap<String, WordStat>,
    /// Statistics of the out-of-vocabulary marker.
    pub oov: WordStat,
}

/// Write one class model to a text file.
///
/// Word lines are sorted by token with the marker last, so output is
/// deterministic.
pub fn write_model<P: AsRef<Path>>(path: P, model: &ClassModel) -> Result<()> {
    let file = File::create(path)?;
    let mut writer = BufWriter::new(file);

    writeln!(writer, "Number_of_documents: {}", model.document_count)?;
    writeln!(writer, "Number_of_words: {}", model.distinct_word_count)?;

    let mut tokens: Vec<&String> = model.words.keys().collect();
    tokens.sort_unstable();
    for token in tokens {
        let stat = &model.words[token];
        writeln!(
            writer,
            "Word:{token} Frec:{} LogProb:{:.6}",
            stat.frequency, stat.log_prob
        )?;
    }
    writeln!(
        writer,
        "Word:{UNK_TOKEN} Frec:{} LogProb:{:.6}",
        model.oov.frequency, model.oov.log_prob
    )?;

    writer.flush()?;
    Ok(())
}

/// Read one class model file into a [`ModelRecord`].
pub fn read_model<P: AsRef<Path>>(path: P) -> Result<ModelRecord> {
    let path = path.as_ref();
    let file = File::open(path)
        .map_err(|e| PolarityError::not_found(format!("model file {}: {e}", path.display())))?;
    let reader = BufReader::new(file);
    let mut lines = reader.lines();

    let document_count = parse_header(&mut lines, "Number_of_documents:")?;
    let declared_words = parse_header(&mut lines, "Number_of_words:")?;

    let mut words = HashMap::new();
    let mut oov: Option<WordStat> = None;

    for (index, line) in lines.enumerate() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }
        let (token, stat) = parse_word_line(&line).map_err(|e| {
            PolarityError::model_format(format!("line {} of {}: {e}", index + 3, path.display()))
        })?;
        if token == UNK_TOKEN {
            oov = Some(stat);
        } else {
            words.insert(token, stat);
        }
    }

    let oov = oov.ok_or_else(|| {
        PolarityError::model_format(format!(
            "model file {} has no {UNK_TOKEN} entry",
            path.display()
        ))
    })?;

    let loaded = words.len() + 1;
    if loaded != declared_words {
        return Err(PolarityError::model_format(format!(
            "model file {} declares {declared_words} words but contains {loaded}",
            path.display()
        )));
    }

    Ok(ModelRecord {
        document_count,
        words,
        oov,
    })
}

/// Load both class models, recomputing priors from the document counts.
pub fn load_model_pair<P: AsRef<Path>>(positive_path: P, negative_path: P) -> Result<ModelPair> {
    let positive = read_model(positive_path)?;
    let negative = read_model(negative_path)?;

    if positive.document_count == 0 || negative.document_count == 0 {
        return Err(PolarityError::model_format(
            "persisted model declares zero documents; prior would be ln(0)",
        ));
    }
    let total_documents = (positive.document_count + negative.document_count) as f64;

    let assemble = |record: ModelRecord| -> ClassModel {
        let log_prior = (record.document_count as f64 / total_documents).ln();
        ClassModel {
            log_prior,
            distinct_word_count: record.words.len() + 1,
            words: record.words,
            oov: record.oov,
            document_count: record.document_count,
        }
    };

    let pair = ModelPair {
        positive: assemble(positive),
        negative: assemble(negative),
    };
    pair.validate()?;
    Ok(pair)
}

fn parse_header(
    lines: &mut impl Iterator<Item = std::io::Result<String>>,
    prefix: &str,
) -> Result<usize> {
    let line = lines
        .next()
        .ok_or_else(|| PolarityError::model_format(format!("missing {prefix} header")))??;
    line.strip_prefix(prefix)
        .map(str::trim)
        .and_then(|n| n.parse().ok())
        .ok_or_else(|| PolarityError::model_format(format!("bad header line: {line:?}")))
}

fn parse_word_line(line: &str) -> std::result::Result<(String, WordStat), String> {
    let mut fields = line.split_whitespace();
    let (Some(word_field), Some(frec_field), Some(prob_field)) =
        (fields.next(), fields.next(), fields.next())
    else {
        return Err(format!("expected three fields, got {line:?}"));
    };
    if fields.next().is_some() {
        return Err(format!("trailing fields in {line:?}"));
    }

    let token = word_field
        .strip_prefix("Word:")
        .ok_or_else(|| format!("bad word field {word_field:?}"))?;
    let frequency: u64 = frec_field
        .strip_prefix("Frec:")
        .and_then(|n| n.parse().ok())
        .ok_or_else(|| format!("bad frequency field {frec_field:?}"))?;
    let log_prob: f64 = prob_field
        .strip_prefix("LogProb:")
        .and_then(|n| n.parse().ok())
        .ok_or_else(|| format!("bad log probability field {prob_field:?}"))?;
    if !log_prob.is_finite() {
        return Err(format!("non-finite log probability in {line:?}"));
    }

    Ok((token.to_string(), WordStat {
        frequency,
        log_prob,
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::trainer::{ClassCorpus, train};
    use crate::vocabulary::Vocabulary;
    use tempfile::tempdir;

    fn trained_pair() -> ModelPair {
        let vocabulary = Vocabulary::build(vec!["good", "good", "bad", "bad"]);
        let positive = ClassCorpus::new(vec!["good".to_string(), "good".to_string()], 2);
        let negative = ClassCorpus::new(vec!["bad".to_string()], 1);
        train(&vocabulary, &positive, &negative).unwrap()
    }

    #[test]
    fn test_round_trip() {
        let dir = tempdir().unwrap();
        let positive_path = dir.path().join("language_model_positive.txt");
        let negative_path = dir.path().join("language_model_negative.txt");

        let pair = trained_pair();
        write_model(&positive_path, &pair.positive).unwrap();
        write_model(&negative_path, &pair.negative).unwrap();

        let loaded = load_model_pair(&positive_path, &negative_path).unwrap();

        // Frequencies reproduce exactly.
        assert_eq!(
            loaded.positive.words["good"].frequency,
            pair.positive.words["good"].frequency
        );
        assert_eq!(loaded.positive.oov.frequency, pair.positive.oov.frequency);
        assert_eq!(loaded.positive.document_count, 2);
        assert_eq!(loaded.negative.document_count, 1);

        // Log-probabilities within write precision.
        for token in ["good", "bad"] {
            let delta =
                (loaded.positive.words[token].log_prob - pair.positive.words[token].log_prob).abs();
            assert!(delta < 1e-6);
        }
        let delta = (loaded.positive.log_prior - pair.positive.log_prior).abs();
        assert!(delta < 1e-12, "prior recomputed from document counts");
    }

    #[test]
    fn test_malformed_line_fails_load() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("model.txt");
        std::fs::write(
            &path,
            "Number_of_documents: 2\nNumber_of_words: 2\nWord:good Frec:x LogProb:-1.0\nWord:<UNK> Frec:0 LogProb:-2.0\n",
        )
        .unwrap();

        assert!(read_model(&path).is_err());
    }

    #[test]
    fn test_missing_unk_fails_load() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("model.txt");
        std::fs::write(
            &path,
            "Number_of_documents: 2\nNumber_of_words: 1\nWord:good Frec:1 LogProb:-1.0\n",
        )
        .unwrap();

        assert!(read_model(&path).is_err());
    }

    #[test]
    fn test_missing_file_is_fatal() {
        assert!(read_model("/nonexistent/model.txt").is_err());
    }

    #[test]
    fn test_word_count_mismatch_fails_load() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("model.txt");
        std::fs::write(
            &path,
            "Number_of_documents: 2\nNumber_of_words: 5\nWord:good Frec:1 LogProb:-1.0\nWord:<UNK> Frec:0 LogProb:-2.0\n",
        )
        .unwrap();

        assert!(read_model(&path).is_err());
    }
}
