//! Command line argument parsing for the Polarity CLI using clap.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Polarity - a naive Bayes sentiment classifier for short text
#[derive(Parser, Debug, Clone)]
#[command(name = "polarity")]
#[command(about = "A bag-of-words naive Bayes sentiment classifier")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(long_about = None)]
pub struct PolarityArgs {
    /// Verbosity level (0=quiet, 1=normal, 2=verbose, 3=debug)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Quiet mode (overrides verbose)
    #[arg(short, long)]
    pub quiet: bool,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Command,
}

impl PolarityArgs {
    /// Get the effective verbosity level
    pub fn verbosity(&self) -> u8 {
        if self.quiet {
            0
        } else {
            match self.verbose {
                0 => 1, // Default to normal
                n => n,
            }
        }
    }
}

/// Available CLI commands
#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Build the vocabulary from a training corpus
    Vocabulary(VocabularyArgs),

    /// Train the per-class language models
    Train(TrainArgs),

    /// Classify a corpus of unlabeled documents
    Classify(ClassifyArgs),

    /// Score a summary file against gold labels
    Score(ScoreArgs),
}

/// Corpus format options shared by the corpus-reading commands
#[derive(Parser, Debug, Clone)]
pub struct FormatArgs {
    /// Field delimiter for the corpus file
    #[arg(long, default_value = "\t")]
    pub delimiter: char,

    /// Zero-based index of the text column
    #[arg(long, default_value = "0")]
    pub text_column: usize,

    /// Zero-based index of the label column
    #[arg(long, default_value = "1")]
    pub label_column: usize,
}

/// Arguments for building the vocabulary
#[derive(Parser, Debug, Clone)]
pub struct VocabularyArgs {
    /// Training corpus file
    #[arg(short, long, value_name = "CORPUS_FILE")]
    pub input: PathBuf,

    /// Output directory for vocabulary.txt and parameters.json
    #[arg(short, long, value_name = "OUT_DIR")]
    pub output: PathBuf,

    /// Normalization parameters file (JSON); defaults are used if absent
    #[arg(short, long, value_name = "PARAMS_FILE")]
    pub params: Option<PathBuf>,

    #[command(flatten)]
    pub format: FormatArgs,
}

/// Arguments for training the language models
#[derive(Parser, Debug, Clone)]
pub struct TrainArgs {
    /// Labeled training corpus file
    #[arg(short, long, value_name = "CORPUS_FILE")]
    pub input: PathBuf,

    /// Directory holding vocabulary.txt and parameters.json; the trained
    /// models are written here too
    #[arg(short, long, value_name = "OUT_DIR")]
    pub output: PathBuf,

    #[command(flatten)]
    pub format: FormatArgs,
}

/// Arguments for classifying documents
#[derive(Parser, Debug, Clone)]
pub struct ClassifyArgs {
    /// Unlabeled corpus file to classify
    #[arg(short, long, value_name = "CORPUS_FILE")]
    pub input: PathBuf,

    /// Directory holding parameters.json and the trained models
    #[arg(short, long, value_name = "MODEL_DIR")]
    pub model_dir: PathBuf,

    /// Output directory for the classification and summary files
    #[arg(short, long, value_name = "OUT_DIR")]
    pub output: PathBuf,

    #[command(flatten)]
    pub format: FormatArgs,
}

/// Arguments for accuracy scoring
#[derive(Parser, Debug, Clone)]
pub struct ScoreArgs {
    /// Labeled gold corpus file
    #[arg(short, long, value_name = "CORPUS_FILE")]
    pub gold: PathBuf,

    /// Summary file produced by the classify command
    #[arg(short, long, value_name = "SUMMARY_FILE")]
    pub summary: PathBuf,

    #[command(flatten)]
    pub format: FormatArgs,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_classify_command() {
        let args = PolarityArgs::parse_from([
            "polarity",
            "classify",
            "--input",
            "test.tsv",
            "--model-dir",
            "out",
            "--output",
            "out",
        ]);

        match args.command {
            Command::Classify(classify) => {
                assert_eq!(classify.input, PathBuf::from("test.tsv"));
                assert_eq!(classify.format.delimiter, '\t');
            }
            _ => panic!("expected classify command"),
        }
    }

    #[test]
    fn test_verbosity() {
        let args = PolarityArgs::parse_from([
            "polarity", "-vv", "score", "--gold", "g.tsv", "--summary", "s.txt",
        ]);
        assert_eq!(args.verbosity(), 2);

        let args = PolarityArgs::parse_from([
            "polarity", "--quiet", "score", "--gold", "g.tsv", "--summary", "s.txt",
        ]);
        assert_eq!(args.verbosity(), 0);
    }
}
