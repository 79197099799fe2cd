//! Command implementations for the Polarity CLI.

use std::fs;
use std::time::Instant;

use indicatif::{ProgressBar, ProgressStyle};
use log::info;
use rayon::prelude::*;

use crate::analysis::Normalizer;
use crate::classify::classifier::classify_document;
use crate::classify::report::{self, DETAILS_FILE_NAME, SUMMARY_FILE_NAME};
use crate::cli::args::*;
use crate::config::{NormalizationConfig, PARAMETERS_FILE_NAME};
use crate::corpus::{self, CorpusFormat};
use crate::error::{PolarityError, Result};
use crate::eval;
use crate::model::persist::{
    self, NEGATIVE_MODEL_FILE_NAME, POSITIVE_MODEL_FILE_NAME,
};
use crate::model::trainer::{ClassCorpus, train};
use crate::vocabulary::{VOCABULARY_FILE_NAME, Vocabulary};

/// Execute a CLI command.
pub fn execute_command(args: PolarityArgs) -> Result<()> {
    match &args.command {
        Command::Vocabulary(vocabulary_args) => build_vocabulary(vocabulary_args.clone(), &args),
        Command::Train(train_args) => train_models(train_args.clone(), &args),
        Command::Classify(classify_args) => classify_corpus(classify_args.clone(), &args),
        Command::Score(score_args) => score_summary(score_args.clone(), &args),
    }
}

/// Build the vocabulary and persist it with the parameters used.
fn build_vocabulary(args: VocabularyArgs, cli_args: &PolarityArgs) -> Result<()> {
    let config = match &args.params {
        Some(path) => NormalizationConfig::load_from_file(path)?,
        None => NormalizationConfig::default(),
    };

    let format = unlabeled_format(&args.format)?;
    let documents = corpus::read_documents(&args.input, &format)?;
    info!("read {} documents from {}", documents.len(), args.input.display());

    let normalizer = Normalizer::new(config.clone());
    let texts: Vec<&str> = documents.iter().map(|d| d.text.as_str()).collect();
    let normalized = normalize_documents(&texts, &normalizer, cli_args, "Building vocabulary")?;

    let vocabulary = Vocabulary::build(normalized.into_iter().flatten());

    fs::create_dir_all(&args.output)?;
    vocabulary.save_to_file(args.output.join(VOCABULARY_FILE_NAME))?;
    config.save_to_file(args.output.join(PARAMETERS_FILE_NAME))?;

    if cli_args.verbosity() > 0 {
        println!(
            "Vocabulary of {} words written to {}",
            vocabulary.len(),
            args.output.display()
        );
    }
    Ok(())
}

/// Train both class models from a labeled corpus.
fn train_models(args: TrainArgs, cli_args: &PolarityArgs) -> Result<()> {
    let start_time = Instant::now();

    let config = NormalizationConfig::load_from_file(args.output.join(PARAMETERS_FILE_NAME))?;
    let vocabulary = Vocabulary::load_from_file(args.output.join(VOCABULARY_FILE_NAME))?;

    let format = labeled_format(&args.format)?;
    let documents = corpus::read_documents(&args.input, &format)?;
    let (positive_texts, negative_texts) = corpus::split_by_label(&documents)?;
    info!(
        "read {} positive and {} negative documents",
        positive_texts.len(),
        negative_texts.len()
    );

    let normalizer = Normalizer::new(config);
    let positive_tokens =
        normalize_documents(&positive_texts, &normalizer, cli_args, "Normalizing positive")?;
    let negative_tokens =
        normalize_documents(&negative_texts, &normalizer, cli_args, "Normalizing negative")?;

    let positive = ClassCorpus::new(
        positive_tokens.into_iter().flatten().collect(),
        positive_texts.len(),
    );
    let negative = ClassCorpus::new(
        negative_tokens.into_iter().flatten().collect(),
        negative_texts.len(),
    );

    let pair = train(&vocabulary, &positive, &negative)?;

    persist::write_model(args.output.join(POSITIVE_MODEL_FILE_NAME), &pair.positive)?;
    persist::write_model(args.output.join(NEGATIVE_MODEL_FILE_NAME), &pair.negative)?;

    if cli_args.verbosity() > 0 {
        println!(
            "Models trained in {:.2}s and written to {}",
            start_time.elapsed().as_secs_f64(),
            args.output.display()
        );
    }
    Ok(())
}

/// Classify an unlabeled corpus with previously trained models.
fn classify_corpus(args: ClassifyArgs, cli_args: &PolarityArgs) -> Result<()> {
    let config = NormalizationConfig::load_from_file(args.model_dir.join(PARAMETERS_FILE_NAME))?;
    let models = persist::load_model_pair(
        args.model_dir.join(POSITIVE_MODEL_FILE_NAME),
        args.model_dir.join(NEGATIVE_MODEL_FILE_NAME),
    )?;

    let format = unlabeled_format(&args.format)?;
    let documents = corpus::read_documents(&args.input, &format)?;
    info!("classifying {} documents", documents.len());

    let normalizer = Normalizer::new(config);
    let progress = progress_bar(documents.len() as u64, "Classifying", cli_args);

    let results = documents
        .par_iter()
        .map(|document| {
            let result = classify_document(&document.text, &normalizer, &models);
            progress.inc(1);
            result
        })
        .collect::<Result<Vec<_>>>()?;
    progress.finish_and_clear();

    fs::create_dir_all(&args.output)?;
    report::write_details(args.output.join(DETAILS_FILE_NAME), &results)?;
    report::write_summary(args.output.join(SUMMARY_FILE_NAME), &results)?;

    if cli_args.verbosity() > 0 {
        let positive = results
            .iter()
            .filter(|r| r.label == crate::model::ClassLabel::Positive)
            .count();
        println!(
            "Classified {} documents ({} positive, {} negative); results in {}",
            results.len(),
            positive,
            results.len() - positive,
            args.output.display()
        );
    }
    Ok(())
}

/// Score a summary file against the gold labels of a corpus.
fn score_summary(args: ScoreArgs, cli_args: &PolarityArgs) -> Result<()> {
    let format = labeled_format(&args.format)?;
    let documents = corpus::read_documents(&args.gold, &format)?;
    let gold: Vec<_> = documents
        .iter()
        .filter_map(|document| document.label)
        .collect();
    if gold.len() != documents.len() {
        return Err(PolarityError::corpus("gold corpus has unlabeled rows"));
    }

    let predicted = eval::read_summary_file(&args.summary)?;
    let accuracy = eval::evaluate(&gold, &predicted)?;

    if cli_args.verbosity() > 0 {
        println!(
            "Accuracy: {:.2}% ({}/{})",
            accuracy.percent(),
            accuracy.correct,
            accuracy.total
        );
    }
    Ok(())
}

/// Normalize a batch of documents in parallel with a progress bar.
fn normalize_documents(
    texts: &[&str],
    normalizer: &Normalizer,
    cli_args: &PolarityArgs,
    message: &'static str,
) -> Result<Vec<Vec<String>>> {
    let progress = progress_bar(texts.len() as u64, message, cli_args);

    let normalized = texts
        .par_iter()
        .map(|text| {
            let tokens = normalizer.normalize(text);
            progress.inc(1);
            tokens
        })
        .collect::<Result<Vec<_>>>()?;
    progress.finish_and_clear();

    Ok(normalized)
}

/// A progress bar, hidden in quiet mode.
fn progress_bar(length: u64, message: &'static str, cli_args: &PolarityArgs) -> ProgressBar {
    if cli_args.verbosity() == 0 {
        return ProgressBar::hidden();
    }
    let progress = ProgressBar::new(length);
    progress.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} {msg}")
            .expect("progress template is valid")
            .progress_chars("#>-"),
    );
    progress.set_message(message);
    progress
}

fn labeled_format(args: &FormatArgs) -> Result<CorpusFormat> {
    Ok(CorpusFormat {
        delimiter: delimiter_byte(args.delimiter)?,
        text_column: args.text_column,
        label_column: Some(args.label_column),
    })
}

fn unlabeled_format(args: &FormatArgs) -> Result<CorpusFormat> {
    Ok(CorpusFormat {
        delimiter: delimiter_byte(args.delimiter)?,
        text_column: args.text_column,
        label_column: None,
    })
}

fn delimiter_byte(delimiter: char) -> Result<u8> {
    u8::try_from(delimiter)
        .map_err(|_| PolarityError::config(format!("delimiter {delimiter:?} is not ASCII")))
}
