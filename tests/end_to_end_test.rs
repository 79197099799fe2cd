//! Full train-persist-classify-score flow over a small corpus.

use polarity::analysis::Normalizer;
use polarity::classify::classifier::classify_batch;
use polarity::classify::report::{
    DETAILS_FILE_NAME, SUMMARY_FILE_NAME, write_details, write_summary,
};
use polarity::config::{NormalizationConfig, PARAMETERS_FILE_NAME};
use polarity::corpus::{CorpusFormat, read_documents, split_by_label};
use polarity::eval::{evaluate, read_summary_file};
use polarity::model::ClassLabel;
use polarity::model::persist::{
    NEGATIVE_MODEL_FILE_NAME, POSITIVE_MODEL_FILE_NAME, load_model_pair, write_model,
};
use polarity::model::trainer::{ClassCorpus, train};
use polarity::vocabulary::{VOCABULARY_FILE_NAME, Vocabulary};
use tempfile::tempdir;

const TRAIN_CORPUS: &str = "\
feeling great today so happy\tPositive
what a wonderful happy day\tPositive
great news today feeling blessed\tPositive
this is wonderful great stuff\tPositive
awful news today feeling sad\tNegative
what a horrible terrible day\tNegative
so sad and awful everything hurts\tNegative
terrible horrible awful stuff\tNegative
";

const TEST_CORPUS: &str = "\
wonderful great day
awful terrible news
happy great feeling
horrible sad stuff
";

#[test]
fn end_to_end_flow() {
    let dir = tempdir().unwrap();
    let out = dir.path();

    let train_path = out.join("train.tsv");
    let test_path = out.join("test.tsv");
    std::fs::write(&train_path, TRAIN_CORPUS).unwrap();
    std::fs::write(&test_path, TEST_CORPUS).unwrap();

    // Vocabulary phase: normalize the whole corpus, persist parameters
    // alongside the vocabulary.
    let config = NormalizationConfig::default();
    config.save_to_file(out.join(PARAMETERS_FILE_NAME)).unwrap();

    let labeled = read_documents(&train_path, &CorpusFormat::labeled(1)).unwrap();
    assert_eq!(labeled.len(), 8);

    let normalizer = Normalizer::new(config);
    let mut all_tokens = Vec::new();
    for document in &labeled {
        all_tokens.extend(normalizer.normalize(&document.text).unwrap());
    }
    let vocabulary = Vocabulary::build(all_tokens);
    vocabulary.save_to_file(out.join(VOCABULARY_FILE_NAME)).unwrap();

    // Training phase.
    let (positive_texts, negative_texts) = split_by_label(&labeled).unwrap();
    let normalize_all = |texts: &[&str]| -> Vec<String> {
        texts
            .iter()
            .flat_map(|text| normalizer.normalize(text).unwrap())
            .collect()
    };
    let positive = ClassCorpus::new(normalize_all(&positive_texts), positive_texts.len());
    let negative = ClassCorpus::new(normalize_all(&negative_texts), negative_texts.len());
    let pair = train(&vocabulary, &positive, &negative).unwrap();

    write_model(out.join(POSITIVE_MODEL_FILE_NAME), &pair.positive).unwrap();
    write_model(out.join(NEGATIVE_MODEL_FILE_NAME), &pair.negative).unwrap();

    // Inference phase: everything reloaded from disk, nothing reused from
    // the training objects.
    let reloaded_config =
        NormalizationConfig::load_from_file(out.join(PARAMETERS_FILE_NAME)).unwrap();
    let reloaded_normalizer = Normalizer::new(reloaded_config);
    let models = load_model_pair(
        out.join(POSITIVE_MODEL_FILE_NAME),
        out.join(NEGATIVE_MODEL_FILE_NAME),
    )
    .unwrap();

    let unlabeled = read_documents(&test_path, &CorpusFormat::default()).unwrap();
    let texts: Vec<String> = unlabeled.into_iter().map(|d| d.text).collect();
    let results = classify_batch(&texts, &reloaded_normalizer, &models).unwrap();
    assert_eq!(results.len(), 4);

    write_details(out.join(DETAILS_FILE_NAME), &results).unwrap();
    write_summary(out.join(SUMMARY_FILE_NAME), &results).unwrap();

    // Scoring phase.
    let gold = vec![
        ClassLabel::Positive,
        ClassLabel::Negative,
        ClassLabel::Positive,
        ClassLabel::Negative,
    ];
    let predicted = read_summary_file(out.join(SUMMARY_FILE_NAME)).unwrap();
    let accuracy = evaluate(&gold, &predicted).unwrap();

    assert_eq!(accuracy.total, 4);
    assert_eq!(
        accuracy.correct, 4,
        "clearly separable toy corpus must classify perfectly"
    );

    // Detail lines carry both scores and the label.
    let details = std::fs::read_to_string(out.join(DETAILS_FILE_NAME)).unwrap();
    for line in details.lines() {
        let fields: Vec<&str> = line.split(", ").collect();
        assert_eq!(fields.len(), 4);
        assert!(fields[1].parse::<f64>().is_ok());
        assert!(fields[2].parse::<f64>().is_ok());
        assert!(fields[3] == "positive" || fields[3] == "negative");
    }
}
