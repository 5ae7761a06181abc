//! The offline training pipeline: clean → split → vectorize → fit → evaluate.

use anyhow::{bail, Result};
use tracing::info;

use crate::classifier::dataset::LabeledResume;
use crate::classifier::label_encoder::LabelEncoder;
use crate::classifier::logistic::{LogisticRegression, TrainingParams};
use crate::classifier::metrics::{classification_report, ClassificationReport};
use crate::classifier::split::stratified_split;
use crate::classifier::tfidf::{TfidfVectorizer, VectorizerConfig};
use crate::classifier::ClassifierArtifacts;

#[derive(Debug, Clone)]
pub struct TrainingOptions {
    pub test_size: f64,
    pub seed: u64,
    pub vectorizer: VectorizerConfig,
    pub params: TrainingParams,
}

impl Default for TrainingOptions {
    fn default() -> Self {
        TrainingOptions {
            test_size: 0.2,
            seed: 42,
            vectorizer: VectorizerConfig::default(),
            params: TrainingParams::default(),
        }
    }
}

pub struct TrainingOutcome {
    pub artifacts: ClassifierArtifacts,
    pub report: ClassificationReport,
    pub train_size: usize,
    pub test_size: usize,
}

pub fn train(dataset: &[LabeledResume], options: &TrainingOptions) -> Result<TrainingOutcome> {
    let labels: Vec<&str> = dataset.iter().map(|r| r.label.as_str()).collect();
    let encoder = LabelEncoder::fit(&labels);
    if encoder.len() < 2 {
        bail!(
            "need at least two categories to train, found {}",
            encoder.len()
        );
    }
    info!("Categories ({}): {}", encoder.len(), encoder.classes().join(", "));

    let targets = encoder.transform_all(&labels)?;
    let cleaned: Vec<String> = dataset
        .iter()
        .map(|r| options.vectorizer.normalizer.apply(&r.text))
        .collect();

    let split = stratified_split(&targets, options.test_size, options.seed)?;
    info!(
        "Split {} samples into {} train / {} test",
        dataset.len(),
        split.train.len(),
        split.test.len()
    );

    let train_docs: Vec<String> = split.train.iter().map(|&i| cleaned[i].clone()).collect();
    let train_targets: Vec<usize> = split.train.iter().map(|&i| targets[i]).collect();

    let vectorizer = TfidfVectorizer::fit(&train_docs, options.vectorizer)?;
    info!("Vectorizer fitted: {} features", vectorizer.n_features());

    let train_rows: Vec<_> = train_docs.iter().map(|d| vectorizer.transform(d)).collect();
    let model = LogisticRegression::fit(
        &train_rows,
        &train_targets,
        encoder.len(),
        vectorizer.n_features(),
        &options.params,
    )?;
    info!("Classifier fitted in {} iterations", model.iterations);

    let test_targets: Vec<usize> = split.test.iter().map(|&i| targets[i]).collect();
    let test_predictions: Vec<usize> = split
        .test
        .iter()
        .map(|&i| model.predict(&vectorizer.transform(&cleaned[i])))
        .collect();
    let report = classification_report(&test_targets, &test_predictions, encoder.classes());
    info!("Held-out accuracy: {:.4}", report.accuracy);

    Ok(TrainingOutcome {
        artifacts: ClassifierArtifacts::new(vectorizer, model, encoder)?,
        report,
        train_size: split.train.len(),
        test_size: split.test.len(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn corpus() -> Vec<LabeledResume> {
        let data_science = [
            "Python pandas numpy machine learning models",
            "Built scikit-learn pipelines in Python with pandas",
            "Statistics, numpy and machine learning research",
            "Deep learning with Python, pandas dataframes",
            "Machine learning engineer: numpy, statistics",
        ];
        let hr = [
            "Recruitment, onboarding and talent acquisition",
            "Led interviewing and onboarding of new hires",
            "HR policies, recruitment drives, talent acquisition",
            "Employee onboarding and interviewing processes",
            "Talent acquisition partner focused on recruitment",
        ];
        data_science
            .iter()
            .map(|t| ("Data Science", t))
            .chain(hr.iter().map(|t| ("HR", t)))
            .map(|(label, text)| LabeledResume {
                text: text.to_string(),
                label: label.to_string(),
            })
            .collect()
    }

    #[test]
    fn test_trains_on_separable_corpus() {
        let outcome = train(&corpus(), &TrainingOptions::default()).unwrap();
        assert_eq!(outcome.train_size + outcome.test_size, 10);
        assert_eq!(outcome.test_size, 2);
        assert_eq!(outcome.report.classes.len(), 2);
        assert_eq!(outcome.artifacts.predict("pandas and numpy").label, "Data Science");
        assert_eq!(outcome.artifacts.predict("recruitment and onboarding").label, "HR");
    }

    #[test]
    fn test_single_category_is_rejected() {
        let dataset: Vec<_> = corpus().into_iter().filter(|r| r.label == "HR").collect();
        let err = train(&dataset, &TrainingOptions::default()).err().unwrap();
        assert!(err.to_string().contains("two categories"));
    }

    #[test]
    fn test_training_is_reproducible() {
        let options = TrainingOptions::default();
        let a = train(&corpus(), &options).unwrap();
        let b = train(&corpus(), &options).unwrap();
        assert_eq!(a.report, b.report);
        assert_eq!(a.artifacts.model.weights, b.artifacts.model.weights);
    }
}
