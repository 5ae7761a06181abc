//! Offline-trained resume category classifier.
//!
//! TF-IDF features feed a multinomial logistic regression. Artifacts are
//! produced by the `train` binary and loaded read-only by the server.

pub mod dataset;
pub mod label_encoder;
pub mod logistic;
pub mod metrics;
pub mod split;
pub mod tfidf;
pub mod training;

use std::io::{BufWriter, Write};
use std::path::Path;

use anyhow::{bail, Context, Result};
use serde::{de::DeserializeOwned, Deserialize, Serialize};
use tempfile::NamedTempFile;
use tracing::info;

use crate::classifier::label_encoder::LabelEncoder;
use crate::classifier::logistic::LogisticRegression;
use crate::classifier::metrics::ClassificationReport;
use crate::classifier::tfidf::TfidfVectorizer;

pub const VECTORIZER_FILE: &str = "vectorizer.json";
pub const CLASSIFIER_FILE: &str = "classifier.json";
pub const LABEL_ENCODER_FILE: &str = "label_encoder.json";
pub const METRICS_FILE: &str = "metrics.json";
pub const ROLE_SKILLS_FILE: &str = "role_skills.json";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClassProbability {
    pub label: String,
    pub probability: f64,
}

/// Classifier output: every class, most probable first.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClassPrediction {
    pub label: String,
    pub probabilities: Vec<ClassProbability>,
}

/// The three fitted pieces needed at serving time.
#[derive(Debug, Clone)]
pub struct ClassifierArtifacts {
    pub vectorizer: TfidfVectorizer,
    pub model: LogisticRegression,
    pub labels: LabelEncoder,
}

impl ClassifierArtifacts {
    pub fn new(
        vectorizer: TfidfVectorizer,
        model: LogisticRegression,
        labels: LabelEncoder,
    ) -> Result<Self> {
        if model.n_classes() != labels.len() {
            bail!(
                "classifier has {} classes but the label encoder has {}",
                model.n_classes(),
                labels.len()
            );
        }
        if model.n_features != vectorizer.n_features() {
            bail!(
                "classifier expects {} features but the vectorizer produces {}",
                model.n_features,
                vectorizer.n_features()
            );
        }
        if model.weights.len() != model.bias.len() {
            bail!(
                "classifier has {} weight rows but {} biases",
                model.weights.len(),
                model.bias.len()
            );
        }
        if let Some(row) = model.weights.iter().find(|row| row.len() != model.n_features) {
            bail!(
                "classifier weight row has {} entries, expected {}",
                row.len(),
                model.n_features
            );
        }
        if vectorizer.vocabulary.len() != vectorizer.idf.len() {
            bail!(
                "vectorizer has {} terms but {} idf weights",
                vectorizer.vocabulary.len(),
                vectorizer.idf.len()
            );
        }
        if let Some((term, idx)) = vectorizer
            .vocabulary
            .iter()
            .find(|(_, &idx)| idx >= vectorizer.idf.len())
        {
            bail!(
                "vectorizer term '{term}' maps to column {idx}, outside {} idf weights",
                vectorizer.idf.len()
            );
        }
        Ok(ClassifierArtifacts {
            vectorizer,
            model,
            labels,
        })
    }

    /// Predicts the category of raw resume text.
    pub fn predict(&self, raw_text: &str) -> ClassPrediction {
        let row = self.vectorizer.transform_raw(raw_text);
        let probs = self.model.predict_proba(&row);

        let mut probabilities: Vec<ClassProbability> = probs
            .into_iter()
            .enumerate()
            .map(|(idx, probability)| ClassProbability {
                label: self.labels.inverse_transform(idx).unwrap_or_default().to_string(),
                probability,
            })
            .collect();
        // stable: equal probabilities keep label order
        probabilities.sort_by(|a, b| b.probability.total_cmp(&a.probability));

        let label = probabilities
            .first()
            .map(|p| p.label.clone())
            .unwrap_or_default();
        ClassPrediction {
            label,
            probabilities,
        }
    }

    pub fn save(&self, dir: &Path) -> Result<()> {
        std::fs::create_dir_all(dir)
            .with_context(|| format!("Failed to create model directory '{}'", dir.display()))?;
        write_json_atomic(&dir.join(VECTORIZER_FILE), &self.vectorizer)?;
        write_json_atomic(&dir.join(CLASSIFIER_FILE), &self.model)?;
        write_json_atomic(&dir.join(LABEL_ENCODER_FILE), &self.labels)?;
        info!("Saved classifier artifacts to {}", dir.display());
        Ok(())
    }

    /// Loads artifacts from `dir`. `Ok(None)` when none of the files exist;
    /// an error when only some exist or any is unreadable.
    pub fn load(dir: &Path) -> Result<Option<Self>> {
        let files = [VECTORIZER_FILE, CLASSIFIER_FILE, LABEL_ENCODER_FILE];
        let present = files.iter().filter(|f| dir.join(f).is_file()).count();
        if present == 0 {
            return Ok(None);
        }
        if present < files.len() {
            bail!(
                "incomplete classifier artifacts in '{}': expected {}",
                dir.display(),
                files.join(", ")
            );
        }

        let artifacts = Self::new(
            read_json(&dir.join(VECTORIZER_FILE))?,
            read_json(&dir.join(CLASSIFIER_FILE))?,
            read_json(&dir.join(LABEL_ENCODER_FILE))?,
        )?;
        info!(
            "Loaded classifier: {} classes, {} features",
            artifacts.labels.len(),
            artifacts.vectorizer.n_features()
        );
        Ok(Some(artifacts))
    }
}

pub fn save_report(dir: &Path, report: &ClassificationReport) -> Result<()> {
    write_json_atomic(&dir.join(METRICS_FILE), report)
}

/// Writes via a temp file in the same directory, then renames over `path`.
pub fn write_json_atomic<T: Serialize>(path: &Path, value: &T) -> Result<()> {
    let parent = path.parent().unwrap_or_else(|| Path::new("."));
    let temp = NamedTempFile::new_in(parent)
        .with_context(|| format!("Failed to create temp file in '{}'", parent.display()))?;
    {
        let mut writer = BufWriter::new(temp.as_file());
        serde_json::to_writer(&mut writer, value)
            .with_context(|| format!("Failed to serialize '{}'", path.display()))?;
        writer.flush()?;
    }
    temp.persist(path)
        .with_context(|| format!("Failed to write '{}'", path.display()))?;
    Ok(())
}

fn read_json<T: DeserializeOwned>(path: &Path) -> Result<T> {
    let raw = std::fs::read(path).with_context(|| format!("Failed to read '{}'", path.display()))?;
    serde_json::from_slice(&raw).with_context(|| format!("Corrupt artifact '{}'", path.display()))
}
