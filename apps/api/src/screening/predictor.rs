//! Role predictors: pluggable strategies for "predict a role from resume text".
//!
//! Default: `SkillOverlapPredictor` (taxonomy overlap, deterministic).
//! Alternative: `ClassifierPredictor` (offline-trained TF-IDF classifier).
//!
//! `AppState` holds an `Arc<dyn RolePredictor>`, chosen at startup via config.

use std::sync::Arc;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::classifier::{ClassPrediction, ClassifierArtifacts};
use crate::errors::AppError;
use crate::models::taxonomy::Taxonomy;
use crate::screening::role_scoring::{rank_roles, SECONDARY_ROLE_COUNT};
use crate::screening::skills::extract_skills;

/// Resume text as extracted and after basic normalization.
#[derive(Debug, Clone, Copy)]
pub struct ResumeText<'a> {
    pub raw: &'a str,
    pub normalized: &'a str,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RolePrediction {
    pub primary: String,
    pub secondary: Vec<String>,
    /// "skill_overlap" | "classifier"
    pub backend: String,
}

#[async_trait]
pub trait RolePredictor: Send + Sync {
    async fn predict(&self, text: ResumeText<'_>) -> Result<RolePrediction, AppError>;
}

// ────────────────────────────────────────────────────────────────────────────
// SkillOverlapPredictor (default)
// ────────────────────────────────────────────────────────────────────────────

pub struct SkillOverlapPredictor {
    taxonomy: Arc<Taxonomy>,
}

impl SkillOverlapPredictor {
    pub fn new(taxonomy: Arc<Taxonomy>) -> Self {
        SkillOverlapPredictor { taxonomy }
    }
}

#[async_trait]
impl RolePredictor for SkillOverlapPredictor {
    async fn predict(&self, text: ResumeText<'_>) -> Result<RolePrediction, AppError> {
        let found = extract_skills(text.normalized, &self.taxonomy);
        let ranking = rank_roles(&found, &self.taxonomy).ok_or_else(|| {
            AppError::Internal(anyhow::anyhow!("role taxonomy is empty"))
        })?;

        Ok(RolePrediction {
            primary: ranking.primary.role,
            secondary: ranking.secondary.into_iter().map(|g| g.role).collect(),
            backend: "skill_overlap".to_string(),
        })
    }
}

// ────────────────────────────────────────────────────────────────────────────
// ClassifierPredictor
// ────────────────────────────────────────────────────────────────────────────

/// Category prediction from the trained classifier. Labels are dataset
/// categories and need not match taxonomy role names.
pub struct ClassifierPredictor {
    artifacts: Arc<ClassifierArtifacts>,
}

impl ClassifierPredictor {
    pub fn new(artifacts: Arc<ClassifierArtifacts>) -> Self {
        ClassifierPredictor { artifacts }
    }
}

impl From<ClassPrediction> for RolePrediction {
    fn from(prediction: ClassPrediction) -> Self {
        RolePrediction {
            secondary: prediction
                .probabilities
                .iter()
                .skip(1)
                .take(SECONDARY_ROLE_COUNT)
                .map(|p| p.label.clone())
                .collect(),
            primary: prediction.label,
            backend: "classifier".to_string(),
        }
    }
}

#[async_trait]
impl RolePredictor for ClassifierPredictor {
    async fn predict(&self, text: ResumeText<'_>) -> Result<RolePrediction, AppError> {
        Ok(self.artifacts.predict(text.raw).into())
    }
}
