use std::path::PathBuf;

use anyhow::{bail, Context, Result};

/// Which role predictor drives the screening report.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PredictorKind {
    Skills,
    Classifier,
}

impl PredictorKind {
    pub fn parse(value: &str) -> Result<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "skills" | "skill_overlap" => Ok(PredictorKind::Skills),
            "classifier" => Ok(PredictorKind::Classifier),
            other => bail!("ROLE_PREDICTOR must be 'skills' or 'classifier', got '{other}'"),
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            PredictorKind::Skills => "skills",
            PredictorKind::Classifier => "classifier",
        }
    }
}

/// Application configuration loaded from environment variables.
/// Every variable has a default; invalid values abort startup.
#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub rust_log: String,
    /// Optional JSON role-skills file. The built-in taxonomy is used when unset.
    pub role_skills_path: Option<PathBuf>,
    pub model_dir: PathBuf,
    pub role_predictor: PredictorKind,
    /// Request body cap for uploads, in bytes.
    pub max_upload_bytes: usize,
}

pub const DEFAULT_MAX_UPLOAD_BYTES: usize = 25 * 1024 * 1024;

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Ok(Config {
            port: std::env::var("PORT")
                .unwrap_or_else(|_| "8080".to_string())
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
            role_skills_path: optional_env("ROLE_SKILLS_PATH").map(PathBuf::from),
            model_dir: optional_env("MODEL_DIR")
                .map(PathBuf::from)
                .unwrap_or_else(|| PathBuf::from("models")),
            role_predictor: optional_env("ROLE_PREDICTOR")
                .map(|v| PredictorKind::parse(&v))
                .transpose()?
                .unwrap_or(PredictorKind::Skills),
            max_upload_bytes: optional_env("MAX_UPLOAD_BYTES")
                .map(|v| v.trim().parse::<usize>())
                .transpose()
                .context("MAX_UPLOAD_BYTES must be a byte count")?
                .unwrap_or(DEFAULT_MAX_UPLOAD_BYTES),
        })
    }
}

fn optional_env(key: &str) -> Option<String> {
    std::env::var(key).ok().filter(|v| !v.trim().is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_predictor_kind_parses_known_values() {
        assert_eq!(PredictorKind::parse("skills").unwrap(), PredictorKind::Skills);
        assert_eq!(
            PredictorKind::parse(" Classifier ").unwrap(),
            PredictorKind::Classifier
        );
    }

    #[test]
    fn test_predictor_kind_rejects_unknown() {
        let err = PredictorKind::parse("llm").unwrap_err();
        assert!(err.to_string().contains("llm"));
    }
}
