//! Screening pipeline: extract → normalize → match skills → predict role →
//! score ATS → attach resources.

use bytes::Bytes;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::info;
use uuid::Uuid;

use crate::errors::AppError;
use crate::models::taxonomy::Taxonomy;
use crate::screening::ats::{ats_score, AtsBreakdown};
use crate::screening::extract::{extract_text, DocumentKind};
use crate::screening::normalize::clean_text;
use crate::screening::predictor::{ResumeText, RolePredictor};
use crate::screening::resources::{QuestionLink, ResourceCatalog, SkillLink};
use crate::screening::role_scoring::{chart_rows, role_gap, RoleGap, RoleScore};
use crate::screening::skills::extract_skills;

/// An uploaded file as received from the client.
#[derive(Debug, Clone)]
pub struct UploadedDocument {
    pub file_name: Option<String>,
    pub content_type: Option<String>,
    pub data: Bytes,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScreeningReport {
    pub report_id: Uuid,
    pub generated_at: DateTime<Utc>,
    pub file_name: Option<String>,
    pub document_kind: DocumentKind,
    pub extracted_chars: usize,
    pub ats: AtsBreakdown,
    /// Top roles by match percentage, for the chart.
    pub role_matches: Vec<RoleScore>,
    pub primary_role: String,
    pub predictor_backend: String,
    /// Sorted.
    pub skills_found: Vec<String>,
    /// Missing skills of the primary role with learning links.
    pub skills_to_master: Vec<SkillLink>,
    pub secondary_roles: Vec<RoleGap>,
    pub practice_questions: Vec<QuestionLink>,
}

pub async fn screen_document(
    upload: &UploadedDocument,
    taxonomy: &Taxonomy,
    resources: &ResourceCatalog,
    predictor: &dyn RolePredictor,
) -> Result<ScreeningReport, AppError> {
    let kind = DocumentKind::detect(upload.content_type.as_deref(), upload.file_name.as_deref());
    let raw = extract_text(kind, &upload.data);
    let normalized = clean_text(&raw);

    let found = extract_skills(&normalized, taxonomy);
    let prediction = predictor
        .predict(ResumeText {
            raw: &raw,
            normalized: &normalized,
        })
        .await?;

    let ats = ats_score(&normalized, found.len(), taxonomy.total_skill_keywords());

    // Roles outside the taxonomy (classifier labels) have no skill list.
    let primary_missing = role_gap(&prediction.primary, &found, taxonomy)
        .map(|g| g.missing)
        .unwrap_or_default();
    let secondary_roles = prediction
        .secondary
        .iter()
        .map(|role| {
            role_gap(role, &found, taxonomy).unwrap_or_else(|| RoleGap {
                role: role.clone(),
                missing: vec![],
            })
        })
        .collect();

    let report = ScreeningReport {
        report_id: Uuid::new_v4(),
        generated_at: Utc::now(),
        file_name: upload.file_name.clone(),
        document_kind: kind,
        extracted_chars: raw.chars().count(),
        ats,
        role_matches: chart_rows(&found, taxonomy),
        practice_questions: resources.practice_questions(&prediction.primary),
        skills_to_master: resources.learning_links(&primary_missing),
        primary_role: prediction.primary,
        predictor_backend: prediction.backend,
        skills_found: found.into_iter().collect(),
        secondary_roles,
    };

    info!(
        report_id = %report.report_id,
        kind = ?report.document_kind,
        skills = report.skills_found.len(),
        ats = report.ats.total,
        "Screened resume: primary role '{}'",
        report.primary_role
    );
    Ok(report)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    use crate::screening::extract::{MIME_TEXT, MIME_DOCX};
    use crate::screening::predictor::SkillOverlapPredictor;

    fn upload(content_type: Option<&str>, file_name: Option<&str>, data: &[u8]) -> UploadedDocument {
        UploadedDocument {
            file_name: file_name.map(String::from),
            content_type: content_type.map(String::from),
            data: Bytes::copy_from_slice(data),
        }
    }

    async fn run(doc: &UploadedDocument) -> ScreeningReport {
        let taxonomy = Arc::new(Taxonomy::builtin());
        let predictor = SkillOverlapPredictor::new(taxonomy.clone());
        screen_document(doc, &taxonomy, &ResourceCatalog::builtin(), &predictor)
            .await
            .unwrap()
    }

    #[tokio::test]
    async fn test_unsupported_upload_degrades_gracefully() {
        let report = run(&upload(Some("image/png"), Some("cv.png"), b"\x89PNG")).await;
        assert_eq!(report.document_kind, DocumentKind::Unsupported);
        assert_eq!(report.extracted_chars, 0);
        assert!(report.skills_found.is_empty());
        assert_eq!(report.ats.total, 10);
        assert_eq!(report.primary_role, "Data Science");
        assert_eq!(report.role_matches.len(), 6);
    }

    #[tokio::test]
    async fn test_text_resume_end_to_end() {
        let text = "Jane Doe — DevOps. Docker, Kubernetes, AWS, Linux. https://jane.dev";
        let report = run(&upload(Some(MIME_TEXT), Some("cv.txt"), text.as_bytes())).await;

        assert_eq!(report.primary_role, "DevOps Engineer");
        assert_eq!(report.predictor_backend, "skill_overlap");
        assert_eq!(report.skills_found, vec!["aws", "docker", "kubernetes", "linux"]);
        assert_eq!(
            report.skills_to_master,
            vec![SkillLink {
                skill: "ci/cd".to_string(),
                url: "#".to_string()
            }]
        );
        assert_eq!(report.secondary_roles.len(), 2);
        assert_eq!(report.practice_questions[0].name, "Min Stack");
        assert_eq!(report.role_matches[0].role, "DevOps Engineer");
        assert!((report.role_matches[0].percent - 80.0).abs() < 1e-9);
        // 4/110*50 = 1.8 → 1, short text → 10, clean text → 20
        assert_eq!(report.ats.total, 31);
    }

    #[tokio::test]
    async fn test_octet_stream_uses_extension() {
        let report = run(&upload(
            Some("application/octet-stream"),
            Some("resume.txt"),
            b"python and sql",
        ))
        .await;
        assert_eq!(report.document_kind, DocumentKind::Text);
        assert_eq!(report.skills_found, vec!["python", "sql"]);
    }

    #[tokio::test]
    async fn test_corrupt_docx_is_empty_not_error() {
        let report = run(&upload(Some(MIME_DOCX), Some("cv.docx"), b"garbage")).await;
        assert_eq!(report.document_kind, DocumentKind::Docx);
        assert_eq!(report.extracted_chars, 0);
        assert_eq!(report.ats.total, 10);
    }
}
