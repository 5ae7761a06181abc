//! Axum route handlers for the screening API and the HTML pages.

use axum::{
    extract::{multipart::MultipartError, Multipart, State},
    http::{StatusCode, Uri},
    response::Html,
    Json,
};
use serde::{Deserialize, Serialize};

use crate::classifier::ClassPrediction;
use crate::errors::AppError;
use crate::models::taxonomy::RoleSkills;
use crate::presentation::{render_report, render_upload_page};
use crate::screening::report::{screen_document, ScreeningReport, UploadedDocument};
use crate::state::AppState;

/// Multipart field carrying the resume.
pub const UPLOAD_FIELD: &str = "file";

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
pub struct ClassifyRequest {
    pub text: String,
}

#[derive(Debug, Serialize)]
pub struct ClassifyResponse {
    #[serde(flatten)]
    pub prediction: ClassPrediction,
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// GET /
pub async fn handle_upload_page() -> Html<String> {
    Html(render_upload_page())
}

/// POST /screen
///
/// Same pipeline as the JSON endpoint, rendered as an HTML report.
pub async fn handle_screen_html(
    State(state): State<AppState>,
    multipart: Multipart,
) -> Result<Html<String>, AppError> {
    let report = screen_upload(&state, multipart).await?;
    Ok(Html(render_report(&report)))
}

/// POST /api/v1/screen
pub async fn handle_screen_json(
    State(state): State<AppState>,
    multipart: Multipart,
) -> Result<Json<ScreeningReport>, AppError> {
    let report = screen_upload(&state, multipart).await?;
    Ok(Json(report))
}

/// POST /api/v1/classify
///
/// Runs the trained classifier directly on raw text, regardless of which
/// predictor drives the screening report.
pub async fn handle_classify(
    State(state): State<AppState>,
    Json(request): Json<ClassifyRequest>,
) -> Result<Json<ClassifyResponse>, AppError> {
    let artifacts = state.classifier.as_ref().ok_or_else(|| {
        AppError::ClassifierUnavailable(
            "no trained classifier artifacts are loaded".to_string(),
        )
    })?;
    if request.text.trim().is_empty() {
        return Err(AppError::Validation("text cannot be empty".to_string()));
    }

    Ok(Json(ClassifyResponse {
        prediction: artifacts.predict(&request.text),
    }))
}

/// GET /api/v1/roles
pub async fn handle_list_roles(State(state): State<AppState>) -> Json<Vec<RoleSkills>> {
    Json(state.taxonomy.roles().to_vec())
}

/// Fallback for unmatched routes.
pub async fn handle_not_found(uri: Uri) -> AppError {
    AppError::NotFound(format!("no route for {uri}"))
}

async fn screen_upload(state: &AppState, multipart: Multipart) -> Result<ScreeningReport, AppError> {
    let upload = read_upload(multipart).await?;
    screen_document(
        &upload,
        &state.taxonomy,
        &state.resources,
        state.predictor.as_ref(),
    )
    .await
}

/// Pulls the `file` field out of the form; other fields are ignored.
async fn read_upload(mut multipart: Multipart) -> Result<UploadedDocument, AppError> {
    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| multipart_error("malformed multipart body", e))?
    {
        if field.name() != Some(UPLOAD_FIELD) {
            continue;
        }
        let file_name = field.file_name().map(str::to_string);
        let content_type = field.content_type().map(str::to_string);
        let data = field
            .bytes()
            .await
            .map_err(|e| multipart_error("failed to read upload", e))?;

        return Ok(UploadedDocument {
            file_name,
            content_type,
            data,
        });
    }

    Err(AppError::Validation(format!(
        "multipart field '{UPLOAD_FIELD}' is required"
    )))
}

/// Body-limit failures surface as 413, everything else as a bad request.
fn multipart_error(context: &str, e: MultipartError) -> AppError {
    if e.status() == StatusCode::PAYLOAD_TOO_LARGE {
        AppError::PayloadTooLarge(format!(
            "upload exceeds the configured size limit (MAX_UPLOAD_BYTES): {}",
            e.body_text()
        ))
    } else {
        AppError::Validation(format!("{context}: {}", e.body_text()))
    }
}
