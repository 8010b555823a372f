//! Axum route handlers for the Resume API.

use axum::{
    extract::{Multipart, Path, State},
    Json,
};
use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

use crate::analysis::ResumeAnalysis;
use crate::errors::AppError;
use crate::models::resume::{ResumeRecord, ResumeStatus};
use crate::resumes::workflow::{delete_resume, find, reanalyze_resume, upload_resume};
use crate::state::AppState;

// ────────────────────────────────────────────────────────────────────────────
// Response types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Serialize)]
pub struct UploadResponse {
    pub resume_id: Uuid,
    pub message: &'static str,
    pub storage_url: String,
    pub object_key: String,
    pub summary: Option<ResumeAnalysis>,
    pub text_preview: String,
    pub status: &'static str,
}

#[derive(Debug, Serialize)]
pub struct AnalyzeResponse {
    pub resume_id: Uuid,
    pub summary: Option<ResumeAnalysis>,
    pub text_preview: String,
    pub status: &'static str,
}

#[derive(Debug, Serialize)]
pub struct ResumeDetailResponse {
    pub resume_id: Uuid,
    pub file_name: String,
    pub storage_url: String,
    pub status: ResumeStatus,
    pub has_summary: bool,
    pub summary: Option<ResumeAnalysis>,
    pub uploaded_at: DateTime<Utc>,
    pub text_preview: String,
}

#[derive(Debug, Serialize)]
pub struct ResumeListItem {
    pub resume_id: Uuid,
    pub file_name: String,
    pub storage_url: String,
    pub status: ResumeStatus,
    pub has_summary: bool,
}

#[derive(Debug, Serialize)]
pub struct ResumeListResponse {
    pub resumes: Vec<ResumeListItem>,
}

#[derive(Debug, Serialize)]
pub struct DeleteResponse {
    pub message: &'static str,
    pub resume_id: Uuid,
}

impl From<ResumeRecord> for ResumeDetailResponse {
    fn from(record: ResumeRecord) -> Self {
        Self {
            text_preview: record.text_preview(),
            has_summary: record.has_summary(),
            resume_id: record.resume_id,
            file_name: record.file_name,
            storage_url: record.storage_url,
            status: record.status,
            summary: record.summary,
            uploaded_at: record.uploaded_at,
        }
    }
}

impl From<ResumeRecord> for ResumeListItem {
    fn from(record: ResumeRecord) -> Self {
        Self {
            has_summary: record.has_summary(),
            resume_id: record.resume_id,
            file_name: record.file_name,
            storage_url: record.storage_url,
            status: record.status,
        }
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// POST /upload-resume
///
/// Multipart upload (part `file`). Stores the document, OCRs it, and returns
/// the first analysis straight away.
pub async fn handle_upload(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<Json<UploadResponse>, AppError> {
    let mut upload = None;
    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::Validation(format!("Invalid multipart body: {e}")))?
    {
        if field.name() != Some("file") {
            continue;
        }
        let file_name = field
            .file_name()
            .map(str::to_string)
            .ok_or_else(|| AppError::Validation("File part has no file name".to_string()))?;
        let data = field
            .bytes()
            .await
            .map_err(|e| AppError::Validation(format!("Failed to read upload: {e}")))?;
        upload = Some((file_name, data));
        break;
    }

    let (file_name, data) =
        upload.ok_or_else(|| AppError::Validation("Missing 'file' field".to_string()))?;

    let record = upload_resume(&state, &file_name, data).await?;

    Ok(Json(UploadResponse {
        resume_id: record.resume_id,
        message: "Resume uploaded and analyzed successfully",
        text_preview: record.text_preview(),
        storage_url: record.storage_url,
        object_key: record.object_key,
        summary: record.summary,
        status: "uploaded_and_analyzed",
    }))
}

/// POST /analyze-resume/:id
///
/// Interviewer-triggered re-analysis: download, OCR, analyze, replace.
pub async fn handle_analyze(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<AnalyzeResponse>, AppError> {
    let record = reanalyze_resume(&state, parse_resume_id(&id)?).await?;

    Ok(Json(AnalyzeResponse {
        resume_id: record.resume_id,
        text_preview: record.text_preview(),
        summary: record.summary,
        status: "analysis_complete",
    }))
}

/// GET /resume/:id
pub async fn handle_get_resume(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<ResumeDetailResponse>, AppError> {
    let record = find(&state, parse_resume_id(&id)?).await?;
    Ok(Json(record.into()))
}

/// GET /resumes
pub async fn handle_list_resumes(State(state): State<AppState>) -> Json<ResumeListResponse> {
    let resumes = state
        .store
        .list()
        .await
        .into_iter()
        .map(ResumeListItem::from)
        .collect();
    Json(ResumeListResponse { resumes })
}

/// DELETE /resume/:id
pub async fn handle_delete_resume(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<DeleteResponse>, AppError> {
    let record = delete_resume(&state, parse_resume_id(&id)?).await?;
    Ok(Json(DeleteResponse {
        message: "Resume deleted successfully",
        resume_id: record.resume_id,
    }))
}

/// Ids that are not UUIDs can never name a stored resume, so they are
/// reported the same way as unknown ones.
fn parse_resume_id(raw: &str) -> Result<Uuid, AppError> {
    Uuid::parse_str(raw).map_err(|_| AppError::NotFound(format!("Resume {raw} not found")))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_resume_id_accepts_uuid() {
        let id = Uuid::new_v4();
        assert_eq!(parse_resume_id(&id.to_string()).unwrap(), id);
    }

    #[test]
    fn test_parse_resume_id_maps_garbage_to_not_found() {
        match parse_resume_id("abc") {
            Err(AppError::NotFound(message)) => assert_eq!(message, "Resume abc not found"),
            other => panic!("expected NotFound, got {other:?}"),
        }
    }
}
