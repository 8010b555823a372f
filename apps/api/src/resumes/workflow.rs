//! Upload / analyze / delete workflows over storage, OCR, and the analysis pipeline.

use bytes::Bytes;
use chrono::Utc;
use tracing::{info, warn};
use uuid::Uuid;

use crate::analysis::analyze;
use crate::errors::AppError;
use crate::models::resume::{ResumeRecord, ResumeStatus};
use crate::ocr::DocumentKind;
use crate::state::AppState;
use crate::storage::resume_object_key;

/// Stores the file, registers it as `uploaded`, then runs the first analysis.
///
/// If text extraction fails the record stays `uploaded` so it can be
/// re-analyzed later; the error is still returned to the caller.
pub async fn upload_resume(
    state: &AppState,
    file_name: &str,
    data: Bytes,
) -> Result<ResumeRecord, AppError> {
    let kind = DocumentKind::from_file_name(file_name)
        .ok_or_else(|| AppError::Validation("Invalid file type".to_string()))?;
    if data.is_empty() {
        return Err(AppError::Validation("Uploaded file is empty".to_string()));
    }

    let resume_id = Uuid::new_v4();
    let key = resume_object_key(resume_id, kind.extension());
    info!("Step 1: storing {file_name} ({} bytes) as {key}", data.len());
    let stored = state
        .objects
        .upload(&key, data.clone(), kind.content_type())
        .await?;

    state
        .store
        .insert(ResumeRecord {
            resume_id,
            file_name: file_name.to_string(),
            kind,
            object_key: stored.key,
            storage_url: stored.url,
            uploaded_at: Utc::now(),
            summary: None,
            extracted_text: String::new(),
            status: ResumeStatus::Uploaded,
        })
        .await;

    run_analysis(state, resume_id, &data, kind).await
}

/// Re-downloads the stored file and replaces the record's analysis.
pub async fn reanalyze_resume(state: &AppState, resume_id: Uuid) -> Result<ResumeRecord, AppError> {
    info!("Starting analysis for resume {resume_id}");
    let record = find(state, resume_id).await?;

    info!("Step 1: downloading {}", record.object_key);
    let data = state.objects.download(&record.object_key).await?;

    run_analysis(state, resume_id, &data, record.kind).await
}

/// Deletes the stored file, then forgets the record.
pub async fn delete_resume(state: &AppState, resume_id: Uuid) -> Result<ResumeRecord, AppError> {
    let record = find(state, resume_id).await?;
    state.objects.delete(&record.object_key).await?;
    state
        .store
        .remove(resume_id)
        .await
        .ok_or_else(|| not_found(resume_id))
}

pub async fn find(state: &AppState, resume_id: Uuid) -> Result<ResumeRecord, AppError> {
    state
        .store
        .get(resume_id)
        .await
        .ok_or_else(|| not_found(resume_id))
}

async fn run_analysis(
    state: &AppState,
    resume_id: Uuid,
    data: &[u8],
    kind: DocumentKind,
) -> Result<ResumeRecord, AppError> {
    info!("Step 2: extracting text with OCR");
    let text = state.ocr.extract_text(data, kind).await?;
    info!("Extracted {} characters", text.chars().count());
    if text.trim().is_empty() {
        warn!("No text extracted from resume {resume_id}");
    }

    info!("Step 3: generating summary");
    let analysis = analyze(&text, state.summarizer.as_ref()).await;

    state
        .store
        .update_analysis(resume_id, text, analysis)
        .await
        .ok_or_else(|| not_found(resume_id))
}

fn not_found(resume_id: Uuid) -> AppError {
    AppError::NotFound(format!("Resume {resume_id} not found"))
}
