use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::analysis::ResumeAnalysis;
use crate::ocr::DocumentKind;

const PREVIEW_CHARS: usize = 200;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ResumeStatus {
    /// Stored, but no analysis has completed yet.
    Uploaded,
    Analyzed,
}

/// One uploaded resume as held in the in-memory store.
#[derive(Debug, Clone)]
pub struct ResumeRecord {
    pub resume_id: Uuid,
    pub file_name: String,
    pub kind: DocumentKind,
    pub object_key: String,
    pub storage_url: String,
    pub uploaded_at: DateTime<Utc>,
    pub summary: Option<ResumeAnalysis>,
    pub extracted_text: String,
    pub status: ResumeStatus,
}

impl ResumeRecord {
    pub fn has_summary(&self) -> bool {
        self.summary.is_some()
    }

    pub fn text_preview(&self) -> String {
        text_preview(&self.extracted_text)
    }
}

/// First 200 characters, with an ellipsis when anything was cut.
pub fn text_preview(text: &str) -> String {
    match text.char_indices().nth(PREVIEW_CHARS) {
        Some((idx, _)) => format!("{}...", &text[..idx]),
        None => text.to_string(),
    }
}
