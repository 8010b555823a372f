use std::sync::Arc;

use crate::ocr::TextExtractor;
use crate::resumes::store::ResumeStore;
use crate::storage::ObjectStore;
use crate::summarizer::Summarizer;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub store: ResumeStore,
    /// Uploaded resume files. Default: S3ObjectStore (MinIO locally).
    pub objects: Arc<dyn ObjectStore>,
    /// Document → text. Default: TesseractCliOcr.
    pub ocr: Arc<dyn TextExtractor>,
    /// Remote abstractive summarizer. Default: HuggingFaceSummarizer.
    pub summarizer: Arc<dyn Summarizer>,
}
