//! Text extraction from uploaded resume documents.

pub mod tesseract;

use async_trait::async_trait;
use thiserror::Error;

pub use tesseract::TesseractCliOcr;

#[derive(Debug, Error)]
pub enum OcrError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to launch {program}: {source}")]
    Spawn {
        program: String,
        source: std::io::Error,
    },

    #[error("{program} timed out")]
    Timeout { program: String },

    #[error("text extraction exceeded {0:?}")]
    DocumentTimeout(std::time::Duration),

    #[error("{program} exited with {status}: {stderr}")]
    Failed {
        program: String,
        status: String,
        stderr: String,
    },
}

/// Supported upload formats, keyed by file extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentKind {
    Pdf,
    Png,
    Jpeg,
}

impl DocumentKind {
    /// Case-insensitive lookup on the file name's extension.
    pub fn from_file_name(file_name: &str) -> Option<Self> {
        let ext = std::path::Path::new(file_name)
            .extension()?
            .to_str()?
            .to_ascii_lowercase();
        match ext.as_str() {
            "pdf" => Some(DocumentKind::Pdf),
            "png" => Some(DocumentKind::Png),
            "jpg" | "jpeg" => Some(DocumentKind::Jpeg),
            _ => None,
        }
    }

    /// Canonical extension including the dot, used for storage keys and temp files.
    pub fn extension(&self) -> &'static str {
        match self {
            DocumentKind::Pdf => ".pdf",
            DocumentKind::Png => ".png",
            DocumentKind::Jpeg => ".jpg",
        }
    }

    pub fn content_type(&self) -> &'static str {
        match self {
            DocumentKind::Pdf => "application/pdf",
            DocumentKind::Png => "image/png",
            DocumentKind::Jpeg => "image/jpeg",
        }
    }
}

/// Best-effort document → text. Output may be empty or noisy; callers don't validate it.
#[async_trait]
pub trait TextExtractor: Send + Sync {
    async fn extract_text(&self, data: &[u8], kind: DocumentKind) -> Result<String, OcrError>;
}
