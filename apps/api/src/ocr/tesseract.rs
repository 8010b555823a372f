use std::ffi::OsStr;
use std::path::{Path, PathBuf};
use std::process::Stdio;
use std::time::Duration;

use async_trait::async_trait;
use tokio::process::Command;
use tokio::time::timeout;
use tracing::{debug, info, warn};

use super::{DocumentKind, OcrError, TextExtractor};

/// Below this many characters a PDF's embedded text layer is treated as absent.
const MIN_TEXT_LAYER_CHARS: usize = 50;

/// OCR via the `tesseract` CLI; PDFs are rasterized page by page with `pdftoppm`.
///
/// `timeout` bounds each external command and, separately, the whole document,
/// so a many-page PDF is bounded by one `timeout` overall.
#[derive(Clone)]
pub struct TesseractCliOcr {
    pub tesseract_path: String,
    pub pdftoppm_path: String,
    pub dpi: u32,
    pub timeout: Duration,
}

impl TesseractCliOcr {
    pub fn new(tesseract_path: String, pdftoppm_path: String, dpi: u32, timeout: Duration) -> Self {
        Self {
            tesseract_path,
            pdftoppm_path,
            dpi,
            timeout,
        }
    }

    /// Runs `program` to completion under the configured timeout and returns stdout.
    async fn run(&self, program: &str, args: &[&OsStr]) -> Result<Vec<u8>, OcrError> {
        let mut command = Command::new(program);
        command
            .args(args)
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .kill_on_drop(true);

        let output = match timeout(self.timeout, command.output()).await {
            Ok(result) => result.map_err(|source| OcrError::Spawn {
                program: program.to_string(),
                source,
            })?,
            Err(_) => {
                return Err(OcrError::Timeout {
                    program: program.to_string(),
                })
            }
        };

        if !output.status.success() {
            return Err(OcrError::Failed {
                program: program.to_string(),
                status: output.status.to_string(),
                stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
            });
        }

        Ok(output.stdout)
    }

    async fn ocr_image(&self, image_path: &Path) -> Result<String, OcrError> {
        let stdout = self
            .run(
                &self.tesseract_path,
                &[image_path.as_os_str(), OsStr::new("stdout")],
            )
            .await?;
        Ok(String::from_utf8_lossy(&stdout).to_string())
    }

    async fn ocr_pdf(&self, pdf_path: &Path, work_dir: &Path) -> Result<String, OcrError> {
        let prefix = work_dir.join("page");
        let dpi = self.dpi.to_string();
        self.run(
            &self.pdftoppm_path,
            &[
                OsStr::new("-r"),
                OsStr::new(&dpi),
                OsStr::new("-png"),
                pdf_path.as_os_str(),
                prefix.as_os_str(),
            ],
        )
        .await?;

        let pages = rendered_pages(work_dir).await?;
        info!("Rasterized PDF into {} page(s)", pages.len());

        let mut text = String::new();
        for (i, page) in pages.iter().enumerate() {
            let page_text = self.ocr_image(page).await?;
            text.push_str(&format!("Page {}:\n{}\n\n", i + 1, page_text));
        }
        Ok(text)
    }

    /// Text layer first for PDFs, else OCR of the rasterized pages or the image.
    async fn extract_document(&self, data: &[u8], kind: DocumentKind) -> Result<String, OcrError> {
        if kind == DocumentKind::Pdf {
            if let Some(text) = pdf_text_layer(data).await {
                return Ok(text.trim().to_string());
            }
        }

        let work_dir = tempfile::Builder::new().prefix("resume-ocr-").tempdir()?;
        let input_path = work_dir.path().join(format!("input{}", kind.extension()));
        tokio::fs::write(&input_path, data).await?;

        let text = match kind {
            DocumentKind::Pdf => self.ocr_pdf(&input_path, work_dir.path()).await?,
            DocumentKind::Png | DocumentKind::Jpeg => self.ocr_image(&input_path).await?,
        };

        let text = text.trim().to_string();
        if text.is_empty() {
            warn!("OCR produced no text");
        }
        Ok(text)
    }
}

/// The PNGs `pdftoppm` wrote into `dir`, in page order.
///
/// Page numbers are zero-padded to the page count's width, so a name sort is a page sort.
async fn rendered_pages(dir: &Path) -> Result<Vec<PathBuf>, OcrError> {
    let mut pages = Vec::new();
    let mut entries = tokio::fs::read_dir(dir).await?;
    while let Some(entry) = entries.next_entry().await? {
        let path = entry.path();
        let is_page = path
            .file_name()
            .and_then(|n| n.to_str())
            .map(|n| n.starts_with("page") && n.ends_with(".png"))
            .unwrap_or(false);
        if is_page {
            pages.push(path);
        }
    }
    pages.sort();
    Ok(pages)
}

/// Embedded PDF text, if there is enough of it to skip OCR.
///
/// Parsing is CPU-bound, so it runs on the blocking pool; a panic inside the
/// parser is treated like an unreadable text layer.
async fn pdf_text_layer(data: &[u8]) -> Option<String> {
    let bytes = data.to_vec();
    let parsed =
        tokio::task::spawn_blocking(move || pdf_extract::extract_text_from_mem(&bytes)).await;

    match parsed {
        Ok(Ok(text)) if text.trim().chars().count() >= MIN_TEXT_LAYER_CHARS => Some(text),
        Ok(Ok(_)) => {
            debug!("PDF text layer too sparse, falling back to OCR");
            None
        }
        Ok(Err(e)) => {
            debug!("PDF text layer unreadable ({e}), falling back to OCR");
            None
        }
        Err(e) => {
            warn!("PDF text layer parser aborted ({e}), falling back to OCR");
            None
        }
    }
}

#[async_trait]
impl TextExtractor for TesseractCliOcr {
    async fn extract_text(&self, data: &[u8], kind: DocumentKind) -> Result<String, OcrError> {
        timeout(self.timeout, self.extract_document(data, kind))
            .await
            .map_err(|_| OcrError::DocumentTimeout(self.timeout))?
    }
}
