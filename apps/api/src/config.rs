use std::time::Duration;

use anyhow::{Context, Result};

use crate::summarizer::DEFAULT_API_URL;

const DEFAULT_CORS_ORIGINS: &str =
    "http://localhost:3000,http://127.0.0.1:3000,http://localhost:5173,http://localhost:5174";

/// Application configuration loaded from environment variables.
/// Startup fails if a required variable is missing or a number doesn't parse.
#[derive(Debug, Clone)]
pub struct Config {
    pub s3_bucket: String,
    pub s3_endpoint: String,
    pub aws_access_key_id: String,
    pub aws_secret_access_key: String,
    /// Without a key the remote summarizer is skipped and every summary is rule-based.
    pub hf_api_key: Option<String>,
    pub hf_api_url: String,
    pub summarizer_timeout: Duration,
    pub tesseract_path: String,
    pub pdftoppm_path: String,
    pub ocr_timeout: Duration,
    pub ocr_dpi: u32,
    pub cors_allowed_origins: Vec<String>,
    pub port: u16,
    pub rust_log: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Ok(Config {
            s3_bucket: require_env("S3_BUCKET")?,
            s3_endpoint: require_env("S3_ENDPOINT")?,
            aws_access_key_id: require_env("AWS_ACCESS_KEY_ID")?,
            aws_secret_access_key: require_env("AWS_SECRET_ACCESS_KEY")?,
            hf_api_key: std::env::var("HF_API_KEY").ok().filter(|k| !k.trim().is_empty()),
            hf_api_url: env_or("HF_API_URL", DEFAULT_API_URL),
            summarizer_timeout: Duration::from_secs(parse_env("SUMMARIZER_TIMEOUT_SECS", 30)?),
            tesseract_path: env_or("TESSERACT_PATH", "tesseract"),
            pdftoppm_path: env_or("PDFTOPPM_PATH", "pdftoppm"),
            ocr_timeout: Duration::from_secs(parse_env("OCR_TIMEOUT_SECS", 120)?),
            ocr_dpi: parse_env("OCR_DPI", 300)?,
            cors_allowed_origins: parse_origins(&env_or("CORS_ALLOWED_ORIGINS", DEFAULT_CORS_ORIGINS)),
            port: parse_env("PORT", 8000)?,
            rust_log: env_or("RUST_LOG", "info"),
        })
    }
}

fn require_env(key: &str) -> Result<String> {
    std::env::var(key).with_context(|| format!("Required environment variable '{key}' is not set"))
}

fn env_or(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}

fn parse_env<T>(key: &str, default: T) -> Result<T>
where
    T: std::str::FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match std::env::var(key) {
        Ok(raw) => raw
            .trim()
            .parse::<T>()
            .with_context(|| format!("{key} must be a valid number, got '{raw}'")),
        Err(_) => Ok(default),
    }
}

fn parse_origins(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|o| !o.is_empty())
        .map(String::from)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_origins_trims_and_skips_blanks() {
        assert_eq!(
            parse_origins(" http://a.test , ,http://b.test,"),
            vec!["http://a.test", "http://b.test"]
        );
    }

    #[test]
    fn test_default_origins_are_the_local_dev_servers() {
        let origins = parse_origins(DEFAULT_CORS_ORIGINS);
        assert_eq!(origins.len(), 4);
        assert!(origins.contains(&"http://localhost:5173".to_string()));
    }

    #[test]
    fn test_parse_env_uses_default_when_unset() {
        let value: u16 = parse_env("RESUME_API_TEST_UNSET_VARIABLE", 8000).unwrap();
        assert_eq!(value, 8000);
    }

    #[test]
    fn test_parse_env_rejects_garbage() {
        std::env::set_var("RESUME_API_TEST_BAD_PORT", "eighty");
        let result: Result<u16> = parse_env("RESUME_API_TEST_BAD_PORT", 8000);
        assert!(result.is_err());
        std::env::remove_var("RESUME_API_TEST_BAD_PORT");
    }
}
