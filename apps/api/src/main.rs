mod analysis;
mod config;
mod errors;
mod models;
mod ocr;
mod resumes;
mod routes;
mod state;
mod storage;
mod summarizer;

use anyhow::{Context, Result};
use aws_sdk_s3::config::{Credentials, Region};
use axum::http::{HeaderValue, Method};
use std::net::SocketAddr;
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use std::sync::Arc;

use crate::config::Config;
use crate::ocr::TesseractCliOcr;
use crate::resumes::store::ResumeStore;
use crate::routes::build_router;
use crate::state::AppState;
use crate::storage::S3ObjectStore;
use crate::summarizer::HuggingFaceSummarizer;

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration first (fails on missing required env vars)
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_PKG_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting Resume Analysis API v{}", env!("CARGO_PKG_VERSION"));

    // Initialize S3 / MinIO
    let s3 = build_s3_client(&config).await;
    let objects = S3ObjectStore::new(s3, config.s3_bucket.clone(), config.s3_endpoint.clone());
    info!("S3 client initialized (bucket: {})", config.s3_bucket);

    // Initialize OCR
    let ocr = TesseractCliOcr::new(
        config.tesseract_path.clone(),
        config.pdftoppm_path.clone(),
        config.ocr_dpi,
        config.ocr_timeout,
    );
    info!("OCR initialized (tesseract: {})", config.tesseract_path);

    // Initialize remote summarizer
    let summarizer = HuggingFaceSummarizer::new(
        config.hf_api_url.clone(),
        config.hf_api_key.clone(),
        config.summarizer_timeout,
    )?;
    if config.hf_api_key.is_some() {
        info!("Remote summarizer initialized ({})", config.hf_api_url);
    } else {
        info!("HF_API_KEY not set; summaries will be rule-based");
    }

    // Build app state
    let state = AppState {
        store: ResumeStore::new(),
        objects: Arc::new(objects),
        ocr: Arc::new(ocr),
        summarizer: Arc::new(summarizer),
    };

    // Build router
    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(build_cors(&config.cors_allowed_origins)?);

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

/// Constructs an S3 client configured for MinIO (local) or AWS (production).
async fn build_s3_client(config: &Config) -> aws_sdk_s3::Client {
    let credentials = Credentials::new(
        &config.aws_access_key_id,
        &config.aws_secret_access_key,
        None,
        None,
        "resume-api-static",
    );

    let sdk_config = aws_config::defaults(aws_config::BehaviorVersion::latest())
        .region(Region::new("us-east-1"))
        .credentials_provider(credentials)
        .endpoint_url(&config.s3_endpoint)
        .load()
        .await;

    // MinIO only speaks path-style addressing
    let s3_config = aws_sdk_s3::config::Builder::from(&sdk_config)
        .force_path_style(true)
        .build();

    aws_sdk_s3::Client::from_conf(s3_config)
}

/// CORS restricted to the configured frontend origins.
fn build_cors(origins: &[String]) -> Result<CorsLayer> {
    let origins = origins
        .iter()
        .map(|o| {
            o.parse::<HeaderValue>()
                .with_context(|| format!("Invalid CORS origin '{o}'"))
        })
        .collect::<Result<Vec<_>>>()?;

    Ok(CorsLayer::new()
        .allow_origin(origins)
        .allow_methods([Method::GET, Method::POST, Method::DELETE])
        .allow_headers(Any))
}
