//! Object storage for uploaded resume files.

pub mod s3;

use async_trait::async_trait;
use bytes::Bytes;
use thiserror::Error;

pub use s3::S3ObjectStore;

/// Key prefix under which every uploaded resume is stored.
pub const RESUME_PREFIX: &str = "interview_resumes";

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("upload of {key} failed: {message}")]
    Upload { key: String, message: String },

    #[error("download of {key} failed: {message}")]
    Download { key: String, message: String },

    #[error("downloaded object {key} is empty")]
    EmptyObject { key: String },

    #[error("delete of {key} failed: {message}")]
    Delete { key: String, message: String },
}

/// Where an uploaded object landed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoredObject {
    pub key: String,
    pub url: String,
}

#[async_trait]
pub trait ObjectStore: Send + Sync {
    async fn upload(&self, key: &str, data: Bytes, content_type: &str)
        -> Result<StoredObject, StorageError>;

    /// Fetches the object body. An empty body is an error: there is nothing to OCR.
    async fn download(&self, key: &str) -> Result<Bytes, StorageError>;

    async fn delete(&self, key: &str) -> Result<(), StorageError>;
}

/// Builds the storage key for a freshly uploaded resume.
pub fn resume_object_key(id: uuid::Uuid, extension: &str) -> String {
    format!("{RESUME_PREFIX}/{id}{extension}")
}
