use async_trait::async_trait;
use aws_sdk_s3::primitives::ByteStream;
use bytes::Bytes;
use tracing::info;

use super::{ObjectStore, StorageError, StoredObject};

/// S3 (or MinIO) backed object store. URLs are path-style: `{endpoint}/{bucket}/{key}`.
#[derive(Clone)]
pub struct S3ObjectStore {
    client: aws_sdk_s3::Client,
    bucket: String,
    endpoint: String,
}

impl S3ObjectStore {
    pub fn new(client: aws_sdk_s3::Client, bucket: String, endpoint: String) -> Self {
        Self {
            client,
            bucket,
            endpoint: endpoint.trim_end_matches('/').to_string(),
        }
    }

    pub fn object_url(&self, key: &str) -> String {
        format!("{}/{}/{}", self.endpoint, self.bucket, key)
    }
}

#[async_trait]
impl ObjectStore for S3ObjectStore {
    async fn upload(
        &self,
        key: &str,
        data: Bytes,
        content_type: &str,
    ) -> Result<StoredObject, StorageError> {
        self.client
            .put_object()
            .bucket(&self.bucket)
            .key(key)
            .body(ByteStream::from(data))
            .content_type(content_type)
            .send()
            .await
            .map_err(|e| StorageError::Upload {
                key: key.to_string(),
                message: e.to_string(),
            })?;

        info!("Uploaded resume to s3://{}/{}", self.bucket, key);

        Ok(StoredObject {
            key: key.to_string(),
            url: self.object_url(key),
        })
    }

    async fn download(&self, key: &str) -> Result<Bytes, StorageError> {
        let download_err = |message: String| StorageError::Download {
            key: key.to_string(),
            message,
        };

        let output = self
            .client
            .get_object()
            .bucket(&self.bucket)
            .key(key)
            .send()
            .await
            .map_err(|e| download_err(e.to_string()))?;

        let data = output
            .body
            .collect()
            .await
            .map_err(|e| download_err(e.to_string()))?
            .into_bytes();

        if data.is_empty() {
            return Err(StorageError::EmptyObject {
                key: key.to_string(),
            });
        }

        info!("Downloaded {} bytes from s3://{}/{}", data.len(), self.bucket, key);
        Ok(data)
    }

    async fn delete(&self, key: &str) -> Result<(), StorageError> {
        self.client
            .delete_object()
            .bucket(&self.bucket)
            .key(key)
            .send()
            .await
            .map_err(|e| StorageError::Delete {
                key: key.to_string(),
                message: e.to_string(),
            })?;

        info!("Deleted s3://{}/{}", self.bucket, key);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use aws_sdk_s3::config::{BehaviorVersion, Credentials, Region};

    fn offline_client() -> aws_sdk_s3::Client {
        let config = aws_sdk_s3::Config::builder()
            .behavior_version(BehaviorVersion::latest())
            .region(Region::new("us-east-1"))
            .credentials_provider(Credentials::new("key", "secret", None, None, "test"))
            .endpoint_url("http://127.0.0.1:9")
            .force_path_style(true)
            .build();
        aws_sdk_s3::Client::from_conf(config)
    }

    #[tokio::test]
    async fn test_object_url_is_path_style() {
        let store = S3ObjectStore::new(
            offline_client(),
            "resumes".to_string(),
            "http://localhost:9000/".to_string(),
        );
        assert_eq!(
            store.object_url("interview_resumes/abc.pdf"),
            "http://localhost:9000/resumes/interview_resumes/abc.pdf"
        );
    }
}
