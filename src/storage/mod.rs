//! Object storage layer for presigned uploads.
//!
//! File bytes never pass through this server: the client asks for an
//! upload target here and sends the file straight to object storage.

use std::collections::BTreeMap;
use std::time::Duration;

use async_trait::async_trait;

use crate::errors::AppError;

/// How long issued upload targets stay valid.
const UPLOAD_EXPIRY: Duration = Duration::from_secs(15 * 60);

/// An upload target issued to a client: send the file to `url` with every
/// entry of `fields` applied to the request.
#[derive(Debug, Clone)]
pub struct PresignedUpload {
    pub url: String,
    pub fields: BTreeMap<String, String>,
}

/// Trait for the storage provider's presigning operation.
///
/// Abstracted as a trait so tests can run without a real S3 instance.
#[async_trait]
pub trait StorageClient: Send + Sync {
    /// Issue a short-lived upload target for the given object key.
    async fn presign_put(
        &self,
        key: &str,
        content_type: &str,
    ) -> Result<PresignedUpload, AppError>;
}

/// S3 implementation of `StorageClient`.
pub struct S3Storage {
    client: aws_sdk_s3::Client,
    bucket: String,
}

impl S3Storage {
    /// Create a client for the given bucket.
    ///
    /// Credentials and region come from the AWS environment; `endpoint`
    /// overrides the S3 endpoint for MinIO / LocalStack setups.
    pub async fn new(bucket: String, endpoint: Option<String>) -> Self {
        let mut config_loader = aws_config::defaults(aws_config::BehaviorVersion::latest());
        if let Some(endpoint) = endpoint {
            config_loader = config_loader.endpoint_url(&endpoint);
        }
        let sdk_config = config_loader.load().await;
        Self {
            client: aws_sdk_s3::Client::new(&sdk_config),
            bucket,
        }
    }
}

#[async_trait]
impl StorageClient for S3Storage {
    async fn presign_put(
        &self,
        key: &str,
        content_type: &str,
    ) -> Result<PresignedUpload, AppError> {
        let presigning = aws_sdk_s3::presigning::PresigningConfig::expires_in(UPLOAD_EXPIRY)
            .map_err(|e| AppError::Storage(format!("Invalid presigning config: {}", e)))?;

        let presigned = self
            .client
            .put_object()
            .bucket(&self.bucket)
            .key(key)
            .content_type(content_type)
            .presigned(presigning)
            .await
            .map_err(|e| AppError::Storage(format!("Failed to presign '{}': {}", key, e)))?;

        let fields = presigned
            .headers()
            .map(|(name, value)| (name.to_string(), value.to_string()))
            .collect();

        Ok(PresignedUpload {
            url: presigned.uri().to_string(),
            fields,
        })
    }
}

/// Build the object key for an uploaded file: target folder, millisecond
/// timestamp, then the file name reduced to a safe character set.
pub fn object_key(folder: &str, file_name: &str) -> String {
    let timestamp = chrono::Utc::now().timestamp_millis();
    format!(
        "{}/{}_{}",
        folder.trim_matches('/'),
        timestamp,
        sanitize_file_name(file_name)
    )
}

fn sanitize_file_name(name: &str) -> String {
    name.chars()
        .map(|c| {
            if c.is_alphanumeric() || c == '.' || c == '-' {
                c
            } else {
                '_'
            }
        })
        .collect()
}
