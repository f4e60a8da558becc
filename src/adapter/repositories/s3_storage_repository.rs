//! S3 Storage Repository Implementation
//!
//! StorageRepositoryのS3実装

use async_trait::async_trait;
use aws_sdk_s3::primitives::ByteStream;
use aws_sdk_s3::Client;
use log::debug;

use crate::adapter::s3::errors::{classify_sdk_error, existence_from_head_error};
use crate::domain::repositories::storage_repository::{StorageError, StorageRepository};

/// S3ストレージリポジトリ
pub struct S3StorageRepository {
    client: Client,
}

impl S3StorageRepository {
    /// 新しいリポジトリを作成
    pub fn new(client: Client) -> Self {
        Self { client }
    }
}

#[cfg_attr(coverage_nightly, coverage(off))]
#[async_trait]
impl StorageRepository for S3StorageRepository {
    async fn object_exists(&self, bucket: &str, key: &str) -> Result<bool, StorageError> {
        match self.client.head_object().bucket(bucket).key(key).send().await {
            Ok(_) => Ok(true),
            Err(e) => {
                let exists = existence_from_head_error(&e)?;
                debug!("s3://{}/{} does not exist", bucket, key);
                Ok(exists)
            }
        }
    }

    async fn put_object(&self, bucket: &str, key: &str, body: Vec<u8>) -> Result<(), StorageError> {
        let size = body.len();

        self.client
            .put_object()
            .bucket(bucket)
            .key(key)
            .body(ByteStream::from(body))
            .send()
            .await
            .map_err(|e| classify_sdk_error(&e))?;

        debug!("Uploaded {} bytes to s3://{}/{}", size, bucket, key);
        Ok(())
    }

    async fn probe_bucket(&self, bucket: &str) -> Result<(), StorageError> {
        self.client
            .head_bucket()
            .bucket(bucket)
            .send()
            .await
            .map_err(|e| classify_sdk_error(&e))?;

        Ok(())
    }
}
