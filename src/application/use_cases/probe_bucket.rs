//! # Probe Bucket Use Case
//!
//! バケット疎通確認ユースケース

use std::sync::Arc;

use crate::domain::repositories::storage_repository::{StorageError, StorageRepository};

/// バケット疎通確認ユースケース
pub struct ProbeBucketUseCase<S: StorageRepository> {
    storage_repository: Arc<S>,
}

impl<S: StorageRepository> ProbeBucketUseCase<S> {
    /// 新しいユースケースを作成
    pub fn new(storage_repository: Arc<S>) -> Self {
        Self { storage_repository }
    }

    /// バケットに到達できるか確認する
    ///
    /// # Errors
    ///
    /// 分類されたストレージエラーを返す
    pub async fn execute(&self, bucket: &str) -> Result<(), StorageError> {
        self.storage_repository.probe_bucket(bucket).await
    }
}

/// 疎通確認失敗時にオペレーターへ表示する説明
pub fn probe_failure_message(err: &StorageError) -> &'static str {
    match err {
        StorageError::NotFound(_) => "Bucket not found. Check the bucket name and region.",
        StorageError::Forbidden(_) => {
            "Access denied. The credentials lack permission for this bucket."
        }
        StorageError::InvalidCredentials(_) => "Invalid access key. Check AWS_ACCESS_KEY_ID.",
        StorageError::BadSignature(_) => "Signature mismatch. Check AWS_SECRET_ACCESS_KEY.",
        StorageError::NetworkUnreachable(_) => {
            "Could not reach the storage endpoint. Check your network connection."
        }
        StorageError::Other(_) => "Unexpected error while checking the bucket.",
    }
}
