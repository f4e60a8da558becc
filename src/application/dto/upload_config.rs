//! # Upload Configuration DTO
//!
//! アップロード設定のData Transfer Object

/// 同時実行数のデフォルト値
pub const DEFAULT_CONCURRENCY_LIMIT: usize = 50;

/// アップロード設定
///
/// バッチアップロードに必要な設定情報
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UploadConfig {
    /// アップロード先のバケット名
    pub bucket: String,
    /// オブジェクトキーの宛先プレフィックス
    pub destination_prefix: String,
    /// 同時に処理するタスクの上限（1以上）
    pub concurrency_limit: usize,
}

impl UploadConfig {
    /// 新しいアップロード設定を作成します。
    ///
    /// `concurrency_limit` が 0 の場合は 1 に切り上げます。
    ///
    /// # 例
    ///
    /// ```
    /// use bucketpush::application::dto::upload_config::UploadConfig;
    ///
    /// let config = UploadConfig::new("my-bucket".to_string(), "photos".to_string(), 10);
    /// assert_eq!(config.concurrency_limit, 10);
    ///
    /// let clamped = UploadConfig::new("my-bucket".to_string(), "photos".to_string(), 0);
    /// assert_eq!(clamped.concurrency_limit, 1);
    /// ```
    pub fn new(bucket: String, destination_prefix: String, concurrency_limit: usize) -> Self {
        Self {
            bucket,
            destination_prefix,
            concurrency_limit: concurrency_limit.max(1),
        }
    }
}
