//! # Storage Repository Trait
//!
//! オブジェクトストレージ操作を抽象化

use async_trait::async_trait;
use thiserror::Error;

#[cfg(test)]
use mockall::automock;

/// オブジェクトストレージのエラー
///
/// 各バリアントはストレージ側が返したエラーコードまたはメッセージを保持する
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StorageError {
    /// バケットまたはオブジェクトが存在しない
    #[error("{0}")]
    NotFound(String),
    /// アクセス権限がない
    #[error("{0}")]
    Forbidden(String),
    /// アクセスキーまたはトークンが無効
    #[error("{0}")]
    InvalidCredentials(String),
    /// 署名が一致しない（シークレットキーの誤り）
    #[error("{0}")]
    BadSignature(String),
    /// エンドポイントに到達できない
    #[error("{0}")]
    NetworkUnreachable(String),
    /// その他のエラー
    #[error("{0}")]
    Other(String),
}

/// ストレージリポジトリ
///
/// バケットへの存在確認・書き込み・疎通確認を担当するリポジトリ
#[cfg_attr(test, automock)]
#[async_trait]
pub trait StorageRepository: Send + Sync {
    /// オブジェクトが存在するか確認する
    ///
    /// # Returns
    ///
    /// 存在すれば `true`、存在しなければ `false`
    ///
    /// # Errors
    ///
    /// 「存在しない」以外の理由で確認できなかった場合にエラーを返す
    async fn object_exists(&self, bucket: &str, key: &str) -> Result<bool, StorageError>;

    /// オブジェクトを書き込む
    ///
    /// # Arguments
    ///
    /// * `bucket` - バケット名
    /// * `key` - オブジェクトキー
    /// * `body` - オブジェクトの内容
    async fn put_object(&self, bucket: &str, key: &str, body: Vec<u8>) -> Result<(), StorageError>;

    /// バケットに到達できるか確認する
    async fn probe_bucket(&self, bucket: &str) -> Result<(), StorageError>;
}
