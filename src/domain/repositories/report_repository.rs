//! # Report Repository Trait
//!
//! 実行レポートの永続化を抽象化

use anyhow::Result;
use async_trait::async_trait;
use std::path::PathBuf;

use crate::domain::entities::batch_result::FailedUpload;

/// レポートリポジトリ
///
/// 重複ファイル・失敗ファイルのレポートを保存するリポジトリ
#[async_trait]
pub trait ReportRepository: Send + Sync {
    /// 重複ファイル名のリストを保存する
    ///
    /// # Returns
    ///
    /// 書き込んだファイルのパス
    async fn save_duplicates(&self, file_name: &str, duplicates: &[String]) -> Result<PathBuf>;

    /// 失敗ファイルのリストを保存する
    ///
    /// # Returns
    ///
    /// 書き込んだファイルのパス
    async fn save_failures(&self, file_name: &str, failures: &[FailedUpload]) -> Result<PathBuf>;
}
