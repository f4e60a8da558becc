//! # Write Reports Use Case
//!
//! 重複・失敗レポートの出力ユースケース

use anyhow::{Context, Result};
use std::path::PathBuf;
use std::sync::Arc;

use crate::domain::entities::batch_result::BatchResult;
use crate::domain::entities::run_timestamp::RunTimestamp;
use crate::domain::repositories::report_repository::ReportRepository;

/// 書き込まれたレポートファイル
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WrittenReports {
    /// 重複レポートのパス
    pub duplicates: Option<PathBuf>,
    /// 失敗レポートのパス
    pub failures: Option<PathBuf>,
}

/// レポート出力ユースケース
///
/// 空でないバケットだけをタイムスタンプ付きファイルに書き出す
pub struct WriteReportsUseCase<R: ReportRepository> {
    report_repository: Arc<R>,
}

impl<R: ReportRepository> WriteReportsUseCase<R> {
    /// 新しいユースケースを作成
    pub fn new(report_repository: Arc<R>) -> Self {
        Self { report_repository }
    }

    /// レポートを書き出す
    ///
    /// # Arguments
    ///
    /// * `result` - バッチ全体の結果
    /// * `timestamp` - 実行開始時刻
    ///
    /// # Errors
    ///
    /// レポートファイルの書き込みに失敗した場合にエラーを返す
    pub async fn execute(
        &self,
        result: &BatchResult,
        timestamp: &RunTimestamp,
    ) -> Result<WrittenReports> {
        let mut written = WrittenReports::default();

        if !result.duplicates.is_empty() {
            let path = self
                .report_repository
                .save_duplicates(&timestamp.duplicates_file_name(), &result.duplicates)
                .await
                .context("Failed to write duplicates report")?;
            written.duplicates = Some(path);
        }

        if !result.failures.is_empty() {
            let path = self
                .report_repository
                .save_failures(&timestamp.failures_file_name(), &result.failures)
                .await
                .context("Failed to write failed files report")?;
            written.failures = Some(path);
        }

        Ok(written)
    }
}
