//! # BatchResult Entity
//!
//! アップロード結果とその集計

use serde::{Deserialize, Serialize};

/// 1タスク分のアップロード結果
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UploadOutcome {
    /// アップロード成功
    Uploaded,
    /// リモートに既に存在したためスキップ
    Duplicate,
    /// 存在確認または書き込みに失敗
    Failed(String),
}

/// アップロードに失敗したファイル
///
/// `not_uploaded_files_*.json` のレコード形式でもある
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FailedUpload {
    /// ファイル名
    pub file: String,
    /// エラーメッセージ
    pub error: String,
}

/// バッチ全体のアップロード結果
///
/// `uploaded_count`、`duplicates`、`failures` の3つで全タスクを重複なく分割する
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BatchResult {
    /// アップロードされたファイル数
    pub uploaded_count: usize,
    /// リモートに既に存在したファイル名
    pub duplicates: Vec<String>,
    /// 失敗したファイル
    pub failures: Vec<FailedUpload>,
}

impl BatchResult {
    /// 空の結果を作成
    pub fn new() -> Self {
        Self::default()
    }

    /// タスクの結果を記録
    pub fn record(&mut self, file_name: &str, outcome: UploadOutcome) {
        match outcome {
            UploadOutcome::Uploaded => self.uploaded_count += 1,
            UploadOutcome::Duplicate => self.duplicates.push(file_name.to_string()),
            UploadOutcome::Failed(error) => self.failures.push(FailedUpload {
                file: file_name.to_string(),
                error,
            }),
        }
    }

    /// 記録されたタスクの総数
    pub fn total(&self) -> usize {
        self.uploaded_count + self.duplicates.len() + self.failures.len()
    }
}
