//! # RunTimestamp Value Object
//!
//! 実行開始時刻（レポートファイル名の相関に使用）

use chrono::{DateTime, Utc};
use std::fmt;

/// 実行開始時刻
///
/// 1回の実行で一度だけ生成され、両方のレポートファイル名で共有される
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunTimestamp(String);

impl RunTimestamp {
    /// 現在時刻から作成
    pub fn now() -> Self {
        Self::from_datetime(Utc::now())
    }

    /// 指定時刻から作成
    ///
    /// ファイル名に使えない `:` と `.` は `-` に置き換える
    pub fn from_datetime(at: DateTime<Utc>) -> Self {
        Self(at.format("%Y-%m-%dT%H-%M-%S-%3fZ").to_string())
    }

    /// 重複レポートのファイル名
    pub fn duplicates_file_name(&self) -> String {
        format!("duplicated_{}.json", self.0)
    }

    /// 失敗レポートのファイル名
    pub fn failures_file_name(&self) -> String {
        format!("not_uploaded_files_{}.json", self.0)
    }
}

impl fmt::Display for RunTimestamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
