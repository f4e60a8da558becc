//! # UploadTask Entity
//!
//! 1ファイル分のアップロードタスク

use std::path::{Path, PathBuf};

use crate::domain::services::remote_key::RemoteKeyService;

/// アップロードタスク
///
/// スキャンされたファイル1つにつき1つ作成され、結果が記録されるまで変更されない
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UploadTask {
    /// ファイル名（ディレクトリ部分を含まない）
    pub file_name: String,
    /// ローカルファイルのパス
    pub local_path: PathBuf,
    /// バケット内のオブジェクトキー
    pub remote_key: String,
}

impl UploadTask {
    /// 新しいアップロードタスクを作成
    ///
    /// # Arguments
    ///
    /// * `file_name` - ファイル名
    /// * `local_path` - ローカルファイルのパス
    /// * `destination_prefix` - 宛先プレフィックス
    pub fn new(file_name: String, local_path: PathBuf, destination_prefix: &str) -> Self {
        let remote_key = RemoteKeyService::derive(destination_prefix, &file_name);
        Self {
            file_name,
            local_path,
            remote_key,
        }
    }

    /// ファイルパスからタスクを作成
    ///
    /// パスにファイル名部分がない場合は `None`
    pub fn from_path(path: &Path, destination_prefix: &str) -> Option<Self> {
        let file_name = path.file_name()?.to_string_lossy().to_string();
        Some(Self::new(file_name, path.to_path_buf(), destination_prefix))
    }
}
