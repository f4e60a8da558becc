//! # File Repository Trait
//!
//! ローカルファイルの列挙と読み込みを抽象化

use anyhow::Result;
use async_trait::async_trait;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// ディレクトリスキャンのエラー
#[derive(Debug, Error)]
pub enum ScanError {
    /// パスが存在しない、またはディレクトリではない
    #[error("directory not found: {}", .0.display())]
    DirectoryNotFound(PathBuf),
    /// その他のI/Oエラー
    #[error("failed to read directory {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// ファイルリポジトリ
///
/// アップロード対象ファイルの列挙と内容の読み込みを担当するリポジトリ
#[async_trait]
pub trait FileRepository: Send + Sync {
    /// ディレクトリ直下の通常ファイルを列挙する
    ///
    /// サブディレクトリには再帰しない
    ///
    /// # Arguments
    ///
    /// * `dir` - 対象ディレクトリのパス
    ///
    /// # Returns
    ///
    /// 通常ファイルのパスのリスト
    ///
    /// # Errors
    ///
    /// ディレクトリが存在しない場合は `ScanError::DirectoryNotFound`
    async fn list_files(&self, dir: &str) -> std::result::Result<Vec<PathBuf>, ScanError>;

    /// ファイルの内容を全て読み込む
    async fn read_file(&self, path: &Path) -> Result<Vec<u8>>;
}
