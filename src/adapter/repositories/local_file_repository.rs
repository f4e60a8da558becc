//! Local File Repository Implementation
//!
//! FileRepositoryのファイルシステム実装

use anyhow::{Context, Result};
use async_trait::async_trait;
use log::{info, warn};
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

use crate::domain::repositories::file_repository::{FileRepository, ScanError};

/// ファイルシステムベースのファイルリポジトリ
pub struct LocalFileRepository;

impl LocalFileRepository {
    /// 新しいリポジトリを作成
    pub fn new() -> Self {
        Self
    }

    /// ディレクトリ直下のファイルを列挙する（内部実装）
    fn list_files_internal(dir: &str) -> Result<Vec<PathBuf>, ScanError> {
        let expanded_path = shellexpand::tilde(dir);
        let dir = PathBuf::from(expanded_path.as_ref());

        if !dir.is_dir() {
            return Err(ScanError::DirectoryNotFound(dir));
        }

        // ルートが読めない場合は列挙全体の失敗とする
        std::fs::read_dir(&dir).map_err(|source| ScanError::Io {
            path: dir.clone(),
            source,
        })?;

        let mut files = Vec::new();

        for entry in WalkDir::new(&dir)
            .min_depth(1)
            .max_depth(1)
            .follow_links(true)
            .sort_by_file_name()
        {
            match entry {
                Ok(entry) if entry.file_type().is_file() => files.push(entry.into_path()),
                Ok(_) => {}
                Err(e) => warn!("Skipping unreadable entry in {}: {}", dir.display(), e),
            }
        }

        info!("Found {} files in {}", files.len(), dir.display());

        Ok(files)
    }
}

#[async_trait]
impl FileRepository for LocalFileRepository {
    async fn list_files(&self, dir: &str) -> Result<Vec<PathBuf>, ScanError> {
        let dir = dir.to_string();
        tokio::task::spawn_blocking(move || Self::list_files_internal(&dir))
            .await
            .map_err(|e| ScanError::Io {
                path: PathBuf::new(),
                source: std::io::Error::other(format!("Failed to spawn blocking task: {}", e)),
            })?
    }

    async fn read_file(&self, path: &Path) -> Result<Vec<u8>> {
        tokio::fs::read(path)
            .await
            .with_context(|| format!("Failed to read {}", path.display()))
    }
}

impl Default for LocalFileRepository {
    fn default() -> Self {
        Self::new()
    }
}
