//! JSON Report Repository Implementation
//!
//! ReportRepositoryのJSON実装（レポートを整形済みJSONファイルとして出力）

use anyhow::{Context, Result};
use async_trait::async_trait;
use log::info;
use serde::Serialize;
use std::fs;
use std::path::{Path, PathBuf};

use crate::domain::entities::batch_result::FailedUpload;
use crate::domain::repositories::report_repository::ReportRepository;

/// JSONファイルベースのレポートリポジトリ
pub struct JsonReportRepository {
    output_dir: PathBuf,
}

impl JsonReportRepository {
    /// 新しいリポジトリを作成
    ///
    /// # Arguments
    ///
    /// * `output_dir` - レポートの出力先ディレクトリ
    pub fn new(output_dir: PathBuf) -> Self {
        Self { output_dir }
    }

    /// ファイルに書き込む（同期処理）
    fn write_sync<T: Serialize + ?Sized>(path: &Path, value: &T) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).context("Failed to create report directory")?;
        }

        let json = serde_json::to_string_pretty(value).context("Failed to serialize report")?;

        fs::write(path, json)
            .with_context(|| format!("Failed to write report file {}", path.display()))?;

        info!("Wrote report {}", path.display());

        Ok(())
    }

    async fn write<T>(&self, file_name: &str, value: T) -> Result<PathBuf>
    where
        T: Serialize + Send + 'static,
    {
        let path = self.output_dir.join(file_name);
        let target = path.clone();
        tokio::task::spawn_blocking(move || Self::write_sync(&target, &value))
            .await
            .map_err(|e| anyhow::anyhow!("Failed to spawn blocking task: {}", e))??;

        Ok(path)
    }
}

#[async_trait]
impl ReportRepository for JsonReportRepository {
    async fn save_duplicates(&self, file_name: &str, duplicates: &[String]) -> Result<PathBuf> {
        self.write(file_name, duplicates.to_vec()).await
    }

    async fn save_failures(&self, file_name: &str, failures: &[FailedUpload]) -> Result<PathBuf> {
        self.write(file_name, failures.to_vec()).await
    }
}
