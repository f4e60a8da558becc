//! Workflow Orchestration
//!
//! ワークフローのオーケストレーション

use anyhow::{Context, Result};
use log::info;

use std::path::PathBuf;
use std::sync::Arc;

use crate::adapter::repositories::json_report_repository::JsonReportRepository;
use crate::adapter::repositories::local_file_repository::LocalFileRepository;
use crate::application::dto::upload_config::UploadConfig;
use crate::application::use_cases::probe_bucket::{probe_failure_message, ProbeBucketUseCase};
use crate::application::use_cases::scan_directory::ScanDirectoryUseCase;
use crate::application::use_cases::upload_files::UploadFilesUseCase;
use crate::application::use_cases::write_reports::WriteReportsUseCase;
use crate::domain::entities::batch_result::BatchResult;
use crate::domain::entities::run_timestamp::RunTimestamp;
use crate::domain::repositories::file_repository::ScanError;
use crate::domain::repositories::storage_repository::StorageRepository;

use super::cli::UploadArgs;

/// Directory Upload Workflow
pub struct UploadWorkflow<S: StorageRepository> {
    scan_use_case: ScanDirectoryUseCase<LocalFileRepository>,
    upload_use_case: UploadFilesUseCase<S, LocalFileRepository>,
    report_use_case: WriteReportsUseCase<JsonReportRepository>,
    default_concurrency: usize,
}

impl<S: StorageRepository> UploadWorkflow<S> {
    /// Create a new workflow instance with dependency injection
    ///
    /// # Arguments
    ///
    /// * `storage` - ストレージリポジトリ
    /// * `report_dir` - レポートの出力先（通常はカレントディレクトリ）
    /// * `default_concurrency` - `--concurrency` 未指定時の同時実行数
    pub fn new(storage: Arc<S>, report_dir: PathBuf, default_concurrency: usize) -> Self {
        // Repository implementations
        let file_repo = Arc::new(LocalFileRepository::new());
        let report_repo = Arc::new(JsonReportRepository::new(report_dir));

        Self {
            scan_use_case: ScanDirectoryUseCase::new(file_repo.clone()),
            upload_use_case: UploadFilesUseCase::new(storage, file_repo),
            report_use_case: WriteReportsUseCase::new(report_repo),
            default_concurrency,
        }
    }

    /// Execute the upload workflow
    pub async fn execute(&self, args: &UploadArgs) -> Result<BatchResult> {
        // 両方のレポートで共有する
        let timestamp = RunTimestamp::now();
        info!("Starting upload run {}", timestamp);

        let upload_config = UploadConfig::new(
            args.bucket.clone(),
            args.destination_prefix.clone(),
            args.concurrency.unwrap_or(self.default_concurrency),
        );

        println!("✓ Using configuration:");
        println!("  Local path: {}", args.local_path);
        println!("  Bucket: {}", upload_config.bucket);
        println!("  Destination prefix: {}", upload_config.destination_prefix);
        println!("  Concurrency: {}", upload_config.concurrency_limit);

        let tasks = match self
            .scan_use_case
            .execute(&args.local_path, &upload_config.destination_prefix)
            .await
        {
            Ok(tasks) => tasks,
            Err(e @ ScanError::DirectoryNotFound(_)) => {
                println!("✗ Local directory not found: {}", args.local_path);
                println!("  Check the path and try again");
                return Err(e).context("Failed to list local files");
            }
            Err(e) => return Err(e).context("Failed to list local files"),
        };

        println!("✓ Found {} files in {}", tasks.len(), args.local_path);

        let result = if tasks.is_empty() {
            println!("No files to upload.");
            BatchResult::new()
        } else {
            self.upload_use_case.execute(tasks, &upload_config).await
        };

        println!("✓ Upload complete!");
        println!("  Uploaded: {}", result.uploaded_count);
        println!("  Duplicates (skipped): {}", result.duplicates.len());
        println!("  Failed: {}", result.failures.len());

        let reports = self.report_use_case.execute(&result, &timestamp).await?;
        if let Some(path) = &reports.duplicates {
            println!("⚠ Duplicate file list written to {}", path.display());
        }
        if let Some(path) = &reports.failures {
            println!("⚠ Failed file list written to {}", path.display());
        }

        Ok(result)
    }
}

/// Bucket Probe Workflow
pub struct ProbeWorkflow<S: StorageRepository> {
    probe_use_case: ProbeBucketUseCase<S>,
}

impl<S: StorageRepository> ProbeWorkflow<S> {
    pub fn new(storage: Arc<S>) -> Self {
        Self {
            probe_use_case: ProbeBucketUseCase::new(storage),
        }
    }

    /// Execute the probe workflow
    pub async fn execute(&self, bucket: &str) -> Result<()> {
        info!("Probing bucket {}", bucket);

        match self.probe_use_case.execute(bucket).await {
            Ok(()) => {
                println!("✓ Bucket '{}' is reachable. Configuration looks good.", bucket);
                Ok(())
            }
            Err(e) => {
                println!("✗ {}", probe_failure_message(&e));
                println!("  Details: {}", e);
                Err(e).context(format!("Bucket '{}' is not reachable", bucket))
            }
        }
    }
}
