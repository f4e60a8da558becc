//! # Upload Files Use Case
//!
//! バッチアップロードユースケース（存在確認 → 条件付きアップロード → 結果集計）

use std::sync::Arc;

use futures::stream::{FuturesUnordered, StreamExt};
use log::{debug, info, warn};

use crate::application::dto::upload_config::UploadConfig;
use crate::domain::entities::batch_result::{BatchResult, UploadOutcome};
use crate::domain::entities::upload_task::UploadTask;
use crate::domain::repositories::file_repository::FileRepository;
use crate::domain::repositories::storage_repository::StorageRepository;

/// バッチアップロードユースケース
///
/// タスクを `concurrency_limit` 件ずつのウィンドウに分け、ウィンドウ内の全タスクを
/// 同時に開始し、全て完了してから次のウィンドウに進む。
/// 処理の遅いタスクがあるとウィンドウ内の実効並列度は上限を下回る。
pub struct UploadFilesUseCase<S: StorageRepository, F: FileRepository> {
    storage_repository: Arc<S>,
    file_repository: Arc<F>,
}

impl<S: StorageRepository, F: FileRepository> UploadFilesUseCase<S, F> {
    /// 新しいユースケースを作成
    ///
    /// # Arguments
    ///
    /// * `storage_repository` - ストレージリポジトリ
    /// * `file_repository` - ファイルリポジトリ
    pub fn new(storage_repository: Arc<S>, file_repository: Arc<F>) -> Self {
        Self {
            storage_repository,
            file_repository,
        }
    }

    /// 全タスクを処理し、進捗を標準出力に表示する
    ///
    /// # Arguments
    ///
    /// * `tasks` - アップロードタスク
    /// * `config` - アップロード設定
    ///
    /// # Returns
    ///
    /// 全タスクの結果。個々のタスクの失敗で処理が中断されることはない
    pub async fn execute(&self, tasks: Vec<UploadTask>, config: &UploadConfig) -> BatchResult {
        self.execute_with_progress(tasks, config, |processed, total| {
            println!("processed {} of {}", processed, total);
        })
        .await
    }

    /// 全タスクを処理し、タスク完了ごとに `on_progress(完了数, 総数)` を呼ぶ
    ///
    /// 進捗は完了順に通知されるが、`BatchResult` の重複・失敗リストは入力順に並ぶ
    pub async fn execute_with_progress<P>(
        &self,
        tasks: Vec<UploadTask>,
        config: &UploadConfig,
        mut on_progress: P,
    ) -> BatchResult
    where
        P: FnMut(usize, usize),
    {
        let total = tasks.len();
        let window_size = config.concurrency_limit.max(1);
        let total_windows = total.div_ceil(window_size);
        let bucket = config.bucket.as_str();

        let mut result = BatchResult::new();
        let mut processed = 0;

        info!(
            "Uploading {} files to bucket {} in {} windows of up to {}",
            total, bucket, total_windows, window_size
        );

        for (i, window) in tasks.chunks(window_size).enumerate() {
            debug!(
                "Dispatching window {}/{} ({} files)",
                i + 1,
                total_windows,
                window.len()
            );

            let mut in_flight: FuturesUnordered<_> = window
                .iter()
                .enumerate()
                .map(|(index, task)| async move { (index, self.process_task(task, bucket).await) })
                .collect();

            let mut outcomes = Vec::with_capacity(window.len());
            while let Some((index, outcome)) = in_flight.next().await {
                processed += 1;
                on_progress(processed, total);
                outcomes.push((index, outcome));
            }

            // 入力順で集計する
            outcomes.sort_by_key(|(index, _)| *index);
            for (index, outcome) in outcomes {
                result.record(&window[index].file_name, outcome);
            }
        }

        info!(
            "Finished: {} uploaded, {} duplicates, {} failed",
            result.uploaded_count,
            result.duplicates.len(),
            result.failures.len()
        );

        result
    }

    /// 1タスク分の存在確認とアップロード
    async fn process_task(&self, task: &UploadTask, bucket: &str) -> UploadOutcome {
        match self
            .storage_repository
            .object_exists(bucket, &task.remote_key)
            .await
        {
            Ok(true) => {
                debug!("Skipping {}: {} already exists", task.file_name, task.remote_key);
                UploadOutcome::Duplicate
            }
            Ok(false) => self.upload(task, bucket).await,
            Err(e) => {
                warn!("Existence check failed for {}: {}", task.remote_key, e);
                UploadOutcome::Failed(format!("existence check failed: {}", e))
            }
        }
    }

    async fn upload(&self, task: &UploadTask, bucket: &str) -> UploadOutcome {
        let body = match self.file_repository.read_file(&task.local_path).await {
            Ok(body) => body,
            Err(e) => {
                warn!("Failed to read {}: {:#}", task.local_path.display(), e);
                return UploadOutcome::Failed(format!("failed to read local file: {:#}", e));
            }
        };

        match self
            .storage_repository
            .put_object(bucket, &task.remote_key, body)
            .await
        {
            Ok(()) => {
                debug!("Uploaded {} to {}", task.file_name, task.remote_key);
                UploadOutcome::Uploaded
            }
            Err(e) => {
                warn!("Failed to upload {}: {}", task.remote_key, e);
                UploadOutcome::Failed(e.to_string())
            }
        }
    }
}
