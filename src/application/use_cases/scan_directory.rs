//! # Scan Directory Use Case
//!
//! アップロード対象ファイルの発見ユースケース

use std::sync::Arc;

use crate::domain::entities::upload_task::UploadTask;
use crate::domain::repositories::file_repository::{FileRepository, ScanError};

/// ディレクトリスキャンユースケース
///
/// 指定されたディレクトリ直下のファイルからアップロードタスクを作成する
pub struct ScanDirectoryUseCase<R: FileRepository> {
    file_repository: Arc<R>,
}

impl<R: FileRepository> ScanDirectoryUseCase<R> {
    /// 新しいユースケースを作成
    ///
    /// # Arguments
    ///
    /// * `file_repository` - ファイルリポジトリ
    pub fn new(file_repository: Arc<R>) -> Self {
        Self { file_repository }
    }

    /// ファイルを列挙してアップロードタスクを作成する
    ///
    /// # Arguments
    ///
    /// * `local_dir` - ローカルディレクトリのパス
    /// * `destination_prefix` - オブジェクトキーの宛先プレフィックス
    ///
    /// # Errors
    ///
    /// ディレクトリを列挙できなかった場合にエラーを返す
    pub async fn execute(
        &self,
        local_dir: &str,
        destination_prefix: &str,
    ) -> Result<Vec<UploadTask>, ScanError> {
        let files = self.file_repository.list_files(local_dir).await?;

        Ok(files
            .iter()
            .filter_map(|path| UploadTask::from_path(path, destination_prefix))
            .collect())
    }
}
