//! Workflow Integration Tests
//!
//! UploadWorkflow / ProbeWorkflow の統合テスト

use async_trait::async_trait;
use bucketpush::domain::repositories::file_repository::ScanError;
use bucketpush::domain::repositories::storage_repository::{StorageError, StorageRepository};
use bucketpush::driver::cli::UploadArgs;
use bucketpush::driver::workflow::{ProbeWorkflow, UploadWorkflow};
use std::collections::{HashMap, HashSet};
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};
use tempfile::TempDir;

/// テスト用のストレージ（呼び出しを記録する）
#[derive(Default)]
struct StubStorage {
    existing: HashSet<String>,
    put_errors: HashMap<String, StorageError>,
    probe_error: Option<StorageError>,
    exists_calls: Mutex<Vec<String>>,
    put_calls: Mutex<Vec<(String, String, Vec<u8>)>>,
}

impl StubStorage {
    fn put_keys(&self) -> Vec<String> {
        let mut keys: Vec<String> = self
            .put_calls
            .lock()
            .unwrap()
            .iter()
            .map(|(_, key, _)| key.clone())
            .collect();
        keys.sort();
        keys
    }
}

#[async_trait]
impl StorageRepository for StubStorage {
    async fn object_exists(&self, _bucket: &str, key: &str) -> Result<bool, StorageError> {
        self.exists_calls.lock().unwrap().push(key.to_string());
        Ok(self.existing.contains(key))
    }

    async fn put_object(&self, bucket: &str, key: &str, body: Vec<u8>) -> Result<(), StorageError> {
        self.put_calls
            .lock()
            .unwrap()
            .push((bucket.to_string(), key.to_string(), body));
        match self.put_errors.get(key) {
            Some(err) => Err(err.clone()),
            None => Ok(()),
        }
    }

    async fn probe_bucket(&self, _bucket: &str) -> Result<(), StorageError> {
        match &self.probe_error {
            Some(err) => Err(err.clone()),
            None => Ok(()),
        }
    }
}

/// テスト用のローカルディレクトリを作成
fn create_local_dir(dir: &Path, files: &[&str]) -> PathBuf {
    let local_dir = dir.join("local");
    fs::create_dir(&local_dir).unwrap();
    for name in files {
        fs::write(local_dir.join(name), format!("content of {}", name)).unwrap();
    }
    local_dir
}

fn upload_args(local_dir: &Path) -> UploadArgs {
    UploadArgs {
        local_path: local_dir.to_string_lossy().to_string(),
        bucket: "my-bucket".to_string(),
        destination_prefix: "photos".to_string(),
        concurrency: None,
    }
}

/// レポートディレクトリ内のファイル名（ソート済み）
fn report_files(dir: &Path) -> Vec<String> {
    let mut names: Vec<String> = fs::read_dir(dir)
        .unwrap()
        .map(|e| e.unwrap().file_name().to_string_lossy().to_string())
        .collect();
    names.sort();
    names
}

fn read_report(dir: &Path, prefix: &str) -> serde_json::Value {
    let name = report_files(dir)
        .into_iter()
        .find(|name| name.starts_with(prefix))
        .unwrap_or_else(|| panic!("no report starting with {}", prefix));
    serde_json::from_str(&fs::read_to_string(dir.join(name)).unwrap()).unwrap()
}

#[tokio::test]
async fn test_upload_all_new_files_writes_no_reports() {
    let temp_dir = TempDir::new().unwrap();
    let report_dir = TempDir::new().unwrap();
    let local_dir = create_local_dir(temp_dir.path(), &["a.txt", "b.txt", "c.txt"]);

    let storage = Arc::new(StubStorage::default());
    let workflow = UploadWorkflow::new(storage.clone(), report_dir.path().to_path_buf(), 50);

    let result = workflow.execute(&upload_args(&local_dir)).await.unwrap();

    assert_eq!(result.uploaded_count, 3);
    assert!(result.duplicates.is_empty());
    assert!(result.failures.is_empty());
    assert_eq!(
        storage.put_keys(),
        vec!["photos/a.txt", "photos/b.txt", "photos/c.txt"]
    );
    assert!(report_files(report_dir.path()).is_empty());
}

#[tokio::test]
async fn test_upload_sends_file_contents() {
    let temp_dir = TempDir::new().unwrap();
    let report_dir = TempDir::new().unwrap();
    let local_dir = create_local_dir(temp_dir.path(), &["a.txt"]);

    let storage = Arc::new(StubStorage::default());
    let workflow = UploadWorkflow::new(storage.clone(), report_dir.path().to_path_buf(), 50);

    workflow.execute(&upload_args(&local_dir)).await.unwrap();

    let calls = storage.put_calls.lock().unwrap();
    assert_eq!(calls.len(), 1);
    assert_eq!(calls[0].0, "my-bucket");
    assert_eq!(calls[0].1, "photos/a.txt");
    assert_eq!(calls[0].2, b"content of a.txt".to_vec());
}

#[tokio::test]
async fn test_existing_file_is_reported_as_duplicate() {
    let temp_dir = TempDir::new().unwrap();
    let report_dir = TempDir::new().unwrap();
    let local_dir = create_local_dir(temp_dir.path(), &["a.txt", "b.txt"]);

    let storage = Arc::new(StubStorage {
        existing: HashSet::from(["photos/b.txt".to_string()]),
        ..Default::default()
    });
    let workflow = UploadWorkflow::new(storage.clone(), report_dir.path().to_path_buf(), 50);

    let result = workflow.execute(&upload_args(&local_dir)).await.unwrap();

    assert_eq!(result.uploaded_count, 1);
    assert_eq!(result.duplicates, vec!["b.txt".to_string()]);
    assert!(result.failures.is_empty());
    // 既存のオブジェクトには書き込まない
    assert_eq!(storage.put_keys(), vec!["photos/a.txt"]);

    let files = report_files(report_dir.path());
    assert_eq!(files.len(), 1);
    assert!(files[0].starts_with("duplicated_"));
    assert_eq!(
        read_report(report_dir.path(), "duplicated_"),
        serde_json::json!(["b.txt"])
    );
}

#[tokio::test]
async fn test_rejected_write_is_reported_as_failure() {
    let temp_dir = TempDir::new().unwrap();
    let report_dir = TempDir::new().unwrap();
    let local_dir = create_local_dir(temp_dir.path(), &["a.txt", "b.txt"]);

    let storage = Arc::new(StubStorage {
        put_errors: HashMap::from([(
            "photos/a.txt".to_string(),
            StorageError::Forbidden("AccessDenied".to_string()),
        )]),
        ..Default::default()
    });
    let workflow = UploadWorkflow::new(storage.clone(), report_dir.path().to_path_buf(), 50);

    let result = workflow.execute(&upload_args(&local_dir)).await.unwrap();

    assert_eq!(result.uploaded_count, 1);
    assert_eq!(result.failures.len(), 1);
    assert_eq!(result.failures[0].file, "a.txt");
    assert_eq!(result.failures[0].error, "AccessDenied");

    let files = report_files(report_dir.path());
    assert_eq!(files.len(), 1);
    assert!(files[0].starts_with("not_uploaded_files_"));
    assert_eq!(
        read_report(report_dir.path(), "not_uploaded_files_"),
        serde_json::json!([{"file": "a.txt", "error": "AccessDenied"}])
    );
}

#[tokio::test]
async fn test_both_reports_share_timestamp() {
    let temp_dir = TempDir::new().unwrap();
    let report_dir = TempDir::new().unwrap();
    let local_dir = create_local_dir(temp_dir.path(), &["a.txt", "b.txt"]);

    let storage = Arc::new(StubStorage {
        existing: HashSet::from(["photos/a.txt".to_string()]),
        put_errors: HashMap::from([(
            "photos/b.txt".to_string(),
            StorageError::Other("InternalError".to_string()),
        )]),
        ..Default::default()
    });
    let workflow = UploadWorkflow::new(storage, report_dir.path().to_path_buf(), 50);

    let result = workflow.execute(&upload_args(&local_dir)).await.unwrap();
    assert_eq!(result.total(), 2);

    let files = report_files(report_dir.path());
    assert_eq!(files.len(), 2);
    let duplicated_ts = files[0]
        .strip_prefix("duplicated_")
        .and_then(|s| s.strip_suffix(".json"))
        .unwrap();
    let failed_ts = files[1]
        .strip_prefix("not_uploaded_files_")
        .and_then(|s| s.strip_suffix(".json"))
        .unwrap();
    assert_eq!(duplicated_ts, failed_ts);
}

#[tokio::test]
async fn test_missing_directory_aborts_before_any_task() {
    let temp_dir = TempDir::new().unwrap();
    let report_dir = TempDir::new().unwrap();

    let storage = Arc::new(StubStorage::default());
    let workflow = UploadWorkflow::new(storage.clone(), report_dir.path().to_path_buf(), 50);

    let err = workflow
        .execute(&upload_args(&temp_dir.path().join("missing")))
        .await
        .unwrap_err();

    assert!(matches!(
        err.downcast_ref::<ScanError>(),
        Some(ScanError::DirectoryNotFound(_))
    ));
    assert!(storage.exists_calls.lock().unwrap().is_empty());
    assert!(storage.put_calls.lock().unwrap().is_empty());
    assert!(report_files(report_dir.path()).is_empty());
}

#[tokio::test]
async fn test_subdirectories_are_not_uploaded() {
    let temp_dir = TempDir::new().unwrap();
    let report_dir = TempDir::new().unwrap();
    let local_dir = create_local_dir(temp_dir.path(), &["a.txt"]);
    fs::create_dir(local_dir.join("nested")).unwrap();
    fs::write(local_dir.join("nested").join("b.txt"), "b").unwrap();

    let storage = Arc::new(StubStorage::default());
    let workflow = UploadWorkflow::new(storage.clone(), report_dir.path().to_path_buf(), 50);

    let result = workflow.execute(&upload_args(&local_dir)).await.unwrap();

    assert_eq!(result.total(), 1);
    assert_eq!(storage.put_keys(), vec!["photos/a.txt"]);
}

#[tokio::test]
async fn test_empty_directory() {
    let temp_dir = TempDir::new().unwrap();
    let report_dir = TempDir::new().unwrap();
    let local_dir = create_local_dir(temp_dir.path(), &[]);

    let storage = Arc::new(StubStorage::default());
    let workflow = UploadWorkflow::new(storage.clone(), report_dir.path().to_path_buf(), 50);

    let result = workflow.execute(&upload_args(&local_dir)).await.unwrap();

    assert_eq!(result.total(), 0);
    assert!(storage.exists_calls.lock().unwrap().is_empty());
    assert!(report_files(report_dir.path()).is_empty());
}

#[tokio::test]
async fn test_explicit_concurrency_processes_every_file() {
    let temp_dir = TempDir::new().unwrap();
    let report_dir = TempDir::new().unwrap();
    let names: Vec<String> = (0..7).map(|i| format!("file-{}.txt", i)).collect();
    let names: Vec<&str> = names.iter().map(String::as_str).collect();
    let local_dir = create_local_dir(temp_dir.path(), &names);

    let storage = Arc::new(StubStorage::default());
    let workflow = UploadWorkflow::new(storage.clone(), report_dir.path().to_path_buf(), 50);

    let mut args = upload_args(&local_dir);
    args.concurrency = Some(2);
    let result = workflow.execute(&args).await.unwrap();

    assert_eq!(result.uploaded_count, 7);
    assert_eq!(storage.exists_calls.lock().unwrap().len(), 7);
}

#[tokio::test]
async fn test_probe_workflow_success() {
    let storage = Arc::new(StubStorage::default());
    let workflow = ProbeWorkflow::new(storage);

    assert!(workflow.execute("my-bucket").await.is_ok());
}

#[tokio::test]
async fn test_probe_workflow_failure() {
    let storage = Arc::new(StubStorage {
        probe_error: Some(StorageError::BadSignature("SignatureDoesNotMatch".to_string())),
        ..Default::default()
    });
    let workflow = ProbeWorkflow::new(storage);

    let err = workflow.execute("my-bucket").await.unwrap_err();

    assert_eq!(
        err.downcast_ref::<StorageError>(),
        Some(&StorageError::BadSignature("SignatureDoesNotMatch".to_string()))
    );
}
