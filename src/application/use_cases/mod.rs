//! # Use Cases
//!
//! アプリケーションのビジネスフロー（ユースケース）
//!
//! ## ユースケース
//!
//! - **ScanDirectoryUseCase**: アップロード対象ファイルの発見
//! - **UploadFilesUseCase**: 存在確認と条件付きアップロード
//! - **WriteReportsUseCase**: 重複・失敗レポートの出力
//! - **ProbeBucketUseCase**: バケットの疎通確認

pub mod probe_bucket;
pub mod scan_directory;
pub mod upload_files;
pub mod write_reports;
