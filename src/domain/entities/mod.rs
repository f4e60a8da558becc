//! # Domain Entities
//!
//! ビジネスエンティティとバリューオブジェクトを定義するモジュール
//!
//! ## エンティティ
//!
//! - **UploadTask**: 1ファイル分のアップロードタスク
//! - **BatchResult**: アップロード結果の集計（UploadOutcome, FailedUpload）
//! - **RunTimestamp**: 実行開始時刻のバリューオブジェクト

pub mod batch_result;
pub mod run_timestamp;
pub mod upload_task;
