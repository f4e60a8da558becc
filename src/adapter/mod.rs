//! Adapter Layer
//!
//! 外部システム（S3, ファイルシステム, 環境変数）との統合

pub mod auth;
pub mod config;
pub mod repositories;
pub mod s3;
