//! Repository Implementations
//!
//! Domain層のRepositoryトレイトの実装

pub mod json_report_repository;
pub mod local_file_repository;
pub mod s3_storage_repository;
