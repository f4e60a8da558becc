//! S3 Adapter Modules
//!
//! S3統合のためのアダプターモジュール

pub mod errors;
