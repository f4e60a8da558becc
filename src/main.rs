//! Bucketpush - Directory to S3 Uploader
//!
//! ローカルディレクトリのファイルを S3 にアップロード

// coverage_nightly cfg が設定されている場合のみ coverage_attribute を有効化
#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

use anyhow::{Context, Result};
use clap::Parser;
use std::sync::Arc;

use bucketpush::adapter::auth::create_s3_client;
use bucketpush::adapter::config::Config;
use bucketpush::adapter::repositories::s3_storage_repository::S3StorageRepository;
use bucketpush::driver::{Args, Command, ProbeWorkflow, UploadWorkflow};

#[cfg_attr(coverage_nightly, coverage(off))]
#[tokio::main]
async fn main() -> Result<()> {
    env_logger::init();

    let args = Args::parse();

    // .env is optional; real environment variables take precedence
    dotenvy::dotenv().ok();
    let config = Config::from_env()?;

    let storage = Arc::new(S3StorageRepository::new(create_s3_client(&config).await));

    match args.command {
        Command::Upload(upload_args) => {
            let report_dir =
                std::env::current_dir().context("Failed to resolve current directory")?;
            let workflow = UploadWorkflow::new(storage, report_dir, config.concurrency_limit);
            workflow.execute(&upload_args).await?;
        }
        Command::Test(test_args) => {
            ProbeWorkflow::new(storage).execute(&test_args.bucket).await?;
        }
    }

    Ok(())
}
