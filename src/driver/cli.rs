//! CLI Argument Parsing
//!
//! CLIの引数解析

use clap::{Args as ClapArgs, Parser, Subcommand};

/// ローカルディレクトリのファイルをS3バケットにアップロードするCLI
#[derive(Parser, Debug, Clone)]
#[command(name = "bucketpush")]
#[command(
    about = "Upload the files of a local directory to an S3 bucket, skipping existing objects",
    long_about = None
)]
pub struct Args {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Upload every file directly under LOCAL_PATH to BUCKET/DESTINATION_PREFIX
    Upload(UploadArgs),
    /// Check that BUCKET is reachable with the configured credentials
    Test(TestArgs),
}

#[derive(ClapArgs, Debug, Clone)]
pub struct UploadArgs {
    /// Local directory whose files are uploaded (not recursive)
    pub local_path: String,

    /// Destination bucket name
    pub bucket: String,

    /// Key prefix the files are uploaded under
    pub destination_prefix: String,

    /// Maximum number of files processed at once (defaults to UPLOAD_CONCURRENCY or 50)
    #[arg(
        short = 'j',
        long,
        value_parser = clap::builder::RangedU64ValueParser::<usize>::new().range(1..)
    )]
    pub concurrency: Option<usize>,
}

#[derive(ClapArgs, Debug, Clone)]
pub struct TestArgs {
    /// Bucket name to probe
    pub bucket: String,
}
