//! AWS Authentication
//!
//! 環境変数の認証情報でS3クライアントを作成

use aws_config::{BehaviorVersion, Region};
use aws_sdk_s3::config::Credentials;
use aws_sdk_s3::Client;
use log::info;

use crate::adapter::config::Config;

/// 設定から静的な認証情報を作成
pub fn static_credentials(config: &Config) -> Credentials {
    Credentials::new(
        config.access_key_id.clone(),
        config.secret_access_key.clone(),
        None,
        None,
        "environment",
    )
}

/// Creates an S3 client from the environment-provided credentials and region
///
/// `endpoint_url` が設定されている場合はパススタイルのアドレッシングを使う
pub async fn create_s3_client(config: &Config) -> Client {
    let sdk_config = aws_config::defaults(BehaviorVersion::latest())
        .region(Region::new(config.region.clone()))
        .credentials_provider(static_credentials(config))
        .load()
        .await;

    let mut builder = aws_sdk_s3::config::Builder::from(&sdk_config);
    if let Some(endpoint) = &config.endpoint_url {
        info!("Using S3-compatible endpoint {}", endpoint);
        builder = builder.endpoint_url(endpoint).force_path_style(true);
    }

    Client::from_conf(builder.build())
}
