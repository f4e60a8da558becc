//! Environment Configuration
//!
//! 環境変数からの設定読み込み

use std::fmt;
use thiserror::Error;

use crate::application::dto::upload_config::DEFAULT_CONCURRENCY_LIMIT;

pub const ACCESS_KEY_ID_VAR: &str = "AWS_ACCESS_KEY_ID";
pub const SECRET_ACCESS_KEY_VAR: &str = "AWS_SECRET_ACCESS_KEY";
pub const REGION_VAR: &str = "AWS_REGION";
pub const ENDPOINT_URL_VAR: &str = "S3_ENDPOINT_URL";
pub const CONCURRENCY_VAR: &str = "UPLOAD_CONCURRENCY";

/// 設定読み込みのエラー
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("missing required environment variable {0} (set it in the environment or a .env file)")]
    MissingVar(&'static str),
    #[error("invalid value for {name}: {value:?} ({reason})")]
    InvalidVar {
        name: &'static str,
        value: String,
        reason: String,
    },
}

#[derive(Clone)]
pub struct Config {
    pub access_key_id: String,
    pub secret_access_key: String,
    pub region: String,

    // S3互換ストレージ（MinIOなど）用
    pub endpoint_url: Option<String>,

    pub concurrency_limit: usize,
}

impl Config {
    /// プロセスの環境変数から読み込む
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// 任意の参照関数から読み込む
    ///
    /// 空文字列は未設定として扱う
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |name: &str| {
            lookup(name)
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
        };
        let require = |name: &'static str| get(name).ok_or(ConfigError::MissingVar(name));

        let access_key_id = require(ACCESS_KEY_ID_VAR)?;
        let secret_access_key = require(SECRET_ACCESS_KEY_VAR)?;
        let region = require(REGION_VAR)?;

        let concurrency_limit = match get(CONCURRENCY_VAR) {
            None => DEFAULT_CONCURRENCY_LIMIT,
            Some(value) => match value.parse::<usize>() {
                Ok(n) if n > 0 => n,
                Ok(_) => {
                    return Err(ConfigError::InvalidVar {
                        name: CONCURRENCY_VAR,
                        value,
                        reason: "must be at least 1".to_string(),
                    })
                }
                Err(e) => {
                    return Err(ConfigError::InvalidVar {
                        name: CONCURRENCY_VAR,
                        value,
                        reason: e.to_string(),
                    })
                }
            },
        };

        Ok(Self {
            access_key_id,
            secret_access_key,
            region,
            endpoint_url: get(ENDPOINT_URL_VAR),
            concurrency_limit,
        })
    }
}

impl fmt::Debug for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Config")
            .field("access_key_id", &self.access_key_id)
            .field("secret_access_key", &"<redacted>")
            .field("region", &self.region)
            .field("endpoint_url", &self.endpoint_url)
            .field("concurrency_limit", &self.concurrency_limit)
            .finish()
    }
}
