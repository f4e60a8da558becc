//! S3 Error Classification
//!
//! SDKのエラーを `StorageError` に分類

use aws_sdk_s3::config::http::HttpResponse;
use aws_sdk_s3::error::{DisplayErrorContext, ProvideErrorMetadata, SdkError};
use aws_sdk_s3::operation::head_object::HeadObjectError;

use crate::domain::repositories::storage_repository::StorageError;

/// Convert an SDK error into a closed `StorageError`
///
/// エラーコード → HTTPステータス → 送信失敗 の順に判定する
pub fn classify_sdk_error<E>(err: &SdkError<E, HttpResponse>) -> StorageError
where
    E: ProvideErrorMetadata + std::error::Error + 'static,
{
    if matches!(
        err,
        SdkError::DispatchFailure(_) | SdkError::TimeoutError(_)
    ) {
        return StorageError::NetworkUnreachable(DisplayErrorContext(err).to_string());
    }

    let status = err.raw_response().map(|response| response.status().as_u16());
    let detail = err
        .code()
        .or_else(|| err.message())
        .map(str::to_string)
        .unwrap_or_else(|| DisplayErrorContext(err).to_string());

    classify(err.code(), status, detail)
}

/// HEAD Object の失敗を存在確認の結果に変換
///
/// `NotFound` は「存在しない」であってエラーではない
pub fn existence_from_head_error(
    err: &SdkError<HeadObjectError, HttpResponse>,
) -> Result<bool, StorageError> {
    if err.as_service_error().is_some_and(|se| se.is_not_found()) {
        return Ok(false);
    }

    Err(classify_sdk_error(err))
}

/// Classify by error code and HTTP status
pub fn classify(code: Option<&str>, status: Option<u16>, detail: String) -> StorageError {
    match code {
        Some("NotFound" | "NoSuchKey" | "NoSuchBucket") => StorageError::NotFound(detail),
        Some("InvalidAccessKeyId" | "InvalidToken" | "ExpiredToken") => {
            StorageError::InvalidCredentials(detail)
        }
        Some("SignatureDoesNotMatch") => StorageError::BadSignature(detail),
        Some("AccessDenied" | "Forbidden" | "AllAccessDisabled") => StorageError::Forbidden(detail),
        // HEADリクエストはボディを持たないため、コードが取れない場合はステータスで判定
        _ => match status {
            Some(404) => StorageError::NotFound(detail),
            Some(403) => StorageError::Forbidden(detail),
            _ => StorageError::Other(detail),
        },
    }
}
