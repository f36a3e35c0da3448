use futures_util::StreamExt;
use url::Url;

use crate::config::HttpSettings;
use crate::{BackendError, FailureKind};

pub(crate) fn build_client(settings: &HttpSettings) -> Result<reqwest::Client, BackendError> {
    reqwest::Client::builder()
        .connect_timeout(settings.connect_timeout)
        .timeout(settings.request_timeout)
        .build()
        .map_err(|err| BackendError::new(FailureKind::Network, err.to_string()))
}

pub(crate) fn parse_url(raw: &str) -> Result<Url, BackendError> {
    Url::parse(raw).map_err(|err| BackendError::new(FailureKind::InvalidUrl, err.to_string()))
}

/// Fails on non-success status, then reads the body up to `max_bytes`.
pub(crate) async fn read_body(
    response: reqwest::Response,
    max_bytes: u64,
) -> Result<Vec<u8>, BackendError> {
    let status = response.status();
    if !status.is_success() {
        return Err(BackendError::new(
            FailureKind::HttpStatus(status.as_u16()),
            status.to_string(),
        ));
    }

    if let Some(content_len) = response.content_length() {
        if content_len > max_bytes {
            return Err(too_large(max_bytes, Some(content_len)));
        }
    }

    let mut bytes = Vec::new();
    let mut stream = response.bytes_stream();
    while let Some(chunk) = stream.next().await {
        let chunk = chunk.map_err(map_reqwest_error)?;
        let next_len = bytes.len() as u64 + chunk.len() as u64;
        if next_len > max_bytes {
            return Err(too_large(max_bytes, Some(next_len)));
        }
        bytes.extend_from_slice(&chunk);
    }
    Ok(bytes)
}

pub(crate) fn map_reqwest_error(err: reqwest::Error) -> BackendError {
    if err.is_timeout() {
        return BackendError::new(FailureKind::Timeout, err.to_string());
    }
    if err.is_decode() {
        return BackendError::new(FailureKind::Decode, err.to_string());
    }
    BackendError::new(FailureKind::Network, err.to_string())
}

fn too_large(max_bytes: u64, actual: Option<u64>) -> BackendError {
    BackendError::new(
        FailureKind::TooLarge { max_bytes, actual },
        "response too large",
    )
}
