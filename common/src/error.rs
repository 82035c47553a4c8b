//! エラー型定義
//!
//! 統一エラー型（thiserror使用）
//!
//! シナリオの失敗はすべて`ProbeError`として表現される。
//! 通信エラーとアサーション失敗は区別せず、どちらも実行中のシナリオを中断する。

use reqwest::StatusCode;
use thiserror::Error;

/// Probe error type
#[derive(Debug, Error)]
pub enum ProbeError {
    /// HTTP transport error
    #[error("HTTP client error: {0}")]
    Http(#[from] reqwest::Error),

    /// Token endpoint did not answer 200
    #[error("Token issuance failed: expected status 200, got {status}")]
    TokenIssuance {
        /// Status returned by the token endpoint
        status: StatusCode,
    },

    /// Token endpoint answered without a `token=` cookie
    #[error("Token issuance failed: no `token=` cookie in Set-Cookie header")]
    MissingSessionCookie,

    /// Response status differs from the expected one
    #[error("Expected status {expected}, got {actual}. Body: {body}")]
    StatusMismatch {
        /// Expected status
        expected: StatusCode,
        /// Actual status
        actual: StatusCode,
        /// Response body rendered as JSON (or verbatim when not JSON)
        body: String,
    },

    /// Response field differs from the submitted value
    #[error("Field `{field}` was not echoed back: sent {expected}, got {actual}")]
    EchoMismatch {
        /// Field name
        field: &'static str,
        /// Submitted value
        expected: String,
        /// Value found in the response
        actual: String,
    },

    /// Response body could not be decoded
    #[error("Decode error: {0}")]
    Decode(#[from] serde_json::Error),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),
}

/// Result alias used across the probe
pub type ProbeResult<T> = Result<T, ProbeError>;
