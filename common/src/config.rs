//! 設定管理
//!
//! ProbeConfigと環境変数読み込みヘルパー

use crate::error::{ProbeError, ProbeResult};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// デフォルトの接続先
pub const DEFAULT_BASE_URL: &str = "https://regions-test.2gis.com/v1";

/// Get an environment variable with fallback to a deprecated name
///
/// If only the deprecated name is set, its value is returned and a
/// deprecation warning is logged.
pub fn get_env_with_fallback(new_name: &str, old_name: &str) -> Option<String> {
    if let Ok(val) = std::env::var(new_name) {
        return Some(val);
    }
    if let Ok(val) = std::env::var(old_name) {
        tracing::warn!(
            "Environment variable '{}' is deprecated, use '{}' instead",
            old_name,
            new_name
        );
        return Some(val);
    }
    None
}

/// Get an environment variable with fallback, parsing to a specific type
///
/// Falls back to `default` when neither variable is set or parsing fails.
pub fn get_env_with_fallback_parse<T: std::str::FromStr>(
    new_name: &str,
    old_name: &str,
    default: T,
) -> T {
    get_env_with_fallback(new_name, old_name)
        .and_then(|s| s.parse().ok())
        .unwrap_or(default)
}

fn parse_flag(value: &str) -> Option<bool> {
    match value.to_ascii_lowercase().as_str() {
        "true" | "1" | "yes" | "on" => Some(true),
        "false" | "0" | "no" | "off" => Some(false),
        _ => None,
    }
}

/// プローブ設定
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProbeConfig {
    /// 接続先ベースURL (デフォルト: "https://regions-test.2gis.com/v1")
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// リクエストタイムアウト（秒）(デフォルト: 30)
    #[serde(default = "default_request_timeout")]
    pub request_timeout_secs: u64,

    /// トークン失効待ち時間（ミリ秒）(デフォルト: 3000)
    #[serde(default = "default_expiry_wait")]
    pub expiry_wait_ms: u64,

    /// 境界値の追加シナリオを含める (デフォルト: false)
    #[serde(default)]
    pub include_extended: bool,
}

fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}

fn default_request_timeout() -> u64 {
    30
}

fn default_expiry_wait() -> u64 {
    3000
}

impl Default for ProbeConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            request_timeout_secs: default_request_timeout(),
            expiry_wait_ms: default_expiry_wait(),
            include_extended: false,
        }
    }
}

impl ProbeConfig {
    /// 環境変数から読み込む
    ///
    /// 未設定、またはパースできない値はデフォルトにフォールバックする。
    pub fn from_env() -> Self {
        let base_url = get_env_with_fallback("FAVORITES_PROBE_BASE_URL", "PROBE_BASE_URL")
            .unwrap_or_else(default_base_url);
        let request_timeout_secs = get_env_with_fallback_parse(
            "FAVORITES_PROBE_TIMEOUT_SECS",
            "PROBE_TIMEOUT_SECS",
            default_request_timeout(),
        );
        let expiry_wait_ms = get_env_with_fallback_parse(
            "FAVORITES_PROBE_EXPIRY_WAIT_MS",
            "PROBE_EXPIRY_WAIT_MS",
            default_expiry_wait(),
        );
        let include_extended = get_env_with_fallback("FAVORITES_PROBE_EXTENDED", "PROBE_EXTENDED")
            .and_then(|v| parse_flag(&v))
            .unwrap_or(false);

        Self {
            base_url,
            request_timeout_secs,
            expiry_wait_ms,
            include_extended,
        }
    }

    /// 設定値を検証する
    pub fn validate(&self) -> ProbeResult<()> {
        if !(self.base_url.starts_with("http://") || self.base_url.starts_with("https://")) {
            return Err(ProbeError::Config(format!(
                "base_url must start with http:// or https://: {}",
                self.base_url
            )));
        }
        if self.request_timeout_secs == 0 {
            return Err(ProbeError::Config(
                "request_timeout_secs must be greater than zero".to_string(),
            ));
        }
        Ok(())
    }

    /// エンドポイントURLを組み立てる（末尾の`/`は除去）
    pub fn endpoint(&self, path: &str) -> String {
        format!(
            "{}/{}",
            self.base_url.trim_end_matches('/'),
            path.trim_start_matches('/')
        )
    }

    /// リクエストタイムアウト
    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }

    /// トークン失効待ち時間
    pub fn expiry_wait(&self) -> Duration {
        Duration::from_millis(self.expiry_wait_ms)
    }
}
