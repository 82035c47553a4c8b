//! セッショントークン取得
//!
//! `Set-Cookie`ヘッダから`token=`の値を切り出す。汎用のクッキーパーサは使わず、
//! 最初の`token=`から次の`;`までを値とみなす。

use crate::client::FavoritesClient;
use crate::error::{ProbeError, ProbeResult};
use reqwest::StatusCode;
use tracing::debug;

/// `Set-Cookie`ヘッダ値からトークンを取り出す
///
/// `token=`が無ければNone。値が空でもそのまま返す。
pub fn extract_token(set_cookie: &str) -> Option<String> {
    let rest = set_cookie.split("token=").nth(1)?;
    rest.split(';').next().map(str::to_string)
}

/// 新しいセッショントークンを取得する
///
/// 200以外は`TokenIssuance`、クッキーが無ければ`MissingSessionCookie`。
pub async fn obtain_token(client: &FavoritesClient) -> ProbeResult<String> {
    let response = client.request_token().await?;
    if response.status != StatusCode::OK {
        return Err(ProbeError::TokenIssuance {
            status: response.status,
        });
    }

    let token = response
        .set_cookie
        .as_deref()
        .and_then(extract_token)
        .ok_or(ProbeError::MissingSessionCookie)?;

    debug!("Obtained session token ({} chars)", token.len());
    Ok(token)
}
