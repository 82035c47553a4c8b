//! ステータス/エコー検証
//!
//! 全シナリオが使う唯一の判定ロジック。

use crate::client::ApiResponse;
use crate::error::{ProbeError, ProbeResult};
use crate::types::{Coordinate, FavoriteForm, FavoritePlace};
use reqwest::StatusCode;

/// ステータスコードが期待値と一致することを確認する
///
/// 不一致の場合は期待値・実際の値・ボディ全体を含むエラーを返す。
pub fn assert_status(response: &ApiResponse, expected: StatusCode) -> ProbeResult<()> {
    if response.status == expected {
        return Ok(());
    }
    Err(ProbeError::StatusMismatch {
        expected,
        actual: response.status,
        body: response.diagnostic_body(),
    })
}

/// 送信した値がそのまま返ってきたことを確認する
///
/// 送信していない（`Omitted`/`Null`）フィールドは比較しない。
pub fn assert_echo(form: &FavoriteForm, place: &FavoritePlace) -> ProbeResult<()> {
    if let Some(title) = form.title.value() {
        if *title != place.title {
            return Err(mismatch("title", title.clone(), place.title.clone()));
        }
    }
    if let Some(lat) = form.lat.value() {
        check_coordinate("lat", lat, place.lat)?;
    }
    if let Some(lon) = form.lon.value() {
        check_coordinate("lon", lon, place.lon)?;
    }
    if let Some(color) = form.color.value() {
        let expected = color.to_string();
        if place.color.as_deref() != Some(expected.as_str()) {
            return Err(mismatch(
                "color",
                expected,
                place.color.clone().unwrap_or_else(|| "null".to_string()),
            ));
        }
    }
    Ok(())
}

fn check_coordinate(field: &'static str, sent: &Coordinate, actual: f64) -> ProbeResult<()> {
    let expected = match sent {
        Coordinate::Number(n) => Some(*n),
        Coordinate::Raw(raw) => raw.parse::<f64>().ok(),
    };
    if expected == Some(actual) {
        Ok(())
    } else {
        Err(mismatch(field, sent.to_string(), actual.to_string()))
    }
}

fn mismatch(field: &'static str, expected: String, actual: String) -> ProbeError {
    ProbeError::EchoMismatch {
        field,
        expected,
        actual,
    }
}
