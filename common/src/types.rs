//! 共通型定義
//!
//! FavoriteForm, FavoritePlace, Outcome等のコアデータ型

use reqwest::StatusCode;
use serde::{Deserialize, Serialize};
use std::fmt;

/// `title`の最大文字数
pub const TITLE_MAX_CHARS: usize = 1000;

/// フォームの1フィールド
///
/// フォームボディにはnullが存在しないため、`Null`は`Omitted`と同じく
/// ボディに書き出されない。両者を区別するのはシナリオの意図を保つため。
#[derive(Debug, Clone, PartialEq)]
pub enum Field<T> {
    /// フィールドを送らない
    Omitted,
    /// 明示的なnull
    Null,
    /// 値あり
    Value(T),
}

impl<T> Field<T> {
    /// 値があればその参照を返す
    pub fn value(&self) -> Option<&T> {
        match self {
            Self::Value(v) => Some(v),
            Self::Omitted | Self::Null => None,
        }
    }
}

/// 座標値（数値、または故意に不正な文字列）
#[derive(Debug, Clone, PartialEq)]
pub enum Coordinate {
    /// 数値
    Number(f64),
    /// 生の文字列（型チェック用）
    Raw(String),
}

impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number(n) => write!(f, "{}", n),
            Self::Raw(s) => f.write_str(s),
        }
    }
}

/// お気に入り地点の表示色パレット
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Color {
    /// 青
    Blue,
    /// 緑
    Green,
    /// 赤
    Red,
    /// 黄
    Yellow,
}

impl Color {
    /// パレット全体
    pub const ALL: [Color; 4] = [Color::Blue, Color::Green, Color::Red, Color::Yellow];

    /// ワイヤ上の表記
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Blue => "BLUE",
            Self::Green => "GREEN",
            Self::Red => "RED",
            Self::Yellow => "YELLOW",
        }
    }
}

/// 色フィールドの値（パレット内、またはパレット外の生文字列）
#[derive(Debug, Clone, PartialEq)]
pub enum ColorValue {
    /// パレット内の色
    Palette(Color),
    /// パレット外の値
    Raw(String),
}

impl fmt::Display for ColorValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Palette(c) => f.write_str(c.as_str()),
            Self::Raw(s) => f.write_str(s),
        }
    }
}

/// お気に入り地点作成リクエスト
#[derive(Debug, Clone, PartialEq)]
pub struct FavoriteForm {
    /// 名称（1〜1000文字、必須）
    pub title: Field<String>,
    /// 緯度（必須）
    pub lat: Field<Coordinate>,
    /// 経度（必須）
    pub lon: Field<Coordinate>,
    /// 色（任意）
    pub color: Field<ColorValue>,
}

impl FavoriteForm {
    /// 全フィールドが正しい標準ペイロード
    pub fn well_formed() -> Self {
        Self::titled("Test Place")
    }

    /// 指定タイトルの正しいペイロード
    pub fn titled(title: impl Into<String>) -> Self {
        Self {
            title: Field::Value(title.into()),
            lat: Field::Value(Coordinate::Number(55.028254)),
            lon: Field::Value(Coordinate::Number(82.918501)),
            color: Field::Value(ColorValue::Palette(Color::Blue)),
        }
    }

    /// `title`を差し替える
    pub fn with_title(mut self, title: Field<String>) -> Self {
        self.title = title;
        self
    }

    /// `lat`を差し替える
    pub fn with_lat(mut self, lat: Field<Coordinate>) -> Self {
        self.lat = lat;
        self
    }

    /// `lon`を差し替える
    pub fn with_lon(mut self, lon: Field<Coordinate>) -> Self {
        self.lon = lon;
        self
    }

    /// `color`を差し替える
    pub fn with_color(mut self, color: Field<ColorValue>) -> Self {
        self.color = color;
        self
    }

    /// `application/x-www-form-urlencoded`に書き出すペア
    ///
    /// `Omitted`と`Null`のフィールドは含まれない。
    pub fn form_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = Vec::with_capacity(4);
        if let Some(title) = self.title.value() {
            pairs.push(("title", title.clone()));
        }
        if let Some(lat) = self.lat.value() {
            pairs.push(("lat", lat.to_string()));
        }
        if let Some(lon) = self.lon.value() {
            pairs.push(("lon", lon.to_string()));
        }
        if let Some(color) = self.color.value() {
            pairs.push(("color", color.to_string()));
        }
        pairs
    }
}

/// お気に入り地点作成レスポンス
///
/// `id`や`created_at`等の追加フィールドは無視する。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FavoritePlace {
    /// 名称
    pub title: String,
    /// 緯度
    pub lat: f64,
    /// 経度
    pub lon: f64,
    /// 色（サーバ側で補完される場合がある）
    #[serde(default)]
    pub color: Option<String>,
}

/// リモートサービスの応答分類
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// 200
    Success,
    /// 400
    ValidationError,
    /// 401
    AuthenticationError,
    /// 上記以外
    Unexpected(StatusCode),
}

impl Outcome {
    /// ステータスコードから分類する
    pub fn from_status(status: StatusCode) -> Self {
        match status {
            StatusCode::OK => Self::Success,
            StatusCode::BAD_REQUEST => Self::ValidationError,
            StatusCode::UNAUTHORIZED => Self::AuthenticationError,
            other => Self::Unexpected(other),
        }
    }

    /// 分類に対応するステータスコード
    pub fn status(&self) -> StatusCode {
        match self {
            Self::Success => StatusCode::OK,
            Self::ValidationError => StatusCode::BAD_REQUEST,
            Self::AuthenticationError => StatusCode::UNAUTHORIZED,
            Self::Unexpected(status) => *status,
        }
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Success => f.write_str("Success"),
            Self::ValidationError => f.write_str("ValidationError"),
            Self::AuthenticationError => f.write_str("AuthenticationError"),
            Self::Unexpected(status) => write!(f, "Unexpected({})", status.as_u16()),
        }
    }
}
