//! シナリオ定義
//!
//! 各シナリオは独立しており、正しいペイロードから制約を1つだけ崩したもの。

use crate::error::{ProbeError, ProbeResult};
use crate::types::{
    ColorValue, Coordinate, FavoriteForm, Field, Outcome, TITLE_MAX_CHARS,
};

/// トークンの扱い
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenMode {
    /// 新しいトークンを取得して送る
    Fresh,
    /// クッキーを送らない
    Missing,
    /// 取得後、失効待ちをしてから送る
    Expired,
    /// 値なしの`token`を送る
    Null,
}

/// 1つのシナリオ
#[derive(Debug, Clone)]
pub struct Scenario {
    /// 番号
    pub id: u8,
    /// 短い名前
    pub name: &'static str,
    /// 説明
    pub description: &'static str,
    /// トークンの扱い
    pub token: TokenMode,
    /// 送信するペイロード
    pub form: FavoriteForm,
    /// 期待する応答分類
    pub expected: Outcome,
    /// 200応答のフィールドエコーを検証するか
    pub verify_echo: bool,
    /// 同じトークンで送信する回数
    pub submissions: usize,
}

impl Scenario {
    fn new(
        id: u8,
        name: &'static str,
        description: &'static str,
        form: FavoriteForm,
        expected: Outcome,
    ) -> Self {
        Self {
            id,
            name,
            description,
            token: TokenMode::Fresh,
            form,
            expected,
            verify_echo: false,
            submissions: 1,
        }
    }

    fn token(mut self, token: TokenMode) -> Self {
        self.token = token;
        self
    }

    fn echo(mut self) -> Self {
        self.verify_echo = true;
        self
    }

    fn submissions(mut self, n: usize) -> Self {
        self.submissions = n;
        self
    }
}

fn invalid(id: u8, name: &'static str, description: &'static str, form: FavoriteForm) -> Scenario {
    Scenario::new(id, name, description, form, Outcome::ValidationError)
}

fn raw(value: &str) -> Field<Coordinate> {
    Field::Value(Coordinate::Raw(value.to_string()))
}

/// 基本シナリオ（1〜17）
pub fn catalog() -> Vec<Scenario> {
    let base = FavoriteForm::well_formed;
    let place = || FavoriteForm::titled("Place");

    vec![
        Scenario::new(
            1,
            "create_success",
            "well-formed request with a valid token is accepted and echoed",
            base(),
            Outcome::Success,
        )
        .echo(),
        Scenario::new(
            2,
            "missing_token",
            "request without a token cookie is rejected",
            base(),
            Outcome::AuthenticationError,
        )
        .token(TokenMode::Missing),
        Scenario::new(
            3,
            "expired_token",
            "token used after the expiry wait is rejected",
            base(),
            Outcome::AuthenticationError,
        )
        .token(TokenMode::Expired),
        invalid(4, "title_omitted", "title omitted", base().with_title(Field::Omitted)),
        invalid(5, "lat_omitted", "lat omitted", base().with_lat(Field::Omitted)),
        invalid(6, "lon_omitted", "lon omitted", base().with_lon(Field::Omitted)),
        invalid(
            7,
            "color_outside_palette",
            "color PURPLE is not in the palette",
            base().with_color(Field::Value(ColorValue::Raw("PURPLE".to_string()))),
        ),
        invalid(8, "lat_not_numeric", "lat given as text", base().with_lat(raw("xyz"))),
        invalid(9, "lon_not_numeric", "lon given as text", base().with_lon(raw("xyz"))),
        invalid(
            10,
            "title_too_long",
            "title one character over the limit",
            base().with_title(Field::Value("A".repeat(TITLE_MAX_CHARS + 1))),
        ),
        invalid(
            11,
            "title_empty",
            "title is an empty string",
            base().with_title(Field::Value(String::new())),
        ),
        Scenario::new(
            12,
            "token_reused",
            "two creations succeed with one token",
            place(),
            Outcome::Success,
        )
        .submissions(2),
        invalid(13, "title_null", "title is null", place().with_title(Field::Null)),
        invalid(14, "lat_null", "lat is null", place().with_lat(Field::Null)),
        invalid(15, "lon_null", "lon is null", place().with_lon(Field::Null)),
        Scenario::new(
            16,
            "color_null",
            "color is null and treated as optional",
            place().with_color(Field::Null),
            Outcome::Success,
        ),
        Scenario::new(
            17,
            "null_token",
            "token cookie without a value is rejected",
            place(),
            Outcome::AuthenticationError,
        )
        .token(TokenMode::Null),
    ]
}

/// 境界値の追加シナリオ（18〜）
pub fn extended() -> Vec<Scenario> {
    vec![
        Scenario::new(
            18,
            "title_at_limit",
            "title exactly at the length limit is accepted",
            FavoriteForm::titled("A".repeat(TITLE_MAX_CHARS)),
            Outcome::Success,
        )
        .echo(),
        Scenario::new(
            19,
            "color_omitted",
            "color omitted is accepted",
            FavoriteForm::titled("Place").with_color(Field::Omitted),
            Outcome::Success,
        )
        .echo(),
    ]
}

/// 実行対象を選ぶ
///
/// `only`が空なら全件。存在しない番号は設定エラー。
pub fn select(include_extended: bool, only: &[u8]) -> ProbeResult<Vec<Scenario>> {
    let mut all = catalog();
    if include_extended || only.iter().any(|id| extended().iter().any(|s| s.id == *id)) {
        all.extend(extended());
    }
    if only.is_empty() {
        return Ok(all);
    }

    if let Some(unknown) = only.iter().find(|id| !all.iter().any(|s| s.id == **id)) {
        return Err(ProbeError::Config(format!("unknown scenario id: {}", unknown)));
    }
    Ok(all.into_iter().filter(|s| only.contains(&s.id)).collect())
}
