//! お気に入り地点APIクライアント
//!
//! リトライやクッキーストアは持たない。1回の呼び出しが1回のHTTPリクエストに対応する。

use crate::config::ProbeConfig;
use crate::error::{ProbeError, ProbeResult};
use crate::types::FavoriteForm;
use reqwest::header::{COOKIE, SET_COOKIE};
use reqwest::{Client, StatusCode};
use serde::de::DeserializeOwned;
use serde_json::Value;
use tracing::debug;

/// `token`クッキーの送り方
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionCookie {
    /// `Cookie`ヘッダを付けない
    Absent,
    /// 値なしの`token`を送る
    Null,
    /// `token=<value>`を送る
    Token(String),
}

impl SessionCookie {
    /// `Cookie`ヘッダ値（`Absent`ならNone）
    pub fn header_value(&self) -> Option<String> {
        match self {
            Self::Absent => None,
            Self::Null => Some("token".to_string()),
            Self::Token(token) => Some(format!("token={}", token)),
        }
    }
}

/// 受信済みレスポンス
///
/// ボディは読み切った状態で保持するため、ステータス検証と
/// フィールド検証の両方から参照できる。
#[derive(Debug, Clone)]
pub struct ApiResponse {
    /// ステータスコード
    pub status: StatusCode,
    /// `Set-Cookie`ヘッダ（複数ある場合は`", "`で連結）
    pub set_cookie: Option<String>,
    /// レスポンスボディ
    pub body: String,
}

impl ApiResponse {
    /// ボディをJSONとして解釈する
    pub fn json_value(&self) -> Option<Value> {
        serde_json::from_str(&self.body).ok()
    }

    /// 診断メッセージ用のボディ表現
    ///
    /// JSONなら非ASCIIをエスケープせずに再シリアライズし、そうでなければそのまま返す。
    pub fn diagnostic_body(&self) -> String {
        self.json_value()
            .and_then(|value| serde_json::to_string(&value).ok())
            .unwrap_or_else(|| self.body.clone())
    }

    /// ボディを指定型にデコードする
    pub fn parse<T: DeserializeOwned>(&self) -> ProbeResult<T> {
        serde_json::from_str(&self.body).map_err(ProbeError::from)
    }

    async fn read(response: reqwest::Response) -> ProbeResult<Self> {
        let status = response.status();
        let cookies: Vec<&str> = response
            .headers()
            .get_all(SET_COOKIE)
            .iter()
            .filter_map(|v| v.to_str().ok())
            .collect();
        let set_cookie = if cookies.is_empty() {
            None
        } else {
            Some(cookies.join(", "))
        };
        let body = response.text().await?;

        Ok(Self {
            status,
            set_cookie,
            body,
        })
    }
}

/// お気に入り地点APIクライアント
#[derive(Debug, Clone)]
pub struct FavoritesClient {
    http_client: Client,
    config: ProbeConfig,
}

impl FavoritesClient {
    /// 新しいFavoritesClientを作成
    pub fn new(config: ProbeConfig) -> ProbeResult<Self> {
        config.validate()?;
        let http_client = Client::builder()
            .timeout(config.request_timeout())
            .build()?;

        Ok(Self {
            http_client,
            config,
        })
    }

    /// 設定を返す
    pub fn config(&self) -> &ProbeConfig {
        &self.config
    }

    /// `POST /auth/tokens`（ボディなし）
    pub async fn request_token(&self) -> ProbeResult<ApiResponse> {
        let url = self.config.endpoint("auth/tokens");
        debug!("Requesting session token: {}", url);

        let response = self.http_client.post(&url).send().await?;
        let response = ApiResponse::read(response).await?;

        debug!("Token endpoint answered {}", response.status);
        Ok(response)
    }

    /// `POST /favorites`（フォームエンコード）
    pub async fn create_favorite(
        &self,
        form: &FavoriteForm,
        cookie: &SessionCookie,
    ) -> ProbeResult<ApiResponse> {
        let url = self.config.endpoint("favorites");
        let pairs = form.form_pairs();
        let field_names: Vec<&str> = pairs.iter().map(|(k, _)| *k).collect();
        debug!(
            fields = ?field_names,
            cookie = cookie_kind(cookie),
            "Creating favorite: {}",
            url
        );

        let mut request = self.http_client.post(&url).form(&pairs);
        if let Some(value) = cookie.header_value() {
            request = request.header(COOKIE, value);
        }
        let response = ApiResponse::read(request.send().await?).await?;

        debug!("Favorites endpoint answered {}", response.status);
        Ok(response)
    }
}

fn cookie_kind(cookie: &SessionCookie) -> &'static str {
    match cookie {
        SessionCookie::Absent => "absent",
        SessionCookie::Null => "null",
        SessionCookie::Token(_) => "token",
    }
}
