//! 契約テスト用のフェイクお気に入りサービス
//!
//! wiremockの`Respond`で、リモートサービスの観測済みルールを再現する。
//! トークンは短いTTLで失効する。

#![allow(dead_code)]

use favorites_probe::config::ProbeConfig;
use serde_json::json;
use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex};
use std::time::{Duration, Instant};
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, Request, Respond, ResponseTemplate};

/// フェイクのトークンTTL
pub const TOKEN_TTL: Duration = Duration::from_millis(300);

/// 失効シナリオで待つ時間（TTLより長い）
pub const EXPIRY_WAIT_MS: u64 = 600;

const PALETTE: [&str; 4] = ["BLUE", "GREEN", "RED", "YELLOW"];

struct FakeState {
    tokens: Mutex<HashMap<String, Instant>>,
    next_id: AtomicU64,
    ttl: Duration,
}

impl FakeState {
    fn issue(&self) -> String {
        let n = self.next_id.fetch_add(1, Ordering::SeqCst);
        let token = format!("fake-token-{n:04}");
        self.tokens
            .lock()
            .unwrap()
            .insert(token.clone(), Instant::now());
        token
    }

    fn is_valid(&self, token: &str) -> bool {
        self.tokens
            .lock()
            .unwrap()
            .get(token)
            .map(|issued| issued.elapsed() < self.ttl)
            .unwrap_or(false)
    }
}

struct TokenIssuer(Arc<FakeState>);

impl Respond for TokenIssuer {
    fn respond(&self, _request: &Request) -> ResponseTemplate {
        let token = self.0.issue();
        ResponseTemplate::new(200)
            .insert_header("set-cookie", format!("token={token}; Path=/; HttpOnly").as_str())
            .set_body_json(json!({}))
    }
}

struct FavoritesHandler(Arc<FakeState>);

fn token_from_cookie(request: &Request) -> Option<String> {
    let header = request.headers.get("cookie")?.to_str().ok()?;
    header
        .split(';')
        .map(str::trim)
        .find_map(|pair| pair.strip_prefix("token="))
        .map(str::to_string)
}

fn bad_request(message: &str) -> ResponseTemplate {
    ResponseTemplate::new(400).set_body_json(json!({
        "error": { "id": "bad-request", "message": message }
    }))
}

impl Respond for FavoritesHandler {
    fn respond(&self, request: &Request) -> ResponseTemplate {
        let authorized = token_from_cookie(request)
            .map(|t| self.0.is_valid(&t))
            .unwrap_or(false);
        if !authorized {
            return ResponseTemplate::new(401).set_body_json(json!({
                "error": { "id": "unauthorized", "message": "Параметр 'token' не передан или устарел" }
            }));
        }

        let fields: HashMap<String, String> = serde_urlencoded::from_bytes::<Vec<(String, String)>>(
            &request.body,
        )
        .unwrap_or_default()
        .into_iter()
        .collect();

        let Some(title) = fields.get("title") else {
            return bad_request("title is required");
        };
        let title_len = title.chars().count();
        if title_len == 0 || title_len > 1000 {
            return bad_request("title must be 1..=1000 characters");
        }
        let Some(lat) = fields.get("lat").and_then(|v| v.parse::<f64>().ok()) else {
            return bad_request("lat must be a number");
        };
        let Some(lon) = fields.get("lon").and_then(|v| v.parse::<f64>().ok()) else {
            return bad_request("lon must be a number");
        };
        let color = fields.get("color").cloned();
        if let Some(c) = &color {
            if !PALETTE.contains(&c.as_str()) {
                return bad_request("color is not in the palette");
            }
        }

        let id = self.0.next_id.fetch_add(1, Ordering::SeqCst);
        ResponseTemplate::new(200).set_body_json(json!({
            "id": id,
            "title": title,
            "lat": lat,
            "lon": lon,
            "color": color,
            "created_at": "2024-01-01T00:00:00+07:00"
        }))
    }
}

/// フェイクサービスを起動する
pub async fn start_fake_service() -> MockServer {
    start_fake_service_with_ttl(TOKEN_TTL).await
}

/// TTLを指定してフェイクサービスを起動する
pub async fn start_fake_service_with_ttl(ttl: Duration) -> MockServer {
    let server = MockServer::start().await;
    let state = Arc::new(FakeState {
        tokens: Mutex::new(HashMap::new()),
        next_id: AtomicU64::new(1),
        ttl,
    });

    Mock::given(method("POST"))
        .and(path("/v1/auth/tokens"))
        .respond_with(TokenIssuer(state.clone()))
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path("/v1/favorites"))
        .respond_with(FavoritesHandler(state))
        .mount(&server)
        .await;

    server
}

/// 入力検証をしない（何でも200で返す）壊れたサービスを起動する
pub async fn start_permissive_service() -> MockServer {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/v1/auth/tokens"))
        .respond_with(ResponseTemplate::new(200).insert_header("set-cookie", "token=anything; Path=/"))
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path("/v1/favorites"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "title": "Test Place",
            "lat": 55.028254,
            "lon": 82.918501,
            "color": "BLUE"
        })))
        .mount(&server)
        .await;

    server
}

/// モックサーバー向けの設定
pub fn config_for(server: &MockServer) -> ProbeConfig {
    ProbeConfig {
        base_url: format!("{}/v1", server.uri()),
        request_timeout_secs: 5,
        expiry_wait_ms: EXPIRY_WAIT_MS,
        include_extended: false,
    }
}
