//! シナリオ逐次実行とレポート
//!
//! シナリオは1件ずつ順番に実行し、失敗しても次のシナリオへ進む。

use crate::assertion::{assert_echo, assert_status};
use crate::client::{FavoritesClient, SessionCookie};
use crate::config::ProbeConfig;
use crate::error::ProbeResult;
use crate::scenarios::{Scenario, TokenMode};
use crate::session::obtain_token;
use crate::types::{FavoritePlace, Outcome};
use chrono::{DateTime, Utc};
use serde::Serialize;
use std::fmt::Write as _;
use std::time::{Duration, Instant};
use tracing::{info, warn};

/// シナリオ1件の結果
#[derive(Debug, Clone, Serialize)]
pub struct ScenarioReport {
    /// 番号
    pub id: u8,
    /// 名前
    pub name: &'static str,
    /// 期待したステータス
    pub expected_status: u16,
    /// 成否
    pub passed: bool,
    /// 所要時間（ミリ秒）
    pub elapsed_ms: u64,
    /// 失敗理由
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

/// 実行全体の結果
#[derive(Debug, Clone, Serialize)]
pub struct RunReport {
    /// 接続先
    pub base_url: String,
    /// 開始時刻
    pub started_at: DateTime<Utc>,
    /// 終了時刻
    pub finished_at: DateTime<Utc>,
    /// シナリオごとの結果
    pub results: Vec<ScenarioReport>,
}

impl RunReport {
    /// 成功件数
    pub fn passed(&self) -> usize {
        self.results.iter().filter(|r| r.passed).count()
    }

    /// 失敗件数
    pub fn failed(&self) -> usize {
        self.results.len() - self.passed()
    }

    /// 全件成功したか
    pub fn all_passed(&self) -> bool {
        self.results.iter().all(|r| r.passed)
    }

    /// 人間向けの結果表
    pub fn render_table(&self) -> String {
        let mut out = String::new();
        let _ = writeln!(out, "ID\tEXPECT\tRESULT\tTIME\tSCENARIO");
        for r in &self.results {
            let _ = writeln!(
                out,
                "{}\t{}\t{}\t{}ms\t{}",
                r.id,
                r.expected_status,
                if r.passed { "PASS" } else { "FAIL" },
                r.elapsed_ms,
                r.name
            );
            if let Some(error) = &r.error {
                let _ = writeln!(out, "\t{}", error);
            }
        }
        let _ = writeln!(
            out,
            "\n{} passed, {} failed ({})",
            self.passed(),
            self.failed(),
            self.base_url
        );
        out
    }
}

/// シナリオランナー
pub struct ScenarioRunner {
    client: FavoritesClient,
    expiry_wait: Duration,
}

impl ScenarioRunner {
    /// 新しいScenarioRunnerを作成
    pub fn new(config: ProbeConfig) -> ProbeResult<Self> {
        let expiry_wait = config.expiry_wait();
        let client = FavoritesClient::new(config)?;
        Ok(Self {
            client,
            expiry_wait,
        })
    }

    /// 内部のクライアント
    pub fn client(&self) -> &FavoritesClient {
        &self.client
    }

    /// シナリオを1件実行する
    ///
    /// 最後のレスポンスの分類を返す。期待と異なればエラー。
    pub async fn run_scenario(&self, scenario: &Scenario) -> ProbeResult<Outcome> {
        let cookie = match scenario.token {
            TokenMode::Fresh => SessionCookie::Token(obtain_token(&self.client).await?),
            TokenMode::Missing => SessionCookie::Absent,
            TokenMode::Null => SessionCookie::Null,
            TokenMode::Expired => {
                let token = obtain_token(&self.client).await?;
                info!(
                    scenario = scenario.id,
                    "Waiting {}ms for the token to expire",
                    self.expiry_wait.as_millis()
                );
                tokio::time::sleep(self.expiry_wait).await;
                SessionCookie::Token(token)
            }
        };

        let mut outcome = scenario.expected;
        for _ in 0..scenario.submissions {
            let response = self.client.create_favorite(&scenario.form, &cookie).await?;
            assert_status(&response, scenario.expected.status())?;
            outcome = Outcome::from_status(response.status);

            if scenario.verify_echo {
                let place: FavoritePlace = response.parse()?;
                assert_echo(&scenario.form, &place)?;
            }
        }
        Ok(outcome)
    }

    /// シナリオを順番に全件実行する
    pub async fn run(&self, scenarios: &[Scenario]) -> RunReport {
        let started_at = Utc::now();
        let mut results = Vec::with_capacity(scenarios.len());

        for scenario in scenarios {
            let start = Instant::now();
            let result = self.run_scenario(scenario).await;
            let elapsed_ms = start.elapsed().as_millis() as u64;

            let error = match result {
                Ok(outcome) => {
                    info!(
                        scenario = scenario.id,
                        elapsed_ms,
                        "PASS {} ({})",
                        scenario.name,
                        outcome
                    );
                    None
                }
                Err(e) => {
                    warn!(scenario = scenario.id, elapsed_ms, "FAIL {}: {}", scenario.name, e);
                    Some(e.to_string())
                }
            };

            results.push(ScenarioReport {
                id: scenario.id,
                name: scenario.name,
                expected_status: scenario.expected.status().as_u16(),
                passed: error.is_none(),
                elapsed_ms,
                error,
            });
        }

        RunReport {
            base_url: self.client.config().base_url.clone(),
            started_at,
            finished_at: Utc::now(),
            results,
        }
    }
}
