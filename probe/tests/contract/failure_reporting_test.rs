//! Contract Test: 失敗の報告
//!
//! 入力検証をしないサービスや到達不能な接続先に対して、
//! 失敗が正しく記録され、実行が最後まで進むこと

use crate::support::{config_for, start_permissive_service};
use favorites_probe::config::ProbeConfig;
use favorites_probe::error::ProbeError;
use favorites_probe::runner::ScenarioRunner;
use favorites_probe::scenarios::{self, select};
use reqwest::StatusCode;

/// 何でも200を返すサービスでは400/401を期待するシナリオだけが失敗する
#[tokio::test]
async fn test_permissive_service_fails_rejection_scenarios() {
    let server = start_permissive_service().await;
    let mut config = config_for(&server);
    config.expiry_wait_ms = 0;
    let runner = ScenarioRunner::new(config).unwrap();

    let report = runner.run(&scenarios::catalog()).await;

    let passed: Vec<u8> = report
        .results
        .iter()
        .filter(|r| r.passed)
        .map(|r| r.id)
        .collect();
    assert_eq!(passed, vec![1, 12, 16]);
    assert_eq!(report.failed(), 14);
    assert_eq!(report.results.len(), 17);
}

/// 失敗メッセージに期待値・実際の値・ボディが含まれる
#[tokio::test]
async fn test_status_mismatch_embeds_body() {
    let server = start_permissive_service().await;
    let runner = ScenarioRunner::new(config_for(&server)).unwrap();

    let err = runner
        .run_scenario(&select(false, &[7]).unwrap()[0])
        .await
        .unwrap_err();

    match err {
        ProbeError::StatusMismatch {
            expected,
            actual,
            body,
        } => {
            assert_eq!(expected, StatusCode::BAD_REQUEST);
            assert_eq!(actual, StatusCode::OK);
            assert!(body.contains("\"title\":\"Test Place\""));
        }
        other => panic!("unexpected error: {other:?}"),
    }
}

/// エコーが一致しなければ200でも失敗
#[tokio::test]
async fn test_echo_mismatch_is_a_failure() {
    let server = start_permissive_service().await;
    let runner = ScenarioRunner::new(config_for(&server)).unwrap();

    // 18は1000文字のtitleを送るが、このサービスは"Test Place"を返す
    let err = runner
        .run_scenario(&select(true, &[18]).unwrap()[0])
        .await
        .unwrap_err();

    assert!(matches!(err, ProbeError::EchoMismatch { field: "title", .. }));
}

/// 接続できない場合も失敗として記録し、次へ進む
#[tokio::test]
async fn test_transport_errors_are_recorded() {
    let config = ProbeConfig {
        base_url: "http://127.0.0.1:9/v1".to_string(),
        request_timeout_secs: 2,
        expiry_wait_ms: 0,
        include_extended: false,
    };
    let runner = ScenarioRunner::new(config).unwrap();

    let report = runner.run(&select(false, &[1, 2]).unwrap()).await;

    assert_eq!(report.results.len(), 2);
    assert_eq!(report.failed(), 2);
    assert!(report.results[0]
        .error
        .as_deref()
        .unwrap()
        .starts_with("HTTP client error"));
}
