//! Favorites Probe
//!
//! お気に入り地点API（`POST /auth/tokens`, `POST /favorites`）の
//! 入力検証・認証ルールを外部から検証するブラックボックステストスイート

#![warn(missing_docs)]

/// APIクライアント
pub mod client;

/// セッショントークン取得
pub mod session;

/// ステータス/エコー検証
pub mod assertion;

/// シナリオ定義
pub mod scenarios;

/// シナリオ逐次実行とレポート
pub mod runner;

/// CLI
pub mod cli;

/// ログ初期化
pub mod logging;

pub use favorites_probe_common::{config, error, types};
