//! Favorites Probe Common
//!
//! プローブ本体とテストで共有する型・設定・エラー定義

#![warn(missing_docs)]

/// リクエスト/レスポンスの型定義
pub mod types;

/// 設定管理
pub mod config;

/// エラー型定義
pub mod error;
