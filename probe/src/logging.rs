//! ログ初期化
//!
//! `FAVORITES_PROBE_LOG_LEVEL`（未設定なら`RUST_LOG`、どちらも無ければ`info`）を
//! フィルタとして使う。出力は標準エラーで、標準出力はレポート用に空けておく。

use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::{SubscriberInitExt, TryInitError};
use tracing_subscriber::EnvFilter;

const DEFAULT_FILTER: &str = "info";

fn filter_directive() -> String {
    std::env::var("FAVORITES_PROBE_LOG_LEVEL")
        .or_else(|_| std::env::var("RUST_LOG"))
        .unwrap_or_else(|_| DEFAULT_FILTER.to_string())
}

/// グローバルなtracing subscriberを登録する
///
/// 既に登録済みの場合はエラーを返す。
pub fn init() -> Result<(), TryInitError> {
    let filter =
        EnvFilter::try_new(filter_directive()).unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .try_init()
}
