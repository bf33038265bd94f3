use std::io::IsTerminal;
use std::sync::OnceLock;

use tracing_subscriber::{EnvFilter, Registry, layer::SubscriberExt, util::SubscriberInitExt};

static INITIALISED: OnceLock<()> = OnceLock::new();

/// 安装全局 tracing subscriber。
/// 日志级别由`RUST_LOG`控制，未设置时为`info`；重复调用无副作用。
pub fn init_tracing() {
    if INITIALISED.set(()).is_err() {
        return;
    }

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let fmt_layer = tracing_subscriber::fmt::layer()
        .with_target(true)
        .with_ansi(std::io::stderr().is_terminal())
        .with_writer(std::io::stderr);

    // 其他组件可能已抢先安装了subscriber
    if let Err(err) = Registry::default().with(filter).with(fmt_layer).try_init() {
        eprintln!("failed to initialise tracing subscriber: {err}");
    }
}
