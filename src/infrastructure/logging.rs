//! 日志初始化
//!
//! 默认只输出 WARN 及以上（安静模式），`--verbose` 提升到 DEBUG；
//! 设置了 `RUST_LOG` 时以其为准。日志写入 stderr，不干扰 stdout 的结果输出。

use tracing_subscriber::{EnvFilter, prelude::*};

/// 计算默认过滤级别
#[must_use]
pub fn default_filter(verbose: bool) -> &'static str {
    if verbose {
        "freezecli=debug"
    } else {
        "freezecli=warn"
    }
}

/// 初始化 tracing，进程启动时调用一次
pub fn init_tracing(verbose: bool) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_filter(verbose)));

    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false)
                .without_time(),
        )
        .try_init();
}
