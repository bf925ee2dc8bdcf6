use tracing_subscriber::EnvFilter;

/// 初始化日志
///
/// 日志写到 stderr，避免与终端作答混在一起；`RUST_LOG` 优先。
pub fn init(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
