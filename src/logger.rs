use tracing_subscriber::EnvFilter;

/// 初始化日志
///
/// 级别由 RUST_LOG 环境变量控制，缺省为 info
pub fn init() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();
}
