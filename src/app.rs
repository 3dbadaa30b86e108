use std::path::Path;
use std::sync::Arc;

use anyhow::{Context, Result};
use axum::Router;
use tracing::info;

use crate::api;
use crate::config::Config;
use crate::orchestrator::Orchestrator;
use crate::store::load_seed_file;

/// 应用主结构
pub struct App {
    config: Config,
    router: Router,
}

impl App {
    /// 初始化应用
    ///
    /// 加载种子数据填充内存题库，注入编排器并组装路由
    pub async fn initialize(config: Config) -> Result<Self> {
        log_startup(&config);

        let store = load_seed_file(Path::new(&config.seed_file))
            .await
            .with_context(|| format!("加载种子数据失败: {}", config.seed_file))?;

        let orchestrator = Arc::new(Orchestrator::new(Arc::new(store)));
        let router = api::router(orchestrator);

        Ok(Self { config, router })
    }

    /// 运行 HTTP 服务
    pub async fn run(self) -> Result<()> {
        let addr = format!("{}:{}", self.config.host, self.config.port);
        let listener = tokio::net::TcpListener::bind(&addr)
            .await
            .with_context(|| format!("无法监听地址: {}", addr))?;

        info!("🚀 服务已启动: http://{}", addr);

        axum::serve(listener, self.router)
            .await
            .context("HTTP 服务异常退出")?;

        Ok(())
    }
}

/// 记录启动信息
fn log_startup(config: &Config) {
    info!("{}", "=".repeat(60));
    info!("📚 Trivia API 启动中");
    info!("📁 种子文件: {}", config.seed_file);
    if config.verbose_logging {
        info!("💡 详细日志已开启");
    }
    info!("{}", "=".repeat(60));
}
