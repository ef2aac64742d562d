// ==========================================
// 钻井排程服务 - HTTP 主入口
// ==========================================
// 技术栈: axum + tokio
// ==========================================

use anyhow::{Context, Result};
use tokio::net::TcpListener;
use well_scheduler::config::ConfigManager;
use well_scheduler::{logging, perf, router, AppState};

#[tokio::main]
async fn main() -> Result<()> {
    // 初始化日志系统
    logging::init();
    perf::install_from_env();

    tracing::info!("==================================================");
    tracing::info!("{}", well_scheduler::APP_NAME);
    tracing::info!("系统版本: {}", well_scheduler::VERSION);
    tracing::info!("==================================================");

    let config = ConfigManager::from_env()
        .load()
        .context("failed to load service config")?;
    let bind_address = config.bind_address();

    let app = router(AppState::new(config));

    let listener = TcpListener::bind(&bind_address)
        .await
        .with_context(|| format!("failed to bind {}", bind_address))?;
    tracing::info!("服务监听地址: {}", bind_address);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("server error")?;

    tracing::info!("服务已退出");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("无法监听退出信号: {}", e);
        std::future::pending::<()>().await;
    }
    tracing::info!("收到退出信号，正在关闭");
}
