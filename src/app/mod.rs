// ==========================================
// 钻井排程服务 - 应用层
// ==========================================
// 职责: HTTP 集成,连接路由与后端 API
// ==========================================

pub mod routes;
pub mod state;

// 重导出
pub use routes::router;
pub use state::AppState;
