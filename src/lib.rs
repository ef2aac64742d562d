// ==========================================
// 钻井排程服务 - 核心库
// ==========================================
// 技术栈: axum + tokio + good_lp(microlp) + plotly
// 系统定位: 钻井排程优化 + 示例甘特图展示
// ==========================================

// ==========================================
// 模块声明
// ==========================================

// 领域层 - 实体与类型
pub mod domain;

// 引擎层 - 建模与求解
pub mod engine;

// 可视化层 - 甘特图
pub mod visualization;

// 配置层 - 服务配置
pub mod config;

// 日志系统
pub mod logging;

// 性能埋点
pub mod perf;

// API 层 - 业务接口
pub mod api;

// 应用层 - HTTP 集成
pub mod app;

// ==========================================
// 重导出核心类型
// ==========================================

// 领域类型
pub use domain::types::{AssignmentMode, ViolationType};

// 领域实体
pub use domain::{
    CapexTable, RigSlot, ScheduleEntry, ScheduleOutcome, ScheduleProblem, TimeframeLoad,
};

// 引擎
pub use engine::{AssignmentSolver, EngineError, MicrolpSolver, ScheduleOrchestrator};

// API
pub use api::{ApiError, ScheduleApi, VisualizationApi, WellScheduleRequest};

// 应用
pub use app::{router, AppState};

// ==========================================
// 常量定义
// ==========================================

// 系统版本
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

// 系统名称
pub const APP_NAME: &str = "钻井排程服务";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version() {
        assert!(!VERSION.is_empty());
    }
}
