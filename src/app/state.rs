// ==========================================
// 钻井排程服务 - 应用状态
// ==========================================
// 职责: 管理应用级别的共享状态和API实例
// ==========================================

use std::sync::Arc;

use crate::api::{RequestValidator, ScheduleApi, VisualizationApi};
use crate::config::ServiceConfig;
use crate::engine::{AssignmentSolver, MicrolpSolver, ScheduleOrchestrator};

/// 应用状态
///
/// 包含所有API实例和共享资源，作为 axum 路由状态在请求间共享。
/// 所有成员只读，请求之间不共享可变状态。
#[derive(Clone)]
pub struct AppState {
    /// 服务配置
    pub config: Arc<ServiceConfig>,

    /// 排程优化API
    pub schedule_api: Arc<ScheduleApi>,

    /// 排程可视化API
    pub visualization_api: Arc<VisualizationApi>,
}

impl AppState {
    /// 使用默认求解器（microlp）创建应用状态
    pub fn new(config: ServiceConfig) -> Self {
        Self::with_solver(config, Arc::new(MicrolpSolver::new()))
    }

    /// 使用指定求解器创建应用状态
    pub fn with_solver(config: ServiceConfig, solver: Arc<dyn AssignmentSolver>) -> Self {
        let orchestrator = Arc::new(ScheduleOrchestrator::new(solver));
        tracing::info!(
            solver = orchestrator.solver_name(),
            assignment_mode = %config.assignment_mode,
            max_model_variables = config.max_model_variables,
            "初始化AppState"
        );

        let validator = RequestValidator::from_config(&config);
        let schedule_api = Arc::new(ScheduleApi::new(orchestrator, validator));
        let visualization_api = Arc::new(VisualizationApi::new());

        Self {
            config: Arc::new(config),
            schedule_api,
            visualization_api,
        }
    }
}
