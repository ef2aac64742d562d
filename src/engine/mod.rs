// ==========================================
// 钻井排程服务 - 引擎层
// ==========================================
// 职责: 构造指派模型、调用外部求解器、提取并复核排程
// 红线: Engine 不处理 HTTP, 所有失败必须带原因返回
// ==========================================

pub mod error;
pub mod orchestrator;
pub mod schedule_model;
pub mod solver;

// 重导出核心引擎
pub use error::{EngineError, EngineResult};
pub use orchestrator::ScheduleOrchestrator;
pub use schedule_model::{AssignmentModel, LinearRow, RowSense};
pub use solver::{AssignmentSolver, MicrolpSolver, SolvedAssignment};
