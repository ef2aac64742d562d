// ==========================================
// 钻井排程服务 - 领域模型层
// ==========================================
// 职责: 定义领域实体、类型、产能约束接口
// 红线: 不含求解逻辑,不含 HTTP 逻辑
// ==========================================

pub mod capacity;
pub mod schedule;
pub mod types;

// 重导出核心类型
pub use capacity::{CapacityConstraint, RigSlot};
pub use schedule::{
    CapexTable, ScheduleEntry, ScheduleOutcome, ScheduleProblem, TimeframeLoad, DRILL_DURATION,
    MAX_TIMEFRAMES,
};
pub use types::{AssignmentMode, ViolationType};
