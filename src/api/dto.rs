// ==========================================
// 钻井排程服务 - 请求/响应数据结构
// ==========================================

use crate::domain::schedule::{ScheduleEntry, ScheduleOutcome, TimeframeLoad};
use crate::domain::types::AssignmentMode;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use uuid::Uuid;

/// 排程请求（未校验）
///
/// 整数字段用 i64 接收，负数/零由校验器给出明确违规而不是反序列化失败。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WellScheduleRequest {
    pub wells: Vec<String>,
    pub timeframes: i64,
    /// 井号 -> 各时间窗成本
    pub capex: HashMap<String, Vec<f64>>,
    pub rig_limit: i64,
    /// 缺省时使用服务配置的模式
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub assignment_mode: Option<AssignmentMode>,
}

/// 排程条目响应
pub type WellScheduleResponse = ScheduleEntry;

/// 排程摘要响应
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScheduleSummaryResponse {
    pub run_id: Uuid,
    pub assignment_mode: AssignmentMode,
    pub objective: f64,
    pub schedule: Vec<WellScheduleResponse>,
    pub unscheduled_wells: Vec<String>,
    pub timeframe_load: Vec<TimeframeLoad>,
}

impl From<ScheduleOutcome> for ScheduleSummaryResponse {
    fn from(outcome: ScheduleOutcome) -> Self {
        Self {
            run_id: outcome.run_id,
            assignment_mode: outcome.assignment_mode,
            objective: outcome.objective,
            schedule: outcome.schedule,
            unscheduled_wells: outcome.unscheduled_wells,
            timeframe_load: outcome.timeframe_load,
        }
    }
}
