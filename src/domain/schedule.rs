// ==========================================
// 钻井排程服务 - 排程领域模型
// ==========================================
// 职责: 排程问题 (已校验)、成本表、排程条目、求解结果
// 红线: 领域对象只承载已校验数据，不含求解逻辑
// ==========================================

use crate::domain::capacity::RigSlot;
use crate::domain::types::AssignmentMode;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// 固定钻井工期（时间窗数）
pub const DRILL_DURATION: u32 = 1;

/// timeframes 上限，保证 finish_time = start_time + DRILL_DURATION 不溢出
pub const MAX_TIMEFRAMES: u32 = u32::MAX - DRILL_DURATION;

// ==========================================
// CapexTable - 成本表
// ==========================================
// 行与 ScheduleProblem.wells 一一对应，列为时间窗 1..=timeframes
#[derive(Debug, Clone, PartialEq)]
pub struct CapexTable {
    rows: Vec<Vec<f64>>,
}

impl CapexTable {
    pub fn new(rows: Vec<Vec<f64>>) -> Self {
        Self { rows }
    }

    /// 第 `well_idx` 口井在时间窗 `timeframe`（1-based）开钻的成本
    pub fn cost(&self, well_idx: usize, timeframe: u32) -> f64 {
        self.rows[well_idx][(timeframe - 1) as usize]
    }

    pub fn row(&self, well_idx: usize) -> &[f64] {
        &self.rows[well_idx]
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

// ==========================================
// ScheduleProblem - 已校验的排程问题
// ==========================================
#[derive(Debug, Clone, PartialEq)]
pub struct ScheduleProblem {
    pub wells: Vec<String>,
    pub timeframes: u32,
    pub capex: CapexTable,
    pub rig_limit: u32,
    pub mode: AssignmentMode,
}

impl ScheduleProblem {
    /// 创建排程问题
    ///
    /// 只检查结构一致性（行数、列数、timeframes > 0）；
    /// 面向调用方的逐项校验由 `api::validator::RequestValidator` 负责。
    pub fn new(
        wells: Vec<String>,
        timeframes: u32,
        capex: CapexTable,
        rig_limit: u32,
        mode: AssignmentMode,
    ) -> Result<Self, String> {
        if timeframes == 0 {
            return Err("timeframes 必须大于 0".to_string());
        }
        if timeframes > MAX_TIMEFRAMES {
            return Err(format!(
                "timeframes({})超出上限{}",
                timeframes, MAX_TIMEFRAMES
            ));
        }
        if capex.len() != wells.len() {
            return Err(format!(
                "成本表行数({})与井数({})不一致",
                capex.len(),
                wells.len()
            ));
        }
        for (idx, well) in wells.iter().enumerate() {
            if capex.row(idx).len() != timeframes as usize {
                return Err(format!(
                    "井{}的成本行长度({})与 timeframes({})不一致",
                    well,
                    capex.row(idx).len(),
                    timeframes
                ));
            }
        }

        Ok(Self {
            wells,
            timeframes,
            capex,
            rig_limit,
            mode,
        })
    }

    /// 决策变量个数 (wells × timeframes)
    pub fn variable_count(&self) -> usize {
        self.wells.len() * self.timeframes as usize
    }

    /// 可同时排入的最大井数: min(井数, timeframes × rig_limit)
    ///
    /// 井与时间窗之间无其它限制，该上界总能达到。
    pub fn max_coverage(&self) -> usize {
        let slots = self.timeframes as u64 * self.rig_limit as u64;
        (self.wells.len() as u64).min(slots) as usize
    }
}

// ==========================================
// ScheduleEntry - 排程条目
// ==========================================
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ScheduleEntry {
    pub well: String,
    pub start_time: u32,
    pub finish_time: u32,
}

impl ScheduleEntry {
    /// finish_time = start_time + DRILL_DURATION
    ///
    /// start_time 来自已校验的问题，不超过 MAX_TIMEFRAMES
    pub fn new(well: impl Into<String>, start_time: u32) -> Self {
        Self {
            well: well.into(),
            start_time,
            finish_time: start_time + DRILL_DURATION,
        }
    }
}

// ==========================================
// TimeframeLoad - 时间窗负载
// ==========================================
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeframeLoad {
    pub timeframe: u32,
    pub assigned: u32,
    pub capacity: u32,
}

impl From<&RigSlot> for TimeframeLoad {
    fn from(slot: &RigSlot) -> Self {
        Self {
            timeframe: slot.timeframe,
            assigned: slot.assigned,
            capacity: slot.capacity,
        }
    }
}

// ==========================================
// ScheduleOutcome - 单次求解结果
// ==========================================
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScheduleOutcome {
    pub run_id: Uuid,
    pub assignment_mode: AssignmentMode,
    pub objective: f64,
    pub schedule: Vec<ScheduleEntry>,
    /// 未被排程的井（EXACTLY_ONCE 模式下恒为空）
    pub unscheduled_wells: Vec<String>,
    pub timeframe_load: Vec<TimeframeLoad>,
}
