// ==========================================
// 钻井排程服务 - 指派模型构造器
// ==========================================
// 职责: 将 ScheduleProblem 翻译为 0-1 线性规划，并从解中提取排程
// 模型:
//   变量   x[w][t] ∈ {0,1}, t ∈ 1..=timeframes
//   目标   min Σ x[w][t] · capex[w][t-1]
//   井约束 Σ_t x[w][t] <= 1   (EXACTLY_ONCE: = 1)
//   钻机   Σ_w x[w][t] <= rig_limit
//   覆盖   Σ x = min(W, T·R)  (仅 MAX_COVERAGE)
// 红线: 模型与求解器解耦，不依赖具体求解库
// ==========================================

use crate::domain::schedule::{ScheduleEntry, ScheduleProblem};
use crate::domain::types::AssignmentMode;
use crate::engine::error::{EngineError, EngineResult};

/// 判定二元变量取值的容差
pub const BINARY_TOLERANCE: f64 = 1e-6;

// ==========================================
// LinearRow - 线性约束行
// ==========================================

/// 约束方向
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RowSense {
    LessOrEqual,
    Equal,
}

/// 所有系数均为 1 的线性约束：Σ x[i] (sense) rhs
#[derive(Debug, Clone, PartialEq)]
pub struct LinearRow {
    pub name: String,
    pub variables: Vec<usize>,
    pub sense: RowSense,
    pub rhs: f64,
}

impl LinearRow {
    /// 在给定取值下检查约束是否满足
    pub fn is_satisfied(&self, values: &[f64]) -> bool {
        let lhs: f64 = self.variables.iter().map(|&i| values[i]).sum();
        match self.sense {
            RowSense::LessOrEqual => lhs <= self.rhs + BINARY_TOLERANCE,
            RowSense::Equal => (lhs - self.rhs).abs() <= BINARY_TOLERANCE,
        }
    }
}

// ==========================================
// AssignmentModel - 指派模型
// ==========================================
#[derive(Debug, Clone)]
pub struct AssignmentModel {
    wells: Vec<String>,
    timeframes: u32,
    /// 按 well 主序展开的成本: costs[well_idx * timeframes + (t-1)]
    costs: Vec<f64>,
    well_rows: Vec<LinearRow>,
    timeframe_rows: Vec<LinearRow>,
    coverage_row: Option<LinearRow>,
}

impl AssignmentModel {
    /// 由已校验的排程问题构造模型
    pub fn build(problem: &ScheduleProblem) -> Self {
        let tf = problem.timeframes as usize;
        let well_count = problem.wells.len();

        let mut costs = Vec::with_capacity(well_count * tf);
        for well_idx in 0..well_count {
            costs.extend_from_slice(problem.capex.row(well_idx));
        }

        let well_sense = match problem.mode {
            AssignmentMode::MaxCoverage | AssignmentMode::AtMostOnce => RowSense::LessOrEqual,
            AssignmentMode::ExactlyOnce => RowSense::Equal,
        };

        let well_rows = problem
            .wells
            .iter()
            .enumerate()
            .map(|(well_idx, well)| LinearRow {
                name: format!("well_once[{}]", well),
                variables: (0..tf).map(|t| well_idx * tf + t).collect(),
                sense: well_sense,
                rhs: 1.0,
            })
            .collect();

        let timeframe_rows = (0..tf)
            .map(|t| LinearRow {
                name: format!("rig_limit[t{}]", t + 1),
                variables: (0..well_count).map(|w| w * tf + t).collect(),
                sense: RowSense::LessOrEqual,
                rhs: problem.rig_limit as f64,
            })
            .collect();

        let coverage_row = match problem.mode {
            AssignmentMode::MaxCoverage => Some(LinearRow {
                name: "coverage".to_string(),
                variables: (0..costs.len()).collect(),
                sense: RowSense::Equal,
                rhs: problem.max_coverage() as f64,
            }),
            AssignmentMode::AtMostOnce | AssignmentMode::ExactlyOnce => None,
        };

        Self {
            wells: problem.wells.clone(),
            timeframes: problem.timeframes,
            costs,
            well_rows,
            timeframe_rows,
            coverage_row,
        }
    }

    pub fn variable_count(&self) -> usize {
        self.costs.len()
    }

    pub fn constraint_count(&self) -> usize {
        self.well_rows.len() + self.timeframe_rows.len() + self.coverage_row.iter().count()
    }

    /// 变量下标 (well_idx, timeframe 1-based)
    pub fn variable_index(&self, well_idx: usize, timeframe: u32) -> usize {
        well_idx * self.timeframes as usize + (timeframe - 1) as usize
    }

    /// 目标函数项 (变量下标, 成本)
    pub fn objective_terms(&self) -> impl Iterator<Item = (usize, f64)> + '_ {
        self.costs.iter().copied().enumerate()
    }

    /// 全部约束：井约束、钻机约束、覆盖约束（如有）
    pub fn constraints(&self) -> impl Iterator<Item = &LinearRow> {
        self.well_rows
            .iter()
            .chain(self.timeframe_rows.iter())
            .chain(self.coverage_row.iter())
    }

    /// 给定取值下的目标函数值（变量先按二元取整）
    pub fn objective_value(&self, values: &[f64]) -> f64 {
        self.objective_terms()
            .map(|(idx, cost)| if is_one(values[idx]) { cost } else { 0.0 })
            .sum()
    }

    /// 从求解取值中提取排程
    ///
    /// 输出顺序: 按请求中的井顺序，再按时间窗升序。
    /// 取值必须接近 0 或 1，且满足全部约束，否则返回 InconsistentSolution。
    pub fn extract(&self, values: &[f64]) -> EngineResult<Vec<ScheduleEntry>> {
        if values.len() != self.variable_count() {
            return Err(EngineError::InconsistentSolution(format!(
                "变量取值个数({})与模型变量数({})不一致",
                values.len(),
                self.variable_count()
            )));
        }

        let rounded: Vec<f64> = values
            .iter()
            .enumerate()
            .map(|(idx, &v)| {
                if is_one(v) {
                    Ok(1.0)
                } else if v.abs() <= BINARY_TOLERANCE {
                    Ok(0.0)
                } else {
                    Err(EngineError::InconsistentSolution(format!(
                        "变量{}取值{}不是二元值",
                        idx, v
                    )))
                }
            })
            .collect::<EngineResult<_>>()?;

        if let Some(row) = self.constraints().find(|row| !row.is_satisfied(&rounded)) {
            return Err(EngineError::InconsistentSolution(format!(
                "约束{}不满足",
                row.name
            )));
        }

        let mut schedule = Vec::new();
        for (well_idx, well) in self.wells.iter().enumerate() {
            for t in 1..=self.timeframes {
                if rounded[self.variable_index(well_idx, t)] == 1.0 {
                    schedule.push(ScheduleEntry::new(well.clone(), t));
                }
            }
        }
        Ok(schedule)
    }
}

fn is_one(value: f64) -> bool {
    (value - 1.0).abs() <= BINARY_TOLERANCE
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::schedule::CapexTable;

    fn two_by_two(mode: AssignmentMode) -> ScheduleProblem {
        ScheduleProblem::new(
            vec!["A".to_string(), "B".to_string()],
            2,
            CapexTable::new(vec![vec![10.0, 5.0], vec![8.0, 12.0]]),
            1,
            mode,
        )
        .unwrap()
    }

    #[test]
    fn test_model_shape() {
        let model = AssignmentModel::build(&two_by_two(AssignmentMode::AtMostOnce));
        assert_eq!(model.variable_count(), 4);
        // 2 个井约束 + 2 个钻机约束
        assert_eq!(model.constraint_count(), 4);

        let rows: Vec<&LinearRow> = model.constraints().collect();
        assert_eq!(rows[0].name, "well_once[A]");
        assert_eq!(rows[0].variables, vec![0, 1]);
        assert_eq!(rows[0].sense, RowSense::LessOrEqual);
        assert_eq!(rows[2].name, "rig_limit[t1]");
        assert_eq!(rows[2].variables, vec![0, 2]);
        assert_eq!(rows[2].rhs, 1.0);
    }

    #[test]
    fn test_max_coverage_adds_coverage_row() {
        let model = AssignmentModel::build(&two_by_two(AssignmentMode::MaxCoverage));
        assert_eq!(model.constraint_count(), 5);

        let coverage = model.constraints().last().unwrap();
        assert_eq!(coverage.name, "coverage");
        assert_eq!(coverage.variables, vec![0, 1, 2, 3]);
        assert_eq!(coverage.sense, RowSense::Equal);
        // min(2 口井, 2 个时间窗 × 1 台钻机)
        assert_eq!(coverage.rhs, 2.0);

        // 只排一口井不满足覆盖约束
        assert!(model.extract(&[0.0, 1.0, 0.0, 0.0]).is_err());
    }

    #[test]
    fn test_exactly_once_uses_equality_rows() {
        let model = AssignmentModel::build(&two_by_two(AssignmentMode::ExactlyOnce));
        let senses: Vec<RowSense> = model.constraints().map(|r| r.sense).collect();
        assert_eq!(
            senses,
            vec![
                RowSense::Equal,
                RowSense::Equal,
                RowSense::LessOrEqual,
                RowSense::LessOrEqual
            ]
        );
    }

    #[test]
    fn test_objective_terms_follow_capex() {
        let model = AssignmentModel::build(&two_by_two(AssignmentMode::AtMostOnce));
        let terms: Vec<(usize, f64)> = model.objective_terms().collect();
        assert_eq!(terms, vec![(0, 10.0), (1, 5.0), (2, 8.0), (3, 12.0)]);
        assert_eq!(model.variable_index(1, 2), 3);
    }

    #[test]
    fn test_extract_schedule() {
        let model = AssignmentModel::build(&two_by_two(AssignmentMode::AtMostOnce));
        // A@2, B@1（带浮点噪声）
        let values = [0.0, 0.9999999, 1.0000001, 1e-9];
        let schedule = model.extract(&values).unwrap();

        assert_eq!(
            schedule,
            vec![ScheduleEntry::new("A", 2), ScheduleEntry::new("B", 1)]
        );
        assert_eq!(model.objective_value(&values), 13.0);
    }

    #[test]
    fn test_extract_rejects_fractional_value() {
        let model = AssignmentModel::build(&two_by_two(AssignmentMode::AtMostOnce));
        let result = model.extract(&[0.5, 0.5, 0.0, 0.0]);
        assert!(matches!(result, Err(EngineError::InconsistentSolution(_))));
    }

    #[test]
    fn test_extract_rejects_capacity_violation() {
        let model = AssignmentModel::build(&two_by_two(AssignmentMode::AtMostOnce));
        // 两口井都在 t1，超出 rig_limit=1
        let result = model.extract(&[1.0, 0.0, 1.0, 0.0]);
        match result {
            Err(EngineError::InconsistentSolution(msg)) => assert!(msg.contains("rig_limit[t1]")),
            other => panic!("Expected InconsistentSolution, got {:?}", other),
        }
    }

    #[test]
    fn test_extract_rejects_wrong_length() {
        let model = AssignmentModel::build(&two_by_two(AssignmentMode::AtMostOnce));
        assert!(model.extract(&[1.0]).is_err());
    }
}
