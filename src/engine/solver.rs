// ==========================================
// 钻井排程服务 - 求解器适配层
// ==========================================
// 职责: 将 AssignmentModel 交给外部 MIP 求解库并取回变量取值
// 实现: good_lp 建模 + microlp 后端（纯 Rust，无系统依赖）
// 红线: 求解器只返回取值，排程提取由 AssignmentModel 完成
// ==========================================

use crate::engine::error::{EngineError, EngineResult};
use crate::engine::schedule_model::{AssignmentModel, LinearRow, RowSense};
use good_lp::{
    constraint, microlp, variable, Constraint, Expression, ProblemVariables, ResolutionError,
    Solution, SolverModel, Variable,
};
use tracing::debug;

/// 求解器返回的变量取值（下标与 AssignmentModel 一致）
#[derive(Debug, Clone, PartialEq)]
pub struct SolvedAssignment {
    pub values: Vec<f64>,
}

// ==========================================
// Trait: AssignmentSolver
// ==========================================
// 用途: 求解器接缝，便于替换后端或在测试中注入桩实现
pub trait AssignmentSolver: Send + Sync {
    /// 求解器名称（用于日志与错误信息）
    fn name(&self) -> &'static str;

    /// 求解最小化模型
    ///
    /// # 返回
    /// - Ok(SolvedAssignment): 最优解的变量取值
    /// - Err(EngineError::Infeasible): 模型无可行解
    /// - Err(EngineError::SolverFailure): 求解器其它失败
    fn solve(&self, model: &AssignmentModel) -> EngineResult<SolvedAssignment>;
}

// ==========================================
// MicrolpSolver - good_lp + microlp
// ==========================================
#[derive(Debug, Clone, Copy, Default)]
pub struct MicrolpSolver;

impl MicrolpSolver {
    pub fn new() -> Self {
        Self
    }

    fn to_constraint(row: &LinearRow, vars: &[Variable]) -> Constraint {
        let lhs: Expression = row.variables.iter().map(|&i| vars[i]).sum();
        match row.sense {
            RowSense::LessOrEqual => constraint::leq(lhs, row.rhs),
            RowSense::Equal => constraint::eq(lhs, row.rhs),
        }
    }
}

impl AssignmentSolver for MicrolpSolver {
    fn name(&self) -> &'static str {
        "microlp"
    }

    fn solve(&self, model: &AssignmentModel) -> EngineResult<SolvedAssignment> {
        let mut problem_vars = ProblemVariables::new();
        let vars: Vec<Variable> = (0..model.variable_count())
            .map(|_| problem_vars.add(variable().binary()))
            .collect();

        let objective: Expression = model
            .objective_terms()
            .map(|(idx, cost)| vars[idx] * cost)
            .sum();

        let mut problem = problem_vars.minimise(objective).using(microlp);
        for row in model.constraints() {
            problem = problem.with(Self::to_constraint(row, &vars));
        }

        debug!(
            solver = self.name(),
            variables = model.variable_count(),
            constraints = model.constraint_count(),
            "提交求解"
        );

        let solution = problem.solve().map_err(|err| match err {
            ResolutionError::Infeasible => EngineError::Infeasible {
                reason: "钻机产能不足以覆盖约束要求".to_string(),
            },
            other => EngineError::SolverFailure {
                solver: self.name().to_string(),
                message: other.to_string(),
            },
        })?;

        Ok(SolvedAssignment {
            values: vars.iter().map(|&v| solution.value(v)).collect(),
        })
    }
}
