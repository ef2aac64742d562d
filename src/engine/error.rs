// ==========================================
// 钻井排程服务 - 引擎层错误类型
// ==========================================
// 红线: 无可行解与求解失败必须区分，不得以空排程代替
// ==========================================

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum EngineError {
    /// 模型无可行解（EXACTLY_ONCE 模式下钻机不足时出现）
    #[error("排程无可行解: {reason}")]
    Infeasible { reason: String },

    /// 求解器自身失败（无界、内部错误等）
    #[error("求解器失败({solver}): {message}")]
    SolverFailure { solver: String, message: String },

    /// 求解器返回的取值与模型约束不一致
    #[error("求解结果不一致: {0}")]
    InconsistentSolution(String),

    #[error("排程问题构造失败: {0}")]
    InvalidProblem(String),
}

pub type EngineResult<T> = Result<T, EngineError>;
