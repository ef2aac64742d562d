// ==========================================
// 钻井排程服务 - API层错误类型
// ==========================================
// 职责: 定义API层错误类型，转换引擎/渲染错误为用户友好的错误消息，
//       并映射为 HTTP 状态码 + JSON 错误体
// ==========================================

use crate::domain::types::ViolationType;
use crate::engine::error::EngineError;
use crate::visualization::ChartError;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// API层错误类型
/// 所有错误信息必须包含显式原因
#[derive(Error, Debug)]
pub enum ApiError {
    // ==========================================
    // 请求错误 (4xx)
    // ==========================================
    #[error("无效输入: {0}")]
    InvalidInput(String),

    /// 请求校验失败（带逐项原因）
    #[error("请求校验失败: {reason}")]
    RequestValidationError {
        reason: String,
        violations: Vec<ValidationViolation>,
    },

    /// 模型无可行解（区别于“没有井被排入”）
    #[error("排程无可行解: {0}")]
    Infeasible(String),

    // ==========================================
    // 服务端错误 (5xx)
    // ==========================================
    #[error("求解器错误: {0}")]
    SolverError(String),

    #[error("图表渲染失败: {0}")]
    RenderError(String),

    #[error("内部错误: {0}")]
    InternalError(String),
}

// ==========================================
// 从 EngineError 转换
// ==========================================
impl From<EngineError> for ApiError {
    fn from(err: EngineError) -> Self {
        match err {
            EngineError::Infeasible { reason } => ApiError::Infeasible(reason),
            EngineError::SolverFailure { .. } | EngineError::InconsistentSolution(_) => {
                ApiError::SolverError(err.to_string())
            }
            EngineError::InvalidProblem(msg) => ApiError::InvalidInput(msg),
        }
    }
}

impl From<ChartError> for ApiError {
    fn from(err: ChartError) -> Self {
        ApiError::RenderError(err.to_string())
    }
}

/// Result 类型别名
pub type ApiResult<T> = Result<T, ApiError>;

// ==========================================
// 校验违规详情
// ==========================================

/// 校验违规详情
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ValidationViolation {
    pub violation_type: ViolationType,
    /// 相关井号（与具体井无关时为空）
    pub well: Option<String>,
    pub reason: String,
    pub details: Option<serde_json::Value>,
}

// ==========================================
// HTTP 错误响应
// ==========================================

/// 错误响应体
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    /// 错误代码
    pub code: String,

    /// 错误消息
    pub message: String,

    /// 详细信息（可选）
    pub details: Option<serde_json::Value>,
}

impl ApiError {
    pub fn code(&self) -> &'static str {
        match self {
            ApiError::InvalidInput(_) => "INVALID_INPUT",
            ApiError::RequestValidationError { .. } => "REQUEST_VALIDATION_ERROR",
            ApiError::Infeasible(_) => "SCHEDULE_INFEASIBLE",
            ApiError::SolverError(_) => "SOLVER_ERROR",
            ApiError::RenderError(_) => "RENDER_ERROR",
            ApiError::InternalError(_) => "INTERNAL_ERROR",
        }
    }

    pub fn status_code(&self) -> StatusCode {
        match self {
            ApiError::InvalidInput(_) | ApiError::RequestValidationError { .. } => {
                StatusCode::BAD_REQUEST
            }
            ApiError::Infeasible(_) => StatusCode::UNPROCESSABLE_ENTITY,
            ApiError::SolverError(_) | ApiError::RenderError(_) | ApiError::InternalError(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    pub fn to_error_response(&self) -> ErrorResponse {
        ErrorResponse {
            code: self.code().to_string(),
            message: self.to_string(),
            details: match self {
                ApiError::RequestValidationError { violations, .. } => {
                    Some(serde_json::json!({ "violations": violations }))
                }
                _ => None,
            },
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        if status.is_server_error() {
            tracing::error!(code = self.code(), error = %self, "请求处理失败");
        } else {
            tracing::warn!(code = self.code(), error = %self, "请求被拒绝");
        }
        (status, Json(self.to_error_response())).into_response()
    }
}
