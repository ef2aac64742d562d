// ==========================================
// 钻井排程服务 - API 层
// ==========================================
// 职责: 提供业务 API 接口,供 HTTP 路由调用
// ==========================================

pub mod dto;
pub mod error;
pub mod schedule_api;
pub mod validator;
pub mod visualization_api;

// 重导出核心类型
pub use dto::{ScheduleSummaryResponse, WellScheduleRequest, WellScheduleResponse};
pub use error::{ApiError, ApiResult, ErrorResponse, ValidationViolation};
pub use schedule_api::ScheduleApi;
pub use validator::RequestValidator;
pub use visualization_api::VisualizationApi;
