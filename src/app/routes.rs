// ==========================================
// 钻井排程服务 - HTTP 路由
// ==========================================
// 职责: 将 HTTP 请求分发到各 API，错误统一转换为 JSON 错误体
// ==========================================

use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::response::Html;
use axum::routing::{get, post};
use axum::{Json, Router};

use crate::api::{
    ApiError, ApiResult, ScheduleSummaryResponse, WellScheduleRequest, WellScheduleResponse,
};
use crate::app::state::AppState;

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(|| async { "ok" }))
        .route("/optimize-schedule/", post(optimize_schedule))
        .route("/optimize-schedule/summary", post(optimize_schedule_summary))
        .route("/schedule-visualization/", get(schedule_visualization))
        .with_state(state)
}

// 请求体无法解析时同样按校验失败处理（400）
fn parse_body(
    body: Result<Json<WellScheduleRequest>, JsonRejection>,
) -> ApiResult<WellScheduleRequest> {
    body.map(|Json(request)| request)
        .map_err(|rejection| ApiError::InvalidInput(rejection.body_text()))
}

async fn optimize_schedule(
    State(state): State<AppState>,
    body: Result<Json<WellScheduleRequest>, JsonRejection>,
) -> ApiResult<Json<Vec<WellScheduleResponse>>> {
    let request = parse_body(body)?;
    let schedule = state.schedule_api.optimize_schedule(request).await?;
    Ok(Json(schedule))
}

async fn optimize_schedule_summary(
    State(state): State<AppState>,
    body: Result<Json<WellScheduleRequest>, JsonRejection>,
) -> ApiResult<Json<ScheduleSummaryResponse>> {
    let request = parse_body(body)?;
    let summary = state.schedule_api.optimize_schedule_summary(request).await?;
    Ok(Json(summary))
}

async fn schedule_visualization(State(state): State<AppState>) -> ApiResult<Html<String>> {
    let html = state.visualization_api.render_schedule_visualization()?;
    Ok(Html(html))
}
