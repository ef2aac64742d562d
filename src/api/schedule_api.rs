// ==========================================
// 钻井排程服务 - 排程优化 API
// ==========================================
// 职责: 校验请求、在阻塞线程池中执行求解、组装响应
// 红线: 校验失败不得调用求解器；每次请求独立建模
// ==========================================

use std::sync::Arc;

use tracing::{debug, instrument};

use crate::api::dto::{ScheduleSummaryResponse, WellScheduleRequest, WellScheduleResponse};
use crate::api::error::{ApiError, ApiResult};
use crate::api::validator::RequestValidator;
use crate::domain::schedule::{ScheduleOutcome, ScheduleProblem};
use crate::engine::ScheduleOrchestrator;

// ==========================================
// ScheduleApi - 排程优化 API
// ==========================================

/// 排程优化API
///
/// 职责：
/// 1. 请求校验（RequestValidator）
/// 2. 求解编排（ScheduleOrchestrator，阻塞执行）
/// 3. 结果转换为响应结构
pub struct ScheduleApi {
    orchestrator: Arc<ScheduleOrchestrator>,
    validator: RequestValidator,
}

impl ScheduleApi {
    pub fn new(orchestrator: Arc<ScheduleOrchestrator>, validator: RequestValidator) -> Self {
        Self {
            orchestrator,
            validator,
        }
    }

    /// 求解排程，返回排程条目列表
    ///
    /// # 返回
    /// - Ok(Vec<WellScheduleResponse>): 按井顺序排列的排程（可能为空）
    /// - Err(ApiError): 校验失败 / 无可行解 / 求解器错误
    #[instrument(skip(self, request), fields(wells = request.wells.len()))]
    pub async fn optimize_schedule(
        &self,
        request: WellScheduleRequest,
    ) -> ApiResult<Vec<WellScheduleResponse>> {
        let outcome = self.run(request).await?;
        Ok(outcome.schedule)
    }

    /// 求解排程，返回带目标值与负载的摘要
    #[instrument(skip(self, request), fields(wells = request.wells.len()))]
    pub async fn optimize_schedule_summary(
        &self,
        request: WellScheduleRequest,
    ) -> ApiResult<ScheduleSummaryResponse> {
        let outcome = self.run(request).await?;
        Ok(ScheduleSummaryResponse::from(outcome))
    }

    async fn run(&self, request: WellScheduleRequest) -> ApiResult<ScheduleOutcome> {
        let problem = self.validator.validate(request)?;
        let outcome = self.solve_blocking(problem).await?;

        debug!(
            run_id = %outcome.run_id,
            unscheduled = outcome.unscheduled_wells.len(),
            "排程请求处理完成"
        );
        Ok(outcome)
    }

    async fn solve_blocking(&self, problem: ScheduleProblem) -> ApiResult<ScheduleOutcome> {
        let orchestrator = Arc::clone(&self.orchestrator);
        let outcome = tokio::task::spawn_blocking(move || orchestrator.execute(&problem))
            .await
            .map_err(|e| ApiError::InternalError(format!("求解任务异常终止: {}", e)))??;
        Ok(outcome)
    }
}
