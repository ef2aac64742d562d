// ==========================================
// 测试辅助函数
// ==========================================
// 职责: 提供请求构造、排程问题构造、桩求解器与路由构造
// ==========================================

#![allow(dead_code)]

use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use axum::body::Body;
use axum::http::{header, Request};
use axum::Router;
use well_scheduler::config::ServiceConfig;
use well_scheduler::engine::{
    AssignmentModel, AssignmentSolver, EngineResult, MicrolpSolver, SolvedAssignment,
};
use well_scheduler::{
    logging, router, AppState, AssignmentMode, CapexTable, ScheduleProblem, WellScheduleRequest,
};

/// 构造排程请求
pub fn schedule_request(
    wells: &[&str],
    timeframes: i64,
    capex: &[(&str, &[f64])],
    rig_limit: i64,
) -> WellScheduleRequest {
    WellScheduleRequest {
        wells: wells.iter().map(|w| w.to_string()).collect(),
        timeframes,
        capex: capex
            .iter()
            .map(|(well, row)| (well.to_string(), row.to_vec()))
            .collect::<HashMap<_, _>>(),
        rig_limit,
        assignment_mode: None,
    }
}

/// 两井两时间窗的标准场景
///
/// A: [10, 5], B: [8, 12], rig_limit = 1
/// 最优解: A@2 + B@1, 总成本 13
pub fn two_well_request() -> WellScheduleRequest {
    schedule_request(
        &["A", "B"],
        2,
        &[("A", &[10.0, 5.0]), ("B", &[8.0, 12.0])],
        1,
    )
}

/// 直接构造排程问题（跳过请求校验）
pub fn schedule_problem(
    wells: &[&str],
    timeframes: u32,
    capex: Vec<Vec<f64>>,
    rig_limit: u32,
    mode: AssignmentMode,
) -> ScheduleProblem {
    ScheduleProblem::new(
        wells.iter().map(|w| w.to_string()).collect(),
        timeframes,
        CapexTable::new(capex),
        rig_limit,
        mode,
    )
    .expect("Failed to build schedule problem")
}

/// 记录调用次数的求解器包装
///
/// 委托给 microlp 求解，同时统计 solve 调用次数
pub struct CountingSolver {
    inner: MicrolpSolver,
    calls: AtomicUsize,
}

impl CountingSolver {
    pub fn new() -> Arc<Self> {
        Arc::new(Self {
            inner: MicrolpSolver::new(),
            calls: AtomicUsize::new(0),
        })
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

impl AssignmentSolver for CountingSolver {
    fn name(&self) -> &'static str {
        "counting"
    }

    fn solve(&self, model: &AssignmentModel) -> EngineResult<SolvedAssignment> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.inner.solve(model)
    }
}

/// 使用默认配置与指定求解器构造路由
pub fn test_router(solver: Arc<dyn AssignmentSolver>) -> Router {
    logging::init_test();
    router(AppState::with_solver(ServiceConfig::default(), solver))
}

/// 构造 JSON POST 请求
pub fn json_post(uri: &str, body: &serde_json::Value) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .expect("Failed to build request")
}

/// 构造 GET 请求
pub fn get(uri: &str) -> Request<Body> {
    Request::builder()
        .method("GET")
        .uri(uri)
        .body(Body::empty())
        .expect("Failed to build request")
}

/// 读取响应体为字节
pub async fn body_bytes(body: Body) -> Vec<u8> {
    axum::body::to_bytes(body, usize::MAX)
        .await
        .expect("Failed to read body")
        .to_vec()
}

/// 读取响应体为 JSON
pub async fn body_json(body: Body) -> serde_json::Value {
    serde_json::from_slice(&body_bytes(body).await).expect("Response body is not JSON")
}
