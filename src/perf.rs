use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Instant;

static PERF_ENABLED: AtomicBool = AtomicBool::new(cfg!(debug_assertions));

fn is_true(v: &str) -> bool {
    matches!(
        v.trim().to_lowercase().as_str(),
        "1" | "true" | "yes" | "y" | "on"
    )
}

/// 按环境变量设置性能日志开关
///
/// 开关：
/// - Debug 默认开启；Release 默认关闭（可通过环境变量开启）
/// - `WELL_SCHED_PERF=1` 强制开启，`WELL_SCHED_PERF=0` 强制关闭
pub fn install_from_env() {
    let enabled = match std::env::var("WELL_SCHED_PERF") {
        Ok(v) => is_true(&v),
        Err(_) => cfg!(debug_assertions),
    };
    set_enabled(enabled);
}

pub fn set_enabled(enabled: bool) {
    PERF_ENABLED.store(enabled, Ordering::Relaxed);
}

pub fn is_enabled() -> bool {
    PERF_ENABLED.load(Ordering::Relaxed)
}

/// 性能统计 Guard：记录 elapsed_ms + 模型规模
///
/// 使用方式：
/// ```ignore
/// let _perf = well_scheduler::perf::PerfGuard::new("solve_schedule")
///     .with_model_size(variables, constraints);
/// // do work...
/// ```
pub struct PerfGuard {
    op: &'static str,
    start: Instant,
    variables: usize,
    constraints: usize,
}

impl PerfGuard {
    pub fn new(op: &'static str) -> Self {
        Self {
            op,
            start: Instant::now(),
            variables: 0,
            constraints: 0,
        }
    }

    pub fn with_model_size(mut self, variables: usize, constraints: usize) -> Self {
        self.variables = variables;
        self.constraints = constraints;
        self
    }
}

impl Drop for PerfGuard {
    fn drop(&mut self) {
        if !is_enabled() {
            return;
        }

        let elapsed_ms = self.start.elapsed().as_millis() as u64;
        tracing::info!(
            target: "perf",
            op = self.op,
            elapsed_ms,
            variables = self.variables,
            constraints = self.constraints,
            "done"
        );
    }
}
