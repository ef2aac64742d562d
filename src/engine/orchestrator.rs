// ==========================================
// 钻井排程服务 - 排程编排器
// ==========================================
// 计算主流程:
//   1) AssignmentModel::build  构造 0-1 模型
//   2) AssignmentSolver::solve  外部求解
//   3) AssignmentModel::extract 提取排程
//   4) RigSlot 复核钻机产能 + 统计未排井
// 红线: 求解失败/无可行解直接返回错误，不降级为空排程
// ==========================================

use crate::domain::capacity::{CapacityConstraint, RigSlot};
use crate::domain::schedule::{ScheduleEntry, ScheduleOutcome, ScheduleProblem, TimeframeLoad};
use crate::engine::error::{EngineError, EngineResult};
use crate::engine::schedule_model::AssignmentModel;
use crate::engine::solver::AssignmentSolver;
use crate::perf::PerfGuard;
use std::collections::HashSet;
use std::sync::Arc;
use tracing::{debug, info, instrument, warn};
use uuid::Uuid;

// ==========================================
// ScheduleOrchestrator - 排程编排器
// ==========================================
// 无请求间共享可变状态；求解器以 Arc 共享
pub struct ScheduleOrchestrator {
    solver: Arc<dyn AssignmentSolver>,
}

impl ScheduleOrchestrator {
    pub fn new(solver: Arc<dyn AssignmentSolver>) -> Self {
        Self { solver }
    }

    pub fn solver_name(&self) -> &'static str {
        self.solver.name()
    }

    /// 执行一次完整排程
    ///
    /// # 参数
    /// - problem: 已校验的排程问题
    ///
    /// # 返回
    /// - Ok(ScheduleOutcome): 排程、目标值、未排井、各时间窗负载
    /// - Err(EngineError::Infeasible): 无可行解
    /// - Err(EngineError::SolverFailure / InconsistentSolution): 求解失败
    ///
    /// 该方法为阻塞调用，异步调用方应放入阻塞线程池执行。
    #[instrument(skip(self, problem), fields(
        run_id = tracing::field::Empty,
        wells = problem.wells.len(),
        timeframes = problem.timeframes,
        rig_limit = problem.rig_limit,
        mode = %problem.mode
    ))]
    pub fn execute(&self, problem: &ScheduleProblem) -> EngineResult<ScheduleOutcome> {
        let run_id = Uuid::new_v4();
        tracing::Span::current().record("run_id", tracing::field::display(run_id));

        info!("开始执行排程求解");

        // 没有井：不建模、不求解，也不展开时间窗
        if problem.wells.is_empty() {
            debug!("没有井，跳过建模与求解");
            return Ok(ScheduleOutcome {
                run_id,
                assignment_mode: problem.mode,
                objective: 0.0,
                schedule: Vec::new(),
                unscheduled_wells: Vec::new(),
                timeframe_load: Vec::new(),
            });
        }

        // ==========================================
        // 步骤1: 构造模型
        // ==========================================
        let model = AssignmentModel::build(problem);
        debug!(
            variables = model.variable_count(),
            constraints = model.constraint_count(),
            "模型构造完成"
        );

        // ==========================================
        // 步骤2: 求解 + 提取
        // ==========================================
        let (schedule, objective) = {
            let _perf = PerfGuard::new("solve_schedule")
                .with_model_size(model.variable_count(), model.constraint_count());

            let solved = self.solver.solve(&model).map_err(|e| {
                warn!(solver = self.solver.name(), error = %e, "求解失败");
                e
            })?;
            let schedule = model.extract(&solved.values)?;
            (schedule, model.objective_value(&solved.values))
        };

        // ==========================================
        // 步骤3: 钻机产能复核
        // ==========================================
        let slots = Self::verify_capacity(problem, &schedule)?;

        let scheduled: HashSet<&str> = schedule.iter().map(|e| e.well.as_str()).collect();
        let unscheduled_wells: Vec<String> = problem
            .wells
            .iter()
            .filter(|w| !scheduled.contains(w.as_str()))
            .cloned()
            .collect();

        if !unscheduled_wells.is_empty() {
            info!(
                unscheduled = unscheduled_wells.len(),
                "部分井未排入计划"
            );
        }

        let free_rig_slots: u64 = slots.iter().map(|s| s.remaining() as u64).sum();
        let peak_utilization = slots.iter().map(|s| s.utilization()).fold(0.0, f64::max);

        info!(
            scheduled = schedule.len(),
            objective,
            free_rig_slots,
            peak_utilization,
            "排程求解完成"
        );

        Ok(ScheduleOutcome {
            run_id,
            assignment_mode: problem.mode,
            objective,
            schedule,
            unscheduled_wells,
            timeframe_load: slots.iter().map(TimeframeLoad::from).collect(),
        })
    }

    /// 复核排程：每口井至多一次、时间窗在范围内、每个时间窗不超过 rig_limit
    fn verify_capacity(
        problem: &ScheduleProblem,
        schedule: &[ScheduleEntry],
    ) -> EngineResult<Vec<RigSlot>> {
        let mut slots = RigSlot::uniform(problem.timeframes, problem.rig_limit);
        let mut seen: HashSet<&str> = HashSet::new();

        for entry in schedule {
            if !seen.insert(entry.well.as_str()) {
                return Err(EngineError::InconsistentSolution(format!(
                    "井{}被重复排程",
                    entry.well
                )));
            }

            let slot = entry
                .start_time
                .checked_sub(1)
                .and_then(|idx| slots.get_mut(idx as usize))
                .ok_or_else(|| {
                    EngineError::InconsistentSolution(format!(
                        "井{}的开钻时间窗{}超出范围",
                        entry.well, entry.start_time
                    ))
                })?;
            slot.assigned += 1;
        }

        if let Some(slot) = slots.iter().find(|s| s.is_overloaded()) {
            return Err(EngineError::InconsistentSolution(format!(
                "时间窗{}开钻{}口井，超过钻机上限{}",
                slot.timeframe, slot.assigned, slot.capacity
            )));
        }

        Ok(slots)
    }
}
