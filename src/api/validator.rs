// ==========================================
// 钻井排程服务 - 请求校验器
// ==========================================
// 职责: 在构造模型之前逐项校验排程请求
// 红线: 成本表必须与井一一对应，且每行恰好 timeframes 个有限数值；
//       校验失败时不得调用求解器
// ==========================================

use std::collections::HashSet;

use crate::api::dto::WellScheduleRequest;
use crate::api::error::{ApiError, ApiResult, ValidationViolation};
use crate::config::ServiceConfig;
use crate::domain::schedule::{CapexTable, ScheduleProblem, MAX_TIMEFRAMES};
use crate::domain::types::{AssignmentMode, ViolationType};
use crate::engine::error::EngineError;

// ==========================================
// RequestValidator - 请求校验器
// ==========================================

/// 请求校验器
///
/// 职责：
/// 1. 校验 timeframes > 0、rig_limit >= 0
/// 2. 校验井号非空且唯一
/// 3. 校验成本表与井一一对应、长度与数值合法
/// 4. 校验模型规模不超过上限
/// 5. 全部通过后生成 ScheduleProblem
#[derive(Debug, Clone)]
pub struct RequestValidator {
    max_model_variables: u64,
    default_mode: AssignmentMode,
}

impl RequestValidator {
    /// # 参数
    /// - max_model_variables: 最大决策变量数，0 表示不限制
    /// - default_mode: 请求未指定时的指派模式
    pub fn new(max_model_variables: u64, default_mode: AssignmentMode) -> Self {
        Self {
            max_model_variables,
            default_mode,
        }
    }

    pub fn from_config(config: &ServiceConfig) -> Self {
        Self::new(config.max_model_variables, config.assignment_mode)
    }

    /// 校验请求并生成排程问题
    ///
    /// # 返回
    /// - Ok(ScheduleProblem): 校验通过
    /// - Err(ApiError::RequestValidationError): 包含全部违规项
    pub fn validate(&self, request: WellScheduleRequest) -> ApiResult<ScheduleProblem> {
        let mut violations = Vec::new();

        // 1. timeframes
        let timeframes = if request.timeframes <= 0 {
            violations.push(violation(
                ViolationType::NonPositiveTimeframes,
                None,
                format!("timeframes 必须为正整数，实际为{}", request.timeframes),
                None,
            ));
            None
        } else {
            match u32::try_from(request.timeframes) {
                Ok(tf) if tf <= MAX_TIMEFRAMES => Some(tf),
                _ => {
                    violations.push(violation(
                        ViolationType::TimeframesOutOfRange,
                        None,
                        format!(
                            "timeframes 超出允许范围 [1, {}]，实际为{}",
                            MAX_TIMEFRAMES, request.timeframes
                        ),
                        None,
                    ));
                    None
                }
            }
        };

        // 2. rig_limit
        let rig_limit = match u32::try_from(request.rig_limit) {
            Ok(limit) => Some(limit),
            Err(_) => {
                violations.push(violation(
                    ViolationType::RigLimitOutOfRange,
                    None,
                    format!(
                        "rig_limit 超出允许范围 [0, {}]，实际为{}",
                        u32::MAX,
                        request.rig_limit
                    ),
                    None,
                ));
                None
            }
        };

        // 3. 井号
        let mut seen: HashSet<&str> = HashSet::new();
        let mut reported_duplicates: HashSet<&str> = HashSet::new();
        for well in &request.wells {
            if well.trim().is_empty() {
                violations.push(violation(
                    ViolationType::EmptyWellLabel,
                    Some(well),
                    "井号不能为空".to_string(),
                    None,
                ));
            }
            if !seen.insert(well.as_str()) && reported_duplicates.insert(well.as_str()) {
                violations.push(violation(
                    ViolationType::DuplicateWell,
                    Some(well),
                    format!("井{}重复出现", well),
                    None,
                ));
            }
        }

        // 4. 成本表：逐井检查（重复井只查一次）
        let mut checked: HashSet<&str> = HashSet::new();
        for well in &request.wells {
            if !checked.insert(well.as_str()) {
                continue;
            }
            match request.capex.get(well) {
                None => violations.push(violation(
                    ViolationType::MissingCapex,
                    Some(well),
                    format!("井{}缺少成本行", well),
                    None,
                )),
                Some(row) => {
                    if let Some(tf) = timeframes {
                        if row.len() != tf as usize {
                            violations.push(violation(
                                ViolationType::CapexLengthMismatch,
                                Some(well),
                                format!(
                                    "井{}的成本行长度为{}，应为{}",
                                    well,
                                    row.len(),
                                    tf
                                ),
                                Some(serde_json::json!({
                                    "expected": tf,
                                    "actual": row.len(),
                                })),
                            ));
                        }
                    }
                    let bad_timeframes: Vec<usize> = row
                        .iter()
                        .enumerate()
                        .filter(|(_, c)| !c.is_finite())
                        .map(|(idx, _)| idx + 1)
                        .collect();
                    if !bad_timeframes.is_empty() {
                        violations.push(violation(
                            ViolationType::NonFiniteCost,
                            Some(well),
                            format!("井{}存在非有限成本值", well),
                            Some(serde_json::json!({ "timeframes": bad_timeframes })),
                        ));
                    }
                }
            }
        }

        // 5. 成本表：未声明的井
        let mut undeclared: Vec<&String> = request
            .capex
            .keys()
            .filter(|key| !seen.contains(key.as_str()))
            .collect();
        undeclared.sort();
        for key in undeclared {
            violations.push(violation(
                ViolationType::UndeclaredCapexEntry,
                Some(key),
                format!("成本表包含未声明的井{}", key),
                None,
            ));
        }

        // 6. 模型规模：没有井时按一口井计，时间窗数同样受上限约束
        if let Some(tf) = timeframes {
            let variables = request.wells.len().max(1) as u64 * tf as u64;
            if self.max_model_variables > 0 && variables > self.max_model_variables {
                violations.push(violation(
                    ViolationType::ModelTooLarge,
                    None,
                    format!(
                        "模型规模{}超过上限{}",
                        variables, self.max_model_variables
                    ),
                    Some(serde_json::json!({
                        "wells": request.wells.len(),
                        "timeframes": tf,
                        "max_model_variables": self.max_model_variables,
                    })),
                ));
            }
        }

        if !violations.is_empty() {
            tracing::warn!(violations = violations.len(), "排程请求校验未通过");
            return Err(ApiError::RequestValidationError {
                reason: format!("{}项校验未通过", violations.len()),
                violations,
            });
        }

        // 校验全部通过，timeframes/rig_limit 必然有值
        let (Some(timeframes), Some(rig_limit)) = (timeframes, rig_limit) else {
            return Err(ApiError::InternalError("校验状态不一致".to_string()));
        };

        let mut capex = request.capex;
        let rows = request
            .wells
            .iter()
            .map(|well| capex.remove(well).unwrap_or_default())
            .collect();

        ScheduleProblem::new(
            request.wells,
            timeframes,
            CapexTable::new(rows),
            rig_limit,
            request.assignment_mode.unwrap_or(self.default_mode),
        )
        .map_err(EngineError::InvalidProblem)
        .map_err(ApiError::from)
    }
}

fn violation(
    violation_type: ViolationType,
    well: Option<&String>,
    reason: String,
    details: Option<serde_json::Value>,
) -> ValidationViolation {
    ValidationViolation {
        violation_type,
        well: well.cloned(),
        reason,
        details,
    }
}
