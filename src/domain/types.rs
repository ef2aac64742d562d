// ==========================================
// 钻井排程服务 - 领域类型定义
// ==========================================
// 职责: 指派模式、校验违规类型等枚举
// 序列化格式: SCREAMING_SNAKE_CASE (与 HTTP 接口一致)
// ==========================================

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

// ==========================================
// 指派模式 (Assignment Mode)
// ==========================================
// MaxCoverage: 先排满尽可能多的井 (min(井数, 时间窗×钻机))，再最小化成本
// AtMostOnce: 每口井至多排一次，纯成本最小化（成本为正时可能一口不排）
// ExactlyOnce: 每口井必须排一次，钻机不足时报告无可行解
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AssignmentMode {
    #[default]
    MaxCoverage,
    AtMostOnce,
    ExactlyOnce,
}

impl fmt::Display for AssignmentMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AssignmentMode::MaxCoverage => write!(f, "MAX_COVERAGE"),
            AssignmentMode::AtMostOnce => write!(f, "AT_MOST_ONCE"),
            AssignmentMode::ExactlyOnce => write!(f, "EXACTLY_ONCE"),
        }
    }
}

impl FromStr for AssignmentMode {
    type Err = String;

    /// 大小写不敏感，允许 `-` 代替 `_`
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_uppercase().replace('-', "_").as_str() {
            "MAX_COVERAGE" => Ok(AssignmentMode::MaxCoverage),
            "AT_MOST_ONCE" => Ok(AssignmentMode::AtMostOnce),
            "EXACTLY_ONCE" => Ok(AssignmentMode::ExactlyOnce),
            other => Err(format!(
                "未知的指派模式: {}（可选: MAX_COVERAGE / AT_MOST_ONCE / EXACTLY_ONCE）",
                other
            )),
        }
    }
}

// ==========================================
// 请求校验违规类型 (Violation Type)
// ==========================================
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ViolationType {
    NonPositiveTimeframes, // timeframes <= 0
    TimeframesOutOfRange,  // timeframes 超出 MAX_TIMEFRAMES
    RigLimitOutOfRange,    // rig_limit < 0 或超出范围
    EmptyWellLabel,        // 井号为空
    DuplicateWell,         // 井号重复
    MissingCapex,          // 声明的井没有成本行
    CapexLengthMismatch,   // 成本行长度 != timeframes
    NonFiniteCost,         // NaN / Inf
    UndeclaredCapexEntry,  // 成本表中出现未声明的井
    ModelTooLarge,         // 变量数超过上限
}

impl fmt::Display for ViolationType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            ViolationType::NonPositiveTimeframes => "NON_POSITIVE_TIMEFRAMES",
            ViolationType::TimeframesOutOfRange => "TIMEFRAMES_OUT_OF_RANGE",
            ViolationType::RigLimitOutOfRange => "RIG_LIMIT_OUT_OF_RANGE",
            ViolationType::EmptyWellLabel => "EMPTY_WELL_LABEL",
            ViolationType::DuplicateWell => "DUPLICATE_WELL",
            ViolationType::MissingCapex => "MISSING_CAPEX",
            ViolationType::CapexLengthMismatch => "CAPEX_LENGTH_MISMATCH",
            ViolationType::NonFiniteCost => "NON_FINITE_COST",
            ViolationType::UndeclaredCapexEntry => "UNDECLARED_CAPEX_ENTRY",
            ViolationType::ModelTooLarge => "MODEL_TOO_LARGE",
        };
        write!(f, "{}", s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_assignment_mode_parse() {
        assert_eq!(
            "AT_MOST_ONCE".parse::<AssignmentMode>().unwrap(),
            AssignmentMode::AtMostOnce
        );
        assert_eq!(
            "exactly-once".parse::<AssignmentMode>().unwrap(),
            AssignmentMode::ExactlyOnce
        );
        assert_eq!(
            " max_coverage ".parse::<AssignmentMode>().unwrap(),
            AssignmentMode::MaxCoverage
        );
        assert!("ONCE".parse::<AssignmentMode>().is_err());
    }

    #[test]
    fn test_assignment_mode_serde_matches_display() {
        let json = serde_json::to_string(&AssignmentMode::ExactlyOnce).unwrap();
        assert_eq!(json, format!("\"{}\"", AssignmentMode::ExactlyOnce));

        let mode: AssignmentMode = serde_json::from_str("\"AT_MOST_ONCE\"").unwrap();
        assert_eq!(mode, AssignmentMode::AtMostOnce);
        assert_eq!(AssignmentMode::default(), AssignmentMode::MaxCoverage);
    }

    #[test]
    fn test_violation_type_serde_matches_display() {
        let json = serde_json::to_string(&ViolationType::CapexLengthMismatch).unwrap();
        assert_eq!(json, "\"CAPEX_LENGTH_MISMATCH\"");
        assert_eq!(ViolationType::MissingCapex.to_string(), "MISSING_CAPEX");
    }
}
