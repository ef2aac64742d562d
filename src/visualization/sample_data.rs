// ==========================================
// 甘特图示例数据
// ==========================================

use super::gantt::GanttBar;
use super::{ChartError, ChartResult};
use chrono::NaiveDate;

/// (井号, 开始, 结束, 钻机)
pub const SAMPLE_SCHEDULE: [(&str, &str, &str, &str); 5] = [
    ("Well_1", "2024-01-01", "2024-02-01", "Rig_A"),
    ("Well_2", "2024-02-15", "2024-03-15", "Rig_A"),
    ("Well_3", "2024-03-01", "2024-04-01", "Rig_B"),
    ("Well_4", "2024-03-20", "2024-04-20", "Rig_B"),
    ("Well_5", "2024-04-01", "2024-05-01", "Rig_A"),
];

fn parse_date(field: &str, value: &str) -> ChartResult<NaiveDate> {
    NaiveDate::parse_from_str(value, "%Y-%m-%d").map_err(|_| ChartError::InvalidDate {
        field: field.to_string(),
        value: value.to_string(),
    })
}

/// 解析示例数据为甘特条
pub fn sample_schedule() -> ChartResult<Vec<GanttBar>> {
    SAMPLE_SCHEDULE
        .iter()
        .map(|(well, start, finish, resource)| {
            GanttBar::new(
                *well,
                parse_date("Start", start)?,
                parse_date("Finish", finish)?,
                *resource,
            )
        })
        .collect()
}
