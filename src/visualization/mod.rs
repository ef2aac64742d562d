// ==========================================
// 钻井排程服务 - 可视化层
// ==========================================
// 职责: 渲染固定示例数据的甘特图 HTML
// 红线: 示例数据与求解结果无关，不读取任何排程状态
// ==========================================

pub mod gantt;
pub mod sample_data;

use thiserror::Error;

// 重导出
pub use gantt::{GanttBar, GanttChart};
pub use sample_data::{sample_schedule, SAMPLE_SCHEDULE};

/// 图表渲染错误
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ChartError {
    #[error("日期格式错误（应为YYYY-MM-DD）: field={field}, value={value}")]
    InvalidDate { field: String, value: String },

    #[error("时间区间无效: well={well}, start={start}, finish={finish}")]
    InvalidRange {
        well: String,
        start: String,
        finish: String,
    },

    #[error("图表没有数据")]
    EmptyChart,
}

pub type ChartResult<T> = Result<T, ChartError>;
