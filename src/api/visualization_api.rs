// ==========================================
// 钻井排程服务 - 排程可视化 API
// ==========================================
// 职责: 渲染固定示例排程的甘特图页面
// 红线: 与排程求解无关，不依赖任何先前请求
// ==========================================

use tracing::debug;

use crate::api::error::ApiResult;
use crate::visualization::{sample_schedule, GanttChart};

/// 甘特图标题
pub const CHART_TITLE: &str = "Well Schedule";

#[derive(Debug, Default, Clone)]
pub struct VisualizationApi;

impl VisualizationApi {
    pub fn new() -> Self {
        Self
    }

    /// 渲染示例排程甘特图为完整 HTML 文档
    pub fn render_schedule_visualization(&self) -> ApiResult<String> {
        let chart = GanttChart::new(CHART_TITLE, sample_schedule()?);
        let html = chart.render_html()?;
        debug!(bars = chart.bars().len(), bytes = html.len(), "甘特图渲染完成");
        Ok(html)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::visualization::gantt::PLOTLY_JS_CDN;

    #[test]
    fn test_render_contains_all_sample_wells() {
        let html = VisualizationApi::new().render_schedule_visualization().unwrap();
        for well in ["Well_1", "Well_2", "Well_3", "Well_4", "Well_5"] {
            assert!(html.contains(well), "missing {}", well);
        }
        assert!(html.contains(CHART_TITLE));
        assert!(html.contains(PLOTLY_JS_CDN));
    }
}
