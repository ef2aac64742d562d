// ==========================================
// 甘特图渲染
// ==========================================
// 每口井一条水平线段 (start -> finish)，按钻机着色并分组图例
// 渲染: plotly (内嵌 div + plotly.js CDN)
// ==========================================

use super::{ChartError, ChartResult};
use chrono::NaiveDate;
use plotly::color::Rgb;
use plotly::common::{Line, Mode, Title};
use plotly::layout::{Axis, AxisType, Layout};
use plotly::{Plot, Scatter};

/// plotly.js 脚本地址
pub const PLOTLY_JS_CDN: &str = "https://cdn.plot.ly/plotly-2.12.1.min.js";

/// 图表 div id
pub const CHART_DIV_ID: &str = "well-schedule-gantt";

const BAR_WIDTH_PX: f64 = 18.0;

// plotly 默认调色板前几色
const PALETTE: [(u8, u8, u8); 6] = [
    (99, 110, 250),
    (239, 85, 59),
    (0, 204, 150),
    (171, 99, 250),
    (255, 161, 90),
    (25, 211, 243),
];

fn resource_color(resources: &[&str], resource: &str) -> Rgb {
    let idx = resources.iter().position(|r| *r == resource).unwrap_or(0);
    let (r, g, b) = PALETTE[idx % PALETTE.len()];
    Rgb::new(r, g, b)
}

// ==========================================
// GanttBar - 甘特条
// ==========================================
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GanttBar {
    pub well: String,
    pub start: NaiveDate,
    pub finish: NaiveDate,
    pub resource: String,
}

impl GanttBar {
    /// 创建甘特条，要求 finish 晚于 start
    pub fn new(
        well: impl Into<String>,
        start: NaiveDate,
        finish: NaiveDate,
        resource: impl Into<String>,
    ) -> ChartResult<Self> {
        let well = well.into();
        if finish <= start {
            return Err(ChartError::InvalidRange {
                well,
                start: start.to_string(),
                finish: finish.to_string(),
            });
        }
        Ok(Self {
            well,
            start,
            finish,
            resource: resource.into(),
        })
    }
}

// ==========================================
// GanttChart - 甘特图
// ==========================================
#[derive(Debug, Clone)]
pub struct GanttChart {
    title: String,
    bars: Vec<GanttBar>,
}

impl GanttChart {
    pub fn new(title: impl Into<String>, bars: Vec<GanttBar>) -> Self {
        Self {
            title: title.into(),
            bars,
        }
    }

    pub fn bars(&self) -> &[GanttBar] {
        &self.bars
    }

    /// 按首次出现顺序列出钻机
    pub fn resources(&self) -> Vec<&str> {
        let mut resources: Vec<&str> = Vec::new();
        for bar in &self.bars {
            if !resources.contains(&bar.resource.as_str()) {
                resources.push(bar.resource.as_str());
            }
        }
        resources
    }

    fn build_plot(&self) -> ChartResult<Plot> {
        if self.bars.is_empty() {
            return Err(ChartError::EmptyChart);
        }

        let resources = self.resources();
        let mut plot = Plot::new();
        let mut legend_shown: Vec<&str> = Vec::new();

        for bar in &self.bars {
            let resource = bar.resource.as_str();
            let first_of_resource = !legend_shown.contains(&resource);
            if first_of_resource {
                legend_shown.push(resource);
            }

            let trace = Scatter::new(
                vec![bar.start.to_string(), bar.finish.to_string()],
                vec![bar.well.clone(), bar.well.clone()],
            )
            .mode(Mode::Lines)
            .name(resource)
            .legend_group(resource)
            .show_legend(first_of_resource)
            .line(
                Line::new()
                    .width(BAR_WIDTH_PX)
                    .color(resource_color(&resources, resource)),
            );

            plot.add_trace(trace);
        }

        let layout = Layout::new()
            .title(Title::with_text(&self.title))
            .x_axis(Axis::new().type_(AxisType::Date))
            .y_axis(Axis::new().title(Title::with_text("Well")));
        plot.set_layout(layout);

        Ok(plot)
    }

    /// 渲染为图表片段（div + script，不含 plotly.js）
    pub fn render_fragment(&self) -> ChartResult<String> {
        Ok(self.build_plot()?.to_inline_html(Some(CHART_DIV_ID)))
    }

    /// 渲染为完整 HTML 文档
    pub fn render_html(&self) -> ChartResult<String> {
        let fragment = self.render_fragment()?;
        Ok(format!(
            "<html><head><meta charset=\"utf-8\" /><title>{}</title>\
             <script src=\"{}\"></script></head><body>{}</body></html>",
            self.title, PLOTLY_JS_CDN, fragment
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_bar_rejects_inverted_range() {
        let result = GanttBar::new("W", date(2024, 2, 1), date(2024, 1, 1), "Rig_A");
        assert!(matches!(result, Err(ChartError::InvalidRange { .. })));

        let result = GanttBar::new("W", date(2024, 1, 1), date(2024, 1, 1), "Rig_A");
        assert!(result.is_err());
    }

    #[test]
    fn test_resources_in_first_seen_order() {
        let bars = vec![
            GanttBar::new("W1", date(2024, 1, 1), date(2024, 1, 2), "Rig_B").unwrap(),
            GanttBar::new("W2", date(2024, 1, 1), date(2024, 1, 2), "Rig_A").unwrap(),
            GanttBar::new("W3", date(2024, 1, 1), date(2024, 1, 2), "Rig_B").unwrap(),
        ];
        let chart = GanttChart::new("t", bars);
        assert_eq!(chart.resources(), vec!["Rig_B", "Rig_A"]);
    }

    #[test]
    fn test_empty_chart_is_error() {
        let chart = GanttChart::new("t", vec![]);
        assert_eq!(chart.render_html().unwrap_err(), ChartError::EmptyChart);
    }

    #[test]
    fn test_render_html_wraps_fragment() {
        let bars = vec![GanttBar::new("Well_X", date(2024, 1, 1), date(2024, 2, 1), "Rig_A").unwrap()];
        let html = GanttChart::new("Well Schedule", bars).render_html().unwrap();

        assert!(html.starts_with("<html>"));
        assert!(html.ends_with("</body></html>"));
        assert!(html.contains(PLOTLY_JS_CDN));
        assert!(html.contains(CHART_DIV_ID));
        assert!(html.contains("Well_X"));
        // 图表与纵轴标题写入 layout
        assert!(html.contains(r#""text":"Well Schedule""#));
        assert!(html.contains(r#""text":"Well""#));
    }
}
