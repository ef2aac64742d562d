// ==========================================
// 甘特图可视化集成测试
// ==========================================
// 测试目标: 验证示例数据渲染结果的结构与内容
// ==========================================

use well_scheduler::visualization::gantt::{CHART_DIV_ID, PLOTLY_JS_CDN};
use well_scheduler::visualization::{sample_schedule, GanttChart, SAMPLE_SCHEDULE};
use well_scheduler::VisualizationApi;

#[test]
fn test_sample_schedule_matches_table() {
    let bars = sample_schedule().expect("示例数据解析失败");
    assert_eq!(bars.len(), SAMPLE_SCHEDULE.len());

    for (bar, (well, start, finish, resource)) in bars.iter().zip(SAMPLE_SCHEDULE.iter()) {
        assert_eq!(bar.well, *well);
        assert_eq!(bar.start.to_string(), *start);
        assert_eq!(bar.finish.to_string(), *finish);
        assert_eq!(bar.resource, *resource);
        assert!(bar.finish > bar.start);
    }
}

#[test]
fn test_chart_groups_by_rig() {
    let chart = GanttChart::new("Well Schedule", sample_schedule().unwrap());
    assert_eq!(chart.resources(), vec!["Rig_A", "Rig_B"]);
}

#[test]
fn test_rendered_page_is_complete_document() {
    let html = VisualizationApi::new()
        .render_schedule_visualization()
        .expect("渲染失败");

    assert!(html.starts_with("<html>"));
    assert!(html.ends_with("</body></html>"));
    assert!(html.contains(PLOTLY_JS_CDN));
    assert!(html.contains(CHART_DIV_ID));
    for (well, _, _, _) in SAMPLE_SCHEDULE {
        assert!(html.contains(well), "页面缺少{}", well);
    }
}

#[test]
fn test_render_is_deterministic() {
    let api = VisualizationApi::new();
    let first = api.render_schedule_visualization().unwrap();
    let second = api.render_schedule_visualization().unwrap();
    assert_eq!(first, second);
}
