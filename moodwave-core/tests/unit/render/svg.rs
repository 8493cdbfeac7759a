use super::*;
use crate::{
    chart::builder::build_chart, config::VizConfig, data::record::Record,
    foundation::core::Viewport,
};
use chrono::NaiveDate;

fn chart(n: usize) -> Chart {
    let start = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
    let records: Vec<Record> = (0..n)
        .map(|i| Record::new(start + chrono::Days::new(i as u64), 6.0, 2.0, 3.0))
        .collect();
    build_chart(
        &records,
        Viewport::new(800.0, 600.0).unwrap(),
        &VizConfig::default(),
    )
}

#[test]
fn hidden_chart_has_four_waves_below_the_fold() {
    let c = chart(28);
    let svg = render_svg(&c, &c.initial_state());
    assert!(svg.starts_with("<svg "));
    assert!(svg.contains(r#"width="800" height="800""#));
    assert_eq!(svg.matches("<path ").count(), 4);
    assert_eq!(svg.matches("<circle ").count(), 28);
    assert_eq!(svg.matches(r#"transform="translate(0, 800)""#).count(), 4);
    assert!(!svg.contains(r#"opacity="0.95""#));
}

#[test]
fn empty_group_emits_no_path() {
    let c = chart(21);
    let svg = render_svg(&c, &c.initial_state());
    assert_eq!(svg.matches("<path ").count(), 3);
    assert_eq!(svg.matches("<circle ").count(), 21);
    assert!(!svg.contains("wave-3"));
}

#[test]
fn scene_values_flow_into_attributes() {
    let c = chart(10);
    let mut scene = c.initial_state();
    scene.waves[0].opacity = 0.5;
    scene.waves[0].translate_y = 12.5;
    scene.markers[1].opacity = 0.95;
    let svg = render_svg(&c, &scene);
    assert!(svg.contains(r#"opacity="0.5" transform="translate(0, 12.5)""#));
    assert_eq!(svg.matches(r#"class="dot dot-1""#).count(), 3);
    assert_eq!(svg.matches(r#"opacity="0.95"/>"#).count(), 3);
}
