use super::*;
use chrono::NaiveDate;
use kurbo::Shape;

fn january(n: usize) -> Vec<Record> {
    let start = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
    (0..n)
        .map(|i| {
            Record::new(
                start + chrono::Days::new(i as u64),
                (i % 11) as f64,
                (i % 5) as f64,
                (i % 7) as f64,
            )
        })
        .collect()
}

fn viewport() -> Viewport {
    Viewport::new(1200.0, 800.0).unwrap()
}

#[test]
fn baselines_are_symmetric_about_center() {
    let offsets: Vec<f64> = (0..4).map(|i| baseline_offset(i, 4, 120.0)).collect();
    assert_eq!(offsets, vec![-180.0, -60.0, 60.0, 180.0]);

    let chart = build_chart(&january(28), viewport(), &VizConfig::default());
    let center = chart.surface.center_y();
    assert_eq!(chart.surface.height, 1000.0);
    for (h, expected) in chart.handles.iter().zip(offsets) {
        assert_eq!(h.baseline - center, expected);
    }
}

#[test]
fn full_month_builds_four_hidden_groups_of_seven() {
    let chart = build_chart(&january(28), viewport(), &VizConfig::default());
    let sizes: Vec<usize> = chart.markers.iter().map(|g| g.dots.len()).collect();
    assert_eq!(sizes, vec![7, 7, 7, 7]);
    assert_eq!(chart.waves.len(), 4);
    assert!(chart.waves.iter().all(|w| w.path.is_some()));

    let state = chart.initial_state();
    assert!(state.waves.iter().all(|n| n.opacity == 0.0));
    assert!(state.waves.iter().all(|n| n.translate_y == chart.surface.height));
    assert!(state.markers.iter().all(|n| n.opacity == 0.0));

    for (i, h) in chart.handles.iter().enumerate() {
        assert_eq!(h.wave, Target::Wave(i));
        assert_eq!(h.markers, Target::Markers(i));
    }
}

#[test]
fn short_last_group_renders_only_real_dots() {
    let chart = build_chart(&january(24), viewport(), &VizConfig::default());
    assert_eq!(chart.markers[3].dots.len(), 3);
    assert!(chart.waves[3].path.is_some());
    let days: Vec<u32> = chart.markers[3]
        .dots
        .iter()
        .map(|d| chrono::Datelike::day(&d.record.date))
        .collect();
    assert_eq!(days, vec![22, 23, 24]);
}

#[test]
fn empty_group_has_handle_but_no_shape() {
    let chart = build_chart(&january(21), viewport(), &VizConfig::default());
    assert_eq!(chart.handles.len(), 4);
    assert!(chart.waves[3].path.is_none());
    assert!(chart.markers[3].dots.is_empty());

    let empty = build_chart(&[], viewport(), &VizConfig::default());
    assert_eq!(empty.handles.len(), 4);
    assert!(empty.waves.iter().all(|w| w.path.is_none()));
}

#[test]
fn dots_sit_on_the_upper_boundary() {
    let chart = build_chart(&january(7), viewport(), &VizConfig::default());
    let group = &chart.markers[0];
    let baseline = chart.handles[0].baseline;
    let amp_max = chart.surface.height * 0.85;

    assert_eq!(group.dots[0].center.x, 100.0);
    assert_eq!(group.dots[6].center.x, 1100.0);
    for d in &group.dots {
        let expected = baseline - d.record.score() / 10.0 * amp_max / 2.0;
        assert!((d.center.y - expected).abs() < 1e-9);
        assert_eq!(d.radius, 7.0);
    }
}

#[test]
fn wave_extends_past_outer_dots() {
    let chart = build_chart(&january(7), viewport(), &VizConfig::default());
    let bbox = chart.waves[0].path.as_ref().unwrap().bounding_box();
    assert!(bbox.x0 < 100.0);
    assert!(bbox.x1 > 1100.0);
}

#[test]
fn wave_fills_lighten_ramp_position_per_group() {
    let chart = build_chart(&january(28), viewport(), &VizConfig::default());
    for (i, w) in chart.waves.iter().enumerate() {
        assert_eq!(w.fill, interpolate_blues(0.4 + i as f64 * 0.12));
    }
    assert_ne!(chart.waves[0].fill, chart.waves[3].fill);
}

#[test]
fn low_scores_get_darker_dots() {
    let mut rs = january(2);
    rs[0].overall_score = Some(1.0);
    rs[1].overall_score = Some(9.0);
    let chart = build_chart(&rs, viewport(), &VizConfig::default());
    let dark = chart.markers[0].dots[0].fill;
    let light = chart.markers[0].dots[1].fill;
    assert!(u32::from(dark.r) + u32::from(dark.g) < u32::from(light.r) + u32::from(light.g));
}

#[test]
fn dot_hit_test_uses_radius() {
    let chart = build_chart(&january(7), viewport(), &VizConfig::default());
    let d = &chart.markers[0].dots[2];
    let (g, i) = chart.dot_at(d.center + kurbo::Vec2::new(3.0, 3.0)).unwrap();
    assert_eq!((g, i), (0, 2));
    assert_eq!(chart.dot(g, i).unwrap().record, d.record);
    assert!(chart.dot_at(Point::new(1.0, 1.0)).is_none());
}
