use std::f64::consts::{FRAC_PI_2, PI};

use approx::assert_relative_eq;
use chart_layout::api::{
    DonutStyle, LegendAlign, LegendSide, PieChartStyle, PieLegendStyle, layout_slice_chart,
};
use chart_layout::core::{Color, KeyShape, KeyStyle, Point, Region, dataset_from};
use chart_layout::render::{DegenerateInput, NullRenderer, Renderer, TextHAlign};

#[test]
fn sweeps_follow_value_shares_from_twelve_o_clock() {
    let data = dataset_from([("A", 30.0), ("B", 70.0)]);
    let frame = layout_slice_chart(&data, Region::new(300.0, 300.0), &PieChartStyle::default())
        .expect("layout");

    assert_eq!(frame.wedges.len(), 2);
    let (a, b) = (&frame.wedges[0], &frame.wedges[1]);
    assert_relative_eq!(a.start_angle, -FRAC_PI_2);
    assert_relative_eq!(a.sweep_angle, 0.6 * PI, epsilon = 1e-12);
    assert_relative_eq!(b.start_angle, -FRAC_PI_2 + 0.6 * PI, epsilon = 1e-12);
    assert_relative_eq!(b.sweep_angle, 1.4 * PI, epsilon = 1e-12);

    assert_eq!((a.cx, a.cy), (150.0, 150.0));
    assert_eq!(a.outer_radius, 140.0);
    assert_eq!(a.inner_radius, 0.0);
    frame.validate().expect("valid frame");
}

#[test]
fn percentage_labels_sit_on_the_slice_bisector() {
    let data = dataset_from([("A", 30.0), ("B", 70.0)]);
    let frame = layout_slice_chart(&data, Region::new(300.0, 300.0), &PieChartStyle::default())
        .expect("layout");

    let texts: Vec<&str> = frame.labels.iter().map(|label| label.text.as_str()).collect();
    assert_eq!(texts, vec!["30.0%", "70.0%"]);

    let center = Point::new(150.0, 150.0);
    let expected = center.polar_offset(70.0, -FRAC_PI_2 + 0.3 * PI);
    assert_relative_eq!(frame.labels[0].x, expected.x, epsilon = 1e-9);
    assert_relative_eq!(frame.labels[0].y, expected.y, epsilon = 1e-9);
}

#[test]
fn zero_slices_keep_a_wedge_but_get_no_label() {
    let data = dataset_from([("none", 0.0), ("all", 10.0)]);
    let frame = layout_slice_chart(&data, Region::new(300.0, 300.0), &PieChartStyle::default())
        .expect("layout");

    assert_eq!(frame.wedges.len(), 2);
    assert_eq!(frame.wedges[0].sweep_angle, 0.0);
    assert_eq!(frame.labels.len(), 1);
    assert_eq!(frame.labels[0].text, "100.0%");
}

#[test]
fn all_zero_values_report_zero_total() {
    let data = dataset_from([("a", 0.0), ("b", 0.0)]);
    let frame = layout_slice_chart(&data, Region::new(300.0, 300.0), &PieChartStyle::default())
        .expect("layout");

    assert_eq!(frame.degenerate, Some(DegenerateInput::ZeroTotal));
    assert!(frame.wedges.iter().all(|wedge| wedge.sweep_angle == 0.0));
    assert!(frame.labels.is_empty());
    frame.validate().expect("valid frame");
}

#[test]
fn empty_dataset_reports_empty() {
    let frame = layout_slice_chart(
        &dataset_from(Vec::<(&str, f64)>::new()),
        Region::new(300.0, 300.0),
        &PieChartStyle::default(),
    )
    .expect("layout");
    assert_eq!(frame.degenerate, Some(DegenerateInput::EmptyDataset));
    assert!(frame.wedges.is_empty());
}

#[test]
fn pie_palette_cycles_after_eight_slices() {
    let data = dataset_from((0..9).map(|i| (format!("s{i}"), 1.0)));
    let frame = layout_slice_chart(&data, Region::new(300.0, 300.0), &PieChartStyle::default())
        .expect("layout");
    assert_eq!(frame.wedges[0].color, Color::from_hex("#ffd92f").expect("hex"));
    assert_eq!(frame.wedges[8].color, frame.wedges[0].color);
}

#[test]
fn left_legend_takes_a_third_of_the_width() {
    let data = dataset_from([("A", 30.0), ("B", 70.0)]);
    let style = PieChartStyle::default().with_legend(PieLegendStyle::shown(LegendSide::Left));
    let frame = layout_slice_chart(&data, Region::new(300.0, 300.0), &style).expect("layout");

    // Chart area is x in [100, 300].
    assert_eq!((frame.wedges[0].cx, frame.wedges[0].cy), (200.0, 150.0));
    assert_eq!(frame.wedges[0].outer_radius, 90.0);

    assert_eq!(frame.legend_keys.len(), 2);
    let ys: Vec<f64> = frame.legend_keys.iter().map(|key| key.y).collect();
    assert_eq!(ys, vec![135.0, 165.0]);
    assert!(frame.legend_keys.iter().all(|key| key.x == 20.0));
    assert_eq!(frame.legend_keys[0].color, frame.wedges[0].color);

    let legend_labels: Vec<_> = frame
        .labels
        .iter()
        .filter(|label| label.h_align == TextHAlign::Left)
        .collect();
    assert_eq!(legend_labels.len(), 2);
    assert_eq!(legend_labels[0].text, "A");
    assert_eq!(legend_labels[0].x, 40.0);
}

#[test]
fn right_legend_with_top_alignment() {
    let data = dataset_from([("A", 1.0), ("B", 1.0), ("C", 1.0)]);
    let legend = PieLegendStyle::shown(LegendSide::Right)
        .with_align(LegendAlign::Top)
        .with_key(KeyShape::Star, KeyStyle::Outlined);
    let style = PieChartStyle::default().with_legend(legend);
    let frame = layout_slice_chart(&data, Region::new(300.0, 300.0), &style).expect("layout");

    assert_eq!(frame.wedges[0].cx, 100.0);
    let first = &frame.legend_keys[0];
    assert_eq!((first.x, first.y), (220.0, 15.0));
    assert_eq!(first.shape, KeyShape::Star);
    assert_eq!(first.style, KeyStyle::Outlined);
    assert_eq!(first.vertices.len(), 10);
}

#[test]
fn donut_hole_paints_last_with_center_text() {
    let data = dataset_from([("A", 30.0), ("B", 70.0)]);
    let donut = DonutStyle::default()
        .with_donut_radius(0.6)
        .with_center_text("Total");
    let style = PieChartStyle::default().with_donut(donut);
    let frame = layout_slice_chart(&data, Region::new(300.0, 300.0), &style).expect("layout");

    assert_eq!(frame.wedges.len(), 3);
    for slice in &frame.wedges[..2] {
        assert_relative_eq!(slice.inner_radius, 84.0, epsilon = 1e-9);
        assert_eq!(slice.outer_radius, 140.0);
    }
    let hole = frame.wedges.last().expect("hole");
    assert_eq!(hole.color, Color::WHITE);
    assert_relative_eq!(hole.outer_radius, 84.0, epsilon = 1e-9);
    assert_relative_eq!(hole.sweep_angle, std::f64::consts::TAU);

    let center_label = frame.labels.last().expect("center text");
    assert_eq!(center_label.text, "Total");
    assert_eq!((center_label.x, center_label.y), (150.0, 150.0));
    // Wraps within 90% of the hole diameter, two lines by default.
    assert_relative_eq!(center_label.max_width.expect("wrap width"), 151.2, epsilon = 1e-9);
    assert_eq!(center_label.max_lines, Some(2));
}

#[test]
fn center_text_line_limit_is_configurable() {
    let data = dataset_from([("A", 1.0)]);
    let donut = DonutStyle::default()
        .with_center_text("A long caption for the hole")
        .with_center_text_lines(3);
    let frame = layout_slice_chart(&data, Region::new(220.0, 220.0), &PieChartStyle::default().with_donut(donut))
        .expect("layout");
    let center_label = frame.labels.last().expect("center text");
    assert_eq!(center_label.max_lines, Some(3));
    assert_relative_eq!(center_label.max_width.expect("wrap width"), 90.0, epsilon = 1e-9);
    assert!(frame.labels[..frame.labels.len() - 1]
        .iter()
        .all(|label| label.max_width.is_none()));
}

#[test]
fn huge_values_keep_finite_renderable_wedges() {
    let data = dataset_from([("a", 1e308), ("b", 1e308)]);
    let frame = layout_slice_chart(&data, Region::new(300.0, 300.0), &PieChartStyle::default())
        .expect("layout");

    assert_relative_eq!(frame.wedges[0].sweep_angle, PI, epsilon = 1e-12);
    assert_relative_eq!(frame.wedges[1].sweep_angle, PI, epsilon = 1e-12);
    let percentages: Vec<&str> = frame.labels.iter().map(|label| label.text.as_str()).collect();
    assert_eq!(percentages, vec!["50.0%", "50.0%"]);

    let mut renderer = NullRenderer::default();
    renderer.render(&frame).expect("finite geometry renders");
}

#[test]
fn donut_ratio_is_clamped_into_supported_range() {
    let data = dataset_from([("A", 1.0)]);
    let thin = PieChartStyle::default().with_donut(DonutStyle::default().with_donut_radius(0.95));
    let frame = layout_slice_chart(&data, Region::new(300.0, 300.0), &thin).expect("layout");
    assert_relative_eq!(frame.wedges[0].inner_radius, 112.0, epsilon = 1e-9);

    let thick = PieChartStyle::default().with_donut(DonutStyle::default().with_donut_radius(0.0));
    let frame = layout_slice_chart(&data, Region::new(300.0, 300.0), &thick).expect("layout");
    assert_relative_eq!(frame.wedges[0].inner_radius, 28.0, epsilon = 1e-9);
}

#[test]
fn donut_labels_stay_inside_the_band() {
    let data = dataset_from([("A", 30.0), ("B", 70.0)]);
    let style = PieChartStyle::donut().with_percentage_distance_factor(0.0);
    let frame = layout_slice_chart(&data, Region::new(300.0, 300.0), &style).expect("layout");

    let center = Point::new(150.0, 150.0);
    for label in &frame.labels {
        let distance = Point::new(label.x, label.y).distance(center);
        assert_relative_eq!(distance, 70.0, epsilon = 1e-9);
    }
}

#[test]
fn large_margin_collapses_radius_to_zero() {
    let data = dataset_from([("A", 1.0)]);
    let style = PieChartStyle::default().with_chart_margin(500.0);
    let frame = layout_slice_chart(&data, Region::new(100.0, 100.0), &style).expect("layout");
    assert_eq!(frame.wedges[0].outer_radius, 0.0);
    frame.validate().expect("valid frame");
}
