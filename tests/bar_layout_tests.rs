use approx::assert_relative_eq;
use chart_layout::api::{BarChartStyle, ChartMode, XLabelRotation, layout_bar_chart};
use chart_layout::core::{Color, PaletteConfig, Region, dataset_from};
use chart_layout::render::{DegenerateInput, GridPath, LineStrokeStyle, TextHAlign, TextVAlign};
use chart_layout::ChartError;

fn abc() -> chart_layout::core::Dataset {
    dataset_from([("A", 10.0), ("B", 20.0), ("C", 30.0)])
}

#[test]
fn equal_slots_and_proportional_heights() {
    let frame = layout_bar_chart(&abc(), Region::new(300.0, 300.0), &BarChartStyle::default())
        .expect("layout");

    assert_eq!(frame.bars.len(), 3);
    let lefts: Vec<f64> = frame.bars.iter().map(|bar| bar.x).collect();
    assert_eq!(lefts, vec![0.0, 100.0, 200.0]);
    assert!(frame.bars.iter().all(|bar| bar.width == 100.0));

    let heights: Vec<f64> = frame.bars.iter().map(|bar| bar.height).collect();
    assert_relative_eq!(heights[1] / heights[0], 2.0, epsilon = 1e-9);
    assert_relative_eq!(heights[2] / heights[0], 3.0, epsilon = 1e-9);

    // Default headroom keeps the tallest bar below the region top.
    assert_relative_eq!(heights[2], 300.0 / 1.1, epsilon = 1e-9);
    for bar in &frame.bars {
        assert_relative_eq!(bar.y + bar.height, 300.0, epsilon = 1e-9);
    }
    frame.validate().expect("valid frame");
}

#[test]
fn bars_carry_label_and_value_metadata() {
    let frame = layout_bar_chart(&abc(), Region::new(300.0, 300.0), &BarChartStyle::default())
        .expect("layout");
    let meta = frame.bars[1].meta.as_ref().expect("meta");
    assert_eq!(meta.index, 1);
    assert_eq!(meta.label, "B");
    assert_eq!(meta.value, 20.0);
}

#[test]
fn standard_mode_labels_values_above_bars() {
    let frame = layout_bar_chart(&abc(), Region::new(300.0, 300.0), &BarChartStyle::default())
        .expect("layout");

    let values: Vec<&str> = frame
        .labels
        .iter()
        .filter(|label| label.v_align == TextVAlign::Bottom)
        .map(|label| label.text.as_str())
        .collect();
    assert_eq!(values, vec!["10", "20", "30"]);

    let c_value = frame
        .labels
        .iter()
        .find(|label| label.text == "30")
        .expect("value label");
    assert_relative_eq!(c_value.x, 250.0);
    assert_relative_eq!(c_value.y, frame.bars[2].y - 5.0, epsilon = 1e-9);
}

#[test]
fn interactive_mode_omits_value_labels_and_supports_hit_testing() {
    let style = BarChartStyle::default().with_chart_mode(ChartMode::Interactive);
    let frame = layout_bar_chart(&abc(), Region::new(300.0, 300.0), &style).expect("layout");

    let texts: Vec<&str> = frame.labels.iter().map(|label| label.text.as_str()).collect();
    assert_eq!(texts, vec!["A", "B", "C"]);

    let hit = frame.bar_at(150.0, 299.0).expect("bar under point");
    assert_eq!(hit.meta.as_ref().map(|meta| meta.label.as_str()), Some("B"));
    assert!(frame.bar_at(50.0, 1.0).is_none());
}

#[test]
fn negative_values_hang_below_baseline_with_labels_underneath() {
    let data = dataset_from([("gain", 20.0), ("loss", -20.0)]);
    let style = BarChartStyle::default().with_headroom(0.0);
    let frame = layout_bar_chart(&data, Region::new(200.0, 200.0), &style).expect("layout");

    let (gain, loss) = (&frame.bars[0], &frame.bars[1]);
    assert_relative_eq!(gain.y + gain.height, 100.0);
    assert_relative_eq!(loss.y, 100.0);
    assert_relative_eq!(loss.height, 100.0);

    let loss_label = frame
        .labels
        .iter()
        .find(|label| label.text == "-20")
        .expect("negative value label");
    assert_eq!(loss_label.v_align, TextVAlign::Top);
    assert_relative_eq!(loss_label.y, 205.0);
}

#[test]
fn bar_gap_is_split_around_each_bar() {
    let style = BarChartStyle::default().with_bar_gap(20.0);
    let frame = layout_bar_chart(&abc(), Region::new(300.0, 300.0), &style).expect("layout");
    assert_eq!(frame.bars[0].x, 10.0);
    assert_eq!(frame.bars[0].width, 80.0);
    assert_eq!(frame.bars[2].x, 210.0);
}

#[test]
fn oversized_gap_collapses_bars_instead_of_inverting_them() {
    let style = BarChartStyle::default().with_bar_gap(1000.0);
    let frame = layout_bar_chart(&abc(), Region::new(300.0, 300.0), &style).expect("layout");
    assert!(frame.bars.iter().all(|bar| bar.width == 0.0));
    frame.validate().expect("valid frame");
}

#[test]
fn grid_lines_span_nominal_range_with_requested_pattern() {
    let style = BarChartStyle::default()
        .with_grid(LineStrokeStyle::Dashed)
        .with_grid_divisions(5);
    let frame = layout_bar_chart(&abc(), Region::new(300.0, 300.0), &style).expect("layout");

    assert_eq!(frame.grid_lines.len(), 6);
    for line in &frame.grid_lines {
        assert_eq!(line.style, LineStrokeStyle::Dashed);
        assert_eq!(line.style.dash_pattern(), &[10.0, 10.0]);
        let GridPath::Polyline { points, closed } = &line.path else {
            panic!("bar grid lines are segments");
        };
        assert!(!closed);
        assert_eq!(points[0].x, 0.0);
        assert_eq!(points[1].x, 300.0);
    }

    let first = match &frame.grid_lines[0].path {
        GridPath::Polyline { points, .. } => points[0].y,
        GridPath::Circle { .. } => unreachable!(),
    };
    let last = match &frame.grid_lines[5].path {
        GridPath::Polyline { points, .. } => points[0].y,
        GridPath::Circle { .. } => unreachable!(),
    };
    assert_relative_eq!(first, 300.0);
    // Top grid line sits on the tallest value, not on the headroom edge.
    assert_relative_eq!(last, frame.bars[2].y, epsilon = 1e-9);
}

#[test]
fn dotted_pattern_is_one_on_nine_off() {
    assert_eq!(LineStrokeStyle::Dotted.dash_pattern(), &[1.0, 9.0]);
    assert!(LineStrokeStyle::Solid.dash_pattern().is_empty());
}

#[test]
fn y_axis_labels_are_right_aligned_left_of_region() {
    let style = BarChartStyle::default()
        .with_chart_mode(ChartMode::Interactive)
        .with_y_axis_labels(true);
    let frame = layout_bar_chart(&abc(), Region::new(300.0, 300.0), &style).expect("layout");

    let ticks: Vec<&str> = frame
        .labels
        .iter()
        .filter(|label| label.h_align == TextHAlign::Right)
        .map(|label| label.text.as_str())
        .collect();
    assert_eq!(ticks, vec!["0", "6", "12", "18", "24", "30"]);
    assert!(frame.grid_lines.is_empty());
    assert!(
        frame
            .labels
            .iter()
            .filter(|label| label.h_align == TextHAlign::Right)
            .all(|label| label.x == -15.0)
    );
}

#[test]
fn rotated_axis_labels_tilt_away_from_the_bar() {
    let style = BarChartStyle::default()
        .with_chart_mode(ChartMode::Interactive)
        .with_x_axis_label_rotation(XLabelRotation::LeftUp);
    let frame = layout_bar_chart(&abc(), Region::new(300.0, 300.0), &style).expect("layout");
    for label in &frame.labels {
        assert_relative_eq!(label.rotation, -std::f64::consts::FRAC_PI_4);
        assert_eq!(label.h_align, TextHAlign::Right);
        assert!(label.y > 310.0);
    }

    let style = style.with_x_axis_label_rotation(XLabelRotation::LeftDown);
    let frame = layout_bar_chart(&abc(), Region::new(300.0, 300.0), &style).expect("layout");
    assert!(frame.labels.iter().all(|label| label.h_align == TextHAlign::Left));
    assert!(frame.labels.iter().all(|label| label.rotation > 0.0));
}

#[test]
fn title_sits_above_the_region() {
    let style = BarChartStyle::default().with_title("Sales");
    let region = Region::new(300.0, 200.0).with_origin(20.0, 50.0);
    let frame = layout_bar_chart(&abc(), region, &style).expect("layout");

    let title = &frame.labels[0];
    assert_eq!(title.text, "Sales");
    assert_eq!(title.x, 170.0);
    assert_eq!(title.y, 40.0);
    assert_eq!(title.v_align, TextVAlign::Bottom);
    assert_eq!(title.font_size, 16.0);
}

#[test]
fn gradient_palette_spans_first_to_last_bar() {
    let style =
        BarChartStyle::default().with_palette(PaletteConfig::gradient(["#000000", "#ffffff"]));
    let frame = layout_bar_chart(&abc(), Region::new(300.0, 300.0), &style).expect("layout");
    assert_eq!(frame.bars[0].color, Color::BLACK);
    assert_relative_eq!(frame.bars[1].color.red, 0.5);
    assert_eq!(frame.bars[2].color, Color::WHITE);
}

#[test]
fn default_palette_paints_every_bar_the_same() {
    let frame = layout_bar_chart(&abc(), Region::new(300.0, 300.0), &BarChartStyle::default())
        .expect("layout");
    let expected = Color::from_hex("#3498db").expect("hex");
    assert!(frame.bars.iter().all(|bar| bar.color == expected));
}

#[test]
fn empty_dataset_shows_no_data_message() {
    let frame = layout_bar_chart(
        &dataset_from(Vec::<(&str, f64)>::new()),
        Region::new(300.0, 200.0),
        &BarChartStyle::default(),
    )
    .expect("layout");
    assert_eq!(frame.degenerate, Some(DegenerateInput::EmptyDataset));
    assert!(frame.bars.is_empty());
    assert_eq!(frame.labels.len(), 1);
    assert_eq!(frame.labels[0].text, "No data available");
    assert_eq!((frame.labels[0].x, frame.labels[0].y), (150.0, 100.0));

    let silent = BarChartStyle::default().with_no_data_text(None);
    let frame = layout_bar_chart(
        &dataset_from(Vec::<(&str, f64)>::new()),
        Region::new(300.0, 200.0),
        &silent,
    )
    .expect("layout");
    assert!(frame.is_empty());
}

#[test]
fn sequence_values_are_rejected() {
    let data = dataset_from([("A", vec![1.0, 2.0])]);
    let err = layout_bar_chart(&data, Region::new(100.0, 100.0), &BarChartStyle::default())
        .expect_err("sequence");
    assert!(matches!(err, ChartError::InvalidData(_)));
}

#[test]
fn non_finite_values_are_rejected() {
    let data = dataset_from([("A", f64::NAN)]);
    assert!(
        layout_bar_chart(&data, Region::new(100.0, 100.0), &BarChartStyle::default()).is_err()
    );
}

#[test]
fn zero_sized_region_is_rejected() {
    let err = layout_bar_chart(&abc(), Region::new(0.0, 100.0), &BarChartStyle::default())
        .expect_err("region");
    assert!(matches!(err, ChartError::InvalidRegion { .. }));
}

#[test]
fn non_positive_cosmetics_are_clamped_instead_of_failing() {
    let mut style = BarChartStyle::default().with_grid(LineStrokeStyle::Dashed);
    style.value_label.font_size = 0.0;
    style.grid_line_width = -1.0;
    let frame = layout_bar_chart(&abc(), Region::new(300.0, 300.0), &style)
        .expect("cosmetic values never fail the pass");

    assert!(!frame.labels.is_empty());
    assert!(frame.labels.iter().all(|label| label.font_size > 0.0));
    assert!(!frame.grid_lines.is_empty());
    assert!(frame.grid_lines.iter().all(|line| line.width > 0.0));
    frame.validate().expect("valid frame");
}
