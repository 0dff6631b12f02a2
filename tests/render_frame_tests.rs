use chart_layout::api::{LayoutInput, RadarChartStyle, RadarLegendStyle, LegendAlign, compute_layout};
use chart_layout::core::{Color, Point, Region};
use chart_layout::render::{
    GeometryPrimitive, GridLinePrimitive, LabelAnchor, LayoutFrame, NullRenderer, RectPrimitive,
    Renderer, WedgePrimitive,
};

fn radar_frame() -> LayoutFrame {
    let style = RadarChartStyle::default()
        .with_markers(6.0)
        .with_legend(RadarLegendStyle::shown(LegendAlign::Bottom));
    let input = LayoutInput::new(style, Region::new(400.0, 400.0))
        .with_categories(["a", "b", "c"])
        .with_entry("one", vec![20.0, 40.0, 60.0]);
    compute_layout(&input).expect("layout")
}

fn kind(primitive: &GeometryPrimitive) -> &'static str {
    match primitive {
        GeometryPrimitive::GridLine(_) => "grid",
        GeometryPrimitive::Rectangle(_) => "rect",
        GeometryPrimitive::Wedge(_) => "wedge",
        GeometryPrimitive::Polygon(_) => "polygon",
        GeometryPrimitive::Marker(_) => "marker",
        GeometryPrimitive::Label(_) => "label",
        GeometryPrimitive::LegendKey(_) => "key",
    }
}

#[test]
fn primitives_flatten_in_paint_order() {
    let frame = radar_frame();
    let kinds: Vec<&str> = frame.primitives().iter().map(kind).collect();

    let mut expected = Vec::new();
    expected.extend(std::iter::repeat_n("grid", 5 + 3));
    expected.push("polygon");
    expected.extend(std::iter::repeat_n("marker", 3));
    expected.extend(std::iter::repeat_n("label", 5 + 3 + 1));
    expected.push("key");
    assert_eq!(kinds, expected);
    assert_eq!(frame.primitive_count(), kinds.len());
}

#[test]
fn null_renderer_validates_and_counts() {
    let frame = radar_frame();
    let mut renderer = NullRenderer::default();
    renderer.render(&frame).expect("render");
    assert_eq!(renderer.frames_rendered, 1);
    assert_eq!(renderer.last_primitive_count, frame.primitive_count());
    assert_eq!(renderer.last_label_count, 9);
}

#[test]
fn validation_rejects_broken_geometry() {
    let region = Region::new(100.0, 100.0);

    let mut wedge = WedgePrimitive::disc(Point::new(50.0, 50.0), 10.0, Color::BLACK);
    wedge.sweep_angle = -1.0;
    let mut frame = LayoutFrame::new(region);
    frame.wedges.push(wedge);
    assert!(frame.validate().is_err());

    let mut frame = LayoutFrame::new(region);
    frame.bars.push(RectPrimitive::new(0.0, 0.0, -5.0, 10.0, Color::BLACK));
    assert!(frame.validate().is_err());

    let frame = LayoutFrame::new(region).with_label(LabelAnchor::new("", 1.0, 1.0, 12.0, Color::BLACK));
    assert!(frame.validate().is_err());

    let mut frame = LayoutFrame::new(region);
    frame.grid_lines.push(GridLinePrimitive::segment(
        Point::new(0.0, 0.0),
        Point::new(10.0, 0.0),
        Color::rgba(0.0, 0.0, 0.0, 2.0),
        1.0,
    ));
    assert!(frame.validate().is_err());

    let mut renderer = NullRenderer::default();
    assert!(renderer.render(&frame).is_err());
    assert_eq!(renderer.frames_rendered, 0);
}

#[test]
fn empty_frame_is_valid() {
    let frame = LayoutFrame::new(Region::new(10.0, 10.0));
    assert!(frame.is_empty());
    assert!(!frame.is_degenerate());
    frame.validate().expect("valid frame");
}

#[test]
fn primitives_serialize_with_kind_tag() {
    let wedge = WedgePrimitive::disc(Point::new(5.0, 5.0), 2.0, Color::WHITE);
    let json = serde_json::to_value(GeometryPrimitive::Wedge(wedge)).expect("serialize");
    assert_eq!(json["kind"], "wedge");
    assert_eq!(json["outer_radius"], 2.0);

    let label = LabelAnchor::new("x", 0.0, 0.0, 10.0, Color::BLACK);
    let json = serde_json::to_value(GeometryPrimitive::Label(label)).expect("serialize");
    assert_eq!(json["kind"], "label");
    assert_eq!(json["h_align"], "Center");
}
