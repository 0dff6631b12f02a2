use std::f64::consts::{FRAC_PI_2, TAU};

use chart_layout::api::{DonutStyle, PieChartStyle, layout_slice_chart, slice_label_radius};
use chart_layout::core::{Point, Region, dataset_from, proportional_spans};
use proptest::prelude::*;

proptest! {
    #[test]
    fn sweeps_cover_exactly_one_turn(
        values in prop::collection::vec(0.0f64..1_000.0, 1..40),
    ) {
        prop_assume!(values.iter().sum::<f64>() > 0.0);
        let spans = proportional_spans(&values, -FRAC_PI_2).expect("spans");

        let total: f64 = spans.spans.iter().map(|span| span.sweep_angle).sum();
        prop_assert!((total - TAU).abs() <= 1e-9);

        let last = spans.spans.last().expect("at least one span");
        prop_assert!((last.end_angle() - (TAU - FRAC_PI_2)).abs() <= 1e-9);

        for pair in spans.spans.windows(2) {
            prop_assert!((pair[0].end_angle() - pair[1].start_angle).abs() <= 1e-12);
        }
    }

    #[test]
    fn donut_labels_fall_between_inner_and_outer_radius(
        values in prop::collection::vec(0.5f64..100.0, 1..12),
        donut_radius in 0.0f64..1.0,
        factor in -1.0f64..2.0,
        size in 80.0f64..1_200.0,
    ) {
        let data = dataset_from(
            values.iter().enumerate().map(|(i, value)| (format!("slice {i}"), *value)),
        );
        let style = PieChartStyle::default()
            .with_donut(DonutStyle::default().with_donut_radius(donut_radius))
            .with_percentage_distance_factor(factor);
        let frame = layout_slice_chart(&data, Region::new(size, size), &style).expect("layout");

        let slice = &frame.wedges[0];
        let center = Point::new(slice.cx, slice.cy);
        prop_assert!(slice.inner_radius >= 0.2 * slice.outer_radius - 1e-9);
        prop_assert!(slice.inner_radius <= 0.8 * slice.outer_radius + 1e-9);

        for label in frame.labels.iter().filter(|label| label.text.ends_with('%')) {
            let distance = Point::new(label.x, label.y).distance(center);
            prop_assert!(distance >= slice.inner_radius - 1e-9);
            prop_assert!(distance <= slice.outer_radius + 1e-9);
        }
        prop_assert!(frame.validate().is_ok());
    }

    #[test]
    fn label_radius_is_monotonic_in_factor(
        inner in 0.0f64..100.0,
        band in 0.0f64..100.0,
        a in 0.0f64..1.0,
        b in 0.0f64..1.0,
    ) {
        let outer = inner + band;
        let (low, high) = if a <= b { (a, b) } else { (b, a) };
        prop_assert!(slice_label_radius(inner, outer, low) <= slice_label_radius(inner, outer, high));
    }

    #[test]
    fn resizing_scales_coordinates_and_keeps_angles(
        values in prop::collection::vec(0.5f64..100.0, 1..12),
        small in 60.0f64..400.0,
        factor in 1.5f64..4.0,
        donut in any::<bool>(),
    ) {
        let data = dataset_from(
            values.iter().enumerate().map(|(i, value)| (format!("slice {i}"), *value)),
        );
        let style = (if donut { PieChartStyle::donut() } else { PieChartStyle::default() })
            .with_chart_margin(0.0);
        let before = layout_slice_chart(&data, Region::new(small, small), &style).expect("layout");
        let after = layout_slice_chart(&data, Region::new(small * factor, small * factor), &style)
            .expect("layout");

        prop_assert_eq!(before.wedges.len(), after.wedges.len());
        for (a, b) in before.wedges.iter().zip(&after.wedges) {
            prop_assert!((a.start_angle - b.start_angle).abs() <= 1e-12);
            prop_assert!((a.sweep_angle - b.sweep_angle).abs() <= 1e-12);
            prop_assert!((a.outer_radius * factor - b.outer_radius).abs() <= 1e-9);
            prop_assert!((a.inner_radius * factor - b.inner_radius).abs() <= 1e-9);
        }

        let outer = (before.wedges[0].outer_radius, after.wedges[0].outer_radius);
        let centers = (before.wedges[0].center(), after.wedges[0].center());
        prop_assert_eq!(before.labels.len(), after.labels.len());
        for (a, b) in before.labels.iter().zip(&after.labels) {
            prop_assert!((a.x * factor - b.x).abs() <= 1e-9);
            prop_assert!((a.y * factor - b.y).abs() <= 1e-9);
            let ratio_before = Point::new(a.x, a.y).distance(centers.0) / outer.0;
            let ratio_after = Point::new(b.x, b.y).distance(centers.1) / outer.1;
            prop_assert!((ratio_before - ratio_after).abs() <= 1e-9);
        }
    }
}
