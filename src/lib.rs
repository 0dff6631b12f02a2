//! chart-layout: renderer-agnostic geometry for bar, pie/donut and radar charts.
//!
//! A layout pass turns a labelled dataset, a drawing region and a style bundle
//! into a [`render::LayoutFrame`] of rectangles, wedges, polygons, markers,
//! grid lines, label anchors and legend keys. Painting is left to a [`render::Renderer`].

pub mod api;
pub mod core;
pub mod error;
pub mod render;
pub mod telemetry;

pub use api::{ChartEngine, ChartStyle, LayoutInput, compute_layout, compute_layouts};
pub use error::{ChartError, ChartResult};
