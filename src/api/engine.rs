use tracing::debug;

use crate::core::{Dataset, Region};
use crate::error::ChartResult;
use crate::render::{LayoutFrame, Renderer};

use super::{ChartStyle, LayoutInput, compute_layout};

/// Orchestration facade for one chart instance.
///
/// The engine owns the current input snapshot and the last computed frame.
/// Every setter invalidates the frame; the next `frame()` or `render()` call
/// recomputes it in full. There is no incremental update path.
pub struct ChartEngine<R: Renderer> {
    renderer: R,
    input: LayoutInput,
    frame: Option<LayoutFrame>,
    layout_passes: u64,
}

impl<R: Renderer> ChartEngine<R> {
    pub fn new(renderer: R, input: LayoutInput) -> ChartResult<Self> {
        input.region.validate()?;
        Ok(Self {
            renderer,
            input,
            frame: None,
            layout_passes: 0,
        })
    }

    #[must_use]
    pub fn input(&self) -> &LayoutInput {
        &self.input
    }

    pub fn set_data(&mut self, data: Dataset) {
        self.input.data = data;
        self.invalidate();
    }

    pub fn set_categories<S: Into<String>>(&mut self, categories: impl IntoIterator<Item = S>) {
        self.input.categories = categories.into_iter().map(Into::into).collect();
        self.invalidate();
    }

    pub fn set_style(&mut self, style: impl Into<ChartStyle>) {
        self.input.style = style.into();
        self.invalidate();
    }

    /// Moves or resizes the drawing region. Invalid regions are rejected and
    /// leave the current snapshot untouched.
    pub fn resize(&mut self, region: Region) -> ChartResult<()> {
        self.input.region = region.validate()?;
        self.invalidate();
        Ok(())
    }

    /// Drops the cached frame so the next access recomputes it.
    pub fn invalidate(&mut self) {
        if self.frame.take().is_some() {
            debug!(kind = self.input.style.kind_name(), "layout invalidated");
        }
    }

    #[must_use]
    pub fn needs_layout(&self) -> bool {
        self.frame.is_none()
    }

    /// Number of full layout passes run so far.
    #[must_use]
    pub fn layout_passes(&self) -> u64 {
        self.layout_passes
    }

    /// Current frame, recomputed first if any input changed.
    ///
    /// A failed pass leaves the engine invalid; nothing partial is cached.
    pub fn frame(&mut self) -> ChartResult<&LayoutFrame> {
        let frame = self.take_or_compute()?;
        Ok(self.frame.insert(frame))
    }

    /// Hands the current frame to the renderer.
    pub fn render(&mut self) -> ChartResult<()> {
        let frame = self.take_or_compute()?;
        let result = self.renderer.render(&frame);
        self.frame = Some(frame);
        result
    }

    pub fn frame_json_contract_v1_pretty(&mut self) -> ChartResult<String> {
        self.frame()?.to_json_contract_v1_pretty()
    }

    #[must_use]
    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    pub fn renderer_mut(&mut self) -> &mut R {
        &mut self.renderer
    }

    #[must_use]
    pub fn into_renderer(self) -> R {
        self.renderer
    }

    fn take_or_compute(&mut self) -> ChartResult<LayoutFrame> {
        if let Some(frame) = self.frame.take() {
            return Ok(frame);
        }
        let frame = compute_layout(&self.input)?;
        self.layout_passes += 1;
        debug!(
            kind = self.input.style.kind_name(),
            primitives = frame.primitive_count(),
            pass = self.layout_passes,
            "layout recomputed"
        );
        Ok(frame)
    }
}
