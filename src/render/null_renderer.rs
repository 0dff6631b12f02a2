use crate::error::ChartResult;
use crate::render::{LayoutFrame, Renderer};

/// No-op renderer used by tests and headless engine usage.
///
/// It still validates frame content so tests can catch invalid geometry before
/// a real backend is plugged in.
#[derive(Debug, Default)]
pub struct NullRenderer {
    pub last_primitive_count: usize,
    pub last_label_count: usize,
    pub frames_rendered: usize,
}

impl Renderer for NullRenderer {
    fn render(&mut self, frame: &LayoutFrame) -> ChartResult<()> {
        frame.validate()?;
        self.last_primitive_count = frame.primitive_count();
        self.last_label_count = frame.labels.len();
        self.frames_rendered += 1;
        Ok(())
    }
}
