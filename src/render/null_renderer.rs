use crate::error::ChartResult;
use crate::render::{RenderFrame, Renderer};

/// Headless renderer; validates each frame and records what it held.
#[derive(Debug, Default)]
pub struct NullRenderer {
    pub last_command_count: usize,
    pub last_line_count: usize,
    pub last_rect_count: usize,
    pub last_circle_count: usize,
    pub last_polygon_count: usize,
    pub last_text_count: usize,
    pub frames_rendered: usize,
}

impl Renderer for NullRenderer {
    fn render(&mut self, frame: &RenderFrame) -> ChartResult<()> {
        frame.validate()?;
        self.last_command_count = frame.len();
        self.last_line_count = frame.lines().count();
        self.last_rect_count = frame.rects().count();
        self.last_circle_count = frame.circles().count();
        self.last_polygon_count = frame.polygons().count();
        self.last_text_count = frame.texts().count();
        self.frames_rendered += 1;
        Ok(())
    }
}
