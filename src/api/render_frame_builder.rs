use tracing::trace;

use crate::render::{RenderFrame, Renderer};

use super::CombinedChart;

impl<R: Renderer> CombinedChart<R> {
    /// Builds the scene for the current state.
    ///
    /// Passes run data, extras, highlights, then values, so value labels stay
    /// on top of everything drawn for the data.
    #[must_use]
    pub fn build_render_frame(&self) -> RenderFrame {
        let mut frame = RenderFrame::new(self.model.viewport());
        let renderer = &self.data_renderer;
        let model = &self.model;

        renderer.draw_data(&mut frame, model);
        renderer.draw_extras(&mut frame, model);
        if !model.highlighted.is_empty() {
            renderer.draw_highlighted(&mut frame, model, &model.highlighted);
        }
        renderer.draw_values(&mut frame, model);

        trace!(
            command_count = frame.len(),
            highlight_count = model.highlighted.len(),
            "built render frame"
        );
        frame
    }
}
