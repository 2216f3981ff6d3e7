use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::core::AxisDependency;
use crate::jobs::JobHost;

/// Moves the content origin onto a value without changing the zoom.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MoveViewJob {
    pub x_value: f64,
    pub y_value: f64,
    pub axis: AxisDependency,
}

impl MoveViewJob {
    #[must_use]
    pub fn new(x_value: f64, y_value: f64, axis: AxisDependency) -> Self {
        Self {
            x_value,
            y_value,
            axis,
        }
    }

    pub fn do_job(&self, host: &mut dyn JobHost) {
        let handler = host.viewport_handler();
        let pt = host
            .transformer(self.axis)
            .pixel_for_values(self.x_value, self.y_value, handler);
        host.viewport_handler_mut().center_view_port(pt);

        debug!(x_value = self.x_value, y_value = self.y_value, "move view job");
        host.request_redraw();
    }
}
