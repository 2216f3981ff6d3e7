use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::core::AxisDependency;
use crate::jobs::JobHost;

/// Sets an absolute zoom and centers the viewport on a value.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ZoomViewJob {
    pub scale_x: f64,
    pub scale_y: f64,
    pub x_value: f64,
    pub y_value: f64,
    pub axis: AxisDependency,
}

impl ZoomViewJob {
    #[must_use]
    pub fn new(scale_x: f64, scale_y: f64, x_value: f64, y_value: f64, axis: AxisDependency) -> Self {
        Self {
            scale_x,
            scale_y,
            x_value,
            y_value,
            axis,
        }
    }

    pub fn do_job(&self, host: &mut dyn JobHost) {
        let zoomed = host.viewport_handler().set_zoom(self.scale_x, self.scale_y);
        host.viewport_handler_mut().refresh(zoomed);

        let handler = host.viewport_handler();
        let y_vals_in_view = host.y_axis_range(self.axis) / handler.scale_y();
        let x_vals_in_view = host.x_axis_range() / handler.scale_x();

        let anchor = host.transformer(self.axis).pixel_for_values(
            self.x_value - x_vals_in_view / 2.0,
            self.y_value + y_vals_in_view / 2.0,
            handler,
        );
        let translated = handler.translate(anchor);
        host.viewport_handler_mut().refresh(translated);

        debug!(
            scale_x = self.scale_x,
            scale_y = self.scale_y,
            x_value = self.x_value,
            y_value = self.y_value,
            "zoom view job"
        );
        host.calculate_offsets();
        host.request_redraw();
    }
}
