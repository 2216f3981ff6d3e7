//! Deferred viewport operations.
//!
//! A job captures the target values of a zoom or move request so the chart
//! can replay it once its dimensions are known.

mod move_view;
mod zoom_view;

pub use move_view::MoveViewJob;
pub use zoom_view::ZoomViewJob;

use serde::{Deserialize, Serialize};

use crate::core::{AxisDependency, Transformer, ViewportHandler};

/// Chart state a viewport job reads and mutates.
pub trait JobHost {
    fn viewport_handler(&self) -> &ViewportHandler;

    fn viewport_handler_mut(&mut self) -> &mut ViewportHandler;

    fn transformer(&self, axis: AxisDependency) -> &Transformer;

    /// Value span of the x axis.
    fn x_axis_range(&self) -> f64;

    /// Value span of the y axis on `axis` side.
    fn y_axis_range(&self, axis: AxisDependency) -> f64;

    /// Recomputes content offsets and the transformer matrices.
    fn calculate_offsets(&mut self);

    fn request_redraw(&mut self);
}

/// Every viewport job the chart can queue.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum ViewPortJob {
    Zoom(ZoomViewJob),
    Move(MoveViewJob),
}

impl ViewPortJob {
    pub fn do_job(&self, host: &mut dyn JobHost) {
        match self {
            Self::Zoom(job) => job.do_job(host),
            Self::Move(job) => job.do_job(host),
        }
    }
}

impl From<ZoomViewJob> for ViewPortJob {
    fn from(job: ZoomViewJob) -> Self {
        Self::Zoom(job)
    }
}

impl From<MoveViewJob> for ViewPortJob {
    fn from(job: MoveViewJob) -> Self {
        Self::Move(job)
    }
}
