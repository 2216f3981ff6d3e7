use kurbo::Point;
use tracing::debug;

use crate::core::{AxisDependency, Viewport};
use crate::error::{ChartError, ChartResult};
use crate::jobs::{JobHost, MoveViewJob, ViewPortJob, ZoomViewJob};
use crate::render::{ChartDataProvider, Renderer};

use super::CombinedChart;

impl<R: Renderer> CombinedChart<R> {
    #[must_use]
    pub fn viewport(&self) -> Viewport {
        self.model.viewport()
    }

    /// Sets the chart dimensions, then runs the viewport jobs queued while
    /// the size was unknown, oldest first.
    pub fn set_viewport(&mut self, viewport: Viewport) -> ChartResult<()> {
        if !viewport.is_valid() {
            return Err(ChartError::InvalidViewport {
                width: viewport.width,
                height: viewport.height,
            });
        }
        self.model.set_chart_dimens(viewport);
        self.model.redraw_requested = true;

        let pending = self.pending_jobs.len();
        while let Some(job) = self.pending_jobs.pop_front() {
            job.do_job(&mut self.model);
        }
        debug!(
            width = viewport.width,
            height = viewport.height,
            flushed_jobs = pending,
            "set chart viewport"
        );
        Ok(())
    }

    /// Runs `job` now when the chart has dimensions, otherwise queues it.
    pub fn add_viewport_job(&mut self, job: ViewPortJob) {
        if self.model.handler.has_chart_dimens() {
            job.do_job(&mut self.model);
        } else {
            debug!(?job, queued = self.pending_jobs.len() + 1, "queue viewport job");
            self.pending_jobs.push_back(job);
        }
    }

    #[must_use]
    pub fn pending_job_count(&self) -> usize {
        self.pending_jobs.len()
    }

    #[must_use]
    pub fn pending_jobs(&self) -> impl Iterator<Item = &ViewPortJob> {
        self.pending_jobs.iter()
    }

    pub fn remove_pending_jobs(&mut self) {
        self.pending_jobs.clear();
    }

    /// Zooms by the given factors around pixel `(x, y)`.
    pub fn zoom(&mut self, scale_x: f64, scale_y: f64, x: f64, y: f64) {
        let center = self.touch_space(Point::new(x, y));
        let matrix = self.model.handler.zoom_at(scale_x, scale_y, center.x, center.y);
        self.apply_touch_matrix(matrix);
    }

    /// Zooms in by 1.4 around the content center.
    pub fn zoom_in(&mut self) {
        let center = self.touch_space(self.model.handler.content_center());
        let matrix = self.model.handler.zoom_in(center.x, center.y);
        self.apply_touch_matrix(matrix);
    }

    /// Zooms out by 0.7 around the content center.
    pub fn zoom_out(&mut self) {
        let center = self.touch_space(self.model.handler.content_center());
        let matrix = self.model.handler.zoom_out(center.x, center.y);
        self.apply_touch_matrix(matrix);
    }

    pub fn reset_zoom(&mut self) {
        let matrix = self.model.handler.reset_zoom();
        self.apply_touch_matrix(matrix);
    }

    /// Drops all zoom and pan and resets the minimum scale to 1.
    pub fn fit_screen(&mut self) {
        let matrix = self.model.handler.fit_screen();
        self.apply_touch_matrix(matrix);
    }

    /// Sets an absolute zoom and centers the viewport on the value.
    pub fn zoom_and_center(
        &mut self,
        scale_x: f64,
        scale_y: f64,
        x_value: f64,
        y_value: f64,
        axis: AxisDependency,
    ) {
        self.add_viewport_job(ZoomViewJob::new(scale_x, scale_y, x_value, y_value, axis).into());
    }

    /// Moves the left edge of the viewport to `x_value` and its top edge to
    /// half a viewport above `y_value`.
    pub fn move_view_to(&mut self, x_value: f64, y_value: f64, axis: AxisDependency) {
        let y_in_view = self.model.y_axis_range(axis) / self.model.handler.scale_y();
        self.add_viewport_job(MoveViewJob::new(x_value, y_value + y_in_view / 2.0, axis).into());
    }

    /// Moves the left edge of the viewport to `x_value`.
    pub fn move_view_to_x(&mut self, x_value: f64) {
        self.add_viewport_job(MoveViewJob::new(x_value, 0.0, AxisDependency::Left).into());
    }

    /// Centers the viewport on `(x_value, y_value)`.
    pub fn center_view_to(&mut self, x_value: f64, y_value: f64, axis: AxisDependency) {
        let handler = &self.model.handler;
        let y_in_view = self.model.y_axis_range(axis) / handler.scale_y();
        let x_in_view = self.model.x_axis_range() / handler.scale_x();
        self.add_viewport_job(
            MoveViewJob::new(
                x_value - x_in_view / 2.0,
                y_value + y_in_view / 2.0,
                axis,
            )
            .into(),
        );
    }

    pub fn set_scale_limits_x(&mut self, min: f64, max: f64) {
        self.model.handler.set_min_max_scale_x(min, max);
        self.model.redraw_requested = true;
    }

    pub fn set_scale_limits_y(&mut self, min: f64, max: f64) {
        self.model.handler.set_min_max_scale_y(min, max);
        self.model.redraw_requested = true;
    }

    #[must_use]
    pub fn scale_x(&self) -> f64 {
        self.model.handler.scale_x()
    }

    #[must_use]
    pub fn scale_y(&self) -> f64 {
        self.model.handler.scale_y()
    }

    #[must_use]
    pub fn lowest_visible_x(&self) -> f64 {
        self.model.lowest_visible_x()
    }

    #[must_use]
    pub fn highest_visible_x(&self) -> f64 {
        self.model.highest_visible_x()
    }

    #[must_use]
    pub fn visible_x_range(&self) -> f64 {
        (self.highest_visible_x() - self.lowest_visible_x()).abs()
    }

    #[must_use]
    pub fn pixel_for_values(&self, x: f64, y: f64, axis: AxisDependency) -> Point {
        self.model
            .transformer(axis)
            .pixel_for_values(x, y, &self.model.handler)
    }

    pub fn value_for_touch_point(&self, x: f64, y: f64, axis: AxisDependency) -> ChartResult<Point> {
        self.model
            .transformer(axis)
            .value_for_touch_point(x, y, &self.model.handler)
    }

    #[must_use]
    pub fn needs_redraw(&self) -> bool {
        self.model.needs_redraw()
    }

    /// Pixel position expressed in the space the touch matrix operates in.
    fn touch_space(&self, pixel: Point) -> Point {
        let handler = &self.model.handler;
        Point::new(
            pixel.x - handler.offset_left(),
            pixel.y - (handler.chart_height() - handler.offset_bottom()),
        )
    }

    fn apply_touch_matrix(&mut self, matrix: kurbo::Affine) {
        self.model.handler.refresh(matrix);
        self.model.calculate_offsets();
        self.model.redraw_requested = true;
    }
}
