use kurbo::{Affine, Point, Rect};

use crate::core::viewport_handler::ViewportHandler;
use crate::error::{ChartError, ChartResult};

/// Maps value coordinates to pixel coordinates for one y-axis side.
///
/// The full mapping is `offset * touch * value`, where the touch matrix is
/// read from the [`ViewportHandler`] passed to each call.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Transformer {
    matrix_value_to_px: Affine,
    matrix_offset: Affine,
}

impl Default for Transformer {
    fn default() -> Self {
        Self {
            matrix_value_to_px: Affine::IDENTITY,
            matrix_offset: Affine::IDENTITY,
        }
    }
}

impl Transformer {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Fits the value range `[x_min, x_min + delta_x] x [y_min, y_min + delta_y]`
    /// onto the content rectangle.
    pub fn prepare_matrix_value_px(
        &mut self,
        x_min: f64,
        delta_x: f64,
        delta_y: f64,
        y_min: f64,
        handler: &ViewportHandler,
    ) {
        let mut scale_x = handler.content_width() / delta_x;
        let mut scale_y = handler.content_height() / delta_y;
        if !scale_x.is_finite() {
            scale_x = 0.0;
        }
        if !scale_y.is_finite() {
            scale_y = 0.0;
        }

        self.matrix_value_to_px =
            Affine::scale_non_uniform(scale_x, -scale_y) * Affine::translate((-x_min, -y_min));
    }

    /// Places the value origin at the bottom-left of the content rect, or the
    /// top-left when the axis is inverted.
    pub fn prepare_matrix_offset(&mut self, inverted: bool, handler: &ViewportHandler) {
        self.matrix_offset = if inverted {
            Affine::scale_non_uniform(1.0, -1.0)
                * Affine::translate((handler.offset_left(), -handler.offset_top()))
        } else {
            Affine::translate((
                handler.offset_left(),
                handler.chart_height() - handler.offset_bottom(),
            ))
        };
    }

    #[must_use]
    pub fn value_to_pixel_matrix(&self, handler: &ViewportHandler) -> Affine {
        self.matrix_offset * handler.touch_matrix() * self.matrix_value_to_px
    }

    pub fn pixel_to_value_matrix(&self, handler: &ViewportHandler) -> ChartResult<Affine> {
        let matrix = self.value_to_pixel_matrix(handler);
        let det = matrix.determinant();
        if det == 0.0 || !det.is_finite() {
            return Err(ChartError::NonInvertibleTransform);
        }
        Ok(matrix.inverse())
    }

    #[must_use]
    pub fn point_value_to_pixel(&self, point: Point, handler: &ViewportHandler) -> Point {
        self.value_to_pixel_matrix(handler) * point
    }

    #[must_use]
    pub fn pixel_for_values(&self, x: f64, y: f64, handler: &ViewportHandler) -> Point {
        self.point_value_to_pixel(Point::new(x, y), handler)
    }

    /// Transforms a batch of value points in place.
    pub fn points_value_to_pixel(&self, points: &mut [Point], handler: &ViewportHandler) {
        let matrix = self.value_to_pixel_matrix(handler);
        for point in points {
            *point = matrix * *point;
        }
    }

    /// Transforms a value-space rect, scaling its y extent by `phase_y` first.
    ///
    /// The result is normalized so `y0 <= y1` regardless of axis inversion.
    #[must_use]
    pub fn rect_value_to_pixel(&self, rect: Rect, phase_y: f64, handler: &ViewportHandler) -> Rect {
        let scaled = Rect::new(rect.x0, rect.y0 * phase_y, rect.x1, rect.y1 * phase_y);
        self.value_to_pixel_matrix(handler)
            .transform_rect_bbox(scaled)
            .abs()
    }

    pub fn pixel_to_value(&self, pixel: Point, handler: &ViewportHandler) -> ChartResult<Point> {
        Ok(self.pixel_to_value_matrix(handler)? * pixel)
    }

    /// Value coordinates under a touch point.
    pub fn value_for_touch_point(
        &self,
        x: f64,
        y: f64,
        handler: &ViewportHandler,
    ) -> ChartResult<Point> {
        self.pixel_to_value(Point::new(x, y), handler)
    }
}
