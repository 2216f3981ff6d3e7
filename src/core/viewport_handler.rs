use kurbo::{Affine, Point, Rect};
use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::core::types::Viewport;

/// Space reserved around the plot area, in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ChartOffsets {
    pub left: f64,
    pub top: f64,
    pub right: f64,
    pub bottom: f64,
}

impl ChartOffsets {
    #[must_use]
    pub const fn uniform(value: f64) -> Self {
        Self {
            left: value,
            top: value,
            right: value,
            bottom: value,
        }
    }
}

impl Default for ChartOffsets {
    fn default() -> Self {
        Self::uniform(10.0)
    }
}

/// Owns the pan/zoom touch matrix and the content rectangle.
///
/// Matrix-producing methods (`zoom*`, `set_zoom*`, `translate`, `fit_screen`)
/// never mutate; only [`ViewportHandler::refresh`] stores a matrix, after
/// clamping it to the configured scale limits and content bounds.
#[derive(Debug, Clone, PartialEq)]
pub struct ViewportHandler {
    touch_matrix: Affine,
    content_rect: Rect,
    chart_width: f64,
    chart_height: f64,
    min_scale_x: f64,
    max_scale_x: f64,
    min_scale_y: f64,
    max_scale_y: f64,
    scale_x: f64,
    scale_y: f64,
    trans_x: f64,
    trans_y: f64,
    trans_offset_x: f64,
    trans_offset_y: f64,
}

impl Default for ViewportHandler {
    fn default() -> Self {
        Self {
            touch_matrix: Affine::IDENTITY,
            content_rect: Rect::ZERO,
            chart_width: 0.0,
            chart_height: 0.0,
            min_scale_x: 1.0,
            max_scale_x: f64::MAX,
            min_scale_y: 1.0,
            max_scale_y: f64::MAX,
            scale_x: 1.0,
            scale_y: 1.0,
            trans_x: 0.0,
            trans_y: 0.0,
            trans_offset_x: 0.0,
            trans_offset_y: 0.0,
        }
    }
}

impl ViewportHandler {
    #[must_use]
    pub fn new(viewport: Viewport) -> Self {
        let mut handler = Self::default();
        handler.set_chart_dimens(f64::from(viewport.width), f64::from(viewport.height));
        handler
    }

    /// Updates chart size while preserving the current offsets.
    pub fn set_chart_dimens(&mut self, width: f64, height: f64) {
        let offsets = self.offsets();
        self.chart_width = width;
        self.chart_height = height;
        self.restrain_view_port(offsets);
    }

    #[must_use]
    pub fn has_chart_dimens(&self) -> bool {
        self.chart_width > 0.0 && self.chart_height > 0.0
    }

    pub fn restrain_view_port(&mut self, offsets: ChartOffsets) {
        let width = (self.chart_width - offsets.left - offsets.right).max(0.0);
        let height = (self.chart_height - offsets.top - offsets.bottom).max(0.0);
        self.content_rect =
            Rect::from_origin_size((offsets.left, offsets.top), (width, height));
    }

    #[must_use]
    pub fn offsets(&self) -> ChartOffsets {
        ChartOffsets {
            left: self.offset_left(),
            top: self.offset_top(),
            right: self.offset_right(),
            bottom: self.offset_bottom(),
        }
    }

    #[must_use]
    pub fn offset_left(&self) -> f64 {
        self.content_rect.x0
    }

    #[must_use]
    pub fn offset_right(&self) -> f64 {
        self.chart_width - self.content_rect.x1
    }

    #[must_use]
    pub fn offset_top(&self) -> f64 {
        self.content_rect.y0
    }

    #[must_use]
    pub fn offset_bottom(&self) -> f64 {
        self.chart_height - self.content_rect.y1
    }

    #[must_use]
    pub fn content_rect(&self) -> Rect {
        self.content_rect
    }

    #[must_use]
    pub fn content_left(&self) -> f64 {
        self.content_rect.x0
    }

    #[must_use]
    pub fn content_right(&self) -> f64 {
        self.content_rect.x1
    }

    #[must_use]
    pub fn content_top(&self) -> f64 {
        self.content_rect.y0
    }

    #[must_use]
    pub fn content_bottom(&self) -> f64 {
        self.content_rect.y1
    }

    #[must_use]
    pub fn content_width(&self) -> f64 {
        self.content_rect.width()
    }

    #[must_use]
    pub fn content_height(&self) -> f64 {
        self.content_rect.height()
    }

    #[must_use]
    pub fn content_center(&self) -> Point {
        self.content_rect.center()
    }

    #[must_use]
    pub fn chart_width(&self) -> f64 {
        self.chart_width
    }

    #[must_use]
    pub fn chart_height(&self) -> f64 {
        self.chart_height
    }

    #[must_use]
    pub fn touch_matrix(&self) -> Affine {
        self.touch_matrix
    }

    /// Zooms by the given factors around the origin.
    #[must_use]
    pub fn zoom(&self, scale_x: f64, scale_y: f64) -> Affine {
        self.touch_matrix * Affine::scale_non_uniform(scale_x, scale_y)
    }

    /// Zooms by the given factors around pixel `(x, y)`.
    #[must_use]
    pub fn zoom_at(&self, scale_x: f64, scale_y: f64, x: f64, y: f64) -> Affine {
        self.touch_matrix
            * Affine::translate((x, y))
            * Affine::scale_non_uniform(scale_x, scale_y)
            * Affine::translate((-x, -y))
    }

    #[must_use]
    pub fn zoom_in(&self, x: f64, y: f64) -> Affine {
        self.zoom_at(1.4, 1.4, x, y)
    }

    #[must_use]
    pub fn zoom_out(&self, x: f64, y: f64) -> Affine {
        self.zoom_at(0.7, 0.7, x, y)
    }

    #[must_use]
    pub fn reset_zoom(&self) -> Affine {
        self.zoom_at(1.0 / self.scale_x, 1.0 / self.scale_y, 0.0, 0.0)
    }

    /// Replaces the scale components of the touch matrix, keeping translation.
    #[must_use]
    pub fn set_zoom(&self, scale_x: f64, scale_y: f64) -> Affine {
        let [_, b, c, _, e, f] = self.touch_matrix.as_coeffs();
        Affine::new([scale_x, b, c, scale_y, e, f])
    }

    /// Resets scale to 1 and then zooms by the given factors around `(x, y)`.
    #[must_use]
    pub fn set_zoom_at(&self, scale_x: f64, scale_y: f64, x: f64, y: f64) -> Affine {
        let [_, b, c, _, e, f] = self.touch_matrix.as_coeffs();
        Affine::new([1.0, b, c, 1.0, e, f])
            * Affine::translate((x, y))
            * Affine::scale_non_uniform(scale_x, scale_y)
            * Affine::translate((-x, -y))
    }

    /// Identity matrix; also drops the minimum scale back to 1.
    pub fn fit_screen(&mut self) -> Affine {
        self.min_scale_x = 1.0;
        self.min_scale_y = 1.0;
        Affine::IDENTITY
    }

    /// Matrix that moves pixel `pt` to the content origin.
    #[must_use]
    pub fn translate(&self, pt: Point) -> Affine {
        let translate_x = pt.x - self.offset_left();
        let translate_y = pt.y - self.offset_top();
        Affine::translate((-translate_x, -translate_y)) * self.touch_matrix
    }

    /// Moves pixel `pt` to the content origin and stores the result.
    pub fn center_view_port(&mut self, pt: Point) -> Affine {
        let matrix = self.translate(pt);
        self.refresh(matrix)
    }

    /// Stores `matrix` after clamping scale and translation; returns the stored matrix.
    pub fn refresh(&mut self, matrix: Affine) -> Affine {
        self.touch_matrix = self.limit_trans_and_scale(matrix);
        trace!(
            scale_x = self.scale_x,
            scale_y = self.scale_y,
            trans_x = self.trans_x,
            trans_y = self.trans_y,
            "refresh touch matrix"
        );
        self.touch_matrix
    }

    fn limit_trans_and_scale(&mut self, matrix: Affine) -> Affine {
        let [a, b, c, d, e, f] = matrix.as_coeffs();

        self.scale_x = a.max(self.min_scale_x).min(self.max_scale_x);
        self.scale_y = d.max(self.min_scale_y).min(self.max_scale_y);

        let width = self.content_rect.width();
        let height = self.content_rect.height();

        let max_trans_x = -width * (self.scale_x - 1.0);
        self.trans_x = e
            .max(max_trans_x - self.trans_offset_x)
            .min(self.trans_offset_x);

        let max_trans_y = height * (self.scale_y - 1.0);
        self.trans_y = f
            .min(max_trans_y + self.trans_offset_y)
            .max(-self.trans_offset_y);

        Affine::new([self.scale_x, b, c, self.scale_y, self.trans_x, self.trans_y])
    }

    pub fn set_minimum_scale_x(&mut self, scale: f64) {
        self.min_scale_x = scale.max(1.0);
        self.refresh(self.touch_matrix);
    }

    /// `0` means no upper bound.
    pub fn set_maximum_scale_x(&mut self, scale: f64) {
        self.max_scale_x = if scale == 0.0 { f64::MAX } else { scale };
        self.refresh(self.touch_matrix);
    }

    pub fn set_min_max_scale_x(&mut self, min: f64, max: f64) {
        self.min_scale_x = min.max(1.0);
        self.max_scale_x = if max == 0.0 { f64::MAX } else { max };
        self.refresh(self.touch_matrix);
    }

    pub fn set_minimum_scale_y(&mut self, scale: f64) {
        self.min_scale_y = scale.max(1.0);
        self.refresh(self.touch_matrix);
    }

    /// `0` means no upper bound.
    pub fn set_maximum_scale_y(&mut self, scale: f64) {
        self.max_scale_y = if scale == 0.0 { f64::MAX } else { scale };
        self.refresh(self.touch_matrix);
    }

    pub fn set_min_max_scale_y(&mut self, min: f64, max: f64) {
        self.min_scale_y = min.max(1.0);
        self.max_scale_y = if max == 0.0 { f64::MAX } else { max };
        self.refresh(self.touch_matrix);
    }

    /// Extra pan room beyond the content edges, in pixels.
    pub fn set_drag_offset_x(&mut self, offset: f64) {
        self.trans_offset_x = offset;
    }

    pub fn set_drag_offset_y(&mut self, offset: f64) {
        self.trans_offset_y = offset;
    }

    #[must_use]
    pub fn has_no_drag_offset(&self) -> bool {
        self.trans_offset_x <= 0.0 && self.trans_offset_y <= 0.0
    }

    #[must_use]
    pub fn scale_x(&self) -> f64 {
        self.scale_x
    }

    #[must_use]
    pub fn scale_y(&self) -> f64 {
        self.scale_y
    }

    #[must_use]
    pub fn min_scale_x(&self) -> f64 {
        self.min_scale_x
    }

    #[must_use]
    pub fn max_scale_x(&self) -> f64 {
        self.max_scale_x
    }

    #[must_use]
    pub fn min_scale_y(&self) -> f64 {
        self.min_scale_y
    }

    #[must_use]
    pub fn max_scale_y(&self) -> f64 {
        self.max_scale_y
    }

    #[must_use]
    pub fn trans_x(&self) -> f64 {
        self.trans_x
    }

    #[must_use]
    pub fn trans_y(&self) -> f64 {
        self.trans_y
    }

    #[must_use]
    pub fn is_fully_zoomed_out(&self) -> bool {
        self.is_fully_zoomed_out_x() && self.is_fully_zoomed_out_y()
    }

    #[must_use]
    pub fn is_fully_zoomed_out_x(&self) -> bool {
        !(self.scale_x > self.min_scale_x || self.min_scale_x > 1.0)
    }

    #[must_use]
    pub fn is_fully_zoomed_out_y(&self) -> bool {
        !(self.scale_y > self.min_scale_y || self.min_scale_y > 1.0)
    }

    #[must_use]
    pub fn can_zoom_out_more_x(&self) -> bool {
        self.scale_x > self.min_scale_x
    }

    #[must_use]
    pub fn can_zoom_in_more_x(&self) -> bool {
        self.scale_x < self.max_scale_x
    }

    #[must_use]
    pub fn can_zoom_out_more_y(&self) -> bool {
        self.scale_y > self.min_scale_y
    }

    #[must_use]
    pub fn can_zoom_in_more_y(&self) -> bool {
        self.scale_y < self.max_scale_y
    }

    #[must_use]
    pub fn is_in_bounds_left(&self, x: f64) -> bool {
        self.content_rect.x0 <= x + 1.0
    }

    #[must_use]
    pub fn is_in_bounds_right(&self, x: f64) -> bool {
        let x = (x * 100.0).floor() / 100.0;
        self.content_rect.x1 >= x - 1.0
    }

    #[must_use]
    pub fn is_in_bounds_x(&self, x: f64) -> bool {
        self.is_in_bounds_left(x) && self.is_in_bounds_right(x)
    }

    #[must_use]
    pub fn is_in_bounds_top(&self, y: f64) -> bool {
        self.content_rect.y0 <= y
    }

    #[must_use]
    pub fn is_in_bounds_bottom(&self, y: f64) -> bool {
        let y = (y * 100.0).floor() / 100.0;
        self.content_rect.y1 >= y
    }

    #[must_use]
    pub fn is_in_bounds_y(&self, y: f64) -> bool {
        self.is_in_bounds_top(y) && self.is_in_bounds_bottom(y)
    }

    #[must_use]
    pub fn is_in_bounds(&self, x: f64, y: f64) -> bool {
        self.is_in_bounds_x(x) && self.is_in_bounds_y(y)
    }
}

#[cfg(test)]
mod tests {
    use kurbo::{Affine, Point};

    use super::{ChartOffsets, ViewportHandler};
    use crate::core::Viewport;

    #[test]
    fn content_rect_follows_offsets() {
        let mut handler = ViewportHandler::new(Viewport::new(400, 300));
        handler.restrain_view_port(ChartOffsets {
            left: 20.0,
            top: 10.0,
            right: 30.0,
            bottom: 40.0,
        });
        assert_eq!(handler.content_width(), 350.0);
        assert_eq!(handler.content_height(), 250.0);
        assert_eq!(handler.offset_right(), 30.0);
        assert_eq!(handler.offset_bottom(), 40.0);

        handler.set_chart_dimens(500.0, 300.0);
        assert_eq!(handler.content_width(), 450.0);
        assert_eq!(handler.offset_left(), 20.0);
    }

    #[test]
    fn refresh_clamps_scale_and_translation() {
        let mut handler = ViewportHandler::new(Viewport::new(200, 100));
        handler.restrain_view_port(ChartOffsets::uniform(0.0));

        let stored = handler.refresh(Affine::new([0.5, 0.0, 0.0, 0.5, 40.0, -40.0]));
        assert_eq!(stored.as_coeffs(), [1.0, 0.0, 0.0, 1.0, 0.0, 0.0]);

        let stored = handler.refresh(Affine::new([2.0, 0.0, 0.0, 2.0, -500.0, 500.0]));
        assert_eq!(stored.as_coeffs(), [2.0, 0.0, 0.0, 2.0, -200.0, 100.0]);
        assert!(!handler.is_fully_zoomed_out());
    }

    #[test]
    fn maximum_scale_limits_zoom() {
        let mut handler = ViewportHandler::new(Viewport::new(200, 100));
        handler.set_maximum_scale_x(3.0);
        let matrix = handler.zoom(10.0, 1.0);
        handler.refresh(matrix);
        assert_eq!(handler.scale_x(), 3.0);
        assert!(!handler.can_zoom_in_more_x());
    }

    #[test]
    fn translate_moves_point_to_content_origin() {
        let mut handler = ViewportHandler::new(Viewport::new(200, 100));
        handler.restrain_view_port(ChartOffsets::uniform(10.0));
        let zoomed = handler.set_zoom(4.0, 1.0);
        handler.refresh(zoomed);

        handler.center_view_port(Point::new(110.0, 10.0));
        assert_eq!(handler.trans_x(), -100.0);
    }

    #[test]
    fn bounds_checks_use_content_rect() {
        let mut handler = ViewportHandler::new(Viewport::new(100, 100));
        handler.restrain_view_port(ChartOffsets::uniform(10.0));
        assert!(handler.is_in_bounds(50.0, 50.0));
        assert!(handler.is_in_bounds_x(9.5));
        assert!(!handler.is_in_bounds_x(5.0));
        assert!(!handler.is_in_bounds_y(95.0));
    }
}
