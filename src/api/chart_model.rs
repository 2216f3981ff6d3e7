use tracing::debug;

use crate::core::{
    AxisBounds, AxisDependency, ChartKind, ChartOffsets, CombinedChartData, Transformer, Viewport,
    ViewportHandler, XAxisConfig, YAxisConfig,
};
use crate::formatter::{DefaultValueFormatter, ValueFormatter};
use crate::interaction::Highlight;
use crate::jobs::JobHost;
use crate::render::{Animator, ChartDataProvider};

use super::CombinedChartConfig;

/// Chart kinds whose items occupy width around their x value.
const PADDED_KINDS: [ChartKind; 3] = [ChartKind::Bar, ChartKind::Candle, ChartKind::Bubble];

/// State shared by the data renderers, the highlighter and the viewport jobs.
///
/// Kept apart from the renderers so a draw pass can borrow the model
/// immutably while the renderer list is borrowed alongside it.
#[derive(Debug, Clone)]
pub struct ChartModel {
    pub(super) viewport: Viewport,
    pub(super) data: CombinedChartData,
    pub(super) handler: ViewportHandler,
    pub(super) left_transformer: Transformer,
    pub(super) right_transformer: Transformer,
    pub(super) offsets: ChartOffsets,
    pub(super) x_axis: XAxisConfig,
    pub(super) left_axis: YAxisConfig,
    pub(super) right_axis: YAxisConfig,
    pub(super) auto_x_axis_space: bool,
    pub(super) x_bounds: AxisBounds,
    pub(super) left_bounds: AxisBounds,
    pub(super) right_bounds: AxisBounds,
    pub(super) animator: Animator,
    pub(super) highlighted: Vec<Highlight>,
    pub(super) value_formatter: DefaultValueFormatter,
    pub(super) max_visible_count: usize,
    pub(super) redraw_requested: bool,
}

impl ChartModel {
    #[must_use]
    pub fn new(config: &CombinedChartConfig) -> Self {
        let mut handler = ViewportHandler::new(config.viewport);
        handler.set_min_max_scale_x(config.min_scale_x, config.max_scale_x);
        handler.set_min_max_scale_y(config.min_scale_y, config.max_scale_y);
        handler.set_drag_offset_x(config.drag_offset_x);
        handler.set_drag_offset_y(config.drag_offset_y);

        let mut model = Self {
            viewport: config.viewport,
            data: CombinedChartData::default(),
            handler,
            left_transformer: Transformer::new(),
            right_transformer: Transformer::new(),
            offsets: config.offsets,
            x_axis: config.x_axis,
            left_axis: config.left_axis,
            right_axis: config.right_axis,
            auto_x_axis_space: config.auto_x_axis_space,
            x_bounds: AxisBounds::default(),
            left_bounds: AxisBounds::default(),
            right_bounds: AxisBounds::default(),
            animator: Animator::new(),
            highlighted: Vec::new(),
            value_formatter: DefaultValueFormatter::default(),
            max_visible_count: config.max_visible_count,
            redraw_requested: false,
        };
        model.calc_min_max();
        model.calculate_offsets();
        model
    }

    #[must_use]
    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    #[must_use]
    pub fn data(&self) -> &CombinedChartData {
        &self.data
    }

    #[must_use]
    pub fn viewport_handler(&self) -> &ViewportHandler {
        &self.handler
    }

    #[must_use]
    pub fn transformer(&self, axis: AxisDependency) -> &Transformer {
        match axis {
            AxisDependency::Left => &self.left_transformer,
            AxisDependency::Right => &self.right_transformer,
        }
    }

    #[must_use]
    pub fn x_bounds(&self) -> AxisBounds {
        self.x_bounds
    }

    #[must_use]
    pub fn y_bounds(&self, axis: AxisDependency) -> AxisBounds {
        match axis {
            AxisDependency::Left => self.left_bounds,
            AxisDependency::Right => self.right_bounds,
        }
    }

    #[must_use]
    pub fn axis_config(&self, axis: AxisDependency) -> YAxisConfig {
        match axis {
            AxisDependency::Left => self.left_axis,
            AxisDependency::Right => self.right_axis,
        }
    }

    #[must_use]
    pub fn animator(&self) -> &Animator {
        &self.animator
    }

    #[must_use]
    pub fn highlighted(&self) -> &[Highlight] {
        &self.highlighted
    }

    #[must_use]
    pub fn needs_redraw(&self) -> bool {
        self.redraw_requested
    }

    /// Clears the pending redraw request and reports whether one was set.
    pub fn take_redraw_request(&mut self) -> bool {
        std::mem::take(&mut self.redraw_requested)
    }

    /// Refits the axes to the current data and picks the default label
    /// precision.
    pub(super) fn calc_min_max(&mut self) {
        let mut x_axis = self.x_axis;
        if self.auto_x_axis_space && PADDED_KINDS.iter().any(|kind| self.data.has_kind(*kind)) {
            x_axis.space_min = x_axis.space_min.max(0.5);
            x_axis.space_max = x_axis.space_max.max(0.5);
        }
        let (x_min, x_max) = self.data.x_bounds().unwrap_or((0.0, 0.0));
        self.x_bounds = AxisBounds::for_x(x_min, x_max, x_axis);

        // A side without data sets mirrors the other one.
        let left = self
            .data
            .y_bounds(AxisDependency::Left)
            .or_else(|| self.data.y_bounds(AxisDependency::Right));
        let right = self.data.y_bounds(AxisDependency::Right).or(left);
        let (left_min, left_max) = left.unwrap_or((0.0, 0.0));
        let (right_min, right_max) = right.unwrap_or((0.0, 0.0));
        self.left_bounds = AxisBounds::for_y(left_min, left_max, self.left_axis);
        self.right_bounds = AxisBounds::for_y(right_min, right_max, self.right_axis);

        self.value_formatter = DefaultValueFormatter::for_range(
            left_min.min(right_min),
            left_max.max(right_max),
            self.data.entry_count(),
        );

        debug!(
            x_min = self.x_bounds.min,
            x_max = self.x_bounds.max,
            left_min = self.left_bounds.min,
            left_max = self.left_bounds.max,
            right_min = self.right_bounds.min,
            right_max = self.right_bounds.max,
            "recomputed axis bounds"
        );
    }

    pub(super) fn prepare_value_px_matrices(&mut self) {
        let x_min = self.x_bounds.min;
        let x_range = self.x_bounds.range();
        self.right_transformer.prepare_matrix_value_px(
            x_min,
            x_range,
            self.right_bounds.range(),
            self.right_bounds.min,
            &self.handler,
        );
        self.left_transformer.prepare_matrix_value_px(
            x_min,
            x_range,
            self.left_bounds.range(),
            self.left_bounds.min,
            &self.handler,
        );
    }

    pub(super) fn prepare_offset_matrices(&mut self) {
        self.right_transformer
            .prepare_matrix_offset(self.right_axis.inverted, &self.handler);
        self.left_transformer
            .prepare_matrix_offset(self.left_axis.inverted, &self.handler);
    }

    pub(super) fn calculate_offsets(&mut self) {
        self.handler.restrain_view_port(self.offsets);
        self.prepare_offset_matrices();
        self.prepare_value_px_matrices();
    }

    pub(super) fn set_chart_dimens(&mut self, viewport: Viewport) {
        self.viewport = viewport;
        self.handler
            .set_chart_dimens(f64::from(viewport.width), f64::from(viewport.height));
        self.calculate_offsets();
    }
}

impl ChartDataProvider for ChartModel {
    fn combined_data(&self) -> &CombinedChartData {
        &self.data
    }

    fn viewport_handler(&self) -> &ViewportHandler {
        &self.handler
    }

    fn transformer(&self, axis: AxisDependency) -> &Transformer {
        ChartModel::transformer(self, axis)
    }

    fn is_inverted(&self, axis: AxisDependency) -> bool {
        self.axis_config(axis).inverted
    }

    fn animator(&self) -> &Animator {
        &self.animator
    }

    fn lowest_visible_x(&self) -> f64 {
        let handler = &self.handler;
        self.left_transformer
            .value_for_touch_point(handler.content_left(), handler.content_bottom(), handler)
            .map_or(self.x_bounds.min, |pt| pt.x.max(self.x_bounds.min))
    }

    fn highest_visible_x(&self) -> f64 {
        let handler = &self.handler;
        self.left_transformer
            .value_for_touch_point(handler.content_right(), handler.content_bottom(), handler)
            .map_or(self.x_bounds.max, |pt| pt.x.min(self.x_bounds.max))
    }

    fn chart_y_min(&self, axis: AxisDependency) -> f64 {
        self.y_bounds(axis).min
    }

    fn chart_y_max(&self, axis: AxisDependency) -> f64 {
        self.y_bounds(axis).max
    }

    fn max_visible_count(&self) -> usize {
        self.max_visible_count
    }

    fn default_value_formatter(&self) -> &dyn ValueFormatter {
        &self.value_formatter
    }
}

impl JobHost for ChartModel {
    fn viewport_handler(&self) -> &ViewportHandler {
        &self.handler
    }

    fn viewport_handler_mut(&mut self) -> &mut ViewportHandler {
        &mut self.handler
    }

    fn transformer(&self, axis: AxisDependency) -> &Transformer {
        ChartModel::transformer(self, axis)
    }

    fn x_axis_range(&self) -> f64 {
        self.x_bounds.range()
    }

    fn y_axis_range(&self, axis: AxisDependency) -> f64 {
        self.y_bounds(axis).range()
    }

    fn calculate_offsets(&mut self) {
        ChartModel::calculate_offsets(self);
    }

    fn request_redraw(&mut self) {
        self.redraw_requested = true;
    }
}
