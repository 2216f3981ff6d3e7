use crate::render::{Animator, Easing, Renderer};

use super::CombinedChart;

impl<R: Renderer> CombinedChart<R> {
    #[must_use]
    pub fn animator(&self) -> &Animator {
        self.model.animator()
    }

    /// Reveals the data along x over `duration_secs`.
    pub fn animate_x(&mut self, duration_secs: f64, easing: Easing) {
        self.model.animator.animate_x(duration_secs, easing);
        self.model.redraw_requested = true;
    }

    /// Grows the data along y over `duration_secs`.
    pub fn animate_y(&mut self, duration_secs: f64, easing: Easing) {
        self.model.animator.animate_y(duration_secs, easing);
        self.model.redraw_requested = true;
    }

    pub fn animate_xy(&mut self, duration_x_secs: f64, duration_y_secs: f64, easing: Easing) {
        self.model
            .animator
            .animate_xy(duration_x_secs, duration_y_secs, easing);
        self.model.redraw_requested = true;
    }

    /// Advances running animations by `delta_secs`; returns `true` when the
    /// chart needs a redraw.
    pub fn step_animation(&mut self, delta_secs: f64) -> bool {
        let changed = self.model.animator.step(delta_secs);
        if changed {
            self.model.redraw_requested = true;
        }
        changed
    }

    pub fn stop_animation(&mut self) {
        self.model.animator.stop();
        self.model.redraw_requested = true;
    }
}
