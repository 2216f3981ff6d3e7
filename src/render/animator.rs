use serde::{Deserialize, Serialize};

/// Easing curve applied to animation progress.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Easing {
    #[default]
    Linear,
    EaseInQuad,
    EaseOutQuad,
    EaseInOutQuad,
    EaseInCubic,
    EaseOutCubic,
    EaseInOutCubic,
}

impl Easing {
    /// Maps linear progress `t` in `[0, 1]` onto the curve.
    #[must_use]
    pub fn apply(self, t: f64) -> f64 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Self::Linear => t,
            Self::EaseInQuad => t * t,
            Self::EaseOutQuad => -t * (t - 2.0),
            Self::EaseInOutQuad => {
                if t < 0.5 {
                    2.0 * t * t
                } else {
                    -2.0 * t * t + 4.0 * t - 1.0
                }
            }
            Self::EaseInCubic => t * t * t,
            Self::EaseOutCubic => {
                let p = t - 1.0;
                p * p * p + 1.0
            }
            Self::EaseInOutCubic => {
                if t < 0.5 {
                    4.0 * t * t * t
                } else {
                    let p = 2.0 * t - 2.0;
                    0.5 * p * p * p + 1.0
                }
            }
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
struct PhaseAnimation {
    duration_secs: f64,
    elapsed_secs: f64,
    easing: Easing,
}

impl PhaseAnimation {
    fn advance(&mut self, delta_secs: f64) -> (f64, bool) {
        self.elapsed_secs += delta_secs;
        let progress = if self.duration_secs > 0.0 {
            self.elapsed_secs / self.duration_secs
        } else {
            1.0
        };
        (self.easing.apply(progress), progress < 1.0)
    }
}

/// Deterministic x/y phase animator.
///
/// Phases scale how much of each series is drawn: renderers multiply y values
/// by `phase_y` and cut the visible entry range by `phase_x`. Hosts drive the
/// animation by calling [`Animator::step`] with elapsed seconds.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Animator {
    phase_x: f64,
    phase_y: f64,
    x: Option<PhaseAnimation>,
    y: Option<PhaseAnimation>,
}

impl Default for Animator {
    fn default() -> Self {
        Self {
            phase_x: 1.0,
            phase_y: 1.0,
            x: None,
            y: None,
        }
    }
}

impl Animator {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn phase_x(&self) -> f64 {
        self.phase_x
    }

    #[must_use]
    pub fn phase_y(&self) -> f64 {
        self.phase_y
    }

    pub fn set_phase_x(&mut self, phase: f64) {
        self.phase_x = phase.clamp(0.0, 1.0);
    }

    pub fn set_phase_y(&mut self, phase: f64) {
        self.phase_y = phase.clamp(0.0, 1.0);
    }

    pub fn animate_x(&mut self, duration_secs: f64, easing: Easing) {
        self.phase_x = 0.0;
        self.x = Some(PhaseAnimation {
            duration_secs: duration_secs.max(0.0),
            elapsed_secs: 0.0,
            easing,
        });
    }

    pub fn animate_y(&mut self, duration_secs: f64, easing: Easing) {
        self.phase_y = 0.0;
        self.y = Some(PhaseAnimation {
            duration_secs: duration_secs.max(0.0),
            elapsed_secs: 0.0,
            easing,
        });
    }

    pub fn animate_xy(&mut self, duration_x_secs: f64, duration_y_secs: f64, easing: Easing) {
        self.animate_x(duration_x_secs, easing);
        self.animate_y(duration_y_secs, easing);
    }

    #[must_use]
    pub fn is_running(&self) -> bool {
        self.x.is_some() || self.y.is_some()
    }

    /// Advances running animations. Returns `true` when a phase changed and
    /// the chart needs a redraw.
    pub fn step(&mut self, delta_secs: f64) -> bool {
        if !delta_secs.is_finite() || delta_secs < 0.0 || !self.is_running() {
            return false;
        }

        if let Some(animation) = self.x.as_mut() {
            let (phase, running) = animation.advance(delta_secs);
            self.phase_x = phase;
            if !running {
                self.x = None;
            }
        }
        if let Some(animation) = self.y.as_mut() {
            let (phase, running) = animation.advance(delta_secs);
            self.phase_y = phase;
            if !running {
                self.y = None;
            }
        }
        true
    }

    /// Stops running animations and snaps both phases to completion.
    pub fn stop(&mut self) {
        self.x = None;
        self.y = None;
        self.phase_x = 1.0;
        self.phase_y = 1.0;
    }
}
