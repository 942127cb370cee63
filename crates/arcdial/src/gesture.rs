//! Rotation tracking for drag gestures on the arc.
//!
//! Raw angles come from the input layer reported modulo a full turn. The
//! tracker moves them into a continuous frame around the arc, clamps them
//! onto it and throws away samples that would make the knob jump.

use crate::geometry::{self, FULL_TURN, RangeModel};
use std::f64::consts::FRAC_PI_2;
use strum::{Display as StrumDisplay, EnumString};

/// Largest knob movement accepted from a single sample.
pub const DEFAULT_JUMP_THRESHOLD: f64 = FRAC_PI_2;

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Angle of `point` around `center`, y axis pointing down.
pub fn angle_at(point: Point, center: Point) -> f64 {
    let (dx, dy) = (point.x - center.x, point.y - center.y);
    dy.atan2(dx)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumString, StrumDisplay)]
#[strum(ascii_case_insensitive, serialize_all = "lowercase")]
pub enum GesturePhase {
    Began,
    Changed,
    Ended,
    #[strum(to_string = "cancelled", serialize = "canceled")]
    Cancelled,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GestureSample {
    pub phase: GesturePhase,
    pub raw_angle: f64,
}

impl GestureSample {
    pub fn new(phase: GesturePhase, raw_angle: f64) -> Self {
        Self { phase, raw_angle }
    }

    pub fn began(raw_angle: f64) -> Self {
        Self::new(GesturePhase::Began, raw_angle)
    }

    pub fn changed(raw_angle: f64) -> Self {
        Self::new(GesturePhase::Changed, raw_angle)
    }

    /// End phases carry no meaningful angle.
    pub fn ended() -> Self {
        Self::new(GesturePhase::Ended, 0.0)
    }

    pub fn cancelled() -> Self {
        Self::new(GesturePhase::Cancelled, 0.0)
    }

    pub fn at_point(phase: GesturePhase, point: Point, center: Point) -> Self {
        Self::new(phase, angle_at(point, center))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, StrumDisplay)]
pub enum TrackerState {
    #[default]
    Idle,
    Tracking,
}

/// What a single sample did.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Step {
    Ignored,
    Rejected { angle: f64, delta: f64 },
    Accepted { angle: f64, value: f64 },
}

impl Step {
    pub fn value(&self) -> Option<f64> {
        match self {
            Self::Accepted { value, .. } => Some(*value),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TrackOutcome {
    pub cancel_animation: bool,
    pub step: Step,
}

impl TrackOutcome {
    fn ignored() -> Self {
        Self {
            cancel_animation: false,
            step: Step::Ignored,
        }
    }
}

#[derive(Debug, Clone)]
pub struct RotationTracker {
    state: TrackerState,
    jump_threshold: f64,
}

impl Default for RotationTracker {
    fn default() -> Self {
        Self::new(DEFAULT_JUMP_THRESHOLD)
    }
}

impl RotationTracker {
    pub fn new(jump_threshold: f64) -> Self {
        Self {
            state: TrackerState::Idle,
            jump_threshold,
        }
    }

    pub fn state(&self) -> TrackerState {
        self.state
    }

    pub fn is_tracking(&self) -> bool {
        self.state == TrackerState::Tracking
    }

    pub fn jump_threshold(&self) -> f64 {
        self.jump_threshold
    }

    pub fn reset(&mut self) {
        self.state = TrackerState::Idle;
    }

    /// Advances the state machine by one sample. `knob_angle` is the knob
    /// position before this sample is applied.
    ///
    /// A `began` sample starts tracking, requests cancellation of any running
    /// animation and is then processed like a `changed` sample.
    pub fn process(
        &mut self,
        sample: GestureSample,
        range: &RangeModel,
        knob_angle: f64,
    ) -> TrackOutcome {
        match sample.phase {
            GesturePhase::Began => {
                self.state = TrackerState::Tracking;
                TrackOutcome {
                    cancel_animation: true,
                    step: self.step(sample.raw_angle, range, knob_angle),
                }
            }
            GesturePhase::Changed if self.is_tracking() => TrackOutcome {
                cancel_animation: false,
                step: self.step(sample.raw_angle, range, knob_angle),
            },
            GesturePhase::Changed => {
                log::trace!("Ignoring {} sample while {}", sample.phase, self.state);
                TrackOutcome::ignored()
            }
            GesturePhase::Ended | GesturePhase::Cancelled => {
                log::trace!("{} -> {} on {}", self.state, TrackerState::Idle, sample.phase);
                self.state = TrackerState::Idle;
                TrackOutcome::ignored()
            }
        }
    }

    fn step(&self, raw_angle: f64, range: &RangeModel, knob_angle: f64) -> Step {
        if !raw_angle.is_finite() {
            log::trace!("Ignoring non-finite angle {}", raw_angle);
            return Step::Ignored;
        }

        let angle = resolve_wraparound(raw_angle, range)
            .min(range.end_angle())
            .max(range.start_angle());

        let delta = (angle - knob_angle).abs();
        if delta >= self.jump_threshold {
            log::debug!(
                "Rejected jump of {:.3} rad (angle {:.3}, knob {:.3})",
                delta,
                angle,
                knob_angle
            );
            return Step::Rejected { angle, delta };
        }

        let value = geometry::clamp_value(geometry::angle_to_value(angle, range), range);
        Step::Accepted { angle, value }
    }
}

/// Moves `raw_angle` by a full turn when it sits on the far side of the gap
/// bisector, so angles are continuous from `start_angle` to `end_angle`.
pub fn resolve_wraparound(raw_angle: f64, range: &RangeModel) -> f64 {
    let mid = range.knob_mid_angle();
    if raw_angle > mid {
        raw_angle - FULL_TURN
    } else if raw_angle < mid - FULL_TURN {
        raw_angle + FULL_TURN
    } else {
        raw_angle
    }
}
