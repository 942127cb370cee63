//! Renderer-facing descriptions of visual transitions.
//!
//! Nothing here schedules or runs an animation. A renderer receives an
//! [`AnimationIntent`] and plays it however it likes, or samples it per frame
//! through [`ArcFillIntent::sample`] and [`KnobRotationIntent::sample`].

use crate::state::{Progress, Transition};
use serde::Serialize;
use serde_with::{DeserializeFromStr, DurationMilliSeconds, serde_as};
use std::time::Duration;
use strum::{Display as StrumDisplay, EnumIter, EnumString};

pub const DEFAULT_DURATION: Duration = Duration::from_millis(660);

#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Default,
    Serialize,
    DeserializeFromStr,
    EnumString,
    EnumIter,
    StrumDisplay,
)]
#[strum(ascii_case_insensitive)]
#[serde(rename_all = "kebab-case")]
pub enum Easing {
    #[strum(to_string = "linear")]
    Linear,
    #[default]
    #[strum(to_string = "ease-in-out", serialize = "easeinout")]
    EaseInOut,
}

impl Easing {
    /// Maps linear progress in `[0, 1]` to eased progress in `[0, 1]`.
    pub fn apply(&self, t: f64) -> f64 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Self::Linear => t,
            Self::EaseInOut if t < 0.5 => 4.0 * t * t * t,
            Self::EaseInOut => 1.0 - (-2.0 * t + 2.0).powi(3) / 2.0,
        }
    }
}

fn interpolate(from: f64, to: f64, duration: Duration, easing: Easing, elapsed: Duration) -> f64 {
    if duration.is_zero() {
        return to;
    }
    let t = elapsed.as_secs_f64() / duration.as_secs_f64();
    from + (to - from) * easing.apply(t)
}

/// Arc stroke end moving between two progress values.
#[serde_as]
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ArcFillIntent {
    pub from: Progress,
    pub to: Progress,
    #[serde_as(as = "DurationMilliSeconds<u64>")]
    #[serde(rename = "duration_ms")]
    pub duration: Duration,
    pub easing: Easing,
}

impl ArcFillIntent {
    pub fn sample(&self, elapsed: Duration) -> Progress {
        Progress::new(interpolate(
            self.from.get(),
            self.to.get(),
            self.duration,
            self.easing,
            elapsed,
        ))
    }
}

/// Knob rotation between two absolute angles.
#[serde_as]
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct KnobRotationIntent {
    pub from_angle: f64,
    pub to_angle: f64,
    #[serde_as(as = "DurationMilliSeconds<u64>")]
    #[serde(rename = "duration_ms")]
    pub duration: Duration,
    pub easing: Easing,
}

impl KnobRotationIntent {
    pub fn sample(&self, elapsed: Duration) -> f64 {
        interpolate(
            self.from_angle,
            self.to_angle,
            self.duration,
            self.easing,
            elapsed,
        )
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct AnimationIntent {
    pub arc_fill: ArcFillIntent,
    pub knob: KnobRotationIntent,
}

impl AnimationIntent {
    pub fn is_instant(&self) -> bool {
        self.arc_fill.duration.is_zero() && self.knob.duration.is_zero()
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AnimationIntentBuilder {
    duration: Duration,
    easing: Easing,
}

impl Default for AnimationIntentBuilder {
    fn default() -> Self {
        Self::new(DEFAULT_DURATION, Easing::default())
    }
}

impl AnimationIntentBuilder {
    pub fn new(duration: Duration, easing: Easing) -> Self {
        Self { duration, easing }
    }

    pub fn duration(&self) -> Duration {
        self.duration
    }

    pub fn easing(&self) -> Easing {
        self.easing
    }

    pub fn build(&self, transition: &Transition, animated: bool) -> AnimationIntent {
        let duration = if animated {
            self.duration
        } else {
            Duration::ZERO
        };

        AnimationIntent {
            arc_fill: ArcFillIntent {
                from: transition.from.progress,
                to: transition.to.progress,
                duration,
                easing: self.easing,
            },
            knob: KnobRotationIntent {
                from_angle: transition.from.knob_angle,
                to_angle: transition.to.knob_angle,
                duration,
                easing: self.easing,
            },
        }
    }
}
