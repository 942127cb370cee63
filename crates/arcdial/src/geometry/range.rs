use super::{DEFAULT_MAXIMUM, DEFAULT_MINIMUM, DEFAULT_RADIANS_OFFSET, FULL_TURN, TOP};
use serde::Serialize;
use std::f64::consts::PI;
use thiserror::Error;

#[derive(Error, Debug, Clone, Copy, PartialEq)]
pub enum RangeError {
    #[error("Range parameters must be finite")]
    NonFinite,
    #[error("Maximum value {maximum} must be greater than minimum value {minimum}")]
    InvalidBounds { minimum: f64, maximum: f64 },
    #[error("Radians offset {0} must lie in [0, π)")]
    InvalidOffset(f64),
}

/// Value bounds plus the angular span of the arc.
///
/// Angles follow the screen convention: `0` points right and angles grow
/// clockwise, so the top of the circle is `-π/2`. The arc is open at the top;
/// `radians_offset` is the half-width of that gap.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct RangeModel {
    minimum_value: f64,
    maximum_value: f64,
    radians_offset: f64,
}

impl Default for RangeModel {
    fn default() -> Self {
        Self {
            minimum_value: DEFAULT_MINIMUM,
            maximum_value: DEFAULT_MAXIMUM,
            radians_offset: DEFAULT_RADIANS_OFFSET,
        }
    }
}

impl RangeModel {
    /// Validates the configuration; a degenerate arc or an empty value range
    /// is refused here so the mapping code never divides by zero.
    pub fn new(
        minimum_value: f64,
        maximum_value: f64,
        radians_offset: f64,
    ) -> Result<Self, RangeError> {
        if ![minimum_value, maximum_value, radians_offset]
            .iter()
            .all(|v| v.is_finite())
        {
            return Err(RangeError::NonFinite);
        }
        if maximum_value <= minimum_value {
            return Err(RangeError::InvalidBounds {
                minimum: minimum_value,
                maximum: maximum_value,
            });
        }
        if !(0.0..PI).contains(&radians_offset) {
            return Err(RangeError::InvalidOffset(radians_offset));
        }

        Ok(Self {
            minimum_value,
            maximum_value,
            radians_offset,
        })
    }

    pub fn minimum_value(&self) -> f64 {
        self.minimum_value
    }

    pub fn maximum_value(&self) -> f64 {
        self.maximum_value
    }

    pub fn radians_offset(&self) -> f64 {
        self.radians_offset
    }

    pub fn value_range(&self) -> f64 {
        self.maximum_value - self.minimum_value
    }

    pub fn start_angle(&self) -> f64 {
        TOP + self.radians_offset
    }

    pub fn end_angle(&self) -> f64 {
        TOP + FULL_TURN - self.radians_offset
    }

    pub fn angle_range(&self) -> f64 {
        self.end_angle() - self.start_angle()
    }

    /// Bisector of the open gap. Raw angles past it belong to the other
    /// end of the arc.
    pub fn knob_mid_angle(&self) -> f64 {
        (FULL_TURN + self.start_angle() - self.end_angle()) / 2.0 + self.end_angle()
    }

    pub fn contains_angle(&self, angle: f64) -> bool {
        (self.start_angle()..=self.end_angle()).contains(&angle)
    }
}
