use std::f64::consts::{FRAC_PI_2, PI};

pub mod mapper;
pub mod range;

pub use mapper::{angle_to_value, clamp_value, normalized_value, value_to_angle};
pub use range::{RangeError, RangeModel};

pub const FULL_TURN: f64 = 2.0 * PI;
pub const TOP: f64 = -FRAC_PI_2; // 12 o'clock, y axis pointing down
pub const DEFAULT_MINIMUM: f64 = 100.0;
pub const DEFAULT_MAXIMUM: f64 = 300.0;
pub const DEFAULT_RADIANS_OFFSET: f64 = 0.0;
