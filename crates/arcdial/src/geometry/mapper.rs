//! Conversions between slider values and arc angles.
//!
//! Everything here is pure. The only clamping happens in [`clamp_value`];
//! [`angle_to_value`] leaves that to the caller.

use super::range::RangeModel;

/// Rescales `value` to `[0, 1]` relative to the range bounds.
pub fn normalized_value(value: f64, range: &RangeModel) -> f64 {
    (value - range.minimum_value()) / range.value_range()
}

/// Lands in `[start_angle, end_angle]` whenever `value` is within bounds.
pub fn value_to_angle(value: f64, range: &RangeModel) -> f64 {
    normalized_value(value, range) * range.angle_range() + range.start_angle()
}

pub fn angle_to_value(angle: f64, range: &RangeModel) -> f64 {
    (angle - range.start_angle()) / range.angle_range() * range.value_range()
        + range.minimum_value()
}

pub fn clamp_value(value: f64, range: &RangeModel) -> f64 {
    range.minimum_value().max(range.maximum_value().min(value))
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f64 = 1e-9;

    fn ranges() -> Vec<RangeModel> {
        vec![
            RangeModel::default(),
            RangeModel::new(-1.0, 1.0, 0.3).unwrap(),
            RangeModel::new(0.0, 1e6, 2.9).unwrap(),
        ]
    }

    #[test]
    fn test_value_angle_roundtrip() {
        for range in ranges() {
            for i in 0..=100 {
                let value = range.minimum_value() + range.value_range() * i as f64 / 100.0;
                let back = angle_to_value(value_to_angle(value, &range), &range);
                assert!(
                    (back - value).abs() <= EPS * range.value_range().max(1.0),
                    "{value} -> {back}"
                );
            }
        }
    }

    #[test]
    fn test_angle_stays_on_arc() {
        for range in ranges() {
            for i in 0..=50 {
                let value = range.minimum_value() + range.value_range() * i as f64 / 50.0;
                let angle = value_to_angle(value, &range);
                assert!(angle >= range.start_angle() - EPS && angle <= range.end_angle() + EPS);
            }
            assert_eq!(
                value_to_angle(range.minimum_value(), &range),
                range.start_angle()
            );
        }
    }

    #[test]
    fn test_normalized_midpoint() {
        let range = RangeModel::new(100.0, 300.0, 0.0).unwrap();
        assert_eq!(normalized_value(200.0, &range), 0.5);
        assert_eq!(normalized_value(100.0, &range), 0.0);
        assert_eq!(normalized_value(300.0, &range), 1.0);
    }

    #[test]
    fn test_angle_to_value_does_not_clamp() {
        let range = RangeModel::default();
        let beyond = angle_to_value(range.end_angle() + 1.0, &range);
        assert!(beyond > range.maximum_value());
        assert_eq!(clamp_value(beyond, &range), range.maximum_value());
    }

    #[test]
    fn test_clamp_value() {
        let range = RangeModel::default();
        assert_eq!(clamp_value(0.0, &range), 100.0);
        assert_eq!(clamp_value(1000.0, &range), 300.0);
        assert_eq!(clamp_value(150.5, &range), 150.5);
    }
}
