use crate::geometry::{self, RangeModel};
use derive_more::{Display, From, Into};
use serde::{Deserialize, Serialize};

/// Value rescaled to `[0, 1]` over the range bounds.
#[derive(
    Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize, Display, From, Into,
)]
#[serde(transparent)]
pub struct Progress(f64);

crate::impl_scalar_newtype!(Progress);

impl Progress {
    pub fn of(value: f64, range: &RangeModel) -> Self {
        Self(geometry::normalized_value(value, range))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Snapshot {
    pub value: f64,
    pub progress: Progress,
    pub knob_angle: f64,
}

/// State before and after one mutation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Transition {
    pub from: Snapshot,
    pub to: Snapshot,
}

impl Transition {
    pub fn is_noop(&self) -> bool {
        self.from == self.to
    }
}

/// Current value and knob angle. `knob_angle` is always derived from
/// `value`, and `value` is always inside the range bounds.
#[derive(Debug, Clone, PartialEq)]
pub struct SliderState {
    value: f64,
    knob_angle: f64,
    previous_knob_angle: f64,
}

impl SliderState {
    pub fn new(initial_value: f64, range: &RangeModel) -> Self {
        let value = geometry::clamp_value(initial_value, range);
        let knob_angle = geometry::value_to_angle(value, range);
        Self {
            value,
            knob_angle,
            previous_knob_angle: knob_angle,
        }
    }

    pub fn value(&self) -> f64 {
        self.value
    }

    pub fn knob_angle(&self) -> f64 {
        self.knob_angle
    }

    pub fn previous_knob_angle(&self) -> f64 {
        self.previous_knob_angle
    }

    pub fn progress(&self, range: &RangeModel) -> Progress {
        Progress::of(self.value, range)
    }

    pub fn snapshot(&self, range: &RangeModel) -> Snapshot {
        Snapshot {
            value: self.value,
            progress: self.progress(range),
            knob_angle: self.knob_angle,
        }
    }

    pub fn apply_gesture_value(&mut self, new_value: f64, range: &RangeModel) -> Transition {
        self.mutate(new_value, range, range)
    }

    pub fn set_value(&mut self, new_value: f64, range: &RangeModel) -> Transition {
        self.mutate(new_value, range, range)
    }

    /// Re-derives value and angle after the range changed underneath.
    pub fn rebase(&mut self, old_range: &RangeModel, new_range: &RangeModel) -> Transition {
        self.mutate(self.value, old_range, new_range)
    }

    fn mutate(&mut self, new_value: f64, old_range: &RangeModel, range: &RangeModel) -> Transition {
        let from = self.snapshot(old_range);

        self.previous_knob_angle = self.knob_angle;
        self.value = geometry::clamp_value(new_value, range);
        self.knob_angle = geometry::value_to_angle(self.value, range);

        Transition {
            from,
            to: self.snapshot(range),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_value_is_clamped() {
        let range = RangeModel::default();
        let state = SliderState::new(0.0, &range);
        assert_eq!(state.value(), 100.0);
        assert_eq!(state.knob_angle(), range.start_angle());
        assert_eq!(state.previous_knob_angle(), state.knob_angle());
    }

    #[test]
    fn test_set_value_midpoint() {
        let range = RangeModel::new(100.0, 300.0, 0.0).unwrap();
        let mut state = SliderState::new(100.0, &range);
        let transition = state.set_value(200.0, &range);
        assert_eq!(state.value(), 200.0);
        assert_eq!(state.progress(&range), Progress::new(0.5));
        assert_eq!(transition.from.progress.get(), 0.0);
        assert_eq!(transition.to.progress.get(), 0.5);
        assert_eq!(state.previous_knob_angle(), range.start_angle());
    }

    #[test]
    fn test_out_of_range_values_clamp() {
        let range = RangeModel::default();
        let mut state = SliderState::new(150.0, &range);
        state.set_value(range.minimum_value() - 100.0, &range);
        assert_eq!(state.value(), range.minimum_value());
        state.apply_gesture_value(range.maximum_value() + 100.0, &range);
        assert_eq!(state.value(), range.maximum_value());
        assert!((state.knob_angle() - range.end_angle()).abs() < 1e-12);
    }

    #[test]
    fn test_knob_angle_tracks_value() {
        let range = RangeModel::new(-5.0, 5.0, 0.4).unwrap();
        let mut state = SliderState::new(0.0, &range);
        for v in [-7.0, -5.0, -1.5, 0.0, 2.25, 5.0, 9.0] {
            state.set_value(v, &range);
            assert_eq!(
                state.knob_angle(),
                geometry::value_to_angle(state.value(), &range)
            );
        }
    }

    #[test]
    fn test_rebase_reclamps_into_new_range() {
        let old = RangeModel::new(0.0, 100.0, 0.0).unwrap();
        let new = RangeModel::new(0.0, 50.0, 0.5).unwrap();
        let mut state = SliderState::new(80.0, &old);
        let transition = state.rebase(&old, &new);
        assert_eq!(state.value(), 50.0);
        assert!((state.knob_angle() - new.end_angle()).abs() < 1e-12);
        assert_eq!(transition.from.progress.get(), 0.8);
        assert_eq!(transition.to.progress.get(), 1.0);
    }
}
