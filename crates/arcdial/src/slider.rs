//! The slider control: one range, one state, one tracker.
//!
//! All mutation goes through [`Slider::handle_gesture`],
//! [`Slider::set_value`] and [`Slider::reconfigure`]. Each returns what the
//! renderer should do; state is fully updated before the call returns.

use crate::animation::{AnimationIntent, AnimationIntentBuilder};
use crate::delegate::{Identity, ValueTransform};
use crate::geometry::RangeModel;
use crate::gesture::{GestureSample, RotationTracker, Step, TrackerState};
use crate::state::{Progress, SliderState, Transition};
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ValueChange {
    pub value: f64,
    pub progress: Progress,
    pub knob_angle: f64,
    pub animation: AnimationIntent,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum SliderEvent {
    CancelAnimation,
    ValueChanged(ValueChange),
    Reconfigured {
        range: RangeModel,
        change: ValueChange,
    },
}

#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct SliderAction {
    pub cancel_animation: bool,
    pub change: Option<ValueChange>,
}

impl SliderAction {
    /// Notifications in delivery order: cancellation first.
    pub fn events(&self) -> impl Iterator<Item = SliderEvent> {
        self.cancel_animation
            .then_some(SliderEvent::CancelAnimation)
            .into_iter()
            .chain(self.change.map(SliderEvent::ValueChanged))
    }
}

#[derive(Debug, Clone)]
pub struct Slider<T = Identity> {
    range: RangeModel,
    state: SliderState,
    tracker: RotationTracker,
    animator: AnimationIntentBuilder,
    transform: T,
    touch_enabled: bool,
}

impl Slider<Identity> {
    /// Starts at the range minimum.
    pub fn new(range: RangeModel) -> Self {
        Self {
            state: SliderState::new(range.minimum_value(), &range),
            range,
            tracker: RotationTracker::default(),
            animator: AnimationIntentBuilder::default(),
            transform: Identity,
            touch_enabled: true,
        }
    }
}

impl Default for Slider<Identity> {
    fn default() -> Self {
        Self::new(RangeModel::default())
    }
}

impl<T: ValueTransform> Slider<T> {
    pub fn with_value(mut self, value: f64) -> Self {
        self.state = SliderState::new(value, &self.range);
        self
    }

    pub fn with_transform<U: ValueTransform>(self, transform: U) -> Slider<U> {
        Slider {
            range: self.range,
            state: self.state,
            tracker: self.tracker,
            animator: self.animator,
            transform,
            touch_enabled: self.touch_enabled,
        }
    }

    pub fn with_animator(mut self, animator: AnimationIntentBuilder) -> Self {
        self.animator = animator;
        self
    }

    pub fn with_tracker(mut self, tracker: RotationTracker) -> Self {
        self.tracker = tracker;
        self
    }

    pub fn value(&self) -> f64 {
        self.state.value()
    }

    pub fn knob_angle(&self) -> f64 {
        self.state.knob_angle()
    }

    pub fn progress(&self) -> Progress {
        self.state.progress(&self.range)
    }

    pub fn range(&self) -> &RangeModel {
        &self.range
    }

    pub fn state(&self) -> &SliderState {
        &self.state
    }

    pub fn tracker_state(&self) -> TrackerState {
        self.tracker.state()
    }

    pub fn is_touch_enabled(&self) -> bool {
        self.touch_enabled
    }

    pub fn set_transform(&mut self, transform: T) {
        self.transform = transform;
    }

    pub fn set_animator(&mut self, animator: AnimationIntentBuilder) {
        self.animator = animator;
    }

    pub fn set_tracker(&mut self, tracker: RotationTracker) {
        self.tracker = tracker;
    }

    /// Turning touch off drops any gesture in progress.
    pub fn set_touch_enabled(&mut self, enabled: bool) {
        if !enabled {
            self.tracker.reset();
        }
        self.touch_enabled = enabled;
    }

    pub fn set_value(&mut self, value: f64, animated: bool) -> ValueChange {
        let proposed = self.transform.transform(value);
        let transition = self.state.set_value(proposed, &self.range);
        self.change(&transition, animated)
    }

    pub fn handle_gesture(&mut self, sample: GestureSample) -> SliderAction {
        if !self.touch_enabled {
            log::trace!("Touch disabled, dropping {} sample", sample.phase);
            return SliderAction::default();
        }

        let outcome = self
            .tracker
            .process(sample, &self.range, self.state.knob_angle());

        let change = match outcome.step {
            Step::Accepted { value, .. } => {
                let proposed = self.transform.transform(value);
                let transition = self.state.apply_gesture_value(proposed, &self.range);
                log::debug!("Gesture moved value to {}", self.state.value());
                Some(self.change(&transition, false))
            }
            Step::Rejected { .. } | Step::Ignored => None,
        };

        SliderAction {
            cancel_animation: outcome.cancel_animation,
            change,
        }
    }

    /// Swaps in a new range. Any gesture in progress is dropped and the
    /// current value is clamped into the new bounds.
    pub fn reconfigure(&mut self, range: RangeModel) -> ValueChange {
        self.tracker.reset();
        let old = std::mem::replace(&mut self.range, range);
        let transition = self.state.rebase(&old, &self.range);
        log::info!(
            "Range reconfigured to [{}, {}], offset {}",
            range.minimum_value(),
            range.maximum_value(),
            range.radians_offset()
        );
        self.change(&transition, false)
    }

    fn change(&self, transition: &Transition, animated: bool) -> ValueChange {
        ValueChange {
            value: transition.to.value,
            progress: transition.to.progress,
            knob_angle: transition.to.knob_angle,
            animation: self.animator.build(transition, animated),
        }
    }
}
