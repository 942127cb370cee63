pub mod animation;
pub mod delegate;
pub mod geometry;
pub mod gesture;
pub mod macros;
pub mod slider;
pub mod state;

pub use animation::{AnimationIntent, AnimationIntentBuilder, Easing};
pub use delegate::{Identity, SnapToStep, ValueTransform};
pub use geometry::{RangeError, RangeModel};
pub use gesture::{GesturePhase, GestureSample, Point, RotationTracker, TrackerState};
pub use slider::{Slider, SliderAction, SliderEvent, ValueChange};
pub use state::{Progress, SliderState};
