//! Hooks that rewrite a proposed value before the slider applies it.

/// Called synchronously with every proposed value; the returned value is
/// what gets clamped and applied.
pub trait ValueTransform {
    fn transform(&self, proposed: f64) -> f64;
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Identity;

impl ValueTransform for Identity {
    fn transform(&self, proposed: f64) -> f64 {
        proposed
    }
}

impl<T: ValueTransform> ValueTransform for Option<T> {
    fn transform(&self, proposed: f64) -> f64 {
        match self {
            Some(inner) => inner.transform(proposed),
            None => proposed,
        }
    }
}

#[derive(Clone, Copy)]
pub struct FromFn<F>(F);

impl<F> std::fmt::Debug for FromFn<F> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("FromFn")
    }
}

pub fn from_fn<F: Fn(f64) -> f64>(f: F) -> FromFn<F> {
    FromFn(f)
}

impl<F: Fn(f64) -> f64> ValueTransform for FromFn<F> {
    fn transform(&self, proposed: f64) -> f64 {
        (self.0)(proposed)
    }
}

/// Snaps to `origin + k * step`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SnapToStep {
    origin: f64,
    step: f64,
}

impl SnapToStep {
    /// `None` unless `step` is finite and positive.
    pub fn new(origin: f64, step: f64) -> Option<Self> {
        (step.is_finite() && step > 0.0 && origin.is_finite()).then_some(Self { origin, step })
    }

    pub fn step(&self) -> f64 {
        self.step
    }
}

impl ValueTransform for SnapToStep {
    fn transform(&self, proposed: f64) -> f64 {
        self.origin + ((proposed - self.origin) / self.step).round() * self.step
    }
}
