use arcdial::delegate::from_fn;
use arcdial::geometry::{FULL_TURN, value_to_angle};
use arcdial::gesture::angle_at;
use arcdial::{GesturePhase, GestureSample, Point, RangeModel, Slider, SliderEvent, TrackerState};
use std::f64::consts::{FRAC_PI_2, PI};

const EPS: f64 = 1e-9;

/// Raw angle as atan2 would report it, in (-π, π].
fn reported(angle: f64) -> f64 {
    (angle + PI).rem_euclid(FULL_TURN) - PI
}

#[test]
fn drag_clockwise_through_full_arc() {
    let range = RangeModel::new(0.0, 100.0, 0.3).unwrap();
    let mut slider = Slider::new(range);

    let mut angle = range.start_angle();
    slider.handle_gesture(GestureSample::began(reported(angle)));

    let mut last = slider.value();
    while angle < range.end_angle() + 0.2 {
        angle += 0.05;
        let action = slider.handle_gesture(GestureSample::changed(reported(angle)));
        let value = action.change.map(|c| c.value).unwrap_or(last);
        assert!(value >= last - EPS, "value went backwards at {angle}");
        last = value;
    }
    slider.handle_gesture(GestureSample::ended());

    assert_eq!(slider.value(), 100.0);
    assert_eq!(slider.tracker_state(), TrackerState::Idle);
}

#[test]
fn finger_in_gap_pins_to_nearest_end() {
    let range = RangeModel::new(0.0, 100.0, 0.5).unwrap();
    let mut slider = Slider::new(range).with_value(99.0);
    let knob = slider.knob_angle();

    slider.handle_gesture(GestureSample::began(reported(knob)));
    // Left of the bisector, still inside the gap
    let action = slider.handle_gesture(GestureSample::changed(-FRAC_PI_2 - 0.1));
    assert_eq!(action.change.map(|c| c.value), Some(100.0));
}

#[test]
fn crossing_gap_rejects_jump_to_other_end() {
    let range = RangeModel::new(0.0, 100.0, 0.1).unwrap();
    let mut slider = Slider::new(range).with_value(100.0);
    slider.handle_gesture(GestureSample::began(reported(slider.knob_angle())));
    let (value, knob) = (slider.value(), slider.knob_angle());

    // Past the bisector, the start of the arc
    let action = slider.handle_gesture(GestureSample::changed(-FRAC_PI_2 + 0.05));
    assert!(action.change.is_none());
    assert_eq!(slider.value(), value);
    assert_eq!(slider.knob_angle(), knob);
}

#[test]
fn wraparound_applies_past_mid_angle() {
    let range = RangeModel::new(0.0, 100.0, 0.2).unwrap();
    let mid = range.knob_mid_angle();
    let mut slider = Slider::new(range);

    // Knob near the start; mid + 0.01 corrects to just right of the gap
    slider.handle_gesture(GestureSample::began(range.start_angle()));
    let action = slider.handle_gesture(GestureSample::changed(mid + 0.01));
    let change = action.change.unwrap();
    assert_eq!(change.value, 0.0);
    assert!((change.knob_angle - range.start_angle()).abs() < EPS);
}

#[test]
fn repeated_sample_does_not_drift() {
    let range = RangeModel::default();
    let mut slider = Slider::new(range).with_value(180.0);
    let target = slider.knob_angle() + 0.3;

    slider.handle_gesture(GestureSample::began(slider.knob_angle()));
    let first = slider.handle_gesture(GestureSample::changed(target));
    let second = slider.handle_gesture(GestureSample::changed(target));
    assert_eq!(
        first.change.map(|c| c.value),
        second.change.map(|c| c.value)
    );
}

#[test]
fn samples_after_end_are_ignored() {
    let mut slider = Slider::default().with_value(200.0);
    let knob = slider.knob_angle();
    slider.handle_gesture(GestureSample::began(knob));
    slider.handle_gesture(GestureSample::cancelled());

    let action = slider.handle_gesture(GestureSample::changed(knob + 0.2));
    assert_eq!(action.events().count(), 0);
    assert_eq!(slider.value(), 200.0);
}

#[test]
fn touch_points_drive_slider() {
    let range = RangeModel::default();
    let center = Point::new(100.0, 100.0);
    let mut slider = Slider::new(range).with_value(200.0);

    // 200 is halfway round: straight down from the center
    let bottom = Point::new(100.0, 180.0);
    assert!((angle_at(bottom, center) - slider.knob_angle()).abs() < EPS);

    let began = GestureSample::at_point(GesturePhase::Began, bottom, center);
    let events: Vec<_> = slider.handle_gesture(began).events().collect();
    assert_eq!(events[0], SliderEvent::CancelAnimation);

    // Slightly left of bottom moves the value up
    let left = Point::new(80.0, 178.0);
    let action = slider.handle_gesture(GestureSample::at_point(
        GesturePhase::Changed,
        left,
        center,
    ));
    assert!(action.change.unwrap().value > 200.0);
}

#[test]
fn doubling_delegate_clamps_result() {
    let range = RangeModel::default();
    let mut slider = Slider::new(range)
        .with_value(140.0)
        .with_transform(from_fn(|v| v * 2.0));
    let angle = value_to_angle(150.0, &range);

    let action = slider.handle_gesture(GestureSample::began(reported(angle)));
    assert_eq!(action.change.unwrap().value, 300.0);
}
