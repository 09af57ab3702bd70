use super::*;

const CURVES: [Easing; 5] = [
    Easing::Linear,
    Easing::Ease,
    Easing::EaseIn,
    Easing::EaseOut,
    Easing::EaseInOut,
];

#[test]
fn curves_pin_their_endpoints() {
    for easing in CURVES {
        assert_eq!(easing.transform(0.0), 0.0, "{easing:?}");
        assert_eq!(easing.transform(1.0), 1.0, "{easing:?}");
        assert_eq!(easing.transform(-0.5), 0.0, "{easing:?}");
        assert_eq!(easing.transform(1.5), 1.0, "{easing:?}");
    }
}

#[test]
fn curves_are_monotonic() {
    for easing in CURVES {
        let mut previous = 0.0;
        for step in 1..=50 {
            let value = easing.transform(step as f32 / 50.0);
            assert!(
                value + 1e-4 >= previous,
                "{easing:?} went backwards at step {step}: {previous} -> {value}"
            );
            previous = value;
        }
    }
}

#[test]
fn ease_out_front_loads_progress() {
    let midpoint = Easing::EaseOut.transform(0.5);
    assert!(midpoint > 0.5, "ease-out midpoint was {midpoint}");
    let midpoint = Easing::EaseIn.transform(0.5);
    assert!(midpoint < 0.5, "ease-in midpoint was {midpoint}");
}

#[test]
fn default_transition_is_300ms_ease_out() {
    let transition = Transition::default();
    assert_eq!(transition.duration_millis, 300);
    assert_eq!(transition.easing, Easing::EaseOut);
}

#[test]
fn value_at_settles_on_target() {
    let transition = Transition::default();
    assert_eq!(transition.value_at(-120.0, -300.0, 0), -120.0);
    assert_eq!(transition.value_at(-120.0, -300.0, 300), -300.0);
    assert_eq!(transition.value_at(-120.0, -300.0, 10_000), -300.0);

    let halfway = transition.value_at(-120.0, -300.0, 150);
    assert!(halfway < -210.0 && halfway > -300.0, "halfway was {halfway}");
    assert!(!transition.is_finished(299));
    assert!(transition.is_finished(300));
}

#[test]
fn zero_duration_jumps() {
    let transition = Transition::tween(0, Easing::Linear);
    assert_eq!(transition.fraction_at(0), 1.0);
    assert_eq!(transition.value_at(0.0, 50.0, 0), 50.0);
}

#[test]
fn css_form_matches_control_points() {
    assert_eq!(Easing::EaseOut.css(), "cubic-bezier(0, 0, 0.58, 1)");
    assert_eq!(Easing::Ease.css(), "cubic-bezier(0.25, 0.1, 0.25, 1)");
    assert_eq!(Easing::Linear.control_points(), (0.0, 0.0, 1.0, 1.0));
}

#[test]
fn symmetric_curve_passes_through_midpoint() {
    let midpoint = Easing::EaseInOut.transform(0.5);
    assert!((midpoint - 0.5).abs() < 1e-3, "ease-in-out midpoint was {midpoint}");
}
