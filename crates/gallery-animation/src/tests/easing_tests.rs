use super::*;

const ALL: [Easing; 2] = [Easing::LinearEasing, Easing::QuinticOut];

#[test]
fn quintic_out_hits_endpoints() {
    assert_eq!(Easing::QuinticOut.transform(0.0), 0.0);
    assert_eq!(Easing::QuinticOut.transform(1.0), 1.0);
}

#[test]
fn quintic_out_matches_formula() {
    let t = 0.3f32;
    let expected = (t - 1.0).powi(5) + 1.0;
    assert!((Easing::QuinticOut.transform(t) - expected).abs() < 1e-6);
}

#[test]
fn quintic_out_clamps_out_of_range_input() {
    assert_eq!(Easing::QuinticOut.transform(-0.5), 0.0);
    assert_eq!(Easing::QuinticOut.transform(1.5), 1.0);
}

#[test]
fn every_curve_is_monotonic() {
    for easing in ALL {
        let mut previous = easing.transform(0.0);
        for step in 1..=200 {
            let value = easing.transform(step as f32 / 200.0);
            assert!(
                value >= previous - 1e-5,
                "{easing:?} decreased at step {step}: {previous} -> {value}"
            );
            previous = value;
        }
        assert!((previous - 1.0).abs() < 1e-4, "{easing:?} ended at {previous}");
    }
}

#[test]
fn quintic_out_front_loads_progress() {
    // Half the time covers almost all of the distance.
    assert!(Easing::QuinticOut.transform(0.5) > 0.96);
    assert!(Easing::QuinticOut.transform(0.5) > Easing::LinearEasing.transform(0.5));
}

#[test]
fn linear_clamps_out_of_range_input() {
    assert_eq!(Easing::LinearEasing.transform(-0.5), 0.0);
    assert_eq!(Easing::LinearEasing.transform(0.25), 0.25);
    assert_eq!(Easing::LinearEasing.transform(1.5), 1.0);
}

#[test]
fn default_is_quintic_out() {
    assert_eq!(Easing::default(), Easing::QuinticOut);
}
