//! Loss generator tests - scenarios and curve properties

mod common;

use common::{centered_samples, one_sided_samples};
use qloss::core::{
    one_sided_loss, two_sided_loss, LossError, OneSidedOptions, OneSidedSpec, TwoSidedOptions,
    TwoSidedSpec,
};

// ============================================================================
// Two-Sided Scenarios
// ============================================================================

#[test]
fn test_two_sided_centered_process() {
    let spec = TwoSidedSpec::new(10.0, 20.0).unwrap();
    let report = two_sided_loss(&centered_samples(), &spec, &TwoSidedOptions::default()).unwrap();

    assert_eq!(report.target, 15.0);
    assert_eq!(report.statistics.mean, 15.0);
    assert_eq!(report.statistics.std_dev, 2.0);
    assert_eq!(report.statistics.slope_at_mean, 0.0);
    assert_eq!(report.statistics.average_loss, 4.0);
}

#[test]
fn test_two_sided_mean_on_usl_has_zero_slope() {
    let spec = TwoSidedSpec::new(10.0, 20.0).unwrap();
    let report = two_sided_loss(&[19.0, 21.0], &spec, &TwoSidedOptions::default()).unwrap();

    assert_eq!(report.statistics.mean, 20.0);
    assert_eq!(report.statistics.slope_at_mean, 0.0);
    // The curve itself stays at the boundary value from USL on
    let past_usl = report.curve.points().last().unwrap().y;
    assert_eq!(past_usl, 250.0);
    // mean off target by 5, s = 1
    assert_eq!(report.statistics.average_loss, 26.0);
}

#[test]
fn test_two_sided_mean_on_lsl_has_zero_slope() {
    let spec = TwoSidedSpec::new(10.0, 20.0).unwrap();
    let report = two_sided_loss(&[10.0], &spec, &TwoSidedOptions::default()).unwrap();
    assert_eq!(report.statistics.slope_at_mean, 0.0);
}

#[test]
fn test_two_sided_invalid_range() {
    let err = TwoSidedSpec::new(10.0, 5.0).unwrap_err();
    assert!(matches!(err, LossError::InvalidRange { .. }));
}

#[test]
fn test_two_sided_empty_sample() {
    let spec = TwoSidedSpec::new(10.0, 20.0).unwrap();
    let err = two_sided_loss(&[], &spec, &TwoSidedOptions::default()).unwrap_err();
    assert_eq!(err, LossError::EmptySample);
}

#[test]
fn test_two_sided_target_follows_precision() {
    let spec = TwoSidedSpec::new(1.0, 1.25).unwrap();
    let coarse = two_sided_loss(&[1.1], &spec, &TwoSidedOptions::default()).unwrap();
    let fine = two_sided_loss(
        &[1.1],
        &spec,
        &TwoSidedOptions {
            precision: 3,
            ..Default::default()
        },
    )
    .unwrap();
    assert_eq!(coarse.target, 1.1);
    assert_eq!(fine.target, 1.125);
}

// ============================================================================
// One-Sided Scenarios
// ============================================================================

#[test]
fn test_one_sided_mean_inside_tolerance() {
    let spec = OneSidedSpec::new(0.0, 10.0).unwrap();
    let report = one_sided_loss(&one_sided_samples(), &spec, &OneSidedOptions::default()).unwrap();

    assert_eq!(report.tolerance, 10.0);
    assert_eq!(report.statistics.mean, 5.0);
    assert_eq!(report.statistics.std_dev, 1.0);
    assert_eq!(report.statistics.slope_at_mean, 250.0);
    assert_eq!(report.statistics.average_loss, 26.0);
}

#[test]
fn test_one_sided_mean_below_target() {
    let spec = OneSidedSpec::new(0.0, 10.0).unwrap();
    let report = one_sided_loss(&[-3.0], &spec, &OneSidedOptions::default()).unwrap();
    assert_eq!(report.statistics.mean, -3.0);
    assert_eq!(report.statistics.slope_at_mean, 0.0);
    assert_eq!(report.statistics.average_loss, 0.0);
}

#[test]
fn test_one_sided_mean_at_limit_takes_quadratic_branch() {
    let spec = OneSidedSpec::new(0.0, 10.0).unwrap();
    let report = one_sided_loss(&[10.0], &spec, &OneSidedOptions::default()).unwrap();
    assert_eq!(report.statistics.slope_at_mean, 1000.0);
}

#[test]
fn test_one_sided_mean_past_limit() {
    let spec = OneSidedSpec::new(0.0, 10.0).unwrap();
    let report = one_sided_loss(&[12.0], &spec, &OneSidedOptions::default()).unwrap();
    assert_eq!(report.statistics.slope_at_mean, 0.0);
    assert_eq!(report.statistics.average_loss, 144.0);
}

#[test]
fn test_one_sided_invalid_range() {
    assert!(matches!(
        OneSidedSpec::new(5.0, 5.0),
        Err(LossError::InvalidRange { .. })
    ));
}

// ============================================================================
// Curve Properties
// ============================================================================

#[test]
fn test_two_sided_flat_outside_limits() {
    let spec = TwoSidedSpec::new(10.0, 20.0).unwrap();
    let report = two_sided_loss(&[15.0], &spec, &TwoSidedOptions::default()).unwrap();
    let boundary = spec.loss_function(1).loss_at(10.0);

    for p in report.curve.points() {
        if p.x <= 10.0 || p.x >= 20.0 {
            assert_eq!(p.y, boundary, "x = {}", p.x);
        }
        assert!(p.y >= 0.0);
    }
}

#[test]
fn test_two_sided_symmetric_about_target() {
    let loss = TwoSidedSpec::new(10.0, 20.0).unwrap().loss_function(1);
    for d in [0.5, 1.0, 2.5, 4.75, 6.0, 12.0] {
        assert_eq!(loss.loss_at(15.0 + d), loss.loss_at(15.0 - d), "d = {}", d);
    }
}

#[test]
fn test_two_sided_interior_monotone_in_distance() {
    let spec = TwoSidedSpec::new(10.0, 20.0).unwrap();
    let report = two_sided_loss(&[15.0], &spec, &TwoSidedOptions::default()).unwrap();
    let mut interior: Vec<_> = report
        .curve
        .points()
        .iter()
        .filter(|p| p.x > 10.0 && p.x < 20.0)
        .map(|p| ((p.x - report.target).abs(), p.y))
        .collect();
    interior.sort_by(|a, b| a.0.total_cmp(&b.0));
    assert!(interior.windows(2).all(|w| w[1].1 >= w[0].1));
}

#[test]
fn test_one_sided_zero_below_target_and_capped_past_limit() {
    let spec = OneSidedSpec::new(0.0, 10.0).unwrap();
    let report = one_sided_loss(&[5.0], &spec, &OneSidedOptions::default()).unwrap();
    let cap = report.tolerance * 10.0_f64.powi(2);

    for p in report.curve.points() {
        if p.x <= 0.0 {
            assert_eq!(p.y, 0.0, "x = {}", p.x);
        }
        if p.x >= 10.0 {
            assert_eq!(p.y, cap, "x = {}", p.x);
        }
    }
    let ys: Vec<f64> = report.curve.ys().collect();
    assert!(ys.windows(2).all(|w| w[1] >= w[0]));
}

#[test]
fn test_generators_are_idempotent() {
    let two = TwoSidedSpec::new(-2.0, 3.0).unwrap();
    let samples = [0.3, 0.7, -1.2, 2.9, 1.1];
    let a = two_sided_loss(&samples, &two, &TwoSidedOptions::default()).unwrap();
    let b = two_sided_loss(&samples, &two, &TwoSidedOptions::default()).unwrap();
    assert_eq!(a, b);

    let one = OneSidedSpec::new(1.0, 4.0).unwrap();
    let c = one_sided_loss(&samples, &one, &OneSidedOptions::default()).unwrap();
    let d = one_sided_loss(&samples, &one, &OneSidedOptions::default()).unwrap();
    assert_eq!(c, d);
}

#[test]
fn test_configurable_resolution() {
    let spec = TwoSidedSpec::new(0.0, 1.0).unwrap();
    let options = TwoSidedOptions {
        points: 50,
        buffer: 0.0,
        ..Default::default()
    };
    let report = two_sided_loss(&[0.5], &spec, &options).unwrap();
    assert_eq!(report.curve.len(), 50);
    assert_eq!(report.curve.domain(), Some((0.0, 1.0)));
}

#[test]
fn test_report_serializes() {
    let spec = OneSidedSpec::new(0.0, 10.0).unwrap();
    let options = OneSidedOptions {
        points: 3,
        ..Default::default()
    };
    let report = one_sided_loss(&[5.0], &spec, &options).unwrap();
    let json = serde_json::to_value(&report).unwrap();
    assert_eq!(json["variant"], "one-sided");
    assert_eq!(json["bounds"]["kind"], "one-sided");
    assert_eq!(json["statistics"]["slope_at_mean"], 250.0);
    assert_eq!(json["curve"]["points"].as_array().unwrap().len(), 3);
}
