use std::thread;

use approx::{assert_abs_diff_eq, assert_relative_eq};

use beam_core::analysis::{resolve, ResolvedBeam};
use beam_core::beam::{Beam, SupportType};
use beam_core::document::AnalysisSettings;
use beam_core::loads::{DistributedLoad, Distribution, PointForce, PointMoment, ResultantRule};

fn point_loaded(support: SupportType) -> ResolvedBeam {
    let beam = Beam::new(support, 10.0, 1.0)
        .with_force(PointForce::vertical(-10_000.0, 8.0))
        .with_force(PointForce::vertical(-2500.0, 3.0))
        .with_force(PointForce::vertical(1200.0, 6.5));
    resolve(beam, &AnalysisSettings::default()).unwrap()
}

fn mixed_loads(rule: ResultantRule) -> ResolvedBeam {
    let beam = Beam::new(SupportType::SimplySupported, 12.0, 1.0)
        .with_force(PointForce::vertical(-3000.0, 9.0))
        .with_moment(PointMoment::at(1500.0, 4.0))
        .with_distributed(DistributedLoad::between(Distribution::linear(-200.0, -800.0), 1.0, 7.0))
        .with_distributed(DistributedLoad::between(Distribution::polynomial(vec![-50.0, 0.0, -3.0]), 8.0, 11.0));
    let settings = AnalysisSettings {
        resultant_rule: rule,
        ..AnalysisSettings::default()
    };
    resolve(beam, &settings).unwrap()
}

#[test]
fn simply_supported_ends_carry_no_moment() {
    let resolved = point_loaded(SupportType::SimplySupported);
    assert_abs_diff_eq!(resolved.moment_at(0.0), 0.0, epsilon = 1e-9);
    assert_abs_diff_eq!(resolved.moment_at(10.0), 0.0, epsilon = 1e-7);
}

#[test]
fn shear_and_moment_vanish_past_the_last_load() {
    for resolved in [
        point_loaded(SupportType::SimplySupported),
        point_loaded(SupportType::Cantilever),
        mixed_loads(ResultantRule::FarEndSample),
        mixed_loads(ResultantRule::integrated()),
    ] {
        let length = resolved.beam().length();
        assert_abs_diff_eq!(resolved.shear_at(length), 0.0, epsilon = 1e-7);
        assert_abs_diff_eq!(resolved.moment_at(length), 0.0, epsilon = 1e-6);
    }
}

#[test]
fn sampling_is_idempotent() {
    let resolved = mixed_loads(ResultantRule::integrated());
    let forces = resolved.internal_forces();

    let xs: Vec<f64> = (0..=48).map(|i| i as f64 * 0.25).collect();
    let first: Vec<(f64, f64)> = xs.iter().map(|&x| (forces.shear_at(x), forces.moment_at(x))).collect();
    // Reverse order, fresh evaluator
    let again = resolved.internal_forces();
    let mut second: Vec<(f64, f64)> = xs.iter().rev().map(|&x| (again.shear_at(x), again.moment_at(x))).collect();
    second.reverse();

    assert_eq!(first, second);
}

#[test]
fn moment_slope_equals_shear_for_point_loads() {
    let resolved = point_loaded(SupportType::SimplySupported);
    let forces = resolved.internal_forces();
    let h = 1e-5;

    for x in [0.5, 1.5, 2.9, 4.0, 5.5, 7.0, 7.9, 9.0, 9.5] {
        let slope = (forces.moment_at(x + h) - forces.moment_at(x - h)) / (2.0 * h);
        assert_relative_eq!(slope, forces.shear_at(x), max_relative = 1e-6);
    }
}

#[test]
fn moment_slope_equals_shear_under_distributed_loads() {
    let resolved = mixed_loads(ResultantRule::integrated());
    let forces = resolved.internal_forces();
    let h = 1e-5;

    // Away from load points at 1, 4, 7, 8, 9, 11
    for x in [0.5, 2.0, 3.3, 5.0, 6.2, 7.5, 8.6, 10.0, 11.5] {
        let slope = (forces.moment_at(x + h) - forces.moment_at(x - h)) / (2.0 * h);
        assert_relative_eq!(slope, forces.shear_at(x), max_relative = 1e-5, epsilon = 1e-3);
    }
}

#[test]
fn uniform_load_slope_holds_for_far_end_rule() {
    let beam = Beam::new(SupportType::Cantilever, 6.0, 0.5)
        .with_distributed(DistributedLoad::between(Distribution::uniform(-400.0), 2.0, 5.0));
    let resolved = resolve(beam, &AnalysisSettings::default()).unwrap();
    let forces = resolved.internal_forces();
    let h = 1e-5;

    for x in [1.0, 2.5, 3.5, 4.5, 5.5] {
        let slope = (forces.moment_at(x + h) - forces.moment_at(x - h)) / (2.0 * h);
        assert_relative_eq!(slope, forces.shear_at(x), max_relative = 1e-6);
    }
}

#[test]
fn cantilever_fixed_end_moment_shows_at_root() {
    let beam = Beam::new(SupportType::Cantilever, 600.0, 10.0)
        .with_force(PointForce::vertical(-100.0, 600.0))
        .with_moment(PointMoment::at(5000.0, 400.0))
        .with_moment(PointMoment::at(-1000.0, 100.0));
    let resolved = resolve(beam, &AnalysisSettings::default()).unwrap();

    assert_relative_eq!(resolved.moment_at(0.0), -64_000.0);
    assert_relative_eq!(resolved.shear_at(300.0), 100.0);
    // Root moment, shear arm, then the -1000 couple at 100
    assert_relative_eq!(resolved.moment_at(100.0), -64_000.0 + 100.0 * 100.0 - 1000.0);
}

#[test]
fn functions_can_be_sampled_from_many_threads() {
    let resolved = mixed_loads(ResultantRule::integrated());
    let forces = resolved.internal_forces();
    let expected: Vec<f64> = (0..=12).map(|i| forces.moment_at(i as f64)).collect();

    thread::scope(|scope| {
        let handles: Vec<_> = (0..4)
            .map(|_| {
                let m = resolved.internal_forces().moment_fn();
                scope.spawn(move || (0..=12).map(|i| m(i as f64)).collect::<Vec<f64>>())
            })
            .collect();

        for handle in handles {
            assert_eq!(handle.join().unwrap(), expected);
        }
    });
}

#[test]
fn diagram_peaks_for_symmetric_load() {
    let beam = Beam::new(SupportType::SimplySupported, 8.0, 1.0)
        .with_distributed(DistributedLoad::between(Distribution::uniform(-10.0), 0.0, 8.0));
    let resolved = resolve(beam, &AnalysisSettings::default()).unwrap();
    let diagram = resolved.internal_forces().diagram(81);

    // wL^2/8 at midspan, wL/2 at the supports
    assert_relative_eq!(diagram.extrema.max_moment, 80.0, max_relative = 1e-9);
    assert_relative_eq!(diagram.extrema.max_moment_position, 4.0, max_relative = 1e-9);
    assert_relative_eq!(diagram.extrema.peak_shear.abs(), 40.0, max_relative = 1e-9);
    assert_abs_diff_eq!(diagram.extrema.min_moment, 0.0, epsilon = 1e-9);
}
