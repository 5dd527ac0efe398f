use super::*;
use crate::foundation::config::Tuning;
use crate::foundation::core::ContainerSize;
use rand::SeedableRng;
use rand::rngs::StdRng;

fn dims() -> Dimensions {
    Dimensions::resolve(ContainerSize::new(480.0, 350.0), &Tuning::default())
}

fn sorted_delay_slots(positions: &[ScatterPosition], step: f64) -> Vec<usize> {
    let mut slots: Vec<usize> = positions
        .iter()
        .map(|p| (p.delay_secs / step).round() as usize)
        .collect();
    slots.sort_unstable();
    slots
}

#[test]
fn returns_exactly_n_positions() {
    let tuning = ScatterTuning::default();
    let mut rng = StdRng::seed_from_u64(7);
    for n in [0usize, 1, 2, 7, 31] {
        assert_eq!(generate_positions(n, &dims(), &tuning, &mut rng).len(), n);
    }
}

#[test]
fn delays_are_a_permutation_of_slots() {
    let tuning = ScatterTuning::default();
    for seed in 0..20u64 {
        let mut rng = StdRng::seed_from_u64(seed);
        let positions = generate_positions(7, &dims(), &tuning, &mut rng);
        assert_eq!(
            sorted_delay_slots(&positions, tuning.delay_step_secs),
            (0..7).collect::<Vec<_>>()
        );
        for p in &positions {
            let slot = (p.delay_secs / tuning.delay_step_secs).round();
            assert!((p.delay_secs - slot * tuning.delay_step_secs).abs() < 1e-12);
        }
    }
}

#[test]
fn delay_order_is_not_always_identity() {
    let tuning = ScatterTuning::default();
    let shuffled = (0..20u64).any(|seed| {
        let mut rng = StdRng::seed_from_u64(seed);
        let positions = generate_positions(7, &dims(), &tuning, &mut rng);
        positions
            .iter()
            .enumerate()
            .any(|(i, p)| (p.delay_secs - i as f64 * tuning.delay_step_secs).abs() > 1e-9)
    });
    assert!(shuffled);
}

#[test]
fn seeded_generation_is_reproducible() {
    let tuning = ScatterTuning::default();
    let a = generate_positions(7, &dims(), &tuning, &mut StdRng::seed_from_u64(42));
    let b = generate_positions(7, &dims(), &tuning, &mut StdRng::seed_from_u64(42));
    assert_eq!(a, b);
}

#[test]
fn positions_follow_their_base_angles() {
    let tuning = ScatterTuning::default();
    let d = dims();
    let n = 7;
    let mut rng = StdRng::seed_from_u64(3);
    let positions = generate_positions(n, &d, &tuning, &mut rng);

    let half_window = tuning.angle_variation / 2.0;
    let min_r = (d.scatter_radius - 0.5 * d.random_delta * tuning.spread_multiplier)
        * tuning.spread_multiplier;
    let max_r = (d.scatter_radius + 0.5 * d.random_delta * tuning.spread_multiplier)
        * tuning.spread_multiplier;

    for (i, p) in positions.iter().enumerate() {
        // Back to pixels; the 2-decimal rounding adds a little slack.
        let x = p.x_percent * d.chart_width / 100.0;
        let y = p.y_percent * d.chart_height / 100.0;
        let r = (x * x + y * y).sqrt();
        assert!(r >= min_r - 1.0 && r <= max_r + 1.0, "radius {r}");

        let base = i as f64 / n as f64 * std::f64::consts::TAU;
        let mut delta = y.atan2(x) - base;
        while delta > std::f64::consts::PI {
            delta -= std::f64::consts::TAU;
        }
        while delta < -std::f64::consts::PI {
            delta += std::f64::consts::TAU;
        }
        assert!(delta.abs() <= half_window + 1e-3, "angle delta {delta}");

        assert!(p.rotation_deg.abs() <= tuning.max_rotation / 2.0);
    }
}

#[test]
fn offsets_are_rounded_to_two_places() {
    let tuning = ScatterTuning::default();
    let mut rng = StdRng::seed_from_u64(11);
    for p in generate_positions(9, &dims(), &tuning, &mut rng) {
        for v in [p.x_percent, p.y_percent] {
            let scaled = v * 100.0;
            assert!((scaled - scaled.round()).abs() < 1e-6, "{v}");
        }
    }
}

#[test]
fn primary_pass_is_not_clamped() {
    // A tall, narrow container pushes vertical offsets far past the resize bounds.
    let mut tuning = Tuning::default();
    tuning.scatter.spread_multiplier = 6.0;
    let d = Dimensions::resolve(ContainerSize::new(400.0, 40.0), &tuning);
    let mut rng = StdRng::seed_from_u64(5);
    let positions = generate_positions(8, &d, &tuning.scatter, &mut rng);
    assert!(positions.iter().any(|p| p.y_percent.abs() > 180.0));
}

#[test]
fn bounded_pulls_to_the_box_and_never_expands() {
    let bounds = OffsetBounds::default();
    let far = ScatterPosition {
        x_percent: 500.0,
        y_percent: -900.0,
        rotation_deg: 0.0,
        delay_secs: 0.0,
    };
    assert_eq!(far.bounded(&bounds), PercentOffset::new(180.0, -180.0));

    let far_left = ScatterPosition {
        x_percent: -1000.0,
        y_percent: 200.0,
        ..far
    };
    assert_eq!(far_left.bounded(&bounds), PercentOffset::new(-810.0, 180.0));

    let inside = ScatterPosition {
        x_percent: -42.5,
        y_percent: 17.25,
        ..far
    };
    assert_eq!(inside.bounded(&bounds), inside.offset());
}
