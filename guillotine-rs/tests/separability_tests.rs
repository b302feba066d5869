use guillotine_rs::entities::Tiling;
use guillotine_rs::geometry::primitives::Rect;
use guillotine_rs::io::import::validate_exact_tiling;
use guillotine_rs::separability::{decide, is_guillotine_separable, reference};
use guillotine_rs::util::generator;
use rand::SeedableRng;
use rand::prelude::SmallRng;
use rand::seq::SliceRandom;
use test_case::test_case;

const N_INSTANCES: usize = 50;
const REGION: (i64, i64, i64, i64) = (0, 0, 1000, 600);

fn region() -> Rect {
    let (x_min, y_min, x_max, y_max) = REGION;
    Rect::try_new(x_min, y_min, x_max, y_max).unwrap()
}

#[test_case(0, 8; "8 tiles")]
#[test_case(1, 40; "40 tiles")]
#[test_case(2, 250; "250 tiles")]
fn generated_guillotine_tilings_are_separable(seed: u64, n_target: usize) {
    let mut rng = SmallRng::seed_from_u64(seed);
    for _ in 0..N_INSTANCES {
        let rects = generator::guillotine_tiling(&mut rng, region(), n_target);
        validate_exact_tiling(&rects).unwrap();
        assert!(is_guillotine_separable(&rects));
        assert!(reference::is_separable(&rects));
    }
}

#[test_case(3, 8; "8 tiles")]
#[test_case(4, 40; "40 tiles")]
#[test_case(5, 250; "250 tiles")]
fn pinwheel_hosts_are_never_separable(seed: u64, n_target: usize) {
    let mut rng = SmallRng::seed_from_u64(seed);
    for _ in 0..N_INSTANCES {
        let rects = generator::tiling_with_pinwheel(&mut rng, region(), n_target);
        validate_exact_tiling(&rects).unwrap();
        assert!(!is_guillotine_separable(&rects));
        assert!(!reference::is_separable(&rects));
    }
}

/// The engine and the naive reference must agree on every instance,
/// separable or not, across the small sizes where the reference is fast.
#[test]
fn engine_matches_reference_on_small_tilings() {
    let mut rng = SmallRng::seed_from_u64(6);
    for n_target in 2..=8 {
        for i in 0..N_INSTANCES {
            let rects = match i % 2 == 0 {
                true => generator::guillotine_tiling(&mut rng, region(), n_target),
                false => generator::tiling_with_pinwheel(&mut rng, region(), n_target),
            };
            assert_eq!(
                is_guillotine_separable(&rects),
                reference::is_separable(&rects),
                "verdicts diverge on {rects:?}"
            );
        }
    }
}

/// The verdict depends on the set of tiles, never on their input order.
#[test]
fn verdict_is_permutation_invariant() {
    let mut rng = SmallRng::seed_from_u64(7);
    for i in 0..N_INSTANCES {
        let mut rects = match i % 2 == 0 {
            true => generator::guillotine_tiling(&mut rng, region(), 30),
            false => generator::tiling_with_pinwheel(&mut rng, region(), 30),
        };
        let expected = is_guillotine_separable(&rects);
        for _ in 0..5 {
            rects.shuffle(&mut rng);
            assert_eq!(is_guillotine_separable(&rects), expected);
        }
    }
}

/// Every cut permanently splits one window, so a full run can never apply
/// more cuts than a complete decomposition has splits.
#[test]
fn verdict_counters_stay_bounded() {
    let mut rng = SmallRng::seed_from_u64(8);
    for _ in 0..N_INSTANCES {
        let rects = generator::guillotine_tiling(&mut rng, region(), 100);
        let n = rects.len();
        let verdict = decide(&Tiling::new(rects.into_iter()));
        assert!(verdict.separable);
        assert!(verdict.n_cuts <= n.saturating_sub(1));
        assert!(verdict.peak_stack <= n);
        assert!(verdict.n_recollects <= n);
    }
}

#[test]
fn coordinates_near_the_numeric_limits_are_handled() {
    let lo = -500_000_000_000_000_000;
    let hi = 500_000_000_000_000_000;
    let strips = [
        Rect::try_new(lo, lo, 0, hi).unwrap(),
        Rect::try_new(0, lo, hi, hi).unwrap(),
    ];
    validate_exact_tiling(&strips).unwrap();
    assert!(is_guillotine_separable(&strips));

    let mut rng = SmallRng::seed_from_u64(9);
    let huge = Rect::try_new(lo, lo, hi, hi).unwrap();
    let rects = generator::tiling_with_pinwheel(&mut rng, huge, 20);
    assert!(!is_guillotine_separable(&rects));
}

/// Windows whose tiles were peeled in one order stay decidable through the
/// remaining orders without ever rebuilding, until a stall forces it.
#[test]
fn interleaved_cut_directions_resolve() {
    // two columns, each split into rows at different heights
    let rects = [
        Rect::try_new(0, 0, 4, 3).unwrap(),
        Rect::try_new(0, 3, 4, 9).unwrap(),
        Rect::try_new(4, 0, 7, 5).unwrap(),
        Rect::try_new(4, 5, 7, 9).unwrap(),
    ];
    let verdict = decide(&Tiling::new(rects.into_iter()));
    assert!(verdict.separable);
    assert_eq!(verdict.n_cuts, 3);
}
