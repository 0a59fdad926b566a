use {
    super::{Palette, MAX_LAZINESS},
    crate::basis::{FILL_COLORS, INACTIVE_COLOR},
    rand::prelude::*,
};

#[test]
fn length_is_bounded() {
    for seed in 0..500 {
        let mut rng = StdRng::seed_from_u64(seed);
        let palette = Palette::random(&mut rng);
        assert!((5..=4 + MAX_LAZINESS).contains(&palette.len()));
        assert!((1..=MAX_LAZINESS).contains(&palette.laziness()));
    }
}

#[test]
fn fill_colors_come_first() {
    let palette = Palette::with_laziness(3);
    assert_eq!(&palette.colors()[..4], &FILL_COLORS[..]);
    assert_eq!(
        &palette.colors()[4..],
        &[INACTIVE_COLOR, INACTIVE_COLOR, INACTIVE_COLOR][..]
    );
}

#[test]
fn random_draws_laziness_once() {
    let mut rng = StdRng::seed_from_u64(42);
    let palette = Palette::random(&mut rng);

    let mut expected = StdRng::seed_from_u64(42);
    assert_eq!(palette.laziness(), expected.gen_range(1..=MAX_LAZINESS));
    // 続く乱数列も一致する
    assert_eq!(rng.gen::<u64>(), expected.gen::<u64>());
}

#[test]
fn sample_stays_in_palette() {
    let mut rng = StdRng::seed_from_u64(7);
    let palette = Palette::with_laziness(1);
    let mut seen_inactive = false;
    for _ in 0..1000 {
        let color = palette.sample(&mut rng);
        assert!(palette.colors().contains(&color));
        seen_inactive |= color == INACTIVE_COLOR;
    }
    assert!(seen_inactive);
}

#[test]
fn inactive_dominates_when_lazy() {
    let mut rng = StdRng::seed_from_u64(3);
    let palette = Palette::with_laziness(MAX_LAZINESS);
    let inactive = (0..10_000)
        .filter(|_| palette.sample(&mut rng) == INACTIVE_COLOR)
        .count();
    // 期待値は 10000 * 100 / 104 ≈ 9615
    assert!(inactive > 9000, "inactive: {}", inactive);
}
