//! Property tests for stepping: shape, state range, determinism,
//! parallel/serial agreement and boundary resolution.

use loam_core::StateId;
use loam_engine::{Grid, GridConfig};
use loam_rule::{presets, RuleSet};
use proptest::prelude::*;

fn preset(index: usize) -> RuleSet {
    match index % 5 {
        0 => presets::life(),
        1 => presets::brians_brain(),
        2 => presets::wolfram(110),
        3 => presets::life_like("Seeds", &[2], &[]),
        _ => presets::life_like("Day & Night", &[3, 6, 7, 8], &[3, 4, 6, 7, 8]),
    }
}

proptest! {
    #[test]
    fn step_preserves_shape_and_state_range(
        w in 1u32..24,
        h in 1u32..24,
        looping in any::<bool>(),
        seed in any::<u64>(),
        which in 0usize..5,
    ) {
        let rules = preset(which);
        let grid = Grid::random(&GridConfig::new(w, h, looping).with_seed(seed), &rules).unwrap();
        let next = grid.step(&rules);
        prop_assert_eq!(next.width(), w);
        prop_assert_eq!(next.height(), h);
        prop_assert_eq!(next.is_loop(), looping);
        prop_assert!(next.cells().iter().all(|&s| rules.contains(s)));
    }

    #[test]
    fn step_is_deterministic(
        w in 1u32..20,
        h in 1u32..20,
        seed in any::<u64>(),
        which in 0usize..5,
    ) {
        let rules = preset(which);
        let grid = Grid::random(&GridConfig::new(w, h, true).with_seed(seed), &rules).unwrap();
        prop_assert_eq!(grid.step(&rules), grid.step(&rules));
    }

    #[test]
    fn parallel_step_matches_serial(
        w in 1u32..20,
        h in 1u32..20,
        seed in any::<u64>(),
        which in 0usize..5,
    ) {
        let rules = preset(which);
        let cfg = GridConfig::new(w, h, seed % 2 == 0).with_seed(seed);
        let grid = Grid::random(&cfg, &rules).unwrap();
        let mut out = Grid::blank(&cfg).unwrap();
        grid.step_parallel_into(&rules, &mut out);
        prop_assert_eq!(out, grid.step(&rules));
    }

    #[test]
    fn bounded_lookup_outside_is_state_zero(
        w in 1u32..12,
        h in 1u32..12,
        x in -30i64..30,
        y in -30i64..30,
        seed in any::<u64>(),
    ) {
        let rules = presets::brians_brain();
        let grid = Grid::random(&GridConfig::new(w, h, false).with_seed(seed), &rules).unwrap();
        let inside = (0..i64::from(w)).contains(&x) && (0..i64::from(h)).contains(&y);
        if inside {
            prop_assert_eq!(Some(grid.cell_at(x, y)), grid.get(x as u32, y as u32));
        } else {
            prop_assert_eq!(grid.cell_at(x, y), StateId::SENTINEL);
        }
    }

    #[test]
    fn looping_lookup_is_periodic(
        w in 1u32..12,
        h in 1u32..12,
        x in -30i64..30,
        y in -30i64..30,
        seed in any::<u64>(),
    ) {
        let rules = presets::brians_brain();
        let grid = Grid::random(&GridConfig::new(w, h, true).with_seed(seed), &rules).unwrap();
        let (w, h) = (i64::from(w), i64::from(h));
        prop_assert_eq!(grid.cell_at(x, y), grid.cell_at(x + w, y));
        prop_assert_eq!(grid.cell_at(x, y), grid.cell_at(x, y - h));
        prop_assert_eq!(
            grid.cell_at(x, y),
            grid.get(x.rem_euclid(w) as u32, y.rem_euclid(h) as u32).unwrap()
        );
    }
}
