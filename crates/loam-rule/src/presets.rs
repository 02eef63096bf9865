//! Well-known rule sets.
//!
//! Every preset is valid by construction.

use crate::mode::Mode;
use crate::ruleset::RuleSet;
use crate::state::StateRule;
use crate::transition::TransitionRule;
use loam_core::Rgb;
use loam_space::Topology;

const DEAD: Rgb = Rgb::BLACK;
const ALIVE: Rgb = Rgb::new(0, 200, 0);

/// Conway's Game of Life (B3/S23) on the Moore neighbourhood.
pub fn life() -> RuleSet {
    life_like("Conway's Game of Life", &[3], &[2, 3])
}

/// A two-state outer-totalistic Moore rule.
///
/// A dead cell is born with a live-neighbour count in `birth`; a live
/// cell survives with a count in `survive`.
pub fn life_like(name: &str, birth: &[u32], survive: &[u32]) -> RuleSet {
    RuleSet::builder()
        .name(name)
        .topology(Topology::Moore)
        .mode(Mode::Threshold)
        .state(
            StateRule::new(0u32)
                .with_name("dead")
                .with_color(DEAD)
                .with_transition(TransitionRule::threshold([1], birth.iter().copied(), 1u32)),
        )
        .state(
            StateRule::new(0u32)
                .with_name("alive")
                .with_color(ALIVE)
                .with_transition(TransitionRule::threshold([1], survive.iter().copied(), 1u32)),
        )
        .build()
        .expect("life-like rule set is valid for any birth/survive counts")
}

/// A one-dimensional elementary automaton by Wolfram code.
///
/// Each row is computed from the row above: bit `4l + 2c + r` of `code`
/// gives the successor of the neighbourhood `(l, c, r)` (up-left, up,
/// up-right). On a one-row wrapping grid the row above is the row itself,
/// so successive generations replay the classic space-time diagram.
pub fn wolfram(code: u8) -> RuleSet {
    let transitions: Vec<TransitionRule> = (0..8u8)
        .rev()
        .filter(|bit| code & (1 << bit) != 0)
        .map(|bit| {
            let l = i32::from((bit >> 2) & 1);
            let c = i32::from((bit >> 1) & 1);
            let r = i32::from(bit & 1);
            TransitionRule::pattern(&[l, c, r], 1u32)
        })
        .collect();

    let state = |name: &str, color: Rgb| {
        let mut rule = StateRule::new(0u32).with_name(name).with_color(color);
        rule.transitions = transitions.clone();
        rule
    };

    RuleSet::builder()
        .name(format!("Rule {code}"))
        .topology(Topology::Elementary)
        .mode(Mode::Pattern)
        .state(state("off", Rgb::BLACK))
        .state(state("on", Rgb::WHITE))
        .build()
        .expect("elementary rule set is valid for every code")
}

/// Brian's Brain: a three-state Moore rule (off, on, dying).
pub fn brians_brain() -> RuleSet {
    RuleSet::builder()
        .name("Brian's Brain")
        .topology(Topology::Moore)
        .mode(Mode::Threshold)
        .state(
            StateRule::new(0u32)
                .with_name("off")
                .with_color(Rgb::BLACK)
                .with_weight(2)
                .with_transition(TransitionRule::threshold([1], [2], 1u32)),
        )
        .state(
            StateRule::new(2u32)
                .with_name("on")
                .with_color(Rgb::WHITE)
                .with_weight(1),
        )
        .state(
            StateRule::new(0u32)
                .with_name("dying")
                .with_note("refractory for one generation")
                .with_color(Rgb::new(0, 0, 255))
                .with_weight(1),
        )
        .weighted(true)
        .build()
        .expect("Brian's Brain rule set is valid")
}
