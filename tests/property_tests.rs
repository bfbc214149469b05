//! Property-based tests for the game cycle.
//!
//! These tests use proptest to verify properties hold across
//! many randomly generated seeds and scripted draws.

use lemonade::{GameBuilder, GameState, GameStateMachine, ScriptedSqueezes, Step};
use proptest::prelude::*;

fn advance_until_tree(machine: &mut GameStateMachine) -> Vec<GameState> {
    let mut seen = vec![machine.advance()];
    while machine.current_step() != Step::Tree {
        seen.push(machine.advance());
    }
    seen
}

proptest! {
    #[test]
    fn cycle_is_tree_lemons_drink_done(seed in any::<u64>()) {
        let mut machine = GameBuilder::new().seed(seed).build().unwrap();

        let states = advance_until_tree(&mut machine);
        let k = states[0].squeezes_remaining().unwrap() as usize;

        let steps: Vec<Step> = states.iter().map(|s| s.step()).collect();
        let mut expected = vec![Step::Lemon; k];
        expected.extend([Step::Drink, Step::Done, Step::Tree]);
        prop_assert_eq!(steps, expected);
    }

    #[test]
    fn draw_is_always_two_to_four(seed in any::<u64>(), cycles in 1usize..8) {
        let mut machine = GameBuilder::new().seed(seed).build().unwrap();
        for _ in 0..cycles {
            let k = machine.advance().squeezes_remaining().unwrap();
            prop_assert!((2..=4).contains(&k));
            while machine.current_step() != Step::Tree {
                machine.advance();
            }
        }
    }

    #[test]
    fn counter_never_zero_while_squeezing(seed in any::<u64>(), taps in 0usize..200) {
        let mut machine = GameBuilder::new().seed(seed).build().unwrap();
        for _ in 0..taps {
            let state = machine.advance();
            if state.step() == Step::Lemon {
                prop_assert!(state.squeezes_remaining().unwrap() >= 1);
            } else {
                prop_assert_eq!(state.squeezes_remaining(), None);
            }
        }
    }

    #[test]
    fn returns_to_tree_after_exactly_k_plus_three(k in 2u8..=4) {
        let mut machine = GameStateMachine::new(ScriptedSqueezes::always(k));
        let total = k as usize + 3;
        for tap in 1..=total {
            let step = machine.advance().step();
            if tap < total {
                prop_assert_ne!(step, Step::Tree);
            } else {
                prop_assert_eq!(step, Step::Tree);
            }
        }
    }

    #[test]
    fn reads_are_idempotent(seed in any::<u64>(), taps in 0usize..20, reads in 1usize..20) {
        let mut machine = GameBuilder::new().seed(seed).build().unwrap();
        for _ in 0..taps {
            machine.advance();
        }
        let before = machine.state();
        for _ in 0..reads {
            prop_assert_eq!(machine.current_step(), before.step());
        }
        prop_assert_eq!(machine.state(), before);
        prop_assert_eq!(machine.taps(), taps);
    }

    #[test]
    fn history_path_matches_observed_states(
        draws in prop::collection::vec(2u8..=4, 1..5),
        taps in 1usize..40,
    ) {
        let mut machine = GameStateMachine::new(ScriptedSqueezes::new(draws));
        let mut observed = vec![machine.current_step()];
        for _ in 0..taps {
            observed.push(machine.advance().step());
        }
        let path: Vec<Step> = machine.history().get_path().into_iter().copied().collect();
        prop_assert_eq!(path, observed);
    }
}
