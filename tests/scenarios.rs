//! Tap-by-tap scenarios with scripted squeeze counts.

use lemonade::{GameBuilder, GameState, GameStateMachine, ScriptedSqueezes, Step};
use std::cell::RefCell;
use std::rc::Rc;

fn snapshot(state: GameState) -> (Step, Option<u8>) {
    (state.step(), state.squeezes_remaining())
}

#[test]
fn forced_draw_of_two_completes_one_cycle() {
    let mut machine = GameStateMachine::new(ScriptedSqueezes::always(2));
    assert_eq!(machine.current_step(), Step::Tree);

    assert_eq!(snapshot(machine.advance()), (Step::Lemon, Some(2)));
    assert_eq!(snapshot(machine.advance()), (Step::Lemon, Some(1)));
    assert_eq!(snapshot(machine.advance()), (Step::Drink, None));
    assert_eq!(snapshot(machine.advance()), (Step::Done, None));
    assert_eq!(snapshot(machine.advance()), (Step::Tree, None));
}

#[test]
fn forced_draw_of_four_squeezes_three_more_times() {
    let mut machine = GameStateMachine::new(ScriptedSqueezes::always(4));
    machine.advance();

    let observed: Vec<_> = (0..5).map(|_| snapshot(machine.advance())).collect();
    assert_eq!(
        observed,
        vec![
            (Step::Lemon, Some(3)),
            (Step::Lemon, Some(2)),
            (Step::Lemon, Some(1)),
            (Step::Drink, None),
            (Step::Done, None),
        ]
    );
}

#[test]
fn each_cycle_draws_afresh() {
    let mut machine = GameStateMachine::new(ScriptedSqueezes::new([2, 3, 4]));

    for expected in [2u8, 3, 4, 2] {
        assert_eq!(machine.advance().squeezes_remaining(), Some(expected));
        while machine.current_step() != Step::Tree {
            machine.advance();
        }
    }
    assert_eq!(machine.glasses_served(), 4);
    assert_eq!(machine.taps(), (2 + 3) + (3 + 3) + (4 + 3) + (2 + 3));
}

#[test]
fn rendering_layer_follows_notifications() {
    let mut machine = GameBuilder::new()
        .source(ScriptedSqueezes::always(3))
        .build()
        .unwrap();

    let rendered = Rc::new(RefCell::new(vec![machine.current_step()]));
    let screen = Rc::clone(&rendered);
    machine.subscribe(move |change| screen.borrow_mut().push(change.to.step()));

    for _ in 0..6 {
        machine.advance();
    }

    assert_eq!(
        *rendered.borrow(),
        vec![
            Step::Tree,
            Step::Lemon,
            Step::Lemon,
            Step::Lemon,
            Step::Drink,
            Step::Done,
            Step::Tree,
        ]
    );
}

#[test]
fn rapid_taps_count_individually() {
    let mut machine = GameStateMachine::new(ScriptedSqueezes::always(2));
    machine.advance();
    machine.advance();
    assert_eq!(machine.squeezes_remaining(), Some(1));
    assert_eq!(machine.taps(), 2);
}
