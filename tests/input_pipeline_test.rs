//! Key events through the mapper and debouncer, as the runner wires them.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use tui_2048::input::{handle_key_event, should_quit, Debouncer, SwipeInput};
use tui_2048::types::{Direction, GameAction, TICK_MS};

fn feed(debouncer: &mut Debouncer, code: KeyCode) {
    if let Some(GameAction::Move(direction)) = handle_key_event(KeyEvent::from(code)) {
        debouncer.push(direction);
    }
}

fn tick_until_released(debouncer: &mut Debouncer, max_ticks: u32) -> (Option<Direction>, u32) {
    for tick in 1..=max_ticks {
        if let Some(direction) = debouncer.update(TICK_MS) {
            return (Some(direction), tick);
        }
    }
    (None, max_ticks)
}

#[test]
fn key_repeat_burst_dispatches_one_move() {
    let mut debouncer = Debouncer::with_window_ms(100);
    for _ in 0..10 {
        feed(&mut debouncer, KeyCode::Left);
        assert_eq!(debouncer.update(TICK_MS), None);
    }

    let (released, ticks) = tick_until_released(&mut debouncer, 20);
    assert_eq!(released, Some(Direction::Left));
    // The burst already counted one quiet tick; 16ms * 7 >= 100ms.
    assert_eq!(ticks, 6);
    assert_eq!(tick_until_released(&mut debouncer, 20).0, None);
}

#[test]
fn last_direction_in_a_burst_wins() {
    let mut debouncer = Debouncer::default();
    feed(&mut debouncer, KeyCode::Char('h'));
    feed(&mut debouncer, KeyCode::Char('k'));
    feed(&mut debouncer, KeyCode::Down);
    feed(&mut debouncer, KeyCode::Char('x'));

    assert_eq!(tick_until_released(&mut debouncer, 20).0, Some(Direction::Down));
}

#[test]
fn restart_and_quit_bypass_the_debouncer() {
    assert_eq!(
        handle_key_event(KeyEvent::from(KeyCode::Char('r'))),
        Some(GameAction::Restart)
    );
    assert!(should_quit(KeyEvent::from(KeyCode::Char('q'))));
    assert!(should_quit(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL)));
    assert!(!should_quit(KeyEvent::from(KeyCode::Char('c'))));
}

#[test]
fn swipes_feed_the_same_debouncer() {
    let mut debouncer = Debouncer::default();
    for swipe in [SwipeInput::new(-80.0, 5.0), SwipeInput::new(3.0, 120.0)] {
        if let Some(direction) = swipe.direction() {
            debouncer.push(direction);
        }
    }
    assert_eq!(tick_until_released(&mut debouncer, 20).0, Some(Direction::Down));
}
