//! Integration tests for menupad's host-testable logic.
//!
//! Drives the menu controller through whole user sessions the way the
//! polling loop does: one optional event per tick, rendering after every
//! tick that asks for it.

use menupad::input::sampler::{classify, Classification, EdgeLatch};
use menupad::input::InputEvent;
use menupad::menu::controller::MenuController;
use menupad::menu::Screen;

const DWELL_TICKS: u8 = 20;

/// Feed raw (button, axis) samples through the full input chain and
/// collect the events, as the joystick task would.
fn run_samples(samples: &[(bool, i16)]) -> Vec<InputEvent> {
    let mut latch = EdgeLatch::new();
    samples
        .iter()
        .filter_map(|&(pressed, diff)| latch.feed(classify(pressed, diff, 2000)))
        .collect()
}

#[test]
fn held_stick_is_one_event_per_direction_entry() {
    // Stick slammed down for many polls, released, then slammed down again.
    let mut samples = vec![(false, 2047); 30];
    samples.extend_from_slice(&[(false, 0); 3]);
    samples.extend_from_slice(&[(false, 2047); 30]);

    assert_eq!(
        run_samples(&samples),
        vec![InputEvent::ScrollDown, InputEvent::ScrollDown]
    );
}

#[test]
fn button_interrupts_a_held_scroll() {
    let samples = [
        (false, -2047),
        (false, -2047),
        (true, -2047),
        (true, -2047),
        (false, 0),
    ];
    assert_eq!(
        run_samples(&samples),
        vec![InputEvent::ScrollUp, InputEvent::Press]
    );
}

#[test]
fn full_session_walkthrough() {
    let mut controller = MenuController::new(DWELL_TICKS);

    // Boot: main menu with the cursor on Play.
    controller.mark_dirty();
    assert!(controller.on_tick(None).redraw);
    let rows = controller.render();
    assert_eq!(rows[0].as_str(), ">Play           ");
    assert_eq!(rows[1].as_str(), " Difficulty     ");

    // Tune the difficulty up one notch.
    let _ = controller.on_tick(Some(InputEvent::ScrollDown));
    let _ = controller.on_tick(Some(InputEvent::Press));
    assert_eq!(controller.model().screen(), Screen::Difficulty);
    let _ = controller.on_tick(Some(InputEvent::ScrollUp));
    assert_eq!(controller.model().difficulty_label(), "Hard");
    let _ = controller.on_tick(Some(InputEvent::Press));
    assert_eq!(controller.model().screen(), Screen::Main);

    // Bump the game time twice.
    let _ = controller.on_tick(Some(InputEvent::ScrollDown));
    let _ = controller.on_tick(Some(InputEvent::Press));
    assert_eq!(controller.model().screen(), Screen::Time);
    let _ = controller.on_tick(Some(InputEvent::ScrollUp));
    let _ = controller.on_tick(Some(InputEvent::ScrollUp));
    assert_eq!(controller.model().game_time_secs(), 120);
    let _ = controller.on_tick(Some(InputEvent::Press));

    // Start the game: the transient screen reflects the chosen settings.
    let _ = controller.on_tick(Some(InputEvent::ScrollUp));
    let _ = controller.on_tick(Some(InputEvent::ScrollUp));
    assert_eq!(controller.model().selected(), 0);
    let outcome = controller.on_tick(Some(InputEvent::Press));
    assert!(outcome.redraw);
    let rows = controller.render();
    assert_eq!(rows[0].as_str(), "Starting game   ");
    assert_eq!(rows[1].as_str(), "Hard 120s       ");

    // The transient screen returns home by itself.
    for _ in 0..DWELL_TICKS {
        let _ = controller.on_tick(None);
    }
    assert_eq!(controller.model().screen(), Screen::Main);
    assert_eq!(controller.model().selected(), 0);
}

#[test]
fn backlight_choice_reaches_the_caller() {
    let mut controller = MenuController::new(DWELL_TICKS);

    for _ in 0..3 {
        let _ = controller.on_tick(Some(InputEvent::ScrollDown));
    }
    let _ = controller.on_tick(Some(InputEvent::Press));
    assert_eq!(controller.model().screen(), Screen::Backlight);

    // Pick "Blue" (fourth entry).
    for _ in 0..3 {
        let _ = controller.on_tick(Some(InputEvent::ScrollDown));
    }
    let outcome = controller.on_tick(Some(InputEvent::Press));
    assert_eq!(outcome.backlight, Some((0, 0, 0xFF)));

    // The window scrolled down to keep the cursor visible.
    let rows = controller.render();
    assert_eq!(rows[0].as_str(), " Green          ");
    assert_eq!(rows[1].as_str(), ">Blue           ");
}

#[test]
fn failed_redraw_is_retried_until_it_sticks() {
    let mut controller = MenuController::new(DWELL_TICKS);

    // A redraw the display couldn't complete: the loop marks the
    // controller dirty and the next quiet tick repaints.
    let _ = controller.on_tick(Some(InputEvent::ScrollDown));
    controller.mark_dirty();
    assert!(controller.on_tick(None).redraw);
    controller.mark_dirty();
    assert!(controller.on_tick(None).redraw);
    // Once a redraw succeeds, quiet ticks stay quiet.
    assert!(!controller.on_tick(None).redraw);
}
