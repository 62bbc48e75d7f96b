//! Top-level control loop.
//!
//! One periodic task owns the sampler, the menu state machine, and the
//! display bus: poll → step → redraw.  Quiet ticks with nothing to redraw
//! produce no bus traffic at all.

use crate::bus::DisplayBus;
use crate::config::{POLL_INTERVAL_MS, TRANSIENT_DWELL_TICKS};
use crate::input::joystick::Joystick;
use crate::menu::controller::MenuController;
use defmt::warn;
use embassy_time::{Duration, Timer};

/// Drive the menu until reset.
pub async fn run_forever(mut display: DisplayBus, mut joystick: Joystick<'static>) -> ! {
    let mut controller = MenuController::new(TRANSIENT_DWELL_TICKS);
    // First tick paints the initial screen.
    controller.mark_dirty();

    loop {
        let event = joystick.poll().await;
        let outcome = controller.on_tick(event);

        if let Some((r, g, b)) = outcome.backlight {
            display.set_backlight(r, g, b).await;
        }

        if outcome.redraw {
            let rows = controller.render();
            let mut complete = true;
            for (row, text) in rows.iter().enumerate() {
                if display.write_row(row as u8, text.as_str()).await.is_err() {
                    complete = false;
                    break;
                }
            }
            if !complete {
                // Repaint next tick against the (possibly recovered) bus.
                warn!("redraw failed, retrying next tick");
                controller.mark_dirty();
            }
        }

        Timer::after(Duration::from_millis(POLL_INTERVAL_MS)).await;
    }
}
