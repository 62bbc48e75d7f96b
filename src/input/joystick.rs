//! SAADC + GPIO joystick sampling.
//!
//! Embedded glue around the pure sampler: one poll reads the debounced
//! button level and the raw axis value, classifies them, and runs the
//! edge latch.  No side effects beyond the returned event.

use crate::config::{AXIS_CENTER, BUTTON_DEBOUNCE_MS, SCROLL_THRESHOLD};
use crate::input::sampler::{classify, EdgeLatch};
use crate::input::InputEvent;
use embassy_nrf::gpio::Input;
use embassy_nrf::saadc::Saadc;
use embassy_time::{Duration, Timer};

/// Debounced joystick: analog Y axis + active-low push-button.
pub struct Joystick<'d> {
    adc: Saadc<'d, 1>,
    button: Input<'d>,
    latch: EdgeLatch,
}

impl<'d> Joystick<'d> {
    pub fn new(adc: Saadc<'d, 1>, button: Input<'d>) -> Self {
        Self {
            adc,
            button,
            latch: EdgeLatch::new(),
        }
    }

    /// Sample once and return at most one event.
    ///
    /// The button is debounced by delay-and-re-read and takes priority
    /// over axis motion within the same tick.
    pub async fn poll(&mut self) -> Option<InputEvent> {
        let pressed = if self.button.is_low() {
            Timer::after(Duration::from_millis(BUTTON_DEBOUNCE_MS)).await;
            self.button.is_low()
        } else {
            false
        };

        let mut samples = [0i16; 1];
        self.adc.sample(&mut samples).await;

        let classification = classify(pressed, samples[0] - AXIS_CENTER, SCROLL_THRESHOLD);
        self.latch.feed(classification)
    }
}
