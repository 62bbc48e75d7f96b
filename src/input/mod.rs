//! Joystick input subsystem - analog Y axis + push-button.
//!
//! Raw samples are noisy: the axis jitters around center and the button
//! bounces.  [`sampler`] holds the pure classification and edge-detection
//! state machine; [`joystick`] is the embedded glue that feeds it from the
//! SAADC and a GPIO.

pub mod sampler;

#[cfg(feature = "embedded")]
pub mod joystick;

/// Discrete navigation events (after debouncing).
///
/// Produced and consumed within one poll cycle; a quiet tick is
/// represented by `None` at the polling call site.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum InputEvent {
    ScrollUp,
    ScrollDown,
    Press,
}
