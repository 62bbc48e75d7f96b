//! Sample classification and edge detection.
//!
//! Debounce policy: **edge-triggered latch**.  Every poll classifies the
//! debounced (button, axis) pair into one of {Press, Up, Down, Neutral};
//! an event is emitted only on the tick the classification changes from
//! the previous one, and returning to Neutral re-arms the latch.  Holding
//! the stick at an extreme therefore produces exactly one event per
//! direction entry, never a flood.

use crate::input::InputEvent;

/// What a single debounced sample looks like after thresholding.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Classification {
    Press,
    Up,
    Down,
    Neutral,
}

/// Classify one sample.  The button takes priority over axis motion;
/// `diff` is the raw axis reading minus center, and deflection below
/// `threshold` counts as Neutral.  Pushing the stick up drives the
/// reading below center.
pub fn classify(button_pressed: bool, diff: i16, threshold: i16) -> Classification {
    if button_pressed {
        Classification::Press
    } else if diff <= -threshold {
        Classification::Up
    } else if diff >= threshold {
        Classification::Down
    } else {
        Classification::Neutral
    }
}

/// Suppresses repeats while the stick (or button) is held.
#[derive(Debug)]
pub struct EdgeLatch {
    last: Classification,
}

impl EdgeLatch {
    pub const fn new() -> Self {
        Self {
            last: Classification::Neutral,
        }
    }

    /// Feed one classification; returns an event only on the tick the
    /// classification changes away from the previous one.
    pub fn feed(&mut self, classification: Classification) -> Option<InputEvent> {
        let event = match classification {
            Classification::Neutral => {
                self.last = Classification::Neutral;
                return None;
            }
            _ if classification == self.last => return None,
            Classification::Press => InputEvent::Press,
            Classification::Up => InputEvent::ScrollUp,
            Classification::Down => InputEvent::ScrollDown,
        };
        self.last = classification;
        Some(event)
    }
}

impl Default for EdgeLatch {
    fn default() -> Self {
        Self::new()
    }
}
