//! Consecutive-failure tracking for the display bus.

/// Counts consecutive write failures and decides when the bus is wedged.
///
/// Any successful write resets the count; a failure that pushes the count
/// past the threshold requests recovery and re-arms, so one burst of
/// failures triggers exactly one recovery.
#[derive(Debug)]
pub struct FaultTracker {
    consecutive: u8,
    threshold: u8,
}

impl FaultTracker {
    pub const fn new(threshold: u8) -> Self {
        Self {
            consecutive: 0,
            threshold,
        }
    }

    /// Record a successful write; the bus is healthy again.
    pub fn record_success(&mut self) {
        self.consecutive = 0;
    }

    /// Record a failed write.  Returns `true` exactly when this failure
    /// pushes the consecutive count past the threshold.
    #[must_use]
    pub fn record_failure(&mut self) -> bool {
        self.consecutive = self.consecutive.saturating_add(1);
        if self.consecutive > self.threshold {
            self.consecutive = 0;
            true
        } else {
            false
        }
    }

    pub fn consecutive_failures(&self) -> u8 {
        self.consecutive
    }
}
