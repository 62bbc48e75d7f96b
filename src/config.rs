//! Application-wide constants and compile-time configuration.
//!
//! All hardware pin assignments, timing parameters, and protocol
//! constants live here so they can be tuned in one place.

// Display bus (I²C)

/// 7-bit address of the AiP31068L text controller.
pub const LCD_ADDR: u8 = 0x3E;

/// 7-bit address of the PCA9633 RGB backlight controller.
pub const BACKLIGHT_ADDR: u8 = 0x60;

/// Per-transaction deadline (ms). A wedged device must not stall the
/// polling tick for longer than one transaction's worth of waiting.
pub const I2C_TIMEOUT_MS: u64 = 50;

/// Consecutive command/data write failures tolerated before the bus is
/// considered wedged and recovery runs.
pub const WRITE_FAILURE_THRESHOLD: u8 = 2;

/// Pause between dropping a wedged bus driver and rebuilding it (ms).
pub const RECOVERY_SETTLE_MS: u64 = 100;

/// Power-on delay before the text controller accepts commands (ms).
pub const LCD_POWER_ON_DELAY_MS: u64 = 50;

// Display geometry

/// Character columns per display row.
pub const LCD_COLS: usize = 16;

/// Display rows.
pub const LCD_ROWS: usize = 2;

// Joystick

/// ADC mid-scale reading with the stick centered (12-bit full scale).
pub const AXIS_CENTER: i16 = 2048;

/// Deflection from center beyond which a sample classifies as a scroll.
pub const SCROLL_THRESHOLD: i16 = 2000;

/// Button debounce time (ms).
pub const BUTTON_DEBOUNCE_MS: u64 = 20;

// Control loop

/// Polling tick (ms).
pub const POLL_INTERVAL_MS: u64 = 100;

/// How long transient screens stay up before auto-returning to the main
/// menu (ms).
pub const TRANSIENT_DWELL_MS: u64 = 2000;

/// The same dwell expressed in polling ticks.
pub const TRANSIENT_DWELL_TICKS: u8 = (TRANSIENT_DWELL_MS / POLL_INTERVAL_MS) as u8;

/// Backlight color applied at startup (R, G, B).
pub const BACKLIGHT_STARTUP_RGB: (u8, u8, u8) = (0xFF, 0xFF, 0xFF);

// GPIO pin assignments (nRF52840-DK defaults)
//
// These are logical names; the actual `embassy_nrf::peripherals::*` types
// are selected in `main.rs`.  Adjust for your custom PCB.
//
//   Joystick Y axis → P0.02 (AIN0)
//   Joystick button → P0.24
//   I²C SDA         → P0.26
//   I²C SCL         → P0.27
