//! Wire protocol for the two display-bus devices.
//!
//! The AiP31068L text controller multiplexes two channels behind one I²C
//! address: every frame starts with a control byte selecting whether the
//! rest of the frame is an instruction or display data.
//!
//! ```text
//! [0x00, cmd]            one instruction
//! [0x40, d0, d1, ...]    display data, cursor auto-advances
//! ```
//!
//! The PCA9633 backlight controller is plain register/value writes.

/// Control byte prefixing an instruction frame.
pub const CONTROL_COMMAND: u8 = 0x00;

/// Control byte prefixing a display-data frame.
pub const CONTROL_DATA: u8 = 0x40;

/// Largest data payload the controller accepts in one transaction.
pub const DATA_CHUNK: usize = 32;

// Text controller instructions

pub const CMD_CLEAR: u8 = 0x01;
pub const CMD_ENTRY_MODE_INC: u8 = 0x06;
pub const CMD_DISPLAY_ON: u8 = 0x0C;
pub const CMD_OSC_FREQ: u8 = 0x14;
pub const CMD_FUNCTION_SET: u8 = 0x38;
/// Function set with the extended instruction table selected.
pub const CMD_FUNCTION_SET_EXT: u8 = 0x39;
pub const CMD_FOLLOWER_ON: u8 = 0x6C;
pub const CMD_SET_DDRAM: u8 = 0x80;

/// Contrast, 0x20..0x3F usable range.
const CONTRAST: u8 = 0x35;
/// Contrast low nibble (extended instruction table).
pub const CMD_CONTRAST_LOW: u8 = 0x70 | (CONTRAST & 0x0F);
/// Booster on + contrast high bits (extended instruction table).
pub const CMD_POWER_CONTRAST_HIGH: u8 = 0x5C | ((CONTRAST >> 4) & 0x03);

/// Text controller bring-up: each step is an instruction plus the delay
/// (ms) the controller needs before the next one.  The booster/follower
/// settle step dominates.
pub const TEXT_INIT_SEQUENCE: &[(u8, u16)] = &[
    (CMD_FUNCTION_SET, 5),
    (CMD_FUNCTION_SET_EXT, 5),
    (CMD_OSC_FREQ, 0),
    (CMD_CONTRAST_LOW, 0),
    (CMD_POWER_CONTRAST_HIGH, 0),
    (CMD_FOLLOWER_ON, 200),
    (CMD_FUNCTION_SET, 0),
    (CMD_DISPLAY_ON, 0),
    (CMD_CLEAR, 2),
    (CMD_ENTRY_MODE_INC, 0),
];

/// DDRAM address instruction for the start of a display row.
///
/// Row 0 starts at 0x00, row 1 at 0x40.
pub fn row_address_command(row: u8) -> u8 {
    CMD_SET_DDRAM | if row == 0 { 0x00 } else { 0x40 }
}

/// Frame a text controller instruction.
pub fn command_frame(command: u8) -> [u8; 2] {
    [CONTROL_COMMAND, command]
}

/// Frame a backlight register write.
pub fn register_frame(register: u8, value: u8) -> [u8; 2] {
    [register, value]
}

// Backlight controller registers (PCA9633)

pub const REG_MODE1: u8 = 0x00;
pub const REG_MODE2: u8 = 0x01;
pub const REG_PWM_RED: u8 = 0x02;
pub const REG_PWM_GREEN: u8 = 0x03;
pub const REG_PWM_BLUE: u8 = 0x04;
pub const REG_LEDOUT: u8 = 0x08;

/// Backlight bring-up: normal mode, totem-pole outputs, all three
/// channels under individual PWM control.
pub const BACKLIGHT_INIT_SEQUENCE: &[(u8, u8)] = &[
    (REG_MODE1, 0x00),
    (REG_MODE2, 0x04),
    (REG_LEDOUT, 0xAA),
];
