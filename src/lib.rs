//! Host-testable library interface for menupad.
//!
//! The pure logic - input classification and edge detection, the menu and
//! viewport state machines, the bus fault policy, and the display wire
//! protocol tables - compiles for the host so it can be tested with
//! `cargo test` and no embedded hardware.
//!
//! The embedded binary (`src/main.rs`, `#![no_std]` + `#![no_main]`)
//! enables the `embedded` feature, which adds the Embassy glue: the TWIM
//! display bus, the SAADC/GPIO joystick, and the polling loop.

#![cfg_attr(not(test), no_std)]

pub mod bus;
pub mod config;
pub mod error;
pub mod input;
pub mod menu;

#[cfg(feature = "embedded")]
pub mod app;

// ═══════════════════════════════════════════════════════════════════════════
// Unit Tests
// ═══════════════════════════════════════════════════════════════════════════
