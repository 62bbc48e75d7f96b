//! Menu subsystem - screens, items, and the navigation state machines.
//!
//! The menu is hub-and-spoke: one main screen lists the entries, each
//! entry enters a child screen or exits.  Child screens are lists
//! (navigated like the main screen), adjustable values (scroll to change,
//! press to leave), or transient messages (auto-return after a dwell).
//!
//! Everything in this module is pure and host-testable; the embedded loop
//! only calls [`controller::MenuController::on_tick`] and renders.

pub mod controller;
pub mod model;
pub mod viewport;

/// Screens (views) the menu can be in.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Screen {
    /// The hub: entry list.
    Main,
    /// Transient "game starting" message.
    Play,
    /// Adjustable difficulty level.
    Difficulty,
    /// Adjustable game duration.
    Time,
    /// Backlight color submenu.
    Backlight,
    /// Transient farewell message shown by the Exit entry.
    Goodbye,
}

/// Per-screen interaction behavior.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ScreenKind {
    List,
    Adjustable,
    Transient,
}

impl Screen {
    pub fn kind(self) -> ScreenKind {
        match self {
            Screen::Main | Screen::Backlight => ScreenKind::List,
            Screen::Difficulty | Screen::Time => ScreenKind::Adjustable,
            Screen::Play | Screen::Goodbye => ScreenKind::Transient,
        }
    }
}

/// A single menu entry.
#[derive(Clone, Copy, Debug)]
pub struct MenuItem {
    pub label: &'static str,
    pub kind: ItemKind,
}

/// What pressing an entry does.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ItemKind {
    /// Enter a child screen.
    Navigate(Screen),
    /// Apply a backlight color and stay on the current screen.
    Backlight { r: u8, g: u8, b: u8 },
    /// The terminal exit entry.
    Action,
    /// Return to the main screen.
    Back,
}

/// Result of feeding an input event to the menu model.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Transition {
    EnterScreen(Screen),
    AdjustUp,
    AdjustDown,
    SetBacklight { r: u8, g: u8, b: u8 },
    Exit,
    Noop,
}
