//! Menu content and value state.

use super::viewport::Row;
use super::{ItemKind, MenuItem, Screen, ScreenKind, Transition};
use crate::input::InputEvent;
use core::fmt::Write;

/// Difficulty labels, easiest first.
pub const DIFFICULTY_LABELS: &[&str] = &["Easy", "Medium", "Hard"];

/// Game duration bounds and step (seconds).
pub const TIME_MIN_SECS: u16 = 60;
pub const TIME_MAX_SECS: u16 = 300;
pub const TIME_STEP_SECS: u16 = 30;

const MAIN_ITEMS: &[MenuItem] = &[
    MenuItem {
        label: "Play",
        kind: ItemKind::Navigate(Screen::Play),
    },
    MenuItem {
        label: "Difficulty",
        kind: ItemKind::Navigate(Screen::Difficulty),
    },
    MenuItem {
        label: "Time",
        kind: ItemKind::Navigate(Screen::Time),
    },
    MenuItem {
        label: "Option 5",
        kind: ItemKind::Navigate(Screen::Backlight),
    },
    MenuItem {
        label: "Exit",
        kind: ItemKind::Action,
    },
];

const BACKLIGHT_ITEMS: &[MenuItem] = &[
    MenuItem {
        label: "White",
        kind: ItemKind::Backlight {
            r: 0xFF,
            g: 0xFF,
            b: 0xFF,
        },
    },
    MenuItem {
        label: "Red",
        kind: ItemKind::Backlight { r: 0xFF, g: 0, b: 0 },
    },
    MenuItem {
        label: "Green",
        kind: ItemKind::Backlight { r: 0, g: 0xFF, b: 0 },
    },
    MenuItem {
        label: "Blue",
        kind: ItemKind::Backlight { r: 0, g: 0, b: 0xFF },
    },
    MenuItem {
        label: "Back",
        kind: ItemKind::Back,
    },
];

/// Menu tree, active screen, selection, and the adjustable values.
///
/// Mutated only by the controller in response to input events.
#[derive(Debug)]
pub struct MenuModel {
    screen: Screen,
    selected: usize,
    difficulty: usize,
    game_time_secs: u16,
}

impl MenuModel {
    pub fn new() -> Self {
        Self {
            screen: Screen::Main,
            selected: 0,
            difficulty: 1,
            game_time_secs: TIME_MIN_SECS,
        }
    }

    /// Items of the given screen; empty for screens without an entry list.
    pub fn items_for(screen: Screen) -> &'static [MenuItem] {
        match screen {
            Screen::Main => MAIN_ITEMS,
            Screen::Backlight => BACKLIGHT_ITEMS,
            _ => &[],
        }
    }

    /// Items of the active screen.
    pub fn items(&self) -> &'static [MenuItem] {
        Self::items_for(self.screen)
    }

    pub fn screen(&self) -> Screen {
        self.screen
    }

    pub fn selected(&self) -> usize {
        self.selected
    }

    /// Move the selection cursor; out-of-range indices clamp to the last
    /// item so the selection is always valid.
    pub fn select(&mut self, index: usize) {
        let count = self.items().len();
        self.selected = if count == 0 { 0 } else { index.min(count - 1) };
    }

    /// Switch the active screen, resetting the selection.
    pub fn enter(&mut self, screen: Screen) {
        self.screen = screen;
        self.selected = 0;
    }

    /// Map an input event to a transition for the active screen.
    ///
    /// Selection movement on list screens is not a transition - the
    /// controller handles it against the viewport.
    pub fn transition(&self, event: InputEvent) -> Transition {
        match (self.screen.kind(), event) {
            (ScreenKind::Adjustable, InputEvent::ScrollUp) => Transition::AdjustUp,
            (ScreenKind::Adjustable, InputEvent::ScrollDown) => Transition::AdjustDown,
            (ScreenKind::Adjustable, InputEvent::Press)
            | (ScreenKind::Transient, InputEvent::Press) => Transition::EnterScreen(Screen::Main),
            (ScreenKind::List, InputEvent::Press) => self.activate(),
            _ => Transition::Noop,
        }
    }

    /// Activate the current selection (press on a list screen).
    pub fn activate(&self) -> Transition {
        match self.items().get(self.selected).map(|item| item.kind) {
            Some(ItemKind::Navigate(target)) => Transition::EnterScreen(target),
            Some(ItemKind::Backlight { r, g, b }) => Transition::SetBacklight { r, g, b },
            Some(ItemKind::Action) => Transition::Exit,
            Some(ItemKind::Back) => Transition::EnterScreen(Screen::Main),
            None => Transition::Noop,
        }
    }

    /// Step the active adjustable value, clamped to its bounds - no
    /// wraparound, adjusting past a bound is a no-op.  Returns whether the
    /// value changed.
    pub fn adjust(&mut self, delta: i8) -> bool {
        match self.screen {
            Screen::Difficulty => {
                let current = self.difficulty;
                self.difficulty = if delta > 0 {
                    (current + 1).min(DIFFICULTY_LABELS.len() - 1)
                } else {
                    current.saturating_sub(1)
                };
                self.difficulty != current
            }
            Screen::Time => {
                let current = self.game_time_secs;
                self.game_time_secs = if delta > 0 {
                    (current + TIME_STEP_SECS).min(TIME_MAX_SECS)
                } else {
                    current.saturating_sub(TIME_STEP_SECS).max(TIME_MIN_SECS)
                };
                self.game_time_secs != current
            }
            _ => false,
        }
    }

    pub fn difficulty_label(&self) -> &'static str {
        DIFFICULTY_LABELS[self.difficulty]
    }

    pub fn game_time_secs(&self) -> u16 {
        self.game_time_secs
    }

    /// Title row text for the active adjustable screen.
    pub fn adjustable_title(&self) -> &'static str {
        match self.screen {
            Screen::Difficulty => "Difficulty",
            Screen::Time => "Game Time",
            _ => "",
        }
    }

    /// The active adjustable value, formatted with its unit.
    pub fn format_value(&self) -> Row {
        let mut value = Row::new();
        match self.screen {
            Screen::Difficulty => {
                let _ = value.push_str(self.difficulty_label());
            }
            Screen::Time => {
                let _ = write!(value, "{}s", self.game_time_secs);
            }
            _ => {}
        }
        value
    }
}

impl Default for MenuModel {
    fn default() -> Self {
        Self::new()
    }
}
