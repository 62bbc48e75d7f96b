//! Per-tick menu state machine.
//!
//! Consumes at most one input event per polling tick, drives the model and
//! viewport, and tells the caller what to do afterwards.  Rendering is a
//! pure function of the state so a failed redraw can simply be retried on
//! the next tick via the dirty flag.

use super::model::MenuModel;
use super::viewport::{self, marked_row, message_row, Row, ViewportState};
use super::{Screen, ScreenKind, Transition};
use crate::config::LCD_ROWS;
use crate::input::InputEvent;
use core::fmt::Write;

/// What the caller must do after a tick.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct TickOutcome {
    /// Both display rows must be rewritten.
    pub redraw: bool,
    /// Backlight color to apply (best-effort).
    pub backlight: Option<(u8, u8, u8)>,
}

/// Top-level menu state machine.
#[derive(Debug)]
pub struct MenuController {
    model: MenuModel,
    view: ViewportState,
    /// Main screen cursor (selected, top), saved while inside a child.
    saved_main: (usize, usize),
    dwell_ticks: u8,
    dwell_left: u8,
    dirty: bool,
}

impl MenuController {
    /// Start on the main screen, first entry selected.  `dwell_ticks` is
    /// how many quiet ticks a transient screen stays up.
    pub fn new(dwell_ticks: u8) -> Self {
        Self {
            model: MenuModel::new(),
            view: ViewportState::new(),
            saved_main: (0, 0),
            dwell_ticks,
            dwell_left: 0,
            dirty: false,
        }
    }

    pub fn model(&self) -> &MenuModel {
        &self.model
    }

    pub fn viewport(&self) -> &ViewportState {
        &self.view
    }

    /// Force a redraw on the next tick; called after a failed render so
    /// the screen repaints once the bus recovers.
    pub fn mark_dirty(&mut self) {
        self.dirty = true;
    }

    /// Advance one polling tick.
    pub fn on_tick(&mut self, event: Option<InputEvent>) -> TickOutcome {
        let mut outcome = match event {
            Some(event) => self.handle_event(event),
            None => {
                let mut outcome = TickOutcome::default();
                if self.model.screen().kind() == ScreenKind::Transient {
                    self.dwell_left = self.dwell_left.saturating_sub(1);
                    if self.dwell_left == 0 {
                        self.return_to_main();
                        outcome.redraw = true;
                    }
                }
                outcome
            }
        };

        if core::mem::take(&mut self.dirty) {
            outcome.redraw = true;
        }
        outcome
    }

    fn handle_event(&mut self, event: InputEvent) -> TickOutcome {
        let mut outcome = TickOutcome::default();

        // Selection movement on list screens is viewport business, not a
        // model transition.
        if self.model.screen().kind() == ScreenKind::List
            && matches!(event, InputEvent::ScrollUp | InputEvent::ScrollDown)
        {
            outcome.redraw = self.move_selection(event);
            return outcome;
        }

        match self.model.transition(event) {
            Transition::EnterScreen(Screen::Main) => {
                self.return_to_main();
                outcome.redraw = true;
            }
            Transition::EnterScreen(target) => {
                self.enter(target);
                outcome.redraw = true;
            }
            Transition::AdjustUp => outcome.redraw = self.model.adjust(1),
            Transition::AdjustDown => outcome.redraw = self.model.adjust(-1),
            Transition::SetBacklight { r, g, b } => outcome.backlight = Some((r, g, b)),
            Transition::Exit => {
                self.enter(Screen::Goodbye);
                outcome.redraw = true;
            }
            Transition::Noop => {}
        }
        outcome
    }

    /// Move the selection one step, clamped to the list, dragging the
    /// viewport along only when the cursor leaves the window.
    fn move_selection(&mut self, event: InputEvent) -> bool {
        let count = self.model.items().len();
        let current = self.model.selected();
        let next = match event {
            InputEvent::ScrollUp => current.saturating_sub(1),
            InputEvent::ScrollDown if current + 1 < count => current + 1,
            _ => current,
        };
        if next == current {
            return false;
        }
        self.model.select(next);
        self.view.follow(next);
        true
    }

    fn enter(&mut self, target: Screen) {
        if self.model.screen() == Screen::Main {
            self.saved_main = (self.model.selected(), self.view.top());
        }
        self.model.enter(target);
        self.view.reset();
        if target.kind() == ScreenKind::Transient {
            self.dwell_left = self.dwell_ticks;
        }
    }

    fn return_to_main(&mut self) {
        self.model.enter(Screen::Main);
        let (selected, top) = self.saved_main;
        self.model.select(selected);
        self.view.set_top(top);
    }

    /// Render both display rows for the current state.
    pub fn render(&self) -> [Row; LCD_ROWS] {
        match self.model.screen() {
            Screen::Main | Screen::Backlight => {
                viewport::render_list(self.model.items(), self.view.top(), self.model.selected())
            }
            Screen::Difficulty | Screen::Time => {
                let value = self.model.format_value();
                [
                    marked_row(' ', self.model.adjustable_title()),
                    marked_row('>', value.as_str()),
                ]
            }
            Screen::Play => {
                let mut settings = Row::new();
                let _ = write!(
                    settings,
                    "{} {}s",
                    self.model.difficulty_label(),
                    self.model.game_time_secs()
                );
                [message_row("Starting game"), message_row(settings.as_str())]
            }
            Screen::Goodbye => [message_row("Goodbye!"), message_row("")],
        }
    }
}
