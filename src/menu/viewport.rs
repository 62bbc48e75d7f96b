//! Fixed-height display windowing and row rendering.
//!
//! Maps the item list onto the 2-row display: `top` is the first visible
//! index and follows the selection so that
//! `top ≤ selected ≤ top + LCD_ROWS - 1` always holds.

use super::MenuItem;
use crate::config::{LCD_COLS, LCD_ROWS};

/// One rendered display row, always padded to the full column width.
pub type Row = heapless::String<LCD_COLS>;

/// First visible item index of the display window.
#[derive(Debug)]
pub struct ViewportState {
    top: usize,
}

impl ViewportState {
    pub const fn new() -> Self {
        Self { top: 0 }
    }

    pub fn top(&self) -> usize {
        self.top
    }

    pub fn set_top(&mut self, top: usize) {
        self.top = top;
    }

    pub fn reset(&mut self) {
        self.top = 0;
    }

    /// Shift the window just far enough to keep `current` visible.
    pub fn follow(&mut self, current: usize) {
        if current < self.top {
            self.top = current;
        } else if current > self.top + (LCD_ROWS - 1) {
            self.top = current - (LCD_ROWS - 1);
        }
    }
}

impl Default for ViewportState {
    fn default() -> Self {
        Self::new()
    }
}

/// Cursor-marked menu row: marker + label, left-aligned, space-padded.
pub fn marked_row(marker: char, label: &str) -> Row {
    let mut row = Row::new();
    let _ = row.push(marker);
    for c in label.chars().take(LCD_COLS - 1) {
        let _ = row.push(c);
    }
    pad(&mut row);
    row
}

/// Full-width message row without a cursor column.
pub fn message_row(text: &str) -> Row {
    let mut row = Row::new();
    for c in text.chars().take(LCD_COLS) {
        let _ = row.push(c);
    }
    pad(&mut row);
    row
}

/// Render the visible window of an item list: `>` marks the selected row,
/// rows past the end of the list come out blank.
pub fn render_list(items: &[MenuItem], top: usize, current: usize) -> [Row; LCD_ROWS] {
    core::array::from_fn(|offset| {
        let index = top + offset;
        match items.get(index) {
            Some(item) => marked_row(if index == current { '>' } else { ' ' }, item.label),
            None => message_row(""),
        }
    })
}

fn pad(row: &mut Row) {
    while row.len() < LCD_COLS {
        let _ = row.push(' ');
    }
}
