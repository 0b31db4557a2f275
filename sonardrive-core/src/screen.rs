//! Status screens
//!
//! The display is treated as a 16 x 6 character grid. Every line is
//! centred horizontally; the row is chosen by the screen layout. Rendering
//! the grid to pixels is the display driver's job.

use core::fmt::Write;

use heapless::String;

use crate::motion::{Distance, StepCount};

/// Characters per row
pub const SCREEN_COLUMNS: usize = 16;

/// Text rows
pub const SCREEN_ROWS: usize = 6;

/// Row used for single-message screens
pub const MESSAGE_ROW: u8 = 2;

/// Column at which a line of `len` characters starts when centred
///
/// `floor((16 - len) / 2)`; lines longer than the grid start at column 0.
pub fn centered_column(len: usize) -> u8 {
    (SCREEN_COLUMNS.saturating_sub(len) / 2) as u8
}

/// A full-screen text layout
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct StatusScreen {
    lines: [String<SCREEN_COLUMNS>; SCREEN_ROWS],
}

/// One non-empty line ready to draw
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlacedLine<'a> {
    /// Row index (0-5)
    pub row: u8,
    /// Starting column after centring (0-15)
    pub col: u8,
    /// Line text
    pub text: &'a str,
}

impl StatusScreen {
    /// Create a blank screen
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the content of a row
    ///
    /// Text past 16 characters is dropped. Out-of-range rows are ignored.
    pub fn set_line(&mut self, row: u8, text: &str) {
        if let Some(line) = self.lines.get_mut(row as usize) {
            line.clear();
            for ch in text.chars().take(SCREEN_COLUMNS) {
                if line.push(ch).is_err() {
                    break;
                }
            }
        }
    }

    /// Builder form of [`set_line`](Self::set_line)
    pub fn with_line(mut self, row: u8, text: &str) -> Self {
        self.set_line(row, text);
        self
    }

    /// Get the content of a row
    pub fn line(&self, row: u8) -> Option<&str> {
        self.lines.get(row as usize).map(|s| s.as_str())
    }

    /// Non-empty lines with their centred positions
    pub fn placed_lines(&self) -> impl Iterator<Item = PlacedLine<'_>> {
        self.lines
            .iter()
            .enumerate()
            .filter(|(_, line)| !line.is_empty())
            .map(|(row, line)| PlacedLine {
                row: row as u8,
                col: centered_column(line.chars().count()),
                text: line.as_str(),
            })
    }

    /// Prompt shown while waiting for the start button
    pub fn idle_prompt() -> Self {
        Self::new()
            .with_line(0, "PRESS")
            .with_line(1, "BUTTON")
            .with_line(2, "TO")
            .with_line(3, "START")
            .with_line(4, "THE")
            .with_line(5, "SIMULATION")
    }

    /// Measured distance and the planned step count
    pub fn measurement(distance: Distance, steps: StepCount) -> Self {
        let mut distance_text: String<32> = String::new();
        let _ = write!(distance_text, "{:.1} cm", distance.cm());

        let mut steps_text: String<16> = String::new();
        let _ = write!(steps_text, "{}", steps.get());

        Self::new()
            .with_line(0, "Distance:")
            .with_line(1, &distance_text)
            .with_line(3, "Steps:")
            .with_line(4, &steps_text)
    }

    /// A single centred message
    pub fn message(text: &str) -> Self {
        Self::new().with_line(MESSAGE_ROW, text)
    }

    /// Goal reached
    pub fn reached() -> Self {
        Self::message("REACHED")
    }

    /// Run aborted by tilt
    pub fn tilted() -> Self {
        Self::message("TILTED")
    }
}

#[cfg(feature = "defmt")]
impl defmt::Format for StatusScreen {
    fn format(&self, f: defmt::Formatter) {
        defmt::write!(f, "Screen[");
        for (i, line) in self.lines.iter().enumerate() {
            if i > 0 {
                defmt::write!(f, ", ");
            }
            defmt::write!(f, "{}", line.as_str());
        }
        defmt::write!(f, "]");
    }
}
