//! Greedy word wrap
//!
//! Words are delimited by a space, newline, hyphen or forward slash. The
//! separator in front of a word is kept; when a hyphen, slash or newline
//! falls on a break it stays at the end of the line if there is room and
//! otherwise moves to the start of the next one.

use super::LineFormat;

fn is_separator(c: char) -> bool {
    matches!(c, ' ' | '\n' | '-' | '/')
}

/// Wraps text so that lines stay under a column width.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LineWrapper {
    /// `None` disables wrapping.
    cols: Option<usize>,
}

impl LineWrapper {
    /// Creates a wrapper for `cols` columns; `cols <= 0` never wraps.
    pub fn new(cols: i64) -> Self {
        let cols = usize::try_from(cols).ok().filter(|&cols| cols > 0);
        Self { cols }
    }

    pub fn cols(&self) -> Option<usize> {
        self.cols
    }

    fn fits(&self, width: usize) -> bool {
        self.cols.map_or(true, |cols| width < cols)
    }

    /// Wraps `text` and terminates the result with a newline.
    ///
    /// The column counter only restarts on inserted breaks, so separators
    /// before the first word of a line are dropped.
    pub fn wrap(&self, text: &str) -> String {
        let mut output = String::with_capacity(text.len() + 1);
        let mut word = String::new();
        let mut word_len: usize = 0;
        let mut column: usize = 0;
        let mut sep = ' ';

        // The trailing space flushes the last word.
        for c in text.chars().chain(std::iter::once(' ')) {
            if !is_separator(c) {
                word.push(c);
                word_len += 1;
                continue;
            }

            if column == 0 {
                output.push_str(&word);
                column += word_len;
            } else if self.fits(column + word_len) {
                output.push(sep);
                output.push_str(&word);
                column += word_len + 1;
            } else if sep == ' ' {
                output.push('\n');
                output.push_str(&word);
                column = word_len;
            } else if self.fits(column) {
                output.push(sep);
                output.push('\n');
                output.push_str(&word);
                column = word_len;
            } else {
                output.push('\n');
                output.push(sep);
                output.push_str(&word);
                column = if sep == '\n' { word_len } else { word_len + 1 };
            }

            word.clear();
            word_len = 0;
            sep = c;
        }

        output.push('\n');
        output
    }
}

impl LineFormat for LineWrapper {
    fn format(&self, text: &str, _position: usize) -> String {
        self.wrap(text)
    }
}
