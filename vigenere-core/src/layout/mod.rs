//! Output layout: how a line of text is arranged before it is enciphered.
//!
//! Three layouts exist and exactly one is active for a run:
//!
//! - **Plain** - the line is passed through and terminated with a newline
//! - **Wrap** - greedy word wrap to a column width ([`LineWrapper`])
//! - **Blocks** - letters only, grouped into fixed-size blocks and rows
//!   ([`BlockFormatter`])

pub mod block;
pub mod wrap;

pub use block::BlockFormatter;
pub use wrap::LineWrapper;

use tracing::debug;

use crate::error::Result;

/// Formats one line of input given the running letter position of the run.
pub trait LineFormat {
    fn format(&self, text: &str, position: usize) -> String;
}

/// The layout selected for a run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Layout {
    Plain,
    Wrap(LineWrapper),
    Blocks(BlockFormatter),
}

impl Layout {
    /// Selects a layout from the block size and column width options.
    ///
    /// A block size of 0 means word mode: wrapped when `cols > 0`, plain
    /// otherwise. Any other block size selects block mode, whose parameters
    /// are validated by [`BlockFormatter::new`].
    pub fn from_options(block_size: i64, cols: i64) -> Result<Self> {
        let layout = if block_size != 0 {
            Layout::Blocks(BlockFormatter::new(block_size, cols)?)
        } else if cols > 0 {
            Layout::Wrap(LineWrapper::new(cols))
        } else {
            Layout::Plain
        };
        debug!(?layout, "selected layout");
        Ok(layout)
    }
}

impl LineFormat for Layout {
    fn format(&self, text: &str, position: usize) -> String {
        match self {
            Layout::Plain => format!("{}\n", text),
            Layout::Wrap(wrapper) => wrapper.format(text, position),
            Layout::Blocks(blocks) => blocks.format(text, position),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::VigenereError;

    #[test]
    fn test_layout_selection() {
        assert_eq!(Layout::from_options(0, -1).unwrap(), Layout::Plain);
        assert_eq!(Layout::from_options(0, 0).unwrap(), Layout::Plain);
        assert!(matches!(Layout::from_options(0, 40).unwrap(), Layout::Wrap(_)));
        assert!(matches!(Layout::from_options(5, 40).unwrap(), Layout::Blocks(_)));
        assert!(matches!(Layout::from_options(-1, 40).unwrap(), Layout::Blocks(_)));
    }

    #[test]
    fn test_block_errors_surface() {
        assert!(matches!(
            Layout::from_options(5, -1),
            Err(VigenereError::ZeroBlocksPerRow { block_size: 5, cols: -1 })
        ));
        assert!(matches!(
            Layout::from_options(-1, -1),
            Err(VigenereError::ColumnsRequired(-1))
        ));
    }

    #[test]
    fn test_plain_keeps_line() {
        assert_eq!(Layout::Plain.format("  Hello, World!", 0), "  Hello, World!\n");
    }

    #[test]
    fn test_plain_differs_from_unbounded_wrap() {
        assert_eq!(Layout::Plain.format("  x", 0), "  x\n");
        assert_eq!(LineWrapper::new(-1).format("  x", 0), "x\n");
        assert_eq!(
            Layout::Plain.format("a b-c/d", 0),
            LineWrapper::new(-1).format("a b-c/d", 0)
        );
    }
}
