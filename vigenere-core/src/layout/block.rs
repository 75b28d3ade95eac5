//! Block grouping
//!
//! Everything except ASCII letters is removed and the letters are regrouped
//! into blocks separated by single spaces, with a fixed number of blocks per
//! row. Block and row boundaries are counted from the start of the run, so
//! grouping continues seamlessly across input lines.

use super::LineFormat;
use crate::error::{Result, VigenereError};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BlockFormatter {
    /// Letters per block; `None` strips non-letters without grouping.
    block_len: Option<usize>,
    blocks_per_row: usize,
}

impl BlockFormatter {
    /// Creates a formatter from the block size and column width options.
    ///
    /// - `block_size > 0`: blocks of that many letters, as many per row as
    ///   fit in `cols` (counting one space between blocks)
    /// - `block_size < 0`: one block per row, `cols` letters long
    /// - `block_size == 0`: letters only, no grouping
    ///
    /// # Errors
    ///
    /// `ZeroBlocksPerRow` when not even one block fits in `cols`, and
    /// `ColumnsRequired` for a negative block size without a positive `cols`.
    ///
    /// Both values must fit in 32 bits, otherwise `IntegerOutOfRange`.
    pub fn new(block_size: i64, cols: i64) -> Result<Self> {
        for value in [block_size, cols] {
            if i32::try_from(value).is_err() {
                return Err(VigenereError::IntegerOutOfRange(value.to_string()));
            }
        }

        if block_size > 0 {
            let blocks_per_row = (cols + 1) / (block_size + 1);
            if blocks_per_row <= 0 {
                return Err(VigenereError::ZeroBlocksPerRow { block_size, cols });
            }
            Ok(Self {
                block_len: usize::try_from(block_size).ok(),
                blocks_per_row: blocks_per_row as usize,
            })
        } else if block_size < 0 {
            if cols <= 0 {
                return Err(VigenereError::ColumnsRequired(cols));
            }
            Ok(Self {
                block_len: usize::try_from(cols).ok(),
                blocks_per_row: 1,
            })
        } else {
            Ok(Self {
                block_len: None,
                blocks_per_row: 1,
            })
        }
    }

    pub fn block_len(&self) -> Option<usize> {
        self.block_len
    }

    pub fn blocks_per_row(&self) -> usize {
        self.blocks_per_row
    }

    /// Groups the letters of `text`; `start` is the number of letters
    /// already emitted earlier in the run.
    pub fn group(&self, text: &str, start: usize) -> String {
        let mut output = String::with_capacity(text.len() + text.len() / 2);
        let mut count = start;

        for c in text.chars().filter(char::is_ascii_alphabetic) {
            output.push(c);
            count += 1;

            if let Some(block_len) = self.block_len {
                if count % block_len == 0 {
                    if (count / block_len) % self.blocks_per_row == 0 {
                        output.push('\n');
                    } else {
                        output.push(' ');
                    }
                }
            }
        }

        output
    }
}

impl LineFormat for BlockFormatter {
    fn format(&self, text: &str, position: usize) -> String {
        self.group(text, position)
    }
}
