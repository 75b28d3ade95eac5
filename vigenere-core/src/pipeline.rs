//! Line-at-a-time driver: case, layout, then cipher.

use tracing::trace;

use crate::case::CaseMode;
use crate::cipher;
use crate::error::Result;
use crate::key::Key;
use crate::layout::{Layout, LineFormat};

/// Settings resolved by the caller before a run starts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub case: CaseMode,
    /// 0 for word mode, a positive block length, or -1 for full-row blocks.
    pub block_size: i64,
    /// Column width; values <= 0 mean unbounded.
    pub cols: i64,
    pub decode: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            case: CaseMode::Unchanged,
            block_size: 0,
            cols: -1,
            decode: false,
        }
    }
}

/// Owns everything a run needs, including the letter position shared by
/// all of its lines.
#[derive(Debug, Clone)]
pub struct Pipeline {
    key: Key,
    case: CaseMode,
    layout: Layout,
    position: usize,
    ends_with_newline: bool,
}

impl Pipeline {
    /// Parses the key and selects the layout. Nothing is enciphered if
    /// this fails.
    ///
    /// # Example
    ///
    /// ```rust
    /// use vigenere_core::{Config, Pipeline};
    ///
    /// let mut pipeline = Pipeline::new(&Config::default(), "3")?;
    /// assert_eq!(pipeline.process_line("Hello"), "Khoor\n");
    /// # Ok::<(), vigenere_core::VigenereError>(())
    /// ```
    pub fn new(config: &Config, key_spec: &str) -> Result<Self> {
        let key = Key::parse(key_spec, config.decode)?;
        let layout = Layout::from_options(config.block_size, config.cols)?;
        Ok(Self::with_parts(key, config.case, layout))
    }

    pub fn with_parts(key: Key, case: CaseMode, layout: Layout) -> Self {
        Self {
            key,
            case,
            layout,
            position: 0,
            ends_with_newline: true,
        }
    }

    /// Formats and enciphers one line of input.
    pub fn process_line(&mut self, line: &str) -> String {
        let cased = self.case.apply(line);
        let formatted = self.layout.format(&cased, self.position);
        let (output, position) = cipher::transform(&formatted, &self.key, self.position);
        trace!(start = self.position, end = position, "processed line");

        self.position = position;
        if !output.is_empty() {
            self.ends_with_newline = output.ends_with('\n');
        }
        output
    }

    /// Text needed to terminate the output, if the last line left it open.
    pub fn finish(&self) -> Option<&'static str> {
        if self.ends_with_newline {
            None
        } else {
            Some("\n")
        }
    }

    /// Number of letters enciphered so far in this run.
    pub fn position(&self) -> usize {
        self.position
    }

    pub fn key(&self) -> &Key {
        &self.key
    }

    pub fn layout(&self) -> &Layout {
        &self.layout
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::VigenereError;

    #[test]
    fn test_default_config_shift() {
        let mut pipeline = Pipeline::new(&Config::default(), "3").unwrap();
        assert_eq!(pipeline.process_line("Hello, World!"), "Khoor, Zruog!\n");
        assert_eq!(pipeline.position(), 10);
        assert_eq!(pipeline.finish(), None);
    }

    #[test]
    fn test_counter_persists_across_lines() {
        let mut pipeline = Pipeline::new(&Config::default(), "1,2,3").unwrap();
        let first = pipeline.process_line("AB");
        let second = pipeline.process_line("CD");
        assert_eq!(first, "BD\n");
        assert_eq!(second, "FE\n");
        assert_eq!(pipeline.position(), 4);
    }

    #[test]
    fn test_upper_blocks() {
        let config = Config {
            case: CaseMode::Upper,
            block_size: 3,
            cols: 10,
            ..Config::default()
        };
        let mut pipeline = Pipeline::new(&config, "0").unwrap();
        assert_eq!(pipeline.process_line("Hello World"), "HEL LOW\nORL D");
        assert_eq!(pipeline.finish(), Some("\n"));
    }

    #[test]
    fn test_decode_config() {
        let config = Config {
            decode: true,
            ..Config::default()
        };
        let mut pipeline = Pipeline::new(&config, "3").unwrap();
        assert_eq!(pipeline.process_line("Khoor"), "Hello\n");
    }

    #[test]
    fn test_configuration_errors() {
        assert!(matches!(
            Pipeline::new(&Config::default(), ",,!"),
            Err(VigenereError::EmptyKey)
        ));
        let config = Config {
            block_size: 5,
            ..Config::default()
        };
        let err = Pipeline::new(&config, "A").unwrap_err();
        assert!(err.is_configuration());
    }

    #[test]
    fn test_empty_line_keeps_finish_state() {
        let config = Config {
            block_size: 2,
            cols: 20,
            ..Config::default()
        };
        let mut pipeline = Pipeline::new(&config, "0").unwrap();
        assert_eq!(pipeline.process_line("abc"), "ab c");
        assert_eq!(pipeline.process_line("123"), "");
        assert_eq!(pipeline.finish(), Some("\n"));
    }
}
