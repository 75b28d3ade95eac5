//! Input and output stream selection.
//!
//! Input comes from the first usable source of: the input file, the
//! positional text, or one line typed at the console. Files that cannot be
//! opened are reported and skipped rather than treated as fatal.

use std::fs::File;
use std::io::{self, BufRead, BufReader, BufWriter, Write};
use std::path::Path;

use tracing::{debug, warn};
use vigenere_core::{Pipeline, Result};

/// Label printed before the result of an interactive run.
pub const OUTPUT_LABEL: &str = "Out: ";

/// Where the lines of a run come from.
pub enum Source {
    File(BufReader<File>),
    Argument(String),
    Console(String),
}

impl Source {
    /// Picks the input source, prompting on `console_out` and reading from
    /// `console_in` when neither a readable file nor text was given.
    pub fn resolve<R: BufRead, W: Write>(
        input: Option<&Path>,
        text: Option<String>,
        console_in: &mut R,
        console_out: &mut W,
    ) -> io::Result<Self> {
        if let Some(path) = input {
            match File::open(path) {
                Ok(file) => {
                    debug!(path = %path.display(), "reading input file");
                    return Ok(Source::File(BufReader::new(file)));
                }
                Err(err) => warn!(path = %path.display(), %err, "cannot open input file, ignoring it"),
            }
        }

        match text {
            Some(text) => Ok(Source::Argument(text)),
            None => prompt(" In: ", console_in, console_out).map(Source::Console),
        }
    }

    pub fn is_console(&self) -> bool {
        matches!(self, Source::Console(_))
    }

    /// Feeds every line of the source through `pipeline` into `out`.
    pub fn run(self, pipeline: &mut Pipeline, out: &mut dyn Write) -> Result<()> {
        match self {
            Source::File(mut reader) => {
                let mut buf = Vec::new();
                while read_line_bytes(&mut reader, &mut buf)? {
                    let line = String::from_utf8_lossy(&buf);
                    out.write_all(pipeline.process_line(&line).as_bytes())?;
                }
            }
            Source::Argument(line) | Source::Console(line) => {
                out.write_all(pipeline.process_line(&line).as_bytes())?;
            }
        }

        if let Some(tail) = pipeline.finish() {
            out.write_all(tail.as_bytes())?;
        }
        out.flush()?;
        Ok(())
    }
}

/// Reads one line into `buf` without its trailing `\n`. A `\r` before it
/// is kept. Returns false at end of input.
fn read_line_bytes<R: BufRead>(reader: &mut R, buf: &mut Vec<u8>) -> io::Result<bool> {
    buf.clear();
    if reader.read_until(b'\n', buf)? == 0 {
        return Ok(false);
    }
    if buf.last() == Some(&b'\n') {
        buf.pop();
    }
    Ok(true)
}

/// Opens the output file, or returns `None` so the caller uses stdout.
pub fn open_output(output: Option<&Path>) -> Option<BufWriter<File>> {
    let path = output?;
    match File::create(path) {
        Ok(file) => {
            debug!(path = %path.display(), "writing output file");
            Some(BufWriter::new(file))
        }
        Err(err) => {
            warn!(path = %path.display(), %err, "cannot create output file, writing to stdout");
            None
        }
    }
}

/// Writes `label`, then reads one line without its line ending. End of
/// input yields an empty line.
pub fn prompt<R: BufRead, W: Write>(label: &str, input: &mut R, output: &mut W) -> io::Result<String> {
    output.write_all(label.as_bytes())?;
    output.flush()?;

    let mut line = String::new();
    input.read_line(&mut line)?;
    let trimmed_len = line.trim_end_matches(['\n', '\r']).len();
    line.truncate(trimmed_len);
    Ok(line)
}
