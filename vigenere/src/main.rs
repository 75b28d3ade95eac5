use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::EnvFilter;
use vigenere_core::numeric::parse_leading_int;
use vigenere_core::{CaseMode, Config, Pipeline, Result, VigenereError};

mod streams;

use streams::{open_output, prompt, Source, OUTPUT_LABEL};

/// Printed for `-v/--version`.
const VERSION_BANNER: &str = "Version 1.0";

/// Command-line arguments for the Vigenère cipher program.
#[derive(Parser, Debug)]
#[command(
    name = "vigenere",
    disable_version_flag = true,
    about = "Apply a Vigenère cipher to text, with optional word wrap or letter blocks",
    long_about = "
Apply a Vigenère cipher to text, with optional word wrap or letter blocks.

Input is read from the input file if one is given and can be opened,
otherwise from INPUT_TEXT, otherwise one line is read from the console.

KEYS:
Letters or comma separated integers may be used as keys, e.g. `lemon`,
`3,1,4` or `3,key`. Letters count from a = 0 to z = 25. The Vigenère
cipher with a key of length 1 is just a shift cipher.
"
)]
struct Cli {
    /// Show the version
    #[arg(short = 'v', long = "version")]
    version: bool,

    /// The file to apply the cipher to
    #[arg(short, long, value_name = "FILE")]
    input: Option<PathBuf>,

    /// The file to save the output to
    #[arg(short, long, value_name = "FILE")]
    output: Option<PathBuf>,

    /// The key to use for the cipher; prompted for when missing
    #[arg(short, long)]
    key: Option<String>,

    /// Apply the inverse key to decode the cipher
    #[arg(short, long)]
    decode: bool,

    /// Convert the output to upper case
    #[arg(short, long, overrides_with = "lower")]
    upper: bool,

    /// Convert the output to lower case
    #[arg(short, long, overrides_with = "upper")]
    lower: bool,

    /// Letters per block: 0 for no grouping, -1 to remove all spaces
    #[arg(short, long, value_name = "VALUE", default_value = "0", allow_hyphen_values = true)]
    block: String,

    /// The maximum number of columns (-1 for unlimited)
    #[arg(short, long, value_name = "VALUE", default_value = "-1", allow_hyphen_values = true)]
    cols: String,

    /// Text to apply the cipher to when no input file is given
    #[arg(value_name = "INPUT_TEXT")]
    text: Option<String>,
}

impl Cli {
    fn config(&self) -> Result<Config> {
        let case = if self.upper {
            CaseMode::Upper
        } else if self.lower {
            CaseMode::Lower
        } else {
            CaseMode::Unchanged
        };

        Ok(Config {
            case,
            block_size: parse_option("block size", &self.block)?,
            cols: parse_option("number of columns", &self.cols)?,
            decode: self.decode,
        })
    }
}

/// Parses an integer option, keeping only its leading number.
fn parse_option(option: &'static str, value: &str) -> Result<i64> {
    parse_leading_int(value)?.ok_or_else(|| VigenereError::InvalidArgument {
        option,
        value: value.to_string(),
    })
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .init();
}

fn run<R: BufRead, W: Write>(cli: Cli, console_in: &mut R, console_out: &mut W) -> Result<()> {
    if cli.version {
        writeln!(console_out, "{}", VERSION_BANNER)?;
        return Ok(());
    }

    let config = cli.config()?;

    // If a key has not been specified accept it from the console
    let key_spec = match cli.key {
        Some(key) if !key.is_empty() => key,
        _ => prompt("Key: ", console_in, console_out)?,
    };
    let mut pipeline = Pipeline::new(&config, &key_spec)?;

    let output_file = open_output(cli.output.as_deref());
    let source = Source::resolve(cli.input.as_deref(), cli.text, console_in, console_out)?;

    match output_file {
        Some(mut file) => source.run(&mut pipeline, &mut file),
        None => {
            if source.is_console() {
                console_out.write_all(OUTPUT_LABEL.as_bytes())?;
            }
            source.run(&mut pipeline, console_out)
        }
    }
}

/// Main entry point for the Vigenère cipher program.
fn main() -> ExitCode {
    let cli: Cli = Cli::parse();
    init_tracing();

    let stdin = io::stdin();
    let stdout = io::stdout();
    match run(cli, &mut stdin.lock(), &mut stdout.lock()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("{}", err);
            ExitCode::FAILURE
        }
    }
}
