//! # Vigenère Core
//!
//! A classical polyalphabetic substitution cipher over ASCII letters,
//! together with the text layout applied before enciphering.
//!
//! ## Pipeline
//!
//! Every input line goes through three stages:
//!
//! - **Case** - upper, lower or unchanged ([`CaseMode`])
//! - **Layout** - plain, word wrapped ([`LineWrapper`]) or grouped into
//!   letter blocks ([`BlockFormatter`])
//! - **Cipher** - the running Vigenère shift ([`cipher::transform`])
//!
//! The key position advances only on letters and carries over from one line
//! to the next, so splitting the input differently never changes which shift
//! a letter receives.
//!
//! ## Usage
//!
//! ```rust
//! use vigenere_core::{Config, Pipeline};
//!
//! let mut encoder = Pipeline::new(&Config::default(), "LEMON")?;
//! let encoded = encoder.process_line("ATTACK AT DAWN");
//! assert_eq!(encoded, "LXFOPV EF RNHR\n");
//!
//! let mut decoder = Pipeline::new(&Config { decode: true, ..Config::default() }, "LEMON")?;
//! assert_eq!(decoder.process_line(encoded.trim_end()), "ATTACK AT DAWN\n");
//! # Ok::<(), vigenere_core::VigenereError>(())
//! ```
//!
//! This is a teaching cipher. It offers no security whatsoever.

pub mod case;
pub mod cipher;
pub mod error;
pub mod key;
pub mod layout;
pub mod numeric;
pub mod pipeline;

pub use case::CaseMode;
pub use error::{Result, VigenereError};
pub use key::Key;
pub use layout::{BlockFormatter, Layout, LineFormat, LineWrapper};
pub use pipeline::{Config, Pipeline};

/// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
