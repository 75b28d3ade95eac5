//! Key parsing
//!
//! A key specification is a comma separated list of tokens. A token that
//! starts with an integer contributes that integer; any other token
//! contributes one shift per ASCII letter it contains (`a`/`A` = 0 through
//! `z`/`Z` = 25). Characters that are neither are skipped.

use tracing::debug;

use crate::error::{Result, VigenereError};
use crate::numeric::parse_leading_int;

/// Number of letters in the alphabet the cipher works over.
pub const ALPHABET_LEN: i64 = 26;

/// An immutable, non-empty sequence of shift values.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Key {
    shifts: Vec<i64>,
}

impl Key {
    /// Parses a key specification, negating every shift when `decode` is set.
    ///
    /// # Errors
    ///
    /// `VigenereError::EmptyKey` if no token yields a shift, and
    /// `VigenereError::IntegerOutOfRange` for numeric tokens beyond 32 bits.
    ///
    /// # Example
    ///
    /// ```rust
    /// use vigenere_core::Key;
    ///
    /// let key = Key::parse("3,A", false)?;
    /// assert_eq!(key.shifts(), &[3, 0]);
    /// # Ok::<(), vigenere_core::VigenereError>(())
    /// ```
    pub fn parse(spec: &str, decode: bool) -> Result<Self> {
        let sign = if decode { -1 } else { 1 };
        let mut shifts: Vec<i64> = Vec::new();

        for token in spec.split(',') {
            match parse_leading_int(token)? {
                Some(value) => shifts.push(value * sign),
                None => shifts.extend(
                    token
                        .bytes()
                        .filter(u8::is_ascii_alphabetic)
                        .map(|byte| i64::from(byte.to_ascii_lowercase() - b'a') * sign),
                ),
            }
        }

        let key = Self::from_shifts(shifts)?;
        debug!(len = key.len(), decode, "parsed key");
        Ok(key)
    }

    /// Builds a key from raw shift values.
    pub fn from_shifts(shifts: Vec<i64>) -> Result<Self> {
        if shifts.is_empty() {
            return Err(VigenereError::EmptyKey);
        }
        Ok(Self { shifts })
    }

    /// The key with every shift negated.
    pub fn inverse(&self) -> Self {
        Self {
            shifts: self.shifts.iter().map(|shift| -shift).collect(),
        }
    }

    /// Shift applied to the letter at running position `position`.
    pub fn shift_at(&self, position: usize) -> i64 {
        self.shifts[position % self.shifts.len()]
    }

    pub fn shifts(&self) -> &[i64] {
        &self.shifts
    }

    pub fn len(&self) -> usize {
        self.shifts.len()
    }

    /// Always false; a `Key` cannot be built without shifts.
    pub fn is_empty(&self) -> bool {
        self.shifts.is_empty()
    }
}
