//! The running Vigenère shift

use crate::key::{Key, ALPHABET_LEN};

/// Shifts a single ASCII letter, keeping its case. Other characters are
/// returned unchanged.
pub fn shift_letter(letter: char, shift: i64) -> char {
    let base = match letter {
        'A'..='Z' => b'A',
        'a'..='z' => b'a',
        _ => return letter,
    };
    let offset = (i64::from(letter as u8 - base) + shift).rem_euclid(ALPHABET_LEN);
    // offset is in 0..26
    (base + offset as u8) as char
}

/// Applies `key` to every ASCII letter in `text`, starting at letter
/// `position` of the run.
///
/// Only letters consume key positions. Returns the transformed text and the
/// position after the last letter, to be passed to the next call.
pub fn transform(text: &str, key: &Key, position: usize) -> (String, usize) {
    let mut position = position;
    let output: String = text
        .chars()
        .map(|c| {
            if c.is_ascii_alphabetic() {
                let shifted = shift_letter(c, key.shift_at(position));
                position += 1;
                shifted
            } else {
                c
            }
        })
        .collect();
    (output, position)
}
