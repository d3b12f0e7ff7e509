use std::collections::HashMap;

use crate::error::{Result, SoundexError};

lazy_static::lazy_static! {
    static ref LETTER_CODES: HashMap<char, char> = get_letter_codes();
}

fn get_letter_codes() -> HashMap<char, char> {
    let mut codes = HashMap::new();

    // Vowels plus h, w, y get 0
    codes.insert('a', '0');
    codes.insert('e', '0');
    codes.insert('i', '0');
    codes.insert('o', '0');
    codes.insert('u', '0');
    codes.insert('y', '0');
    codes.insert('h', '0');
    codes.insert('w', '0');

    // Group 1: b, f, p, v
    codes.insert('b', '1');
    codes.insert('f', '1');
    codes.insert('p', '1');
    codes.insert('v', '1');

    // Group 2: c, g, j, k, q, s, x, z
    codes.insert('c', '2');
    codes.insert('g', '2');
    codes.insert('j', '2');
    codes.insert('k', '2');
    codes.insert('q', '2');
    codes.insert('s', '2');
    codes.insert('x', '2');
    codes.insert('z', '2');

    // Group 3: d, t
    codes.insert('d', '3');
    codes.insert('t', '3');

    // Group 4: l
    codes.insert('l', '4');

    // Group 5: m, n
    codes.insert('m', '5');
    codes.insert('n', '5');

    // Group 6: r
    codes.insert('r', '6');

    codes
}

/// Digit code for a lowercase letter, or `None` for anything outside the
/// 26-letter table.
pub fn letter_code(letter: char) -> Option<char> {
    LETTER_CODES.get(&letter).copied()
}

/// Case-folds a name and checks it is encodable: non-empty with a first
/// character present in the letter table. Returns the lowercased characters.
pub(crate) fn validate_name(name: &str) -> Result<Vec<char>> {
    let letters: Vec<char> = name.to_lowercase().chars().collect();

    match letters.first() {
        Some(&first) if letter_code(first).is_some() => Ok(letters),
        _ => Err(SoundexError::InvalidName(
            "name must be a non-empty string starting with a letter".to_string(),
        )),
    }
}

/// Digit code for a letter in a validated name. Characters after the first
/// position are only checked here, so a digit or punctuation embedded in an
/// otherwise valid name surfaces as `InvalidName`.
pub(crate) fn letter_code_checked(letter: char) -> Result<char> {
    letter_code(letter).ok_or_else(|| {
        SoundexError::InvalidName(format!("name contains non-letter character '{}'", letter))
    })
}
