use crate::codes::{letter_code_checked, validate_name};
use crate::error::Result;

/// Encodes a name with the classic American (Russell/NARA) Soundex.
///
/// The first letter is kept uppercased. Each later letter contributes its
/// digit unless it shares a code with the letter immediately before it, with
/// 'h' and 'w' acting as separators: they never contribute a digit of their
/// own, but two same-coded letters on either side of one still merge.
///
/// ```
/// use soundex_index::encode_american;
///
/// assert_eq!(encode_american("Ashcraft").unwrap(), "A261");
/// assert_eq!(encode_american("Washington").unwrap(), "W252");
/// ```
pub fn encode_american(name: &str) -> Result<String> {
    let letters = validate_name(name)?;
    let mut last = letters[0];

    let mut encoded = String::new();
    encoded.push(last.to_ascii_uppercase());

    for &letter in &letters[1..] {
        let digit = letter_code_checked(letter)?;
        if digit == letter_code_checked(last)? {
            // Adjacent letters with the same code collapse into one, but the
            // suppression state tracks the letter itself, not the retained
            // output.
            last = letter;
            continue;
        }
        if last == 'h' || last == 'w' {
            // Separator rule: compare against what was actually retained, and
            // append even a '0' when it differs.
            if Some(digit) != encoded.chars().last() {
                encoded.push(digit);
            }
        } else if digit != '0' {
            encoded.push(digit);
        }
        last = letter;
    }

    encoded.push_str("000");
    encoded.truncate(4);
    Ok(encoded)
}
