use crate::codes::{letter_code_checked, validate_name};
use crate::error::Result;

/// Encodes a name with the Soundex variant found in common SQL database
/// engines.
///
/// Unlike the American variant, the whole name is first mapped to digits and
/// adjacent equal digits are collapsed globally, including across vowels,
/// before the zero-coded placeholders are removed. The order matters: a
/// zero-coded letter between two occurrences of the same digit keeps both
/// alive through the collapse, and the zero removal then re-merges them next
/// to the leading letter, which decides whether that letter absorbs its own
/// digit or is inserted in front of it.
///
/// ```
/// use soundex_index::encode_sql;
///
/// assert_eq!(encode_sql("Tymczak").unwrap(), "T522");
/// ```
pub fn encode_sql(name: &str) -> Result<String> {
    let letters = validate_name(name)?;
    let saved = letters[0];

    // Map every letter to its digit, the first included.
    let digits = letters
        .iter()
        .map(|&letter| letter_code_checked(letter))
        .collect::<Result<Vec<char>>>()?;

    // Collapse adjacent equal digits across the entire name.
    let mut collapsed = Vec::new();
    let mut last = digits[0];
    for &digit in &digits[1..] {
        if digit != last {
            collapsed.push(digit);
        }
        last = digit;
    }

    // Strip the zero placeholders left by vowels and h/w/y.
    let mut result: Vec<char> = collapsed.into_iter().filter(|&digit| digit != '0').collect();

    let saved_upper = saved.to_ascii_uppercase();
    match result.first() {
        // The leading letter absorbs its own digit when it survived adjacent
        // to the front.
        Some(&digit) if digit == letter_code_checked(saved)? => result[0] = saved_upper,
        // Something broke adjacency before removal, or nothing survived at
        // all (an all-vowel tail); either way the letter goes in front.
        _ => result.insert(0, saved_upper),
    }

    let mut encoded: String = result.into_iter().collect();
    encoded.push_str("000");
    encoded.truncate(4);
    Ok(encoded)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::SoundexError;
    use regex::Regex;

    const VECTORS: &[(&str, &str)] = &[
        ("Honeyman", "H555"),
        ("Robert", "R163"),
        ("Rupert", "R163"),
        ("Tymczak", "T522"),
    ];

    #[test]
    fn test_reference_vectors() {
        for (name, expected) in VECTORS {
            assert_eq!(encode_sql(name).unwrap(), *expected, "name: {}", name);
        }
    }

    #[test]
    fn test_case_insensitive() {
        use crate::selftest::titlecase;

        for (name, expected) in VECTORS {
            assert_eq!(encode_sql(&name.to_lowercase()).unwrap(), *expected);
            assert_eq!(encode_sql(&name.to_uppercase()).unwrap(), *expected);
            assert_eq!(encode_sql(&titlecase(name)).unwrap(), *expected);
        }
    }

    #[test]
    fn test_output_shape() {
        let shape = Regex::new(r"^[A-Z][0-9]{3}$").unwrap();
        for (name, _) in VECTORS {
            assert!(shape.is_match(&encode_sql(name).unwrap()));
        }
    }

    #[test]
    fn test_leading_letter_absorbs_own_digit() {
        // j(2) a c(2) k(2) s(2) o n(5): the vowel keeps the second '2' alive
        // through the collapse, zero removal re-merges it with the front, and
        // the 'J' absorbs it, leaving only the '5'.
        assert_eq!(encode_sql("Jackson").unwrap(), "J500");
    }

    #[test]
    fn test_leading_letter_inserted_when_digit_differs() {
        // r(6) o b(1): the first survivor is '1', not the leading letter's
        // '6', so the 'R' is inserted and the digit retained.
        assert_eq!(encode_sql("Robert").unwrap(), "R163");
    }

    #[test]
    fn test_all_vowel_tail_pads_with_zeros() {
        assert_eq!(encode_sql("Lee").unwrap(), "L000");
    }

    #[test]
    fn test_rejects_empty() {
        assert!(matches!(encode_sql(""), Err(SoundexError::InvalidName(_))));
    }

    #[test]
    fn test_rejects_non_letter_start() {
        assert!(matches!(
            encode_sql("8oo"),
            Err(SoundexError::InvalidName(_))
        ));
        assert!(matches!(
            encode_sql("*ab"),
            Err(SoundexError::InvalidName(_))
        ));
    }

    #[test]
    fn test_rejects_embedded_non_letter() {
        assert!(matches!(
            encode_sql("O'Brien"),
            Err(SoundexError::InvalidName(_))
        ));
    }

    #[test]
    fn test_matches_american_on_simple_names() {
        use crate::american::encode_american;

        for name in ["Honeyman", "Robert", "Rupert", "Tymczak"] {
            assert_eq!(encode_sql(name).unwrap(), encode_american(name).unwrap());
        }
    }

    #[test]
    fn test_differs_from_american_across_hw() {
        use crate::american::encode_american;

        // American merges the s/c pair across the 'h'; the SQL variant keeps
        // both because the intervening '0' breaks digit adjacency.
        assert_eq!(encode_american("Ashcraft").unwrap(), "A261");
        assert_eq!(encode_sql("Ashcraft").unwrap(), "A226");
    }
}
