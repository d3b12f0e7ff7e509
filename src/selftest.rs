//! Built-in verification suite backing the CLI's zero-argument mode.

use crate::american::encode_american;
use crate::error::{Result, SoundexError};
use crate::sql::encode_sql;

pub const AMERICAN_VECTORS: &[(&str, &str)] = &[
    ("Ashcraft", "A261"),
    ("Ashcroft", "A261"),
    ("Deusen", "D250"),
    ("Gutierrez", "G362"),
    ("Honeyman", "H555"),
    ("Jackson", "J250"),
    ("Lee", "L000"),
    ("Pfister", "P236"),
    ("Rubin", "R150"),
    ("Robert", "R163"),
    ("Rupert", "R163"),
    ("Tymczak", "T522"),
    ("VanDeusen", "V532"),
    ("Washington", "W252"),
];

pub const SQL_VECTORS: &[(&str, &str)] = &[
    ("Honeyman", "H555"),
    ("Robert", "R163"),
    ("Rupert", "R163"),
    ("Tymczak", "T522"),
];

pub const INVALID_NAMES: &[&str] = &["", "8oo", "*ab"];

/// Titlecases a name: first character uppercased, the rest lowercased.
/// `"VanDeusen"` becomes the distinct input `"Vandeusen"`.
pub(crate) fn titlecase(name: &str) -> String {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) => first
            .to_uppercase()
            .chain(chars.as_str().to_lowercase().chars())
            .collect(),
        None => String::new(),
    }
}

/// Runs every reference vector and error case through both encoders,
/// printing one line per check. Returns the number of failed checks.
pub fn run() -> usize {
    let mut failures = 0;

    failures += run_vectors("American", encode_american, AMERICAN_VECTORS);
    failures += run_vectors("SQL", encode_sql, SQL_VECTORS);
    failures += run_invalid("American", encode_american);
    failures += run_invalid("SQL", encode_sql);

    if failures == 0 {
        println!("all checks passed");
    } else {
        println!("{} check(s) FAILED", failures);
    }
    failures
}

fn run_vectors(
    variant: &str,
    encode: fn(&str) -> Result<String>,
    vectors: &[(&str, &str)],
) -> usize {
    let mut failures = 0;
    for (name, expected) in vectors {
        // The code must not depend on the input's casing.
        for name in [
            name.to_string(),
            name.to_lowercase(),
            name.to_uppercase(),
            titlecase(name),
        ] {
            match encode(&name) {
                Ok(code) if code == *expected => {
                    println!("ok     {}({:?}) = {}", variant, name, code);
                }
                Ok(code) => {
                    println!(
                        "FAILED {}({:?}) = {}, expected {}",
                        variant, name, code, expected
                    );
                    failures += 1;
                }
                Err(e) => {
                    println!("FAILED {}({:?}): {}", variant, name, e);
                    failures += 1;
                }
            }
        }
    }
    failures
}

fn run_invalid(variant: &str, encode: fn(&str) -> Result<String>) -> usize {
    let mut failures = 0;
    for name in INVALID_NAMES {
        match encode(name) {
            Err(SoundexError::InvalidName(_)) => {
                println!("ok     {}({:?}) rejected", variant, name);
            }
            Err(e) => {
                println!("FAILED {}({:?}): wrong error: {}", variant, name, e);
                failures += 1;
            }
            Ok(code) => {
                println!("FAILED {}({:?}) = {}, expected rejection", variant, name, code);
                failures += 1;
            }
        }
    }
    failures
}
