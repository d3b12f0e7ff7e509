//! Phonetic index codes for personal names.
//!
//! Implements two variants of the Soundex algorithm sharing one letter-code
//! table: the classic American (Russell/NARA) variant with the h/w separator
//! rule, and the SQL variant used by common database engines, which collapses
//! adjacent equal digits across the whole name before stripping zeros.
//! Both produce a 4-character code: one uppercase letter and three digits.

pub mod american;
pub mod codes;
pub mod error;
pub mod selftest;
pub mod sql;

pub use american::encode_american;
pub use codes::letter_code;
pub use error::{Result, SoundexError};
pub use sql::encode_sql;
