//! Fuzz target for numeric input parsing
//!
//! # Invariants
//!
//! - Parsing NEVER panics on arbitrary text
//! - Accepted input round-trips through its decimal form
//! - Whitespace-only input is always rejected as empty

#![no_main]

use boxoffice_app::{InputError, parse_integer};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &str| {
    match parse_integer(data) {
        Ok(value) => {
            assert_eq!(parse_integer(&value.to_string()), Ok(value));
            assert_eq!(data.trim().parse::<i64>(), Ok(value));
        },
        Err(InputError::Empty) => assert!(data.trim().is_empty()),
        Err(InputError::NotANumber { input }) => {
            assert!(!input.is_empty());
            assert!(data.trim().parse::<i64>().is_err());
        },
    }
});
