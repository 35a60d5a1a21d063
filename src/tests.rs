//! Shared helpers for unit tests.
//!
//! This module should only be enabled during building tests.

#[cfg(not(test))]
compile_error!("`tests` module should be enable only when `cfg(tests)`");

use core::fmt;
use core::fmt::Write as _;

/// Returns true if the value formats to exactly the given string.
///
/// Works without allocation, so unit tests stay usable with
/// `--no-default-features`.
pub(crate) fn eq_str_display<T>(expected: &str, value: &T) -> bool
where
    T: ?Sized + fmt::Display,
{
    /// Writer that consumes the expected string as chunks arrive.
    struct Expect<'a> {
        /// Not-yet-matched tail of the expected string.
        remaining: &'a str,
    }
    impl fmt::Write for Expect<'_> {
        fn write_str(&mut self, chunk: &str) -> fmt::Result {
            match self.remaining.strip_prefix(chunk) {
                Some(rest) => {
                    self.remaining = rest;
                    Ok(())
                }
                None => Err(fmt::Error),
            }
        }
    }

    let mut writer = Expect { remaining: expected };
    write!(writer, "{}", value).is_ok() && writer.remaining.is_empty()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn eq_str_display_matches_exactly() {
        assert!(eq_str_display("hello", "hello"));
        assert!(eq_str_display("42", &42));

        assert!(!eq_str_display("hello", "world"));
        assert!(!eq_str_display("hello world", "hello"));
        assert!(!eq_str_display("hello", "hello world"));
        assert!(!eq_str_display("42", &4));
        assert!(!eq_str_display("4", &42));
    }
}
