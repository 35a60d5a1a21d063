//! Decomposition error.

use core::fmt;

#[cfg(feature = "std")]
use std::error;

/// Port parse error.
///
/// This is the only way a decomposition can fail: the authority section
/// contained a `:`, and what followed was not a decimal integer in
/// `[0, 65535]` (empty, a sign, a non-digit character, or an overflowing
/// value). Every other input decomposes successfully; see the crate
/// documentation for why permissiveness is the intended behavior.
///
/// Returned by [`UriReference::parse`].
///
/// [`UriReference::parse`]: crate::UriReference::parse
// Note that this type should implement `Copy` trait.
// To return additional non-`Copy` data as an error, use wrapper type
// (as `std::string::FromUtf8Error` contains `std::str::Utf8Error`).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PortParseError(());

impl PortParseError {
    /// Creates a new `PortParseError`.
    ///
    /// For internal use.
    #[inline]
    pub(crate) fn new() -> Self {
        PortParseError(())
    }
}

impl fmt::Display for PortParseError {
    #[inline]
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("invalid port number in URI authority")
    }
}

#[cfg(feature = "std")]
impl error::Error for PortParseError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_message() {
        assert!(crate::tests::eq_str_display(
            "invalid port number in URI authority",
            &PortParseError::new()
        ));
    }
}
