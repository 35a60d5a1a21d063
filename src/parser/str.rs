//! Minimal byte-based string splitters.
//!
//! Every needle passed to these functions is a single ASCII byte (a URI
//! delimiter), so a found position is always a `char` boundary and slicing
//! there cannot split a multibyte sequence.

/// Returns the position of the first occurrence of the given byte.
///
/// # Precondition
///
/// The needle should be an ASCII character.
#[cfg(feature = "memchr")]
#[inline]
#[must_use]
fn find_byte(haystack: &str, needle: u8) -> Option<usize> {
    debug_assert!(needle.is_ascii());
    memchr::memchr(needle, haystack.as_bytes())
}

/// Returns the position of the first occurrence of the given byte.
///
/// # Precondition
///
/// The needle should be an ASCII character.
#[cfg(not(feature = "memchr"))]
#[inline]
#[must_use]
fn find_byte(haystack: &str, needle: u8) -> Option<usize> {
    debug_assert!(needle.is_ascii());
    haystack.bytes().position(|b| b == needle)
}

/// Returns the position of the first occurrence of either of the given bytes.
///
/// # Precondition
///
/// The needles should be ASCII characters.
#[cfg(feature = "memchr")]
#[inline]
#[must_use]
fn find_byte2(haystack: &str, needle1: u8, needle2: u8) -> Option<usize> {
    debug_assert!(needle1.is_ascii() && needle2.is_ascii());
    memchr::memchr2(needle1, needle2, haystack.as_bytes())
}

/// Returns the position of the first occurrence of either of the given bytes.
///
/// # Precondition
///
/// The needles should be ASCII characters.
#[cfg(not(feature = "memchr"))]
#[inline]
#[must_use]
fn find_byte2(haystack: &str, needle1: u8, needle2: u8) -> Option<usize> {
    debug_assert!(needle1.is_ascii() && needle2.is_ascii());
    haystack.bytes().position(|b| b == needle1 || b == needle2)
}

/// Splits the string at the first occurrence of the given byte.
///
/// The delimiter is kept at the head of the second slice.
#[inline]
#[must_use]
pub(crate) fn find_split(haystack: &str, needle: u8) -> Option<(&str, &str)> {
    find_byte(haystack, needle).map(|pos| haystack.split_at(pos))
}

/// Splits the string at the first occurrence of either of the given bytes.
///
/// The found delimiter is kept at the head of the second slice.
#[inline]
#[must_use]
pub(crate) fn find_split2(haystack: &str, needle1: u8, needle2: u8) -> Option<(&str, &str)> {
    find_byte2(haystack, needle1, needle2).map(|pos| haystack.split_at(pos))
}

/// Splits the string at the first occurrence of the given byte, dropping the
/// delimiter itself.
#[inline]
#[must_use]
pub(crate) fn find_split_hole(haystack: &str, needle: u8) -> Option<(&str, &str)> {
    find_byte(haystack, needle).map(|pos| (&haystack[..pos], &haystack[(pos + 1)..]))
}
