//! Decomposition of URI references.
//!
//! The stages here consume the input left to right: the scheme is split off
//! first, then the query/fragment boundary is located on what remains, and
//! only the part before that boundary is examined for an authority marker
//! and a path. Each stage hands the next one the remainder it did not
//! consume, so the order of the calls in [`decompose`] is load-bearing.

use crate::components::UriReference;
use crate::error::PortParseError;
use crate::parser::authority::decompose_authority;
use crate::parser::str::{find_split, find_split2, find_split_hole};

pub(crate) mod authority;
pub(crate) mod str;

/// Eats a `scheme` and a following colon if available, and returns the rest
/// and the scheme.
///
/// Returns `(rest, scheme)`.
///
/// The scheme ends at the first `:` anywhere in the input. No scheme grammar
/// is enforced; see the crate documentation for how this differs from
/// RFC 3986.
#[must_use]
fn scheme_colon_opt(i: &str) -> (&str, Option<&str>) {
    match find_split_hole(i, b':') {
        Some((scheme, rest)) => (rest, Some(scheme)),
        None => (i, None),
    }
}

/// Eats a string until the query/fragment boundary, and returns that part.
///
/// Returns `(rest, before_boundary)`. `rest` starts with `?` or `#`, or is
/// empty when the input has neither.
#[must_use]
fn until_query(i: &str) -> (&str, &str) {
    match find_split2(i, b'?', b'#') {
        Some((before_query, rest)) => (rest, before_query),
        None => ("", i),
    }
}

/// Decomposes query and fragment, if available.
///
/// The string must start with `?`, or `#`, or be empty.
///
/// The query delimiter is stripped, the fragment content is taken verbatim
/// after its own `#`, and a second `?` stays inside the query: `?a?b#c`
/// yields query `a?b` and fragment `c`.
#[must_use]
fn decompose_query_and_fragment(i: &str) -> (Option<&str>, Option<&str>) {
    match i.as_bytes().first().copied() {
        None => (None, None),
        Some(b'?') => {
            let rest = &i[1..];
            match find_split_hole(rest, b'#') {
                Some((query, fragment)) => (Some(query), Some(fragment)),
                None => (Some(rest), None),
            }
        }
        Some(c) => {
            debug_assert_eq!(c, b'#');
            (None, Some(&i[1..]))
        }
    }
}

/// Eats a `//` marker and the following authority if available, and returns
/// the authority.
///
/// Returns `(rest, authority)`; `rest` is the path, keeping its leading `/`.
///
/// The input must already be truncated at the query/fragment boundary, so
/// the authority simply ends at the first `/` (or at the end of the input).
#[must_use]
fn slash_slash_authority_opt(i: &str) -> (&str, Option<&str>) {
    let s = match i.strip_prefix("//") {
        Some(rest) => rest,
        None => return (i, None),
    };
    match find_split(s, b'/') {
        Some((authority, rest)) => (rest, Some(authority)),
        None => ("", Some(s)),
    }
}

/// Decomposes the given URI reference.
///
/// This is the whole parse. The only fallible step is the port, inside
/// [`decompose_authority`]; everything else accepts arbitrary input.
pub(crate) fn decompose(i: &str) -> Result<UriReference<'_>, PortParseError> {
    let (rest, scheme) = scheme_colon_opt(i);
    let (tail, before_boundary) = until_query(rest);
    let (query, fragment) = decompose_query_and_fragment(tail);
    let (path, authority) = slash_slash_authority_opt(before_boundary);

    let (userinfo, host, port) = match authority {
        Some(authority) => {
            let auth = decompose_authority(authority)?;
            (auth.userinfo, auth.host, auth.port)
        }
        None => (None, "", None),
    };

    Ok(UriReference {
        raw: i,
        scheme,
        authority,
        userinfo,
        host,
        port,
        path,
        query,
        fragment,
    })
}
