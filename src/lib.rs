//! Decomposition of [RFC 3986] URI references into their raw components.
//!
//! [`UriReference::parse`] splits a reference string into scheme, authority
//! (user-info, host, and port), path, query, and fragment, and returns them
//! as borrowed slices of the input. Nothing is copied, decoded, or rewritten:
//! this crate does **not** percent-decode, does not normalize case or dot
//! segments, does not resolve a reference against a base, and does not
//! recompose a URI from components. It only answers the question "which part
//! of this string is which".
//!
//! ```
//! use uri_parts::UriReference;
//!
//! let uri = UriReference::parse("http://joe@www.example.com:8080/foo/bar?q=1#middle")
//!     .expect("port is valid");
//! assert_eq!(uri.scheme(), Some("http"));
//! assert_eq!(uri.userinfo(), Some("joe"));
//! assert_eq!(uri.host(), "www.example.com");
//! assert_eq!(uri.port(), Some(8080));
//! assert_eq!(uri.path_segments().collect::<Vec<_>>(), ["", "foo", "bar"]);
//! assert_eq!(uri.query(), Some("q=1"));
//! assert_eq!(uri.fragment(), Some("middle"));
//! ```
//!
//! [RFC 3986]: https://tools.ietf.org/html/rfc3986
//!
//! # `std` support
//!
//! This crate supports `no_std` usage and performs no heap allocation.
//!
//! * `std` feature (**enabled by default**):
//!     + Std library is required.
//!     + The feature let the crate utilize std-specific stuff, such as the
//!       `std::error::Error` impl for [`PortParseError`].
//! * Without it:
//!     + The crate can be used in `no_std` environment.
//!
//! Two more features tune the dependencies rather than the API:
//!
//! * `memchr` feature: use the `memchr` crate to search delimiter bytes.
//! * `serde` feature: serialize a [`UriReference`] as its original string,
//!   and deserialize (and re-parse) one from a borrowed string.
//!
//! # Rationale
//!
//! ## Decomposition is permissive, not validating
//!
//! RFC 3986 restricts which characters may appear in each component and
//! which shapes a `scheme` may take. This crate deliberately checks none of
//! that: any input decomposes successfully, with one exception described
//! below, because the split positions depend only on the delimiter
//! characters `:`, `/`, `@`, `?`, and `#`. Callers that need strict syntax
//! validation should run a validating parser over the input (or over the
//! returned components) themselves.
//!
//! Two consequences are worth spelling out.
//!
//! * The scheme delimiter is the first `:` **anywhere** in the input, found
//!   before any other component is located. `a:b/c` is decomposed to
//!   `<scheme="a">:<path="b/c">` just like a strict parser would, but
//!   `./a:b` becomes `<scheme="./a">:<path="b">` where RFC 3986 reads a
//!   relative path, and even a colon first appearing inside what the RFC
//!   would call a query, such as `x?y:z`, is taken as the scheme delimiter.
//! * Bracketed IP literals are not understood. In `http://[::1]/`, the
//!   colon inside the brackets is taken as the host-port delimiter and the
//!   parse then fails on the non-numeric "port". IPv6 references are out of
//!   scope for this crate.
//!
//! ## The port is the one thing that can fail
//!
//! When the authority contains a `:`, everything after it must be a decimal
//! integer in `[0, 65535]`: no sign, no blanks, at least one digit. Anything
//! else fails the whole parse with [`PortParseError`] rather than producing
//! a half-usable result. Note that this is stricter than RFC 3986, which
//! also permits an *empty* port as in `http://example.com:/`; here that is
//! an error.
//!
//! ## Absent and empty are different things
//!
//! Components that may be missing are reported as `Option`, and `None`
//! ("the delimiter never appeared") is distinguished from `Some("")` ("the
//! delimiter appeared with nothing after it"). `http://example.com?` has an
//! empty query, while `http://example.com` has none at all. The same holds
//! for the fragment, the user-info, and the authority itself. The path is
//! never optional; its emptiness and its leading empty segment carry the
//! information instead: an empty segment sequence means no path at all, and
//! a leading empty segment is exactly the mark of an absolute path. See
//! [`UriReference::path_segments`].
#![warn(missing_docs)]
#![warn(clippy::missing_docs_in_private_items)]
#![cfg_attr(not(feature = "std"), no_std)]
#![cfg_attr(docsrs, feature(doc_auto_cfg))]

mod components;
mod error;
pub(crate) mod parser;
#[cfg(test)]
pub(crate) mod tests;

pub use self::components::{PathSegments, UriReference};
pub use self::error::PortParseError;
