//! Components of a URI reference.

use core::convert::TryFrom;
use core::fmt;
use core::iter::FusedIterator;
use core::str::Split;

use crate::error::PortParseError;
use crate::parser;

/// Components of a URI reference.
///
/// See <https://tools.ietf.org/html/rfc3986#section-3>.
///
/// A value of this type is a read-only view into the string it was parsed
/// from: every textual component is a subslice of that string, and the value
/// is produced whole by one [`parse`][`UriReference::parse`] call. There is
/// no partially-parsed or reusable state; parsing another string simply
/// produces another independent value.
///
/// ```
/// use uri_parts::UriReference;
///
/// let uri = UriReference::parse("foo://user@example.com:8042/over/there?name=ferret#nose")
///     .expect("port is valid");
/// assert_eq!(uri.scheme(), Some("foo"));
/// assert_eq!(uri.userinfo(), Some("user"));
/// assert_eq!(uri.host(), "example.com");
/// assert_eq!(uri.port(), Some(8042));
/// assert_eq!(uri.path_str(), "/over/there");
/// assert_eq!(uri.query(), Some("name=ferret"));
/// assert_eq!(uri.fragment(), Some("nose"));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct UriReference<'a> {
    /// Original reference string.
    pub(crate) raw: &'a str,
    /// Scheme.
    pub(crate) scheme: Option<&'a str>,
    /// Authority.
    ///
    /// Note that this can be `Some("")`.
    pub(crate) authority: Option<&'a str>,
    /// User information.
    pub(crate) userinfo: Option<&'a str>,
    /// Host, `""` when the reference has no authority.
    pub(crate) host: &'a str,
    /// Port.
    pub(crate) port: Option<u16>,
    /// Path.
    pub(crate) path: &'a str,
    /// Query.
    pub(crate) query: Option<&'a str>,
    /// Fragment.
    pub(crate) fragment: Option<&'a str>,
}

impl<'a> UriReference<'a> {
    /// Decomposes the given string into URI reference components.
    ///
    /// Any input is accepted and split at its `:`, `/`, `@`, `?`, and `#`
    /// delimiters; no component grammar is validated. The single failure
    /// mode is an authority whose port section is not a decimal integer in
    /// `[0, 65535]`, in which case no components are produced at all.
    ///
    /// ```
    /// use uri_parts::UriReference;
    ///
    /// assert!(UriReference::parse("http://www.example.com:8080/foo/bar").is_ok());
    /// assert!(UriReference::parse("not a uri, still fine to decompose").is_ok());
    ///
    /// // A port that is not a small decimal integer fails the whole parse.
    /// assert!(UriReference::parse("http://www.example.com:spam/foo/bar").is_err());
    /// assert!(UriReference::parse("http://www.example.com:65536/foo/bar").is_err());
    /// ```
    #[inline]
    pub fn parse(reference: &'a str) -> Result<Self, PortParseError> {
        parser::decompose(reference)
    }

    /// Returns the original reference string, exactly as parsed.
    #[inline]
    #[must_use]
    pub fn as_str(&self) -> &'a str {
        self.raw
    }

    /// Returns the scheme.
    ///
    /// The scheme is the part before the first `:` anywhere in the input,
    /// accepted without further checks. See the crate documentation for how
    /// that compares to the RFC 3986 `scheme` rule.
    ///
    /// ```
    /// use uri_parts::UriReference;
    ///
    /// let uri = UriReference::parse("http://www.example.com/foo/bar").expect("valid");
    /// assert_eq!(uri.scheme(), Some("http"));
    ///
    /// let relative = UriReference::parse("foo/bar").expect("valid");
    /// assert_eq!(relative.scheme(), None);
    /// ```
    #[inline]
    #[must_use]
    pub fn scheme(&self) -> Option<&'a str> {
        self.scheme
    }

    /// Returns the authority string, delimiters included.
    ///
    /// This is the raw text between the `//` marker and the start of the
    /// path, before any user-info/host/port splitting. It is `Some("")` for
    /// a present-but-empty authority.
    ///
    /// ```
    /// use uri_parts::UriReference;
    ///
    /// let uri = UriReference::parse("http://user@example.com:80/a").expect("valid");
    /// assert_eq!(uri.authority_str(), Some("user@example.com:80"));
    ///
    /// let empty = UriReference::parse("///path").expect("valid");
    /// assert_eq!(empty.authority_str(), Some(""));
    ///
    /// let none = UriReference::parse("/path").expect("valid");
    /// assert_eq!(none.authority_str(), None);
    /// ```
    #[inline]
    #[must_use]
    pub fn authority_str(&self) -> Option<&'a str> {
        self.authority
    }

    /// Returns the user information, the authority part before `@`.
    ///
    /// ```
    /// use uri_parts::UriReference;
    ///
    /// let uri = UriReference::parse("http://joe@www.example.com/foo/bar").expect("valid");
    /// assert_eq!(uri.userinfo(), Some("joe"));
    ///
    /// let uri = UriReference::parse("http://www.example.com/foo/bar").expect("valid");
    /// assert_eq!(uri.userinfo(), None);
    /// ```
    #[inline]
    #[must_use]
    pub fn userinfo(&self) -> Option<&'a str> {
        self.userinfo
    }

    /// Returns the host.
    ///
    /// Unlike the other components this is not an `Option`: a reference
    /// without an authority has the empty host, and an authority may also
    /// carry a genuinely empty host (`"///path"`). Check
    /// [`authority_str`][`UriReference::authority_str`] when the difference
    /// matters.
    ///
    /// ```
    /// use uri_parts::UriReference;
    ///
    /// let uri = UriReference::parse("https://www.example.com/foo").expect("valid");
    /// assert_eq!(uri.host(), "www.example.com");
    ///
    /// let pathy = UriReference::parse("foo/bar").expect("valid");
    /// assert_eq!(pathy.host(), "");
    /// ```
    #[inline]
    #[must_use]
    pub fn host(&self) -> &'a str {
        self.host
    }

    /// Returns the port, if the authority has one.
    ///
    /// A `:` in the host section commits the rest to being a decimal
    /// integer in `[0, 65535]`; otherwise [`parse`][`UriReference::parse`]
    /// fails, so a successfully parsed reference never has a half-valid
    /// port. An empty port (`"host:"`) is rejected too, although RFC 3986
    /// permits it.
    ///
    /// ```
    /// use uri_parts::UriReference;
    ///
    /// let uri = UriReference::parse("http://www.example.com:8080/foo").expect("valid");
    /// assert_eq!(uri.port(), Some(8080));
    ///
    /// let uri = UriReference::parse("http://www.example.com/foo").expect("valid");
    /// assert_eq!(uri.port(), None);
    /// ```
    #[inline]
    #[must_use]
    pub fn port(&self) -> Option<u16> {
        self.port
    }

    /// Returns `true` if the authority has a port.
    #[inline]
    #[must_use]
    pub fn has_port(&self) -> bool {
        self.port.is_some()
    }

    /// Returns the raw path string.
    ///
    /// ```
    /// use uri_parts::UriReference;
    ///
    /// let uri = UriReference::parse("http://h/a/b?q").expect("valid");
    /// assert_eq!(uri.path_str(), "/a/b");
    ///
    /// let mailto = UriReference::parse("mailto:joe@example.com").expect("valid");
    /// assert_eq!(mailto.path_str(), "joe@example.com");
    /// ```
    #[inline]
    #[must_use]
    pub fn path_str(&self) -> &'a str {
        self.path
    }

    /// Returns an iterator over the `/`-separated path segments.
    ///
    /// Empty segments are meaningful and preserved: a leading `/` yields a
    /// leading empty segment (the mark of an absolute path), a trailing `/`
    /// a trailing one, and doubled slashes one in between. The two paths
    /// that would be ambiguous under plain splitting are special-cased the
    /// way RFC 3986 section 3.3 reads them: the empty path has **no**
    /// segments, and the root path `/` has exactly one empty segment.
    ///
    /// ```
    /// use uri_parts::UriReference;
    ///
    /// let segments = |s| {
    ///     UriReference::parse(s)
    ///         .expect("valid")
    ///         .path_segments()
    ///         .collect::<Vec<_>>()
    /// };
    ///
    /// assert_eq!(segments(""), Vec::<&str>::new());
    /// assert_eq!(segments("/"), [""]);
    /// assert_eq!(segments("/foo"), ["", "foo"]);
    /// assert_eq!(segments("foo/"), ["foo", ""]);
    /// assert_eq!(segments("a//b"), ["a", "", "b"]);
    /// assert_eq!(segments("http://www.example.com/foo/bar"), ["", "foo", "bar"]);
    /// // No path at all after the authority.
    /// assert_eq!(segments("http://www.example.com"), Vec::<&str>::new());
    /// ```
    #[must_use]
    pub fn path_segments(&self) -> PathSegments<'a> {
        PathSegments::new(self.path)
    }

    /// Returns the query, without its leading `?`.
    ///
    /// `None` means no `?` appeared before the fragment; `Some("")` means a
    /// `?` appeared with nothing after it. A second `?` is ordinary query
    /// content.
    ///
    /// ```
    /// use uri_parts::UriReference;
    ///
    /// let uri = UriReference::parse("http://www.example.com?earth?day#bar").expect("valid");
    /// assert_eq!(uri.query(), Some("earth?day"));
    ///
    /// let empty = UriReference::parse("http://www.example.com?").expect("valid");
    /// assert_eq!(empty.query(), Some(""));
    ///
    /// let absent = UriReference::parse("http://www.example.com#bar").expect("valid");
    /// assert_eq!(absent.query(), None);
    /// ```
    #[inline]
    #[must_use]
    pub fn query(&self) -> Option<&'a str> {
        self.query
    }

    /// Returns the fragment, without its leading `#`.
    ///
    /// The content after the first `#` is taken verbatim, further `#`
    /// characters included.
    ///
    /// ```
    /// use uri_parts::UriReference;
    ///
    /// let uri = UriReference::parse("http://www.example.com?foo#bar").expect("valid");
    /// assert_eq!(uri.fragment(), Some("bar"));
    ///
    /// let uri = UriReference::parse("note#a#b").expect("valid");
    /// assert_eq!(uri.fragment(), Some("a#b"));
    ///
    /// let uri = UriReference::parse("http://www.example.com").expect("valid");
    /// assert_eq!(uri.fragment(), None);
    /// ```
    #[inline]
    #[must_use]
    pub fn fragment(&self) -> Option<&'a str> {
        self.fragment
    }

    /// Returns `true` if the reference is relative, i.e. has no scheme.
    ///
    /// See <https://tools.ietf.org/html/rfc3986#section-4.2>.
    ///
    /// ```
    /// use uri_parts::UriReference;
    ///
    /// assert!(UriReference::parse("/").expect("valid").is_relative_reference());
    /// assert!(UriReference::parse("foo").expect("valid").is_relative_reference());
    /// assert!(!UriReference::parse("http://www.example.com")
    ///     .expect("valid")
    ///     .is_relative_reference());
    /// ```
    #[inline]
    #[must_use]
    pub fn is_relative_reference(&self) -> bool {
        self.scheme.is_none()
    }

    /// Returns `true` if the path is relative: empty, or not starting with
    /// `/`.
    ///
    /// Equivalently, `false` exactly when the first path segment exists and
    /// is empty. Note that this is a property of the path alone; a
    /// reference with an authority but no path, such as
    /// `http://www.example.com`, still contains a relative (empty) path.
    ///
    /// ```
    /// use uri_parts::UriReference;
    ///
    /// assert!(UriReference::parse("").expect("valid").contains_relative_path());
    /// assert!(UriReference::parse("foo").expect("valid").contains_relative_path());
    /// assert!(UriReference::parse("http://www.example.com")
    ///     .expect("valid")
    ///     .contains_relative_path());
    /// assert!(!UriReference::parse("/").expect("valid").contains_relative_path());
    /// ```
    #[inline]
    #[must_use]
    pub fn contains_relative_path(&self) -> bool {
        !self.path.starts_with('/')
    }
}

impl<'a> TryFrom<&'a str> for UriReference<'a> {
    type Error = PortParseError;

    #[inline]
    fn try_from(s: &'a str) -> Result<Self, Self::Error> {
        Self::parse(s)
    }
}

/// Writes the original reference string, with no recomposition.
impl fmt::Display for UriReference<'_> {
    #[inline]
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.raw)
    }
}

/// Iterator of path segments.
///
/// Created by [`UriReference::path_segments`]; see its documentation for
/// the exact segment semantics.
#[derive(Debug, Clone)]
pub struct PathSegments<'a> {
    /// Splitter over the remaining path.
    ///
    /// `None` from the start for the empty path, which has no segments.
    inner: Option<Split<'a, char>>,
}

impl<'a> PathSegments<'a> {
    /// Creates an iterator over the segments of the given raw path string.
    pub(crate) fn new(path: &'a str) -> Self {
        let inner = match path {
            "" => None,
            // The root path is one empty segment, not the two a plain
            // split of "/" would yield.
            "/" => Some("".split('/')),
            _ => Some(path.split('/')),
        };
        Self { inner }
    }
}

impl<'a> Iterator for PathSegments<'a> {
    type Item = &'a str;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        self.inner.as_mut()?.next()
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        match &self.inner {
            Some(inner) => inner.size_hint(),
            None => (0, Some(0)),
        }
    }
}

impl<'a> DoubleEndedIterator for PathSegments<'a> {
    #[inline]
    fn next_back(&mut self) -> Option<Self::Item> {
        self.inner.as_mut()?.next_back()
    }
}

impl FusedIterator for PathSegments<'_> {}

/// Serde integration: a reference serializes as its original string and
/// deserializes by borrowing and re-parsing one.
#[cfg(feature = "serde")]
mod serde_impls {
    use super::UriReference;

    use core::convert::TryFrom;
    use core::fmt;

    use serde::{
        de::{self, Visitor},
        Deserialize, Deserializer, Serialize, Serializer,
    };

    impl Serialize for UriReference<'_> {
        #[inline]
        fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
        where
            S: Serializer,
        {
            serializer.serialize_str(self.raw)
        }
    }

    /// Custom borrowed string visitor.
    #[derive(Debug, Clone, Copy)]
    struct UriReferenceVisitor;

    impl<'de> Visitor<'de> for UriReferenceVisitor {
        type Value = UriReference<'de>;

        #[inline]
        fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            f.write_str("URI reference string")
        }

        #[inline]
        fn visit_borrowed_str<E>(self, v: &'de str) -> Result<Self::Value, E>
        where
            E: de::Error,
        {
            UriReference::try_from(v).map_err(E::custom)
        }
    }

    // The components borrow from the deserializer input, so only borrowed
    // strings can be visited. About `'de` and `'a`, see
    // <https://serde.rs/lifetimes.html#the-deserializede-lifetime>.
    impl<'de: 'a, 'a> Deserialize<'de> for UriReference<'a> {
        #[inline]
        fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
        where
            D: Deserializer<'de>,
        {
            deserializer.deserialize_str(UriReferenceVisitor)
        }
    }
}
