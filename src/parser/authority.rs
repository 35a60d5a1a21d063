//! Decomposition of the `authority` component.

use crate::error::PortParseError;
use crate::parser::str::find_split_hole;

/// Decomposed `userinfo@host:port` parts of an authority.
#[derive(Debug, Clone, Copy)]
pub(crate) struct AuthorityComponents<'a> {
    /// User information, the part before `@`.
    pub(crate) userinfo: Option<&'a str>,
    /// Host.
    ///
    /// Note that this can be empty, as in `///path`.
    pub(crate) host: &'a str,
    /// Decimal port value, the part after `:`.
    pub(crate) port: Option<u16>,
}

/// Decomposes the authority into `(userinfo, host, port)`.
///
/// The leading `//` marker must already be stripped, and the string must
/// already end before the path, query, and fragment.
///
/// The first `@` terminates the user-info, and the first `:` after it starts
/// the port. A `:` is a commitment: whatever follows it has to be a valid
/// port number, or the whole decomposition fails.
pub(crate) fn decompose_authority(
    authority: &str,
) -> Result<AuthorityComponents<'_>, PortParseError> {
    let (userinfo, host_port) = match find_split_hole(authority, b'@') {
        Some((userinfo, rest)) => (Some(userinfo), rest),
        None => (None, authority),
    };
    let (host, port) = match find_split_hole(host_port, b':') {
        Some((host, port)) => (host, Some(parse_port(port)?)),
        None => (host_port, None),
    };

    Ok(AuthorityComponents {
        userinfo,
        host,
        port,
    })
}

/// Parses the digits after the host-port delimiter.
///
/// Accepts exactly the nonempty ASCII-digit strings whose value fits in
/// `u16`. No sign, no blanks, no empty string: RFC 3986 would allow
/// `host:` with nothing after the colon, but this parser rejects it.
fn parse_port(port: &str) -> Result<u16, PortParseError> {
    if port.is_empty() || !port.bytes().all(|b| b.is_ascii_digit()) {
        return Err(PortParseError::new());
    }
    // All digits at this point, so the only possible failure is overflow.
    port.parse::<u16>().map_err(|_| PortParseError::new())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn port_accepts_full_u16_range() {
        assert_eq!(parse_port("0"), Ok(0));
        assert_eq!(parse_port("8080"), Ok(8080));
        assert_eq!(parse_port("65535"), Ok(65535));
        assert_eq!(parse_port("080"), Ok(80));
    }

    #[test]
    fn port_rejects_garbage() {
        assert!(parse_port("").is_err());
        assert!(parse_port("spam").is_err());
        assert!(parse_port("8080spam").is_err());
        assert!(parse_port("-8080").is_err());
        assert!(parse_port("+8080").is_err());
        assert!(parse_port(" 8080").is_err());
        assert!(parse_port("65536").is_err());
        assert!(parse_port("4294967296").is_err());
    }

    #[test]
    fn userinfo_ends_at_first_at_sign() {
        let auth = decompose_authority("user:pw@example.com:8080").expect("valid port");
        assert_eq!(auth.userinfo, Some("user:pw"));
        assert_eq!(auth.host, "example.com");
        assert_eq!(auth.port, Some(8080));
    }

    #[test]
    fn host_ends_at_first_colon() {
        // The first `:` starts the port, so a second one is a port error.
        assert!(decompose_authority("a:80:90").is_err());
    }

    #[test]
    fn empty_authority_is_an_empty_host() {
        let auth = decompose_authority("").expect("nothing to fail on");
        assert_eq!(auth.userinfo, None);
        assert_eq!(auth.host, "");
        assert_eq!(auth.port, None);
    }

    #[test]
    fn empty_userinfo_is_preserved() {
        let auth = decompose_authority("@example.com").expect("valid");
        assert_eq!(auth.userinfo, Some(""));
        assert_eq!(auth.host, "example.com");
    }
}
