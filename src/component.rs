//! URI components.

use crate::{
    encoding::{
        encoder::{Port, Userinfo},
        table, EStr,
    },
    error::ParseError,
    internal::AuthMeta,
    parser,
};
use ref_cast::{ref_cast_custom, RefCastCustom};

/// A [scheme] component.
///
/// [scheme]: https://datatracker.ietf.org/doc/html/rfc3986#section-3.1
///
/// # Comparison
///
/// `Scheme`s are compared case-insensitively. You should do a case-insensitive
/// comparison if the scheme specification allows both letter cases in the scheme name.
///
/// # Examples
///
/// ```
/// use strict_uri::{component::Scheme, Uri};
///
/// const SCHEME_HTTP: &Scheme = Scheme::new_or_panic("http");
///
/// let uri = Uri::parse("HTTP://EXAMPLE.COM/")?;
/// let scheme = uri.scheme().unwrap();
///
/// // Case-insensitive comparison.
/// assert_eq!(scheme, SCHEME_HTTP);
/// // Case-sensitive comparison.
/// assert_eq!(scheme.as_str(), "HTTP");
/// # Ok::<_, strict_uri::error::ParseError>(())
/// ```
#[derive(RefCastCustom)]
#[repr(transparent)]
pub struct Scheme {
    inner: str,
}

impl Scheme {
    #[ref_cast_custom]
    #[inline]
    pub(crate) const fn new_validated(scheme: &str) -> &Scheme;

    /// Converts a string slice to `&Scheme`.
    ///
    /// # Panics
    ///
    /// Panics if the string is not a valid scheme name according to
    /// [Section 3.1 of RFC 3986][scheme]. For a non-panicking variant,
    /// use [`new`](Self::new).
    ///
    /// [scheme]: https://datatracker.ietf.org/doc/html/rfc3986#section-3.1
    #[inline]
    #[must_use]
    pub const fn new_or_panic(s: &str) -> &Scheme {
        match Self::new(s) {
            Some(scheme) => scheme,
            None => panic!("invalid scheme"),
        }
    }

    /// Converts a string slice to `&Scheme`, returning `None` if the conversion fails.
    #[inline]
    #[must_use]
    pub const fn new(s: &str) -> Option<&Scheme> {
        if matches!(s.as_bytes(), [first, rem @ ..]
        if first.is_ascii_alphabetic() && table::SCHEME.validate(rem))
        {
            Some(Scheme::new_validated(s))
        } else {
            None
        }
    }

    /// Returns the scheme component as a string slice.
    ///
    /// The letter case of the original scheme is preserved.
    #[inline]
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.inner
    }
}

impl PartialEq for Scheme {
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        self.inner.eq_ignore_ascii_case(&other.inner)
    }
}

impl Eq for Scheme {}

/// An [authority] component.
///
/// [authority]: https://datatracker.ietf.org/doc/html/rfc3986#section-3.2
#[derive(Clone, Copy)]
pub struct Authority<'a> {
    val: &'a str,
    meta: AuthMeta,
}

impl<'a> Authority<'a> {
    pub(crate) const fn new(val: &'a str, meta: AuthMeta) -> Self {
        Self { val, meta }
    }

    /// Parses an authority component from a string.
    ///
    /// The input must match the `authority` rule of RFC 3986 in its
    /// entirety, with two additional restrictions:
    ///
    /// - The input may not begin with `'@'` or `':'`.
    /// - The port, if nonempty, must be a decimal integer less than `65536`.
    ///
    /// As an exception, a `'/'` right after the port colon ends the
    /// parse with an empty port, and the rest of the input is ignored.
    ///
    /// # Errors
    ///
    /// Returns `Err` if the input does not parse as above.
    ///
    /// # Examples
    ///
    /// ```
    /// use strict_uri::component::Authority;
    ///
    /// let auth = Authority::parse("user@example.com:8080")?;
    /// assert_eq!(auth.userinfo().unwrap(), "user");
    /// assert_eq!(auth.host(), "example.com");
    /// assert_eq!(auth.port_to_u16(), Some(8080));
    /// # Ok::<_, strict_uri::error::ParseError>(())
    /// ```
    pub fn parse(s: &'a str) -> Result<Self, ParseError> {
        let (meta, len) = parser::parse_authority(s.as_bytes())?;
        Ok(Self::new(&s[..len], meta))
    }

    pub(crate) fn meta(&self) -> AuthMeta {
        self.meta
    }

    /// Returns the authority component as a string slice.
    ///
    /// # Examples
    ///
    /// ```
    /// use strict_uri::Uri;
    ///
    /// let uri = Uri::parse("http://user@example.com:8080/")?;
    /// let auth = uri.authority().unwrap();
    /// assert_eq!(auth.as_str(), "user@example.com:8080");
    /// # Ok::<_, strict_uri::error::ParseError>(())
    /// ```
    #[inline]
    #[must_use]
    pub fn as_str(&self) -> &'a str {
        self.val
    }

    /// Returns the optional [userinfo] subcomponent.
    ///
    /// [userinfo]: https://datatracker.ietf.org/doc/html/rfc3986#section-3.2.1
    ///
    /// # Examples
    ///
    /// ```
    /// use strict_uri::{encoding::EStr, Uri};
    ///
    /// let uri = Uri::parse("http://user@example.com/")?;
    /// let auth = uri.authority().unwrap();
    /// assert_eq!(auth.userinfo(), Some(EStr::new_or_panic("user")));
    ///
    /// let uri = Uri::parse("http://example.com/")?;
    /// let auth = uri.authority().unwrap();
    /// assert_eq!(auth.userinfo(), None);
    /// # Ok::<_, strict_uri::error::ParseError>(())
    /// ```
    #[must_use]
    pub fn userinfo(&self) -> Option<&'a EStr<Userinfo>> {
        let host_start = self.meta.host_bounds.0;
        (host_start != 0).then(|| EStr::new_validated(&self.val[..host_start - 1]))
    }

    /// Returns the [host] subcomponent as a string slice.
    ///
    /// The host subcomponent is always present, although it may be empty.
    ///
    /// The square brackets enclosing an IP literal are included.
    ///
    /// Note that ASCII characters within a host are *case-insensitive*.
    ///
    /// [host]: https://datatracker.ietf.org/doc/html/rfc3986#section-3.2.2
    ///
    /// # Examples
    ///
    /// ```
    /// use strict_uri::Uri;
    ///
    /// let uri = Uri::parse("http://user@example.com:8080/")?;
    /// let auth = uri.authority().unwrap();
    /// assert_eq!(auth.host(), "example.com");
    ///
    /// let uri = Uri::parse("http://[::1]")?;
    /// let auth = uri.authority().unwrap();
    /// assert_eq!(auth.host(), "[::1]");
    /// # Ok::<_, strict_uri::error::ParseError>(())
    /// ```
    #[must_use]
    pub fn host(&self) -> &'a str {
        let (start, end) = self.meta.host_bounds;
        &self.val[start..end]
    }

    /// Returns the optional [port] subcomponent.
    ///
    /// A scheme may define a default port to use when the port is
    /// not present or is empty.
    ///
    /// The port is guaranteed to be either empty or a decimal integer
    /// less than `65536`, possibly with leading zeros.
    ///
    /// [port]: https://datatracker.ietf.org/doc/html/rfc3986#section-3.2.3
    ///
    /// # Examples
    ///
    /// ```
    /// use strict_uri::{encoding::EStr, Uri};
    ///
    /// let uri = Uri::parse("foo://localhost:4673/")?;
    /// let auth = uri.authority().unwrap();
    /// assert_eq!(auth.port(), Some(EStr::new_or_panic("4673")));
    ///
    /// let uri = Uri::parse("foo://localhost:/")?;
    /// let auth = uri.authority().unwrap();
    /// assert_eq!(auth.port(), Some(EStr::EMPTY));
    ///
    /// let uri = Uri::parse("foo://localhost/")?;
    /// let auth = uri.authority().unwrap();
    /// assert_eq!(auth.port(), None);
    /// # Ok::<_, strict_uri::error::ParseError>(())
    /// ```
    #[must_use]
    pub fn port(&self) -> Option<&'a EStr<Port>> {
        let host_end = self.meta.host_bounds.1;
        (host_end != self.val.len()).then(|| EStr::new_validated(&self.val[host_end + 1..]))
    }

    /// Converts the [port] subcomponent to `u16`, if present and nonempty.
    ///
    /// Returns `None` if the port is not present or is empty.
    /// Leading zeros are ignored.
    ///
    /// [port]: https://datatracker.ietf.org/doc/html/rfc3986#section-3.2.3
    ///
    /// # Examples
    ///
    /// ```
    /// use strict_uri::Uri;
    ///
    /// let uri = Uri::parse("foo://localhost:4673/")?;
    /// assert_eq!(uri.authority().unwrap().port_to_u16(), Some(4673));
    ///
    /// let uri = Uri::parse("foo://localhost:/")?;
    /// assert_eq!(uri.authority().unwrap().port_to_u16(), None);
    ///
    /// let uri = Uri::parse("foo://localhost/")?;
    /// assert_eq!(uri.authority().unwrap().port_to_u16(), None);
    /// # Ok::<_, strict_uri::error::ParseError>(())
    /// ```
    #[must_use]
    pub fn port_to_u16(&self) -> Option<u16> {
        // The parser guarantees that a nonempty port fits in `u16`.
        self.port().and_then(|s| s.as_str().parse().ok())
    }

    /// Checks whether a userinfo subcomponent is present.
    #[inline]
    #[must_use]
    pub fn has_userinfo(&self) -> bool {
        self.meta.host_bounds.0 != 0
    }

    /// Checks whether a port subcomponent is present.
    ///
    /// Returns `true` also when the port is empty.
    #[inline]
    #[must_use]
    pub fn has_port(&self) -> bool {
        self.meta.host_bounds.1 != self.val.len()
    }
}

impl PartialEq for Authority<'_> {
    fn eq(&self, other: &Self) -> bool {
        self.val == other.val
    }
}

impl Eq for Authority<'_> {}
