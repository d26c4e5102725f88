#![cfg_attr(not(feature = "std"), no_std)]
#![warn(missing_debug_implementations, missing_docs, rust_2018_idioms)]
#![cfg_attr(docsrs, feature(doc_auto_cfg))]

//! A strict URI handling library compliant with [RFC 3986].
//!
//! The [`Uri`] type parses, resolves, normalizes, and builds URI
//! references, rejecting on input everything the RFC grammar rejects.
//!
//! [RFC 3986]: https://datatracker.ietf.org/doc/html/rfc3986/
//!
//! # Terminology
//!
//! A *URI reference* is either a URI or a relative reference. A URI
//! always carries a scheme, while a relative reference never does.
//! [`Uri::parse`] accepts only URIs and [`Uri::parse_reference`]
//! accepts both kinds. This library uses one type for both, with
//! [`has_scheme`] telling them apart.
//!
//! [`has_scheme`]: Uri::has_scheme
//!
//! # Crate features
//!
//! - `std` (default): Enables `std` support. This includes
//!   [`Error`](std::error::Error) implementations.
//! - `serde`: Enables `serde` support.

extern crate alloc;

pub mod component;
pub mod encoding;
pub mod error;

mod builder;
mod fmt;
mod internal;
mod normalizer;
mod parser;
mod resolver;

pub use builder::Builder;

use crate::{
    component::{Authority, Scheme},
    encoding::{
        encoder::{Fragment, Path, Port, Query, Userinfo},
        EStr,
    },
    error::{NormalizeError, ParseError, ParseErrorKind, ResolveError},
    internal::{AuthMeta, Criteria, Meta, Parse},
};
use alloc::string::String;
use borrow_or_share::{BorrowOrShare, Bos};
use core::{cmp::Ordering, hash, str::FromStr};

#[cfg(feature = "serde")]
use serde::{de, Deserialize, Deserializer, Serialize, Serializer};

/// A [URI reference] defined in RFC 3986, i.e., either a URI or a
/// relative reference.
///
/// [URI reference]: https://datatracker.ietf.org/doc/html/rfc3986#section-4.1
///
/// # Variants
///
/// Two variants of `Uri` are available: `Uri<&str>` (borrowed) and
/// `Uri<String>` (owned).
///
/// `Uri<&'a str>` outputs references with lifetime `'a` where
/// possible. This allows you to drop a temporary `Uri` while keeping
/// the output references:
///
/// ```
/// use strict_uri::Uri;
///
/// let path = Uri::parse("foo:bar")?.path();
/// assert_eq!(path, "bar");
/// # Ok::<_, strict_uri::error::ParseError>(())
/// ```
///
/// # Comparison
///
/// `Uri`s are compared [component-wise](Self::scheme): the scheme and
/// the host compare case-insensitively, all other components compare
/// byte for byte, and an absent component orders before an empty one.
/// Comparison against a string ([`PartialEq<str>`]) is byte-exact, so
/// two `Uri`s that differ only in case may both be unequal to the same
/// string while being equal to each other.
///
/// ```
/// use strict_uri::Uri;
///
/// let a = Uri::parse("HTTP://EXAMPLE.COM/")?;
/// let b = Uri::parse("http://example.com/")?;
/// assert_eq!(a, b);
/// assert!(a != "http://example.com/");
/// # Ok::<_, strict_uri::error::ParseError>(())
/// ```
///
/// # Examples
///
/// Parse and extract components from a URI:
///
/// ```
/// use strict_uri::{component::Scheme, Uri};
///
/// const SCHEME_FOO: &Scheme = Scheme::new_or_panic("foo");
///
/// let uri = Uri::parse("foo://user@example.com:8042/over/there?name=ferret#nose")?;
///
/// assert_eq!(uri.scheme().unwrap(), SCHEME_FOO);
///
/// let auth = uri.authority().unwrap();
/// assert_eq!(auth.as_str(), "user@example.com:8042");
/// assert_eq!(auth.userinfo().unwrap(), "user");
/// assert_eq!(auth.host(), "example.com");
/// assert_eq!(auth.port_to_u16(), Some(8042));
///
/// assert_eq!(uri.path(), "/over/there");
/// assert_eq!(uri.query().unwrap(), "name=ferret");
/// assert_eq!(uri.fragment().unwrap(), "nose");
/// # Ok::<_, strict_uri::error::ParseError>(())
/// ```
pub struct Uri<T> {
    val: T,
    meta: Meta,
}

impl<T: Clone> Clone for Uri<T> {
    fn clone(&self) -> Self {
        Uri {
            val: self.val.clone(),
            meta: self.meta,
        }
    }
}

impl<T: Copy> Copy for Uri<T> {}

impl<T> Uri<T> {
    /// Parses a URI from a string into a `Uri`.
    ///
    /// The input must match the [`URI`] ABNF rule from RFC 3986, i.e.,
    /// it must contain a scheme. Use [`parse_reference`] to also
    /// accept relative references.
    ///
    /// Leading and trailing ASCII whitespace (space, tab, carriage
    /// return, and line feed) is trimmed before parsing.
    ///
    /// The return type is
    ///
    /// - `Result<Uri<&str>, ParseError>` for `I = &str`;
    /// - `Result<Uri<String>, ParseError<String>>` for `I = String`.
    ///
    /// [`URI`]: https://datatracker.ietf.org/doc/html/rfc3986#section-3
    /// [`parse_reference`]: Self::parse_reference
    ///
    /// # Errors
    ///
    /// Returns `Err` if the input does not match the rule. When the
    /// input is a `String`, the error retains it and
    /// [`consumed`](ParseError::consumed) gives the prefix up to the
    /// error index.
    pub fn parse<I>(input: I) -> Result<Self, I::Err>
    where
        I: Parse<Val = T>,
    {
        input
            .parse(Criteria {
                require_scheme: true,
            })
            .map(|(val, meta)| Self { val, meta })
    }

    /// Parses a URI reference from a string into a `Uri`.
    ///
    /// The input must match the [`URI-reference`] ABNF rule from
    /// RFC 3986, which allows the scheme to be absent.
    ///
    /// Leading and trailing ASCII whitespace is trimmed before
    /// parsing, as in [`parse`](Self::parse).
    ///
    /// [`URI-reference`]: https://datatracker.ietf.org/doc/html/rfc3986#section-4.1
    ///
    /// # Errors
    ///
    /// Returns `Err` if the input does not match the rule.
    ///
    /// # Examples
    ///
    /// ```
    /// use strict_uri::Uri;
    ///
    /// let uri = Uri::parse_reference("//example.com/path")?;
    /// assert!(uri.scheme().is_none());
    ///
    /// assert!(Uri::parse("//example.com/path").is_err());
    /// # Ok::<_, strict_uri::error::ParseError>(())
    /// ```
    pub fn parse_reference<I>(input: I) -> Result<Self, I::Err>
    where
        I: Parse<Val = T>,
    {
        input
            .parse(Criteria {
                require_scheme: false,
            })
            .map(|(val, meta)| Self { val, meta })
    }
}

impl<'a> Uri<&'a str> {
    /// Creates a new `Uri<String>` by cloning the contents of `self`.
    #[must_use]
    pub fn to_owned(&self) -> Uri<String> {
        Uri {
            val: self.val.into(),
            meta: self.meta,
        }
    }
}

impl Uri<String> {
    /// Creates a new builder for a URI reference.
    #[must_use]
    pub fn builder() -> Builder {
        Builder::new()
    }

    /// Parses a URI from UTF-16 encoded text into a `Uri<String>`.
    ///
    /// # Errors
    ///
    /// Returns `Err` with [`InvalidUtf16`] at index zero if the input
    /// is not valid UTF-16, or a regular parse error if the decoded
    /// text does not match the [`URI`] ABNF rule.
    ///
    /// [`InvalidUtf16`]: ParseErrorKind::InvalidUtf16
    /// [`URI`]: https://datatracker.ietf.org/doc/html/rfc3986#section-3
    ///
    /// # Examples
    ///
    /// ```
    /// use strict_uri::Uri;
    ///
    /// let wide: Vec<u16> = "foo:bar".encode_utf16().collect();
    /// let uri = Uri::from_utf16(&wide)?;
    /// assert_eq!(uri.as_str(), "foo:bar");
    /// # Ok::<_, strict_uri::error::ParseError>(())
    /// ```
    pub fn from_utf16(input: &[u16]) -> Result<Self, ParseError> {
        let s = String::from_utf16(input).map_err(|_| ParseError {
            index: 0,
            kind: ParseErrorKind::InvalidUtf16,
            input: (),
        })?;
        Uri::parse(s).map_err(|e| e.strip_input())
    }

    /// Borrows this `Uri<String>` as a `Uri<&str>`.
    #[must_use]
    pub fn borrow(&self) -> Uri<&str> {
        Uri {
            val: &self.val,
            meta: self.meta,
        }
    }

    /// Consumes this `Uri<String>` and yields the underlying `String`.
    #[must_use]
    pub fn into_string(self) -> String {
        self.val
    }

    /// Sets the fragment component, replacing any existing one.
    ///
    /// The rest of the URI reference, including the parsed component
    /// layout, is left unchanged.
    ///
    /// # Examples
    ///
    /// ```
    /// use strict_uri::{encoding::EStr, Uri};
    ///
    /// let mut uri = Uri::parse("http://example.com/#ignore")?.to_owned();
    /// uri.set_fragment(Some(EStr::new_or_panic("fragment")));
    /// assert_eq!(uri.as_str(), "http://example.com/#fragment");
    ///
    /// uri.set_fragment(None);
    /// assert_eq!(uri.as_str(), "http://example.com/");
    /// # Ok::<_, strict_uri::error::ParseError>(())
    /// ```
    pub fn set_fragment(&mut self, fragment: Option<&EStr<Fragment>>) {
        self.val.truncate(self.meta.query_or_path_end());
        if let Some(fragment) = fragment {
            self.val.push('#');
            self.val.push_str(fragment.as_str());
        }
    }
}

impl<'i, 'o, T: BorrowOrShare<'i, 'o, str>> Uri<T> {
    /// Returns the URI reference as a string slice.
    #[must_use]
    pub fn as_str(&'i self) -> &'o str {
        self.val.borrow_or_share()
    }

    /// Returns the optional [scheme] component.
    ///
    /// [scheme]: https://datatracker.ietf.org/doc/html/rfc3986#section-3.1
    ///
    /// # Examples
    ///
    /// ```
    /// use strict_uri::{component::Scheme, Uri};
    ///
    /// const SCHEME_HTTP: &Scheme = Scheme::new_or_panic("http");
    ///
    /// let uri = Uri::parse("http://example.com/")?;
    /// assert_eq!(uri.scheme(), Some(SCHEME_HTTP));
    /// # Ok::<_, strict_uri::error::ParseError>(())
    /// ```
    #[must_use]
    pub fn scheme(&'i self) -> Option<&'o Scheme> {
        let end = self.meta.scheme_end?;
        Some(Scheme::new_validated(&self.as_str()[..end.get()]))
    }

    /// Returns the optional [authority] component.
    ///
    /// [authority]: https://datatracker.ietf.org/doc/html/rfc3986#section-3.2
    #[must_use]
    pub fn authority(&'i self) -> Option<Authority<'o>> {
        let meta = self.meta.auth_meta?;
        let start = match self.meta.scheme_end {
            Some(i) => i.get() + 3,
            None => 2,
        };
        let end = self.meta.path_bounds.0;
        let meta = AuthMeta {
            host_bounds: (meta.host_bounds.0 - start, meta.host_bounds.1 - start),
        };
        Some(Authority::new(&self.as_str()[start..end], meta))
    }

    /// Returns the optional [userinfo] subcomponent of the authority.
    ///
    /// [userinfo]: https://datatracker.ietf.org/doc/html/rfc3986#section-3.2.1
    #[must_use]
    pub fn userinfo(&'i self) -> Option<&'o EStr<Userinfo>> {
        self.authority().and_then(|auth| auth.userinfo())
    }

    /// Returns the [host] subcomponent of the authority, if present.
    ///
    /// [host]: https://datatracker.ietf.org/doc/html/rfc3986#section-3.2.2
    #[must_use]
    pub fn host(&'i self) -> Option<&'o str> {
        self.authority().map(|auth| auth.host())
    }

    /// Returns the optional [port] subcomponent of the authority.
    ///
    /// An empty port is present and distinct from an absent one:
    ///
    /// ```
    /// use strict_uri::{encoding::EStr, Uri};
    ///
    /// let uri = Uri::parse("http://example.com:/")?;
    /// assert_eq!(uri.port(), Some(EStr::EMPTY));
    ///
    /// let uri = Uri::parse("http://example.com/")?;
    /// assert_eq!(uri.port(), None);
    /// # Ok::<_, strict_uri::error::ParseError>(())
    /// ```
    ///
    /// [port]: https://datatracker.ietf.org/doc/html/rfc3986#section-3.2.3
    #[must_use]
    pub fn port(&'i self) -> Option<&'o EStr<Port>> {
        self.authority().and_then(|auth| auth.port())
    }

    /// Returns the [path] component.
    ///
    /// [path]: https://datatracker.ietf.org/doc/html/rfc3986#section-3.3
    #[must_use]
    pub fn path(&'i self) -> &'o EStr<Path> {
        let (start, end) = self.meta.path_bounds;
        EStr::new_validated(&self.as_str()[start..end])
    }

    /// Returns the optional [query] component.
    ///
    /// [query]: https://datatracker.ietf.org/doc/html/rfc3986#section-3.4
    #[must_use]
    pub fn query(&'i self) -> Option<&'o EStr<Query>> {
        let end = self.meta.query_end?;
        let start = self.meta.path_bounds.1 + 1;
        Some(EStr::new_validated(&self.as_str()[start..end.get()]))
    }

    /// Returns the optional [fragment] component.
    ///
    /// [fragment]: https://datatracker.ietf.org/doc/html/rfc3986#section-3.5
    #[must_use]
    pub fn fragment(&'i self) -> Option<&'o EStr<Fragment>> {
        let end = self.meta.query_or_path_end();
        let s = self.as_str();
        if end == s.len() {
            None
        } else {
            Some(EStr::new_validated(&s[end + 1..]))
        }
    }
}

impl<T: Bos<str>> Uri<T> {
    fn as_view(&self) -> Uri<&str> {
        Uri {
            val: self.as_str(),
            meta: self.meta,
        }
    }

    /// Returns the decimal value of the port, if it is nonempty.
    ///
    /// A parsed port always fits in a `u16`.
    #[must_use]
    pub fn port_to_u16(&self) -> Option<u16> {
        self.as_view().authority().and_then(|auth| auth.port_to_u16())
    }

    /// Checks whether a scheme component is present.
    #[must_use]
    pub fn has_scheme(&self) -> bool {
        self.meta.scheme_end.is_some()
    }

    /// Checks whether an authority component is present.
    #[must_use]
    pub fn has_authority(&self) -> bool {
        self.meta.auth_meta.is_some()
    }

    /// Checks whether a userinfo subcomponent is present.
    #[must_use]
    pub fn has_userinfo(&self) -> bool {
        self.as_view().userinfo().is_some()
    }

    /// Checks whether a port subcomponent is present.
    ///
    /// An empty port counts as present.
    #[must_use]
    pub fn has_port(&self) -> bool {
        self.as_view().port().is_some()
    }

    /// Checks whether a query component is present.
    #[must_use]
    pub fn has_query(&self) -> bool {
        self.meta.query_end.is_some()
    }

    /// Checks whether a fragment component is present.
    #[must_use]
    pub fn has_fragment(&self) -> bool {
        self.meta.query_or_path_end() != self.as_str().len()
    }

    /// Checks whether the URI reference is absolute, i.e., with a
    /// scheme.
    ///
    /// # Examples
    ///
    /// ```
    /// use strict_uri::Uri;
    ///
    /// assert!(Uri::parse("http://example.com/")?.is_absolute());
    /// assert!(Uri::parse("http://example.com/#title1")?.is_absolute());
    /// assert!(!Uri::parse_reference("/path/to/file")?.is_absolute());
    /// # Ok::<_, strict_uri::error::ParseError>(())
    /// ```
    #[must_use]
    pub fn is_absolute(&self) -> bool {
        self.has_scheme()
    }

    /// Checks whether the URI reference is opaque, i.e., with a scheme
    /// and without an authority.
    ///
    /// # Examples
    ///
    /// ```
    /// use strict_uri::Uri;
    ///
    /// assert!(Uri::parse("mailto:john@example.com")?.is_opaque());
    /// assert!(Uri::parse("file:/bin/bash")?.is_opaque());
    /// assert!(!Uri::parse("file:///bin/bash")?.is_opaque());
    /// assert!(!Uri::parse_reference("/bin/bash")?.is_opaque());
    /// # Ok::<_, strict_uri::error::ParseError>(())
    /// ```
    #[must_use]
    pub fn is_opaque(&self) -> bool {
        self.has_scheme() && !self.has_authority()
    }

    /// Resolves the URI reference against the given base URI and
    /// returns the target URI.
    ///
    /// This method applies the reference resolution algorithm from
    /// [Section 5.3 of RFC 3986](https://datatracker.ietf.org/doc/html/rfc3986#section-5.3),
    /// with one exception: a reference that carries a scheme resolves
    /// to an unchanged copy of itself. Its dot segments are kept, so
    /// that resolution never alters a reference that is already a URI.
    ///
    /// No normalization except the removal of dot segments is
    /// performed. Use [`normalize`](Self::normalize) if necessary.
    ///
    /// The fragment of the target always comes from the reference,
    /// never from the base.
    ///
    /// # Errors
    ///
    /// Returns `Err` if the base is not an [absolute] URI, i.e., if it
    /// has no scheme.
    ///
    /// [absolute]: Self::is_absolute
    ///
    /// # Examples
    ///
    /// ```
    /// use strict_uri::Uri;
    ///
    /// let base = Uri::parse("http://example.com/foo/bar")?;
    ///
    /// let uri = Uri::parse_reference("baz")?;
    /// assert_eq!(uri.resolve_against(&base).unwrap(), "http://example.com/foo/baz");
    ///
    /// let uri = Uri::parse_reference("../baz")?;
    /// assert_eq!(uri.resolve_against(&base).unwrap(), "http://example.com/baz");
    ///
    /// let uri = Uri::parse_reference("?baz")?;
    /// assert_eq!(uri.resolve_against(&base).unwrap(), "http://example.com/foo/bar?baz");
    /// # Ok::<_, strict_uri::error::ParseError>(())
    /// ```
    pub fn resolve_against<U: Bos<str>>(&self, base: &Uri<U>) -> Result<Uri<String>, ResolveError> {
        resolver::resolve(base.as_view(), self.as_view())
    }

    /// Normalizes the URI reference.
    ///
    /// This method applies the syntax-based normalization from
    /// [Section 6.2.2 of RFC 3986](https://datatracker.ietf.org/doc/html/rfc3986#section-6.2.2):
    ///
    /// - The scheme and the host are lowercased.
    /// - Percent-encoded octets are uppercased, and decoded where they
    ///   correspond to an unreserved character.
    /// - The path is normalized as by
    ///   [`EStr::normalize_segments`]: `"."` segments are dropped,
    ///   `".."` segments pop their predecessor, adjacent empty segments
    ///   are collapsed, and an empty path becomes `"/"`.
    ///
    /// An empty port is kept as is, since removing it would require
    /// scheme-specific knowledge.
    ///
    /// [`EStr::normalize_segments`]: EStr#method.normalize_segments
    ///
    /// # Errors
    ///
    /// Returns `Err` if a `".."` segment would climb above the root of
    /// the path. Use [`resolve_against`](Self::resolve_against) for the
    /// absorbing behavior of reference resolution.
    ///
    /// # Examples
    ///
    /// ```
    /// use strict_uri::Uri;
    ///
    /// let uri = Uri::parse("eXAMPLE://a/./b/../b/%63/%7bfoo%7d")?;
    /// assert_eq!(uri.normalize().unwrap(), "example://a/b/c/%7Bfoo%7D");
    ///
    /// let uri = Uri::parse("http://a/../b")?;
    /// assert!(uri.normalize().is_err());
    /// # Ok::<_, strict_uri::error::ParseError>(())
    /// ```
    pub fn normalize(&self) -> Result<Uri<String>, NormalizeError> {
        normalizer::normalize(self.as_view())
    }

    /// Creates a new URI reference by replacing the fragment component
    /// of `self` with the given one.
    ///
    /// # Examples
    ///
    /// ```
    /// use strict_uri::{encoding::EStr, Uri};
    ///
    /// let uri = Uri::parse("http://example.com/")?;
    /// assert_eq!(
    ///     uri.with_fragment(Some(EStr::new_or_panic("fragment"))),
    ///     "http://example.com/#fragment"
    /// );
    /// # Ok::<_, strict_uri::error::ParseError>(())
    /// ```
    #[must_use]
    pub fn with_fragment(&self, fragment: Option<&EStr<Fragment>>) -> Uri<String> {
        let mut val = String::from(&self.as_str()[..self.meta.query_or_path_end()]);
        if let Some(fragment) = fragment {
            val.push('#');
            val.push_str(fragment.as_str());
        }
        Uri {
            val,
            meta: self.meta,
        }
    }

    /// Creates a new builder preloaded with the components of `self`.
    ///
    /// The scheme and the host are lowercased on the way in, so a
    /// rebuilt URI equals the [normalized](Self::normalize) original
    /// in those components.
    #[must_use]
    pub fn to_builder(&self) -> Builder {
        Builder::from_uri(self.as_view())
    }
}

fn cmp_by_component(a: Uri<&str>, b: Uri<&str>) -> Ordering {
    fn ci(x: &str, y: &str) -> Ordering {
        let x = x.bytes().map(|b| b.to_ascii_lowercase());
        let y = y.bytes().map(|b| b.to_ascii_lowercase());
        x.cmp(y)
    }
    // An absent component orders before a present one, even an empty one.
    fn opt(x: Option<&str>, y: Option<&str>, f: fn(&str, &str) -> Ordering) -> Ordering {
        match (x, y) {
            (Some(x), Some(y)) => f(x, y),
            (Some(_), None) => Ordering::Greater,
            (None, Some(_)) => Ordering::Less,
            (None, None) => Ordering::Equal,
        }
    }

    opt(
        a.scheme().map(Scheme::as_str),
        b.scheme().map(Scheme::as_str),
        ci,
    )
    .then_with(|| match (a.authority(), b.authority()) {
        (Some(x), Some(y)) => opt(
            x.userinfo().map(EStr::as_str),
            y.userinfo().map(EStr::as_str),
            str::cmp,
        )
        .then_with(|| ci(x.host(), y.host()))
        .then_with(|| {
            opt(
                x.port().map(EStr::as_str),
                y.port().map(EStr::as_str),
                str::cmp,
            )
        }),
        (Some(_), None) => Ordering::Greater,
        (None, Some(_)) => Ordering::Less,
        (None, None) => Ordering::Equal,
    })
    .then_with(|| a.path().as_str().cmp(b.path().as_str()))
    .then_with(|| {
        opt(
            a.query().map(EStr::as_str),
            b.query().map(EStr::as_str),
            str::cmp,
        )
    })
    .then_with(|| {
        opt(
            a.fragment().map(EStr::as_str),
            b.fragment().map(EStr::as_str),
            str::cmp,
        )
    })
}

impl<T: Bos<str>, U: Bos<str>> PartialEq<Uri<U>> for Uri<T> {
    fn eq(&self, other: &Uri<U>) -> bool {
        cmp_by_component(self.as_view(), other.as_view()) == Ordering::Equal
    }
}

impl<T: Bos<str>> PartialEq<str> for Uri<T> {
    fn eq(&self, other: &str) -> bool {
        self.as_str() == other
    }
}

impl<T: Bos<str>> PartialEq<Uri<T>> for str {
    fn eq(&self, other: &Uri<T>) -> bool {
        self == other.as_str()
    }
}

impl<T: Bos<str>> PartialEq<&str> for Uri<T> {
    fn eq(&self, other: &&str) -> bool {
        self.as_str() == *other
    }
}

impl<T: Bos<str>> PartialEq<Uri<T>> for &str {
    fn eq(&self, other: &Uri<T>) -> bool {
        *self == other.as_str()
    }
}

impl<T: Bos<str>> Eq for Uri<T> {}

impl<T: Bos<str>> hash::Hash for Uri<T> {
    fn hash<H: hash::Hasher>(&self, state: &mut H) {
        // Writes components the way `cmp_by_component` compares them.
        // The discriminant bytes cannot collide with component bytes,
        // which are all ASCII printable.
        fn lower<H: hash::Hasher>(s: &str, state: &mut H) {
            for b in s.bytes() {
                state.write_u8(b.to_ascii_lowercase());
            }
        }
        fn exact<H: hash::Hasher>(s: Option<&str>, state: &mut H) {
            match s {
                Some(s) => {
                    state.write_u8(1);
                    s.hash(state);
                }
                None => state.write_u8(0),
            }
        }

        let view = self.as_view();
        match view.scheme() {
            Some(scheme) => {
                state.write_u8(1);
                lower(scheme.as_str(), state);
                state.write_u8(0);
            }
            None => state.write_u8(0),
        }
        match view.authority() {
            Some(auth) => {
                state.write_u8(1);
                exact(auth.userinfo().map(EStr::as_str), state);
                lower(auth.host(), state);
                state.write_u8(0);
                exact(auth.port().map(EStr::as_str), state);
            }
            None => state.write_u8(0),
        }
        view.path().as_str().hash(state);
        exact(view.query().map(EStr::as_str), state);
        exact(view.fragment().map(EStr::as_str), state);
    }
}

impl<T: Bos<str>> PartialOrd for Uri<T> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<T: Bos<str>> Ord for Uri<T> {
    fn cmp(&self, other: &Self) -> Ordering {
        cmp_by_component(self.as_view(), other.as_view())
    }
}

impl<T: Bos<str>> AsRef<str> for Uri<T> {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl<'a> TryFrom<&'a str> for Uri<&'a str> {
    type Error = ParseError;

    /// Equivalent to [`parse`](Self::parse).
    fn try_from(value: &'a str) -> Result<Self, Self::Error> {
        Uri::parse(value)
    }
}

impl TryFrom<String> for Uri<String> {
    type Error = ParseError<String>;

    /// Equivalent to [`parse`](Self::parse).
    fn try_from(value: String) -> Result<Self, Self::Error> {
        Uri::parse(value)
    }
}

impl<'a> From<Uri<&'a str>> for &'a str {
    fn from(uri: Uri<&'a str>) -> &'a str {
        uri.val
    }
}

impl From<Uri<String>> for String {
    fn from(uri: Uri<String>) -> String {
        uri.val
    }
}

impl<'a> From<Uri<&'a str>> for Uri<String> {
    fn from(uri: Uri<&'a str>) -> Self {
        uri.to_owned()
    }
}

impl FromStr for Uri<String> {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Uri::parse(s).map(|uri: Uri<&str>| uri.to_owned())
    }
}

#[cfg(feature = "serde")]
impl<T: Bos<str>> Serialize for Uri<T> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}

#[cfg(feature = "serde")]
impl<'de: 'a, 'a> Deserialize<'de> for Uri<&'a str> {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = <&'de str>::deserialize(deserializer)?;
        Uri::parse_reference(s).map_err(de::Error::custom)
    }
}

#[cfg(feature = "serde")]
impl<'de> Deserialize<'de> for Uri<String> {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Uri::parse_reference(s).map_err(de::Error::custom)
    }
}
