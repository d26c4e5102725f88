//! A builder type for URIs.

use crate::{
    component::Authority,
    encoding::{
        encoder::{Encoder, Fragment, Path, Query, RegName, Userinfo},
        table::{self, Table},
        EString,
    },
    error::{BuildError, BuildErrorKind, ParseError},
    internal::{Criteria, Parse},
    Uri,
};
use alloc::{
    borrow::ToOwned,
    string::{String, ToString},
};
use core::fmt;

/// An encoder for query keys and values, additionally
/// encoding `'&'`, `'='` and `'+'`.
struct QueryData;

impl Encoder for QueryData {
    const TABLE: &'static Table = &table::QUERY.sub(&Table::gen(b"&=+"));
}

/// A builder for URIs.
///
/// This struct is created by [`Uri::builder`] or [`Uri::to_builder`].
///
/// Each setter stores a percent-encoded copy of its input. The scheme
/// and the host are additionally lowercased. Validation is deferred to
/// [`build`](Self::build), which assembles the components in the order
/// of the `URI-reference` rule of RFC 3986 and parses the result back.
///
/// The builder never removes dot segments from the path. Use
/// [`normalize`](Uri::normalize) or [`EStr::normalize_segments`] to
/// do that after building.
///
/// [`EStr::normalize_segments`]: crate::encoding::EStr#method.normalize_segments
///
/// # Examples
///
/// ```
/// use strict_uri::Uri;
///
/// let uri = Uri::builder()
///     .scheme("foo")
///     .user_info("user")
///     .host("example.com")
///     .port(8042)
///     .path("/over/there")
///     .append_query_key_value_pair("name", "ferret")
///     .fragment("nose")
///     .build()?;
///
/// assert_eq!(
///     uri.as_str(),
///     "foo://user@example.com:8042/over/there?name=ferret#nose"
/// );
/// # Ok::<_, strict_uri::error::BuildError>(())
/// ```
pub struct Builder {
    scheme: Option<String>,
    userinfo: Option<EString<Userinfo>>,
    host: Option<String>,
    port: Option<String>,
    path: EString<Path>,
    query: Option<EString<Query>>,
    fragment: Option<EString<Fragment>>,
    // The first error that occurred while setting a component,
    // surfaced by `build`.
    err: Option<ParseError>,
}

impl Builder {
    /// Creates a builder with all components absent.
    #[must_use]
    pub fn new() -> Self {
        Builder {
            scheme: None,
            userinfo: None,
            host: None,
            port: None,
            path: EString::new(),
            query: None,
            fragment: None,
            err: None,
        }
    }

    pub(crate) fn from_uri(u: Uri<&str>) -> Self {
        let mut b = Builder::new();
        if let Some(scheme) = u.scheme() {
            b.scheme = Some(scheme.as_str().to_ascii_lowercase());
        }
        if let Some(auth) = u.authority() {
            b.userinfo = auth.userinfo().map(|s| s.to_owned());
            b.host = Some(auth.host().to_ascii_lowercase());
            b.port = auth.port().map(|s| s.as_str().to_string());
        }
        b.path.push_encoded(u.path());
        b.query = u.query().map(|s| s.to_owned());
        b.fragment = u.fragment().map(|s| s.to_owned());
        b
    }

    /// Sets the scheme, lowercased.
    pub fn scheme(&mut self, scheme: &str) -> &mut Self {
        self.scheme = Some(scheme.to_ascii_lowercase());
        self
    }

    /// Sets the userinfo subcomponent, percent-encoding where necessary.
    ///
    /// [`build`](Self::build) fails if a userinfo is set without a host.
    pub fn user_info(&mut self, userinfo: &str) -> &mut Self {
        let mut buf = EString::new();
        buf.push(userinfo);
        self.userinfo = Some(buf);
        self
    }

    /// Sets the host subcomponent, percent-encoded and lowercased.
    ///
    /// Input enclosed in square brackets is taken as an IP literal
    /// and stored verbatim apart from lowercasing.
    ///
    /// Setting a host is what makes an authority present in the
    /// built URI.
    pub fn host(&mut self, host: &str) -> &mut Self {
        let mut buf = if host.starts_with('[') && host.ends_with(']') {
            String::from(host)
        } else {
            let mut buf = EString::<RegName>::new();
            buf.push(host);
            buf.into_string()
        };
        buf.make_ascii_lowercase();
        self.host = Some(buf);
        self
    }

    /// Sets the port subcomponent.
    ///
    /// The port is stringified with [`Display`](fmt::Display), so both
    /// numeric ports and string ports are accepted.
    pub fn port<P: fmt::Display>(&mut self, port: P) -> &mut Self {
        self.port = Some(port.to_string());
        self
    }

    /// Parses an authority string and distributes its userinfo, host
    /// and port over the respective components.
    ///
    /// The parse failure, if any, is surfaced by [`build`](Self::build).
    pub fn authority(&mut self, authority: &str) -> &mut Self {
        match Authority::parse(authority) {
            Ok(auth) => {
                self.userinfo = auth.userinfo().map(|s| s.to_owned());
                self.host = Some(auth.host().to_ascii_lowercase());
                self.port = auth.port().map(|s| s.as_str().to_string());
            }
            Err(e) => self.err = self.err.take().or(Some(e)),
        }
        self
    }

    /// Sets the path, percent-encoding where necessary.
    ///
    /// Dot segments are kept as given.
    pub fn path(&mut self, path: &str) -> &mut Self {
        self.path.clear();
        self.path.push(path);
        self
    }

    /// Appends a run of query text, percent-encoding where necessary.
    ///
    /// A literal `'&'` within the text is kept as a separator. Calls
    /// after the first are joined to the existing query with `'&'`.
    pub fn append_query(&mut self, query: &str) -> &mut Self {
        let buf = self.query.get_or_insert_with(EString::new);
        if !buf.is_empty() {
            buf.push_byte(b'&');
        }
        buf.push(query);
        self
    }

    /// Appends a `key=value` pair to the query.
    ///
    /// The key and the value are stringified independently and
    /// percent-encoded with `'&'`, `'='` and `'+'` also escaped.
    pub fn append_query_key_value_pair<K, V>(&mut self, key: K, value: V) -> &mut Self
    where
        K: fmt::Display,
        V: fmt::Display,
    {
        let buf = self.query.get_or_insert_with(EString::new);
        if !buf.is_empty() {
            buf.push_byte(b'&');
        }
        buf.push_with::<QueryData>(&key.to_string());
        buf.push_byte(b'=');
        buf.push_with::<QueryData>(&value.to_string());
        self
    }

    /// Sets the fragment, percent-encoding where necessary.
    pub fn fragment(&mut self, fragment: &str) -> &mut Self {
        let mut buf = EString::new();
        buf.push(fragment);
        self.fragment = Some(buf);
        self
    }

    /// Unsets the scheme.
    pub fn clear_scheme(&mut self) -> &mut Self {
        self.scheme = None;
        self
    }

    /// Unsets the userinfo, host and port.
    pub fn clear_authority(&mut self) -> &mut Self {
        self.userinfo = None;
        self.host = None;
        self.port = None;
        self
    }

    /// Unsets the userinfo.
    pub fn clear_user_info(&mut self) -> &mut Self {
        self.userinfo = None;
        self
    }

    /// Unsets the host.
    pub fn clear_host(&mut self) -> &mut Self {
        self.host = None;
        self
    }

    /// Unsets the port.
    pub fn clear_port(&mut self) -> &mut Self {
        self.port = None;
        self
    }

    /// Sets the path to the empty path.
    pub fn clear_path(&mut self) -> &mut Self {
        self.path.clear();
        self
    }

    /// Unsets the query.
    pub fn clear_query(&mut self) -> &mut Self {
        self.query = None;
        self
    }

    /// Unsets the fragment.
    pub fn clear_fragment(&mut self) -> &mut Self {
        self.fragment = None;
        self
    }

    /// Assembles the components into a URI.
    ///
    /// The components are concatenated in the order of the
    /// `URI-reference` rule of RFC 3986 and the result is parsed back,
    /// so that no invalid URI value can escape the builder.
    ///
    /// # Errors
    ///
    /// Returns `Err` if any of the following is true.
    ///
    /// - A previous call to [`authority`](Self::authority) failed.
    /// - A userinfo or a port is present without a host.
    /// - An authority is present, but the path is neither empty
    ///   nor starting with `'/'`.
    /// - An authority is absent, but the path starts with `"//"`.
    /// - Neither a scheme nor an authority is present, but the first
    ///   path segment contains `':'`.
    /// - The assembled string does not parse as a URI reference.
    pub fn build(&self) -> Result<Uri<String>, BuildError> {
        fn first_segment_contains_colon(path: &str) -> bool {
            path.split_once('/').map_or(path, |x| x.0).contains(':')
        }

        if let Some(e) = self.err {
            return Err(BuildError(BuildErrorKind::BadComponent(e)));
        }

        let path = self.path.as_str();
        if self.host.is_some() {
            if !path.is_empty() && !path.starts_with('/') {
                return Err(BuildError(BuildErrorKind::NonAbemptyPath));
            }
        } else if self.userinfo.is_some() || self.port.is_some() {
            return Err(BuildError(BuildErrorKind::UserinfoOrPortWithoutHost));
        } else {
            if path.starts_with("//") {
                return Err(BuildError(BuildErrorKind::PathStartingWithDoubleSlash));
            }
            if self.scheme.is_none() && first_segment_contains_colon(path) {
                return Err(BuildError(BuildErrorKind::ColonInFirstPathSegment));
            }
        }

        let mut buf = String::new();
        if let Some(scheme) = &self.scheme {
            buf.push_str(scheme);
            buf.push(':');
        }
        if let Some(host) = &self.host {
            buf.push_str("//");
            if let Some(userinfo) = &self.userinfo {
                buf.push_str(userinfo.as_str());
                buf.push('@');
            }
            buf.push_str(host);
            if let Some(port) = &self.port {
                buf.push(':');
                buf.push_str(port);
            }
        }
        buf.push_str(path);
        if let Some(query) = &self.query {
            buf.push('?');
            buf.push_str(query.as_str());
        }
        if let Some(fragment) = &self.fragment {
            buf.push('#');
            buf.push_str(fragment.as_str());
        }

        let (val, meta) = Parse::parse(
            buf,
            Criteria {
                require_scheme: false,
            },
        )
        .map_err(|e| BuildError(BuildErrorKind::BadComponent(e.strip_input())))?;
        Ok(Uri { val, meta })
    }
}

impl Default for Builder {
    fn default() -> Self {
        Builder::new()
    }
}

impl fmt::Debug for Builder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Builder")
            .field("scheme", &self.scheme)
            .field("userinfo", &self.userinfo)
            .field("host", &self.host)
            .field("port", &self.port)
            .field("path", &self.path)
            .field("query", &self.query)
            .field("fragment", &self.fragment)
            .finish()
    }
}
