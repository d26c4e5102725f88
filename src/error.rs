//! Error types for this crate.

use alloc::string::String;
use core::fmt;

/// Detailed cause of a [`ParseError`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[non_exhaustive]
pub enum ParseErrorKind {
    /// Invalid percent-encoded octet that is either non-hexadecimal or incomplete.
    ///
    /// The error index points to the percent character "%" of the octet.
    InvalidOctet,
    /// Unexpected character that is not allowed by the URI syntax.
    ///
    /// The error index points to the character.
    UnexpectedChar,
    /// Invalid IP literal address.
    ///
    /// The error index points to the preceding left square bracket "[".
    InvalidIpLiteral,
    /// The port subcomponent is not a decimal integer less than `65536`.
    ///
    /// The error index points to the first character of the port.
    InvalidPort,
    /// The input is not well-formed UTF-16.
    ///
    /// The error index is always zero.
    InvalidUtf16,
}

/// An error occurred when parsing URI references.
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct ParseError<I = ()> {
    pub(crate) index: usize,
    pub(crate) kind: ParseErrorKind,
    pub(crate) input: I,
}

impl ParseError {
    pub(crate) fn with_input<I>(self, input: I) -> ParseError<I> {
        ParseError {
            index: self.index,
            kind: self.kind,
            input,
        }
    }
}

impl<I> ParseError<I> {
    /// Returns the index at which the error occurred.
    ///
    /// For inputs accepted by value, the index is relative to the input
    /// after whitespace trimming.
    #[must_use]
    pub fn index(&self) -> usize {
        self.index
    }

    /// Returns the detailed cause of the error.
    #[must_use]
    pub fn kind(&self) -> ParseErrorKind {
        self.kind
    }

    /// Strips the input from the error.
    #[must_use]
    pub fn strip_input(&self) -> ParseError {
        ParseError {
            index: self.index,
            kind: self.kind,
            input: (),
        }
    }
}

impl ParseError<String> {
    /// Recovers the input that was attempted to be parsed.
    #[must_use]
    pub fn into_input(self) -> String {
        self.input
    }

    /// Returns the longest prefix of the input that parsed successfully.
    #[must_use]
    pub fn consumed(&self) -> &str {
        &self.input[..self.index]
    }
}

impl<I> fmt::Debug for ParseError<I> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ParseError")
            .field("index", &self.index)
            .field("kind", &self.kind)
            .finish()
    }
}

impl<I> fmt::Display for ParseError<I> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let msg = match self.kind {
            ParseErrorKind::InvalidOctet => "invalid percent-encoded octet at index ",
            ParseErrorKind::UnexpectedChar => "unexpected character at index ",
            ParseErrorKind::InvalidIpLiteral => "invalid IP literal at index ",
            ParseErrorKind::InvalidPort => "invalid port at index ",
            ParseErrorKind::InvalidUtf16 => "invalid UTF-16 at index ",
        };
        write!(f, "{msg}{}", self.index)
    }
}

#[cfg(feature = "std")]
impl<I> std::error::Error for ParseError<I> {}

/// An error occurred when resolving URI references.
#[derive(Clone, Copy, Debug)]
pub struct ResolveError(pub(crate) ResolveErrorKind);

#[derive(Clone, Copy, Debug)]
pub(crate) enum ResolveErrorKind {
    NonAbsoluteBase,
}

impl fmt::Display for ResolveError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let msg = match self.0 {
            ResolveErrorKind::NonAbsoluteBase => "non-absolute base URI",
        };
        f.write_str(msg)
    }
}

#[cfg(feature = "std")]
impl std::error::Error for ResolveError {}

/// An error occurred when normalizing a path strictly.
///
/// Returned when a ".." segment would climb above the root of the path.
#[derive(Clone, Copy, Debug)]
pub struct NormalizeError(pub(crate) ());

impl fmt::Display for NormalizeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("\"..\" segment underflows the path root")
    }
}

#[cfg(feature = "std")]
impl std::error::Error for NormalizeError {}

/// An error occurred when building a URI.
#[derive(Clone, Debug)]
pub struct BuildError(pub(crate) BuildErrorKind);

#[derive(Clone, Debug)]
pub(crate) enum BuildErrorKind {
    UserinfoOrPortWithoutHost,
    NonAbemptyPath,
    PathStartingWithDoubleSlash,
    ColonInFirstPathSegment,
    BadComponent(ParseError),
}

impl fmt::Display for BuildError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.0 {
            BuildErrorKind::UserinfoOrPortWithoutHost => {
                f.write_str("userinfo or port cannot be present without host")
            }
            BuildErrorKind::NonAbemptyPath => {
                f.write_str("path must either be empty or start with '/' when authority is present")
            }
            BuildErrorKind::PathStartingWithDoubleSlash => {
                f.write_str("path cannot start with \"//\" when authority is absent")
            }
            BuildErrorKind::ColonInFirstPathSegment => {
                f.write_str("first path segment cannot contain ':' in relative-path reference")
            }
            BuildErrorKind::BadComponent(e) => write!(f, "invalid component: {e}"),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for BuildError {}
