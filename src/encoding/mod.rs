//! Utilities for percent-encoding.

pub mod encoder;
mod estring;
pub mod table;

pub use estring::EString;

use crate::{error::NormalizeError, normalizer};
use alloc::{
    borrow::{Cow, ToOwned},
    string::{FromUtf8Error, String},
    vec::Vec,
};
use core::{cmp::Ordering, hash, iter::FusedIterator, marker::PhantomData, str::Split as StrSplit};
use encoder::{Encoder, Path};
use ref_cast::{ref_cast_custom, RefCastCustom};
use table::Table;

/// Percent-encoded string slices.
///
/// The owned counterpart of `EStr` is [`EString`]. See its documentation
/// if you want to build a percent-encoded string from scratch.
///
/// # Type parameter
///
/// The `EStr<E>` type is parameterized over a type `E` that implements [`Encoder`].
/// The associated constant `E::TABLE` of type [`Table`] specifies the byte patterns
/// allowed in a string. The underlying byte sequence of an `EStr<E>` slice
/// can be formed by joining any number of the following byte sequences:
///
/// - An ASCII byte `x` where `E::TABLE.allows(x)`.
/// - `[b'%', hi, lo]` where `E::TABLE.allows_enc() && hi.is_ascii_hexdigit() && lo.is_ascii_hexdigit()`.
///
/// # Comparison
///
/// `EStr` slices are compared [lexicographically](Ord#lexicographical-comparison)
/// by their byte values. Normalization is **not** performed prior to comparison.
///
/// # Examples
///
/// Parse key-value pairs from a query string into a hash map:
///
/// ```
/// use std::collections::HashMap;
/// use strict_uri::{encoding::EStr, Uri};
///
/// let s = "?name=%E5%BC%A0%E4%B8%89&speech=%C2%A1Ol%C3%A9%21";
/// let query = Uri::parse_reference(s)?.query().unwrap();
/// let map: HashMap<_, _> = query
///     .split('&')
///     .map(|s| s.split_once('=').unwrap_or((s, EStr::EMPTY)))
///     .map(|(k, v)| (k.decode().into_string_lossy(), v.decode().into_string_lossy()))
///     .collect();
/// assert_eq!(map["name"], "张三");
/// assert_eq!(map["speech"], "¡Olé!");
/// # Ok::<_, strict_uri::error::ParseError>(())
/// ```
#[derive(RefCastCustom)]
#[repr(transparent)]
pub struct EStr<E: Encoder> {
    encoder: PhantomData<E>,
    inner: str,
}

impl<E: Encoder> EStr<E> {
    const ASSERT_ALLOWS_ENC: () = assert!(
        E::TABLE.allows_enc(),
        "table does not allow percent-encoding"
    );

    /// Converts a string slice to an `EStr` slice assuming validity.
    #[ref_cast_custom]
    pub(crate) const fn new_validated(s: &str) -> &Self;

    /// An empty `EStr` slice.
    pub const EMPTY: &'static Self = Self::new_validated("");

    /// Converts a string slice to an `EStr` slice, returning `None` if the conversion fails.
    #[must_use]
    pub const fn new(s: &str) -> Option<&Self> {
        if E::TABLE.validate(s.as_bytes()) {
            Some(Self::new_validated(s))
        } else {
            None
        }
    }

    /// Converts a string slice to an `EStr` slice.
    ///
    /// # Panics
    ///
    /// Panics if the string is not properly encoded with `E`.
    /// For a non-panicking variant, use [`new`](Self::new).
    #[must_use]
    pub const fn new_or_panic(s: &str) -> &Self {
        match Self::new(s) {
            Some(s) => s,
            None => panic!("improperly encoded string"),
        }
    }

    /// Yields the underlying string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.inner
    }

    /// Returns the length of the `EStr` slice in bytes.
    #[must_use]
    pub fn len(&self) -> usize {
        self.inner.len()
    }

    /// Checks whether the `EStr` slice is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }

    /// Decodes the `EStr` slice.
    ///
    /// Always **split before decoding**, as otherwise the data may be
    /// mistaken for component delimiters.
    ///
    /// This method allocates only when the slice contains any percent-encoded octet.
    ///
    /// Note that this method will **not** decode `U+002B` (+) as `0x20` (space).
    ///
    /// # Panics
    ///
    /// Panics at compile time if the table specified
    /// by `E` does not allow percent-encoding.
    ///
    /// # Examples
    ///
    /// ```
    /// use strict_uri::encoding::{encoder::Path, EStr};
    ///
    /// let dec = EStr::<Path>::new_or_panic("%C2%A1Hola%21").decode();
    /// assert_eq!(dec.as_bytes(), &[0xc2, 0xa1, 0x48, 0x6f, 0x6c, 0x61, 0x21]);
    /// assert_eq!(dec.into_string().unwrap(), "¡Hola!");
    /// ```
    #[must_use]
    pub fn decode(&self) -> Decode<'_> {
        let _ = Self::ASSERT_ALLOWS_ENC;

        let Some(i) = self.inner.bytes().position(|x| x == b'%') else {
            return Decode(DecodeInner::Src(&self.inner));
        };

        let bytes = self.inner.as_bytes();
        let mut buf = Vec::with_capacity(bytes.len());
        buf.extend_from_slice(&bytes[..i]);

        let mut rem = &bytes[i..];
        while let [x, tail @ ..] = rem {
            if *x == b'%' {
                // Validity guarantees that two hexadecimal digits follow.
                buf.push(decode_octet(tail[0], tail[1]));
                rem = &tail[2..];
            } else {
                buf.push(*x);
                rem = tail;
            }
        }
        Decode(DecodeInner::Dst(buf))
    }

    /// Returns an iterator over subslices of the `EStr` slice separated by the given delimiter.
    ///
    /// # Panics
    ///
    /// Panics if the delimiter is not a [reserved] character.
    ///
    /// [reserved]: https://datatracker.ietf.org/doc/html/rfc3986#section-2.2
    ///
    /// # Examples
    ///
    /// ```
    /// use strict_uri::encoding::{encoder::Path, EStr};
    ///
    /// assert!(EStr::<Path>::new_or_panic("a,b,c").split(',').eq(["a", "b", "c"]));
    /// assert!(EStr::<Path>::new_or_panic(",").split(',').eq(["", ""]));
    /// assert!(EStr::<Path>::EMPTY.split(',').eq([""]));
    /// ```
    pub fn split(&self, delim: char) -> Split<'_, E> {
        assert!(
            delim.is_ascii() && table::RESERVED.allows(delim as u8),
            "splitting with non-reserved character"
        );
        Split {
            inner: self.inner.split(delim),
            encoder: PhantomData,
        }
    }

    /// Splits the `EStr` slice on the first occurrence of the given delimiter and
    /// returns prefix before delimiter and suffix after delimiter.
    ///
    /// Returns `None` if the delimiter is not found.
    ///
    /// # Panics
    ///
    /// Panics if the delimiter is not a [reserved] character.
    ///
    /// [reserved]: https://datatracker.ietf.org/doc/html/rfc3986#section-2.2
    ///
    /// # Examples
    ///
    /// ```
    /// use strict_uri::encoding::{encoder::Path, EStr};
    ///
    /// assert_eq!(
    ///     EStr::<Path>::new_or_panic("foo;bar;baz").split_once(';'),
    ///     Some((EStr::new_or_panic("foo"), EStr::new_or_panic("bar;baz")))
    /// );
    ///
    /// assert_eq!(EStr::<Path>::new_or_panic("foo").split_once(';'), None);
    /// ```
    #[must_use]
    pub fn split_once(&self, delim: char) -> Option<(&Self, &Self)> {
        assert!(
            delim.is_ascii() && table::RESERVED.allows(delim as u8),
            "splitting with non-reserved character"
        );
        self.inner
            .split_once(delim)
            .map(|(a, b)| (Self::new_validated(a), Self::new_validated(b)))
    }

    /// Splits the `EStr` slice on the last occurrence of the given delimiter and
    /// returns prefix before delimiter and suffix after delimiter.
    ///
    /// Returns `None` if the delimiter is not found.
    ///
    /// # Panics
    ///
    /// Panics if the delimiter is not a [reserved] character.
    ///
    /// [reserved]: https://datatracker.ietf.org/doc/html/rfc3986#section-2.2
    #[must_use]
    pub fn rsplit_once(&self, delim: char) -> Option<(&Self, &Self)> {
        assert!(
            delim.is_ascii() && table::RESERVED.allows(delim as u8),
            "splitting with non-reserved character"
        );
        self.inner
            .rsplit_once(delim)
            .map(|(a, b)| (Self::new_validated(a), Self::new_validated(b)))
    }
}

/// Extension methods for the [path] component.
///
/// [path]: https://datatracker.ietf.org/doc/html/rfc3986#section-3.3
impl EStr<Path> {
    /// Checks whether the path is absolute, i.e., starting with `'/'`.
    #[inline]
    #[must_use]
    pub fn is_absolute(&self) -> bool {
        self.inner.starts_with('/')
    }

    /// Checks whether the path is rootless, i.e., not starting with `'/'`.
    #[inline]
    #[must_use]
    pub fn is_rootless(&self) -> bool {
        !self.inner.starts_with('/')
    }

    /// Returns an iterator over the path segments, separated by `'/'`.
    ///
    /// Returns `None` if the path is [rootless]. Use [`split`]
    /// instead if you need to split a rootless path on occurrences of `'/'`.
    ///
    /// Note that the path can be [empty] when authority is present,
    /// in which case this method will return `None`.
    ///
    /// [rootless]: Self::is_rootless
    /// [`split`]: Self::split
    /// [empty]: Self::is_empty
    ///
    /// # Examples
    ///
    /// ```
    /// use strict_uri::Uri;
    ///
    /// // Segments are separated by '/'.
    /// // The empty string before a leading '/' is not a segment.
    /// // However, segments can be empty in the other cases.
    /// let path = Uri::parse("file:///path/to//dir/")?.path();
    /// assert_eq!(path, "/path/to//dir/");
    /// assert!(path.segments_if_absolute().unwrap().eq(["path", "to", "", "dir", ""]));
    ///
    /// let path = Uri::parse("foo:bar/baz")?.path();
    /// assert_eq!(path, "bar/baz");
    /// assert!(path.segments_if_absolute().is_none());
    /// # Ok::<_, strict_uri::error::ParseError>(())
    /// ```
    #[inline]
    #[must_use]
    pub fn segments_if_absolute(&self) -> Option<Split<'_, Path>> {
        self.inner
            .strip_prefix('/')
            .map(|s| Self::new_validated(s).split('/'))
    }

    /// Normalizes the path segments strictly.
    ///
    /// This method removes "." segments, resolves ".." segments against
    /// their preceding segments, and collapses adjacent empty segments
    /// into one. Unlike [reference resolution], a ".." segment that has
    /// no preceding segment to remove is an error.
    ///
    /// Normalizing an empty path yields `"/"`.
    ///
    /// [reference resolution]: https://datatracker.ietf.org/doc/html/rfc3986#section-5.2.4
    ///
    /// # Errors
    ///
    /// Returns `Err` if a ".." segment would climb above the root.
    ///
    /// # Examples
    ///
    /// ```
    /// use strict_uri::encoding::{encoder::Path, EStr};
    ///
    /// let path = EStr::<Path>::new_or_panic("/a/./b/../c");
    /// assert_eq!(path.normalize_segments().unwrap(), "/a/c");
    ///
    /// assert!(EStr::<Path>::new_or_panic("/..").normalize_segments().is_err());
    /// ```
    pub fn normalize_segments(&self) -> Result<EString<Path>, NormalizeError> {
        normalizer::normalize_segments(&self.inner).map(EString::new_validated)
    }
}

impl<E: Encoder> AsRef<Self> for EStr<E> {
    fn as_ref(&self) -> &Self {
        self
    }
}

impl<E: Encoder> AsRef<str> for EStr<E> {
    fn as_ref(&self) -> &str {
        &self.inner
    }
}

impl<E: Encoder> PartialEq for EStr<E> {
    fn eq(&self, other: &Self) -> bool {
        self.inner == other.inner
    }
}

impl<E: Encoder> PartialEq<str> for EStr<E> {
    fn eq(&self, other: &str) -> bool {
        &self.inner == other
    }
}

impl<E: Encoder> PartialEq<EStr<E>> for str {
    fn eq(&self, other: &EStr<E>) -> bool {
        self == &other.inner
    }
}

impl<E: Encoder> Eq for EStr<E> {}

impl<E: Encoder> hash::Hash for EStr<E> {
    fn hash<H: hash::Hasher>(&self, state: &mut H) {
        self.inner.hash(state);
    }
}

impl<E: Encoder> PartialOrd for EStr<E> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<E: Encoder> Ord for EStr<E> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.inner.cmp(&other.inner)
    }
}

impl<E: Encoder> Default for &EStr<E> {
    /// Creates an empty `EStr` slice.
    fn default() -> Self {
        EStr::EMPTY
    }
}

impl<E: Encoder> ToOwned for EStr<E> {
    type Owned = EString<E>;

    fn to_owned(&self) -> EString<E> {
        EString::new_validated(self.inner.to_owned())
    }

    fn clone_into(&self, target: &mut EString<E>) {
        self.inner.clone_into(&mut target.buf);
    }
}

const fn gen_octet_table(hi: bool) -> [u8; 256] {
    let mut out = [0xff; 256];
    let shift = if hi { 4 } else { 0 };

    let mut i = 0;
    while i < 10 {
        out[(i + b'0') as usize] = i << shift;
        i += 1;
    }
    while i < 16 {
        out[(i - 10 + b'A') as usize] = i << shift;
        out[(i - 10 + b'a') as usize] = i << shift;
        i += 1;
    }
    out
}

const OCTET_TABLE_HI: &[u8; 256] = &gen_octet_table(true);
const OCTET_TABLE_LO: &[u8; 256] = &gen_octet_table(false);

/// Decodes a percent-encoded octet, assuming that the bytes are hexadecimal.
pub(crate) fn decode_octet(hi: u8, lo: u8) -> u8 {
    debug_assert!(hi.is_ascii_hexdigit() && lo.is_ascii_hexdigit());
    OCTET_TABLE_HI[hi as usize] | OCTET_TABLE_LO[lo as usize]
}

/// A decoded [`EStr`] slice.
///
/// This struct is created by [`EStr::decode`].
#[derive(Clone, Debug)]
pub struct Decode<'a>(DecodeInner<'a>);

#[derive(Clone, Debug)]
enum DecodeInner<'a> {
    Src(&'a str),
    Dst(Vec<u8>),
}

impl<'a> Decode<'a> {
    /// Returns a reference to the decoded bytes.
    #[must_use]
    pub fn as_bytes(&self) -> &[u8] {
        match &self.0 {
            DecodeInner::Src(s) => s.as_bytes(),
            DecodeInner::Dst(vec) => vec,
        }
    }

    /// Consumes this `Decode` and yields the underlying decoded bytes.
    #[must_use]
    pub fn into_bytes(self) -> Cow<'a, [u8]> {
        match self.0 {
            DecodeInner::Src(s) => Cow::Borrowed(s.as_bytes()),
            DecodeInner::Dst(vec) => Cow::Owned(vec),
        }
    }

    /// Returns `true` if anything is decoded, i.e., the original
    /// slice contains any percent-encoded octet.
    #[must_use]
    pub fn decoded_any(&self) -> bool {
        matches!(self.0, DecodeInner::Dst(_))
    }

    /// Converts the decoded bytes to a string.
    ///
    /// # Errors
    ///
    /// Returns `Err` if the bytes are not valid UTF-8.
    pub fn into_string(self) -> Result<Cow<'a, str>, FromUtf8Error> {
        match self.0 {
            DecodeInner::Src(s) => Ok(Cow::Borrowed(s)),
            DecodeInner::Dst(vec) => String::from_utf8(vec).map(Cow::Owned),
        }
    }

    /// Converts the decoded bytes to a string, replacing invalid UTF-8
    /// sequences with [`U+FFFD REPLACEMENT CHARACTER`][U+FFFD].
    ///
    /// [U+FFFD]: char::REPLACEMENT_CHARACTER
    #[must_use]
    pub fn into_string_lossy(self) -> Cow<'a, str> {
        match self.0 {
            DecodeInner::Src(s) => Cow::Borrowed(s),
            DecodeInner::Dst(vec) => match String::from_utf8_lossy(&vec) {
                // A borrowed `Cow` here means the bytes are valid UTF-8.
                Cow::Borrowed(_) => match String::from_utf8(vec) {
                    Ok(string) => Cow::Owned(string),
                    Err(_) => unreachable!(),
                },
                Cow::Owned(string) => Cow::Owned(string),
            },
        }
    }
}

/// An iterator over subslices of an [`EStr`] slice separated by a delimiter.
///
/// This struct is created by [`EStr::split`].
#[derive(Clone, Debug)]
#[must_use = "iterators are lazy and do nothing unless consumed"]
pub struct Split<'a, E: Encoder> {
    inner: StrSplit<'a, char>,
    encoder: PhantomData<E>,
}

impl<'a, E: Encoder> Iterator for Split<'a, E> {
    type Item = &'a EStr<E>;

    fn next(&mut self) -> Option<&'a EStr<E>> {
        self.inner.next().map(EStr::new_validated)
    }
}

impl<'a, E: Encoder> DoubleEndedIterator for Split<'a, E> {
    fn next_back(&mut self) -> Option<&'a EStr<E>> {
        self.inner.next_back().map(EStr::new_validated)
    }
}

impl<E: Encoder> FusedIterator for Split<'_, E> {}

#[cfg(test)]
mod tests {
    use super::*;
    use encoder::Query;

    #[test]
    fn decode_octets() {
        assert_eq!(decode_octet(b'2', b'0'), 0x20);
        assert_eq!(decode_octet(b'f', b'F'), 0xff);
        assert_eq!(decode_octet(b'0', b'0'), 0x00);
    }

    #[test]
    fn validate_tables() {
        assert!(table::QUERY.validate(b"key=value&flag"));
        assert!(table::QUERY.validate(b"%C2%A1"));
        assert!(!table::QUERY.validate(b"%C2%A"));
        assert!(!table::QUERY.validate(b"%GG"));
        assert!(!table::QUERY.validate(b"#"));
        assert!(!table::SCHEME.validate(b"a:b"));
    }

    #[test]
    fn decode_borrows_when_unencoded() {
        let s = EStr::<Query>::new_or_panic("plain");
        assert!(!s.decode().decoded_any());
        assert!(matches!(s.decode().into_bytes(), Cow::Borrowed(b"plain")));
    }
}
