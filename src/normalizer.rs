use crate::{
    encoding::{decode_octet, table::UNRESERVED},
    error::NormalizeError,
    internal::{AuthMeta, Meta},
    Uri,
};
use alloc::{string::String, vec::Vec};
use core::num::NonZeroUsize;

/// Applies syntax-based normalization from Section 6.2.2 of RFC 3986.
///
/// The scheme and the host are lowercased, percent-encoded octets are
/// uppercased and decoded where unreserved, and the path is run through
/// [`normalize_segments`]. An empty port is kept as is, since removing
/// it is a scheme-based rather than a syntax-based operation.
pub(crate) fn normalize(u: Uri<&str>) -> Result<Uri<String>, NormalizeError> {
    let mut buf = String::new();

    normalize_pct(&mut buf, u.path().as_str(), false);
    let path_buf = normalize_segments(&buf)?;
    buf.clear();

    let mut meta = Meta::default();

    if let Some(scheme) = u.scheme() {
        buf.push_str(scheme.as_str());
        buf.make_ascii_lowercase();
        meta.scheme_end = NonZeroUsize::new(buf.len());
        buf.push(':');
    }

    if let Some(auth) = u.authority() {
        buf.push_str("//");

        if let Some(userinfo) = auth.userinfo() {
            normalize_pct(&mut buf, userinfo.as_str(), false);
            buf.push('@');
        }

        let host_start = buf.len();
        let host = auth.host();
        if host.starts_with('[') {
            // The bracketed content may contain a stray '%'.
            buf.push_str(host);
            buf[host_start..].make_ascii_lowercase();
        } else {
            normalize_pct(&mut buf, host, true);
        }
        meta.auth_meta = Some(AuthMeta {
            host_bounds: (host_start, buf.len()),
        });

        if let Some(port) = auth.port() {
            buf.push(':');
            buf.push_str(port.as_str());
        }
    }

    meta.path_bounds.0 = buf.len();
    // Adjacent empty segments are collapsed, so the path never starts
    // with "//" and the output always reparses as given.
    buf.push_str(&path_buf);
    meta.path_bounds.1 = buf.len();

    if let Some(query) = u.query() {
        buf.push('?');
        normalize_pct(&mut buf, query.as_str(), false);
        meta.query_end = NonZeroUsize::new(buf.len());
    }

    if let Some(fragment) = u.fragment() {
        buf.push('#');
        normalize_pct(&mut buf, fragment.as_str(), false);
    }

    Ok(Uri { val: buf, meta })
}

/// Uppercases the hexadecimal digits of percent-encoded octets and
/// decodes the octets that encode unreserved characters.
fn normalize_pct(buf: &mut String, s: &str, to_lowercase: bool) {
    let s = s.as_bytes();
    let mut i = 0;

    while i < s.len() {
        let mut x = s[i];
        if x == b'%' {
            let (hi, lo) = (s[i + 1], s[i + 2]);
            let mut octet = decode_octet(hi, lo);
            if UNRESERVED.allows(octet) {
                if to_lowercase {
                    octet = octet.to_ascii_lowercase();
                }
                buf.push(octet as char)
            } else {
                buf.push('%');
                buf.push(hi.to_ascii_uppercase() as char);
                buf.push(lo.to_ascii_uppercase() as char);
            }
            i += 3;
        } else {
            if to_lowercase {
                x = x.to_ascii_lowercase();
            }
            buf.push(x as char);
            i += 1;
        }
    }
}

/// Normalizes path segments, failing on a ".." segment that would
/// climb above the root.
pub(crate) fn normalize_segments(path: &str) -> Result<String, NormalizeError> {
    let mut segs = Vec::new();
    for seg in path.split('/') {
        match seg {
            "." => {}
            ".." => {
                if segs.len() < 2 {
                    return Err(NormalizeError(()));
                }
                segs.pop();
            }
            _ => segs.push(seg),
        }
    }

    let mut out = String::with_capacity(path.len());
    let mut first = true;
    let mut prev_empty = false;
    for seg in segs {
        if seg.is_empty() && prev_empty {
            continue;
        }
        prev_empty = seg.is_empty();
        if !first {
            out.push('/');
        }
        first = false;
        out.push_str(seg);
    }

    if out.is_empty() {
        out.push('/');
    }
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::normalize_segments;

    #[test]
    fn segments() {
        assert_eq!(normalize_segments("/a/./b/../c").unwrap(), "/a/c");
        assert_eq!(normalize_segments("//a").unwrap(), "/a");
        assert_eq!(normalize_segments("a//").unwrap(), "a/");
        assert_eq!(normalize_segments("").unwrap(), "/");
        assert_eq!(normalize_segments("/").unwrap(), "/");
        assert_eq!(normalize_segments("/a/b/..").unwrap(), "/a");

        assert!(normalize_segments("/..").is_err());
        assert!(normalize_segments("a/..").is_err());
        assert!(normalize_segments("..").is_err());
    }
}
