use crate::{
    error::{ResolveError, ResolveErrorKind},
    internal::{AuthMeta, Meta},
    Uri,
};
use alloc::string::String;
use core::num::NonZeroUsize;

/// Resolves a reference against a base URI from Section 5.3 of RFC 3986.
///
/// A reference that carries a scheme resolves to an unchanged copy of
/// itself, never merging with the base. The base must have a scheme;
/// its fragment, if any, is ignored.
pub(crate) fn resolve(base: Uri<&str>, r: Uri<&str>) -> Result<Uri<String>, ResolveError> {
    if r.meta.scheme_end.is_some() {
        return Ok(r.to_owned());
    }

    if base.meta.scheme_end.is_none() {
        return Err(ResolveError(ResolveErrorKind::NonAbsoluteBase));
    }

    let (t_authority, t_path, t_query);
    let mut buf = String::new();

    let t_scheme = base.scheme().unwrap();

    if r.authority().is_some() {
        t_authority = r.authority();
        remove_dot_segments(&mut buf, r.path().as_str());
        t_path = &buf[..];
        t_query = r.query();
    } else if r.path().is_empty() {
        t_authority = base.authority();
        t_path = base.path().as_str();
        t_query = if r.query().is_some() {
            r.query()
        } else {
            base.query()
        };
    } else {
        if r.path().is_absolute() {
            remove_dot_segments(&mut buf, r.path().as_str());
        } else {
            // Merge the reference path with the base path.
            let base_path = base.path().as_str();
            if base_path.is_empty() {
                if base.authority().is_some() {
                    buf.push('/');
                }
            } else if let Some(i) = base_path.rfind('/') {
                remove_dot_segments(&mut buf, &base_path[..=i]);
            }
            remove_dot_segments(&mut buf, r.path().as_str());
        }
        t_path = &buf[..];
        t_authority = base.authority();
        t_query = r.query();
    }
    let t_fragment = r.fragment();

    let mut val = String::new();
    let mut meta = Meta::default();

    val.push_str(t_scheme.as_str());
    meta.scheme_end = NonZeroUsize::new(val.len());
    val.push(':');

    if let Some(authority) = t_authority {
        val.push_str("//");

        let rel = authority.meta().host_bounds;
        let start = val.len();
        meta.auth_meta = Some(AuthMeta {
            host_bounds: (start + rel.0, start + rel.1),
        });
        val.push_str(authority.as_str());
    }

    meta.path_bounds.0 = val.len();
    // Close the loophole in the original algorithm.
    if t_authority.is_none() && t_path.starts_with("//") {
        val.push_str("/.");
    }
    val.push_str(t_path);
    meta.path_bounds.1 = val.len();

    if let Some(query) = t_query {
        val.push('?');
        val.push_str(query.as_str());
        meta.query_end = NonZeroUsize::new(val.len());
    }

    if let Some(fragment) = t_fragment {
        val.push('#');
        val.push_str(fragment.as_str());
    }

    Ok(Uri { val, meta })
}

/// Removes dot segments from Section 5.2.4 of RFC 3986, appending
/// the output to `buf`.
///
/// A ".." segment with nothing left to remove is absorbed.
fn remove_dot_segments(buf: &mut String, path: &str) {
    for seg in path.split_inclusive('/') {
        if seg == "." || seg == "./" {
            match buf.rfind('/') {
                Some(i) => buf.truncate(i + 1),
                None => buf.clear(),
            }
        } else if seg == ".." || seg == "../" {
            pop_segment(buf);
        } else {
            buf.push_str(seg);
        }
    }
}

/// Removes the last segment of `buf` along with its preceding slash,
/// if any. A lone root stays put.
fn pop_segment(buf: &mut String) {
    if buf.is_empty() || buf == "/" {
        return;
    }
    if buf.ends_with('/') {
        buf.pop();
    }
    match buf.rfind('/') {
        Some(i) => buf.truncate(i + 1),
        None => buf.clear(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn removed(path: &str) -> String {
        let mut buf = String::new();
        remove_dot_segments(&mut buf, path);
        buf
    }

    #[test]
    fn dot_segments() {
        // Examples from Section 5.2.4 of RFC 3986.
        assert_eq!(removed("/a/b/c/./../../g"), "/a/g");
        assert_eq!(removed("mid/content=5/../6"), "mid/6");

        // Over-root ".." segments are absorbed.
        assert_eq!(removed("/.."), "/");
        assert_eq!(removed("/../g"), "/g");
        assert_eq!(removed("a/.."), "");
        assert_eq!(removed(".."), "");
        assert_eq!(removed("."), "");
        assert_eq!(removed("/."), "/");
    }
}
