use strict_uri::{
    encoding::{encoder::Path, EStr},
    Uri,
};

#[track_caller]
fn normalized(s: &str) -> Uri<String> {
    Uri::parse_reference(s).unwrap().normalize().unwrap()
}

#[test]
fn rfc_example() {
    // Example from Section 6.2.2 of RFC 3986.
    assert_eq!(normalized("example://a/b/c/%7Bfoo%7D"), "example://a/b/c/%7Bfoo%7D");
    assert_eq!(normalized("eXAMPLE://a/./b/../b/%63/%7bfoo%7d"), "example://a/b/c/%7Bfoo%7D");
}

#[test]
fn case() {
    // Only the scheme and the host are lowercased.
    assert_eq!(normalized("HTTP://User@Example.COM/Foo?Bar#Baz"), "http://User@example.com/Foo?Bar#Baz");

    // A bracketed host is lowercased verbatim.
    assert_eq!(normalized("http://[2001:DB8::1]/"), "http://[2001:db8::1]/");
}

#[test]
fn percent_encoding() {
    // Octets that encode unreserved characters are decoded and the
    // hexadecimal digits of the rest are uppercased.
    assert_eq!(normalized("http://ex%61mple.com/%7e%41?%2f#%2F"), "http://example.com/~A?%2F#%2F");

    // Decoding in the host also lowercases.
    assert_eq!(normalized("http://EX%41MPLE.com/"), "http://example.com/");
}

#[test]
fn dot_segments() {
    assert_eq!(normalized("http://h/a/./b/../c"), "http://h/a/c");
    assert_eq!(normalized("foo:/a/../b"), "foo:/b");
    assert_eq!(normalized("a/./b"), "a/b");
    assert_eq!(normalized("/a/../b"), "/b");

    // A ".." segment that would climb above the root is an error,
    // unlike the absorbing behavior of resolution.
    assert!(Uri::parse("http://h/../x").unwrap().normalize().is_err());
    assert!(Uri::parse("foo:a/../b").unwrap().normalize().is_err());
    assert!(Uri::parse_reference("../g").unwrap().normalize().is_err());
}

#[test]
fn empty_port_is_kept() {
    // Removing the port would take scheme-specific knowledge.
    assert_eq!(normalized("http://example.com:/"), "http://example.com:/");
    assert_eq!(normalized("http://example.com:80/"), "http://example.com:80/");
}

#[test]
fn adjacent_empty_segments() {
    assert_eq!(normalized("http://h//x"), "http://h/x");
    assert_eq!(normalized("foo:/.//b"), "foo:/b");

    // Only adjacent empty segments collapse.
    assert_eq!(normalized("http://h/a//b"), "http://h/a//b");

    // An empty path becomes the root.
    assert_eq!(normalized("http://example.com"), "http://example.com/");
}

#[test]
fn idempotent() {
    for s in [
        "eXAMPLE://a/./b/../b/%63/%7bfoo%7d",
        "HTTP://User@Example.COM:/Foo?Bar#Baz",
        "foo:a/./%62",
        "//h//x/../y",
    ] {
        let once = Uri::parse_reference(s).unwrap().normalize().unwrap();
        let twice = once.normalize().unwrap();
        assert_eq!(once.as_str(), twice.as_str());
    }
}

#[test]
fn components_after_normalization() {
    let u = normalized("HTTP://User@Example.COM:8080/a/../b?Q#F");
    assert_eq!(u.scheme().unwrap().as_str(), "http");
    let a = u.authority().unwrap();
    assert_eq!(a.userinfo().unwrap(), "User");
    assert_eq!(a.host(), "example.com");
    assert_eq!(a.port_to_u16(), Some(8080));
    assert_eq!(u.path(), "/b");
    assert_eq!(u.query().unwrap(), "Q");
    assert_eq!(u.fragment().unwrap(), "F");
}

#[test]
fn strict_segment_normalization() {
    let path = EStr::<Path>::new_or_panic("/a/./b/../c");
    assert_eq!(path.normalize_segments().unwrap(), "/a/c");

    // Adjacent empty segments collapse into one.
    assert_eq!(EStr::<Path>::new_or_panic("//a").normalize_segments().unwrap(), "/a");
    assert_eq!(EStr::<Path>::new_or_panic("a//b").normalize_segments().unwrap(), "a//b");
    assert_eq!(EStr::<Path>::new_or_panic("a//").normalize_segments().unwrap(), "a/");

    // An empty path normalizes to the root.
    assert_eq!(EStr::<Path>::new_or_panic("").normalize_segments().unwrap(), "/");

    // ".." may resolve down to the root but not above it.
    assert_eq!(EStr::<Path>::new_or_panic("/a/b/../..").normalize_segments().unwrap(), "/");
    assert!(EStr::<Path>::new_or_panic("/..").normalize_segments().is_err());
    assert!(EStr::<Path>::new_or_panic("a/..").normalize_segments().is_err());
    assert!(EStr::<Path>::new_or_panic("..").normalize_segments().is_err());
    assert!(EStr::<Path>::new_or_panic("/a/../..").normalize_segments().is_err());
}
