use strict_uri::Uri;

#[track_caller]
fn pass(base: &str, reference: &str, target: &str) {
    let base = Uri::parse(base).unwrap();
    let r = Uri::parse_reference(reference).unwrap();
    assert_eq!(r.resolve_against(&base).unwrap(), target);
}

const BASE: &str = "http://a/b/c/d;p?q";

#[test]
fn rfc_normal_examples() {
    // Examples from Section 5.4.1 of RFC 3986.
    pass(BASE, "g:h", "g:h");
    pass(BASE, "g", "http://a/b/c/g");
    pass(BASE, "./g", "http://a/b/c/g");
    pass(BASE, "g/", "http://a/b/c/g/");
    pass(BASE, "/g", "http://a/g");
    pass(BASE, "?y", "http://a/b/c/d;p?y");
    pass(BASE, "g?y", "http://a/b/c/g?y");
    pass(BASE, "#s", "http://a/b/c/d;p?q#s");
    pass(BASE, "g#s", "http://a/b/c/g#s");
    pass(BASE, "g?y#s", "http://a/b/c/g?y#s");
    pass(BASE, ";x", "http://a/b/c/;x");
    pass(BASE, "g;x", "http://a/b/c/g;x");
    pass(BASE, "g;x?y#s", "http://a/b/c/g;x?y#s");
    pass(BASE, "", "http://a/b/c/d;p?q");
    pass(BASE, ".", "http://a/b/c/");
    pass(BASE, "./", "http://a/b/c/");
    pass(BASE, "..", "http://a/b/");
    pass(BASE, "../", "http://a/b/");
    pass(BASE, "../g", "http://a/b/g");
    pass(BASE, "../..", "http://a/");
    pass(BASE, "../../", "http://a/");
    pass(BASE, "../../g", "http://a/g");
}

#[test]
fn rfc_abnormal_examples() {
    // Examples from Section 5.4.2 of RFC 3986. Excess ".." segments
    // are absorbed at the root.
    pass(BASE, "../../../g", "http://a/g");
    pass(BASE, "../../../../g", "http://a/g");
    pass(BASE, "/./g", "http://a/g");
    pass(BASE, "/../g", "http://a/g");
    pass(BASE, "g.", "http://a/b/c/g.");
    pass(BASE, ".g", "http://a/b/c/.g");
    pass(BASE, "g..", "http://a/b/c/g..");
    pass(BASE, "..g", "http://a/b/c/..g");
    pass(BASE, "./../g", "http://a/b/g");
    pass(BASE, "./g/.", "http://a/b/c/g/");
    pass(BASE, "g/./h", "http://a/b/c/g/h");
    pass(BASE, "g/../h", "http://a/b/c/h");
    pass(BASE, "g;x=1/./y", "http://a/b/c/g;x=1/y");
    pass(BASE, "g;x=1/../y", "http://a/b/c/y");
    pass(BASE, "g?y/./x", "http://a/b/c/g?y/./x");
    pass(BASE, "g?y/../x", "http://a/b/c/g?y/../x");
    pass(BASE, "g#s/./x", "http://a/b/c/g#s/./x");
    pass(BASE, "g#s/../x", "http://a/b/c/g#s/../x");
    // For strict parsers, "http:g" resolves to itself.
    pass(BASE, "http:g", "http:g");
}

#[test]
fn reference_with_scheme_is_kept() {
    // A reference that carries a scheme becomes the target unchanged.
    // Its dot segments, query and fragment are all kept.
    pass(BASE, "http:/a/../b", "http:/a/../b");
    pass(BASE, "ftp://x/./y?q#f", "ftp://x/./y?q#f");
}

#[test]
fn authority_in_reference() {
    pass(BASE, "//h/x/../y", "http://h/y");
    pass(BASE, "//user@h:8080/x", "http://user@h:8080/x");

    // The components of the target stay addressable.
    let base = Uri::parse(BASE).unwrap();
    let r = Uri::parse_reference("//user@h:8080/x?q#f").unwrap();
    let t = r.resolve_against(&base).unwrap();
    assert_eq!(t.scheme().unwrap().as_str(), "http");
    let a = t.authority().unwrap();
    assert_eq!(a.userinfo().unwrap(), "user");
    assert_eq!(a.host(), "h");
    assert_eq!(a.port_to_u16(), Some(8080));
    assert_eq!(t.path(), "/x");
    assert_eq!(t.query().unwrap(), "q");
    assert_eq!(t.fragment().unwrap(), "f");
}

#[test]
fn opaque_base() {
    pass("urn:a:b", "", "urn:a:b");
    pass("urn:a:b", "?q", "urn:a:b?q");
    pass("urn:a:b", "#f", "urn:a:b#f");
    pass("mailto:john@example.com", "#f", "mailto:john@example.com#f");

    // Merging against a rootless base path keeps everything up to
    // the last slash, if any.
    pass("foo:a/b", "c", "foo:a/c");
    pass("foo:a", "b", "foo:b");

    // An empty base path with an authority merges as "/".
    pass("http://h", "g", "http://h/g");

    // The "/." prefix closes the loophole of a relative path
    // resolving into an authority.
    pass("foo:/", ".//@x", "foo:/.//@x");
}

#[test]
fn base_must_be_absolute() {
    // A fragment on the base is ignored, never inherited.
    let base = Uri::parse("http://a/b/c#frag").unwrap();
    let r = Uri::parse_reference("x").unwrap();
    assert_eq!(r.resolve_against(&base).unwrap(), "http://a/b/x");

    let base = Uri::parse_reference("//a/b").unwrap();
    let r = Uri::parse_reference("x").unwrap();
    assert!(r.resolve_against(&base).is_err());

    // A scheme-carrying reference resolves to itself before the
    // base is even looked at.
    let r = Uri::parse_reference("g:h").unwrap();
    assert!(r.resolve_against(&base).is_ok());
}
