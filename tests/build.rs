use strict_uri::Uri;

#[test]
fn build_full() {
    let uri = Uri::builder()
        .scheme("http")
        .user_info("user")
        .host("www.EXAMPLE.com")
        .port(8080)
        .path("/over/there")
        .append_query_key_value_pair("name", "ferret")
        .fragment("nose")
        .build()
        .unwrap();
    assert_eq!(
        uri.as_str(),
        "http://user@www.example.com:8080/over/there?name=ferret#nose"
    );

    // The result is parsed back, so components stay addressable.
    assert_eq!(uri.scheme().unwrap().as_str(), "http");
    let auth = uri.authority().unwrap();
    assert_eq!(auth.userinfo().unwrap(), "user");
    assert_eq!(auth.host(), "www.example.com");
    assert_eq!(auth.port_to_u16(), Some(8080));
    assert_eq!(uri.path(), "/over/there");
    assert_eq!(uri.query().unwrap(), "name=ferret");
    assert_eq!(uri.fragment().unwrap(), "nose");
}

#[test]
fn build_minimal() {
    assert_eq!(Uri::builder().build().unwrap().as_str(), "");
    assert_eq!(Uri::builder().path("foo").build().unwrap().as_str(), "foo");
    assert_eq!(
        Uri::builder().scheme("foo").build().unwrap().as_str(),
        "foo:"
    );
    assert_eq!(
        Uri::builder().host("example.com").build().unwrap().as_str(),
        "//example.com"
    );
}

#[test]
fn setters_encode() {
    let uri = Uri::builder()
        .scheme("HTTP")
        .user_info("user name")
        .host("ex ample.com")
        .path("/a b")
        .append_query("k=v v")
        .fragment("f f")
        .build()
        .unwrap();
    assert_eq!(
        uri.as_str(),
        "http://user%20name@ex%20ample.com/a%20b?k=v%20v#f%20f"
    );
}

#[test]
fn query_pairs() {
    let uri = Uri::builder()
        .scheme("foo")
        .append_query_key_value_pair("a", "1")
        .append_query_key_value_pair("b", "2")
        .build()
        .unwrap();
    assert_eq!(uri.as_str(), "foo:?a=1&b=2");

    // '&', '=' and '+' within a key or value are escaped, while a
    // literal '&' passed to `append_query` separates as is.
    let uri = Uri::builder()
        .scheme("foo")
        .append_query("a=1&b=2")
        .append_query_key_value_pair("k&=+", "v")
        .build()
        .unwrap();
    assert_eq!(uri.as_str(), "foo:?a=1&b=2&k%26%3D%2B=v");
}

#[test]
fn bracketed_host() {
    let uri = Uri::builder()
        .scheme("http")
        .host("[2001:DB8::1]")
        .build()
        .unwrap();
    assert_eq!(uri.as_str(), "http://[2001:db8::1]");
}

#[test]
fn authority_distributes() {
    let uri = Uri::builder()
        .scheme("http")
        .authority("user@Example.COM:8080")
        .path("/")
        .build()
        .unwrap();
    assert_eq!(uri.as_str(), "http://user@example.com:8080/");

    // The port can then be replaced on its own.
    let uri = Uri::builder()
        .scheme("http")
        .authority("user@example.com:8080")
        .port(80)
        .build()
        .unwrap();
    assert_eq!(uri.as_str(), "http://user@example.com:80");

    // An authority that fails to parse surfaces at build time.
    assert!(Uri::builder()
        .scheme("http")
        .authority("user:pass@host")
        .build()
        .is_err());
}

#[test]
fn empty_port() {
    let uri = Uri::builder()
        .scheme("http")
        .host("example.com")
        .port("")
        .path("/")
        .build()
        .unwrap();
    assert_eq!(uri.as_str(), "http://example.com:/");
}

#[test]
fn structural_errors() {
    // With an authority, the path must be empty or absolute.
    assert!(Uri::builder().host("h").path("foo").build().is_err());

    // Without an authority, the path may not start with "//".
    assert!(Uri::builder().scheme("foo").path("//bar").build().is_err());

    // Without a scheme and an authority, the first path segment may
    // not contain a colon.
    assert!(Uri::builder().path("a:b").build().is_err());
    assert!(Uri::builder().path("a/b:c").build().is_ok());
    assert!(Uri::builder().scheme("foo").path("a:b").build().is_ok());

    // A bogus port makes the reparse fail.
    assert!(Uri::builder().host("h").port("x").build().is_err());
    assert!(Uri::builder().host("h").port(65536).build().is_err());
}

#[test]
fn userinfo_or_port_without_host() {
    assert!(Uri::builder().scheme("foo").port(80).build().is_err());
    assert!(Uri::builder().user_info("user").build().is_err());

    // Clearing the host alone leaves the userinfo and port dangling.
    let mut b = Uri::builder();
    b.scheme("http").authority("user@example.com:8080");
    assert!(b.clear_host().build().is_err());
    assert!(b.clear_user_info().clear_port().build().is_ok());
}

#[test]
fn clear_components() {
    let uri = Uri::builder()
        .scheme("http")
        .authority("user@example.com:8080")
        .path("/a")
        .append_query("q")
        .fragment("f")
        .clear_user_info()
        .clear_port()
        .clear_query()
        .clear_fragment()
        .build()
        .unwrap();
    assert_eq!(uri.as_str(), "http://example.com/a");

    let uri = Uri::builder()
        .scheme("http")
        .host("example.com")
        .path("/a")
        .clear_scheme()
        .clear_authority()
        .clear_path()
        .build()
        .unwrap();
    assert_eq!(uri.as_str(), "");
}

#[test]
fn dot_segments_are_kept() {
    let uri = Uri::builder()
        .scheme("http")
        .host("example.com")
        .path("/a/../b/./c")
        .build()
        .unwrap();
    assert_eq!(uri.as_str(), "http://example.com/a/../b/./c");
}

#[test]
fn to_builder_round_trip() {
    let uri = Uri::parse("HTTP://User@Example.COM:8080/a%2Fb?q=1#f").unwrap();
    let rebuilt = uri.to_builder().build().unwrap();
    // The scheme and the host come back lowercased, everything else
    // byte for byte.
    assert_eq!(rebuilt.as_str(), "http://User@example.com:8080/a%2Fb?q=1#f");
    assert_eq!(rebuilt, uri);

    let uri = Uri::parse_reference("//h:/p?q#f").unwrap();
    let rebuilt = uri.to_builder().build().unwrap();
    assert_eq!(rebuilt.as_str(), "//h:/p?q#f");

    // A modified copy.
    let uri = Uri::parse("http://example.com/a?q").unwrap();
    let rebuilt = uri.to_builder().port(8042).clear_query().build().unwrap();
    assert_eq!(rebuilt.as_str(), "http://example.com:8042/a");
}
