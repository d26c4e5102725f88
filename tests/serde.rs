use serde_test::{assert_de_tokens, assert_de_tokens_error, assert_tokens, Token};
use strict_uri::Uri;

#[test]
fn ser_de_owned() {
    let uri: Uri<String> = Uri::parse("foo://user@example.com/path?q#f")
        .unwrap()
        .to_owned();
    assert_tokens(&uri, &[Token::Str("foo://user@example.com/path?q#f")]);

    // A relative reference deserializes as well.
    let uri: Uri<String> = Uri::parse_reference("/path").unwrap().to_owned();
    assert_de_tokens(&uri, &[Token::Str("/path")]);
}

#[test]
fn ser_de_borrowed() {
    let uri = Uri::parse("foo:bar").unwrap();
    assert_tokens(&uri, &[Token::BorrowedStr("foo:bar")]);
}

#[test]
fn de_invalid() {
    assert_de_tokens_error::<Uri<String>>(
        &[Token::Str("foo bar")],
        "unexpected character at index 3",
    );
    assert_de_tokens_error::<Uri<String>>(
        &[Token::Str("mailto:jo%hn")],
        "invalid percent-encoded octet at index 9",
    );
}
