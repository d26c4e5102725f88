use crate::{error::ParseError, parser};
use alloc::string::String;
use core::num::NonZeroUsize;

/// Offsets of the components within a URI string.
///
/// All offsets index into the (possibly trimmed) input string.
#[derive(Clone, Copy, Debug, Default)]
pub struct Meta {
    // The index of the trailing colon, if a scheme is present.
    pub scheme_end: Option<NonZeroUsize>,
    pub auth_meta: Option<AuthMeta>,
    pub path_bounds: (usize, usize),
    // One past the last byte of the query, if present.
    pub query_end: Option<NonZeroUsize>,
}

impl Meta {
    pub fn query_or_path_end(&self) -> usize {
        match self.query_end {
            Some(i) => i.get(),
            None => self.path_bounds.1,
        }
    }
}

#[derive(Clone, Copy, Debug)]
pub struct AuthMeta {
    pub host_bounds: (usize, usize),
}

/// Options that control how an input is parsed.
#[derive(Clone, Copy, Debug)]
pub struct Criteria {
    pub require_scheme: bool,
}

// `str::trim_ascii` is not stable until 1.80.
fn trim(s: &str) -> &str {
    s.trim_matches(|c: char| matches!(c, ' ' | '\t' | '\r' | '\n'))
}

pub trait Parse: Sized {
    type Val;
    type Err;

    fn parse(self, criteria: Criteria) -> Result<(Self::Val, Meta), Self::Err>;
}

impl<'a> Parse for &'a str {
    type Val = &'a str;
    type Err = ParseError;

    fn parse(self, criteria: Criteria) -> Result<(Self::Val, Meta), Self::Err> {
        let trimmed = trim(self);
        let meta = parser::parse(trimmed.as_bytes(), criteria)?;
        Ok((trimmed, meta))
    }
}

impl Parse for String {
    type Val = String;
    type Err = ParseError<String>;

    fn parse(self, criteria: Criteria) -> Result<(Self::Val, Meta), Self::Err> {
        let trimmed = trim(&self);
        match parser::parse(trimmed.as_bytes(), criteria) {
            Ok(meta) => {
                let val = if trimmed.len() == self.len() {
                    self
                } else {
                    String::from(trimmed)
                };
                Ok((val, meta))
            }
            Err(e) => Err(e.with_input(String::from(trimmed))),
        }
    }
}
