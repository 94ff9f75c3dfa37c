use std::{slice, str};

use http::header::HeaderName;

use crate::{
    head_parser::{parse_line, ParseConfig, ParseError, ParseOutput},
    COLON,
};

//
//
//
/// Header fields in arrival order.
///
/// Names keep the casing they were received with, lookups ignore ASCII case
/// and repeated names are kept as separate entries.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HeaderList {
    inner: Vec<(String, String)>,
}

impl HeaderList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn append(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.inner.push((name.into(), value.into()))
    }

    /// First value stored under `name`.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.inner
            .iter()
            .find(|(n, _)| n.eq_ignore_ascii_case(name))
            .map(|(_, v)| v.as_str())
    }

    pub fn get_all<'a>(&'a self, name: &'a str) -> impl Iterator<Item = &'a str> + 'a {
        self.inner
            .iter()
            .filter(move |(n, _)| n.eq_ignore_ascii_case(name))
            .map(|(_, v)| v.as_str())
    }

    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    pub fn len(&self) -> usize {
        self.inner.len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }

    pub fn iter(&self) -> Iter<'_> {
        Iter {
            inner: self.inner.iter(),
        }
    }

    /// Consumes as many complete header lines from `buf` as are available.
    ///
    /// Returns `Completed` once the empty terminator line has been consumed,
    /// otherwise `Partial` with the bytes of the complete lines taken so far.
    pub fn parse(
        &mut self,
        buf: &[u8],
        config: &ParseConfig,
    ) -> Result<ParseOutput, ParseError> {
        let mut parsed_num_bytes = 0_usize;

        loop {
            let (line, n) = match parse_line(&buf[parsed_num_bytes..], config)? {
                Some(x) => x,
                None => return Ok(ParseOutput::Partial(parsed_num_bytes)),
            };

            if line.is_empty() {
                parsed_num_bytes += n;

                return Ok(ParseOutput::Completed(parsed_num_bytes));
            }

            if self.len() >= config.get_headers_max_count() {
                return Err(ParseError::TooManyHeaders {
                    limit: config.get_headers_max_count(),
                });
            }

            let (name, value) = parse_header_line(line)?;
            self.append(name, value);
            parsed_num_bytes += n;
        }
    }
}

fn parse_header_line(line: &[u8]) -> Result<(String, String), ParseError> {
    let colon_index = line
        .iter()
        .position(|x| x == &COLON)
        .ok_or(ParseError::MalformedHeaderLine)?;

    // token chars only, which also rules out an empty name and any whitespace
    let name = &line[..colon_index];
    HeaderName::from_bytes(name).map_err(|_| ParseError::MalformedHeaderLine)?;

    let value = line[colon_index + 1..].trim_ascii();

    let name = str::from_utf8(name).map_err(|_| ParseError::MalformedHeaderLine)?;
    let value = str::from_utf8(value).map_err(|_| ParseError::MalformedHeaderLine)?;

    Ok((name.to_owned(), value.to_owned()))
}

//
//
//
pub struct Iter<'a> {
    inner: slice::Iter<'a, (String, String)>,
}

impl<'a> Iterator for Iter<'a> {
    type Item = (&'a str, &'a str);

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(|(n, v)| (n.as_str(), v.as_str()))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<'a> IntoIterator for &'a HeaderList {
    type Item = (&'a str, &'a str);
    type IntoIter = Iter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<N, V> FromIterator<(N, V)> for HeaderList
where
    N: Into<String>,
    V: Into<String>,
{
    fn from_iter<T: IntoIterator<Item = (N, V)>>(iter: T) -> Self {
        let mut list = Self::new();
        for (name, value) in iter {
            list.append(name, value);
        }
        list
    }
}
