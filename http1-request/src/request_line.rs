use std::str;

use crate::{
    head_parser::{parse_line, ParseConfig, ParseError},
    HTTP_NAME, HTTP_VERSION_11, SLASH, SP,
};

//
//
//
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequestLine {
    method: String,
    target: String,
    http_version: String,
}

impl RequestLine {
    pub fn method(&self) -> &str {
        &self.method
    }
    pub fn target(&self) -> &str {
        &self.target
    }
    /// Version number without the `HTTP/` prefix, always `1.1`.
    pub fn http_version(&self) -> &str {
        &self.http_version
    }

    /// Parses `METHOD SP TARGET SP HTTP/1.1 CRLF` from the start of `buf`.
    ///
    /// `Ok(None)` means the CRLF has not arrived yet and nothing was consumed.
    pub fn parse(
        buf: &[u8],
        config: &ParseConfig,
    ) -> Result<Option<(Self, usize)>, ParseError> {
        let (line, n) = match parse_line(buf, config)? {
            Some(x) => x,
            None => return Ok(None),
        };

        let mut parts = line.split(|x| x == &SP);
        let (method, target, version) = match (parts.next(), parts.next(), parts.next()) {
            (Some(method), Some(target), Some(version)) if parts.next().is_none() => {
                (method, target, version)
            }
            _ => return Err(ParseError::MalformedRequestLine),
        };

        let mut version_parts = version.split(|x| x == &SLASH);
        match (
            version_parts.next(),
            version_parts.next(),
            version_parts.next(),
        ) {
            (Some(HTTP_NAME), Some(number), None) if number == HTTP_VERSION_11.as_bytes() => {}
            _ => return Err(ParseError::MalformedRequestLine),
        }

        let request_line = RequestLine {
            method: parse_token(method)?,
            target: parse_token(target)?,
            http_version: HTTP_VERSION_11.to_owned(),
        };

        Ok(Some((request_line, n)))
    }
}

fn parse_token(bytes: &[u8]) -> Result<String, ParseError> {
    if bytes.is_empty() || bytes.iter().any(u8::is_ascii_whitespace) {
        return Err(ParseError::MalformedRequestLine);
    }
    str::from_utf8(bytes)
        .map(ToOwned::to_owned)
        .map_err(|_| ParseError::MalformedRequestLine)
}
