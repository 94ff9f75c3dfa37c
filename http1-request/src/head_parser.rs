use std::{cmp, io};

use thiserror::Error;

use crate::{request_parser::ParserState, CR, CRLF};

//
//
//
const BUF_CAPACITY: usize = 1024;
const BUF_MAX_CAPACITY: usize = 8192;
const LINE_MAX_LEN: usize = 4096;
const HEADERS_MAX_COUNT: usize = 100;
const BODY_MAX_LEN: usize = 10 * 1024 * 1024;

//
//
//
#[derive(Debug, Clone)]
pub struct ParseConfig {
    buf_capacity: usize,
    buf_max_capacity: usize,
    line_max_len: usize,
    headers_max_count: usize,
    body_max_len: usize,
}
impl Default for ParseConfig {
    fn default() -> Self {
        ParseConfig {
            buf_capacity: BUF_CAPACITY,
            buf_max_capacity: BUF_MAX_CAPACITY,
            line_max_len: LINE_MAX_LEN,
            headers_max_count: HEADERS_MAX_COUNT,
            body_max_len: BODY_MAX_LEN,
        }
    }
}
impl ParseConfig {
    pub fn new() -> Self {
        Default::default()
    }

    // reader
    pub fn set_buf_capacity(&mut self, value: usize) -> &mut Self {
        self.buf_capacity = cmp::max(value, 1);
        if self.buf_max_capacity < self.buf_capacity {
            self.buf_max_capacity = self.buf_capacity;
        }
        self
    }
    pub fn get_buf_capacity(&self) -> usize {
        self.buf_capacity
    }
    pub fn set_buf_max_capacity(&mut self, value: usize) -> &mut Self {
        self.buf_max_capacity = cmp::max(value, self.buf_capacity);
        self
    }
    pub fn get_buf_max_capacity(&self) -> usize {
        self.buf_max_capacity
    }

    // head
    pub fn set_line_max_len(&mut self, value: usize) -> &mut Self {
        self.line_max_len = value;
        self
    }
    pub fn get_line_max_len(&self) -> usize {
        self.line_max_len
    }
    pub fn set_headers_max_count(&mut self, value: usize) -> &mut Self {
        self.headers_max_count = value;
        self
    }
    pub fn get_headers_max_count(&self) -> usize {
        self.headers_max_count
    }

    // body
    pub fn set_body_max_len(&mut self, value: usize) -> &mut Self {
        self.body_max_len = value;
        self
    }
    pub fn get_body_max_len(&self) -> usize {
        self.body_max_len
    }
}

//
//
//
#[derive(Debug, PartialEq, Eq)]
pub enum ParseOutput {
    Completed(usize),
    Partial(usize),
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ParseError {
    #[error("malformed request-line")]
    MalformedRequestLine,
    #[error("malformed header-line")]
    MalformedHeaderLine,
    #[error("transfer-encoding {0:?} not implemented")]
    UnsupportedTransferEncoding(String),
    #[error("request in error state")]
    InErrorState,
    #[error("line too long: {size} > {limit}")]
    LineTooLong { size: usize, limit: usize },
    #[error("too many headers: more than {limit}")]
    TooManyHeaders { limit: usize },
    #[error("body too large: {size} > {limit}")]
    BodyTooLarge { size: usize, limit: usize },
    #[error("request incomplete, parser in {0:?} state")]
    Incomplete(ParserState),
}
impl From<ParseError> for io::Error {
    fn from(err: ParseError) -> io::Error {
        io::Error::new(io::ErrorKind::InvalidInput, err.to_string())
    }
}

/// Finds the first CRLF-terminated line at the start of `buf`.
///
/// Returns the line without its terminator and the number of bytes the line
/// occupies including the CRLF, or `None` when the CRLF has not arrived yet.
pub(crate) fn parse_line<'a>(
    buf: &'a [u8],
    config: &ParseConfig,
) -> Result<Option<(&'a [u8], usize)>, ParseError> {
    let limit = config.get_line_max_len();

    match buf.windows(CRLF.len()).position(|w| w == CRLF) {
        Some(i) => {
            if i > limit {
                return Err(ParseError::LineTooLong { size: i, limit });
            }
            Ok(Some((&buf[..i], i + CRLF.len())))
        }
        None => {
            // a trailing CR may be the first half of the terminator
            let size = if buf.ends_with(&[CR]) {
                buf.len() - 1
            } else {
                buf.len()
            };
            if size > limit {
                return Err(ParseError::LineTooLong { size, limit });
            }
            Ok(None)
        }
    }
}
