use std::{
    cmp,
    io::{self, Read},
};

use thiserror::Error;
use tracing::{debug, trace, warn};

use crate::{
    head_parser::{ParseConfig, ParseError},
    request::Request,
    request_parser::RequestParser,
};

//
//
//
#[derive(Debug, Error)]
pub enum ReadError {
    #[error("read failed: {0}")]
    Io(#[from] io::Error),
    #[error("unexpected eof with {buffered} bytes buffered")]
    UnexpectedEof { buffered: usize },
    #[error("buffer overflow: request does not fit in {limit} bytes")]
    BufferOverflow { limit: usize },
    #[error(transparent)]
    Parse(#[from] ParseError),
}
impl From<ReadError> for io::Error {
    fn from(err: ReadError) -> io::Error {
        match err {
            ReadError::Io(err) => err,
            ReadError::UnexpectedEof { .. } => {
                io::Error::new(io::ErrorKind::UnexpectedEof, err.to_string())
            }
            ReadError::BufferOverflow { .. } => {
                io::Error::new(io::ErrorKind::InvalidInput, err.to_string())
            }
            ReadError::Parse(err) => err.into(),
        }
    }
}

//
//
//
/// Reads requests from a blocking byte stream.
///
/// Bytes read past the end of one request stay buffered for the next
/// [`read_request`](RequestReader::read_request) call.
#[derive(Debug)]
pub struct RequestReader<R> {
    reader: R,
    config: ParseConfig,
    buf: Vec<u8>,
    offset_read: usize,
}

impl<R> RequestReader<R>
where
    R: Read,
{
    pub fn new(reader: R) -> Self {
        Self::with_config(reader, Default::default())
    }
    pub fn with_config(reader: R, config: ParseConfig) -> Self {
        Self {
            reader,
            buf: vec![0u8; config.get_buf_capacity()],
            config,
            offset_read: 0,
        }
    }

    pub fn get_ref(&self) -> &R {
        &self.reader
    }
    pub fn get_mut(&mut self) -> &mut R {
        &mut self.reader
    }
    pub fn into_inner(self) -> R {
        self.reader
    }

    pub fn has_unparsed_bytes(&self) -> bool {
        self.offset_read > 0
    }
    pub fn buf_capacity(&self) -> usize {
        self.buf.len()
    }

    pub fn read_request(&mut self) -> Result<Request, ReadError> {
        let mut parser = RequestParser::with_config(self.config.clone());

        loop {
            let n_parsed = parser
                .consume(&self.buf[..self.offset_read])
                .map_err(|err| {
                    warn!(%err, "malformed request");
                    err
                })?;
            self.rotate_offset(n_parsed);

            if parser.is_done() {
                break;
            }

            self.read()?;
        }

        let request = parser.finish()?;
        debug!(
            method = request.method(),
            target = request.target(),
            headers = request.headers().len(),
            body = request.body().len(),
            "request parsed"
        );

        Ok(request)
    }

    fn read(&mut self) -> Result<(), ReadError> {
        if self.offset_read >= self.buf.len() {
            self.grow()?;
        }

        loop {
            match self.reader.read(&mut self.buf[self.offset_read..]) {
                Ok(0) => {
                    return Err(ReadError::UnexpectedEof {
                        buffered: self.offset_read,
                    })
                }
                Ok(n) => {
                    trace!(n, "read");
                    self.offset_read += n;
                    return Ok(());
                }
                Err(err) if err.kind() == io::ErrorKind::Interrupted => continue,
                Err(err) => return Err(err.into()),
            }
        }
    }

    fn grow(&mut self) -> Result<(), ReadError> {
        let limit = self.config.get_buf_max_capacity();
        if self.buf.len() >= limit {
            warn!(limit, "request buffer full");
            return Err(ReadError::BufferOverflow { limit });
        }

        let capacity = cmp::min(self.buf.len() * 2, limit);
        debug!(from = self.buf.len(), to = capacity, "grow request buffer");
        self.buf.resize(capacity, 0);
        Ok(())
    }

    fn rotate_offset(&mut self, n: usize) {
        self.buf.copy_within(n..self.offset_read, 0);
        self.offset_read -= n;
    }
}

/// Reads exactly one request from `reader`.
pub fn request_from_reader<R: Read>(reader: R) -> Result<Request, ReadError> {
    RequestReader::new(reader).read_request()
}
