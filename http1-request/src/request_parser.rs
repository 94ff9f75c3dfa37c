use tracing::trace;

use crate::{
    body_framing::{BodyFraming, BodyFramingDetector},
    content_length_body_parser::ContentLengthBodyParser,
    head_parser::{ParseConfig, ParseError, ParseOutput},
    header_list::HeaderList,
    request::Request,
    request_line::RequestLine,
    CHUNKED,
};

//
//
//
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParserState {
    Init,
    Headers,
    Body,
    Done,
    Error,
}
impl Default for ParserState {
    fn default() -> Self {
        Self::Init
    }
}

//
//
//
/// Incremental parser for a single request.
///
/// Feed it the unconsumed bytes of the connection with [`consume`] and drop
/// the returned number of bytes from the front of your buffer. A parser is
/// never reset; build a new one for the next request.
///
/// [`consume`]: RequestParser::consume
#[derive(Debug, Default)]
pub struct RequestParser {
    config: ParseConfig,
    state: ParserState,
    request_line: Option<RequestLine>,
    headers: HeaderList,
    body: Vec<u8>,
    body_parser: ContentLengthBodyParser,
}

impl RequestParser {
    pub fn new() -> Self {
        Self::default()
    }
    pub fn with_config(config: ParseConfig) -> Self {
        Self {
            config,
            ..Default::default()
        }
    }

    pub fn state(&self) -> ParserState {
        self.state
    }
    pub fn is_done(&self) -> bool {
        self.state == ParserState::Done
    }
    pub fn is_terminal(&self) -> bool {
        matches!(self.state, ParserState::Done | ParserState::Error)
    }

    pub fn request_line(&self) -> Option<&RequestLine> {
        self.request_line.as_ref()
    }
    pub fn headers(&self) -> &HeaderList {
        &self.headers
    }
    pub fn body(&self) -> &[u8] {
        &self.body
    }

    /// Advances through as many states as `buf` allows.
    ///
    /// Returns the number of bytes taken from the front of `buf`, which is 0
    /// when more data is needed. Any error moves the parser into
    /// [`ParserState::Error`] and every later call fails with
    /// [`ParseError::InErrorState`].
    pub fn consume(&mut self, buf: &[u8]) -> Result<usize, ParseError> {
        if self.state == ParserState::Error {
            return Err(ParseError::InErrorState);
        }

        match self.consume0(buf) {
            Ok(n) => Ok(n),
            Err(err) => {
                trace!(state = ?self.state, %err, "request parse failed");
                self.state = ParserState::Error;
                Err(err)
            }
        }
    }

    fn consume0(&mut self, buf: &[u8]) -> Result<usize, ParseError> {
        let mut parsed_num_bytes = 0_usize;

        loop {
            let buf = &buf[parsed_num_bytes..];

            match self.state {
                ParserState::Init => match RequestLine::parse(buf, &self.config)? {
                    Some((request_line, n)) => {
                        parsed_num_bytes += n;
                        self.request_line = Some(request_line);

                        self.transition(ParserState::Headers);
                    }
                    None => break,
                },
                ParserState::Headers => match self.headers.parse(buf, &self.config)? {
                    ParseOutput::Completed(n) => {
                        parsed_num_bytes += n;

                        let next_state = self.begin_body()?;
                        self.transition(next_state);
                    }
                    ParseOutput::Partial(n) => {
                        parsed_num_bytes += n;
                        break;
                    }
                },
                ParserState::Body => {
                    if buf.is_empty() {
                        break;
                    }
                    match self.body_parser.parse(buf, &mut self.body) {
                        ParseOutput::Completed(n) => {
                            parsed_num_bytes += n;

                            self.transition(ParserState::Done);
                        }
                        ParseOutput::Partial(n) => {
                            parsed_num_bytes += n;
                            break;
                        }
                    }
                }
                ParserState::Done => break,
                ParserState::Error => return Err(ParseError::InErrorState),
            }
        }

        Ok(parsed_num_bytes)
    }

    fn begin_body(&mut self) -> Result<ParserState, ParseError> {
        match self.headers.detect() {
            BodyFraming::Chunked => Err(ParseError::UnsupportedTransferEncoding(
                CHUNKED.to_owned(),
            )),
            BodyFraming::ContentLength(n) if n > 0 => {
                let limit = self.config.get_body_max_len();
                if n > limit {
                    return Err(ParseError::BodyTooLarge { size: n, limit });
                }

                self.body = Vec::with_capacity(n);
                self.body_parser.set_length(n);

                Ok(ParserState::Body)
            }
            BodyFraming::ContentLength(_) | BodyFraming::Neither => Ok(ParserState::Done),
        }
    }

    fn transition(&mut self, state: ParserState) {
        trace!(from = ?self.state, to = ?state, "request parser state");
        self.state = state;
    }

    /// Takes the parsed request once the parser is [`ParserState::Done`].
    pub fn finish(self) -> Result<Request, ParseError> {
        match (self.state, self.request_line) {
            (ParserState::Done, Some(request_line)) => Ok(Request {
                request_line,
                headers: self.headers,
                body: self.body,
            }),
            (ParserState::Error, _) => Err(ParseError::InErrorState),
            (state, _) => Err(ParseError::Incomplete(state)),
        }
    }
}
