pub mod body_framing;
pub mod content_length_body_parser;
pub mod head_parser;
pub mod header_list;
pub mod reader;
pub mod request;
pub mod request_line;
pub mod request_parser;

pub use http;

pub use head_parser::{ParseConfig, ParseError, ParseOutput};
pub use header_list::HeaderList;
pub use reader::{request_from_reader, ReadError, RequestReader};
pub use request::Request;
pub use request_line::RequestLine;
pub use request_parser::{ParserState, RequestParser};

//
//
//
pub const SP: u8 = b' ';
pub const COLON: u8 = b':';
pub const SLASH: u8 = b'/';
pub const CR: u8 = b'\r';
pub const CRLF: &[u8] = b"\r\n";

pub const HTTP_NAME: &[u8] = b"HTTP";
pub const HTTP_VERSION_11: &str = "1.1";

pub const CHUNKED: &str = "chunked";
