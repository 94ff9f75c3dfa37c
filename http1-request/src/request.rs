use std::str;

use http::Version;

use crate::{header_list::HeaderList, request_line::RequestLine};

//
//
//
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Request {
    pub(crate) request_line: RequestLine,
    pub(crate) headers: HeaderList,
    pub(crate) body: Vec<u8>,
}

impl Request {
    pub fn request_line(&self) -> &RequestLine {
        &self.request_line
    }
    pub fn method(&self) -> &str {
        self.request_line.method()
    }
    pub fn target(&self) -> &str {
        self.request_line.target()
    }
    pub fn http_version(&self) -> &str {
        self.request_line.http_version()
    }

    pub fn headers(&self) -> &HeaderList {
        &self.headers
    }

    pub fn body(&self) -> &[u8] {
        &self.body
    }
    pub fn body_str(&self) -> Result<&str, str::Utf8Error> {
        str::from_utf8(&self.body)
    }

    pub fn into_parts(self) -> (RequestLine, HeaderList, Vec<u8>) {
        (self.request_line, self.headers, self.body)
    }
}

impl TryFrom<Request> for http::Request<Vec<u8>> {
    type Error = http::Error;

    fn try_from(request: Request) -> Result<Self, Self::Error> {
        let (request_line, headers, body) = request.into_parts();

        let mut builder = http::Request::builder()
            .method(request_line.method())
            .uri(request_line.target())
            .version(Version::HTTP_11);
        for (name, value) in &headers {
            builder = builder.header(name, value);
        }

        builder.body(body)
    }
}
