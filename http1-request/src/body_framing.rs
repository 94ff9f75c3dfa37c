use http::header::{CONTENT_LENGTH, TRANSFER_ENCODING};

use crate::{header_list::HeaderList, CHUNKED};

//
//
//
// ref https://github.com/apple/swift-nio/blob/2.20.2/Sources/NIOHTTP1/HTTPEncoder.swift#L89
#[derive(Debug, PartialEq, Eq, Clone)]
pub enum BodyFraming {
    ContentLength(usize),
    Chunked,
    Neither,
}

impl BodyFraming {
    pub fn has_body(&self) -> bool {
        match self {
            Self::ContentLength(n) => *n > 0,
            Self::Chunked => true,
            Self::Neither => false,
        }
    }
}

pub trait BodyFramingDetector {
    fn detect(&self) -> BodyFraming;
}
impl BodyFramingDetector for HeaderList {
    fn detect(&self) -> BodyFraming {
        let is_chunked = self.get_all(TRANSFER_ENCODING.as_str()).any(|value| {
            value
                .split(',')
                .any(|coding| coding.trim().eq_ignore_ascii_case(CHUNKED))
        });
        if is_chunked {
            return BodyFraming::Chunked;
        }

        // an unparsable value means no body
        match self
            .get(CONTENT_LENGTH.as_str())
            .and_then(|value| value.parse::<usize>().ok())
        {
            Some(n) => BodyFraming::ContentLength(n),
            None => BodyFraming::Neither,
        }
    }
}
