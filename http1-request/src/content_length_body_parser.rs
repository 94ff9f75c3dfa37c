use std::cmp;

use crate::head_parser::ParseOutput;

//
//
//
/// Copies bytes into a body until `length` bytes have been taken.
#[derive(Debug, Default)]
pub struct ContentLengthBodyParser {
    length: usize,
}
impl ContentLengthBodyParser {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_length(length: usize) -> Self {
        Self { length }
    }

    pub fn set_length(&mut self, length: usize) {
        self.length = length
    }
    /// Bytes still missing from the body.
    pub fn get_length(&self) -> usize {
        self.length
    }

    pub fn parse(&mut self, buf: &[u8], body_buf: &mut Vec<u8>) -> ParseOutput {
        let n = cmp::min(self.length, buf.len());

        body_buf.extend_from_slice(&buf[..n]);
        self.length -= n;

        if self.length == 0 {
            ParseOutput::Completed(n)
        } else {
            ParseOutput::Partial(n)
        }
    }
}
