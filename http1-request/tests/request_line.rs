use std::error::Error;

use http1_request::{head_parser::ParseError, ParseConfig, RequestLine};

#[test]
fn simple() -> Result<(), Box<dyn Error>> {
    let (request_line, n) =
        RequestLine::parse(b"GET / HTTP/1.1\r\nHost: foo.com\r\n\r\n", &ParseConfig::default())?
            .ok_or("partial")?;
    assert_eq!(n, 16);

    assert_eq!(request_line.method(), "GET");
    assert_eq!(request_line.target(), "/");
    assert_eq!(request_line.http_version(), "1.1");

    Ok(())
}

#[test]
fn with_path() -> Result<(), Box<dyn Error>> {
    let (request_line, n) = RequestLine::parse(
        b"POST /coffee?roast=dark HTTP/1.1\r\n",
        &ParseConfig::default(),
    )?
    .ok_or("partial")?;
    assert_eq!(n, 34);

    assert_eq!(request_line.method(), "POST");
    assert_eq!(request_line.target(), "/coffee?roast=dark");

    Ok(())
}

#[test]
fn partial() -> Result<(), Box<dyn Error>> {
    let config = ParseConfig::default();

    assert_eq!(RequestLine::parse(b"", &config)?, None);
    assert_eq!(RequestLine::parse(b"GET / HTT", &config)?, None);
    assert_eq!(RequestLine::parse(b"GET / HTTP/1.1\r", &config)?, None);
    // garbage is only judged once the line is complete
    assert_eq!(RequestLine::parse(b"GET", &config)?, None);

    Ok(())
}

#[test]
fn missing_field() {
    assert_eq!(
        RequestLine::parse(b"GET /\r\n", &ParseConfig::default()),
        Err(ParseError::MalformedRequestLine)
    );
    assert_eq!(
        RequestLine::parse(b"/ HTTP/1.1\r\n", &ParseConfig::default()),
        Err(ParseError::MalformedRequestLine)
    );
}

#[test]
fn too_many_fields() {
    assert_eq!(
        RequestLine::parse(b"GET / extra HTTP/1.1\r\n", &ParseConfig::default()),
        Err(ParseError::MalformedRequestLine)
    );
    assert_eq!(
        RequestLine::parse(b"GET  / HTTP/1.1\r\n", &ParseConfig::default()),
        Err(ParseError::MalformedRequestLine)
    );
}

#[test]
fn bad_version() {
    for line in [
        &b"GET / HTTP/1.0\r\n"[..],
        b"GET / HTTP/2\r\n",
        b"GET / HTTPS/1.1\r\n",
        b"GET / http/1.1\r\n",
        b"GET / HTTP/1.1/x\r\n",
        b"GET / HTTP1.1\r\n",
    ] {
        assert_eq!(
            RequestLine::parse(line, &ParseConfig::default()),
            Err(ParseError::MalformedRequestLine),
            "{:?}",
            String::from_utf8_lossy(line)
        );
    }
}

#[test]
fn empty_or_whitespace_token() {
    assert_eq!(
        RequestLine::parse(b" / HTTP/1.1\r\n", &ParseConfig::default()),
        Err(ParseError::MalformedRequestLine)
    );
    assert_eq!(
        RequestLine::parse(b"GET\t/ /x HTTP/1.1\r\n", &ParseConfig::default()),
        Err(ParseError::MalformedRequestLine)
    );
}

#[test]
fn too_long() {
    let mut config = ParseConfig::default();
    config.set_line_max_len(16);

    assert_eq!(
        RequestLine::parse(b"GET /aaaaaaaaaaaaaaaaaaaa", &config),
        Err(ParseError::LineTooLong {
            size: 25,
            limit: 16
        })
    );
}
