use std::error::Error;

use http1_request::{
    head_parser::{ParseError, ParseOutput},
    HeaderList, ParseConfig,
};

#[test]
fn single_header() -> Result<(), Box<dyn Error>> {
    let mut headers = HeaderList::new();

    let o = headers.parse(b"Host: localhost:42069\r\n\r\n", &ParseConfig::default())?;
    assert_eq!(o, ParseOutput::Completed(25));

    assert_eq!(headers.len(), 1);
    assert_eq!(headers.get("host"), Some("localhost:42069"));

    Ok(())
}

#[test]
fn whitespace_around_value() -> Result<(), Box<dyn Error>> {
    let mut headers = HeaderList::new();

    let o = headers.parse(
        b"Host:     localhost:42069    \r\n\r\n",
        &ParseConfig::default(),
    )?;
    assert_eq!(o, ParseOutput::Completed(33));

    assert_eq!(headers.get("Host"), Some("localhost:42069"));

    Ok(())
}

#[test]
fn partial() -> Result<(), Box<dyn Error>> {
    let mut headers = HeaderList::new();

    let o = headers.parse(b"Host: foo.com\r\nUser-Ag", &ParseConfig::default())?;
    assert_eq!(o, ParseOutput::Partial(15));
    assert_eq!(headers.len(), 1);

    let o = headers.parse(b"User-Ag", &ParseConfig::default())?;
    assert_eq!(o, ParseOutput::Partial(0));
    assert_eq!(headers.len(), 1);

    let o = headers.parse(b"User-Agent: curl/8.5.0\r\n\r", &ParseConfig::default())?;
    assert_eq!(o, ParseOutput::Partial(24));
    assert_eq!(headers.len(), 2);

    let o = headers.parse(b"\r\n", &ParseConfig::default())?;
    assert_eq!(o, ParseOutput::Completed(2));
    assert_eq!(headers.get("user-agent"), Some("curl/8.5.0"));

    Ok(())
}

#[test]
fn terminator_leaves_body_bytes() -> Result<(), Box<dyn Error>> {
    let mut headers = HeaderList::new();

    let o = headers.parse(b"\r\nhello", &ParseConfig::default())?;
    assert_eq!(o, ParseOutput::Completed(2));
    assert!(headers.is_empty());

    Ok(())
}

#[test]
fn duplicate_names_keep_order_and_casing() -> Result<(), Box<dyn Error>> {
    let mut headers = HeaderList::new();

    headers.parse(
        b"Set-Person: lane-loves-go\r\nHOST: x\r\nset-person: prime-loves-zig\r\n\r\n",
        &ParseConfig::default(),
    )?;

    assert_eq!(headers.get("SET-PERSON"), Some("lane-loves-go"));
    assert_eq!(
        headers.get_all("set-person").collect::<Vec<_>>(),
        vec!["lane-loves-go", "prime-loves-zig"]
    );
    assert_eq!(
        headers.iter().collect::<Vec<_>>(),
        vec![
            ("Set-Person", "lane-loves-go"),
            ("HOST", "x"),
            ("set-person", "prime-loves-zig"),
        ]
    );
    assert!(headers.contains("host"));
    assert!(!headers.contains("Content-Length"));

    Ok(())
}

#[test]
fn missing_colon() {
    let mut headers = HeaderList::new();

    assert_eq!(
        headers.parse(b"BadHeader\r\n\r\n", &ParseConfig::default()),
        Err(ParseError::MalformedHeaderLine)
    );
}

#[test]
fn whitespace_in_name() {
    let mut headers = HeaderList::new();

    assert_eq!(
        headers.parse(b"       Host : localhost:42069       \r\n\r\n", &ParseConfig::default()),
        Err(ParseError::MalformedHeaderLine)
    );
}

#[test]
fn malformed_line_after_valid_ones() {
    let mut headers = HeaderList::new();

    assert_eq!(
        headers.parse(b"Host: x\r\n: y\r\n\r\n", &ParseConfig::default()),
        Err(ParseError::MalformedHeaderLine)
    );
}

#[test]
fn too_many_headers() {
    let mut config = ParseConfig::default();
    config.set_headers_max_count(2);

    let mut headers = HeaderList::new();
    assert_eq!(
        headers.parse(b"A: 1\r\nB: 2\r\nC: 3\r\n\r\n", &config),
        Err(ParseError::TooManyHeaders { limit: 2 })
    );
}

#[test]
fn from_iter() {
    let headers: HeaderList = vec![("Host", "x"), ("Accept", "*/*")].into_iter().collect();

    assert_eq!(headers.len(), 2);
    assert_eq!(headers.get("accept"), Some("*/*"));
}
