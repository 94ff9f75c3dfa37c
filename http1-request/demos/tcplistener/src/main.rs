/*
cargo run -p http1-request-demo-tcplistener -- 127.0.0.1:42069

curl http://127.0.0.1:42069/coffee -d '{"flavor":"dark mode"}'
*/

use std::env;
use std::io;
use std::net::{TcpListener, TcpStream};
use std::thread;

use tracing::{error, info, Level};
use tracing_subscriber::FmtSubscriber;

use http1_request::request_from_reader;

fn main() -> io::Result<()> {
    let subscriber = FmtSubscriber::builder()
        .with_max_level(Level::DEBUG)
        .finish();
    tracing::subscriber::set_global_default(subscriber)
        .map_err(|err| io::Error::new(io::ErrorKind::Other, err))?;

    let addr = env::args()
        .nth(1)
        .unwrap_or_else(|| env::var("ADDR").unwrap_or("127.0.0.1:42069".to_owned()));

    let listener = TcpListener::bind(&addr)?;
    info!("listening on {}", listener.local_addr()?);

    for stream in listener.incoming() {
        let stream = stream?;
        thread::spawn(move || {
            if let Err(err) = handle(stream) {
                error!(%err, "connection failed");
            }
        });
    }

    Ok(())
}

fn handle(mut stream: TcpStream) -> io::Result<()> {
    let peer_addr = stream.peer_addr()?;
    info!(%peer_addr, "connection accepted");

    let request = request_from_reader(&mut stream)?;

    println!("Request line:");
    println!("- Method: {}", request.method());
    println!("- Target: {}", request.target());
    println!("- Version: {}", request.http_version());
    println!("Headers:");
    for (name, value) in request.headers() {
        println!("- {}: {}", name, value);
    }
    println!("Body:");
    println!("{}", String::from_utf8_lossy(request.body()));

    info!(%peer_addr, "connection closed");

    Ok(())
}
