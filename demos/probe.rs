//! Probe a running acquisition buffer server.
//!
//! Connects to the given address (default `127.0.0.1:1972`), issues one
//! empty-payload request, and prints the shape of the reply.
//!
//! ```text
//! cargo run --example probe -- 127.0.0.1:1972
//! RUST_LOG=acqbuf_client=debug cargo run --example probe
//! ```

use std::net::TcpStream;
use std::time::Duration;

use acqbuf_client::{command, Exchange, Message};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let addr = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "127.0.0.1:1972".to_string());

    let mut stream = TcpStream::connect(&addr)?;
    stream.set_read_timeout(Some(Duration::from_secs(5)))?;
    stream.set_nodelay(true)?;

    let request = Message::empty(command::GET_HDR);
    let response = Exchange::default().transact(&mut stream, &request)?;

    println!(
        "server at {addr} answered: command 0x{:03x}, {} payload bytes",
        response.command(),
        response.payload_len()
    );

    Ok(())
}
