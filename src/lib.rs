//! # acqbuf-client
//!
//! Synchronous client for the binary request/response protocol of a
//! real-time data-acquisition buffer server.
//!
//! The server speaks a simple framed protocol over a plain byte stream:
//! every frame is a fixed 8-byte header (protocol version, command code,
//! payload size) followed by exactly that many opaque payload bytes. A
//! transaction is one request sent, one response received; nothing is
//! pipelined and responses carry no request identifier.
//!
//! ## Architecture
//!
//! - [`transport`]: exact-count read/write primitives that absorb partial
//!   transfers over a stream endpoint
//! - [`protocol`]: the wire-format header and the message model
//! - [`exchange`]: the one-request/one-response transaction driver
//!
//! The endpoint (typically a `TcpStream`) is opened, configured, and closed
//! by the caller; this crate never owns the connection. Interpreting
//! response payloads (data descriptions, sample blocks, events) is likewise
//! the caller's concern, and payload bytes pass through untouched.
//!
//! ## Example
//!
//! ```no_run
//! use std::net::TcpStream;
//! use acqbuf_client::{command, Exchange, Message};
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let mut stream = TcpStream::connect("127.0.0.1:1972")?;
//!     let request = Message::empty(command::GET_HDR);
//!     let response = Exchange::default().transact(&mut stream, &request)?;
//!     println!("{} payload bytes", response.payload_len());
//!     Ok(())
//! }
//! ```

pub mod error;
pub mod exchange;
pub mod protocol;
pub mod transport;

pub use error::{AcqbufError, Result};
pub use exchange::Exchange;
pub use protocol::{command, Header, Message, HEADER_SIZE, PROTOCOL_VERSION};
