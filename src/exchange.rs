//! Request/response transaction driver.
//!
//! One call to [`Exchange::transact`] walks a single linear transaction:
//! send the request header, send the request payload, receive the response
//! header, check the protocol version, receive the response payload. Any
//! failure aborts immediately with a typed error and drops everything
//! allocated during the attempt; the caller either owns a complete response
//! or holds nothing.
//!
//! The protocol is half-duplex per connection: responses carry no request
//! identifier, so a second request must not start on an endpoint until the
//! first response has been fully received. Upholding that discipline, like
//! owning the endpoint's lifecycle, is the caller's job.
//!
//! # Example
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

use std::io::{Read, Write};

use bytes::Bytes;

use crate::error::{AcqbufError, Result};
use crate::protocol::{
    check_payload_size, Header, Message, DEFAULT_MAX_PAYLOAD_SIZE, HEADER_SIZE, PROTOCOL_VERSION,
};
use crate::transport;

/// Configuration for driving transactions against one peer.
///
/// Holds no per-transaction state, so a single `Exchange` may be shared
/// freely; concurrent transactions are fine as long as each runs on its own
/// endpoint.
#[derive(Debug, Clone)]
pub struct Exchange {
    /// Version every response header must carry.
    expected_version: u16,
    /// Upper bound on a response payload this client will allocate.
    max_payload_size: u32,
}

impl Exchange {
    /// Create an exchange requiring the given protocol version in responses.
    ///
    /// The version is an explicit parameter rather than a compiled-in
    /// constant so that compatibility with a peer is a configuration
    /// decision, testable by substitution.
    pub fn new(expected_version: u16) -> Self {
        Self {
            expected_version,
            max_payload_size: DEFAULT_MAX_PAYLOAD_SIZE,
        }
    }

    /// Set the maximum response payload size this client will allocate.
    ///
    /// Default: [`DEFAULT_MAX_PAYLOAD_SIZE`].
    pub fn max_payload_size(mut self, max: u32) -> Self {
        self.max_payload_size = max;
        self
    }

    /// Drive one synchronous request/response transaction to completion.
    ///
    /// Blocks the calling thread for the full duration of the transaction,
    /// both send and receive. The request is only borrowed and never
    /// mutated. On success the returned response is owned by the caller; on
    /// failure every buffer allocated during the attempt has already been
    /// dropped, so no partially-valid response can escape.
    ///
    /// # Errors
    ///
    /// - [`AcqbufError::ShortWrite`] / [`AcqbufError::ShortRead`] if the
    ///   endpoint fails or closes mid-transfer
    /// - [`AcqbufError::VersionMismatch`] if the response header carries a
    ///   version other than the expected one; the payload is not read, since
    ///   a foreign version means its size field cannot be trusted
    /// - [`AcqbufError::PayloadTooLarge`] if the response header declares
    ///   more than the configured maximum
    /// - [`AcqbufError::AllocationFailed`] if the payload buffer cannot be
    ///   allocated
    pub fn transact<E>(&self, endpoint: &mut E, request: &Message) -> Result<Message>
    where
        E: Read + Write + ?Sized,
    {
        tracing::debug!(
            "sending request: command 0x{:03x}, {} payload bytes",
            request.command(),
            request.payload_len()
        );

        transport::write_all(endpoint, &request.header.encode())?;

        if !request.payload.is_empty() {
            transport::write_all(endpoint, &request.payload)?;
        }

        let mut header_buf = [0u8; HEADER_SIZE];
        transport::read_all(endpoint, &mut header_buf)?;
        let header = Header::decode(&header_buf);

        if header.version != self.expected_version {
            tracing::warn!(
                "response version {} does not match expected {}, aborting before payload",
                header.version,
                self.expected_version
            );
            return Err(AcqbufError::VersionMismatch {
                expected: self.expected_version,
                received: header.version,
            });
        }

        check_payload_size(header.payload_size, self.max_payload_size)?;

        let payload = if header.payload_size == 0 {
            Bytes::new()
        } else {
            let size = header.payload_size as usize;
            let mut buf: Vec<u8> = Vec::new();
            buf.try_reserve_exact(size)
                .map_err(|_| AcqbufError::AllocationFailed { requested: size })?;
            buf.resize(size, 0);
            transport::read_all(endpoint, &mut buf)?;
            Bytes::from(buf)
        };

        tracing::debug!(
            "received response: command 0x{:03x}, {} payload bytes",
            header.command,
            payload.len()
        );

        Ok(Message::from_parts(header, payload))
    }
}

impl Default for Exchange {
    /// An exchange expecting [`PROTOCOL_VERSION`] with the default payload
    /// bound.
    fn default() -> Self {
        Self::new(PROTOCOL_VERSION)
    }
}
