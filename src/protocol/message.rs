//! Message struct with typed accessors.
//!
//! Represents one complete protocol frame: a fixed-width header plus the
//! payload bytes it describes. Uses `bytes::Bytes` for cheap payload
//! sharing, so handing a response to the domain decoder never copies.
//!
//! # Example
//!
//! ```
//! use acqbuf_client::protocol::{command, Message};
//! use bytes::Bytes;
//!
//! let request = Message::new(command::PUT_DAT, Bytes::from_static(b"samples"));
//! assert_eq!(request.command(), command::PUT_DAT);
//! assert_eq!(request.payload_len(), 7);
//! ```

use bytes::Bytes;

use super::wire_format::{Header, PROTOCOL_VERSION};

/// A complete protocol message (header plus payload).
///
/// The header's `payload_size` always equals the payload length. The
/// constructors stamp the size from the payload, so the two cannot drift
/// apart; a message assembled from a received header carries exactly the
/// bytes that header announced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Message {
    /// Fixed-width header.
    pub header: Header,
    /// Payload bytes (zero-copy via `bytes::Bytes`).
    pub payload: Bytes,
}

impl Message {
    /// Create a request message carrying the given payload.
    ///
    /// The header is stamped with [`PROTOCOL_VERSION`] and the payload
    /// length.
    pub fn new(command: u16, payload: Bytes) -> Self {
        let header = Header::new(PROTOCOL_VERSION, command, payload.len() as u32);
        Self { header, payload }
    }

    /// Create a request message with no payload.
    ///
    /// On the wire this is a bare header; no payload bytes follow it.
    pub fn empty(command: u16) -> Self {
        Self::new(command, Bytes::new())
    }

    /// Assemble a message from a header and the payload it announced.
    pub fn from_parts(header: Header, payload: Bytes) -> Self {
        debug_assert_eq!(header.payload_size as usize, payload.len());
        Self { header, payload }
    }

    /// Get the protocol version from the header.
    #[inline]
    pub fn version(&self) -> u16 {
        self.header.version
    }

    /// Get the command code.
    #[inline]
    pub fn command(&self) -> u16 {
        self.header.command
    }

    /// Get a reference to the payload bytes.
    #[inline]
    pub fn payload(&self) -> &[u8] {
        &self.payload
    }

    /// Get a clone of the payload as `Bytes` (cheap, zero-copy).
    #[inline]
    pub fn payload_bytes(&self) -> Bytes {
        self.payload.clone()
    }

    /// Get the payload length in bytes.
    #[inline]
    pub fn payload_len(&self) -> usize {
        self.payload.len()
    }
}
