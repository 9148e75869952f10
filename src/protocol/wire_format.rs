//! Wire format encoding and decoding.
//!
//! Implements the 8-byte header format:
//! ```text
//! ┌──────────┬──────────┬──────────────┐
//! │ Version  │ Command  │ Payload size │
//! │ 2 bytes  │ 2 bytes  │ 4 bytes      │
//! │ uint16 LE│ uint16 LE│ uint32 LE    │
//! └──────────┴──────────┴──────────────┘
//! ```
//!
//! All multi-byte integers are little-endian, matching the acquisition
//! server's native encoding. Requests and responses use the identical
//! layout; the header is a wire-compatibility contract, so any change here
//! must be coordinated with the peer.

use crate::error::{AcqbufError, Result};

/// Header size in bytes (fixed, exactly 8).
pub const HEADER_SIZE: usize = 8;

/// Protocol version this client speaks.
pub const PROTOCOL_VERSION: u16 = 1;

/// Default maximum payload size accepted from a peer (1 GB).
pub const DEFAULT_MAX_PAYLOAD_SIZE: u32 = 1_073_741_824;

/// Command code points used by the buffer server.
///
/// These are opaque pass-through values: the client stamps them into request
/// headers and hands them back out of response headers, but attaches no
/// behavior to any particular code. The set is defined by the server.
pub mod command {
    /// Store a data description.
    pub const PUT_HDR: u16 = 0x101;
    /// Append sample data.
    pub const PUT_DAT: u16 = 0x102;
    /// Append events.
    pub const PUT_EVT: u16 = 0x103;
    /// Acknowledgement: put succeeded.
    pub const PUT_OK: u16 = 0x104;
    /// Acknowledgement: put failed.
    pub const PUT_ERR: u16 = 0x105;

    /// Fetch the data description.
    pub const GET_HDR: u16 = 0x201;
    /// Fetch sample data.
    pub const GET_DAT: u16 = 0x202;
    /// Fetch events.
    pub const GET_EVT: u16 = 0x203;
    /// Acknowledgement: get succeeded.
    pub const GET_OK: u16 = 0x204;
    /// Acknowledgement: get failed.
    pub const GET_ERR: u16 = 0x205;

    /// Discard the data description.
    pub const FLUSH_HDR: u16 = 0x301;
    /// Discard sample data.
    pub const FLUSH_DAT: u16 = 0x302;
    /// Discard events.
    pub const FLUSH_EVT: u16 = 0x303;
    /// Acknowledgement: flush succeeded.
    pub const FLUSH_OK: u16 = 0x304;
    /// Acknowledgement: flush failed.
    pub const FLUSH_ERR: u16 = 0x305;

    /// Block until new samples or events arrive.
    pub const WAIT_DAT: u16 = 0x402;
    /// Acknowledgement: wait satisfied.
    pub const WAIT_OK: u16 = 0x404;
    /// Acknowledgement: wait failed.
    pub const WAIT_ERR: u16 = 0x405;
}

/// Decoded frame header.
///
/// The fixed-width leading portion of every frame, carrying the protocol
/// version, the command code, and the length of the payload that follows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Header {
    /// Protocol version of the peer that produced the frame.
    pub version: u16,
    /// Command code (opaque to this crate).
    pub command: u16,
    /// Payload length in bytes.
    pub payload_size: u32,
}

impl Header {
    /// Create a new header.
    pub fn new(version: u16, command: u16, payload_size: u32) -> Self {
        Self {
            version,
            command,
            payload_size,
        }
    }

    /// Encode the header to bytes (little-endian).
    ///
    /// # Example
    ///
    /// ```
    /// use acqbuf_client::protocol::{Header, PROTOCOL_VERSION};
    ///
    /// let header = Header::new(PROTOCOL_VERSION, 0x201, 16);
    /// assert_eq!(header.encode().len(), 8);
    /// ```
    pub fn encode(&self) -> [u8; HEADER_SIZE] {
        let mut buf = [0u8; HEADER_SIZE];
        self.encode_into(&mut buf);
        buf
    }

    /// Encode the header into an existing buffer.
    ///
    /// # Panics
    ///
    /// Panics in debug builds if the buffer is smaller than `HEADER_SIZE`.
    pub fn encode_into(&self, buf: &mut [u8]) {
        debug_assert!(buf.len() >= HEADER_SIZE);
        buf[0..2].copy_from_slice(&self.version.to_le_bytes());
        buf[2..4].copy_from_slice(&self.command.to_le_bytes());
        buf[4..8].copy_from_slice(&self.payload_size.to_le_bytes());
    }

    /// Decode a header from an exactly-sized buffer (little-endian).
    ///
    /// Pure and infallible: the transport layer only hands over buffers it
    /// filled completely, so there is no short-buffer case to report.
    /// Nothing about the decoded values is validated here; the exchange
    /// layer decides whether the version and payload size are acceptable.
    ///
    /// # Example
    ///
    /// ```
    /// use acqbuf_client::protocol::Header;
    ///
    /// let bytes = [1, 0, 0x01, 0x02, 16, 0, 0, 0];
    /// let header = Header::decode(&bytes);
    /// assert_eq!(header.version, 1);
    /// assert_eq!(header.command, 0x0201);
    /// assert_eq!(header.payload_size, 16);
    /// ```
    pub fn decode(buf: &[u8; HEADER_SIZE]) -> Self {
        Self {
            version: u16::from_le_bytes([buf[0], buf[1]]),
            command: u16::from_le_bytes([buf[2], buf[3]]),
            payload_size: u32::from_le_bytes([buf[4], buf[5], buf[6], buf[7]]),
        }
    }
}

/// Reject a declared payload size that exceeds the given maximum.
///
/// Guards the receive path against allocating unbounded memory on behalf of
/// a malformed or hostile header.
pub fn check_payload_size(declared: u32, max: u32) -> Result<()> {
    if declared > max {
        return Err(AcqbufError::PayloadTooLarge { declared, max });
    }
    Ok(())
}
