//! Exact-count transfer primitives over a stream endpoint.
//!
//! A single `read` or `write` against a stream endpoint may move fewer
//! bytes than requested. The helpers here loop over the underlying
//! primitive until the full count has transferred, so every layer above
//! deals in whole buffers: either the requested bytes moved, or a typed
//! error records how far the transfer got.
//!
//! The endpoint is whatever the caller connected (a `TcpStream`, a Unix
//! socket, an in-memory mock in tests); this module never opens, closes, or
//! buffers beyond the caller-supplied region. Deadlines, if needed, belong
//! on the endpoint itself (e.g. `TcpStream::set_read_timeout`).

use std::io::{ErrorKind, Read, Write};

use crate::error::{AcqbufError, Result};

/// Write the entire buffer to the endpoint.
///
/// Loops over [`Write::write`], retrying interrupted calls. A zero-length
/// write result (the endpoint will accept nothing more) or any other I/O
/// failure aborts with [`AcqbufError::ShortWrite`] carrying the byte counts
/// and the underlying error, if one exists.
pub fn write_all<E: Write + ?Sized>(endpoint: &mut E, buf: &[u8]) -> Result<()> {
    let expected = buf.len();
    let mut written = 0;

    while written < expected {
        match endpoint.write(&buf[written..]) {
            Ok(0) => {
                return Err(AcqbufError::ShortWrite {
                    written,
                    expected,
                    source: None,
                })
            }
            Ok(n) => written += n,
            Err(e) if e.kind() == ErrorKind::Interrupted => continue,
            Err(e) => {
                return Err(AcqbufError::ShortWrite {
                    written,
                    expected,
                    source: Some(e),
                })
            }
        }
    }

    Ok(())
}

/// Fill the entire buffer from the endpoint.
///
/// Loops over [`Read::read`], retrying interrupted calls. End-of-stream
/// before the buffer is full is always an error at this layer, never a
/// silent truncation: it aborts with [`AcqbufError::ShortRead`] carrying
/// the byte counts and the underlying error, if one exists.
pub fn read_all<E: Read + ?Sized>(endpoint: &mut E, buf: &mut [u8]) -> Result<()> {
    let expected = buf.len();
    let mut read = 0;

    while read < expected {
        match endpoint.read(&mut buf[read..]) {
            Ok(0) => {
                return Err(AcqbufError::ShortRead {
                    read,
                    expected,
                    source: None,
                })
            }
            Ok(n) => read += n,
            Err(e) if e.kind() == ErrorKind::Interrupted => continue,
            Err(e) => {
                return Err(AcqbufError::ShortRead {
                    read,
                    expected,
                    source: Some(e),
                })
            }
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::{self, Cursor};

    /// Writer that accepts at most `chunk` bytes per call.
    struct ChunkedWriter {
        accepted: Vec<u8>,
        chunk: usize,
    }

    impl ChunkedWriter {
        fn new(chunk: usize) -> Self {
            Self {
                accepted: Vec::new(),
                chunk,
            }
        }
    }

    impl Write for ChunkedWriter {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            let n = buf.len().min(self.chunk);
            self.accepted.extend_from_slice(&buf[..n]);
            Ok(n)
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    /// Reader that delivers one byte per call.
    struct OneByteReader {
        data: Vec<u8>,
        pos: usize,
    }

    impl Read for OneByteReader {
        fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
            if self.pos >= self.data.len() || buf.is_empty() {
                return Ok(0);
            }
            buf[0] = self.data[self.pos];
            self.pos += 1;
            Ok(1)
        }
    }

    #[test]
    fn test_write_all_masks_chunking() {
        // 12 bytes through an endpoint that takes 3 per call.
        let mut writer = ChunkedWriter::new(3);
        let data = *b"0123456789ab";

        write_all(&mut writer, &data).unwrap();

        assert_eq!(writer.accepted, data);
    }

    #[test]
    fn test_write_all_one_byte_at_a_time() {
        let mut writer = ChunkedWriter::new(1);
        let data = *b"header+payload";

        write_all(&mut writer, &data).unwrap();

        assert_eq!(writer.accepted, data);
    }

    #[test]
    fn test_write_all_empty_buffer_is_noop() {
        let mut writer = ChunkedWriter::new(3);
        write_all(&mut writer, &[]).unwrap();
        assert!(writer.accepted.is_empty());
    }

    #[test]
    fn test_write_all_zero_result_is_short_write() {
        struct RefusingWriter {
            accept_first: usize,
            accepted: usize,
        }

        impl Write for RefusingWriter {
            fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
                let n = buf.len().min(self.accept_first.saturating_sub(self.accepted));
                self.accepted += n;
                Ok(n)
            }

            fn flush(&mut self) -> io::Result<()> {
                Ok(())
            }
        }

        let mut writer = RefusingWriter {
            accept_first: 5,
            accepted: 0,
        };

        let err = write_all(&mut writer, &[0u8; 12]).unwrap_err();
        match err {
            AcqbufError::ShortWrite {
                written,
                expected,
                source,
            } => {
                assert_eq!(written, 5);
                assert_eq!(expected, 12);
                assert!(source.is_none());
            }
            other => panic!("expected ShortWrite, got {other:?}"),
        }
    }

    #[test]
    fn test_write_all_io_error_is_short_write_with_source() {
        struct BrokenWriter;

        impl Write for BrokenWriter {
            fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
                Err(io::Error::new(io::ErrorKind::BrokenPipe, "peer reset"))
            }

            fn flush(&mut self) -> io::Result<()> {
                Ok(())
            }
        }

        let err = write_all(&mut BrokenWriter, &[0u8; 8]).unwrap_err();
        match err {
            AcqbufError::ShortWrite {
                written,
                expected,
                source,
            } => {
                assert_eq!(written, 0);
                assert_eq!(expected, 8);
                assert_eq!(source.unwrap().kind(), io::ErrorKind::BrokenPipe);
            }
            other => panic!("expected ShortWrite, got {other:?}"),
        }
    }

    #[test]
    fn test_write_all_retries_interrupted() {
        struct FlakyWriter {
            accepted: Vec<u8>,
            interrupt_next: bool,
        }

        impl Write for FlakyWriter {
            fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
                if self.interrupt_next {
                    self.interrupt_next = false;
                    return Err(io::Error::new(io::ErrorKind::Interrupted, "signal"));
                }
                self.interrupt_next = true;
                self.accepted.push(buf[0]);
                Ok(1)
            }

            fn flush(&mut self) -> io::Result<()> {
                Ok(())
            }
        }

        let mut writer = FlakyWriter {
            accepted: Vec::new(),
            interrupt_next: true,
        };

        write_all(&mut writer, b"data").unwrap();
        assert_eq!(writer.accepted, b"data");
    }

    #[test]
    fn test_read_all_masks_fragmentation() {
        let mut reader = OneByteReader {
            data: b"8 bytes.".to_vec(),
            pos: 0,
        };
        let mut buf = [0u8; 8];

        read_all(&mut reader, &mut buf).unwrap();

        assert_eq!(&buf, b"8 bytes.");
    }

    #[test]
    fn test_read_all_exact_from_cursor() {
        let mut cursor = Cursor::new(vec![1u8, 2, 3, 4, 5, 6]);
        let mut buf = [0u8; 4];

        read_all(&mut cursor, &mut buf).unwrap();

        assert_eq!(buf, [1, 2, 3, 4]);
        assert_eq!(cursor.position(), 4);
    }

    #[test]
    fn test_read_all_eof_is_short_read() {
        // Stream closes after 3 of 8 expected bytes.
        let mut cursor = Cursor::new(vec![1u8, 2, 3]);
        let mut buf = [0u8; 8];

        let err = read_all(&mut cursor, &mut buf).unwrap_err();
        match err {
            AcqbufError::ShortRead {
                read,
                expected,
                source,
            } => {
                assert_eq!(read, 3);
                assert_eq!(expected, 8);
                assert!(source.is_none());
            }
            other => panic!("expected ShortRead, got {other:?}"),
        }
    }

    #[test]
    fn test_read_all_io_error_is_short_read_with_source() {
        struct BrokenReader;

        impl Read for BrokenReader {
            fn read(&mut self, _buf: &mut [u8]) -> io::Result<usize> {
                Err(io::Error::new(io::ErrorKind::ConnectionReset, "peer reset"))
            }
        }

        let mut buf = [0u8; 4];
        let err = read_all(&mut BrokenReader, &mut buf).unwrap_err();
        match err {
            AcqbufError::ShortRead { read, source, .. } => {
                assert_eq!(read, 0);
                assert_eq!(source.unwrap().kind(), io::ErrorKind::ConnectionReset);
            }
            other => panic!("expected ShortRead, got {other:?}"),
        }
    }

    #[test]
    fn test_read_all_empty_buffer_reads_nothing() {
        let mut cursor = Cursor::new(vec![1u8, 2, 3]);
        let mut buf = [0u8; 0];

        read_all(&mut cursor, &mut buf).unwrap();
        assert_eq!(cursor.position(), 0);
    }
}
