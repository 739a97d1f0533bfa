//! Full-transfer read and write primitives.
//!
//! The scan loop must never mistake a transient short read for end-of-file,
//! and must never leave a rewrite half-written. These helpers retry the
//! underlying calls until the requested transfer is complete, distinguishing
//! genuine end-of-stream (read side only) from failure.

use std::io::{ErrorKind, Read, Write};

use crate::error::ShredError;

/// Reads until `buf` is full or the stream ends.
///
/// Returns the number of bytes placed in `buf`. A count shorter than
/// `buf.len()` means the stream ended; transient short reads and
/// `Interrupted` errors are retried internally.
pub(crate) fn read_full<R: Read>(reader: &mut R, buf: &mut [u8]) -> Result<usize, ShredError> {
    let mut filled = 0;
    while filled < buf.len() {
        match reader.read(&mut buf[filled..]) {
            Ok(0) => break,
            Ok(n) => filled += n,
            Err(e) if e.kind() == ErrorKind::Interrupted => {}
            Err(e) => return Err(e.into()),
        }
    }
    Ok(filled)
}

/// Writes the whole of `buf`, retrying short writes.
///
/// A write that reports zero bytes of progress while data remains fails with
/// [`ShredError::WriteStalled`]; writes have no benign end-of-stream.
pub(crate) fn write_full<W: Write>(writer: &mut W, buf: &[u8]) -> Result<(), ShredError> {
    let mut written = 0;
    while written < buf.len() {
        match writer.write(&buf[written..]) {
            Ok(0) => {
                return Err(ShredError::WriteStalled {
                    written,
                    requested: buf.len(),
                });
            }
            Ok(n) => written += n,
            Err(e) if e.kind() == ErrorKind::Interrupted => {}
            Err(e) => return Err(e.into()),
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::{self, Cursor};

    /// Reader that hands out data a few bytes at a time.
    struct DribbleReader {
        data: Vec<u8>,
        pos: usize,
        step: usize,
    }

    impl Read for DribbleReader {
        fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
            let end = (self.pos + self.step).min(self.data.len());
            let n = (end - self.pos).min(buf.len());
            buf[..n].copy_from_slice(&self.data[self.pos..self.pos + n]);
            self.pos += n;
            Ok(n)
        }
    }

    /// Writer that accepts a few bytes per call, then nothing at all.
    struct StallingWriter {
        accepted: Vec<u8>,
        remaining_budget: usize,
    }

    impl Write for StallingWriter {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            let n = buf.len().min(self.remaining_budget).min(3);
            self.remaining_budget -= n;
            self.accepted.extend_from_slice(&buf[..n]);
            Ok(n)
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn test_read_full_accumulates_short_reads() {
        let mut reader = DribbleReader {
            data: (0..32u8).collect(),
            pos: 0,
            step: 5,
        };
        let mut buf = [0u8; 32];
        let n = read_full(&mut reader, &mut buf).unwrap();
        assert_eq!(n, 32);
        assert_eq!(buf.to_vec(), (0..32u8).collect::<Vec<_>>());
    }

    #[test]
    fn test_read_full_short_only_at_end_of_stream() {
        let mut reader = DribbleReader {
            data: vec![7u8; 10],
            pos: 0,
            step: 4,
        };
        let mut buf = [0u8; 16];
        let n = read_full(&mut reader, &mut buf).unwrap();
        assert_eq!(n, 10);
        assert_eq!(&buf[..10], &[7u8; 10]);
    }

    #[test]
    fn test_read_full_empty_stream() {
        let mut reader = Cursor::new(Vec::new());
        let mut buf = [0u8; 8];
        let n = read_full(&mut reader, &mut buf).unwrap();
        assert_eq!(n, 0);
    }

    #[test]
    fn test_read_full_propagates_errors() {
        struct FailingReader;
        impl Read for FailingReader {
            fn read(&mut self, _buf: &mut [u8]) -> io::Result<usize> {
                Err(io::Error::new(io::ErrorKind::Other, "boom"))
            }
        }
        let mut buf = [0u8; 8];
        let err = read_full(&mut FailingReader, &mut buf).unwrap_err();
        matches!(err, ShredError::Io(_));
    }

    #[test]
    fn test_write_full_retries_short_writes() {
        let mut writer = StallingWriter {
            accepted: Vec::new(),
            remaining_budget: usize::MAX,
        };
        write_full(&mut writer, &[1u8; 20]).unwrap();
        assert_eq!(writer.accepted, vec![1u8; 20]);
    }

    #[test]
    fn test_write_full_stall_is_an_error() {
        let mut writer = StallingWriter {
            accepted: Vec::new(),
            remaining_budget: 6,
        };
        let err = write_full(&mut writer, &[1u8; 20]).unwrap_err();
        match err {
            ShredError::WriteStalled { written, requested } => {
                assert_eq!(written, 6);
                assert_eq!(requested, 20);
            }
            other => panic!("expected WriteStalled, got {:?}", other),
        }
    }

    #[test]
    fn test_write_full_empty_buffer_is_noop() {
        let mut writer = StallingWriter {
            accepted: Vec::new(),
            remaining_budget: 0,
        };
        write_full(&mut writer, &[]).unwrap();
        assert!(writer.accepted.is_empty());
    }
}
