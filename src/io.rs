//! [`std::io::Write`] and [`std::io::Seek`] for [`Writer`].
//!
//! Short writes follow the `std::io` convention and return `Ok(n)` with `n` smaller than the
//! input. Only a write that stores nothing at all reports [`Error::Full`], which makes
//! [`write_all`](io::Write::write_all) fail with the sentinel instead of a generic
//! [`io::ErrorKind::WriteZero`].
//!
//! ```
//! use slice_writer::{Error, Writer};
//! use std::io::{Seek, SeekFrom, Write};
//!
//! fn emit<W: Write + Seek>(out: &mut W) -> std::io::Result<u64> {
//!     out.write_all(b"body")?;
//!     out.seek(SeekFrom::Start(0))?;
//!     out.write_all(b"B")?;
//!     out.seek(SeekFrom::End(0))
//! }
//!
//! let mut buf = [0u8; 4];
//! assert_eq!(emit(&mut Writer::new(&mut buf)).unwrap(), 4);
//! assert_eq!(&buf, b"Body");
//!
//! let mut small = [0u8; 2];
//! let err = emit(&mut Writer::new(&mut small)).unwrap_err();
//! assert_eq!(Error::from_io(&err), Some(Error::Full));
//! ```

use crate::error::Error;
use crate::writer::{SeekMode, WriteResult, Writer};
use std::io::{self, IoSlice, SeekFrom};

impl io::Write for Writer<'_> {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        match Writer::write(self, buf) {
            WriteResult::Full(0) => Err(Error::Full.into()),
            result => Ok(result.count()),
        }
    }

    fn write_vectored(&mut self, bufs: &[IoSlice<'_>]) -> io::Result<usize> {
        let mut total: usize = 0;

        for buf in bufs {
            let result = Writer::write(self, buf);

            // Bounded by the slice length, so this never saturates
            total = total.saturating_add(result.count());

            if !result.is_complete() {
                if total == 0 {
                    return Err(Error::Full.into());
                }
                break;
            }
        }

        Ok(total)
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl io::Seek for Writer<'_> {
    fn seek(&mut self, pos: SeekFrom) -> io::Result<u64> {
        let (offset, mode) = match pos {
            SeekFrom::Start(n) => (i128::from(n), SeekMode::FromStart),
            SeekFrom::Current(n) => (i128::from(n), SeekMode::FromCurrent),
            SeekFrom::End(n) => (i128::from(n), SeekMode::FromEnd),
        };

        Ok(self.seek_wide(offset, mode)?)
    }

    fn stream_position(&mut self) -> io::Result<u64> {
        u64::try_from(self.position()).map_err(|_| Error::OutOfBounds.into())
    }
}
