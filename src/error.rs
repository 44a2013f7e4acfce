//! The two ways a [`Writer`](crate::Writer) operation can fail.
//!
//! Both are sentinel values: they carry no per-call data, so callers tell them apart with `==`
//! instead of inspecting messages.
//!
//! ```
//! use slice_writer::{Error, SeekMode, Writer};
//!
//! let mut buf = [0u8; 4];
//! let mut writer = Writer::new(&mut buf);
//!
//! assert_eq!(writer.write(b"hello").error(), Some(Error::Full));
//! assert_eq!(writer.seek(5, SeekMode::FromStart), Err(Error::OutOfBounds));
//! ```

use std::io;

/// Error values returned by [`Writer`](crate::Writer).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, thiserror::Error)]
pub enum Error {
    /// A write did not fit in the remaining space.
    ///
    /// The bytes that did fit have already been written when this is reported.
    #[error("write beyond end of slice attempted")]
    Full,

    /// A seek target fell outside `0..=len`.
    ///
    /// The position is never modified when this is reported.
    #[error("position out of bounds")]
    OutOfBounds,
}

impl Error {
    /// Returns the [`io::ErrorKind`] used when this error crosses the [`std::io`] traits.
    ///
    /// ```
    /// # use slice_writer::Error;
    /// use std::io::ErrorKind;
    /// assert_eq!(Error::Full.kind(), ErrorKind::WriteZero);
    /// assert_eq!(Error::OutOfBounds.kind(), ErrorKind::InvalidInput);
    /// ```
    pub const fn kind(self) -> io::ErrorKind {
        match self {
            Self::Full => io::ErrorKind::WriteZero,
            Self::OutOfBounds => io::ErrorKind::InvalidInput,
        }
    }

    /// Recovers the sentinel from an [`io::Error`] produced by this crate.
    ///
    /// Returns `None` for any other `io::Error`.
    ///
    /// ```
    /// # use slice_writer::Error;
    /// use std::io;
    /// let err = io::Error::from(Error::OutOfBounds);
    /// assert_eq!(Error::from_io(&err), Some(Error::OutOfBounds));
    ///
    /// let other = io::Error::new(io::ErrorKind::InvalidInput, "nope");
    /// assert_eq!(Error::from_io(&other), None);
    /// ```
    pub fn from_io(err: &io::Error) -> Option<Self> {
        err.get_ref()?.downcast_ref::<Self>().copied()
    }
}

impl From<Error> for io::Error {
    fn from(err: Error) -> Self {
        io::Error::new(err.kind(), err)
    }
}
