//! A write cursor over a fixed, borrowed byte slice.
//!
//! The [`Writer`] never allocates and never grows: its capacity is the length of the slice it was
//! given. Writes that run past the end are truncated and reported as [`Error::Full`], and seeks
//! outside the slice are rejected with [`Error::OutOfBounds`] without moving the cursor.
//!
//! # Example
//!
//! ```
//! use slice_writer::{SeekMode, WriteResult, Writer};
//!
//! let mut frame = [0u8; 8];
//! let mut writer = Writer::new(&mut frame);
//!
//! // Reserve a 2-byte length prefix, write the body, then go back and fill the prefix
//! writer.seek(2, SeekMode::FromStart).unwrap();
//! assert_eq!(writer.write(b"hello"), WriteResult::Complete(5));
//! writer.seek(0, SeekMode::FromStart).unwrap();
//! assert_eq!(writer.write(&5u16.to_be_bytes()), WriteResult::Complete(2));
//!
//! // Only one byte of room is left after the body
//! writer.seek(0, SeekMode::FromEnd).unwrap();
//! writer.seek(-1, SeekMode::FromCurrent).unwrap();
//! assert_eq!(writer.write(b"!?"), WriteResult::Full(1));
//!
//! assert_eq!(&frame, b"\x00\x05hello!");
//! ```

use crate::error::Error;
use std::cmp;
use tracing::trace;

/// Outcome of [`Writer::write`].
///
/// Both variants carry the number of bytes actually copied into the slice.
#[must_use]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WriteResult {
    /// Every byte of the input was written.
    Complete(usize),

    /// The input did not fit; only the contained number of bytes from its front were written.
    Full(usize),
}

impl WriteResult {
    /// Returns the byte count, regardless of completion status.
    ///
    /// ```
    /// # use slice_writer::WriteResult;
    /// assert_eq!(WriteResult::Complete(42).count(), 42);
    /// assert_eq!(WriteResult::Full(10).count(), 10);
    /// ```
    pub const fn count(&self) -> usize {
        match self {
            Self::Complete(n) | Self::Full(n) => *n,
        }
    }

    /// Returns `true` if the whole input was written.
    pub const fn is_complete(&self) -> bool {
        matches!(self, Self::Complete(_))
    }

    /// Returns the error to report alongside [`count()`](Self::count), if any.
    ///
    /// ```
    /// # use slice_writer::{Error, WriteResult};
    /// assert_eq!(WriteResult::Complete(3).error(), None);
    /// assert_eq!(WriteResult::Full(1).error(), Some(Error::Full));
    /// ```
    pub const fn error(&self) -> Option<Error> {
        match self {
            Self::Complete(_) => None,
            Self::Full(_) => Some(Error::Full),
        }
    }

    /// Converts into a `Result`, dropping the partial count of a truncated write.
    pub const fn into_result(self) -> Result<usize, Error> {
        match self {
            Self::Complete(n) => Ok(n),
            Self::Full(_) => Err(Error::Full),
        }
    }
}

/// The reference point a [`Writer::seek`] offset is measured from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SeekMode {
    /// Offset from the start of the slice.
    FromStart,
    /// Offset from the current position.
    FromCurrent,
    /// Offset from the end of the slice.
    FromEnd,
}

/// A cursor that writes into a caller-owned byte slice of fixed length.
///
/// # Invariants
///
/// `0 <= self.pos <= self.buf.len()` holds before and after every operation. Operations that
/// would break it are rejected (seek) or truncated (write).
///
/// # `std::io`
///
/// `Writer` also implements [`std::io::Write`] and [`std::io::Seek`], so it can be handed to any
/// code generic over `Write + Seek`. The inherent [`write`](Self::write) and
/// [`seek`](Self::seek) take precedence in method-call syntax; use the traits explicitly, or their
/// provided methods such as `write_all`, to go through the `std::io` contract.
#[derive(Debug, PartialEq, Eq)]
pub struct Writer<'a> {
    /// The borrowed storage. Its length is the capacity.
    buf: &'a mut [u8],
    /// Index at which the next write starts.
    pos: usize,
}

impl<'a> Writer<'a> {
    /// Creates a writer over `buf`, positioned at the start.
    ///
    /// The contents of `buf` are left as they are; see [`clear()`](Self::clear) or
    /// [`WriterBuilder::zeroed`] to start from zeroes.
    #[inline]
    pub fn new(buf: &'a mut [u8]) -> Self {
        Self { buf, pos: 0 }
    }

    /// Creates a writer over `buf`, positioned at `position`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::OutOfBounds`] if `position > buf.len()`.
    ///
    /// ```
    /// # use slice_writer::{Error, Writer};
    /// let mut buf = [0u8; 4];
    /// assert_eq!(Writer::with_position(&mut buf, 4).unwrap().position(), 4);
    ///
    /// let mut buf = [0u8; 4];
    /// assert_eq!(Writer::with_position(&mut buf, 5), Err(Error::OutOfBounds));
    /// ```
    pub fn with_position(buf: &'a mut [u8], position: usize) -> Result<Self, Error> {
        Self::builder(buf).position(position).build()
    }

    /// Returns a [`WriterBuilder`] for configuring a new `Writer`.
    pub fn builder(buf: &'a mut [u8]) -> WriterBuilder<'a> {
        WriterBuilder {
            buf,
            position: 0,
            zeroed: false,
        }
    }

    /// Returns the current write position.
    #[inline]
    pub fn position(&self) -> usize {
        self.pos
    }

    /// Returns the capacity, which is the length of the underlying slice.
    #[inline]
    pub fn len(&self) -> usize {
        self.buf.len()
    }

    /// Returns `true` if the underlying slice has zero length.
    ///
    /// Such a writer accepts only empty writes.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.buf.is_empty()
    }

    /// Returns the number of bytes between the position and the end of the slice.
    #[expect(clippy::arithmetic_side_effects, reason = "Safe by invariant")]
    #[inline]
    pub fn remaining(&self) -> usize {
        self.buf.len() - self.pos
    }

    /// Returns `true` if no further byte can be written at the current position.
    #[inline]
    pub fn is_full(&self) -> bool {
        self.pos == self.buf.len()
    }

    /// Returns the bytes before the current position.
    ///
    /// After a sequence of writes from the start this is exactly what was written.
    ///
    /// ```
    /// # use slice_writer::Writer;
    /// let mut buf = [0u8; 16];
    /// let mut writer = Writer::new(&mut buf);
    /// let _ = writer.write(b"abc");
    /// assert_eq!(writer.written(), b"abc");
    /// ```
    #[expect(clippy::indexing_slicing, reason = "Safe by invariant")]
    #[inline]
    pub fn written(&self) -> &[u8] {
        &self.buf[..self.pos]
    }

    /// Returns the whole underlying slice.
    #[inline]
    pub fn buffer(&self) -> &[u8] {
        &*self.buf
    }

    /// Returns the whole underlying slice mutably.
    ///
    /// Changes made through it are not tracked; the position stays where it is.
    #[inline]
    pub fn buffer_mut(&mut self) -> &mut [u8] {
        &mut *self.buf
    }

    /// Releases the slice back to the caller.
    #[inline]
    pub fn into_inner(self) -> &'a mut [u8] {
        self.buf
    }

    /// Sets every byte of the slice to zero and moves the position back to the start.
    ///
    /// This lets one writer and slice be reused across independent write sessions.
    ///
    /// ```
    /// # use slice_writer::Writer;
    /// let mut buf = [7u8; 4];
    /// let mut writer = Writer::with_position(&mut buf, 2).unwrap();
    /// writer.clear();
    /// assert_eq!(writer.position(), 0);
    /// assert_eq!(writer.buffer(), &[0, 0, 0, 0]);
    /// ```
    pub fn clear(&mut self) {
        self.buf.fill(0);
        self.pos = 0;
        trace!(len = self.buf.len(), "cleared");
    }

    /// Copies as much of `data` as fits, starting at the current position.
    ///
    /// The position advances by the number of bytes copied. If not all of `data` fits, the
    /// bytes that do fit are still written and [`WriteResult::Full`] is returned; nothing is
    /// rolled back. An empty `data` always yields `Complete(0)`.
    ///
    /// ```
    /// # use slice_writer::{WriteResult, Writer};
    /// let mut buf = [0u8; 3];
    /// let mut writer = Writer::new(&mut buf);
    ///
    /// assert_eq!(writer.write(b"ab"), WriteResult::Complete(2));
    /// assert_eq!(writer.write(b"cd"), WriteResult::Full(1));
    /// assert_eq!(writer.write(b""), WriteResult::Complete(0));
    /// assert_eq!(writer.into_inner(), b"abc");
    /// ```
    #[expect(
        clippy::arithmetic_side_effects,
        clippy::indexing_slicing,
        reason = "Safe by invariant"
    )]
    pub fn write(&mut self, data: &[u8]) -> WriteResult {
        let room = &mut self.buf[self.pos..];
        let n = cmp::min(room.len(), data.len());

        room[..n].copy_from_slice(&data[..n]);
        self.pos += n;

        if n < data.len() {
            trace!(
                position = self.pos,
                requested = data.len(),
                written = n,
                "write truncated at end of slice"
            );
            WriteResult::Full(n)
        } else {
            WriteResult::Complete(n)
        }
    }

    /// Moves the position to `offset` measured from the reference point `mode`.
    ///
    /// Returns the new position from the start of the slice.
    ///
    /// # Errors
    ///
    /// Returns [`Error::OutOfBounds`] if the target would be negative or past the end of the
    /// slice. The position is left unchanged in that case.
    ///
    /// ```
    /// # use slice_writer::{Error, SeekMode, Writer};
    /// let mut buf = [0u8; 100];
    /// let mut writer = Writer::new(&mut buf);
    ///
    /// assert_eq!(writer.seek(10, SeekMode::FromStart), Ok(10));
    /// assert_eq!(writer.seek(-1, SeekMode::FromStart), Err(Error::OutOfBounds));
    /// assert_eq!(writer.position(), 10);
    /// assert_eq!(writer.seek(-100, SeekMode::FromEnd), Ok(0));
    /// ```
    pub fn seek(&mut self, offset: i64, mode: SeekMode) -> Result<u64, Error> {
        self.seek_wide(i128::from(offset), mode)
    }

    /// Seeks with an offset already widened to `i128`.
    ///
    /// Every `u64` and `i64` offset fits, and `i128` holds any sum of such an offset with a
    /// `usize` base, so the target computation cannot overflow.
    pub(crate) fn seek_wide(&mut self, offset: i128, mode: SeekMode) -> Result<u64, Error> {
        let Some((target, result)) = self.target(offset, mode) else {
            trace!(
                position = self.pos,
                len = self.buf.len(),
                offset = %offset,
                ?mode,
                "seek target out of bounds"
            );
            return Err(Error::OutOfBounds);
        };

        self.pos = target;
        Ok(result)
    }

    /// Resolves a seek target, or `None` if it falls outside `0..=len`.
    fn target(&self, offset: i128, mode: SeekMode) -> Option<(usize, u64)> {
        let base = match mode {
            SeekMode::FromStart => 0,
            SeekMode::FromCurrent => i128::try_from(self.pos).ok()?,
            SeekMode::FromEnd => i128::try_from(self.buf.len()).ok()?,
        };

        let target = usize::try_from(base.checked_add(offset)?).ok()?;
        if target > self.buf.len() {
            return None;
        }

        Some((target, u64::try_from(target).ok()?))
    }
}

/// A builder for constructing a [`Writer`] with a non-default starting state.
///
/// ```
/// use slice_writer::Writer;
///
/// let mut buf = [0xffu8; 8];
/// let writer = Writer::builder(&mut buf)
///     .zeroed(true) // clear stale contents first
///     .position(4)  // start writing halfway in
///     .build()
///     .unwrap();
///
/// assert_eq!(writer.position(), 4);
/// assert_eq!(writer.buffer(), &[0; 8]);
/// ```
#[must_use]
#[derive(Debug)]
pub struct WriterBuilder<'a> {
    buf: &'a mut [u8],
    position: usize,
    zeroed: bool,
}

impl<'a> WriterBuilder<'a> {
    /// Sets the initial write position. Defaults to 0.
    pub fn position(mut self, position: usize) -> Self {
        self.position = position;
        self
    }

    /// Sets whether the slice is zeroed when the writer is built. Defaults to `false`.
    pub fn zeroed(mut self, zeroed: bool) -> Self {
        self.zeroed = zeroed;
        self
    }

    /// Builds the [`Writer`].
    ///
    /// # Errors
    ///
    /// Returns [`Error::OutOfBounds`] if the position is past the end of the slice. The slice is
    /// not touched in that case, even when zeroing was requested.
    pub fn build(self) -> Result<Writer<'a>, Error> {
        if self.position > self.buf.len() {
            trace!(
                position = self.position,
                len = self.buf.len(),
                "initial position out of bounds"
            );
            return Err(Error::OutOfBounds);
        }

        if self.zeroed {
            self.buf.fill(0);
        }

        Ok(Writer {
            buf: self.buf,
            pos: self.position,
        })
    }
}
