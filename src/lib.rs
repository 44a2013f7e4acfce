//! A [`Write`](std::io::Write) + [`Seek`](std::io::Seek) cursor over a fixed, caller-owned byte
//! slice.
//!
//! [`std::io::Cursor<&mut [u8]>`](std::io::Cursor) already writes into a slice, but it lets the
//! position run past the end and reports a full slice only as a zero-length write. [`Writer`]
//! keeps the position inside `0..=len` at all times and reports the two ways that can go wrong
//! as distinct values:
//!
//! - [`Error::Full`] when a write did not fit. The part that fit is still written.
//! - [`Error::OutOfBounds`] when a seek target lies outside the slice. The position does not
//!   move.
//!
//! The writer never allocates. Its capacity is the length of the slice, and the caller keeps
//! ownership of the memory.
//!
//! # Quick start
//!
//! ```
//! use slice_writer::{Error, SeekMode, WriteResult, Writer};
//!
//! let mut buf = [0u8; 100];
//! let mut writer = Writer::with_position(&mut buf, 1).unwrap();
//!
//! assert_eq!(writer.write(&[1]), WriteResult::Complete(1));
//! assert_eq!(writer.write(&[2, 3, 4]), WriteResult::Complete(3));
//!
//! // Seeking out of range is an error and leaves the position alone
//! assert_eq!(writer.seek(101, SeekMode::FromStart), Err(Error::OutOfBounds));
//! assert_eq!(writer.position(), 5);
//!
//! // Reuse the same slice for the next record
//! writer.clear();
//! assert_eq!(writer.position(), 0);
//! ```
//!
//! # Crate organisation
//!
//! - [`Writer`] is the primary type, wrapping a `&mut [u8]`.
//! - [`WriterBuilder`] configures the initial position and zeroing before constructing a
//!   [`Writer`].
//! - [`WriteResult`] and [`SeekMode`] are the argument and result types of the writer's own
//!   `write` and `seek`.
//! - [`Error`] is the closed set of failures, convertible to and from [`std::io::Error`].
//!
//! # Diagnostics
//!
//! Truncated writes, rejected seeks and clears are reported through [`tracing`] at `trace`
//! level. The crate never installs a subscriber.

pub mod error;
mod io;
pub mod writer;

pub use error::Error;
pub use writer::{SeekMode, WriteResult, Writer, WriterBuilder};
