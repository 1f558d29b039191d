#![no_std]

//! A zero-copy sequential reader over in-memory spans.
//!
//! Sliver provides a disciplined, bounds-checked cursor for callers who
//! already own a contiguous buffer: advancement, single-element lookahead,
//! delimiter-based segmentation, and fixed-width binary decoding, all without
//! copying the underlying data. It is a building block for parsers and
//! binary-protocol decoders, not a parser itself.
//!
//! Most users should begin with [`SpanReader`], constructed over a borrowed
//! slice of any element type. Readers over byte spans additionally offer the
//! decoding helpers in the [`bytes`] module: native-layout extraction of
//! [`zerocopy::FromBytes`] values, and textual integer parsing.
//!
//! The reader owns no resources and performs no I/O; buffering, allocation,
//! and reading from files or sockets are the caller's concern.

pub mod bytes;
pub mod reader;

pub use bytes::{IntFormat, MAX_PARSE_BYTES};
pub use reader::{AdvanceError, SpanReader};
