//! The sequential cursor over a borrowed span.

use thiserror::Error;

/// An error advancing a reader's cursor.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum AdvanceError {
    /// Requested advancement exceeds the unread remainder.
    #[error("Requested advancement ({requested}) exceeds the unread remainder ({unread}).")]
    OutOfRange { requested: usize, unread: usize },
}

/// A cursor over a borrowed, read-only span of elements.
///
/// A reader stores only view boundaries, never data: constructing or copying
/// one is free of allocation, and copies track their positions independently
/// over the same storage. The span must remain valid and unchanged for the
/// lifetime `'a`, which the borrow checker enforces.
///
/// Exhaustion and absence are reported through [`Option`] returns as ordinary
/// outcomes. Only [`advance`](Self::advance), whose misuse indicates a defect
/// in the calling code, returns an error.
#[derive(Debug, Clone, Copy)]
pub struct SpanReader<'a, T> {
    full: &'a [T],
    unread: &'a [T],
    consumed: usize,
}

impl<'a, T> SpanReader<'a, T> {
    /// Construct a reader positioned at the start of a span.
    pub fn new(span: &'a [T]) -> Self {
        Self {
            full: span,
            unread: span,
            consumed: 0,
        }
    }

    /// The span this reader was constructed over.
    pub fn full_span(&self) -> &'a [T] {
        self.full
    }

    /// The suffix of the span not yet consumed.
    pub fn unread(&self) -> &'a [T] {
        self.unread
    }

    /// The number of elements consumed so far.
    pub fn consumed(&self) -> usize {
        self.consumed
    }

    /// Whether every element has been consumed.
    pub fn is_end(&self) -> bool {
        self.unread.is_empty()
    }

    /// Consume `count` elements.
    ///
    /// Returns an error, leaving the cursor unchanged, if `count` exceeds the
    /// unread remainder. Check against [`unread`](Self::unread) beforehand;
    /// a failure here is a bug in the calling code, not a recoverable
    /// condition.
    pub fn advance(&mut self, count: usize) -> Result<(), AdvanceError> {
        if count > self.unread.len() {
            return Err(AdvanceError::OutOfRange {
                requested: count,
                unread: self.unread.len(),
            });
        }

        self.bump(count);

        Ok(())
    }

    /// Consume `count` elements. Callers must have checked the bound.
    pub(crate) fn bump(&mut self, count: usize) {
        self.consumed += count;
        self.unread = &self.unread[count..];
    }
}

impl<T: Copy> SpanReader<'_, T> {
    /// Return the next unread element, if any, without consuming it.
    pub fn try_peek(&self) -> Option<T> {
        self.unread.first().copied()
    }
}

impl<'a, T: PartialEq> SpanReader<'a, T> {
    /// Read up to the first occurrence of a delimiter, returning the elements
    /// preceding it.
    ///
    /// A delimiter in the first unread position yields an empty span, which
    /// is a match ("no preceding content"), not a failure. The cursor stops
    /// on the delimiter, or just past it if `advance_past_delimiter` is set.
    ///
    /// If the delimiter does not occur in the unread remainder, returns
    /// `None` and leaves the cursor unchanged.
    pub fn try_read_to(&mut self, delimiter: T, advance_past_delimiter: bool) -> Option<&'a [T]> {
        let unread = self.unread;

        let i = unread.iter().position(|x| *x == delimiter)?;
        let segment = &unread[..i];

        self.bump(i + usize::from(advance_past_delimiter));

        Some(segment)
    }
}
