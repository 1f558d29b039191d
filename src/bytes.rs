//! Decoding helpers specialized to byte spans.

use atoi::{FromRadix10SignedChecked, FromRadix16Checked};
use zerocopy::FromBytes;

use crate::reader::SpanReader;

/// Upper bound on the bytes a single textual integer may occupy.
///
/// Parses consuming this many bytes or more are rejected, guarding callers
/// against pathological numeric literals.
pub const MAX_PARSE_BYTES: usize = 128;

/// Accepted textual representations for [`SpanReader::try_parse_int`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum IntFormat {
    /// Decimal digits, with an optional leading sign.
    #[default]
    Decimal,
    /// Hexadecimal digits, without a prefix or sign.
    Hexadecimal,
}

impl SpanReader<'_, u8> {
    /// Decode a fixed-width value from the start of the unread remainder,
    /// consuming its bytes.
    ///
    /// The value is a reinterpretation of the leading `size_of::<U>()` bytes
    /// in the platform's native layout and byte order. No endianness
    /// conversion is performed, so multi-byte values decoded on one platform
    /// are not portable to platforms of the other byte order; callers needing
    /// a portable representation should decode integers with an explicit
    /// `from_le_bytes` or `from_be_bytes` instead.
    ///
    /// Returns `None`, leaving the cursor unchanged, if fewer than
    /// `size_of::<U>()` bytes remain.
    pub fn try_read<U: FromBytes>(&mut self) -> Option<U> {
        let (value, _) = U::read_from_prefix(self.unread()).ok()?;

        self.bump(size_of::<U>());

        Some(value)
    }

    /// Parse a textual integer from the start of the unread remainder,
    /// consuming its bytes.
    ///
    /// Returns the parsed value and the number of bytes consumed. A parse
    /// occupying [`MAX_PARSE_BYTES`] or more is rejected even when otherwise
    /// valid, as are empty or malformed literals and values overflowing an
    /// `i32`. On rejection the cursor is unchanged.
    pub fn try_parse_int(&mut self, format: IntFormat) -> Option<(i32, usize)> {
        let (value, used) = match format {
            IntFormat::Decimal => i32::from_radix_10_signed_checked(self.unread()),
            IntFormat::Hexadecimal => i32::from_radix_16_checked(self.unread()),
        };

        let value = value?;

        // A bare sign parses as zero with the sign byte consumed; only a
        // prefix containing a digit is a valid literal.
        let valid = match format {
            IntFormat::Decimal => self.unread()[..used].iter().any(u8::is_ascii_digit),
            IntFormat::Hexadecimal => used != 0,
        };

        if !valid || used >= MAX_PARSE_BYTES {
            return None;
        }

        self.bump(used);

        Some((value, used))
    }
}
