use crate::error::WireError;
use crate::format::Width;

/// Read `n` bytes starting at `offset`.
///
/// This is the one bounds-checked primitive every other read in the
/// crate goes through.
///
/// # Returns
///
/// `(bytes, new_offset)` where `new_offset == offset + n`.
///
/// # Errors
///
/// [`WireError::ShortBuffer`] if `offset + n` exceeds `buf.len()`
/// (including when the sum overflows `usize`).
pub fn read(buf: &[u8], offset: usize, n: usize) -> Result<(&[u8], usize), WireError> {
    let end = offset
        .checked_add(n)
        .filter(|&end| end <= buf.len())
        .ok_or(WireError::ShortBuffer {
            offset,
            needed: n,
            available: buf.len().saturating_sub(offset),
        })?;
    Ok((&buf[offset..end], end))
}

/// Sequential reader over an immutable byte buffer.
///
/// The cursor only moves forward: every successful read advances
/// `offset` by exactly the number of bytes returned, and a failed read
/// leaves it where it was.
///
/// ```text
///   buf:    ┌────┬────┬────┬────┬────┬────┐
///           │ a5 │ 6a │ 69 │ 6d │ 6d │ 79 │
///           └────┴────┴────┴────┴────┴────┘
///             ▲ offset=0   read_u8() → 0xa5, offset=1
///                  ▲       read(5)   → "jimmy", offset=6
/// ```
#[derive(Clone, Debug)]
pub struct ByteCursor<'a> {
    buf: &'a [u8],
    offset: usize,
}

impl<'a> ByteCursor<'a> {
    /// Create a cursor positioned at the start of `buf`.
    pub fn new(buf: &'a [u8]) -> Self {
        Self { buf, offset: 0 }
    }

    /// Create a cursor positioned at `offset`.
    ///
    /// An offset past the end is accepted here; the first read reports it
    /// as [`WireError::ShortBuffer`].
    pub fn at(buf: &'a [u8], offset: usize) -> Self {
        Self { buf, offset }
    }

    /// Current position from the start of the buffer.
    pub fn offset(&self) -> usize {
        self.offset
    }

    /// Bytes left between the cursor and the end of the buffer.
    pub fn remaining(&self) -> usize {
        self.buf.len().saturating_sub(self.offset)
    }

    pub fn is_at_end(&self) -> bool {
        self.remaining() == 0
    }

    /// Read exactly `n` bytes and advance past them.
    ///
    /// # Errors
    ///
    /// [`WireError::ShortBuffer`] if fewer than `n` bytes remain.
    pub fn read(&mut self, n: usize) -> Result<&'a [u8], WireError> {
        let (bytes, next) = read(self.buf, self.offset, n)?;
        self.offset = next;
        Ok(bytes)
    }

    /// Look at the next byte without consuming it.
    pub fn peek_u8(&self) -> Result<u8, WireError> {
        let (bytes, _) = read(self.buf, self.offset, 1)?;
        Ok(bytes[0])
    }

    /// Read a fixed-size array of `N` bytes.
    pub fn read_array<const N: usize>(&mut self) -> Result<[u8; N], WireError> {
        let bytes = self.read(N)?;
        let mut out = [0u8; N];
        out.copy_from_slice(bytes);
        Ok(out)
    }

    /// Read a single byte.
    pub fn read_u8(&mut self) -> Result<u8, WireError> {
        let [byte] = self.read_array::<1>()?;
        Ok(byte)
    }

    pub fn read_u16_be(&mut self) -> Result<u16, WireError> {
        Ok(u16::from_be_bytes(self.read_array()?))
    }

    pub fn read_u32_be(&mut self) -> Result<u32, WireError> {
        Ok(u32::from_be_bytes(self.read_array()?))
    }

    pub fn read_u64_be(&mut self) -> Result<u64, WireError> {
        Ok(u64::from_be_bytes(self.read_array()?))
    }

    /// Read an unsigned big-endian value of the given width, widened to `u64`.
    pub fn read_be(&mut self, width: Width) -> Result<u64, WireError> {
        match width {
            Width::One => self.read_u8().map(u64::from),
            Width::Two => self.read_u16_be().map(u64::from),
            Width::Four => self.read_u32_be().map(u64::from),
            Width::Eight => self.read_u64_be(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn read_primitive_advances_offset() {
        let buf = [1, 2, 3, 4];
        let (bytes, next) = read(&buf, 1, 2).unwrap();
        assert_eq!(bytes, &[2, 3]);
        assert_eq!(next, 3);
    }

    #[test]
    fn read_primitive_exact_end() {
        let buf = [1, 2, 3];
        let (bytes, next) = read(&buf, 0, 3).unwrap();
        assert_eq!(bytes, &[1, 2, 3]);
        assert_eq!(next, buf.len());
    }

    #[test]
    fn read_primitive_zero_length_at_end() {
        let buf = [1, 2];
        let (bytes, next) = read(&buf, 2, 0).unwrap();
        assert!(bytes.is_empty());
        assert_eq!(next, 2);
    }

    #[test]
    fn read_primitive_past_end() {
        let buf = [1, 2, 3];
        let result = read(&buf, 2, 2);
        assert_eq!(
            result,
            Err(WireError::ShortBuffer {
                offset: 2,
                needed: 2,
                available: 1
            })
        );
    }

    #[test]
    fn read_primitive_offset_overflow() {
        let buf = [0u8; 4];
        let result = read(&buf, usize::MAX, 2);
        assert!(matches!(
            result,
            Err(WireError::ShortBuffer { available: 0, .. })
        ));
    }

    #[test]
    fn cursor_reads_big_endian() {
        let buf = [0x01, 0x02, 0x00, 0x00, 0x01, 0x00, 0xff];
        let mut cursor = ByteCursor::new(&buf);
        assert_eq!(cursor.read_u16_be().unwrap(), 0x0102);
        assert_eq!(cursor.read_u32_be().unwrap(), 0x0000_0100);
        assert_eq!(cursor.read_u8().unwrap(), 0xff);
        assert!(cursor.is_at_end());
    }

    #[test]
    fn cursor_read_be_widths() {
        let buf = [0xab, 0x00, 0x10, 0, 0, 0, 0, 0, 0, 0, 0x2a];
        let mut cursor = ByteCursor::new(&buf);
        assert_eq!(cursor.read_be(Width::One).unwrap(), 0xab);
        assert_eq!(cursor.read_be(Width::Two).unwrap(), 0x10);
        assert_eq!(cursor.read_be(Width::Eight).unwrap(), 0x2a);
        assert_eq!(cursor.offset(), buf.len());
    }

    #[test]
    fn failed_read_leaves_offset() {
        let buf = [0x01, 0x02, 0x03];
        let mut cursor = ByteCursor::new(&buf);
        cursor.read_u8().unwrap();
        let result = cursor.read_u32_be();
        assert!(matches!(
            result,
            Err(WireError::ShortBuffer {
                offset: 1,
                needed: 4,
                available: 2
            })
        ));
        assert_eq!(cursor.offset(), 1);
        assert_eq!(cursor.remaining(), 2);
    }

    #[test]
    fn cursor_past_end_reports_short_buffer() {
        let buf = [0x01];
        let mut cursor = ByteCursor::at(&buf, 5);
        assert_eq!(cursor.remaining(), 0);
        assert!(matches!(
            cursor.read_u8(),
            Err(WireError::ShortBuffer { offset: 5, .. })
        ));
    }
}
