use crate::cursor::ByteCursor;
use crate::error::WireError;
use crate::format::{
    FIXMAP, FIXSTR, FormatCode, INT8, INT16, INT32, INT64, MAP16, MAP32, NIL, STR8, STR16, STR32,
    Width, embedded_size, is_fixmap, is_fixstr,
};

// ── Scalar readers ────────────────────────────────────────────────────
//
// Each reader consumes one format-code byte plus whatever that code says
// follows it, and leaves the cursor just past the value. A code outside
// the reader's accepted set is reported with the offset of the code byte.

fn unsupported(code: u8, offset: usize, expected: &'static str) -> WireError {
    WireError::UnsupportedCode {
        code,
        offset,
        expected,
    }
}

/// Convert a decoded length to `usize`.
///
/// A length that does not fit the address space can never be satisfied
/// by an in-memory buffer, so it is reported as a short read.
fn to_len(value: u64, cursor: &ByteCursor<'_>) -> Result<usize, WireError> {
    usize::try_from(value).map_err(|_| WireError::ShortBuffer {
        offset: cursor.offset(),
        needed: usize::MAX,
        available: cursor.remaining(),
    })
}

/// Read a signed integer.
///
/// ```text
/// ┌──────┬───────┬─────────────────────────────┐
/// │ Code │ Name  │ Payload                     │
/// ├──────┼───────┼─────────────────────────────┤
/// │ 0xd0 │ Int8  │ 1 byte, sign-extended       │
/// │ 0xd1 │ Int16 │ 2 bytes BE, sign-extended   │
/// │ 0xd2 │ Int32 │ 4 bytes BE, sign-extended   │
/// │ 0xd3 │ Int64 │ 8 bytes BE                  │
/// │ 0xc0 │ Nil   │ none, yields 0              │
/// └──────┴───────┴─────────────────────────────┘
/// ```
///
/// Positive/negative fixints and the unsigned family are deliberately
/// not accepted.
///
/// # Errors
///
/// - [`WireError::UnsupportedCode`] for any other code.
/// - [`WireError::ShortBuffer`] if the payload is truncated.
pub fn read_int(cursor: &mut ByteCursor<'_>) -> Result<i64, WireError> {
    let start = cursor.offset();
    let code = cursor.read_u8()?;
    match code {
        INT8 => Ok(i64::from(i8::from_be_bytes(cursor.read_array()?))),
        INT16 => Ok(i64::from(i16::from_be_bytes(cursor.read_array()?))),
        INT32 => Ok(i64::from(i32::from_be_bytes(cursor.read_array()?))),
        INT64 => Ok(i64::from_be_bytes(cursor.read_array()?)),
        NIL => Ok(0),
        other => Err(unsupported(other, start, "integer")),
    }
}

/// Read a string header and return the payload length in bytes.
///
/// Fixstr embeds the length in the code; Str8/16/32 follow the code with
/// a 1/2/4 byte big-endian length; Nil is an empty string.
///
/// # Errors
///
/// - [`WireError::UnsupportedCode`] for a non-string code.
/// - [`WireError::ShortBuffer`] if the length prefix is truncated.
pub fn read_str_len(cursor: &mut ByteCursor<'_>) -> Result<usize, WireError> {
    let start = cursor.offset();
    let code = cursor.read_u8()?;
    let width = match code {
        c if is_fixstr(c) => return Ok(embedded_size(c, FIXSTR)),
        NIL => return Ok(0),
        STR8 => Width::One,
        STR16 => Width::Two,
        STR32 => Width::Four,
        other => return Err(unsupported(other, start, "string")),
    };
    let len = cursor.read_be(width)?;
    to_len(len, cursor)
}

/// Read exactly `len` payload bytes.
///
/// A zero length consumes nothing and returns an empty slice.
pub fn read_bytes_by_len<'a>(
    cursor: &mut ByteCursor<'a>,
    len: usize,
) -> Result<&'a [u8], WireError> {
    if len == 0 {
        return Ok(&[]);
    }
    cursor.read(len)
}

/// Read a complete string (header + payload) as raw bytes.
pub fn read_str_bytes<'a>(cursor: &mut ByteCursor<'a>) -> Result<&'a [u8], WireError> {
    let len = read_str_len(cursor)?;
    read_bytes_by_len(cursor, len)
}

/// Read a complete string (header + payload) as UTF-8 text.
///
/// # Errors
///
/// All errors from [`read_str_len`], plus [`WireError::ShortBuffer`] if
/// the payload is truncated and [`WireError::InvalidUtf8`] if it is not
/// valid UTF-8.
pub fn read_str<'a>(cursor: &mut ByteCursor<'a>) -> Result<&'a str, WireError> {
    let len = read_str_len(cursor)?;
    let payload_offset = cursor.offset();
    let bytes = read_bytes_by_len(cursor, len)?;
    std::str::from_utf8(bytes).map_err(|_| WireError::InvalidUtf8 {
        offset: payload_offset,
    })
}

/// Read a map header and return its entry count.
///
/// After the header, at least `2 * count` bytes must remain; the check
/// runs before any entry is touched so an absurd count fails fast.
///
/// # Errors
///
/// - [`WireError::UnsupportedCode`] for a non-map code.
/// - [`WireError::ShortBuffer`] if the count prefix is truncated.
/// - [`WireError::InsufficientMapData`] if the remaining bytes cannot
///   hold `count` entries.
pub fn read_map_len(cursor: &mut ByteCursor<'_>) -> Result<usize, WireError> {
    let start = cursor.offset();
    let code = cursor.read_u8()?;
    let count = match code {
        c if is_fixmap(c) => embedded_size(c, FIXMAP),
        MAP16 => usize::from(cursor.read_u16_be()?),
        MAP32 => {
            let raw = cursor.read_u32_be()?;
            to_len(u64::from(raw), cursor)?
        }
        other => return Err(unsupported(other, start, "map")),
    };

    let needed = count.saturating_mul(2);
    let available = cursor.remaining();
    if available < needed {
        return Err(WireError::InsufficientMapData {
            offset: start,
            count,
            needed,
            available,
        });
    }
    Ok(count)
}

/// Consume one complete value without materializing it.
///
/// Accepts the same grammar the readers above accept: nil, Int8..Int64,
/// strings and maps with string keys. Maps nest at most `max_depth` deep.
///
/// # Errors
///
/// - [`WireError::UnsupportedCode`] for a code outside that grammar.
/// - [`WireError::NestingTooDeep`] past `max_depth` nested maps.
/// - Any error from the individual readers.
pub fn skip_value(cursor: &mut ByteCursor<'_>, max_depth: usize) -> Result<(), WireError> {
    skip_nested(cursor, max_depth, 0)
}

fn skip_nested(cursor: &mut ByteCursor<'_>, limit: usize, depth: usize) -> Result<(), WireError> {
    let start = cursor.offset();
    let code = cursor.peek_u8()?;
    match FormatCode::from_byte(code) {
        Some(FormatCode::Nil | FormatCode::Int(_)) => {
            read_int(cursor)?;
        }
        Some(FormatCode::FixStr(_) | FormatCode::Str(_)) => {
            read_str_bytes(cursor)?;
        }
        Some(FormatCode::FixMap(_) | FormatCode::Map(_)) => {
            if depth >= limit {
                return Err(WireError::NestingTooDeep {
                    limit,
                    offset: start,
                });
            }
            let count = read_map_len(cursor)?;
            for _ in 0..count {
                read_str_bytes(cursor)?;
                skip_nested(cursor, limit, depth + 1)?;
            }
        }
        _ => return Err(unsupported(code, start, "value")),
    }
    Ok(())
}
