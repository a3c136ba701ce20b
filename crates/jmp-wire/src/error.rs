/// Byte-level failures while reading a MessagePack buffer.
///
/// Every variant carries the offset where the read started so a bad
/// payload can be located with a hex dump.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum WireError {
    /// A read of `needed` bytes at `offset` ran past the end of the buffer.
    #[error("short buffer: need {needed} bytes at offset {offset}, {available} available")]
    ShortBuffer {
        offset: usize,
        needed: usize,
        available: usize,
    },

    /// The format code at `offset` is not one this reader accepts.
    ///
    /// `expected` names what the caller was trying to read ("integer",
    /// "string", "map" or "value").
    #[error("unsupported format code {code:#04x} at offset {offset} while reading {expected}")]
    UnsupportedCode {
        code: u8,
        offset: usize,
        expected: &'static str,
    },

    /// A map header declared more entries than the remaining bytes can hold.
    ///
    /// Every key and every value occupies at least one byte, so a map of
    /// `count` entries needs at least `2 * count` bytes after its header.
    #[error("map of {count} entries at offset {offset} needs at least {needed} bytes, {available} remain")]
    InsufficientMapData {
        offset: usize,
        count: usize,
        needed: usize,
        available: usize,
    },

    /// A string payload starting at `offset` is not valid UTF-8.
    #[error("invalid UTF-8 in string payload at offset {offset}")]
    InvalidUtf8 { offset: usize },

    /// Skipping a value descended through more than `limit` nested maps.
    #[error("value nesting exceeds limit of {limit} at offset {offset}")]
    NestingTooDeep { limit: usize, offset: usize },
}
