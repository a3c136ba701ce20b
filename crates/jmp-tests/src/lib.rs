//! Payload fixtures shared by the integration tests and benches.
//!
//! [`Payload`] writes MessagePack through `rmp::encode`, choosing the
//! explicit-width integer markers (Int8..Int64) the decoder accepts.
//! `rmp_serde` would pick fixints for small values, which the decoder
//! rejects by design, so serde is only used for string-only structs.

use rmp::encode;

/// Builder for a MessagePack byte sequence.
///
/// Writes go straight into a `Vec<u8>`, which cannot fail, so every
/// method returns `Self` for chaining.
#[derive(Debug, Default, Clone)]
pub struct Payload {
    buf: Vec<u8>,
}

impl Payload {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start with a map header of `len` entries.
    pub fn map(len: u32) -> Self {
        Self::new().map_header(len)
    }

    pub fn map_header(mut self, len: u32) -> Self {
        encode::write_map_len(&mut self.buf, len)
            .expect("Vec writes are infallible");
        self
    }

    /// A string in its most compact encoding; used for keys and values.
    pub fn str(mut self, text: &str) -> Self {
        encode::write_str(&mut self.buf, text)
            .expect("Vec writes are infallible");
        self
    }

    pub fn i8(mut self, value: i8) -> Self {
        encode::write_i8(&mut self.buf, value)
            .expect("Vec writes are infallible");
        self
    }

    pub fn i16(mut self, value: i16) -> Self {
        encode::write_i16(&mut self.buf, value)
            .expect("Vec writes are infallible");
        self
    }

    pub fn i32(mut self, value: i32) -> Self {
        encode::write_i32(&mut self.buf, value)
            .expect("Vec writes are infallible");
        self
    }

    pub fn i64(mut self, value: i64) -> Self {
        encode::write_i64(&mut self.buf, value)
            .expect("Vec writes are infallible");
        self
    }

    pub fn nil(mut self) -> Self {
        encode::write_nil(&mut self.buf)
            .expect("Vec writes are infallible");
        self
    }

    pub fn f64(mut self, value: f64) -> Self {
        encode::write_f64(&mut self.buf, value)
            .expect("Vec writes are infallible");
        self
    }

    /// Append bytes verbatim, for hand-made malformed input.
    pub fn raw(mut self, bytes: &[u8]) -> Self {
        self.buf.extend_from_slice(bytes);
        self
    }

    pub fn finish(self) -> Vec<u8> {
        self.buf
    }
}

/// `{ID: 1, Name: "jimmy", ABCD: "abcd"}` with `ID` as an Int64.
pub fn user_payload() -> Vec<u8> {
    Payload::map(3)
        .str("ID")
        .i64(1)
        .str("Name")
        .str("jimmy")
        .str("ABCD")
        .str("abcd")
        .finish()
}

/// A flat map of `width` string entries `F0..F{width-1}`, all holding
/// `value`.
pub fn wide_payload(width: u32, value: &str) -> Vec<u8> {
    let mut payload = Payload::map(width);
    for i in 0..width {
        payload = payload.str(&format!("F{i}")).str(value);
    }
    payload.finish()
}
