use jmp_types::Destination;
use tracing::debug;

use crate::config::DecoderConfig;
use crate::dispatch::Dispatcher;
use crate::error::DecodeError;

/// Synchronous MessagePack decoder that writes straight into a typed
/// destination.
///
/// Decoding a buffer proceeds in three steps:
///
///   1. **Input check**: an empty buffer is rejected up front.
///   2. **Dispatch**: the destination's slot decides how the value at
///      offset 0 is read. Records read a map and recurse into their
///      fields; integer and string slots read one scalar.
///   3. **Termination**: the offset after the value must equal the buffer
///      length. Leftover bytes are a [`DecodeError::SizeMismatch`].
///
/// The decoder holds only its configuration. Each call creates its own
/// cursor and field maps, so one `Decoder` can be shared freely between
/// threads.
///
/// # Example
///
/// ```rust
/// use jmp_decoder::{Decoder, record};
///
/// record! {
///     #[derive(Debug, Default, PartialEq)]
///     pub struct User {
///         pub ID: i64,
///         pub Name: String,
///     }
/// }
///
/// // {"ID": int8 7, "Name": "amy"}
/// let buf = [
///     0x82, 0xa2, b'I', b'D', 0xd0, 0x07,
///     0xa4, b'N', b'a', b'm', b'e', 0xa3, b'a', b'm', b'y',
/// ];
///
/// let mut user = User::default();
/// Decoder::new().decode(&buf, &mut user).unwrap();
/// assert_eq!(user, User { ID: 7, Name: "amy".to_string() });
/// ```
#[derive(Clone, Debug, Default)]
pub struct Decoder {
    config: DecoderConfig,
}

impl Decoder {
    /// Create a decoder with the default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: DecoderConfig) -> Self {
        Self { config }
    }

    /// The configuration every call on this decoder uses.
    pub fn config(&self) -> &DecoderConfig {
        &self.config
    }

    /// Decode a complete buffer into `dest`.
    ///
    /// # Errors
    ///
    /// - [`DecodeError::EmptyInput`] if `buf` is empty.
    /// - [`DecodeError::UnsupportedType`] if `dest` (or a field reached
    ///   while decoding) is not a signed integer, string or record.
    /// - [`DecodeError::Wire`] for malformed or truncated bytes.
    /// - [`DecodeError::SizeMismatch`] if bytes remain after the value.
    /// - Any other [`DecodeError`] raised while decoding nested records.
    pub fn decode<T>(&self, buf: &[u8], dest: &mut T) -> Result<(), DecodeError>
    where
        T: Destination + ?Sized,
    {
        if buf.is_empty() {
            return Err(DecodeError::EmptyInput);
        }

        let consumed = self.decode_value(buf, 0, dest)?;
        if consumed != buf.len() {
            debug!(consumed, len = buf.len(), "bytes left after top-level value");
            return Err(DecodeError::SizeMismatch {
                len: buf.len(),
                consumed,
            });
        }
        Ok(())
    }

    /// Decode one value starting at `offset`, without requiring it to end
    /// the buffer.
    ///
    /// Returns the offset just past the decoded value, which is where the
    /// next value (if any) starts.
    ///
    /// # Errors
    ///
    /// Same as [`decode`](Self::decode), except that trailing bytes are not
    /// an error.
    pub fn decode_at<T>(
        &self,
        buf: &[u8],
        offset: usize,
        dest: &mut T,
    ) -> Result<usize, DecodeError>
    where
        T: Destination + ?Sized,
    {
        if buf.is_empty() {
            return Err(DecodeError::EmptyInput);
        }
        self.decode_value(buf, offset, dest)
    }

    fn decode_value<T>(
        &self,
        buf: &[u8],
        offset: usize,
        dest: &mut T,
    ) -> Result<usize, DecodeError>
    where
        T: Destination + ?Sized,
    {
        let mut dispatcher = Dispatcher::new(buf, offset, &self.config);
        dispatcher.value(dest.slot())?;
        Ok(dispatcher.offset())
    }
}

/// Decode a complete buffer into `dest` with the default configuration.
///
/// Shorthand for `Decoder::new().decode(buf, dest)`.
///
/// # Errors
///
/// See [`Decoder::decode`].
pub fn decode<T>(buf: &[u8], dest: &mut T) -> Result<(), DecodeError>
where
    T: Destination + ?Sized,
{
    Decoder::new().decode(buf, dest)
}
