use jmp_types::TypeError;
use jmp_wire::WireError;

/// Errors that can occur while decoding a buffer into a destination.
///
/// Every error is terminal for the call. Fields of a record that were
/// decoded before the failure keep their new values; the rest keep
/// whatever they held before.
///
/// Error hierarchy:
///
/// ```text
///   DecodeError
///   ├── EmptyInput            ← zero-length buffer
///   ├── InvalidDestination    ← record declared a field it cannot hand out
///   ├── UnsupportedType       ← destination kind outside int/string/record
///   ├── SizeMismatch          ← bytes left over after the top-level value
///   ├── DepthLimitExceeded    ← records nested past DecoderConfig::max_depth
///   ├── UnknownKey            ← unmatched key with UnknownKeys::Reject
///   ├── Type(TypeError)       ← decoded integer does not fit the slot
///   └── Wire(WireError)       ← ShortBuffer, UnsupportedCode,
///                               InsufficientMapData, InvalidUtf8, ...
/// ```
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DecodeError {
    /// The input buffer has no bytes at all.
    #[error("input buffer is empty")]
    EmptyInput,

    /// A record listed a participating field but returned no slot for it.
    ///
    /// Records built with `record!` never do this; it indicates a
    /// hand-written [`Record`](jmp_types::Record) impl whose `fields` and
    /// `field_slot` disagree.
    #[error("{type_name} has no addressable slot for field {field} (index {index})")]
    InvalidDestination {
        type_name: &'static str,
        field: &'static str,
        index: usize,
    },

    /// The destination is not a signed integer, string or record.
    ///
    /// Raised before any bytes of the value are read, so the destination is
    /// never written.
    #[error("unsupported destination type {kind}")]
    UnsupportedType { kind: &'static str },

    /// The top-level value ended before the end of the buffer.
    #[error("decoded value ends at offset {consumed} but buffer is {len} bytes")]
    SizeMismatch { len: usize, consumed: usize },

    /// Records nested deeper than the configured limit.
    #[error("record nesting exceeds limit of {limit} at {type_name} (offset {offset})")]
    DepthLimitExceeded {
        limit: usize,
        type_name: &'static str,
        offset: usize,
    },

    /// An encoded key matched no field and unknown keys are rejected.
    #[error("unknown key {key:?} for {type_name} at offset {offset}")]
    UnknownKey {
        type_name: &'static str,
        key: String,
        offset: usize,
    },

    #[error(transparent)]
    Type(#[from] TypeError),

    #[error(transparent)]
    Wire(#[from] WireError),
}
