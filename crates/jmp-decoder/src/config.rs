use jmp_types::KeyMatch;

/// Default limit on nested records (and nested maps while skipping).
pub const DEFAULT_MAX_DEPTH: usize = 64;

/// Configuration for a [`Decoder`](crate::Decoder).
///
/// ```text
/// ┌──────────────┬─────────────────────────────────────────────────────┐
/// │ Field        │ Purpose                                             │
/// ├──────────────┼─────────────────────────────────────────────────────┤
/// │ key_match    │ How encoded keys are matched to record fields       │
/// │ unknown_keys │ Skip or reject keys that match no field             │
/// │ max_depth    │ Upper bound on nested maps, records included        │
/// └──────────────┴─────────────────────────────────────────────────────┘
/// ```
///
/// Recursion depth follows the nesting of the destination type, and a
/// skipped value follows the nesting of the buffer. `max_depth` bounds
/// both so a hostile payload or a deeply nested type cannot exhaust the
/// stack.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DecoderConfig {
    pub key_match: KeyMatch,
    pub unknown_keys: UnknownKeys,
    pub max_depth: usize,
}

impl Default for DecoderConfig {
    /// Exact key matching, unknown keys skipped, depth limit of
    /// [`DEFAULT_MAX_DEPTH`].
    fn default() -> Self {
        Self {
            key_match: KeyMatch::default(),
            unknown_keys: UnknownKeys::default(),
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }
}

/// What to do with a map entry whose key matches no record field.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum UnknownKeys {
    /// Consume the entry's value and continue with the next entry.
    #[default]
    Skip,
    /// Fail with [`DecodeError::UnknownKey`](crate::DecodeError::UnknownKey).
    Reject,
}
