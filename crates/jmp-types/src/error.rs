/// Errors raised while storing a decoded value into a destination slot.
///
/// These sit above the byte level: the value was read correctly but the
/// destination cannot hold it.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TypeError {
    /// A decoded integer is outside the range of the destination type.
    ///
    /// Integers are always decoded to `i64` first; narrowing into `i8`,
    /// `i16`, `i32` or `isize` is checked rather than truncated.
    #[error("integer {value} does not fit in {kind}")]
    IntegerOverflow { value: i64, kind: &'static str },
}
