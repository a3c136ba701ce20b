// MessagePack format codes.
//
// Only the families this crate reads (or must recognize in order to
// reject) are listed. Floats, booleans aside from the two singletons,
// arrays, bin and ext are not part of the decoded subset.

/// Largest positive fixint (`0xxxxxxx`).
pub const POSITIVE_FIXINT_MAX: u8 = 0x7f;

/// Base of the fixmap range. The low nibble holds the entry count.
pub const FIXMAP: u8 = 0x80;

/// Largest entry count a fixmap can embed.
pub const FIXMAP_MAX_SIZE: u8 = 0x0f;

/// Base of the fixstr range. The low five bits hold the byte length.
pub const FIXSTR: u8 = 0xa0;

/// Largest byte length a fixstr can embed.
pub const FIXSTR_MAX_SIZE: u8 = 0x1f;

pub const NIL: u8 = 0xc0;
pub const FALSE: u8 = 0xc2;
pub const TRUE: u8 = 0xc3;

pub const UINT8: u8 = 0xcc;
pub const UINT16: u8 = 0xcd;
pub const UINT32: u8 = 0xce;
pub const UINT64: u8 = 0xcf;

pub const INT8: u8 = 0xd0;
pub const INT16: u8 = 0xd1;
pub const INT32: u8 = 0xd2;
pub const INT64: u8 = 0xd3;

pub const STR8: u8 = 0xd9;
pub const STR16: u8 = 0xda;
pub const STR32: u8 = 0xdb;

pub const MAP16: u8 = 0xde;
pub const MAP32: u8 = 0xdf;

/// Smallest negative fixint (`111xxxxx`, i.e. -32).
pub const NEGATIVE_FIXINT_MIN: u8 = 0xe0;

/// Fixed read-size classes used by length prefixes and integer payloads.
///
/// ```text
/// ┌───────┬───────┬──────────────────────────────┐
/// │ Width │ Bytes │ Used by                      │
/// ├───────┼───────┼──────────────────────────────┤
/// │ One   │ 1     │ Int8, Uint8, Str8            │
/// │ Two   │ 2     │ Int16, Uint16, Str16, Map16  │
/// │ Four  │ 4     │ Int32, Uint32, Str32, Map32  │
/// │ Eight │ 8     │ Int64, Uint64                │
/// └───────┴───────┴──────────────────────────────┘
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Width {
    One = 1,
    Two = 2,
    Four = 4,
    Eight = 8,
}

impl Width {
    /// Number of bytes a read of this width consumes.
    pub fn bytes(self) -> usize {
        self as usize
    }
}

/// Returns `true` if `code` lies in the fixmap range `0x80..=0x8f`.
pub fn is_fixmap(code: u8) -> bool {
    (FIXMAP..=FIXMAP + FIXMAP_MAX_SIZE).contains(&code)
}

/// Returns `true` if `code` lies in the fixstr range `0xa0..=0xbf`.
pub fn is_fixstr(code: u8) -> bool {
    (FIXSTR..=FIXSTR + FIXSTR_MAX_SIZE).contains(&code)
}

/// Size embedded in the low bits of a compact code: `code - base`.
///
/// The caller must have checked range membership first.
pub fn embedded_size(code: u8, base: u8) -> usize {
    usize::from(code - base)
}

/// Classification of one leading format-code byte.
///
/// Every catalogued byte maps to exactly one variant. Compact forms carry
/// the value or size embedded in the code; prefixed forms carry the
/// [`Width`] of the bytes that follow.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FormatCode {
    PositiveFixInt(u8),
    FixMap(u8),
    FixStr(u8),
    Nil,
    False,
    True,
    Uint(Width),
    Int(Width),
    Str(Width),
    Map(Width),
    NegativeFixInt(i8),
}

impl FormatCode {
    /// Classify a leading byte.
    ///
    /// Returns `None` for codes outside the catalog (floats, arrays, bin,
    /// ext and the reserved `0xc1`).
    pub fn from_byte(code: u8) -> Option<Self> {
        let format = match code {
            0x00..=POSITIVE_FIXINT_MAX => Self::PositiveFixInt(code),
            c if is_fixmap(c) => Self::FixMap(c - FIXMAP),
            c if is_fixstr(c) => Self::FixStr(c - FIXSTR),
            NIL => Self::Nil,
            FALSE => Self::False,
            TRUE => Self::True,
            UINT8 => Self::Uint(Width::One),
            UINT16 => Self::Uint(Width::Two),
            UINT32 => Self::Uint(Width::Four),
            UINT64 => Self::Uint(Width::Eight),
            INT8 => Self::Int(Width::One),
            INT16 => Self::Int(Width::Two),
            INT32 => Self::Int(Width::Four),
            INT64 => Self::Int(Width::Eight),
            STR8 => Self::Str(Width::One),
            STR16 => Self::Str(Width::Two),
            STR32 => Self::Str(Width::Four),
            MAP16 => Self::Map(Width::Two),
            MAP32 => Self::Map(Width::Four),
            NEGATIVE_FIXINT_MIN..=0xff => Self::NegativeFixInt(i8::from_be_bytes([code])),
            _ => return None,
        };
        Some(format)
    }

    /// Short human-readable family name, used by diagnostics.
    pub fn family(self) -> &'static str {
        match self {
            Self::PositiveFixInt(_) => "positive fixint",
            Self::FixMap(_) => "fixmap",
            Self::FixStr(_) => "fixstr",
            Self::Nil => "nil",
            Self::False => "false",
            Self::True => "true",
            Self::Uint(_) => "uint",
            Self::Int(_) => "int",
            Self::Str(_) => "str",
            Self::Map(_) => "map",
            Self::NegativeFixInt(_) => "negative fixint",
        }
    }
}
