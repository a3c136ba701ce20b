use crate::error::TypeError;

/// Annotation value that excludes a field from decoding.
pub const SKIP_TAG: &str = "-";

/// One declared field of a record type, as the decoder sees it.
///
/// `name` is the declared field name. `tag` is the optional decode
/// annotation: a non-empty tag renames the encoded key, [`SKIP_TAG`]
/// excludes the field, and an empty tag falls back to `name`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FieldDef {
    pub name: &'static str,
    pub tag: Option<&'static str>,
}

impl FieldDef {
    pub const fn new(name: &'static str) -> Self {
        Self { name, tag: None }
    }

    pub const fn tagged(name: &'static str, tag: &'static str) -> Self {
        Self {
            name,
            tag: Some(tag),
        }
    }

    /// Exported fields are the ones whose name starts with an ASCII
    /// uppercase letter. Everything else is private to the type and is
    /// never populated from the wire.
    pub fn is_exported(&self) -> bool {
        self.name
            .as_bytes()
            .first()
            .is_some_and(u8::is_ascii_uppercase)
    }

    pub fn is_skipped(&self) -> bool {
        self.tag == Some(SKIP_TAG)
    }

    /// The key this field is matched against, or `None` if the field does
    /// not take part in decoding.
    pub fn key(&self) -> Option<&'static str> {
        if !self.is_exported() || self.is_skipped() {
            return None;
        }
        match self.tag {
            Some(tag) if !tag.is_empty() => Some(tag),
            _ => Some(self.name),
        }
    }
}

/// Mutable reference to a signed integer destination of any width.
#[derive(Debug)]
pub enum IntSlot<'a> {
    I8(&'a mut i8),
    I16(&'a mut i16),
    I32(&'a mut i32),
    I64(&'a mut i64),
    Isize(&'a mut isize),
}

fn narrow<T: TryFrom<i64>>(value: i64, kind: &'static str) -> Result<T, TypeError> {
    T::try_from(value).map_err(|_| TypeError::IntegerOverflow { value, kind })
}

impl IntSlot<'_> {
    pub fn kind(&self) -> &'static str {
        match self {
            Self::I8(_) => "i8",
            Self::I16(_) => "i16",
            Self::I32(_) => "i32",
            Self::I64(_) => "i64",
            Self::Isize(_) => "isize",
        }
    }

    /// Store a decoded `i64`, narrowing to the slot's width.
    ///
    /// # Errors
    ///
    /// [`TypeError::IntegerOverflow`] if `value` does not fit. The slot is
    /// left untouched in that case.
    pub fn assign(self, value: i64) -> Result<(), TypeError> {
        match self {
            Self::I8(slot) => *slot = narrow(value, "i8")?,
            Self::I16(slot) => *slot = narrow(value, "i16")?,
            Self::I32(slot) => *slot = narrow(value, "i32")?,
            Self::I64(slot) => *slot = value,
            Self::Isize(slot) => *slot = narrow(value, "isize")?,
        }
        Ok(())
    }
}

/// A destination location, tagged by the kind of value it can receive.
///
/// ```text
/// ┌─────────────┬──────────────────────┬────────────────────────────┐
/// │ Variant     │ Rust types           │ Wire value expected        │
/// ├─────────────┼──────────────────────┼────────────────────────────┤
/// │ Record      │ record! structs      │ map with string keys       │
/// │ Int         │ i8 i16 i32 i64 isize │ Int8..Int64 or nil         │
/// │ Str         │ String               │ fixstr, Str8..Str32 or nil │
/// │ Unsupported │ floats, bool, uints  │ none, always an error      │
/// └─────────────┴──────────────────────┴────────────────────────────┘
/// ```
///
/// `Unsupported` carries no reference, so a destination of an unsupported
/// kind can never be written through it.
pub enum Slot<'a> {
    Record(&'a mut dyn Record),
    Int(IntSlot<'a>),
    Str(&'a mut String),
    Unsupported { kind: &'static str },
}

impl Slot<'_> {
    /// Name of the destination kind, for diagnostics.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Record(record) => record.type_name(),
            Self::Int(slot) => slot.kind(),
            Self::Str(_) => "String",
            Self::Unsupported { kind } => *kind,
        }
    }
}

/// A struct-like destination decoded from a map.
///
/// Implemented by the [`record!`](crate::record) macro. `fields` lists
/// every declared field in declaration order; `field_slot(i)` hands out
/// the slot for `fields()[i]`.
pub trait Record {
    fn type_name(&self) -> &'static str;

    fn fields(&self) -> &'static [FieldDef];

    /// Mutable slot for the field at `index`, or `None` if the record
    /// cannot provide one.
    fn field_slot(&mut self, index: usize) -> Option<Slot<'_>>;
}

/// Any type the decoder can write into.
pub trait Destination {
    fn slot(&mut self) -> Slot<'_>;
}

macro_rules! int_destination {
    ($($ty:ty => $variant:ident),+ $(,)?) => {
        $(
            impl Destination for $ty {
                fn slot(&mut self) -> Slot<'_> {
                    Slot::Int(IntSlot::$variant(self))
                }
            }
        )+
    };
}

macro_rules! unsupported_destination {
    ($($ty:ty),+ $(,)?) => {
        $(
            impl Destination for $ty {
                fn slot(&mut self) -> Slot<'_> {
                    Slot::Unsupported { kind: stringify!($ty) }
                }
            }
        )+
    };
}

int_destination! {
    i8 => I8,
    i16 => I16,
    i32 => I32,
    i64 => I64,
    isize => Isize,
}

unsupported_destination!(i128, u8, u16, u32, u64, u128, usize, f32, f64, bool, char, ());

impl<T> Destination for Option<T> {
    fn slot(&mut self) -> Slot<'_> {
        Slot::Unsupported { kind: "Option" }
    }
}

impl<T> Destination for Vec<T> {
    fn slot(&mut self) -> Slot<'_> {
        Slot::Unsupported { kind: "Vec" }
    }
}

impl<T, const N: usize> Destination for [T; N] {
    fn slot(&mut self) -> Slot<'_> {
        Slot::Unsupported { kind: "array" }
    }
}

/// A boxed destination decodes like its contents, which lets a record
/// hold itself.
impl<T: Destination + ?Sized> Destination for Box<T> {
    fn slot(&mut self) -> Slot<'_> {
        (**self).slot()
    }
}

impl Destination for String {
    fn slot(&mut self) -> Slot<'_> {
        Slot::Str(self)
    }
}
