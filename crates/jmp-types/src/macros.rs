// ── Macro for record boilerplate ──────────────────────────────────────
//
// Every decodable struct needs the same three pieces: the struct itself,
// a static field list for the resolver, and an index → slot accessor.
// The macro generates all three from one declaration so the field list
// and the accessor can never drift apart.

/// Declare a struct that decodes from a MessagePack map.
///
/// Each field may carry a decode annotation after its type:
///
/// - `Field: Type as "key"` matches the encoded key `"key"`.
/// - `Field: Type as "-"` never takes part in decoding.
///
/// Only fields whose name starts with an uppercase ASCII letter are
/// decoded; the struct is declared with `#[allow(non_snake_case)]` for
/// that reason.
///
/// ```rust
/// jmp_types::record! {
///     #[derive(Debug, Default, PartialEq)]
///     pub struct User {
///         pub ID: i64,
///         pub Name: String as "name",
///         pub Token: String as "-",
///         cache: String,
///     }
/// }
///
/// use jmp_types::Record;
/// let user = User::default();
/// let keys: Vec<_> = user.fields().iter().filter_map(|f| f.key()).collect();
/// assert_eq!(keys, ["ID", "name"]);
/// ```
#[macro_export]
macro_rules! record {
    (
        $(#[$meta:meta])*
        $vis:vis struct $name:ident {
            $(
                $(#[$fmeta:meta])*
                $fvis:vis $field:ident : $ty:ty $(as $tag:literal)?
            ),* $(,)?
        }
    ) => {
        $(#[$meta])*
        #[allow(non_snake_case)]
        $vis struct $name {
            $(
                $(#[$fmeta])*
                $fvis $field: $ty,
            )*
        }

        impl $crate::Record for $name {
            fn type_name(&self) -> &'static str {
                stringify!($name)
            }

            fn fields(&self) -> &'static [$crate::FieldDef] {
                const FIELDS: &[$crate::FieldDef] = &[
                    $( $crate::__field_def!($field $(, $tag)?) ),*
                ];
                FIELDS
            }

            #[allow(unused_mut, unused_assignments, unused_variables)]
            fn field_slot(&mut self, index: usize) -> Option<$crate::Slot<'_>> {
                let mut position = 0usize;
                $(
                    if index == position {
                        return Some($crate::Destination::slot(&mut self.$field));
                    }
                    position += 1;
                )*
                None
            }
        }

        impl $crate::Destination for $name {
            fn slot(&mut self) -> $crate::Slot<'_> {
                $crate::Slot::Record(self)
            }
        }
    };
}

#[doc(hidden)]
#[macro_export]
macro_rules! __field_def {
    ($field:ident) => {
        $crate::FieldDef::new(stringify!($field))
    };
    ($field:ident, $tag:literal) => {
        $crate::FieldDef::tagged(stringify!($field), $tag)
    };
}
