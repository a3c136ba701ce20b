use crate::schema::FieldDef;

/// How an encoded map key is matched against a record's field keys.
///
/// ```text
/// ┌────────────┬──────────────────────────────────────────────────────┐
/// │ Mode       │ A field matches when                                 │
/// ├────────────┼──────────────────────────────────────────────────────┤
/// │ Exact      │ its key bytes equal the encoded key bytes            │
/// │ ByteLength │ its key has the same byte length as the encoded key  │
/// └────────────┴──────────────────────────────────────────────────────┘
/// ```
///
/// `ByteLength` reproduces the legacy matcher byte for byte. It confuses
/// distinct fields whose keys have equal length (`"ID"` vs `"Id"`), so it
/// is opt-in.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum KeyMatch {
    #[default]
    Exact,
    ByteLength,
}

impl KeyMatch {
    fn matches(self, field_key: &str, encoded: &[u8]) -> bool {
        match self {
            Self::Exact => field_key.as_bytes() == encoded,
            Self::ByteLength => field_key.len() == encoded.len(),
        }
    }
}

/// A participating field: its effective key and its declared position.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FieldEntry {
    pub key: &'static str,
    pub index: usize,
}

/// Ordered map from effective key to declared field index.
///
/// Built from a record's [`FieldDef`] list every time a record is
/// decoded. Order follows declaration order, and lookups return the first
/// match in that order.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FieldMap {
    entries: Vec<FieldEntry>,
}

impl FieldMap {
    /// Collect the participating fields of `fields`.
    pub fn resolve(fields: &[FieldDef]) -> Self {
        let entries = fields
            .iter()
            .enumerate()
            .filter_map(|(index, def)| def.key().map(|key| FieldEntry { key, index }))
            .collect();
        Self { entries }
    }

    /// Declared index of the first field matching `encoded` under `mode`.
    pub fn find(&self, encoded: &[u8], mode: KeyMatch) -> Option<usize> {
        self.entries
            .iter()
            .find(|entry| mode.matches(entry.key, encoded))
            .map(|entry| entry.index)
    }

    pub fn entries(&self) -> &[FieldEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
