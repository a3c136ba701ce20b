use jmp_types::{FieldMap, Record, Slot};
use jmp_wire::ByteCursor;
use jmp_wire::scalar;
use tracing::{debug, trace};

use crate::config::{DecoderConfig, UnknownKeys};
use crate::error::DecodeError;

/// Type-directed walk over one value.
///
/// The slot decides what is read next: a record reads a map, an integer
/// slot reads an integer, a string slot reads a string. The cursor is
/// shared by the whole walk, so after a value returns it sits exactly
/// where the next sibling starts.
pub(crate) struct Dispatcher<'a, 'c> {
    cursor: ByteCursor<'a>,
    config: &'c DecoderConfig,
    depth: usize,
}

impl<'a, 'c> Dispatcher<'a, 'c> {
    pub(crate) fn new(buf: &'a [u8], offset: usize, config: &'c DecoderConfig) -> Self {
        Self {
            cursor: ByteCursor::at(buf, offset),
            config,
            depth: 0,
        }
    }

    /// Offset just past everything decoded so far.
    pub(crate) fn offset(&self) -> usize {
        self.cursor.offset()
    }

    /// Decode one complete value into `slot`.
    pub(crate) fn value(&mut self, slot: Slot<'_>) -> Result<(), DecodeError> {
        match slot {
            Slot::Record(record) => self.record(record),
            Slot::Int(slot) => {
                let value = scalar::read_int(&mut self.cursor)?;
                slot.assign(value)?;
                Ok(())
            }
            Slot::Str(slot) => {
                let text = scalar::read_str(&mut self.cursor)?;
                slot.clear();
                slot.push_str(text);
                Ok(())
            }
            Slot::Unsupported { kind } => Err(DecodeError::UnsupportedType { kind }),
        }
    }

    fn record(&mut self, record: &mut dyn Record) -> Result<(), DecodeError> {
        let type_name = record.type_name();
        let start = self.cursor.offset();
        if self.depth >= self.config.max_depth {
            return Err(DecodeError::DepthLimitExceeded {
                limit: self.config.max_depth,
                type_name,
                offset: start,
            });
        }

        let count = scalar::read_map_len(&mut self.cursor)?;
        let fields = FieldMap::resolve(record.fields());
        trace!(type_name, count, offset = start, fields = fields.len(), "record");

        self.depth += 1;
        let result = self.entries(record, &fields, count);
        self.depth -= 1;
        result
    }

    fn entries(
        &mut self,
        record: &mut dyn Record,
        fields: &FieldMap,
        count: usize,
    ) -> Result<(), DecodeError> {
        let type_name = record.type_name();
        let defs = record.fields();

        for _ in 0..count {
            let key_offset = self.cursor.offset();
            let key = scalar::read_str_bytes(&mut self.cursor)?;

            let Some(index) = fields.find(key, self.config.key_match) else {
                self.unmatched(type_name, key, key_offset)?;
                continue;
            };

            let field = defs[index].name;
            trace!(type_name, field, offset = key_offset, "field");
            let Some(slot) = record.field_slot(index) else {
                return Err(DecodeError::InvalidDestination {
                    type_name,
                    field,
                    index,
                });
            };
            self.value(slot)?;
        }
        Ok(())
    }

    fn unmatched(
        &mut self,
        type_name: &'static str,
        key: &[u8],
        offset: usize,
    ) -> Result<(), DecodeError> {
        match self.config.unknown_keys {
            UnknownKeys::Skip => {
                debug!(
                    type_name,
                    key = %String::from_utf8_lossy(key),
                    offset,
                    "skipping unmatched key"
                );
                let remaining_depth = self.config.max_depth.saturating_sub(self.depth);
                scalar::skip_value(&mut self.cursor, remaining_depth)?;
                Ok(())
            }
            UnknownKeys::Reject => Err(DecodeError::UnknownKey {
                type_name,
                key: String::from_utf8_lossy(key).into_owned(),
                offset,
            }),
        }
    }
}
