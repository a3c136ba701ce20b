#![no_main]

use jmp_decoder::{DEFAULT_MAX_DEPTH, Decoder};
use jmp_wire::{ByteCursor, scalar};
use libfuzzer_sys::fuzz_target;

jmp_types::record! {
    #[derive(Default)]
    pub struct Empty {}
}

// Fuzz target: scalar::skip_value against the decoder.
//
// A record with no fields skips every entry of its map, so whenever the
// decoder accepts a prefix of the input, skip_value must accept the same
// prefix and stop at the same offset.
fuzz_target!(|data: &[u8]| {
    let mut cursor = ByteCursor::new(data);
    let skipped = scalar::skip_value(&mut cursor, DEFAULT_MAX_DEPTH).map(|()| cursor.offset());

    if let Ok(end) = Decoder::new().decode_at(data, 0, &mut Empty::default()) {
        assert_eq!(skipped, Ok(end));
    }
});
