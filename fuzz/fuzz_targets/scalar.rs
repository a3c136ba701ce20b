#![no_main]

use jmp_wire::{ByteCursor, scalar};
use libfuzzer_sys::fuzz_target;

// Fuzz target: individual scalar readers in jmp-wire.
//
// Input format:
//   byte 0:    selects the reader (mod 3)
//   bytes 1..: buffer handed to the reader, read repeatedly
//
// Every successful read must advance the cursor and stay in bounds.
fuzz_target!(|data: &[u8]| {
    let Some((&selector, buf)) = data.split_first() else {
        return;
    };

    let mut cursor = ByteCursor::new(buf);
    while !cursor.is_at_end() {
        let before = cursor.offset();
        let result = match selector % 3 {
            0 => scalar::read_int(&mut cursor).map(drop),
            1 => scalar::read_str(&mut cursor).map(drop),
            _ => scalar::read_map_len(&mut cursor).map(drop),
        };
        if result.is_err() {
            break;
        }
        assert!(cursor.offset() > before);
        assert!(cursor.offset() <= buf.len());
    }
});
