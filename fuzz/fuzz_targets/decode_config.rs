#![no_main]

use arbitrary::Arbitrary;
use jmp_decoder::{Decoder, DecoderConfig, KeyMatch, UnknownKeys};
use libfuzzer_sys::fuzz_target;

jmp_types::record! {
    #[derive(Default)]
    pub struct Leaf {
        pub A: i16,
        pub AB: String,
    }
}

jmp_types::record! {
    #[derive(Default)]
    pub struct Node {
        pub ID: i64,
        pub Left: Leaf,
        pub Right: Leaf,
    }
}

#[derive(Debug, Arbitrary)]
struct Input {
    legacy_keys: bool,
    reject_unknown: bool,
    max_depth: u8,
    data: Vec<u8>,
}

// Fuzz target: decoder under every configuration.
//
// Catches bugs in:
// - Depth accounting with small limits (including 0)
// - Byte-length key matching
// - Unknown-key rejection offsets
fuzz_target!(|input: Input| {
    let config = DecoderConfig {
        key_match: if input.legacy_keys {
            KeyMatch::ByteLength
        } else {
            KeyMatch::Exact
        },
        unknown_keys: if input.reject_unknown {
            UnknownKeys::Reject
        } else {
            UnknownKeys::Skip
        },
        max_depth: usize::from(input.max_depth),
    };

    let decoder = Decoder::with_config(config);
    let mut node = Node::default();
    if let Ok(end) = decoder.decode_at(&input.data, 0, &mut node) {
        assert!(end <= input.data.len());
    }
});
