#![no_main]

use libfuzzer_sys::fuzz_target;

jmp_types::record! {
    #[derive(Default)]
    pub struct Inner {
        pub Code: i32,
        pub Label: String as "label",
    }
}

jmp_types::record! {
    #[derive(Default)]
    pub struct Outer {
        pub ID: i64,
        pub Name: String,
        pub Small: i8,
        pub Child: Inner,
        pub Hidden: String as "-",
    }
}

// Fuzz target: full decoder entry point into a nested record.
//
// Catches bugs in:
// - Map header pre-check (huge counts, truncated map16/map32)
// - Key matching and unknown-key skipping
// - Integer narrowing into i8/i32
// - UTF-8 validation of string payloads
// - Trailing data detection
fuzz_target!(|data: &[u8]| {
    let mut outer = Outer::default();
    let _ = jmp_decoder::decode(data, &mut outer);

    let mut int = 0i64;
    let _ = jmp_decoder::decode(data, &mut int);

    let mut text = String::new();
    let _ = jmp_decoder::decode(data, &mut text);
});
