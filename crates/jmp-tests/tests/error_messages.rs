//! Snapshot tests for user-facing error text and decoded values.
//!
//! Messages are part of the CLI output, so a wording change should show
//! up as a reviewed snapshot diff (`cargo insta review`).

use insta::{assert_debug_snapshot, assert_snapshot};
use jmp_decoder::{DecodeError, Decoder, DecoderConfig, UnknownKeys, decode, record};
use jmp_tests::{Payload, user_payload};

record! {
    #[derive(Debug, Default)]
    struct User {
        ID: i64,
        Name: String,
        ABCD: String,
    }
}

record! {
    #[derive(Debug, Default)]
    struct IdOnly {
        ID: i64,
    }
}

record! {
    #[derive(Debug, Default)]
    struct Inner {
        V: i8,
        Ratio: f64,
    }
}

record! {
    #[derive(Debug, Default)]
    struct Outer {
        Inner: Inner,
    }
}

fn err<T: jmp_decoder::Destination>(bytes: &[u8], dest: &mut T) -> DecodeError {
    decode(bytes, dest).unwrap_err()
}

#[test]
fn decoded_user() {
    let mut user = User::default();
    decode(&user_payload(), &mut user).unwrap();
    assert_debug_snapshot!(user, @r#"
    User {
        ID: 1,
        Name: "jimmy",
        ABCD: "abcd",
    }
    "#);
}

#[test]
fn empty_input_message() {
    assert_snapshot!(err(&[], &mut 0i64), @"input buffer is empty");
}

#[test]
fn short_buffer_message() {
    assert_snapshot!(
        err(&[0xd2, 0x00], &mut 0i64),
        @"short buffer: need 4 bytes at offset 1, 1 available"
    );
}

#[test]
fn unsupported_code_message() {
    let bytes = Payload::map(1).str("ID").raw(&[0xcc, 0x05]).finish();
    assert_snapshot!(
        err(&bytes, &mut IdOnly::default()),
        @"unsupported format code 0xcc at offset 4 while reading integer"
    );
}

#[test]
fn insufficient_map_data_message() {
    assert_snapshot!(
        err(&[0x83, 0xa1, b'a'], &mut User::default()),
        @"map of 3 entries at offset 0 needs at least 6 bytes, 2 remain"
    );
}

#[test]
fn size_mismatch_message() {
    let mut bytes = user_payload();
    bytes.push(0xc0);
    assert_snapshot!(
        err(&bytes, &mut User::default()),
        @"decoded value ends at offset 34 but buffer is 35 bytes"
    );
}

#[test]
fn invalid_utf8_message() {
    let bytes = Payload::map(1)
        .str("Name")
        .raw(&[0xa2, 0xff, 0xfe])
        .finish();
    assert_snapshot!(
        err(&bytes, &mut User::default()),
        @"invalid UTF-8 in string payload at offset 7"
    );
}

#[test]
fn integer_overflow_message() {
    let bytes = Payload::map(1)
        .str("Inner")
        .map_header(1)
        .str("V")
        .i16(300)
        .finish();
    assert_snapshot!(
        err(&bytes, &mut Outer::default()),
        @"integer 300 does not fit in i8"
    );
}

#[test]
fn unsupported_type_message() {
    let bytes = Payload::map(1)
        .str("Inner")
        .map_header(1)
        .str("Ratio")
        .f64(0.5)
        .finish();
    assert_snapshot!(
        err(&bytes, &mut Outer::default()),
        @"unsupported destination type f64"
    );
}

#[test]
fn unknown_key_message() {
    let decoder = Decoder::with_config(DecoderConfig {
        unknown_keys: UnknownKeys::Reject,
        ..DecoderConfig::default()
    });
    let e = decoder
        .decode(&user_payload(), &mut IdOnly::default())
        .unwrap_err();
    assert_snapshot!(e, @r#"unknown key "Name" for IdOnly at offset 13"#);
}

#[test]
fn depth_limit_message() {
    let decoder = Decoder::with_config(DecoderConfig {
        max_depth: 1,
        ..DecoderConfig::default()
    });
    let bytes = Payload::map(1)
        .str("Inner")
        .map_header(1)
        .str("V")
        .i8(1)
        .finish();
    let e = decoder.decode(&bytes, &mut Outer::default()).unwrap_err();
    assert_snapshot!(e, @"record nesting exceeds limit of 1 at Inner (offset 7)");
}
