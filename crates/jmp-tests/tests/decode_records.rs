//! Decode payloads produced by an independent encoder.
//!
//! Integers are written with `rmp::encode` explicit-width markers through
//! [`Payload`]; string-only structs go through `rmp_serde::to_vec_named`,
//! which is how most producers in the wild emit maps with string keys.

use jmp_decoder::{Decoder, DecoderConfig, KeyMatch, decode, record};
use jmp_tests::{Payload, user_payload};
use serde::Serialize;

record! {
    #[derive(Debug, Default, PartialEq)]
    struct User {
        ID: i64,
        Name: String,
        ABCD: String,
    }
}

record! {
    #[derive(Debug, Default, PartialEq)]
    struct ContactRecord {
        Email: String,
        Phone: String,
    }
}

record! {
    #[derive(Debug, Default, PartialEq)]
    struct Profile {
        Label: String,
        Contact: ContactRecord,
    }
}

record! {
    #[derive(Debug, Default, PartialEq)]
    struct Widths {
        A: i8,
        B: i16,
        C: i32,
        D: i64,
        E: isize,
    }
}

#[derive(Serialize)]
#[serde(rename_all = "PascalCase")]
struct Contact {
    email: String,
    phone: String,
}

#[derive(Serialize)]
#[serde(rename_all = "PascalCase")]
struct ProfileDoc {
    label: String,
    contact: Contact,
}

fn contact() -> Contact {
    Contact {
        email: "jimmy@example.com".into(),
        phone: "555-0100".into(),
    }
}

// ── Records ───────────────────────────────────────────────────────────────────

#[test]
fn user_example_decodes_every_field() {
    let mut user = User::default();
    decode(&user_payload(), &mut user).unwrap();
    assert_eq!(
        user,
        User {
            ID: 1,
            Name: "jimmy".into(),
            ABCD: "abcd".into(),
        }
    );
}

#[test]
fn legacy_length_matching_routes_same_length_keys_to_first_field() {
    let decoder = Decoder::with_config(DecoderConfig {
        key_match: KeyMatch::ByteLength,
        ..DecoderConfig::default()
    });

    let mut user = User::default();
    decoder.decode(&user_payload(), &mut user).unwrap();

    // "Name" and "ABCD" are both 4 bytes; both land in Name, last wins.
    assert_eq!(user.ID, 1);
    assert_eq!(user.Name, "abcd");
    assert_eq!(user.ABCD, "");
}

#[test]
fn serde_encoded_struct() {
    let bytes = rmp_serde::to_vec_named(&contact()).unwrap();

    let mut record = ContactRecord::default();
    decode(&bytes, &mut record).unwrap();
    assert_eq!(record.Email, "jimmy@example.com");
    assert_eq!(record.Phone, "555-0100");
}

#[test]
fn serde_encoded_nested_struct() {
    let doc = ProfileDoc {
        label: "primary".into(),
        contact: contact(),
    };
    let bytes = rmp_serde::to_vec_named(&doc).unwrap();

    let mut profile = Profile::default();
    decode(&bytes, &mut profile).unwrap();
    assert_eq!(profile.Label, "primary");
    assert_eq!(profile.Contact.Email, "jimmy@example.com");
    assert_eq!(profile.Contact.Phone, "555-0100");
}

#[test]
fn missing_keys_leave_fields_at_zero() {
    let bytes = Payload::map(1).str("ID").i64(42).finish();

    let mut user = User::default();
    decode(&bytes, &mut user).unwrap();
    assert_eq!(user.ID, 42);
    assert_eq!(user.Name, "");
    assert_eq!(user.ABCD, "");
}

#[test]
fn nil_resets_fields_to_zero() {
    let bytes = Payload::map(2).str("ID").nil().str("Name").nil().finish();

    let mut user = User {
        ID: 7,
        Name: "stale".into(),
        ABCD: "kept".into(),
    };
    decode(&bytes, &mut user).unwrap();
    assert_eq!(user.ID, 0);
    assert_eq!(user.Name, "");
    assert_eq!(user.ABCD, "kept");
}

#[test]
fn unknown_keys_are_skipped_including_nested_maps() {
    let bytes = Payload::map(3)
        .str("ID")
        .i32(9)
        .str("Extra")
        .map_header(1)
        .str("Deep")
        .map_header(2)
        .str("x")
        .i8(1)
        .str("y")
        .str("why")
        .str("Name")
        .str("after")
        .finish();

    let mut user = User::default();
    decode(&bytes, &mut user).unwrap();
    assert_eq!(user.ID, 9);
    assert_eq!(user.Name, "after");
}

#[test]
fn map16_header_is_accepted() {
    let mut payload = Payload::map(20);
    for i in 0..19 {
        payload = payload.str(&format!("Unused{i}")).nil();
    }
    let bytes = payload.str("ID").i16(-2).finish();
    assert_eq!(bytes[0], 0xde);

    let mut user = User::default();
    decode(&bytes, &mut user).unwrap();
    assert_eq!(user.ID, -2);
}

// ── Integers ──────────────────────────────────────────────────────────────────

#[test]
fn every_integer_width_sign_extends() {
    let bytes = Payload::map(5)
        .str("A")
        .i8(-5)
        .str("B")
        .i16(-300)
        .str("C")
        .i32(70_000)
        .str("D")
        .i64(i64::MIN)
        .str("E")
        .i32(-1)
        .finish();

    let mut widths = Widths::default();
    decode(&bytes, &mut widths).unwrap();
    assert_eq!(
        widths,
        Widths {
            A: -5,
            B: -300,
            C: 70_000,
            D: i64::MIN,
            E: -1,
        }
    );
}

#[test]
fn wide_encoding_into_narrow_field_when_value_fits() {
    let bytes = Payload::map(1).str("A").i64(-128).finish();

    let mut widths = Widths::default();
    decode(&bytes, &mut widths).unwrap();
    assert_eq!(widths.A, -128);
}

#[test]
fn top_level_integer() {
    let mut value = 0i32;
    let bytes = Payload::new().i32(-123_456).finish();
    decode(&bytes, &mut value).unwrap();
    assert_eq!(value, -123_456);
}

// ── Strings ───────────────────────────────────────────────────────────────────

#[test]
fn string_length_codes() {
    let cases = [
        (0, 0xa0),
        (31, 0xbf),
        (32, 0xd9),
        (255, 0xd9),
        (256, 0xda),
        (65_536, 0xdb),
    ];
    for (len, code) in cases {
        let text = "x".repeat(len);
        let bytes = Payload::new().str(&text).finish();
        assert_eq!(bytes[0], code, "length {len}");

        let mut decoded = String::from("previous");
        decode(&bytes, &mut decoded).unwrap();
        assert_eq!(decoded.len(), len);
    }
}

#[test]
fn multibyte_utf8_string() {
    let bytes = Payload::new().str("héllo wörld ✓").finish();
    let mut decoded = String::new();
    decode(&bytes, &mut decoded).unwrap();
    assert_eq!(decoded, "héllo wörld ✓");
}

// ── Streams ───────────────────────────────────────────────────────────────────

#[test]
fn decode_at_walks_concatenated_records() {
    let mut stream = user_payload();
    stream.extend(Payload::map(1).str("ID").i8(2).finish());

    let decoder = Decoder::new();
    let mut first = User::default();
    let next = decoder.decode_at(&stream, 0, &mut first).unwrap();
    assert_eq!(next, user_payload().len());

    let mut second = User::default();
    let end = decoder.decode_at(&stream, next, &mut second).unwrap();
    assert_eq!(end, stream.len());

    assert_eq!(first.Name, "jimmy");
    assert_eq!(second.ID, 2);
}
