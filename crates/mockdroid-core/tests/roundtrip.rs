//! Encode/decode round-trip tests for the intent URI codec.

#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]
#![allow(clippy::panic)]

use bytes::Bytes;

use mockdroid_core::{Intent, Locator, URI_INTENT_SCHEME};

#[derive(Debug, Clone, PartialEq)]
struct Profile {
    name: String,
    score: i32,
}

#[test]
fn all_scalar_kinds_round_trip() {
    let mut intent = Intent::new();
    intent
        .set_action("com.example.app.EDIT")
        .set_mime_type("text/plain")
        .set_flags(0x1040)
        .set_class_name("com.example.app", "com.example.app.EditorActivity")
        .set_data(Locator::parse("content://notes/17").unwrap());
    intent
        .put_extra("title", "draft & notes")
        .put_extra("dirty", true)
        .put_extra("revision", 3i8)
        .put_extra("grade", 'A')
        .put_extra("ratio", 0.25f64)
        .put_extra("scale", 1.5f32)
        .put_extra("count", 42i32)
        .put_extra("stamp", 1_700_000_000_000i64)
        .put_extra("port", 8080i16);

    let uri = intent.to_uri(0);
    let decoded = Intent::parse_uri(&uri, 0).unwrap();

    assert_eq!(decoded, intent);
    assert_eq!(decoded.string_extra("title"), Some("draft & notes"));
    assert!(decoded.bool_extra("dirty", false));
    assert_eq!(decoded.byte_extra("revision", 0), 3);
    assert_eq!(decoded.char_extra("grade", ' '), 'A');
    assert_eq!(decoded.double_extra("ratio", 0.0), 0.25);
    assert_eq!(decoded.float_extra("scale", 0.0), 1.5);
    assert_eq!(decoded.int_extra("count", 0), 42);
    assert_eq!(decoded.long_extra("stamp", 0), 1_700_000_000_000);
    assert_eq!(decoded.short_extra("port", 0), 8080);
    assert_eq!(decoded.flags(), 0x1040);
}

#[test]
fn strict_scheme_round_trip_restores_locator() {
    let mut intent = Intent::new();
    intent
        .set_action("com.example.app.VIEW_PERSON")
        .set_data(Locator::parse("content://people/1").unwrap());

    let uri = intent.to_uri(URI_INTENT_SCHEME);
    assert!(uri.starts_with("intent:"));
    assert!(uri.contains("scheme=content;"));

    let decoded = Intent::parse_uri(&uri, URI_INTENT_SCHEME).unwrap();
    assert_eq!(decoded.data().map(|d| d.as_str()), Some("content://people/1"));
    assert_eq!(decoded.action(), Some("com.example.app.VIEW_PERSON"));
}

#[test]
fn strict_scheme_without_data_still_emits_prefix() {
    let mut intent = Intent::new();
    intent.set_action("com.example.app.MAIN");

    let uri = intent.to_uri(URI_INTENT_SCHEME);
    assert!(uri.starts_with("intent:#Intent;"));
}

#[test]
fn component_survives_abbreviated_encode() {
    let mut intent = Intent::new();
    intent
        .set_action("a")
        .set_class_name("com.foo", "com.foo.Bar");

    let uri = intent.to_uri(0);
    // Abbreviated on the wire, expanded on the way back.
    assert!(uri.contains("component=com.foo/.Bar;"));

    let decoded = Intent::parse_uri(&uri, 0).unwrap();
    let component = decoded.component().unwrap();
    assert_eq!(component.package(), "com.foo");
    assert_eq!(component.class(), "com.foo.Bar");
}

#[test]
fn unparsable_component_field_clears_component() {
    let decoded = Intent::parse_uri("#Intent;component=noslash;end", 0).unwrap();
    assert!(decoded.component().is_none());
}

#[test]
fn blob_extra_is_skipped_on_encode() {
    let mut intent = Intent::new();
    intent
        .set_action("a")
        .put_extra("payload", Bytes::from_static(b"\x00\x01\x02"))
        .put_extra("label", "kept");

    let uri = intent.to_uri(0);
    assert!(!uri.contains("payload"));

    let decoded = Intent::parse_uri(&uri, 0).unwrap();
    assert!(decoded.blob_extra("payload").is_none());
    assert_eq!(decoded.string_extra("label"), Some("kept"));
}

#[test]
fn structured_extra_is_skipped_on_encode() {
    let profile = Profile {
        name: "ada".to_string(),
        score: 9,
    };
    let mut intent = Intent::new();
    intent.set_action("a").put_structured("profile", &profile);

    let uri = intent.to_uri(0);
    assert!(!uri.contains("profile"));
    assert!(Intent::parse_uri(&uri, 0).unwrap().extras().is_empty());
}

#[test]
fn structured_extra_is_deep_copied_at_insertion() {
    let mut profile = Profile {
        name: "ada".to_string(),
        score: 9,
    };
    let mut intent = Intent::new();
    intent.put_structured("profile", &profile);

    profile.name = "mutated".to_string();
    profile.score = -1;

    let stored = intent.structured_extra::<Profile>("profile").unwrap();
    assert_eq!(stored.name, "ada");
    assert_eq!(stored.score, 9);
}

#[test]
fn cloned_intent_shares_no_structured_state() {
    let profile = Profile {
        name: "ada".to_string(),
        score: 9,
    };
    let mut intent = Intent::new();
    intent.put_structured("profile", &profile);

    let copy = intent.clone();
    assert_eq!(copy, intent);

    intent.put_structured(
        "profile",
        &Profile {
            name: "replaced".to_string(),
            score: 0,
        },
    );
    assert_eq!(copy.structured_extra::<Profile>("profile").unwrap().name, "ada");
}

#[test]
fn bulk_extras_copy_is_independent() {
    let mut src = Intent::new();
    src.put_extra("count", 1i32);
    let mut dst = Intent::new();
    dst.put_extras(&src);

    src.put_extra("count", 2i32);
    assert_eq!(dst.int_extra("count", 0), 1);
}

#[test]
fn boolean_extras_parse_like_the_platform() {
    let decoded = Intent::parse_uri("#Intent;B.yes=TRUE;B.no=nope;end", 0).unwrap();
    assert!(decoded.bool_extra("yes", false));
    assert!(!decoded.bool_extra("no", true));
}

#[test]
fn launch_flags_accept_decimal_and_hash_hex() {
    let decoded = Intent::parse_uri("#Intent;launchFlags=16;end", 0).unwrap();
    assert_eq!(decoded.flags(), 16);

    let decoded = Intent::parse_uri("#Intent;launchFlags=%2310;end", 0).unwrap();
    assert_eq!(decoded.flags(), 0x10);
}

#[test]
fn launch_flags_reject_negative_literals() {
    let err = Intent::parse_uri("#Intent;launchFlags=-1;end", 0).unwrap_err();
    assert_eq!(err.code().as_str(), "MALFORMED_URI");
}

#[test]
fn keys_and_values_are_percent_escaped() {
    let mut intent = Intent::new();
    intent.set_action("a").put_extra("the key", "a;b=c#d");

    let uri = intent.to_uri(0);
    assert!(uri.contains("S.the%20key=a%3Bb%3Dc%23d;"));

    let decoded = Intent::parse_uri(&uri, 0).unwrap();
    assert_eq!(decoded.string_extra("the key"), Some("a;b=c#d"));
}
