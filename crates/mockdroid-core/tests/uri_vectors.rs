//! Intent URI decode vector tests.

#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]
#![allow(clippy::panic)]

use std::fs;

use mockdroid_core::Intent;

mod vector_loader;
use vector_loader::TestVector;

fn load(name: &str) -> TestVector {
    let s = fs::read_to_string(format!("tests/vectors/{name}")).unwrap();
    serde_json::from_str(&s).unwrap()
}

#[test]
fn uri_vectors() {
    let files = [
        "plain_data.json",
        "full_fragment.json",
        "category_passthrough.json",
        "strict_plain.json",
        "strict_scheme_restore.json",
        "unknown_extra.json",
        "selector.json",
        "legacy_fragment.json",
        "truncated.json",
        "empty_fragment.json",
        "bad_launch_flags.json",
        "empty_char_extra.json",
    ];

    for f in files {
        let v = load(f);
        let res = Intent::parse_uri(&v.uri, v.flags);

        if let Some(err) = v.expect_error {
            let e = res.expect_err("expected error");
            assert_eq!(e.code().as_str(), err.code, "vector={}", v.description);
            continue;
        }

        let intent = res.expect("expected ok intent");
        let ex = v.expect.expect("missing expect block");

        assert_eq!(intent.action(), ex["action"].as_str(), "vector={}", v.description);
        assert_eq!(
            intent.data().map(|d| d.as_str()),
            ex["data"].as_str(),
            "vector={}",
            v.description
        );
        assert_eq!(intent.mime_type(), ex["type"].as_str(), "vector={}", v.description);
        assert_eq!(
            u64::from(intent.flags()),
            ex.get("flags").and_then(|f| f.as_u64()).unwrap_or(0),
            "vector={}",
            v.description
        );
        assert_eq!(
            intent.component().map(|c| c.flatten_to_string()),
            ex["component"].as_str().map(str::to_string),
            "vector={}",
            v.description
        );

        if let Some(cats) = ex.get("categories").and_then(|c| c.as_array()) {
            let got: Vec<&str> = intent.categories().iter().map(String::as_str).collect();
            let want: Vec<&str> = cats.iter().filter_map(|c| c.as_str()).collect();
            assert_eq!(got, want, "vector={}", v.description);
        }

        let extras = ex.get("extras").and_then(|e| e.as_object());
        let want_len = extras.map_or(0, |m| m.len());
        assert_eq!(intent.extras().len(), want_len, "vector={}", v.description);
        if let Some(extras) = extras {
            for (tagged_key, want) in extras {
                let (tag, key) = tagged_key.split_once('.').expect("tag.key in vector");
                let extra = intent
                    .extra(key)
                    .unwrap_or_else(|| panic!("missing extra {key} in vector={}", v.description));
                assert_eq!(
                    extra.uri_tag().map(String::from),
                    Some(tag.to_string()),
                    "vector={}",
                    v.description
                );
                assert_eq!(
                    extra.encode_value(),
                    want.as_str().unwrap(),
                    "vector={}",
                    v.description
                );
            }
        }
    }
}
