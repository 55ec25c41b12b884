//!
//! Unit tests
//!
use std::sync::Once;

static INIT: Once = Once::new();

pub fn setup() {
    // Init setup
    INIT.call_once(|| {
        let _ = env_logger::builder().is_test(true).try_init();
    });
}

use chrono::{TimeZone, Utc};
use serde_json::{json, Value};

use crate::node::Node;
use crate::path::FieldPath;
use crate::{flatten, merge, merge_into, Error, FieldUpdates};

fn node(value: Value) -> Node {
    value.into()
}

//
// Flatten
//

#[test]
fn test_flatten_skips_null_branches() {
    setup();

    let updates = flatten(&node(json!({
        "organisationInfo": {
            "companyName": null,
            "address": {
                "city": "Delhi",
                "state": null,
            },
        },
    })));

    assert_eq!(updates.len(), 1);
    assert_eq!(
        updates.get("organisationInfo.address.city"),
        Some(&node(json!("Delhi")))
    );
}

#[test]
fn test_flatten_emits_falsy_leaves() {
    setup();

    let updates = flatten(&node(json!({
        "yearsInBusiness": 0,
        "isFeatured": false,
        "notes": "",
    })));

    assert_eq!(updates.get("yearsInBusiness"), Some(&node(json!(0))));
    assert_eq!(updates.get("isFeatured"), Some(&node(json!(false))));
    assert_eq!(updates.get("notes"), Some(&node(json!(""))));
}

#[test]
fn test_flatten_treats_arrays_as_leaves() {
    setup();

    let updates = flatten(&node(json!({
        "tags": { "primary": ["tech", "media"] },
    })));

    assert_eq!(
        updates.get("tags.primary"),
        Some(&node(json!(["tech", "media"])))
    );
}

#[test]
fn test_flatten_treats_timestamps_as_leaves() {
    setup();

    let ts = Utc.with_ymd_and_hms(2024, 5, 17, 12, 30, 0).unwrap();
    let mut member = crate::Map::new();
    member.insert("approvedAt".into(), ts.into());

    let updates = flatten(&Node::Object(crate::Map::from([(
        "member".to_string(),
        member.into(),
    )])));

    assert_eq!(updates.get("member.approvedAt"), Some(&Node::Timestamp(ts)));
}

#[test]
fn test_flatten_empty_branches_contribute_nothing() {
    setup();

    // An object with no eligible children yields no key at all
    assert!(flatten(&node(json!({ "a": { "b": null } }))).is_empty());
    assert!(flatten(&node(json!({}))).is_empty());
}

#[test]
fn test_flatten_non_object_root() {
    setup();

    assert!(flatten(&node(json!(null))).is_empty());
    assert!(flatten(&node(json!(42))).is_empty());
    assert!(flatten(&node(json!([1, 2]))).is_empty());
}

//
// Merge
//

#[test]
fn test_merge_null_update_preserves_record() {
    setup();

    let existing = node(json!({ "company": "Acme Corp", "rating": 4 }));
    assert_eq!(merge(&existing, &Node::Null), existing);
}

#[test]
fn test_merge_partial_update() {
    setup();

    let existing = node(json!({
        "company": "Acme Corp",
        "website": "acme.com",
        "industry": "Tech",
    }));
    let update = node(json!({ "company": "Acme Inc", "industry": null }));

    assert_eq!(
        merge(&existing, &update),
        node(json!({
            "company": "Acme Inc",
            "website": "acme.com",
            "industry": "Tech",
        }))
    );
    // Inputs are left untouched
    assert_eq!(update.get("industry"), Some(&Node::Null));
}

#[test]
fn test_merge_falsy_values_overwrite() {
    setup();

    let existing = node(json!({ "yearsInBusiness": 10, "isFeatured": true }));
    let update = node(json!({ "yearsInBusiness": 0, "isFeatured": false }));

    assert_eq!(
        merge(&existing, &update),
        node(json!({ "yearsInBusiness": 0, "isFeatured": false }))
    );
}

#[test]
fn test_merge_replaces_arrays_wholesale() {
    setup();

    assert_eq!(
        merge(&node(json!({ "a": [1, 2] })), &node(json!({ "a": [3] }))),
        node(json!({ "a": [3] }))
    );
}

#[test]
fn test_merge_nested_objects() {
    setup();

    let existing = node(json!({
        "organisationInfo": {
            "companyName": "Acme Corp",
            "address": { "city": "Mumbai", "state": "MH" },
        },
    }));
    let update = node(json!({
        "organisationInfo": {
            "address": { "city": "Delhi", "state": null },
        },
    }));

    assert_eq!(
        merge(&existing, &update),
        node(json!({
            "organisationInfo": {
                "companyName": "Acme Corp",
                "address": { "city": "Delhi", "state": "MH" },
            },
        }))
    );
}

#[test]
fn test_merge_creates_missing_branches() {
    setup();

    // An absent existing branch merges against an empty object,
    // which also drops the update's null fields
    let mut doc = node(json!({ "company": "Acme Corp" }));
    merge_into(
        &mut doc,
        &node(json!({ "address": { "city": "Delhi", "state": null } })),
    );

    assert_eq!(
        doc,
        node(json!({
            "company": "Acme Corp",
            "address": { "city": "Delhi" },
        }))
    );
}

#[test]
fn test_merge_leaf_update_replaces_object() {
    setup();

    assert_eq!(
        merge(&node(json!({ "a": { "b": 1 } })), &node(json!({ "a": 2 }))),
        node(json!({ "a": 2 }))
    );
}

//
// Field updates
//

#[test]
fn test_apply_matches_merge() {
    setup();

    let existing = node(json!({
        "company": "Acme Corp",
        "organisationInfo": {
            "address": { "city": "Mumbai", "state": "MH" },
        },
    }));
    let update = node(json!({
        "isFeatured": false,
        "organisationInfo": {
            "address": { "city": "Delhi", "state": null },
        },
    }));

    let mut applied = existing.clone();
    flatten(&update).apply(&mut applied).unwrap();

    assert_eq!(applied, merge(&existing, &update));
}

#[test]
fn test_apply_creates_intermediate_objects() {
    setup();

    let mut updates = FieldUpdates::new();
    updates.insert("a.b.c".into(), node(json!(1)));

    // A non-object intermediate is replaced by a fresh object
    let mut doc = node(json!({ "a": "scalar" }));
    updates.apply(&mut doc).unwrap();

    assert_eq!(doc, node(json!({ "a": { "b": { "c": 1 } } })));
}

#[test]
fn test_field_updates_to_value() {
    setup();

    let updates = flatten(&node(json!({
        "organisationInfo": { "address": { "city": "Delhi" } },
        "company": "Acme Inc",
    })));

    assert_eq!(
        updates.to_value(),
        json!({
            "company": "Acme Inc",
            "organisationInfo.address.city": "Delhi",
        })
    );
}

//
// Paths
//

#[test]
fn test_field_path_parsing() {
    setup();

    let path: FieldPath = "organisationInfo.address.city".parse().unwrap();
    assert_eq!(path.segments().len(), 3);
    assert_eq!(format!("{}", path), "organisationInfo.address.city");

    assert!(matches!("".parse::<FieldPath>(), Err(Error::InvalidPath(_))));
    assert!(matches!(
        "a..b".parse::<FieldPath>(),
        Err(Error::InvalidPath(_))
    ));
    assert!(matches!(
        ".a".parse::<FieldPath>(),
        Err(Error::InvalidPath(_))
    ));
}

#[test]
fn test_field_path_child() {
    setup();

    let path = FieldPath::root("organisationInfo")
        .unwrap()
        .child("address")
        .child("city");
    assert_eq!(format!("{}", path), "organisationInfo.address.city");

    assert!(FieldPath::root("a.b").is_err());
}

//
// Node conversions
//

#[test]
fn test_node_json_roundtrip() {
    setup();

    let value = json!({
        "company": "Acme Corp",
        "rating": 4.5,
        "tags": ["tech", "media"],
        "active": true,
        "parent": null,
    });

    let restored: Value = Node::from(value.clone()).into();
    assert_eq!(restored, value);

    let parsed = Node::from_json_str(&value.to_string()).unwrap();
    assert_eq!(parsed, Node::from(value));

    assert!(Node::from_json_str("not json").is_err());
}

#[test]
fn test_timestamp_renders_as_rfc3339() {
    setup();

    let ts = Utc.with_ymd_and_hms(2024, 5, 17, 12, 30, 0).unwrap();
    assert_eq!(Value::from(Node::from(ts)), json!("2024-05-17T12:30:00+00:00"));
}
