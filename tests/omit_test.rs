//! Tests for without_props and the Omit trait

use std::collections::HashMap;

use valkit::{without_props, Complex, Document, Omit};

fn abc() -> Document {
    [("a", 1), ("b", 2), ("c", 3)]
        .into_iter()
        .map(|(k, v)| (k.to_string(), Complex::from(v)))
        .collect()
}

#[test]
fn given_record_when_omitting_one_key_then_removes_only_that_key() {
    let doc = abc();

    let rest = without_props(&doc, &["b"]);

    let expected: Document = [("a", 1), ("c", 3)]
        .into_iter()
        .map(|(k, v)| (k.to_string(), Complex::from(v)))
        .collect();
    assert_eq!(rest, expected);
}

#[test]
fn given_record_when_omitting_then_original_unchanged() {
    let doc = abc();

    let _ = without_props(&doc, &["a", "c"]);

    assert_eq!(doc, abc());
}

#[test]
fn given_absent_keys_when_omitting_then_ignored() {
    let doc = abc();

    let rest = without_props(&doc, &["x", "b", "y"]);

    assert_eq!(rest.keys().collect::<Vec<_>>(), vec!["a", "c"]);
}

#[test]
fn given_no_keys_when_omitting_then_returns_equal_copy() {
    let doc = abc();
    let none: [&str; 0] = [];

    assert_eq!(without_props(&doc, &none), doc);
}

#[test]
fn given_nested_record_when_omitting_then_retained_values_unchanged() {
    let mut doc = abc();
    let mut inner = Document::new();
    inner.insert("b".into(), Complex::from("kept"));
    doc.insert("inner".into(), Complex::Record(inner.clone()));

    let rest = without_props(&doc, &[String::from("b")]);

    // shallow: nested keys with the same name survive
    assert_eq!(rest.get("inner"), Some(&Complex::Record(inner)));
    assert!(!rest.contains_key("b"));
}

#[test]
fn given_hash_map_when_omitting_then_removes_keys() {
    let map: HashMap<String, u32> = [("x".to_string(), 1), ("y".to_string(), 2)].into();

    let rest = map.without_props(&["y"]);

    assert_eq!(rest.len(), 1);
    assert_eq!(rest.get("x"), Some(&1));
    assert_eq!(map.len(), 2);
}
