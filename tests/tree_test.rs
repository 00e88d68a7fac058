//! Tests for TreeItem traversal, rendering and JSON shape

use serde_json::json;

use valkit::util::testing::init_test_setup;
use valkit::{Complex, Document, TreeDisplay, TreeItem};

fn org_chart() -> TreeItem<String> {
    let mut root = TreeItem::new("ceo".to_string());
    let cto = root.push("cto".to_string());
    cto.push("dev-1".to_string());
    cto.push("dev-2".to_string()).push("intern".to_string());
    root.push("cfo".to_string());
    root
}

#[test]
fn given_tree_when_measuring_then_depth_counts_levels() {
    init_test_setup();
    let tree = org_chart();
    assert_eq!(tree.depth(), 4);
    assert_eq!(tree.len(), 6);
    assert_eq!(TreeItem::new(()).depth(), 1);
}

#[test]
fn given_tree_when_collecting_leaves_then_left_to_right() {
    let tree = org_chart();
    let leaves: Vec<&str> = tree.leaves().into_iter().map(String::as_str).collect();
    assert_eq!(leaves, vec!["dev-1", "intern", "cfo"]);
}

#[test]
fn given_tree_when_finding_then_returns_subtree() {
    let tree = org_chart();
    let cto = tree.find(|name| name == "cto").unwrap();
    assert_eq!(cto.children.len(), 2);
    assert!(tree.find(|name| name == "coo").is_none());
}

#[test]
fn given_tree_when_mapping_then_keeps_shape() {
    let lengths = org_chart().map(|name| name.len());
    let order: Vec<usize> = lengths.iter().map(|n| n.item).collect();
    assert_eq!(order, vec![3, 3, 5, 5, 6, 3]);
    assert_eq!(lengths.depth(), 4);
}

#[test]
fn given_tree_item_when_dereferencing_then_reaches_payload() {
    let mut tree = TreeItem::new(String::from("root"));
    assert_eq!(tree.len(), 1);
    assert_eq!(tree.as_str(), "root");
    tree.push_str("-renamed");
    assert_eq!(tree.item, "root-renamed");
}

#[test]
fn given_display_payload_when_rendering_then_draws_tree() {
    let rendered = org_chart().to_tree_string().to_string();
    let lines: Vec<&str> = rendered.lines().collect();
    assert_eq!(lines[0], "ceo");
    assert_eq!(lines.len(), 6);
    assert!(rendered.contains("intern"));
}

#[test]
fn given_json_tree_when_deserializing_then_children_nest_and_fields_flatten() {
    let value = json!({
        "name": "root",
        "size": 3,
        "children": [
            { "name": "a", "children": [ { "name": "a1" } ] },
            { "name": "b" }
        ]
    });

    let tree: TreeItem<Document> = serde_json::from_value(value).unwrap();

    assert_eq!(tree.get("name"), Some(&Complex::from("root")));
    assert_eq!(tree.get("size"), Some(&Complex::from(3)));
    assert!(!tree.contains_key("children"));
    assert_eq!(tree.depth(), 3);
    assert_eq!(tree.children[1].children.len(), 0);
}

#[test]
fn given_document_tree_when_rendering_with_label_then_uses_field() {
    let value = json!({ "title": "top", "children": [ { "title": "leaf" }, {} ] });
    let tree: TreeItem<Document> = serde_json::from_value(value).unwrap();

    let rendered = tree
        .to_termtree(&|doc: &Document| {
            doc.get("title")
                .map(|t| t.to_string())
                .unwrap_or_else(|| "?".into())
        })
        .to_string();

    assert!(rendered.starts_with("top"));
    assert!(rendered.contains("leaf"));
    assert!(rendered.contains('?'));
}

#[test]
fn given_document_tree_when_serializing_then_children_array_present() {
    let mut doc = Document::new();
    doc.insert("name".into(), Complex::from("solo"));
    let tree = TreeItem::new(doc);

    let value = serde_json::to_value(&tree).unwrap();

    assert_eq!(value, json!({ "name": "solo", "children": [] }));
}
