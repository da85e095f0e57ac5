//! Deep-merge behaviour over YAML-described attribute trees.
//!
//! Each `#[case]` parses its own fixtures; no shared state.

use metatag_core::{merge_trees, AttributeTree, AttributeValue};
use rstest::rstest;

fn yaml(doc: &str) -> AttributeTree {
    AttributeTree::from_yaml_str(doc).unwrap_or_else(|e| panic!("fixture failed to parse: {e}"))
}

// ---------------------------------------------------------------------------
// Parameterised merge cases
// ---------------------------------------------------------------------------

#[rstest]
#[case("scalar_overwrite", "a: '1'", "a: '2'", "a: '2'")]
#[case("disjoint_keys", "a: x", "b: y", "a: x\nb: y")]
#[case(
    "nested_accumulate",
    "og:\n  title: T",
    "og:\n  desc: D",
    "og:\n  title: T\n  desc: D"
)]
#[case(
    "nested_collision",
    "og:\n  title: Old\n  type: website",
    "og:\n  title: New",
    "og:\n  title: New\n  type: website"
)]
#[case("list_replaced", "tag: [a, b, c]", "tag: [d]", "tag: [d]")]
#[case("list_replaces_map", "og:\n  title: T", "og: [x]", "og: [x]")]
#[case("map_replaces_list", "og: [x]", "og:\n  title: T", "og:\n  title: T")]
#[case("null_overwrites", "description: text", "description: ~", "description: ~")]
#[case(
    "three_levels",
    "og:\n  image:\n    url: a.png\n    width: '10'",
    "og:\n  image:\n    width: '20'\n    height: '5'",
    "og:\n  image:\n    url: a.png\n    width: '20'\n    height: '5'"
)]
fn merge_case(
    #[case] label: &str,
    #[case] base: &str,
    #[case] overlay: &str,
    #[case] expected: &str,
) {
    let merged = merge_trees(yaml(base), yaml(overlay));
    assert_eq!(merged, yaml(expected), "[{label}] merged tree");
}

// ---------------------------------------------------------------------------
// Ordering
// ---------------------------------------------------------------------------

#[test]
fn base_order_wins_and_new_keys_append() {
    let merged = merge_trees(
        yaml("title: a\ndescription: b\nog:\n  title: c\n  type: d"),
        yaml("og:\n  url: e\n  title: f\nauthor: g\ntitle: h"),
    );
    assert_eq!(merged.keys().collect::<Vec<_>>(), vec!["title", "description", "og", "author"]);
    let og = merged.get("og").and_then(AttributeValue::as_map).expect("og mapping");
    assert_eq!(og.keys().collect::<Vec<_>>(), vec!["title", "type", "url"]);
    assert_eq!(og.get("title").and_then(AttributeValue::as_str), Some("f"));
}

#[test]
fn merging_empty_overlay_is_identity() {
    let base = yaml("a: x\nog:\n  title: T");
    assert_eq!(merge_trees(base.clone(), AttributeTree::new()), base);
    assert_eq!(merge_trees(AttributeTree::new(), base.clone()), base);
}

#[test]
fn yaml_and_json_describe_the_same_tree() {
    let from_yaml = yaml("og:\n  title: T\n  image: [a.png, b.png]\nkeywords: ~");
    let from_json = AttributeTree::from_json_str(
        r#"{"og": {"title": "T", "image": ["a.png", "b.png"]}, "keywords": null}"#,
    )
    .expect("json");
    assert_eq!(from_yaml, from_json);
}
