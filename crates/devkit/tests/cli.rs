//! The three tools driven end to end through their text entry points.

use devkit::cli::{diff_texts, diff_texts_json, format_text, parse_url_text};

const LEFT: &str = r#"{
  "name": "Product",
  "version": "1.0.0",
  "price": 99.99,
  "inStock": true,
  "tags": ["electronics", "gadget", "popular"],
  "details": {
    "manufacturer": "Sample Corp",
    "weight": "1.2kg"
  }
}"#;

const RIGHT: &str = r#"{
  "name": "Product",
  "version": "2.0.0",
  "price": 89.99,
  "inStock": false,
  "tags": ["electronics", "gadget", "premium"],
  "details": {
    "manufacturer": "Sample Corp",
    "weight": "1.1kg",
    "colors": ["black", "silver", "gold"]
  },
  "warranty": "2 years"
}"#;

#[test]
fn product_diff_listing() {
    let out = diff_texts(LEFT, RIGHT).unwrap();
    let lines: Vec<&str> = out.lines().collect();
    assert_eq!(
        lines,
        vec![
            "added    /details/colors",
            "changed  /details/weight",
            "changed  /inStock",
            "changed  /price",
            "changed  /tags/2",
            "changed  /version",
            "added    /warranty",
        ]
    );
}

#[test]
fn product_diff_trees_serialize() {
    let out = diff_texts_json(LEFT, RIGHT).unwrap();
    let v: serde_json::Value = serde_json::from_str(&out).unwrap();
    assert_eq!(v["left"]["tag"], "changed");
    assert_eq!(v["left"]["path"], serde_json::json!([]));
    // Object payloads serialize as ordered (key, node) entries.
    assert_eq!(v["right"]["value"]["object"][0][0], "name");
    assert_eq!(v["right"]["value"]["object"][0][1]["tag"], "identical");
}

#[test]
fn diff_then_format_pipeline() {
    // A formatted document diffs clean against its compact form.
    let pretty = format_text(RIGHT, "pretty").unwrap();
    let compact = format_text(RIGHT, "compact").unwrap();
    assert_eq!(diff_texts(&pretty, &compact).unwrap(), "documents are identical");
}

#[test]
fn url_of_the_sample_service() {
    let out =
        parse_url_text("https://api.example.com/v2/products/42?expand=reviews&expand=tags#top")
            .unwrap();
    assert!(out.contains("scheme    https"));
    assert!(out.contains("path[2]   42"));
    assert!(out.contains("query[0]  expand = reviews"));
    assert!(out.contains("query[1]  expand = tags"));
    assert!(out.contains("fragment  top"));
}
