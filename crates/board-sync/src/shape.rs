//! Response Shape Policy
//!
//! The API wraps collections differently depending on the endpoint and server
//! version. Each known wrapper is one entry in `COLLECTION_SHAPES`; the first
//! entry that finds an array wins.

use serde_json::Value;

/// One known wrapper around a named collection
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum CollectionShape {
    /// `{ "_embedded": { key: [...] } }`
    Embedded,
    /// `{ "data": { "_embedded": { key: [...] } } }`
    DataEmbedded,
    /// `{ key: [...] }`
    Keyed,
    /// `{ "data": { key: [...] } }`
    DataKeyed,
    /// `[...]`
    Bare,
    /// `{ "data": [...] }`
    DataBare,
}

/// Priority order in which wrappers are tried
pub const COLLECTION_SHAPES: [CollectionShape; 6] = [
    CollectionShape::Embedded,
    CollectionShape::DataEmbedded,
    CollectionShape::Keyed,
    CollectionShape::DataKeyed,
    CollectionShape::Bare,
    CollectionShape::DataBare,
];

impl CollectionShape {
    pub fn extract<'a>(&self, body: &'a Value, key: &str) -> Option<&'a [Value]> {
        let found = match self {
            CollectionShape::Embedded => body.get("_embedded").and_then(|e| e.get(key)),
            CollectionShape::DataEmbedded => body
                .get("data")
                .and_then(|d| d.get("_embedded"))
                .and_then(|e| e.get(key)),
            CollectionShape::Keyed => body.get(key),
            CollectionShape::DataKeyed => body.get("data").and_then(|d| d.get(key)),
            CollectionShape::Bare => Some(body),
            CollectionShape::DataBare => body.get("data"),
        };
        found.and_then(Value::as_array).map(Vec::as_slice)
    }
}

/// Items of the collection named `key`, empty when no known shape matches
pub fn collection<'a>(body: &'a Value, key: &str) -> &'a [Value] {
    COLLECTION_SHAPES
        .iter()
        .find_map(|shape| shape.extract(body, key))
        .unwrap_or(&[])
}

/// First non-empty string among `fields`
pub fn first_text(raw: &Value, fields: &[&str]) -> Option<String> {
    fields.iter().find_map(|field| {
        raw.get(field)
            .and_then(Value::as_str)
            .filter(|s| !s.is_empty())
            .map(str::to_string)
    })
}

/// First non-empty string among `fields`, or `placeholder`
pub fn text_or(raw: &Value, fields: &[&str], placeholder: &str) -> String {
    first_text(raw, fields).unwrap_or_else(|| placeholder.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn titles(items: &[Value]) -> Vec<&str> {
        items.iter().filter_map(|i| i["title"].as_str()).collect()
    }

    #[test]
    fn test_every_shape_yields_same_items() {
        let items = json!([{ "title": "a" }, { "title": "b" }]);
        let shapes = [
            json!({ "_embedded": { "cards": items.clone() } }),
            json!({ "data": { "_embedded": { "cards": items.clone() } } }),
            json!({ "cards": items.clone() }),
            json!({ "data": { "cards": items.clone() } }),
            items.clone(),
            json!({ "data": items.clone() }),
        ];
        for body in &shapes {
            assert_eq!(titles(collection(body, "cards")), vec!["a", "b"], "shape {}", body);
        }
    }

    #[test]
    fn test_embedded_wins_over_flat() {
        let body = json!({
            "_embedded": { "tasks": [{ "title": "embedded" }] },
            "tasks": [{ "title": "flat" }]
        });
        assert_eq!(titles(collection(&body, "tasks")), vec!["embedded"]);
    }

    #[test]
    fn test_present_empty_array_stops_search() {
        let body = json!({ "_embedded": { "tasks": [] }, "tasks": [{ "title": "flat" }] });
        assert!(collection(&body, "tasks").is_empty());
    }

    #[test]
    fn test_unknown_shape_is_empty() {
        assert!(collection(&json!({ "items": [1, 2] }), "cards").is_empty());
        assert!(collection(&Value::Null, "cards").is_empty());
        assert!(collection(&json!({ "data": { "cards": "nope" } }), "cards").is_empty());
    }

    #[test]
    fn test_text_fallbacks() {
        assert_eq!(text_or(&json!({ "title": "T", "note": "N" }), &["title", "note"], "x"), "T");
        assert_eq!(text_or(&json!({ "title": "", "note": "N" }), &["title", "note"], "x"), "N");
        assert_eq!(text_or(&json!({ "title": null }), &["title", "note"], "Untitled"), "Untitled");
    }
}
