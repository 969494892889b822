//! Identity Resolver
//!
//! Extracts a stable id for a resource from whichever shape the API handed back:
//! a self link, a plain id field, or (last resort) a random token.

use rand::Rng;
use serde_json::Value;

/// Length of generated fallback ids
pub const TOKEN_LEN: usize = 7;

const TOKEN_CHARSET: &[u8] = b"0123456789abcdefghijklmnopqrstuvwxyz";

/// Where an id may be found, tried in declaration order
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum IdSource {
    /// Self link at a JSON pointer; the id is the segment after `/{plural}/`
    Link(&'static str),
    /// `Location` header of the response (same suffix rule as `Link`)
    Location,
    /// Plain id field at a JSON pointer (string or integer)
    Field(&'static str),
}

/// Ordered id policy for one resource type
#[derive(Debug, Clone, Copy)]
pub struct IdentityResolver {
    plural: &'static str,
    sources: &'static [IdSource],
}

/// Lists as returned by `GET /boards/{id}/cards`
pub const LIST_IDENTITY: IdentityResolver = IdentityResolver {
    plural: "cards",
    sources: &[IdSource::Link("/_links/self/href"), IdSource::Field("/id")],
};

/// Cards as returned by `GET /cards/{id}/tasks`
pub const CARD_IDENTITY: IdentityResolver = IdentityResolver {
    plural: "tasks",
    sources: &[IdSource::Link("/_links/self/href"), IdSource::Field("/id")],
};

/// Response of `POST /tasks`
pub const CREATED_CARD_IDENTITY: IdentityResolver = IdentityResolver {
    plural: "tasks",
    sources: &[
        IdSource::Link("/data/_links/self/href"),
        IdSource::Link("/_links/self/href"),
        IdSource::Location,
        IdSource::Field("/data/id"),
        IdSource::Field("/id"),
    ],
};

impl IdentityResolver {
    /// First id yielded by the declared sources, if any
    pub fn find(&self, body: &Value, location: Option<&str>) -> Option<String> {
        self.sources.iter().find_map(|source| match source {
            IdSource::Link(pointer) => body
                .pointer(pointer)
                .and_then(Value::as_str)
                .and_then(|href| link_suffix(href, self.plural)),
            IdSource::Location => location.and_then(|href| link_suffix(href, self.plural)),
            IdSource::Field(pointer) => body.pointer(pointer).and_then(id_value),
        })
    }

    /// Like `find`, falling back to a random token so the result is never empty
    pub fn resolve(&self, body: &Value, location: Option<&str>) -> String {
        self.find(body, location).unwrap_or_else(random_token)
    }
}

/// Segment following `/{plural}/` in a link, cut at the next `/`, `?` or `#`
pub fn link_suffix(href: &str, plural: &str) -> Option<String> {
    let marker = format!("/{}/", plural);
    let (_, rest) = href.split_once(&marker)?;
    let end = rest.find(['/', '?', '#']).unwrap_or(rest.len());
    let id = &rest[..end];
    (!id.is_empty()).then(|| id.to_string())
}

fn id_value(value: &Value) -> Option<String> {
    match value {
        Value::String(s) if !s.is_empty() => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}

/// Random lower-case alphanumeric id of `TOKEN_LEN` characters
pub fn random_token() -> String {
    let mut rng = rand::rng();
    (0..TOKEN_LEN)
        .map(|_| TOKEN_CHARSET[rng.random_range(0..TOKEN_CHARSET.len())] as char)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use std::collections::HashSet;
    use proptest::prelude::*;

    #[test]
    fn test_link_suffix() {
        assert_eq!(link_suffix("http://api/cards/42", "cards").as_deref(), Some("42"));
        assert_eq!(link_suffix("/api/tasks/9/card", "tasks").as_deref(), Some("9"));
        assert_eq!(link_suffix("/tasks/ab12?projection=x", "tasks").as_deref(), Some("ab12"));
        assert_eq!(link_suffix("/tasks/", "tasks"), None);
        assert_eq!(link_suffix("/boards/3", "cards"), None);
    }

    #[test]
    fn test_link_beats_id_field() {
        let raw = json!({ "id": 7, "_links": { "self": { "href": "/api/cards/12" } } });
        assert_eq!(LIST_IDENTITY.resolve(&raw, None), "12");
    }

    #[test]
    fn test_numeric_and_string_ids() {
        assert_eq!(LIST_IDENTITY.resolve(&json!({ "id": 7 }), None), "7");
        assert_eq!(CARD_IDENTITY.resolve(&json!({ "id": "t-1" }), None), "t-1");
    }

    #[test]
    fn test_empty_values_fall_through() {
        let raw = json!({ "id": "", "_links": { "self": { "href": "/api/cards/" } } });
        assert_eq!(LIST_IDENTITY.find(&raw, None), None);
        let token = LIST_IDENTITY.resolve(&raw, None);
        assert_eq!(token.len(), TOKEN_LEN);
        assert!(token.chars().all(|c| c.is_ascii_lowercase() || c.is_ascii_digit()));
    }

    #[test]
    fn test_created_card_order() {
        let body = json!({ "data": { "id": 5 }, "id": 6 });
        assert_eq!(CREATED_CARD_IDENTITY.resolve(&body, Some("http://h/api/tasks/99")), "99");
        assert_eq!(CREATED_CARD_IDENTITY.resolve(&body, None), "5");

        let linked = json!({ "data": { "_links": { "self": { "href": "/tasks/3" } } } });
        assert_eq!(CREATED_CARD_IDENTITY.resolve(&linked, Some("/tasks/99")), "3");
    }

    #[test]
    fn test_ids_are_unique_across_a_board() {
        let mut raws: Vec<Value> = (0..300).map(|_| json!({ "title": "no id" })).collect();
        raws.extend((0..50).map(|i| json!({ "id": format!("explicit-{}", i) })));

        let ids: HashSet<String> = raws.iter().map(|r| LIST_IDENTITY.resolve(r, None)).collect();
        assert_eq!(ids.len(), raws.len());
    }

    proptest! {
        #[test]
        fn prop_list_ids_are_unique(missing in 0usize..300, linked in 0usize..30, explicit in 0usize..30) {
            let mut raws: Vec<Value> = (0..missing).map(|_| json!({ "title": "no id" })).collect();
            raws.extend((0..linked).map(|i| json!({ "_links": { "self": { "href": format!("/api/cards/{}", i) } } })));
            raws.extend((0..explicit).map(|i| json!({ "id": format!("explicit-{}", i) })));

            let ids: HashSet<String> = raws.iter().map(|r| LIST_IDENTITY.resolve(r, None)).collect();
            prop_assert_eq!(ids.len(), raws.len());
        }
    }
}
