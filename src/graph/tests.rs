//! Serialization tests with fixtures in the shape the CLI emits

use serde_json::{json, Value};

/// Fixture: an author keyed by an external identifier
fn author_fixture() -> Value {
    json!({
        "key": "0000-0002-1825-0097",
        "display_name": "Josiah Carberry",
        "paper_count": 3,
        "origin": "external"
    })
}

/// Fixture: an edge carrying two shared records
fn edge_fixture() -> Value {
    json!({
        "source": "0000-0002-1825-0097",
        "target": "Jane Smith",
        "weight": 2,
        "titles": ["Graph Colouring Revisited", "Sparse Cuts"],
        "doc_ids": ["10.1000/182", "10.1000/183"]
    })
}

#[cfg(test)]
mod serialization_tests {
    use super::*;
    use crate::graph::{Author, AuthorKey, Edge, KeyOrigin};

    #[test]
    fn author_key_serializes_as_string() {
        let key = AuthorKey::from_string("Jane Smith");
        let json = serde_json::to_string(&key).unwrap();
        assert_eq!(json, "\"Jane Smith\"");
    }

    #[test]
    fn author_key_deserializes_from_string() {
        let key: AuthorKey = serde_json::from_str("\"0000-0002-1825-0097\"").unwrap();
        assert_eq!(key.as_str(), "0000-0002-1825-0097");
    }

    #[test]
    fn key_origin_serializes_lowercase() {
        assert_eq!(serde_json::to_string(&KeyOrigin::External).unwrap(), "\"external\"");
        assert_eq!(serde_json::to_string(&KeyOrigin::Name).unwrap(), "\"name\"");
    }

    #[test]
    fn can_deserialize_author_fixture() {
        let author: Author = serde_json::from_value(author_fixture()).unwrap();

        assert_eq!(author.key.as_str(), "0000-0002-1825-0097");
        assert_eq!(author.display_name, "Josiah Carberry");
        assert_eq!(author.paper_count, 3);
        assert_eq!(author.origin, KeyOrigin::External);
    }

    #[test]
    fn can_deserialize_edge_fixture() {
        let edge: Edge = serde_json::from_value(edge_fixture()).unwrap();

        assert_eq!(edge.source.as_str(), "0000-0002-1825-0097");
        assert_eq!(edge.target.as_str(), "Jane Smith");
        assert_eq!(edge.weight as usize, edge.titles.len());
        assert_eq!(edge.doc_ids.len(), 2);
    }

    #[test]
    fn edge_with_mismatched_weight_is_rejected() {
        let mut fixture = edge_fixture();
        fixture["weight"] = json!(5);

        let err = serde_json::from_value::<Edge>(fixture).unwrap_err();
        assert!(err.to_string().contains("weight 5"));
    }

    #[test]
    fn edge_with_single_endpoint_is_rejected() {
        let mut fixture = edge_fixture();
        fixture["target"] = fixture["source"].clone();

        assert!(serde_json::from_value::<Edge>(fixture).is_err());
    }

    #[test]
    fn serialized_edge_has_fixture_structure() {
        let mut edge = Edge::new("a".into(), "b".into(), "First", "10.1/1");
        edge.record("Second", "10.1/2");

        let json = serde_json::to_value(&edge).unwrap();

        assert_eq!(json["source"], "a");
        assert_eq!(json["target"], "b");
        assert_eq!(json["weight"], 2);
        assert!(json["titles"].is_array());
        assert!(json["doc_ids"].is_array());
    }

    #[test]
    fn serialized_author_has_fixture_structure() {
        let author = Author::new("Jane Smith".into(), "Jane Smith", KeyOrigin::Name)
            .with_paper_count(4);

        let json = serde_json::to_value(&author).unwrap();

        assert_eq!(json["key"], "Jane Smith");
        assert_eq!(json["display_name"], "Jane Smith");
        assert_eq!(json["paper_count"], 4);
        assert_eq!(json["origin"], "name");
    }
}
