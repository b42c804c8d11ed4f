use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};

/// A categorization produced for a piece of text
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Categorization {
    pub category: String,
    pub description: String,
    pub tags: Vec<String>,
}

/// A categorization persisted in the store
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StoredCategorization {
    pub id: u64,
    pub input_text: String,
    pub category: String,
    pub description: String,
    /// Either a JSON array or, for older records, a string holding an encoded array
    #[serde(deserialize_with = "deserialize_tags")]
    pub tags: Vec<String>,
    pub created_at: DateTime<Utc>,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawTags {
    List(Vec<String>),
    Encoded(String),
}

fn deserialize_tags<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    match RawTags::deserialize(deserializer)? {
        RawTags::List(tags) => Ok(tags),
        RawTags::Encoded(text) => serde_json::from_str(&text).map_err(|e| {
            serde::de::Error::custom(format!("tags string is not an encoded list: {}", e))
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record_json(tags: &str) -> String {
        format!(
            r#"{{"id":1,"input_text":"t","category":"c","description":"d","tags":{},"created_at":"2024-05-01T10:00:00Z"}}"#,
            tags
        )
    }

    #[test]
    fn test_tags_as_list() {
        let record: StoredCategorization = serde_json::from_str(&record_json(r#"["a","b"]"#)).unwrap();
        assert_eq!(record.tags, vec!["a", "b"]);
    }

    #[test]
    fn test_tags_as_encoded_string() {
        let record: StoredCategorization =
            serde_json::from_str(&record_json(r#""[\"a\",\"b\"]""#)).unwrap();
        assert_eq!(record.tags, vec!["a", "b"]);
    }

    #[test]
    fn test_malformed_tags_rejected() {
        assert!(serde_json::from_str::<StoredCategorization>(&record_json(r#""not a list""#)).is_err());
        assert!(serde_json::from_str::<StoredCategorization>(&record_json("[1, 2]")).is_err());
    }
}
