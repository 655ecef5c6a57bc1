//! Lenient sequence input

use serde::{Deserialize, Deserializer};

#[derive(Deserialize)]
#[serde(untagged)]
enum OneOrMany<T> {
    Many(Vec<T>),
    One(T),
}

/// Accept either a JSON array or a single bare value for a `Vec<T>` field
///
/// Use with `#[serde(default, deserialize_with = "...::one_or_many")]`.
pub fn one_or_many<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Ok(match OneOrMany::deserialize(deserializer)? {
        OneOrMany::Many(values) => values,
        OneOrMany::One(value) => vec![value],
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Deserialize)]
    struct Filter {
        #[serde(default, deserialize_with = "one_or_many")]
        tags: Vec<String>,
    }

    #[test]
    fn test_accepts_array_scalar_and_absence() {
        let many: Filter = serde_json::from_str(r#"{"tags": ["a", "b"]}"#).unwrap();
        assert_eq!(many.tags, vec!["a", "b"]);

        let one: Filter = serde_json::from_str(r#"{"tags": "a"}"#).unwrap();
        assert_eq!(one.tags, vec!["a"]);

        let none: Filter = serde_json::from_str("{}").unwrap();
        assert!(none.tags.is_empty());
    }

    #[test]
    fn test_rejects_mismatched_scalar() {
        assert!(serde_json::from_str::<Filter>(r#"{"tags": 5}"#).is_err());
    }
}
