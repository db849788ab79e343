use serde::{Deserialize, Deserializer};

/// Reads `null` (or, together with `#[serde(default)]`, a missing field) as
/// an empty string.
///
/// The server may send `null` for `telefono`, `email`, `titulo` and friends;
/// form drafts always hold plain strings.
pub fn null_as_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;

    #[derive(Deserialize)]
    struct Probe {
        #[serde(default, deserialize_with = "null_as_empty")]
        value: String,
    }

    #[test]
    fn test_null_becomes_empty() {
        let p: Probe = serde_json::from_str(r#"{"value": null}"#).unwrap();
        assert_eq!(p.value, "");
    }

    #[test]
    fn test_missing_becomes_empty() {
        let p: Probe = serde_json::from_str("{}").unwrap();
        assert_eq!(p.value, "");
    }

    #[test]
    fn test_value_kept() {
        let p: Probe = serde_json::from_str(r#"{"value": "Orgánico"}"#).unwrap();
        assert_eq!(p.value, "Orgánico");
    }
}
