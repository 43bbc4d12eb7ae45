use serde::{Deserialize, Deserializer};

/// Treats an explicit `null` the same as a missing string so that field
/// validation sees an empty value instead of a type error.
pub fn deserialize_null_as_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    let opt: Option<String> = Option::deserialize(deserializer)?;
    Ok(opt.unwrap_or_default())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Deserialize)]
    struct Body {
        #[serde(default, deserialize_with = "deserialize_null_as_empty")]
        username: String,
    }

    #[test]
    fn test_null_becomes_empty() {
        let body: Body = serde_json::from_str(r#"{"username":null}"#).unwrap();
        assert_eq!(body.username, "");
    }

    #[test]
    fn test_missing_becomes_empty() {
        let body: Body = serde_json::from_str("{}").unwrap();
        assert_eq!(body.username, "");
    }

    #[test]
    fn test_value_is_kept() {
        let body: Body = serde_json::from_str(r#"{"username":"alice"}"#).unwrap();
        assert_eq!(body.username, "alice");
    }
}
