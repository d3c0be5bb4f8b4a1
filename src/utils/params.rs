use serde::{de, Deserialize, Deserializer};

/// Lenient boolean for query strings: `1/true/on/yes` and `0/false/off/no`,
/// any case.
pub fn parse_flag(raw: &str) -> Option<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "on" | "yes" => Some(true),
        "0" | "false" | "off" | "no" => Some(false),
        _ => None,
    }
}

pub fn deserialize_flag<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    parse_flag(&raw).ok_or_else(|| de::Error::custom(format!("value could not be parsed to a boolean: {raw}")))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Deserialize)]
    struct Q {
        #[serde(default, deserialize_with = "deserialize_flag")]
        update: bool,
    }

    #[test]
    fn accepts_common_spellings() {
        for raw in ["1", "true", "On", "YES"] {
            assert_eq!(parse_flag(raw), Some(true), "{raw}");
        }
        for raw in ["0", "False", "off", "no"] {
            assert_eq!(parse_flag(raw), Some(false), "{raw}");
        }
        assert_eq!(parse_flag("maybe"), None);
    }

    #[test]
    fn works_as_a_serde_field() {
        let q: Q = serde_json::from_str(r#"{"update":"on"}"#).unwrap();
        assert!(q.update);
        let q: Q = serde_json::from_str("{}").unwrap();
        assert!(!q.update);
        assert!(serde_json::from_str::<Q>(r#"{"update":"maybe"}"#).is_err());
    }
}
