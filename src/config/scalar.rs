//! Scalar fields that may be written as strings, numbers or booleans.
//!
//! `version: 18.04` and `version: "18.04"` must mean the same thing.

use serde::{Deserialize, Deserializer};

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum Scalar {
    Text(String),
    Number(serde_yaml::Number),
    Flag(bool),
}

impl Scalar {
    fn into_string(self) -> String {
        match self {
            Scalar::Text(s) => s,
            Scalar::Number(n) => n.to_string(),
            Scalar::Flag(b) => b.to_string(),
        }
    }
}

pub(crate) fn opt_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<Scalar>::deserialize(deserializer)?.map(Scalar::into_string))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn stringify(yaml: &str) -> Option<String> {
        serde_yaml::from_str::<Scalar>(yaml).ok().map(Scalar::into_string)
    }

    #[test]
    fn test_numbers_keep_their_text() {
        assert_eq!(stringify("18.04").as_deref(), Some("18.04"));
        assert_eq!(stringify("7").as_deref(), Some("7"));
        assert_eq!(stringify("\"10.0\"").as_deref(), Some("10.0"));
    }

    #[test]
    fn test_sequence_is_not_scalar() {
        assert!(stringify("[1, 2]").is_none());
    }
}
