use std::fmt;

use serde::de::DeserializeOwned;

/// A deserialization failure located by JSON path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PathError {
    pub path: String,
    pub message: String,
}

impl fmt::Display for PathError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "at JSON path {} → {}", self.path, self.message)
    }
}

impl std::error::Error for PathError {}

/// Deserialize with JSON-path context in error messages.
pub fn from_str_with_path<T: DeserializeOwned>(src: &str) -> Result<T, PathError> {
    let de = &mut serde_json::Deserializer::from_str(src);
    serde_path_to_error::deserialize::<_, T>(de).map_err(|err| PathError {
        path: err.path().to_string(),
        message: err.into_inner().to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ConfigRecord;

    #[test]
    fn reports_the_offending_path() {
        let err = from_str_with_path::<ConfigRecord>(r#"{"outputConvention":"swift"}"#).unwrap_err();
        assert_eq!(err.path, "outputConvention");
        assert!(err.to_string().starts_with("at JSON path outputConvention"));
    }

    #[test]
    fn missing_fields_take_defaults() {
        let record: ConfigRecord = from_str_with_path("{}").unwrap();
        assert_eq!(record, ConfigRecord::default());
    }
}
