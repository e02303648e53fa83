//! Form decoding for generation requests

use serde::{de, Deserialize, Deserializer};
use std::fmt;
use std::str::FromStr;

use crate::error::{Error, Result};
use crate::manifest::ManifestRequest;

/// Default environment type when the field is omitted or blank
pub const DEFAULT_ENV_TYPE: &str = "dev";

/// Default replica count when the field is omitted or blank
pub const DEFAULT_REPLICAS: i64 = 1;

/// Raw `application/x-www-form-urlencoded` body of `/generate`
///
/// Browsers submit blank inputs as empty strings, so an empty value is
/// treated the same as a missing field.
#[derive(Debug, Default, Deserialize)]
pub struct GenerateForm {
    #[serde(default, deserialize_with = "empty_string_as_none")]
    pub service_name: Option<String>,

    #[serde(default, deserialize_with = "empty_string_as_none")]
    pub env_type: Option<String>,

    /// Bounded to `i64`; larger values fail to decode
    #[serde(default, deserialize_with = "padded_number")]
    pub replicas: Option<i64>,
}

impl GenerateForm {
    /// Apply defaults and trimming. Fails only when `service_name` is missing.
    pub fn to_request(&self) -> Result<ManifestRequest> {
        let service_name = self
            .service_name
            .as_deref()
            .ok_or_else(|| Error::ValidationError("service_name: field required".to_string()))?;
        let env_type = self.env_type.as_deref().unwrap_or(DEFAULT_ENV_TYPE);
        let replicas = self.replicas.unwrap_or(DEFAULT_REPLICAS);

        Ok(ManifestRequest::new(service_name, env_type, replicas))
    }
}

// Text is kept untrimmed so the result page can re-post it verbatim
fn empty_string_as_none<'de, D>(deserializer: D) -> std::result::Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<String>::deserialize(deserializer)?;
    Ok(raw.filter(|value| !value.is_empty()))
}

fn padded_number<'de, D, T>(deserializer: D) -> std::result::Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: FromStr,
    T::Err: fmt::Display,
{
    match empty_string_as_none(deserializer)? {
        None => Ok(None),
        Some(value) => T::from_str(value.trim()).map(Some).map_err(de::Error::custom),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn form(service_name: Option<&str>, env_type: Option<&str>, replicas: Option<i64>) -> GenerateForm {
        GenerateForm {
            service_name: service_name.map(str::to_string),
            env_type: env_type.map(str::to_string),
            replicas,
        }
    }

    #[test]
    fn test_defaults_applied() {
        let request = form(Some("checkout"), None, None).to_request().unwrap();
        assert_eq!(request.service_name, "checkout");
        assert_eq!(request.env_type, "dev");
        assert_eq!(request.replicas, 1);
    }

    #[test]
    fn test_missing_service_name_is_validation_error() {
        let err = form(None, Some("prod"), Some(2)).to_request().unwrap_err();
        assert!(matches!(err, Error::ValidationError(_)));
    }

    #[test]
    fn test_whitespace_service_name_is_kept_and_trimmed() {
        let request = form(Some("   "), Some(" qa "), Some(1)).to_request().unwrap();
        assert_eq!(request.service_name, "");
        assert_eq!(request.env_type, "qa");
        assert_eq!(request.environment_name(), "-qa");
    }

    #[test]
    fn test_negative_replicas_passed_through() {
        let request = form(Some("api"), None, Some(-1)).to_request().unwrap();
        assert_eq!(request.replicas, -1);
    }
}
