//! Kubernetes naming checks for generated identifiers
//!
//! The builder renders whatever it is given. These checks run alongside it
//! and report identifiers the API server would reject, so callers can show
//! or enforce them without the builder ever failing.

use regex::Regex;
use serde::Serialize;
use std::fmt;
use std::sync::LazyLock;

use super::builder::environment_name;

/// Maximum length of a DNS-1123 / DNS-1035 label
pub const MAX_LABEL_LENGTH: usize = 63;

/// Maximum length of a DNS-1123 subdomain
pub const MAX_SUBDOMAIN_LENGTH: usize = 253;

static DNS1123_LABEL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[a-z0-9]([-a-z0-9]*[a-z0-9])?$").expect("DNS-1123 label regex should be valid")
});

static DNS1035_LABEL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[a-z]([-a-z0-9]*[a-z0-9])?$").expect("DNS-1035 label regex should be valid")
});

/// Which generated identifier a warning refers to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum NamingField {
    /// `{service_name}-{env_type}`, the Namespace name
    Namespace,
    /// `service_name`, used for Deployment, Service, Ingress and container
    ResourceName,
    /// `{environment_name}.{domain}`, the Ingress rule host
    IngressHost,
}

impl fmt::Display for NamingField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Namespace => write!(f, "namespace"),
            Self::ResourceName => write!(f, "resource name"),
            Self::IngressHost => write!(f, "ingress host"),
        }
    }
}

/// An identifier that is not a valid Kubernetes name
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NamingWarning {
    pub field: NamingField,
    pub value: String,
    pub reason: String,
}

impl fmt::Display for NamingWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} '{}' {}", self.field, self.value, self.reason)
    }
}

/// Check a value against the DNS-1123 label rules (namespaces).
pub fn dns1123_label(value: &str) -> Option<String> {
    label_violation(value, &DNS1123_LABEL, "start and end with an alphanumeric character")
}

/// Check a value against the DNS-1035 label rules (Service names).
pub fn dns1035_label(value: &str) -> Option<String> {
    label_violation(
        value,
        &DNS1035_LABEL,
        "start with a letter and end with an alphanumeric character",
    )
}

/// Check a value against the DNS-1123 subdomain rules (hosts).
pub fn dns1123_subdomain(value: &str) -> Option<String> {
    if value.len() > MAX_SUBDOMAIN_LENGTH {
        return Some(format!(
            "must be no more than {} characters (got {})",
            MAX_SUBDOMAIN_LENGTH,
            value.len()
        ));
    }
    value.split('.').find_map(|part| {
        dns1123_label(part).map(|reason| format!("has invalid segment '{}': {}", part, reason))
    })
}

fn label_violation(value: &str, pattern: &Regex, shape: &str) -> Option<String> {
    if value.is_empty() {
        return Some("must not be empty".to_string());
    }
    if value.len() > MAX_LABEL_LENGTH {
        return Some(format!(
            "must be no more than {} characters (got {})",
            MAX_LABEL_LENGTH,
            value.len()
        ));
    }
    if !pattern.is_match(value) {
        return Some(format!(
            "must consist of lowercase alphanumeric characters or '-', and {}",
            shape
        ));
    }
    None
}

/// Check every identifier derived from trimmed inputs.
///
/// An empty result means the rendered manifest will pass API server name
/// validation.
pub fn check(service_name: &str, env_type: &str, ingress_domain: &str) -> Vec<NamingWarning> {
    let namespace = environment_name(service_name, env_type);
    let host = format!("{}.{}", namespace, ingress_domain);

    let candidates = [
        (NamingField::Namespace, namespace.clone(), dns1123_label(&namespace)),
        (
            NamingField::ResourceName,
            service_name.to_string(),
            dns1035_label(service_name),
        ),
        (NamingField::IngressHost, host.clone(), dns1123_subdomain(&host)),
    ];

    candidates
        .into_iter()
        .filter_map(|(field, value, violation)| {
            violation.map(|reason| NamingWarning {
                field,
                value,
                reason,
            })
        })
        .collect()
}
