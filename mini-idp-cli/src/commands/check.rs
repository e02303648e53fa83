use anyhow::{bail, Context, Result};
use colored::Colorize;

use mini_idp::manifest::{environment_name, naming, NamingField, NamingWarning};

use crate::utils;

/// Check the names an environment would get, without rendering it.
///
/// Returns an error when any identifier is invalid so the exit code can gate
/// scripts.
pub fn execute(service_name: &str, env_type: &str, ingress_domain: &str, json: bool) -> Result<()> {
    let service_name = service_name.trim();
    let env_type = env_type.trim();
    let warnings = naming::check(service_name, env_type, ingress_domain);

    if json {
        let rendered = serde_json::to_string_pretty(&warnings)
            .context("Failed to serialize naming report")?;
        println!("{}", rendered);
    } else {
        report(service_name, env_type, ingress_domain, &warnings);
    }

    if !warnings.is_empty() {
        bail!("{} invalid Kubernetes name(s)", warnings.len());
    }

    Ok(())
}

fn report(service_name: &str, env_type: &str, ingress_domain: &str, warnings: &[NamingWarning]) {
    let namespace = environment_name(service_name, env_type);
    let host = format!("{}.{}", namespace, ingress_domain);

    utils::section("Kubernetes names");
    for (field, value) in [
        (NamingField::Namespace, namespace.as_str()),
        (NamingField::ResourceName, service_name),
        (NamingField::IngressHost, host.as_str()),
    ] {
        match warnings.iter().find(|w| w.field == field) {
            Some(warning) => utils::error(&format!("{}: {} ({})", field, value, warning.reason)),
            None => utils::success(&format!("{}: {}", field, value.cyan())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_names_pass() {
        assert!(execute("checkout", "prod", "apps.example.com", false).is_ok());
    }

    #[test]
    fn test_padded_names_are_trimmed() {
        assert!(execute("  checkout  ", " prod ", "apps.example.com", true).is_ok());
    }

    #[test]
    fn test_invalid_names_fail() {
        let err = execute("Checkout", "prod", "apps.example.com", false).unwrap_err();
        assert_eq!(err.to_string(), "3 invalid Kubernetes name(s)");
    }
}
