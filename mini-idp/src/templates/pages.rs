//! Page templates for the generator UI

use askama::Template;

use crate::manifest::{Manifest, NamingWarning};

/// The parameter form
#[derive(Template)]
#[template(path = "index.html")]
pub struct IndexTemplate {
    pub service_name: String,
    pub env_type: String,
    pub replicas: i64,
}

impl Default for IndexTemplate {
    fn default() -> Self {
        Self {
            service_name: String::new(),
            env_type: "dev".to_string(),
            replicas: 1,
        }
    }
}

/// The generated manifest, with any naming warnings
///
/// The download form re-posts the values exactly as submitted, so a field
/// that trimmed to empty is not mistaken for a missing one.
#[derive(Template)]
#[template(path = "result.html")]
pub struct ResultTemplate {
    pub submitted_service_name: String,
    pub submitted_env_type: String,
    pub env_name: String,
    pub replicas: i64,
    pub yaml_text: String,
    pub warnings: Vec<NamingWarning>,
}

impl ResultTemplate {
    pub fn new(
        manifest: Manifest,
        warnings: Vec<NamingWarning>,
        submitted_service_name: String,
        submitted_env_type: String,
    ) -> Self {
        Self {
            submitted_service_name,
            submitted_env_type,
            env_name: manifest.environment_name,
            replicas: manifest.replicas,
            yaml_text: manifest.yaml,
            warnings,
        }
    }
}
