//! Kubernetes environment manifest generation
//!
//! Given a service name, an environment type and a replica count, renders a
//! Namespace, Deployment, Service and Ingress as one multi-document YAML
//! string. The environment name `{service_name}-{env_type}` is used as the
//! namespace of every namespaced resource and as the Ingress host prefix.
//!
//! ```rust
//! use mini_idp::manifest;
//!
//! let yaml = manifest::build("checkout", "prod", 3);
//! assert!(yaml.contains("namespace: checkout-prod"));
//! assert!(yaml.contains("host: checkout-prod.apps.example.com"));
//! ```

mod builder;
pub mod naming;

pub use builder::{
    build, environment_name, Manifest, ManifestBuilder, ManifestRequest, ManifestSettings,
    DOCUMENT_SEPARATOR,
};
pub use naming::{NamingField, NamingWarning};
