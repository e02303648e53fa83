//! # mini-idp
//!
//! A small internal developer platform service. It takes a service name, an
//! environment type and a replica count from a web form and renders the
//! Kubernetes manifests for that environment: a Namespace, a Deployment, a
//! Service and an Ingress, as one multi-document YAML file.
//!
//! ## Example
//!
//! ```rust,no_run
//! use mini_idp::prelude::*;
//!
//! #[tokio::main]
//! async fn main() -> Result<()> {
//!     let config = Config::load()?;
//!     init_tracing(&config)?;
//!
//!     let app = router(AppState::new(config.clone()));
//!
//!     Server::new(config).serve(app).await
//! }
//! ```

pub mod config;
pub mod error;
pub mod handlers;
pub mod health;
pub mod ids;
pub mod manifest;
pub mod middleware;
pub mod observability;
pub mod server;
pub mod state;
pub mod templates;

pub mod prelude {
    pub use crate::config::Config;
    pub use crate::error::{Error, Result};
    pub use crate::handlers::router;
    pub use crate::manifest::{Manifest, ManifestBuilder, ManifestRequest, ManifestSettings};
    pub use crate::observability::init_tracing;
    pub use crate::server::Server;
    pub use crate::state::AppState;
}
