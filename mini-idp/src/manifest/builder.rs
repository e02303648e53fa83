//! Multi-document manifest assembly

use serde::{Deserialize, Serialize};

/// Document separator line used between the rendered resources
pub const DOCUMENT_SEPARATOR: &str = "---";

/// Fixed values interpolated into every manifest
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ManifestSettings {
    /// Container image for the single Deployment container
    #[serde(default = "default_image")]
    pub image: String,

    /// Port the container listens on (also the Service targetPort)
    #[serde(default = "default_port")]
    pub container_port: u16,

    /// Port exposed by the Service and referenced by the Ingress backend
    #[serde(default = "default_port")]
    pub service_port: u16,

    /// Domain appended to the environment name to form the Ingress host
    #[serde(default = "default_ingress_domain")]
    pub ingress_domain: String,
}

impl Default for ManifestSettings {
    fn default() -> Self {
        Self {
            image: default_image(),
            container_port: default_port(),
            service_port: default_port(),
            ingress_domain: default_ingress_domain(),
        }
    }
}

fn default_image() -> String {
    "nginx:1.27-alpine".to_string()
}

fn default_port() -> u16 {
    80
}

fn default_ingress_domain() -> String {
    "apps.example.com".to_string()
}

/// Trimmed generation inputs
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ManifestRequest {
    pub service_name: String,
    pub env_type: String,
    pub replicas: i64,
}

impl ManifestRequest {
    /// Build a request, trimming surrounding whitespace from both names.
    pub fn new(service_name: &str, env_type: &str, replicas: i64) -> Self {
        Self {
            service_name: service_name.trim().to_string(),
            env_type: env_type.trim().to_string(),
            replicas,
        }
    }

    /// `{service_name}-{env_type}`
    pub fn environment_name(&self) -> String {
        environment_name(&self.service_name, &self.env_type)
    }
}

/// A rendered manifest together with the identifiers it was built from
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Manifest {
    pub service_name: String,
    pub environment_name: String,
    pub replicas: i64,
    pub yaml: String,
}

/// Derive the environment name used as namespace and host prefix.
///
/// Inputs are interpolated as given; callers trim beforehand.
pub fn environment_name(service_name: &str, env_type: &str) -> String {
    format!("{}-{}", service_name, env_type)
}

/// Renders Namespace, Deployment, Service and Ingress documents
#[derive(Debug, Clone, Default)]
pub struct ManifestBuilder {
    settings: ManifestSettings,
}

impl ManifestBuilder {
    pub fn new(settings: ManifestSettings) -> Self {
        Self { settings }
    }

    pub fn settings(&self) -> &ManifestSettings {
        &self.settings
    }

    /// Render the manifest for raw (untrimmed) inputs.
    ///
    /// Never fails: every combination of inputs yields a four-document YAML
    /// string, including an empty service name.
    pub fn build(&self, service_name: &str, env_type: &str, replicas: i64) -> String {
        self.render(&ManifestRequest::new(service_name, env_type, replicas))
            .yaml
    }

    /// Render the manifest for an already trimmed request.
    pub fn render(&self, request: &ManifestRequest) -> Manifest {
        let environment_name = request.environment_name();
        let service_name = request.service_name.as_str();

        let documents = [
            self.namespace(&environment_name),
            self.deployment(service_name, &environment_name, request.replicas),
            self.service(service_name, &environment_name),
            self.ingress(service_name, &environment_name),
        ];
        let yaml = documents.join(&format!("{}\n", DOCUMENT_SEPARATOR));

        Manifest {
            service_name: request.service_name.clone(),
            environment_name,
            replicas: request.replicas,
            yaml,
        }
    }

    /// Fully qualified Ingress host for an environment
    pub fn ingress_host(&self, environment_name: &str) -> String {
        format!("{}.{}", environment_name, self.settings.ingress_domain)
    }

    fn namespace(&self, environment_name: &str) -> String {
        format!(
r#"apiVersion: v1
kind: Namespace
metadata:
  name: {environment_name}
"#,
            environment_name = environment_name,
        )
    }

    fn deployment(&self, service_name: &str, environment_name: &str, replicas: i64) -> String {
        format!(
r#"apiVersion: apps/v1
kind: Deployment
metadata:
  name: {service_name}
  namespace: {environment_name}
spec:
  replicas: {replicas}
  selector:
    matchLabels:
      app: {service_name}
  template:
    metadata:
      labels:
        app: {service_name}
    spec:
      containers:
        - name: {service_name}
          image: {image}
          ports:
            - containerPort: {container_port}
"#,
            service_name = service_name,
            environment_name = environment_name,
            replicas = replicas,
            image = self.settings.image,
            container_port = self.settings.container_port,
        )
    }

    fn service(&self, service_name: &str, environment_name: &str) -> String {
        format!(
r#"apiVersion: v1
kind: Service
metadata:
  name: {service_name}
  namespace: {environment_name}
spec:
  selector:
    app: {service_name}
  ports:
    - name: http
      port: {service_port}
      targetPort: {container_port}
"#,
            service_name = service_name,
            environment_name = environment_name,
            service_port = self.settings.service_port,
            container_port = self.settings.container_port,
        )
    }

    fn ingress(&self, service_name: &str, environment_name: &str) -> String {
        format!(
r#"apiVersion: networking.k8s.io/v1
kind: Ingress
metadata:
  name: {service_name}
  namespace: {environment_name}
spec:
  rules:
    - host: {host}
      http:
        paths:
          - path: /
            pathType: Prefix
            backend:
              service:
                name: {service_name}
                port:
                  number: {service_port}
"#,
            service_name = service_name,
            environment_name = environment_name,
            host = self.ingress_host(environment_name),
            service_port = self.settings.service_port,
        )
    }
}

/// Render with the default settings.
pub fn build(service_name: &str, env_type: &str, replicas: i64) -> String {
    ManifestBuilder::default().build(service_name, env_type, replicas)
}
