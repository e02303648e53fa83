//! HTTP routes for the manifest generator

use axum::{
    extract::{rejection::FormRejection, State},
    http::{header, HeaderMap, HeaderValue, Uri},
    response::IntoResponse,
    routing::{get, post},
    Form, Router,
};

use crate::{
    error::{Error, Result},
    health::{health, readiness},
    manifest::{naming, Manifest, ManifestRequest, NamingWarning},
    state::AppState,
    templates::{HtmlTemplate, IndexTemplate, ResultTemplate},
};

mod form;

pub use form::{GenerateForm, DEFAULT_ENV_TYPE, DEFAULT_REPLICAS};

/// Content type served for raw manifests
pub const YAML_CONTENT_TYPE: &str = "application/yaml";

/// Build the application router
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(index))
        .route("/generate", post(generate))
        .route("/manifest.yaml", post(manifest_yaml))
        .route("/health", get(health))
        .route("/ready", get(readiness))
        .fallback(not_found)
        .with_state(state)
}

/// GET / - the parameter form
async fn index() -> impl IntoResponse {
    HtmlTemplate::page(IndexTemplate::default())
}

/// POST /generate - HTML page embedding the manifest
async fn generate(
    State(state): State<AppState>,
    form: std::result::Result<Form<GenerateForm>, FormRejection>,
) -> Result<impl IntoResponse> {
    let Form(form) = form?;
    let request = form.to_request()?;
    let (manifest, warnings) = render(&state, &request);

    Ok(HtmlTemplate::page(ResultTemplate::new(
        manifest,
        warnings,
        form.service_name.unwrap_or_default(),
        form.env_type.unwrap_or_default(),
    )))
}

/// POST /manifest.yaml - the bare manifest, for `kubectl apply -f -`
async fn manifest_yaml(
    State(state): State<AppState>,
    form: std::result::Result<Form<GenerateForm>, FormRejection>,
) -> Result<impl IntoResponse> {
    let Form(form) = form?;
    let request = form.to_request()?;
    let (manifest, _) = render(&state, &request);

    let mut headers = HeaderMap::new();
    headers.insert(header::CONTENT_TYPE, HeaderValue::from_static(YAML_CONTENT_TYPE));
    let disposition = HeaderValue::from_str(&format!(
        "attachment; filename=\"{}.yaml\"",
        manifest.environment_name
    ))
    .unwrap_or_else(|_| HeaderValue::from_static("attachment; filename=\"manifest.yaml\""));
    headers.insert(header::CONTENT_DISPOSITION, disposition);

    Ok((headers, manifest.yaml))
}

async fn not_found(uri: Uri) -> Error {
    Error::NotFound(format!("No route for {}", uri.path()))
}

/// Render and log one generation, flagging names the API server would reject
fn render(state: &AppState, request: &ManifestRequest) -> (Manifest, Vec<NamingWarning>) {
    let builder = state.builder();
    let manifest = builder.render(request);
    let warnings = naming::check(
        &request.service_name,
        &request.env_type,
        &builder.settings().ingress_domain,
    );

    for warning in &warnings {
        tracing::warn!(
            environment_name = %manifest.environment_name,
            field = %warning.field,
            "Generated manifest has invalid name: {}", warning
        );
    }

    tracing::info!(
        service_name = %manifest.service_name,
        environment_name = %manifest.environment_name,
        replicas = manifest.replicas,
        warnings = warnings.len(),
        "Generated manifest"
    );

    (manifest, warnings)
}
