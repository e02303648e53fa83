//! Template response wrapper

use askama::Template;
use axum::{
    http::StatusCode,
    response::{Html, IntoResponse, Response},
};

/// Wrapper for rendering templates as HTML responses.
///
/// ```rust,ignore
/// async fn index() -> impl IntoResponse {
///     HtmlTemplate::page(IndexTemplate::default())
/// }
/// ```
pub struct HtmlTemplate<T: Template> {
    template: T,
}

impl<T: Template> HtmlTemplate<T> {
    /// Create a 200 OK page response.
    #[must_use]
    pub fn page(template: T) -> Self {
        Self { template }
    }
}

impl<T: Template> IntoResponse for HtmlTemplate<T> {
    fn into_response(self) -> Response {
        match self.template.render() {
            Ok(html) => Html(html).into_response(),
            Err(err) => {
                tracing::error!("Template rendering error: {}", err);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Html(format!("<!-- Template error: {} -->", err)),
                )
                    .into_response()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Template)]
    #[template(source = "<p>Hello, {{ name }}!</p>", ext = "html")]
    struct TestTemplate {
        name: String,
    }

    #[test]
    fn test_html_template_render() {
        let response = HtmlTemplate::page(TestTemplate {
            name: "World".to_string(),
        })
        .into_response();
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            response.headers().get("content-type").unwrap(),
            "text/html; charset=utf-8"
        );
    }

    #[test]
    fn test_html_template_escapes_values() {
        let html = TestTemplate {
            name: "<script>".to_string(),
        }
        .render()
        .unwrap();
        assert!(html.starts_with("<p>Hello, "));
        assert!(!html.contains("<script>"));
    }
}
