//! Askama templates for the server-rendered generator UI.
//!
//! Templates live in the crate's `templates/` directory and are compiled in
//! at build time. All interpolated values are HTML-escaped, including the
//! generated YAML shown on the result page.

mod pages;
mod response;

pub use pages::{IndexTemplate, ResultTemplate};
pub use response::HtmlTemplate;
