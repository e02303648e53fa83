use anyhow::{bail, Result};
use colored::Colorize;
use std::path::PathBuf;

use mini_idp::manifest::{naming, Manifest, ManifestBuilder, ManifestRequest, NamingWarning};

use crate::utils;

pub struct GenerateArgs {
    pub service_name: String,
    pub env_type: String,
    pub replicas: i64,
    pub output: Option<PathBuf>,
    pub strict: bool,
    pub dry_run: bool,
}

/// Rendered manifest plus the naming problems found in it
pub struct Generated {
    pub manifest: Manifest,
    pub warnings: Vec<NamingWarning>,
}

pub fn render(builder: &ManifestBuilder, args: &GenerateArgs) -> Generated {
    let request = ManifestRequest::new(&args.service_name, &args.env_type, args.replicas);
    let manifest = builder.render(&request);
    let warnings = naming::check(
        &request.service_name,
        &request.env_type,
        &builder.settings().ingress_domain,
    );

    Generated { manifest, warnings }
}

pub fn execute(builder: &ManifestBuilder, args: GenerateArgs) -> Result<()> {
    let generated = render(builder, &args);
    let manifest = &generated.manifest;

    tracing::debug!(
        service_name = %manifest.service_name,
        environment_name = %manifest.environment_name,
        replicas = manifest.replicas,
        "Rendered manifest"
    );

    for warning in &generated.warnings {
        utils::warning(&warning.to_string());
    }

    if args.strict && !generated.warnings.is_empty() {
        bail!(
            "{} invalid Kubernetes name(s) in environment '{}' (--strict)",
            generated.warnings.len(),
            manifest.environment_name
        );
    }

    if args.dry_run {
        show_dry_run(builder, &generated, args.output.as_ref());
        return Ok(());
    }

    match &args.output {
        Some(path) => {
            utils::write_file(path, &manifest.yaml)?;
            utils::success(&format!(
                "Wrote manifests for {} to {}",
                manifest.environment_name.cyan(),
                path.display()
            ));
            eprintln!("  kubectl apply -f {}", path.display());
        }
        None => print!("{}", manifest.yaml),
    }

    Ok(())
}

fn show_dry_run(builder: &ManifestBuilder, generated: &Generated, output: Option<&PathBuf>) {
    let manifest = &generated.manifest;

    utils::section("Dry run - would generate");
    eprintln!("  Service: {}", manifest.service_name.cyan());
    eprintln!("  Namespace: {}", manifest.environment_name.cyan());
    eprintln!("  Replicas: {}", manifest.replicas.to_string().cyan());
    eprintln!("  Image: {}", builder.settings().image.cyan());
    eprintln!(
        "  Host: {}",
        builder.ingress_host(&manifest.environment_name).cyan()
    );

    utils::section("Documents");
    for kind in ["Namespace", "Deployment", "Service", "Ingress"] {
        eprintln!("  • {}", kind);
    }

    match output {
        Some(path) => eprintln!("\n  Output: {}", path.display()),
        None => eprintln!("\n  Output: stdout"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(service_name: &str, env_type: &str, replicas: i64) -> GenerateArgs {
        GenerateArgs {
            service_name: service_name.to_string(),
            env_type: env_type.to_string(),
            replicas,
            output: None,
            strict: false,
            dry_run: false,
        }
    }

    #[test]
    fn test_render_matches_library_output() {
        let generated = render(&ManifestBuilder::default(), &args(" checkout ", "prod", 3));
        assert_eq!(generated.manifest.environment_name, "checkout-prod");
        assert_eq!(generated.manifest.yaml, mini_idp::manifest::build("checkout", "prod", 3));
        assert!(generated.warnings.is_empty());
    }

    #[test]
    fn test_render_collects_warnings() {
        let generated = render(&ManifestBuilder::default(), &args("Web_App", "dev", 1));
        assert!(!generated.warnings.is_empty());
    }

    #[test]
    fn test_strict_fails_on_invalid_names() {
        let mut strict = args("", "dev", 1);
        strict.strict = true;
        let err = execute(&ManifestBuilder::default(), strict).unwrap_err();
        assert!(err.to_string().contains("-dev"));
    }

    #[test]
    fn test_writes_output_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out").join("web-dev.yaml");

        let mut to_file = args("web", "dev", 2);
        to_file.output = Some(path.clone());
        execute(&ManifestBuilder::default(), to_file).unwrap();

        let written = std::fs::read_to_string(&path).unwrap();
        assert_eq!(written, mini_idp::manifest::build("web", "dev", 2));
    }

    #[test]
    fn test_dry_run_writes_nothing() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("web-dev.yaml");

        let mut dry = args("web", "dev", 1);
        dry.output = Some(path.clone());
        dry.dry_run = true;
        execute(&ManifestBuilder::default(), dry).unwrap();

        assert!(!path.exists());
    }
}
