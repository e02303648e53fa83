use anyhow::{Context, Result};
use colored::Colorize;
use std::fs;
use std::path::Path;

/// Create directory and all parent directories
pub fn create_dir_all(path: &Path) -> Result<()> {
    fs::create_dir_all(path).with_context(|| format!("Failed to create directory: {}", path.display()))
}

/// Write file with content, creating parent directories
pub fn write_file(path: &Path, content: &str) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        create_dir_all(parent)?;
    }
    fs::write(path, content).with_context(|| format!("Failed to write file: {}", path.display()))
}

/// Success message with checkmark
pub fn success(message: &str) {
    eprintln!("{} {}", "✓".green().bold(), message);
}

/// Warning message
pub fn warning(message: &str) {
    eprintln!("{} {}", "⚠".yellow().bold(), message);
}

/// Error message
pub fn error(message: &str) {
    eprintln!("{} {}", "✗".red().bold(), message);
}

/// Section header
pub fn section(title: &str) {
    eprintln!("\n{}", title.bold().underline());
}
