//! Starter file creation.
//!
//! Creates petrify.toml, the layout shell, example fragments and ignore
//! files for new sites.

use anyhow::{Context, Result};
use std::{fs, path::Path};

/// Default config filename
const CONFIG_FILE: &str = "petrify.toml";

/// Files to write ignore patterns to
const IGNORE_FILES: &[&str] = &[".gitignore", ".ignore"];

/// Standard site directory structure.
const SITE_DIRS: &[&str] = &["fragments"];

/// Starter layout shell with both placeholders.
const LAYOUT: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="utf-8">
  <title>{{ title }}</title>
</head>
<body>
{{ content }}
</body>
</html>
"#;

/// Starter fragments keyed by file path.
const FRAGMENTS: &[(&str, &str)] = &[
    (
        "fragments/index.html",
        "<h1>Welcome</h1>\n<p>This page was prerendered by petrify.</p>\n",
    ),
    (
        "fragments/about.html",
        "<h1>About</h1>\n<p>Edit fragments/about.html to change this page.</p>\n",
    ),
];

/// Generate petrify.toml content with comments
pub fn generate_config_template() -> String {
    format!(
        r#"# Petrify configuration file (v{})

[site]
title = "My Site"

[build]
output = "public"
layout = "layout.html"

# One table per component. Routes containing {{placeholders}} are listed
# but skipped at build time.
[[component]]
name = "Index"
routes = ["/", "/home"]
fragment = "fragments/index.html"

[[component]]
name = "About"
routes = ["/about"]
fragment = "fragments/about.html"
"#,
        env!("CARGO_PKG_VERSION")
    )
}

/// Create site directory structure at the given root.
///
/// The root directory is created if it doesn't exist.
pub fn create_structure(root: &Path) -> Result<()> {
    if !root.exists() {
        fs::create_dir_all(root)
            .with_context(|| format!("Failed to create root directory '{}'", root.display()))?;
    }

    for dir in SITE_DIRS {
        let path = root.join(dir);
        fs::create_dir_all(&path)
            .with_context(|| format!("Failed to create directory '{}'", path.display()))?;
    }

    Ok(())
}

/// Write default petrify.toml configuration
pub fn write_config(root: &Path) -> Result<()> {
    let path = root.join(CONFIG_FILE);
    fs::write(&path, generate_config_template())
        .with_context(|| format!("Failed to write config file '{}'", path.display()))
}

/// Write the starter layout shell
pub fn write_layout(root: &Path) -> Result<()> {
    let path = root.join("layout.html");
    fs::write(&path, LAYOUT).with_context(|| format!("Failed to write '{}'", path.display()))
}

/// Write the starter fragment files
pub fn write_fragments(root: &Path) -> Result<()> {
    for (name, content) in FRAGMENTS {
        let path = root.join(name);
        fs::write(&path, content)
            .with_context(|| format!("Failed to write '{}'", path.display()))?;
    }
    Ok(())
}

/// Write .gitignore and .ignore files with standard patterns
///
/// Patterns include the output directory and OS-specific files.
pub fn write_ignore_files(root: &Path, output_dir: &Path) -> Result<()> {
    let output_pattern = Path::new("/").join(output_dir);
    let patterns = [
        output_pattern.to_string_lossy().into_owned(),
        ".DS_Store".to_string(),
    ];

    let content = patterns.join("\n");

    for filename in IGNORE_FILES {
        let path = root.join(filename);
        // Only create if doesn't exist (don't overwrite user's ignore files)
        if !path.exists() {
            fs::write(&path, &content)
                .with_context(|| format!("Failed to write '{}'", path.display()))?;
        }
    }

    Ok(())
}
