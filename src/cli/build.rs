//! Site building orchestration.
//!
//! Build pipeline phases:
//! - **Init** - Prepare (optionally clean) the output directory
//! - **Discover** - Collect routable components from config
//! - **Render** - Render each component's fragment exactly once
//! - **Emit** - Write one HTML file per concrete route

use crate::{
    config::SiteConfig,
    emit::{Emitter, GenerationReport},
    event::ConsoleSink,
    log,
    registry::Registry,
    render::FragmentRenderer,
};
use anyhow::{Context, Result};
use std::{fs, path::Path};

/// Render every declared component route into the output directory.
pub fn build_site(config: &SiteConfig) -> Result<GenerationReport> {
    log!(
        "build";
        "building into '{}'",
        config.root_relative(&config.build.output).display()
    );

    init_output_dir(&config.build.output, config.build.clean)?;

    let registry = Registry::from_config(config);
    let renderer = FragmentRenderer::from_config(config)?;
    let emitter = Emitter::new(&config.build.output, &renderer)?;

    let report = emitter.run(&registry, &mut ConsoleSink)?;

    if report.pages == 0 {
        log!("warning"; "no pages written, check [[component]] routes in petrify.toml");
    }

    Ok(report)
}

/// Clear the output directory when `--clean` is set.
///
/// Without `--clean`, stale files from earlier runs are left in place
/// and current routes simply overwrite their own outputs.
fn init_output_dir(output: &Path, clean: bool) -> Result<()> {
    if clean && output.exists() {
        fs::remove_dir_all(output)
            .with_context(|| format!("Failed to clear output directory: {}", output.display()))?;
    }
    Ok(())
}

// ============================================================================
// tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    /// A finalized config pointing at a scratch project directory.
    fn test_config(dir: &Path) -> SiteConfig {
        let mut config = SiteConfig::from_str(
            r#"
[site]
title = "Test Site"

[[component]]
name = "Index"
routes = ["/", "/home"]
fragment = "index.html"

[[component]]
name = "Customers"
routes = ["/customer/{id}"]
fragment = "customers.html"
"#,
        )
        .unwrap();

        fs::write(dir.join("index.html"), "<h1>Hello</h1>").unwrap();
        fs::write(dir.join("customers.html"), "<ul></ul>").unwrap();

        config.set_root(dir);
        config.build.output = dir.join("public");
        for component in &mut config.components {
            component.fragment = dir.join(&component.fragment);
        }
        config
    }

    #[test]
    fn test_build_site_writes_pages() {
        let dir = TempDir::new().unwrap();
        let config = test_config(dir.path());

        let report = build_site(&config).unwrap();

        assert_eq!(report.pages, 2);
        assert_eq!(report.skipped, 1);
        assert!(config.build.output.join("index.html").is_file());
        assert!(config.build.output.join("home.html").is_file());
    }

    #[test]
    fn test_clean_removes_stale_files() {
        let dir = TempDir::new().unwrap();
        let mut config = test_config(dir.path());
        config.build.clean = true;

        fs::create_dir_all(&config.build.output).unwrap();
        let stale = config.build.output.join("stale.html");
        fs::write(&stale, "old").unwrap();

        build_site(&config).unwrap();

        assert!(!stale.exists());
        assert!(config.build.output.join("index.html").is_file());
    }

    #[test]
    fn test_without_clean_keeps_stale_files() {
        let dir = TempDir::new().unwrap();
        let config = test_config(dir.path());

        fs::create_dir_all(&config.build.output).unwrap();
        let stale = config.build.output.join("stale.html");
        fs::write(&stale, "old").unwrap();

        build_site(&config).unwrap();

        assert!(stale.exists());
    }

    #[test]
    fn test_layout_wraps_fragments() {
        let dir = TempDir::new().unwrap();
        let mut config = test_config(dir.path());

        let layout = dir.path().join("layout.html");
        fs::write(
            &layout,
            "<title>{{ title }}</title><main>{{ content }}</main>",
        )
        .unwrap();
        config.build.layout = Some(layout);

        build_site(&config).unwrap();

        let html = fs::read_to_string(config.build.output.join("index.html")).unwrap();
        assert_eq!(
            html,
            "<title>Test Site</title><main><h1>Hello</h1></main>"
        );
    }

    #[test]
    fn test_empty_site_builds_nothing() {
        let dir = TempDir::new().unwrap();
        let mut config = SiteConfig::from_str("[site]\ntitle = \"Empty\"\n").unwrap();
        config.set_root(dir.path());
        config.build.output = dir.path().join("public");

        let report = build_site(&config).unwrap();

        assert_eq!(report.pages, 0);
        assert!(config.build.output.is_dir());
    }
}
