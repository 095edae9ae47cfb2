//! Fragment-file rendering backend.
//!
//! Each component names a pre-rendered HTML fragment file. Rendering
//! reads the fragment and, when a layout is configured, wraps it in the
//! layout shell. The layout is a plain HTML file with a `{{ content }}`
//! placeholder (mandatory) and an optional `{{ title }}` placeholder
//! substituted with the site title. String interpolation is deliberate;
//! no template engine.

use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};

use crate::config::SiteConfig;
use crate::registry::ComponentDescriptor;

use super::Renderer;

/// Placeholder replaced with the rendered fragment. Mandatory in a layout.
pub const CONTENT_SLOT: &str = "{{ content }}";

/// Placeholder replaced with the site title. Optional.
pub const TITLE_SLOT: &str = "{{ title }}";

/// Renders components from pre-rendered HTML fragment files.
#[derive(Debug, Default)]
pub struct FragmentRenderer {
    /// Component name -> fragment file path.
    fragments: HashMap<String, PathBuf>,
    /// Loaded layout shell, validated to contain the content slot.
    layout: Option<String>,
    /// Substituted into the layout's title slot.
    title: String,
}

impl FragmentRenderer {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            fragments: HashMap::new(),
            layout: None,
            title: title.into(),
        }
    }

    /// Register the fragment file for a component.
    pub fn with_fragment(mut self, component: impl Into<String>, path: impl Into<PathBuf>) -> Self {
        self.fragments.insert(component.into(), path.into());
        self
    }

    /// Use a layout shell. Fails if the shell has no `{{ content }}` slot.
    pub fn with_layout(mut self, layout: impl Into<String>) -> Result<Self> {
        let layout = layout.into();
        if !layout.contains(CONTENT_SLOT) {
            bail!("layout is missing the `{CONTENT_SLOT}` placeholder");
        }
        self.layout = Some(layout);
        Ok(self)
    }

    /// Build the renderer the CLI wires up: fragments from `[[component]]`
    /// tables, layout and title from `[build]` / `[site]`. Paths are
    /// expected to be absolute already (config normalization).
    pub fn from_config(config: &SiteConfig) -> Result<Self> {
        let mut renderer = Self::new(config.site.title.clone());

        for entry in &config.components {
            renderer = renderer.with_fragment(entry.name.clone(), entry.fragment.clone());
        }

        if let Some(layout_path) = &config.build.layout {
            let layout = read_layout(layout_path)?;
            renderer = renderer.with_layout(layout)?;
        }

        Ok(renderer)
    }
}

fn read_layout(path: &Path) -> Result<String> {
    fs::read_to_string(path)
        .with_context(|| format!("Failed to read layout '{}'", path.display()))
}

impl Renderer for FragmentRenderer {
    fn render(&self, component: &ComponentDescriptor) -> Result<String> {
        let path = self.fragments.get(component.name()).with_context(|| {
            format!("no fragment registered for component '{}'", component.name())
        })?;

        let fragment = fs::read_to_string(path).with_context(|| {
            format!(
                "Failed to read fragment '{}' for component '{}'",
                path.display(),
                component.name()
            )
        })?;

        Ok(match &self.layout {
            Some(layout) => layout
                .replace(CONTENT_SLOT, &fragment)
                .replace(TITLE_SLOT, &self.title),
            None => fragment,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::registry::Registry;
    use tempfile::TempDir;

    fn descriptor(name: &str) -> ComponentDescriptor {
        let registry = Registry::builder().component(name, ["/"]).build();
        registry.discover().remove(0)
    }

    #[test]
    fn test_render_without_layout_returns_fragment() {
        let dir = TempDir::new().unwrap();
        let fragment = dir.path().join("index.html");
        fs::write(&fragment, "<h1>Hello</h1>").unwrap();

        let renderer = FragmentRenderer::new("Site").with_fragment("Index", &fragment);
        let html = renderer.render(&descriptor("Index")).unwrap();
        assert_eq!(html, "<h1>Hello</h1>");
    }

    #[test]
    fn test_render_wraps_fragment_in_layout() {
        let dir = TempDir::new().unwrap();
        let fragment = dir.path().join("index.html");
        fs::write(&fragment, "<h1>Hello</h1>").unwrap();

        let renderer = FragmentRenderer::new("My Site")
            .with_fragment("Index", &fragment)
            .with_layout("<title>{{ title }}</title><body>{{ content }}</body>")
            .unwrap();

        let html = renderer.render(&descriptor("Index")).unwrap();
        assert_eq!(html, "<title>My Site</title><body><h1>Hello</h1></body>");
    }

    #[test]
    fn test_layout_without_content_slot_is_rejected() {
        let result = FragmentRenderer::new("Site").with_layout("<body>static</body>");
        let err = result.unwrap_err().to_string();
        assert!(err.contains("{{ content }}"));
    }

    #[test]
    fn test_layout_title_slot_is_optional() {
        let dir = TempDir::new().unwrap();
        let fragment = dir.path().join("a.html");
        fs::write(&fragment, "x").unwrap();

        let renderer = FragmentRenderer::new("Site")
            .with_fragment("A", &fragment)
            .with_layout("<body>{{ content }}</body>")
            .unwrap();

        assert_eq!(renderer.render(&descriptor("A")).unwrap(), "<body>x</body>");
    }

    #[test]
    fn test_missing_fragment_file_is_an_error() {
        let dir = TempDir::new().unwrap();
        let renderer =
            FragmentRenderer::new("Site").with_fragment("Index", dir.path().join("gone.html"));

        let err = renderer.render(&descriptor("Index")).unwrap_err();
        assert!(format!("{:#}", err).contains("Index"));
    }

    #[test]
    fn test_unregistered_component_is_an_error() {
        let renderer = FragmentRenderer::new("Site");
        let err = renderer.render(&descriptor("Unknown")).unwrap_err();
        assert!(err.to_string().contains("Unknown"));
    }
}
