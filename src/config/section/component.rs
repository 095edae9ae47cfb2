//! `[[component]]` table configuration.
//!
//! One table per renderable component: a name, its route declarations,
//! and the fragment file the bundled renderer reads.
//!
//! # Example
//!
//! ```toml
//! [[component]]
//! name = "Index"
//! routes = ["/", "/home"]
//! fragment = "fragments/index.html"
//! ```

use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::path::PathBuf;

use crate::config::{ConfigDiagnostics, FieldPath};
use crate::registry::RouteTemplate;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ComponentEntry {
    /// Component name; must be unique across the manifest.
    pub name: String,

    /// Route declarations in declaration order. Zero routes is allowed;
    /// the component is then never discovered.
    pub routes: Vec<RouteTemplate>,

    /// Pre-rendered HTML fragment file (relative to project root).
    pub fragment: PathBuf,
}

impl ComponentEntry {
    /// Validate one entry. The fragment path is absolute at this point;
    /// emptiness is checked earlier, against the raw config.
    pub fn validate(&self, index: usize, diag: &mut ConfigDiagnostics) {
        if self.name.trim().is_empty() {
            diag.error(
                FieldPath::new("component.name"),
                format!("component #{} has an empty name", index + 1),
            );
        }

        if !self.fragment.as_os_str().is_empty() && !self.fragment.is_file() {
            diag.error_with_hint(
                FieldPath::new("component.fragment"),
                format!(
                    "fragment '{}' for component '{}' not found",
                    self.fragment.display(),
                    self.name
                ),
                "create the file or fix the path",
            );
        }
    }
}

/// Validate all component entries, including cross-entry rules
/// (duplicate names).
pub fn validate_components(components: &[ComponentEntry], diag: &mut ConfigDiagnostics) {
    let mut seen: HashSet<&str> = HashSet::new();

    for (index, entry) in components.iter().enumerate() {
        entry.validate(index, diag);

        if !entry.name.trim().is_empty() && !seen.insert(entry.name.as_str()) {
            diag.error(
                FieldPath::new("component.name"),
                format!("duplicate component name '{}'", entry.name),
            );
        }
    }
}
