//! `[build]` section configuration.
//!
//! # Example
//!
//! ```toml
//! [build]
//! output = "public"        # Output directory (relative to project root)
//! layout = "layout.html"   # Optional page shell with a {{ content }} slot
//! ```

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::config::{ConfigDiagnostics, FieldPath};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct BuildSection {
    /// Output tree root. Supports `~` expansion; `-o/--output` overrides.
    pub output: PathBuf,

    /// Optional layout shell wrapped around every fragment.
    pub layout: Option<PathBuf>,

    /// Remove the output tree before building (CLI only).
    #[serde(skip)]
    pub clean: bool,
}

impl Default for BuildSection {
    fn default() -> Self {
        Self {
            output: "public".into(),
            layout: None,
            clean: false,
        }
    }
}

impl BuildSection {
    /// Validate the build section. Paths are absolute at this point.
    pub fn validate(&self, diag: &mut ConfigDiagnostics) {
        if let Some(layout) = &self.layout
            && !layout.is_file()
        {
            diag.error_with_hint(
                FieldPath::new("build.layout"),
                format!("layout '{}' not found", layout.display()),
                "create the file or remove the setting",
            );
        }
    }
}
