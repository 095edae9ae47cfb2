//! Route template to output path mapping.
//!
//! Decides, per route template, the relative file path under the output
//! root, or that the route cannot be materialized as a static file.
//!
//! The mapping is deterministic and total, but not injective: distinct
//! templates may produce the same path after mapping (`/about` and `about`
//! both become `about.html`). Collisions are not detected; the later write
//! wins.

use std::fmt;
use std::path::PathBuf;

/// Mapping decision for a single route template.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RouteTarget {
    /// Route materializes as a file at this path (relative to the output root).
    File(PathBuf),
    /// Route cannot be materialized; skipped, not an error.
    Skip(SkipReason),
}

impl RouteTarget {
    /// Relative output path, if the route is mappable.
    pub fn path(&self) -> Option<&PathBuf> {
        match self {
            Self::File(path) => Some(path),
            Self::Skip(_) => None,
        }
    }
}

/// Why a route template could not be mapped to a file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkipReason {
    /// Template contains a `{name}` parameter placeholder.
    Parameterized,
    /// Template is empty after stripping the leading slash.
    EmptyTemplate,
}

impl SkipReason {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Parameterized => "parameterized",
            Self::EmptyTemplate => "empty template",
        }
    }
}

impl fmt::Display for SkipReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Map a route template to its output path.
///
/// Rules, first match wins:
/// 1. `/` maps to `index.html`.
/// 2. A template containing `{` anywhere is parameterized and skipped.
///    This is a coarse check, not a route-grammar parse; templates are
///    trusted as produced by the host framework's routing layer.
/// 3. Otherwise strip a single leading `/`, append `.html`, and convert
///    the remaining `/` separators to platform separators.
///
/// An empty template is skipped rather than mapped to a bare `.html`.
///
/// # Examples
/// ```ignore
/// assert_eq!(route_target("/"), RouteTarget::File("index.html".into()));
/// assert_eq!(route_target("/about"), RouteTarget::File("about.html".into()));
/// assert!(matches!(route_target("/customer/{id}"), RouteTarget::Skip(_)));
/// ```
pub fn route_target(template: &str) -> RouteTarget {
    if template == "/" {
        return RouteTarget::File(PathBuf::from("index.html"));
    }

    if template.contains('{') {
        return RouteTarget::Skip(SkipReason::Parameterized);
    }

    let rest = template.strip_prefix('/').unwrap_or(template);
    if rest.is_empty() {
        return RouteTarget::Skip(SkipReason::EmptyTemplate);
    }

    // `a/b` becomes `a` + `b.html`, assembled with platform separators
    let file = format!("{rest}.html");
    RouteTarget::File(file.split('/').collect())
}
