//! Component registry - explicit discovery of renderable units.
//!
//! Components are registered up front (programmatically through
//! [`RegistryBuilder`], or from `[[component]]` tables in `petrify.toml`)
//! instead of being reflected out of a loaded module. Discovery then
//! returns descriptors for every component carrying at least one route,
//! in registration order.

use std::fmt;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::config::SiteConfig;

// ============================================================================
// RouteTemplate
// ============================================================================

/// A URL-path pattern associated with a component, such as `/`, `/about`
/// or `/customer/{id}`.
///
/// Stored exactly as declared: no case, slash or placeholder normalization
/// happens here. Immutable after creation.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct RouteTemplate(Arc<str>);

impl RouteTemplate {
    pub fn new(template: &str) -> Self {
        Self(Arc::from(template))
    }

    #[inline]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for RouteTemplate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // pad() keeps width/alignment flags working, e.g. `{:<20}`
        f.pad(&self.0)
    }
}

impl AsRef<str> for RouteTemplate {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl From<&str> for RouteTemplate {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

impl From<String> for RouteTemplate {
    fn from(s: String) -> Self {
        Self(Arc::from(s))
    }
}

impl PartialEq<str> for RouteTemplate {
    fn eq(&self, other: &str) -> bool {
        self.0.as_ref() == other
    }
}

impl PartialEq<&str> for RouteTemplate {
    fn eq(&self, other: &&str) -> bool {
        self.0.as_ref() == *other
    }
}

impl Serialize for RouteTemplate {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        self.0.serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for RouteTemplate {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Ok(Self::from(s))
    }
}

// ============================================================================
// ComponentDescriptor
// ============================================================================

/// One renderable unit: a component name and its route declarations.
///
/// Created once per discovery pass and owned by the pipeline for the
/// duration of a run; not mutated afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ComponentDescriptor {
    name: String,
    routes: Vec<RouteTemplate>,
}

impl ComponentDescriptor {
    pub fn new(
        name: impl Into<String>,
        routes: impl IntoIterator<Item = RouteTemplate>,
    ) -> Self {
        Self {
            name: name.into(),
            routes: routes.into_iter().collect(),
        }
    }

    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Route declarations in declaration order. May be empty for a
    /// registered component; such components never appear in discovery
    /// output.
    #[inline]
    pub fn routes(&self) -> &[RouteTemplate] {
        &self.routes
    }
}

impl fmt::Display for ComponentDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)
    }
}

// ============================================================================
// Registry
// ============================================================================

/// Ordered collection of registered components.
#[derive(Debug, Clone, Default)]
pub struct Registry {
    components: Vec<ComponentDescriptor>,
}

impl Registry {
    pub fn builder() -> RegistryBuilder {
        RegistryBuilder::default()
    }

    /// Build the registry from `[[component]]` tables in the config.
    /// Registration order follows the order of the tables in the file.
    pub fn from_config(config: &SiteConfig) -> Self {
        let components = config
            .components
            .iter()
            .map(|entry| ComponentDescriptor::new(entry.name.clone(), entry.routes.iter().cloned()))
            .collect();
        Self { components }
    }

    /// Return a descriptor for every registered component with at least
    /// one route declaration, preserving registration order.
    ///
    /// A component with zero routes is excluded - not an error, simply
    /// not emitted. Pure read; no side effects.
    pub fn discover(&self) -> Vec<ComponentDescriptor> {
        self.components
            .iter()
            .filter(|c| !c.routes.is_empty())
            .cloned()
            .collect()
    }

    /// Number of registered components, including zero-route ones.
    pub fn len(&self) -> usize {
        self.components.len()
    }

    pub fn is_empty(&self) -> bool {
        self.components.is_empty()
    }
}

/// Programmatic registry construction.
///
/// # Example
/// ```ignore
/// let registry = Registry::builder()
///     .component("Index", ["/", "/home"])
///     .component("Customers", ["/customers", "/customer/{id}"])
///     .build();
/// ```
#[derive(Debug, Default)]
pub struct RegistryBuilder {
    components: Vec<ComponentDescriptor>,
}

impl RegistryBuilder {
    /// Register a component with its route declarations. Zero routes is
    /// allowed at registration time; discovery will skip the component.
    pub fn component<I, S>(mut self, name: impl Into<String>, routes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let routes = routes
            .into_iter()
            .map(|r| RouteTemplate::new(r.as_ref()));
        self.components.push(ComponentDescriptor::new(name, routes));
        self
    }

    pub fn build(self) -> Registry {
        Registry {
            components: self.components,
        }
    }
}

// ============================================================================
// tests
// ============================================================================
