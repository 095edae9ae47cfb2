//! Rendering capability.
//!
//! The pipeline treats rendering as an opaque service: a component goes
//! in, an HTML string comes out. How a backend obtains its inputs
//! (template engines, injected services, layouts) is internal to the
//! backend; discovery and routing never see it.

mod fragment;

pub use fragment::FragmentRenderer;

use anyhow::Result;

use crate::registry::ComponentDescriptor;

/// Component in, HTML out. Implementations must be route-independent:
/// the emitter renders each component once and reuses the HTML for all
/// of its routes.
pub trait Renderer {
    fn render(&self, component: &ComponentDescriptor) -> Result<String>;
}
