//! Configuration section definitions.
//!
//! Each module corresponds to a section in `petrify.toml`:
//!
//! | Module      | TOML Section    | Purpose                          |
//! |-------------|-----------------|----------------------------------|
//! | `build`     | `[build]`       | Output directory, layout file    |
//! | `component` | `[[component]]` | Component name, routes, fragment |
//! | `site`      | `[site]`        | Site info (title)                |

pub mod build;
pub mod component;
pub mod site;

// Re-export section configs
pub use build::BuildSection;
pub use component::{ComponentEntry, validate_components};
pub use site::SiteSection;
