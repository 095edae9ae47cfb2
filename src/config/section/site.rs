//! `[site]` section configuration.
//!
//! Site metadata. The title is substituted into the layout's
//! `{{ title }}` placeholder.
//!
//! # Example
//!
//! ```toml
//! [site]
//! title = "My Site"
//! ```

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteSection {
    /// Site title.
    pub title: String,
}
