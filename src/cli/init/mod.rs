//! Site initialization module.
//!
//! Creates new site structure with default configuration.
//!
//! # Module Structure
//!
//! - [`validate`]: Target directory checks before any write
//! - [`scaffold`]: Directory structure and starter file creation

mod scaffold;
mod validate;

use crate::{config::SiteConfig, log};
use anyhow::Result;

pub use validate::InitMode;

/// Create a new site with default structure
///
/// # Steps
/// 1. Validate target directory
/// 2. Create directory structure
/// 3. Write starter config, layout and fragments
pub fn new_site(site_config: &SiteConfig, has_name: bool) -> Result<()> {
    let root = site_config.get_root();
    let mode = InitMode::from_name_arg(has_name);

    if let Err(e) = mode.check_target(root) {
        log!("error"; "{}", e);
        std::process::exit(1);
    }

    scaffold::create_structure(root)?;
    scaffold::write_config(root)?;
    scaffold::write_layout(root)?;
    scaffold::write_fragments(root)?;

    let output_dir = site_config.root_relative(&site_config.build.output);
    scaffold::write_ignore_files(root, &output_dir)?;

    log!("init"; "Site initialized successfully");
    Ok(())
}
