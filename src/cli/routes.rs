//! Routes command - list route mappings without writing files.
//!
//! Walks the same discovery and mapping steps as a build, but renders
//! nothing and touches no output directory. Useful for checking what a
//! build would produce, and as machine-readable input (`--json`) for
//! deploy tooling.

use anyhow::Result;
use serde::Serialize;

use crate::cli::RoutesArgs;
use crate::config::SiteConfig;
use crate::log;
use crate::registry::{Registry, RouteTemplate};
use crate::route::{RouteTarget, route_target};

/// One row of the route listing.
#[derive(Debug, Serialize)]
struct RouteRow {
    component: String,
    template: RouteTemplate,
    /// Output path relative to the output root, `None` when skipped.
    #[serde(skip_serializing_if = "Option::is_none")]
    path: Option<String>,
    /// Skip reason, `None` when mapped.
    #[serde(skip_serializing_if = "Option::is_none")]
    skipped: Option<&'static str>,
}

pub fn run_routes(args: &RoutesArgs, config: &SiteConfig) -> Result<()> {
    let registry = Registry::from_config(config);
    let rows = collect_rows(&registry);

    if args.json {
        let formatted = if args.pretty {
            serde_json::to_string_pretty(&rows)?
        } else {
            serde_json::to_string(&rows)?
        };
        println!("{}", formatted);
        return Ok(());
    }

    print_rows(&rows);
    Ok(())
}

/// Map every discovered route, in discovery then declaration order.
fn collect_rows(registry: &Registry) -> Vec<RouteRow> {
    let mut rows = Vec::new();

    for component in registry.discover() {
        for template in component.routes() {
            rows.push(match route_target(template.as_str()) {
                RouteTarget::File(path) => RouteRow {
                    component: component.name().to_string(),
                    template: template.clone(),
                    path: Some(path.display().to_string()),
                    skipped: None,
                },
                RouteTarget::Skip(reason) => RouteRow {
                    component: component.name().to_string(),
                    template: template.clone(),
                    path: None,
                    skipped: Some(reason.as_str()),
                },
            });
        }
    }

    rows
}

/// Grouped console listing, one header per component.
fn print_rows(rows: &[RouteRow]) {
    let mut current: Option<&str> = None;

    for row in rows {
        if current != Some(row.component.as_str()) {
            current = Some(row.component.as_str());
            log!("routes"; "[{}]", row.component);
        }

        match (&row.path, row.skipped) {
            (Some(path), _) => log!("routes"; "  {:<20}  -->  {}", row.template, path),
            (None, Some(reason)) => log!("routes"; "  {:<20}  skipped ({})", row.template, reason),
            (None, None) => {}
        }
    }

    let mappable = rows.iter().filter(|r| r.path.is_some()).count();
    log!("routes"; "{} mappable, {} skipped", mappable, rows.len() - mappable);
}

// ============================================================================
// tests
// ============================================================================
