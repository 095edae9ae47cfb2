//! Page emission - render once per component, write once per route.
//!
//! The pipeline is strictly sequential: one component at a time, one
//! route at a time. Rendering happens once per component regardless of
//! how many routes it owns; the HTML is route-independent. Any directory
//! or file write failure aborts the run immediately - no retry, no
//! rollback, files already written stay on disk.

use std::fs;
use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};

use anyhow::{Context, Result, bail};

use crate::event::{Event, EventSink};
use crate::registry::Registry;
use crate::render::Renderer;
use crate::route::{RouteTarget, route_target};

/// Summary of one generation run.
#[derive(Debug, Clone)]
pub struct GenerationReport {
    /// Pages successfully created. Increments once per write, including
    /// writes that overwrite an earlier route's output (collisions are
    /// not deduplicated).
    pub pages: usize,
    /// Routes skipped as unmappable.
    pub skipped: usize,
    pub elapsed: Duration,
}

/// Writes rendered components into the output tree.
pub struct Emitter<'r> {
    target: PathBuf,
    renderer: &'r dyn Renderer,
}

impl<'r> Emitter<'r> {
    /// Validate the target directory and create it if absent.
    ///
    /// An empty or whitespace-only target path is a configuration error,
    /// caught before any work begins.
    pub fn new(target: impl Into<PathBuf>, renderer: &'r dyn Renderer) -> Result<Self> {
        let target = target.into();
        if target.to_string_lossy().trim().is_empty() {
            bail!("output directory path is empty");
        }

        fs::create_dir_all(&target).with_context(|| {
            format!("Failed to create output directory '{}'", target.display())
        })?;

        Ok(Self { target, renderer })
    }

    /// Run the pipeline over every discovered component.
    ///
    /// Per component: emit `ComponentStarted`, render exactly once (even
    /// when every route turns out to be unmappable), then map and write
    /// each route in declaration order. If two routes map to the same
    /// path the later write silently overwrites the earlier one; both
    /// count as pages.
    pub fn run(&self, registry: &Registry, sink: &mut dyn EventSink) -> Result<GenerationReport> {
        let start = Instant::now();
        let mut pages = 0;
        let mut skipped = 0;

        for component in registry.discover() {
            sink.emit(Event::ComponentStarted {
                component: component.name().to_string(),
            });

            let html = self.renderer.render(&component)?;

            for template in component.routes() {
                match route_target(template.as_str()) {
                    RouteTarget::File(path) => {
                        sink.emit(Event::RouteMapped {
                            component: component.name().to_string(),
                            template: template.clone(),
                            path: path.clone(),
                        });

                        self.write_page(&path, &html)?;
                        pages += 1;

                        sink.emit(Event::PageWritten {
                            component: component.name().to_string(),
                            template: template.clone(),
                            path,
                        });
                    }
                    RouteTarget::Skip(reason) => {
                        skipped += 1;
                        sink.emit(Event::RouteSkipped {
                            component: component.name().to_string(),
                            template: template.clone(),
                            reason,
                        });
                    }
                }
            }
        }

        let elapsed = start.elapsed();
        sink.emit(Event::Finished {
            pages,
            skipped,
            elapsed,
        });

        Ok(GenerationReport {
            pages,
            skipped,
            elapsed,
        })
    }

    /// Write HTML at the relative path, creating intermediate directories.
    /// Overwrites an existing file.
    fn write_page(&self, relative: &Path, html: &str) -> Result<()> {
        let path = self.target.join(relative);

        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create directory '{}'", parent.display()))?;
        }

        fs::write(&path, html)
            .with_context(|| format!("Failed to write '{}'", path.display()))
    }
}

// ============================================================================
// tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::event::MemorySink;
    use crate::registry::ComponentDescriptor;
    use std::cell::Cell;
    use tempfile::TempDir;

    /// Returns `<ComponentName>` as the page body and counts render calls.
    #[derive(Default)]
    struct CountingRenderer {
        calls: Cell<usize>,
    }

    impl Renderer for CountingRenderer {
        fn render(&self, component: &ComponentDescriptor) -> Result<String> {
            self.calls.set(self.calls.get() + 1);
            Ok(format!("<{}>", component.name()))
        }
    }

    fn run(registry: &Registry, target: &Path) -> (GenerationReport, MemorySink, usize) {
        let renderer = CountingRenderer::default();
        let emitter = Emitter::new(target, &renderer).unwrap();
        let mut sink = MemorySink::new();
        let report = emitter.run(registry, &mut sink).unwrap();
        (report, sink, renderer.calls.get())
    }

    // Emitter carries a `&dyn Renderer` and has no Debug impl, so the
    // error arm is destructured instead of `unwrap_err()`.
    #[test]
    fn test_empty_target_path_is_rejected() {
        let renderer = CountingRenderer::default();
        let Err(err) = Emitter::new("", &renderer) else {
            panic!("expected an empty target to be rejected");
        };
        assert!(err.to_string().contains("empty"));
    }

    #[test]
    fn test_blank_target_path_is_rejected() {
        let renderer = CountingRenderer::default();
        let Err(err) = Emitter::new("   ", &renderer) else {
            panic!("expected a whitespace-only target to be rejected");
        };
        assert!(err.to_string().contains("empty"));
    }

    #[test]
    fn test_target_directory_is_created() {
        let dir = TempDir::new().unwrap();
        let target = dir.path().join("out/site");
        let renderer = CountingRenderer::default();
        Emitter::new(&target, &renderer).unwrap();
        assert!(target.is_dir());
    }

    #[test]
    fn test_renders_once_writes_per_route() {
        let dir = TempDir::new().unwrap();
        let registry = Registry::builder().component("Index", ["/", "/home"]).build();

        let (report, _, calls) = run(&registry, dir.path());

        assert_eq!(calls, 1);
        assert_eq!(report.pages, 2);

        let index = fs::read(dir.path().join("index.html")).unwrap();
        let home = fs::read(dir.path().join("home.html")).unwrap();
        assert_eq!(index, home);
        assert_eq!(index, b"<Index>");
    }

    #[test]
    fn test_renders_even_when_all_routes_skip() {
        let dir = TempDir::new().unwrap();
        let registry = Registry::builder()
            .component("Detail", ["/customer/{id}"])
            .build();

        let (report, sink, calls) = run(&registry, dir.path());

        assert_eq!(calls, 1);
        assert_eq!(report.pages, 0);
        assert_eq!(report.skipped, 1);
        assert_eq!(sink.count(|e| matches!(e, Event::RouteSkipped { .. })), 1);
    }

    #[test]
    fn test_nested_route_creates_directories() {
        let dir = TempDir::new().unwrap();
        let registry = Registry::builder()
            .component("List", ["/customer/list"])
            .build();

        let (report, ..) = run(&registry, dir.path());

        assert_eq!(report.pages, 1);
        assert!(dir.path().join("customer").join("list.html").is_file());
    }

    #[test]
    fn test_report_count_matches_written_events() {
        let dir = TempDir::new().unwrap();
        let registry = Registry::builder()
            .component("Index", ["/", "/home"])
            .component("Customers", ["/customers", "/customer/{id}"])
            .build();

        let (report, sink, _) = run(&registry, dir.path());

        assert_eq!(report.pages, 3);
        assert_eq!(report.skipped, 1);
        assert_eq!(
            report.pages,
            sink.count(|e| matches!(e, Event::PageWritten { .. }))
        );
    }

    #[test]
    fn test_collision_last_write_wins_and_both_count() {
        let dir = TempDir::new().unwrap();
        // `/about` and `about` map to the same file
        let registry = Registry::builder()
            .component("First", ["/about"])
            .component("Second", ["about"])
            .build();

        let (report, ..) = run(&registry, dir.path());

        assert_eq!(report.pages, 2);
        let content = fs::read_to_string(dir.path().join("about.html")).unwrap();
        assert_eq!(content, "<Second>");
    }

    #[test]
    fn test_event_stream_order() {
        let dir = TempDir::new().unwrap();
        let registry = Registry::builder()
            .component("Index", ["/", "/home"])
            .component("Customers", ["/customer/{id}"])
            .build();

        let (_, sink, _) = run(&registry, dir.path());

        let labels: Vec<String> = sink
            .events()
            .iter()
            .map(|e| match e {
                Event::ComponentStarted { component } => format!("start {component}"),
                Event::RouteMapped { template, .. } => format!("map {template}"),
                Event::PageWritten { template, .. } => format!("write {template}"),
                Event::RouteSkipped { template, .. } => format!("skip {template}"),
                Event::Finished { pages, skipped, .. } => format!("finish {pages}/{skipped}"),
            })
            .collect();

        assert_eq!(
            labels,
            [
                "start Index",
                "map /",
                "write /",
                "map /home",
                "write /home",
                "start Customers",
                "skip /customer/{id}",
                "finish 2/1",
            ]
        );
    }

    #[test]
    fn test_empty_registry_reports_zero_pages() {
        let dir = TempDir::new().unwrap();
        let registry = Registry::builder().build();

        let (report, sink, calls) = run(&registry, dir.path());

        assert_eq!(calls, 0);
        assert_eq!(report.pages, 0);
        assert_eq!(sink.events().len(), 1);
        assert!(matches!(sink.events()[0], Event::Finished { pages: 0, .. }));
    }

    #[test]
    fn test_io_failure_aborts_and_keeps_earlier_files() {
        let dir = TempDir::new().unwrap();
        // A file where a directory must go makes create_dir_all fail
        fs::write(dir.path().join("blocked"), "not a directory").unwrap();

        let registry = Registry::builder()
            .component("Pages", ["/ok", "/blocked/page"])
            .build();

        let renderer = CountingRenderer::default();
        let emitter = Emitter::new(dir.path(), &renderer).unwrap();
        let mut sink = MemorySink::new();

        let err = emitter.run(&registry, &mut sink).unwrap_err();
        assert!(format!("{:#}", err).contains("blocked"));

        // The first route's file survives the abort
        assert!(dir.path().join("ok.html").is_file());
        // No Finished event on an aborted run
        assert_eq!(sink.count(|e| matches!(e, Event::Finished { .. })), 0);
    }
}
