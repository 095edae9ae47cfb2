//! Structured progress events for a generation run.
//!
//! The pipeline emits typed events instead of writing to the console
//! directly; a sink decides what to do with them. [`ConsoleSink`] prints
//! them through the logger, [`MemorySink`] collects them for assertions.
//!
//! Ordering within one run: for each discovered component in discovery
//! order, `ComponentStarted` precedes that component's route events; route
//! events follow declaration order; exactly one `Finished` terminates the
//! stream, and its `pages` count equals the number of `PageWritten`
//! events.

use std::path::PathBuf;
use std::time::Duration;

use crate::registry::RouteTemplate;
use crate::route::SkipReason;
use crate::{debug, log};

/// One step of a generation run.
#[derive(Debug, Clone, PartialEq)]
pub enum Event {
    /// A component's render began.
    ComponentStarted { component: String },

    /// A route mapped to an output path (relative to the output root).
    RouteMapped {
        component: String,
        template: RouteTemplate,
        path: PathBuf,
    },

    /// A route could not be materialized; no file is produced.
    RouteSkipped {
        component: String,
        template: RouteTemplate,
        reason: SkipReason,
    },

    /// The rendered HTML was persisted at the path.
    PageWritten {
        component: String,
        template: RouteTemplate,
        path: PathBuf,
    },

    /// Run summary; always the final event.
    Finished {
        pages: usize,
        skipped: usize,
        elapsed: Duration,
    },
}

/// Receiver for generation events.
pub trait EventSink {
    fn emit(&mut self, event: Event);
}

// ============================================================================
// ConsoleSink
// ============================================================================

/// Prints events as progress lines: a header per component, one aligned
/// line per route, and a final count. Mapping decisions are verbose-only;
/// the write confirmation carries the user-facing line.
#[derive(Debug, Default)]
pub struct ConsoleSink;

impl EventSink for ConsoleSink {
    fn emit(&mut self, event: Event) {
        match event {
            Event::ComponentStarted { component } => {
                log!("render"; "[{}]", component);
            }
            Event::RouteMapped { template, path, .. } => {
                debug!("route"; "{:<20}  -->  {}", template, path.display());
            }
            Event::RouteSkipped {
                template, reason, ..
            } => {
                log!("route"; "{:<20}  skipped ({})", template, reason);
            }
            Event::PageWritten { template, path, .. } => {
                log!("write"; "{:<20}  -->  {}", template, path.display());
            }
            Event::Finished {
                pages,
                skipped,
                elapsed,
            } => {
                if skipped > 0 {
                    log!("build"; "created {} pages in {:.1?} ({} skipped)", pages, elapsed, skipped);
                } else {
                    log!("build"; "created {} pages in {:.1?}", pages, elapsed);
                }
            }
        }
    }
}

// ============================================================================
// MemorySink
// ============================================================================

/// Records events in emission order.
#[derive(Debug, Default)]
pub struct MemorySink {
    events: Vec<Event>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn events(&self) -> &[Event] {
        &self.events
    }

    /// Count of events matching the predicate.
    pub fn count(&self, pred: impl Fn(&Event) -> bool) -> usize {
        self.events.iter().filter(|e| pred(e)).count()
    }
}

impl EventSink for MemorySink {
    fn emit(&mut self, event: Event) {
        self.events.push(event);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_memory_sink_records_in_order() {
        let mut sink = MemorySink::new();
        sink.emit(Event::ComponentStarted {
            component: "Index".into(),
        });
        sink.emit(Event::Finished {
            pages: 0,
            skipped: 0,
            elapsed: Duration::ZERO,
        });

        assert_eq!(sink.events().len(), 2);
        assert!(matches!(sink.events()[0], Event::ComponentStarted { .. }));
        assert!(matches!(sink.events()[1], Event::Finished { .. }));
    }

    #[test]
    fn test_memory_sink_count() {
        let mut sink = MemorySink::new();
        for template in ["/", "/home"] {
            sink.emit(Event::PageWritten {
                component: "Index".into(),
                template: RouteTemplate::new(template),
                path: PathBuf::from("index.html"),
            });
        }
        sink.emit(Event::RouteSkipped {
            component: "Index".into(),
            template: RouteTemplate::new("/x/{id}"),
            reason: SkipReason::Parameterized,
        });

        assert_eq!(sink.count(|e| matches!(e, Event::PageWritten { .. })), 2);
        assert_eq!(sink.count(|e| matches!(e, Event::RouteSkipped { .. })), 1);
    }
}
