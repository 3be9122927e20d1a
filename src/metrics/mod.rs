// Private module declaration
mod server;

use prometheus::{IntCounterVec, Opts, Registry};

// Re-export for public API
pub use server::configure;

// ============================================================================
// Metrics Module - Prometheus metrics for observability
// ============================================================================
//
// Provides metrics for:
// - Order updates per field and outcome
// - Order page renders per response status
//
// All metrics are registered with Prometheus and can be scraped via /metrics
// ============================================================================

/// Outcome label for an order update.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UpdateOutcome {
    Accepted,
    Rejected,
    Failed,
}

impl UpdateOutcome {
    fn as_label(&self) -> &'static str {
        match self {
            UpdateOutcome::Accepted => "accepted",
            UpdateOutcome::Rejected => "rejected",
            UpdateOutcome::Failed => "failed",
        }
    }
}

/// Central metrics registry for the entire application
pub struct Metrics {
    registry: Registry,

    pub order_updates: IntCounterVec,
    pub page_renders: IntCounterVec,
}

impl Metrics {
    pub fn new() -> anyhow::Result<Self> {
        let registry = Registry::new();

        let order_updates = IntCounterVec::new(
            Opts::new("order_updates_total", "Total order update requests"),
            &["field", "outcome"],
        )?;
        registry.register(Box::new(order_updates.clone()))?;

        let page_renders = IntCounterVec::new(
            Opts::new("page_renders_total", "Total order pages rendered"),
            &["status"],
        )?;
        registry.register(Box::new(page_renders.clone()))?;

        Ok(Self {
            registry,
            order_updates,
            page_renders,
        })
    }

    pub fn registry(&self) -> &Registry {
        &self.registry
    }

    /// Helper to record an order update attempt
    pub fn record_order_update(&self, field: &str, outcome: UpdateOutcome) {
        self.order_updates
            .with_label_values(&[field, outcome.as_label()])
            .inc();
    }

    /// Helper to record a rendered order page
    pub fn record_page_render(&self, status: u16) {
        self.page_renders
            .with_label_values(&[status.to_string().as_str()])
            .inc();
    }
}
