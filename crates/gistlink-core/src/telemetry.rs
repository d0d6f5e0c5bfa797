//! Page-view telemetry.
//!
//! One tracker per process, set up once before anything is rendered. Each
//! mount records a single page view keyed by path + query string. Recording
//! never fails the caller; without a measurement ID it is a no-op.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::OnceLock;

/// Target used for page-view events so they can be filtered with `GISTLINK_LOG`.
pub const TELEMETRY_TARGET: &str = "gistlink::telemetry";

static TRACKER: OnceLock<PageViewTracker> = OnceLock::new();

#[derive(Debug)]
pub struct PageViewTracker {
    measurement_id: Option<String>,
    page_views: AtomicU64,
}

impl PageViewTracker {
    pub fn new(measurement_id: Option<String>) -> Self {
        Self {
            measurement_id,
            page_views: AtomicU64::new(0),
        }
    }

    pub fn is_enabled(&self) -> bool {
        self.measurement_id.is_some()
    }

    pub fn record_page_view(&self, page: &str) {
        let Some(id) = self.measurement_id.as_deref() else {
            return;
        };
        let count = self.page_views.fetch_add(1, Ordering::Relaxed) + 1;
        tracing::info!(
            target: TELEMETRY_TARGET,
            measurement_id = id,
            hit_type = "pageview",
            page,
            count,
            "page view"
        );
    }

    pub fn page_views(&self) -> u64 {
        self.page_views.load(Ordering::Relaxed)
    }
}

/// Sets up the process-wide tracker. Later calls keep the first tracker.
pub fn init(measurement_id: Option<String>) {
    let enabled = measurement_id.is_some();
    if TRACKER.set(PageViewTracker::new(measurement_id)).is_err() {
        tracing::debug!(target: TELEMETRY_TARGET, "telemetry already initialized");
        return;
    }
    tracing::debug!(target: TELEMETRY_TARGET, enabled, "telemetry initialized");
}

/// The process-wide tracker, once [`init`] ran.
pub fn tracker() -> Option<&'static PageViewTracker> {
    TRACKER.get()
}
