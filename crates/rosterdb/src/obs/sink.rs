use crate::obs::metrics::{self, MetricsReport};
use std::cell::Cell;

thread_local! {
    static SINK_OVERRIDE: Cell<Option<&'static dyn MetricsSink>> = Cell::new(None);
}

///
/// StoreEvent
///

#[derive(Clone, Copy, Debug)]
pub enum StoreEvent {
    List { record: &'static str, rows: u64 },
    Load { record: &'static str, found: bool },
    Create { record: &'static str },
    Update { record: &'static str },
    PatchRejected { record: &'static str },
}

impl StoreEvent {
    #[must_use]
    pub const fn record_name(self) -> &'static str {
        match self {
            Self::List { record, .. }
            | Self::Load { record, .. }
            | Self::Create { record }
            | Self::Update { record }
            | Self::PatchRejected { record } => record,
        }
    }
}

///
/// MetricsSink
///

pub trait MetricsSink {
    fn record(&self, event: StoreEvent);
}

/// GlobalMetricsSink
/// Default process-local sink that writes into global metrics state.
/// Acts as the concrete sink when no override is installed.

pub(crate) struct GlobalMetricsSink;

impl MetricsSink for GlobalMetricsSink {
    fn record(&self, event: StoreEvent) {
        metrics::with_state_mut(|m| {
            let entry = m.records.entry(event.record_name().to_string()).or_default();

            match event {
                StoreEvent::List { rows, .. } => {
                    m.ops.list_calls = m.ops.list_calls.saturating_add(1);
                    m.ops.rows_listed = m.ops.rows_listed.saturating_add(rows);
                    entry.list_calls = entry.list_calls.saturating_add(1);
                    entry.rows_listed = entry.rows_listed.saturating_add(rows);
                }
                StoreEvent::Load { found, .. } => {
                    m.ops.load_calls = m.ops.load_calls.saturating_add(1);
                    entry.load_calls = entry.load_calls.saturating_add(1);
                    if !found {
                        m.ops.not_found_hits = m.ops.not_found_hits.saturating_add(1);
                        entry.not_found_hits = entry.not_found_hits.saturating_add(1);
                    }
                }
                StoreEvent::Create { .. } => {
                    m.ops.create_calls = m.ops.create_calls.saturating_add(1);
                    entry.create_calls = entry.create_calls.saturating_add(1);
                }
                StoreEvent::Update { .. } => {
                    m.ops.update_calls = m.ops.update_calls.saturating_add(1);
                    entry.update_calls = entry.update_calls.saturating_add(1);
                }
                StoreEvent::PatchRejected { .. } => {
                    m.ops.patch_rejections = m.ops.patch_rejections.saturating_add(1);
                    entry.patch_rejections = entry.patch_rejections.saturating_add(1);
                }
            }
        });
    }
}

pub(crate) const GLOBAL_METRICS_SINK: GlobalMetricsSink = GlobalMetricsSink;

pub(crate) fn record(event: StoreEvent) {
    match SINK_OVERRIDE.with(Cell::get) {
        Some(sink) => sink.record(event),
        None => GLOBAL_METRICS_SINK.record(event),
    }
}

/// Install or clear the thread-local sink override, returning the
/// previous one. Only `'static` sinks are accepted so no scope guard
/// is needed.
pub fn set_metrics_sink(sink: Option<&'static dyn MetricsSink>) -> Option<&'static dyn MetricsSink> {
    SINK_OVERRIDE.with(|cell| cell.replace(sink))
}

/// Snapshot the current metrics state for endpoint/test plumbing.
#[must_use]
pub fn metrics_report() -> MetricsReport {
    metrics::report()
}

/// Reset all metrics state.
pub fn metrics_reset_all() {
    metrics::reset_all();
}

///
/// TESTS
///

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{store::Repository, user::fixtures};
    use std::sync::atomic::{AtomicU64, Ordering};

    #[test]
    fn store_operations_accumulate_counters() {
        metrics_reset_all();

        let store = fixtures::seeded_store().unwrap();
        let key = fixtures::tom_sawyer().id.unwrap();
        store.list().unwrap();
        store.get(&key).unwrap();
        store.get(&crate::user::UserId::generate()).unwrap();

        let report = metrics_report();
        assert_eq!(report.ops.list_calls, 1);
        assert_eq!(report.ops.rows_listed, 12);
        assert_eq!(report.ops.load_calls, 2);
        assert_eq!(report.ops.not_found_hits, 1);

        let user_ops = report.records.get("user").unwrap();
        assert_eq!(user_ops.list_calls, 1);
        assert_eq!(user_ops.load_calls, 2);
    }

    #[test]
    fn reset_clears_all_state() {
        let store = fixtures::seeded_store().unwrap();
        store.list().unwrap();

        metrics_reset_all();
        assert_eq!(metrics_report(), MetricsReport::default());
    }

    struct CountingSink {
        calls: AtomicU64,
    }

    impl MetricsSink for CountingSink {
        fn record(&self, _: StoreEvent) {
            self.calls.fetch_add(1, Ordering::SeqCst);
        }
    }

    #[test]
    fn sink_override_routes_events_away_from_global_state() {
        static SINK: CountingSink = CountingSink {
            calls: AtomicU64::new(0),
        };

        metrics_reset_all();
        let prev = set_metrics_sink(Some(&SINK));

        let store = fixtures::seeded_store().unwrap();
        store.list().unwrap();
        assert_eq!(SINK.calls.load(Ordering::SeqCst), 1);
        assert_eq!(metrics_report().ops.list_calls, 0);

        set_metrics_sink(prev);
        store.list().unwrap();
        assert_eq!(SINK.calls.load(Ordering::SeqCst), 1);
        assert_eq!(metrics_report().ops.list_calls, 1);
    }
}
