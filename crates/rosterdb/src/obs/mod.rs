//! Observability: store operation telemetry and sink abstractions.
//!
//! Store logic never touches `obs::metrics` directly; all
//! instrumentation flows through `StoreEvent` and `MetricsSink`.

pub(crate) mod metrics;
pub(crate) mod sink;

pub use metrics::{MetricsReport, OpCounters};
pub use sink::{MetricsSink, StoreEvent, metrics_report, metrics_reset_all, set_metrics_sink};
