use std::{cell::RefCell, collections::BTreeMap};

///
/// OpCounters
///

#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct OpCounters {
    pub list_calls: u64,
    pub load_calls: u64,
    pub create_calls: u64,
    pub update_calls: u64,
    pub rows_listed: u64,
    pub not_found_hits: u64,
    pub patch_rejections: u64,
}

///
/// MetricsReport
///
/// Point-in-time snapshot: global counters plus a per-record-type
/// breakdown keyed by record name.
///

#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct MetricsReport {
    pub ops: OpCounters,
    pub records: BTreeMap<String, OpCounters>,
}

thread_local! {
    static STATE: RefCell<MetricsReport> = RefCell::new(MetricsReport::default());
}

pub(crate) fn with_state_mut<T>(f: impl FnOnce(&mut MetricsReport) -> T) -> T {
    STATE.with(|state| f(&mut state.borrow_mut()))
}

pub(crate) fn report() -> MetricsReport {
    STATE.with(|state| state.borrow().clone())
}

pub(crate) fn reset_all() {
    STATE.with(|state| *state.borrow_mut() = MetricsReport::default());
}
