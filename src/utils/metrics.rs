use std::collections::BTreeMap;
use std::fmt::Write;
use std::sync::Arc;

use lazy_static::lazy_static;
use parking_lot::Mutex;

pub const HEALTH_REQUESTS: &str = "health_requests_total";
pub const RPC_REQUESTS: &str = "rpc_requests_total";
pub const RPC_DECODE_ERRORS: &str = "rpc_decode_errors_total";
pub const MINT_REQUESTS: &str = "mint_requests_total";
pub const MINT_REJECTED: &str = "mint_rejected_total";
pub const TOKENS_MINTED: &str = "tokens_minted_total";

/// Counter registry (simple, Prometheus-style)
#[derive(Clone, Default)]
pub struct MetricsRegistry {
    counters: Arc<Mutex<BTreeMap<String, u64>>>,
}

impl MetricsRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn inc_counter(&self, name: &str) {
        let mut counters = self.counters.lock();
        *counters.entry(name.to_string()).or_insert(0) += 1;
    }

    pub fn snapshot(&self) -> BTreeMap<String, u64> {
        self.counters.lock().clone()
    }

    /// Render in the Prometheus text exposition format, sorted by name.
    pub fn render(&self) -> String {
        let mut out = String::new();
        for (name, val) in self.snapshot() {
            let _ = writeln!(out, "# TYPE {name} counter");
            let _ = writeln!(out, "{name} {val}");
        }
        out
    }
}

lazy_static! {
    pub static ref METRICS: MetricsRegistry = MetricsRegistry::new();
}
