/// Controls how much per-step detail a simulation records.
///
/// Fault, hit and seek metrics are always computed; annotations only
/// add the replacer state (LRU order, clock bits and hand) that a
/// visualisation needs to replay each decision.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TraceConfig {
    /// Record replacer state before and after every memory step
    pub annotations: bool,
}

impl Default for TraceConfig {
    fn default() -> Self {
        Self { annotations: true }
    }
}

impl TraceConfig {
    /// Config for callers that only need the metrics and frame snapshots
    pub fn minimal() -> Self {
        Self { annotations: false }
    }
}
