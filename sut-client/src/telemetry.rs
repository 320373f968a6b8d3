//! Bounded request/response telemetry for one workbench session.
//!
//! A fixed-capacity deque, newest first, owned by the session that records
//! into it. Nothing global, nothing shared.

use std::collections::VecDeque;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use uuid::Uuid;

pub const TELEMETRY_CAPACITY: usize = 50;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TelemetryKind {
    Request,
    Response,
    Error,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TelemetryEntry {
    pub id: Uuid,
    pub timestamp: DateTime<Utc>,
    pub kind: TelemetryKind,
    pub payload: Value,
    pub latency_ms: Option<u64>,
}

#[derive(Debug, Clone)]
pub struct TelemetryLog {
    entries: VecDeque<TelemetryEntry>,
    capacity: usize,
}

impl TelemetryLog {
    pub fn new() -> Self {
        Self::with_capacity(TELEMETRY_CAPACITY)
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            entries: VecDeque::with_capacity(capacity),
            capacity,
        }
    }

    /// Append an entry, evicting the oldest once at capacity.
    pub fn record(&mut self, kind: TelemetryKind, payload: Value, latency_ms: Option<u64>) {
        self.entries.push_front(TelemetryEntry {
            id: Uuid::new_v4(),
            timestamp: Utc::now(),
            kind,
            payload,
            latency_ms,
        });
        self.entries.truncate(self.capacity);
    }

    /// Entries newest first.
    pub fn entries(&self) -> impl Iterator<Item = &TelemetryEntry> {
        self.entries.iter()
    }

    /// Most recent entry of the given kind, if any.
    pub fn latest_of(&self, kind: TelemetryKind) -> Option<&TelemetryEntry> {
        self.entries.iter().find(|e| e.kind == kind)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }
}

impl Default for TelemetryLog {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn ring_is_bounded_and_newest_first() {
        let mut log = TelemetryLog::new();
        for i in 0..60 {
            log.record(TelemetryKind::Request, json!({ "seq": i }), None);
        }
        assert_eq!(log.len(), TELEMETRY_CAPACITY);
        let newest = log.entries().next().unwrap();
        assert_eq!(newest.payload["seq"], 59);
        // The first ten entries fell off the back.
        let oldest = log.entries().last().unwrap();
        assert_eq!(oldest.payload["seq"], 10);
    }

    #[test]
    fn latest_of_skips_other_kinds() {
        let mut log = TelemetryLog::new();
        log.record(TelemetryKind::Request, json!({"n": 1}), None);
        log.record(TelemetryKind::Response, json!({"n": 2}), Some(120));
        log.record(TelemetryKind::Request, json!({"n": 3}), None);

        let response = log.latest_of(TelemetryKind::Response).unwrap();
        assert_eq!(response.payload["n"], 2);
        assert_eq!(response.latency_ms, Some(120));
        assert!(log.latest_of(TelemetryKind::Error).is_none());
    }
}
