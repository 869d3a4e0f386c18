//! Persisted best-time record
//!
//! A tiny versioned JSON envelope kept in LocalStorage. The value is
//! monotonically non-decreasing across the process lifetime and across
//! restarts; a missing, corrupt, or unrecognized record reads as 0.

use serde::{Deserialize, Serialize};

/// LocalStorage key
pub const STORAGE_KEY: &str = "ember_run_best_time";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BestTimeRecord {
    pub version: u32,
    pub seconds: u32,
}

impl BestTimeRecord {
    pub const VERSION: u32 = 1;

    pub fn new(seconds: u32) -> Self {
        Self {
            version: Self::VERSION,
            seconds,
        }
    }

    /// Decode a stored record; anything unreadable or from an unknown
    /// version counts as absent
    pub fn decode(json: &str) -> Option<Self> {
        let record: Self = serde_json::from_str(json).ok()?;
        (record.version == Self::VERSION).then_some(record)
    }

    pub fn encode(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn encode_decode_round_trip() {
        let record = BestTimeRecord::new(42);
        let json = record.encode().unwrap();
        assert_eq!(BestTimeRecord::decode(&json), Some(record));
    }

    #[test]
    fn corrupt_record_reads_as_absent() {
        assert_eq!(BestTimeRecord::decode("not json"), None);
        assert_eq!(BestTimeRecord::decode("{\"seconds\":true}"), None);
        assert_eq!(BestTimeRecord::decode(""), None);
    }

    #[test]
    fn unknown_version_reads_as_absent() {
        let json = "{\"version\":99,\"seconds\":10}";
        assert_eq!(BestTimeRecord::decode(json), None);
    }
}
