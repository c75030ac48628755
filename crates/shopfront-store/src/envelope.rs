//! # Versioned Envelope
//!
//! Every persisted payload is wrapped in an envelope carrying a schema
//! version and a save timestamp. The version lets a future schema change
//! detect old payloads instead of mis-parsing them; the timestamp is for
//! humans reading the file and for debugging stale-state reports.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Current envelope schema version.
///
/// Bump when the shape of any persisted payload changes incompatibly.
/// Loads of a different version fall back to the default value.
pub const ENVELOPE_VERSION: u32 = 1;

/// Wrapper written to disk around every persisted value.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Envelope<T> {
    /// Schema version of `data`.
    pub version: u32,

    /// When this envelope was written.
    pub saved_at: DateTime<Utc>,

    /// The actual payload.
    pub data: T,
}

impl<T> Envelope<T> {
    /// Wraps a value in a current-version envelope stamped now.
    pub fn new(data: T) -> Self {
        Envelope {
            version: ENVELOPE_VERSION,
            saved_at: Utc::now(),
            data,
        }
    }

    /// True if this envelope's payload can be read by the current code.
    pub fn is_compatible(&self) -> bool {
        self.version == ENVELOPE_VERSION
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_envelope_round_trip() {
        let envelope = Envelope::new(vec![1u32, 2, 3]);
        let json = serde_json::to_string(&envelope).unwrap();
        let restored: Envelope<Vec<u32>> = serde_json::from_str(&json).unwrap();

        assert_eq!(restored.version, ENVELOPE_VERSION);
        assert_eq!(restored.data, vec![1, 2, 3]);
        assert!(restored.is_compatible());
    }

    #[test]
    fn test_incompatible_version_detected() {
        let json = r#"{"version":99,"savedAt":"2024-01-01T00:00:00Z","data":[]}"#;
        let envelope: Envelope<Vec<u32>> = serde_json::from_str(json).unwrap();
        assert!(!envelope.is_compatible());
    }
}
