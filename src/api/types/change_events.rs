//
//  pagerduty-backend
//  api/types/change_events.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! Change event types.
//!
//! Change events record deployments and configuration changes so responders
//! can correlate them with incidents on the same service.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::api::common::Reference;

/// A change event attached to one or more services.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChangeEvent {
    /// Change event identifier.
    pub id: String,

    /// Human-readable description of the change.
    #[serde(default)]
    pub summary: Option<String>,

    /// When the change happened.
    pub timestamp: DateTime<Utc>,

    /// Emitting system, e.g. a CI pipeline.
    #[serde(default)]
    pub source: Option<String>,

    /// Services the change affected.
    #[serde(default)]
    pub services: Vec<Reference>,

    /// Arbitrary sender-supplied details.
    #[serde(default)]
    pub custom_details: Option<serde_json::Value>,
}

/// Envelope of `GET /services/{id}/change_events`.
#[derive(Debug, Deserialize)]
pub struct ChangeEventsResponse {
    /// Change events.
    pub change_events: Vec<ChangeEvent>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_timestamp_with_offset_normalized_to_utc() {
        let json = r#"{"id": "C1", "timestamp": "2024-03-01T12:00:00+02:00"}"#;
        let event: ChangeEvent = serde_json::from_str(json).unwrap();
        assert_eq!(event.timestamp.to_rfc3339(), "2024-03-01T10:00:00+00:00");
    }

    #[test]
    fn test_bad_timestamp_rejected() {
        let json = r#"{"id": "C1", "timestamp": "yesterday"}"#;
        assert!(serde_json::from_str::<ChangeEvent>(json).is_err());
    }
}
