//
//  pagerduty-backend
//  api/types/analytics.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! Account abilities, service standards and service metrics.
//!
//! Standards and metrics are computed by PagerDuty and their shape changes
//! with the account's features, so they are carried as opaque JSON.
//!
//! # Example
//!
//! ```rust
//! use chrono::{TimeZone, Utc};
//! use pagerduty_backend::api::types::MetricsWindow;
//!
//! let now = Utc.with_ymd_and_hms(2024, 3, 31, 12, 0, 0).unwrap();
//! let window = MetricsWindow::trailing(now, 30);
//! assert_eq!(window.start_iso(), "2024-03-01T12:00:00.000Z");
//! assert_eq!(window.end_iso(), "2024-03-31T12:00:00.000Z");
//! ```

use chrono::{DateTime, Duration, SecondsFormat, Utc};
use serde::{Deserialize, Serialize};

/// Ability required for intelligent alert grouping.
pub const ABILITY_INTELLIGENT_ALERT_GROUPING: &str = "preview_intelligent_alert_grouping";

/// Ability required for time-based alert grouping.
pub const ABILITY_TIME_BASED_ALERT_GROUPING: &str = "time_based_alert_grouping";

/// Days covered by the service metrics query.
pub const METRICS_WINDOW_DAYS: i64 = 30;

/// Envelope of `GET /abilities`.
#[derive(Debug, Clone, Deserialize)]
pub struct AbilitiesResponse {
    /// Ability names enabled on the account.
    pub abilities: Vec<String>,
}

impl AbilitiesResponse {
    /// Whether every named ability is present.
    pub fn has_all(&self, required: &[&str]) -> bool {
        required
            .iter()
            .all(|ability| self.abilities.iter().any(|a| a == ability))
    }
}

/// Standards scorecard of a technical service, passed through unchanged.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ServiceStandards(pub serde_json::Value);

/// One row of aggregated incident metrics, passed through unchanged.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ServiceMetrics(pub serde_json::Value);

/// Envelope of `POST /analytics/metrics/incidents/services`.
#[derive(Debug, Deserialize)]
pub struct ServiceMetricsResponse {
    /// Metric rows.
    pub data: Vec<ServiceMetrics>,
}

/// A closed time range ending at a given instant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MetricsWindow {
    /// Inclusive start.
    pub start: DateTime<Utc>,
    /// Inclusive end.
    pub end: DateTime<Utc>,
}

impl MetricsWindow {
    /// The `days` days leading up to `now`.
    pub fn trailing(now: DateTime<Utc>, days: i64) -> Self {
        Self {
            start: now - Duration::days(days),
            end: now,
        }
    }

    /// Start as ISO 8601 UTC, millisecond precision.
    pub fn start_iso(&self) -> String {
        self.start.to_rfc3339_opts(SecondsFormat::Millis, true)
    }

    /// End as ISO 8601 UTC, millisecond precision.
    pub fn end_iso(&self) -> String {
        self.end.to_rfc3339_opts(SecondsFormat::Millis, true)
    }
}

/// Body of the service metrics query.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ServiceMetricsRequest {
    /// Query filters.
    pub filters: ServiceMetricsFilter,
}

/// Filters of the service metrics query.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ServiceMetricsFilter {
    /// Window start, ISO 8601 UTC.
    pub created_at_start: String,
    /// Window end, ISO 8601 UTC.
    pub created_at_end: String,
    /// Services to aggregate.
    pub service_ids: Vec<String>,
}

impl ServiceMetricsRequest {
    /// Query for one service over `window`.
    pub fn for_service(service_id: &str, window: MetricsWindow) -> Self {
        Self {
            filters: ServiceMetricsFilter {
                created_at_start: window.start_iso(),
                created_at_end: window.end_iso(),
                service_ids: vec![service_id.to_string()],
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_has_all() {
        let response = AbilitiesResponse {
            abilities: vec!["teams".into(), ABILITY_TIME_BASED_ALERT_GROUPING.into()],
        };
        assert!(response.has_all(&[ABILITY_TIME_BASED_ALERT_GROUPING]));
        assert!(!response.has_all(&[
            ABILITY_INTELLIGENT_ALERT_GROUPING,
            ABILITY_TIME_BASED_ALERT_GROUPING
        ]));
        assert!(response.has_all(&[]));
    }

    #[test]
    fn test_window_is_exactly_thirty_days() {
        let now = Utc.with_ymd_and_hms(2024, 3, 10, 8, 30, 15).unwrap();
        let window = MetricsWindow::trailing(now, METRICS_WINDOW_DAYS);
        assert_eq!(window.end, now);
        assert_eq!(window.end - window.start, Duration::days(30));
        assert_eq!(window.start_iso(), "2024-02-09T08:30:15.000Z");
        assert_eq!(window.end_iso(), "2024-03-10T08:30:15.000Z");
    }

    #[test]
    fn test_request_body_shape() {
        let now = Utc.with_ymd_and_hms(2024, 1, 31, 0, 0, 0).unwrap();
        let body = ServiceMetricsRequest::for_service("PSVC1", MetricsWindow::trailing(now, 30));
        let json = serde_json::to_value(&body).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "filters": {
                    "created_at_start": "2024-01-01T00:00:00.000Z",
                    "created_at_end": "2024-01-31T00:00:00.000Z",
                    "service_ids": ["PSVC1"]
                }
            })
        );
    }

    #[test]
    fn test_standards_pass_through() {
        let json = r#"{"resource_id": "P1", "score": {"passing": 3, "total": 5}, "standards": []}"#;
        let standards: ServiceStandards = serde_json::from_str(json).unwrap();
        assert_eq!(standards.0["score"]["passing"], 3);
        assert_eq!(
            serde_json::to_value(&standards).unwrap(),
            serde_json::from_str::<serde_json::Value>(json).unwrap()
        );
    }
}
