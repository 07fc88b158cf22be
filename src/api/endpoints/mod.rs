//
//  pagerduty-backend
//  api/endpoints/mod.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! The operations exposed on [`PagerDutyClient`](super::PagerDutyClient).
//!
//! Each submodule owns the [`Endpoint`](super::common::Endpoint) tables of
//! one resource and adds its methods to the client.
//!
//! | Method | Request |
//! |--------|---------|
//! | `list_escalation_policies` | `GET /escalation_policies`, paginated |
//! | `is_event_noise_reduction_enabled` | `GET /abilities` |
//! | `oncall_users` | `GET /oncalls` |
//! | `service_by_id` | `GET /services/{id}` |
//! | `service_by_integration_key` | `GET /services?query=` |
//! | `list_services` | `GET /services`, paginated |
//! | `change_events` | `GET /services/{id}/change_events` |
//! | `open_incidents` | `GET /incidents` |
//! | `service_standards` | `GET /standards/scores/technical_services/{id}` |
//! | `service_metrics` | `POST /analytics/metrics/incidents/services` |

mod abilities;
mod analytics;
mod change_events;
mod escalation_policies;
mod incidents;
mod oncalls;
mod services;

pub use change_events::RECENT_CHANGE_EVENTS;

use super::common::{ApiError, Endpoint};

/// Query value PagerDuty expects for the `time_zone` parameter.
const UTC: &str = "UTC";

/// Rejects blank identifiers before anything is sent.
fn require_id<'a>(endpoint: &Endpoint, id: &'a str) -> Result<&'a str, ApiError> {
    let id = id.trim();
    if id.is_empty() {
        tracing::debug!(action = endpoint.action, "rejected empty identifier");
        return Err(endpoint.invalid_arguments());
    }
    Ok(id)
}

/// `(key, value)` pairs for a repeated `key[]` parameter.
fn repeated(key: &'static str, values: &[&str]) -> Vec<(&'static str, String)> {
    values.iter().map(|v| (key, (*v).to_string())).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::common::{rules, ErrorKind};

    static PROBE: Endpoint = Endpoint {
        action: "probe",
        resource: "probe",
        subject: "probe",
        rules: &[rules::INVALID_ARGUMENTS],
    };

    #[test]
    fn test_require_id() {
        assert_eq!(require_id(&PROBE, " P1 ").unwrap(), "P1");
        let err = require_id(&PROBE, "  ").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidArguments);
        assert_eq!(err.to_string(), "Failed to probe. Caller provided invalid arguments.");
    }

    #[test]
    fn test_repeated() {
        assert_eq!(
            repeated("include[]", &["users", "teams"]),
            vec![("include[]", "users".to_string()), ("include[]", "teams".to_string())]
        );
    }
}
