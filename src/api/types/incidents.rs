//
//  pagerduty-backend
//  api/types/incidents.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! Incident types.

use serde::{Deserialize, Serialize};

use crate::api::common::Reference;

/// Incident lifecycle state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IncidentStatus {
    /// Not yet acknowledged.
    Triggered,
    /// Someone is working on it.
    Acknowledged,
    /// Closed.
    Resolved,
    /// Any state this client does not know about.
    #[serde(other)]
    Unknown,
}

impl IncidentStatus {
    /// The states an open incident can be in.
    pub const OPEN: [IncidentStatus; 2] = [Self::Triggered, Self::Acknowledged];

    /// Query-string value.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Triggered => "triggered",
            Self::Acknowledged => "acknowledged",
            Self::Resolved => "resolved",
            Self::Unknown => "unknown",
        }
    }

    /// Whether the incident still needs attention.
    pub fn is_open(&self) -> bool {
        Self::OPEN.contains(self)
    }
}

/// A PagerDuty incident.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Incident {
    /// Incident identifier.
    pub id: String,

    /// Account-wide sequential number.
    #[serde(default)]
    pub incident_number: Option<u64>,

    /// Title shown in notifications.
    #[serde(default)]
    pub title: String,

    /// Current state.
    pub status: IncidentStatus,

    /// `high` or `low`.
    #[serde(default)]
    pub urgency: Option<String>,

    /// ISO 8601 creation time.
    #[serde(default)]
    pub created_at: Option<String>,

    /// Web UI URL.
    #[serde(default)]
    pub html_url: Option<String>,

    /// Service the incident belongs to.
    #[serde(default)]
    pub service: Option<Reference>,
}

/// Envelope of `GET /incidents`.
#[derive(Debug, Deserialize)]
pub struct IncidentsResponse {
    /// Incidents matching the query.
    pub incidents: Vec<Incident>,
}
