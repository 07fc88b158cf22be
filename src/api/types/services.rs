//
//  pagerduty-backend
//  api/types/services.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! Service types.
//!
//! A service represents something monitored: an application, a component or
//! a piece of infrastructure. Alerts reach a service through its
//! integrations and are routed to responders by its escalation policy.
//!
//! # Example
//!
//! ```rust
//! use pagerduty_backend::api::types::Service;
//!
//! let json = r#"{
//!     "id": "PSVC1",
//!     "name": "Checkout",
//!     "status": "active",
//!     "escalation_policy": {"id": "PEP1", "type": "escalation_policy_reference"},
//!     "integrations": [{"id": "PINT1", "type": "events_api_v2_inbound_integration"}]
//! }"#;
//!
//! let service: Service = serde_json::from_str(json).unwrap();
//! assert_eq!(service.escalation_policy.unwrap().id, "PEP1");
//! assert_eq!(service.integrations.len(), 1);
//! ```

use serde::{Deserialize, Serialize};

use crate::api::common::{PageInfo, Paginated, Reference};

/// A PagerDuty service.
///
/// # Fields
///
/// * `id` - Service identifier
/// * `name` - Display name
/// * `escalation_policy` - Policy incidents on this service escalate through
/// * `integrations` - Inbound integrations delivering events to the service
/// * `teams` - Teams the service belongs to
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Service {
    /// Service identifier.
    pub id: String,

    /// Display name.
    #[serde(default)]
    pub name: String,

    /// Short description generated by PagerDuty.
    #[serde(default)]
    pub summary: Option<String>,

    /// Free-form description.
    #[serde(default)]
    pub description: Option<String>,

    /// `active`, `warning`, `critical`, `maintenance` or `disabled`.
    #[serde(default)]
    pub status: Option<String>,

    /// Web UI URL.
    #[serde(default)]
    pub html_url: Option<String>,

    /// ISO 8601 creation time.
    #[serde(default)]
    pub created_at: Option<String>,

    /// Escalation policy, expanded when `include[]=escalation_policies` is sent.
    #[serde(default)]
    pub escalation_policy: Option<Reference>,

    /// Integrations, expanded when `include[]=integrations` is sent.
    #[serde(default)]
    pub integrations: Vec<Reference>,

    /// Teams, expanded when `include[]=teams` is sent.
    #[serde(default)]
    pub teams: Vec<Reference>,
}

/// Envelope of `GET /services/{id}`.
#[derive(Debug, Deserialize)]
pub struct ServiceResponse {
    /// The service.
    pub service: Service,
}

/// Envelope of `GET /services`.
#[derive(Debug, Deserialize)]
pub struct ServicesResponse {
    /// Services on this page.
    pub services: Vec<Service>,

    /// Pagination metadata.
    #[serde(flatten)]
    pub page: PageInfo,
}

impl Paginated for ServicesResponse {
    type Item = Service;

    fn page_info(&self) -> &PageInfo {
        &self.page
    }

    fn into_items(self) -> Vec<Service> {
        self.services
    }
}
