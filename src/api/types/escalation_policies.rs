//
//  pagerduty-backend
//  api/types/escalation_policies.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! Escalation policy types.

use serde::{Deserialize, Serialize};

use crate::api::common::{PageInfo, Paginated};

/// An escalation policy: ordered levels of responders for unacknowledged
/// incidents.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EscalationPolicy {
    /// Policy identifier.
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

    /// Web UI URL.
    #[serde(default)]
    pub html_url: Option<String>,
}

/// Envelope of `GET /escalation_policies`.
#[derive(Debug, Deserialize)]
pub struct EscalationPoliciesResponse {
    /// Policies on this page.
    pub escalation_policies: Vec<EscalationPolicy>,

    /// Pagination metadata.
    #[serde(flatten)]
    pub page: PageInfo,
}

impl Paginated for EscalationPoliciesResponse {
    type Item = EscalationPolicy;

    fn page_info(&self) -> &PageInfo {
        &self.page
    }

    fn into_items(self) -> Vec<EscalationPolicy> {
        self.escalation_policies
    }
}
