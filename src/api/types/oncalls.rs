//
//  pagerduty-backend
//  api/types/oncalls.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! On-call entries and users.
//!
//! An on-call entry says a user is currently responsible at a given
//! escalation level of a policy. The same user often appears several times,
//! once per schedule or level they cover. Entries are only consumed to derive
//! the set of currently responsible [`User`]s.

use serde::{Deserialize, Serialize};

use crate::api::common::Reference;

/// A PagerDuty user.
///
/// Users are unique by `id`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    /// User identifier.
    pub id: String,

    /// Full name; used for ordering.
    #[serde(default)]
    pub name: String,

    /// Email address.
    #[serde(default)]
    pub email: Option<String>,

    /// Avatar image URL.
    #[serde(default)]
    pub avatar_url: Option<String>,

    /// Profile URL in the web UI.
    #[serde(default)]
    pub html_url: Option<String>,

    /// Short description generated by PagerDuty.
    #[serde(default)]
    pub summary: Option<String>,
}

/// One on-call assignment.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OnCall {
    /// The user on call; expanded when `include[]=users` is sent.
    pub user: User,

    /// 1 is contacted first, 2 next, and so on.
    pub escalation_level: u32,

    /// Policy the entry belongs to.
    #[serde(default)]
    pub escalation_policy: Option<Reference>,

    /// Schedule producing the entry, absent for direct user targets.
    #[serde(default)]
    pub schedule: Option<Reference>,

    /// Start of the on-call shift; absent for permanent assignments.
    #[serde(default)]
    pub start: Option<String>,

    /// End of the on-call shift.
    #[serde(default)]
    pub end: Option<String>,
}

/// Envelope of `GET /oncalls`.
#[derive(Debug, Deserialize)]
pub struct OnCallsResponse {
    /// On-call entries.
    pub oncalls: Vec<OnCall>,
}
