//
//  pagerduty-backend
//  api/endpoints/oncalls.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

use super::{require_id, UTC};
use crate::api::client::PagerDutyClient;
use crate::api::common::{rules, ApiError, Endpoint};
use crate::api::shaping;
use crate::api::types::{OnCallsResponse, User};

pub(crate) static LIST_ONCALLS: Endpoint = Endpoint {
    action: "list oncalls",
    resource: "oncalls",
    subject: "oncall",
    rules: &[
        rules::INVALID_ARGUMENTS,
        rules::UNAUTHENTICATED,
        rules::UNAUTHORIZED,
        rules::RATE_LIMITED,
    ],
};

impl PagerDutyClient {
    /// Users currently responsible at the lowest active level of a policy.
    ///
    /// See [`shaping::responders`] for the ordering and dedup rules.
    ///
    /// # Errors
    ///
    /// An empty `escalation_policy_id` fails with
    /// [`ApiError::InvalidArguments`] without contacting PagerDuty.
    pub async fn oncall_users(&self, escalation_policy_id: &str) -> Result<Vec<User>, ApiError> {
        let id = require_id(&LIST_ONCALLS, escalation_policy_id)?;

        let query = [
            ("time_zone", UTC.to_string()),
            ("include[]", "users".to_string()),
            ("escalation_policy_ids[]", id.to_string()),
        ];
        let response: OnCallsResponse = self.get(&LIST_ONCALLS, &["oncalls"], &query).await?;

        tracing::debug!(policy = id, entries = response.oncalls.len(), "resolving on-call users");
        Ok(shaping::responders(response.oncalls))
    }
}
