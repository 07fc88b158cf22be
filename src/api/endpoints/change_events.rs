//
//  pagerduty-backend
//  api/endpoints/change_events.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

use super::{require_id, UTC};
use crate::api::client::PagerDutyClient;
use crate::api::common::{rules, ApiError, Endpoint};
use crate::api::shaping;
use crate::api::types::{ChangeEvent, ChangeEventsResponse};

/// How many change events a service view shows.
pub const RECENT_CHANGE_EVENTS: usize = 5;

pub(crate) static GET_CHANGE_EVENTS: Endpoint = Endpoint {
    action: "get change events for service",
    resource: "change events for service",
    subject: "change events",
    rules: &[
        rules::INVALID_ARGUMENTS,
        rules::UNAUTHENTICATED,
        rules::UNAUTHORIZED,
        rules::NOT_FOUND,
    ],
};

impl PagerDutyClient {
    /// The five most recent change events of a service, newest first.
    ///
    /// Upstream is asked for `sort_by=timestamp`, but the events are sorted
    /// again by timestamp, descending, before the limit is applied.
    pub async fn change_events(&self, service_id: &str) -> Result<Vec<ChangeEvent>, ApiError> {
        let id = require_id(&GET_CHANGE_EVENTS, service_id)?;

        let query = [
            ("limit", RECENT_CHANGE_EVENTS.to_string()),
            ("time_zone", UTC.to_string()),
            ("sort_by", "timestamp".to_string()),
        ];
        let response: ChangeEventsResponse = self
            .get(&GET_CHANGE_EVENTS, &["services", id, "change_events"], &query)
            .await?;

        Ok(shaping::most_recent(response.change_events, RECENT_CHANGE_EVENTS))
    }
}
