//
//  pagerduty-backend
//  api/endpoints/incidents.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

use super::{require_id, UTC};
use crate::api::client::PagerDutyClient;
use crate::api::common::{rules, ApiError, Endpoint};
use crate::api::shaping;
use crate::api::types::{Incident, IncidentStatus, IncidentsResponse};

pub(crate) static GET_INCIDENTS: Endpoint = Endpoint {
    action: "get incidents for service",
    resource: "incidents for service",
    subject: "incidents",
    rules: &[
        rules::INVALID_ARGUMENTS,
        rules::UNAUTHENTICATED,
        rules::PAYMENT_REQUIRED,
        rules::UNAUTHORIZED,
        rules::TOO_MANY_REQUESTS,
    ],
};

impl PagerDutyClient {
    /// Triggered and acknowledged incidents of a service, oldest first.
    pub async fn open_incidents(&self, service_id: &str) -> Result<Vec<Incident>, ApiError> {
        let id = require_id(&GET_INCIDENTS, service_id)?;

        let mut query = vec![
            ("time_zone", UTC.to_string()),
            ("sort_by", "created_at".to_string()),
        ];
        query.extend(
            IncidentStatus::OPEN
                .iter()
                .map(|status| ("statuses[]", status.as_str().to_string())),
        );
        query.push(("service_ids[]", id.to_string()));

        let response: IncidentsResponse = self.get(&GET_INCIDENTS, &["incidents"], &query).await?;
        Ok(shaping::open_only(response.incidents))
    }
}
