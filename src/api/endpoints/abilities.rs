//
//  pagerduty-backend
//  api/endpoints/abilities.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

use crate::api::client::PagerDutyClient;
use crate::api::common::{rules, ApiError, Endpoint};
use crate::api::types::{
    AbilitiesResponse, ABILITY_INTELLIGENT_ALERT_GROUPING, ABILITY_TIME_BASED_ALERT_GROUPING,
};

pub(crate) static READ_ABILITIES: Endpoint = Endpoint {
    action: "read abilities",
    resource: "abilities",
    subject: "abilities",
    rules: &[
        rules::UNAUTHENTICATED,
        rules::UNAUTHORIZED,
        rules::RATE_LIMITED,
    ],
};

impl PagerDutyClient {
    /// Whether the account can use event noise reduction.
    ///
    /// Requires both intelligent and time-based alert grouping.
    pub async fn is_event_noise_reduction_enabled(&self) -> Result<bool, ApiError> {
        let response: AbilitiesResponse = self.get(&READ_ABILITIES, &["abilities"], &[]).await?;
        Ok(response.has_all(&[
            ABILITY_INTELLIGENT_ALERT_GROUPING,
            ABILITY_TIME_BASED_ALERT_GROUPING,
        ]))
    }
}
