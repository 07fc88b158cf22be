//
//  pagerduty-backend
//  cli/query.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! Commands that call the PagerDuty API and print the result.

use anyhow::Result;
use clap::Subcommand;

use crate::output::write_json;

use super::GlobalOptions;

/// One subcommand per client operation.
#[derive(Subcommand, Debug)]
pub enum QueryCommand {
    /// List all escalation policies, sorted by name
    #[command(visible_alias = "ep")]
    EscalationPolicies,

    /// Check whether event noise reduction is available
    Abilities,

    /// Show who is on call first for an escalation policy
    Oncall {
        /// Escalation policy ID
        policy: String,
    },

    /// Show a service with its integrations and escalation policy
    Service {
        /// Service ID
        id: String,
    },

    /// Find the service an integration key belongs to
    ServiceByKey {
        /// Integration key
        key: String,
    },

    /// List all services
    Services,

    /// Show the most recent change events of a service
    ChangeEvents {
        /// Service ID
        service: String,
    },

    /// Show open incidents of a service
    Incidents {
        /// Service ID
        service: String,
    },

    /// Show the standards scorecard of a service
    Standards {
        /// Service ID
        service: String,
    },

    /// Show incident metrics of a service for the last 30 days
    Metrics {
        /// Service ID
        service: String,
    },
}

impl QueryCommand {
    pub async fn run(&self, global: &GlobalOptions) -> Result<()> {
        let client = global.client()?;
        let style = global.json_style();

        match self {
            Self::EscalationPolicies => write_json(&client.list_escalation_policies().await?, style),
            Self::Abilities => {
                let enabled = client.is_event_noise_reduction_enabled().await?;
                write_json(&serde_json::json!({ "event_noise_reduction": enabled }), style)
            }
            Self::Oncall { policy } => write_json(&client.oncall_users(policy).await?, style),
            Self::Service { id } => write_json(&client.service_by_id(id).await?, style),
            Self::ServiceByKey { key } => {
                write_json(&client.service_by_integration_key(key).await?, style)
            }
            Self::Services => write_json(&client.list_services().await?, style),
            Self::ChangeEvents { service } => write_json(&client.change_events(service).await?, style),
            Self::Incidents { service } => write_json(&client.open_incidents(service).await?, style),
            Self::Standards { service } => write_json(&client.service_standards(service).await?, style),
            Self::Metrics { service } => write_json(&client.service_metrics(service).await?, style),
        }
    }
}
