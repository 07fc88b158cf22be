//
//  pagerduty-backend
//  api/types/mod.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! PagerDuty REST API v2 data types.
//!
//! Read-only DTOs for the resources this client exposes, plus the response
//! envelopes they arrive in. Everything derives `Serialize` so a host can
//! re-emit the normalized objects as JSON.
//!
//! # Module Organization
//!
//! - [`services`] - Services and their integrations
//! - [`escalation_policies`] - Escalation policies
//! - [`oncalls`] - On-call entries and users
//! - [`incidents`] - Incidents
//! - [`change_events`] - Change events
//! - [`analytics`] - Abilities, service standards and service metrics
//!
//! # Notes
//!
//! - Optional fields default when absent; PagerDuty omits many fields
//!   depending on `include[]` parameters
//! - Timestamps are ISO 8601

pub mod analytics;
pub mod change_events;
pub mod escalation_policies;
pub mod incidents;
pub mod oncalls;
pub mod services;

pub use analytics::*;
pub use change_events::*;
pub use escalation_policies::*;
pub use incidents::*;
pub use oncalls::*;
pub use services::*;
