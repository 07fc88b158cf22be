//
//  pagerduty-backend
//  api/shaping.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! Post-processing applied to decoded responses.
//!
//! These functions are pure: they take what PagerDuty returned and reshape
//! it into what the host renders. Endpoints call them after decoding.
//!
//! | Function | Rule |
//! |----------|------|
//! | [`responders`] | lowest escalation level only, sorted by name, unique by id |
//! | [`most_recent`] | newest first, at most `limit` |
//! | [`open_only`] | triggered or acknowledged incidents only |

use std::collections::HashMap;

use crate::api::types::{ChangeEvent, Incident, OnCall, User};

/// Derives the currently responsible users from on-call entries.
///
/// 1. Entries are ordered by escalation level, ascending.
/// 2. Only entries at the lowest level present survive.
/// 3. Their users are sorted by name, case-sensitive, keeping the original
///    order among equal names.
/// 4. Users are made unique by id; see [`dedup_by_id`].
///
/// # Example
///
/// ```rust
/// use pagerduty_backend::api::shaping::responders;
/// use pagerduty_backend::api::types::{OnCall, User};
///
/// fn entry(id: &str, name: &str, level: u32) -> OnCall {
///     serde_json::from_value(serde_json::json!({
///         "user": {"id": id, "name": name},
///         "escalation_level": level
///     }))
///     .unwrap()
/// }
///
/// let users = responders(vec![entry("U2", "Bob", 1), entry("U1", "Alice", 1), entry("U3", "Carol", 2)]);
/// let names: Vec<_> = users.iter().map(|u| u.name.as_str()).collect();
/// assert_eq!(names, ["Alice", "Bob"]);
/// ```
pub fn responders(mut entries: Vec<OnCall>) -> Vec<User> {
    if entries.is_empty() {
        return Vec::new();
    }

    entries.sort_by_key(|entry| entry.escalation_level);
    let lowest = entries[0].escalation_level;

    let mut users: Vec<User> = entries
        .into_iter()
        .take_while(|entry| entry.escalation_level == lowest)
        .map(|entry| entry.user)
        .collect();

    users.sort_by(|a, b| a.name.cmp(&b.name));
    dedup_by_id(users)
}

/// Makes users unique by id.
///
/// When an id occurs more than once the **last** record wins, and it takes
/// the position of the **first** occurrence.
///
/// ```rust
/// use pagerduty_backend::api::shaping::dedup_by_id;
/// use pagerduty_backend::api::types::User;
///
/// let user = |id: &str, email: &str| -> User {
///     serde_json::from_value(serde_json::json!({"id": id, "name": id, "email": email})).unwrap()
/// };
///
/// let unique = dedup_by_id(vec![user("A", "old@x"), user("B", "b@x"), user("A", "new@x")]);
/// assert_eq!(unique.len(), 2);
/// assert_eq!(unique[0].email.as_deref(), Some("new@x"));
/// assert_eq!(unique[1].id, "B");
/// ```
pub fn dedup_by_id(users: Vec<User>) -> Vec<User> {
    let mut position: HashMap<String, usize> = HashMap::with_capacity(users.len());
    let mut unique: Vec<User> = Vec::with_capacity(users.len());

    for user in users {
        match position.get(&user.id) {
            Some(&index) => unique[index] = user,
            None => {
                position.insert(user.id.clone(), unique.len());
                unique.push(user);
            }
        }
    }

    unique
}

/// Newest change events first, at most `limit` of them.
pub fn most_recent(mut events: Vec<ChangeEvent>, limit: usize) -> Vec<ChangeEvent> {
    events.sort_by(|a, b| b.timestamp.cmp(&a.timestamp));
    events.truncate(limit);
    events
}

/// Drops incidents that are no longer open, keeping order.
pub fn open_only(mut incidents: Vec<Incident>) -> Vec<Incident> {
    incidents.retain(|incident| incident.status.is_open());
    incidents
}
