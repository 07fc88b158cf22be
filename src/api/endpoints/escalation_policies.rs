//
//  pagerduty-backend
//  api/endpoints/escalation_policies.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

use crate::api::client::PagerDutyClient;
use crate::api::common::{rules, ApiError, Endpoint, Paginator, Termination};
use crate::api::types::{EscalationPoliciesResponse, EscalationPolicy};

pub(crate) static LIST_ESCALATION_POLICIES: Endpoint = Endpoint {
    action: "list escalation policies",
    resource: "escalation policies",
    subject: "escalation policy",
    rules: &[
        rules::INVALID_ARGUMENTS,
        rules::UNAUTHENTICATED,
        rules::UNAUTHORIZED,
        rules::RATE_LIMITED,
    ],
};

impl PagerDutyClient {
    /// Lists every escalation policy on the account, sorted by name.
    ///
    /// Pages are requested until one reports `more: false`. A failure on any
    /// page fails the whole listing.
    pub async fn list_escalation_policies(&self) -> Result<Vec<EscalationPolicy>, ApiError> {
        Paginator::new(Termination::MoreFlag)
            .drain(|offset, limit| async move {
                let query = [
                    ("total", "true".to_string()),
                    ("sort_by", "name".to_string()),
                    ("offset", offset.to_string()),
                    ("limit", limit.to_string()),
                ];
                self.get::<EscalationPoliciesResponse>(
                    &LIST_ESCALATION_POLICIES,
                    &["escalation_policies"],
                    &query,
                )
                .await
            })
            .await
    }
}

#[cfg(test)]
mod tests {
    use crate::api::common::ErrorKind;
    use crate::api::testing::{query, test_client};
    use serde_json::json;

    #[tokio::test]
    async fn test_concatenates_pages_in_order() {
        let mut server = mockito::Server::new_async().await;
        let first = server
            .mock("GET", "/escalation_policies")
            .match_query(query(&[
                ("total", "true"),
                ("sort_by", "name"),
                ("offset", "0"),
                ("limit", "50"),
            ]))
            .with_body(
                json!({
                    "escalation_policies": [{"id": "EP1", "name": "Alpha"}, {"id": "EP2", "name": "Beta"}],
                    "offset": 0, "limit": 50, "more": true, "total": 3
                })
                .to_string(),
            )
            .create_async()
            .await;
        let second = server
            .mock("GET", "/escalation_policies")
            .match_query(query(&[("offset", "50"), ("limit", "50")]))
            .with_body(
                json!({
                    "escalation_policies": [{"id": "EP3", "name": "Gamma"}],
                    "offset": 50, "limit": 50, "more": false, "total": 3
                })
                .to_string(),
            )
            .create_async()
            .await;

        let client = test_client(&server.url());
        let policies = client.list_escalation_policies().await.unwrap();

        let ids: Vec<_> = policies.iter().map(|p| p.id.as_str()).collect();
        assert_eq!(ids, ["EP1", "EP2", "EP3"]);
        first.assert_async().await;
        second.assert_async().await;
    }

    #[tokio::test]
    async fn test_empty_page_without_more() {
        let mut server = mockito::Server::new_async().await;
        server
            .mock("GET", "/escalation_policies")
            .match_query(query(&[("offset", "0")]))
            .with_body(r#"{"escalation_policies": [], "more": false}"#)
            .expect(1)
            .create_async()
            .await;

        let client = test_client(&server.url());
        assert!(client.list_escalation_policies().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_failing_page_discards_earlier_pages() {
        let mut server = mockito::Server::new_async().await;
        server
            .mock("GET", "/escalation_policies")
            .match_query(query(&[("offset", "0")]))
            .with_body(r#"{"escalation_policies": [{"id": "EP1"}], "more": true}"#)
            .create_async()
            .await;
        server
            .mock("GET", "/escalation_policies")
            .match_query(query(&[("offset", "50")]))
            .with_status(429)
            .create_async()
            .await;

        let client = test_client(&server.url());
        let err = client.list_escalation_policies().await.unwrap_err();

        assert_eq!(err.kind(), ErrorKind::RateLimited);
        assert_eq!(err.to_string(), "Failed to list escalation policies. Rate limit exceeded.");
    }

    #[tokio::test]
    async fn test_unauthenticated() {
        let mut server = mockito::Server::new_async().await;
        server
            .mock("GET", "/escalation_policies")
            .match_query(mockito::Matcher::Any)
            .with_status(401)
            .create_async()
            .await;

        let client = test_client(&server.url());
        let err = client.list_escalation_policies().await.unwrap_err();

        assert_eq!(err.status_code(), Some(401));
        assert_eq!(
            err.to_string(),
            "Failed to list escalation policies. Caller did not supply credentials or did not provide the correct credentials."
        );
    }

    #[tokio::test]
    async fn test_malformed_page() {
        let mut server = mockito::Server::new_async().await;
        server
            .mock("GET", "/escalation_policies")
            .match_query(mockito::Matcher::Any)
            .with_body(r#"{"escalation_policies": "nope"}"#)
            .create_async()
            .await;

        let client = test_client(&server.url());
        let err = client.list_escalation_policies().await.unwrap_err();

        assert_eq!(err.kind(), ErrorKind::Parse);
        assert!(err
            .to_string()
            .starts_with("Failed to parse escalation policy information: "));
    }
}
