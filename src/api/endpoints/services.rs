//
//  pagerduty-backend
//  api/endpoints/services.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

use super::{repeated, require_id, UTC};
use crate::api::client::PagerDutyClient;
use crate::api::common::{rules, ApiError, Endpoint, Paginator, Termination};
use crate::api::types::{Service, ServiceResponse, ServicesResponse};

pub(crate) static GET_SERVICE: Endpoint = Endpoint {
    action: "get service",
    resource: "service",
    subject: "service",
    rules: &[
        rules::INVALID_ARGUMENTS,
        rules::UNAUTHENTICATED,
        rules::UNAUTHORIZED,
        rules::NOT_FOUND,
    ],
};

pub(crate) static GET_SERVICES: Endpoint = Endpoint {
    action: "get services",
    resource: "services",
    subject: "services",
    rules: &[
        rules::INVALID_ARGUMENTS,
        rules::UNAUTHENTICATED,
        rules::UNAUTHORIZED,
    ],
};

/// Expansions requested for a single service.
const SERVICE_INCLUDES: &[&str] = &["integrations", "escalation_policies"];

/// Expansions requested for the full listing.
const LISTING_INCLUDES: &[&str] = &["integrations", "escalation_policies", "teams"];

impl PagerDutyClient {
    /// Fetches one service with its integrations and escalation policy.
    pub async fn service_by_id(&self, service_id: &str) -> Result<Service, ApiError> {
        let id = require_id(&GET_SERVICE, service_id)?;

        let mut query = vec![("time_zone", UTC.to_string())];
        query.extend(repeated("include[]", SERVICE_INCLUDES));

        let response: ServiceResponse = self.get(&GET_SERVICE, &["services", id], &query).await?;
        Ok(response.service)
    }

    /// Finds the service an integration key routes to.
    ///
    /// PagerDuty's free-text search is used; the first match is returned.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::NotFound`] when nothing matches.
    pub async fn service_by_integration_key(&self, integration_key: &str) -> Result<Service, ApiError> {
        let key = require_id(&GET_SERVICE, integration_key)?;

        let mut query = vec![("query", key.to_string()), ("time_zone", UTC.to_string())];
        query.extend(repeated("include[]", SERVICE_INCLUDES));

        let response: ServicesResponse = self.get(&GET_SERVICE, &["services"], &query).await?;
        if response.services.len() > 1 {
            tracing::debug!(matches = response.services.len(), "integration key matched several services");
        }

        response
            .services
            .into_iter()
            .next()
            .ok_or_else(|| GET_SERVICE.not_found())
    }

    /// Lists every service on the account with integrations, escalation
    /// policies and teams expanded.
    ///
    /// Pages are requested until the running offset reaches the `total`
    /// reported by the first page.
    pub async fn list_services(&self) -> Result<Vec<Service>, ApiError> {
        Paginator::new(Termination::RunningTotal)
            .drain(|offset, limit| async move {
                let mut query = vec![("time_zone", UTC.to_string())];
                query.extend(repeated("include[]", LISTING_INCLUDES));
                query.extend([
                    ("total", "true".to_string()),
                    ("offset", offset.to_string()),
                    ("limit", limit.to_string()),
                ]);
                self.get::<ServicesResponse>(&GET_SERVICES, &["services"], &query)
                    .await
            })
            .await
    }
}

#[cfg(test)]
mod tests {
    use crate::api::common::ErrorKind;
    use crate::api::testing::{query, test_client};
    use mockito::Matcher;
    use serde_json::json;

    #[tokio::test]
    async fn test_service_by_id() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("GET", "/services/PSVC1")
            .match_query(query(&[
                ("time_zone", "UTC"),
                ("include[]", "integrations"),
                ("include[]", "escalation_policies"),
            ]))
            .with_body(
                json!({
                    "service": {
                        "id": "PSVC1",
                        "name": "Checkout",
                        "escalation_policy": {"id": "PEP1", "type": "escalation_policy"},
                        "integrations": [{"id": "PINT1"}]
                    }
                })
                .to_string(),
            )
            .create_async()
            .await;

        let service = test_client(&server.url()).service_by_id("PSVC1").await.unwrap();

        assert_eq!(service.name, "Checkout");
        assert_eq!(service.escalation_policy.unwrap().id, "PEP1");
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn test_service_not_found() {
        let mut server = mockito::Server::new_async().await;
        server
            .mock("GET", "/services/PGONE")
            .match_query(Matcher::Any)
            .with_status(404)
            .create_async()
            .await;

        let err = test_client(&server.url()).service_by_id("PGONE").await.unwrap_err();

        assert_eq!(err.kind(), ErrorKind::NotFound);
        assert_eq!(err.to_string(), "Failed to get service. The requested resource was not found.");
    }

    #[tokio::test]
    async fn test_service_unauthenticated() {
        let mut server = mockito::Server::new_async().await;
        server
            .mock("GET", "/services/PSVC1")
            .match_query(Matcher::Any)
            .with_status(401)
            .create_async()
            .await;

        let err = test_client(&server.url()).service_by_id("PSVC1").await.unwrap_err();

        assert_eq!(err.status_code(), Some(401));
        assert_eq!(
            err.to_string(),
            "Failed to get service. Caller did not supply credentials or did not provide the correct credentials."
        );
    }

    #[tokio::test]
    async fn test_integration_key_without_match() {
        let mut server = mockito::Server::new_async().await;
        server
            .mock("GET", "/services")
            .match_query(query(&[("query", "KEY1")]))
            .with_body(r#"{"services": []}"#)
            .create_async()
            .await;

        let err = test_client(&server.url())
            .service_by_integration_key("KEY1")
            .await
            .unwrap_err();

        assert_eq!(err.kind(), ErrorKind::NotFound);
        assert_eq!(err.status_code(), Some(404));
        assert_eq!(err.to_string(), "Failed to get service. The requested resource was not found.");
    }

    #[tokio::test]
    async fn test_integration_key_returns_first_match() {
        let mut server = mockito::Server::new_async().await;
        server
            .mock("GET", "/services")
            .match_query(query(&[
                ("query", "KEY1"),
                ("time_zone", "UTC"),
                ("include[]", "integrations"),
                ("include[]", "escalation_policies"),
            ]))
            .with_body(r#"{"services": [{"id": "P1", "name": "First"}, {"id": "P2", "name": "Second"}]}"#)
            .create_async()
            .await;

        let service = test_client(&server.url())
            .service_by_integration_key("KEY1")
            .await
            .unwrap();

        assert_eq!(service.id, "P1");
        assert_eq!(service.name, "First");
    }

    #[tokio::test]
    async fn test_list_services_follows_first_total() {
        let mut server = mockito::Server::new_async().await;
        let page = |ids: &[&str], total: u32| {
            let services: Vec<_> = ids.iter().map(|id| json!({"id": id})).collect();
            json!({"services": services, "total": total}).to_string()
        };

        let first = server
            .mock("GET", "/services")
            .match_query(query(&[
                ("time_zone", "UTC"),
                ("include[]", "integrations"),
                ("include[]", "escalation_policies"),
                ("include[]", "teams"),
                ("total", "true"),
                ("offset", "0"),
                ("limit", "50"),
            ]))
            .with_body(page(&["P1", "P2"], 60))
            .expect(1)
            .create_async()
            .await;
        let second = server
            .mock("GET", "/services")
            .match_query(query(&[("offset", "50"), ("limit", "50")]))
            .with_body(page(&["P3"], 60))
            .expect(1)
            .create_async()
            .await;
        let third = server
            .mock("GET", "/services")
            .match_query(query(&[("offset", "100")]))
            .expect(0)
            .create_async()
            .await;

        let services = test_client(&server.url()).list_services().await.unwrap();

        let ids: Vec<_> = services.iter().map(|s| s.id.as_str()).collect();
        assert_eq!(ids, ["P1", "P2", "P3"]);
        first.assert_async().await;
        second.assert_async().await;
        third.assert_async().await;
    }

    #[tokio::test]
    async fn test_list_services_unauthenticated() {
        let mut server = mockito::Server::new_async().await;
        server
            .mock("GET", "/services")
            .match_query(Matcher::Any)
            .with_status(401)
            .create_async()
            .await;

        let err = test_client(&server.url()).list_services().await.unwrap_err();

        assert_eq!(err.status_code(), Some(401));
        assert_eq!(
            err.to_string(),
            "Failed to get services. Caller did not supply credentials or did not provide the correct credentials."
        );
    }

    #[tokio::test]
    async fn test_list_services_fails_on_later_page() {
        let mut server = mockito::Server::new_async().await;
        server
            .mock("GET", "/services")
            .match_query(query(&[("offset", "0")]))
            .with_body(r#"{"services": [{"id": "P1"}], "total": 60}"#)
            .expect(1)
            .create_async()
            .await;
        server
            .mock("GET", "/services")
            .match_query(query(&[("offset", "50")]))
            .with_status(403)
            .expect(1)
            .create_async()
            .await;

        let err = test_client(&server.url()).list_services().await.unwrap_err();

        assert_eq!(err.kind(), ErrorKind::Unauthorized);
        assert_eq!(err.status_code(), Some(403));
    }

    #[tokio::test]
    async fn test_integration_key_unauthenticated() {
        let mut server = mockito::Server::new_async().await;
        server
            .mock("GET", "/services")
            .match_query(query(&[("query", "KEY1")]))
            .with_status(401)
            .create_async()
            .await;

        let err = test_client(&server.url())
            .service_by_integration_key("KEY1")
            .await
            .unwrap_err();

        assert_eq!(err.kind(), ErrorKind::Unauthenticated);
        assert_eq!(err.status_code(), Some(401));
        assert_eq!(
            err.to_string(),
            "Failed to get service. Caller did not supply credentials or did not provide the correct credentials."
        );
    }

    #[tokio::test]
    async fn test_integration_key_upstream_not_found() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("GET", "/services")
            .match_query(query(&[("query", "KEY1")]))
            .with_status(404)
            .expect(1)
            .create_async()
            .await;

        let err = test_client(&server.url())
            .service_by_integration_key("KEY1")
            .await
            .unwrap_err();

        assert_eq!(err.kind(), ErrorKind::NotFound);
        assert_eq!(err.status_code(), Some(404));
        mock.assert_async().await;
    }
}
