//
//  pagerduty-backend
//  api/endpoints/analytics.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

use chrono::{DateTime, Utc};

use super::require_id;
use crate::api::client::PagerDutyClient;
use crate::api::common::{rules, ApiError, Endpoint};
use crate::api::types::{
    MetricsWindow, ServiceMetrics, ServiceMetricsRequest, ServiceMetricsResponse,
    ServiceStandards, METRICS_WINDOW_DAYS,
};

pub(crate) static GET_SERVICE_STANDARDS: Endpoint = Endpoint {
    action: "get service standards for service",
    resource: "service standards for service",
    subject: "service standards",
    rules: &[
        rules::UNAUTHENTICATED,
        rules::UNAUTHORIZED,
        rules::TOO_MANY_REQUESTS,
    ],
};

pub(crate) static GET_SERVICE_METRICS: Endpoint = Endpoint {
    action: "get service metrics for service",
    resource: "service metrics for service",
    subject: "service metrics",
    rules: &[rules::INVALID_ARGUMENTS_FINAL, rules::TOO_MANY_REQUESTS],
};

impl PagerDutyClient {
    /// Standards scorecard of a technical service, as PagerDuty returns it.
    pub async fn service_standards(&self, service_id: &str) -> Result<ServiceStandards, ApiError> {
        let id = require_id(&GET_SERVICE_STANDARDS, service_id)?;
        self.get(
            &GET_SERVICE_STANDARDS,
            &["standards", "scores", "technical_services", id],
            &[],
        )
        .await
    }

    /// Incident metrics of a service over the last 30 days.
    pub async fn service_metrics(&self, service_id: &str) -> Result<Vec<ServiceMetrics>, ApiError> {
        self.service_metrics_at(service_id, Utc::now()).await
    }

    /// Incident metrics of a service over the 30 days ending at `now`.
    pub async fn service_metrics_at(
        &self,
        service_id: &str,
        now: DateTime<Utc>,
    ) -> Result<Vec<ServiceMetrics>, ApiError> {
        let id = require_id(&GET_SERVICE_METRICS, service_id)?;
        let body = ServiceMetricsRequest::for_service(id, MetricsWindow::trailing(now, METRICS_WINDOW_DAYS));

        let response: ServiceMetricsResponse = self
            .post(
                &GET_SERVICE_METRICS,
                &["analytics", "metrics", "incidents", "services"],
                &body,
            )
            .await?;
        Ok(response.data)
    }
}

#[cfg(test)]
mod tests {
    use crate::api::common::ErrorKind;
    use crate::api::testing::test_client;
    use chrono::{TimeZone, Utc};
    use mockito::Matcher;
    use serde_json::json;

    #[tokio::test]
    async fn test_standards_pass_through() {
        let mut server = mockito::Server::new_async().await;
        let body = json!({
            "resource_id": "PSVC1",
            "resource_type": "technical_service",
            "score": {"passing": 1, "total": 2},
            "standards": [{"id": "S1", "pass": true}, {"id": "S2", "pass": false}]
        });
        server
            .mock("GET", "/standards/scores/technical_services/PSVC1")
            .with_body(body.to_string())
            .create_async()
            .await;

        let standards = test_client(&server.url()).service_standards("PSVC1").await.unwrap();
        assert_eq!(standards.0, body);
    }

    #[tokio::test]
    async fn test_standards_unauthenticated() {
        let mut server = mockito::Server::new_async().await;
        server
            .mock("GET", "/standards/scores/technical_services/PSVC1")
            .with_status(401)
            .create_async()
            .await;

        let err = test_client(&server.url()).service_standards("PSVC1").await.unwrap_err();

        assert_eq!(err.status_code(), Some(401));
        assert_eq!(
            err.to_string(),
            "Failed to get service standards for service. Caller did not supply credentials or did not provide the correct credentials."
        );
    }

    #[tokio::test]
    async fn test_metrics_window_and_body() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("POST", "/analytics/metrics/incidents/services")
            .match_body(Matcher::Json(json!({
                "filters": {
                    "created_at_start": "2024-05-02T10:15:30.000Z",
                    "created_at_end": "2024-06-01T10:15:30.000Z",
                    "service_ids": ["PSVC1"]
                }
            })))
            .with_body(r#"{"data": [{"service_id": "PSVC1", "total_incident_count": 4}]}"#)
            .create_async()
            .await;

        let now = Utc.with_ymd_and_hms(2024, 6, 1, 10, 15, 30).unwrap();
        let metrics = test_client(&server.url())
            .service_metrics_at("PSVC1", now)
            .await
            .unwrap();

        assert_eq!(metrics.len(), 1);
        assert_eq!(metrics[0].0["total_incident_count"], 4);
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn test_metrics_invalid_arguments_not_retryable() {
        let mut server = mockito::Server::new_async().await;
        server
            .mock("POST", "/analytics/metrics/incidents/services")
            .with_status(400)
            .create_async()
            .await;

        let err = test_client(&server.url()).service_metrics("PSVC1").await.unwrap_err();

        assert_eq!(err.kind(), ErrorKind::InvalidArguments);
        assert!(!err.is_retryable());
        assert_eq!(
            err.to_string(),
            "Failed to get service metrics for service. Caller provided invalid arguments. Please review the response for error details. Retrying with the same arguments will not work."
        );
    }

    #[tokio::test]
    async fn test_metrics_unauthenticated_is_unexpected() {
        let mut server = mockito::Server::new_async().await;
        server
            .mock("POST", "/analytics/metrics/incidents/services")
            .with_status(401)
            .create_async()
            .await;

        let err = test_client(&server.url()).service_metrics("PSVC1").await.unwrap_err();

        assert_eq!(err.kind(), ErrorKind::Unexpected);
        assert_eq!(err.status_code(), Some(401));
    }
}
