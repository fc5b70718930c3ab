//
//  ibm-platform-services
//  api/client.rs
//
//  Created by Ngonidzashe Mangudya on 2026/02/10.
//  Copyright (c) 2026 IAMNGONI. All rights reserved.
//

//! # Shared HTTP Transport
//!
//! This module provides the transport client that every service module
//! dispatches through. It handles URL construction from path segments,
//! standard and custom header injection, authentication, JSON and multipart
//! bodies, and mapping of non-success responses to [`ApiError`].
//!
//! ## Features
//!
//! - Percent-encoded path segment construction on top of the service URL
//! - `User-Agent` and per-operation SDK analytics headers
//! - Authentication header injection via [`AuthCredential`]
//! - JSON serialization/deserialization
//! - Error mapping with messages extracted from error bodies

use std::collections::HashMap;

use reqwest::{multipart, Client, RequestBuilder};
use serde::de::DeserializeOwned;
use serde::Serialize;
use url::Url;

use crate::api::common::{self, ApiError, ApiResult, USER_AGENT};
use crate::auth::AuthCredential;

/// The HTTP transport shared by all service modules.
///
/// A `ServiceClient` owns the service endpoint URL, the service name used
/// for analytics headers, optional credentials, and any default headers to
/// send with every request. Service structs wrap one of these and call its
/// generic verb methods.
///
/// # Creating a Client
///
/// ```rust,no_run
/// use ibm_platform_services::api::ServiceClient;
/// use ibm_platform_services::auth::AuthCredential;
///
/// let client = ServiceClient::new(
///     "case_management",
///     "https://support-center.cloud.ibm.com/case-management/v1",
/// )?
/// .with_auth(AuthCredential::bearer("your-token"));
/// # Ok::<(), ibm_platform_services::api::ApiError>(())
/// ```
pub struct ServiceClient {
    /// The underlying HTTP client.
    http: Client,
    /// The service name, used in the SDK analytics header.
    service_name: String,
    /// The service endpoint URL. Path segments are appended to its path.
    service_url: Url,
    /// Optional authentication credentials.
    auth: Option<AuthCredential>,
    /// Headers sent with every request.
    default_headers: Vec<(String, String)>,
}

impl ServiceClient {
    /// Creates a new transport for `service_name` targeting `service_url`.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::InvalidUrl`] when the URL cannot be parsed, or
    /// [`ApiError::Network`] when the underlying HTTP client cannot be
    /// constructed.
    pub fn new(service_name: &str, service_url: &str) -> ApiResult<Self> {
        let service_url = Url::parse(service_url)?;
        Ok(Self {
            http: Client::builder().user_agent(USER_AGENT.as_str()).build()?,
            service_name: service_name.to_string(),
            service_url,
            auth: None,
            default_headers: Vec::new(),
        })
    }

    /// Sets the authentication credentials for this client.
    ///
    /// Builder-style; returns `self` for chaining.
    pub fn with_auth(mut self, auth: AuthCredential) -> Self {
        self.auth = Some(auth);
        self
    }

    /// Adds a header to be sent with every request.
    ///
    /// Typical uses are transaction-id headers and broker API version
    /// headers. Builder-style; returns `self` for chaining.
    pub fn with_default_header(mut self, name: &str, value: &str) -> Self {
        self.default_headers
            .push((name.to_string(), value.to_string()));
        self
    }

    /// Replaces the service endpoint URL.
    pub fn set_service_url(&mut self, service_url: &str) -> ApiResult<()> {
        self.service_url = Url::parse(service_url)?;
        Ok(())
    }

    /// Returns the configured service endpoint URL.
    pub fn service_url(&self) -> &str {
        self.service_url.as_str()
    }

    /// Builds the request URL by appending percent-encoded path segments to
    /// the service URL.
    ///
    /// Each segment is encoded individually, so identifiers containing
    /// reserved characters cannot break out of their path position.
    fn build_url(&self, segments: &[&str]) -> ApiResult<Url> {
        let mut url = self.service_url.clone();
        url.path_segments_mut()
            .map_err(|_| ApiError::Validation("service URL cannot be a base".to_string()))?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }

    /// Applies standard, default, custom, and auth headers, sends the
    /// request, and maps non-success responses to [`ApiError`].
    async fn send(
        &self,
        operation_id: &str,
        mut request: RequestBuilder,
        headers: &HashMap<String, String>,
    ) -> ApiResult<reqwest::Response> {
        request = request.header(
            common::SDK_ANALYTICS_HEADER,
            common::sdk_analytics_value(&self.service_name, operation_id),
        );
        for (name, value) in &self.default_headers {
            request = request.header(name, value);
        }
        for (name, value) in headers {
            request = request.header(name, value);
        }
        if let Some(auth) = &self.auth {
            request = auth.apply_to_request(request);
        }

        let response = request.send().await?;
        let status = response.status();
        tracing::debug!(
            service = %self.service_name,
            operation = %operation_id,
            %status,
            "response received"
        );

        if !status.is_success() {
            let text = response.text().await.unwrap_or_default();
            return Err(common::error_from_response(status, &text));
        }

        Ok(response)
    }

    /// Makes a GET request and deserializes the JSON response.
    pub async fn get<T: DeserializeOwned>(
        &self,
        operation_id: &str,
        segments: &[&str],
        query: &[(&str, String)],
        headers: &HashMap<String, String>,
    ) -> ApiResult<T> {
        let url = self.build_url(segments)?;
        tracing::debug!(operation = %operation_id, %url, "GET");
        let mut request = self.http.get(url).header("Accept", "application/json");
        if !query.is_empty() {
            request = request.query(query);
        }
        let response = self.send(operation_id, request, headers).await?;
        Ok(response.json().await?)
    }

    /// Makes a GET request and returns the raw response body.
    ///
    /// Used for attachment downloads; sends `Accept: application/octet-stream`.
    pub async fn get_bytes(
        &self,
        operation_id: &str,
        segments: &[&str],
        headers: &HashMap<String, String>,
    ) -> ApiResult<Vec<u8>> {
        let url = self.build_url(segments)?;
        tracing::debug!(operation = %operation_id, %url, "GET (bytes)");
        let request = self
            .http
            .get(url)
            .header("Accept", "application/octet-stream");
        let response = self.send(operation_id, request, headers).await?;
        Ok(response.bytes().await?.to_vec())
    }

    /// Makes a POST request with a JSON body and deserializes the JSON
    /// response.
    pub async fn post<T: DeserializeOwned, B: Serialize>(
        &self,
        operation_id: &str,
        segments: &[&str],
        query: &[(&str, String)],
        headers: &HashMap<String, String>,
        body: &B,
    ) -> ApiResult<T> {
        let url = self.build_url(segments)?;
        tracing::debug!(operation = %operation_id, %url, "POST");
        let mut request = self
            .http
            .post(url)
            .header("Accept", "application/json")
            .json(body);
        if !query.is_empty() {
            request = request.query(query);
        }
        let response = self.send(operation_id, request, headers).await?;
        Ok(response.json().await?)
    }

    /// Makes a PUT request with a JSON body and deserializes the JSON
    /// response.
    pub async fn put<T: DeserializeOwned, B: Serialize>(
        &self,
        operation_id: &str,
        segments: &[&str],
        query: &[(&str, String)],
        headers: &HashMap<String, String>,
        body: &B,
    ) -> ApiResult<T> {
        let url = self.build_url(segments)?;
        tracing::debug!(operation = %operation_id, %url, "PUT");
        let mut request = self
            .http
            .put(url)
            .header("Accept", "application/json")
            .json(body);
        if !query.is_empty() {
            request = request.query(query);
        }
        let response = self.send(operation_id, request, headers).await?;
        Ok(response.json().await?)
    }

    /// Makes a PUT request with a multipart form body.
    ///
    /// Used for the case attachment upload endpoint.
    pub async fn put_multipart<T: DeserializeOwned>(
        &self,
        operation_id: &str,
        segments: &[&str],
        headers: &HashMap<String, String>,
        form: multipart::Form,
    ) -> ApiResult<T> {
        let url = self.build_url(segments)?;
        tracing::debug!(operation = %operation_id, %url, "PUT (multipart)");
        let request = self
            .http
            .put(url)
            .header("Accept", "application/json")
            .multipart(form);
        let response = self.send(operation_id, request, headers).await?;
        Ok(response.json().await?)
    }

    /// Makes a PATCH request with a JSON body and deserializes the JSON
    /// response.
    pub async fn patch<T: DeserializeOwned, B: Serialize>(
        &self,
        operation_id: &str,
        segments: &[&str],
        query: &[(&str, String)],
        headers: &HashMap<String, String>,
        body: &B,
    ) -> ApiResult<T> {
        let url = self.build_url(segments)?;
        tracing::debug!(operation = %operation_id, %url, "PATCH");
        let mut request = self
            .http
            .patch(url)
            .header("Accept", "application/json")
            .json(body);
        if !query.is_empty() {
            request = request.query(query);
        }
        let response = self.send(operation_id, request, headers).await?;
        Ok(response.json().await?)
    }

    /// Makes a DELETE request and deserializes the JSON response.
    ///
    /// The platform delete endpoints return a JSON document describing the
    /// remaining state rather than an empty body.
    pub async fn delete<T: DeserializeOwned>(
        &self,
        operation_id: &str,
        segments: &[&str],
        query: &[(&str, String)],
        headers: &HashMap<String, String>,
    ) -> ApiResult<T> {
        let url = self.build_url(segments)?;
        tracing::debug!(operation = %operation_id, %url, "DELETE");
        let mut request = self.http.delete(url).header("Accept", "application/json");
        if !query.is_empty() {
            request = request.query(query);
        }
        let response = self.send(operation_id, request, headers).await?;
        Ok(response.json().await?)
    }

    /// Makes a DELETE request carrying a JSON body.
    ///
    /// The case watchlist removal endpoint takes the users to remove in the
    /// request body.
    pub async fn delete_with_body<T: DeserializeOwned, B: Serialize>(
        &self,
        operation_id: &str,
        segments: &[&str],
        headers: &HashMap<String, String>,
        body: &B,
    ) -> ApiResult<T> {
        let url = self.build_url(segments)?;
        tracing::debug!(operation = %operation_id, %url, "DELETE (body)");
        let request = self
            .http
            .delete(url)
            .header("Accept", "application/json")
            .json(body);
        let response = self.send(operation_id, request, headers).await?;
        Ok(response.json().await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_url_appends_segments() {
        let client =
            ServiceClient::new("case_management", "https://example.test/case-management/v1")
                .unwrap();
        let url = client.build_url(&["cases", "CS0001", "status"]).unwrap();
        assert_eq!(
            url.as_str(),
            "https://example.test/case-management/v1/cases/CS0001/status"
        );
    }

    #[test]
    fn test_build_url_encodes_segments() {
        let client = ServiceClient::new("open_service_broker", "https://broker.test").unwrap();
        let url = client
            .build_url(&["v2", "service_instances", "inst/with slash"])
            .unwrap();
        assert_eq!(
            url.as_str(),
            "https://broker.test/v2/service_instances/inst%2Fwith%20slash"
        );
    }

    #[test]
    fn test_build_url_trailing_slash_base() {
        let client = ServiceClient::new("posture_management", "https://example.test/").unwrap();
        let url = client.build_url(&["posture", "v1", "scopes"]).unwrap();
        assert_eq!(url.as_str(), "https://example.test/posture/v1/scopes");
    }

    #[tokio::test]
    async fn test_get_sends_standard_headers() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("GET", "/things")
            .match_header(
                "X-IBMCloud-SDK-Analytics",
                "service_name=test_service;service_version=V1;operation_id=GetThings",
            )
            .match_header("Accept", "application/json")
            .match_header("Authorization", "Bearer tok")
            .with_status(200)
            .with_body(r#"{"ok": true}"#)
            .create_async()
            .await;

        let client = ServiceClient::new("test_service", &server.url())
            .unwrap()
            .with_auth(crate::auth::AuthCredential::bearer("tok"));
        let result: serde_json::Value = client
            .get("GetThings", &["things"], &[], &HashMap::new())
            .await
            .unwrap();

        mock.assert_async().await;
        assert_eq!(result["ok"], true);
    }

    #[tokio::test]
    async fn test_error_body_is_parsed() {
        let mut server = mockito::Server::new_async().await;
        let _mock = server
            .mock("GET", "/things")
            .with_status(404)
            .with_body(r#"{"message": "no such thing"}"#)
            .create_async()
            .await;

        let client = ServiceClient::new("test_service", &server.url()).unwrap();
        let result: ApiResult<serde_json::Value> = client
            .get("GetThings", &["things"], &[], &HashMap::new())
            .await;

        match result {
            Err(ApiError::NotFound(message)) => assert_eq!(message, "no such thing"),
            other => panic!("unexpected result: {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_custom_headers_applied() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("GET", "/things")
            .match_header("X-Transaction-Id", "txn-1")
            .with_status(200)
            .with_body("{}")
            .create_async()
            .await;

        let client = ServiceClient::new("test_service", &server.url()).unwrap();
        let mut headers = HashMap::new();
        headers.insert("X-Transaction-Id".to_string(), "txn-1".to_string());
        let _: serde_json::Value = client
            .get("GetThings", &["things"], &[], &headers)
            .await
            .unwrap();

        mock.assert_async().await;
    }
}
