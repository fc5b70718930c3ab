//
//  ibm-platform-services
//  api/open_service_broker/mod.rs
//
//  Created by Ngonidzashe Mangudya on 2026/02/10.
//  Copyright (c) 2026 IAMNGONI. All rights reserved.
//

//! # Open Service Broker Service
//!
//! Client for brokers implementing the IBM Cloud flavor of the Open Service
//! Broker contract. The platform calls these endpoints on brokers; this
//! client is for exercising a broker directly, for example when developing
//! or verifying one.
//!
//! ## Operations
//!
//! | Method | Endpoint | Purpose |
//! |--------|----------|---------|
//! | [`service_instance_state`](OpenServiceBroker::service_instance_state) | `GET /bluemix_v1/service_instances/{id}` | Read enablement state |
//! | [`replace_state`](OpenServiceBroker::replace_state) | `PUT /bluemix_v1/service_instances/{id}` | Enable or disable an instance |
//! | [`replace_service_instance`](OpenServiceBroker::replace_service_instance) | `PUT /v2/service_instances/{id}` | Provision an instance |
//! | [`update_service_instance`](OpenServiceBroker::update_service_instance) | `PATCH /v2/service_instances/{id}` | Update plan or parameters |
//! | [`delete_service_instance`](OpenServiceBroker::delete_service_instance) | `DELETE /v2/service_instances/{id}` | Deprovision an instance |
//! | [`catalog`](OpenServiceBroker::catalog) | `GET /v2/catalog` | Discover services and plans |
//! | [`last_operation`](OpenServiceBroker::last_operation) | `GET /v2/service_instances/{id}/last_operation` | Poll an async operation |
//! | [`replace_service_binding`](OpenServiceBroker::replace_service_binding) | `PUT .../service_bindings/...` | Create a binding |
//! | [`delete_service_binding`](OpenServiceBroker::delete_service_binding) | `DELETE .../service_bindings/...` | Delete a binding |
//!
//! ## Notes
//!
//! - There is no default endpoint; every broker has its own URL.
//! - Brokers usually expect an `X-Broker-Api-Version` header and basic
//!   authentication. Set the header through the per-request `headers` map
//!   and the credentials through [`AuthCredential::basic`](crate::auth::AuthCredential::basic).
//! - The update/deprovision and binding endpoints return a bare JSON
//!   string, which is passed through as-is.

pub mod models;

use std::collections::HashMap;

use crate::api::client::ServiceClient;
use crate::api::common::{require, ApiError, ApiResult};
use crate::config::ServiceConfig;

use models::{
    BindResource, BindingPayload, CatalogService, Context, InstanceEnablementResponse,
    InstanceStateResponse, LastOperationResponse, Parameters, ProvisionPayload,
    ProvisionResponse, ReplaceStatePayload, UpdateInstancePayload,
};

/// Service name used for analytics headers and environment configuration.
const SERVICE_NAME: &str = "open_service_broker";

/// Client for a broker implementing the Open Service Broker contract.
pub struct OpenServiceBroker {
    client: ServiceClient,
}

impl OpenServiceBroker {
    /// Creates a client targeting the given broker URL.
    pub fn new(service_url: &str) -> ApiResult<Self> {
        Ok(Self {
            client: ServiceClient::new(SERVICE_NAME, service_url)?,
        })
    }

    /// Creates a client configured from `OPEN_SERVICE_BROKER_*` environment
    /// variables.
    ///
    /// `OPEN_SERVICE_BROKER_URL` is required since brokers have no default
    /// endpoint.
    pub fn from_env() -> ApiResult<Self> {
        let config = ServiceConfig::from_env(SERVICE_NAME);
        let url = config
            .url
            .ok_or_else(|| ApiError::Validation("service_url".to_string()))?;
        let mut client = ServiceClient::new(SERVICE_NAME, &url)?;
        if let Some(auth) = config.auth {
            client = client.with_auth(auth);
        }
        Ok(Self { client })
    }

    /// Sets the credentials used for every request.
    pub fn with_auth(mut self, auth: crate::auth::AuthCredential) -> Self {
        self.client = self.client.with_auth(auth);
        self
    }

    /// Replaces the broker endpoint URL.
    pub fn set_service_url(&mut self, service_url: &str) -> ApiResult<()> {
        self.client.set_service_url(service_url)
    }

    /// Returns the configured broker endpoint URL.
    pub fn service_url(&self) -> &str {
        self.client.service_url()
    }

    /// Reads the enablement and activity state of a service instance.
    pub async fn service_instance_state(
        &self,
        options: &GetInstanceStateOptions,
    ) -> ApiResult<InstanceStateResponse> {
        require("instance_id", &options.instance_id)?;

        self.client
            .get(
                "GetServiceInstanceState",
                &["bluemix_v1", "service_instances", &options.instance_id],
                &[],
                &options.headers,
            )
            .await
    }

    /// Enables or disables a service instance.
    ///
    /// Disabling takes the instance out of service without deprovisioning
    /// it; re-enabling restores it.
    pub async fn replace_state(
        &self,
        options: &ReplaceStateOptions,
    ) -> ApiResult<InstanceEnablementResponse> {
        require("instance_id", &options.instance_id)?;

        let payload = ReplaceStatePayload {
            enabled: options.enabled,
            initiator_id: options.initiator_id.clone(),
            reason_code: options.reason_code.clone(),
        };

        self.client
            .put(
                "ReplaceServiceInstanceState",
                &["bluemix_v1", "service_instances", &options.instance_id],
                &[],
                &options.headers,
                &payload,
            )
            .await
    }

    /// Provisions a service instance.
    ///
    /// With `accepts_incomplete`, the broker may provision asynchronously
    /// and return an `operation` token to poll through
    /// [`last_operation`](Self::last_operation).
    pub async fn replace_service_instance(
        &self,
        options: &ReplaceServiceInstanceOptions,
    ) -> ApiResult<ProvisionResponse> {
        require("instance_id", &options.instance_id)?;

        let mut query: Vec<(&str, String)> = Vec::new();
        if let Some(accepts_incomplete) = options.accepts_incomplete {
            query.push(("accepts_incomplete", accepts_incomplete.to_string()));
        }

        let payload = ProvisionPayload {
            context: options.context.clone(),
            organization_guid: options.organization_guid.clone(),
            parameters: options.parameters.clone(),
            plan_id: options.plan_id.clone(),
            service_id: options.service_id.clone(),
            space_guid: options.space_guid.clone(),
        };

        self.client
            .put(
                "ReplaceServiceInstance",
                &["v2", "service_instances", &options.instance_id],
                &query,
                &options.headers,
                &payload,
            )
            .await
    }

    /// Updates the plan or parameters of a service instance.
    ///
    /// Returns the broker's response body, a bare JSON string.
    pub async fn update_service_instance(
        &self,
        options: &UpdateServiceInstanceOptions,
    ) -> ApiResult<String> {
        require("instance_id", &options.instance_id)?;

        let mut query: Vec<(&str, String)> = Vec::new();
        if let Some(accepts_incomplete) = &options.accepts_incomplete {
            query.push(("accepts_incomplete", accepts_incomplete.clone()));
        }

        let payload = UpdateInstancePayload {
            context: options.context.clone(),
            parameters: options.parameters.clone(),
            plan_id: options.plan_id.clone(),
            previous_values: options.previous_values.clone(),
            service_id: options.service_id.clone(),
        };

        self.client
            .patch(
                "UpdateServiceInstance",
                &["v2", "service_instances", &options.instance_id],
                &query,
                &options.headers,
                &payload,
            )
            .await
    }

    /// Deprovisions a service instance.
    ///
    /// Returns the broker's response body, a bare JSON string.
    pub async fn delete_service_instance(
        &self,
        options: &DeleteServiceInstanceOptions,
    ) -> ApiResult<String> {
        require("service_id", &options.service_id)?;
        require("plan_id", &options.plan_id)?;
        require("instance_id", &options.instance_id)?;

        let mut query: Vec<(&str, String)> = vec![
            ("service_id", options.service_id.clone()),
            ("plan_id", options.plan_id.clone()),
        ];
        if let Some(accepts_incomplete) = options.accepts_incomplete {
            query.push(("accepts_incomplete", accepts_incomplete.to_string()));
        }

        self.client
            .delete(
                "DeleteServiceInstance",
                &["v2", "service_instances", &options.instance_id],
                &query,
                &options.headers,
            )
            .await
    }

    /// Lists the services and plans the broker offers.
    ///
    /// The catalog endpoint returns a bare JSON array.
    pub async fn catalog(
        &self,
        options: &ListCatalogOptions,
    ) -> ApiResult<Vec<CatalogService>> {
        self.client
            .get("ListCatalog", &["v2", "catalog"], &[], &options.headers)
            .await
    }

    /// Polls the state of the last asynchronous operation on an instance.
    pub async fn last_operation(
        &self,
        options: &GetLastOperationOptions,
    ) -> ApiResult<LastOperationResponse> {
        require("instance_id", &options.instance_id)?;

        let mut query: Vec<(&str, String)> = Vec::new();
        if let Some(operation) = &options.operation {
            query.push(("operation", operation.clone()));
        }
        if let Some(plan_id) = &options.plan_id {
            query.push(("plan_id", plan_id.clone()));
        }
        if let Some(service_id) = &options.service_id {
            query.push(("service_id", service_id.clone()));
        }

        self.client
            .get(
                "GetLastOperation",
                &[
                    "v2",
                    "service_instances",
                    &options.instance_id,
                    "last_operation",
                ],
                &query,
                &options.headers,
            )
            .await
    }

    /// Creates a binding between an application and a service instance.
    ///
    /// Returns the broker's response body, a bare JSON string.
    pub async fn replace_service_binding(
        &self,
        options: &ReplaceServiceBindingOptions,
    ) -> ApiResult<String> {
        require("binding_id", &options.binding_id)?;
        require("instance_id", &options.instance_id)?;

        let payload = BindingPayload {
            bind_resource: options.bind_resource.clone(),
            parameters: options.parameters.clone(),
            plan_id: options.plan_id.clone(),
            service_id: options.service_id.clone(),
        };

        self.client
            .put(
                "ReplaceServiceBinding",
                &binding_segments(&options.binding_id, &options.instance_id),
                &[],
                &options.headers,
                &payload,
            )
            .await
    }

    /// Deletes a binding.
    ///
    /// Returns the broker's response body, a bare JSON string.
    pub async fn delete_service_binding(
        &self,
        options: &DeleteServiceBindingOptions,
    ) -> ApiResult<String> {
        require("binding_id", &options.binding_id)?;
        require("instance_id", &options.instance_id)?;
        require("plan_id", &options.plan_id)?;
        require("service_id", &options.service_id)?;

        let query: Vec<(&str, String)> = vec![
            ("plan_id", options.plan_id.clone()),
            ("service_id", options.service_id.clone()),
        ];

        self.client
            .delete(
                "DeleteServiceBinding",
                &binding_segments(&options.binding_id, &options.instance_id),
                &query,
                &options.headers,
            )
            .await
    }
}

/// Path of a binding resource.
///
/// The platform addresses bindings with the binding id in the
/// `service_instances` position and the instance id in the
/// `service_bindings` position. Brokers implement the contract as deployed,
/// so the order is preserved here.
fn binding_segments<'a>(binding_id: &'a str, instance_id: &'a str) -> [&'a str; 5] {
    [
        "v2",
        "service_instances",
        binding_id,
        "service_bindings",
        instance_id,
    ]
}

/// Options for reading instance state.
#[derive(Debug, Clone)]
pub struct GetInstanceStateOptions {
    /// The instance id.
    pub instance_id: String,

    /// Extra headers for this request.
    pub headers: HashMap<String, String>,
}

impl GetInstanceStateOptions {
    /// Creates state read options.
    pub fn new(instance_id: impl Into<String>) -> Self {
        Self {
            instance_id: instance_id.into(),
            headers: HashMap::new(),
        }
    }
}

/// Options for an enablement change.
#[derive(Debug, Clone)]
pub struct ReplaceStateOptions {
    /// The instance id.
    pub instance_id: String,

    /// Desired enablement state.
    pub enabled: Option<bool>,

    /// IAM id of the user initiating the change.
    pub initiator_id: Option<String>,

    /// Platform reason code for the change.
    pub reason_code: Option<String>,

    /// Extra headers for this request.
    pub headers: HashMap<String, String>,
}

impl ReplaceStateOptions {
    /// Creates enablement change options.
    pub fn new(instance_id: impl Into<String>) -> Self {
        Self {
            instance_id: instance_id.into(),
            enabled: None,
            initiator_id: None,
            reason_code: None,
            headers: HashMap::new(),
        }
    }
}

/// Options for provisioning an instance.
#[derive(Debug, Clone)]
pub struct ReplaceServiceInstanceOptions {
    /// The id the platform assigns to the new instance.
    pub instance_id: String,

    /// Platform context entries.
    pub context: Vec<Context>,

    /// Organization GUID (Cloud Foundry compatibility).
    pub organization_guid: Option<String>,

    /// Broker-defined configuration parameters.
    pub parameters: Vec<Parameters>,

    /// Id of the plan to provision.
    pub plan_id: Option<String>,

    /// Id of the service to provision.
    pub service_id: Option<String>,

    /// Space GUID (Cloud Foundry compatibility).
    pub space_guid: Option<String>,

    /// Whether the broker may provision asynchronously.
    pub accepts_incomplete: Option<bool>,

    /// Extra headers for this request.
    pub headers: HashMap<String, String>,
}

impl ReplaceServiceInstanceOptions {
    /// Creates provisioning options.
    pub fn new(instance_id: impl Into<String>) -> Self {
        Self {
            instance_id: instance_id.into(),
            context: Vec::new(),
            organization_guid: None,
            parameters: Vec::new(),
            plan_id: None,
            service_id: None,
            space_guid: None,
            accepts_incomplete: None,
            headers: HashMap::new(),
        }
    }
}

/// Options for updating an instance.
#[derive(Debug, Clone)]
pub struct UpdateServiceInstanceOptions {
    /// The instance id.
    pub instance_id: String,

    /// Platform context entries.
    pub context: Vec<Context>,

    /// Broker-defined configuration parameters.
    pub parameters: Option<Parameters>,

    /// Id of the plan to move the instance to.
    pub plan_id: Option<String>,

    /// Previous values of the fields being changed.
    pub previous_values: Vec<String>,

    /// Id of the service the instance belongs to.
    pub service_id: Option<String>,

    /// Whether the broker may update asynchronously. The platform sends
    /// this particular parameter as a string.
    pub accepts_incomplete: Option<String>,

    /// Extra headers for this request.
    pub headers: HashMap<String, String>,
}

impl UpdateServiceInstanceOptions {
    /// Creates update options.
    pub fn new(instance_id: impl Into<String>) -> Self {
        Self {
            instance_id: instance_id.into(),
            context: Vec::new(),
            parameters: None,
            plan_id: None,
            previous_values: Vec::new(),
            service_id: None,
            accepts_incomplete: None,
            headers: HashMap::new(),
        }
    }
}

/// Options for deprovisioning an instance.
#[derive(Debug, Clone)]
pub struct DeleteServiceInstanceOptions {
    /// Id of the service the instance belongs to.
    pub service_id: String,

    /// Id of the plan the instance uses.
    pub plan_id: String,

    /// The instance id.
    pub instance_id: String,

    /// Whether the broker may deprovision asynchronously.
    pub accepts_incomplete: Option<bool>,

    /// Extra headers for this request.
    pub headers: HashMap<String, String>,
}

impl DeleteServiceInstanceOptions {
    /// Creates deprovisioning options from the required identifiers.
    pub fn new(
        service_id: impl Into<String>,
        plan_id: impl Into<String>,
        instance_id: impl Into<String>,
    ) -> Self {
        Self {
            service_id: service_id.into(),
            plan_id: plan_id.into(),
            instance_id: instance_id.into(),
            accepts_incomplete: None,
            headers: HashMap::new(),
        }
    }
}

/// Options for listing the catalog.
#[derive(Debug, Clone, Default)]
pub struct ListCatalogOptions {
    /// Extra headers for this request.
    pub headers: HashMap<String, String>,
}

impl ListCatalogOptions {
    /// Creates empty catalog options.
    pub fn new() -> Self {
        Self::default()
    }
}

/// Options for polling the last operation.
#[derive(Debug, Clone)]
pub struct GetLastOperationOptions {
    /// The instance id.
    pub instance_id: String,

    /// The operation token returned by the provisioning response.
    pub operation: Option<String>,

    /// Id of the plan the instance uses.
    pub plan_id: Option<String>,

    /// Id of the service the instance belongs to.
    pub service_id: Option<String>,

    /// Extra headers for this request.
    pub headers: HashMap<String, String>,
}

impl GetLastOperationOptions {
    /// Creates polling options.
    pub fn new(instance_id: impl Into<String>) -> Self {
        Self {
            instance_id: instance_id.into(),
            operation: None,
            plan_id: None,
            service_id: None,
            headers: HashMap::new(),
        }
    }
}

/// Options for creating a binding.
#[derive(Debug, Clone)]
pub struct ReplaceServiceBindingOptions {
    /// The id the platform assigns to the new binding.
    pub binding_id: String,

    /// The instance id.
    pub instance_id: String,

    /// The resources the binding is created against.
    pub bind_resource: Vec<BindResource>,

    /// Opaque broker-defined binding parameters.
    pub parameters: HashMap<String, serde_json::Value>,

    /// Id of the plan the instance uses.
    pub plan_id: Option<String>,

    /// Id of the service the instance belongs to.
    pub service_id: Option<String>,

    /// Extra headers for this request.
    pub headers: HashMap<String, String>,
}

impl ReplaceServiceBindingOptions {
    /// Creates binding options from the required identifiers.
    pub fn new(binding_id: impl Into<String>, instance_id: impl Into<String>) -> Self {
        Self {
            binding_id: binding_id.into(),
            instance_id: instance_id.into(),
            bind_resource: Vec::new(),
            parameters: HashMap::new(),
            plan_id: None,
            service_id: None,
            headers: HashMap::new(),
        }
    }
}

/// Options for deleting a binding.
#[derive(Debug, Clone)]
pub struct DeleteServiceBindingOptions {
    /// The binding id.
    pub binding_id: String,

    /// The instance id.
    pub instance_id: String,

    /// Id of the plan the instance uses.
    pub plan_id: String,

    /// Id of the service the instance belongs to.
    pub service_id: String,

    /// Extra headers for this request.
    pub headers: HashMap<String, String>,
}

impl DeleteServiceBindingOptions {
    /// Creates binding deletion options from the required identifiers.
    pub fn new(
        binding_id: impl Into<String>,
        instance_id: impl Into<String>,
        plan_id: impl Into<String>,
        service_id: impl Into<String>,
    ) -> Self {
        Self {
            binding_id: binding_id.into(),
            instance_id: instance_id.into(),
            plan_id: plan_id.into(),
            service_id: service_id.into(),
            headers: HashMap::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mockito::Matcher;

    fn service_for(server: &mockito::Server) -> OpenServiceBroker {
        OpenServiceBroker::new(&server.url()).unwrap()
    }

    #[tokio::test]
    async fn test_service_instance_state() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("GET", "/bluemix_v1/service_instances/inst-1")
            .with_status(200)
            .with_body(r#"{"active": true, "enabled": true, "last_active": 1000}"#)
            .create_async()
            .await;

        let service = service_for(&server);
        let options = GetInstanceStateOptions::new("inst-1");

        let state = service.service_instance_state(&options).await.unwrap();
        mock.assert_async().await;
        assert_eq!(state.enabled, Some(true));
    }

    #[tokio::test]
    async fn test_replace_service_instance_sends_accepts_incomplete() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("PUT", "/v2/service_instances/inst-1")
            .match_query(Matcher::UrlEncoded(
                "accepts_incomplete".into(),
                "true".into(),
            ))
            .match_body(Matcher::Json(serde_json::json!({
                "plan_id": "plan-1",
                "service_id": "svc-1"
            })))
            .with_status(200)
            .with_body(r#"{"dashboard_url": "https://dashboard.test", "operation": "op-1"}"#)
            .create_async()
            .await;

        let service = service_for(&server);
        let mut options = ReplaceServiceInstanceOptions::new("inst-1");
        options.plan_id = Some("plan-1".to_string());
        options.service_id = Some("svc-1".to_string());
        options.accepts_incomplete = Some(true);

        let response = service.replace_service_instance(&options).await.unwrap();
        mock.assert_async().await;
        assert_eq!(response.operation.as_deref(), Some("op-1"));
    }

    #[tokio::test]
    async fn test_update_service_instance_returns_raw_string() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("PATCH", "/v2/service_instances/inst-1")
            .with_status(200)
            .with_body(r#""accepted""#)
            .create_async()
            .await;

        let service = service_for(&server);
        let mut options = UpdateServiceInstanceOptions::new("inst-1");
        options.plan_id = Some("plan-2".to_string());

        let body = service.update_service_instance(&options).await.unwrap();
        mock.assert_async().await;
        assert_eq!(body, "accepted");
    }

    #[tokio::test]
    async fn test_delete_service_instance_requires_identifiers() {
        let service = OpenServiceBroker::new("https://broker.test").unwrap();
        let options = DeleteServiceInstanceOptions::new("", "plan-1", "inst-1");
        assert!(matches!(
            service.delete_service_instance(&options).await,
            Err(ApiError::Validation(_))
        ));
    }

    #[tokio::test]
    async fn test_delete_service_instance_query() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("DELETE", "/v2/service_instances/inst-1")
            .match_query(Matcher::AllOf(vec![
                Matcher::UrlEncoded("service_id".into(), "svc-1".into()),
                Matcher::UrlEncoded("plan_id".into(), "plan-1".into()),
            ]))
            .with_status(200)
            .with_body(r#""deprovisioned""#)
            .create_async()
            .await;

        let service = service_for(&server);
        let options = DeleteServiceInstanceOptions::new("svc-1", "plan-1", "inst-1");

        let body = service.delete_service_instance(&options).await.unwrap();
        mock.assert_async().await;
        assert_eq!(body, "deprovisioned");
    }

    #[tokio::test]
    async fn test_list_catalog_parses_bare_array() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("GET", "/v2/catalog")
            .with_status(200)
            .with_body(
                r#"[{"bindable": true, "description": "d", "id": "svc-1", "name": "svc", "plans": []}]"#,
            )
            .create_async()
            .await;

        let service = service_for(&server);
        let catalog = service.catalog(&ListCatalogOptions::new()).await.unwrap();
        mock.assert_async().await;
        assert_eq!(catalog.len(), 1);
        assert_eq!(catalog[0].id, "svc-1");
    }

    #[tokio::test]
    async fn test_binding_path_order() {
        // Bindings are addressed with the binding id first, as the platform
        // sends them.
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("PUT", "/v2/service_instances/bind-1/service_bindings/inst-1")
            .with_status(200)
            .with_body(r#""bound""#)
            .create_async()
            .await;

        let service = service_for(&server);
        let options = ReplaceServiceBindingOptions::new("bind-1", "inst-1");

        let body = service.replace_service_binding(&options).await.unwrap();
        mock.assert_async().await;
        assert_eq!(body, "bound");
    }

    #[tokio::test]
    async fn test_last_operation_query() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("GET", "/v2/service_instances/inst-1/last_operation")
            .match_query(Matcher::UrlEncoded("operation".into(), "op-1".into()))
            .with_status(200)
            .with_body(r#"{"state": "in progress", "description": "provisioning"}"#)
            .create_async()
            .await;

        let service = service_for(&server);
        let mut options = GetLastOperationOptions::new("inst-1");
        options.operation = Some("op-1".to_string());

        let response = service.last_operation(&options).await.unwrap();
        mock.assert_async().await;
        assert_eq!(response.state, "in progress");
    }
}
