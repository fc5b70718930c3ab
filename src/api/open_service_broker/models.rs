//
//  ibm-platform-services
//  api/open_service_broker/models.rs
//
//  Created by Ngonidzashe Mangudya on 2026/02/10.
//  Copyright (c) 2026 IAMNGONI. All rights reserved.
//

//! Open Service Broker wire types.
//!
//! Request payloads and response models for the broker contract: instance
//! enablement state, provisioning, catalog discovery, asynchronous operation
//! polling, and bindings.
//!
//! # Notes
//!
//! - Several broker endpoints return a bare JSON string rather than an
//!   object; the corresponding operations return `String` directly.
//! - The catalog endpoint returns a bare JSON array of services.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// Enablement and activity state of a service instance.
///
/// Returned by the instance state endpoint.
#[derive(Debug, Clone, Deserialize)]
pub struct InstanceStateResponse {
    /// Whether the instance is active and usable.
    #[serde(default)]
    pub active: Option<bool>,

    /// Whether the instance is enabled. A disabled instance rejects all
    /// service requests.
    #[serde(default)]
    pub enabled: Option<bool>,

    /// Milliseconds since the instance was last active, when known.
    #[serde(default)]
    pub last_active: Option<f64>,
}

/// State of an instance after an enablement change.
#[derive(Debug, Clone, Deserialize)]
pub struct InstanceEnablementResponse {
    /// Whether the instance is active and usable.
    #[serde(default)]
    pub active: Option<bool>,

    /// Whether the instance is enabled after the change.
    pub enabled: bool,

    /// Milliseconds since the instance was last active, when known.
    #[serde(default)]
    pub last_active: Option<i64>,
}

/// Result of a provisioning request.
#[derive(Debug, Clone, Deserialize)]
pub struct ProvisionResponse {
    /// URL of a dashboard for the provisioned instance, when the broker
    /// offers one.
    #[serde(default)]
    pub dashboard_url: Option<String>,

    /// Broker-defined token identifying the asynchronous operation, to be
    /// passed back when polling the last operation endpoint.
    #[serde(default)]
    pub operation: Option<String>,
}

/// State of the last asynchronous operation on an instance.
///
/// # States
///
/// - `in progress` - keep polling
/// - `succeeded` - the operation completed
/// - `failed` - the operation failed; see `description`
#[derive(Debug, Clone, Deserialize)]
pub struct LastOperationResponse {
    /// Human-readable detail about the operation's progress.
    #[serde(default)]
    pub description: Option<String>,

    /// Current operation state: `in progress`, `succeeded`, or `failed`.
    pub state: String,
}

/// One service offering in the broker catalog.
///
/// # Example
///
/// ```rust,no_run
/// use ibm_platform_services::api::open_service_broker::models::CatalogService;
///
/// fn show_offering(service: &CatalogService) {
///     println!("{} ({} plans)", service.name, service.plans.len());
/// }
/// ```
#[derive(Debug, Clone, Deserialize)]
pub struct CatalogService {
    /// Whether instances of this service can be bound.
    pub bindable: bool,

    /// Short description of the service.
    pub description: String,

    /// Broker-unique id of the service.
    pub id: String,

    /// The CLI-friendly service name.
    pub name: String,

    /// Whether instances can change plans after provisioning.
    #[serde(default)]
    pub plan_updateable: Option<bool>,

    /// The plans offered for this service.
    #[serde(default)]
    pub plans: Vec<Plan>,
}

/// One plan of a catalog service.
#[derive(Debug, Clone, Deserialize)]
pub struct Plan {
    /// Short description of the plan.
    pub description: String,

    /// Whether the plan is free of charge.
    #[serde(default)]
    pub free: Option<bool>,

    /// Broker-unique id of the plan.
    pub id: String,

    /// The CLI-friendly plan name.
    pub name: String,
}

/// Platform context passed with provisioning and update requests.
#[derive(Debug, Clone, Default, Serialize)]
pub struct Context {
    /// Account owning the instance.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub account_id: Option<String>,

    /// Cloud Resource Name of the instance.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub crn: Option<String>,

    /// The platform originating the request, e.g. `ibmcloud`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub platform: Option<String>,
}

/// Configuration parameters forwarded to the broker.
#[derive(Debug, Clone, Default, Serialize)]
pub struct Parameters {
    /// First broker-defined parameter.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parameter1: Option<i64>,

    /// Second broker-defined parameter.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parameter2: Option<String>,
}

/// The resource a binding is created against.
#[derive(Debug, Clone, Default, Serialize)]
pub struct BindResource {
    /// Account owning the resource.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub account_id: Option<String>,

    /// CRN of the service id taking the binding.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub serviceid_crn: Option<String>,

    /// CRN of the target resource.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub target_crn: Option<String>,
}

/// Body of an instance enablement change.
#[derive(Debug, Clone, Default, Serialize)]
pub struct ReplaceStatePayload {
    /// Desired enablement state.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub enabled: Option<bool>,

    /// IAM id of the user initiating the change.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub initiator_id: Option<String>,

    /// Platform reason code for the change.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reason_code: Option<String>,
}

/// Body of a provisioning request.
#[derive(Debug, Clone, Default, Serialize)]
pub struct ProvisionPayload {
    /// Platform context entries.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub context: Vec<Context>,

    /// Organization GUID (Cloud Foundry compatibility).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub organization_guid: Option<String>,

    /// Broker-defined configuration parameters.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub parameters: Vec<Parameters>,

    /// Id of the plan to provision.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub plan_id: Option<String>,

    /// Id of the service to provision.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub service_id: Option<String>,

    /// Space GUID (Cloud Foundry compatibility).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub space_guid: Option<String>,
}

/// Body of an instance update request.
#[derive(Debug, Clone, Default, Serialize)]
pub struct UpdateInstancePayload {
    /// Platform context entries.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub context: Vec<Context>,

    /// Broker-defined configuration parameters.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parameters: Option<Parameters>,

    /// Id of the plan to move the instance to.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub plan_id: Option<String>,

    /// Previous values of the fields being changed.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub previous_values: Vec<String>,

    /// Id of the service the instance belongs to.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub service_id: Option<String>,
}

/// Body of a binding creation request.
#[derive(Debug, Clone, Default, Serialize)]
pub struct BindingPayload {
    /// The resources the binding is created against.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub bind_resource: Vec<BindResource>,

    /// Opaque broker-defined binding parameters.
    #[serde(skip_serializing_if = "HashMap::is_empty")]
    pub parameters: HashMap<String, serde_json::Value>,

    /// Id of the plan the instance uses.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub plan_id: Option<String>,

    /// Id of the service the instance belongs to.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub service_id: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_provision_payload_skips_empty_fields() {
        let payload = ProvisionPayload {
            plan_id: Some("plan-1".to_string()),
            service_id: Some("svc-1".to_string()),
            ..Default::default()
        };
        let json = serde_json::to_value(&payload).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"plan_id": "plan-1", "service_id": "svc-1"})
        );
    }

    #[test]
    fn test_catalog_service_deserializes() {
        let body = r#"{
            "bindable": true,
            "description": "object storage",
            "id": "svc-1",
            "name": "cloud-object-storage",
            "plan_updateable": true,
            "plans": [{"description": "lite", "free": true, "id": "plan-1", "name": "lite"}]
        }"#;
        let service: CatalogService = serde_json::from_str(body).unwrap();
        assert!(service.bindable);
        assert_eq!(service.plans[0].free, Some(true));
    }

    #[test]
    fn test_last_operation_requires_state() {
        let result =
            serde_json::from_str::<LastOperationResponse>(r#"{"description": "working"}"#);
        assert!(result.is_err());
    }

    #[test]
    fn test_binding_payload_with_opaque_parameters() {
        let mut parameters = HashMap::new();
        parameters.insert(
            "credential-type".to_string(),
            serde_json::json!("service-credentials"),
        );
        let payload = BindingPayload {
            parameters,
            plan_id: Some("plan-1".to_string()),
            ..Default::default()
        };
        let json = serde_json::to_value(&payload).unwrap();
        assert_eq!(json["parameters"]["credential-type"], "service-credentials");
        assert!(json.get("bind_resource").is_none());
    }
}
