//
//  ibm-platform-services
//  api/posture_management/models.rs
//
//  Created by Ngonidzashe Mangudya on 2026/02/10.
//  Copyright (c) 2026 IAMNGONI. All rights reserved.
//

//! Posture management wire types.
//!
//! Response models for validation scans, compliance profiles, and scopes.
//! All operations in this service are account scoped; requests carry the
//! account id as a query parameter rather than in the body.

use serde::Deserialize;

/// Kinds of scan recorded in `last_scan_type` on a [`Scope`].
pub mod last_scan_type {
    /// Inventory discovery of the scope's resources.
    pub const DISCOVERY: &str = "discovery";
    /// Validation of the scope against a profile.
    pub const VALIDATION: &str = "validation";
}

/// Acknowledgement of a validation scan request.
#[derive(Debug, Clone, Deserialize)]
pub struct ScanInitiated {
    /// Whether the scan was accepted.
    #[serde(default)]
    pub result: Option<bool>,

    /// Detail about the outcome, e.g. why a scan was rejected.
    #[serde(default)]
    pub message: Option<String>,
}

/// A page of compliance profiles.
#[derive(Debug, Clone, Deserialize)]
pub struct ProfilesList {
    /// The profiles visible to the account.
    #[serde(default)]
    pub profiles: Vec<Profile>,
}

/// A compliance profile.
///
/// Profiles bundle the goals a scan validates against. Predefined profiles
/// ship with the service; custom and group profiles are authored by the
/// account.
///
/// # Fields
///
/// * `profile_id` - Numeric id used when initiating scans
/// * `name` / `description` - Display metadata
/// * `profile_type` - `predefined`, `custom`, or `authored` group
/// * `no_of_goals` - Number of goals the profile validates
/// * `applicability_criteria` - What the profile applies to
/// * `enabled` - Whether the profile can be used in scans
#[derive(Debug, Clone, Deserialize)]
pub struct Profile {
    /// Display name of the profile.
    #[serde(default)]
    pub name: Option<String>,

    /// Number of goals the profile validates.
    #[serde(default)]
    pub no_of_goals: Option<i64>,

    /// Description of what the profile checks.
    #[serde(default)]
    pub description: Option<String>,

    /// Version of the profile, incremented on edit.
    #[serde(default)]
    pub version: Option<i64>,

    /// The user who created the profile.
    #[serde(default)]
    pub created_by: Option<String>,

    /// The user who last modified the profile.
    #[serde(default)]
    pub modified_by: Option<String>,

    /// Reason recorded if the profile was marked for deletion.
    #[serde(default)]
    pub reason_for_delete: Option<String>,

    /// The environments and resources the profile applies to.
    #[serde(default)]
    pub applicability_criteria: Option<ApplicabilityCriteria>,

    /// Numeric id of the profile, used when initiating scans.
    #[serde(default)]
    pub profile_id: Option<i64>,

    /// The predefined profile this one was derived from, if any.
    #[serde(default)]
    pub base_profile: Option<String>,

    /// Kind of profile.
    /// Possible values: `predefined`, `custom`, `template_group`.
    #[serde(default)]
    pub profile_type: Option<String>,

    /// ISO 8601 timestamp of profile creation.
    #[serde(default)]
    pub created_time: Option<String>,

    /// ISO 8601 timestamp of the last modification.
    #[serde(default)]
    pub modified_time: Option<String>,

    /// Whether the profile can be used in scans.
    #[serde(default)]
    pub enabled: Option<bool>,
}

/// What a profile applies to.
///
/// The `*_description` maps carry display text keyed by the corresponding
/// list entries. The detail fields are service-defined JSON with no fixed
/// schema.
#[derive(Debug, Clone, Deserialize)]
pub struct ApplicabilityCriteria {
    /// Environments the profile applies to, e.g. `ibm`.
    #[serde(default)]
    pub environment: Vec<String>,

    /// Resources the profile validates.
    #[serde(default)]
    pub resource: Vec<String>,

    /// Categories of environment.
    #[serde(default)]
    pub environment_category: Vec<String>,

    /// Categories of resource.
    #[serde(default)]
    pub resource_category: Vec<String>,

    /// Resource types the profile validates.
    #[serde(default)]
    pub resource_type: Vec<String>,

    /// Software the profile applies to. Service-defined shape.
    #[serde(default)]
    pub software_details: Option<serde_json::Value>,

    /// Operating systems the profile applies to. Service-defined shape.
    #[serde(default)]
    pub os_details: Option<serde_json::Value>,

    /// Additional applicability detail. Service-defined shape.
    #[serde(default)]
    pub additional_details: Option<serde_json::Value>,

    /// Display text for entries of `environment_category`.
    #[serde(default)]
    pub environment_category_description: std::collections::HashMap<String, String>,

    /// Display text for entries of `environment`.
    #[serde(default)]
    pub environment_description: std::collections::HashMap<String, String>,

    /// Display text for entries of `resource_category`.
    #[serde(default)]
    pub resource_category_description: std::collections::HashMap<String, String>,

    /// Display text for entries of `resource_type`.
    #[serde(default)]
    pub resource_type_description: std::collections::HashMap<String, String>,

    /// Display text for entries of `resource`.
    #[serde(default)]
    pub resource_description: std::collections::HashMap<String, String>,
}

/// A page of scopes.
#[derive(Debug, Clone, Deserialize)]
pub struct ScopesList {
    /// The scopes visible to the account.
    #[serde(default)]
    pub scopes: Vec<Scope>,
}

/// A scope: the set of resources a scan runs against.
#[derive(Debug, Clone, Deserialize)]
pub struct Scope {
    /// Description of the scope.
    #[serde(default)]
    pub description: Option<String>,

    /// The user who created the scope.
    #[serde(default)]
    pub created_by: Option<String>,

    /// The user who last modified the scope.
    #[serde(default)]
    pub modified_by: Option<String>,

    /// Numeric id of the scope, used when initiating scans.
    #[serde(default)]
    pub scope_id: Option<i64>,

    /// Display name of the scope.
    #[serde(default)]
    pub name: Option<String>,

    /// Whether the scope can be scanned.
    #[serde(default)]
    pub enabled: Option<bool>,

    /// The environment the scope lives in, e.g. `ibm`.
    #[serde(default)]
    pub environment_type: Option<String>,

    /// ISO 8601 timestamp of scope creation.
    #[serde(default)]
    pub created_time: Option<String>,

    /// ISO 8601 timestamp of the last modification.
    #[serde(default)]
    pub modified_time: Option<String>,

    /// Kind of the last scan run against the scope.
    /// Possible values: `discovery`, `validation`.
    #[serde(default)]
    pub last_scan_type: Option<String>,

    /// Display text for `last_scan_type`.
    #[serde(default)]
    pub last_scan_type_description: Option<String>,

    /// ISO 8601 timestamp of the last scan status change.
    #[serde(default)]
    pub last_scan_status_updated_time: Option<String>,

    /// Ids of the collectors attached to the scope.
    #[serde(default)]
    pub collectors_id: Vec<i64>,

    /// Scans that have run against the scope.
    #[serde(default)]
    pub scans: Vec<Scan>,
}

/// One scan run against a scope.
#[derive(Debug, Clone, Deserialize)]
pub struct Scan {
    /// Numeric id of the scan.
    #[serde(default)]
    pub scan_id: Option<i64>,

    /// Id of the discovery the scan validated against.
    #[serde(default)]
    pub discover_id: Option<i64>,

    /// Current status of the scan.
    #[serde(default)]
    pub status: Option<String>,

    /// Display text for `status`.
    #[serde(default)]
    pub status_message: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_profile_deserializes() {
        let body = r#"{
            "name": "CIS IBM Foundations",
            "profile_id": 48,
            "no_of_goals": 59,
            "profile_type": "predefined",
            "enabled": true,
            "applicability_criteria": {
                "environment": ["ibm"],
                "resource": ["cloud_object_storage"],
                "environment_category_description": {"cloud_platform": "Cloud"}
            }
        }"#;
        let profile: Profile = serde_json::from_str(body).unwrap();
        assert_eq!(profile.profile_id, Some(48));
        let criteria = profile.applicability_criteria.unwrap();
        assert_eq!(criteria.environment, vec!["ibm"]);
        assert_eq!(
            criteria.environment_category_description.get("cloud_platform"),
            Some(&"Cloud".to_string())
        );
    }

    #[test]
    fn test_scope_deserializes_with_scans() {
        let body = r#"{
            "scope_id": 1,
            "name": "production",
            "collectors_id": [7],
            "scans": [{"scan_id": 4, "discover_id": 3, "status": "validation_completed"}]
        }"#;
        let scope: Scope = serde_json::from_str(body).unwrap();
        assert_eq!(scope.scans[0].scan_id, Some(4));
        assert_eq!(scope.collectors_id, vec![7]);
    }
}
