//
//  ibm-platform-services
//  api/posture_management/mod.rs
//
//  Created by Ngonidzashe Mangudya on 2026/02/10.
//  Copyright (c) 2026 IAMNGONI. All rights reserved.
//

//! # Posture Management Service
//!
//! Client for the security and compliance posture API: initiate validation
//! scans and list the profiles and scopes available to an account.
//!
//! ## Operations
//!
//! | Method | Endpoint | Purpose |
//! |--------|----------|---------|
//! | [`create_validation_scan`](PostureManagement::create_validation_scan) | `POST /posture/v1/scans/validation` | Initiate a validation scan |
//! | [`profiles`](PostureManagement::profiles) | `GET /posture/v1/profiles` | List compliance profiles |
//! | [`scopes`](PostureManagement::scopes) | `GET /posture/v1/scopes` | List scopes |
//!
//! Every operation requires the account id, sent as a query parameter.
//!
//! ## Example
//!
//! ```rust,no_run
//! use ibm_platform_services::api::posture_management::{
//!     CreateValidationScanOptions, PostureManagement,
//! };
//! use ibm_platform_services::auth::AuthCredential;
//!
//! # async fn example() -> Result<(), ibm_platform_services::api::ApiError> {
//! let service = PostureManagement::new("https://us.compliance.cloud.ibm.com")?
//!     .with_auth(AuthCredential::bearer("your-token"));
//!
//! let mut options = CreateValidationScanOptions::new("account-1");
//! options.scope_id = Some(1);
//! options.profile_id = Some(48);
//! let initiated = service.create_validation_scan(&options).await?;
//! println!("{}", initiated.message.unwrap_or_default());
//! # Ok(())
//! # }
//! ```

pub mod models;

use std::collections::HashMap;

use serde::Serialize;

use crate::api::client::ServiceClient;
use crate::api::common::{require, ApiError, ApiResult};
use crate::config::ServiceConfig;

use models::{ProfilesList, ScanInitiated, ScopesList};

/// Service name used for analytics headers and environment configuration.
const SERVICE_NAME: &str = "posture_management";

/// Client for the posture management service.
pub struct PostureManagement {
    client: ServiceClient,
}

impl PostureManagement {
    /// Creates a client targeting the given endpoint.
    pub fn new(service_url: &str) -> ApiResult<Self> {
        Ok(Self {
            client: ServiceClient::new(SERVICE_NAME, service_url)?,
        })
    }

    /// Creates a client configured from `POSTURE_MANAGEMENT_*` environment
    /// variables.
    ///
    /// `POSTURE_MANAGEMENT_URL` is required since endpoints are regional.
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

    /// Replaces the service endpoint URL.
    pub fn set_service_url(&mut self, service_url: &str) -> ApiResult<()> {
        self.client.set_service_url(service_url)
    }

    /// Returns the configured service endpoint URL.
    pub fn service_url(&self) -> &str {
        self.client.service_url()
    }

    /// Initiates a validation scan of a scope against a profile.
    ///
    /// The scan runs asynchronously; the response only acknowledges that it
    /// was accepted.
    pub async fn create_validation_scan(
        &self,
        options: &CreateValidationScanOptions,
    ) -> ApiResult<ScanInitiated> {
        require("account_id", &options.account_id)?;

        let query: Vec<(&str, String)> = vec![("account_id", options.account_id.clone())];
        let payload = ValidationScanPayload {
            scope_id: options.scope_id,
            profile_id: options.profile_id,
            group_profile_id: options.group_profile_id,
        };

        self.client
            .post(
                "CreateValidationScan",
                &["posture", "v1", "scans", "validation"],
                &query,
                &options.headers,
                &payload,
            )
            .await
    }

    /// Lists the compliance profiles visible to the account.
    pub async fn profiles(&self, options: &ListProfilesOptions) -> ApiResult<ProfilesList> {
        require("account_id", &options.account_id)?;

        let mut query: Vec<(&str, String)> = vec![("account_id", options.account_id.clone())];
        if let Some(name) = &options.name {
            query.push(("name", name.clone()));
        }

        self.client
            .get(
                "ListProfiles",
                &["posture", "v1", "profiles"],
                &query,
                &options.headers,
            )
            .await
    }

    /// Lists the scopes visible to the account.
    pub async fn scopes(&self, options: &ListScopesOptions) -> ApiResult<ScopesList> {
        require("account_id", &options.account_id)?;

        let mut query: Vec<(&str, String)> = vec![("account_id", options.account_id.clone())];
        if let Some(name) = &options.name {
            query.push(("name", name.clone()));
        }

        self.client
            .get(
                "ListScopes",
                &["posture", "v1", "scopes"],
                &query,
                &options.headers,
            )
            .await
    }
}

/// Body of a validation scan request.
#[derive(Debug, Clone, Serialize)]
struct ValidationScanPayload {
    #[serde(skip_serializing_if = "Option::is_none")]
    scope_id: Option<i64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    profile_id: Option<i64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    group_profile_id: Option<i64>,
}

/// Options for initiating a validation scan.
#[derive(Debug, Clone)]
pub struct CreateValidationScanOptions {
    /// The account the scan runs under.
    pub account_id: String,

    /// Id of the scope to scan.
    pub scope_id: Option<i64>,

    /// Id of the profile to validate against.
    pub profile_id: Option<i64>,

    /// Id of a group profile to validate against.
    pub group_profile_id: Option<i64>,

    /// Extra headers for this request.
    pub headers: HashMap<String, String>,
}

impl CreateValidationScanOptions {
    /// Creates scan options for an account.
    pub fn new(account_id: impl Into<String>) -> Self {
        Self {
            account_id: account_id.into(),
            scope_id: None,
            profile_id: None,
            group_profile_id: None,
            headers: HashMap::new(),
        }
    }
}

/// Options for listing profiles.
#[derive(Debug, Clone)]
pub struct ListProfilesOptions {
    /// The account whose profiles to list.
    pub account_id: String,

    /// Filter profiles by name.
    pub name: Option<String>,

    /// Extra headers for this request.
    pub headers: HashMap<String, String>,
}

impl ListProfilesOptions {
    /// Creates profile list options for an account.
    pub fn new(account_id: impl Into<String>) -> Self {
        Self {
            account_id: account_id.into(),
            name: None,
            headers: HashMap::new(),
        }
    }
}

/// Options for listing scopes.
#[derive(Debug, Clone)]
pub struct ListScopesOptions {
    /// The account whose scopes to list.
    pub account_id: String,

    /// Filter scopes by name.
    pub name: Option<String>,

    /// Extra headers for this request.
    pub headers: HashMap<String, String>,
}

impl ListScopesOptions {
    /// Creates scope list options for an account.
    pub fn new(account_id: impl Into<String>) -> Self {
        Self {
            account_id: account_id.into(),
            name: None,
            headers: HashMap::new(),
        }
    }
}
