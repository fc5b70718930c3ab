//
//  ibm-platform-services
//  lib.rs
//
//  Created by Ngonidzashe Mangudya on 2026/02/10.
//  Copyright (c) 2026 IAMNGONI. All rights reserved.
//

//! # IBM Cloud Platform Services SDK
//!
//! A client SDK for a set of IBM Cloud platform REST APIs: support case
//! management, the Open Service Broker contract, and security/compliance
//! posture management.
//!
//! ## Overview
//!
//! Every service follows the same shape: a service struct wrapping a shared
//! [`api::ServiceClient`], per-operation options structs carrying required and
//! optional parameters, and typed response models mirroring each endpoint's
//! JSON payload. Operations are stateless request/response round trips; the
//! SDK keeps no state between calls.
//!
//! ## Services
//!
//! | Service | Module | Default endpoint |
//! |---------|--------|------------------|
//! | Case Management | [`api::case_management`] | `support-center.cloud.ibm.com/case-management/v1` |
//! | Open Service Broker | [`api::open_service_broker`] | none (broker-specific) |
//! | Posture Management | [`api::posture_management`] | none (account-specific) |
//!
//! ## Example Usage
//!
//! ```rust,no_run
//! use ibm_platform_services::api::case_management::{CaseManagement, GetCasesOptions};
//! use ibm_platform_services::auth::AuthCredential;
//!
//! # async fn example() -> Result<(), ibm_platform_services::api::ApiError> {
//! let service = CaseManagement::new()?
//!     .with_auth(AuthCredential::bearer("your-token"));
//!
//! let mut options = GetCasesOptions::new();
//! options.limit = Some(10);
//! let cases = service.cases(&options).await?;
//! println!("{} open cases", cases.total_count.unwrap_or(0));
//! # Ok(())
//! # }
//! ```
//!
//! ## Authentication
//!
//! Requests are authenticated with a bearer token or HTTP basic credentials
//! via [`auth::AuthCredential`]. Obtaining tokens (for example through IAM)
//! is out of scope; supply a valid token to the service builder or through
//! environment configuration (see [`config`]).

/// API client implementations for the platform services.
///
/// Contains the shared HTTP transport ([`api::ServiceClient`]), common error
/// and header types, and one module per service with its operations and
/// models.
pub mod api;

/// Authentication credentials applied to outgoing requests.
///
/// Supports bearer-token and HTTP basic authentication. Credentials are
/// attached per request by the shared transport.
pub mod auth;

/// External configuration from environment variables.
///
/// Resolves a service URL and credentials from `<SERVICE>_URL`,
/// `<SERVICE>_AUTH_TYPE`, and related variables, mirroring the conventional
/// IBM Cloud SDK configuration contract.
pub mod config;

/// Re-export of the shared transport client and error type.
pub use api::{ApiError, ServiceClient};

/// SDK name constant.
///
/// Used in the `User-Agent` header sent with every request.
///
/// # Value
///
/// `"ibm-platform-services-rust"`
pub const SDK_NAME: &str = "ibm-platform-services-rust";

/// SDK version constant.
///
/// The current version of the SDK, automatically derived from Cargo.toml
/// at compile time using the `CARGO_PKG_VERSION` environment variable.
///
/// # Example
///
/// ```rust
/// use ibm_platform_services::VERSION;
///
/// println!("sdk version {}", VERSION);
/// ```
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
