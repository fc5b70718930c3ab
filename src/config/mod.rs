//
//  ibm-platform-services
//  config/mod.rs
//
//  Created by Ngonidzashe Mangudya on 2026/02/10.
//  Copyright (c) 2026 IAMNGONI. All rights reserved.
//

//! # External Configuration
//!
//! Resolves per-service settings from environment variables, following the
//! conventional IBM Cloud SDK configuration contract. Each service looks up
//! variables prefixed with its upper-cased service name:
//!
//! | Variable | Meaning |
//! |----------|---------|
//! | `<SERVICE>_URL` | Overrides the service endpoint URL |
//! | `<SERVICE>_AUTH_TYPE` | `bearertoken`, `basic`, or `none` |
//! | `<SERVICE>_BEARER_TOKEN` | Token for `bearertoken` auth |
//! | `<SERVICE>_USERNAME` / `<SERVICE>_PASSWORD` | Credentials for `basic` auth |
//!
//! For example, the case management service (service name `case_management`)
//! reads `CASE_MANAGEMENT_URL` and `CASE_MANAGEMENT_AUTH_TYPE`.
//!
//! ## Example
//!
//! ```rust,no_run
//! use ibm_platform_services::config::ServiceConfig;
//!
//! std::env::set_var("CASE_MANAGEMENT_AUTH_TYPE", "bearertoken");
//! std::env::set_var("CASE_MANAGEMENT_BEARER_TOKEN", "my-token");
//!
//! let config = ServiceConfig::from_env("case_management");
//! assert!(config.auth.is_some());
//! ```

use std::env;

use crate::auth::AuthCredential;

/// Settings resolved from the environment for one service.
///
/// Either field may be absent; service constructors fall back to their
/// compiled-in default URL and to unauthenticated requests.
#[derive(Debug, Clone, Default)]
pub struct ServiceConfig {
    /// Endpoint URL override, from `<SERVICE>_URL`.
    pub url: Option<String>,
    /// Credentials assembled from the auth-related variables.
    pub auth: Option<AuthCredential>,
}

impl ServiceConfig {
    /// Reads the configuration for `service_name` from the environment.
    ///
    /// The service name is upper-cased to form the variable prefix. An
    /// unrecognized or incomplete auth configuration resolves to no
    /// credential rather than an error; validation happens when the first
    /// authenticated request is rejected by the backend.
    pub fn from_env(service_name: &str) -> Self {
        let prefix = service_name.to_uppercase();
        let var = |suffix: &str| env::var(format!("{prefix}_{suffix}")).ok();

        let auth = match var("AUTH_TYPE").as_deref().map(str::to_lowercase).as_deref() {
            Some("bearertoken") | Some("bearer") => {
                var("BEARER_TOKEN").map(AuthCredential::bearer)
            }
            Some("basic") => match (var("USERNAME"), var("PASSWORD")) {
                (Some(username), Some(password)) => {
                    Some(AuthCredential::basic(username, password))
                }
                _ => None,
            },
            // Default to bearer when a token is present but no type is set.
            None => var("BEARER_TOKEN").map(AuthCredential::bearer),
            _ => None,
        };

        Self { url: var("URL"), auth }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // Env-var tests use distinct service names to avoid interference when
    // the test harness runs them in parallel.

    #[test]
    fn test_from_env_bearer() {
        std::env::set_var("SVC_ONE_AUTH_TYPE", "bearerToken");
        std::env::set_var("SVC_ONE_BEARER_TOKEN", "abc123");
        std::env::set_var("SVC_ONE_URL", "https://example.test/api");

        let config = ServiceConfig::from_env("svc_one");
        assert_eq!(config.url.as_deref(), Some("https://example.test/api"));
        match config.auth {
            Some(AuthCredential::BearerToken { token }) => assert_eq!(token, "abc123"),
            other => panic!("unexpected credential: {other:?}"),
        }
    }

    #[test]
    fn test_from_env_basic() {
        std::env::set_var("SVC_TWO_AUTH_TYPE", "basic");
        std::env::set_var("SVC_TWO_USERNAME", "u");
        std::env::set_var("SVC_TWO_PASSWORD", "p");

        let config = ServiceConfig::from_env("svc_two");
        assert!(matches!(config.auth, Some(AuthCredential::Basic { .. })));
    }

    #[test]
    fn test_from_env_unset() {
        let config = ServiceConfig::from_env("svc_three");
        assert!(config.url.is_none());
        assert!(config.auth.is_none());
    }
}
