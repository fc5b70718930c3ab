//
//  ibm-platform-services
//  auth/mod.rs
//
//  Created by Ngonidzashe Mangudya on 2026/02/10.
//  Copyright (c) 2026 IAMNGONI. All rights reserved.
//

//! # Authentication Module
//!
//! Credentials applied to outgoing requests by the shared transport.
//!
//! ## Supported Authentication Methods
//!
//! - **Bearer token**: the common case for IBM Cloud services. The caller is
//!   responsible for obtaining a valid token (for example from IAM) and for
//!   refreshing it when it expires.
//! - **Basic authentication**: username/password, used by brokers and
//!   services that are fronted by their own credential pairs.
//!
//! ## Example
//!
//! ```rust
//! use ibm_platform_services::auth::AuthCredential;
//!
//! let bearer = AuthCredential::bearer("eyJhbGciOiJIUzI1NiIs...");
//! let basic = AuthCredential::basic("broker-user", "broker-secret");
//! ```

use reqwest::RequestBuilder;

/// Represents the authentication credentials supported by the SDK.
///
/// Each variant contains the data for its authentication mechanism. A
/// credential is attached to every request made by the transport that owns
/// it; the SDK never stores or refreshes tokens on its own.
///
/// # Variants
///
/// - `BearerToken`: `Authorization: Bearer <token>` on every request.
/// - `Basic`: standard HTTP Basic authentication.
#[derive(Debug, Clone)]
pub enum AuthCredential {
    /// Bearer token authentication.
    ///
    /// The token is sent as-is; expiry and refresh are the caller's concern.
    BearerToken {
        /// The access token used for API authentication.
        token: String,
    },
    /// HTTP Basic authentication with username and password.
    Basic {
        /// The username for authentication.
        username: String,
        /// The password for authentication.
        password: String,
    },
}

impl AuthCredential {
    /// Creates a bearer-token credential.
    pub fn bearer(token: impl Into<String>) -> Self {
        Self::BearerToken {
            token: token.into(),
        }
    }

    /// Creates a basic-authentication credential.
    pub fn basic(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self::Basic {
            username: username.into(),
            password: password.into(),
        }
    }

    /// Applies the credential to an HTTP request.
    ///
    /// Adds the appropriate `Authorization` header to the given request
    /// builder and returns it.
    ///
    /// # Example
    ///
    /// ```rust,no_run
    /// use ibm_platform_services::auth::AuthCredential;
    /// use reqwest::Client;
    ///
    /// async fn make_authenticated_request(credential: &AuthCredential) {
    ///     let client = Client::new();
    ///     let request = client.get("https://support-center.cloud.ibm.com/case-management/v1/cases");
    ///     let response = credential.apply_to_request(request).send().await;
    /// }
    /// ```
    pub fn apply_to_request(&self, request: RequestBuilder) -> RequestBuilder {
        match self {
            Self::BearerToken { token } => request.bearer_auth(token),
            Self::Basic { username, password } => request.basic_auth(username, Some(password)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bearer_constructor() {
        let cred = AuthCredential::bearer("tok");
        match cred {
            AuthCredential::BearerToken { token } => assert_eq!(token, "tok"),
            _ => panic!("expected bearer credential"),
        }
    }

    #[test]
    fn test_basic_constructor() {
        let cred = AuthCredential::basic("user", "pass");
        match cred {
            AuthCredential::Basic { username, password } => {
                assert_eq!(username, "user");
                assert_eq!(password, "pass");
            }
            _ => panic!("expected basic credential"),
        }
    }
}
