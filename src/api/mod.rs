//
//  ibm-platform-services
//  api/mod.rs
//
//  Created by Ngonidzashe Mangudya on 2026/02/10.
//  Copyright (c) 2026 IAMNGONI. All rights reserved.
//

//! # API Layer
//!
//! The API layer holds everything that talks to the platform services: the
//! shared HTTP transport, common error/header plumbing, and one module per
//! service.
//!
//! ## Structure
//!
//! - [`client`]: the [`ServiceClient`] transport wrapping `reqwest`
//! - [`common`]: the [`ApiError`] type, error-body parsing, standard headers
//! - [`case_management`]: support case operations
//! - [`open_service_broker`]: Open Service Broker contract operations
//! - [`posture_management`]: posture scan, profile, and scope operations
//!
//! Each service module exposes a service struct plus its options structs and
//! response models. All operations are `async` and return
//! [`ApiResult`](common::ApiResult).

pub mod case_management;
pub mod client;
pub mod common;
pub mod open_service_broker;
pub mod posture_management;

pub use client::ServiceClient;
pub use common::{ApiError, ApiResult};
