//
//  ibm-platform-services
//  api/case_management/models.rs
//
//  Created by Ngonidzashe Mangudya on 2026/02/10.
//  Copyright (c) 2026 IAMNGONI. All rights reserved.
//

//! Case management wire types.
//!
//! This module provides the request payloads and response models for the
//! support case endpoints: cases, comments, watchlists, resources, and
//! attachments.
//!
//! # Overview
//!
//! Cases move through a lifecycle driven by the support organization and the
//! customer. The status transitions a client can request are expressed by
//! [`StatusPayload`]; everything else on a case is updated through the
//! dedicated comment, watchlist, resource, and attachment endpoints.
//!
//! # Case Statuses
//!
//! - **New** - Just opened, not yet picked up by support
//! - **In Progress** - Being worked by support
//! - **Waiting on Client** - Support is waiting for a customer response
//! - **Resolution Provided** - Support proposed a resolution
//! - **Resolved** - The resolution was accepted
//! - **Closed** - Terminal state
//!
//! # Example
//!
//! ```rust
//! use ibm_platform_services::api::case_management::models::StatusPayload;
//!
//! // Accept the resolution that support provided.
//! let payload = StatusPayload::Accept { comment: None };
//! let body = serde_json::to_string(&payload).unwrap();
//! assert_eq!(body, r#"{"action":"accept"}"#);
//! ```

use serde::{Deserialize, Serialize};

/// Case type values accepted by case creation.
pub mod case_type {
    pub const TECHNICAL: &str = "technical";
    pub const ACCOUNT_AND_ACCESS: &str = "account_and_access";
    pub const BILLING_AND_INVOICE: &str = "billing_and_invoice";
    pub const SALES: &str = "sales";
}

/// Contact type values seen on cases.
pub mod contact_type {
    /// The case was opened through the cloud support center.
    pub const CLOUD_SUPPORT_CENTER: &str = "Cloud Support Center";
    /// The case was opened through the infrastructure console.
    pub const IMS_CONSOLE: &str = "IMS Console";
}

/// Support tier values seen on cases.
pub mod support_tier {
    pub const FREE: &str = "Free";
    pub const BASIC: &str = "Basic";
    pub const STANDARD: &str = "Standard";
    pub const PREMIUM: &str = "Premium";
}

/// Status values accepted by the case list filter.
///
/// The backend also recognizes these in the `status` field of [`Case`].
pub mod case_status {
    /// Case has been opened and not yet picked up.
    pub const NEW: &str = "new";
    /// Case is being worked by support.
    pub const IN_PROGRESS: &str = "in_progress";
    /// Support is waiting on a customer response.
    pub const WAITING_ON_CLIENT: &str = "waiting_on_client";
    /// Support has proposed a resolution.
    pub const RESOLUTION_PROVIDED: &str = "resolution_provided";
    /// The resolution was accepted.
    pub const RESOLVED: &str = "resolved";
    /// Terminal state.
    pub const CLOSED: &str = "closed";
}

/// A support case.
///
/// All fields are optional on the wire; the `fields` request parameter can
/// project a case down to an arbitrary subset, so nothing here can be relied
/// on to be present.
///
/// # Fields
///
/// * `number` - Unique case identifier, e.g. `CS0001234`
/// * `short_description` - One-line subject
/// * `description` - Full problem description
/// * `created_at` / `updated_at` - ISO 8601 timestamps
/// * `created_by` / `updated_by` - The users behind those events
/// * `contact_type` - Where the case entered the system
/// * `status` - Current lifecycle status (see [`case_status`])
/// * `severity` - Numeric severity, 1 (most severe) to 4
/// * `support_tier` - `Free`, `Basic`, `Standard`, or `Premium`
/// * `resolution` / `close_notes` - Set when the case is resolved or closed
/// * `eu` - EU data-handling details, when EU support applies
/// * `watchlist` - Users copied on case updates
/// * `attachments` - Files attached to the case
/// * `offering` - The offering the case was raised against
/// * `resources` - Cloud resources attached to the case
/// * `comments` - Discussion thread
///
/// # Example
///
/// ```rust,no_run
/// use ibm_platform_services::api::case_management::models::Case;
///
/// fn display_case(case: &Case) {
///     println!(
///         "{}: {} [{}]",
///         case.number.as_deref().unwrap_or("?"),
///         case.short_description.as_deref().unwrap_or(""),
///         case.status.as_deref().unwrap_or("unknown"),
///     );
/// }
/// ```
#[derive(Debug, Clone, Deserialize)]
pub struct Case {
    /// Unique case identifier.
    #[serde(default)]
    pub number: Option<String>,

    /// One-line subject of the case.
    #[serde(default)]
    pub short_description: Option<String>,

    /// Full problem description.
    #[serde(default)]
    pub description: Option<String>,

    /// ISO 8601 timestamp of case creation.
    #[serde(default)]
    pub created_at: Option<String>,

    /// The user who opened the case.
    #[serde(default)]
    pub created_by: Option<User>,

    /// ISO 8601 timestamp of the last update.
    #[serde(default)]
    pub updated_at: Option<String>,

    /// The user behind the last update.
    #[serde(default)]
    pub updated_by: Option<User>,

    /// Where the case entered the system.
    /// Possible values: `Cloud Support Center`, `IMS Console`.
    #[serde(default)]
    pub contact_type: Option<String>,

    /// The customer contact for the case.
    #[serde(default)]
    pub contact: Option<User>,

    /// Current lifecycle status. See [`case_status`].
    #[serde(default)]
    pub status: Option<String>,

    /// Numeric severity, 1 (most severe) to 4 (least severe).
    #[serde(default)]
    pub severity: Option<f64>,

    /// The account's support tier.
    /// Possible values: `Free`, `Basic`, `Standard`, `Premium`.
    #[serde(default)]
    pub support_tier: Option<String>,

    /// The resolution text, once one has been provided.
    #[serde(default)]
    pub resolution: Option<String>,

    /// Notes recorded when the case was closed.
    #[serde(default)]
    pub close_notes: Option<String>,

    /// EU data-handling details, present when EU support applies.
    #[serde(default)]
    pub eu: Option<CaseEu>,

    /// Users copied on case updates.
    #[serde(default)]
    pub watchlist: Vec<User>,

    /// Files attached to the case.
    #[serde(default)]
    pub attachments: Vec<Attachment>,

    /// The offering the case was raised against.
    #[serde(default)]
    pub offering: Option<Offering>,

    /// Cloud resources attached to the case.
    #[serde(default)]
    pub resources: Vec<Resource>,

    /// Discussion thread on the case.
    #[serde(default)]
    pub comments: Vec<Comment>,
}

/// EU data-handling details on a case.
#[derive(Debug, Clone, Deserialize)]
pub struct CaseEu {
    /// Whether the case is handled under EU support.
    #[serde(default)]
    pub support: Option<bool>,

    /// The data center the case is pinned to.
    #[serde(default)]
    pub data_center: Option<String>,
}

/// A page of cases with pagination links.
///
/// # Fields
///
/// * `total_count` - Total matches across all pages
/// * `first` / `next` / `previous` / `last` - Pagination links
/// * `cases` - The cases on this page
#[derive(Debug, Clone, Deserialize)]
pub struct CaseList {
    /// Total number of cases matching the query, across all pages.
    #[serde(default)]
    pub total_count: Option<i64>,

    /// Link to the first page of results.
    #[serde(default)]
    pub first: Option<PaginationLink>,

    /// Link to the next page of results, absent on the last page.
    #[serde(default)]
    pub next: Option<PaginationLink>,

    /// Link to the previous page of results, absent on the first page.
    #[serde(default)]
    pub previous: Option<PaginationLink>,

    /// Link to the last page of results.
    #[serde(default)]
    pub last: Option<PaginationLink>,

    /// The cases on this page.
    #[serde(default)]
    pub cases: Vec<Case>,
}

/// A pagination link carrying the URL of another page.
#[derive(Debug, Clone, Deserialize)]
pub struct PaginationLink {
    /// URL of the linked page, including the original query parameters.
    #[serde(default)]
    pub href: Option<String>,
}

/// A user reference.
///
/// Used both in responses (case creator, watchlist entries) and in request
/// payloads (watchlist additions, case contact).
///
/// # Fields
///
/// * `name` - Display name; ignored on requests
/// * `realm` - The identity realm: `IBMid`, `BSS`, or `SL`
/// * `user_id` - The user's id within that realm
///
/// # Example
///
/// ```rust
/// use ibm_platform_services::api::case_management::models::User;
///
/// let user = User::new("IBMid", "user@example.com");
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    /// Display name. Populated in responses, ignored on requests.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// The identity realm.
    /// Possible values: `IBMid`, `BSS`, `SL`.
    pub realm: String,

    /// The user's id within the realm.
    pub user_id: String,
}

impl User {
    /// Creates a user reference from a realm and user id.
    pub fn new(realm: impl Into<String>, user_id: impl Into<String>) -> Self {
        Self {
            name: None,
            realm: realm.into(),
            user_id: user_id.into(),
        }
    }
}

/// A comment on a case.
#[derive(Debug, Clone, Deserialize)]
pub struct Comment {
    /// The comment text.
    #[serde(default)]
    pub value: Option<String>,

    /// ISO 8601 timestamp the comment was added.
    #[serde(default)]
    pub added_at: Option<String>,

    /// The user who added the comment.
    #[serde(default)]
    pub added_by: Option<User>,
}

/// A file attached to a case.
#[derive(Debug, Clone, Deserialize)]
pub struct Attachment {
    /// Unique attachment id, used for download and delete.
    #[serde(default)]
    pub id: Option<String>,

    /// The original file name.
    #[serde(default)]
    pub filename: Option<String>,

    /// File size in bytes.
    #[serde(default)]
    pub size_in_bytes: Option<i64>,

    /// ISO 8601 timestamp the file was uploaded.
    #[serde(default)]
    pub created_at: Option<String>,

    /// Download URL for the attachment.
    #[serde(default)]
    pub url: Option<String>,
}

/// The attachments remaining on a case.
///
/// Returned by the attachment delete endpoint.
#[derive(Debug, Clone, Deserialize)]
pub struct AttachmentList {
    /// The attachments currently on the case.
    #[serde(default)]
    pub attachments: Vec<Attachment>,
}

/// The offering a case is raised against.
///
/// Appears in case responses and in the case creation payload. `group` and
/// `key` locate the offering in the support catalog.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Offering {
    /// Offering display name.
    pub name: String,

    /// Catalog coordinates of the offering.
    #[serde(rename = "type")]
    pub offering_type: OfferingType,
}

/// Catalog coordinates of an offering.
///
/// # Fields
///
/// * `group` - `crn_service_name` or `category`
/// * `key` - CRN service name or category key, depending on `group`
/// * `kind` - Catalog kind, when known
/// * `id` - Catalog id, when known
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OfferingType {
    /// How `key` should be interpreted.
    /// Possible values: `crn_service_name`, `category`.
    pub group: String,

    /// CRN service name or category key, depending on `group`.
    pub key: String,

    /// Catalog kind, when known.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,

    /// Catalog id, when known.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
}

/// A cloud resource attached to a case.
#[derive(Debug, Clone, Deserialize)]
pub struct Resource {
    /// Cloud Resource Name of the resource.
    #[serde(default)]
    pub crn: Option<String>,

    /// Display name of the resource.
    #[serde(default)]
    pub name: Option<String>,

    /// Resource type.
    #[serde(default, rename = "type")]
    pub resource_type: Option<String>,

    /// Console URL of the resource.
    #[serde(default)]
    pub url: Option<String>,

    /// Free-form note recorded when the resource was attached.
    #[serde(default)]
    pub note: Option<String>,
}

/// Payload for attaching a resource to a case.
#[derive(Debug, Clone, Default, Serialize)]
pub struct ResourcePayload {
    /// Cloud Resource Name of the resource to attach.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub crn: Option<String>,

    /// Resource type, for resources not identified by CRN.
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub resource_type: Option<String>,

    /// Legacy infrastructure resource id.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<f64>,

    /// Free-form note to record alongside the resource.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
}

/// EU data-handling settings for case creation.
#[derive(Debug, Clone, Default, Serialize)]
pub struct CasePayloadEu {
    /// Whether the case should be handled under EU support.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub supported: Option<bool>,

    /// Data center id to pin the case to.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data_center: Option<i64>,
}

/// A status transition request for a case.
///
/// The backend discriminates transitions by the `action` field of the
/// payload; each action takes a different set of parameters, so the payload
/// is a sum type and invalid combinations cannot be expressed.
///
/// # Actions
///
/// - **Resolve** - close out the case with a resolution code
/// - **Unresolve** - reopen a resolved case; a comment is required
/// - **Accept** - accept the resolution support provided
///
/// # Resolution Codes
///
/// The backend accepts codes 1 through 8. The common ones:
///
/// | Code | Meaning |
/// |------|---------|
/// | 1 | Fixed by support |
/// | 2 | Fixed by the customer |
/// | 3 | No longer an issue |
/// | 4 | Other |
///
/// # Example
///
/// ```rust
/// use ibm_platform_services::api::case_management::models::StatusPayload;
///
/// let resolve = StatusPayload::Resolve {
///     comment: Some("Root cause fixed in the latest deploy".to_string()),
///     resolution_code: 1,
/// };
/// let unresolve = StatusPayload::Unresolve {
///     comment: "Issue recurred overnight".to_string(),
/// };
/// ```
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "action", rename_all = "lowercase")]
pub enum StatusPayload {
    /// Resolve the case.
    Resolve {
        /// Optional note explaining the resolution.
        #[serde(skip_serializing_if = "Option::is_none")]
        comment: Option<String>,

        /// Why the case is being resolved, 1 through 8. See the table above.
        resolution_code: i64,
    },

    /// Reopen a resolved case.
    Unresolve {
        /// Why the case is being reopened. Required by the backend.
        comment: String,
    },

    /// Accept the resolution provided by support.
    Accept {
        /// Optional note to record with the acceptance.
        #[serde(skip_serializing_if = "Option::is_none")]
        comment: Option<String>,
    },
}

/// Watchlist payload and response.
///
/// Sent as the body of watchlist add/remove requests; the remove endpoint
/// also returns the remaining watchlist in this shape.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Watchlist {
    /// The users on (or to add/remove from) the watchlist.
    #[serde(default)]
    pub watchlist: Vec<User>,
}

/// Outcome of a watchlist addition.
///
/// Users already on the watchlist, or not visible to the account, land in
/// `failed`.
#[derive(Debug, Clone, Deserialize)]
pub struct WatchlistAddResponse {
    /// Users added to the watchlist.
    #[serde(default)]
    pub added: Vec<User>,

    /// Users that could not be added.
    #[serde(default)]
    pub failed: Vec<User>,
}

/// A file to upload as a case attachment.
///
/// # Example
///
/// ```rust
/// use ibm_platform_services::api::case_management::models::AttachmentFile;
///
/// let file = AttachmentFile {
///     filename: "diagnostics.log".to_string(),
///     content_type: Some("text/plain".to_string()),
///     data: b"log contents".to_vec(),
/// };
/// ```
#[derive(Debug, Clone)]
pub struct AttachmentFile {
    /// File name to record on the attachment.
    pub filename: String,

    /// MIME type of the content. Defaults to `application/octet-stream`
    /// when absent.
    pub content_type: Option<String>,

    /// The file contents.
    pub data: Vec<u8>,
}

/// Body of a comment addition.
#[derive(Debug, Clone, Serialize)]
pub struct CommentPayload {
    /// The comment text.
    pub comment: String,
}

/// Body of a case creation request.
///
/// Assembled by the service from
/// [`CreateCaseOptions`](super::CreateCaseOptions).
#[derive(Debug, Clone, Serialize)]
pub struct CreateCasePayload {
    /// Case type. See [`case_type`].
    #[serde(rename = "type")]
    pub case_type: String,

    /// One-line subject for the case.
    pub subject: String,

    /// Full problem description.
    pub description: String,

    /// Severity, 1 (most severe) to 4 (least severe).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub severity: Option<i64>,

    /// EU data-handling settings.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub eu: Option<CasePayloadEu>,

    /// The offering the case is raised against.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub offering: Option<Offering>,

    /// Resources to attach at creation time.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub resources: Vec<ResourcePayload>,

    /// Users to place on the watchlist at creation time.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub watchlist: Vec<User>,

    /// Invoice number, for billing disputes.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub invoice_number: Option<String>,

    /// Whether an SLA credit is being requested.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sla_credit_request: Option<bool>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_payload_resolve() {
        let payload = StatusPayload::Resolve {
            comment: Some("done".to_string()),
            resolution_code: 1,
        };
        let json = serde_json::to_value(&payload).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "action": "resolve",
                "comment": "done",
                "resolution_code": 1
            })
        );
    }

    #[test]
    fn test_status_payload_unresolve() {
        let payload = StatusPayload::Unresolve {
            comment: "still broken".to_string(),
        };
        let json = serde_json::to_value(&payload).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"action": "unresolve", "comment": "still broken"})
        );
    }

    #[test]
    fn test_status_payload_accept_omits_absent_comment() {
        let payload = StatusPayload::Accept { comment: None };
        assert_eq!(
            serde_json::to_string(&payload).unwrap(),
            r#"{"action":"accept"}"#
        );
    }

    #[test]
    fn test_case_deserializes_sparse_projection() {
        // The fields parameter can strip a case down to almost nothing.
        let case: Case = serde_json::from_str(r#"{"number": "CS0001"}"#).unwrap();
        assert_eq!(case.number.as_deref(), Some("CS0001"));
        assert!(case.status.is_none());
        assert!(case.watchlist.is_empty());
    }

    #[test]
    fn test_case_deserializes_full() {
        let body = r#"{
            "number": "CS0001",
            "short_description": "VM unreachable",
            "status": "in_progress",
            "severity": 2,
            "created_by": {"realm": "IBMid", "user_id": "user@example.com", "name": "A User"},
            "eu": {"support": true, "data_center": "ams03"},
            "watchlist": [{"realm": "IBMid", "user_id": "watcher@example.com"}],
            "attachments": [{"id": "att-1", "filename": "log.txt", "size_in_bytes": 42}],
            "comments": [{"value": "looking into it", "added_at": "2025-01-01T00:00:00Z"}]
        }"#;
        let case: Case = serde_json::from_str(body).unwrap();
        assert_eq!(case.severity, Some(2.0));
        assert_eq!(case.watchlist.len(), 1);
        assert_eq!(case.attachments[0].size_in_bytes, Some(42));
        assert_eq!(case.eu.as_ref().unwrap().data_center.as_deref(), Some("ams03"));
    }

    #[test]
    fn test_offering_round_trips_type_field() {
        let offering = Offering {
            name: "Cloud Object Storage".to_string(),
            offering_type: OfferingType {
                group: "crn_service_name".to_string(),
                key: "cloud-object-storage".to_string(),
                kind: None,
                id: None,
            },
        };
        let json = serde_json::to_value(&offering).unwrap();
        assert_eq!(json["type"]["group"], "crn_service_name");
        assert!(json["type"].get("kind").is_none());
    }

    #[test]
    fn test_create_case_payload_skips_empty_collections() {
        let payload = CreateCasePayload {
            case_type: "technical".to_string(),
            subject: "subject".to_string(),
            description: "description".to_string(),
            severity: None,
            eu: None,
            offering: None,
            resources: Vec::new(),
            watchlist: Vec::new(),
            invoice_number: None,
            sla_credit_request: None,
        };
        let json = serde_json::to_value(&payload).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "type": "technical",
                "subject": "subject",
                "description": "description"
            })
        );
    }
}
