//
//  ibm-platform-services
//  api/case_management/mod.rs
//
//  Created by Ngonidzashe Mangudya on 2026/02/10.
//  Copyright (c) 2026 IAMNGONI. All rights reserved.
//

//! # Case Management Service
//!
//! Client for the support case management API. Cases are support tickets:
//! they carry a description, a severity, a watchlist of interested users,
//! attached cloud resources, file attachments, and a comment thread.
//!
//! ## Operations
//!
//! | Method | Endpoint | Purpose |
//! |--------|----------|---------|
//! | [`cases`](CaseManagement::cases) | `GET /cases` | List cases with filtering and pagination |
//! | [`create_case`](CaseManagement::create_case) | `POST /cases` | Open a new case |
//! | [`case`](CaseManagement::case) | `GET /cases/{number}` | Fetch one case |
//! | [`update_case_status`](CaseManagement::update_case_status) | `PUT /cases/{number}/status` | Resolve, unresolve, or accept |
//! | [`add_comment`](CaseManagement::add_comment) | `PUT /cases/{number}/comments` | Add a comment |
//! | [`add_watchlist`](CaseManagement::add_watchlist) | `PUT /cases/{number}/watchlist` | Add watchers |
//! | [`remove_watchlist`](CaseManagement::remove_watchlist) | `DELETE /cases/{number}/watchlist` | Remove watchers |
//! | [`add_resource`](CaseManagement::add_resource) | `PUT /cases/{number}/resources` | Attach a cloud resource |
//! | [`upload_file`](CaseManagement::upload_file) | `PUT /cases/{number}/attachments` | Upload attachments |
//! | [`download_file`](CaseManagement::download_file) | `GET /cases/{number}/attachments/{id}` | Download an attachment |
//! | [`delete_file`](CaseManagement::delete_file) | `DELETE /cases/{number}/attachments/{id}` | Delete an attachment |
//!
//! ## Example
//!
//! ```rust,no_run
//! use ibm_platform_services::api::case_management::{CaseManagement, CreateCaseOptions};
//! use ibm_platform_services::auth::AuthCredential;
//!
//! # async fn example() -> Result<(), ibm_platform_services::api::ApiError> {
//! let service = CaseManagement::new()?
//!     .with_auth(AuthCredential::bearer("your-token"));
//!
//! let mut options = CreateCaseOptions::new(
//!     "technical",
//!     "VM unreachable",
//!     "Instance abc-123 stopped responding to SSH at 02:00 UTC.",
//! );
//! options.severity = Some(2);
//! let case = service.create_case(&options).await?;
//! println!("opened {}", case.number.unwrap_or_default());
//! # Ok(())
//! # }
//! ```

pub mod models;

use std::collections::HashMap;

use reqwest::multipart;

use crate::api::client::ServiceClient;
use crate::api::common::{require, ApiResult};
use crate::config::ServiceConfig;

use models::{
    Attachment, AttachmentFile, AttachmentList, Case, CaseList, CasePayloadEu, Comment,
    CommentPayload, CreateCasePayload, Offering, Resource, ResourcePayload, StatusPayload, User,
    Watchlist, WatchlistAddResponse,
};

/// Default endpoint of the case management service.
pub const DEFAULT_SERVICE_URL: &str =
    "https://support-center.cloud.ibm.com/case-management/v1";

/// Service name used for analytics headers and environment configuration.
const SERVICE_NAME: &str = "case_management";

/// Client for the case management service.
pub struct CaseManagement {
    client: ServiceClient,
}

impl CaseManagement {
    /// Creates a client targeting the default endpoint.
    pub fn new() -> ApiResult<Self> {
        Ok(Self {
            client: ServiceClient::new(SERVICE_NAME, DEFAULT_SERVICE_URL)?,
        })
    }

    /// Creates a client configured from `CASE_MANAGEMENT_*` environment
    /// variables. Falls back to the default endpoint and no credentials for
    /// anything unset. See [`ServiceConfig`].
    pub fn from_env() -> ApiResult<Self> {
        let config = ServiceConfig::from_env(SERVICE_NAME);
        let mut client = ServiceClient::new(
            SERVICE_NAME,
            config.url.as_deref().unwrap_or(DEFAULT_SERVICE_URL),
        )?;
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

    /// Lists cases in the account, newest first.
    ///
    /// Supports offset pagination, full-text search, sorting, status
    /// filtering, and field projection.
    pub async fn cases(&self, options: &GetCasesOptions) -> ApiResult<CaseList> {
        let mut query: Vec<(&str, String)> = Vec::new();
        if let Some(offset) = options.offset {
            query.push(("offset", offset.to_string()));
        }
        if let Some(limit) = options.limit {
            query.push(("limit", limit.to_string()));
        }
        if let Some(search) = &options.search {
            query.push(("search", search.clone()));
        }
        if let Some(sort) = &options.sort {
            query.push(("sort", sort.clone()));
        }
        if !options.status.is_empty() {
            query.push(("status", options.status.join(",")));
        }
        if !options.fields.is_empty() {
            query.push(("fields", options.fields.join(",")));
        }

        self.client
            .get("GetCases", &["cases"], &query, &options.headers)
            .await
    }

    /// Opens a new case.
    pub async fn create_case(&self, options: &CreateCaseOptions) -> ApiResult<Case> {
        require("type", &options.case_type)?;
        require("subject", &options.subject)?;
        require("description", &options.description)?;

        let payload = CreateCasePayload {
            case_type: options.case_type.clone(),
            subject: options.subject.clone(),
            description: options.description.clone(),
            severity: options.severity,
            eu: options.eu.clone(),
            offering: options.offering.clone(),
            resources: options.resources.clone(),
            watchlist: options.watchlist.clone(),
            invoice_number: options.invoice_number.clone(),
            sla_credit_request: options.sla_credit_request,
        };

        self.client
            .post("CreateCase", &["cases"], &[], &options.headers, &payload)
            .await
    }

    /// Fetches a single case by number.
    pub async fn case(&self, options: &GetCaseOptions) -> ApiResult<Case> {
        require("case_number", &options.case_number)?;

        let mut query: Vec<(&str, String)> = Vec::new();
        if !options.fields.is_empty() {
            query.push(("fields", options.fields.join(",")));
        }

        self.client
            .get(
                "GetCase",
                &["cases", &options.case_number],
                &query,
                &options.headers,
            )
            .await
    }

    /// Requests a status transition on a case.
    ///
    /// The transition and its parameters are carried by
    /// [`StatusPayload`]; returns the updated case.
    pub async fn update_case_status(
        &self,
        options: &UpdateCaseStatusOptions,
    ) -> ApiResult<Case> {
        require("case_number", &options.case_number)?;

        self.client
            .put(
                "UpdateCaseStatus",
                &["cases", &options.case_number, "status"],
                &[],
                &options.headers,
                &options.status_payload,
            )
            .await
    }

    /// Adds a comment to a case.
    pub async fn add_comment(&self, options: &AddCommentOptions) -> ApiResult<Comment> {
        require("case_number", &options.case_number)?;
        require("comment", &options.comment)?;

        let payload = CommentPayload {
            comment: options.comment.clone(),
        };

        self.client
            .put(
                "AddComment",
                &["cases", &options.case_number, "comments"],
                &[],
                &options.headers,
                &payload,
            )
            .await
    }

    /// Adds users to a case watchlist.
    ///
    /// The response separates users that were added from users that could
    /// not be (already watching, or not visible to the account).
    pub async fn add_watchlist(
        &self,
        options: &AddWatchlistOptions,
    ) -> ApiResult<WatchlistAddResponse> {
        require("case_number", &options.case_number)?;

        let payload = Watchlist {
            watchlist: options.watchlist.clone(),
        };

        self.client
            .put(
                "AddWatchlist",
                &["cases", &options.case_number, "watchlist"],
                &[],
                &options.headers,
                &payload,
            )
            .await
    }

    /// Removes users from a case watchlist.
    ///
    /// Returns the watchlist as it stands after the removal.
    pub async fn remove_watchlist(
        &self,
        options: &RemoveWatchlistOptions,
    ) -> ApiResult<Watchlist> {
        require("case_number", &options.case_number)?;

        let payload = Watchlist {
            watchlist: options.watchlist.clone(),
        };

        self.client
            .delete_with_body(
                "RemoveWatchlist",
                &["cases", &options.case_number, "watchlist"],
                &options.headers,
                &payload,
            )
            .await
    }

    /// Attaches a cloud resource to a case.
    pub async fn add_resource(&self, options: &AddResourceOptions) -> ApiResult<Resource> {
        require("case_number", &options.case_number)?;

        let payload = ResourcePayload {
            crn: options.crn.clone(),
            resource_type: options.resource_type.clone(),
            id: options.id,
            note: options.note.clone(),
        };

        self.client
            .put(
                "AddResource",
                &["cases", &options.case_number, "resources"],
                &[],
                &options.headers,
                &payload,
            )
            .await
    }

    /// Uploads files as attachments on a case.
    ///
    /// Each file is sent as a `file` part of a multipart form.
    pub async fn upload_file(&self, options: &UploadFileOptions) -> ApiResult<Attachment> {
        require("case_number", &options.case_number)?;
        if options.files.is_empty() {
            return Err(crate::api::common::ApiError::Validation(
                "file".to_string(),
            ));
        }

        let mut form = multipart::Form::new();
        for file in &options.files {
            let mut part =
                multipart::Part::bytes(file.data.clone()).file_name(file.filename.clone());
            if let Some(content_type) = &file.content_type {
                part = part.mime_str(content_type)?;
            }
            form = form.part("file", part);
        }

        self.client
            .put_multipart(
                "UploadFile",
                &["cases", &options.case_number, "attachments"],
                &options.headers,
                form,
            )
            .await
    }

    /// Downloads an attachment from a case, returning the raw bytes.
    pub async fn download_file(&self, options: &DownloadFileOptions) -> ApiResult<Vec<u8>> {
        require("case_number", &options.case_number)?;
        require("file_id", &options.file_id)?;

        self.client
            .get_bytes(
                "DownloadFile",
                &[
                    "cases",
                    &options.case_number,
                    "attachments",
                    &options.file_id,
                ],
                &options.headers,
            )
            .await
    }

    /// Deletes an attachment from a case.
    ///
    /// Returns the attachments remaining on the case.
    pub async fn delete_file(&self, options: &DeleteFileOptions) -> ApiResult<AttachmentList> {
        require("case_number", &options.case_number)?;
        require("file_id", &options.file_id)?;

        self.client
            .delete(
                "DeleteFile",
                &[
                    "cases",
                    &options.case_number,
                    "attachments",
                    &options.file_id,
                ],
                &[],
                &options.headers,
            )
            .await
    }
}

/// Options for listing cases.
///
/// # Example
///
/// ```rust
/// use ibm_platform_services::api::case_management::GetCasesOptions;
/// use ibm_platform_services::api::case_management::models::case_status;
///
/// let mut options = GetCasesOptions::new();
/// options.limit = Some(25);
/// options.status = vec![case_status::NEW.to_string()];
/// ```
#[derive(Debug, Clone, Default)]
pub struct GetCasesOptions {
    /// Number of cases to skip before the first returned result.
    pub offset: Option<i64>,

    /// Maximum number of cases to return.
    pub limit: Option<i64>,

    /// Full-text search across case subjects and descriptions.
    pub search: Option<String>,

    /// Sort expression, e.g. `number,updated_at`.
    pub sort: Option<String>,

    /// Restrict results to these statuses. See
    /// [`case_status`](models::case_status).
    pub status: Vec<String>,

    /// Project each case down to these fields.
    pub fields: Vec<String>,

    /// Extra headers for this request.
    pub headers: HashMap<String, String>,
}

impl GetCasesOptions {
    /// Creates empty list options.
    pub fn new() -> Self {
        Self::default()
    }
}

/// Options for opening a case.
#[derive(Debug, Clone)]
pub struct CreateCaseOptions {
    /// Case type. See [`case_type`](models::case_type).
    pub case_type: String,

    /// One-line subject for the case.
    pub subject: String,

    /// Full problem description.
    pub description: String,

    /// Severity, 1 (most severe) to 4 (least severe).
    pub severity: Option<i64>,

    /// EU data-handling settings.
    pub eu: Option<CasePayloadEu>,

    /// The offering the case is raised against.
    pub offering: Option<Offering>,

    /// Resources to attach at creation time.
    pub resources: Vec<ResourcePayload>,

    /// Users to place on the watchlist at creation time.
    pub watchlist: Vec<User>,

    /// Invoice number, for billing disputes.
    pub invoice_number: Option<String>,

    /// Whether an SLA credit is being requested.
    pub sla_credit_request: Option<bool>,

    /// Extra headers for this request.
    pub headers: HashMap<String, String>,
}

impl CreateCaseOptions {
    /// Creates case options from the required fields.
    pub fn new(
        case_type: impl Into<String>,
        subject: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            case_type: case_type.into(),
            subject: subject.into(),
            description: description.into(),
            severity: None,
            eu: None,
            offering: None,
            resources: Vec::new(),
            watchlist: Vec::new(),
            invoice_number: None,
            sla_credit_request: None,
            headers: HashMap::new(),
        }
    }
}

/// Options for fetching a case.
#[derive(Debug, Clone)]
pub struct GetCaseOptions {
    /// The case number.
    pub case_number: String,

    /// Project the case down to these fields.
    pub fields: Vec<String>,

    /// Extra headers for this request.
    pub headers: HashMap<String, String>,
}

impl GetCaseOptions {
    /// Creates fetch options for one case.
    pub fn new(case_number: impl Into<String>) -> Self {
        Self {
            case_number: case_number.into(),
            fields: Vec::new(),
            headers: HashMap::new(),
        }
    }
}

/// Options for a case status transition.
#[derive(Debug, Clone)]
pub struct UpdateCaseStatusOptions {
    /// The case number.
    pub case_number: String,

    /// The transition to perform.
    pub status_payload: StatusPayload,

    /// Extra headers for this request.
    pub headers: HashMap<String, String>,
}

impl UpdateCaseStatusOptions {
    /// Creates status transition options.
    pub fn new(case_number: impl Into<String>, status_payload: StatusPayload) -> Self {
        Self {
            case_number: case_number.into(),
            status_payload,
            headers: HashMap::new(),
        }
    }
}

/// Options for adding a comment.
#[derive(Debug, Clone)]
pub struct AddCommentOptions {
    /// The case number.
    pub case_number: String,

    /// The comment text.
    pub comment: String,

    /// Extra headers for this request.
    pub headers: HashMap<String, String>,
}

impl AddCommentOptions {
    /// Creates comment options.
    pub fn new(case_number: impl Into<String>, comment: impl Into<String>) -> Self {
        Self {
            case_number: case_number.into(),
            comment: comment.into(),
            headers: HashMap::new(),
        }
    }
}

/// Options for adding users to a watchlist.
#[derive(Debug, Clone)]
pub struct AddWatchlistOptions {
    /// The case number.
    pub case_number: String,

    /// The users to add.
    pub watchlist: Vec<User>,

    /// Extra headers for this request.
    pub headers: HashMap<String, String>,
}

impl AddWatchlistOptions {
    /// Creates watchlist addition options.
    pub fn new(case_number: impl Into<String>) -> Self {
        Self {
            case_number: case_number.into(),
            watchlist: Vec::new(),
            headers: HashMap::new(),
        }
    }
}

/// Options for removing users from a watchlist.
#[derive(Debug, Clone)]
pub struct RemoveWatchlistOptions {
    /// The case number.
    pub case_number: String,

    /// The users to remove.
    pub watchlist: Vec<User>,

    /// Extra headers for this request.
    pub headers: HashMap<String, String>,
}

impl RemoveWatchlistOptions {
    /// Creates watchlist removal options.
    pub fn new(case_number: impl Into<String>) -> Self {
        Self {
            case_number: case_number.into(),
            watchlist: Vec::new(),
            headers: HashMap::new(),
        }
    }
}

/// Options for attaching a cloud resource.
#[derive(Debug, Clone)]
pub struct AddResourceOptions {
    /// The case number.
    pub case_number: String,

    /// Cloud Resource Name of the resource to attach.
    pub crn: Option<String>,

    /// Resource type, for resources not identified by CRN.
    pub resource_type: Option<String>,

    /// Legacy infrastructure resource id.
    pub id: Option<f64>,

    /// Free-form note to record alongside the resource.
    pub note: Option<String>,

    /// Extra headers for this request.
    pub headers: HashMap<String, String>,
}

impl AddResourceOptions {
    /// Creates resource attachment options.
    pub fn new(case_number: impl Into<String>) -> Self {
        Self {
            case_number: case_number.into(),
            crn: None,
            resource_type: None,
            id: None,
            note: None,
            headers: HashMap::new(),
        }
    }
}

/// Options for uploading attachments.
#[derive(Debug, Clone)]
pub struct UploadFileOptions {
    /// The case number.
    pub case_number: String,

    /// The files to upload. At least one is required.
    pub files: Vec<AttachmentFile>,

    /// Extra headers for this request.
    pub headers: HashMap<String, String>,
}

impl UploadFileOptions {
    /// Creates upload options.
    pub fn new(case_number: impl Into<String>, files: Vec<AttachmentFile>) -> Self {
        Self {
            case_number: case_number.into(),
            files,
            headers: HashMap::new(),
        }
    }
}

/// Options for downloading an attachment.
#[derive(Debug, Clone)]
pub struct DownloadFileOptions {
    /// The case number.
    pub case_number: String,

    /// The attachment id.
    pub file_id: String,

    /// Extra headers for this request.
    pub headers: HashMap<String, String>,
}

impl DownloadFileOptions {
    /// Creates download options.
    pub fn new(case_number: impl Into<String>, file_id: impl Into<String>) -> Self {
        Self {
            case_number: case_number.into(),
            file_id: file_id.into(),
            headers: HashMap::new(),
        }
    }
}

/// Options for deleting an attachment.
#[derive(Debug, Clone)]
pub struct DeleteFileOptions {
    /// The case number.
    pub case_number: String,

    /// The attachment id.
    pub file_id: String,

    /// Extra headers for this request.
    pub headers: HashMap<String, String>,
}

impl DeleteFileOptions {
    /// Creates deletion options.
    pub fn new(case_number: impl Into<String>, file_id: impl Into<String>) -> Self {
        Self {
            case_number: case_number.into(),
            file_id: file_id.into(),
            headers: HashMap::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::common::ApiError;
    use mockito::Matcher;

    fn service_for(server: &mockito::Server) -> CaseManagement {
        let mut service = CaseManagement::new().unwrap();
        service.set_service_url(&server.url()).unwrap();
        service
    }

    #[test]
    fn test_default_service_url() {
        let service = CaseManagement::new().unwrap();
        assert_eq!(
            service.service_url(),
            "https://support-center.cloud.ibm.com/case-management/v1"
        );
    }

    #[tokio::test]
    async fn test_get_cases_builds_query() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("GET", "/cases")
            .match_query(Matcher::AllOf(vec![
                Matcher::UrlEncoded("limit".into(), "10".into()),
                Matcher::UrlEncoded("status".into(), "new,in_progress".into()),
                Matcher::UrlEncoded("fields".into(), "number,status".into()),
            ]))
            .with_status(200)
            .with_body(r#"{"total_count": 1, "cases": [{"number": "CS0001"}]}"#)
            .create_async()
            .await;

        let service = service_for(&server);
        let mut options = GetCasesOptions::new();
        options.limit = Some(10);
        options.status = vec!["new".to_string(), "in_progress".to_string()];
        options.fields = vec!["number".to_string(), "status".to_string()];

        let cases = service.cases(&options).await.unwrap();
        mock.assert_async().await;
        assert_eq!(cases.total_count, Some(1));
        assert_eq!(cases.cases[0].number.as_deref(), Some("CS0001"));
    }

    #[tokio::test]
    async fn test_create_case_sends_payload() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("POST", "/cases")
            .match_body(Matcher::Json(serde_json::json!({
                "type": "technical",
                "subject": "VM unreachable",
                "description": "details",
                "severity": 2
            })))
            .with_status(200)
            .with_body(r#"{"number": "CS0002", "status": "new"}"#)
            .create_async()
            .await;

        let service = service_for(&server);
        let mut options = CreateCaseOptions::new("technical", "VM unreachable", "details");
        options.severity = Some(2);

        let case = service.create_case(&options).await.unwrap();
        mock.assert_async().await;
        assert_eq!(case.number.as_deref(), Some("CS0002"));
    }

    #[tokio::test]
    async fn test_create_case_requires_subject() {
        let service = CaseManagement::new().unwrap();
        let options = CreateCaseOptions::new("technical", "", "details");
        match service.create_case(&options).await {
            Err(ApiError::Validation(name)) => assert_eq!(name, "subject"),
            other => panic!("unexpected result: {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_update_case_status_resolve() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("PUT", "/cases/CS0001/status")
            .match_body(Matcher::Json(serde_json::json!({
                "action": "resolve",
                "comment": "fixed",
                "resolution_code": 1
            })))
            .with_status(200)
            .with_body(r#"{"number": "CS0001", "status": "resolved"}"#)
            .create_async()
            .await;

        let service = service_for(&server);
        let options = UpdateCaseStatusOptions::new(
            "CS0001",
            StatusPayload::Resolve {
                comment: Some("fixed".to_string()),
                resolution_code: 1,
            },
        );

        let case = service.update_case_status(&options).await.unwrap();
        mock.assert_async().await;
        assert_eq!(case.status.as_deref(), Some("resolved"));
    }

    #[tokio::test]
    async fn test_remove_watchlist_sends_body_on_delete() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("DELETE", "/cases/CS0001/watchlist")
            .match_body(Matcher::Json(serde_json::json!({
                "watchlist": [{"realm": "IBMid", "user_id": "user@example.com"}]
            })))
            .with_status(200)
            .with_body(r#"{"watchlist": []}"#)
            .create_async()
            .await;

        let service = service_for(&server);
        let mut options = RemoveWatchlistOptions::new("CS0001");
        options.watchlist = vec![User::new("IBMid", "user@example.com")];

        let watchlist = service.remove_watchlist(&options).await.unwrap();
        mock.assert_async().await;
        assert!(watchlist.watchlist.is_empty());
    }

    #[tokio::test]
    async fn test_upload_file_is_multipart_put() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("PUT", "/cases/CS0001/attachments")
            .match_header(
                "Content-Type",
                Matcher::Regex("multipart/form-data.*".to_string()),
            )
            .with_status(200)
            .with_body(r#"{"id": "att-1", "filename": "log.txt"}"#)
            .create_async()
            .await;

        let service = service_for(&server);
        let options = UploadFileOptions::new(
            "CS0001",
            vec![AttachmentFile {
                filename: "log.txt".to_string(),
                content_type: Some("text/plain".to_string()),
                data: b"contents".to_vec(),
            }],
        );

        let attachment = service.upload_file(&options).await.unwrap();
        mock.assert_async().await;
        assert_eq!(attachment.id.as_deref(), Some("att-1"));
    }

    #[tokio::test]
    async fn test_upload_file_requires_a_file() {
        let service = CaseManagement::new().unwrap();
        let options = UploadFileOptions::new("CS0001", Vec::new());
        assert!(matches!(
            service.upload_file(&options).await,
            Err(ApiError::Validation(_))
        ));
    }

    #[tokio::test]
    async fn test_download_file_returns_bytes() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("GET", "/cases/CS0001/attachments/att-1")
            .match_header("Accept", "application/octet-stream")
            .with_status(200)
            .with_body("raw file bytes")
            .create_async()
            .await;

        let service = service_for(&server);
        let options = DownloadFileOptions::new("CS0001", "att-1");

        let bytes = service.download_file(&options).await.unwrap();
        mock.assert_async().await;
        assert_eq!(bytes, b"raw file bytes");
    }

    #[tokio::test]
    async fn test_delete_file_returns_remaining_attachments() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("DELETE", "/cases/CS0001/attachments/att-1")
            .with_status(200)
            .with_body(r#"{"attachments": [{"id": "att-2"}]}"#)
            .create_async()
            .await;

        let service = service_for(&server);
        let options = DeleteFileOptions::new("CS0001", "att-1");

        let remaining = service.delete_file(&options).await.unwrap();
        mock.assert_async().await;
        assert_eq!(remaining.attachments.len(), 1);
    }

    #[tokio::test]
    async fn test_case_number_is_path_encoded() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("GET", "/cases/CS%2F0001")
            .with_status(200)
            .with_body(r#"{"number": "CS/0001"}"#)
            .create_async()
            .await;

        let service = service_for(&server);
        let options = GetCaseOptions::new("CS/0001");

        let case = service.case(&options).await.unwrap();
        mock.assert_async().await;
        assert_eq!(case.number.as_deref(), Some("CS/0001"));
    }
}
