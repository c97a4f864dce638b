//! Record service HTTP client.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, Method, RequestBuilder, Response, StatusCode};
use serde::de::DeserializeOwned;
use tracing::{debug, warn};

use super::dto::ErrorResponse;
use crate::domain::entities::{
    AllocationDetail, Employee, EntityKind, Project, RecordDraft, RecordId,
};
use crate::domain::errors::ApiError;
use crate::domain::ports::RecordServicePort;

/// Base URL the service listens on when nothing else is configured.
pub const DEFAULT_API_URL: &str = "http://localhost:8000";

const USER_AGENT: &str = concat!("rosterdesk/", env!("CARGO_PKG_VERSION"));

/// HTTP adapter for the record service.
pub struct HttpRecordClient {
    client: Client,
    base_url: String,
}

impl HttpRecordClient {
    /// Creates client with default base URL and no timeout.
    ///
    /// # Errors
    /// Returns error if HTTP client creation fails.
    pub fn new() -> Result<Self, ApiError> {
        Self::with_base_url(DEFAULT_API_URL, None)
    }

    /// Creates client with custom base URL and optional request timeout.
    ///
    /// # Errors
    /// Returns error if HTTP client creation fails.
    pub fn with_base_url(
        base_url: impl Into<String>,
        timeout: Option<Duration>,
    ) -> Result<Self, ApiError> {
        let mut builder = Client::builder().user_agent(USER_AGENT);
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder
            .build()
            .map_err(|e| ApiError::transport(format!("failed to create HTTP client: {e}")))?;

        Ok(Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        })
    }

    /// Returns the base URL requests are sent to.
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}{path}", self.base_url)
    }

    fn request(&self, method: Method, path: &str) -> RequestBuilder {
        self.client.request(method, self.url(path))
    }

    async fn send(request: RequestBuilder) -> Result<Response, ApiError> {
        request.send().await.map_err(|e| {
            warn!(error = %e, "Failed to reach record service");
            if e.is_timeout() {
                ApiError::transport("request timed out")
            } else if e.is_connect() {
                ApiError::transport("failed to connect to record service")
            } else {
                ApiError::transport(e.to_string())
            }
        })
    }

    async fn handle_error_response(status: StatusCode, response: Response) -> ApiError {
        let body = match response.bytes().await {
            Ok(body) => body,
            Err(e) => return ApiError::transport(format!("failed to read error body: {e}")),
        };

        match serde_json::from_slice::<ErrorResponse>(&body) {
            Ok(error) => {
                let detail = error.render_detail().unwrap_or_else(|| {
                    status
                        .canonical_reason()
                        .map_or_else(|| status.as_str().to_string(), ToString::to_string)
                });
                ApiError::rejected(status.as_u16(), detail)
            }
            Err(e) => {
                warn!(status = %status, error = %e, "Unreadable error body");
                ApiError::malformed(format!("HTTP {status} with non-JSON body"))
            }
        }
    }

    async fn fetch_list<T: DeserializeOwned>(&self, kind: EntityKind) -> Result<Vec<T>, ApiError> {
        debug!(kind = %kind, "Fetching record list");

        let response = Self::send(self.request(Method::GET, kind.list_path())).await?;
        let status = response.status();

        if !status.is_success() {
            return Err(Self::handle_error_response(status, response).await);
        }

        response.json::<Vec<T>>().await.map_err(|e| {
            warn!(kind = %kind, error = %e, "Failed to parse record list");
            ApiError::malformed(format!("failed to parse {} list: {e}", kind.noun()))
        })
    }

    async fn write(&self, request: RequestBuilder) -> Result<(), ApiError> {
        let response = Self::send(request).await?;
        let status = response.status();

        if status.is_success() {
            Ok(())
        } else {
            Err(Self::handle_error_response(status, response).await)
        }
    }
}

#[async_trait]
impl RecordServicePort for HttpRecordClient {
    async fn list_employees(&self) -> Result<Vec<Employee>, ApiError> {
        self.fetch_list(EntityKind::Employee).await
    }

    async fn list_projects(&self) -> Result<Vec<Project>, ApiError> {
        self.fetch_list(EntityKind::Project).await
    }

    async fn list_allocations(&self) -> Result<Vec<AllocationDetail>, ApiError> {
        self.fetch_list(EntityKind::Allocation).await
    }

    async fn create(&self, draft: &RecordDraft) -> Result<(), ApiError> {
        let kind = draft.kind();
        debug!(kind = %kind, "Creating record");
        self.write(self.request(Method::POST, kind.create_path()).json(draft))
            .await
    }

    async fn update(&self, id: RecordId, draft: &RecordDraft) -> Result<(), ApiError> {
        let kind = draft.kind();
        debug!(kind = %kind, id = %id, "Updating record");
        self.write(self.request(Method::PUT, &kind.update_path(id)).json(draft))
            .await
    }

    async fn delete(&self, kind: EntityKind, id: RecordId) -> Result<(), ApiError> {
        debug!(kind = %kind, id = %id, "Deleting record");
        self.write(self.request(Method::DELETE, &kind.delete_path(id)))
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::dto::{ListView, delete_failure_notice, submit_failure_notice};
    use crate::domain::entities::{EmployeeDraft, ProjectDraft};
    use std::io::{Read, Write};
    use std::net::{TcpListener, TcpStream};
    use std::thread::JoinHandle;

    /// Reads one request: head plus a `Content-Length` body.
    fn read_request(stream: &mut TcpStream) -> String {
        let mut data = Vec::new();
        let mut chunk = [0u8; 1024];
        loop {
            let n = stream.read(&mut chunk).unwrap();
            if n == 0 {
                break;
            }
            data.extend_from_slice(&chunk[..n]);

            let text = String::from_utf8_lossy(&data);
            if let Some(end) = text.find("\r\n\r\n") {
                let length = text[..end]
                    .lines()
                    .filter_map(|line| line.split_once(':'))
                    .find(|(name, _)| name.trim().eq_ignore_ascii_case("content-length"))
                    .and_then(|(_, value)| value.trim().parse::<usize>().ok())
                    .unwrap_or(0);
                if data.len() >= end + 4 + length {
                    break;
                }
            }
        }
        String::from_utf8(data).unwrap()
    }

    /// Serves a single canned response and hands back the raw request.
    fn serve_once(status: &'static str, body: &'static str) -> (String, JoinHandle<String>) {
        let listener = TcpListener::bind("127.0.0.1:0").unwrap();
        let base_url = format!("http://{}", listener.local_addr().unwrap());

        let handle = std::thread::spawn(move || {
            let (mut stream, _) = listener.accept().unwrap();
            let request = read_request(&mut stream);
            let content_type = if body.starts_with(['{', '[']) {
                "application/json"
            } else {
                "text/html"
            };
            let response = format!(
                "HTTP/1.1 {status}\r\nContent-Type: {content_type}\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{body}",
                body.len()
            );
            stream.write_all(response.as_bytes()).unwrap();
            request
        });

        (base_url, handle)
    }

    fn split_request(request: &str) -> (String, String, serde_json::Value) {
        let (head, body) = request.split_once("\r\n\r\n").unwrap();
        let request_line = head.lines().next().unwrap().to_string();
        let body = if body.is_empty() {
            serde_json::Value::Null
        } else {
            serde_json::from_str(body).unwrap()
        };
        (request_line, head.to_ascii_lowercase(), body)
    }

    #[test]
    fn test_client_creation() {
        let client = HttpRecordClient::new();
        assert!(client.is_ok());
    }

    #[test]
    fn test_trailing_slash_is_trimmed() {
        let client = HttpRecordClient::with_base_url("http://records.local:8000/", None).unwrap();
        assert_eq!(client.base_url(), "http://records.local:8000");
        assert_eq!(
            client.url(EntityKind::Employee.list_path()),
            "http://records.local:8000/read_employees"
        );
    }

    #[tokio::test]
    async fn test_create_posts_json_body() {
        let (base_url, server) = serve_once("200 OK", "{}");
        let client = HttpRecordClient::with_base_url(base_url, None).unwrap();

        let draft = EmployeeDraft::new("Ana", "Go", None).into();
        client.create(&draft).await.unwrap();

        let (line, head, body) = split_request(&server.join().unwrap());
        assert_eq!(line, "POST /create_employee HTTP/1.1");
        assert!(head.contains("content-type: application/json"));
        assert_eq!(
            body,
            serde_json::json!({"employee_name": "Ana", "skilled_language": "Go", "available_hrs": null})
        );
    }

    #[tokio::test]
    async fn test_update_puts_to_record_path() {
        let (base_url, server) = serve_once("200 OK", "{}");
        let client = HttpRecordClient::with_base_url(base_url, None).unwrap();

        let draft = ProjectDraft::new("ETL", Some(80), "SQL").into();
        client.update(RecordId(7), &draft).await.unwrap();

        let (line, head, body) = split_request(&server.join().unwrap());
        assert_eq!(line, "PUT /update_project/7 HTTP/1.1");
        assert!(head.contains("content-type: application/json"));
        assert_eq!(
            body,
            serde_json::json!({"project_name": "ETL", "project_duration": 80, "project_skill_required": "SQL"})
        );
    }

    #[tokio::test]
    async fn test_delete_sends_no_body() {
        let (base_url, server) = serve_once("200 OK", "{}");
        let client = HttpRecordClient::with_base_url(base_url, None).unwrap();

        client
            .delete(EntityKind::Project, RecordId(3))
            .await
            .unwrap();

        let (line, _, body) = split_request(&server.join().unwrap());
        assert_eq!(line, "DELETE /delete_project/3 HTTP/1.1");
        assert_eq!(body, serde_json::Value::Null);
    }

    #[tokio::test]
    async fn test_list_parses_records() {
        let (base_url, server) = serve_once(
            "200 OK",
            r#"[{"employee_id":4,"employee_name":"Ana","skilled_language":"Go","available_hrs":40}]"#,
        );
        let client = HttpRecordClient::with_base_url(base_url, None).unwrap();

        let employees = client.list_employees().await.unwrap();

        let (line, _, _) = split_request(&server.join().unwrap());
        assert_eq!(line, "GET /read_employees HTTP/1.1");
        assert_eq!(employees, vec![Employee::new(4, "Ana", "Go", 40)]);
    }

    #[tokio::test]
    async fn test_rejection_detail_is_shown_verbatim() {
        let (base_url, server) = serve_once("400 Bad Request", r#"{"detail":"X"}"#);
        let client = HttpRecordClient::with_base_url(base_url, None).unwrap();

        let draft = EmployeeDraft::new("Ana", "Go", Some(40)).into();
        let error = client.create(&draft).await.unwrap_err();
        server.join().unwrap();

        assert!(matches!(
            &error,
            ApiError::Rejected { status: 400, detail } if detail == "X"
        ));
        assert_eq!(submit_failure_notice(&error).message, "Error: X");
    }

    #[tokio::test]
    async fn test_validation_list_detail_joins_messages() {
        let (base_url, server) = serve_once(
            "422 Unprocessable Entity",
            r#"{"detail":[{"loc":["body","available_hrs"],"msg":"Input should be a valid integer","type":"int_type"}]}"#,
        );
        let client = HttpRecordClient::with_base_url(base_url, None).unwrap();

        let draft = EmployeeDraft::new("Ana", "Go", None).into();
        let error = client.create(&draft).await.unwrap_err();
        server.join().unwrap();

        assert_eq!(error.detail(), Some("Input should be a valid integer"));
    }

    #[tokio::test]
    async fn test_missing_detail_uses_status_reason() {
        let (base_url, server) = serve_once("404 Not Found", "{}");
        let client = HttpRecordClient::with_base_url(base_url, None).unwrap();

        let error = client
            .delete(EntityKind::Employee, RecordId(1))
            .await
            .unwrap_err();
        server.join().unwrap();

        assert_eq!(error.detail(), Some("Not Found"));
        assert_eq!(
            delete_failure_notice(EntityKind::Employee, &error).message,
            "Error: Not Found"
        );
    }

    #[tokio::test]
    async fn test_html_error_body_counts_as_no_response() {
        let (base_url, server) =
            serve_once("500 Internal Server Error", "<html>Internal Server Error</html>");
        let client = HttpRecordClient::with_base_url(base_url, None).unwrap();

        let error = client
            .delete(EntityKind::Project, RecordId(3))
            .await
            .unwrap_err();
        server.join().unwrap();

        assert!(matches!(error, ApiError::Malformed { .. }));
        assert!(error.is_transport());
        assert_eq!(
            delete_failure_notice(EntityKind::Project, &error).message,
            "Failed to delete project"
        );
        assert_eq!(
            submit_failure_notice(&error).message,
            "Failed to connect to server"
        );
    }

    #[tokio::test]
    async fn test_list_server_error_renders_failure() {
        let (base_url, server) = serve_once("500 Internal Server Error", r#"{"detail":"boom"}"#);
        let client = HttpRecordClient::with_base_url(base_url, None).unwrap();

        let result = client.list_projects().await;
        server.join().unwrap();

        let view = ListView::from_result(result);
        assert_eq!(view, ListView::Failed);
        assert_eq!(
            view.placeholder(EntityKind::Project).as_deref(),
            Some("Failed to load projects")
        );
    }

    #[tokio::test]
    async fn test_unreachable_service_is_transport_error() {
        let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);

        let client = HttpRecordClient::with_base_url(format!("http://{addr}"), None).unwrap();
        let error = client
            .delete(EntityKind::Employee, RecordId(1))
            .await
            .unwrap_err();

        assert!(error.is_transport());
        assert!(error.detail().is_none());
    }
}
