use async_trait::async_trait;
use reqwest::{header, Client, Method};
use serde_json::Value;
use std::time::Duration;
use tracing::debug;

use crate::utils::StudyHubError;

/// One JSON request against the API base URL
#[derive(Debug, Clone, PartialEq)]
pub struct ApiRequest {
    pub method: Method,
    /// Path relative to the base URL, e.g. `/auth/login`
    pub path: String,
    /// Sent as `Authorization: Bearer <token>` when present
    pub bearer: Option<String>,
    pub body: Option<Value>,
}

impl ApiRequest {
    pub fn get(path: &str) -> Self {
        Self {
            method: Method::GET,
            path: path.to_string(),
            bearer: None,
            body: None,
        }
    }

    pub fn post(path: &str, body: Value) -> Self {
        Self {
            method: Method::POST,
            path: path.to_string(),
            bearer: None,
            body: Some(body),
        }
    }

    pub fn put(path: &str, body: Value) -> Self {
        Self {
            method: Method::PUT,
            path: path.to_string(),
            bearer: None,
            body: Some(body),
        }
    }

    pub fn with_bearer(mut self, token: Option<String>) -> Self {
        self.bearer = token;
        self
    }
}

/// Parsed reply: the JSON body plus the HTTP status it came with
#[derive(Debug, Clone, PartialEq)]
pub struct HttpReply {
    pub status: u16,
    pub body: Value,
}

/// Seam between the API clients and the network
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait Transport: Send + Sync {
    /// Send one request and parse its body as JSON, whatever the status
    async fn execute(&self, request: ApiRequest) -> Result<HttpReply, StudyHubError>;
}

/// reqwest-backed transport
pub struct HttpTransport {
    client: Client,
    base_url: String,
}

impl HttpTransport {
    /// Create a transport for `base_url`; no timeout unless one is given
    pub fn new(base_url: &str, timeout: Option<Duration>) -> Result<Self, StudyHubError> {
        let mut builder = Client::builder();
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }

        Ok(Self {
            client: builder.build()?,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Join the base URL and a request path with exactly one slash
    pub fn url_for(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }
}

#[async_trait]
impl Transport for HttpTransport {
    async fn execute(&self, request: ApiRequest) -> Result<HttpReply, StudyHubError> {
        let url = self.url_for(&request.path);
        debug!("{} {}", request.method, url);

        let mut builder = self
            .client
            .request(request.method.clone(), &url)
            .header(header::ACCEPT, "application/json");

        if let Some(token) = &request.bearer {
            builder = builder.bearer_auth(token);
        }
        if let Some(body) = &request.body {
            builder = builder.json(body);
        }

        let response = builder.send().await?;
        let status = response.status().as_u16();
        let text = response.text().await?;
        debug!("{} {} -> {}", request.method, url, status);

        let body: Value = serde_json::from_str(&text).map_err(|e| {
            StudyHubError::MalformedResponse(format!(
                "{} returned non-JSON body ({}): {}",
                url, status, e
            ))
        })?;

        Ok(HttpReply { status, body })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use tokio::io::{AsyncReadExt, AsyncWriteExt};
    use tokio::net::TcpListener;
    use tokio::task::JoinHandle;

    /// Transport for a loopback server; system proxies are ignored
    fn local_transport(base_url: &str) -> HttpTransport {
        HttpTransport {
            client: Client::builder()
                .no_proxy()
                .timeout(Duration::from_secs(5))
                .build()
                .unwrap(),
            base_url: base_url.to_string(),
        }
    }

    /// Accept one connection, answer with `status` and `body`, and hand back
    /// the raw request text
    async fn serve_once(
        status: &'static str,
        body: &'static str,
    ) -> (String, JoinHandle<String>) {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let base_url = format!("http://{}/api/v1", listener.local_addr().unwrap());

        let handle = tokio::spawn(async move {
            let (mut socket, _) = listener.accept().await.unwrap();
            let mut raw = Vec::new();
            let mut buf = [0u8; 4096];
            loop {
                let n = socket.read(&mut buf).await.unwrap();
                if n == 0 {
                    break;
                }
                raw.extend_from_slice(&buf[..n]);

                let Some(head_end) = raw.windows(4).position(|w| w == b"\r\n\r\n") else {
                    continue;
                };
                let head = String::from_utf8_lossy(&raw[..head_end]).to_lowercase();
                let content_length = head
                    .lines()
                    .find_map(|line| line.strip_prefix("content-length:"))
                    .map(|value| value.trim().parse::<usize>().unwrap())
                    .unwrap_or(0);
                if raw.len() >= head_end + 4 + content_length {
                    break;
                }
            }

            let response = format!(
                "HTTP/1.1 {}\r\ncontent-type: application/json\r\ncontent-length: {}\r\n\
                 connection: close\r\n\r\n{}",
                status,
                body.len(),
                body
            );
            socket.write_all(response.as_bytes()).await.unwrap();
            String::from_utf8(raw).unwrap()
        });

        (base_url, handle)
    }

    #[test]
    fn test_url_joining() {
        let transport = HttpTransport::new("http://localhost:4000/api/v1/", None).unwrap();
        assert_eq!(transport.base_url(), "http://localhost:4000/api/v1");
        assert_eq!(
            transport.url_for("/auth/login"),
            "http://localhost:4000/api/v1/auth/login"
        );
        assert_eq!(
            transport.url_for("profile/getUserDetails"),
            "http://localhost:4000/api/v1/profile/getUserDetails"
        );
    }

    #[test]
    fn test_request_builders() {
        let req = ApiRequest::get("/profile/getUserDetails").with_bearer(Some("t".into()));
        assert_eq!(req.method, Method::GET);
        assert_eq!(req.bearer.as_deref(), Some("t"));
        assert!(req.body.is_none());

        let req = ApiRequest::put("/profile/updateProfile", json!({})).with_bearer(None);
        assert_eq!(req.method, Method::PUT);
        assert!(req.bearer.is_none());
    }

    #[tokio::test]
    async fn test_post_sends_bearer_and_json_body() {
        let (base_url, server) = serve_once("200 OK", r#"{"success":true,"token":"X"}"#).await;
        let transport = local_transport(&base_url);

        let request = ApiRequest::put("/profile/updateProfile", json!({ "about": "hi" }))
            .with_bearer(Some("tok".into()));
        let reply = transport.execute(request).await.unwrap();
        let raw = server.await.unwrap();
        let lower = raw.to_lowercase();

        assert!(raw.starts_with("PUT /api/v1/profile/updateProfile HTTP/1.1\r\n"));
        assert!(lower.contains("\r\nauthorization: bearer tok\r\n"));
        assert!(lower.contains("\r\ncontent-type: application/json\r\n"));
        assert!(lower.contains("\r\naccept: application/json\r\n"));
        assert!(raw.ends_with(r#"{"about":"hi"}"#));

        assert_eq!(reply.status, 200);
        assert_eq!(reply.body, json!({ "success": true, "token": "X" }));
    }

    #[tokio::test]
    async fn test_get_without_token_has_no_authorization_header() {
        let (base_url, server) = serve_once("200 OK", r#"{"success":true}"#).await;
        let transport = local_transport(&base_url);

        transport
            .execute(ApiRequest::get("/profile/getUserDetails"))
            .await
            .unwrap();
        let raw = server.await.unwrap();

        assert!(raw.starts_with("GET /api/v1/profile/getUserDetails HTTP/1.1\r\n"));
        assert!(!raw.to_lowercase().contains("authorization:"));
    }

    #[tokio::test]
    async fn test_error_status_with_json_body_is_a_reply() {
        let (base_url, server) = serve_once(
            "401 Unauthorized",
            r#"{"success":false,"message":"Token is invalid"}"#,
        )
        .await;
        let transport = local_transport(&base_url);

        let reply = transport
            .execute(ApiRequest::get("/profile/getUserDetails").with_bearer(Some("old".into())))
            .await
            .unwrap();
        server.await.unwrap();

        assert_eq!(reply.status, 401);
        assert_eq!(
            reply.body,
            json!({ "success": false, "message": "Token is invalid" })
        );
    }

    #[tokio::test]
    async fn test_non_json_body_is_malformed() {
        let (base_url, server) = serve_once("502 Bad Gateway", "<html>bad gateway</html>").await;
        let transport = local_transport(&base_url);

        let err = transport
            .execute(ApiRequest::post("/auth/login", json!({ "email": "a@b.com" })))
            .await
            .unwrap_err();
        server.await.unwrap();

        assert!(matches!(err, StudyHubError::MalformedResponse(_)));
        assert_eq!(err.kind(), crate::utils::ErrorKind::Network);
    }

    #[tokio::test]
    async fn test_unreachable_host_is_network_error() {
        // Bind then drop to get a port nothing listens on
        let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);

        let transport = local_transport(&format!("http://{}", addr));
        let err = transport.execute(ApiRequest::get("/x")).await.unwrap_err();
        assert!(matches!(err, StudyHubError::NetworkError(_)));
    }
}
