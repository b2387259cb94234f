use async_trait::async_trait;
use reqwest::{header, Client as ReqwestClient, Response, StatusCode, Url};
use serde::Deserialize;
use std::time::Duration;
use tracing::{debug, info, instrument};

use crate::domain::errors::AdminApiError;
use crate::domain::models::config::SupabaseConfig;
use crate::domain::models::user::{CreateUserRequest, CreateUserResponse};
use crate::domain::ports::AdminAuthClient;
use crate::infrastructure::logging::SecretScrubber;

/// Path of the GoTrue admin users collection
pub const ADMIN_USERS_PATH: &str = "/auth/v1/admin/users";

/// HTTP client for the Supabase auth admin API
///
/// Bound to one project endpoint and one service role key for its whole
/// lifetime. Requests are sent once; creating a user is not idempotent so
/// nothing is retried.
#[derive(Debug)]
pub struct SupabaseAdminClient {
    http_client: ReqwestClient,
    base_url: String,
}

impl SupabaseAdminClient {
    /// Create a new admin client
    ///
    /// # Returns
    /// * `Err(AdminApiError::MissingUrl)` / `Err(AdminApiError::MissingServiceKey)`
    ///   when a credential is empty
    /// * `Err(AdminApiError::InvalidUrl)` unless the endpoint is an absolute
    ///   http(s) URL
    pub fn new(config: &SupabaseConfig) -> Result<Self, AdminApiError> {
        let url = config.url.trim();
        if url.is_empty() {
            return Err(AdminApiError::MissingUrl);
        }
        let key = config.service_role_key.trim();
        if key.is_empty() {
            return Err(AdminApiError::MissingServiceKey);
        }

        let parsed =
            Url::parse(url).map_err(|e| AdminApiError::InvalidUrl(format!("{url}: {e}")))?;
        if !matches!(parsed.scheme(), "http" | "https") || parsed.host_str().is_none() {
            return Err(AdminApiError::InvalidUrl(url.to_string()));
        }

        let mut apikey = header::HeaderValue::from_str(key).map_err(|_| {
            AdminApiError::InvalidServiceKey("not a valid HTTP header value".to_string())
        })?;
        apikey.set_sensitive(true);
        let mut bearer =
            header::HeaderValue::from_str(&format!("Bearer {key}")).map_err(|_| {
                AdminApiError::InvalidServiceKey("not a valid HTTP header value".to_string())
            })?;
        bearer.set_sensitive(true);

        let mut headers = header::HeaderMap::new();
        headers.insert("apikey", apikey);
        headers.insert(header::AUTHORIZATION, bearer);
        headers.insert(
            header::CONTENT_TYPE,
            header::HeaderValue::from_static("application/json"),
        );

        let http_client = ReqwestClient::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .tcp_nodelay(true)
            .default_headers(headers)
            .build()?;

        let base_url = url.trim_end_matches('/').to_string();
        info!(
            base_url = %base_url,
            timeout_secs = config.timeout_secs,
            "Supabase admin client ready"
        );

        Ok(Self {
            http_client,
            base_url,
        })
    }

    /// Project endpoint without a trailing slash
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Handle HTTP response and convert to typed result
    async fn handle_response(
        &self,
        response: Response,
    ) -> Result<CreateUserResponse, AdminApiError> {
        let status = response.status();
        debug!("Response status: {}", status);

        if !status.is_success() {
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "Unable to read error body".to_string());
            debug!(
                "Admin API error ({}): {}",
                status,
                SecretScrubber::new().scrub_message(&body)
            );
            return Err(classify_error(status, &body));
        }

        let bytes = response.bytes().await?;
        let body: serde_json::Value = serde_json::from_slice(&bytes)?;
        Ok(CreateUserResponse::from_body(body)?)
    }
}

#[async_trait]
impl AdminAuthClient for SupabaseAdminClient {
    #[instrument(skip(self, request), fields(email = %request.email))]
    async fn create_user(
        &self,
        request: &CreateUserRequest,
    ) -> Result<CreateUserResponse, AdminApiError> {
        let url = format!("{}{}", self.base_url, ADMIN_USERS_PATH);
        debug!("POST {}", url);

        let response = self.http_client.post(&url).json(request).send().await?;
        let result = self.handle_response(response).await;

        match &result {
            Ok(CreateUserResponse { user: Some(user) }) => {
                debug!(user_id = %user.id, "user created");
            }
            Ok(CreateUserResponse { user: None }) => {
                debug!("create succeeded without a user in the body");
            }
            Err(err) => debug!(
                error = %SecretScrubber::new().scrub_message(&err.to_string()),
                "create user failed"
            ),
        }

        result
    }
}

/// Error payloads vary across GoTrue versions; every field is optional
#[derive(Debug, Default, Deserialize)]
struct ApiErrorBody {
    error_code: Option<String>,
    msg: Option<String>,
    message: Option<String>,
    error_description: Option<String>,
    error: Option<String>,
}

impl ApiErrorBody {
    fn message(&self) -> Option<String> {
        [&self.msg, &self.message, &self.error_description, &self.error]
            .into_iter()
            .flatten()
            .find(|m| !m.trim().is_empty())
            .cloned()
    }

    fn is_email_exists(&self) -> bool {
        self.error_code.as_deref() == Some("email_exists")
    }
}

/// Map a non-success status and its body to an error kind
fn classify_error(status: StatusCode, body: &str) -> AdminApiError {
    let parsed: ApiErrorBody = serde_json::from_str(body).unwrap_or_default();
    let message = parsed.message().unwrap_or_else(|| {
        let trimmed = body.trim();
        if trimmed.is_empty() {
            status.canonical_reason().unwrap_or("no response body").to_string()
        } else {
            trimmed.to_string()
        }
    });

    if parsed.is_email_exists() || message.contains("already been registered") {
        return AdminApiError::UserAlreadyExists(message);
    }

    match status {
        StatusCode::BAD_REQUEST => AdminApiError::InvalidRequest(message),
        StatusCode::UNAUTHORIZED => AdminApiError::Unauthorized(message),
        StatusCode::FORBIDDEN => AdminApiError::Forbidden(message),
        StatusCode::NOT_FOUND => AdminApiError::NotFound(message),
        StatusCode::UNPROCESSABLE_ENTITY => AdminApiError::Validation(message),
        StatusCode::TOO_MANY_REQUESTS => AdminApiError::RateLimited(message),
        status if status.is_server_error() => AdminApiError::ServerError(status, message),
        status => AdminApiError::Unexpected(status, message),
    }
}
