use async_trait::async_trait;
use reqwest::header::{HeaderValue, AUTHORIZATION};
use reqwest::Client as HttpClient;
use serde::de::DeserializeOwned;
use tracing::warn;

use super::models::{
    ApiError, AuthResponse, EditProfileResponse, ErrorBody, FundRequest, FundResponse,
    LoginRequest, ProfilePicture, ProfileResponse, RegisterRequest, SendMoneyRequest,
    SendMoneyResponse, SetPinRequest, SetPinResponse, TransactionRecord,
};
use super::WalletApi;

/// WalletX API client. One method per backend operation, no retries; a failed
/// call reports failure once and the caller decides what to do.
pub struct WalletClient {
    http_client: HttpClient,
    base_url: String,
    token: Option<String>,
}

impl WalletClient {
    const DEFAULT_BASE_URL: &'static str = "https://walletx-server.vercel.app/api/auth";

    /// Create a new client against the production API, unauthenticated
    pub fn new() -> Self {
        Self::with_base_url(Self::DEFAULT_BASE_URL.to_string())
    }

    /// Create a new client with custom base URL (for testing)
    pub fn with_base_url(base_url: String) -> Self {
        Self {
            http_client: HttpClient::new(),
            base_url,
            token: None,
        }
    }

    /// Attach the session token used for gated endpoints
    pub fn with_token(mut self, token: String) -> Self {
        self.token = Some(token);
        self
    }

    /// Bearer header value, failing locally when no session exists
    fn bearer(&self) -> Result<HeaderValue, ApiError> {
        let token = self.token.as_ref().ok_or(ApiError::NotAuthenticated)?;
        HeaderValue::from_str(&format!("Bearer {}", token))
            .map_err(|e| ApiError::RequestError(format!("Failed to create auth header: {}", e)))
    }

    /// Parse an error response body based on HTTP status code. The server's
    /// JSON `message` field is surfaced verbatim when present; a non-JSON
    /// body degrades to a generic HTTP error.
    fn handle_error_response(status_code: u16, body_text: String) -> ApiError {
        let message = serde_json::from_str::<ErrorBody>(&body_text)
            .ok()
            .and_then(|body| body.message);

        match status_code {
            401 => ApiError::Unauthorized(
                message.unwrap_or_else(|| "User not authenticated".to_string()),
            ),
            400..=499 => match message {
                Some(message) => ApiError::Rejected(message),
                None => ApiError::HttpError(status_code, body_text),
            },
            500..=599 => {
                warn!("Server error {}: {}", status_code, body_text);
                ApiError::ServerError(status_code, message.unwrap_or(body_text))
            }
            _ => ApiError::HttpError(status_code, body_text),
        }
    }

    /// Send a prepared request and normalize the result
    async fn execute<T: DeserializeOwned>(
        &self,
        request: reqwest::RequestBuilder,
    ) -> Result<T, ApiError> {
        let response = request
            .send()
            .await
            .map_err(|e| ApiError::RequestError(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let body_text = response.text().await.unwrap_or_default();
            return Err(Self::handle_error_response(status.as_u16(), body_text));
        }

        response
            .json::<T>()
            .await
            .map_err(|e| ApiError::DeserializationError(e.to_string()))
    }

    fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path)
    }
}

#[async_trait]
impl WalletApi for WalletClient {
    /// POST /register, creates an account and returns a fresh session token
    async fn register(&self, request: &RegisterRequest) -> Result<AuthResponse, ApiError> {
        self.execute(self.http_client.post(self.url("register")).json(request))
            .await
    }

    /// POST /login
    async fn login(&self, email: &str, password: &str) -> Result<AuthResponse, ApiError> {
        let body = LoginRequest {
            email: email.to_string(),
            password: password.to_string(),
        };
        self.execute(self.http_client.post(self.url("login")).json(&body))
            .await
    }

    /// GET /profile
    async fn profile(&self) -> Result<ProfileResponse, ApiError> {
        let request = self
            .http_client
            .get(self.url("profile"))
            .header(AUTHORIZATION, self.bearer()?);
        self.execute(request).await
    }

    /// GET /transaction-history, the full list in whatever order the server
    /// returns it
    async fn transaction_history(&self) -> Result<Vec<TransactionRecord>, ApiError> {
        let request = self
            .http_client
            .get(self.url("transaction-history"))
            .header(AUTHORIZATION, self.bearer()?);
        self.execute(request).await
    }

    /// POST /fund
    async fn fund(&self, amount: f64) -> Result<FundResponse, ApiError> {
        let request = self
            .http_client
            .post(self.url("fund"))
            .header(AUTHORIZATION, self.bearer()?)
            .json(&FundRequest { amount });
        self.execute(request).await
    }

    /// POST /send-money
    async fn send_money(
        &self,
        recipient_username: &str,
        amount: f64,
        pin: u32,
    ) -> Result<SendMoneyResponse, ApiError> {
        let body = SendMoneyRequest {
            recipient_username: recipient_username.to_string(),
            amount,
            pin,
        };
        let request = self
            .http_client
            .post(self.url("send-money"))
            .header(AUTHORIZATION, self.bearer()?)
            .json(&body);
        self.execute(request).await
    }

    /// POST /set-pin
    async fn set_pin(&self, pin: &str) -> Result<SetPinResponse, ApiError> {
        let body = SetPinRequest {
            pin: pin.to_string(),
        };
        let request = self
            .http_client
            .post(self.url("set-pin"))
            .header(AUTHORIZATION, self.bearer()?)
            .json(&body);
        self.execute(request).await
    }

    /// PUT /edit-profile, multipart with an optional profile picture part
    async fn edit_profile(
        &self,
        full_name: &str,
        picture: Option<ProfilePicture>,
    ) -> Result<EditProfileResponse, ApiError> {
        let mut form = reqwest::multipart::Form::new().text("fullName", full_name.to_string());

        if let Some(picture) = picture {
            let part = reqwest::multipart::Part::bytes(picture.bytes)
                .file_name(picture.file_name)
                .mime_str(&picture.mime_type)
                .map_err(|e| ApiError::RequestError(format!("Invalid image type: {}", e)))?;
            form = form.part("profilePicture", part);
        }

        let request = self
            .http_client
            .put(self.url("edit-profile"))
            .header(AUTHORIZATION, self.bearer()?)
            .multipart(form);
        self.execute(request).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::wallet::WalletApi;

    #[tokio::test]
    async fn test_gated_call_without_token_fails_locally() {
        // No token set, the request must be rejected before any network I/O
        let client = WalletClient::with_base_url("http://127.0.0.1:1".to_string());
        let err = client.profile().await.unwrap_err();
        assert!(matches!(err, ApiError::NotAuthenticated));
    }

    #[tokio::test]
    async fn test_connectivity_failure_is_a_request_error() {
        // Reserved port, connection refused without reaching any server
        let client =
            WalletClient::with_base_url("http://127.0.0.1:1".to_string()).with_token("t".into());
        let err = client.fund(10.0).await.unwrap_err();
        assert!(matches!(err, ApiError::RequestError(_)));
    }

    #[test]
    fn test_rejection_message_is_surfaced_verbatim() {
        let err = WalletClient::handle_error_response(
            400,
            r#"{"message":"Insufficient balance"}"#.to_string(),
        );
        assert!(matches!(err, ApiError::Rejected(m) if m == "Insufficient balance"));
    }

    #[test]
    fn test_unauthorized_status_maps_to_unauthorized() {
        let err = WalletClient::handle_error_response(
            401,
            r#"{"message":"Token expired"}"#.to_string(),
        );
        assert!(matches!(err, ApiError::Unauthorized(m) if m == "Token expired"));

        // No usable body still yields the dedicated variant
        let err = WalletClient::handle_error_response(401, String::new());
        assert!(matches!(err, ApiError::Unauthorized(m) if m == "User not authenticated"));
    }

    #[test]
    fn test_non_json_client_error_degrades_to_http_error() {
        let err =
            WalletClient::handle_error_response(404, "<html>not found</html>".to_string());
        assert!(matches!(err, ApiError::HttpError(404, body) if body == "<html>not found</html>"));
    }

    #[test]
    fn test_server_error_keeps_status_and_message() {
        let err = WalletClient::handle_error_response(
            503,
            r#"{"message":"Maintenance window"}"#.to_string(),
        );
        assert!(matches!(err, ApiError::ServerError(503, m) if m == "Maintenance window"));
    }
}
