use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Request body for POST /register
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RegisterRequest {
    pub full_name: String,
    pub username: String,
    pub email: String,
    pub password: String,
}

/// Response from POST /register and POST /login
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthResponse {
    pub token: String,
    #[serde(default)]
    pub full_name: Option<String>,
    #[serde(default)]
    pub username: Option<String>,
}

/// Request body for POST /login
#[derive(Debug, Clone, Serialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// Response from GET /profile
///
/// The server returns the stored PIN hash (or null); clients only ever look at
/// whether it is set.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfileResponse {
    pub full_name: String,
    pub username: String,
    pub balance: f64,
    #[serde(default)]
    pub profile_picture: Option<String>,
    #[serde(default)]
    pub pin: Option<serde_json::Value>,
}

/// A single entry from GET /transaction-history
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TransactionRecord {
    #[serde(rename = "type")]
    pub kind: String,
    pub description: String,
    pub created_at: String,
    pub amount: AmountField,
}

/// Transaction amount as returned by the server, either a JSON number or a
/// numeric string
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum AmountField {
    Number(f64),
    Text(String),
}

impl AmountField {
    /// Parse to a numeric amount, `None` if the field is malformed
    pub fn parse(&self) -> Option<f64> {
        match self {
            AmountField::Number(n) => Some(*n),
            AmountField::Text(s) => s.trim().parse().ok(),
        }
    }

    /// Raw textual form, for flagging malformed values
    pub fn raw(&self) -> String {
        match self {
            AmountField::Number(n) => n.to_string(),
            AmountField::Text(s) => s.clone(),
        }
    }
}

/// Request body for POST /fund
#[derive(Debug, Clone, Serialize)]
pub struct FundRequest {
    pub amount: f64,
}

/// Response from POST /fund
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FundResponse {
    pub new_balance: f64,
}

/// Request body for POST /send-money; the PIN goes over the wire as a number
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SendMoneyRequest {
    pub recipient_username: String,
    pub amount: f64,
    pub pin: u32,
}

/// Response from POST /send-money
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SendMoneyResponse {
    pub new_balance: f64,
    pub message: String,
}

/// Request body for POST /set-pin
#[derive(Debug, Clone, Serialize)]
pub struct SetPinRequest {
    pub pin: String,
}

/// Response from POST /set-pin
#[derive(Debug, Clone, Deserialize)]
pub struct SetPinResponse {
    #[serde(default)]
    pub message: Option<String>,
}

/// Response from PUT /edit-profile
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EditProfileResponse {
    pub full_name: String,
    #[serde(default)]
    pub profile_picture: Option<String>,
}

/// Image payload for the multipart edit-profile request
#[derive(Debug, Clone)]
pub struct ProfilePicture {
    pub file_name: String,
    pub mime_type: String,
    pub bytes: Vec<u8>,
}

/// Error response body from the API
#[derive(Debug, Clone, Deserialize)]
pub struct ErrorBody {
    pub message: Option<String>,
}

/// Errors from wallet API operations
#[derive(Debug, Clone, Error)]
pub enum ApiError {
    /// No session token; the action requires authentication
    #[error("User not authenticated")]
    NotAuthenticated,
    /// 401 from the server, the token is missing or stale
    #[error("{0}")]
    Unauthorized(String),
    /// Request rejected by the server; message is surfaced verbatim
    #[error("{0}")]
    Rejected(String),
    /// 5xx from the server
    #[error("Server error ({0}): {1}")]
    ServerError(u16, String),
    /// Other HTTP errors without a parseable message
    #[error("HTTP error ({0}): {1}")]
    HttpError(u16, String),
    /// Network/request error, the call never completed
    #[error("Request failed: {0}")]
    RequestError(String),
    /// A response arrived but did not match the expected schema
    #[error("Failed to parse response: {0}")]
    DeserializationError(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_amount_field_from_number() {
        let field: AmountField = serde_json::from_str("42.5").unwrap();
        assert_eq!(field.parse(), Some(42.5));
    }

    #[test]
    fn test_amount_field_from_numeric_string() {
        let field: AmountField = serde_json::from_str("\"100.25\"").unwrap();
        assert_eq!(field.parse(), Some(100.25));
    }

    #[test]
    fn test_amount_field_malformed() {
        let field: AmountField = serde_json::from_str("\"twelve\"").unwrap();
        assert_eq!(field.parse(), None);
        assert_eq!(field.raw(), "twelve");
    }

    #[test]
    fn test_transaction_record_deserializes_camel_case() {
        let json = r#"{
            "type": "credit",
            "description": "Wallet Funding",
            "createdAt": "2024-01-01T10:00:00.000Z",
            "amount": 100
        }"#;
        let record: TransactionRecord = serde_json::from_str(json).unwrap();
        assert_eq!(record.kind, "credit");
        assert_eq!(record.amount.parse(), Some(100.0));
    }

    #[test]
    fn test_profile_pin_field_may_be_absent() {
        let json = r#"{"fullName":"Jane Doe","username":"jane","balance":12.5}"#;
        let profile: ProfileResponse = serde_json::from_str(json).unwrap();
        assert!(profile.pin.is_none());
        assert!(profile.profile_picture.is_none());
    }
}
