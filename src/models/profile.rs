//! User profile as displayed by the dashboard

use crate::api::wallet::models::ProfileResponse;

/// Client-side view of the account profile. `balance` always reflects the last
/// successful server response, never a local projection.
#[derive(Debug, Clone, PartialEq)]
pub struct UserProfile {
    pub full_name: String,
    /// Unique handle other users address to send funds
    pub username: String,
    pub balance: f64,
    pub profile_picture: Option<String>,
    pub pin_is_set: bool,
}

impl From<ProfileResponse> for UserProfile {
    fn from(response: ProfileResponse) -> Self {
        UserProfile {
            full_name: response.full_name,
            username: response.username,
            balance: response.balance,
            profile_picture: response.profile_picture,
            // The server ships the stored PIN hash or null; only presence matters
            pin_is_set: response.pin.is_some(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pin_presence_maps_to_flag() {
        let with_pin = ProfileResponse {
            full_name: "Jane Doe".to_string(),
            username: "jane".to_string(),
            balance: 10.0,
            profile_picture: None,
            pin: Some(serde_json::json!("$2b$10$hash")),
        };
        assert!(UserProfile::from(with_pin).pin_is_set);

        let without_pin = ProfileResponse {
            full_name: "Jane Doe".to_string(),
            username: "jane".to_string(),
            balance: 10.0,
            profile_picture: None,
            pin: None,
        };
        assert!(!UserProfile::from(without_pin).pin_is_set);
    }
}
