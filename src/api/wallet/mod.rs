pub mod client;
pub mod models;

use async_trait::async_trait;

pub use client::WalletClient;
pub use models::{ApiError, ProfilePicture, RegisterRequest};

use models::{
    AuthResponse, EditProfileResponse, FundResponse, ProfileResponse, SendMoneyResponse,
    SetPinResponse, TransactionRecord,
};

/// One method per backend operation of the wallet API.
///
/// The dashboard controller talks to this trait rather than the concrete
/// client, so any front end (or a test harness) can drive it.
#[async_trait]
pub trait WalletApi: Send + Sync {
    async fn register(&self, request: &RegisterRequest) -> Result<AuthResponse, ApiError>;
    async fn login(&self, email: &str, password: &str) -> Result<AuthResponse, ApiError>;
    async fn profile(&self) -> Result<ProfileResponse, ApiError>;
    async fn transaction_history(&self) -> Result<Vec<TransactionRecord>, ApiError>;
    async fn fund(&self, amount: f64) -> Result<FundResponse, ApiError>;
    async fn send_money(
        &self,
        recipient_username: &str,
        amount: f64,
        pin: u32,
    ) -> Result<SendMoneyResponse, ApiError>;
    async fn set_pin(&self, pin: &str) -> Result<SetPinResponse, ApiError>;
    async fn edit_profile(
        &self,
        full_name: &str,
        picture: Option<ProfilePicture>,
    ) -> Result<EditProfileResponse, ApiError>;
}
