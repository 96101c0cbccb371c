//! Dashboard view-state controller
//!
//! Owns all client-visible financial state and reconciles it with the remote
//! API after every mutating action. Balances are never projected locally: the
//! displayed value always comes from the last successful server response.

use std::sync::Arc;

use tracing::{debug, warn};

use crate::api::wallet::{ProfilePicture, WalletApi};
use crate::models::{
    sort_newest_first, CashFlowSummary, Modal, ModalState, PendingTransfer, Transaction,
    UserProfile,
};
use crate::session::SessionStore;

/// How many transactions the collapsed history shows
pub const COLLAPSED_LIST_LEN: usize = 7;

pub struct DashboardController {
    api: Arc<dyn WalletApi>,
    session: SessionStore,
    profile: Option<UserProfile>,
    transactions: Vec<Transaction>,
    cash_flow: CashFlowSummary,
    show_all: bool,
    pending: Option<PendingTransfer>,
    modals: ModalState,
}

impl DashboardController {
    pub fn new(api: Arc<dyn WalletApi>, session: SessionStore) -> Self {
        DashboardController {
            api,
            session,
            profile: None,
            transactions: Vec::new(),
            cash_flow: CashFlowSummary::default(),
            show_all: false,
            pending: None,
            modals: ModalState::new(),
        }
    }

    /// Fetch profile and transaction history concurrently. The two requests
    /// are independent; each successful half is applied even when the other
    /// fails, and a failed half leaves previously-held state untouched.
    pub async fn load_dashboard(&mut self) -> Result<(), String> {
        let (profile_result, history_result) =
            tokio::join!(self.api.profile(), self.api.transaction_history());

        let mut errors = Vec::new();

        match profile_result {
            Ok(response) => self.profile = Some(UserProfile::from(response)),
            Err(e) => errors.push(format!("Failed to fetch user data: {}", e)),
        }

        match history_result {
            Ok(records) => self.replace_transactions(records),
            Err(e) => errors.push(format!("Failed to fetch transaction history: {}", e)),
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors.join("; "))
        }
    }

    /// Fund the own account. Rejects non-positive amounts before any network
    /// call; on success the server-returned balance replaces the local one and
    /// the history is refetched rather than synthesized.
    pub async fn fund_account(&mut self, amount: f64) -> Result<f64, String> {
        if !(amount > 0.0) {
            return Err("Amount must be greater than zero".to_string());
        }

        let response = self.api.fund(amount).await.map_err(|e| e.to_string())?;

        if let Some(profile) = self.profile.as_mut() {
            profile.balance = response.new_balance;
        }
        self.refresh_transactions().await;
        self.modals.close_top();

        Ok(response.new_balance)
    }

    /// First step of the send-money wizard: capture recipient and amount,
    /// then layer the PIN-entry modal on top of the form so the entered
    /// values survive until confirmation completes or is abandoned.
    pub fn initiate_send_money(&mut self, recipient: &str, amount: f64) -> Result<(), String> {
        let recipient = recipient.trim();
        if recipient.is_empty() {
            return Err("Recipient is required".to_string());
        }
        if !(amount > 0.0) {
            return Err("Amount must be greater than zero".to_string());
        }

        self.pending = Some(PendingTransfer {
            recipient: recipient.to_string(),
            amount,
        });
        self.modals.open(Modal::EnterPin);
        Ok(())
    }

    /// Second step of the wizard. On success the transfer is done: balance
    /// replaced, history refetched, pending transfer consumed and every modal
    /// closed. On rejection (wrong PIN, insufficient balance, unknown
    /// recipient) the pending transfer and the PIN modal stay so the user can
    /// retry without re-entering recipient or amount.
    pub async fn confirm_pin(&mut self, pin: &str) -> Result<String, String> {
        let pending = self
            .pending
            .clone()
            .ok_or_else(|| "No transfer in progress".to_string())?;

        let pin: u32 = pin
            .trim()
            .parse()
            .map_err(|_| "PIN must be numeric".to_string())?;

        let response = self
            .api
            .send_money(&pending.recipient, pending.amount, pin)
            .await
            .map_err(|e| e.to_string())?;

        if let Some(profile) = self.profile.as_mut() {
            profile.balance = response.new_balance;
        }
        self.pending = None;
        self.refresh_transactions().await;
        self.modals.close_all();

        Ok(response.message)
    }

    /// Set or update the transfer PIN. The mismatch check is local and makes
    /// no network call.
    pub async fn set_pin(&mut self, new_pin: &str, confirm_pin: &str) -> Result<(), String> {
        let new_pin = new_pin.trim();
        if new_pin.is_empty() {
            return Err("PIN is required".to_string());
        }
        if new_pin != confirm_pin.trim() {
            return Err("PINs do not match".to_string());
        }

        self.api.set_pin(new_pin).await.map_err(|e| e.to_string())?;

        if let Some(profile) = self.profile.as_mut() {
            profile.pin_is_set = true;
        }
        self.modals.close_all();
        Ok(())
    }

    /// Update display name and optionally the profile picture. The server is
    /// authoritative for both returned values.
    pub async fn edit_profile(
        &mut self,
        full_name: &str,
        picture: Option<ProfilePicture>,
    ) -> Result<(), String> {
        let full_name = full_name.trim();
        if full_name.is_empty() {
            return Err("Full name is required".to_string());
        }

        let response = self
            .api
            .edit_profile(full_name, picture)
            .await
            .map_err(|e| e.to_string())?;

        if let Some(profile) = self.profile.as_mut() {
            profile.full_name = response.full_name;
            if let Some(picture) = response.profile_picture {
                profile.profile_picture = Some(picture);
            }
        }
        self.modals.close_all();
        Ok(())
    }

    /// Flip between the collapsed and the full transaction listing. Purely
    /// local, no refetch.
    pub fn toggle_show_all(&mut self) {
        self.show_all = !self.show_all;
    }

    /// Clear the durable session and reset all view state
    pub fn logout(&mut self) -> Result<(), String> {
        self.session
            .clear()
            .map_err(|e| format!("Failed to clear session: {}", e))?;

        self.profile = None;
        self.transactions.clear();
        self.cash_flow = CashFlowSummary::default();
        self.show_all = false;
        self.pending = None;
        self.modals.close_all();
        Ok(())
    }

    pub fn open_modal(&mut self, modal: Modal) {
        self.modals.open(modal);
    }

    /// Close the topmost action modal, abandoning a pending transfer when its
    /// PIN step is dismissed
    pub fn close_top_modal(&mut self) {
        if self.modals.close_top() == Some(Modal::EnterPin) {
            self.pending = None;
        }
    }

    pub fn toggle_settings(&mut self) {
        self.modals.toggle_settings();
    }

    pub fn close_all_modals(&mut self) {
        self.modals.close_all();
        self.pending = None;
    }

    /// The full working list or its first seven entries, depending on the
    /// expanded flag. A view over already-fetched data, never a refetch.
    pub fn displayed_transactions(&self) -> &[Transaction] {
        if self.show_all || self.transactions.len() <= COLLAPSED_LIST_LEN {
            &self.transactions
        } else {
            &self.transactions[..COLLAPSED_LIST_LEN]
        }
    }

    pub fn profile(&self) -> Option<&UserProfile> {
        self.profile.as_ref()
    }

    pub fn transactions(&self) -> &[Transaction] {
        &self.transactions
    }

    pub fn cash_flow(&self) -> CashFlowSummary {
        self.cash_flow
    }

    pub fn pending_transfer(&self) -> Option<&PendingTransfer> {
        self.pending.as_ref()
    }

    pub fn modals(&self) -> &ModalState {
        &self.modals
    }

    fn replace_transactions(&mut self, records: Vec<crate::api::wallet::models::TransactionRecord>) {
        let mut transactions: Vec<Transaction> =
            records.into_iter().map(Transaction::from_record).collect();
        sort_newest_first(&mut transactions);
        self.cash_flow = CashFlowSummary::of(&transactions);
        self.transactions = transactions;
        debug!("Working list replaced: {} transactions", self.transactions.len());
    }

    /// Refetch the history after a successful mutation. A failed refetch keeps
    /// the previous list; the mutation itself already succeeded.
    async fn refresh_transactions(&mut self) {
        match self.api.transaction_history().await {
            Ok(records) => self.replace_transactions(records),
            Err(e) => warn!("Failed to refresh transaction history: {}", e),
        }
    }
}
