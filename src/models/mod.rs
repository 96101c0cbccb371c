//! Domain models for the dashboard controller and services
//!
//! Wire-level request/response types live in `crate::api::wallet::models`;
//! these are the normalized shapes the rest of the client works with.

pub mod modal;
pub mod profile;
pub mod transaction;

// Re-export commonly used types for convenience
pub use modal::{Modal, ModalState};
pub use profile::UserProfile;
pub use transaction::{
    sort_newest_first, Amount, CashFlowSummary, PendingTransfer, Transaction, TransactionKind,
};
