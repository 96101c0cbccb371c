pub mod dashboard_service;
pub mod statement_service;

pub use dashboard_service::{DashboardController, COLLAPSED_LIST_LEN};
pub use statement_service::build_statement;
