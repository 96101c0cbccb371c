pub mod format;
pub mod page;
pub mod table;

pub use format::{format_amount, format_signed};
pub use page::Paginator;
pub use table::{Align, Table};
