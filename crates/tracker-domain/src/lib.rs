//! tracker-domain
//!
//! Pure domain models for the expense tracker (transactions, budgets, derived summaries).
//! No I/O, no storage. Only data types and core enums.

pub mod budget;
pub mod category;
pub mod common;
pub mod summary;
pub mod transaction;

pub use budget::*;
pub use category::*;
pub use common::*;
pub use summary::*;
pub use transaction::*;
