//! Record Table Logic
//!
//! View state and behaviors of the record tables, kept free of DOM calls.

pub mod bulk;
pub mod column;
pub mod reorder;
pub mod search;
pub mod source;
pub mod state;

pub use bulk::{delete_all, BulkDeleteReport, SelectionPolicy};
pub use column::{ApartmentColumn, Column, FeeColumn, ResidentColumn};
pub use search::{RequestGate, SearchController};
pub use source::{FeeTab, PaginationMode};
pub use state::{SelectAll, TableState};
