//! Terminal views rendered with ratatui
//!
//! Views are plain widgets built from store snapshots; they hold no state.

pub mod app_list;
pub mod status;

pub use app_list::AppList;
pub use status::{SendRequest, TxHash, VerificationStep};
