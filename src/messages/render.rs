//! Render state - data structure sent from the store to the UI for rendering

use crate::models::AppRecord;

/// Complete state needed by the UI to render the app list
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RenderState {
    /// Apps in display order (owned first, then by name)
    pub apps: Vec<AppRecord>,
    pub owned_count: usize,
    pub count: u64,
    /// Registration fee as a decimal string
    pub fee: String,
    pub loading: bool,
}
