//! Store state - pure data structure with no I/O logic

use std::cmp::Ordering;

use feruca::Collator;
use num_bigint::BigUint;

use crate::messages::RenderState;
use crate::models::{AccountRecord, AppInfo, AppRecord};

/// Observable fields of the dapp store
#[derive(Clone, Debug, PartialEq)]
pub struct DappState {
    pub accounts: Vec<AccountRecord>,
    pub apps: Vec<AppRecord>,
    pub count: u64,
    pub fee: BigUint,
    pub loading: bool,
}

impl Default for DappState {
    fn default() -> Self {
        Self::new()
    }
}

impl DappState {
    pub fn new() -> Self {
        DappState {
            accounts: Vec::new(),
            apps: Vec::new(),
            count: 0,
            fee: BigUint::default(),
            loading: true,
        }
    }

    /// Whether `address` belongs to a loaded account
    pub fn is_local_account(&self, address: &str) -> bool {
        self.accounts.iter().any(|account| account.address == address)
    }

    /// Number of apps owned by a local account
    pub fn owned_count(&self) -> usize {
        self.apps.iter().filter(|app| app.is_owner).count()
    }

    /// Apps ordered by name, then owned apps moved to the front
    pub fn sorted_apps(&self) -> Vec<AppRecord> {
        let mut apps = self.apps.clone();
        let mut collator = Collator::default();
        apps.sort_by(|a, b| compare_names(&mut collator, &a.name, &b.name));
        // Stable, so name order holds within each group
        apps.sort_by_key(|app| !app.is_owner);
        apps
    }

    pub fn set_info(&mut self, index: usize, info: AppInfo) {
        if let Some(app) = self.apps.get_mut(index) {
            app.apply(info);
        }
    }

    /// Convert state to RenderState for UI
    pub fn to_render_state(&self) -> RenderState {
        RenderState {
            apps: self.sorted_apps(),
            owned_count: self.owned_count(),
            count: self.count,
            fee: self.fee.to_string(),
            loading: self.loading,
        }
    }
}

/// Unicode collation (CLDR root) order, falling back to byte order to stay total
fn compare_names(collator: &mut Collator, a: &str, b: &str) -> Ordering {
    collator.collate(a, b).then_with(|| a.cmp(b))
}
