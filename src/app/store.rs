//! Dapp store - discovers registered apps and resolves their metadata
//!
//! One load pass runs per store:
//! registry lookup -> dappreg attach + account listing -> count + fee ->
//! per-index entries -> per-app metadata and manifest -> `loading = false`.
//!
//! Every step recovers from its own failure by logging it and yielding an
//! empty value. A missing registry or dappreg contract stops the pass and
//! leaves the store loading.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, OnceLock};

use chrono::{DateTime, Utc};
use futures_util::future::join_all;
use num_bigint::BigUint;
use tokio::sync::watch;

use crate::app::state::DappState;
use crate::builtins::find_builtin;
use crate::config::Config;
use crate::messages::RenderState;
use crate::models::{AccountRecord, AppInfo, AppRecord, Manifest, MetaKey};
use crate::network::ManifestSource;
use crate::rpc::util::{bytes_to_bare_hex, bytes_to_hex, sha3};
use crate::rpc::{DappRegContract, ParityApi, RegistryContract};

static INSTANCE: OnceLock<Arc<DappStore>> = OnceLock::new();

/// Reactive store of registered dapps
pub struct DappStore {
    api: Arc<dyn ParityApi>,
    content: Arc<dyn ManifestSource>,
    config: Config,
    state: watch::Sender<DappState>,
    started: AtomicBool,
    start_time: DateTime<Utc>,
}

impl DappStore {
    pub fn new(api: Arc<dyn ParityApi>, content: Arc<dyn ManifestSource>, config: Config) -> Self {
        let (state, _) = watch::channel(DappState::new());
        DappStore {
            api,
            content,
            config,
            state,
            started: AtomicBool::new(false),
            start_time: Utc::now(),
        }
    }

    /// Process-wide store.
    ///
    /// The first call builds the store with `init`; later calls return the
    /// same store and ignore `init`.
    ///
    /// The load pass is spawned on the current Tokio runtime. A call made
    /// outside a runtime still registers the store, and the load starts on
    /// the first later call that runs inside one.
    pub fn instance(init: impl FnOnce() -> DappStore) -> Arc<DappStore> {
        let store = INSTANCE.get_or_init(|| Arc::new(init())).clone();

        if !store.started.load(Ordering::SeqCst) {
            match tokio::runtime::Handle::try_current() {
                Ok(handle) => {
                    let loader = store.clone();
                    handle.spawn(async move { loader.load_dapps().await });
                }
                Err(e) => {
                    tracing::warn!(error = %e, "No runtime yet, dapp load deferred");
                }
            }
        }

        store
    }

    /// The process-wide store, if [`DappStore::instance`] has run
    pub fn get() -> Option<Arc<DappStore>> {
        INSTANCE.get().cloned()
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Snapshot of the current fields
    pub fn state(&self) -> DappState {
        self.state.borrow().clone()
    }

    /// Receiver notified on every field change
    pub fn subscribe(&self) -> watch::Receiver<DappState> {
        self.state.subscribe()
    }

    pub fn accounts(&self) -> Vec<AccountRecord> {
        self.state.borrow().accounts.clone()
    }

    pub fn apps(&self) -> Vec<AppRecord> {
        self.state.borrow().apps.clone()
    }

    pub fn count(&self) -> u64 {
        self.state.borrow().count
    }

    pub fn fee(&self) -> BigUint {
        self.state.borrow().fee.clone()
    }

    pub fn loading(&self) -> bool {
        self.state.borrow().loading
    }

    pub fn owned_count(&self) -> usize {
        self.state.borrow().owned_count()
    }

    pub fn sorted_apps(&self) -> Vec<AppRecord> {
        self.state.borrow().sorted_apps()
    }

    pub fn render_state(&self) -> RenderState {
        self.state.borrow().to_render_state()
    }

    /// Fresh app id for a new registration
    pub fn new_id(&self) -> String {
        sha3(&format!(
            "{}_{}",
            self.start_time.timestamp_millis(),
            Utc::now().timestamp_millis()
        ))
    }

    /// Resolve once `loading` turns false
    pub async fn wait_loaded(&self) {
        let mut rx = self.state.subscribe();
        let _ = rx.wait_for(|state| !state.loading).await;
    }

    // ========================================================================
    // Actions
    // ========================================================================

    fn set_accounts(&self, accounts: Vec<AccountRecord>) {
        self.state.send_modify(|s| s.accounts = accounts);
    }

    fn set_apps(&self, apps: Vec<AppRecord>) {
        self.state.send_modify(|s| s.apps = apps);
    }

    fn set_app_info(&self, index: usize, info: AppInfo) {
        self.state.send_modify(|s| s.set_info(index, info));
    }

    fn set_count(&self, count: u64) {
        self.state.send_modify(|s| s.count = count);
    }

    fn set_fee(&self, fee: BigUint) {
        self.state.send_modify(|s| s.fee = fee);
    }

    fn set_loading(&self, loading: bool) {
        self.state.send_modify(|s| s.loading = loading);
    }

    // ========================================================================
    // Load pipeline
    // ========================================================================

    /// Run the load pass. Only the first call does anything.
    pub async fn load_dapps(&self) {
        if self.started.swap(true, Ordering::SeqCst) {
            tracing::warn!("Dapp load already started");
            return;
        }

        let Some(registry) = self.load_registry().await else {
            tracing::error!("Store:loadDapps: registry unavailable, giving up");
            return;
        };

        let (contract, _) = tokio::join!(self.attach_contract(registry.as_ref()), self.load_accounts());
        let Some(contract) = contract else {
            tracing::error!("Store:loadDapps: dappreg unavailable, giving up");
            return;
        };

        tokio::join!(self.get_count(contract.as_ref()), self.get_fee(contract.as_ref()));

        let count = self.count();
        let entries = join_all((0..count).map(|index| self.load_entry(contract.as_ref(), index))).await;

        let apps: Vec<AppRecord> = {
            let state = self.state.borrow();
            entries
                .into_iter()
                .map(|entry| match entry {
                    Some((id, owner)) => {
                        let is_owner = state.is_local_account(&owner);
                        AppRecord::new(id, owner, is_owner)
                    }
                    None => AppRecord::unresolved(),
                })
                .collect()
        };
        let ids: Vec<(usize, String)> = apps
            .iter()
            .enumerate()
            .filter(|(_, app)| app.is_resolved())
            .map(|(index, app)| (index, app.id.clone()))
            .collect();
        self.set_apps(apps);

        join_all(
            ids.iter()
                .map(|(index, id)| self.load_dapp(contract.as_ref(), *index, id)),
        )
        .await;

        tracing::info!(count, owned = self.owned_count(), "Dapps loaded");
        self.set_loading(false);
    }

    async fn load_registry(&self) -> Option<Arc<dyn RegistryContract>> {
        match self.api.registry_address().await {
            Ok(address) => {
                tracing::info!("the registry was found at {}", address);
                Some(self.api.registry(&address))
            }
            Err(e) => {
                tracing::error!(error = %e, "Store:loadRegistry");
                None
            }
        }
    }

    async fn attach_contract(
        &self,
        registry: &dyn RegistryContract,
    ) -> Option<Arc<dyn DappRegContract>> {
        let name_hash = sha3(&self.config.registry_name);
        match registry
            .get_address(&name_hash, &self.config.registry_version)
            .await
        {
            Ok(address) => {
                tracing::info!("{} was found at {}", self.config.registry_name, address);
                Some(self.api.dapp_registry(&address))
            }
            Err(e) => {
                tracing::error!(error = %e, "Store:attachContract");
                None
            }
        }
    }

    async fn load_accounts(&self) {
        match self.api.accounts_info().await {
            Ok(listing) => self.set_accounts(AccountRecord::from_listing(listing)),
            Err(e) => tracing::error!(error = %e, "Store:loadAccounts"),
        }
    }

    async fn get_count(&self, contract: &dyn DappRegContract) {
        match contract.count().await {
            Ok(count) => self.set_count(count),
            Err(e) => tracing::error!(error = %e, "Store:getCount"),
        }
    }

    async fn get_fee(&self, contract: &dyn DappRegContract) {
        match contract.fee().await {
            Ok(fee) => self.set_fee(fee),
            Err(e) => tracing::error!(error = %e, "Store:getFee"),
        }
    }

    /// Id (hex) and owner of the app at `index`
    async fn load_entry(&self, contract: &dyn DappRegContract, index: u64) -> Option<(String, String)> {
        match contract.at(index).await {
            Ok((id, owner)) => Some((bytes_to_hex(&id), owner)),
            Err(e) => {
                tracing::error!(index, error = %e, "Store:loadEntry");
                None
            }
        }
    }

    async fn load_dapp(&self, contract: &dyn DappRegContract, index: usize, app_id: &str) {
        let (content_hash, image_hash, manifest_hash) = tokio::join!(
            self.load_meta(contract, app_id, MetaKey::Content),
            self.load_meta(contract, app_id, MetaKey::Image),
            self.load_meta(contract, app_id, MetaKey::Manifest),
        );

        let manifest = self.load_manifest(app_id, manifest_hash.as_deref()).await;

        self.set_app_info(
            index,
            AppInfo {
                content_hash,
                image_hash,
                manifest_hash,
                manifest,
            },
        );
    }

    async fn load_meta(&self, contract: &dyn DappRegContract, app_id: &str, key: MetaKey) -> Option<String> {
        match contract.meta(app_id, key).await {
            Ok(meta) => Some(bytes_to_bare_hex(&meta)),
            Err(e) => {
                tracing::error!(app_id, key = key.as_str(), error = %e, "Store:loadMeta");
                None
            }
        }
    }

    async fn load_manifest(&self, app_id: &str, manifest_hash: Option<&str>) -> Option<Manifest> {
        if let Some(builtin) = find_builtin(app_id) {
            return Some(builtin.clone());
        }

        let hash = manifest_hash.filter(|h| !h.is_empty())?;
        match self.content.fetch_manifest(hash).await {
            Ok(manifest) => Some(manifest),
            Err(e) => {
                tracing::error!(app_id, manifest_hash = hash, error = %e, "Store:loadManifest");
                None
            }
        }
    }
}
