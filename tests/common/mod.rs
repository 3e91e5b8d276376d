//! In-memory collaborators for driving the store without a node

#![allow(dead_code)]

use std::collections::HashMap;
use std::sync::{Arc, Mutex, OnceLock};

use async_trait::async_trait;
use num_bigint::BigUint;
use tokio::sync::watch;

use dappreg::{
    AccountInfo, ContentError, DappRegContract, DappState, Manifest, ManifestSource, MetaKey,
    ParityApi, RegistryContract, RpcError, RpcResult,
};

/// Registry mock: answers one address and records lookups
pub struct TestRegistry {
    address: Option<String>,
    pub lookups: Mutex<Vec<(String, String)>>,
}

#[async_trait]
impl RegistryContract for TestRegistry {
    async fn get_address(&self, name_hash: &str, key: &str) -> RpcResult<String> {
        self.lookups
            .lock()
            .unwrap()
            .push((name_hash.to_string(), key.to_string()));
        self.address
            .clone()
            .ok_or_else(|| RpcError::call("getAddress", "not registered"))
    }
}

/// Dapp registry mock
#[derive(Default)]
pub struct TestDappReg {
    pub count: Option<u64>,
    pub fee: Option<BigUint>,
    /// `None` entries fail their `at` call
    pub entries: Vec<Option<(Vec<u8>, String)>>,
    pub meta: HashMap<(String, MetaKey), Vec<u8>>,
    pub meta_calls: Mutex<Vec<(String, MetaKey)>>,
}

impl TestDappReg {
    pub fn new() -> Self {
        TestDappReg {
            count: Some(0),
            fee: Some(BigUint::from(0u32)),
            ..TestDappReg::default()
        }
    }

    /// Register an app at the next index with all three metadata slots
    pub fn with_app(mut self, id: u8, owner: &str, manifest_hash: &[u8]) -> Self {
        let id_bytes = app_id_bytes(id);
        let id_hex = app_id(id);
        self.entries.push(Some((id_bytes, owner.to_string())));
        self.meta.insert((id_hex.clone(), MetaKey::Content), vec![0xc0, id]);
        self.meta.insert((id_hex.clone(), MetaKey::Image), vec![0x1a, id]);
        self.meta.insert((id_hex, MetaKey::Manifest), manifest_hash.to_vec());
        self.count = Some(self.entries.len() as u64);
        self
    }

    pub fn with_failing_entry(mut self) -> Self {
        self.entries.push(None);
        self.count = Some(self.entries.len() as u64);
        self
    }
}

#[async_trait]
impl DappRegContract for TestDappReg {
    async fn count(&self) -> RpcResult<u64> {
        self.count.ok_or_else(|| RpcError::call("count", "reverted"))
    }

    async fn fee(&self) -> RpcResult<BigUint> {
        self.fee
            .clone()
            .ok_or_else(|| RpcError::call("fee", "reverted"))
    }

    async fn at(&self, index: u64) -> RpcResult<(Vec<u8>, String)> {
        self.entries
            .get(index as usize)
            .cloned()
            .flatten()
            .ok_or_else(|| RpcError::call("at", format!("no entry at {}", index)))
    }

    async fn meta(&self, app_id: &str, key: MetaKey) -> RpcResult<Vec<u8>> {
        self.meta_calls
            .lock()
            .unwrap()
            .push((app_id.to_string(), key));
        self.meta
            .get(&(app_id.to_string(), key))
            .cloned()
            .ok_or_else(|| RpcError::call("meta", "reverted"))
    }
}

/// Node mock
pub struct TestParity {
    pub registry_address: Option<String>,
    pub accounts: Option<HashMap<String, AccountInfo>>,
    pub registry: Arc<TestRegistry>,
    pub dappreg: Arc<TestDappReg>,
}

impl TestParity {
    pub fn new(accounts: &[&str], dappreg: TestDappReg) -> Self {
        let accounts = accounts
            .iter()
            .map(|address| {
                (
                    address.to_string(),
                    AccountInfo {
                        uuid: Some(format!("uuid-{}", address)),
                        name: address.to_string(),
                        meta: serde_json::Value::Null,
                    },
                )
            })
            .collect();

        TestParity {
            registry_address: Some(String::from("0x0000000000000000000000000000000000000001")),
            accounts: Some(accounts),
            registry: Arc::new(TestRegistry {
                address: Some(String::from("0x0000000000000000000000000000000000000002")),
                lookups: Mutex::new(Vec::new()),
            }),
            dappreg: Arc::new(dappreg),
        }
    }

    pub fn without_dappreg(mut self) -> Self {
        self.registry = Arc::new(TestRegistry {
            address: None,
            lookups: Mutex::new(Vec::new()),
        });
        self
    }
}

#[async_trait]
impl ParityApi for TestParity {
    async fn registry_address(&self) -> RpcResult<String> {
        self.registry_address
            .clone()
            .ok_or_else(|| RpcError::Transport(String::from("connection refused")))
    }

    async fn accounts_info(&self) -> RpcResult<HashMap<String, AccountInfo>> {
        self.accounts
            .clone()
            .ok_or_else(|| RpcError::call("parity_allAccountsInfo", "locked"))
    }

    fn registry(&self, _address: &str) -> Arc<dyn RegistryContract> {
        self.registry.clone()
    }

    fn dapp_registry(&self, _address: &str) -> Arc<dyn DappRegContract> {
        self.dappreg.clone()
    }
}

/// Content endpoint mock keyed by manifest hash
#[derive(Default)]
pub struct TestContent {
    pub manifests: HashMap<String, Manifest>,
    pub fetches: Mutex<Vec<String>>,
    /// Loading flag observed at each fetch
    pub loading_seen: Mutex<Vec<bool>>,
    pub observer: OnceLock<watch::Receiver<DappState>>,
}

impl TestContent {
    pub fn with_manifest(mut self, hash: &str, name: &str) -> Self {
        self.manifests.insert(hash.to_string(), manifest(name));
        self
    }

    pub fn fetch_count(&self) -> usize {
        self.fetches.lock().unwrap().len()
    }
}

#[async_trait]
impl ManifestSource for TestContent {
    async fn fetch_manifest(&self, manifest_hash: &str) -> Result<Manifest, ContentError> {
        self.fetches.lock().unwrap().push(manifest_hash.to_string());
        if let Some(rx) = self.observer.get() {
            let loading = rx.borrow().loading;
            self.loading_seen.lock().unwrap().push(loading);
        }
        tokio::task::yield_now().await;
        self.manifests
            .get(manifest_hash)
            .cloned()
            .ok_or(ContentError::Status(404))
    }
}

pub fn manifest(name: &str) -> Manifest {
    serde_json::from_value(serde_json::json!({ "name": name })).unwrap()
}

pub fn app_id_bytes(id: u8) -> Vec<u8> {
    let mut bytes = vec![0u8; 32];
    bytes[31] = id;
    bytes
}

pub fn app_id(id: u8) -> String {
    format!("0x{}", hex::encode(app_id_bytes(id)))
}
