//! Blockchain collaborator interface
//!
//! The store never talks to a node directly. The embedding application
//! supplies a [`ParityApi`] that lists accounts, resolves the registry and
//! hands out contract handles whose calls are already decoded.

pub mod util;

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use num_bigint::BigUint;

use crate::error::RpcResult;
use crate::models::{AccountInfo, MetaKey};

/// Node-level calls plus contract instantiation
#[async_trait]
pub trait ParityApi: Send + Sync {
    /// Address of the on-chain registry contract
    async fn registry_address(&self) -> RpcResult<String>;

    /// All accounts known to the node, keyed by address
    async fn accounts_info(&self) -> RpcResult<HashMap<String, AccountInfo>>;

    /// Attach to the registry contract deployed at `address`
    fn registry(&self, address: &str) -> Arc<dyn RegistryContract>;

    /// Attach to the dapp registry contract deployed at `address`
    fn dapp_registry(&self, address: &str) -> Arc<dyn DappRegContract>;
}

/// Name/version directory of contract addresses
#[async_trait]
pub trait RegistryContract: Send + Sync {
    /// Address stored under `name_hash` (keccak of the name) and `key`
    async fn get_address(&self, name_hash: &str, key: &str) -> RpcResult<String>;
}

/// Table of registered applications
#[async_trait]
pub trait DappRegContract: Send + Sync {
    /// Number of registered apps
    async fn count(&self) -> RpcResult<u64>;

    /// Registration fee
    async fn fee(&self) -> RpcResult<BigUint>;

    /// Id bytes and owner address of the app at `index`
    async fn at(&self, index: u64) -> RpcResult<(Vec<u8>, String)>;

    /// Metadata bytes stored for `app_id` under `key`
    async fn meta(&self, app_id: &str, key: MetaKey) -> RpcResult<Vec<u8>>;
}
