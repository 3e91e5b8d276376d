//! # dappreg
//!
//! Discovers applications registered in the on-chain dapp registry and
//! resolves their metadata for display.
//!
//! ## Features
//! - Registry lookup and dappreg contract attachment
//! - Local account listing and ownership marking
//! - Per-app content, image and manifest hashes
//! - Manifest resolution from the built-in table or the content endpoint
//! - Reactive state with owned-first sorting
//! - Terminal views for the app list and verification status
//!
//! ## Architecture
//! - Collaborators (`rpc`) - supplied by the embedding application
//! - Network Layer (reqwest) - manifest fetches
//! - App Layer - store pipeline publishing state over a watch channel
//! - UI Layer (Ratatui) - stateless widgets over render snapshots

pub mod app;
pub mod builtins;
pub mod config;
pub mod constants;
pub mod error;
pub mod logging;
pub mod messages;
pub mod models;
pub mod network;
pub mod rpc;
pub mod ui;

// Re-export commonly used types
pub use app::{DappState, DappStore};
pub use config::Config;
pub use error::{ContentError, RpcError, RpcResult};
pub use messages::RenderState;
pub use models::{AccountInfo, AccountRecord, AppInfo, AppRecord, Manifest, MetaKey};
pub use network::{ContentClient, ManifestSource};
pub use rpc::{DappRegContract, ParityApi, RegistryContract};
pub use ui::{AppList, SendRequest, TxHash, VerificationStep};
