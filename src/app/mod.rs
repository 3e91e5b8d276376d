//! App layer - reactive dapp state and the pipeline that fills it
//!
//! The store owns the state, runs the load pass against the collaborators
//! and publishes every change to subscribers.

pub mod state;
pub mod store;

pub use state::DappState;
pub use store::DappStore;
