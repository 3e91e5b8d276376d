//! Network layer - manifest retrieval from the content endpoint

pub mod client;

pub use client::{ContentClient, ManifestSource};
