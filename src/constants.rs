//! Application constants
//!
//! Centralized location for magic strings and configuration defaults.

/// Name shown for an app whose manifest could not be resolved
pub const PLACEHOLDER_NAME: &str = "-";

/// Name the dapp registry contract is registered under
pub const DEFAULT_REGISTRY_NAME: &str = "dappreg";

/// Version key paired with the registry name
pub const DEFAULT_REGISTRY_VERSION: &str = "A";

/// Base URL of the content endpoint serving manifests by hash
pub const DEFAULT_CONTENT_URL: &str = "http://127.0.0.1:8080";

/// Default HTTP timeout for manifest fetches
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Default log file name
pub const DEFAULT_LOG_FILE: &str = "dappreg.log";

/// Directory under the home directory holding the config file
pub const CONFIG_DIR: &str = ".dappreg";

/// Config file name inside [`CONFIG_DIR`]
pub const CONFIG_FILE: &str = "config.yaml";
