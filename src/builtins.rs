//! Built-in app manifests bundled with the crate
//!
//! Apps listed here never hit the content endpoint.

use std::sync::OnceLock;

use crate::models::Manifest;

const BUILTIN_JSON: &str = include_str!("builtin.json");

static BUILTINS: OnceLock<Vec<Manifest>> = OnceLock::new();

/// The bundled table, parsed on first use
pub fn builtins() -> &'static [Manifest] {
    BUILTINS.get_or_init(|| match serde_json::from_str::<Vec<Manifest>>(BUILTIN_JSON) {
        Ok(list) => list,
        Err(e) => {
            tracing::error!(error = %e, "Bundled builtin.json is invalid");
            Vec::new()
        }
    })
}

/// Built-in manifest whose id equals `app_id`
pub fn find_builtin(app_id: &str) -> Option<&'static Manifest> {
    builtins()
        .iter()
        .find(|m| m.id.as_deref() == Some(app_id))
}
