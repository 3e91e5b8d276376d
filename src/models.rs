use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::constants::PLACEHOLDER_NAME;

/// Metadata slot stored per app in the dapp registry
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum MetaKey {
    Content,
    Image,
    Manifest,
}

impl MetaKey {
    pub fn as_str(&self) -> &'static str {
        match self {
            MetaKey::Content => "CONTENT",
            MetaKey::Image => "IMG",
            MetaKey::Manifest => "MANIFEST",
        }
    }
}

/// Application descriptor, either bundled or fetched by content hash
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Manifest {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(default)]
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub author: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub visible: Option<bool>,
    /// Any other keys the manifest carries
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

/// A registered application
#[derive(Clone, Debug, PartialEq)]
pub struct AppRecord {
    /// `0x`-prefixed hex id
    pub id: String,
    pub owner: String,
    pub is_owner: bool,
    pub name: String,
    pub content_hash: Option<String>,
    pub image_hash: Option<String>,
    pub manifest_hash: Option<String>,
    pub manifest: Option<Manifest>,
}

impl AppRecord {
    /// Fresh record for a discovered registry entry, before metadata resolves
    pub fn new(id: impl Into<String>, owner: impl Into<String>, is_owner: bool) -> Self {
        AppRecord {
            id: id.into(),
            owner: owner.into(),
            is_owner,
            name: String::from(PLACEHOLDER_NAME),
            content_hash: None,
            image_hash: None,
            manifest_hash: None,
            manifest: None,
        }
    }

    /// Placeholder for an index whose lookup failed
    pub fn unresolved() -> Self {
        AppRecord::new("", "", false)
    }

    pub fn is_resolved(&self) -> bool {
        !self.id.is_empty()
    }

    /// Merge resolved metadata into the record
    pub fn apply(&mut self, info: AppInfo) {
        self.name = info
            .manifest
            .as_ref()
            .map(|m| m.name.clone())
            .filter(|name| !name.is_empty())
            .unwrap_or_else(|| String::from(PLACEHOLDER_NAME));
        self.content_hash = info.content_hash;
        self.image_hash = info.image_hash;
        self.manifest_hash = info.manifest_hash;
        self.manifest = info.manifest;
    }
}

/// Metadata resolved for one app
#[derive(Clone, Debug, Default, PartialEq)]
pub struct AppInfo {
    pub content_hash: Option<String>,
    pub image_hash: Option<String>,
    pub manifest_hash: Option<String>,
    pub manifest: Option<Manifest>,
}

/// Account entry as returned by the account listing, keyed by address
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct AccountInfo {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub uuid: Option<String>,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub meta: serde_json::Value,
}

/// A locally managed account
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct AccountRecord {
    pub address: String,
    pub uuid: String,
    pub name: String,
    pub meta: serde_json::Value,
}

impl AccountRecord {
    /// Keep only accounts backed by a local key file (those with a uuid)
    pub fn from_listing(listing: HashMap<String, AccountInfo>) -> Vec<AccountRecord> {
        let mut accounts: Vec<AccountRecord> = listing
            .into_iter()
            .filter_map(|(address, info)| {
                info.uuid.map(|uuid| AccountRecord {
                    address,
                    uuid,
                    name: info.name,
                    meta: info.meta,
                })
            })
            .collect();
        accounts.sort_by(|a, b| a.address.cmp(&b.address));
        accounts
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn manifest(name: &str) -> Manifest {
        Manifest {
            id: None,
            name: name.to_string(),
            description: None,
            author: None,
            version: None,
            url: None,
            visible: None,
            extra: serde_json::Map::new(),
        }
    }

    #[test]
    fn test_new_record_has_placeholder_name() {
        let app = AppRecord::new("0x01", "0xA", true);
        assert_eq!(app.name, "-");
        assert!(app.manifest.is_none());
        assert!(app.is_resolved());
        assert!(!AppRecord::unresolved().is_resolved());
    }

    #[test]
    fn test_apply_takes_manifest_name() {
        let mut app = AppRecord::new("0x01", "0xA", false);
        app.apply(AppInfo {
            content_hash: Some("aa".into()),
            image_hash: None,
            manifest_hash: Some("bb".into()),
            manifest: Some(manifest("Token Registry")),
        });
        assert_eq!(app.name, "Token Registry");
        assert_eq!(app.content_hash.as_deref(), Some("aa"));
        assert_eq!(app.manifest_hash.as_deref(), Some("bb"));
    }

    #[test]
    fn test_apply_without_manifest_keeps_placeholder() {
        let mut app = AppRecord::new("0x01", "0xA", false);
        app.apply(AppInfo::default());
        assert_eq!(app.name, "-");
    }

    #[test]
    fn test_apply_manifest_without_name_keeps_placeholder() {
        let mut app = AppRecord::new("0x01", "0xA", false);
        let nameless: Manifest = serde_json::from_str(r#"{"version":"1"}"#).unwrap();
        app.apply(AppInfo {
            manifest: Some(nameless),
            ..AppInfo::default()
        });
        assert_eq!(app.name, "-");
        assert!(app.manifest.is_some());
    }

    #[test]
    fn test_accounts_without_uuid_are_dropped() {
        let mut listing = HashMap::new();
        listing.insert(
            "0xA".to_string(),
            AccountInfo {
                uuid: Some("u-1".into()),
                name: "main".into(),
                meta: serde_json::Value::Null,
            },
        );
        listing.insert(
            "0xB".to_string(),
            AccountInfo {
                uuid: None,
                name: "watched".into(),
                meta: serde_json::Value::Null,
            },
        );

        let accounts = AccountRecord::from_listing(listing);
        assert_eq!(accounts.len(), 1);
        assert_eq!(accounts[0].address, "0xA");
        assert_eq!(accounts[0].uuid, "u-1");
        assert_eq!(accounts[0].name, "main");
    }

    #[test]
    fn test_manifest_keeps_unknown_keys() {
        let json = r#"{"name":"GAVcoin","iconUrl":"icon.png"}"#;
        let m: Manifest = serde_json::from_str(json).unwrap();
        assert_eq!(m.name, "GAVcoin");
        assert_eq!(m.extra.get("iconUrl").and_then(|v| v.as_str()), Some("icon.png"));
    }
}
