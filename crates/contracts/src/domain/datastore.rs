use serde::{Deserialize, Serialize};

/// Пул хранения (datastore). Идентифицируется именем.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DataStore {
    pub name: String,
    #[serde(rename = "type", default = "default_kind")]
    pub kind: String,
    #[serde(default)]
    pub path: String,
    #[serde(default)]
    pub capacity: u64,
    #[serde(default)]
    pub allocation: u64,
    #[serde(default)]
    pub available: u64,
}

fn default_kind() -> String {
    "dir".to_string()
}

impl DataStore {
    /// Пулы, созданные под диски конкретной машины, скрыты из списка
    pub fn is_domain_pool(&self) -> bool {
        is_domain_pool(&self.name)
    }
}

/// Тело POST /api/datastore
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreateDataStoreRequest {
    pub name: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub path: String,
}

impl CreateDataStoreRequest {
    pub fn dir(name: impl Into<String>, path: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            kind: default_kind(),
            path: path.into(),
        }
    }
}

pub fn to_domain_pool(domain: &str) -> String {
    format!(".{}", domain)
}

pub fn is_domain_pool(name: &str) -> bool {
    name.starts_with('.')
}
