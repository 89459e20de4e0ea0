use serde::{Deserialize, Serialize};

/// Виртуальная сеть libvirt
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Network {
    pub uuid: String,
    pub name: String,
    #[serde(default)]
    pub state: String,
    #[serde(default)]
    pub bridge: String,
    #[serde(default)]
    pub address: String,
    #[serde(default)]
    pub netmask: String,
    /// nat, route, bridge или пусто для изолированной сети
    #[serde(default)]
    pub mode: String,
}

impl Network {
    pub fn cidr(&self) -> String {
        if self.address.is_empty() {
            return "-".to_string();
        }
        if self.netmask.is_empty() {
            return self.address.clone();
        }
        format!("{}/{}", self.address, self.netmask)
    }
}

/// Тело POST /api/network
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct CreateNetworkRequest {
    pub name: String,
    pub address: String,
    pub netmask: String,
    #[serde(default)]
    pub mode: String,
}
