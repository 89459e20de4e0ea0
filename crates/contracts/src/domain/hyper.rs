use serde::{Deserialize, Serialize};

/// Сводка по гипервизору для навигации и домашней панели
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct HyperInfo {
    /// URI подключения libvirt, например `qemu+ssh://root@10.0.0.2/system`
    pub name: String,
    #[serde(default)]
    pub host: String,
    #[serde(default)]
    pub cpu_num: u32,
    #[serde(default)]
    pub cpu_model: String,
    /// Доля простоя CPU в промилле, 1000 = полностью свободен
    #[serde(default = "idle_default")]
    pub cpu_idle: u64,
    #[serde(default)]
    pub mem_total: u64,
    #[serde(default)]
    pub mem_free: u64,
    #[serde(default)]
    pub mem_cached: u64,
}

fn idle_default() -> u64 {
    1000
}

impl HyperInfo {
    /// Хост для отображения: из ответа сервера или разобранный из URI
    pub fn display_host(&self) -> String {
        if !self.host.is_empty() {
            return self.host.clone();
        }
        HyperUri::parse(&self.name).address
    }

    /// Загрузка CPU в процентах
    pub fn cpu_usage_percent(&self) -> f64 {
        let idle = self.cpu_idle.min(1000);
        (1000 - idle) as f64 / 10.0
    }

    pub fn mem_used(&self) -> u64 {
        self.mem_total
            .saturating_sub(self.mem_free)
            .saturating_sub(self.mem_cached)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct UserInfo {
    pub name: String,
}

/// Ответ GET /api/hyper
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct HyperSummary {
    pub hyper: HyperInfo,
    #[serde(default)]
    pub user: UserInfo,
}

/// Разобранный URI подключения к гипервизору
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HyperUri {
    pub schema: String,
    pub address: String,
    pub path: String,
}

impl HyperUri {
    pub fn parse(name: &str) -> Self {
        let schema = name.split(':').next().unwrap_or_default().to_string();
        let (mut address, path) = match schema.as_str() {
            "qemu+ssh" => {
                let (address, path) = split_remote(name);
                let address = match address.split_once('@') {
                    Some((_, host)) => host.to_string(),
                    None => address,
                };
                (address, path)
            }
            "qemu+tcp" | "qemu+tls" => split_remote(name),
            _ => ("localhost".to_string(), "system".to_string()),
        };
        if let Some((host, _port)) = address.split_once(':') {
            address = host.to_string();
        }
        Self {
            schema,
            address,
            path,
        }
    }

    pub fn is_local(&self) -> bool {
        self.address == "localhost"
    }
}

fn split_remote(name: &str) -> (String, String) {
    let Some((_, rest)) = name.split_once("://") else {
        return (String::new(), String::new());
    };
    match rest.split_once('/') {
        Some((address, path)) => (address.to_string(), path.to_string()),
        None => (rest.to_string(), String::new()),
    }
}
