use serde::{Deserialize, Serialize};

// ============================================================================
// Enums
// ============================================================================

/// Состояние гостевой машины, как его отдаёт libvirt
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum InstanceState {
    Running,
    Blocked,
    Paused,
    Shutdown,
    Shutoff,
    Crashed,
    Suspended,
    #[default]
    #[serde(other)]
    Unknown,
}

impl InstanceState {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Running => "running",
            Self::Blocked => "blocked",
            Self::Paused => "paused",
            Self::Shutdown => "shutdown",
            Self::Shutoff => "shutoff",
            Self::Crashed => "crashed",
            Self::Suspended => "suspended",
            Self::Unknown => "unknown",
        }
    }

    pub fn is_active(&self) -> bool {
        matches!(self, Self::Running | Self::Blocked | Self::Paused)
    }
}

/// Действие над выбранными машинами
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InstanceAction {
    Console,
    Start,
    Shutdown,
    Reset,
    Suspend,
    Resume,
    Destroy,
    Remove,
}

impl InstanceAction {
    /// Имя действия в теле запроса
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Console => "console",
            Self::Start => "start",
            Self::Shutdown => "shutdown",
            Self::Reset => "reset",
            Self::Suspend => "suspend",
            Self::Resume => "resume",
            Self::Destroy => "destroy",
            Self::Remove => "remove",
        }
    }

    /// Человекочитаемое название для кнопок
    pub fn display_name(&self) -> &'static str {
        match self {
            Self::Console => "Console",
            Self::Start => "Start",
            Self::Shutdown => "Shutdown",
            Self::Reset => "Reset",
            Self::Suspend => "Suspend",
            Self::Resume => "Resume",
            Self::Destroy => "Destroy",
            Self::Remove => "Remove",
        }
    }

    /// Действия выпадающего меню "More"
    pub fn more() -> Vec<InstanceAction> {
        vec![
            Self::Start,
            Self::Shutdown,
            Self::Reset,
            Self::Suspend,
            Self::Resume,
            Self::Destroy,
            Self::Remove,
        ]
    }
}

// ============================================================================
// DTO
// ============================================================================

/// Гостевая машина в списке
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Instance {
    pub uuid: String,
    pub name: String,
    #[serde(default)]
    pub state: InstanceState,
    #[serde(default)]
    pub max_cpu: u32,
    /// Память в байтах
    #[serde(default)]
    pub max_mem: u64,
    #[serde(default)]
    pub cpu_time: u64,
    #[serde(default)]
    pub vnc: Option<String>,
}

/// Тело PUT /api/instance/{uuid}
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InstanceActionRequest {
    pub action: InstanceAction,
}

/// Тело POST /api/instance
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct CreateInstanceRequest {
    pub name: String,
    pub cpu: u32,
    /// Память в мегабайтах
    pub memory: u64,
    pub disk_size: u64,
    #[serde(default)]
    pub iso_file: Option<String>,
    #[serde(default)]
    pub datastore: Option<String>,
    #[serde(default)]
    pub network: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_action_wire_name() {
        let body = serde_json::to_string(&InstanceActionRequest {
            action: InstanceAction::Shutdown,
        })
        .unwrap();
        assert_eq!(body, r#"{"action":"shutdown"}"#);
        assert_eq!(InstanceAction::Shutdown.as_str(), "shutdown");
    }

    #[test]
    fn test_unknown_state_falls_back() {
        let json = r#"{"uuid":"a","name":"vm","state":"pmsuspended"}"#;
        let instance: Instance = serde_json::from_str(json).unwrap();
        assert_eq!(instance.state, InstanceState::Unknown);
        assert_eq!(instance.max_cpu, 0);
        assert!(instance.vnc.is_none());
    }

    #[test]
    fn test_more_excludes_console() {
        assert!(!InstanceAction::more().contains(&InstanceAction::Console));
        assert_eq!(InstanceAction::more().len(), 7);
    }
}
