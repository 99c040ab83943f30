//! Status of a container as last reported by heaver
use std::fmt::Display;

use serde::{Deserialize, Serialize};

/// Indicates status of the container
#[derive(Serialize, Deserialize, Debug, Copy, Clone, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum ContainerStatus {
    // heaver finished the create operation
    Created,
    // The container is up
    Running,
    // The container exists but is not running
    Stopped,
    // The container has been removed
    Destroyed,
    // heaver reported something we could not interpret
    #[default]
    Error,
}

impl ContainerStatus {
    /// Maps a status word from the container listing. Unknown words never
    /// become a success state.
    pub fn from_listing(word: &str) -> Self {
        match word {
            "created" => ContainerStatus::Created,
            "running" => ContainerStatus::Running,
            "stopped" => ContainerStatus::Stopped,
            "destroyed" => ContainerStatus::Destroyed,
            _ => ContainerStatus::Error,
        }
    }
}

impl Display for ContainerStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let print = match *self {
            Self::Created => "created",
            Self::Running => "running",
            Self::Stopped => "stopped",
            Self::Destroyed => "destroyed",
            Self::Error => "error",
        };

        write!(f, "{print}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_listing() {
        assert_eq!(ContainerStatus::from_listing("running"), ContainerStatus::Running);
        assert_eq!(ContainerStatus::from_listing("stopped"), ContainerStatus::Stopped);
        assert_eq!(ContainerStatus::from_listing("created"), ContainerStatus::Created);
        assert_eq!(ContainerStatus::from_listing("destroyed"), ContainerStatus::Destroyed);
    }

    #[test]
    fn test_unknown_word_is_error() {
        for word in ["", "frozen", "Running", "up"] {
            assert_eq!(ContainerStatus::from_listing(word), ContainerStatus::Error);
        }
    }

    #[test]
    fn test_display_matches_serde() {
        for status in [
            ContainerStatus::Created,
            ContainerStatus::Running,
            ContainerStatus::Stopped,
            ContainerStatus::Destroyed,
            ContainerStatus::Error,
        ] {
            let json = serde_json::to_string(&status).unwrap();
            assert_eq!(json, format!("\"{status}\""));
        }
    }
}
