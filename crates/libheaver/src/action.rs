//! Lifecycle actions understood by `heaver` control invocations

use std::convert::TryFrom;
use std::fmt::Display;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Action applied to an existing container
#[derive(Serialize, Deserialize, Debug, Copy, Clone, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum Action {
    Start,
    Stop,
    Destroy,
}

#[derive(Debug, thiserror::Error)]
pub enum ActionError {
    #[error("unknown action: {0}")]
    Unknown(String),
}

impl Action {
    /// heaver flag selecting the action. Each flag is immediately followed by the container name.
    pub fn flag(&self) -> &'static str {
        match self {
            Action::Start => "-Sn",
            Action::Stop => "-Tn",
            Action::Destroy => "-Dn",
        }
    }

    /// Word heaver prints once the action is done
    pub fn confirmation(&self) -> &'static str {
        match self {
            Action::Start => "started",
            Action::Stop => "stopped",
            Action::Destroy => "destroyed",
        }
    }
}

impl Display for Action {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let print = match *self {
            Self::Start => "start",
            Self::Stop => "stop",
            Self::Destroy => "destroy",
        };

        write!(f, "{print}")
    }
}

impl TryFrom<&str> for Action {
    type Error = ActionError;

    fn try_from(s: &str) -> Result<Self, Self::Error> {
        match s.to_ascii_lowercase().as_str() {
            "start" => Ok(Action::Start),
            "stop" => Ok(Action::Stop),
            "destroy" => Ok(Action::Destroy),
            _ => Err(ActionError::Unknown(s.to_string())),
        }
    }
}

impl FromStr for Action {
    type Err = ActionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Action::try_from(s)
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    #[test]
    fn test_conversion_from_string() {
        let mut test_sets = HashMap::new();
        test_sets.insert(Action::Start, vec!["start", "START", "Start"]);
        test_sets.insert(Action::Stop, vec!["stop", "STOP"]);
        test_sets.insert(Action::Destroy, vec!["destroy", "Destroy"]);
        for (action, strings) in test_sets {
            for s in strings {
                assert_eq!(action, Action::try_from(s).unwrap());
            }
        }
    }

    #[test]
    fn test_conversion_from_string_should_be_failed() {
        assert!(Action::try_from("restart").is_err());
        assert!(Action::try_from("").is_err());
        assert!("kill".parse::<Action>().is_err());
    }

    #[test]
    fn test_flags_and_confirmations_are_distinct() {
        let actions = [Action::Start, Action::Stop, Action::Destroy];
        let flags: Vec<_> = actions.iter().map(Action::flag).collect();
        assert_eq!(flags, vec!["-Sn", "-Tn", "-Dn"]);
        let words: Vec<_> = actions.iter().map(Action::confirmation).collect();
        assert_eq!(words, vec!["started", "stopped", "destroyed"]);
    }

    #[test]
    fn test_display_round_trips() {
        for action in [Action::Start, Action::Stop, Action::Destroy] {
            assert_eq!(action, action.to_string().parse().unwrap());
        }
    }
}
