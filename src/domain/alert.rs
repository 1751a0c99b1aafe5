use serde::{Deserialize, Serialize};

/// Severity of a derived alert. `Alert` is the highest tier and is reserved
/// for blood pressure breaches and reported pain.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum AlertSeverity {
    Info,
    Warning,
    Alert,
}

impl AlertSeverity {
    pub fn as_str(&self) -> &'static str {
        match self {
            AlertSeverity::Info => "info",
            AlertSeverity::Warning => "warning",
            AlertSeverity::Alert => "alert",
        }
    }
}

impl TryFrom<&str> for AlertSeverity {
    type Error = ();

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        match value.trim().to_lowercase().as_str() {
            "info" => Ok(AlertSeverity::Info),
            "warning" => Ok(AlertSeverity::Warning),
            "alert" => Ok(AlertSeverity::Alert),
            _ => Err(()),
        }
    }
}

/// A computed, not-yet-persisted alert. Evaluators emit drafts; the store
/// turns them into rows.
#[derive(Debug, Clone, PartialEq)]
pub struct AlertDraft {
    pub severity: AlertSeverity,
    pub title: String,
    pub message: String,
    pub metric: &'static str,
    pub value: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_severity_round_trip() {
        for severity in [AlertSeverity::Info, AlertSeverity::Warning, AlertSeverity::Alert] {
            assert_eq!(AlertSeverity::try_from(severity.as_str()), Ok(severity));
        }
        assert_eq!(AlertSeverity::try_from(" WARNING "), Ok(AlertSeverity::Warning));
        assert!(AlertSeverity::try_from("critical").is_err());
    }
}
