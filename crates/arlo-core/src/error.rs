// ── Workflow error types ──
//
// Consumers never see HTTP status codes or JSON parse failures directly;
// transport-layer errors are folded into these variants with the failing
// stage and entity attached.

use thiserror::Error;

/// Per-entity failure inside a batch fan-out.
///
/// Each variant names the entity so an aggregate report can say which
/// device or friend failed and why.
#[derive(Debug, Error)]
pub enum UnitError {
    #[error("device ({device_id}) failed for the following reason: ({reason})")]
    DeviceAction { device_id: String, reason: String },

    #[error("friend ({friend_id}) failed to grant access for the following reason: ({reason})")]
    Grant { friend_id: String, reason: String },

    #[error("friend ({friend_id}) failed to revoke access for the following reason: ({reason})")]
    Revoke { friend_id: String, reason: String },
}

impl UnitError {
    /// The id of the device or friend this failure belongs to.
    pub fn entity_id(&self) -> &str {
        match self {
            Self::DeviceAction { device_id, .. } => device_id,
            Self::Grant { friend_id, .. } | Self::Revoke { friend_id, .. } => friend_id,
        }
    }
}

/// Unified error type for the core workflows.
#[derive(Debug, Error)]
pub enum CoreError {
    /// Login failed. Aborts the workflow before anything is fetched.
    #[error("Authentication failed: {message}")]
    Auth { message: String },

    /// A resource listing failed. Aborts the workflow before any
    /// fan-out is attempted.
    #[error("Failed to fetch {resource}: {message}")]
    Fetch {
        resource: &'static str,
        message: String,
    },

    /// One or more fan-out units failed. Every unit ran to completion
    /// before this was raised; the failures are the complete set.
    #[error("{} action(s) failed: {}", .failures.len(), join_failures(.failures))]
    Batch { failures: Vec<UnitError> },

    #[error("Internal error: {0}")]
    Internal(String),
}

impl CoreError {
    pub(crate) fn auth(err: &arlo_api::Error) -> Self {
        Self::Auth {
            message: err.to_string(),
        }
    }

    pub(crate) fn fetch(resource: &'static str, err: &arlo_api::Error) -> Self {
        Self::Fetch {
            resource,
            message: err.to_string(),
        }
    }
}

fn join_failures(failures: &[UnitError]) -> String {
    failures
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn batch_display_names_every_entity() {
        let err = CoreError::Batch {
            failures: vec![
                UnitError::DeviceAction {
                    device_id: "CAM1".into(),
                    reason: "boom".into(),
                },
                UnitError::Grant {
                    friend_id: "f1".into(),
                    reason: "rejected".into(),
                },
            ],
        };

        let rendered = err.to_string();
        assert!(rendered.starts_with("2 action(s) failed"));
        assert!(rendered.contains("CAM1"));
        assert!(rendered.contains("f1"));
    }
}
