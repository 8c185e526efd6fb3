//! Error types for the dance controller.

use serde::{Deserialize, Serialize};

#[derive(thiserror::Error, Debug, Clone, PartialEq, Serialize, Deserialize)]
#[non_exhaustive]
pub enum ControllerError {
    /// The pose list has no entries; there is nothing to pose.
    #[error("Pose sequence is empty")]
    EmptySequence,

    #[error("Pose name at index {index} is empty")]
    InvalidPoseName { index: usize },

    #[error("Pose '{name}' appears more than once")]
    DuplicatePose { name: String },

    /// Transition duration must be finite and non-negative.
    #[error("Invalid transition duration: {duration}")]
    InvalidDuration { duration: f32 },

    #[error("Unknown pose: {name}")]
    UnknownPose { name: String },

    #[error("Serialization error: {reason}")]
    Serialization { reason: String },
}

impl ControllerError {
    /// Error category for logging.
    #[inline]
    pub fn category(&self) -> &'static str {
        match self {
            Self::EmptySequence
            | Self::InvalidPoseName { .. }
            | Self::DuplicatePose { .. }
            | Self::InvalidDuration { .. } => "validation",
            Self::UnknownPose { .. } => "lookup",
            Self::Serialization { .. } => "serialization",
        }
    }
}

impl From<serde_json::Error> for ControllerError {
    fn from(err: serde_json::Error) -> Self {
        Self::Serialization {
            reason: err.to_string(),
        }
    }
}
