//! Controller configuration: the pose list and cross-fade settings.

use std::collections::HashSet;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::error::ControllerError;

pub const DEFAULT_TRANSITION_SECS: f32 = 0.5;

fn default_transition_duration() -> f32 {
    DEFAULT_TRANSITION_SECS
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ControllerConfig {
    /// Host state names, stepped through in order.
    pub pose_names: Vec<String>,
    /// Cross-fade length in seconds (wall time, not clip-normalized).
    #[serde(default = "default_transition_duration")]
    pub transition_duration: f32,
    /// Re-pose the blend target at its first frame once the cross-fade settles.
    #[serde(default)]
    pub snap_after_blend: bool,
}

impl Default for ControllerConfig {
    fn default() -> Self {
        Self {
            pose_names: Vec::new(),
            transition_duration: DEFAULT_TRANSITION_SECS,
            snap_after_blend: false,
        }
    }
}

impl ControllerConfig {
    pub fn new<I, S>(pose_names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            pose_names: pose_names.into_iter().map(Into::into).collect(),
            ..Self::default()
        }
    }

    /// Parse a JSON document and validate it.
    pub fn from_json(json: &str) -> Result<Self, ControllerError> {
        let cfg: Self = serde_json::from_str(json)?;
        cfg.validate()?;
        Ok(cfg)
    }

    pub fn validate(&self) -> Result<(), ControllerError> {
        if self.pose_names.is_empty() {
            return Err(ControllerError::EmptySequence);
        }

        let mut seen = HashSet::with_capacity(self.pose_names.len());
        for (index, name) in self.pose_names.iter().enumerate() {
            if name.trim().is_empty() {
                return Err(ControllerError::InvalidPoseName { index });
            }
            if !seen.insert(name.as_str()) {
                return Err(ControllerError::DuplicatePose { name: name.clone() });
            }
        }

        // Must also fit in a `Duration`.
        if self.transition_duration < 0.0
            || Duration::try_from_secs_f32(self.transition_duration).is_err()
        {
            return Err(ControllerError::InvalidDuration {
                duration: self.transition_duration,
            });
        }

        Ok(())
    }

    #[inline]
    pub fn transition(&self) -> Duration {
        Duration::try_from_secs_f32(self.transition_duration.max(0.0)).unwrap_or(Duration::MAX)
    }

    #[inline]
    pub fn with_transition_duration(mut self, seconds: f32) -> Self {
        self.transition_duration = seconds;
        self
    }

    #[inline]
    pub fn with_snap_after_blend(mut self, enabled: bool) -> Self {
        self.snap_after_blend = enabled;
        self
    }
}
