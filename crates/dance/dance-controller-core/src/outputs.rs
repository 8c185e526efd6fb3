//! Events emitted while stepping the controller.
//!
//! Outputs are rebuilt on every `update`; adapters forward them to the host
//! (Bevy events, UI status lines).

use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[non_exhaustive]
pub enum ControllerEvent {
    Initialized {
        pose: String,
    },
    PlaybackStarted {
        pose: String,
    },
    PoseCut {
        index: usize,
        pose: String,
    },
    BlendStarted {
        index: usize,
        pose: String,
        duration: f32,
    },
    /// A pending blend was interrupted before it could pause playback.
    BlendCancelled {
        pose: String,
    },
    BlendSettled {
        pose: String,
    },
}

impl ControllerEvent {
    #[inline]
    pub fn name(&self) -> &'static str {
        match self {
            Self::Initialized { .. } => "initialized",
            Self::PlaybackStarted { .. } => "playback_started",
            Self::PoseCut { .. } => "pose_cut",
            Self::BlendStarted { .. } => "blend_started",
            Self::BlendCancelled { .. } => "blend_cancelled",
            Self::BlendSettled { .. } => "blend_settled",
        }
    }

    pub fn pose(&self) -> &str {
        match self {
            Self::Initialized { pose }
            | Self::PlaybackStarted { pose }
            | Self::PoseCut { pose, .. }
            | Self::BlendStarted { pose, .. }
            | Self::BlendCancelled { pose }
            | Self::BlendSettled { pose } => pose,
        }
    }
}

#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct Outputs {
    #[serde(default)]
    pub events: Vec<ControllerEvent>,
}

impl Outputs {
    #[inline]
    pub fn clear(&mut self) {
        self.events.clear();
    }

    #[inline]
    pub fn push_event(&mut self, event: ControllerEvent) {
        self.events.push(event);
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }
}
