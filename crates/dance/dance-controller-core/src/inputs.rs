//! Per-frame input edges.
//!
//! Adapters read their key bindings once per frame and hand the pressed-this-frame
//! edges to `DanceController::update`. Edges are handled in field order.

use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ControlInputs {
    /// Resume playback, interrupting any pending blend.
    #[serde(default)]
    pub start: bool,
    /// Hard cut to the next pose.
    #[serde(default)]
    pub cut: bool,
    /// Cross-fade to the next pose, then pause.
    #[serde(default)]
    pub blend: bool,
}

impl ControlInputs {
    pub const fn none() -> Self {
        Self {
            start: false,
            cut: false,
            blend: false,
        }
    }

    pub const fn start() -> Self {
        Self {
            start: true,
            ..Self::none()
        }
    }

    pub const fn cut() -> Self {
        Self {
            cut: true,
            ..Self::none()
        }
    }

    pub const fn blend() -> Self {
        Self {
            blend: true,
            ..Self::none()
        }
    }

    #[inline]
    pub fn any(&self) -> bool {
        self.start || self.cut || self.blend
    }
}
