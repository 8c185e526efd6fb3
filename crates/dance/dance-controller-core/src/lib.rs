//! Dance Controller Core (engine-agnostic)
//!
//! Steps a character through an ordered list of poses. Two switch modes are
//! offered (hard cut, timed cross-fade that pauses once settled) plus a manual
//! play gate. Playback itself is delegated to the host through [`Animator`].

pub mod animator;
pub mod config;
pub mod controller;
pub mod error;
pub mod inputs;
pub mod outputs;
pub mod sequence;
pub mod transition;

// Re-exports for adapters
pub use animator::{Animator, AnimatorCall, RecordingAnimator};
pub use config::ControllerConfig;
pub use controller::DanceController;
pub use error::ControllerError;
pub use inputs::ControlInputs;
pub use outputs::{ControllerEvent, Outputs};
pub use sequence::PoseSequence;
pub use transition::{SettleTimer, SwitchMode};

pub type Result<T> = core::result::Result<T, ControllerError>;
