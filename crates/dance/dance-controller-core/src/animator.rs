//! Host animation seam.
//!
//! The controller never evaluates animation itself. Adapters (Bevy, tests)
//! implement [`Animator`] over whatever plays clips on their side.

use std::time::Duration;

pub trait Animator {
    /// Snap to `pose` at its first frame on the base layer.
    fn play(&mut self, pose: &str);

    /// Fixed-time cross-fade from whatever is playing into `pose`.
    fn cross_fade(&mut self, pose: &str, duration: Duration);

    /// `true` maps to normal playback speed, `false` freezes the pose.
    fn set_running(&mut self, running: bool);
}

#[derive(Clone, Debug, PartialEq)]
pub enum AnimatorCall {
    Play(String),
    CrossFade(String, Duration),
    SetRunning(bool),
}

/// Animator that only records what it was asked to do.
#[derive(Clone, Debug, Default)]
pub struct RecordingAnimator {
    pub calls: Vec<AnimatorCall>,
}

impl RecordingAnimator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Drain recorded calls.
    pub fn take(&mut self) -> Vec<AnimatorCall> {
        std::mem::take(&mut self.calls)
    }

    /// Last value passed to `set_running`, if any.
    pub fn running(&self) -> Option<bool> {
        self.calls.iter().rev().find_map(|c| match c {
            AnimatorCall::SetRunning(r) => Some(*r),
            _ => None,
        })
    }
}

impl Animator for RecordingAnimator {
    fn play(&mut self, pose: &str) {
        self.calls.push(AnimatorCall::Play(pose.to_string()));
    }

    fn cross_fade(&mut self, pose: &str, duration: Duration) {
        self.calls
            .push(AnimatorCall::CrossFade(pose.to_string(), duration));
    }

    fn set_running(&mut self, running: bool) {
        self.calls.push(AnimatorCall::SetRunning(running));
    }
}
