//! DanceController: owns the pose cursor, the play gate and the pending settle.
//!
//! Per frame: settle timer first, then the start, cut and blend edges in that order.

use std::time::Duration;

use log::{debug, info};

use crate::animator::Animator;
use crate::config::ControllerConfig;
use crate::error::ControllerError;
use crate::inputs::ControlInputs;
use crate::outputs::{ControllerEvent, Outputs};
use crate::sequence::PoseSequence;
use crate::transition::{SettleTimer, SwitchMode};

#[derive(Debug, Clone)]
pub struct DanceController {
    cfg: ControllerConfig,
    sequence: PoseSequence,
    running: bool,
    initialized: bool,
    pending: Option<SettleTimer>,
    outputs: Outputs,
}

fn dt_duration(dt: f32) -> Duration {
    if dt > 0.0 {
        // NaN fails the comparison; huge deltas saturate.
        Duration::try_from_secs_f32(dt).unwrap_or(Duration::MAX)
    } else {
        Duration::ZERO
    }
}

impl DanceController {
    pub fn new(cfg: ControllerConfig) -> Result<Self, ControllerError> {
        cfg.validate()?;
        let sequence = PoseSequence::new(cfg.pose_names.clone())?;
        Ok(Self {
            cfg,
            sequence,
            running: false,
            initialized: false,
            pending: None,
            outputs: Outputs::default(),
        })
    }

    pub fn from_json(json: &str) -> Result<Self, ControllerError> {
        Self::new(ControllerConfig::from_json(json)?)
    }

    #[inline]
    pub fn config(&self) -> &ControllerConfig {
        &self.cfg
    }

    #[inline]
    pub fn current_pose(&self) -> &str {
        self.sequence.current()
    }

    #[inline]
    pub fn current_index(&self) -> usize {
        self.sequence.index()
    }

    #[inline]
    pub fn sequence(&self) -> &PoseSequence {
        &self.sequence
    }

    #[inline]
    pub fn is_running(&self) -> bool {
        self.running
    }

    #[inline]
    pub fn is_initialized(&self) -> bool {
        self.initialized
    }

    #[inline]
    pub fn pending_transition(&self) -> Option<&SettleTimer> {
        self.pending.as_ref()
    }

    #[inline]
    pub fn outputs(&self) -> &Outputs {
        &self.outputs
    }

    /// Freeze the host and pose the first entry. Safe to call more than once.
    pub fn initialize<A: Animator>(&mut self, animator: &mut A) -> &Outputs {
        self.outputs.clear();
        self.initialize_inner(animator);
        &self.outputs
    }

    fn initialize_inner<A: Animator>(&mut self, animator: &mut A) {
        self.pending = None;
        self.sequence.reset();
        self.set_running(animator, false);
        animator.play(self.sequence.current());
        self.set_running(animator, false);
        self.initialized = true;
        info!("dance: posed '{}' (paused)", self.sequence.current());
        self.outputs.push_event(ControllerEvent::Initialized {
            pose: self.sequence.current().to_string(),
        });
    }

    /// Step one frame. `dt` is the host frame delta in seconds.
    pub fn update<A: Animator>(
        &mut self,
        dt: f32,
        inputs: ControlInputs,
        animator: &mut A,
    ) -> &Outputs {
        self.outputs.clear();
        self.ensure_initialized(animator);
        self.tick_pending(dt_duration(dt), animator);

        if !inputs.any() {
            return &self.outputs;
        }
        if inputs.start {
            self.start_inner(animator);
        }
        if inputs.cut {
            self.switch_inner(SwitchMode::Instant, animator);
        }
        if inputs.blend {
            self.switch_inner(SwitchMode::Smooth, animator);
        }

        &self.outputs
    }

    /// Resume playback on the current pose, interrupting any pending settle.
    pub fn start<A: Animator>(&mut self, animator: &mut A) -> &Outputs {
        self.outputs.clear();
        self.ensure_initialized(animator);
        self.start_inner(animator);
        &self.outputs
    }

    /// Advance to the next pose using `mode`.
    pub fn switch<A: Animator>(&mut self, mode: SwitchMode, animator: &mut A) -> &Outputs {
        self.outputs.clear();
        self.ensure_initialized(animator);
        self.switch_inner(mode, animator);
        &self.outputs
    }

    /// Hard cut to a named pose, moving the cursor there.
    pub fn jump_to<A: Animator>(
        &mut self,
        name: &str,
        animator: &mut A,
    ) -> Result<&Outputs, ControllerError> {
        let index = self
            .sequence
            .position(name)
            .ok_or_else(|| ControllerError::UnknownPose {
                name: name.to_string(),
            })?;
        self.outputs.clear();
        self.ensure_initialized(animator);
        self.sequence.set_index(index);
        self.cancel_pending();
        self.cut_to_current(animator);
        Ok(&self.outputs)
    }

    fn ensure_initialized<A: Animator>(&mut self, animator: &mut A) {
        if !self.initialized {
            self.initialize_inner(animator);
        }
    }

    fn start_inner<A: Animator>(&mut self, animator: &mut A) {
        self.cancel_pending();
        self.set_running(animator, true);
        info!("dance: playing '{}'", self.sequence.current());
        self.outputs.push_event(ControllerEvent::PlaybackStarted {
            pose: self.sequence.current().to_string(),
        });
    }

    fn switch_inner<A: Animator>(&mut self, mode: SwitchMode, animator: &mut A) {
        self.sequence.advance();
        self.cancel_pending();
        debug!(
            "dance: {} switch to #{}",
            mode.name(),
            self.sequence.index()
        );

        match mode {
            SwitchMode::Instant => self.cut_to_current(animator),
            SwitchMode::Smooth => {
                let target = self.sequence.current().to_string();
                let duration = self.cfg.transition();
                // The host only advances a cross-fade while time flows.
                self.set_running(animator, true);
                animator.cross_fade(&target, duration);
                info!(
                    "dance: blending to '{}' over {:.3}s",
                    target,
                    duration.as_secs_f32()
                );
                self.outputs.push_event(ControllerEvent::BlendStarted {
                    index: self.sequence.index(),
                    pose: target.clone(),
                    duration: duration.as_secs_f32(),
                });
                self.pending = Some(SettleTimer::new(target, duration));
            }
        }
    }

    fn cut_to_current<A: Animator>(&mut self, animator: &mut A) {
        let pose = self.sequence.current().to_string();
        animator.play(&pose);
        self.set_running(animator, false);
        info!("dance: cut to '{}' (paused)", pose);
        self.outputs.push_event(ControllerEvent::PoseCut {
            index: self.sequence.index(),
            pose,
        });
    }

    fn tick_pending<A: Animator>(&mut self, dt: Duration, animator: &mut A) {
        let finished = match self.pending.as_mut() {
            Some(timer) => timer.tick(dt),
            None => false,
        };
        if !finished {
            return;
        }
        if let Some(timer) = self.pending.take() {
            self.set_running(animator, false);
            if self.cfg.snap_after_blend {
                animator.play(timer.target());
            }
            info!(
                "dance: blend to '{}' settled after {:.3}s (paused)",
                timer.target(),
                timer.duration().as_secs_f32()
            );
            self.outputs.push_event(ControllerEvent::BlendSettled {
                pose: timer.target().to_string(),
            });
        }
    }

    fn cancel_pending(&mut self) {
        if let Some(timer) = self.pending.take() {
            debug!(
                "dance: cancelled blend to '{}' with {:.3}s left",
                timer.target(),
                timer.remaining().as_secs_f32()
            );
            self.outputs.push_event(ControllerEvent::BlendCancelled {
                pose: timer.target().to_string(),
            });
        }
    }

    fn set_running<A: Animator>(&mut self, animator: &mut A, running: bool) {
        self.running = running;
        animator.set_running(running);
    }
}
