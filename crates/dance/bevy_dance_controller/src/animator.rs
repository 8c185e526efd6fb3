use bevy::animation::graph::AnimationNodeIndex;
use bevy::animation::transition::AnimationTransitions;
use bevy::log::warn;
use bevy::prelude::*;
use std::collections::HashMap;
use std::time::Duration;

use dance_controller_core::Animator;

/// Adapts a Bevy `AnimationPlayer` (+ its transitions) to the core `Animator` seam.
/// Built per frame from borrowed components.
pub struct BevyAnimator<'a> {
    pub player: &'a mut AnimationPlayer,
    pub transitions: &'a mut AnimationTransitions,
    pub nodes: &'a HashMap<String, AnimationNodeIndex>,
}

impl<'a> BevyAnimator<'a> {
    pub fn new(
        player: &'a mut AnimationPlayer,
        transitions: &'a mut AnimationTransitions,
        nodes: &'a HashMap<String, AnimationNodeIndex>,
    ) -> Self {
        Self {
            player,
            transitions,
            nodes,
        }
    }

    fn node(&self, pose: &str) -> Option<AnimationNodeIndex> {
        let node = self.nodes.get(pose).copied();
        if node.is_none() {
            warn!("dance: no animation node for pose '{}'", pose);
        }
        node
    }
}

impl Animator for BevyAnimator<'_> {
    fn play(&mut self, pose: &str) {
        let Some(node) = self.node(pose) else {
            return;
        };
        // Keep the play gate where it was.
        let paused = self.player.all_paused();
        self.player.stop_all();
        let active = self
            .transitions
            .play(&mut *self.player, node, Duration::ZERO);
        active.seek_to(0.0).repeat();
        if paused {
            active.pause();
        }
    }

    fn cross_fade(&mut self, pose: &str, duration: Duration) {
        let Some(node) = self.node(pose) else {
            return;
        };
        if self.transitions.get_main_animation() == Some(node) {
            // Fading a clip into itself would fade it out; restart it instead.
            if let Some(active) = self.player.animation_mut(node) {
                active.seek_to(0.0);
                return;
            }
        }
        self.transitions
            .play(&mut *self.player, node, duration)
            .repeat();
    }

    fn set_running(&mut self, running: bool) {
        if running {
            self.player.resume_all();
        } else {
            self.player.pause_all();
        }
    }
}
