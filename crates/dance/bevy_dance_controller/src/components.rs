use bevy::animation::graph::{AnimationGraph, AnimationNodeIndex};
use bevy::prelude::*;
use std::collections::HashMap;

use dance_controller_core::{ControllerConfig, ControllerError, DanceController};

/// Put on the character root. The controller drives the first `AnimationPlayer`
/// found on this entity or beneath it.
#[derive(Component, Debug)]
pub struct DanceRig {
    pub controller: DanceController,
    pub graph: Handle<AnimationGraph>,
    /// Pose name -> graph node that plays it.
    pub nodes: HashMap<String, AnimationNodeIndex>,
}

impl DanceRig {
    /// Pair pose names with graph nodes in order. Every pose needs a node.
    pub fn new(
        config: ControllerConfig,
        graph: Handle<AnimationGraph>,
        nodes: impl IntoIterator<Item = AnimationNodeIndex>,
    ) -> Result<Self, ControllerError> {
        let controller = DanceController::new(config)?;
        let names = controller.sequence().names();
        let map: HashMap<String, AnimationNodeIndex> =
            names.iter().cloned().zip(nodes).collect();

        if let Some(missing) = names.iter().find(|n| !map.contains_key(*n)) {
            return Err(ControllerError::UnknownPose {
                name: missing.clone(),
            });
        }

        Ok(Self {
            controller,
            graph,
            nodes: map,
        })
    }

    /// Build a graph with one node per clip (clips in pose order) and store it in `graphs`.
    pub fn from_clips(
        config: ControllerConfig,
        clips: impl IntoIterator<Item = Handle<AnimationClip>>,
        graphs: &mut Assets<AnimationGraph>,
    ) -> Result<Self, ControllerError> {
        let mut graph = AnimationGraph::new();
        let root = graph.root;
        let nodes: Vec<AnimationNodeIndex> = graph.add_clips(clips, 1.0, root).collect();
        Self::new(config, graphs.add(graph), nodes)
    }
}

/// Added once the rig has found its player and posed the first entry.
#[derive(Component, Debug, Clone, Copy, PartialEq, Eq)]
pub struct DanceRigBinding {
    pub player: Entity,
}
