use bevy::animation::transition::AnimationTransitions;
use bevy::log::debug;
use bevy::prelude::*;

use crate::animator::BevyAnimator;
use crate::components::{DanceRig, DanceRigBinding};
use crate::resources::DanceKeyBindings;
use crate::DanceEvent;
use dance_controller_core::{ControlInputs, Outputs};

/// The rig entity itself if it carries a player, else the nearest descendant that does.
fn find_player(
    root: Entity,
    children: &Query<&Children>,
    players: &Query<(&mut AnimationPlayer, Option<&mut AnimationTransitions>)>,
) -> Option<Entity> {
    let mut queue = std::collections::VecDeque::from([root]);
    while let Some(entity) = queue.pop_front() {
        if players.contains(entity) {
            return Some(entity);
        }
        if let Ok(cs) = children.get(entity) {
            queue.extend(cs.iter().copied());
        }
    }
    None
}

fn forward(rig: Entity, outputs: &Outputs, writer: &mut EventWriter<DanceEvent>) {
    for event in outputs.events.iter() {
        writer.send(DanceEvent {
            rig,
            event: event.clone(),
        });
    }
}

/// Locates the player for each unbound rig, hands it the rig's graph and poses the first entry.
/// Rigs whose scene has not spawned a player yet are retried next frame.
pub fn bind_dance_rigs_system(
    mut commands: Commands,
    mut rigs: Query<(Entity, &mut DanceRig), Without<DanceRigBinding>>,
    children: Query<&Children>,
    mut players: Query<(&mut AnimationPlayer, Option<&mut AnimationTransitions>)>,
    mut writer: EventWriter<DanceEvent>,
) {
    for (rig_entity, mut rig) in rigs.iter_mut() {
        let Some(player_entity) = find_player(rig_entity, &children, &players) else {
            continue;
        };
        let Ok((mut player, existing)) = players.get_mut(player_entity) else {
            continue;
        };

        let had_transitions = existing.is_some();
        let mut transitions = AnimationTransitions::new();
        let DanceRig {
            controller,
            graph,
            nodes,
        } = &mut *rig;
        {
            let transitions = match existing {
                Some(t) => t.into_inner(),
                None => &mut transitions,
            };
            let mut animator = BevyAnimator::new(&mut player, transitions, nodes);
            let outputs = controller.initialize(&mut animator);
            forward(rig_entity, outputs, &mut writer);
        }

        debug!(
            "dance: rig {:?} bound to player {:?}",
            rig_entity, player_entity
        );
        let mut player_commands = commands.entity(player_entity);
        player_commands.insert(graph.clone());
        if !had_transitions {
            player_commands.insert(transitions);
        }
        commands.entity(rig_entity).insert(DanceRigBinding {
            player: player_entity,
        });
    }
}

/// Reads this frame's key edges and steps every bound rig.
/// Without a keyboard the rigs still tick so pending blends settle.
pub fn dance_input_system(
    keys: Option<Res<ButtonInput<KeyCode>>>,
    bindings: Res<DanceKeyBindings>,
    time: Res<Time>,
    mut rigs: Query<(Entity, &mut DanceRig, &DanceRigBinding)>,
    mut players: Query<(&mut AnimationPlayer, &mut AnimationTransitions)>,
    mut writer: EventWriter<DanceEvent>,
) {
    let inputs = keys
        .map(|k| bindings.read(&k))
        .unwrap_or_else(ControlInputs::none);
    let dt = time.delta_seconds();

    for (rig_entity, mut rig, binding) in rigs.iter_mut() {
        let Ok((mut player, mut transitions)) = players.get_mut(binding.player) else {
            continue;
        };
        let DanceRig {
            controller, nodes, ..
        } = &mut *rig;
        let mut animator = BevyAnimator::new(&mut player, &mut transitions, nodes);
        let outputs = controller.update(dt, inputs, &mut animator);
        forward(rig_entity, outputs, &mut writer);
    }
}
