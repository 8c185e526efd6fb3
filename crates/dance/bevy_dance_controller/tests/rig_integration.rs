use std::time::Duration;

use bevy::animation::graph::{AnimationGraph, AnimationNodeIndex};
use bevy::animation::transition::AnimationTransitions;
use bevy::prelude::*;
use bevy_dance_controller::{
    BevyAnimator, DanceControllerPlugin, DanceEvent, DanceRig, DanceRigBinding,
};
use dance_controller_core::{ControllerConfig, ControllerError, ControllerEvent, SwitchMode};

struct Scene {
    app: App,
    rig: Entity,
    player: Entity,
    nodes: Vec<AnimationNodeIndex>,
}

fn graph_nodes(count: usize) -> Vec<AnimationNodeIndex> {
    let mut graph = AnimationGraph::new();
    let root = graph.root;
    (0..count)
        .map(|_| graph.add_clip(Handle::<AnimationClip>::default(), 1.0, root))
        .collect()
}

fn setup(fixture: &str) -> Scene {
    let config: ControllerConfig =
        dance_test_fixtures::controllers::load(fixture).expect("load controller fixture");
    setup_with(config, true)
}

fn setup_with(config: ControllerConfig, keyboard: bool) -> Scene {
    let mut app = App::new();
    app.add_plugins(MinimalPlugins)
        .add_plugins(DanceControllerPlugin);
    if keyboard {
        app.init_resource::<ButtonInput<KeyCode>>();
    }

    let nodes = graph_nodes(config.pose_names.len());
    let rig_component =
        DanceRig::new(config, Handle::default(), nodes.iter().copied()).expect("build rig");

    // The player sits on a child, as it does in a spawned glTF scene.
    let rig = app.world_mut().spawn((Name::new("dancer"), rig_component)).id();
    let player = app.world_mut().spawn(AnimationPlayer::default()).id();
    app.world_mut().entity_mut(rig).add_child(player);

    Scene {
        app,
        rig,
        player,
        nodes,
    }
}

fn press(app: &mut App, key: KeyCode) {
    app.world_mut()
        .resource_mut::<ButtonInput<KeyCode>>()
        .press(key);
}

fn advance(app: &mut App, millis: u64) {
    app.world_mut()
        .resource_mut::<Time>()
        .advance_by(Duration::from_millis(millis));
}

fn frame(app: &mut App) {
    app.world_mut().run_schedule(Update);
    let mut keys = app.world_mut().resource_mut::<ButtonInput<KeyCode>>();
    keys.release_all();
    keys.clear();
}

fn drain_events(app: &mut App) -> Vec<ControllerEvent> {
    let mut events = app.world_mut().resource_mut::<Events<DanceEvent>>();
    events.drain().map(|e| e.event).collect()
}

fn player(app: &App, entity: Entity) -> &AnimationPlayer {
    app.world()
        .get::<AnimationPlayer>(entity)
        .expect("AnimationPlayer exists")
}

fn pose(app: &App, rig: Entity) -> String {
    app.world()
        .get::<DanceRig>(rig)
        .expect("rig exists")
        .controller
        .current_pose()
        .to_string()
}

/// it should refuse a rig with fewer graph nodes than poses
#[test]
fn rig_requires_a_node_per_pose() {
    let config = ControllerConfig::new(["Idle", "Spin"]);
    let err = DanceRig::new(config, Handle::default(), graph_nodes(1)).unwrap_err();
    assert_eq!(
        err,
        ControllerError::UnknownPose {
            name: "Spin".into()
        }
    );
}

/// it should bind to the descendant player and freeze it on the first pose
#[test]
fn binds_and_poses_first_entry() {
    let Scene {
        mut app,
        rig,
        player: player_entity,
        nodes,
    } = setup("four-poses");

    frame(&mut app);

    let binding = app
        .world()
        .get::<DanceRigBinding>(rig)
        .expect("rig bound");
    assert_eq!(binding.player, player_entity);
    assert!(app
        .world()
        .get::<AnimationTransitions>(player_entity)
        .is_some());
    assert!(app
        .world()
        .get::<Handle<AnimationGraph>>(player_entity)
        .is_some());

    let p = player(&app, player_entity);
    assert!(p.is_playing_animation(nodes[0]));
    assert!(p.all_paused());
    assert_eq!(
        drain_events(&mut app),
        vec![ControllerEvent::Initialized {
            pose: "Idle".into()
        }]
    );
}

/// it should hard cut on N, replacing the playing clip and staying paused
#[test]
fn cut_key_switches_clip() {
    let Scene {
        mut app,
        rig,
        player: player_entity,
        nodes,
    } = setup("four-poses");
    frame(&mut app);
    drain_events(&mut app);

    press(&mut app, KeyCode::KeyN);
    frame(&mut app);

    assert_eq!(pose(&app, rig), "ArmWave");
    let p = player(&app, player_entity);
    assert!(p.is_playing_animation(nodes[1]));
    assert!(!p.is_playing_animation(nodes[0]));
    assert!(p.all_paused());
    assert_eq!(
        drain_events(&mut app),
        vec![ControllerEvent::PoseCut {
            index: 1,
            pose: "ArmWave".into()
        }]
    );
}

/// it should run a T blend and pause once the configured time has passed
#[test]
fn blend_key_runs_then_pauses() {
    let Scene {
        mut app,
        rig,
        player: player_entity,
        nodes,
    } = setup("four-poses");
    frame(&mut app);

    press(&mut app, KeyCode::KeyT);
    frame(&mut app);

    assert_eq!(pose(&app, rig), "ArmWave");
    let p = player(&app, player_entity);
    assert!(p.is_playing_animation(nodes[1]));
    assert!(!p.all_paused());
    let transitions = app
        .world()
        .get::<AnimationTransitions>(player_entity)
        .expect("transitions");
    assert_eq!(transitions.get_main_animation(), Some(nodes[1]));

    advance(&mut app, 600);
    frame(&mut app);

    assert!(player(&app, player_entity).all_paused());
    let names: Vec<&str> = drain_events(&mut app)
        .iter()
        .map(|e| e.name())
        .collect();
    assert_eq!(names, vec!["initialized", "blend_started", "blend_settled"]);
}

/// it should resume on S and cancel a pending blend
#[test]
fn start_key_resumes_and_cancels() {
    let Scene {
        mut app,
        rig,
        player: player_entity,
        ..
    } = setup("four-poses");
    frame(&mut app);

    press(&mut app, KeyCode::KeyT);
    frame(&mut app);
    press(&mut app, KeyCode::KeyS);
    frame(&mut app);

    let rig_ref = app.world().get::<DanceRig>(rig).expect("rig");
    assert!(rig_ref.controller.pending_transition().is_none());
    assert!(rig_ref.controller.is_running());
    assert!(!player(&app, player_entity).all_paused());

    app.world_mut()
        .resource_mut::<Time>()
        .advance_by(Duration::from_secs(2));
    frame(&mut app);
    assert!(!player(&app, player_entity).all_paused());
}

/// it should keep a rig unbound until a player appears beneath it
#[test]
fn waits_for_player_to_spawn() {
    let mut app = App::new();
    app.add_plugins(MinimalPlugins)
        .add_plugins(DanceControllerPlugin);

    let config = ControllerConfig::new(["Idle"]);
    let rig_component = DanceRig::new(config, Handle::default(), graph_nodes(1)).unwrap();
    let rig = app.world_mut().spawn(rig_component).id();

    app.world_mut().run_schedule(Update);
    assert!(app.world().get::<DanceRigBinding>(rig).is_none());

    let player_entity = app.world_mut().spawn(AnimationPlayer::default()).id();
    app.world_mut().entity_mut(rig).add_child(player_entity);
    app.world_mut().run_schedule(Update);

    assert_eq!(
        app.world().get::<DanceRigBinding>(rig).map(|b| b.player),
        Some(player_entity)
    );
}

/// it should restart the main clip when a blend targets it, then pause on settle
#[test]
fn blend_onto_the_playing_clip_keeps_it_alive() {
    let Scene {
        mut app,
        player: player_entity,
        nodes,
        ..
    } = setup_with(ControllerConfig::new(["Solo"]), true);
    frame(&mut app);

    press(&mut app, KeyCode::KeyT);
    frame(&mut app);

    let p = player(&app, player_entity);
    assert!(p.is_playing_animation(nodes[0]));
    assert_eq!(p.animation(nodes[0]).map(|a| a.weight()), Some(1.0));
    assert!(!p.all_paused());
    let transitions = app
        .world()
        .get::<AnimationTransitions>(player_entity)
        .expect("transitions");
    assert_eq!(transitions.get_main_animation(), Some(nodes[0]));

    advance(&mut app, 600);
    frame(&mut app);

    let p = player(&app, player_entity);
    assert!(p.is_playing_animation(nodes[0]));
    assert!(p.all_paused());
}

/// it should re-pose the blend target from its first frame when snap_after_blend is set
#[test]
fn snap_after_blend_reposes_target() {
    let Scene {
        mut app,
        rig,
        player: player_entity,
        nodes,
    } = setup("snap-after-blend");
    frame(&mut app);

    press(&mut app, KeyCode::KeyT);
    frame(&mut app);
    advance(&mut app, 300);
    frame(&mut app);

    assert_eq!(pose(&app, rig), "ArmWave");
    let p = player(&app, player_entity);
    assert!(p.is_playing_animation(nodes[1]));
    assert!(!p.is_playing_animation(nodes[0]));
    assert!(p.all_paused());
    assert_eq!(p.animation(nodes[1]).map(|a| a.seek_time()), Some(0.0));
}

/// it should still settle a blend when the app has no keyboard resource
#[test]
fn headless_rig_settles_pending_blend() {
    let Scene {
        mut app,
        rig,
        player: player_entity,
        nodes,
    } = setup_with(ControllerConfig::new(["Idle", "Spin"]), false);
    assert!(app.world().get_resource::<ButtonInput<KeyCode>>().is_none());

    app.world_mut().run_schedule(Update);
    assert!(app.world().get::<DanceRigBinding>(rig).is_some());

    // Arm the blend the way a scripted host would, without key edges.
    {
        let world = app.world_mut();
        let mut rig_component = world
            .entity_mut(rig)
            .take::<DanceRig>()
            .expect("rig component");
        let mut player_mut = world.entity_mut(player_entity);
        let mut transitions = player_mut
            .take::<AnimationTransitions>()
            .expect("transitions");
        let mut anim_player = player_mut
            .get_mut::<AnimationPlayer>()
            .expect("player component");
        let DanceRig {
            controller, nodes, ..
        } = &mut rig_component;
        let mut animator = BevyAnimator::new(&mut anim_player, &mut transitions, nodes);
        controller.switch(SwitchMode::Smooth, &mut animator);
        assert!(controller.pending_transition().is_some());

        player_mut.insert(transitions);
        world.entity_mut(rig).insert(rig_component);
    }
    assert!(!player(&app, player_entity).all_paused());

    advance(&mut app, 600);
    app.world_mut().run_schedule(Update);

    let p = player(&app, player_entity);
    assert!(p.is_playing_animation(nodes[1]));
    assert!(p.all_paused());
    let rig_ref = app.world().get::<DanceRig>(rig).expect("rig");
    assert!(rig_ref.controller.pending_transition().is_none());
    assert!(!rig_ref.controller.is_running());
}
