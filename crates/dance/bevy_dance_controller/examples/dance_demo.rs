//! Loads a glTF character and steps through its clips.
//!
//! S: play, N: hard cut to the next pose, T: cross-fade to the next pose then pause.
//!
//! cargo run -p bevy_dance_controller --example dance_demo -- assets/dancer.glb 4

use bevy::animation::graph::AnimationGraph;
use bevy::gltf::GltfAssetLabel;
use bevy::prelude::*;
use bevy_dance_controller::{DanceControllerPlugin, DanceEvent, DanceRig};
use dance_controller_core::ControllerConfig;

#[derive(Resource)]
struct DemoArgs {
    model: String,
    clips: usize,
}

fn main() -> anyhow::Result<()> {
    let mut args = std::env::args().skip(1);
    let model = args.next().unwrap_or_else(|| "models/dancer.glb".to_string());
    let clips: usize = args.next().map(|s| s.parse::<usize>()).transpose()?.unwrap_or(4);
    if clips == 0 {
        anyhow::bail!("need at least one clip");
    }

    App::new()
        .add_plugins(DefaultPlugins)
        .add_plugins(DanceControllerPlugin)
        .insert_resource(DemoArgs { model, clips })
        .add_systems(Startup, setup)
        .add_systems(Update, log_dance_events)
        .run();
    Ok(())
}

fn setup(
    mut commands: Commands,
    args: Res<DemoArgs>,
    asset_server: Res<AssetServer>,
    mut graphs: ResMut<Assets<AnimationGraph>>,
) {
    let clips: Vec<Handle<AnimationClip>> = (0..args.clips)
        .map(|i| asset_server.load(GltfAssetLabel::Animation(i).from_asset(args.model.clone())))
        .collect();
    let config = ControllerConfig::new((0..args.clips).map(|i| format!("pose-{i}")));

    let rig = match DanceRig::from_clips(config, clips, &mut graphs) {
        Ok(rig) => rig,
        Err(err) => {
            error!("dance demo: {err}");
            return;
        }
    };

    commands.spawn((
        SceneBundle {
            scene: asset_server.load(GltfAssetLabel::Scene(0).from_asset(args.model.clone())),
            ..default()
        },
        rig,
    ));

    commands.spawn(Camera3dBundle {
        transform: Transform::from_xyz(0.0, 1.5, 4.0).looking_at(Vec3::new(0.0, 1.0, 0.0), Vec3::Y),
        ..default()
    });
    commands.spawn(DirectionalLightBundle {
        transform: Transform::from_rotation(Quat::from_euler(EulerRot::XYZ, -0.8, 0.4, 0.0)),
        ..default()
    });
}

fn log_dance_events(mut events: EventReader<DanceEvent>) {
    for ev in events.read() {
        info!("{:?}: {} '{}'", ev.rig, ev.event.name(), ev.event.pose());
    }
}
