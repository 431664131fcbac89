//! Arena domain: ground, boost pads and player spawning.

use avian3d::prelude::*;
use bevy::prelude::*;

use crate::boost::SpeedBoostVolume;
use crate::movement::{
    BASE_FOV, ControllerRefs, GameLayer, Ground, GroundCheck, MovementState, MovementTuning,
    Orientation, PLAYER_RADIUS, Player, PlayerCamera, TriggerTag,
};

/// Ground slabs and platforms: (center, full size)
const GROUND_BLOCKS: [(Vec3, Vec3); 4] = [
    (Vec3::new(0.0, -0.5, 0.0), Vec3::new(60.0, 1.0, 60.0)),
    (Vec3::new(-8.0, 0.5, -10.0), Vec3::new(6.0, 1.0, 6.0)),
    (Vec3::new(0.0, 1.25, -16.0), Vec3::new(6.0, 1.0, 6.0)),
    (Vec3::new(8.0, 2.0, -10.0), Vec3::new(6.0, 1.0, 6.0)),
];

/// Block-tagged trigger pads lying flat on the ground
const BLOCK_PADS: [Vec3; 3] = [
    Vec3::new(0.0, 0.5, -6.0),
    Vec3::new(-6.0, 0.5, 4.0),
    Vec3::new(6.0, 0.5, 4.0),
];

pub(crate) fn spawn_arena(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
) {
    let ground_material = materials.add(StandardMaterial {
        base_color: Color::srgb(0.4, 0.5, 0.4),
        ..default()
    });
    let pad_material = materials.add(StandardMaterial {
        base_color: Color::srgba(0.9, 0.6, 0.1, 0.5),
        alpha_mode: AlphaMode::Blend,
        ..default()
    });

    let ground_layers = CollisionLayers::new(GameLayer::Ground, [GameLayer::Player]);
    let sensor_layers = CollisionLayers::new(GameLayer::Sensor, [GameLayer::Player]);

    for (center, size) in GROUND_BLOCKS {
        commands.spawn((
            Name::new("Ground"),
            Ground,
            Mesh3d(meshes.add(Cuboid::new(size.x, size.y, size.z))),
            MeshMaterial3d(ground_material.clone()),
            Transform::from_translation(center),
            RigidBody::Static,
            Collider::cuboid(size.x, size.y, size.z),
            ground_layers,
        ));
    }

    let pad_size = Vec3::new(3.0, 1.0, 3.0);
    for position in BLOCK_PADS {
        commands.spawn((
            Name::new("BlockPad"),
            TriggerTag::Block,
            Mesh3d(meshes.add(Cuboid::new(pad_size.x, pad_size.y, pad_size.z))),
            MeshMaterial3d(pad_material.clone()),
            Transform::from_translation(position),
            RigidBody::Static,
            Collider::cuboid(pad_size.x, pad_size.y, pad_size.z),
            Sensor,
            sensor_layers,
        ));
    }

    commands.spawn((
        DirectionalLight {
            illuminance: 10_000.0,
            shadows_enabled: true,
            ..default()
        },
        Transform::from_xyz(10.0, 20.0, 10.0).looking_at(Vec3::ZERO, Vec3::Y),
    ));

    info!(
        "Spawned arena: {} ground blocks, {} block pads",
        GROUND_BLOCKS.len(),
        BLOCK_PADS.len()
    );
}

/// Spawn the player body and wire its scene references.
///
/// Orientation and ground check are children so they follow the body; the
/// camera is a root entity positioned by `follow_player`.
pub(crate) fn spawn_player(mut commands: Commands, tuning: Res<MovementTuning>) {
    let height = tuning.player_height;

    let player = commands
        .spawn((
            // Identity & Movement
            (
                Name::new("Player"),
                Player,
                MovementState::new(tuning.initial_speed),
            ),
            Transform::from_xyz(0.0, height, 8.0),
            // Physics
            (
                RigidBody::Dynamic,
                Collider::capsule(PLAYER_RADIUS, height - 2.0 * PLAYER_RADIUS),
                LockedAxes::ROTATION_LOCKED,
                Mass(tuning.player_mass),
                LinearVelocity::default(),
                LinearDamping(tuning.ground_drag),
                Friction::new(0.0),
                CollisionEventsEnabled,
                CollisionLayers::new(
                    GameLayer::Player,
                    [GameLayer::Default, GameLayer::Ground, GameLayer::Sensor],
                ),
            ),
        ))
        .id();

    let orientation = commands
        .spawn((
            Name::new("Orientation"),
            Orientation::default(),
            Transform::default(),
            ChildOf(player),
        ))
        .id();

    let ground_check = commands
        .spawn((
            Name::new("GroundCheck"),
            GroundCheck,
            Transform::from_xyz(0.0, -height * 0.5, 0.0),
            ChildOf(player),
        ))
        .id();

    let camera = commands
        .spawn((
            Name::new("PlayerCamera"),
            PlayerCamera {
                pitch: 0.0,
                eye_height: height * 0.4,
            },
            Camera3d::default(),
            Projection::from(PerspectiveProjection {
                fov: BASE_FOV.to_radians(),
                ..default()
            }),
            Transform::default(),
        ))
        .id();

    commands.entity(player).insert((
        ControllerRefs {
            orientation,
            ground_check,
            camera,
        },
        SpeedBoostVolume::new(player, orientation),
    ));

    info!(
        "Spawned player {player}: orientation={orientation}, ground_check={ground_check}, camera={camera}"
    );
}
