use std::collections::HashSet;

use bevy::log::LogPlugin;
use bevy::math::primitives::{Cuboid, Sphere};
use bevy::prelude::*;

use crate::configuration::config::ParametersConfig;
use crate::simulation::collision::CollisionEvent;
use crate::simulation::engine::Engine;
use crate::simulation::states::{Body, BodyId};

/// Component tagging each sphere with the id of the body it draws
#[derive(Component)]
struct BodyHandle(pub BodyId);

/// The engine plus viewer-only state
#[derive(Resource)]
struct Simulation {
    engine: Engine,
    resume_scale: Option<f64>, // time scale to restore when un-pausing
}

/// World-space → screen-space scaling factor for positions and radii
const SCALE3D: f32 = 10.0;

/// Distance of the camera from the origin along +Z
const CAMERA_DISTANCE: f32 = 800.0;

/// Open a window and run `engine` live, one `update` per rendered frame
/// Logging is left to the subscriber the binary installed
pub fn run_3d(engine: Engine) {
    info!(bodies = engine.body_count(), "starting 3D viewer");

    App::new()
        .insert_resource(Simulation {
            engine,
            resume_scale: None,
        })
        .add_plugins(DefaultPlugins.build().disable::<LogPlugin>())
        .add_systems(Startup, setup_3d)
        .add_systems(Update, (toggle_pause, physics_step_3d, sync_transforms_3d).chain())
        .run();
}

/// Startup system: spawn camera, light, axes and one sphere per body
fn setup_3d(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
    sim: Res<Simulation>,
) {
    commands.spawn(Camera3dBundle {
        camera: Camera {
            clear_color: ClearColorConfig::Custom(Color::srgb(0.0, 0.0, 0.0)),
            ..Default::default()
        },
        transform: Transform::from_xyz(200.0, 150.0, CAMERA_DISTANCE).looking_at(Vec3::ZERO, Vec3::Y),
        ..Default::default()
    });

    commands.spawn(PointLightBundle {
        point_light: PointLight {
            intensity: 1500.0,
            range: 1000.0,
            ..Default::default()
        },
        transform: Transform::from_xyz(100.0, 100.0, CAMERA_DISTANCE),
        ..Default::default()
    });

    spawn_axes(&mut commands, &mut meshes, &mut materials);

    for b in sim.engine.bodies() {
        spawn_body(&mut commands, &mut meshes, &mut materials, b);
    }
}

/// Space pauses by zeroing the time scale; the render loop keeps going
fn toggle_pause(keys: Res<ButtonInput<KeyCode>>, mut sim: ResMut<Simulation>) {
    if !keys.just_pressed(KeyCode::Space) {
        return;
    }

    let previous = sim.resume_scale.take();
    let scale = match previous {
        Some(previous) => previous,
        None => {
            sim.resume_scale = Some(sim.engine.config().time_scale);
            0.0
        }
    };
    sim.engine.update_config(&ParametersConfig {
        time_scale: Some(scale),
        ..Default::default()
    });
    info!(time_scale = scale, "time scale changed");
}

/// Per-frame physics, then mirror every merge in the scene
fn physics_step_3d(
    time: Res<Time>,
    mut sim: ResMut<Simulation>,
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
    handles: Query<(Entity, &BodyHandle)>,
) {
    let events = sim.engine.update(time.delta_seconds_f64());
    if events.is_empty() {
        return;
    }

    let gone: HashSet<BodyId> = events
        .iter()
        .flat_map(|e: &CollisionEvent| e.removed.iter().map(|b| b.id))
        .collect();

    for (entity, BodyHandle(id)) in &handles {
        if gone.contains(id) {
            commands.entity(entity).despawn();
        }
    }

    // A merged body may itself be consumed later in the same frame
    for e in &events {
        if !gone.contains(&e.merged.id) {
            spawn_body(&mut commands, &mut meshes, &mut materials, &e.merged);
        }
    }
}

// ========================================================================================
// Body and velocity color stuff
// ========================================================================================

fn speed_to_color(speed: f32, max_speed: f32) -> Color {
    if max_speed <= 0.0 {
        // all stationary -> pick a default
        return Color::srgb(1.0, 1.0, 1.0);
    }

    // Simple blue -> red gradient
    let t = (speed / max_speed).clamp(0.0, 1.0);
    Color::srgb(t, 0.0, 1.0 - t)
}

#[derive(Default)]
struct VelocityColorState {
    smoothed_max: f32,
}

fn sync_transforms_3d(
    sim: Res<Simulation>,
    mut materials: ResMut<Assets<StandardMaterial>>,
    mut query: Query<(&BodyHandle, &mut Transform, &Handle<StandardMaterial>)>,
    mut vel_state: Local<VelocityColorState>,
) {
    let bodies = sim.engine.bodies();

    let max_speed_frame = bodies.iter().map(|b| b.v.norm() as f32).fold(0.0_f32, f32::max);

    // Smooth the colour scale over time so one fast body does not flash everything
    if vel_state.smoothed_max == 0.0 {
        vel_state.smoothed_max = max_speed_frame.max(1e-6);
    }
    let capped_max = max_speed_frame.min(vel_state.smoothed_max * 3.0);
    vel_state.smoothed_max = 0.99 * vel_state.smoothed_max + 0.01 * capped_max;
    let v_norm = vel_state.smoothed_max.max(1e-6);

    for (BodyHandle(id), mut transform, mat_handle) in &mut query {
        let Some(b) = sim.engine.body_by_id(*id) else {
            continue;
        };

        transform.translation = to_screen(b);

        // Bodies with a colour hint keep it
        if b.color.is_some() {
            continue;
        }
        if let Some(mat) = materials.get_mut(mat_handle) {
            mat.base_color = speed_to_color(b.v.norm() as f32, v_norm);
        }
    }
}

fn to_screen(b: &Body) -> Vec3 {
    Vec3::new(b.x.x as f32, b.x.y as f32, b.x.z as f32) * SCALE3D
}

fn spawn_body(commands: &mut Commands, meshes: &mut Assets<Mesh>, materials: &mut Assets<StandardMaterial>, b: &Body) {
    // Keep tiny bodies visible
    let radius_screen = (b.radius as f32).max(0.05) * SCALE3D;
    let base_color = match b.color {
        Some(hint) => Color::srgb(hint.0[0], hint.0[1], hint.0[2]),
        None => Color::srgb(1.0, 1.0, 1.0),
    };

    commands.spawn((
        PbrBundle {
            mesh: meshes.add(Sphere::new(radius_screen).mesh()),
            material: materials.add(StandardMaterial {
                base_color,
                unlit: true,
                ..Default::default()
            }),
            transform: Transform::from_translation(to_screen(b)),
            ..Default::default()
        },
        BodyHandle(b.id),
    ));
}

// =========================================================================================
// Draw 3D axes for visual reference
// =========================================================================================

fn spawn_axes(commands: &mut Commands, meshes: &mut Assets<Mesh>, materials: &mut Assets<StandardMaterial>) {
    let axis_len = 100.0 * SCALE3D;
    let axis_thickness = 0.05 * SCALE3D;

    let axes = [
        (Vec3::new(axis_len, axis_thickness, axis_thickness), Color::srgb(1.0, 0.0, 0.0)),
        (Vec3::new(axis_thickness, axis_len, axis_thickness), Color::srgb(0.0, 1.0, 0.0)),
        (Vec3::new(axis_thickness, axis_thickness, axis_len), Color::srgb(0.0, 0.0, 1.0)),
    ];

    for (size, color) in axes {
        commands.spawn(PbrBundle {
            mesh: meshes.add(Cuboid::new(size.x, size.y, size.z).mesh()),
            material: materials.add(StandardMaterial {
                base_color: color,
                unlit: true,
                ..Default::default()
            }),
            // Cuboid is centered at its transform origin, so it crosses the world origin
            transform: Transform::from_xyz(0.0, 0.0, 0.0),
            ..Default::default()
        });
    }
}
