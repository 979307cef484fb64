use bevy::prelude::*;
use bevy::sprite::{MaterialMesh2dBundle, Mesh2dHandle};
use bevy::math::primitives::Triangle2d;
use bevy::window::WindowResolution;
use tracing::{debug, info};

use crate::simulation::scenario::Scenario;
use crate::simulation::states::NVec2;
use crate::visualization::geometry::{arrow_tip, facing_angle, to_world, triangle_vertices};

/// Splash screen first, then the running simulation
#[derive(States, Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum SimState {
    #[default]
    Splash,
    Running,
}

/// Component tagging each triangle with its particle index into Scenario.store
#[derive(Component)]
struct ParticleIndex(pub usize);

/// Component tagging each label with its particle index
#[derive(Component)]
struct LabelIndex(pub usize);

/// Last heading drawn, kept for particles that stop moving
#[derive(Component, Default)]
struct Facing(f64);

#[derive(Component)]
struct SplashScreen;

#[derive(Resource)]
struct SplashTimer(Timer);

const BACKGROUND: Color = Color::srgb(0.0, 100.0 / 255.0, 0.0); // dark green
const LABEL_FONT_SIZE: f32 = 14.0;
const LOG_EVERY_TICKS: u64 = 600;

pub fn run_2d(scenario: Scenario) {
    let (w, h) = scenario.engine.window;
    let tick = scenario.engine.tick;
    let splash = scenario.engine.splash;

    App::new()
        .add_plugins(DefaultPlugins.set(WindowPlugin {
            primary_window: Some(Window {
                title: "Physics Simulation".into(),
                resolution: WindowResolution::new(w as f32, h as f32),
                resizable: false,
                ..Default::default()
            }),
            ..Default::default()
        }))
        .insert_resource(scenario)
        .insert_resource(ClearColor(BACKGROUND))
        .insert_resource(Time::<Fixed>::from_duration(tick))
        .insert_resource(SplashTimer(Timer::new(splash, TimerMode::Once)))
        .init_state::<SimState>()
        .add_systems(Startup, setup_camera_system)
        .add_systems(OnEnter(SimState::Splash), spawn_splash_system)
        .add_systems(Update, splash_countdown_system.run_if(in_state(SimState::Splash)))
        .add_systems(OnExit(SimState::Splash), despawn_splash_system)
        .add_systems(OnEnter(SimState::Running), setup_particles_system)
        .add_systems(FixedUpdate, physics_step_system.run_if(in_state(SimState::Running)))
        .add_systems(
            Update,
            (sync_transforms_system, draw_arrows_system).run_if(in_state(SimState::Running)),
        )
        .run();
}

fn setup_camera_system(mut commands: Commands) {
    commands.spawn(Camera2dBundle::default());
}

fn spawn_splash_system(mut commands: Commands) {
    commands
        .spawn((
            NodeBundle {
                style: Style {
                    width: Val::Percent(100.0),
                    height: Val::Percent(100.0),
                    justify_content: JustifyContent::Center,
                    align_items: AlignItems::Center,
                    ..Default::default()
                },
                background_color: Color::BLACK.into(),
                ..Default::default()
            },
            SplashScreen,
        ))
        .with_children(|parent| {
            parent.spawn(TextBundle::from_section(
                "s44b's phys",
                TextStyle {
                    font_size: 24.0,
                    color: Color::WHITE,
                    ..Default::default()
                },
            ));
        });
}

// Ticked every frame, the app keeps rendering while the splash is up
fn splash_countdown_system(time: Res<Time>, mut timer: ResMut<SplashTimer>, mut next: ResMut<NextState<SimState>>) {
    if timer.0.tick(time.delta()).finished() {
        next.set(SimState::Running);
    }
}

fn despawn_splash_system(mut commands: Commands, query: Query<Entity, With<SplashScreen>>) {
    for entity in &query {
        commands.entity(entity).despawn_recursive();
    }
}

fn setup_particles_system(mut commands: Commands, scenario: Res<Scenario>, mut meshes: ResMut<Assets<Mesh>>, mut materials: ResMut<Assets<ColorMaterial>>) {
    let window = scenario.engine.window;
    info!(particles = scenario.store.len(), "starting simulation");

    for (i, p) in scenario.store.iter().enumerate() {
        // Mesh points along +x; the transform rotation turns it to the heading
        let [a, b, c] = triangle_vertices(NVec2::zeros(), p.radius, 0.0);
        // sim y-down -> world y-up, listed counter-clockwise
        let flip = |v: NVec2| Vec2::new(v.x as f32, -v.y as f32);
        let triangle = Triangle2d::new(flip(a), flip(c), flip(b));

        let (r, g, bl) = p.color.rgb();
        let (x, y) = to_world(p.x, window);
        let heading = facing_angle(p.v, 0.0, scenario.parameters.eps);

        commands.spawn((
            MaterialMesh2dBundle {
                mesh: Mesh2dHandle(meshes.add(triangle)),
                material: materials.add(ColorMaterial::from(Color::srgb_u8(r, g, bl))),
                transform: Transform::from_xyz(x, y, 0.0)
                    .with_rotation(Quat::from_rotation_z(-heading as f32)),
                ..Default::default()
            },
            ParticleIndex(i),
            Facing(heading),
        ));

        commands.spawn((
            Text2dBundle {
                text: Text::from_section(
                    p.label.clone(),
                    TextStyle {
                        font_size: LABEL_FONT_SIZE,
                        color: Color::WHITE,
                        ..Default::default()
                    },
                ),
                transform: Transform::from_xyz(x, y, 1.0),
                ..Default::default()
            },
            LabelIndex(i),
        ));
    }
}

fn physics_step_system(mut scenario: ResMut<Scenario>) {
    scenario.step();

    if scenario.tick % LOG_EVERY_TICKS == 0 {
        let momentum = scenario.store.total_momentum();
        debug!(tick = scenario.tick, px = momentum.x, py = momentum.y, "simulation progress");
    }
}

fn sync_transforms_system(
    scenario: Res<Scenario>,
    mut triangles: Query<(&ParticleIndex, &mut Transform, &mut Facing), Without<LabelIndex>>,
    mut labels: Query<(&LabelIndex, &mut Transform), Without<ParticleIndex>>,
) {
    let window = scenario.engine.window;
    let eps = scenario.parameters.eps;

    for (ParticleIndex(i), mut transform, mut facing) in &mut triangles {
        if let Some(p) = scenario.store.get(*i) {
            let (x, y) = to_world(p.x, window);
            facing.0 = facing_angle(p.v, facing.0, eps);
            transform.translation.x = x;
            transform.translation.y = y;
            transform.rotation = Quat::from_rotation_z(-facing.0 as f32);
        }
    }

    for (LabelIndex(i), mut transform) in &mut labels {
        if let Some(p) = scenario.store.get(*i) {
            let (x, y) = to_world(p.x, window);
            transform.translation.x = x;
            transform.translation.y = y;
        }
    }
}

fn draw_arrows_system(scenario: Res<Scenario>, mut gizmos: Gizmos) {
    let window = scenario.engine.window;

    for p in scenario.store.iter() {
        let Some(tip) = arrow_tip(p.x, p.v, scenario.engine.arrow_length, scenario.parameters.eps) else {
            continue;
        };
        let (x0, y0) = to_world(p.x, window);
        let (x1, y1) = to_world(tip, window);
        gizmos.arrow_2d(Vec2::new(x0, y0), Vec2::new(x1, y1), Color::WHITE);
    }
}
