//! Integration test harness.
//!
//! Keep integration tests headless:
//! - `MinimalPlugins` provides core ECS runtime.
//! - we then call `drone_defence::game::configure_headless` to install
//!   gameplay plugins.
//!
//! Fixed-schedule systems are driven through [`fixed_tick`] instead of
//! letting `app.update()` accumulate wall-clock time, so a test can say
//! "exactly N physics steps" and mean it.

use bevy::asset::AssetPlugin;
use bevy::prelude::*;
use bevy::scene::ScenePlugin;
use bevy::state::app::StatesPlugin;

pub fn app_headless() -> App {
    let mut app = App::new();

    // Core ECS + states.
    // Add AssetPlugin + ScenePlugin so SceneSpawner exists.
    app.add_plugins((
        MinimalPlugins,
        StatesPlugin,
        AssetPlugin::default(),
        ScenePlugin,
    ));

    drone_defence::game::configure_headless(&mut app);
    app
}

/// Advance `Time<Fixed>` by exactly one timestep, then run the fixed
/// schedules once.
pub fn fixed_tick(app: &mut App) {
    let timestep = app.world().resource::<Time<Fixed>>().timestep();
    app.world_mut()
        .resource_mut::<Time<Fixed>>()
        .advance_by(timestep);
    app.world_mut().run_schedule(FixedUpdate);
    app.world_mut().run_schedule(FixedPostUpdate);
}

pub fn fixed_ticks(app: &mut App, n: u32) {
    for _ in 0..n {
        fixed_tick(app);
    }
}

/// Run the despawn sweep (PostUpdate) once.
pub fn sweep(app: &mut App) {
    app.world_mut().run_schedule(PostUpdate);
}
