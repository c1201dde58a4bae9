use bevy::ecs::message::MessageWriter;
use bevy::input::touch::Touches;
use bevy::prelude::*;

use crate::plugins::camera::MainCamera;

use super::messages::FireRequest;

/// Producer: write one `FireRequest` per tap or click, carrying the pointer's
/// world-space position.
///
/// Touches and the mouse are read independently; several fingers landing in
/// the same frame each request their own shot. The input resources are
/// optional so the system also runs headless.
pub fn fire_requests_from_input(
    buttons: Option<Res<ButtonInput<MouseButton>>>,
    touches: Option<Res<Touches>>,
    windows: Query<&Window>,
    q_camera: Query<(&Camera, &GlobalTransform), With<MainCamera>>,
    mut writer: MessageWriter<FireRequest>,
) {
    let (camera, camera_tf) = match q_camera.single() {
        Ok(v) => v,
        Err(e) => { debug!("No single MainCamera: {e:?}"); return; }
    };

    if let Some(touches) = &touches {
        for touch in touches.iter_just_pressed() {
            match camera.viewport_to_world_2d(camera_tf, touch.position()) {
                Ok(target) => { writer.write(FireRequest { target }); }
                Err(e) => { debug!("viewport_to_world_2d failed: {e:?}"); }
            }
        }
    }

    let Some(buttons) = buttons else { return; };
    if !buttons.just_pressed(MouseButton::Left) { return; }

    let window = match windows.single() {
        Ok(w) => w,
        Err(e) => { debug!("No single Window: {e:?}"); return; }
    };
    let cursor = match window.cursor_position() {
        Some(c) => c,
        None => { debug!("Cursor position is None"); return; }
    };
    match camera.viewport_to_world_2d(camera_tf, cursor) {
        Ok(target) => { writer.write(FireRequest { target }); }
        Err(e) => { debug!("viewport_to_world_2d failed: {e:?}"); }
    }
}
