use std::f32::consts::PI;

use three_d::{
    degrees, vec3, AmbientLight, Camera, Context, DirectionalLight, OrbitControl, Srgba, Vec3,
    Window,
};

use crate::cluster::UNIVERSE_RADIUS;

pub fn get_camera_and_control(window: &Window) -> (Camera, OrbitControl) {
    let camera = Camera::new_perspective(
        window.viewport(),
        vec3(0.0, 0.0, 35.0),
        vec3(0.0, 0.0, 0.0),
        vec3(0.0, 1.0, 0.0),
        degrees(60.0),
        0.1,
        1000.0,
    );

    let control = OrbitControl::new(Vec3::new(0.0, 0.0, 0.0), 8.0, 60.0);

    (camera, control)
}

/// Background clear color for the active theme (stone-800 / stone-100).
pub fn get_background_color(dark_mode: bool) -> [f32; 3] {
    if dark_mode {
        [0.161, 0.145, 0.141]
    } else {
        [0.961, 0.961, 0.957]
    }
}

pub fn get_lights(context: &Context, dark_mode: bool) -> (AmbientLight, DirectionalLight) {
    let ambient_intensity = if dark_mode { 0.4 } else { 0.6 };
    let ambient = AmbientLight::new(context, ambient_intensity, Srgba::WHITE);
    let sun = DirectionalLight::new(context, 1.2, Srgba::WHITE, &vec3(0.0, -1.0, -1.0));

    (ambient, sun)
}

pub fn do_auto_orbit(angle_deg: &mut f64, camera: &mut Camera) {
    *angle_deg += 0.2;
    if *angle_deg > 360.0 {
        *angle_deg = 0.0;
    }

    let angle = *angle_deg as f32 * (PI / 180.0);
    let distance = UNIVERSE_RADIUS * 1.9;
    camera.set_view(
        Vec3::new(angle.cos() * distance, 6.0, angle.sin() * distance),
        Vec3::new(0.0, 0.0, 0.0),
        Vec3::new(0.0, 1.0, 0.0),
    );
}
