use std::f32::consts::PI;

use three_d::{vec3, Vector3};

/// Distribute `count` points roughly evenly over a sphere of the given radius
/// using the golden-angle (Fibonacci) spiral. Output is index-ordered and
/// fully determined by the inputs.
pub fn sphere_positions(count: usize, radius: f32) -> Vec<Vector3<f32>> {
    let golden_angle = PI * (3.0 - 5.0_f32.sqrt());
    let span = count.saturating_sub(1).max(1) as f32;

    (0..count)
        .map(|i| {
            let y = 1.0 - (i as f32 / span) * 2.0;
            // max(0) guards float underflow at the poles
            let radius_at_y = (1.0 - y * y).max(0.0).sqrt();
            let theta = golden_angle * i as f32;

            vec3(
                theta.cos() * radius_at_y * radius,
                y * radius,
                theta.sin() * radius_at_y * radius,
            )
        })
        .collect()
}

/// Layout radius for members inside a cluster, growing with member count.
pub fn member_radius(count: usize) -> f32 {
    (count as f32 / 10.0).clamp(1.5, 3.0)
}

/// Per-member target positions: the same spiral at cluster scale, recentered
/// on the cluster anchor.
pub fn member_positions(anchor: Vector3<f32>, count: usize) -> Vec<Vector3<f32>> {
    let radius = member_radius(count);
    sphere_positions(count, radius)
        .into_iter()
        .map(|offset| anchor + offset)
        .collect()
}
