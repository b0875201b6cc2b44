use three_d::{
    ColorMaterial, Context, CpuMesh, Gm, InstancedMesh, Instances, Mat4, Srgba,
};

use crate::cluster::Cluster;
use crate::sphere;

const MIN_PARTICLE_SIZE: f32 = 0.12;
const MAX_PARTICLE_SIZE: f32 = 0.30;
const DEFAULT_HORSEPOWER: f64 = 50.0;

/// Particle radius scales with engine power.
pub fn particle_size(horsepower: Option<f64>) -> f32 {
    let hp = horsepower.unwrap_or(DEFAULT_HORSEPOWER) as f32;
    (hp / 500.0).clamp(MIN_PARTICLE_SIZE, MAX_PARTICLE_SIZE)
}

/// One instanced sphere per bike, laid out around its cluster anchor and
/// tinted with the cluster color.
pub fn get_universe_object(
    context: &Context,
    clusters: &[Cluster],
) -> Gm<InstancedMesh, ColorMaterial> {
    let mut transformations = Vec::new();
    let mut colors = Vec::new();

    for cluster in clusters {
        let positions = sphere::member_positions(cluster.position, cluster.members.len());
        let (r, g, b) = cluster.color;

        for (record, position) in cluster.members.iter().zip(positions) {
            let size = particle_size(record.horsepower_hp);
            transformations.push(Mat4::from_translation(position) * Mat4::from_scale(size));
            colors.push(Srgba::new(r, g, b, 255));
        }
    }

    let instances = Instances {
        transformations,
        colors: Some(colors),
        ..Default::default()
    };

    let point_mesh = CpuMesh::sphere(8);

    Gm {
        geometry: InstancedMesh::new(context, &instances, &point_mesh),
        material: ColorMaterial::default(),
    }
}
