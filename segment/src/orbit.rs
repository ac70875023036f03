use std::f32::consts::TAU;

use glam::Vec3;
use splat_cmn::CameraPose;

/// Camera poses evenly distributed around the current viewing azimuth.
///
/// Keeps the orbit radius `hypot(x, z)` and height `y` of the starting
/// pose; all poses look at the origin. `count` is clamped to at least 1,
/// and `count == 1` reproduces the current azimuth.
pub fn orbit_poses(start: &CameraPose, count: u32) -> Vec<CameraPose> {
    let count = count.max(1);
    let p = start.position;
    let radius = p.x.hypot(p.z);
    let azimuth = p.x.atan2(p.z);
    let step = TAU / count as f32;

    (0..count)
        .map(|i| {
            let t = azimuth + i as f32 * step;
            CameraPose {
                position: Vec3::new(radius * t.sin(), p.y, radius * t.cos()),
                target: Vec3::ZERO,
            }
        })
        .collect()
}
