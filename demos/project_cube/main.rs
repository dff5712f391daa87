use anyhow::{bail, Result};
use ccthw_projection::{
    logging,
    math::{
        projections::{
            perspective_fov_with, project, unproject, ClipConvention,
            Viewport,
        },
        Mat4, Vec3,
    },
};

/// Corners of a unit cube centered on the origin.
fn cube_corners() -> Vec<Vec3<f64>> {
    let mut corners = Vec::with_capacity(8);
    for &x in &[-0.5, 0.5] {
        for &y in &[-0.5, 0.5] {
            for &z in &[-0.5, 0.5] {
                corners.push(Vec3::new(x, y, z));
            }
        }
    }
    corners
}

fn main() -> Result<()> {
    logging::setup()?;

    let viewport = Viewport::with_extent(1280.0, 720.0);
    viewport.check()?;

    let presets = [
        ("OpenGL", ClipConvention::OPENGL),
        ("Vulkan", ClipConvention::VULKAN),
        ("DirectX", ClipConvention::DIRECTX),
    ];

    for (name, convention) in presets.iter() {
        let fov = 60.0_f64.to_radians();
        let proj = perspective_fov_with(
            *convention,
            fov,
            viewport.width,
            viewport.height,
            0.1,
            100.0,
        );

        // push the cube 3 units in front of the eye
        let ahead = convention.handedness.z_sign::<f64>();
        let model = Mat4::new_translation(&Vec3::new(0.0, 0.0, 3.0 * ahead))
            * Mat4::from_euler_angles(0.4, 0.6, 0.0);

        log::info!("{} projection:{}", name, proj);

        for corner in cube_corners() {
            let win =
                project(&corner, &model, &proj, &viewport, convention.depth);
            let back =
                unproject(&win, &model, &proj, &viewport, convention.depth);
            log::info!(
                "{} ({:.2}, {:.2}, {:.2}) -> ({:.1}, {:.1}, {:.4})",
                name,
                corner.x,
                corner.y,
                corner.z,
                win.x,
                win.y,
                win.z
            );
            if !(0.0..=1.0).contains(&win.z) {
                bail!(
                    "{} corner {:?} is outside the depth range, window {:?}",
                    name,
                    corner,
                    win
                );
            }
            if (back - corner).norm() > 1e-9 {
                bail!(
                    "{} corner {:?} did not round-trip, got {:?}",
                    name,
                    corner,
                    back
                );
            }
        }
    }

    Ok(())
}
