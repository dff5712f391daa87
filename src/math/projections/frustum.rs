use crate::math::{
    lit,
    projections::{ClipConvention, Handedness, NdcDepth},
    Mat4, Real,
};

/// Build a perspective projection matrix for a (possibly asymmetric) view
/// frustum.
///
/// `left`, `right`, `bottom` and `top` are the extents of the near plane,
/// `near` and `far` are positive distances from the eye. The eye looks down
/// -z in right-handed eye space and down +z in left-handed eye space, so
/// the resulting clip-space w is -z or z respectively.
///
/// After the perspective divide the near plane's edges land on x, y = ±1,
/// near maps to the low end of the `depth` range and far maps to 1.0.
///
/// This is the general form every symmetric perspective builder delegates
/// to.
#[allow(clippy::too_many_arguments)]
pub fn frustum<T: Real>(
    left: T,
    right: T,
    bottom: T,
    top: T,
    near: T,
    far: T,
    handedness: Handedness,
    depth: NdcDepth,
) -> Mat4<T> {
    let two: T = lit(2.0);
    let s = handedness.z_sign::<T>();

    let mh = two * near / (right - left);
    let mv = two * near / (top - bottom);

    // Everything in the z column is mirrored by handedness, including the
    // off-center shift.
    let bh = -s * (right + left) / (right - left);
    let bv = -s * (top + bottom) / (top - bottom);
    let (mz, bz) = match depth {
        NdcDepth::NegativeOneToOne => (
            (far + near) / (far - near),
            -(two * far * near) / (far - near),
        ),
        NdcDepth::ZeroToOne => {
            (far / (far - near), -(far * near) / (far - near))
        }
    };
    let mz = s * mz;

    let zero = T::zero();
    Mat4::new(
        mh, zero, bh, zero, //
        zero, mv, bv, zero, //
        zero, zero, mz, bz, //
        zero, zero, s, zero,
    )
}

/// [frustum] with the handedness and depth range taken from a convention.
pub fn frustum_with<T: Real>(
    convention: ClipConvention,
    left: T,
    right: T,
    bottom: T,
    top: T,
    near: T,
    far: T,
) -> Mat4<T> {
    frustum(
        left,
        right,
        bottom,
        top,
        near,
        far,
        convention.handedness,
        convention.depth,
    )
}

#[cfg(test)]
mod tests {
    use approx::{assert_abs_diff_eq, assert_relative_eq};

    use super::*;
    use crate::math::Vec4;

    const CONVENTIONS: [ClipConvention; 4] = [
        ClipConvention::OPENGL,
        ClipConvention::VULKAN,
        ClipConvention::DIRECTX,
        ClipConvention::new(Handedness::LeftHanded, NdcDepth::NegativeOneToOne),
    ];

    fn ndc(m: &Mat4<f64>, x: f64, y: f64, z: f64) -> Vec4<f64> {
        let clip = m * Vec4::new(x, y, z, 1.0);
        clip / clip.w
    }

    #[test]
    fn asymmetric_frustum_corners_land_on_the_clip_cube() {
        let (l, r, b, t, n, f) = (-0.5, 1.5, -0.25, 0.75, 1.0, 40.0);
        for convention in CONVENTIONS.iter().copied() {
            let m = frustum_with(convention, l, r, b, t, n, f);
            let ahead = convention.handedness.z_sign::<f64>();

            // near plane corners are the bounds themselves
            for &(x, ex) in &[(l, -1.0), (r, 1.0)] {
                for &(y, ey) in &[(b, -1.0), (t, 1.0)] {
                    let p = ndc(&m, x, y, ahead * n);
                    assert_abs_diff_eq!(p.x, ex, epsilon = 1e-12);
                    assert_abs_diff_eq!(p.y, ey, epsilon = 1e-12);
                    assert_abs_diff_eq!(
                        p.z,
                        convention.depth.near_value::<f64>(),
                        epsilon = 1e-12
                    );
                }
            }

            // far plane corners are the near bounds scaled by far / near
            let k = f / n;
            for &(x, ex) in &[(l * k, -1.0), (r * k, 1.0)] {
                for &(y, ey) in &[(b * k, -1.0), (t * k, 1.0)] {
                    let p = ndc(&m, x, y, ahead * f);
                    assert_abs_diff_eq!(p.x, ex, epsilon = 1e-9);
                    assert_abs_diff_eq!(p.y, ey, epsilon = 1e-9);
                    assert_abs_diff_eq!(p.z, 1.0, epsilon = 1e-9);
                }
            }
        }
    }

    #[test]
    fn w_is_the_distance_in_front_of_the_eye() {
        let rh = frustum(
            -1.0_f64,
            1.0,
            -1.0,
            1.0,
            1.0,
            10.0,
            Handedness::RightHanded,
            NdcDepth::ZeroToOne,
        );
        let lh = frustum(
            -1.0_f64,
            1.0,
            -1.0,
            1.0,
            1.0,
            10.0,
            Handedness::LeftHanded,
            NdcDepth::ZeroToOne,
        );
        assert_relative_eq!((rh * Vec4::new(0.3, 0.2, -4.0, 1.0)).w, 4.0);
        assert_relative_eq!((lh * Vec4::new(0.3, 0.2, 4.0, 1.0)).w, 4.0);
    }

    #[test]
    fn right_handed_opengl_layout() {
        let (l, r, b, t, n, f) = (-2.0_f64, 2.0, -1.0, 1.0, 1.0, 3.0);
        let m = frustum(
            l,
            r,
            b,
            t,
            n,
            f,
            Handedness::RightHanded,
            NdcDepth::NegativeOneToOne,
        );
        let expected = Mat4::new(
            0.5, 0.0, 0.0, 0.0, //
            0.0, 1.0, 0.0, 0.0, //
            0.0, 0.0, -2.0, -3.0, //
            0.0, 0.0, -1.0, 0.0,
        );
        assert_relative_eq!(m, expected);
    }

    #[test]
    fn left_handed_is_right_handed_with_mirrored_z_column() {
        for &depth in &[NdcDepth::NegativeOneToOne, NdcDepth::ZeroToOne] {
            let lh = frustum(
                -0.3_f64,
                0.9,
                -0.2,
                0.4,
                0.5,
                100.0,
                Handedness::LeftHanded,
                depth,
            );
            let rh = frustum(
                -0.3_f64,
                0.9,
                -0.2,
                0.4,
                0.5,
                100.0,
                Handedness::RightHanded,
                depth,
            );
            let mirror = Mat4::from_diagonal(&Vec4::new(1.0, 1.0, -1.0, 1.0));
            assert_relative_eq!(lh, rh * mirror);
        }
    }

    #[test]
    fn equal_near_and_far_is_not_finite() {
        let m = frustum(
            -1.0_f32,
            1.0,
            -1.0,
            1.0,
            2.0,
            2.0,
            Handedness::RightHanded,
            NdcDepth::NegativeOneToOne,
        );
        assert!(!m[(2, 2)].is_finite());
        assert!(!m[(2, 3)].is_finite());
    }
}
