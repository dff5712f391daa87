use crate::math::{
    lit,
    projections::{frustum, ClipConvention, Handedness, NdcDepth},
    Mat4, Real,
};

/// Build a symmetric perspective projection from a vertical field of view.
///
/// `fovy` is in radians and should be in (0, PI). `aspect` is width divided
/// by height. The frustum's near-plane extents are derived from the field
/// of view and handed to [frustum], so symmetric and asymmetric projections
/// share one sign convention.
pub fn perspective<T: Real>(
    fovy: T,
    aspect: T,
    near: T,
    far: T,
    handedness: Handedness,
    depth: NdcDepth,
) -> Mat4<T> {
    let half: T = lit(0.5);
    let half_top = near * (fovy * half).tan();
    let half_right = half_top * aspect;
    frustum(
        -half_right,
        half_right,
        -half_top,
        half_top,
        near,
        far,
        handedness,
        depth,
    )
}

/// [perspective] with the handedness and depth range taken from a
/// convention.
pub fn perspective_with<T: Real>(
    convention: ClipConvention,
    fovy: T,
    aspect: T,
    near: T,
    far: T,
) -> Mat4<T> {
    perspective(
        fovy,
        aspect,
        near,
        far,
        convention.handedness,
        convention.depth,
    )
}

/// Build a symmetric perspective projection from a field of view and the
/// pixel dimensions of the render target.
///
/// `fov` is the vertical field of view in radians. The horizontal extent
/// follows from `width / height`, so the result matches
/// `perspective(fov, width / height, ..)`.
#[allow(clippy::too_many_arguments)]
pub fn perspective_fov<T: Real>(
    fov: T,
    width: T,
    height: T,
    near: T,
    far: T,
    handedness: Handedness,
    depth: NdcDepth,
) -> Mat4<T> {
    let half: T = lit(0.5);
    let (sin, cos) = (fov * half).sin_cos();
    let half_top = near * sin / cos;
    let half_right = half_top * width / height;
    frustum(
        -half_right,
        half_right,
        -half_top,
        half_top,
        near,
        far,
        handedness,
        depth,
    )
}

/// [perspective_fov] with the handedness and depth range taken from a
/// convention.
pub fn perspective_fov_with<T: Real>(
    convention: ClipConvention,
    fov: T,
    width: T,
    height: T,
    near: T,
    far: T,
) -> Mat4<T> {
    perspective_fov(
        fov,
        width,
        height,
        near,
        far,
        convention.handedness,
        convention.depth,
    )
}
