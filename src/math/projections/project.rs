use crate::math::{
    projections::{NdcDepth, Viewport},
    Mat4, Real, Vec3, Vec4,
};

/// Map an object-space point into window coordinates.
///
/// The point is transformed by `proj * model`, divided by w, and then x/y
/// are mapped into the viewport. Window depth is always in [0, 1]; `depth`
/// must be the NDC depth range `proj` was built for.
///
/// Points on the eye plane have w = 0 and come back non-finite.
pub fn project<T: Real>(
    obj: &Vec3<T>,
    model: &Mat4<T>,
    proj: &Mat4<T>,
    viewport: &Viewport<T>,
    depth: NdcDepth,
) -> Vec3<T> {
    let clip = proj * (model * obj.push(T::one()));
    let ndc = clip.xyz() / clip.w;
    let (x, y) = viewport.to_window(ndc.x, ndc.y);
    Vec3::new(x, y, depth.to_window(ndc.z))
}

/// Map window coordinates back into object space.
///
/// This is the inverse of [project] for the same matrices, viewport and
/// depth convention. `win.z` is a [0, 1] depth-buffer value.
///
/// When `proj * model` is singular every component of the result is NaN.
pub fn unproject<T: Real>(
    win: &Vec3<T>,
    model: &Mat4<T>,
    proj: &Mat4<T>,
    viewport: &Viewport<T>,
    depth: NdcDepth,
) -> Vec3<T> {
    let inverse = match (proj * model).try_inverse() {
        Some(inverse) => inverse,
        None => {
            log::trace!(
                "unable to unproject {:?}, proj * model is singular",
                win
            );
            return Vec3::repeat(T::zero() / T::zero());
        }
    };

    let (x, y) = viewport.to_ndc(win.x, win.y);
    let ndc = Vec4::new(x, y, depth.from_window(win.z), T::one());
    let obj = inverse * ndc;
    obj.xyz() / obj.w
}
