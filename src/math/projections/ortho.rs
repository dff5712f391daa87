use crate::math::{
    lit,
    projections::{ClipConvention, Handedness, NdcDepth},
    Mat4, Real,
};

/// Build an orthographic projection matrix which maps an axis-aligned view
/// box onto the canonical clip volume.
///
/// # View Space
///
///   - X in [left, right]
///   - Y in [bottom, top]
///   - Z in [near, far] for left-handed eye space, [-far, -near] for
///     right-handed eye space
///
/// # Clip Space
///
///   - [left, right] -> [-1.0, 1.0]
///   - [bottom, top] -> [-1.0, 1.0]
///   - near -> -1.0 or 0.0 (depending on `depth`), far -> 1.0
///
/// Equal bounds on any axis divide by zero and produce non-finite entries.
#[allow(clippy::too_many_arguments)]
pub fn ortho<T: Real>(
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
    let mh = two / (right - left);
    let bh = -(right + left) / (right - left);
    let mv = two / (top - bottom);
    let bv = -(top + bottom) / (top - bottom);
    let (mz, bz) = match depth {
        NdcDepth::NegativeOneToOne => {
            (two / (far - near), -(far + near) / (far - near))
        }
        NdcDepth::ZeroToOne => (T::one() / (far - near), -near / (far - near)),
    };
    let mz = mz * handedness.z_sign();
    let (zero, one) = (T::zero(), T::one());
    Mat4::new(
        mh, zero, zero, bh, //
        zero, mv, zero, bv, //
        zero, zero, mz, bz, //
        zero, zero, zero, one,
    )
}

/// [ortho] with the handedness and depth range taken from a convention.
pub fn ortho_with<T: Real>(
    convention: ClipConvention,
    left: T,
    right: T,
    bottom: T,
    top: T,
    near: T,
    far: T,
) -> Mat4<T> {
    ortho(
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

/// Build a projection for two-dimensional screen coordinates.
///
/// X and Y are mapped as in [ortho]. Z is simply negated, there is no depth
/// range to remap.
pub fn ortho_2d<T: Real>(left: T, right: T, bottom: T, top: T) -> Mat4<T> {
    let two: T = lit(2.0);
    let (zero, one) = (T::zero(), T::one());
    Mat4::new(
        two / (right - left), zero, zero, -(right + left) / (right - left), //
        zero, two / (top - bottom), zero, -(top + bottom) / (top - bottom), //
        zero, zero, -one, zero, //
        zero, zero, zero, one,
    )
}
