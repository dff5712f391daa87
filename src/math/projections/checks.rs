//! Optional precondition checks.
//!
//! The builders and project/unproject never validate their inputs, bad
//! inputs simply produce non-finite results. Callers that take bounds from
//! user input or config can run these first to get a descriptive error.

use ::thiserror::Error;

use crate::math::{projections::Viewport, Real};

/// Everything which makes a projection degenerate.
#[derive(Debug, Error, Copy, Clone, PartialEq, Eq)]
pub enum ProjectionError {
    #[error("The left and right bounds are equal or reversed")]
    EmptyHorizontalRange,

    #[error("The bottom and top bounds are equal or reversed")]
    EmptyVerticalRange,

    #[error("The far plane must be farther away than the near plane")]
    EmptyDepthRange,

    #[error("Perspective projections need a near plane in front of the eye")]
    NonPositiveNear,

    #[error("The aspect ratio must be nonzero and finite")]
    ZeroAspectRatio,

    #[error("The field of view must be between 0 and PI radians")]
    FieldOfViewOutOfRange,

    #[error("The viewport must have a positive width and height")]
    EmptyViewport,
}

/// Check the view box given to [super::ortho].
pub fn check_box<T: Real>(
    left: T,
    right: T,
    bottom: T,
    top: T,
    near: T,
    far: T,
) -> Result<(), ProjectionError> {
    if !(right > left) {
        return Err(ProjectionError::EmptyHorizontalRange);
    }
    if !(top > bottom) {
        return Err(ProjectionError::EmptyVerticalRange);
    }
    if !(far > near) {
        return Err(ProjectionError::EmptyDepthRange);
    }
    Ok(())
}

/// Check the bounds given to [super::frustum].
pub fn check_frustum<T: Real>(
    left: T,
    right: T,
    bottom: T,
    top: T,
    near: T,
    far: T,
) -> Result<(), ProjectionError> {
    if !(near > T::zero()) {
        return Err(ProjectionError::NonPositiveNear);
    }
    check_box(left, right, bottom, top, near, far)
}

/// Check the parameters given to [super::perspective].
pub fn check_perspective<T: Real>(
    fovy: T,
    aspect: T,
    near: T,
    far: T,
) -> Result<(), ProjectionError> {
    if !(fovy > T::zero() && fovy < T::pi()) {
        return Err(ProjectionError::FieldOfViewOutOfRange);
    }
    if aspect == T::zero() || !aspect.is_finite() {
        return Err(ProjectionError::ZeroAspectRatio);
    }
    if !(near > T::zero()) {
        return Err(ProjectionError::NonPositiveNear);
    }
    if !(far > near) {
        return Err(ProjectionError::EmptyDepthRange);
    }
    Ok(())
}

/// Check the parameters given to [super::perspective_fov].
pub fn check_perspective_fov<T: Real>(
    fov: T,
    width: T,
    height: T,
    near: T,
    far: T,
) -> Result<(), ProjectionError> {
    if !(width > T::zero() && height > T::zero()) {
        return Err(ProjectionError::EmptyViewport);
    }
    check_perspective(fov, width / height, near, far)
}

impl<T: Real> Viewport<T> {
    /// Check that the viewport can be mapped back to NDC.
    pub fn check(&self) -> Result<(), ProjectionError> {
        if self.width > T::zero() && self.height > T::zero() {
            Ok(())
        } else {
            Err(ProjectionError::EmptyViewport)
        }
    }
}
