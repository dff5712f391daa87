//! Projection matrices and the window-space mapping which uses them.
//!
//! Every builder takes an explicit [Handedness] and [NdcDepth]. The
//! `*_with` variants take both from a [ClipConvention] instead.

mod checks;
mod convention;
mod frustum;
mod ortho;
mod perspective;
mod project;
mod viewport;

pub use self::{
    checks::{
        check_box, check_frustum, check_perspective, check_perspective_fov,
        ProjectionError,
    },
    convention::{ClipConvention, Handedness, NdcDepth},
    frustum::{frustum, frustum_with},
    ortho::{ortho, ortho_2d, ortho_with},
    perspective::{
        perspective, perspective_fov, perspective_fov_with, perspective_with,
    },
    project::{project, unproject},
    viewport::Viewport,
};
