pub mod projections;

pub type Mat4<T> = nalgebra::Matrix4<T>;
pub type Vec3<T> = nalgebra::Vector3<T>;
pub type Vec4<T> = nalgebra::Vector4<T>;

/// The scalar type every projection function is generic over.
///
/// Any nalgebra real field works, so both `f32` and `f64` matrices can be
/// built from the same functions.
pub trait Real: nalgebra::RealField + Copy {}

impl<T> Real for T where T: nalgebra::RealField + Copy {}

/// Convert an f64 literal into the scalar type.
pub(crate) fn lit<T: Real>(value: f64) -> T {
    nalgebra::convert(value)
}
