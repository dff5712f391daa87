use crate::math::{lit, Real};

/// Which way eye-space z points relative to the viewer.
///
/// Right-handed eye space looks down -z (the classical OpenGL convention),
/// left-handed eye space looks down +z. The choice only changes the sign of
/// the matrix column which multiplies eye-space z.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Handedness {
    LeftHanded,
    RightHanded,
}

impl Handedness {
    /// +1 for left-handed, -1 for right-handed.
    pub fn z_sign<T: Real>(self) -> T {
        match self {
            Handedness::LeftHanded => T::one(),
            Handedness::RightHanded => -T::one(),
        }
    }
}

impl Default for Handedness {
    fn default() -> Self {
        Handedness::RightHanded
    }
}

/// The depth range of normalized device coordinates.
///
/// Window-space depth is always in [0, 1]. The NDC depth range is whatever
/// the graphics API clips against: [-1, 1] for OpenGL, [0, 1] for Vulkan,
/// DirectX, Metal and WebGPU.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum NdcDepth {
    /// near -> -1, far -> 1
    NegativeOneToOne,

    /// near -> 0, far -> 1
    ZeroToOne,
}

impl NdcDepth {
    /// The NDC depth that the near plane maps to.
    pub fn near_value<T: Real>(self) -> T {
        match self {
            NdcDepth::NegativeOneToOne => -T::one(),
            NdcDepth::ZeroToOne => T::zero(),
        }
    }

    /// The NDC depth that the far plane maps to.
    pub fn far_value<T: Real>(self) -> T {
        T::one()
    }

    /// Map an NDC depth into the [0, 1] window depth range.
    pub fn to_window<T: Real>(self, ndc_z: T) -> T {
        let half: T = lit(0.5);
        match self {
            NdcDepth::NegativeOneToOne => ndc_z * half + half,
            NdcDepth::ZeroToOne => ndc_z,
        }
    }

    /// Map a [0, 1] window depth back into this NDC depth range.
    pub fn from_window<T: Real>(self, window_z: T) -> T {
        match self {
            NdcDepth::NegativeOneToOne => {
                let two: T = lit(2.0);
                window_z * two - T::one()
            }
            NdcDepth::ZeroToOne => window_z,
        }
    }
}

impl Default for NdcDepth {
    fn default() -> Self {
        NdcDepth::NegativeOneToOne
    }
}

/// The pair of choices that decide the sign pattern of a projection matrix.
///
/// The same convention must be used to build a projection and to
/// project/unproject with it. Nothing checks this.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct ClipConvention {
    pub handedness: Handedness,
    pub depth: NdcDepth,
}

impl ClipConvention {
    /// Right-handed eye space, depth in [-1, 1].
    pub const OPENGL: Self = Self {
        handedness: Handedness::RightHanded,
        depth: NdcDepth::NegativeOneToOne,
    };

    /// Right-handed eye space, depth in [0, 1].
    pub const VULKAN: Self = Self {
        handedness: Handedness::RightHanded,
        depth: NdcDepth::ZeroToOne,
    };

    /// Left-handed eye space, depth in [0, 1].
    pub const DIRECTX: Self = Self {
        handedness: Handedness::LeftHanded,
        depth: NdcDepth::ZeroToOne,
    };

    pub const fn new(handedness: Handedness, depth: NdcDepth) -> Self {
        Self { handedness, depth }
    }
}

impl Default for ClipConvention {
    fn default() -> Self {
        Self::new(Handedness::default(), NdcDepth::default())
    }
}
