use crate::math::{lit, Real, Vec4};

/// The window-space rectangle that NDC x and y are mapped into.
///
/// NDC -1 maps to the `x` / `y` origin and NDC 1 maps to
/// `x + width` / `y + height`. The mapping is only invertible while both
/// extents are nonzero.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Viewport<T> {
    pub x: T,
    pub y: T,
    pub width: T,
    pub height: T,
}

impl<T: Real> Viewport<T> {
    pub fn new(x: T, y: T, width: T, height: T) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// A viewport anchored at the window origin.
    pub fn with_extent(width: T, height: T) -> Self {
        Self::new(T::zero(), T::zero(), width, height)
    }

    /// A viewport from an integer pixel rectangle, as handed out by
    /// windowing APIs.
    pub fn from_pixels(x: i32, y: i32, width: u32, height: u32) -> Self {
        Self::new(
            lit(f64::from(x)),
            lit(f64::from(y)),
            lit(f64::from(width)),
            lit(f64::from(height)),
        )
    }

    /// Width divided by height.
    pub fn aspect_ratio(&self) -> T {
        self.width / self.height
    }

    /// Map NDC x and y in [-1, 1] into the rectangle.
    pub fn to_window(&self, ndc_x: T, ndc_y: T) -> (T, T) {
        let half: T = lit(0.5);
        (
            (ndc_x * half + half) * self.width + self.x,
            (ndc_y * half + half) * self.height + self.y,
        )
    }

    /// Map window x and y back into NDC [-1, 1].
    pub fn to_ndc(&self, window_x: T, window_y: T) -> (T, T) {
        let two: T = lit(2.0);
        (
            (window_x - self.x) / self.width * two - T::one(),
            (window_y - self.y) / self.height * two - T::one(),
        )
    }
}

impl<T: Real> From<[T; 4]> for Viewport<T> {
    fn from([x, y, width, height]: [T; 4]) -> Self {
        Self::new(x, y, width, height)
    }
}

impl<T: Real> From<Vec4<T>> for Viewport<T> {
    fn from(v: Vec4<T>) -> Self {
        Self::new(v.x, v.y, v.z, v.w)
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;

    use super::*;

    #[test]
    fn ndc_corners_map_to_rectangle_corners() {
        let viewport = Viewport::new(10.0_f32, 20.0, 640.0, 480.0);
        let (x, y) = viewport.to_window(-1.0, -1.0);
        assert_relative_eq!(x, 10.0);
        assert_relative_eq!(y, 20.0);
        let (x, y) = viewport.to_window(1.0, 1.0);
        assert_relative_eq!(x, 650.0);
        assert_relative_eq!(y, 500.0);
    }

    #[test]
    fn to_ndc_inverts_to_window() {
        let viewport = Viewport::from([4.0_f64, 8.0, 300.0, 200.0]);
        let (x, y) = viewport.to_window(0.25, -0.5);
        let (nx, ny) = viewport.to_ndc(x, y);
        assert_relative_eq!(nx, 0.25, max_relative = 1e-12);
        assert_relative_eq!(ny, -0.5, max_relative = 1e-12);
    }

    #[test]
    fn integer_pixel_rectangles_convert_exactly() {
        let viewport: Viewport<f32> = Viewport::from_pixels(-8, 16, 1920, 1080);
        assert_eq!(viewport, Viewport::new(-8.0, 16.0, 1920.0, 1080.0));

        let (x, y) = viewport.to_window(1.0, 1.0);
        assert_relative_eq!(x, 1912.0);
        assert_relative_eq!(y, 1096.0);
    }

    #[test]
    fn conversions_agree() {
        let from_vec = Viewport::from(Vec4::new(0.0_f32, 0.0, 1280.0, 720.0));
        assert_eq!(from_vec, Viewport::with_extent(1280.0, 720.0));
        assert_relative_eq!(from_vec.aspect_ratio(), 16.0 / 9.0);
    }
}
