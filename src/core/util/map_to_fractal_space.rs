use crate::core::data::complex::Complex;
use crate::core::data::resolution::Resolution;
use crate::core::data::uv::Uv;

/// Maps normalised image coordinates to a point in fractal space.
///
/// The UV square is stretched to `[-1, 1]²`, widened by the aspect ratio so
/// non-square frames are not distorted, scaled by `1 / zoom` and centred on
/// `center`. Total over finite inputs; a degenerate resolution yields a
/// non-finite point rather than an error.
#[must_use]
pub fn map_to_fractal_space(uv: Uv, resolution: Resolution, center: Complex, zoom: f64) -> Complex {
    map_with_aspect(uv, resolution.aspect_ratio(), center, zoom)
}

/// Inverse of [`map_to_fractal_space`].
#[must_use]
pub fn fractal_to_uv(point: Complex, resolution: Resolution, center: Complex, zoom: f64) -> Uv {
    let offset = point - center;
    let aspect = resolution.aspect_ratio();

    Uv {
        u: offset.real * zoom / aspect / 2.0 + 0.5,
        v: offset.imag * zoom / 2.0 + 0.5,
    }
}

pub(crate) fn map_with_aspect(uv: Uv, aspect: f64, center: Complex, zoom: f64) -> Complex {
    let x = (uv.u - 0.5) * 2.0 * aspect;
    let y = (uv.v - 0.5) * 2.0;

    Complex {
        real: x / zoom + center.real,
        imag: y / zoom + center.imag,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f64 = 1e-12;

    fn assert_close(a: f64, b: f64) {
        assert!((a - b).abs() < EPSILON, "{} != {}", a, b);
    }

    #[test]
    fn test_uv_center_maps_to_view_center() {
        let center = Complex::new(-0.5, 0.0);
        let point = map_to_fractal_space(Uv::CENTER, Resolution::new(800, 600), center, 1.0);

        assert_eq!(point, center);
    }

    #[test]
    fn test_square_frame_corners_span_unit_square() {
        let resolution = Resolution::new(100, 100);

        let bottom_left = map_to_fractal_space(Uv::new(0.0, 0.0), resolution, Complex::ZERO, 1.0);
        let top_right = map_to_fractal_space(Uv::new(1.0, 1.0), resolution, Complex::ZERO, 1.0);

        assert_eq!(bottom_left, Complex::new(-1.0, -1.0));
        assert_eq!(top_right, Complex::new(1.0, 1.0));
    }

    #[test]
    fn test_aspect_ratio_widens_real_axis_only() {
        let resolution = Resolution::new(200, 100);
        let right_edge = map_to_fractal_space(Uv::new(1.0, 1.0), resolution, Complex::ZERO, 1.0);

        assert_eq!(right_edge, Complex::new(2.0, 1.0));
    }

    #[test]
    fn test_zoom_scales_both_axes_uniformly() {
        let resolution = Resolution::new(800, 600);
        let unzoomed = map_to_fractal_space(Uv::new(0.9, 0.2), resolution, Complex::ZERO, 1.0);
        let zoomed = map_to_fractal_space(Uv::new(0.9, 0.2), resolution, Complex::ZERO, 4.0);

        assert_close(zoomed.real * 4.0, unzoomed.real);
        assert_close(zoomed.imag * 4.0, unzoomed.imag);
    }

    #[test]
    fn test_center_translates_result() {
        let resolution = Resolution::new(640, 480);
        let uv = Uv::new(0.3, 0.7);
        let at_origin = map_to_fractal_space(uv, resolution, Complex::ZERO, 2.0);
        let shifted = map_to_fractal_space(uv, resolution, Complex::new(1.5, -0.25), 2.0);

        assert_close(shifted.real - at_origin.real, 1.5);
        assert_close(shifted.imag - at_origin.imag, -0.25);
    }

    #[test]
    fn test_mapping_is_linear_in_uv() {
        let resolution = Resolution::new(320, 200);
        let a = map_to_fractal_space(Uv::new(0.1, 0.1), resolution, Complex::ZERO, 1.0);
        let b = map_to_fractal_space(Uv::new(0.3, 0.5), resolution, Complex::ZERO, 1.0);
        let mid = map_to_fractal_space(Uv::new(0.2, 0.3), resolution, Complex::ZERO, 1.0);

        assert_close(mid.real, (a.real + b.real) / 2.0);
        assert_close(mid.imag, (a.imag + b.imag) / 2.0);
    }

    #[test]
    fn test_round_trip_through_inverse() {
        let resolution = Resolution::new(1024, 768);

        for &(u, v) in &[(0.0, 0.0), (0.25, 0.75), (0.5, 0.5), (0.9, 0.1), (1.0, 1.0)] {
            let uv = Uv::new(u, v);
            let point = map_to_fractal_space(uv, resolution, Complex::ZERO, 1.0);
            let back = fractal_to_uv(point, resolution, Complex::ZERO, 1.0);

            assert_close(back.u, u);
            assert_close(back.v, v);
        }
    }

    #[test]
    fn test_round_trip_with_offset_center_and_zoom() {
        let resolution = Resolution::new(800, 600);
        let center = Complex::new(-0.743, 0.131);
        let uv = Uv::new(0.62, 0.18);

        let point = map_to_fractal_space(uv, resolution, center, 37.5);
        let back = fractal_to_uv(point, resolution, center, 37.5);

        assert_close(back.u, uv.u);
        assert_close(back.v, uv.v);
    }

    #[test]
    fn test_negative_zoom_inverts_without_panicking() {
        let point =
            map_to_fractal_space(Uv::new(1.0, 1.0), Resolution::new(100, 100), Complex::ZERO, -1.0);

        assert_eq!(point, Complex::new(-1.0, -1.0));
    }

    #[test]
    fn test_degenerate_resolution_gives_non_finite_point() {
        let point =
            map_to_fractal_space(Uv::new(1.0, 0.5), Resolution::new(100, 0), Complex::ZERO, 1.0);

        assert!(!point.is_finite());
    }
}
