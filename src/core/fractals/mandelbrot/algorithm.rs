//! Fixed-point escape-time evaluator.
//!
//! Every input coordinate is first screened by cheap closed-form tests;
//! only points that survive them are iterated. Any point that reaches the
//! iteration loop satisfies |c| < 2, so every `z` inside the loop keeps
//! |z|² < 4 before its update and every intermediate fits the `i16`
//! storage and the `i32` products.

use std::convert::Infallible;

use crate::core::actions::render_line::ports::fractal_algorithm::FractalAlgorithm;
use crate::core::data::fixed::{FRACTIONAL_BITS, Fixed, Wide, wide_from_f64};
use crate::core::data::plane_coordinate::PlaneCoordinate;

pub const MAX_ITERATIONS: u8 = 30;

/// Returned for points assumed to be inside the set.
pub const INTERIOR: u8 = MAX_ITERATIONS + 1;

const BAIL_OUT_SQR: Wide = wide_from_f64(4.0);

/// Bail-out radius² in the unscaled product domain.
const BAIL_OUT_SQR_PRODUCT: Wide = BAIL_OUT_SQR << FRACTIONAL_BITS;

const OUTER_DISC_CENTRE_SHIFT: Fixed = Fixed::from_f64(0.5);
const OUTER_DISC_RADIUS_SQR: Wide = wide_from_f64(2.25);

const CARDIOID_SHIFT: Fixed = Fixed::from_f64(0.25);
const CARDIOID_OFFSET: Wide = wide_from_f64(0.1875);

const BULB_RADIUS_SQR: Wide = wide_from_f64(0.0625);

#[derive(Debug, Copy, Clone, Default, PartialEq, Eq)]
pub struct FixedPointMandelbrot;

impl FractalAlgorithm for FixedPointMandelbrot {
    type Success = u8;
    type Failure = Infallible;

    fn compute(&self, c: PlaneCoordinate) -> Result<u8, Infallible> {
        Ok(escape_time(c))
    }
}

/// Classifies `c`, returning an escape count in `0..=MAX_ITERATIONS` or
/// [`INTERIOR`].
#[must_use]
pub fn escape_time(c: PlaneCoordinate) -> u8 {
    let PlaneCoordinate { real, imag } = c;

    if outside_axis_bounds(real) || outside_axis_bounds(imag) {
        return 0;
    }

    let real_sqr = real.square().widen();
    let imag_sqr = imag.square().widen();

    if real_sqr + imag_sqr >= BAIL_OUT_SQR {
        return 0;
    }

    if outside_outer_disc(real, imag_sqr) {
        return 0;
    }

    if inside_main_cardioid(real, real_sqr, imag_sqr) || inside_period_two_bulb(real, imag_sqr) {
        return INTERIOR;
    }

    iterate(c)
}

fn outside_axis_bounds(value: Fixed) -> bool {
    value <= Fixed::MINUS_TWO || value >= Fixed::TWO
}

/// (x + 0.5)² + y² > 2.25. Slightly over-approximates the escaping region.
fn outside_outer_disc(real: Fixed, imag_sqr: Wide) -> bool {
    (real + OUTER_DISC_CENTRE_SHIFT).square().widen() + imag_sqr > OUTER_DISC_RADIUS_SQR
}

/// q · (q + x − 1/4) < y²/4 with q = (x − 1/4)² + y², expanded so the
/// second factor is x² + x/2 + y² − 3/16.
fn inside_main_cardioid(real: Fixed, real_sqr: Wide, imag_sqr: Wide) -> bool {
    let q = (real - CARDIOID_SHIFT).square().widen() + imag_sqr;
    let factor = real_sqr + real.half().widen() + imag_sqr - CARDIOID_OFFSET;

    (q * factor) >> (FRACTIONAL_BITS - 2) < imag_sqr
}

/// (x + 1)² + y² < 1/16.
fn inside_period_two_bulb(real: Fixed, imag_sqr: Wide) -> bool {
    (real + Fixed::ONE).square().widen() + imag_sqr < BULB_RADIUS_SQR
}

fn iterate(c: PlaneCoordinate) -> u8 {
    let mut z_real = c.real;
    let mut z_imag = c.imag;
    let mut iteration = 0;

    loop {
        let real_product = z_real.wide_mul(z_real);
        let imag_product = z_imag.wide_mul(z_imag);

        if iteration > MAX_ITERATIONS || real_product + imag_product >= BAIL_OUT_SQR_PRODUCT {
            return iteration;
        }

        let next_real = Fixed::narrow(real_product) - Fixed::narrow(imag_product) + c.real;
        // 2·zr·zi folds the doubling into the rescale
        z_imag = Fixed::narrow_by(z_real.wide_mul(z_imag), FRACTIONAL_BITS - 1) + c.imag;
        z_real = next_real;
        iteration += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn evaluate(real: f64, imag: f64) -> u8 {
        escape_time(PlaneCoordinate::from_f64(real, imag))
    }

    #[test]
    fn test_origin_is_interior() {
        assert_eq!(evaluate(0.0, 0.0), INTERIOR);
    }

    #[test]
    fn test_far_outside_returns_zero() {
        assert_eq!(evaluate(3.0, 0.0), 0);
        assert_eq!(evaluate(0.0, -3.5), 0);
    }

    #[test]
    fn test_axis_bound_is_inclusive() {
        assert_eq!(evaluate(-2.0, 0.0), 0);
        assert_eq!(evaluate(0.0, -2.0), 0);
        assert_eq!(evaluate(2.0, 0.0), 0);
        assert_eq!(evaluate(0.0, 2.0), 0);
    }

    #[test]
    fn test_combined_radius_rejects_corner_points() {
        assert_eq!(evaluate(-1.99, 1.99), 0);
        assert_eq!(evaluate(1.5, -1.5), 0);
    }

    #[test]
    fn test_outer_disc_rejects_without_iterating() {
        // c = 1 + 0.3i escapes on the first step; the disc test reports 0
        assert_eq!(evaluate(1.0, 0.3), 0);
    }

    #[test]
    fn test_cardioid_points_are_interior() {
        for (real, imag) in [(-0.1, 0.1), (-0.3, 0.3), (0.1, 0.2), (-0.2, -0.4), (-0.6, 0.0), (0.0, 0.5)] {
            assert_eq!(evaluate(real, imag), INTERIOR, "c = {real} + {imag}i");
        }
    }

    #[test]
    fn test_period_two_bulb_points_are_interior() {
        assert_eq!(evaluate(-1.0, 0.0), INTERIOR);
        assert_eq!(evaluate(-1.0, 0.1), INTERIOR);
        assert_eq!(evaluate(-1.1, -0.1), INTERIOR);
        assert_eq!(evaluate(-1.2, 0.0), INTERIOR);
    }

    #[test]
    fn test_iterated_points_escape_with_count() {
        assert_eq!(evaluate(-1.4, 0.2), 5);
        assert_eq!(evaluate(0.5, 0.5), 4);
        assert_eq!(evaluate(0.3, 0.0), 11);
    }

    #[test]
    fn test_loop_can_report_interior() {
        // none of these hit a shortcut; the loop runs past MAX_ITERATIONS
        assert_eq!(evaluate(-1.9, 0.0), INTERIOR);
        assert_eq!(evaluate(0.25, 0.0), INTERIOR);
        assert_eq!(evaluate(-0.75, 0.1), INTERIOR);
    }

    #[test]
    fn test_near_cardioid_cusp_escapes_slowly() {
        assert_eq!(evaluate(1064.0 / 4096.0, 0.0), 29);
    }

    #[test]
    fn test_result_never_exceeds_interior() {
        for y in (-2100..2100).step_by(97) {
            for x in (-8300..8300).step_by(131) {
                let c = PlaneCoordinate::new(Fixed::from_raw(x), Fixed::from_raw(y));
                assert!(escape_time(c) <= INTERIOR, "c = {c}");
            }
        }
    }

    #[test]
    fn test_truncation_breaks_mirror_symmetry() {
        // floor-shifting negative products drifts z differently below the axis
        let above = PlaneCoordinate::new(Fixed::from_raw(-3000), Fixed::from_raw(1200));
        let below = PlaneCoordinate::new(Fixed::from_raw(-3000), Fixed::from_raw(-1200));

        assert_eq!(escape_time(above), INTERIOR);
        assert_eq!(escape_time(below), 23);
    }

    #[test]
    fn test_algorithm_port_delegates() {
        let c = PlaneCoordinate::from_f64(0.5, 0.5);

        assert_eq!(FixedPointMandelbrot.compute(c), Ok(4));
    }
}
