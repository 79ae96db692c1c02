use num::Float;

/// Triangular membership with feet `a`, `c` and peak `b`.
///
/// Exactly `1` at the peak and `0` at both feet, including the degenerate
/// `a == b` or `b == c` shapes used for shoulders at the edge of a universe.
pub fn triangle<F: Float>(x: F, a: F, b: F, c: F) -> F {
    if x == b {
        F::one()
    } else if a < x && x < b {
        (x - a) / (b - a)
    } else if b < x && x < c {
        (c - x) / (c - b)
    } else {
        F::zero()
    }
}

/// Trapezoidal membership: rises on `(a, b)`, plateau on `[b, c]`, falls on `(c, d)`.
///
/// The strict ramp bounds keep `a == b` and `c == d` away from the divisions.
pub fn trapezoid<F: Float>(x: F, a: F, b: F, c: F, d: F) -> F {
    if a < x && x < b {
        (x - a) / (b - a)
    } else if b <= x && x <= c {
        F::one()
    } else if c < x && x < d {
        (d - x) / (d - c)
    } else {
        F::zero()
    }
}

/// Breakpoints of one linguistic category.
///
/// Breakpoint ordering is not validated; these are design-time constants.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Shape {
    Triangle(f64, f64, f64),
    Trapezoid(f64, f64, f64, f64),
}

impl Shape {
    pub fn eval(self, x: f64) -> f64 {
        match self {
            Self::Triangle(a, b, c) => triangle(x, a, b, c),
            Self::Trapezoid(a, b, c, d) => trapezoid(x, a, b, c, d),
        }
    }

    /// Outer feet of the shape, outside of which membership is always zero
    pub fn support(self) -> (f64, f64) {
        match self {
            Self::Triangle(a, _, c) => (a, c),
            Self::Trapezoid(a, _, _, d) => (a, d),
        }
    }
}

#[test]
fn test_triangle() {
    assert_eq!(triangle(100., 100., 250., 400.), 0.);
    assert_eq!(triangle(175., 100., 250., 400.), 0.5);
    assert_eq!(triangle(250., 100., 250., 400.), 1.);
    assert_eq!(triangle(325., 100., 250., 400.), 0.5);
    assert_eq!(triangle(400., 100., 250., 400.), 0.);
    assert_eq!(triangle(-5., 100., 250., 400.), 0.);
    assert_eq!(triangle(1e9, 100., 250., 400.), 0.);
}

#[test]
fn test_triangle_degenerate_shoulders() {
    // Left shoulder: the foot and the peak coincide
    assert_eq!(triangle(0., 0., 0., 150_000.), 1.);
    assert_eq!(triangle(75_000., 0., 0., 150_000.), 0.5);
    assert_eq!(triangle(150_000., 0., 0., 150_000.), 0.);
    assert_eq!(triangle(-1., 0., 0., 150_000.), 0.);

    // Right shoulder
    assert_eq!(triangle(10., 7., 10., 10.), 1.);
    assert_eq!(triangle(8.5, 7., 10., 10.), 0.5);
    assert_eq!(triangle(10.5, 7., 10., 10.), 0.);

    // A spike
    assert_eq!(triangle(3.0f32, 3., 3., 3.), 1.);
    assert_eq!(triangle(3.1f32, 3., 3., 3.), 0.);
}

#[test]
fn test_trapezoid() {
    let mf = |x: f64| trapezoid(x, 2., 4., 6., 8.);

    assert_eq!(mf(0.), 0.);
    assert_eq!(mf(2.), 0.);
    assert_eq!(mf(3.), 0.5);
    assert_eq!(mf(4.), 1.);
    assert_eq!(mf(5.), 1.);
    assert_eq!(mf(6.), 1.);
    assert_eq!(mf(7.), 0.5);
    assert_eq!(mf(8.), 0.);
    assert_eq!(mf(100.), 0.);
}

#[test]
fn test_trapezoid_vertical_edges() {
    assert_eq!(trapezoid(0., 0., 0., 70_000., 100_000.), 1.);
    assert_eq!(trapezoid(85_000., 0., 0., 70_000., 100_000.), 0.5);
    assert_eq!(trapezoid(-0.5, 0., 0., 70_000., 100_000.), 0.);

    assert_eq!(trapezoid(10., 6., 8.5, 10., 10.), 1.);
    assert_eq!(trapezoid(10.01, 6., 8.5, 10., 10.), 0.);

    let all_vertical = trapezoid(1., 1., 1., 1., 1.);
    assert_eq!(all_vertical, 1.);
    assert!(!trapezoid(1.5, 1., 1., 1., 1.).is_nan());
}

#[test]
fn test_shape_eval() {
    let medium = Shape::Triangle(300., 500., 700.);
    let very_high = Shape::Trapezoid(800., 900., 1000., 1000.);

    assert_eq!(medium.eval(400.), 0.5);
    assert_eq!(very_high.eval(850.), 0.5);
    assert_eq!(very_high.eval(1000.), 1.);
    assert_eq!(medium.support(), (300., 700.));
    assert_eq!(very_high.support(), (800., 1000.));
}
