//! Numeric tolerance policy shared by every routine in the kernel.
//!
//! "Zero", "negative", "positive" and "parallel" all go through the
//! predicates below so picking, snapping and hull construction agree on
//! where the degenerate boundary lies.

use nalgebra::{ComplexField, RealField, SVector};

/// Floating-point scalar usable by the kernel.
///
/// Carries the epsilon constants for its precision.
pub trait Real: RealField + Copy {
    /// Magnitude at or below which a value counts as zero.
    const ALMOST_ZERO: Self;
    /// Half-thickness of the "inside" band used by point classification.
    const POINT_STATUS_EPSILON: Self;
    /// Cross-product magnitude at or below which three points are colinear.
    const COLINEAR_EPSILON: Self;
}

impl Real for f64 {
    const ALMOST_ZERO: Self = 1e-5;
    const POINT_STATUS_EPSILON: Self = 1e-4;
    const COLINEAR_EPSILON: Self = 1e-5;
}

impl Real for f32 {
    const ALMOST_ZERO: Self = 1e-3;
    const POINT_STATUS_EPSILON: Self = 1e-2;
    const COLINEAR_EPSILON: Self = 1e-3;
}

/// `|x| <= ALMOST_ZERO`.
#[inline]
#[must_use]
pub fn is_zero<T: Real>(x: T) -> bool {
    ComplexField::abs(x) <= T::ALMOST_ZERO
}

/// `x > ALMOST_ZERO`.
#[inline]
#[must_use]
pub fn is_pos<T: Real>(x: T) -> bool {
    x > T::ALMOST_ZERO
}

/// `x < -ALMOST_ZERO`.
#[inline]
#[must_use]
pub fn is_neg<T: Real>(x: T) -> bool {
    x < -T::ALMOST_ZERO
}

/// `a > b + ALMOST_ZERO`.
#[inline]
#[must_use]
pub fn gt<T: Real>(a: T, b: T) -> bool {
    a > b + T::ALMOST_ZERO
}

/// Returns `true` if every component of `v` is within `eps` of zero.
#[must_use]
pub fn is_null_eps<T: Real, const D: usize>(v: &SVector<T, D>, eps: T) -> bool {
    v.amax() <= eps
}

/// Returns `true` if every component of `v` is zero within `ALMOST_ZERO`.
#[must_use]
pub fn is_null<T: Real, const D: usize>(v: &SVector<T, D>) -> bool {
    is_null_eps(v, T::ALMOST_ZERO)
}

/// Component-wise comparison of two vectors with tolerance `eps`.
#[must_use]
pub fn vec_eq_eps<T: Real, const D: usize>(a: &SVector<T, D>, b: &SVector<T, D>, eps: T) -> bool {
    (a - b).amax() <= eps
}
