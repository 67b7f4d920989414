//! Latency objective and its exact gradient.
//!
//! Both functions require all three variables to be strictly positive;
//! the solver's feasibility projection guarantees this. They are pure and
//! have no failure modes beyond that domain requirement.

use num_traits::Float;

/// Latency objective `a/x1 + b/x2 + c/x3`.
///
/// # Example
///
/// ```
/// use link_optimiser::lagrange::latency;
///
/// let l: f64 = latency(2.0, 4.0, 5.0, 1.0, 2.0, 1.0);
/// assert!((l - 1.2).abs() < 1e-12);
/// ```
#[inline]
pub fn latency<T: Float>(x1: T, x2: T, x3: T, a: T, b: T, c: T) -> T {
    a / x1 + b / x2 + c / x3
}

/// Exact partial derivatives of the latency objective.
///
/// Returns `(-a/x1^2, -b/x2^2, -c/x3^2)`.
///
/// # Example
///
/// ```
/// use link_optimiser::lagrange::latency_gradient;
///
/// let (g1, g2, g3): (f64, f64, f64) = latency_gradient(2.0, 1.0, 1.0, 1.0, 1.0, 1.0);
/// assert!((g1 + 0.25).abs() < 1e-12);
/// assert!((g2 + 1.0).abs() < 1e-12);
/// assert!((g3 + 1.0).abs() < 1e-12);
/// ```
#[inline]
pub fn latency_gradient<T: Float>(x1: T, x2: T, x3: T, a: T, b: T, c: T) -> (T, T, T) {
    (-a / (x1 * x1), -b / (x2 * x2), -c / (x3 * x3))
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_latency_unit_point() {
        assert_relative_eq!(latency(1.0, 1.0, 1.0, 1.2, 0.8, 0.5), 2.5);
    }

    #[test]
    fn test_latency_scales_inversely() {
        let near = latency(1.0, 1.0, 1.0, 1.0, 1.0, 1.0);
        let far = latency(2.0, 2.0, 2.0, 1.0, 1.0, 1.0);
        assert_relative_eq!(far, near / 2.0);
    }

    #[test]
    fn test_gradient_matches_finite_difference() {
        let (x1, x2, x3) = (6.0, 2.0, 16.0);
        let (a, b, c) = (1.2, 0.8, 0.5);
        let h = 1e-7;

        let (g1, g2, g3) = latency_gradient(x1, x2, x3, a, b, c);
        let fd1 = (latency(x1 + h, x2, x3, a, b, c) - latency(x1 - h, x2, x3, a, b, c)) / (2.0 * h);
        let fd2 = (latency(x1, x2 + h, x3, a, b, c) - latency(x1, x2 - h, x3, a, b, c)) / (2.0 * h);
        let fd3 = (latency(x1, x2, x3 + h, a, b, c) - latency(x1, x2, x3 - h, a, b, c)) / (2.0 * h);

        assert_relative_eq!(g1, fd1, epsilon = 1e-6);
        assert_relative_eq!(g2, fd2, epsilon = 1e-6);
        assert_relative_eq!(g3, fd3, epsilon = 1e-6);
    }

    #[test]
    fn test_gradient_always_negative() {
        let (g1, g2, g3) = latency_gradient(3.0, 0.5, 10.0, 1.0, 2.0, 0.1);
        assert!(g1 < 0.0);
        assert!(g2 < 0.0);
        assert!(g3 < 0.0);
    }

    #[test]
    fn test_with_f32() {
        let l = latency(2.0_f32, 4.0, 5.0, 1.0, 2.0, 1.0);
        assert!((l - 1.2).abs() < 1e-6);
    }
}
