//! Scalar helpers shared by the solvers: sign, clamping, interpolation and the
//! non-zero guard applied to every value that ends up as a divisor.

use serde::{Deserialize, Serialize};

/// How [`non_zero`] picks the smallest magnitude it lets through.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NonZeroPolicy {
    /// `f64::MIN_POSITIVE`, the smallest positive normal double.
    SmallestPositive,
    /// A caller-chosen magnitude. Values at or below `f64::MIN_POSITIVE` fall
    /// back to it.
    Fixed(f64),
}

impl NonZeroPolicy {
    pub fn epsilon(&self) -> f64 {
        match *self {
            Self::SmallestPositive => f64::MIN_POSITIVE,
            Self::Fixed(eps) => {
                let eps = eps.abs();
                if eps > f64::MIN_POSITIVE { eps } else { f64::MIN_POSITIVE }
            }
        }
    }
}

impl Default for NonZeroPolicy {
    fn default() -> Self {
        Self::SmallestPositive
    }
}

/// `1.0` for zero and positive values (including `-0.0`), `-1.0` for negative
/// values, `0.0` for NaN.
pub fn sign(value: f64) -> f64 {
    if value >= 0.0 {
        1.0
    } else if value < 0.0 {
        -1.0
    } else {
        0.0
    }
}

/// Clamp into `[lower, upper]`. Never panics; NaN maps to `lower`.
pub fn clamp(value: f64, lower: f64, upper: f64) -> f64 {
    let capped = if upper < value { upper } else { value };
    if lower < capped { capped } else { lower }
}

pub fn sqr(value: f64) -> f64 {
    value * value
}

/// Linear interpolation. Exact at `t == 0`, and exactly `a` for any finite `t`
/// when `a == b`.
pub fn lerp(a: f64, b: f64, t: f64) -> f64 {
    a + t * (b - a)
}

/// Push `value` away from zero: magnitudes below the policy's epsilon become
/// that epsilon, keeping the sign (zero is treated as positive).
pub fn non_zero(value: f64, policy: NonZeroPolicy) -> f64 {
    let smallest = policy.epsilon();
    let magnitude = value.abs();
    // Written as a comparison so NaN passes through untouched.
    let magnitude = if magnitude < smallest { smallest } else { magnitude };
    magnitude * sign(value)
}

/// Clamp the magnitude of `value` into `[lower, upper]`, keeping its sign.
pub fn signed_fit(value: f64, lower: f64, upper: f64) -> f64 {
    clamp(value.abs(), lower, upper) * sign(value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sign() {
        assert_eq!(sign(3.0), 1.0);
        assert_eq!(sign(-0.5), -1.0);
        assert_eq!(sign(0.0), 1.0);
        assert_eq!(sign(-0.0), 1.0);
        assert_eq!(sign(f64::NAN), 0.0);
    }

    #[test]
    fn test_clamp() {
        assert_eq!(clamp(2.0, -1.0, 1.0), 1.0);
        assert_eq!(clamp(-2.0, -1.0, 1.0), -1.0);
        assert_eq!(clamp(0.25, -1.0, 1.0), 0.25);
        assert_eq!(clamp(f64::NAN, -1.0, 1.0), -1.0);
    }

    #[test]
    fn test_lerp_endpoints() {
        assert_eq!(lerp(2.0, 6.0, 0.0), 2.0);
        assert_eq!(lerp(2.0, 6.0, 1.0), 6.0);
        assert_eq!(lerp(2.0, 6.0, 0.25), 3.0);
        assert_eq!(lerp(1.0, 1.0, 0.3), 1.0);
    }

    #[test]
    fn test_non_zero() {
        let p = NonZeroPolicy::SmallestPositive;
        assert_eq!(non_zero(0.0, p), f64::MIN_POSITIVE);
        assert_eq!(non_zero(-0.0, p), f64::MIN_POSITIVE);
        assert_eq!(non_zero(-1e-320, p), -f64::MIN_POSITIVE);
        assert_eq!(non_zero(-4.0, p), -4.0);
        assert!(non_zero(f64::NAN, p).is_nan());
    }

    #[test]
    fn test_fixed_policy() {
        let p = NonZeroPolicy::Fixed(1e-9);
        assert_eq!(non_zero(0.0, p), 1e-9);
        assert_eq!(non_zero(-1e-12, p), -1e-9);
        assert_eq!(non_zero(0.5, p), 0.5);
        assert_eq!(NonZeroPolicy::Fixed(0.0).epsilon(), f64::MIN_POSITIVE);
        assert_eq!(NonZeroPolicy::Fixed(-1e-6).epsilon(), 1e-6);
    }

    #[test]
    fn test_signed_fit() {
        assert_eq!(signed_fit(5.0, 1.0, 3.0), 3.0);
        assert_eq!(signed_fit(-5.0, 1.0, 3.0), -3.0);
        assert_eq!(signed_fit(-2.0, 1.0, 3.0), -2.0);
        assert_eq!(signed_fit(0.1, 1.0, 3.0), 1.0);
        assert_eq!(signed_fit(-0.1, 1.0, 3.0), -1.0);
    }
}
