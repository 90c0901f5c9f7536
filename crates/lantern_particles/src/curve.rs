//! Value curves.
//!
//! A curve maps normalized progress `[0, 1]` to a normalized value and is
//! memoized into a fixed table when it is built. Lookups round to the nearest
//! sample, so per-particle alpha/size shaping costs one multiply and one load.

use std::f32::consts::PI;
use std::fmt;
use std::sync::{Arc, OnceLock};

/// Shaping function behind a curve.
pub type CurveFn = dyn Fn(f32) -> f32 + Send + Sync;

/// Curves are built once and shared between emitters.
pub type SharedCurve = Arc<ValueCurve>;

/// Default number of table steps (1024 samples).
pub const DEFAULT_STEPS: usize = 1023;

/// Immutable, pre-sampled mapping from progress to value.
#[derive(Clone)]
pub struct ValueCurve {
    func: Arc<CurveFn>,
    steps: usize,
    /// `steps + 1` samples of `func` at `i / steps`.
    mapping: Vec<f32>,
}

impl ValueCurve {
    /// Builds a curve with the default table resolution.
    pub fn new(func: impl Fn(f32) -> f32 + Send + Sync + 'static) -> Self {
        Self::with_steps(func, DEFAULT_STEPS)
    }

    /// Builds a curve sampled at `steps + 1` evenly spaced points.
    ///
    /// `steps` is raised to at least 1 so both ends are always in the table.
    pub fn with_steps(func: impl Fn(f32) -> f32 + Send + Sync + 'static, steps: usize) -> Self {
        Self::from_shared(Arc::new(func), steps)
    }

    fn from_shared(func: Arc<CurveFn>, steps: usize) -> Self {
        let steps = steps.max(1);
        let mapping = (0..=steps).map(|i| func(i as f32 / steps as f32)).collect();
        Self { func, steps, mapping }
    }

    /// Table lookup at the nearest sample. Out-of-range progress is clamped.
    #[must_use]
    pub fn get(&self, p: f32) -> f32 {
        let i = (p * self.steps as f32).round();
        let index = if i.is_nan() || i <= 0.0 {
            0
        } else if i >= self.steps as f32 {
            self.steps
        } else {
            i as usize
        };
        self.mapping[index]
    }

    /// Evaluates the underlying function, bypassing the table.
    #[must_use]
    pub fn get_exact(&self, p: f32) -> f32 {
        (self.func)(p)
    }

    /// Number of table steps.
    #[must_use]
    pub fn steps(&self) -> usize {
        self.steps
    }

    /// Curve mirrored along the input: `inverted(p) = self(1 - p)`.
    #[must_use]
    pub fn invert(&self) -> Self {
        let func = Arc::clone(&self.func);
        Self::with_steps(move |p| func(1.0 - p), self.steps)
    }

    /// Concatenates `other` after `self`.
    ///
    /// `self` covers the first `mid = 1 / (1 + relative_length)` of the
    /// domain over its full input range. `other` covers the remainder and is
    /// read at `(p - mid) / relative_length`, so it only runs up to input
    /// `mid`. A non-positive `relative_length` leaves no room for `other`.
    #[must_use]
    pub fn append(&self, other: &Self, relative_length: f32) -> Self {
        if relative_length.is_nan() || relative_length <= 0.0 {
            return self.clone();
        }
        let mid = 1.0 / (1.0 + relative_length);
        let first = Arc::clone(&self.func);
        let second = Arc::clone(&other.func);
        Self::with_steps(
            move |p| {
                if p < mid {
                    first(p / mid)
                } else {
                    second((p - mid) / relative_length)
                }
            },
            self.steps.max(other.steps),
        )
    }

    /// Wraps the curve for sharing.
    #[must_use]
    pub fn shared(self) -> SharedCurve {
        Arc::new(self)
    }
}

impl fmt::Debug for ValueCurve {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ValueCurve")
            .field("steps", &self.steps)
            .field("start", &self.mapping.first())
            .field("end", &self.mapping.last())
            .finish_non_exhaustive()
    }
}

fn trapeze_fn(rise: f32, fall: f32) -> impl Fn(f32) -> f32 + Send + Sync + Copy {
    move |p| {
        if p < rise {
            p / rise
        } else if p > 1.0 - fall {
            (1.0 - p) / fall
        } else {
            1.0
        }
    }
}

/// Always 1. Two-sample table; the default for alpha and size.
#[must_use]
pub fn constant() -> SharedCurve {
    static CURVE: OnceLock<SharedCurve> = OnceLock::new();
    Arc::clone(CURVE.get_or_init(|| ValueCurve::with_steps(|_| 1.0, 1).shared()))
}

/// Identity ramp.
#[must_use]
pub fn linear() -> SharedCurve {
    static CURVE: OnceLock<SharedCurve> = OnceLock::new();
    Arc::clone(CURVE.get_or_init(|| ValueCurve::new(|p| p).shared()))
}

/// Smoothstep `3p² - 2p³`.
#[must_use]
pub fn cubic() -> SharedCurve {
    static CURVE: OnceLock<SharedCurve> = OnceLock::new();
    Arc::clone(CURVE.get_or_init(|| ValueCurve::new(|p| 3.0 * p * p - 2.0 * p * p * p).shared()))
}

/// Linear fade in over `rise`, plateau at 1, linear fade out over `fall`.
#[must_use]
pub fn trapeze(rise: f32, fall: f32) -> SharedCurve {
    ValueCurve::new(trapeze_fn(rise, fall)).shared()
}

/// Like [`trapeze`] but the ramps follow a raised cosine.
#[must_use]
pub fn cos(rise: f32, fall: f32) -> SharedCurve {
    let shape = trapeze_fn(rise, fall);
    ValueCurve::new(move |p| 0.5 - 0.5 * (PI * shape(p)).cos()).shared()
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_boundaries_hit_function_values() {
        let curve = ValueCurve::new(|p| p * p + 0.25);
        assert_eq!(curve.get(0.0), 0.25);
        assert_eq!(curve.get(1.0), 1.25);
    }

    #[test]
    fn test_out_of_range_clamps() {
        let curve = ValueCurve::new(|p| p);
        assert_eq!(curve.get(-3.0), 0.0);
        assert_eq!(curve.get(7.5), 1.0);
        assert_eq!(curve.get(f32::NAN), 0.0);
    }

    #[test]
    fn test_get_rounds_to_nearest_sample() {
        let curve = ValueCurve::with_steps(|p| p, 4);
        assert_eq!(curve.get(0.3), 0.25);
        assert_eq!(curve.get(0.4), 0.5);
        assert_eq!(curve.get_exact(0.3), 0.3);
    }

    #[test]
    fn test_invert_mirrors_input() {
        let curve = ValueCurve::new(|p| p * p);
        let inverted = curve.invert();
        for i in 0..=20 {
            let p = i as f32 / 20.0;
            assert_abs_diff_eq!(inverted.get(p), curve.get(1.0 - p), epsilon = 2.0 / DEFAULT_STEPS as f32);
        }
    }

    #[test]
    fn test_append_splits_domain() {
        let up = ValueCurve::new(|p| p);
        let down = ValueCurve::new(|p| 1.0 - p);
        // First curve takes 1/(1+3) = 25% of the domain.
        let joined = up.append(&down, 3.0);
        assert_abs_diff_eq!(joined.get_exact(0.125), 0.5, epsilon = 1e-6);
        assert_abs_diff_eq!(joined.get_exact(0.25), 1.0, epsilon = 1e-6);
        // Tail input is (p - 0.25) / 3: the second curve stops at 0.25.
        assert_abs_diff_eq!(joined.get_exact(0.625), 0.875, epsilon = 1e-6);
        assert_abs_diff_eq!(joined.get(1.0), 0.75, epsilon = 1e-6);
    }

    #[test]
    fn test_append_without_length_is_identity() {
        let up = ValueCurve::new(|p| p);
        let down = ValueCurve::new(|p| 1.0 - p);
        let joined = up.append(&down, 0.0);
        assert_eq!(joined.get(1.0), 1.0);
    }

    #[test]
    fn test_presets() {
        assert_eq!(constant().get(0.37), 1.0);
        assert_eq!(constant().steps(), 1);
        assert_eq!(linear().get(1.0), 1.0);
        assert_abs_diff_eq!(cubic().get(0.5), 0.5, epsilon = 1e-3);

        let fade = trapeze(0.1, 0.2);
        assert_eq!(fade.get(0.0), 0.0);
        assert_eq!(fade.get(0.5), 1.0);
        assert_abs_diff_eq!(fade.get(0.9), 0.5, epsilon = 1e-2);

        let soft = cos(0.1, 0.1);
        assert_abs_diff_eq!(soft.get(0.05), 0.5, epsilon = 1e-2);
        assert_eq!(soft.get(0.5), 1.0);
    }

    #[test]
    fn test_shared_presets_are_reused() {
        assert!(Arc::ptr_eq(&constant(), &constant()));
    }
}
