//! Attribute generators.
//!
//! Every per-particle attribute is either a fixed value or a sampler that is
//! invoked once per emitted particle. Samplers draw from the emitter's own
//! RNG so a seeded emitter replays the exact same effect.

use std::fmt;

use lantern_render::{Appearance, Color};
use lantern_shared::Vec2;
use rand::Rng;
use rand_chacha::ChaCha8Rng;

/// RNG owned by each emitter.
pub type SimRng = ChaCha8Rng;

/// Boxed sampler.
pub type Sampler<T> = Box<dyn FnMut(&mut SimRng) -> T + Send>;

/// Source of one particle attribute.
pub enum Generator<T> {
    /// Same value for every particle.
    Fixed(T),
    /// Sampled per particle.
    Sampled(Sampler<T>),
}

impl<T: Clone> Generator<T> {
    /// Fixed value.
    pub fn fixed(value: T) -> Self {
        Self::Fixed(value)
    }

    /// Sampler drawing from the emitter RNG.
    pub fn sampled(sampler: impl FnMut(&mut SimRng) -> T + Send + 'static) -> Self {
        Self::Sampled(Box::new(sampler))
    }

    /// Sampler that ignores the emitter RNG.
    pub fn from_fn(mut sampler: impl FnMut() -> T + Send + 'static) -> Self {
        Self::Sampled(Box::new(move |_| sampler()))
    }

    /// Produces the next value.
    pub fn sample(&mut self, rng: &mut SimRng) -> T {
        match self {
            Self::Fixed(value) => value.clone(),
            Self::Sampled(sampler) => sampler(rng),
        }
    }

    /// `true` when every sample is the same value.
    #[must_use]
    pub fn is_fixed(&self) -> bool {
        matches!(self, Self::Fixed(_))
    }
}

impl<T: Clone + Send + 'static> Generator<T> {
    /// Uniform pick from `values`. `None` if the list is empty.
    #[must_use]
    pub fn one_of(mut values: Vec<T>) -> Option<Self> {
        match values.len() {
            0 => None,
            1 => values.pop().map(Self::Fixed),
            len => Some(Self::sampled(move |rng| values[rng.gen_range(0..len)].clone())),
        }
    }
}

impl Generator<f32> {
    /// `min + u * (max - min)` with `u` uniform in `[0, 1)`.
    #[must_use]
    pub fn uniform(min: f32, max: f32) -> Self {
        if min == max {
            return Self::Fixed(min);
        }
        Self::sampled(move |rng| min + rng.gen::<f32>() * (max - min))
    }
}

impl Generator<Vec2> {
    /// Per-axis uniform sampling between `min` and `max`. X is drawn first.
    #[must_use]
    pub fn uniform_vec(min: Vec2, max: Vec2) -> Self {
        if min == max {
            return Self::Fixed(min);
        }
        Self::sampled(move |rng| {
            let x = min.x + rng.gen::<f32>() * (max.x - min.x);
            let y = min.y + rng.gen::<f32>() * (max.y - min.y);
            Vec2::new(x, y)
        })
    }
}

impl<T: Default> Default for Generator<T> {
    fn default() -> Self {
        Self::Fixed(T::default())
    }
}

impl<T: fmt::Debug> fmt::Debug for Generator<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Fixed(value) => f.debug_tuple("Fixed").field(value).finish(),
            Self::Sampled(_) => f.write_str("Sampled(..)"),
        }
    }
}

impl From<f32> for Generator<f32> {
    fn from(value: f32) -> Self {
        Self::Fixed(value)
    }
}

impl From<Vec2> for Generator<Vec2> {
    fn from(value: Vec2) -> Self {
        Self::Fixed(value)
    }
}

impl From<Appearance> for Generator<Appearance> {
    fn from(value: Appearance) -> Self {
        Self::Fixed(value)
    }
}

impl From<Color> for Generator<Appearance> {
    fn from(value: Color) -> Self {
        Self::Fixed(Appearance::Color(value))
    }
}
