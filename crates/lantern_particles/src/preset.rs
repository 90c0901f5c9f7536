//! TOML emitter presets.
//!
//! Presets describe an emitter declaratively so effects can be tuned in a
//! text file:
//!
//! ```toml
//! alpha_curve = { kind = "trapeze", rise = 0.05, fall = 0.2 }
//! velocity = { min = { x = -26.0, y = 31.5 }, max = { x = 26.0, y = 45.0 } }
//! color = { one_of = ["#806057", "#504336", "#3C8376", "#908784"] }
//! lifetime = { min = 0.5, max = 0.8 }
//! gravity = { x = 0.0, y = -100.0 }
//! ```
//!
//! Omitted fields keep the [`EmitterConfig::at`] defaults.

use std::collections::BTreeMap;

use lantern_render::{Appearance, BlendMode, Color};
use lantern_shared::Vec2;
use serde::{Deserialize, Serialize};

use crate::config::EmitterConfig;
use crate::curve::{self, SharedCurve};
use crate::error::{ParticleError, ParticleResult};
use crate::generator::Generator;

/// How one attribute is produced.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ValueSpec<T> {
    /// Same value for every particle.
    Fixed(T),
    /// Uniform between `min` and `max`.
    Range {
        /// Lower bound
        min: T,
        /// Upper bound
        max: T,
    },
    /// Uniform pick from a list.
    OneOf {
        /// Candidates
        one_of: Vec<T>,
    },
}

/// Attribute types that can be sampled from a `{ min, max }` range.
pub trait RangeSample: Clone + Send + Sized + 'static {
    /// Builds a uniform generator over `[min, max)`.
    ///
    /// # Errors
    ///
    /// Returns `ParticleError::InvalidRange` for inverted or non-finite
    /// bounds, `ParticleError::RangeUnsupported` if the type has no range.
    fn range(field: &'static str, min: Self, max: Self) -> ParticleResult<Generator<Self>>;
}

fn check_range(field: &'static str, min: f32, max: f32) -> ParticleResult<()> {
    if min.is_finite() && max.is_finite() && min <= max {
        Ok(())
    } else {
        Err(ParticleError::InvalidRange {
            field,
            min: min.to_string(),
            max: max.to_string(),
        })
    }
}

impl RangeSample for f32 {
    fn range(field: &'static str, min: Self, max: Self) -> ParticleResult<Generator<Self>> {
        check_range(field, min, max)?;
        Ok(Generator::uniform(min, max))
    }
}

impl RangeSample for Vec2 {
    fn range(field: &'static str, min: Self, max: Self) -> ParticleResult<Generator<Self>> {
        check_range(field, min.x, max.x)?;
        check_range(field, min.y, max.y)?;
        Ok(Generator::uniform_vec(min, max))
    }
}

impl RangeSample for Color {
    fn range(field: &'static str, _min: Self, _max: Self) -> ParticleResult<Generator<Self>> {
        Err(ParticleError::RangeUnsupported(field))
    }
}

impl<T: RangeSample> ValueSpec<T> {
    /// Converts to a generator. `field` names the attribute in errors.
    ///
    /// # Errors
    ///
    /// Returns error if a range is invalid or unsupported for `T`, or a
    /// `one_of` list is empty.
    pub fn into_generator(self, field: &'static str) -> ParticleResult<Generator<T>> {
        match self {
            Self::Fixed(value) => Ok(Generator::fixed(value)),
            Self::Range { min, max } => T::range(field, min, max),
            Self::OneOf { one_of } => Generator::one_of(one_of).ok_or(ParticleError::EmptyChoice(field)),
        }
    }
}

/// Named curve shape.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum CurveSpec {
    /// Always 1.
    #[default]
    Constant,
    /// Identity.
    Linear,
    /// Smoothstep.
    Cubic,
    /// Linear ramps. `fall` defaults to `rise`.
    Trapeze {
        /// Fade-in fraction
        rise: f32,
        /// Fade-out fraction
        #[serde(default)]
        fall: Option<f32>,
    },
    /// Raised-cosine ramps. `fall` defaults to `rise`.
    Cos {
        /// Fade-in fraction
        rise: f32,
        /// Fade-out fraction
        #[serde(default)]
        fall: Option<f32>,
    },
}

impl CurveSpec {
    /// Builds the curve. Shared presets are reused.
    #[must_use]
    pub fn build(self) -> SharedCurve {
        match self {
            Self::Constant => curve::constant(),
            Self::Linear => curve::linear(),
            Self::Cubic => curve::cubic(),
            Self::Trapeze { rise, fall } => curve::trapeze(rise, fall.unwrap_or(rise)),
            Self::Cos { rise, fall } => curve::cos(rise, fall.unwrap_or(rise)),
        }
    }
}

/// Declarative emitter description.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct EmitterPreset {
    /// Spawn offset
    pub offset: Option<ValueSpec<Vec2>>,
    /// Initial velocity
    pub velocity: Option<ValueSpec<Vec2>>,
    /// Particle color
    pub color: Option<ValueSpec<Color>>,
    /// Base opacity
    pub alpha: Option<ValueSpec<f32>>,
    /// Base size
    pub size: Option<ValueSpec<f32>>,
    /// Gravity, re-sampled every tick
    pub gravity: Option<ValueSpec<Vec2>>,
    /// Lifetime in seconds
    pub lifetime: Option<ValueSpec<f32>>,
    /// Velocity kept per second
    pub break_factor: Option<f32>,
    /// Canvas composite operation name
    pub blend_mode: BlendMode,
    /// Alpha over lifetime
    pub alpha_curve: CurveSpec,
    /// Size over lifetime
    pub size_curve: CurveSpec,
    /// Initial rotation
    pub angle: Option<ValueSpec<f32>>,
    /// Rotation speed
    pub angle_speed: Option<ValueSpec<f32>>,
    /// Fixed RNG seed
    pub seed: Option<u64>,
}

impl EmitterPreset {
    /// Parses a single preset.
    ///
    /// # Errors
    ///
    /// Returns `ParticleError::Config` if the TOML does not describe a preset.
    pub fn from_toml(text: &str) -> ParticleResult<Self> {
        Ok(toml::from_str(text)?)
    }

    /// Builds an emitter configuration at `position`.
    ///
    /// # Errors
    ///
    /// Returns error if any attribute spec cannot become a generator.
    pub fn into_config(self, position: Vec2) -> ParticleResult<EmitterConfig> {
        let mut config = EmitterConfig::at(position)
            .with_blend_mode(self.blend_mode)
            .with_alpha_curve(self.alpha_curve.build())
            .with_size_curve(self.size_curve.build());

        if let Some(spec) = self.offset {
            config.offset = spec.into_generator("offset")?;
        }
        if let Some(spec) = self.velocity {
            config.velocity = spec.into_generator("velocity")?;
        }
        if let Some(spec) = self.color {
            config.appearance = appearance_generator(spec.into_generator("color")?);
        }
        if let Some(spec) = self.alpha {
            config.alpha = spec.into_generator("alpha")?;
        }
        if let Some(spec) = self.size {
            config.size = spec.into_generator("size")?;
        }
        if let Some(spec) = self.gravity {
            config.gravity = spec.into_generator("gravity")?;
        }
        if let Some(spec) = self.lifetime {
            config.lifetime = spec.into_generator("lifetime")?;
        }
        if let Some(spec) = self.angle {
            config.angle = spec.into_generator("angle")?;
        }
        if let Some(spec) = self.angle_speed {
            config.angle_speed = spec.into_generator("angle_speed")?;
        }
        if let Some(break_factor) = self.break_factor {
            config.break_factor = break_factor;
        }
        config.seed = self.seed;

        Ok(config)
    }
}

fn appearance_generator(colors: Generator<Color>) -> Generator<Appearance> {
    match colors {
        Generator::Fixed(color) => Generator::Fixed(Appearance::Color(color)),
        Generator::Sampled(mut sampler) => Generator::sampled(move |rng| Appearance::Color(sampler(rng))),
    }
}

/// A file of named presets under `[presets.<name>]`.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct PresetLibrary {
    /// Presets by name
    #[serde(default)]
    pub presets: BTreeMap<String, EmitterPreset>,
}

impl PresetLibrary {
    /// Parses a preset library.
    ///
    /// # Errors
    ///
    /// Returns `ParticleError::Config` on malformed TOML.
    pub fn from_toml(text: &str) -> ParticleResult<Self> {
        Ok(toml::from_str(text)?)
    }

    /// Looks up a preset by name.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&EmitterPreset> {
        self.presets.get(name)
    }

    /// Preset names in sorted order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.presets.keys().map(String::as_str)
    }

    /// Builds the named preset's configuration at `position`.
    ///
    /// # Errors
    ///
    /// Returns `ParticleError::UnknownPreset` if `name` is missing, or any
    /// error of [`EmitterPreset::into_config`].
    pub fn config(&self, name: &str, position: Vec2) -> ParticleResult<EmitterConfig> {
        self.get(name)
            .cloned()
            .ok_or_else(|| ParticleError::UnknownPreset(name.to_string()))?
            .into_config(position)
    }
}
