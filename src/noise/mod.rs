//! Gradient noise sampling
//!
//! Provides the noise kernel (free functions over the classic table) and
//! [`PerlinNoise`], a sampler bound to a chosen permutation table.

mod perlin;
mod permutation;

pub use perlin::{fade, grad, lerp, noise, noise1, noise2, noise_with};
pub use permutation::{PermutationTable, PERIOD, TABLE_LEN};

use std::fmt::Debug;

use glam::{DVec3, Vec3};
use num_traits::Float;

use crate::config::NoiseConfig;
use crate::error::Result;
use crate::range::{constrain_value, map_value};

/// Floating-point type noise can be evaluated in
///
/// Implemented for `f32` and `f64`.
pub trait Real: Float + Debug + Send + Sync + 'static {
    /// Convert a literal constant into this type
    ///
    /// Only used for small constants that both precisions represent
    /// exactly, or for caller scales that may round to `f32`.
    fn constant(value: f64) -> Self;
}

impl Real for f32 {
    #[inline]
    fn constant(value: f64) -> Self {
        value as f32
    }
}

impl Real for f64 {
    #[inline]
    fn constant(value: f64) -> Self {
        value
    }
}

/// Noise sampler bound to a permutation table and coordinate frequency
///
/// Cheap to clone and safe to share between threads; sampling only reads
/// the table.
///
/// # Example
///
/// ```rust
/// use perlin_kernel::*;
///
/// let config = NoiseConfigBuilder::new()
///     .seed(7)
///     .frequency(0.5)
///     .unwrap()
///     .build()
///     .unwrap();
///
/// let noise = PerlinNoise::new(&config).unwrap();
/// let value: f64 = noise.get(1.5, 2.5, 3.5);
/// assert!(value.abs() <= 1.2);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct PerlinNoise {
    table: PermutationTable,
    frequency: f64,
}

impl PerlinNoise {
    /// Build a sampler from a configuration
    ///
    /// # Errors
    ///
    /// Returns `InvalidConfig` for a non-positive or non-finite frequency and
    /// `InvalidPermutation` for a malformed custom table. Both can reach this
    /// point through a deserialized config that skipped the builder.
    pub fn new(config: &NoiseConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            table: config.permutation.to_table()?,
            frequency: config.frequency,
        })
    }

    /// Sampler over the classic table at unit frequency
    pub fn classic() -> Self {
        Self::with_table(PermutationTable::CLASSIC)
    }

    /// Sampler over a table shuffled from `seed` at unit frequency
    pub fn seeded(seed: u64) -> Self {
        Self::with_table(PermutationTable::from_seed(seed))
    }

    /// Sampler over an existing table at unit frequency
    pub fn with_table(table: PermutationTable) -> Self {
        Self {
            table,
            frequency: 1.0,
        }
    }

    /// The permutation table used for hashing
    pub fn table(&self) -> &PermutationTable {
        &self.table
    }

    /// Scale applied to coordinates before evaluation
    pub fn frequency(&self) -> f64 {
        self.frequency
    }

    /// Sample 3D noise
    #[inline]
    pub fn get<T: Real>(&self, x: T, y: T, z: T) -> T {
        let f = T::constant(self.frequency);
        noise_with(&self.table, x * f, y * f, z * f)
    }

    /// Sample noise along the x axis (y = z = 0)
    #[inline]
    pub fn get1<T: Real>(&self, x: T) -> T {
        self.get(x, T::zero(), T::zero())
    }

    /// Sample noise on the xy plane (z = 0)
    #[inline]
    pub fn get2<T: Real>(&self, x: T, y: T) -> T {
        self.get(x, y, T::zero())
    }

    /// Sample at a single-precision position
    #[inline]
    pub fn sample(&self, position: Vec3) -> f32 {
        self.get(position.x, position.y, position.z)
    }

    /// Sample at a double-precision position
    #[inline]
    pub fn sample_f64(&self, position: DVec3) -> f64 {
        self.get(position.x, position.y, position.z)
    }

    /// Sample and remap the output from [-1, 1] to [0, 1]
    ///
    /// The rare values outside [-1, 1] are clamped.
    pub fn sample_normalized(&self, position: Vec3) -> f32 {
        let raw = self.sample(position);
        constrain_value(map_value(raw, -1.0, 1.0, 0.0, 1.0), 0.0, 1.0)
    }
}

impl Default for PerlinNoise {
    fn default() -> Self {
        Self::classic()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{NoiseConfigBuilder, PermutationSource};
    use crate::error::NoiseError;

    #[test]
    fn test_classic_sampler_matches_kernel() {
        let sampler = PerlinNoise::classic();
        assert_eq!(sampler.get(3.5_f64, 0.0, 0.0), noise(3.5, 0.0, 0.0));
        assert_eq!(sampler.get(1.25_f64, 2.5, 3.75), noise(1.25, 2.5, 3.75));
        assert_eq!(sampler.get1(0.75_f32), noise1(0.75_f32));
        assert_eq!(sampler.get2(0.75_f64, 4.25), noise2(0.75, 4.25));
    }

    #[test]
    fn test_default_config_reproduces_classic() {
        let config = NoiseConfigBuilder::new().build().unwrap();
        let sampler = PerlinNoise::new(&config).unwrap();
        assert_eq!(sampler, PerlinNoise::classic());
    }

    #[test]
    fn test_frequency_scales_coordinates() {
        let config = NoiseConfigBuilder::new()
            .frequency(0.5)
            .unwrap()
            .build()
            .unwrap();
        let sampler = PerlinNoise::new(&config).unwrap();
        assert_eq!(sampler.frequency(), 0.5);
        assert_eq!(sampler.get(7.0_f64, 0.0, 0.0), noise(3.5, 0.0, 0.0));
        assert_eq!(sampler.get(2.5_f64, 5.0, 7.5), noise(1.25, 2.5, 3.75));
    }

    #[test]
    fn test_seeded_sampler_determinism() {
        let a = PerlinNoise::seeded(99);
        let b = PerlinNoise::seeded(99);
        let position = Vec3::new(1.3, 4.7, -2.1);
        assert_eq!(a.sample(position), b.sample(position));
        assert_eq!(a.get(0.0_f64, 0.0, 0.0), 0.0, "Lattice points are zero for any table");
    }

    #[test]
    fn test_seeded_sampler_differs_from_classic() {
        let seeded = PerlinNoise::seeded(5);
        let classic = PerlinNoise::classic();
        let differs = (0..32).any(|i| {
            let x = 0.37 + i as f64 * 1.13;
            seeded.get(x, 0.5, 0.25) != classic.get(x, 0.5, 0.25)
        });
        assert!(differs, "A seeded table should not reproduce the classic field");
    }

    #[test]
    fn test_sample_vec_types() {
        let sampler = PerlinNoise::classic();
        assert_eq!(sampler.sample(Vec3::new(3.5, 0.0, 0.0)), -0.25);
        assert_eq!(sampler.sample_f64(DVec3::new(3.5, 0.0, 0.0)), -0.25);
    }

    #[test]
    fn test_sample_normalized_range() {
        let sampler = PerlinNoise::seeded(2024);
        assert_eq!(sampler.sample_normalized(Vec3::ZERO), 0.5);
        for i in 0..500 {
            let t = i as f32 * 0.173;
            let value = sampler.sample_normalized(Vec3::new(t, t * 0.7 + 1.1, 3.3 - t));
            assert!(
                (0.0..=1.0).contains(&value),
                "Normalized value {} is outside [0.0, 1.0]",
                value
            );
        }
        let classic = PerlinNoise::classic();
        assert_eq!(classic.sample_normalized(Vec3::new(3.5, 0.0, 0.0)), 0.375);
    }

    #[test]
    fn test_custom_permutation_source() {
        let identity: Vec<u8> = (0..=255u8).collect();
        let config = NoiseConfigBuilder::new()
            .permutation(identity.clone())
            .unwrap()
            .build()
            .unwrap();
        let sampler = PerlinNoise::new(&config).unwrap();
        assert_eq!(sampler.table().base(), identity.as_slice());
    }

    #[test]
    fn test_new_rejects_unvalidated_config() {
        let config = NoiseConfig {
            permutation: PermutationSource::Custom(vec![0; 256]),
            frequency: 1.0,
        };
        assert!(matches!(
            PerlinNoise::new(&config),
            Err(NoiseError::InvalidPermutation(_))
        ));

        let config = NoiseConfig {
            permutation: PermutationSource::Classic,
            frequency: f64::NAN,
        };
        assert!(matches!(
            PerlinNoise::new(&config),
            Err(NoiseError::InvalidConfig(_))
        ));
    }

    #[test]
    fn test_sampler_is_shareable() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<PerlinNoise>();
        assert_send_sync::<PermutationTable>();

        let sampler = PerlinNoise::seeded(11);
        let expected = sampler.get(0.3_f64, 0.6, 0.9);
        std::thread::scope(|scope| {
            for _ in 0..4 {
                scope.spawn(|| {
                    assert_eq!(sampler.get(0.3_f64, 0.6, 0.9), expected);
                });
            }
        });
    }
}
