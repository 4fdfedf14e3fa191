//! Deterministic 3D gradient noise
//!
//! A small, dependency-light Perlin noise kernel: single-sample 3D improved
//! gradient noise over a fixed permutation table, usable at `f32` or `f64`
//! precision.
//!
//! # Quick Start
//!
//! ```rust
//! use perlin_kernel::*;
//!
//! // Free function over Ken Perlin's reference table
//! assert_eq!(noise(3.5_f64, 0.0, 0.0), -0.25);
//! assert_eq!(noise(1.0_f32, 2.0, 3.0), 0.0);
//!
//! // Sampler with its own table
//! let config = NoiseConfigBuilder::new().seed(42).build().unwrap();
//! let sampler = PerlinNoise::new(&config).unwrap();
//! let height = sampler.sample_normalized(Vec3::new(0.3, 1.7, 2.2));
//! assert!((0.0..=1.0).contains(&height));
//! ```
//!
//! # Features
//!
//! - `serde`: Enables serialization support for configuration

// Modules
pub mod error;
pub mod config;
pub mod noise;
pub mod range;

// Re-export core types for convenience
pub use error::{NoiseError, Result};
pub use config::{NoiseConfig, NoiseConfigBuilder, PermutationSource};
pub use noise::{noise, noise1, noise2, noise_with, PerlinNoise, PermutationTable, Real};
pub use range::{constrain_value, map_value};

// Re-export glam vector types for convenience
pub use glam::{DVec3, Vec3};
