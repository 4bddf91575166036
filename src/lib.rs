//! Writes files of uniformly distributed samples: `f64` values in `[0, 1)`
//! or the faces of a fair die.

pub mod error;
pub mod generator;

pub use error::{Error, Result};
pub use generator::{generate, sample_rng, write_samples, Domain, Samples};
