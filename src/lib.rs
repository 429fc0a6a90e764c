//! Synthetic dataset generation: random strings, integers, or floats drawn from
//! a uniform or normal distribution, one value per line.
//!
//! A run validates [`RawParams`] into a [`GenerationRequest`], seeds a
//! `SmallRng` from the request, generates the whole [`GeneratedPayload`] and
//! only then writes it out.
//!
//! ```
//! use random_dataset_cli::{driver, validate, RawParams, RecordKind};
//!
//! let mut params = RawParams::new(3, RecordKind::Str);
//! params.length = 4;
//! params.charset = "ab".to_string();
//! let request = validate(params).unwrap();
//!
//! let (payload, _) = driver::generate(&request, None).unwrap();
//! assert_eq!(payload.len(), 3);
//! assert!(payload.records().iter().all(|r| r.len() == 4));
//! ```

pub mod config;
pub mod driver;
pub mod error;
pub mod generator;
pub mod sampler;

pub use config::{
    validate, DistributionKind, FloatDistribution, GenerationRequest, RawParams, RecordKind,
    RecordSpec,
};
pub use driver::{Output, RunOptions, Timings};
pub use error::{ConfigError, Error, Result};
pub use generator::GeneratedPayload;
