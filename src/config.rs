//! Raw generation parameters and the validation that turns them into a
//! [`GenerationRequest`].

use crate::error::ConfigError;

/// ASCII letters, digits and punctuation.
pub const DEFAULT_CHARSET: &str = concat!(
    "abcdefghijklmnopqrstuvwxyz",
    "ABCDEFGHIJKLMNOPQRSTUVWXYZ",
    "0123456789",
    "!\"#$%&'()*+,-./:;<=>?@[\\]^_`{|}~",
);

pub const DEFAULT_LENGTH: usize = 100;

/// Type of the generated records.
#[derive(Debug, Clone, Copy, PartialEq, Eq, strum_macros::EnumString, strum_macros::Display)]
#[strum(serialize_all = "lowercase")]
pub enum RecordKind {
    Int,
    Float,
    Str,
}

/// Distribution used for float records.
#[derive(Debug, Clone, Copy, PartialEq, Eq, strum_macros::EnumString, strum_macros::Display)]
#[strum(serialize_all = "lowercase")]
pub enum DistributionKind {
    Uniform,
    Normal,
}

/// Parameters as given by the user, before any cross-field checks.
#[derive(Debug, Clone)]
pub struct RawParams {
    pub count: usize,
    pub seed: i64,
    pub kind: RecordKind,
    pub distribution: Option<DistributionKind>,
    pub mean: Option<f64>,
    pub std: Option<f64>,
    pub min_value: Option<f64>,
    pub max_value: Option<f64>,
    pub length: usize,
    pub charset: String,
}

impl RawParams {
    pub fn new(count: usize, kind: RecordKind) -> Self {
        RawParams {
            count,
            seed: 0,
            kind,
            distribution: None,
            mean: None,
            std: None,
            min_value: None,
            max_value: None,
            length: DEFAULT_LENGTH,
            charset: DEFAULT_CHARSET.to_string(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FloatDistribution {
    /// Closed range `[min, max]`.
    Uniform { min: f64, max: f64 },
    Normal { mean: f64, std: f64 },
}

/// What each record looks like.
#[derive(Debug, Clone, PartialEq)]
pub enum RecordSpec {
    Str { length: usize, charset: Vec<char> },
    Int,
    Float(FloatDistribution),
}

impl RecordSpec {
    pub fn kind(&self) -> RecordKind {
        match self {
            RecordSpec::Str { .. } => RecordKind::Str,
            RecordSpec::Int => RecordKind::Int,
            RecordSpec::Float(_) => RecordKind::Float,
        }
    }
}

/// A validated request for one generation run.
#[derive(Debug, Clone, PartialEq)]
pub struct GenerationRequest {
    pub count: usize,
    pub seed: u64,
    pub records: RecordSpec,
}

/// Checks the cross-field constraints of `params`.
///
/// Rules are applied in this order, the first violation wins:
/// 1. float records need a distribution;
/// 2. uniform needs both bounds, then `max >= min`, then finite bounds with a finite span;
/// 3. normal needs both mean and std, then `std > 0`, then both finite.
///
/// Distribution parameters are ignored for string and integer records, and
/// string parameters are left to the generator to reject.
pub fn validate(params: RawParams) -> Result<GenerationRequest, ConfigError> {
    let records = match params.kind {
        RecordKind::Int => RecordSpec::Int,
        RecordKind::Str => RecordSpec::Str {
            length: params.length,
            charset: params.charset.chars().collect(),
        },
        RecordKind::Float => {
            let distribution = params
                .distribution
                .ok_or(ConfigError::MissingDistribution)?;
            RecordSpec::Float(validate_distribution(distribution, &params)?)
        }
    };

    Ok(GenerationRequest {
        count: params.count,
        seed: params.seed as u64,
        records,
    })
}

fn validate_distribution(
    distribution: DistributionKind,
    params: &RawParams,
) -> Result<FloatDistribution, ConfigError> {
    match distribution {
        DistributionKind::Uniform => {
            let (min, max) = match (params.min_value, params.max_value) {
                (Some(min), Some(max)) => (min, max),
                _ => return Err(ConfigError::MissingBounds),
            };
            if max < min {
                return Err(ConfigError::InvertedBounds);
            }
            if !min.is_finite() || !max.is_finite() || !(max - min).is_finite() {
                return Err(ConfigError::NonFiniteBounds);
            }
            Ok(FloatDistribution::Uniform { min, max })
        }
        DistributionKind::Normal => {
            let (mean, std) = match (params.mean, params.std) {
                (Some(mean), Some(std)) => (mean, std),
                _ => return Err(ConfigError::MissingNormalParams),
            };
            // NaN fails this too
            if !(std > 0.0) {
                return Err(ConfigError::NonPositiveStd);
            }
            if !mean.is_finite() || !std.is_finite() {
                return Err(ConfigError::NonFiniteNormalParams);
            }
            Ok(FloatDistribution::Normal { mean, std })
        }
    }
}
