//! Record generators and the newline-delimited payload they produce.

use rand::distributions::Uniform;
use rand::rngs::SmallRng;
use rand::Rng;

use crate::config::FloatDistribution;
use crate::error::{Error, Result};

/// `count` strings of exactly `length` characters, each drawn with
/// replacement from `charset`.
pub fn generate_strings(
    rng: &mut SmallRng,
    count: usize,
    charset: &[char],
    length: usize,
) -> Result<Vec<String>> {
    if charset.is_empty() {
        return Err(Error::InvalidParameter("charset must not be empty".to_string()));
    }
    let pick = Uniform::new(0, charset.len());

    Ok((0..count)
        .map(|_| (0..length).map(|_| charset[rng.sample(pick)]).collect())
        .collect())
}

/// `count` integers drawn uniformly from the whole `i64` range.
pub fn generate_integers(rng: &mut SmallRng, count: usize) -> Vec<i64> {
    (0..count).map(|_| rng.gen::<i64>()).collect()
}

pub fn generate_floats(
    rng: &mut SmallRng,
    count: usize,
    distribution: &FloatDistribution,
) -> Result<Vec<f64>> {
    let d = distribution.sampler()?;
    Ok((0..count).map(|_| d.sample(rng)).collect())
}

/// Generated records in order, one textual line each.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct GeneratedPayload {
    records: Vec<String>,
}

impl GeneratedPayload {
    pub fn from_strings(records: Vec<String>) -> Self {
        GeneratedPayload { records }
    }

    pub fn from_integers(values: &[i64]) -> Self {
        GeneratedPayload {
            records: values.iter().map(i64::to_string).collect(),
        }
    }

    /// Formats floats with `precision` digits after the decimal point, or in
    /// shortest round-trip form when `None`.
    pub fn from_floats(values: &[f64], precision: Option<usize>) -> Self {
        let records = values
            .iter()
            .map(|x| match precision {
                Some(p) => format!("{:.*}", p, x),
                None => x.to_string(),
            })
            .collect();
        GeneratedPayload { records }
    }

    pub fn records(&self) -> &[String] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Every record followed by `\n`; empty for an empty payload.
    pub fn render(&self) -> String {
        let size = self.records.iter().map(|r| r.len() + 1).sum();
        let mut out = String::with_capacity(size);
        for record in &self.records {
            out.push_str(record);
            out.push('\n');
        }
        out
    }
}
