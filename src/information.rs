//! Self-information and entropy of a discrete distribution.
//!
//! I(x) = -log_b p(x)
//! H(x) = p(x) I(x)
//!
//! The base `b` is picked by the kind of data being measured, see [`DataType`].

use std::fmt;
use std::str::FromStr;

use crate::Error;

/// What the events describe; fixes the logarithm base.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum DataType {
    /// Natural logarithm.
    Quantifiables,
    /// Base 2.
    DataTransmission,
    /// Base 10.
    StateTransitions,
}

impl DataType {
    pub const ALL: [DataType; 3] = [
        DataType::Quantifiables,
        DataType::DataTransmission,
        DataType::StateTransitions,
    ];

    pub fn base(self) -> f64 {
        match self {
            DataType::Quantifiables => std::f64::consts::E,
            DataType::DataTransmission => 2.0,
            DataType::StateTransitions => 10.0,
        }
    }

    /// `log_b(x)` using the exact std routine for the base.
    pub fn log(self, x: f64) -> f64 {
        match self {
            DataType::Quantifiables => x.ln(),
            DataType::DataTransmission => x.log2(),
            DataType::StateTransitions => x.log10(),
        }
    }

    pub fn unit(self) -> &'static str {
        match self {
            DataType::Quantifiables => "nats",
            DataType::DataTransmission => "bits",
            DataType::StateTransitions => "hartleys",
        }
    }

    /// Menu key the user types to pick this data type.
    pub fn key(self) -> char {
        match self {
            DataType::Quantifiables => '1',
            DataType::DataTransmission => '2',
            DataType::StateTransitions => '3',
        }
    }
}

impl fmt::Display for DataType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            DataType::Quantifiables => "Quantifiables",
            DataType::DataTransmission => "Data transmission",
            DataType::StateTransitions => "State transitions",
        })
    }
}

impl FromStr for DataType {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key = s.trim();
        DataType::ALL
            .into_iter()
            .find(|d| key.len() == 1 && key.starts_with(d.key()))
            .ok_or_else(|| Error::UnknownDataType(s.to_string()))
    }
}

/// How the events are entered.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum InputMode {
    /// `P`: probabilities, used as given.
    Probabilities,
    /// `E`: occurrence counts, normalised by their sum.
    Occurrences,
}

impl FromStr for InputMode {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "P" => Ok(InputMode::Probabilities),
            "E" => Ok(InputMode::Occurrences),
            _ => Err(Error::UnknownInputMode(s.to_string())),
        }
    }
}

/// Ordered event probabilities.
#[derive(Clone, Debug, PartialEq)]
pub struct ProbabilityVector(Vec<f64>);

impl ProbabilityVector {
    /// `p[i] = c[i] / sum(c)`. A zero sum yields NaN entries.
    pub fn from_occurrences(counts: &[i32]) -> Self {
        let total = counts.iter().map(|&c| i64::from(c)).sum::<i64>() as f64;
        Self(counts.iter().map(|&c| c as f64 / total).collect())
    }

    /// Taken verbatim: no normalisation and no range check.
    pub fn from_probabilities(probabilities: Vec<f64>) -> Self {
        Self(probabilities)
    }

    pub fn as_slice(&self) -> &[f64] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn sum(&self) -> f64 {
        self.0.iter().sum()
    }
}

pub fn self_information(p: f64, data_type: DataType) -> f64 {
    -data_type.log(p)
}

pub fn entropy_contribution(p: f64, data_type: DataType) -> f64 {
    p * self_information(p, data_type)
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct EventMeasure {
    pub probability: f64,
    pub self_information: f64,
    pub entropy: f64,
}

#[derive(Clone, Debug, PartialEq)]
pub struct InformationReport {
    pub data_type: DataType,
    pub events: Vec<EventMeasure>,
    pub total_self_information: f64,
    pub total_entropy: f64,
}

impl InformationReport {
    pub fn is_finite(&self) -> bool {
        self.total_self_information.is_finite() && self.total_entropy.is_finite()
    }
}

/// Per-event measures and their totals. Zero or out-of-range probabilities
/// follow IEEE arithmetic: `p = 0` gives infinite self-information.
pub fn evaluate(probabilities: &ProbabilityVector, data_type: DataType) -> InformationReport {
    let events = probabilities
        .as_slice()
        .iter()
        .map(|&p| {
            EventMeasure {
                probability: p,
                self_information: self_information(p, data_type),
                entropy: entropy_contribution(p, data_type),
            }
        })
        .collect::<Vec<_>>();

    let total_self_information = events.iter().map(|e| e.self_information).sum();
    let total_entropy = events.iter().map(|e| e.entropy).sum();

    let report = InformationReport {
        data_type,
        events,
        total_self_information,
        total_entropy,
    };
    if !report.is_finite() {
        tracing::warn!(
            total_self_information = report.total_self_information,
            total_entropy = report.total_entropy,
            "totals are not finite; check for zero or negative probabilities"
        );
    }
    report
}
