//! Safety factors applied to tie capacity.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::errors::CalcError;

/// Safety factor choices for form ties.
///
/// Serializes as its numeric value (`2.5`), not a variant name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(try_from = "f64", into = "f64")]
pub enum SafetyFactor {
    /// 2.0
    #[default]
    Two,
    /// 2.5
    TwoAndHalf,
    /// 3.0
    Three,
    /// 4.0
    Four,
}

impl SafetyFactor {
    /// All safety factor variants for selection lists
    pub const ALL: [SafetyFactor; 4] = [
        SafetyFactor::Two,
        SafetyFactor::TwoAndHalf,
        SafetyFactor::Three,
        SafetyFactor::Four,
    ];

    /// Numeric multiplier
    pub fn value(&self) -> f64 {
        match self {
            SafetyFactor::Two => 2.0,
            SafetyFactor::TwoAndHalf => 2.5,
            SafetyFactor::Three => 3.0,
            SafetyFactor::Four => 4.0,
        }
    }
}

impl TryFrom<f64> for SafetyFactor {
    type Error = CalcError;

    fn try_from(value: f64) -> Result<Self, Self::Error> {
        SafetyFactor::ALL
            .into_iter()
            .find(|sf| (sf.value() - value).abs() < 1e-9)
            .ok_or_else(|| {
                CalcError::invalid_input("safety_factor", value.to_string(), "Safety factor must be one of 2.0, 2.5, 3.0, 4.0")
            })
    }
}

impl From<SafetyFactor> for f64 {
    fn from(sf: SafetyFactor) -> Self {
        sf.value()
    }
}

impl fmt::Display for SafetyFactor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.1}", self.value())
    }
}
