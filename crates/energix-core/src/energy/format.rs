//! Magnitude-scaled rendering of energy values.
//!
//! The unit band is selected from the raw joule value before any rounding,
//! so `999.999` stays in the joule band and renders as `"1000.00 J"`.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::constants::is_valid_quantity;
use crate::error::PredictionError;

/// Decimal places used for every formatted energy value.
pub const ENERGY_DECIMALS: usize = 2;

/// Display unit for an energy value, ordered from smallest to largest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EnergyUnit {
    /// µJ, below 0.001 J
    Microjoule,
    /// mJ, from 0.001 J up to 1 J
    Millijoule,
    /// J, from 1 J up to 1000 J
    Joule,
    /// kJ, 1000 J and above
    Kilojoule,
}

impl EnergyUnit {
    /// Select the band for a value in joules.
    ///
    /// A value equal to a band's upper threshold belongs to the next band up.
    pub fn for_joules(joules: f64) -> Self {
        if joules < 0.001 {
            EnergyUnit::Microjoule
        } else if joules < 1.0 {
            EnergyUnit::Millijoule
        } else if joules < 1000.0 {
            EnergyUnit::Joule
        } else {
            EnergyUnit::Kilojoule
        }
    }

    /// Unit symbol.
    pub fn symbol(self) -> &'static str {
        match self {
            EnergyUnit::Microjoule => "µJ",
            EnergyUnit::Millijoule => "mJ",
            EnergyUnit::Joule => "J",
            EnergyUnit::Kilojoule => "kJ",
        }
    }

    /// Convert joules into this unit.
    pub fn scale(self, joules: f64) -> f64 {
        match self {
            EnergyUnit::Microjoule => joules * 1_000_000.0,
            EnergyUnit::Millijoule => joules * 1000.0,
            EnergyUnit::Joule => joules,
            EnergyUnit::Kilojoule => joules / 1000.0,
        }
    }
}

impl fmt::Display for EnergyUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

/// Render joules as `"<number> <unit>"` with two decimals.
///
/// # Errors
///
/// Returns [`PredictionError::InvalidInput`] if `joules` is negative, NaN or
/// infinite.
pub fn format_energy(joules: f64) -> Result<String, PredictionError> {
    if !is_valid_quantity(joules) {
        return Err(PredictionError::InvalidInput {
            field: "joules",
            value: joules,
        });
    }
    // -0.0 passes validation; render it as zero.
    let joules = joules.abs();

    let unit = EnergyUnit::for_joules(joules);
    Ok(format!(
        "{} {}",
        to_fixed(unit.scale(joules), ENERGY_DECIMALS),
        unit.symbol()
    ))
}

/// Fixed-point rendering with exact ties rounded away from zero.
///
/// `format!` already rounds the exact binary value to nearest; only values
/// sitting exactly halfway between two outputs need adjusting.
pub(crate) fn to_fixed(value: f64, decimals: usize) -> String {
    const PROBE: usize = 40;

    let wide = format!("{:.*}", decimals + PROBE, value);
    let (head, tail) = wide.split_at(wide.len() - PROBE);
    let is_tie = tail.starts_with('5') && tail[1..].bytes().all(|b| b == b'0');
    if !is_tie {
        return format!("{:.*}", decimals, value);
    }

    increment_last_digit(head.trim_end_matches('.'))
}

fn increment_last_digit(digits: &str) -> String {
    let mut bytes: Vec<u8> = digits.bytes().collect();
    let mut i = bytes.len();
    loop {
        if i == 0 {
            bytes.insert(0, b'1');
            break;
        }
        i -= 1;
        match bytes[i] {
            b'.' => continue,
            b'9' => bytes[i] = b'0',
            b'-' => {
                bytes.insert(i + 1, b'1');
                break;
            }
            d => {
                bytes[i] = d + 1;
                break;
            }
        }
    }
    bytes.into_iter().map(char::from).collect()
}
