//! Exact decimal arithmetic for quantum rounding and bounds construction.
//!
//! Rounding a sampled float to a grid multiple must land on the same grid
//! point no matter where in the surrounding half-quantum window the sample
//! fell. Doing the rounding in binary `f64` drifts near non-power-of-two
//! quanta (`0.1 + 0.2` rounds to the wrong multiple of `0.1`), so every
//! quantum computation goes through [`rust_decimal`] on the shortest
//! round-trip decimal form of each value.
//!
//! [`next_float`] and [`prev_float`] step to the adjacent representable
//! float. Quantized bounds are nudged one step inward with them so a sample
//! landing exactly on a bound still decodes inside the variable's domain.

use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;

use crate::error::{Error, Result};

/// Parses a float through its shortest round-trip decimal representation.
fn decimal(value: f64) -> Result<Decimal> {
    value
        .to_string()
        .parse()
        .map_err(|_| Error::Internal("value is not representable as a decimal"))
}

fn back_to_f64(value: Decimal) -> Result<f64> {
    value
        .to_f64()
        .ok_or(Error::Internal("decimal is not representable as a float"))
}

fn quotient(value: f64, quantum: f64) -> Result<(Decimal, Decimal)> {
    let quantum = decimal(quantum)?;
    let ratio = decimal(value)?
        .checked_div(quantum)
        .ok_or(Error::Internal("decimal division overflowed"))?;
    Ok((ratio, quantum))
}

fn multiple(ratio: Decimal, quantum: Decimal) -> Result<f64> {
    back_to_f64(
        ratio
            .checked_mul(quantum)
            .ok_or(Error::Internal("decimal multiplication overflowed"))?,
    )
}

/// Rounds `value` to the nearest multiple of `quantum`.
///
/// Midpoint ties round half-to-even, consistent with
/// [`f64::round_ties_even`] used for plain integer decoding.
///
/// # Errors
///
/// Returns an error if an intermediate value cannot be represented as a
/// decimal.
pub fn round_nearest(value: f64, quantum: f64) -> Result<f64> {
    let (ratio, quantum) = quotient(value, quantum)?;
    multiple(ratio.round(), quantum)
}

/// Rounds `value` down to the nearest multiple of `quantum`.
///
/// # Errors
///
/// Returns an error if an intermediate value cannot be represented as a
/// decimal.
pub fn round_down(value: f64, quantum: f64) -> Result<f64> {
    let (ratio, quantum) = quotient(value, quantum)?;
    multiple(ratio.floor(), quantum)
}

/// Rounds `value` up to the nearest multiple of `quantum`.
///
/// # Errors
///
/// Returns an error if an intermediate value cannot be represented as a
/// decimal.
pub fn round_up(value: f64, quantum: f64) -> Result<f64> {
    let (ratio, quantum) = quotient(value, quantum)?;
    multiple(ratio.ceil(), quantum)
}

/// Divides `x` by `y` exactly in decimal.
///
/// # Errors
///
/// Returns an error if an operand cannot be represented as a decimal or the
/// division overflows.
pub fn div(x: f64, y: f64) -> Result<f64> {
    back_to_f64(
        decimal(x)?
            .checked_div(decimal(y)?)
            .ok_or(Error::Internal("decimal division overflowed"))?,
    )
}

/// Sums the given values exactly in decimal.
///
/// A plain compensated binary summation is not enough here: summing
/// `[9.9, 0.05]` in binary yields a float one ulp away from `9.95`.
///
/// # Errors
///
/// Returns an error if a value cannot be represented as a decimal or the
/// sum overflows.
pub fn sum(values: &[f64]) -> Result<f64> {
    let mut total = Decimal::ZERO;
    for &value in values {
        total = total
            .checked_add(decimal(value)?)
            .ok_or(Error::Internal("decimal sum overflowed"))?;
    }
    back_to_f64(total)
}

/// Returns the adjacent representable float strictly greater than `value`.
#[must_use]
pub fn next_float(value: f64) -> f64 {
    value.next_up()
}

/// Returns the adjacent representable float strictly less than `value`.
#[must_use]
pub fn prev_float(value: f64) -> f64 {
    value.next_down()
}
