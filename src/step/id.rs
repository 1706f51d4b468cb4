//! Step number parsing and the canonical `STEP-NN` identifier.

use crate::error::{Result, StepError};
use serde::Serialize;
use std::fmt;

/// Prefix carried by every step identifier.
pub const STEP_PREFIX: &str = "STEP-";

/// Minimum number of digits in a rendered step number.
const MIN_WIDTH: usize = 2;

/// A normalized step identifier.
///
/// Displays as `STEP-02`; numbers of 100 and above keep all their digits
/// (`STEP-123`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(into = "String")]
pub struct StepId {
    number: u64,
}

impl StepId {
    pub fn new(number: u64) -> Self {
        Self { number }
    }

    /// The zero-padded digits without the prefix (e.g. `02`).
    pub fn digits(&self) -> String {
        format!("{:0width$}", self.number, width = MIN_WIDTH)
    }

    /// Directory segment for this step (e.g. `step-02`).
    pub fn dir_name(&self) -> String {
        format!("step-{}", self.digits())
    }
}

impl fmt::Display for StepId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", STEP_PREFIX, self.digits())
    }
}

impl From<StepId> for String {
    fn from(id: StepId) -> Self {
        id.to_string()
    }
}

/// Parse a raw step number into a [`StepId`].
///
/// Accepts surrounding whitespace and an optional sign. Fails with
/// `InvalidInput` when the text is not a base-10 integer or is negative.
/// Digit separators such as `1_0` are not accepted.
pub fn normalize_step_number(raw: &str) -> Result<StepId> {
    let trimmed = raw.trim();
    let value: i128 = trimmed.parse().map_err(|_| {
        StepError::InvalidInput(format!(
            "invalid STEP number '{}': must be an integer",
            raw
        ))
    })?;

    if value < 0 {
        return Err(StepError::InvalidInput(format!(
            "invalid STEP number '{}': must be non-negative",
            raw
        )));
    }

    let number = u64::try_from(value).map_err(|_| {
        StepError::InvalidInput(format!(
            "invalid STEP number '{}': larger than {}",
            raw,
            u64::MAX
        ))
    })?;

    Ok(StepId::new(number))
}
