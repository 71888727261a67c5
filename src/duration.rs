// Copyright 2025 Chisomo Makombo Sakala
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.
//! Parser for the compact time-span notation used in activity records.
//!
//! A span is an optional sign followed by one or more `<number><unit>`
//! components, e.g. `"90m"`, `"1h30m45s"` or `"1.5h"`. The lone string
//! `"0"` is accepted without a unit.

use crate::error::DurationError;
use std::time::Duration;

const NANOS_PER_MICRO: u64 = 1_000;
const NANOS_PER_MILLI: u64 = 1_000_000;
const NANOS_PER_SEC: u64 = 1_000_000_000;
const NANOS_PER_MIN: u64 = 60 * NANOS_PER_SEC;
const NANOS_PER_HOUR: u64 = 60 * NANOS_PER_MIN;

/// Largest magnitude a span may have, in nanoseconds.
const MAX_NANOS: u64 = i64::MAX as u64;

/// Fraction digits beyond this are ignored.
const MAX_FRACTION_DIGITS: u32 = 18;

/// A parsed time span that may be negative.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SignedDuration {
  negative: bool,
  magnitude: Duration,
}

impl SignedDuration {
  pub fn is_negative(&self) -> bool {
    self.negative
  }

  pub fn magnitude(&self) -> Duration {
    self.magnitude
  }

  /// Returns the span only when it is strictly positive.
  pub fn positive(self) -> Option<Duration> {
    (!self.negative && !self.magnitude.is_zero()).then_some(self.magnitude)
  }
}

impl From<Duration> for SignedDuration {
  fn from(magnitude: Duration) -> Self {
    SignedDuration {
      negative: false,
      magnitude,
    }
  }
}

fn unit_nanos(unit: &str) -> Option<u64> {
  match unit {
    "ns" => Some(1),
    "us" | "µs" | "μs" => Some(NANOS_PER_MICRO),
    "ms" => Some(NANOS_PER_MILLI),
    "s" => Some(NANOS_PER_SEC),
    "m" => Some(NANOS_PER_MIN),
    "h" => Some(NANOS_PER_HOUR),
    _ => None,
  }
}

/// Splits the leading run of ASCII digits off `s`.
fn split_digits(s: &str) -> (&str, &str) {
  let end = s
    .find(|c: char| !c.is_ascii_digit())
    .unwrap_or(s.len());
  s.split_at(end)
}

/// Parses a duration expression such as `"1h30m"` into a [`SignedDuration`].
pub fn parse_duration(input: &str) -> Result<SignedDuration, DurationError> {
  let invalid = || DurationError::Invalid(input.to_string());
  let overflow = || DurationError::Overflow(input.to_string());

  let (negative, mut rest) = match input.as_bytes().first() {
    Some(b'-') => (true, &input[1..]),
    Some(b'+') => (false, &input[1..]),
    _ => (false, input),
  };

  if rest == "0" {
    return Ok(SignedDuration::from(Duration::ZERO));
  }
  if rest.is_empty() {
    return Err(invalid());
  }

  let mut total: u64 = 0;

  while !rest.is_empty() {
    let (int_digits, after_int) = split_digits(rest);

    let (frac_digits, after_number) = match after_int.strip_prefix('.') {
      Some(after_dot) => split_digits(after_dot),
      None => ("", after_int),
    };

    if int_digits.is_empty() && frac_digits.is_empty() {
      return Err(invalid());
    }

    let unit_end = after_number
      .find(|c: char| c == '.' || c.is_ascii_digit())
      .unwrap_or(after_number.len());
    if unit_end == 0 {
      return Err(DurationError::MissingUnit(input.to_string()));
    }
    let (unit, remainder) = after_number.split_at(unit_end);
    let scale = unit_nanos(unit).ok_or_else(|| DurationError::UnknownUnit {
      unit: unit.to_string(),
      input: input.to_string(),
    })?;

    let whole: u64 = if int_digits.is_empty() {
      0
    } else {
      int_digits.parse().map_err(|_| overflow())?
    };
    let mut component = whole.checked_mul(scale).ok_or_else(overflow)?;

    if !frac_digits.is_empty() {
      let kept = frac_digits.len().min(MAX_FRACTION_DIGITS as usize);
      let numerator: u64 = frac_digits[..kept].parse().map_err(|_| invalid())?;
      let denominator = 10f64.powi(kept as i32);
      let fraction = (numerator as f64 * (scale as f64 / denominator)) as u64;
      component = component.checked_add(fraction).ok_or_else(overflow)?;
    }

    total = total.checked_add(component).ok_or_else(overflow)?;
    if total > MAX_NANOS {
      return Err(overflow());
    }

    rest = remainder;
  }

  let magnitude = Duration::from_nanos(total);
  Ok(SignedDuration {
    negative: negative && !magnitude.is_zero(),
    magnitude,
  })
}
