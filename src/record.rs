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
use crate::duration::parse_duration;
use crate::error::Field;
use crate::error::ParseFailure;
use crate::error::TrackerError;
use std::time::Duration;

/// A day's step count over an elapsed duration, e.g. `"5000,1h30m"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DaySteps {
  pub steps: u64,
  pub duration: Duration,
}

/// A single training session, e.g. `"5000,бег,1h30m"`.
///
/// The activity label is kept exactly as typed (after trimming);
/// classification happens when metrics are computed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TrainingRecord {
  pub steps: u64,
  pub activity: String,
  pub duration: Duration,
}

/// Parses a `steps,duration` record. Fields are taken verbatim.
pub fn parse_steps_and_duration(text: &str) -> Result<DaySteps, TrackerError> {
  let parts: Vec<&str> = text.split(',').collect();

  if parts.len() != 2 {
    return Err(TrackerError::Format {
      expected: 2,
      found: parts.len(),
    });
  }

  let steps = parse_steps(parts[0])?;
  let duration = parse_positive_duration(parts[1])?;

  Ok(DaySteps { steps, duration })
}

/// Parses a `steps,activity,duration` record, trimming each field.
pub fn parse_training_record(text: &str) -> Result<TrainingRecord, TrackerError> {
  let parts: Vec<&str> = text.split(',').map(str::trim).collect();

  if parts.len() != 3 {
    return Err(TrackerError::Format {
      expected: 3,
      found: parts.len(),
    });
  }

  let steps = parse_steps(parts[0])?;

  let activity = parts[1];
  if activity.is_empty() {
    return Err(TrackerError::empty(Field::Activity));
  }

  let duration = parse_positive_duration(parts[2])?;

  Ok(TrainingRecord {
    steps,
    activity: activity.to_string(),
    duration,
  })
}

fn parse_steps(value: &str) -> Result<u64, TrackerError> {
  let steps = value.parse::<i64>().map_err(|e| TrackerError::Parse {
    field: Field::Steps,
    value: value.to_string(),
    source: ParseFailure::Int(e),
  })?;

  u64::try_from(steps)
    .ok()
    .filter(|&s| s > 0)
    .ok_or_else(|| TrackerError::not_positive(Field::Steps))
}

fn parse_positive_duration(value: &str) -> Result<Duration, TrackerError> {
  let span = parse_duration(value).map_err(|e| TrackerError::Parse {
    field: Field::Duration,
    value: value.to_string(),
    source: ParseFailure::Duration(e),
  })?;

  span
    .positive()
    .ok_or_else(|| TrackerError::not_positive(Field::Duration))
}
