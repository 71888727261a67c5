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
//! Distance, speed and calorie formulas.
//!
//! Distances are in kilometres, speeds in km/h, weight in kilograms and
//! height in metres.

use crate::error::Field;
use crate::error::TrackerError;
use serde::Serialize;
use std::time::Duration;

/// Fixed stride length in metres, used when height is not taken into account.
pub const FIXED_STRIDE_M: f64 = 0.65;

/// Stride length as a fraction of height.
pub const STRIDE_HEIGHT_RATIO: f64 = 0.45;

/// Walking burns this fraction of the running rate.
pub const WALKING_CALORIES_RATIO: f64 = 0.5;

const M_IN_KM: f64 = 1000.0;
const MIN_IN_H: f64 = 60.0;

/// Body measurements supplied alongside every record.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Biometrics {
  pub weight_kg: f64,
  pub height_m: f64,
}

impl Biometrics {
  /// Builds validated biometrics. Weight is checked before height.
  pub fn new(weight_kg: f64, height_m: f64) -> Result<Self, TrackerError> {
    let biometrics = Biometrics {
      weight_kg,
      height_m,
    };
    biometrics.validate()?;
    Ok(biometrics)
  }

  pub fn validate(&self) -> Result<(), TrackerError> {
    ensure_positive(self.weight_kg, Field::Weight)?;
    ensure_positive(self.height_m, Field::Height)
  }
}

/// Derived metrics for one record.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Metrics {
  pub distance_km: f64,
  pub speed_kmh: f64,
  pub calories: f64,
}

// NaN fails this check too.
fn ensure_positive(value: f64, field: Field) -> Result<(), TrackerError> {
  if value > 0.0 {
    Ok(())
  } else {
    Err(TrackerError::not_positive(field))
  }
}

fn validate_inputs(
  steps: u64,
  weight_kg: f64,
  height_m: f64,
  duration: Duration,
) -> Result<(), TrackerError> {
  if steps == 0 {
    return Err(TrackerError::not_positive(Field::Steps));
  }
  ensure_positive(weight_kg, Field::Weight)?;
  ensure_positive(height_m, Field::Height)?;
  if duration.is_zero() {
    return Err(TrackerError::not_positive(Field::Duration));
  }
  Ok(())
}

/// Distance covered with a height-derived stride. Inputs are not validated.
pub fn distance_km(steps: u64, height_m: f64) -> f64 {
  let stride_m = height_m * STRIDE_HEIGHT_RATIO;
  steps as f64 * stride_m / M_IN_KM
}

/// Distance covered with the fixed [`FIXED_STRIDE_M`] stride.
pub fn fixed_stride_distance_km(steps: u64) -> f64 {
  steps as f64 * FIXED_STRIDE_M / M_IN_KM
}

/// Mean speed over `duration`. Zero when the duration is zero.
pub fn mean_speed_kmh(steps: u64, height_m: f64, duration: Duration) -> f64 {
  if duration.is_zero() {
    return 0.0;
  }
  let hours = duration.as_secs_f64() / 3600.0;
  distance_km(steps, height_m) / hours
}

fn base_calories(steps: u64, weight_kg: f64, height_m: f64, duration: Duration) -> f64 {
  let speed = mean_speed_kmh(steps, height_m, duration);
  let minutes = duration.as_secs_f64() / 60.0;
  weight_kg * speed * minutes / MIN_IN_H
}

pub fn running_calories(
  steps: u64,
  weight_kg: f64,
  height_m: f64,
  duration: Duration,
) -> Result<f64, TrackerError> {
  validate_inputs(steps, weight_kg, height_m, duration)?;
  Ok(base_calories(steps, weight_kg, height_m, duration))
}

pub fn walking_calories(
  steps: u64,
  weight_kg: f64,
  height_m: f64,
  duration: Duration,
) -> Result<f64, TrackerError> {
  validate_inputs(steps, weight_kg, height_m, duration)?;
  Ok(base_calories(steps, weight_kg, height_m, duration) * WALKING_CALORIES_RATIO)
}
