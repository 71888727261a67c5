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
//! Report entry points.
//!
//! Training reports surface every failure to the caller. Day-steps reports
//! are lenient: [`render_day_steps_report`] hands failures to a
//! [`DiagnosticSink`] and returns an empty string. The explicit form is
//! [`day_steps_summary`].

use crate::activity::ActivityKind;
use crate::activity::ActivityLabels;
use crate::error::TrackerError;
use crate::metrics::Biometrics;
use crate::metrics::Metrics;
use crate::metrics::distance_km;
use crate::metrics::fixed_stride_distance_km;
use crate::metrics::mean_speed_kmh;
use crate::metrics::running_calories;
use crate::metrics::walking_calories;
use crate::record::parse_steps_and_duration;
use crate::record::parse_training_record;
use serde::Serialize;
use serde::Serializer;
use std::fmt;
use std::time::Duration;

/// Receives day-steps failures that the lenient entry point swallows.
pub trait DiagnosticSink {
  fn record_failure(&self, record: &str, error: &TrackerError);
}

impl<F> DiagnosticSink for F
where
  F: Fn(&str, &TrackerError),
{
  fn record_failure(&self, record: &str, error: &TrackerError) {
    self(record, error)
  }
}

/// Emits failures as `tracing` error events.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingSink;

impl DiagnosticSink for TracingSink {
  fn record_failure(&self, record: &str, error: &TrackerError) {
    tracing::error!(record, error = %error, "Failed to summarise day steps");
  }
}

fn serialize_hours<S: Serializer>(duration: &Duration, serializer: S) -> Result<S::Ok, S::Error> {
  serializer.serialize_f64(duration.as_secs_f64() / 3600.0)
}

/// Metrics for one training session.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TrainingReport {
  /// The label as typed in the record.
  pub activity: String,
  pub kind: ActivityKind,
  #[serde(rename = "duration_hours", serialize_with = "serialize_hours")]
  pub duration: Duration,
  #[serde(flatten)]
  pub metrics: Metrics,
}

impl fmt::Display for TrainingReport {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    let hours = self.duration.as_secs_f64() / 3600.0;
    writeln!(f, "Тип тренировки: {}", self.activity)?;
    writeln!(f, "Длительность: {hours:.2} ч.")?;
    writeln!(f, "Дистанция: {:.2} км.", self.metrics.distance_km)?;
    writeln!(f, "Скорость: {:.2} км/ч", self.metrics.speed_kmh)?;
    writeln!(f, "Сожгли калорий: {:.2}", self.metrics.calories)
  }
}

/// Totals for a day of walking.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct DaySummary {
  pub steps: u64,
  pub distance_km: f64,
  pub calories: f64,
}

impl fmt::Display for DaySummary {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    writeln!(f, "Количество шагов: {}.", self.steps)?;
    writeln!(f, "Дистанция составила {:.2} км.", self.distance_km)?;
    writeln!(f, "Вы сожгли {:.2} ккал.", self.calories)
  }
}

/// Parses a `steps,activity,duration` record and computes its metrics.
pub fn training_report(
  text: &str,
  weight_kg: f64,
  height_m: f64,
  labels: &ActivityLabels,
) -> Result<TrainingReport, TrackerError> {
  let record = parse_training_record(text)?;
  let body = Biometrics::new(weight_kg, height_m)?;

  let kind = labels.classify(&record.activity);
  tracing::debug!(steps = record.steps, activity = %record.activity, ?kind, "Computing training metrics");

  let calories = match &kind {
    ActivityKind::Running => {
      running_calories(record.steps, body.weight_kg, body.height_m, record.duration)?
    }
    ActivityKind::Walking => {
      walking_calories(record.steps, body.weight_kg, body.height_m, record.duration)?
    }
    ActivityKind::Unrecognized(label) => {
      return Err(TrackerError::UnrecognizedActivity(label.clone()));
    }
  };

  let metrics = Metrics {
    distance_km: distance_km(record.steps, body.height_m),
    speed_kmh: mean_speed_kmh(record.steps, body.height_m, record.duration),
    calories,
  };

  Ok(TrainingReport {
    activity: record.activity,
    kind,
    duration: record.duration,
    metrics,
  })
}

/// Renders a training report using the default activity labels.
pub fn render_training_report(
  text: &str,
  weight_kg: f64,
  height_m: f64,
) -> Result<String, TrackerError> {
  render_training_report_with(text, weight_kg, height_m, &ActivityLabels::default())
}

pub fn render_training_report_with(
  text: &str,
  weight_kg: f64,
  height_m: f64,
  labels: &ActivityLabels,
) -> Result<String, TrackerError> {
  training_report(text, weight_kg, height_m, labels).map(|report| report.to_string())
}

/// Parses a `steps,duration` record and computes the day's totals.
///
/// Distance uses the fixed stride; calories use the walking formula, which
/// also validates weight and height.
pub fn day_steps_summary(
  text: &str,
  weight_kg: f64,
  height_m: f64,
) -> Result<DaySummary, TrackerError> {
  let day = parse_steps_and_duration(text)?;
  let calories = walking_calories(day.steps, weight_kg, height_m, day.duration)?;

  Ok(DaySummary {
    steps: day.steps,
    distance_km: fixed_stride_distance_km(day.steps),
    calories,
  })
}

/// Renders a day-steps report, or an empty string after notifying `sink`.
pub fn render_day_steps_report_with(
  text: &str,
  weight_kg: f64,
  height_m: f64,
  sink: &dyn DiagnosticSink,
) -> String {
  match day_steps_summary(text, weight_kg, height_m) {
    Ok(summary) => summary.to_string(),
    Err(e) => {
      sink.record_failure(text, &e);
      String::new()
    }
  }
}

/// Renders a day-steps report, logging failures through `tracing`.
pub fn render_day_steps_report(text: &str, weight_kg: f64, height_m: f64) -> String {
  render_day_steps_report_with(text, weight_kg, height_m, &TracingSink)
}
