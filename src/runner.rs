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
use crate::activity::ActivityLabels;
use crate::cli::OutputFormat;
use crate::config::Resolved;
use crate::report::DiagnosticSink;
use crate::report::TracingSink;
use crate::report::day_steps_summary;
use crate::report::render_day_steps_report_with;
use crate::report::training_report;
use anyhow::Context;
use anyhow::Result;
use std::io;
use std::io::Write;

/// Summarises each day-steps record. Failed records are logged and skipped.
pub fn run_day<I, W>(records: I, body: Resolved, format: OutputFormat, out: &mut W) -> Result<()>
where
  I: IntoIterator<Item = io::Result<String>>,
  W: Write,
{
  let span = tracing::info_span!("day", weight_kg = body.weight_kg, height_m = body.height_m);
  let _enter = span.enter();

  let mut processed = 0usize;
  for line in records {
    let line = line.context("Failed to read record")?;
    if line.trim().is_empty() {
      continue;
    }
    processed += 1;

    match format {
      OutputFormat::Text => {
        let report = render_day_steps_report_with(&line, body.weight_kg, body.height_m, &TracingSink);
        write!(out, "{}", report)?;
      }
      OutputFormat::Json => match day_steps_summary(&line, body.weight_kg, body.height_m) {
        Ok(summary) => writeln!(out, "{}", serde_json::to_string(&summary)?)?,
        Err(e) => TracingSink.record_failure(&line, &e),
      },
    }
  }

  tracing::info!(processed, "Day records processed");
  Ok(())
}

/// Reports on each training record, stopping at the first failure.
pub fn run_training<I, W>(
  records: I,
  body: Resolved,
  labels: &ActivityLabels,
  format: OutputFormat,
  out: &mut W,
) -> Result<()>
where
  I: IntoIterator<Item = io::Result<String>>,
  W: Write,
{
  let span = tracing::info_span!(
    "training",
    weight_kg = body.weight_kg,
    height_m = body.height_m
  );
  let _enter = span.enter();

  let mut processed = 0usize;
  for line in records {
    let line = line.context("Failed to read record")?;
    if line.trim().is_empty() {
      continue;
    }

    let report = training_report(&line, body.weight_kg, body.height_m, labels)
      .with_context(|| format!("Invalid training record '{}'", line))?;
    processed += 1;

    match format {
      OutputFormat::Text => write!(out, "{}", report)?,
      OutputFormat::Json => writeln!(out, "{}", serde_json::to_string(&report)?)?,
    }
  }

  tracing::info!(processed, "Training records processed");
  Ok(())
}
