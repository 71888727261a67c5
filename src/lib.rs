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
//! # Steptrack
//!
//! `steptrack` turns short step-count records into distance, mean speed and
//! calories burned for walking and running.
//!
//! Two record shapes are understood:
//!
//! * day steps: `"<steps>,<duration>"`, e.g. `"5000,1h30m"`
//! * training: `"<steps>,<activity>,<duration>"`, e.g. `"5000,бег,1h30m"`
//!
//! This crate contains the library behind the `steptrack` CLI; the report
//! functions can be used on their own.
//!
//! ## Core Modules
//!
//! * [`duration`]: Parses the compact time-span notation (`"1h30m45s"`).
//! * [`record`]: Splits and validates the comma-separated records.
//! * [`activity`]: Classifies activity labels into [`activity::ActivityKind`].
//! * [`metrics`]: Distance, speed and calorie formulas.
//! * [`report`]: The `render_*` entry points and the diagnostic sink used by
//!   the lenient day-steps report.
//! * [`config`]: Loads labels and default biometrics with `figment`.
//! * [`runner`]: Drives batches of records for the `day` and `training` commands.
//! * [`cli`]: Defines the `clap`-based command-line interface.
//! * [`error`]: Defines the custom error types for the library.
//! * [`logging`]: Provides the `setup_tracing` utility.

pub mod activity;
pub mod cli;
pub mod config;
pub mod duration;
pub mod error;
pub mod logging;
pub mod metrics;
pub mod record;
pub mod report;
pub mod runner;

pub use error::TrackerError;
pub use report::render_day_steps_report;
pub use report::render_training_report;
