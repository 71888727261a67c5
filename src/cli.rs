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
use clap::Args;
use clap::Parser;
use clap::Subcommand;
use clap::ValueEnum;
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(version, about = "Distance, speed and calories from step-count records")]
pub struct Cli {
  /// Path to a TOML or JSON configuration file.
  #[arg(long, global = true, env = "STEPTRACK_CONFIG")]
  pub config: Option<PathBuf>,

  #[command(subcommand)]
  pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
  /// Summarise daily `steps,duration` records (e.g. "5000,1h30m").
  ///
  /// Invalid records are logged and produce no output.
  Day(MeasureArgs),

  /// Report on `steps,activity,duration` training records (e.g. "5000,бег,1h").
  ///
  /// Stops at the first invalid record.
  Training(MeasureArgs),

  /// Print the effective configuration as TOML.
  Config,
}

#[derive(Debug, Clone, Args)]
pub struct MeasureArgs {
  /// Body weight in kilograms. Falls back to `weight_kg` in the configuration.
  #[arg(long, allow_negative_numbers = true)]
  pub weight: Option<f64>,

  /// Height in metres. Falls back to `height_m` in the configuration.
  #[arg(long, allow_negative_numbers = true)]
  pub height: Option<f64>,

  #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
  pub format: OutputFormat,

  /// Records to evaluate. Read from stdin, one per line, when omitted.
  pub records: Vec<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
  /// Human-readable report.
  Text,
  /// One JSON object per line.
  Json,
}
