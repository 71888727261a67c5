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
use std::fmt;
use std::num::ParseIntError;
use std::path::PathBuf;
use thiserror::Error;

/// The record or biometric field an error refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
  Steps,
  Activity,
  Duration,
  Weight,
  Height,
}

impl fmt::Display for Field {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    let name = match self {
      Field::Steps => "steps",
      Field::Activity => "activity",
      Field::Duration => "duration",
      Field::Weight => "weight",
      Field::Height => "height",
    };
    f.write_str(name)
  }
}

/// Errors produced while parsing records and computing metrics.
#[derive(Error, Debug)]
pub enum TrackerError {
  #[error("Invalid record format: expected {expected} comma-separated fields, got {found}")]
  Format { expected: usize, found: usize },

  #[error("Failed to parse {field} from '{value}'")]
  Parse {
    field: Field,
    value: String,
    #[source]
    source: ParseFailure,
  },

  #[error("{field} must be {requirement}")]
  Validation {
    field: Field,
    requirement: &'static str,
  },

  #[error("Unrecognized activity: {0}")]
  UnrecognizedActivity(String),
}

impl TrackerError {
  pub(crate) fn not_positive(field: Field) -> Self {
    TrackerError::Validation {
      field,
      requirement: "positive",
    }
  }

  pub(crate) fn empty(field: Field) -> Self {
    TrackerError::Validation {
      field,
      requirement: "non-empty",
    }
  }

  /// The field this error refers to, if any.
  pub fn field(&self) -> Option<Field> {
    match self {
      TrackerError::Parse { field, .. } | TrackerError::Validation { field, .. } => Some(*field),
      TrackerError::UnrecognizedActivity(_) => Some(Field::Activity),
      TrackerError::Format { .. } => None,
    }
  }
}

/// Underlying cause of a [`TrackerError::Parse`].
#[derive(Error, Debug)]
pub enum ParseFailure {
  #[error(transparent)]
  Int(#[from] ParseIntError),

  #[error(transparent)]
  Duration(#[from] DurationError),
}

/// Errors from the compact duration notation parser (src/duration.rs).
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DurationError {
  #[error("invalid duration \"{0}\"")]
  Invalid(String),

  #[error("missing unit in duration \"{0}\"")]
  MissingUnit(String),

  #[error("unknown unit \"{unit}\" in duration \"{input}\"")]
  UnknownUnit { unit: String, input: String },

  #[error("duration \"{0}\" is out of range")]
  Overflow(String),
}

/// Errors related to configuration resolution (src/config.rs).
#[derive(Error, Debug)]
pub enum ConfigError {
  #[error("Configuration file not found: {0}")]
  NotFound(PathBuf),

  #[error("Failed to load configuration")]
  Load(#[from] Box<figment::Error>),

  #[error("No {0} given. Pass it on the command line or set it in the configuration.")]
  MissingBiometric(&'static str),

  #[error("Failed to render configuration as TOML")]
  Render(#[from] toml::ser::Error),
}
