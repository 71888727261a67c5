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
use serde::Deserialize;
use serde::Deserializer;
use serde::Serialize;

/// The kind of training a record describes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ActivityKind {
  Running,
  Walking,
  /// A label that matched none of the configured tokens.
  Unrecognized(String),
}

/// Label tokens recognized for each activity kind.
///
/// Matching is case-insensitive. Tokens are locale-specific and are not
/// normalized to ASCII.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActivityLabels {
  #[serde(default, deserialize_with = "one_or_many")]
  pub running: Vec<String>,

  #[serde(default, deserialize_with = "one_or_many")]
  pub walking: Vec<String>,
}

/// Accepts either a single token or a list, so `STEPTRACK_LABELS__RUNNING=run`
/// works as well as `[run, jog]`.
fn one_or_many<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Vec<String>, D::Error> {
  #[derive(Deserialize)]
  #[serde(untagged)]
  enum Tokens {
    One(String),
    Many(Vec<String>),
  }

  Ok(match Tokens::deserialize(deserializer)? {
    Tokens::One(token) => vec![token],
    Tokens::Many(tokens) => tokens,
  })
}

impl Default for ActivityLabels {
  fn default() -> Self {
    ActivityLabels {
      running: vec!["бег".to_string()],
      walking: vec!["ходьба".to_string()],
    }
  }
}

impl ActivityLabels {
  pub fn classify(&self, label: &str) -> ActivityKind {
    let wanted = label.to_lowercase();
    let matches = |tokens: &[String]| tokens.iter().any(|t| t.to_lowercase() == wanted);

    if matches(&self.running) {
      ActivityKind::Running
    } else if matches(&self.walking) {
      ActivityKind::Walking
    } else {
      ActivityKind::Unrecognized(label.to_string())
    }
  }
}
