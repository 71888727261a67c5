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
use crate::cli::MeasureArgs;
use crate::error::ConfigError;
use figment::Figment;
use figment::providers::Env;
use figment::providers::Format;
use figment::providers::Json;
use figment::providers::Serialized;
use figment::providers::Toml;
use serde::Deserialize;
use serde::Serialize;
use std::path::Path;

/// Prefix for environment overrides, e.g. `STEPTRACK_WEIGHT_KG=70`.
pub const ENV_PREFIX: &str = "STEPTRACK_";

/// Settings merged from defaults, an optional config file and the environment.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub weight_kg: Option<f64>,

  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub height_m: Option<f64>,

  #[serde(default)]
  pub labels: ActivityLabels,
}

/// Weight and height resolved for a `day` or `training` run.
///
/// Values are not validated here; the report functions do that per record.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Resolved {
  pub weight_kg: f64,
  pub height_m: f64,
}

impl Config {
  /// Builds the provider chain. Later sources win.
  pub fn figment(path: Option<&Path>) -> Figment {
    let mut figment = Figment::from(Serialized::defaults(Config::default()));

    if let Some(path) = path {
      let is_json = path
        .extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));
      figment = if is_json {
        figment.merge(Json::file(path))
      } else {
        figment.merge(Toml::file(path))
      };
    }

    figment.merge(Env::prefixed(ENV_PREFIX).split("__"))
  }

  pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
    if let Some(path) = path.filter(|p| !p.is_file()) {
      return Err(ConfigError::NotFound(path.to_path_buf()));
    }

    let config: Config = Config::figment(path).extract().map_err(Box::new)?;
    tracing::debug!(?config, "Configuration loaded");
    Ok(config)
  }

  pub fn to_toml(&self) -> Result<String, ConfigError> {
    Ok(toml::to_string_pretty(self)?)
  }
}

impl TryFrom<(&Config, &MeasureArgs)> for Resolved {
  type Error = ConfigError;

  fn try_from((config, args): (&Config, &MeasureArgs)) -> Result<Self, Self::Error> {
    let weight_kg = args
      .weight
      .or(config.weight_kg)
      .ok_or(ConfigError::MissingBiometric("weight"))?;
    let height_m = args
      .height
      .or(config.height_m)
      .ok_or(ConfigError::MissingBiometric("height"))?;

    Ok(Resolved {
      weight_kg,
      height_m,
    })
  }
}
