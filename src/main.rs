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
use anyhow::Result;
use clap::Parser;
use std::io;
use std::io::BufRead;
use std::io::Write;
use steptrack::cli::Cli;
use steptrack::cli::Commands;
use steptrack::cli::MeasureArgs;
use steptrack::config::Config;
use steptrack::config::Resolved;
use steptrack::logging::setup_tracing;
use steptrack::runner::run_day;
use steptrack::runner::run_training;

/// Records from the command line, or stdin lines when none were given.
fn records(args: &MeasureArgs) -> Box<dyn Iterator<Item = io::Result<String>>> {
  if args.records.is_empty() {
    Box::new(io::stdin().lock().lines())
  } else {
    Box::new(args.records.clone().into_iter().map(Ok))
  }
}

fn main() -> Result<()> {
  let _guard = setup_tracing()?;

  let Cli { config, command } = Cli::parse();
  let main_span = tracing::info_span!("steptrack");
  let _enter = main_span.enter();

  let config = Config::load(config.as_deref())?;
  let mut out = io::stdout().lock();

  match command {
    Commands::Day(args) => {
      let body = Resolved::try_from((&config, &args))?;
      run_day(records(&args), body, args.format, &mut out)?;
    }
    Commands::Training(args) => {
      let body = Resolved::try_from((&config, &args))?;
      run_training(records(&args), body, &config.labels, args.format, &mut out)?;
    }
    Commands::Config => {
      write!(out, "{}", config.to_toml()?)?;
    }
  }

  out.flush()?;
  Ok(())
}
