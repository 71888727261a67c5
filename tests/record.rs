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
use std::time::Duration;
use steptrack::TrackerError;
use steptrack::error::DurationError;
use steptrack::error::Field;
use steptrack::error::ParseFailure;
use steptrack::record::parse_steps_and_duration;
use steptrack::record::parse_training_record;

#[test]
fn test_training_record() {
  let record = parse_training_record("5000,бег,1h30m").unwrap();

  assert_eq!(record.steps, 5000);
  assert_eq!(record.activity, "бег");
  assert_eq!(record.duration, Duration::from_secs(90 * 60));
}

#[test]
fn test_training_record_trims_fields() {
  let record = parse_training_record(" 12000 ,  Ходьба ,2h ").unwrap();

  assert_eq!(record.steps, 12000);
  assert_eq!(record.activity, "Ходьба");
  assert_eq!(record.duration, Duration::from_secs(7200));
}

#[test]
fn test_training_record_field_count() {
  assert!(matches!(
    parse_training_record("5000,1h"),
    Err(TrackerError::Format {
      expected: 3,
      found: 2
    })
  ));
  assert!(matches!(
    parse_training_record("5000,бег,1h,extra"),
    Err(TrackerError::Format {
      expected: 3,
      found: 4
    })
  ));
}

#[test]
fn test_training_record_bad_steps() {
  let err = parse_training_record("abc,бег,1h").unwrap_err();
  assert!(matches!(
    err,
    TrackerError::Parse {
      field: Field::Steps,
      source: ParseFailure::Int(_),
      ..
    }
  ));

  for input in ["0,бег,1h", "-10,бег,1h"] {
    assert!(matches!(
      parse_training_record(input),
      Err(TrackerError::Validation {
        field: Field::Steps,
        ..
      })
    ));
  }
}

#[test]
fn test_training_record_empty_activity() {
  let err = parse_training_record("5000,,1h").unwrap_err();
  assert!(matches!(
    err,
    TrackerError::Validation {
      field: Field::Activity,
      requirement: "non-empty"
    }
  ));
  assert!(parse_training_record("5000,   ,1h").is_err());
}

#[test]
fn test_training_record_bad_duration() {
  let err = parse_training_record("5000,бег,1x").unwrap_err();
  assert!(matches!(
    err,
    TrackerError::Parse {
      field: Field::Duration,
      source: ParseFailure::Duration(DurationError::UnknownUnit { .. }),
      ..
    }
  ));

  for input in ["5000,бег,0s", "5000,бег,-1h", "5000,бег,0"] {
    assert!(matches!(
      parse_training_record(input),
      Err(TrackerError::Validation {
        field: Field::Duration,
        ..
      })
    ));
  }
}

#[test]
fn test_steps_and_duration() {
  let day = parse_steps_and_duration("5000,1h30m").unwrap();

  assert_eq!(day.steps, 5000);
  assert_eq!(day.duration, Duration::from_secs(5400));
}

#[test]
fn test_steps_and_duration_errors() {
  assert!(matches!(
    parse_steps_and_duration("5000"),
    Err(TrackerError::Format {
      expected: 2,
      found: 1
    })
  ));
  assert!(matches!(
    parse_steps_and_duration("5000,бег,1h"),
    Err(TrackerError::Format { found: 3, .. })
  ));
  // Fields are not trimmed in this format.
  assert!(matches!(
    parse_steps_and_duration(" 5000,1h"),
    Err(TrackerError::Parse {
      field: Field::Steps,
      ..
    })
  ));
  assert!(matches!(
    parse_steps_and_duration("0,1h"),
    Err(TrackerError::Validation {
      field: Field::Steps,
      ..
    })
  ));
  assert!(matches!(
    parse_steps_and_duration("5000,1hour"),
    Err(TrackerError::Parse {
      field: Field::Duration,
      ..
    })
  ));
  assert!(matches!(
    parse_steps_and_duration("5000,-30m"),
    Err(TrackerError::Validation {
      field: Field::Duration,
      ..
    })
  ));
}

#[test]
fn test_error_messages_name_the_field() {
  let err = parse_training_record("5000,бег,0s").unwrap_err();
  assert_eq!(err.to_string(), "duration must be positive");
  assert_eq!(err.field(), Some(Field::Duration));

  let err = parse_training_record("x,бег,1h").unwrap_err();
  assert_eq!(err.to_string(), "Failed to parse steps from 'x'");
}
