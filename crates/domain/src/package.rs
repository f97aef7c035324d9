use std::str::FromStr;

use log::debug;

use crate::{Running, SportsWalking, Swimming, Workout, WorkoutKind};

/// Raw readings of a single workout as sent by a sensor.
#[derive(Debug, Clone, PartialEq)]
pub struct Package {
    pub code: String,
    pub data: Vec<f64>,
}

impl Package {
    #[must_use]
    pub fn new(code: &str, data: &[f64]) -> Self {
        Self {
            code: code.to_string(),
            data: data.to_vec(),
        }
    }

    pub fn read(&self) -> Result<Workout, PackageError> {
        read_package(&self.code, &self.data)
    }
}

/// Construct the workout described by `code` from its positional fields.
///
/// The fields are interpreted as follows:
///
///  - `SWM`: action, duration, weight, pool length, pool laps
///  - `RUN`: action, duration, weight
///  - `WLK`: action, duration, weight, height
///
/// The number of fields is checked before any field is interpreted.
pub fn read_package(code: &str, data: &[f64]) -> Result<Workout, PackageError> {
    let kind =
        WorkoutKind::from_str(code).map_err(|_| PackageError::UnknownKind(code.to_string()))?;

    if data.len() != kind.arity() {
        return Err(PackageError::InvalidArity {
            kind,
            expected: kind.arity(),
            actual: data.len(),
        });
    }

    let action = count("action", data[0])?;
    let (duration, weight) = (data[1], data[2]);

    let workout = match kind {
        WorkoutKind::Swimming => Workout::from(Swimming::new(
            action,
            duration,
            weight,
            data[3],
            count("pool_laps", data[4])?,
        )),
        WorkoutKind::Running => Workout::from(Running::new(action, duration, weight)),
        WorkoutKind::SportsWalking => {
            Workout::from(SportsWalking::new(action, duration, weight, data[3]))
        }
    };

    debug!("read {} package: {workout:?}", kind.code());

    Ok(workout)
}

#[allow(
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss,
    clippy::float_cmp
)]
fn count(field: &'static str, value: f64) -> Result<u32, PackageError> {
    if value.fract() != 0.0 || !(0.0..=f64::from(u32::MAX)).contains(&value) {
        return Err(PackageError::InvalidCount { field, value });
    }

    Ok(value as u32)
}

#[derive(thiserror::Error, Debug, PartialEq)]
pub enum PackageError {
    #[error("unknown workout kind: {0:?}")]
    UnknownKind(String),
    #[error("{kind} package must have {expected} fields, got {actual}")]
    InvalidArity {
        kind: WorkoutKind,
        expected: usize,
        actual: usize,
    },
    #[error("{field} must be a non-negative integer, got {value}")]
    InvalidCount { field: &'static str, value: f64 },
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case::swimming(
        "SWM",
        &[720.0, 1.0, 80.0, 25.0, 40.0],
        Swimming {
            action: 720,
            duration: 1.0,
            weight: 80.0,
            pool_length: 25.0,
            pool_laps: 40,
        }.into()
    )]
    #[case::running(
        "RUN",
        &[15000.0, 1.0, 75.0],
        Running {
            action: 15000,
            duration: 1.0,
            weight: 75.0,
        }.into()
    )]
    #[case::sports_walking(
        "WLK",
        &[9000.0, 1.0, 75.0, 180.0],
        SportsWalking {
            action: 9000,
            duration: 1.0,
            weight: 75.0,
            height: 180.0,
        }.into()
    )]
    #[case::negative_weight(
        "RUN",
        &[15000.0, 1.0, -75.0],
        Running {
            action: 15000,
            duration: 1.0,
            weight: -75.0,
        }.into()
    )]
    fn test_read_package(#[case] code: &str, #[case] data: &[f64], #[case] expected: Workout) {
        assert_eq!(read_package(code, data), Ok(expected));
    }

    #[rstest]
    #[case("XYZ", &[15000.0, 1.0, 75.0])]
    #[case("run", &[15000.0, 1.0, 75.0])]
    #[case("", &[])]
    #[case("SWIM", &[720.0, 1.0, 80.0, 25.0, 40.0])]
    fn test_read_package_unknown_kind(#[case] code: &str, #[case] data: &[f64]) {
        let result = read_package(code, data);
        assert_eq!(result, Err(PackageError::UnknownKind(code.to_string())));
        assert!(
            result
                .unwrap_err()
                .to_string()
                .starts_with("unknown workout kind")
        );
    }

    #[rstest]
    #[case("SWM", &[720.0, 1.0, 80.0, 25.0], WorkoutKind::Swimming, 5, 4)]
    #[case("SWM", &[720.0, 1.0, 80.0, 25.0, 40.0, 1.0], WorkoutKind::Swimming, 5, 6)]
    #[case("RUN", &[15000.0, 1.0], WorkoutKind::Running, 3, 2)]
    #[case("RUN", &[15000.0, 1.0, 75.0, 180.0], WorkoutKind::Running, 3, 4)]
    #[case("WLK", &[9000.0, 1.0, 75.0], WorkoutKind::SportsWalking, 4, 3)]
    #[case("WLK", &[], WorkoutKind::SportsWalking, 4, 0)]
    fn test_read_package_invalid_arity(
        #[case] code: &str,
        #[case] data: &[f64],
        #[case] kind: WorkoutKind,
        #[case] expected: usize,
        #[case] actual: usize,
    ) {
        assert_eq!(
            read_package(code, data),
            Err(PackageError::InvalidArity {
                kind,
                expected,
                actual
            })
        );
    }

    #[rstest]
    #[case("RUN", &[150.5, 1.0, 75.0], "action", 150.5)]
    #[case("RUN", &[-1.0, 1.0, 75.0], "action", -1.0)]
    #[case("WLK", &[1e10, 1.0, 75.0, 180.0], "action", 1e10)]
    #[case("SWM", &[720.0, 1.0, 80.0, 25.0, 40.5], "pool_laps", 40.5)]
    fn test_read_package_invalid_count(
        #[case] code: &str,
        #[case] data: &[f64],
        #[case] field: &'static str,
        #[case] value: f64,
    ) {
        assert_eq!(
            read_package(code, data),
            Err(PackageError::InvalidCount { field, value })
        );
    }

    #[test]
    fn test_read_package_nan_count() {
        assert!(matches!(
            read_package("RUN", &[f64::NAN, 1.0, 75.0]),
            Err(PackageError::InvalidCount { field: "action", .. })
        ));
    }

    #[test]
    fn test_package_read() {
        assert_eq!(
            Package::new("RUN", &[15000.0, 1.0, 75.0]).read(),
            Ok(Running::new(15000, 1.0, 75.0).into())
        );
        assert_eq!(
            Package::new("BIKE", &[1.0]).read(),
            Err(PackageError::UnknownKind("BIKE".to_string()))
        );
    }

    #[test]
    fn test_package_error_display() {
        assert_eq!(
            PackageError::UnknownKind("XYZ".to_string()).to_string(),
            "unknown workout kind: \"XYZ\""
        );
        assert_eq!(
            PackageError::InvalidArity {
                kind: WorkoutKind::Running,
                expected: 3,
                actual: 2
            }
            .to_string(),
            "Running package must have 3 fields, got 2"
        );
        assert_eq!(
            PackageError::InvalidCount {
                field: "pool_laps",
                value: 40.5
            }
            .to_string(),
            "pool_laps must be a non-negative integer, got 40.5"
        );
    }
}
