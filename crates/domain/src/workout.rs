use derive_more::Display;
use strum::{EnumString, IntoStaticStr};

use crate::SummaryReport;

pub(crate) const METERS_IN_KM: f64 = 1000.0;
pub(crate) const MINUTES_IN_HOUR: f64 = 60.0;

/// Metrics derived from the raw readings of a single workout.
///
/// Distance is given in km, mean speed in km/h and calories in kcal. None of the
/// formulas validate their inputs: a zero duration results in an infinite or NaN
/// value instead of an error.
pub trait Training {
    fn kind(&self) -> WorkoutKind;
    fn duration(&self) -> f64;
    fn distance(&self) -> f64;
    fn mean_speed(&self) -> f64;
    fn spent_calories(&self) -> f64;

    #[must_use]
    fn summary(&self) -> SummaryReport {
        SummaryReport {
            kind: self.kind(),
            duration: self.duration(),
            distance: self.distance(),
            speed: self.mean_speed(),
            calories: self.spent_calories(),
        }
    }
}

#[derive(Debug, Display, Clone, Copy, EnumString, IntoStaticStr, PartialEq, Eq)]
pub enum WorkoutKind {
    #[strum(serialize = "SWM")]
    Swimming,
    #[strum(serialize = "RUN")]
    Running,
    #[strum(serialize = "WLK")]
    SportsWalking,
}

impl WorkoutKind {
    #[must_use]
    pub fn code(self) -> &'static str {
        self.into()
    }

    /// Number of positional fields in a package of this kind.
    #[must_use]
    pub fn arity(self) -> usize {
        match self {
            WorkoutKind::Swimming => 5,
            WorkoutKind::Running => 3,
            WorkoutKind::SportsWalking => 4,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Running {
    pub action: u32,
    pub duration: f64,
    pub weight: f64,
}

impl Running {
    pub const STEP_LENGTH: f64 = 0.65;
    const CALORIES_SPEED_MULTIPLIER: f64 = 18.0;
    const CALORIES_SPEED_SHIFT: f64 = 20.0;

    #[must_use]
    pub fn new(action: u32, duration: f64, weight: f64) -> Self {
        Self {
            action,
            duration,
            weight,
        }
    }
}

impl Training for Running {
    fn kind(&self) -> WorkoutKind {
        WorkoutKind::Running
    }

    fn duration(&self) -> f64 {
        self.duration
    }

    fn distance(&self) -> f64 {
        step_distance(self.action, Self::STEP_LENGTH)
    }

    fn mean_speed(&self) -> f64 {
        self.distance() / self.duration
    }

    fn spent_calories(&self) -> f64 {
        (Self::CALORIES_SPEED_MULTIPLIER * self.mean_speed() - Self::CALORIES_SPEED_SHIFT)
            * self.weight
            / METERS_IN_KM
            * (self.duration * MINUTES_IN_HOUR)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct SportsWalking {
    pub action: u32,
    pub duration: f64,
    pub weight: f64,
    pub height: f64,
}

impl SportsWalking {
    pub const STEP_LENGTH: f64 = 0.65;
    const CALORIES_WEIGHT_MULTIPLIER: f64 = 0.035;
    const CALORIES_SPEED_HEIGHT_MULTIPLIER: f64 = 0.029;

    #[must_use]
    pub fn new(action: u32, duration: f64, weight: f64, height: f64) -> Self {
        Self {
            action,
            duration,
            weight,
            height,
        }
    }
}

impl Training for SportsWalking {
    fn kind(&self) -> WorkoutKind {
        WorkoutKind::SportsWalking
    }

    fn duration(&self) -> f64 {
        self.duration
    }

    fn distance(&self) -> f64 {
        step_distance(self.action, Self::STEP_LENGTH)
    }

    fn mean_speed(&self) -> f64 {
        self.distance() / self.duration
    }

    fn spent_calories(&self) -> f64 {
        (Self::CALORIES_WEIGHT_MULTIPLIER * self.weight
            + floor_div(self.mean_speed().powi(2), self.height)
                * Self::CALORIES_SPEED_HEIGHT_MULTIPLIER
                * self.weight)
            * (self.duration * MINUTES_IN_HOUR)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Swimming {
    pub action: u32,
    pub duration: f64,
    pub weight: f64,
    pub pool_length: f64,
    pub pool_laps: u32,
}

impl Swimming {
    pub const STEP_LENGTH: f64 = 1.38;
    const CALORIES_SPEED_SHIFT: f64 = 1.1;
    const CALORIES_WEIGHT_MULTIPLIER: f64 = 2.0;

    #[must_use]
    pub fn new(action: u32, duration: f64, weight: f64, pool_length: f64, pool_laps: u32) -> Self {
        Self {
            action,
            duration,
            weight,
            pool_length,
            pool_laps,
        }
    }
}

impl Training for Swimming {
    fn kind(&self) -> WorkoutKind {
        WorkoutKind::Swimming
    }

    fn duration(&self) -> f64 {
        self.duration
    }

    // Not reconciled with the pool based speed below.
    fn distance(&self) -> f64 {
        step_distance(self.action, Self::STEP_LENGTH)
    }

    fn mean_speed(&self) -> f64 {
        self.pool_length * f64::from(self.pool_laps) / METERS_IN_KM / self.duration
    }

    fn spent_calories(&self) -> f64 {
        (self.mean_speed() + Self::CALORIES_SPEED_SHIFT)
            * Self::CALORIES_WEIGHT_MULTIPLIER
            * self.weight
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Workout {
    Running(Running),
    SportsWalking(SportsWalking),
    Swimming(Swimming),
}

impl Workout {
    fn training(&self) -> &dyn Training {
        match self {
            Workout::Running(running) => running,
            Workout::SportsWalking(sports_walking) => sports_walking,
            Workout::Swimming(swimming) => swimming,
        }
    }
}

impl Training for Workout {
    fn kind(&self) -> WorkoutKind {
        self.training().kind()
    }

    fn duration(&self) -> f64 {
        self.training().duration()
    }

    fn distance(&self) -> f64 {
        self.training().distance()
    }

    fn mean_speed(&self) -> f64 {
        self.training().mean_speed()
    }

    fn spent_calories(&self) -> f64 {
        self.training().spent_calories()
    }
}

impl From<Running> for Workout {
    fn from(value: Running) -> Self {
        Workout::Running(value)
    }
}

impl From<SportsWalking> for Workout {
    fn from(value: SportsWalking) -> Self {
        Workout::SportsWalking(value)
    }
}

impl From<Swimming> for Workout {
    fn from(value: Swimming) -> Self {
        Workout::Swimming(value)
    }
}

fn step_distance(action: u32, step_length: f64) -> f64 {
    f64::from(action) * step_length / METERS_IN_KM
}

/// Floor division of two floats.
///
/// The quotient is derived from the remainder, so that e.g. `floor_div(1.0, 0.1)`
/// is `9.0` and not `10.0` as `(1.0 / 0.1).floor()` would suggest.
#[must_use]
#[allow(clippy::float_cmp)]
pub(crate) fn floor_div(dividend: f64, divisor: f64) -> f64 {
    let remainder = dividend % divisor;
    let mut quotient = (dividend - remainder) / divisor;

    if remainder != 0.0 && (divisor < 0.0) != (remainder < 0.0) {
        quotient -= 1.0;
    }

    if quotient == 0.0 {
        return 0.0_f64.copysign(dividend / divisor);
    }

    let floor = quotient.floor();

    if quotient - floor > 0.5 {
        floor + 1.0
    } else {
        floor
    }
}
