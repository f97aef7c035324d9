use std::fmt;

use crate::WorkoutKind;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SummaryReport {
    pub kind: WorkoutKind,
    pub duration: f64,
    pub distance: f64,
    pub speed: f64,
    pub calories: f64,
}

impl SummaryReport {
    /// Render the report as a single line.
    ///
    /// All values are formatted with three decimal places. Ties of the exact binary
    /// value are rounded half to even.
    #[must_use]
    pub fn render(&self, locale: Locale) -> String {
        let SummaryReport {
            kind,
            duration,
            distance,
            speed,
            calories,
        } = self;

        match locale {
            Locale::English => format!(
                "Workout type: {kind}; \
                 Duration: {duration:.3} h.; \
                 Distance: {distance:.3} km; \
                 Avg. speed: {speed:.3} km/h; \
                 Calories burned: {calories:.3}."
            ),
            Locale::Russian => format!(
                "Тип тренировки: {kind}; \
                 Длительность: {duration:.3} ч.; \
                 Дистанция: {distance:.3} км; \
                 Ср. скорость: {speed:.3} км/ч; \
                 Потрачено ккал: {calories:.3}."
            ),
        }
    }
}

impl fmt::Display for SummaryReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.render(Locale::English))
    }
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum Locale {
    #[default]
    English,
    Russian,
}
