//! Daily aggregation of sub-daily forecast observations.
//!
//! The provider emits one observation every 3 hours. This module folds that
//! stream into at most [`MAX_FORECAST_DAYS`] daily summaries: running
//! min/max for temperature, arithmetic means for humidity and wind speed,
//! and a majority vote over the coarse weather category.

use chrono::NaiveDate;

use crate::Result;
use crate::error::ForecastError;
use crate::models::{Condition, DailySummary, Observation};

/// Upper bound on the number of daily summaries returned.
pub const MAX_FORECAST_DAYS: usize = 7;

/// Running per-date aggregate. Lives only for the duration of one
/// [`aggregate`] call; `count` is at least 1 for any accumulator that
/// exists.
#[derive(Debug)]
struct DailyAccumulator {
    date: NaiveDate,
    day_of_week: String,
    temp_min: f64,
    temp_max: f64,
    temp_sum: f64,
    humidity_sum: u64,
    wind_speed_sum: f64,
    count: u32,
    /// Category occurrence counts, in first-seen order
    condition_tally: Vec<(String, u32)>,
    /// Captured from the first observation of the day
    icon: String,
    /// Captured from the first observation of the day, not averaged
    pressure: u32,
}

impl DailyAccumulator {
    fn seed(date: NaiveDate, observation: &Observation, condition: &Condition) -> Self {
        Self {
            date,
            day_of_week: date.format("%a").to_string(),
            temp_min: observation.temp_min,
            temp_max: observation.temp_max,
            temp_sum: observation.temp,
            humidity_sum: u64::from(observation.humidity),
            wind_speed_sum: observation.wind_speed,
            count: 1,
            condition_tally: vec![(condition.main.clone(), 1)],
            icon: condition.icon.clone(),
            pressure: observation.pressure,
        }
    }

    fn fold(&mut self, observation: &Observation, condition: &Condition) {
        self.temp_min = self.temp_min.min(observation.temp_min);
        self.temp_max = self.temp_max.max(observation.temp_max);
        self.temp_sum += observation.temp;
        self.humidity_sum += u64::from(observation.humidity);
        self.wind_speed_sum += observation.wind_speed;
        self.count += 1;

        match self
            .condition_tally
            .iter_mut()
            .find(|(category, _)| *category == condition.main)
        {
            Some((_, occurrences)) => *occurrences += 1,
            None => self.condition_tally.push((condition.main.clone(), 1)),
        }
    }

    /// Category with the strictly highest tally. Ties resolve to the
    /// category tallied first, so the result is deterministic.
    fn dominant_condition(&self) -> &str {
        let mut dominant = "";
        let mut highest = 0;
        for (category, occurrences) in &self.condition_tally {
            if *occurrences > highest {
                dominant = category;
                highest = *occurrences;
            }
        }
        dominant
    }

    fn finish(self) -> DailySummary {
        let count = f64::from(self.count);
        let description = self.dominant_condition().to_string();

        DailySummary {
            date: self.date,
            day_of_week: self.day_of_week,
            temp_min: self.temp_min,
            temp_max: self.temp_max,
            humidity: (self.humidity_sum as f64 / count).round() as u32,
            description,
            icon: self.icon,
            wind_speed: format!("{:.1}", self.wind_speed_sum / count),
            pressure: self.pressure,
        }
    }
}

fn condition_of(observation: &Observation) -> Result<&Condition> {
    observation.conditions.first().ok_or_else(|| {
        ForecastError::malformed(format!(
            "observation at {} carries no weather condition",
            observation.timestamp
        ))
    })
}

/// Condense 3-hour forecast observations into daily summaries.
///
/// Observations are grouped by the calendar date of their timestamp. Output
/// preserves the order in which dates first appear in the input and is
/// capped at [`MAX_FORECAST_DAYS`] entries. An empty input yields an empty
/// output.
///
/// # Errors
///
/// Returns [`ForecastError::MalformedObservation`] if any observation has
/// no weather condition; the category drives the majority vote, so a
/// silently wrong summary would be worse than a failed one. No partial
/// output is produced.
pub fn aggregate(observations: &[Observation]) -> Result<Vec<DailySummary>> {
    let days = observations
        .iter()
        .try_fold(Vec::<DailyAccumulator>::new(), |mut days, observation| {
            let condition = condition_of(observation)?;
            let date = observation.date();

            match days.iter_mut().find(|accumulator| accumulator.date == date) {
                Some(accumulator) => accumulator.fold(observation, condition),
                None => days.push(DailyAccumulator::seed(date, observation, condition)),
            }
            Ok(days)
        })?;

    Ok(days
        .into_iter()
        .take(MAX_FORECAST_DAYS)
        .map(DailyAccumulator::finish)
        .collect())
}
