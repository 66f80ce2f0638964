//! Percentage-trend calculation for new-case counts.
//!
//! One canonical formula is used for both the remote COVID case series
//! and local symptom counts: the reference day's count is compared
//! against the trailing average of a comparison window.

use crate::CovidDatum;

/// Mean of a comparison window, 0.0 when the window is empty
pub fn trailing_average(window: &[u32]) -> f64 {
    if window.is_empty() {
        return 0.0;
    }

    let sum: u64 = window.iter().map(|count| u64::from(*count)).sum();
    sum as f64 / window.len() as f64
}

/// Percentage change of `reference` against the trailing average of
/// `comparison_window`, rounded to the nearest whole percent.
///
/// Positive means the reference day is above the trailing average.
/// An empty window or a zero reference resolves to the sentinel `0`
/// rather than propagating NaN or infinity.
pub fn percentage_trend(reference: u32, comparison_window: &[u32]) -> i32 {
    if comparison_window.is_empty() || reference == 0 {
        return 0;
    }

    let average = trailing_average(comparison_window);
    ((1.0 - average / f64::from(reference)) * 100.0).round() as i32
}

/// Trend of a case series: element 0 is the reference day, the rest is
/// the comparison window. An empty series resolves to `0`.
pub fn cases_trend(data: &[CovidDatum]) -> i32 {
    match data.split_first() {
        Some((reference, window)) => {
            let counts: Vec<u32> = window.iter().map(|datum| datum.positive_cases_new).collect();
            percentage_trend(reference.positive_cases_new, &counts)
        }
        None => 0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn datum(date: NaiveDate, new_cases: u32) -> CovidDatum {
        CovidDatum {
            date,
            positive_cases_new: new_cases,
            positive_cases_total: 1000,
            deaths_new: None,
            deaths_total: None,
        }
    }

    #[test]
    fn test_reference_above_average_is_positive() {
        assert_eq!(percentage_trend(10, &[6, 6]), 40);
    }

    #[test]
    fn test_reference_below_average_is_negative() {
        assert_eq!(percentage_trend(6, &[10, 10]), -67);
    }

    #[test]
    fn test_empty_window_is_zero() {
        assert_eq!(percentage_trend(10, &[]), 0);
        assert_eq!(percentage_trend(0, &[]), 0);
    }

    #[test]
    fn test_zero_reference_is_zero() {
        assert_eq!(percentage_trend(0, &[10, 20, 30]), 0);
    }

    #[test]
    fn test_flat_series_is_zero() {
        assert_eq!(percentage_trend(5, &[5, 5, 5]), 0);
    }

    #[test]
    fn test_trailing_average() {
        assert_eq!(trailing_average(&[]), 0.0);
        assert_eq!(trailing_average(&[4]), 4.0);
        assert_eq!(trailing_average(&[3, 6]), 4.5);
    }

    #[test]
    fn test_cases_trend_uses_first_datum_as_reference() {
        let start = NaiveDate::from_ymd_opt(2020, 9, 21).unwrap();
        let series = vec![
            datum(start, 10),
            datum(start.pred_opt().unwrap(), 6),
            datum(start.pred_opt().unwrap().pred_opt().unwrap(), 6),
        ];

        assert_eq!(cases_trend(&series), 40);
    }

    #[test]
    fn test_cases_trend_of_empty_series_is_zero() {
        assert_eq!(cases_trend(&[]), 0);
    }

    #[test]
    fn test_cases_trend_of_single_datum_is_zero() {
        let only = datum(NaiveDate::from_ymd_opt(2020, 9, 21).unwrap(), 12);
        assert_eq!(cases_trend(&[only]), 0);
    }
}
