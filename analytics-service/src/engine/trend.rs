use serde::Serialize;
use utility_domain::MonthlySeries;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    Up,
    Down,
}

/// Month-over-month movement of one series.
///
/// `value` is the absolute change against the previous month (against 0 when
/// there is none), `percentage` its magnitude relative to the previous value;
/// `direction` carries the sign. A flat month counts as `Up`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct MonthDelta {
    pub value: f64,
    pub percentage: f64,
    pub direction: Direction,
}

/// Change of `series` at `current` relative to the month before it in
/// `ordering`.
///
/// With no previous month, or a previous value of 0, the percentage is 100
/// when the current value is positive and 0 otherwise; never NaN or
/// infinite.
pub fn month_over_month(series: &MonthlySeries, ordering: &[String], current: &str) -> MonthDelta {
    let current_value = series.value(current);
    let previous = ordering
        .iter()
        .position(|m| m == current)
        .filter(|&idx| idx > 0)
        .map(|idx| series.value(&ordering[idx - 1]));

    match previous {
        Some(prev) if prev != 0.0 => {
            let value = current_value - prev;
            MonthDelta {
                value,
                percentage: (value / prev * 100.0).abs(),
                direction: if current_value >= prev {
                    Direction::Up
                } else {
                    Direction::Down
                },
            }
        }
        _ => MonthDelta {
            value: current_value,
            percentage: if current_value > 0.0 { 100.0 } else { 0.0 },
            direction: if current_value >= 0.0 {
                Direction::Up
            } else {
                Direction::Down
            },
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ordering(months: &[&str]) -> Vec<String> {
        months.iter().map(|m| m.to_string()).collect()
    }

    fn series(pairs: &[(&str, f64)]) -> MonthlySeries {
        pairs.iter().map(|(m, v)| (m.to_string(), *v)).collect()
    }

    #[test]
    fn rising_month_reports_up() {
        let s = series(&[("Jan-2024", 100.0), ("Feb-2024", 125.0)]);
        let d = month_over_month(&s, &ordering(&["Jan-2024", "Feb-2024"]), "Feb-2024");

        assert_eq!(d.value, 25.0);
        assert_eq!(d.percentage, 25.0);
        assert_eq!(d.direction, Direction::Up);
    }

    #[test]
    fn falling_month_reports_down_with_positive_magnitude() {
        let s = series(&[("Jan-2024", 200.0), ("Feb-2024", 150.0)]);
        let d = month_over_month(&s, &ordering(&["Jan-2024", "Feb-2024"]), "Feb-2024");

        assert_eq!(d.value, -50.0);
        assert_eq!(d.percentage, 25.0);
        assert_eq!(d.direction, Direction::Down);
    }

    #[test]
    fn tie_counts_as_up() {
        let s = series(&[("Jan-2024", 100.0), ("Feb-2024", 100.0)]);
        let d = month_over_month(&s, &ordering(&["Jan-2024", "Feb-2024"]), "Feb-2024");

        assert_eq!(d.value, 0.0);
        assert_eq!(d.percentage, 0.0);
        assert_eq!(d.direction, Direction::Up);
    }

    #[test]
    fn zero_previous_value_special_cases_divide_by_zero() {
        let s = series(&[("Jan-2024", 0.0), ("Feb-2024", 40.0)]);
        let d = month_over_month(&s, &ordering(&["Jan-2024", "Feb-2024"]), "Feb-2024");

        assert_eq!(d.percentage, 100.0);
        assert_eq!(d.direction, Direction::Up);
        assert!(d.percentage.is_finite());
    }

    #[test]
    fn first_month_has_no_previous() {
        let s = series(&[("Jan-2024", 40.0)]);
        let d = month_over_month(&s, &ordering(&["Jan-2024", "Feb-2024"]), "Jan-2024");

        assert_eq!(d.value, 40.0);
        assert_eq!(d.percentage, 100.0);
        assert_eq!(d.direction, Direction::Up);
    }

    #[test]
    fn zero_previous_and_zero_current_is_flat_zero() {
        let s = series(&[]);
        let d = month_over_month(&s, &ordering(&["Jan-2024", "Feb-2024"]), "Feb-2024");

        assert_eq!(d.value, 0.0);
        assert_eq!(d.percentage, 0.0);
        assert_eq!(d.direction, Direction::Up);
    }

    #[test]
    fn month_absent_from_ordering_treated_as_first() {
        let s = series(&[("Sep-2024", 12.0)]);
        let d = month_over_month(&s, &ordering(&["Jan-2024", "Feb-2024"]), "Sep-2024");

        assert_eq!(d.value, 12.0);
        assert_eq!(d.percentage, 100.0);
    }
}
