use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// A monthly meter series: month label (e.g. "Jan-2024") to reading.
///
/// Month labels are shared across series so that bulk and individual readings
/// can be joined by key. Lookup never fails: a month with no reading counts
/// as 0, which is what every downstream aggregate expects.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MonthlySeries(BTreeMap<String, f64>);

impl MonthlySeries {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, month: impl Into<String>, value: f64) {
        self.0.insert(month.into(), value);
    }

    /// Reading for `month`, defaulting to 0.0 when the month is absent.
    pub fn value(&self, month: &str) -> f64 {
        self.0.get(month).copied().unwrap_or(0.0)
    }

    pub fn get(&self, month: &str) -> Option<f64> {
        self.0.get(month).copied()
    }

    pub fn contains(&self, month: &str) -> bool {
        self.0.contains_key(month)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, f64)> {
        self.0.iter().map(|(k, v)| (k.as_str(), *v))
    }
}

impl FromIterator<(String, f64)> for MonthlySeries {
    fn from_iter<T: IntoIterator<Item = (String, f64)>>(iter: T) -> Self {
        Self(iter.into_iter().collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_month_defaults_to_zero() {
        let mut s = MonthlySeries::new();
        s.insert("Jan-2024", 120.5);

        assert_eq!(s.value("Jan-2024"), 120.5);
        assert_eq!(s.value("Feb-2024"), 0.0);
        assert_eq!(s.get("Feb-2024"), None);
    }

    #[test]
    fn insert_overwrites_existing_reading() {
        let mut s = MonthlySeries::new();
        s.insert("Jan-2024", 100.0);
        s.insert("Jan-2024", 110.0);

        assert_eq!(s.value("Jan-2024"), 110.0);
        assert_eq!(s.len(), 1);
    }
}
