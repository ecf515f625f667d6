// src/data_analysis/periods.rs

/// Ordinal labels for the observation periods: "Week 1" through "Week N".
pub fn week_labels(period_count: usize) -> Vec<String> {
    (1..=period_count).map(|week| format!("Week {week}")).collect()
}
