use std::collections::HashMap;

use chrono::{Days, NaiveDate};

use crate::remote::HeatmapEntry;

pub const HEATMAP_WEEKS: usize = 12;
pub const DAYS_PER_WEEK: usize = 7;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HeatLevel {
    None,
    Low,
    Medium,
    High,
}

impl HeatLevel {
    pub fn for_count(count: u32) -> Self {
        match count {
            0 => HeatLevel::None,
            1 => HeatLevel::Low,
            2 => HeatLevel::Medium,
            _ => HeatLevel::High,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HeatmapCell {
    pub date: NaiveDate,
    pub count: u32,
    pub level: HeatLevel,
}

/// Activity grid for the twelve weeks before `today`, one row per week.
///
/// Cell `(week, day)` is `today - (HEATMAP_WEEKS - week) * 7 + day` days.
pub fn heatmap_grid(today: NaiveDate, entries: &[HeatmapEntry]) -> Vec<Vec<HeatmapCell>> {
    let mut counts: HashMap<NaiveDate, u32> = HashMap::with_capacity(entries.len());
    for entry in entries {
        // First entry for a date wins.
        counts.entry(entry.date).or_insert(entry.count);
    }

    (0..HEATMAP_WEEKS)
        .map(|week| {
            (0..DAYS_PER_WEEK)
                .map(|day| {
                    let back = ((HEATMAP_WEEKS - week) * DAYS_PER_WEEK - day) as u64;
                    let date = today
                        .checked_sub_days(Days::new(back))
                        .unwrap_or(NaiveDate::MIN);
                    let count = counts.get(&date).copied().unwrap_or(0);
                    HeatmapCell {
                        date,
                        count,
                        level: HeatLevel::for_count(count),
                    }
                })
                .collect()
        })
        .collect()
}
