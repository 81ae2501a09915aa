//! Dashboard calendar: month cursor and single-day selection
//!
//! The cursor has no notion of a year; stepping past December wraps to January.

use chrono::Datelike;

pub const MONTH_NAMES: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

/// Day cells rendered in the calendar grid
pub const DAY_CELLS: std::ops::RangeInclusive<u32> = 1..=31;

/// Zero-based index of the current local month
pub fn current_month() -> u32 {
    chrono::Local::now().month0()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Calendar {
    month: u32,
    selected_day: Option<u32>,
}

impl Calendar {
    /// Start at a zero-based month index (taken modulo 12)
    pub fn starting_at(month: u32) -> Self {
        Calendar {
            month: month % 12,
            selected_day: None,
        }
    }

    pub fn month(&self) -> u32 {
        self.month
    }

    pub fn month_name(&self) -> &'static str {
        MONTH_NAMES[self.month as usize]
    }

    pub fn previous(&mut self) -> u32 {
        self.month = (self.month + 11) % 12;
        self.month
    }

    pub fn next(&mut self) -> u32 {
        self.month = (self.month + 1) % 12;
        self.month
    }

    pub fn selected_day(&self) -> Option<u32> {
        self.selected_day
    }

    /// Make `day` the only selected day. Days outside the grid are ignored.
    pub fn select_day(&mut self, day: u32) -> bool {
        if !DAY_CELLS.contains(&day) {
            return false;
        }
        self.selected_day = Some(day);
        true
    }
}

impl Default for Calendar {
    fn default() -> Self {
        Calendar::starting_at(current_month())
    }
}
