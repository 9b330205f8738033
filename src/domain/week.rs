use chrono::Weekday;

/// Length of the simulated workweek.
pub const DAYS_PER_WEEK: usize = 5;

/// The five weekdays an employee can be scheduled for, Monday first.
pub const WORKWEEK: [Weekday; DAYS_PER_WEEK] = [
    Weekday::Mon,
    Weekday::Tue,
    Weekday::Wed,
    Weekday::Thu,
    Weekday::Fri,
];

/// Index of a workweek day in the range 0..5. Only valid for Mon-Fri.
pub fn day_index(day: Weekday) -> usize {
    day.num_days_from_monday() as usize
}
