// Domain layer - Timetable models and the weekly grid builder
pub mod grid;
pub mod schedule;
pub mod school;
pub mod time_of_day;
pub mod today;
pub mod weekday;
