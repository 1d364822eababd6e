// Application layer - Use cases and the schedule provider seam
#[cfg(test)]
pub mod fake_provider;
pub mod schedule_provider;
pub mod timetable_service;
