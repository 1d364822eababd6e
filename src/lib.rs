//! Weekly school timetables: pulls lesson entries from the school REST API
//! and serves them as positional weekday grids.
pub mod application;
pub mod domain;
pub mod infrastructure;
pub mod presentation;
