// Today's lessons for a teacher, with live status
use super::schedule::{non_blank, ScheduleEntry};
use super::time_of_day::{format_time_range, TimeOfDay};
use super::weekday::Weekday;
use chrono::{Datelike, NaiveDateTime};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LessonStatus {
    InProgress,
    Upcoming,
    Finished,
    /// Start or end time missing.
    Unknown,
}

#[derive(Debug, Clone, PartialEq)]
pub struct TodayLesson {
    pub time_label: String,
    pub subject_name: Option<String>,
    pub class_name: Option<String>,
    pub room: Option<String>,
    pub status: LessonStatus,
}

#[derive(Debug, Clone, PartialEq)]
pub struct TodayLessons {
    /// `None` on Sunday.
    pub weekday: Option<Weekday>,
    pub lessons: Vec<TodayLesson>,
}

impl TodayLessons {
    pub fn weekday_label(&self) -> &'static str {
        self.weekday.map(Weekday::label).unwrap_or("Yakshanba")
    }
}

pub fn lesson_status(
    start: Option<TimeOfDay>,
    end: Option<TimeOfDay>,
    now: TimeOfDay,
) -> LessonStatus {
    match (start, end) {
        (Some(s), Some(e)) if s <= now && now <= e => LessonStatus::InProgress,
        (Some(s), Some(_)) if now < s => LessonStatus::Upcoming,
        (Some(_), Some(_)) => LessonStatus::Finished,
        _ => LessonStatus::Unknown,
    }
}

/// Lessons falling on `now`'s weekday, earliest first.
pub fn lessons_for_day(entries: &[ScheduleEntry], now: NaiveDateTime) -> TodayLessons {
    let weekday = Weekday::from_chrono(now.weekday());
    let Some(day) = weekday else {
        return TodayLessons {
            weekday,
            lessons: Vec::new(),
        };
    };

    let clock = TimeOfDay::from(now.time());

    let mut todays: Vec<&ScheduleEntry> = entries.iter().filter(|e| e.day() == Some(day)).collect();
    todays.sort_by_key(|e| e.start());

    let lessons = todays
        .into_iter()
        .map(|e| {
            let (start, end) = (e.start(), e.end());
            TodayLesson {
                time_label: format_time_range(start, end),
                subject_name: non_blank(&e.subject_name),
                class_name: non_blank(&e.class_name),
                room: non_blank(&e.room),
                status: lesson_status(start, end, clock),
            }
        })
        .collect();

    TodayLessons { weekday, lessons }
}
