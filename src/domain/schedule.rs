// Schedule entry domain model, as returned by the school backend
use super::time_of_day::TimeOfDay;
use super::weekday::Weekday;
use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// One scheduled lesson occurrence.
///
/// Decoding is lenient: a malformed field never rejects the whole list.
/// A weekday that is not an integer (or numeric string) becomes 0 and the
/// grid builder drops it; non-string labels and times become absent, except
/// numbers, which are kept as text (rooms are often numeric).
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct ScheduleEntry {
    #[serde(default, deserialize_with = "lenient_id")]
    pub id: Option<i64>,
    #[serde(default, deserialize_with = "lenient_weekday")]
    pub weekday: i64,
    #[serde(default, deserialize_with = "lenient_text")]
    pub start_time: Option<String>,
    #[serde(default, deserialize_with = "lenient_text")]
    pub end_time: Option<String>,
    #[serde(default, deserialize_with = "lenient_text")]
    pub subject_name: Option<String>,
    #[serde(default, deserialize_with = "lenient_text")]
    pub teacher_name: Option<String>,
    #[serde(default, deserialize_with = "lenient_text")]
    pub room: Option<String>,
    #[serde(default, deserialize_with = "lenient_text")]
    pub class_name: Option<String>,
}

impl ScheduleEntry {
    pub fn new(weekday: i64, start_time: &str, end_time: &str) -> Self {
        Self {
            weekday,
            start_time: Some(start_time.to_string()),
            end_time: Some(end_time.to_string()),
            ..Self::default()
        }
    }

    pub fn with_subject(mut self, subject: &str) -> Self {
        self.subject_name = Some(subject.to_string());
        self
    }

    pub fn with_teacher(mut self, teacher: &str) -> Self {
        self.teacher_name = Some(teacher.to_string());
        self
    }

    pub fn with_class(mut self, class_name: &str) -> Self {
        self.class_name = Some(class_name.to_string());
        self
    }

    pub fn with_room(mut self, room: &str) -> Self {
        self.room = Some(room.to_string());
        self
    }

    pub fn day(&self) -> Option<Weekday> {
        Weekday::from_number(self.weekday)
    }

    pub fn start(&self) -> Option<TimeOfDay> {
        TimeOfDay::parse_lenient(self.start_time.as_deref())
    }

    pub fn end(&self) -> Option<TimeOfDay> {
        TimeOfDay::parse_lenient(self.end_time.as_deref())
    }
}

/// Treat blank labels the same as missing ones.
pub(crate) fn non_blank(s: &Option<String>) -> Option<String> {
    s.as_deref()
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
}

fn lenient_weekday<'de, D>(deserializer: D) -> Result<i64, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::Number(n) => n.as_i64().unwrap_or(0),
        Value::String(s) => s.trim().parse().unwrap_or(0),
        _ => 0,
    })
}

fn lenient_id<'de, D>(deserializer: D) -> Result<Option<i64>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::Number(n) => n.as_i64(),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    })
}

fn lenient_text<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::String(s) => Some(s),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    })
}
