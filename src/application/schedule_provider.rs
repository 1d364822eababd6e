// Provider trait for schedule data access
use crate::domain::school::{ClassInfo, Profile, TeacherInfo};
use crate::domain::schedule::ScheduleEntry;
use async_trait::async_trait;
use std::fmt;
use thiserror::Error;

/// Whose timetable to load: a teacher by id, or the caller's own.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TeacherRef {
    Id(i64),
    Me,
}

impl TeacherRef {
    /// Parses a path segment: `me` or a positive id.
    pub fn parse(segment: &str) -> Option<Self> {
        match segment.trim() {
            "me" => Some(Self::Me),
            s => s.parse::<i64>().ok().filter(|id| *id > 0).map(Self::Id),
        }
    }
}

impl fmt::Display for TeacherRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Id(id) => write!(f, "{}", id),
            Self::Me => write!(f, "me"),
        }
    }
}

#[derive(Debug, Error)]
pub enum ProviderError {
    #[error("Backend request failed: {message}")]
    Network { message: String },

    #[error("Backend resource not found: {path}")]
    NotFound { path: String },

    #[error("Backend returned status {status}: {body}")]
    Status { status: u16, body: String },

    #[error("Failed to decode backend response: {message}")]
    Decode { message: String },
}

impl From<reqwest::Error> for ProviderError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            ProviderError::Decode {
                message: err.to_string(),
            }
        } else {
            ProviderError::Network {
                message: err.to_string(),
            }
        }
    }
}

pub type ProviderResult<T> = Result<T, ProviderError>;

/// Source of schedule entries and timetable header data.
///
/// Every call takes the caller's bearer token, forwarded as-is. Entries are
/// returned unsorted and ungrouped.
#[async_trait]
pub trait ScheduleProvider: Send + Sync {
    /// List all classes
    async fn list_classes(&self, token: Option<&str>) -> ProviderResult<Vec<ClassInfo>>;

    async fn get_class(&self, class_id: i64, token: Option<&str>) -> ProviderResult<ClassInfo>;

    async fn get_teacher(&self, teacher_id: i64, token: Option<&str>)
    -> ProviderResult<TeacherInfo>;

    /// The authenticated caller's own profile
    async fn get_profile(&self, token: Option<&str>) -> ProviderResult<Profile>;

    async fn fetch_schedule_for_class(
        &self,
        class_id: i64,
        token: Option<&str>,
    ) -> ProviderResult<Vec<ScheduleEntry>>;

    async fn fetch_schedule_for_teacher(
        &self,
        teacher: TeacherRef,
        token: Option<&str>,
    ) -> ProviderResult<Vec<ScheduleEntry>>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_teacher_ref_parse() {
        assert_eq!(TeacherRef::parse("me"), Some(TeacherRef::Me));
        assert_eq!(TeacherRef::parse("42"), Some(TeacherRef::Id(42)));
        assert_eq!(TeacherRef::parse("0"), None);
        assert_eq!(TeacherRef::parse("abc"), None);
        assert_eq!(TeacherRef::Id(7).to_string(), "7");
        assert_eq!(TeacherRef::Me.to_string(), "me");
    }
}
