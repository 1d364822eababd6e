// Header records shown above a timetable
use serde::Deserialize;

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ClassInfo {
    pub id: i64,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub student_count: Option<i64>,
    #[serde(default)]
    pub class_teacher_name: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct TeacherInfo {
    pub id: i64,
    #[serde(default)]
    pub user_full_name: Option<String>,
}

/// The caller's own account, used by the teacher "me" view.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct Profile {
    #[serde(default)]
    pub first_name: Option<String>,
    #[serde(default)]
    pub last_name: Option<String>,
}

impl Profile {
    /// "Last First", trimmed; empty when both are missing.
    pub fn display_name(&self) -> String {
        let last = self.last_name.as_deref().unwrap_or("").trim();
        let first = self.first_name.as_deref().unwrap_or("").trim();
        format!("{} {}", last, first).trim().to_string()
    }
}
