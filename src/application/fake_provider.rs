// In-memory schedule provider for tests
use crate::application::schedule_provider::{
    ProviderError, ProviderResult, ScheduleProvider, TeacherRef,
};
use crate::domain::schedule::ScheduleEntry;
use crate::domain::school::{ClassInfo, Profile, TeacherInfo};
use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Mutex;

#[derive(Default)]
pub struct FakeProvider {
    pub classes: Vec<ClassInfo>,
    pub teachers: Vec<TeacherInfo>,
    pub profile: Option<Profile>,
    pub class_entries: HashMap<i64, Vec<ScheduleEntry>>,
    pub teacher_entries: HashMap<String, Vec<ScheduleEntry>>,
    /// Every token seen, in call order.
    pub tokens: Mutex<Vec<Option<String>>>,
    pub fail_with_status: Option<u16>,
}

impl FakeProvider {
    pub fn with_class(mut self, id: i64, name: &str, entries: Vec<ScheduleEntry>) -> Self {
        self.classes.push(ClassInfo {
            id,
            name: name.to_string(),
            student_count: Some(28),
            class_teacher_name: Some("Yusupova M.".to_string()),
        });
        self.class_entries.insert(id, entries);
        self
    }

    pub fn with_teacher(mut self, id: i64, name: &str, entries: Vec<ScheduleEntry>) -> Self {
        self.teachers.push(TeacherInfo {
            id,
            user_full_name: Some(name.to_string()),
        });
        self.teacher_entries.insert(id.to_string(), entries);
        self
    }

    pub fn with_me(mut self, profile: Profile, entries: Vec<ScheduleEntry>) -> Self {
        self.profile = Some(profile);
        self.teacher_entries.insert("me".to_string(), entries);
        self
    }

    pub fn seen_tokens(&self) -> Vec<Option<String>> {
        self.tokens.lock().map(|t| t.clone()).unwrap_or_default()
    }

    fn record(&self, token: Option<&str>) -> ProviderResult<()> {
        if let Ok(mut tokens) = self.tokens.lock() {
            tokens.push(token.map(str::to_string));
        }
        match self.fail_with_status {
            Some(status) => Err(ProviderError::Status {
                status,
                body: "backend down".to_string(),
            }),
            None => Ok(()),
        }
    }

    fn not_found(path: String) -> ProviderError {
        ProviderError::NotFound { path }
    }
}

#[async_trait]
impl ScheduleProvider for FakeProvider {
    async fn list_classes(&self, token: Option<&str>) -> ProviderResult<Vec<ClassInfo>> {
        self.record(token)?;
        Ok(self.classes.clone())
    }

    async fn get_class(&self, class_id: i64, token: Option<&str>) -> ProviderResult<ClassInfo> {
        self.record(token)?;
        self.classes
            .iter()
            .find(|c| c.id == class_id)
            .cloned()
            .ok_or_else(|| Self::not_found(format!("/classes/{}/", class_id)))
    }

    async fn get_teacher(
        &self,
        teacher_id: i64,
        token: Option<&str>,
    ) -> ProviderResult<TeacherInfo> {
        self.record(token)?;
        self.teachers
            .iter()
            .find(|t| t.id == teacher_id)
            .cloned()
            .ok_or_else(|| Self::not_found(format!("/teachers/{}/", teacher_id)))
    }

    async fn get_profile(&self, token: Option<&str>) -> ProviderResult<Profile> {
        self.record(token)?;
        self.profile
            .clone()
            .ok_or_else(|| Self::not_found("/auth/me/".to_string()))
    }

    async fn fetch_schedule_for_class(
        &self,
        class_id: i64,
        token: Option<&str>,
    ) -> ProviderResult<Vec<ScheduleEntry>> {
        self.record(token)?;
        Ok(self
            .class_entries
            .get(&class_id)
            .cloned()
            .unwrap_or_default())
    }

    async fn fetch_schedule_for_teacher(
        &self,
        teacher: TeacherRef,
        token: Option<&str>,
    ) -> ProviderResult<Vec<ScheduleEntry>> {
        self.record(token)?;
        Ok(self
            .teacher_entries
            .get(&teacher.to_string())
            .cloned()
            .unwrap_or_default())
    }
}
