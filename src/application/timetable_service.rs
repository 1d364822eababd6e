// Timetable service - Use cases behind the class, teacher and operator pages
use crate::application::schedule_provider::{ProviderError, ScheduleProvider, TeacherRef};
use crate::domain::grid::{GridBuilder, GridOptions, Matrix, EMPTY_PLACEHOLDER};
use crate::domain::school::ClassInfo;
use crate::domain::today::{lessons_for_day, TodayLessons};
use chrono::NaiveDateTime;
use std::sync::Arc;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("Invalid class id: {0}")]
    InvalidClass(i64),

    #[error(transparent)]
    Provider(#[from] ProviderError),
}

/// A built grid plus the header text the page prints above it.
#[derive(Debug, Clone, PartialEq)]
pub struct Timetable {
    pub title: String,
    pub meta: Option<String>,
    pub matrix: Matrix,
}

/// Grid configuration for each of the three timetable pages.
#[derive(Debug, Clone, PartialEq)]
pub struct ViewGrids {
    pub class: GridOptions,
    pub teacher: GridOptions,
    pub operator: GridOptions,
}

impl Default for ViewGrids {
    fn default() -> Self {
        Self {
            class: GridOptions::class_view(),
            teacher: GridOptions::teacher_view(),
            operator: GridOptions::operator_view(),
        }
    }
}

impl ViewGrids {
    pub fn with_min_rows(public_min_rows: usize, operator_min_rows: usize) -> Self {
        Self {
            class: GridOptions::class_view().with_min_rows(public_min_rows),
            teacher: GridOptions::teacher_view().with_min_rows(public_min_rows),
            operator: GridOptions::operator_view().with_min_rows(operator_min_rows),
        }
    }
}

#[derive(Clone)]
pub struct TimetableService {
    provider: Arc<dyn ScheduleProvider>,
    grids: ViewGrids,
}

impl TimetableService {
    pub fn new(provider: Arc<dyn ScheduleProvider>, grids: ViewGrids) -> Self {
        Self { provider, grids }
    }

    pub async fn class_timetable(
        &self,
        class_id: i64,
        token: Option<&str>,
    ) -> Result<Timetable, ServiceError> {
        Self::check_class_id(class_id)?;

        let (class, entries) = futures::try_join!(
            self.provider.get_class(class_id, token),
            self.provider.fetch_schedule_for_class(class_id, token)
        )?;
        tracing::debug!(
            "Building class timetable for {} from {} entries",
            class_id,
            entries.len()
        );

        let matrix = GridBuilder::new(self.grids.class.clone()).build(&entries);
        if matrix.is_blank() {
            tracing::debug!("No lessons scheduled for class {}", class_id);
        }
        Ok(Timetable {
            title: format!("Sinf: {}", class.name),
            meta: Some(Self::class_meta(&class)),
            matrix,
        })
    }

    pub async fn teacher_timetable(
        &self,
        teacher: TeacherRef,
        token: Option<&str>,
    ) -> Result<Timetable, ServiceError> {
        let (name, entries) = match teacher {
            TeacherRef::Id(id) => {
                let (info, entries) = futures::try_join!(
                    self.provider.get_teacher(id, token),
                    self.provider.fetch_schedule_for_teacher(teacher, token)
                )?;
                (info.user_full_name.unwrap_or_default(), entries)
            }
            TeacherRef::Me => {
                let (profile, entries) = futures::try_join!(
                    self.provider.get_profile(token),
                    self.provider.fetch_schedule_for_teacher(teacher, token)
                )?;
                (profile.display_name(), entries)
            }
        };
        tracing::debug!(
            "Building teacher timetable for {} from {} entries",
            teacher,
            entries.len()
        );

        let matrix = GridBuilder::new(self.grids.teacher.clone()).build(&entries);
        Ok(Timetable {
            title: format!("O‘qituvchi: {}", or_placeholder(Some(name.as_str()))),
            meta: None,
            matrix,
        })
    }

    /// Editable operator grid. Always at least a full business day of rows.
    pub async fn operator_timetable(
        &self,
        class_id: i64,
        token: Option<&str>,
    ) -> Result<Timetable, ServiceError> {
        Self::check_class_id(class_id)?;

        let (classes, entries) = futures::try_join!(
            self.provider.list_classes(token),
            self.provider.fetch_schedule_for_class(class_id, token)
        )?;
        let name = classes
            .iter()
            .find(|c| c.id == class_id)
            .map(|c| c.name.as_str());

        let matrix = GridBuilder::new(self.grids.operator.clone()).build(&entries);
        Ok(Timetable {
            title: "Dars jadvali".to_string(),
            meta: Some(format!("Sinf: {}", or_placeholder(name))),
            matrix,
        })
    }

    /// Classes for the operator dropdown, by name.
    pub async fn list_classes(&self, token: Option<&str>) -> Result<Vec<ClassInfo>, ServiceError> {
        let mut classes = self.provider.list_classes(token).await?;
        classes.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(classes)
    }

    pub async fn today_lessons(
        &self,
        teacher: TeacherRef,
        now: NaiveDateTime,
        token: Option<&str>,
    ) -> Result<TodayLessons, ServiceError> {
        let entries = self
            .provider
            .fetch_schedule_for_teacher(teacher, token)
            .await?;
        Ok(lessons_for_day(&entries, now))
    }

    fn check_class_id(class_id: i64) -> Result<(), ServiceError> {
        if class_id <= 0 {
            return Err(ServiceError::InvalidClass(class_id));
        }
        Ok(())
    }

    fn class_meta(class: &ClassInfo) -> String {
        let count = class
            .student_count
            .map(|c| c.to_string())
            .unwrap_or_else(|| EMPTY_PLACEHOLDER.to_string());
        format!(
            "O‘quvchilar: {} • Sinf rahbari: {}",
            count,
            or_placeholder(class.class_teacher_name.as_deref())
        )
    }
}

fn or_placeholder(s: Option<&str>) -> &str {
    s.map(str::trim)
        .filter(|s| !s.is_empty())
        .unwrap_or(EMPTY_PLACEHOLDER)
}
