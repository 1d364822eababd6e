// Mapper to convert domain models to JSON wire types
use crate::application::timetable_service::Timetable;
use crate::domain::grid::{Cell, EntryCell, GridRow, EMPTY_PLACEHOLDER};
use crate::domain::school::ClassInfo;
use crate::domain::today::{LessonStatus, TodayLesson, TodayLessons};
use crate::domain::weekday::Weekday;
use serde::Serialize;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TimetableDto {
    pub title: String,
    pub meta: Option<String>,
    pub columns: Vec<ColumnDto>,
    pub rows: Vec<RowDto>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ColumnDto {
    pub weekday: i64,
    pub label: &'static str,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RowDto {
    pub number: usize,
    pub time_label: String,
    pub cells: Vec<CellDto>,
}

#[derive(Debug, Serialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum CellDto {
    #[serde(rename_all = "camelCase")]
    Entry {
        subject_name: Option<String>,
        teacher_or_class_name: Option<String>,
        room: Option<String>,
        start: Option<String>,
        end: Option<String>,
        time_label: String,
    },
    Empty {
        placeholder: &'static str,
    },
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ClassDto {
    pub id: i64,
    pub name: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TodayLessonsDto {
    pub weekday: Option<i64>,
    pub weekday_label: &'static str,
    pub lessons: Vec<TodayLessonDto>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TodayLessonDto {
    pub time_label: String,
    pub subject_name: Option<String>,
    pub class_name: Option<String>,
    pub room: Option<String>,
    pub status: &'static str,
}

pub fn timetable_to_dto(timetable: Timetable) -> TimetableDto {
    let columns = timetable
        .matrix
        .columns
        .iter()
        .map(|d| column_to_dto(*d))
        .collect();

    let rows = timetable.matrix.rows.into_iter().map(row_to_dto).collect();

    TimetableDto {
        title: timetable.title,
        meta: timetable.meta,
        columns,
        rows,
    }
}

fn column_to_dto(day: Weekday) -> ColumnDto {
    ColumnDto {
        weekday: day.number(),
        label: day.label(),
    }
}

fn row_to_dto(row: GridRow) -> RowDto {
    RowDto {
        number: row.number,
        time_label: row.time_label,
        cells: row.cells.into_iter().map(cell_to_dto).collect(),
    }
}

fn cell_to_dto(cell: Cell) -> CellDto {
    match cell {
        Cell::Entry(entry) => entry_to_dto(entry),
        Cell::Empty => CellDto::Empty {
            placeholder: EMPTY_PLACEHOLDER,
        },
    }
}

fn entry_to_dto(entry: EntryCell) -> CellDto {
    let time_label = entry.time_label();
    CellDto::Entry {
        subject_name: entry.subject_name,
        teacher_or_class_name: entry.teacher_or_class_name,
        room: entry.room,
        start: entry.start.map(|t| t.to_string()),
        end: entry.end.map(|t| t.to_string()),
        time_label,
    }
}

pub fn classes_to_dto(classes: Vec<ClassInfo>) -> Vec<ClassDto> {
    classes
        .into_iter()
        .map(|c| ClassDto {
            id: c.id,
            name: c.name,
        })
        .collect()
}

pub fn today_to_dto(today: TodayLessons) -> TodayLessonsDto {
    TodayLessonsDto {
        weekday: today.weekday.map(Weekday::number),
        weekday_label: today.weekday_label(),
        lessons: today.lessons.into_iter().map(lesson_to_dto).collect(),
    }
}

fn lesson_to_dto(lesson: TodayLesson) -> TodayLessonDto {
    let status = match lesson.status {
        LessonStatus::InProgress => "inProgress",
        LessonStatus::Upcoming => "upcoming",
        LessonStatus::Finished => "finished",
        LessonStatus::Unknown => "unknown",
    };
    TodayLessonDto {
        time_label: lesson.time_label,
        subject_name: lesson.subject_name,
        class_name: lesson.class_name,
        room: lesson.room,
        status,
    }
}
