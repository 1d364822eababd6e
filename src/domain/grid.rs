// Weekly timetable grid: entries[] -> rows x weekday columns
use super::schedule::{non_blank, ScheduleEntry};
use super::time_of_day::{format_time_range, TimeOfDay};
use super::weekday::{Weekday, WEEKDAYS};

/// Placeholder painted into an empty cell or a missing label.
pub const EMPTY_PLACEHOLDER: &str = "—";

/// A bell-schedule slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimeSlot {
    pub start: &'static str,
    pub end: &'static str,
}

impl TimeSlot {
    pub fn label(&self) -> String {
        format!("{}–{}", self.start, self.end)
    }
}

/// Typical lesson times, indexed by row position.
pub const DEFAULT_TIME_SLOTS: &[TimeSlot] = &[
    TimeSlot { start: "08:30", end: "09:15" },
    TimeSlot { start: "09:25", end: "10:10" },
    TimeSlot { start: "10:20", end: "11:05" },
    TimeSlot { start: "11:15", end: "12:00" },
    TimeSlot { start: "12:10", end: "12:55" },
    TimeSlot { start: "13:05", end: "13:50" },
    TimeSlot { start: "14:00", end: "14:45" },
    TimeSlot { start: "14:55", end: "15:40" },
    TimeSlot { start: "15:50", end: "16:35" },
    TimeSlot { start: "16:45", end: "17:30" },
];

/// Where a row's time label comes from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RowLabels {
    /// First weekday (Monday first) with a lesson at this row; the bell
    /// table only when the whole row is empty.
    FromEntries,
    /// Always the bell table, by row position.
    BellSchedule,
}

/// Which counterpart an entry cell names: the class view shows the teacher,
/// the teacher view shows the class.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Perspective {
    Class,
    Teacher,
}

#[derive(Debug, Clone, PartialEq)]
pub struct GridOptions {
    pub min_rows: usize,
    pub time_slots: &'static [TimeSlot],
    pub row_labels: RowLabels,
    pub perspective: Perspective,
}

impl Default for GridOptions {
    fn default() -> Self {
        Self {
            min_rows: 0,
            time_slots: DEFAULT_TIME_SLOTS,
            row_labels: RowLabels::FromEntries,
            perspective: Perspective::Class,
        }
    }
}

impl GridOptions {
    pub fn class_view() -> Self {
        Self::default()
    }

    pub fn teacher_view() -> Self {
        Self {
            perspective: Perspective::Teacher,
            ..Self::default()
        }
    }

    /// Editable operator page: a full business day even before any lesson
    /// is entered, labelled from the bell table.
    pub fn operator_view() -> Self {
        Self {
            min_rows: 8,
            row_labels: RowLabels::BellSchedule,
            ..Self::default()
        }
    }

    pub fn with_min_rows(mut self, min_rows: usize) -> Self {
        self.min_rows = min_rows;
        self
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct EntryCell {
    pub subject_name: Option<String>,
    pub teacher_or_class_name: Option<String>,
    pub room: Option<String>,
    pub start: Option<TimeOfDay>,
    pub end: Option<TimeOfDay>,
}

impl EntryCell {
    fn from_entry(entry: &ScheduleEntry, perspective: Perspective) -> Self {
        let counterpart = match perspective {
            Perspective::Class => &entry.teacher_name,
            Perspective::Teacher => &entry.class_name,
        };
        Self {
            subject_name: non_blank(&entry.subject_name),
            teacher_or_class_name: non_blank(counterpart),
            room: non_blank(&entry.room),
            start: entry.start(),
            end: entry.end(),
        }
    }

    pub fn time_label(&self) -> String {
        format_time_range(self.start, self.end)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Cell {
    Entry(EntryCell),
    Empty,
}

impl Cell {
    pub fn is_empty(&self) -> bool {
        matches!(self, Cell::Empty)
    }

    pub fn entry(&self) -> Option<&EntryCell> {
        match self {
            Cell::Entry(e) => Some(e),
            Cell::Empty => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct GridRow {
    /// 1-based ordinal ("Nth lesson of the day").
    pub number: usize,
    pub time_label: String,
    pub cells: [Cell; 6],
}

#[derive(Debug, Clone, PartialEq)]
pub struct Matrix {
    pub columns: [Weekday; 6],
    pub rows: Vec<GridRow>,
}

impl Matrix {
    pub fn entry_count(&self) -> usize {
        self.rows
            .iter()
            .flat_map(|r| r.cells.iter())
            .filter(|c| !c.is_empty())
            .count()
    }

    /// True when there is nothing to show, either no rows or only placeholders.
    pub fn is_blank(&self) -> bool {
        self.entry_count() == 0
    }

    pub fn column(&self, day: Weekday) -> impl Iterator<Item = &Cell> {
        self.rows.iter().map(move |r| &r.cells[day.index()])
    }
}

/// Arranges schedule entries into a positional weekly grid.
///
/// Row `r` holds each weekday's `r`-th lesson by start time. Rows are not
/// aligned by clock time across weekdays.
#[derive(Debug, Clone, Default)]
pub struct GridBuilder {
    options: GridOptions,
}

impl GridBuilder {
    pub fn new(options: GridOptions) -> Self {
        Self { options }
    }

    pub fn build(&self, entries: &[ScheduleEntry]) -> Matrix {
        let buckets = Self::bucket_by_weekday(entries);

        let longest = buckets.iter().map(Vec::len).max().unwrap_or(0);
        let row_count = longest.max(self.options.min_rows);

        let rows = (0..row_count)
            .map(|r| GridRow {
                number: r + 1,
                time_label: self.row_label(&buckets, r),
                cells: std::array::from_fn(|d| match buckets[d].get(r) {
                    Some(entry) => {
                        Cell::Entry(EntryCell::from_entry(entry, self.options.perspective))
                    }
                    None => Cell::Empty,
                }),
            })
            .collect();

        Matrix {
            columns: WEEKDAYS,
            rows,
        }
    }

    fn bucket_by_weekday(entries: &[ScheduleEntry]) -> [Vec<&ScheduleEntry>; 6] {
        let mut buckets: [Vec<&ScheduleEntry>; 6] = Default::default();
        for entry in entries {
            if let Some(day) = entry.day() {
                buckets[day.index()].push(entry);
            }
        }
        // Stable: equal start times keep input order. Missing times sort first.
        for bucket in buckets.iter_mut() {
            bucket.sort_by_key(|e| e.start());
        }
        buckets
    }

    fn row_label(&self, buckets: &[Vec<&ScheduleEntry>; 6], r: usize) -> String {
        let bell = || {
            self.options
                .time_slots
                .get(r)
                .map(TimeSlot::label)
                .unwrap_or_default()
        };

        match self.options.row_labels {
            RowLabels::BellSchedule => bell(),
            RowLabels::FromEntries => buckets
                .iter()
                .find_map(|bucket| bucket.get(r))
                .map(|e| format_time_range(e.start(), e.end()))
                .unwrap_or_else(bell),
        }
    }
}
