//! Query engine: column filters and single-column sort over the store.
//!
//! Criteria are plain values ([`QueryCriteria`]); [`QueryEngine::view`]
//! projects a record slice through them without copying records.

mod collate;
mod page;

pub use collate::NameCollator;
pub use page::{paginate, Page};

use std::cmp::Ordering;
use std::collections::BTreeMap;
use std::fmt;

use crate::record::Record;

/// Table columns that can be filtered and sorted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Column {
    Name,
    Age,
}

impl Column {
    pub const ALL: [Column; 2] = [Column::Name, Column::Age];

    pub fn title(self) -> &'static str {
        match self {
            Column::Name => "Name",
            Column::Age => "Age",
        }
    }

    /// String form of a record's value in this column.
    pub fn text(self, record: &Record) -> String {
        match self {
            Column::Name => record.name().to_string(),
            Column::Age => record.age().to_string(),
        }
    }

    /// Whether a typed character is allowed in this column's filter text.
    ///
    /// Age filters are numeric input and only take digits.
    pub fn accepts(self, ch: char) -> bool {
        match self {
            Column::Name => !ch.is_control(),
            Column::Age => ch.is_ascii_digit(),
        }
    }

    /// Next column, wrapping around.
    pub fn next(self) -> Self {
        match self {
            Column::Name => Column::Age,
            Column::Age => Column::Name,
        }
    }

    fn compare(self, a: &Record, b: &Record, collator: &NameCollator) -> Ordering {
        match self {
            Column::Name => collator.compare(a.name(), b.name()),
            Column::Age => a.age().cmp(&b.age()),
        }
    }
}

impl fmt::Display for Column {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.title())
    }
}

/// Requested sort direction. `None` means unsorted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortDirection {
    Ascending,
    Descending,
    #[default]
    None,
}

/// The active sort. Its direction is never [`SortDirection::None`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SortOrder {
    pub column: Column,
    pub direction: SortDirection,
}

/// Transient filter and sort criteria.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct QueryCriteria {
    filters: BTreeMap<Column, String>,
    sort: Option<SortOrder>,
}

impl QueryCriteria {
    /// Active filter text for a column.
    pub fn filter(&self, column: Column) -> Option<&str> {
        self.filters.get(&column).map(String::as_str)
    }

    pub fn sort(&self) -> Option<SortOrder> {
        self.sort
    }

    /// Sort direction shown for a column header.
    pub fn direction_for(&self, column: Column) -> SortDirection {
        match self.sort {
            Some(order) if order.column == column => order.direction,
            _ => SortDirection::None,
        }
    }

    pub fn is_filtered(&self) -> bool {
        !self.filters.is_empty()
    }

    fn matches(&self, record: &Record) -> bool {
        self.filters.iter().all(|(column, needle)| {
            column
                .text(record)
                .to_lowercase()
                .contains(&needle.to_lowercase())
        })
    }
}

/// Applies criteria to produce the view shown by the shell.
#[derive(Debug, Clone, Default)]
pub struct QueryEngine {
    criteria: QueryCriteria,
    collator: NameCollator,
}

impl QueryEngine {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_criteria(criteria: QueryCriteria) -> Self {
        Self {
            criteria,
            collator: NameCollator::root(),
        }
    }

    pub fn criteria(&self) -> &QueryCriteria {
        &self.criteria
    }

    /// Set the filter text for a column. Empty text removes the filter.
    pub fn apply_filter(&mut self, column: Column, text: impl Into<String>) {
        let text = text.into();
        if text.is_empty() {
            self.clear_filter(column);
            return;
        }
        tracing::debug!(column = %column, filter = %text, "Filter applied");
        self.criteria.filters.insert(column, text);
    }

    pub fn clear_filter(&mut self, column: Column) {
        if self.criteria.filters.remove(&column).is_some() {
            tracing::debug!(column = %column, "Filter cleared");
        }
    }

    /// Replace the active sort. `SortDirection::None` clears it.
    pub fn apply_sort(&mut self, column: Column, direction: SortDirection) {
        self.criteria.sort = match direction {
            SortDirection::None => None,
            direction => Some(SortOrder { column, direction }),
        };
        tracing::debug!(column = %column, direction = ?direction, "Sort applied");
    }

    /// Header-click cycle: none, ascending, descending, none.
    ///
    /// Clicking a column other than the sorted one starts at ascending.
    pub fn cycle_sort(&mut self, column: Column) -> SortDirection {
        let next = match self.criteria.direction_for(column) {
            SortDirection::None => SortDirection::Ascending,
            SortDirection::Ascending => SortDirection::Descending,
            SortDirection::Descending => SortDirection::None,
        };
        self.apply_sort(column, next);
        next
    }

    /// Drop all filters and the sort.
    pub fn reset(&mut self) {
        self.criteria = QueryCriteria::default();
    }

    /// Filter (AND across columns), then stable-sort. Names sort by the
    /// root-locale collation.
    pub fn view<'a>(&self, records: &'a [Record]) -> Vec<&'a Record> {
        let mut rows: Vec<&Record> = records
            .iter()
            .filter(|record| self.criteria.matches(record))
            .collect();

        if let Some(order) = self.criteria.sort {
            rows.sort_by(|a, b| {
                let ordering = order.column.compare(a, b, &self.collator);
                match order.direction {
                    SortDirection::Descending => ordering.reverse(),
                    _ => ordering,
                }
            });
        }

        rows
    }
}
