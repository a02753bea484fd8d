use chrono::NaiveDate;

use crate::model::{parse_date, Expense};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SortOrder {
    Ascending,
    Descending,
}

/// Inclusive date bounds; a missing bound is open on that side.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct DateRange {
    pub start: Option<NaiveDate>,
    pub end: Option<NaiveDate>,
}

impl DateRange {
    /// Builds a range from the filter inputs. Text that is not a date leaves
    /// that side unbounded.
    pub fn parse(start: &str, end: &str) -> Self {
        Self {
            start: parse_date(start),
            end: parse_date(end),
        }
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        self.start.map_or(true, |start| date >= start) && self.end.map_or(true, |end| date <= end)
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ListOptions {
    pub filter: Option<DateRange>,
    pub sort: Option<SortOrder>,
}

pub fn apply<'a>(expenses: &'a [Expense], options: &ListOptions) -> Vec<&'a Expense> {
    let mut view: Vec<&Expense> = match options.filter {
        Some(range) => expenses.iter().filter(|e| range.contains(e.date)).collect(),
        None => expenses.iter().collect(),
    };

    match options.sort {
        Some(SortOrder::Ascending) => view.sort_by(|a, b| a.date.cmp(&b.date)),
        Some(SortOrder::Descending) => view.sort_by(|a, b| b.date.cmp(&a.date)),
        None => {}
    }

    view
}
