//! Month grid and range selection for the leave date picker.

use chrono::{Datelike, Duration, NaiveDate};

/// Every visible cell for the month containing `anchor`: from the Sunday on
/// or before the 1st through the Saturday on or after the last day. Always
/// a multiple of seven cells, between 28 and 42.
pub fn month_grid(anchor: NaiveDate) -> Vec<NaiveDate> {
    let first = anchor - Duration::days(i64::from(anchor.day()) - 1);
    let next_month_first = {
        let d = first + Duration::days(32);
        d - Duration::days(i64::from(d.day()) - 1)
    };
    let last = next_month_first - Duration::days(1);

    let start = first - Duration::days(i64::from(first.weekday().num_days_from_sunday()));
    let end = last + Duration::days(i64::from(6 - last.weekday().num_days_from_sunday()));

    let mut cells = Vec::with_capacity(42);
    let mut day = start;
    while day <= end {
        cells.push(day);
        day = day + Duration::days(1);
    }
    cells
}

/// Selection state for the two-click date-range picker.
///
/// First click picks the start, second click the end. Clicking a date
/// before the chosen start restarts the selection from that date instead
/// of producing an inverted range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RangeSelection {
    #[default]
    Empty,
    StartOnly { start: NaiveDate },
    Complete { start: NaiveDate, end: NaiveDate },
}

impl RangeSelection {
    /// Advance the state machine with a clicked date.
    #[must_use]
    pub fn click(self, date: NaiveDate) -> Self {
        match self {
            Self::Empty | Self::Complete { .. } => Self::StartOnly { start: date },
            Self::StartOnly { start } if date < start => Self::StartOnly { start: date },
            Self::StartOnly { start } => Self::Complete { start, end: date },
        }
    }

    /// Tentative range to shade while hovering; only meaningful when a lone
    /// start is selected.
    pub fn preview(self, hovered: NaiveDate) -> Option<(NaiveDate, NaiveDate)> {
        match self {
            Self::StartOnly { start } if hovered < start => Some((hovered, start)),
            Self::StartOnly { start } => Some((start, hovered)),
            _ => None,
        }
    }

    /// The completed range, if both endpoints were chosen.
    pub fn range(self) -> Option<(NaiveDate, NaiveDate)> {
        match self {
            Self::Complete { start, end } => Some((start, end)),
            _ => None,
        }
    }
}
