use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use strum_macros::Display;
use uuid::Uuid;

use crate::geo::Coordinates;

/// Work-mode tag: on-site or remote.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Display)]
#[serde(rename_all = "UPPERCASE")]
#[strum(serialize_all = "UPPERCASE")]
pub enum AttendanceMode {
    Wfo,
    Wfh,
}

/// Present while the record is open or once a full workday is closed out;
/// Incomplete when the closed day fell short of the threshold.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Display)]
#[serde(rename_all = "UPPERCASE")]
#[strum(serialize_all = "UPPERCASE")]
pub enum AttendanceStatus {
    Present,
    Incomplete,
}

/// One row per employee per calendar date.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AttendanceRecord {
    pub id: Uuid,
    pub employee_id: Uuid,
    pub date: NaiveDate,
    pub check_in: Option<DateTime<Utc>>,
    pub check_out: Option<DateTime<Utc>>,
    /// Elapsed hours rounded to two decimals, 0 until checked out.
    pub hours_worked: f64,
    pub mode: AttendanceMode,
    /// Fix reported at check-in, if the host had one.
    pub location: Option<Coordinates>,
    pub status: AttendanceStatus,
}

impl AttendanceRecord {
    /// Checked in but not yet out.
    pub fn is_open(&self) -> bool {
        self.check_in.is_some() && self.check_out.is_none()
    }
}

/// Elapsed hours between two instants, from whole milliseconds, rounded to
/// two decimals.
pub fn hours_between(start: DateTime<Utc>, end: DateTime<Utc>) -> f64 {
    let ms = (end - start).num_milliseconds() as f64;
    (ms / 3_600_000.0 * 100.0).round() / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn at(h: u32, m: u32, s: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 9, 10, h, m, s).unwrap()
    }

    #[test]
    fn eight_hours_exactly() {
        assert_eq!(hours_between(at(9, 0, 0), at(17, 0, 0)), 8.0);
    }

    #[test]
    fn one_minute_short_rounds_to_seven_ninety_eight() {
        // 7h59m is 7.9833... hours.
        assert_eq!(hours_between(at(9, 0, 0), at(16, 59, 0)), 7.98);
    }

    #[test]
    fn half_hours_keep_two_decimals() {
        assert_eq!(hours_between(at(9, 5, 0), at(17, 35, 0)), 8.5);
        assert_eq!(hours_between(at(9, 0, 0), at(9, 20, 24)), 0.34);
    }

    #[test]
    fn open_record_detection() {
        let record = AttendanceRecord {
            id: Uuid::new_v4(),
            employee_id: Uuid::new_v4(),
            date: at(9, 0, 0).date_naive(),
            check_in: Some(at(9, 0, 0)),
            check_out: None,
            hours_worked: 0.0,
            mode: AttendanceMode::Wfo,
            location: None,
            status: AttendanceStatus::Present,
        };
        assert!(record.is_open());

        let closed = AttendanceRecord { check_out: Some(at(17, 0, 0)), ..record };
        assert!(!closed.is_open());
    }

    #[test]
    fn mode_serializes_uppercase() {
        assert_eq!(serde_json::to_string(&AttendanceMode::Wfo).unwrap(), "\"WFO\"");
        assert_eq!(serde_json::to_string(&AttendanceMode::Wfh).unwrap(), "\"WFH\"");
        assert_eq!(AttendanceStatus::Incomplete.to_string(), "INCOMPLETE");
    }
}
