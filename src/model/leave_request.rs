use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use strum_macros::Display;
use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Display)]
#[serde(rename_all = "UPPERCASE")]
#[strum(serialize_all = "UPPERCASE")]
pub enum LeaveStatus {
    Pending,
    Approved,
    Rejected,
}

impl LeaveStatus {
    pub fn is_terminal(self) -> bool {
        matches!(self, LeaveStatus::Approved | LeaveStatus::Rejected)
    }
}

/// Supporting document handed in with a request. Only the name is kept,
/// there is no file body anywhere in the system.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Attachment {
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LeaveRequest {
    pub id: Uuid,
    pub employee_id: Uuid,
    /// Inclusive range: one single day is from == to.
    pub from_date: NaiveDate,
    pub to_date: NaiveDate,
    pub reason: String,
    pub status: LeaveStatus,
    /// Who decided, set on approval and rejection alike.
    pub approved_by: Option<Uuid>,
    /// Simulated synced calendar event, set on approval when the employee
    /// has a connected calendar link.
    pub calendar_event_id: Option<String>,
    pub attachment: Option<Attachment>,
}

impl LeaveRequest {
    pub fn requested_days(&self) -> u32 {
        inclusive_days(self.from_date, self.to_date)
    }
}

/// Inclusive day count of a range; both endpoints count.
pub fn inclusive_days(from: NaiveDate, to: NaiveDate) -> u32 {
    (to - from).num_days().max(0) as u32 + 1
}
