use chrono::NaiveDate;
use thiserror::Error;
use uuid::Uuid;

use crate::model::leave_request::LeaveStatus;
use crate::model::role::Role;
use crate::storage::StorageError;

/// Everything a store command can refuse or fail with.
///
/// Validation variants carry the data an inline form message needs. Storage
/// reads never surface here at all: a missing or corrupt snapshot degrades
/// to the demo dataset before a command ever runs.
#[derive(Debug, Error)]
pub enum HrError {
    // ------------------------- validation -------------------------
    #[error("\"To\" date {to} cannot be before \"From\" date {from}")]
    InvalidDateRange { from: NaiveDate, to: NaiveDate },

    #[error("only {remaining} days of leave remaining, requested {requested}")]
    InsufficientBalance { requested: u32, remaining: u32 },

    #[error("an employee with this email already exists: {0}")]
    DuplicateEmail(String),

    #[error("invalid company code: {0}")]
    InvalidJoinCode(String),

    #[error("already checked in today")]
    AlreadyCheckedIn { employee_id: Uuid, date: NaiveDate },

    #[error("leave request already processed, status is {status}")]
    AlreadyDecided { id: Uuid, status: LeaveStatus },

    // ------------------------- lookups -------------------------
    #[error("employee not found: {0}")]
    EmployeeNotFound(Uuid),

    #[error("company not found: {0}")]
    CompanyNotFound(Uuid),

    #[error("leave request not found: {0}")]
    LeaveNotFound(Uuid),

    // ------------------------- access -------------------------
    #[error("{role} is not allowed to {action}")]
    Forbidden { role: Role, action: &'static str },

    #[error("invalid email or password")]
    InvalidCredentials,

    #[error("account is deactivated")]
    InactiveEmployee,

    // ------------------------- infrastructure -------------------------
    #[error("storage error: {0}")]
    Storage(#[from] StorageError),

    #[error("password hashing failed: {0}")]
    PasswordHash(String),
}
