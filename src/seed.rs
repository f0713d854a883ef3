//! Baked-in demo dataset, used whenever the storage port has nothing
//! usable. Dates are relative to the current day so the dashboard always
//! has something to show.

use chrono::{DateTime, Duration, NaiveDate, Utc};
use once_cell::sync::Lazy;
use tracing::warn;
use uuid::Uuid;

use crate::auth::password;
use crate::geo::Coordinates;
use crate::model::attendance::{AttendanceMode, AttendanceRecord, AttendanceStatus};
use crate::model::company::Company;
use crate::model::department::Department;
use crate::model::employee::Employee;
use crate::model::leave_request::{Attachment, LeaveRequest, LeaveStatus};
use crate::model::role::Role;
use crate::store::snapshot::Snapshot;

/// Password shared by every demo account.
pub const DEMO_PASSWORD: &str = "password123";

static DEMO: Lazy<Snapshot> = Lazy::new(build);

/// A fresh copy of the demo dataset. Hashing the shared password is paid
/// once per process; ids stay stable across copies.
pub fn demo_snapshot() -> Snapshot {
    DEMO.clone()
}

fn at(date: NaiveDate, h: u32, m: u32) -> DateTime<Utc> {
    date.and_hms_opt(h, m, 0).unwrap_or_default().and_utc()
}

fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap_or_default()
}

fn build() -> Snapshot {
    let password_hash = match password::hash_password(DEMO_PASSWORD) {
        Ok(hash) => hash,
        Err(e) => {
            warn!(error = %e, "demo password could not be hashed, demo logins will fail");
            String::new()
        }
    };

    let today = Utc::now().date_naive();
    let yesterday = today - Duration::days(1);

    let innovate = Company {
        id: Uuid::new_v4(),
        name: "Innovate Inc.".to_string(),
        join_code: "INNOV8".to_string(),
        office_location: Some(Coordinates::new(34.052235, -118.243683)),
    };
    let synergy = Company {
        id: Uuid::new_v4(),
        name: "Synergy Corp.".to_string(),
        join_code: "SYN456".to_string(),
        office_location: Some(Coordinates::new(40.712776, -74.005974)),
    };

    let employee = |name: &str, email: &str, department, role, company: &Company, connected| Employee {
        id: Uuid::new_v4(),
        name: name.to_string(),
        email: email.to_string(),
        password_hash: password_hash.clone(),
        department,
        role,
        company_id: company.id,
        active: true,
        annual_leave_balance: 20,
        leave_taken: 0,
        calendar_id: format!("cal-{}", email.to_lowercase()),
        calendar_connected: connected,
    };

    let mut alice = employee(
        "Alice Smith",
        "employee@pulse.com",
        Department::Engineering,
        Role::Employee,
        &innovate,
        true,
    );
    // Matches her approved three-day request below.
    alice.leave_taken = 3;

    let bob = employee(
        "Bob Johnson",
        "manager@pulse.com",
        Department::Engineering,
        Role::Manager,
        &innovate,
        true,
    );
    let charlie = employee(
        "Charlie Day",
        "charlie@innovate.com",
        Department::Marketing,
        Role::Employee,
        &innovate,
        false,
    );
    let diana = employee(
        "Diana Ross",
        "admin@pulse.com",
        Department::Hr,
        Role::Admin,
        &innovate,
        true,
    );
    let ethan = employee(
        "Ethan Hunt",
        "ethan@synergy.com",
        Department::Sales,
        Role::Employee,
        &synergy,
        false,
    );
    let fiona = employee(
        "Fiona Glenanne",
        "fiona@synergy.com",
        Department::Sales,
        Role::Manager,
        &synergy,
        true,
    );

    let attendance = vec![
        AttendanceRecord {
            id: Uuid::new_v4(),
            employee_id: alice.id,
            date: yesterday,
            check_in: Some(at(yesterday, 9, 5)),
            check_out: Some(at(yesterday, 17, 35)),
            hours_worked: 8.5,
            mode: AttendanceMode::Wfo,
            location: innovate.office_location,
            status: AttendanceStatus::Present,
        },
        AttendanceRecord {
            id: Uuid::new_v4(),
            employee_id: charlie.id,
            date: yesterday,
            check_in: Some(at(yesterday, 9, 30)),
            check_out: Some(at(yesterday, 17, 0)),
            hours_worked: 7.5,
            mode: AttendanceMode::Wfh,
            location: None,
            status: AttendanceStatus::Incomplete,
        },
        AttendanceRecord {
            id: Uuid::new_v4(),
            employee_id: bob.id,
            date: today,
            check_in: Some(at(today, 8, 58)),
            check_out: None,
            hours_worked: 0.0,
            mode: AttendanceMode::Wfo,
            location: innovate.office_location,
            status: AttendanceStatus::Present,
        },
    ];

    let leaves = vec![
        LeaveRequest {
            id: Uuid::new_v4(),
            employee_id: alice.id,
            from_date: ymd(2024, 9, 10),
            to_date: ymd(2024, 9, 12),
            reason: "Family vacation".to_string(),
            status: LeaveStatus::Approved,
            approved_by: Some(bob.id),
            calendar_event_id: Some("gcal-123".to_string()),
            attachment: Some(Attachment { name: "flight-tickets.pdf".to_string() }),
        },
        LeaveRequest {
            id: Uuid::new_v4(),
            employee_id: charlie.id,
            from_date: today,
            to_date: today,
            reason: "Doctor's appointment".to_string(),
            status: LeaveStatus::Pending,
            approved_by: None,
            calendar_event_id: None,
            attachment: None,
        },
        LeaveRequest {
            id: Uuid::new_v4(),
            employee_id: ethan.id,
            from_date: ymd(2024, 9, 15),
            to_date: ymd(2024, 9, 15),
            reason: "Personal day".to_string(),
            status: LeaveStatus::Pending,
            approved_by: None,
            calendar_event_id: None,
            attachment: None,
        },
    ];

    Snapshot {
        companies: vec![innovate, synergy],
        employees: vec![alice, bob, charlie, diana, ethan, fiona],
        attendance,
        leaves,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::attendance::hours_between;
    use std::collections::HashSet;

    #[test]
    fn copies_share_stable_ids() {
        let a = demo_snapshot();
        let b = demo_snapshot();
        assert_eq!(a, b);
    }

    #[test]
    fn every_reference_resolves() {
        let snapshot = demo_snapshot();
        for employee in &snapshot.employees {
            assert!(snapshot.company(employee.company_id).is_some(), "{}", employee.email);
        }
        for record in &snapshot.attendance {
            assert!(snapshot.employee(record.employee_id).is_some());
        }
        for leave in &snapshot.leaves {
            assert!(snapshot.employee(leave.employee_id).is_some());
            if let Some(decider) = leave.approved_by {
                assert!(snapshot.employee(decider).is_some());
            }
        }
    }

    #[test]
    fn emails_are_unique() {
        let snapshot = demo_snapshot();
        let emails: HashSet<String> =
            snapshot.employees.iter().map(|e| e.email.to_lowercase()).collect();
        assert_eq!(emails.len(), snapshot.employees.len());
    }

    #[test]
    fn booked_days_match_approved_requests() {
        let snapshot = demo_snapshot();
        for employee in &snapshot.employees {
            let booked: u32 = snapshot
                .leaves
                .iter()
                .filter(|l| l.employee_id == employee.id && l.status == LeaveStatus::Approved)
                .map(|l| l.requested_days())
                .sum();
            assert_eq!(employee.leave_taken, booked, "{}", employee.email);
        }
    }

    #[test]
    fn closed_records_carry_consistent_hours() {
        let snapshot = demo_snapshot();
        for record in &snapshot.attendance {
            if let (Some(start), Some(end)) = (record.check_in, record.check_out) {
                assert_eq!(record.hours_worked, hours_between(start, end), "{}", record.id);
            }
        }
    }

    #[test]
    fn demo_accounts_can_sign_in_with_the_shared_password() {
        let snapshot = demo_snapshot();
        let alice = snapshot
            .employees
            .iter()
            .find(|e| e.email == "employee@pulse.com")
            .unwrap();
        assert!(password::verify_password(DEMO_PASSWORD, &alice.password_hash));
    }
}
