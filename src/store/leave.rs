use chrono::NaiveDate;
use strum_macros::{Display, EnumString};
use tracing::info;
use uuid::Uuid;

use crate::error::HrError;
use crate::model::leave_request::{inclusive_days, Attachment, LeaveRequest, LeaveStatus};

use super::HrStore;

/// What happens when a decision lands on an already-decided request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Display, EnumString)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum DecisionPolicy {
    /// Decisions are terminal; deciding again is an error.
    #[default]
    Final,
    /// Requests may be re-decided. Revoking an approval reverses the booked
    /// days and detaches the synced calendar event.
    Redecide,
}

/// What happens when a request asks for more days than remain.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Display, EnumString)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum BalancePolicy {
    /// Reject the request outright.
    #[default]
    Enforce,
    /// Let it through and hand the caller a warning to display.
    Flag,
}

/// Intake form for a leave request.
#[derive(Debug, Clone)]
pub struct LeaveApplication {
    pub from_date: NaiveDate,
    pub to_date: NaiveDate,
    pub reason: String,
    pub attachment: Option<Attachment>,
}

/// A submitted request plus the balance warning, when policy let an
/// over-budget request through.
#[derive(Debug, Clone)]
pub struct AppliedLeave {
    pub request: LeaveRequest,
    pub balance_warning: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Decision {
    Approve,
    Reject,
}

impl HrStore {
    /// Submit a leave request. Dates are validated before anything is
    /// stored; the balance check depends on the configured policy.
    pub fn apply_leave(
        &mut self,
        employee_id: Uuid,
        application: LeaveApplication,
    ) -> Result<AppliedLeave, HrError> {
        let employee = self
            .snapshot
            .employee(employee_id)
            .ok_or(HrError::EmployeeNotFound(employee_id))?;
        let remaining = employee.remaining_leave();

        // 1️⃣ the range must run forward
        if application.to_date < application.from_date {
            return Err(HrError::InvalidDateRange {
                from: application.from_date,
                to: application.to_date,
            });
        }

        // 2️⃣ the balance check, per policy
        let requested = inclusive_days(application.from_date, application.to_date);
        let balance_warning = if requested > remaining {
            match self.settings.balance_policy {
                BalancePolicy::Enforce => {
                    return Err(HrError::InsufficientBalance { requested, remaining });
                }
                BalancePolicy::Flag => {
                    Some(format!("Only {remaining} days of leave remaining, requested {requested}."))
                }
            }
        } else {
            None
        };

        // 3️⃣ record the pending request
        let request = LeaveRequest {
            id: Uuid::new_v4(),
            employee_id,
            from_date: application.from_date,
            to_date: application.to_date,
            reason: application.reason,
            status: LeaveStatus::Pending,
            approved_by: None,
            calendar_event_id: None,
            attachment: application.attachment,
        };
        self.snapshot.leaves.push(request.clone());
        self.persist()?;
        info!(leave_id = %request.id, employee_id = %employee_id, days = requested, "leave request submitted");
        Ok(AppliedLeave { request, balance_warning })
    }

    /// Approve a pending request: books the inclusive span onto the
    /// employee's counters and attaches a simulated calendar event when
    /// their calendar link is connected.
    pub fn approve_leave(&mut self, leave_id: Uuid, decider_id: Uuid) -> Result<LeaveRequest, HrError> {
        self.decide_leave(leave_id, decider_id, Decision::Approve)
    }

    /// Reject a pending request. Balances never move on rejection.
    pub fn reject_leave(&mut self, leave_id: Uuid, decider_id: Uuid) -> Result<LeaveRequest, HrError> {
        self.decide_leave(leave_id, decider_id, Decision::Reject)
    }

    fn decide_leave(
        &mut self,
        leave_id: Uuid,
        decider_id: Uuid,
        decision: Decision,
    ) -> Result<LeaveRequest, HrError> {
        let decider = self
            .snapshot
            .employee(decider_id)
            .ok_or(HrError::EmployeeNotFound(decider_id))?;
        decider.role.require_decide_leave()?;

        let request = self
            .snapshot
            .leave(leave_id)
            .ok_or(HrError::LeaveNotFound(leave_id))?;
        let prior_status = request.status;
        let prior_event = request.calendar_event_id.clone();
        let employee_id = request.employee_id;
        let days = request.requested_days();

        if prior_status.is_terminal() && self.settings.decision_policy == DecisionPolicy::Final {
            return Err(HrError::AlreadyDecided { id: leave_id, status: prior_status });
        }

        let employee = self
            .snapshot
            .employee(employee_id)
            .ok_or(HrError::EmployeeNotFound(employee_id))?;
        let calendar_connected = employee.calendar_connected;
        let calendar_id = employee.calendar_id.clone();

        // Booked days move at most once per request: booked on approval,
        // reversed only when a prior approval is revoked.
        let mut day_delta: i64 = 0;
        if prior_status == LeaveStatus::Approved {
            day_delta -= i64::from(days);
        }

        let (status, calendar_event_id) = match decision {
            Decision::Approve => {
                day_delta += i64::from(days);
                let event = if calendar_connected {
                    let event = format!("gcal-{}", Uuid::new_v4());
                    info!(leave_id = %leave_id, calendar_id = %calendar_id, event = %event, "calendar event attached");
                    Some(event)
                } else {
                    None
                };
                (LeaveStatus::Approved, event)
            }
            Decision::Reject => {
                if prior_status == LeaveStatus::Approved {
                    if let Some(event) = &prior_event {
                        info!(leave_id = %leave_id, calendar_id = %calendar_id, event = %event, "calendar event detached");
                    }
                }
                (LeaveStatus::Rejected, None)
            }
        };

        if day_delta != 0 {
            let employee = self
                .snapshot
                .employee_mut(employee_id)
                .ok_or(HrError::EmployeeNotFound(employee_id))?;
            let taken = i64::from(employee.leave_taken) + day_delta;
            employee.leave_taken = taken.max(0) as u32;
        }

        let request = self
            .snapshot
            .leave_mut(leave_id)
            .ok_or(HrError::LeaveNotFound(leave_id))?;
        request.status = status;
        request.approved_by = Some(decider_id);
        request.calendar_event_id = calendar_event_id;
        let decided = request.clone();

        self.persist()?;
        info!(leave_id = %leave_id, status = %decided.status, decided_by = %decider_id, "leave request decided");
        Ok(decided)
    }
}

#[cfg(test)]
mod tests {
    use super::super::testutil::*;
    use super::super::StoreSettings;
    use super::*;

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn three_days() -> LeaveApplication {
        LeaveApplication {
            from_date: ymd(2030, 9, 10),
            to_date: ymd(2030, 9, 12),
            reason: "Family visit".to_string(),
            attachment: None,
        }
    }

    #[test]
    fn inverted_range_rejects_before_anything_is_stored() {
        let mut store = demo_store();
        let employee = id_by_email(&store, "employee@pulse.com");
        let before = store.snapshot().leaves.len();

        let err = store
            .apply_leave(
                employee,
                LeaveApplication { from_date: ymd(2030, 9, 12), to_date: ymd(2030, 9, 10), ..three_days() },
            )
            .unwrap_err();
        assert!(matches!(err, HrError::InvalidDateRange { .. }));
        assert_eq!(store.snapshot().leaves.len(), before);
    }

    #[test]
    fn over_budget_request_rejects_under_enforce() {
        let mut store = demo_store();
        let employee = id_by_email(&store, "employee@pulse.com");

        // Demo Alice has 20 days with 3 already taken.
        let err = store
            .apply_leave(
                employee,
                LeaveApplication { from_date: ymd(2030, 9, 1), to_date: ymd(2030, 9, 30), ..three_days() },
            )
            .unwrap_err();
        assert!(matches!(err, HrError::InsufficientBalance { requested: 30, remaining: 17 }));
    }

    #[test]
    fn over_budget_request_is_flagged_under_flag_policy() {
        let mut store = demo_store_with(StoreSettings {
            balance_policy: BalancePolicy::Flag,
            ..StoreSettings::default()
        });
        let employee = id_by_email(&store, "employee@pulse.com");

        let applied = store
            .apply_leave(
                employee,
                LeaveApplication { from_date: ymd(2030, 9, 1), to_date: ymd(2030, 9, 30), ..three_days() },
            )
            .unwrap();
        assert_eq!(applied.request.status, LeaveStatus::Pending);
        let warning = applied.balance_warning.unwrap();
        assert!(warning.contains("17 days"), "{warning}");
    }

    #[test]
    fn approval_books_the_span_exactly_once() {
        let mut store = demo_store();
        let employee = id_by_email(&store, "employee@pulse.com");
        let manager = id_by_email(&store, "manager@pulse.com");
        let taken_before = store.snapshot().employee(employee).unwrap().leave_taken;

        let applied = store.apply_leave(employee, three_days()).unwrap();
        assert!(applied.balance_warning.is_none());

        let approved = store.approve_leave(applied.request.id, manager).unwrap();
        assert_eq!(approved.status, LeaveStatus::Approved);
        assert_eq!(approved.approved_by, Some(manager));
        assert_eq!(
            store.snapshot().employee(employee).unwrap().leave_taken,
            taken_before + 3
        );

        // A second decision is refused and the counter stays put.
        let err = store.approve_leave(applied.request.id, manager).unwrap_err();
        assert!(matches!(err, HrError::AlreadyDecided { .. }));
        assert_eq!(
            store.snapshot().employee(employee).unwrap().leave_taken,
            taken_before + 3
        );
    }

    #[test]
    fn rejection_never_touches_the_balance() {
        let mut store = demo_store();
        let employee = id_by_email(&store, "employee@pulse.com");
        let manager = id_by_email(&store, "manager@pulse.com");
        let taken_before = store.snapshot().employee(employee).unwrap().leave_taken;

        let applied = store.apply_leave(employee, three_days()).unwrap();
        let rejected = store.reject_leave(applied.request.id, manager).unwrap();
        assert_eq!(rejected.status, LeaveStatus::Rejected);
        assert_eq!(rejected.calendar_event_id, None);
        assert_eq!(store.snapshot().employee(employee).unwrap().leave_taken, taken_before);
    }

    #[test]
    fn plain_employees_cannot_decide() {
        let mut store = demo_store();
        let employee = id_by_email(&store, "employee@pulse.com");

        let applied = store.apply_leave(employee, three_days()).unwrap();
        let err = store.reject_leave(applied.request.id, employee).unwrap_err();
        assert!(matches!(err, HrError::Forbidden { .. }));
    }

    #[test]
    fn approval_attaches_a_calendar_event_only_when_connected() {
        let mut store = demo_store();
        let manager = id_by_email(&store, "manager@pulse.com");

        // Alice's calendar is connected in the demo dataset.
        let alice = id_by_email(&store, "employee@pulse.com");
        let applied = store.apply_leave(alice, three_days()).unwrap();
        let approved = store.approve_leave(applied.request.id, manager).unwrap();
        let event = approved.calendar_event_id.unwrap();
        assert!(event.starts_with("gcal-"), "{event}");

        // Charlie's is not.
        let charlie = id_by_email(&store, "charlie@innovate.com");
        let applied = store
            .apply_leave(
                charlie,
                LeaveApplication { from_date: ymd(2030, 10, 1), to_date: ymd(2030, 10, 1), ..three_days() },
            )
            .unwrap();
        let approved = store.approve_leave(applied.request.id, manager).unwrap();
        assert_eq!(approved.calendar_event_id, None);
    }

    #[test]
    fn redecide_policy_reverses_a_revoked_approval() {
        let mut store = demo_store_with(StoreSettings {
            decision_policy: DecisionPolicy::Redecide,
            ..StoreSettings::default()
        });
        let employee = id_by_email(&store, "employee@pulse.com");
        let manager = id_by_email(&store, "manager@pulse.com");
        let taken_before = store.snapshot().employee(employee).unwrap().leave_taken;

        let applied = store.apply_leave(employee, three_days()).unwrap();
        let approved = store.approve_leave(applied.request.id, manager).unwrap();
        assert!(approved.calendar_event_id.is_some());
        assert_eq!(
            store.snapshot().employee(employee).unwrap().leave_taken,
            taken_before + 3
        );

        // Revoke: days come back, the event is detached.
        let rejected = store.reject_leave(applied.request.id, manager).unwrap();
        assert_eq!(rejected.status, LeaveStatus::Rejected);
        assert_eq!(rejected.calendar_event_id, None);
        assert_eq!(store.snapshot().employee(employee).unwrap().leave_taken, taken_before);

        // Approve again: booked exactly once, not twice.
        let approved = store.approve_leave(applied.request.id, manager).unwrap();
        assert_eq!(approved.status, LeaveStatus::Approved);
        assert_eq!(
            store.snapshot().employee(employee).unwrap().leave_taken,
            taken_before + 3
        );
    }

    #[test]
    fn deciding_a_missing_request_is_an_error() {
        let mut store = demo_store();
        let manager = id_by_email(&store, "manager@pulse.com");
        let err = store.approve_leave(Uuid::new_v4(), manager).unwrap_err();
        assert!(matches!(err, HrError::LeaveNotFound(_)));
    }
}
