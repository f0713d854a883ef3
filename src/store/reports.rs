use chrono::NaiveDate;
use strum_macros::Display;
use uuid::Uuid;

use crate::error::HrError;
use crate::model::attendance::AttendanceRecord;
use crate::model::department::Department;
use crate::model::employee::Employee;
use crate::model::leave_request::{LeaveRequest, LeaveStatus};

use super::HrStore;

/// Where an employee stands on one calendar day. Approved leave wins over
/// any attendance record; a closed record classifies by the workday
/// threshold; no record at all is absent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum DayStatus {
    #[strum(serialize = "On Leave")]
    OnLeave,
    Present,
    Completed,
    Incomplete,
    Absent,
}

#[derive(Debug, Clone)]
pub struct EmployeeDayStatus {
    pub employee_id: Uuid,
    pub name: String,
    pub department: Department,
    pub status: DayStatus,
    /// One line for the host UI, such as "09:05 - 17:35 (8.50 hrs)".
    pub detail: String,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct OverviewTotals {
    pub present: usize,
    pub absent: usize,
    pub on_leave: usize,
    pub total: usize,
}

/// Departments appear in directory order, each with its own headcount.
#[derive(Debug, Clone)]
pub struct DepartmentOverview {
    pub department: Department,
    pub present: usize,
    pub total: usize,
    pub employees: Vec<EmployeeDayStatus>,
}

#[derive(Debug, Clone)]
pub struct DailyOverview {
    pub date: NaiveDate,
    pub totals: OverviewTotals,
    pub departments: Vec<DepartmentOverview>,
}

impl HrStore {
    /// Company-wide attendance picture for one day.
    pub fn daily_overview(&self, company_id: Uuid, date: NaiveDate) -> Result<DailyOverview, HrError> {
        if self.snapshot.company(company_id).is_none() {
            return Err(HrError::CompanyNotFound(company_id));
        }

        let mut totals = OverviewTotals::default();
        let mut departments: Vec<DepartmentOverview> = Vec::new();

        for employee in self.snapshot.employees.iter().filter(|e| e.company_id == company_id) {
            let (status, detail) = self.day_status(employee, date);
            let attended = matches!(
                status,
                DayStatus::Present | DayStatus::Completed | DayStatus::Incomplete
            );

            totals.total += 1;
            match status {
                DayStatus::OnLeave => totals.on_leave += 1,
                DayStatus::Absent => totals.absent += 1,
                _ => totals.present += 1,
            }

            let idx = match departments.iter().position(|d| d.department == employee.department) {
                Some(idx) => idx,
                None => {
                    departments.push(DepartmentOverview {
                        department: employee.department,
                        present: 0,
                        total: 0,
                        employees: Vec::new(),
                    });
                    departments.len() - 1
                }
            };
            let entry = &mut departments[idx];
            entry.total += 1;
            if attended {
                entry.present += 1;
            }
            entry.employees.push(EmployeeDayStatus {
                employee_id: employee.id,
                name: employee.name.clone(),
                department: employee.department,
                status,
                detail,
            });
        }

        Ok(DailyOverview { date, totals, departments })
    }

    /// An employee's attendance records, newest date first.
    pub fn attendance_history(&self, employee_id: Uuid) -> Vec<&AttendanceRecord> {
        let mut records: Vec<&AttendanceRecord> = self
            .snapshot
            .attendance
            .iter()
            .filter(|r| r.employee_id == employee_id)
            .collect();
        records.sort_by(|a, b| b.date.cmp(&a.date));
        records
    }

    /// Requests still waiting on a decision, company-scoped.
    pub fn pending_leave(&self, company_id: Uuid) -> Vec<&LeaveRequest> {
        self.snapshot
            .leaves
            .iter()
            .filter(|l| l.status == LeaveStatus::Pending)
            .filter(|l| {
                self.snapshot
                    .employee(l.employee_id)
                    .is_some_and(|e| e.company_id == company_id)
            })
            .collect()
    }

    /// Directory listing for one company, in insertion order.
    pub fn employees_of(&self, company_id: Uuid) -> Vec<&Employee> {
        self.snapshot
            .employees
            .iter()
            .filter(|e| e.company_id == company_id)
            .collect()
    }

    fn day_status(&self, employee: &Employee, date: NaiveDate) -> (DayStatus, String) {
        let on_leave = self.snapshot.leaves.iter().any(|l| {
            l.employee_id == employee.id
                && l.status == LeaveStatus::Approved
                && l.from_date <= date
                && date <= l.to_date
        });
        if on_leave {
            return (DayStatus::OnLeave, "Approved leave.".to_string());
        }

        match self.snapshot.attendance_for_day(employee.id, date) {
            Some(record) => match (record.check_in, record.check_out) {
                (Some(start), Some(end)) => {
                    let status = if record.hours_worked >= self.settings.workday_hours {
                        DayStatus::Completed
                    } else {
                        DayStatus::Incomplete
                    };
                    let detail = format!(
                        "{} - {} ({:.2} hrs)",
                        start.format("%H:%M"),
                        end.format("%H:%M"),
                        record.hours_worked
                    );
                    (status, detail)
                }
                (Some(start), None) => {
                    (DayStatus::Present, format!("Checked in at {}", start.format("%H:%M")))
                }
                _ => (DayStatus::Absent, "Not checked in yet.".to_string()),
            },
            None => (DayStatus::Absent, "Not checked in yet.".to_string()),
        }
    }
}
