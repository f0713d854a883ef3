use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::model::attendance::AttendanceRecord;
use crate::model::company::Company;
use crate::model::employee::Employee;
use crate::model::leave_request::LeaveRequest;

/// The whole application state, persisted wholesale on every mutation.
/// `Vec` order is insertion order and survives a save/load round trip.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Snapshot {
    pub companies: Vec<Company>,
    pub employees: Vec<Employee>,
    pub attendance: Vec<AttendanceRecord>,
    pub leaves: Vec<LeaveRequest>,
}

impl Snapshot {
    pub fn company(&self, id: Uuid) -> Option<&Company> {
        self.companies.iter().find(|c| c.id == id)
    }

    pub fn company_mut(&mut self, id: Uuid) -> Option<&mut Company> {
        self.companies.iter_mut().find(|c| c.id == id)
    }

    pub fn company_by_code(&self, code: &str) -> Option<&Company> {
        let code = code.trim();
        self.companies.iter().find(|c| c.join_code.eq_ignore_ascii_case(code))
    }

    pub fn employee(&self, id: Uuid) -> Option<&Employee> {
        self.employees.iter().find(|e| e.id == id)
    }

    pub fn employee_mut(&mut self, id: Uuid) -> Option<&mut Employee> {
        self.employees.iter_mut().find(|e| e.id == id)
    }

    pub fn leave(&self, id: Uuid) -> Option<&LeaveRequest> {
        self.leaves.iter().find(|l| l.id == id)
    }

    pub fn leave_mut(&mut self, id: Uuid) -> Option<&mut LeaveRequest> {
        self.leaves.iter_mut().find(|l| l.id == id)
    }

    pub fn attendance_for_day(&self, employee_id: Uuid, date: NaiveDate) -> Option<&AttendanceRecord> {
        self.attendance
            .iter()
            .find(|r| r.employee_id == employee_id && r.date == date)
    }

    pub fn attendance_for_day_mut(
        &mut self,
        employee_id: Uuid,
        date: NaiveDate,
    ) -> Option<&mut AttendanceRecord> {
        self.attendance
            .iter_mut()
            .find(|r| r.employee_id == employee_id && r.date == date)
    }
}
