use chrono::{DateTime, Utc};
use tracing::{debug, info};
use uuid::Uuid;

use crate::error::HrError;
use crate::geo::{self, Coordinates, GeofenceResult};
use crate::model::attendance::{hours_between, AttendanceRecord, AttendanceStatus};

use super::HrStore;

/// A fresh attendance record plus the geofence verdict that shaped it.
#[derive(Debug, Clone)]
pub struct CheckInOutcome {
    pub record: AttendanceRecord,
    pub geofence: GeofenceResult,
}

impl HrStore {
    /// Check in for today. The reported fix is optional; a missing one
    /// classifies as remote rather than failing the check-in.
    pub fn check_in(
        &mut self,
        employee_id: Uuid,
        fix: Option<Coordinates>,
    ) -> Result<CheckInOutcome, HrError> {
        self.check_in_at(employee_id, fix, Utc::now())
    }

    /// Clock-injected variant of [`HrStore::check_in`].
    pub fn check_in_at(
        &mut self,
        employee_id: Uuid,
        fix: Option<Coordinates>,
        now: DateTime<Utc>,
    ) -> Result<CheckInOutcome, HrError> {
        let employee = self
            .snapshot
            .employee(employee_id)
            .ok_or(HrError::EmployeeNotFound(employee_id))?;
        let company_id = employee.company_id;
        let office = self
            .snapshot
            .company(company_id)
            .ok_or(HrError::CompanyNotFound(company_id))?
            .office_location;

        let today = now.date_naive();
        if self.snapshot.attendance_for_day(employee_id, today).is_some() {
            return Err(HrError::AlreadyCheckedIn { employee_id, date: today });
        }

        let geofence = geo::classify(office, fix, self.settings.geofence_radius_m);

        let record = AttendanceRecord {
            id: Uuid::new_v4(),
            employee_id,
            date: today,
            check_in: Some(now),
            check_out: None,
            hours_worked: 0.0,
            mode: geofence.mode,
            location: fix,
            status: AttendanceStatus::Present,
        };
        self.snapshot.attendance.push(record.clone());
        self.persist()?;
        info!(employee_id = %employee_id, mode = %record.mode, "checked in");
        Ok(CheckInOutcome { record, geofence })
    }

    /// Close today's open record. Without one this is a quiet no-op,
    /// `Ok(None)`, so a stray button press never turns into an error.
    pub fn check_out(&mut self, employee_id: Uuid) -> Result<Option<AttendanceRecord>, HrError> {
        self.check_out_at(employee_id, Utc::now())
    }

    /// Clock-injected variant of [`HrStore::check_out`].
    pub fn check_out_at(
        &mut self,
        employee_id: Uuid,
        now: DateTime<Utc>,
    ) -> Result<Option<AttendanceRecord>, HrError> {
        if self.snapshot.employee(employee_id).is_none() {
            return Err(HrError::EmployeeNotFound(employee_id));
        }

        let today = now.date_naive();
        let workday_hours = self.settings.workday_hours;

        let Some(open) = self
            .snapshot
            .attendance_for_day_mut(employee_id, today)
            .filter(|r| r.is_open())
        else {
            debug!(employee_id = %employee_id, date = %today, "no open record to check out of");
            return Ok(None);
        };

        // is_open guarantees the check-in timestamp.
        let started = open.check_in.unwrap_or(now);
        let hours = hours_between(started, now);

        open.check_out = Some(now);
        open.hours_worked = hours;
        open.status = if hours >= workday_hours {
            AttendanceStatus::Present
        } else {
            AttendanceStatus::Incomplete
        };
        let closed = open.clone();

        self.persist()?;
        info!(employee_id = %employee_id, hours, status = %closed.status, "checked out");
        Ok(Some(closed))
    }
}
