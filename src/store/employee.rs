use tracing::{info, warn};
use uuid::Uuid;

use crate::auth::password;
use crate::error::HrError;
use crate::model::department::Department;
use crate::model::employee::Employee;
use crate::model::role::Role;

use super::HrStore;

/// Intake form for a new account, shared by self-registration and the
/// manager-side directory.
#[derive(Debug, Clone)]
pub struct NewEmployee {
    pub name: String,
    pub email: String,
    pub password: String,
    pub department: Department,
    pub role: Role,
}

impl HrStore {
    /// Self-registration with a company join code.
    pub fn register_employee(
        &mut self,
        join_code: &str,
        new: NewEmployee,
    ) -> Result<Employee, HrError> {
        let company_id = self
            .snapshot
            .company_by_code(join_code)
            .map(|c| c.id)
            .ok_or_else(|| HrError::InvalidJoinCode(join_code.trim().to_string()))?;

        self.insert_employee(new, company_id)
    }

    /// Directory-side intake by a manager or admin, into the actor's own
    /// company.
    pub fn add_employee(&mut self, actor_id: Uuid, new: NewEmployee) -> Result<Employee, HrError> {
        let actor = self
            .snapshot
            .employee(actor_id)
            .ok_or(HrError::EmployeeNotFound(actor_id))?;
        actor.role.require_manage_employees()?;
        let company_id = actor.company_id;

        self.insert_employee(new, company_id)
    }

    /// Credential check for the host login screen. Wrong email and wrong
    /// password are indistinguishable to the caller.
    pub fn authenticate(&self, email: &str, raw_password: &str) -> Result<&Employee, HrError> {
        let candidate = self
            .snapshot
            .employees
            .iter()
            .find(|e| e.email.eq_ignore_ascii_case(email.trim()));

        let Some(employee) = candidate else {
            info!("login rejected, unknown email");
            return Err(HrError::InvalidCredentials);
        };

        if !password::verify_password(raw_password, &employee.password_hash) {
            info!(employee_id = %employee.id, "login rejected, bad password");
            return Err(HrError::InvalidCredentials);
        }

        if !employee.active {
            warn!(employee_id = %employee.id, "login rejected, deactivated account");
            return Err(HrError::InactiveEmployee);
        }

        Ok(employee)
    }

    /// Flip the simulated external-calendar link on or off.
    pub fn set_calendar_connection(
        &mut self,
        employee_id: Uuid,
        connected: bool,
    ) -> Result<Employee, HrError> {
        let employee = self
            .snapshot
            .employee_mut(employee_id)
            .ok_or(HrError::EmployeeNotFound(employee_id))?;
        employee.calendar_connected = connected;
        let updated = employee.clone();

        self.persist()?;
        info!(employee_id = %employee_id, connected, "calendar link toggled");
        Ok(updated)
    }

    fn insert_employee(&mut self, new: NewEmployee, company_id: Uuid) -> Result<Employee, HrError> {
        if self.email_index.is_taken(&new.email) {
            return Err(HrError::DuplicateEmail(new.email.trim().to_string()));
        }

        let employee = self.build_employee(new, company_id)?;
        self.snapshot.employees.push(employee.clone());
        self.email_index.insert(&employee.email);
        self.persist()?;
        info!(employee_id = %employee.id, company_id = %company_id, "employee registered");
        Ok(employee)
    }

    pub(super) fn build_employee(
        &self,
        new: NewEmployee,
        company_id: Uuid,
    ) -> Result<Employee, HrError> {
        let password_hash = password::hash_password(&new.password)?;
        let email = new.email.trim().to_string();
        let calendar_id = format!("cal-{}", email.to_lowercase());

        Ok(Employee {
            id: Uuid::new_v4(),
            name: new.name.trim().to_string(),
            email,
            password_hash,
            department: new.department,
            role: new.role,
            company_id,
            active: true,
            annual_leave_balance: self.settings.default_annual_leave,
            leave_taken: 0,
            calendar_id,
            calendar_connected: false,
        })
    }
}
