use tracing::info;
use uuid::Uuid;

use crate::error::HrError;
use crate::geo::Coordinates;
use crate::model::company::Company;
use crate::model::department::Department;
use crate::model::employee::Employee;
use crate::model::role::Role;
use crate::utils::join_code;

use super::employee::NewEmployee;
use super::HrStore;

/// What company creation hands back: the tenant and its first admin.
#[derive(Debug, Clone)]
pub struct CompanyOnboarding {
    pub company: Company,
    pub admin: Employee,
}

impl HrStore {
    /// Create a tenant together with its first admin account. The office
    /// location starts unset, so check-ins classify as remote until an
    /// admin registers one.
    pub fn create_company_with_admin(
        &mut self,
        company_name: &str,
        admin_name: &str,
        admin_email: &str,
        admin_password: &str,
    ) -> Result<CompanyOnboarding, HrError> {
        if self.email_index.is_taken(admin_email) {
            return Err(HrError::DuplicateEmail(admin_email.trim().to_string()));
        }

        let company = Company {
            id: Uuid::new_v4(),
            name: company_name.trim().to_string(),
            join_code: self.unused_join_code(),
            office_location: None,
        };

        let admin = self.build_employee(
            NewEmployee {
                name: admin_name.to_string(),
                email: admin_email.to_string(),
                password: admin_password.to_string(),
                department: Department::Hr,
                role: Role::Admin,
            },
            company.id,
        )?;

        self.snapshot.companies.push(company.clone());
        self.snapshot.employees.push(admin.clone());
        self.email_index.insert(&admin.email);
        self.persist()?;
        info!(company_id = %company.id, join_code = %company.join_code, "company created");
        Ok(CompanyOnboarding { company, admin })
    }

    /// Register or move the office coordinate of the actor's own company.
    pub fn update_office_location(
        &mut self,
        actor_id: Uuid,
        location: Coordinates,
    ) -> Result<Company, HrError> {
        let actor = self
            .snapshot
            .employee(actor_id)
            .ok_or(HrError::EmployeeNotFound(actor_id))?;
        actor.role.require_edit_office_location()?;
        let company_id = actor.company_id;

        let company = self
            .snapshot
            .company_mut(company_id)
            .ok_or(HrError::CompanyNotFound(company_id))?;
        company.office_location = Some(location);
        let updated = company.clone();

        self.persist()?;
        info!(company_id = %company_id, location = %location, "office location updated");
        Ok(updated)
    }

    /// Draw codes until one is free. Collisions are effectively impossible
    /// at demo scale but the loop keeps the invariant explicit.
    fn unused_join_code(&self) -> String {
        loop {
            let code = join_code::generate_join_code();
            if self.snapshot.company_by_code(&code).is_none() {
                return code;
            }
        }
    }
}
