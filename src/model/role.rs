use serde::{Deserialize, Serialize};
use strum_macros::Display;

use crate::error::HrError;

/// Closed role set. Call sites never compare raw strings; every permission
/// question goes through the capability methods below, and adding a role
/// variant forces each of them to be revisited.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Serialize, Deserialize, Display)]
#[serde(rename_all = "UPPERCASE")]
#[strum(serialize_all = "UPPERCASE")]
pub enum Role {
    Employee,
    Manager,
    Admin,
}

impl Role {
    pub fn can_decide_leave(self) -> bool {
        match self {
            Role::Manager | Role::Admin => true,
            Role::Employee => false,
        }
    }

    pub fn can_manage_employees(self) -> bool {
        match self {
            Role::Manager | Role::Admin => true,
            Role::Employee => false,
        }
    }

    pub fn can_edit_office_location(self) -> bool {
        match self {
            Role::Admin => true,
            Role::Manager | Role::Employee => false,
        }
    }

    pub fn can_reset_data(self) -> bool {
        match self {
            Role::Admin => true,
            Role::Manager | Role::Employee => false,
        }
    }

    pub fn require_decide_leave(self) -> Result<(), HrError> {
        if self.can_decide_leave() {
            Ok(())
        } else {
            Err(HrError::Forbidden { role: self, action: "decide leave requests" })
        }
    }

    pub fn require_manage_employees(self) -> Result<(), HrError> {
        if self.can_manage_employees() {
            Ok(())
        } else {
            Err(HrError::Forbidden { role: self, action: "manage employees" })
        }
    }

    pub fn require_edit_office_location(self) -> Result<(), HrError> {
        if self.can_edit_office_location() {
            Ok(())
        } else {
            Err(HrError::Forbidden { role: self, action: "edit the office location" })
        }
    }

    pub fn require_reset_data(self) -> Result<(), HrError> {
        if self.can_reset_data() {
            Ok(())
        } else {
            Err(HrError::Forbidden { role: self, action: "reset application data" })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn managers_decide_leave_but_do_not_touch_company_settings() {
        assert!(Role::Manager.can_decide_leave());
        assert!(Role::Manager.can_manage_employees());
        assert!(!Role::Manager.can_edit_office_location());
        assert!(!Role::Manager.can_reset_data());
    }

    #[test]
    fn admins_can_do_everything() {
        assert!(Role::Admin.can_decide_leave());
        assert!(Role::Admin.can_manage_employees());
        assert!(Role::Admin.can_edit_office_location());
        assert!(Role::Admin.can_reset_data());
    }

    #[test]
    fn employees_have_no_management_capabilities() {
        assert!(!Role::Employee.can_decide_leave());
        assert!(!Role::Employee.can_manage_employees());
        assert!(!Role::Employee.can_edit_office_location());
        assert!(!Role::Employee.can_reset_data());
    }

    #[test]
    fn require_guard_names_the_refused_action() {
        let err = Role::Employee.require_decide_leave().unwrap_err();
        assert!(err.to_string().contains("decide leave requests"));
    }

    #[test]
    fn serializes_uppercase() {
        assert_eq!(serde_json::to_string(&Role::Manager).unwrap(), "\"MANAGER\"");
        assert_eq!(Role::Admin.to_string(), "ADMIN");
    }
}
