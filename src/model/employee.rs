use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::department::Department;
use super::role::Role;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Employee {
    pub id: Uuid,

    pub name: String,

    /// Unique across the whole directory, compared case-insensitively.
    pub email: String,

    /// Argon2 PHC string, never the raw password.
    pub password_hash: String,

    pub department: Department,

    pub role: Role,

    pub company_id: Uuid,

    /// Deactivated accounts stay in the directory but cannot sign in.
    pub active: bool,

    /// Annual allowance in whole days.
    pub annual_leave_balance: u32,

    /// Days booked by approved requests.
    pub leave_taken: u32,

    /// Simulated external calendar link.
    pub calendar_id: String,

    pub calendar_connected: bool,
}

impl Employee {
    /// Days still available to request.
    pub fn remaining_leave(&self) -> u32 {
        self.annual_leave_balance.saturating_sub(self.leave_taken)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn remaining_leave_never_underflows() {
        let mut employee = Employee {
            id: Uuid::new_v4(),
            name: "Test".to_string(),
            email: "t@example.com".to_string(),
            password_hash: String::new(),
            department: Department::Engineering,
            role: Role::Employee,
            company_id: Uuid::new_v4(),
            active: true,
            annual_leave_balance: 20,
            leave_taken: 3,
            calendar_id: "cal-t@example.com".to_string(),
            calendar_connected: false,
        };
        assert_eq!(employee.remaining_leave(), 17);

        employee.leave_taken = 25;
        assert_eq!(employee.remaining_leave(), 0);
    }
}
