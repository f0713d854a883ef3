use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::geo::Coordinates;

/// A tenant. Employees enter through the shared join code.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Company {
    pub id: Uuid,
    pub name: String,
    /// Shared onboarding token, matched case-insensitively.
    pub join_code: String,
    /// Registered office coordinate. While unset every check-in is remote.
    pub office_location: Option<Coordinates>,
}
