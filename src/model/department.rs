use serde::{Deserialize, Serialize};
use strum_macros::Display;

/// Organizational unit an employee belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Display)]
pub enum Department {
    Engineering,
    Marketing,
    Sales,
    Ops,
    #[serde(rename = "HR")]
    #[strum(serialize = "HR")]
    Hr,
    Finance,
    Other,
}
