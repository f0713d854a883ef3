//! The application store.
//!
//! One owned [`Snapshot`] plus an injected [`StoragePort`]; every mutation
//! goes through a command method on [`HrStore`], persists the whole
//! snapshot, and returns the affected records. Reads hand out references
//! into the current snapshot.

pub mod snapshot;

mod attendance;
mod company;
mod employee;
mod leave;
mod reports;

pub use attendance::CheckInOutcome;
pub use company::CompanyOnboarding;
pub use employee::NewEmployee;
pub use leave::{AppliedLeave, BalancePolicy, DecisionPolicy, LeaveApplication};
pub use reports::{DailyOverview, DayStatus, DepartmentOverview, EmployeeDayStatus, OverviewTotals};

use tracing::{info, warn};
use uuid::Uuid;

use crate::error::HrError;
use crate::seed;
use crate::storage::StoragePort;
use crate::utils::email_index::EmailIndex;
use snapshot::Snapshot;

/// Tunables the store needs at runtime; everything else lives in the
/// snapshot itself.
#[derive(Debug, Clone, Copy)]
pub struct StoreSettings {
    /// Geofence radius around the office, metres.
    pub geofence_radius_m: f64,
    /// Hours a closed day needs to count as complete.
    pub workday_hours: f64,
    /// Annual leave allowance handed to new employees, days.
    pub default_annual_leave: u32,
    pub decision_policy: DecisionPolicy,
    pub balance_policy: BalancePolicy,
}

impl Default for StoreSettings {
    fn default() -> Self {
        Self {
            geofence_radius_m: 300.0,
            workday_hours: 8.0,
            default_annual_leave: 20,
            decision_policy: DecisionPolicy::default(),
            balance_policy: BalancePolicy::default(),
        }
    }
}

pub struct HrStore {
    snapshot: Snapshot,
    storage: Box<dyn StoragePort>,
    settings: StoreSettings,
    email_index: EmailIndex,
}

impl HrStore {
    /// Load from the port, falling back to the demo dataset when nothing
    /// usable is stored. A corrupt snapshot is logged and replaced, never
    /// propagated.
    pub fn open(storage: Box<dyn StoragePort>, settings: StoreSettings) -> Self {
        let snapshot = match storage.load() {
            Ok(Some(snapshot)) => snapshot,
            Ok(None) => {
                info!("no stored snapshot, starting from the demo dataset");
                seed::demo_snapshot()
            }
            Err(e) => {
                warn!(error = %e, "stored snapshot unreadable, starting from the demo dataset");
                seed::demo_snapshot()
            }
        };
        Self::with_snapshot(snapshot, storage, settings)
    }

    /// Build a store around an explicit snapshot, skipping the port read.
    pub fn with_snapshot(
        snapshot: Snapshot,
        storage: Box<dyn StoragePort>,
        settings: StoreSettings,
    ) -> Self {
        let mut email_index = EmailIndex::new();
        email_index.rebuild(snapshot.employees.iter().map(|e| e.email.as_str()));
        Self { snapshot, storage, settings, email_index }
    }

    /// Immutable view of the current state.
    pub fn snapshot(&self) -> &Snapshot {
        &self.snapshot
    }

    pub fn settings(&self) -> &StoreSettings {
        &self.settings
    }

    /// Throw everything away and start over from the demo dataset.
    pub fn reset(&mut self, actor_id: Uuid) -> Result<(), HrError> {
        let role = self
            .snapshot
            .employee(actor_id)
            .ok_or(HrError::EmployeeNotFound(actor_id))?
            .role;
        role.require_reset_data()?;

        self.snapshot = seed::demo_snapshot();
        self.email_index
            .rebuild(self.snapshot.employees.iter().map(|e| e.email.as_str()));
        self.persist()?;
        info!("application data reset to the demo dataset");
        Ok(())
    }

    /// Rewrite the whole snapshot through the port. Last write wins.
    fn persist(&mut self) -> Result<(), HrError> {
        self.storage.save(&self.snapshot)?;
        Ok(())
    }
}


#[cfg(test)]
mod tests {
    use super::testutil::*;
    use super::*;
    use crate::storage::MemoryStorage;

    #[test]
    fn reset_requires_the_admin_capability() {
        let mut store = demo_store();
        let manager = id_by_email(&store, "manager@pulse.com");
        let err = store.reset(manager).unwrap_err();
        assert!(matches!(err, HrError::Forbidden { .. }));
    }

    #[test]
    fn reset_restores_the_demo_dataset() {
        let mut store = demo_store();
        let admin = id_by_email(&store, "admin@pulse.com");
        let employee = id_by_email(&store, "employee@pulse.com");

        store
            .apply_leave(
                employee,
                LeaveApplication {
                    from_date: chrono::NaiveDate::from_ymd_opt(2030, 1, 6).unwrap(),
                    to_date: chrono::NaiveDate::from_ymd_opt(2030, 1, 7).unwrap(),
                    reason: "scratch".to_string(),
                    attachment: None,
                },
            )
            .unwrap();
        assert_ne!(store.snapshot(), &seed::demo_snapshot());

        store.reset(admin).unwrap();
        assert_eq!(store.snapshot(), &seed::demo_snapshot());
    }

    #[test]
    fn open_falls_back_to_the_seed_when_storage_is_empty() {
        let store = HrStore::open(Box::new(MemoryStorage::new()), StoreSettings::default());
        assert_eq!(store.snapshot(), &seed::demo_snapshot());
    }
}
