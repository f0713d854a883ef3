use std::env;
use std::path::PathBuf;
use std::str::FromStr;

use dotenvy::dotenv;

use crate::store::{BalancePolicy, DecisionPolicy, StoreSettings};

/// Environment-backed runtime configuration. Every knob has a default so
/// the demo runs with no environment at all; an unparsable value falls
/// back to the default rather than aborting.
#[derive(Debug, Clone)]
pub struct Config {
    /// Where the JSON snapshot lives.
    pub data_path: PathBuf,
    /// Directory for rolling daily log files.
    pub log_dir: PathBuf,

    // Store tunables
    pub geofence_radius_m: f64,
    pub workday_hours: f64,
    pub default_annual_leave: u32,
    pub decision_policy: DecisionPolicy,
    pub balance_policy: BalancePolicy,
}

impl Config {
    pub fn from_env() -> Self {
        dotenv().ok();

        Self {
            data_path: env::var("DATA_PATH")
                .unwrap_or_else(|_| "data/pulsehr.json".to_string())
                .into(),
            log_dir: env::var("LOG_DIR")
                .unwrap_or_else(|_| "logs".to_string())
                .into(),

            geofence_radius_m: parse_or("GEOFENCE_RADIUS_M", 300.0),
            workday_hours: parse_or("WORKDAY_HOURS", 8.0),
            default_annual_leave: parse_or("DEFAULT_ANNUAL_LEAVE", 20),
            decision_policy: parse_or("LEAVE_DECISION_POLICY", DecisionPolicy::default()),
            balance_policy: parse_or("LEAVE_BALANCE_POLICY", BalancePolicy::default()),
        }
    }

    pub fn store_settings(&self) -> StoreSettings {
        StoreSettings {
            geofence_radius_m: self.geofence_radius_m,
            workday_hours: self.workday_hours,
            default_annual_leave: self.default_annual_leave,
            decision_policy: self.decision_policy,
            balance_policy: self.balance_policy,
        }
    }
}

fn parse_or<T: FromStr>(key: &str, default: T) -> T {
    env::var(key).ok().and_then(|v| v.parse().ok()).unwrap_or(default)
}
