//! Office geofencing for check-ins.
//!
//! Distances are great-circle metres on a spherical Earth. A check-in is
//! on-site when the reported fix lies within the configured radius of the
//! registered office coordinate; everything else degrades to remote.

use derive_more::Display;
use serde::{Deserialize, Serialize};

use crate::model::attendance::AttendanceMode;

/// Mean Earth radius in metres.
pub const EARTH_RADIUS_M: f64 = 6_371_000.0;

/// A latitude/longitude pair in decimal degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, Display)]
#[display(fmt = "({}, {})", lat, lng)]
pub struct Coordinates {
    pub lat: f64,
    pub lng: f64,
}

impl Coordinates {
    pub fn new(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }
}

/// Great-circle distance between two coordinates, haversine formula.
pub fn haversine_distance_m(a: Coordinates, b: Coordinates) -> f64 {
    let phi1 = a.lat.to_radians();
    let phi2 = b.lat.to_radians();
    let d_phi = (b.lat - a.lat).to_radians();
    let d_lambda = (b.lng - a.lng).to_radians();

    let h = (d_phi / 2.0).sin().powi(2) + phi1.cos() * phi2.cos() * (d_lambda / 2.0).sin().powi(2);
    let c = 2.0 * h.sqrt().atan2((1.0 - h).sqrt());

    EARTH_RADIUS_M * c
}

/// Outcome of classifying one reported position against the office geofence.
#[derive(Debug, Clone, PartialEq)]
pub struct GeofenceResult {
    pub mode: AttendanceMode,
    /// Measured distance to the office, when both coordinates were known.
    pub distance_m: Option<f64>,
    /// Status line for the host UI.
    pub message: String,
}

/// Classify a check-in position against the registered office location.
///
/// No registered office means every check-in is remote. A missing fix
/// (the host denied geolocation or had none) is remote as well, with a
/// message saying so; the check-in itself still goes through. Otherwise
/// the check-in is on-site iff the distance is within `radius_m`.
pub fn classify(
    office: Option<Coordinates>,
    reported: Option<Coordinates>,
    radius_m: f64,
) -> GeofenceResult {
    let Some(office) = office else {
        return GeofenceResult {
            mode: AttendanceMode::Wfh,
            distance_m: None,
            message: "No office location registered. Checked in as remote.".to_string(),
        };
    };

    let Some(reported) = reported else {
        return GeofenceResult {
            mode: AttendanceMode::Wfh,
            distance_m: None,
            message: "Could not determine your location. Checked in as remote.".to_string(),
        };
    };

    let distance_m = haversine_distance_m(office, reported);
    if distance_m <= radius_m {
        GeofenceResult {
            mode: AttendanceMode::Wfo,
            distance_m: Some(distance_m),
            message: format!("Checked in on-site, {distance_m:.0} m from the office."),
        }
    } else {
        GeofenceResult {
            mode: AttendanceMode::Wfh,
            distance_m: Some(distance_m),
            message: format!("Outside the office geofence ({distance_m:.0} m away). Checked in as remote."),
        }
    }
}
