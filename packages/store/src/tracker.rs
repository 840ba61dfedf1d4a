//! Order tracker maths: great-circle distance, walking ETA to the canteen and
//! the progress stages shown under the status bar.

use serde::{Deserialize, Serialize};

use crate::models::OrderStatus;

pub const EARTH_RADIUS_KM: f64 = 6371.0;

/// Stages drawn under the progress bar. Delivered and cancelled are terminal
/// states and only show through the bar width.
pub const STAGES: [OrderStatus; 4] = [
    OrderStatus::Pending,
    OrderStatus::Confirmed,
    OrderStatus::Preparing,
    OrderStatus::Ready,
];

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct GeoPoint {
    pub lat: f64,
    pub lon: f64,
}

impl GeoPoint {
    pub fn new(lat: f64, lon: f64) -> Self {
        Self { lat, lon }
    }

    /// `"26.91240, 75.78730"`
    pub fn display(&self) -> String {
        format!("{:.5}, {:.5}", self.lat, self.lon)
    }
}

/// Haversine distance in kilometres.
pub fn distance_km(from: GeoPoint, to: GeoPoint) -> f64 {
    let d_lat = (to.lat - from.lat).to_radians();
    let d_lon = (to.lon - from.lon).to_radians();
    let a = (d_lat / 2.0).sin().powi(2)
        + from.lat.to_radians().cos() * to.lat.to_radians().cos() * (d_lon / 2.0).sin().powi(2);
    let c = 2.0 * a.sqrt().atan2((1.0 - a).sqrt());
    EARTH_RADIUS_KM * c
}

/// Whole minutes to walk from `from` to `to`, rounded up.
pub fn walking_eta_minutes(from: GeoPoint, to: GeoPoint, speed_kmh: f64) -> Option<u32> {
    if !speed_kmh.is_finite() || speed_kmh <= 0.0 {
        return None;
    }
    let hours = distance_km(from, to) / speed_kmh;
    Some((hours * 60.0).ceil() as u32)
}

pub fn stage_done(progress: u8, stage: OrderStatus) -> bool {
    progress >= stage.progress()
}

/// Why a status poll failed.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PollFailure {
    Unauthorized,
    NotFound,
    Other,
}

impl PollFailure {
    pub fn message(&self) -> &'static str {
        match self {
            PollFailure::Unauthorized => "Please log in to view your order.",
            PollFailure::NotFound => "Order not found.",
            PollFailure::Other => "Unable to fetch order status. Retrying...",
        }
    }
}
