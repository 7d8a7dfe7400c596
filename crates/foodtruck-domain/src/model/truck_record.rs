//! Mobile food facility permit record

use serde::{Deserialize, Serialize};

/// One row of the food truck permit dataset
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TruckRecord {
    pub applicant: String,
    pub food_items: Option<String>,
    pub address: Option<String>,
    /// "Truck", "Push Cart", ...
    pub facility_type: Option<String>,
    /// "APPROVED", "REQUESTED", "SUSPENDED", "EXPIRED", ...
    pub status: Option<String>,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    /// Raw `dayshours` schedule string, e.g. "Mo-Fr/11AM-2PM"
    pub days_hours: Option<String>,
}

impl TruckRecord {
    pub fn has_location(&self) -> bool {
        self.latitude.is_some() && self.longitude.is_some()
    }

    pub fn to_listing(&self) -> TruckListing {
        TruckListing {
            applicant: self.applicant.clone(),
            food_items: self.food_items.clone(),
            address: self.address.clone(),
        }
    }
}

/// Projection printed by the list command
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TruckListing {
    pub applicant: String,
    pub food_items: Option<String>,
    pub address: Option<String>,
}
