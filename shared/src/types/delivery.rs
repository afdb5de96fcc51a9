//! Delivery tracking view models

use serde::{Deserialize, Serialize};

/// Named stage in a delivery's progress timeline
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrackingStep {
    pub label: String,
    pub completed: bool,
    /// Free-text time, empty while the step is outstanding
    pub time: String,
}

impl TrackingStep {
    pub fn done(label: &str, time: &str) -> Self {
        Self {
            label: label.to_string(),
            completed: true,
            time: time.to_string(),
        }
    }

    pub fn outstanding(label: &str) -> Self {
        Self {
            label: label.to_string(),
            completed: false,
            time: String::new(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeoPoint {
    pub lat: f64,
    pub lng: f64,
}

impl GeoPoint {
    pub const fn new(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }
}

/// Known positions for a delivery in flight
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct LocationData {
    pub restaurant: Option<GeoPoint>,
    pub destination: Option<GeoPoint>,
    pub courier: Option<GeoPoint>,
}

/// Tab of the tracking page a delivery is listed under
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DeliveryTab {
    #[default]
    Active,
    Completed,
}

impl DeliveryTab {
    pub fn as_str(&self) -> &'static str {
        match self {
            DeliveryTab::Active => "active",
            DeliveryTab::Completed => "completed",
        }
    }

    /// Lenient parse: anything but "completed" is the active tab
    pub fn parse_lenient(value: Option<&str>) -> Self {
        match value.map(str::trim) {
            Some(v) if v.eq_ignore_ascii_case("completed") => DeliveryTab::Completed,
            _ => DeliveryTab::Active,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DeliveryItem {
    pub name: String,
    pub quantity: u32,
}

/// Delivery as shown on the tracking page
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Delivery {
    pub id: String,
    pub customer: String,
    pub courier: String,
    /// Free-text status label ("Preparing", "On the Way", "Delivered")
    pub status: String,
    pub address: String,
    pub estimated_time: String,
    pub order_time: String,
    pub delivery_time: Option<String>,
    pub items: Vec<DeliveryItem>,
    pub steps: Vec<TrackingStep>,
    pub location: Option<LocationData>,
}

impl Delivery {
    /// Items joined as "1x Veggie Burger, 1x Soda"
    pub fn items_summary(&self) -> String {
        self.items
            .iter()
            .map(|item| format!("{}x {}", item.quantity, item.name))
            .collect::<Vec<_>>()
            .join(", ")
    }

    pub fn is_on_the_way(&self) -> bool {
        self.status == "On the Way"
    }
}
