//! Static offline/demo dataset.

use serde_json::{json, Value};
use std::collections::HashMap;

/// Well-known resource names screens ask fallback data for.
pub mod resources {
    pub const ACCOMMODATIONS: &str = "accommodations";
    pub const FOOD_PROVIDERS: &str = "foodProviders";
    pub const ORDERS: &str = "orders";
    pub const DASHBOARD_STATS: &str = "dashboardStats";
}

/// Immutable table of example payloads keyed by logical resource name.
///
/// Each value is shaped like the `data` field of a successful API response,
/// so a screen rendering fallback data runs the same code path as one
/// rendering live data. Lookups are total: unknown resources yield an empty
/// collection, never a panic.
#[derive(Debug, Clone)]
pub struct FallbackDataset {
    table: HashMap<String, Value>,
}

impl FallbackDataset {
    /// The built-in demo dataset covering every screen family.
    pub fn builtin() -> Self {
        let mut table = HashMap::new();

        table.insert(
            resources::ACCOMMODATIONS.to_string(),
            json!([
                {
                    "id": "acc-001",
                    "title": "Sunny double room near North Campus",
                    "area": "Collegetown",
                    "monthlyRent": 540,
                    "rooms": 2,
                    "amenities": ["wifi", "laundry", "heating"],
                    "landlord": "Meadow Lettings",
                    "rating": 4.6
                },
                {
                    "id": "acc-002",
                    "title": "Studio flat, 5 min walk to library",
                    "area": "Mill Street",
                    "monthlyRent": 720,
                    "rooms": 1,
                    "amenities": ["wifi", "bike storage"],
                    "landlord": "J. Okafor",
                    "rating": 4.2
                },
                {
                    "id": "acc-003",
                    "title": "Shared house, garden, all bills included",
                    "area": "Eastfield",
                    "monthlyRent": 435,
                    "rooms": 4,
                    "amenities": ["wifi", "garden", "dishwasher", "parking"],
                    "landlord": "Harbour Homes",
                    "rating": 4.8
                }
            ]),
        );

        table.insert(
            resources::FOOD_PROVIDERS.to_string(),
            json!([
                {
                    "id": "fp-101",
                    "name": "Nonna's Pasta Bar",
                    "cuisine": "Italian",
                    "rating": 4.7,
                    "deliveryFee": 1.5,
                    "minOrder": 8,
                    "openUntil": "22:00"
                },
                {
                    "id": "fp-102",
                    "name": "Green Bowl Kitchen",
                    "cuisine": "Vegetarian",
                    "rating": 4.5,
                    "deliveryFee": 0,
                    "minOrder": 10,
                    "openUntil": "21:30"
                }
            ]),
        );

        table.insert(
            resources::ORDERS.to_string(),
            json!([
                {
                    "id": "ord-9001",
                    "provider": "Nonna's Pasta Bar",
                    "items": [
                        { "name": "Rigatoni al forno", "quantity": 1, "price": 9.5 },
                        { "name": "Garlic bread", "quantity": 2, "price": 3.0 }
                    ],
                    "total": 15.5,
                    "status": "delivered",
                    "placedAt": "2024-11-02T18:24:00Z"
                },
                {
                    "id": "ord-9002",
                    "provider": "Green Bowl Kitchen",
                    "items": [
                        { "name": "Falafel bowl", "quantity": 1, "price": 11.0 }
                    ],
                    "total": 11.0,
                    "status": "preparing",
                    "placedAt": "2024-11-03T12:05:00Z"
                }
            ]),
        );

        table.insert(
            resources::DASHBOARD_STATS.to_string(),
            json!({
                "totalStudents": 1284,
                "totalLandlords": 86,
                "totalFoodProviders": 42,
                "activeListings": 311,
                "openOrders": 57,
                "pendingReviews": 12
            }),
        );

        Self { table }
    }

    /// An empty dataset; every lookup yields an empty collection.
    pub fn empty() -> Self {
        Self {
            table: HashMap::new(),
        }
    }

    /// Add or replace a resource payload (builder-style, for fixtures).
    pub fn with_resource(mut self, resource: impl Into<String>, payload: Value) -> Self {
        self.table.insert(resource.into(), payload);
        self
    }

    /// Example payload for `resource`, or an empty collection for resources
    /// the table does not know. Never panics.
    pub fn get(&self, resource: &str) -> Value {
        self.table
            .get(resource)
            .cloned()
            .unwrap_or_else(|| Value::Array(Vec::new()))
    }

    /// Whether the table carries a payload for `resource`.
    pub fn contains(&self, resource: &str) -> bool {
        self.table.contains_key(resource)
    }

    /// Known resource names.
    pub fn resource_names(&self) -> impl Iterator<Item = &str> {
        self.table.keys().map(String::as_str)
    }
}
