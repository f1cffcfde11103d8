// ── Venue domain types ──
//
// Property-scoped simple CRUD records for cafes and restaurants, plus
// hotel pricing seasons and venue events. No cross-entity invariants.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MenuItem {
    pub id: i64,
    pub property_id: Option<i64>,
    pub name: String,
    pub price: f64,
    pub category: Option<String>,
    pub available: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiningTable {
    pub id: i64,
    pub property_id: Option<i64>,
    pub table_number: String,
    pub seats: i64,
    pub zone: Option<String>,
    pub active: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PricingSeason {
    pub id: i64,
    pub property_id: Option<i64>,
    pub name: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub multiplier: f64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VenueEvent {
    pub id: i64,
    pub title: String,
    pub location_id: Option<i64>,
    pub active: bool,
    pub date: Option<NaiveDate>,
    pub description: Option<String>,
}
