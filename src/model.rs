use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Manufacturer {
    pub id: String,
    pub name: String,
    pub slug: String,
    pub country: Option<String>,
    pub founded_year: Option<i32>,
    pub description: Option<String>,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MotorbikeModel {
    pub id: String,
    pub manufacturer_id: String,
    pub name: String,
    pub slug: String,
    pub category: Option<String>,
    pub year_start: Option<i32>,
    pub description: Option<String>,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MotorbikeVariant {
    pub id: String,
    pub model_id: String,
    pub variant_name: String,
    pub year: i32,
    pub slug: String,
    pub price_eur: Option<f64>,
    pub engine_type: Option<String>,
    pub engine_displacement_cc: Option<f64>,
    pub horsepower_hp: Option<f64>,
    pub torque_nm: Option<f64>,
    pub weight_kg: Option<f64>,
    pub abs: bool,
    pub traction_control: bool,
    pub description: Option<String>,
    pub created_at: DateTime<Utc>,
}

/// Flattened variant row consumed by the clustering pipeline. Numeric fields
/// are optional; a missing value routes the record into the dedicated N/A
/// bucket instead of dropping it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MotorbikeRecord {
    pub id: String,
    pub name: String,
    pub category: Option<String>,
    pub manufacturer: Option<String>,
    pub horsepower_hp: Option<f64>,
    pub price_eur: Option<f64>,
    pub engine_displacement_cc: Option<f64>,
}
