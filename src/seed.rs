use chrono::Utc;
use log::{info, warn};
use serde::Deserialize;
use uuid::Uuid;

use crate::db::CatalogDb;
use crate::model::{Manufacturer, MotorbikeModel, MotorbikeVariant};
use crate::result::Result;

const CATALOG_JSON: &str = include_str!("../data/catalog.json");

#[derive(Debug, Deserialize)]
struct SeedCatalog {
    manufacturers: Vec<SeedManufacturer>,
    models: Vec<SeedModel>,
    variants: Vec<SeedVariant>,
}

#[derive(Debug, Deserialize)]
struct SeedManufacturer {
    name: String,
    slug: String,
    country: Option<String>,
    founded_year: Option<i32>,
    description: Option<String>,
}

#[derive(Debug, Deserialize)]
struct SeedModel {
    manufacturer_slug: String,
    name: String,
    slug: String,
    category: Option<String>,
    year_start: Option<i32>,
    description: Option<String>,
}

#[derive(Debug, Deserialize)]
struct SeedVariant {
    model_slug: String,
    variant_name: String,
    year: i32,
    slug: String,
    price_eur: Option<f64>,
    engine_type: Option<String>,
    engine_displacement_cc: Option<f64>,
    horsepower_hp: Option<f64>,
    torque_nm: Option<f64>,
    weight_kg: Option<f64>,
    abs: bool,
    traction_control: bool,
    description: Option<String>,
}

/// Populate the catalog from the embedded seed document. Upserts are keyed on
/// slugs, so reseeding an existing database refreshes rows in place.
pub fn seed_catalog(db: &CatalogDb) -> Result<()> {
    let catalog: SeedCatalog = serde_json::from_str(CATALOG_JSON)?;

    info!("Seeding {} manufacturers...", catalog.manufacturers.len());
    for seed in &catalog.manufacturers {
        db.upsert_manufacturer(&Manufacturer {
            id: Uuid::new_v4().to_string(),
            name: seed.name.clone(),
            slug: seed.slug.clone(),
            country: seed.country.clone(),
            founded_year: seed.founded_year,
            description: seed.description.clone(),
            created_at: Utc::now(),
        })?;
    }

    info!("Seeding {} models...", catalog.models.len());
    let mut seeded_models = 0;
    for seed in &catalog.models {
        let Some(manufacturer_id) = db.manufacturer_id(&seed.manufacturer_slug)? else {
            warn!(
                "Skipping model {}: unknown manufacturer slug {}",
                seed.slug, seed.manufacturer_slug
            );
            continue;
        };

        db.upsert_model(&MotorbikeModel {
            id: Uuid::new_v4().to_string(),
            manufacturer_id,
            name: seed.name.clone(),
            slug: seed.slug.clone(),
            category: seed.category.clone(),
            year_start: seed.year_start,
            description: seed.description.clone(),
            created_at: Utc::now(),
        })?;
        seeded_models += 1;
    }

    info!("Seeding {} variants...", catalog.variants.len());
    let mut seeded_variants = 0;
    for seed in &catalog.variants {
        let Some(model_id) = db.model_id(&seed.model_slug)? else {
            warn!(
                "Skipping variant {}: unknown model slug {}",
                seed.slug, seed.model_slug
            );
            continue;
        };

        db.upsert_variant(&MotorbikeVariant {
            id: Uuid::new_v4().to_string(),
            model_id,
            variant_name: seed.variant_name.clone(),
            year: seed.year,
            slug: seed.slug.clone(),
            price_eur: seed.price_eur,
            engine_type: seed.engine_type.clone(),
            engine_displacement_cc: seed.engine_displacement_cc,
            horsepower_hp: seed.horsepower_hp,
            torque_nm: seed.torque_nm,
            weight_kg: seed.weight_kg,
            abs: seed.abs,
            traction_control: seed.traction_control,
            description: seed.description.clone(),
            created_at: Utc::now(),
        })?;
        seeded_variants += 1;
    }

    info!(
        "Seeding complete: {} manufacturers, {} models, {} variants",
        catalog.manufacturers.len(),
        seeded_models,
        seeded_variants
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn embedded_catalog_parses_and_resolves() {
        let catalog: SeedCatalog = serde_json::from_str(CATALOG_JSON).unwrap();

        assert!(!catalog.manufacturers.is_empty());
        assert!(!catalog.models.is_empty());
        assert!(!catalog.variants.is_empty());

        // Every model and variant points at a slug defined earlier in the
        // document, so seeding never skips rows.
        for model in &catalog.models {
            assert!(
                catalog
                    .manufacturers
                    .iter()
                    .any(|m| m.slug == model.manufacturer_slug),
                "model {} references unknown manufacturer {}",
                model.slug,
                model.manufacturer_slug
            );
        }
        for variant in &catalog.variants {
            assert!(
                catalog.models.iter().any(|m| m.slug == variant.model_slug),
                "variant {} references unknown model {}",
                variant.slug,
                variant.model_slug
            );
        }
    }

    #[test]
    fn seeding_is_idempotent() {
        let db = CatalogDb::open_in_memory().unwrap();

        seed_catalog(&db).unwrap();
        let first = db.fetch_records(None).unwrap();

        seed_catalog(&db).unwrap();
        let second = db.fetch_records(None).unwrap();

        assert!(!first.is_empty());
        assert_eq!(first.len(), second.len());
    }
}
