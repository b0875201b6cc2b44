use rusqlite::{params, Connection, OptionalExtension};

use crate::model::{Manufacturer, MotorbikeModel, MotorbikeRecord, MotorbikeVariant};
use crate::result::Result;

/// SQLite-backed motorcycle catalog: manufacturers, their model lines and the
/// per-year variants the visualization consumes.
pub struct CatalogDb {
    conn: Connection,
}

impl CatalogDb {
    pub fn open(path: &str) -> Result<Self> {
        let conn = Connection::open(path)?;
        let db = Self { conn };
        db.init_schema()?;
        Ok(db)
    }

    pub fn open_in_memory() -> Result<Self> {
        let conn = Connection::open_in_memory()?;
        let db = Self { conn };
        db.init_schema()?;
        Ok(db)
    }

    fn init_schema(&self) -> Result<()> {
        self.conn.execute_batch(
            r#"
            CREATE TABLE IF NOT EXISTS manufacturers (
                id TEXT PRIMARY KEY,
                name TEXT NOT NULL,
                slug TEXT NOT NULL UNIQUE,
                country TEXT,
                founded_year INTEGER,
                description TEXT,
                created_at TEXT NOT NULL
            );

            CREATE TABLE IF NOT EXISTS motorbike_models (
                id TEXT PRIMARY KEY,
                manufacturer_id TEXT NOT NULL,
                name TEXT NOT NULL,
                slug TEXT NOT NULL,
                category TEXT,
                year_start INTEGER,
                description TEXT,
                created_at TEXT NOT NULL,
                UNIQUE (manufacturer_id, slug),
                FOREIGN KEY (manufacturer_id) REFERENCES manufacturers(id)
            );

            CREATE TABLE IF NOT EXISTS motorbike_variants (
                id TEXT PRIMARY KEY,
                model_id TEXT NOT NULL,
                variant_name TEXT NOT NULL,
                year INTEGER NOT NULL,
                slug TEXT NOT NULL UNIQUE,
                price_eur REAL,
                engine_type TEXT,
                engine_displacement_cc REAL,
                horsepower_hp REAL,
                torque_nm REAL,
                weight_kg REAL,
                abs INTEGER NOT NULL DEFAULT 0,
                traction_control INTEGER NOT NULL DEFAULT 0,
                description TEXT,
                created_at TEXT NOT NULL,
                FOREIGN KEY (model_id) REFERENCES motorbike_models(id)
            );

            CREATE INDEX IF NOT EXISTS idx_models_manufacturer
                ON motorbike_models(manufacturer_id);
            CREATE INDEX IF NOT EXISTS idx_variants_model
                ON motorbike_variants(model_id);
            "#,
        )?;
        Ok(())
    }

    /// Insert or refresh a manufacturer, keyed on slug. An existing row keeps
    /// its id across reseeds.
    pub fn upsert_manufacturer(&self, manufacturer: &Manufacturer) -> Result<()> {
        self.conn.execute(
            "INSERT INTO manufacturers (id, name, slug, country, founded_year, description, created_at)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)
             ON CONFLICT(slug) DO UPDATE SET
                 name = excluded.name,
                 country = excluded.country,
                 founded_year = excluded.founded_year,
                 description = excluded.description",
            params![
                manufacturer.id,
                manufacturer.name,
                manufacturer.slug,
                manufacturer.country,
                manufacturer.founded_year,
                manufacturer.description,
                manufacturer.created_at,
            ],
        )?;
        Ok(())
    }

    pub fn upsert_model(&self, model: &MotorbikeModel) -> Result<()> {
        self.conn.execute(
            "INSERT INTO motorbike_models (id, manufacturer_id, name, slug, category, year_start, description, created_at)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8)
             ON CONFLICT(manufacturer_id, slug) DO UPDATE SET
                 name = excluded.name,
                 category = excluded.category,
                 year_start = excluded.year_start,
                 description = excluded.description",
            params![
                model.id,
                model.manufacturer_id,
                model.name,
                model.slug,
                model.category,
                model.year_start,
                model.description,
                model.created_at,
            ],
        )?;
        Ok(())
    }

    pub fn upsert_variant(&self, variant: &MotorbikeVariant) -> Result<()> {
        self.conn.execute(
            "INSERT INTO motorbike_variants (id, model_id, variant_name, year, slug, price_eur,
                 engine_type, engine_displacement_cc, horsepower_hp, torque_nm, weight_kg,
                 abs, traction_control, description, created_at)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?11, ?12, ?13, ?14, ?15)
             ON CONFLICT(slug) DO UPDATE SET
                 variant_name = excluded.variant_name,
                 year = excluded.year,
                 price_eur = excluded.price_eur,
                 engine_type = excluded.engine_type,
                 engine_displacement_cc = excluded.engine_displacement_cc,
                 horsepower_hp = excluded.horsepower_hp,
                 torque_nm = excluded.torque_nm,
                 weight_kg = excluded.weight_kg,
                 abs = excluded.abs,
                 traction_control = excluded.traction_control,
                 description = excluded.description",
            params![
                variant.id,
                variant.model_id,
                variant.variant_name,
                variant.year,
                variant.slug,
                variant.price_eur,
                variant.engine_type,
                variant.engine_displacement_cc,
                variant.horsepower_hp,
                variant.torque_nm,
                variant.weight_kg,
                variant.abs,
                variant.traction_control,
                variant.description,
                variant.created_at,
            ],
        )?;
        Ok(())
    }

    pub fn manufacturer_id(&self, slug: &str) -> Result<Option<String>> {
        let id = self
            .conn
            .query_row(
                "SELECT id FROM manufacturers WHERE slug = ?1",
                params![slug],
                |row| row.get(0),
            )
            .optional()?;
        Ok(id)
    }

    pub fn model_id(&self, slug: &str) -> Result<Option<String>> {
        let id = self
            .conn
            .query_row(
                "SELECT id FROM motorbike_models WHERE slug = ?1",
                params![slug],
                |row| row.get(0),
            )
            .optional()?;
        Ok(id)
    }

    /// Flatten the catalog into clustering records, optionally filtered by a
    /// case-insensitive substring over model, variant, manufacturer and
    /// category. A stored displacement of 0 (electric machines) is surfaced
    /// as undefined so those records land in the N/A bucket.
    pub fn fetch_records(&self, search: Option<&str>) -> Result<Vec<MotorbikeRecord>> {
        let pattern = search.map(|query| format!("%{}%", query.trim()));

        let mut stmt = self.conn.prepare(
            "SELECT v.id,
                    mo.name || ' ' || v.variant_name,
                    mo.category,
                    ma.name,
                    v.horsepower_hp,
                    v.price_eur,
                    NULLIF(v.engine_displacement_cc, 0.0)
             FROM motorbike_variants v
             JOIN motorbike_models mo ON mo.id = v.model_id
             JOIN manufacturers ma ON ma.id = mo.manufacturer_id
             WHERE ?1 IS NULL
                OR mo.name LIKE ?1
                OR v.variant_name LIKE ?1
                OR ma.name LIKE ?1
                OR mo.category LIKE ?1
             ORDER BY ma.name, mo.name, v.variant_name",
        )?;

        let rows = stmt.query_map(params![pattern], |row| {
            Ok(MotorbikeRecord {
                id: row.get(0)?,
                name: row.get(1)?,
                category: row.get(2)?,
                manufacturer: row.get(3)?,
                horsepower_hp: row.get(4)?,
                price_eur: row.get(5)?,
                engine_displacement_cc: row.get(6)?,
            })
        })?;

        let mut records = Vec::new();
        for row in rows {
            records.push(row?);
        }
        Ok(records)
    }
}
