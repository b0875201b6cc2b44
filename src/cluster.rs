use std::collections::BTreeMap;

use three_d::Vector3;

use crate::color::{self, RgbColor};
use crate::model::MotorbikeRecord;
use crate::sphere;

/// Radius of the sphere the cluster anchors are laid out on.
pub const UNIVERSE_RADIUS: f32 = 18.0;

#[derive(Eq, PartialEq, Copy, Clone, Debug)]
pub enum GroupingMode {
    Category,
    Price,
    Brand,
    Displacement,
}

impl GroupingMode {
    pub const ALL: [GroupingMode; 4] = [
        GroupingMode::Category,
        GroupingMode::Price,
        GroupingMode::Brand,
        GroupingMode::Displacement,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            GroupingMode::Category => "Category",
            GroupingMode::Price => "Price Heatmap",
            GroupingMode::Brand => "Brand",
            GroupingMode::Displacement => "Displacement",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            GroupingMode::Category => "Grouped by motorcycle category",
            GroupingMode::Price => "Color intensity by price range",
            GroupingMode::Brand => "Grouped by manufacturer",
            GroupingMode::Displacement => "Grouped by engine size",
        }
    }

    pub fn is_heatmap(&self) -> bool {
        matches!(self, GroupingMode::Price | GroupingMode::Displacement)
    }

    /// The numeric field driving bucket averages and heatmap normalization.
    fn numeric_value(&self, record: &MotorbikeRecord) -> Option<f64> {
        match self {
            GroupingMode::Price => record.price_eur,
            GroupingMode::Displacement => record.engine_displacement_cc,
            GroupingMode::Category | GroupingMode::Brand => None,
        }
    }
}

#[derive(Debug, Clone)]
pub struct Cluster {
    pub label: String,
    pub members: Vec<MotorbikeRecord>,
    pub color: RgbColor,
    pub position: Vector3<f32>,
    pub average_value: Option<f64>,
}

/// Total over (record, mode): every record maps to exactly one non-empty key.
pub fn cluster_key(record: &MotorbikeRecord, mode: GroupingMode) -> String {
    match mode {
        GroupingMode::Category => record
            .category
            .clone()
            .unwrap_or_else(|| "Other".to_string()),
        GroupingMode::Brand => record
            .manufacturer
            .clone()
            .unwrap_or_else(|| "Unknown".to_string()),
        GroupingMode::Price => match record.price_eur {
            Some(price) => price_bucket(price).to_string(),
            None => "Price N/A".to_string(),
        },
        GroupingMode::Displacement => match record.engine_displacement_cc {
            Some(displacement) => displacement_bucket(displacement).to_string(),
            None => "N/A".to_string(),
        },
    }
}

// Buckets are half-open on the lower bound: a value exactly on a boundary
// falls into the higher bucket.
fn price_bucket(price: f64) -> &'static str {
    if price < 5_000.0 {
        "< €5k"
    } else if price < 10_000.0 {
        "€5k - €10k"
    } else if price < 15_000.0 {
        "€10k - €15k"
    } else if price < 20_000.0 {
        "€15k - €20k"
    } else if price < 30_000.0 {
        "€20k - €30k"
    } else {
        "€30k+"
    }
}

fn displacement_bucket(displacement: f64) -> &'static str {
    if displacement < 300.0 {
        "< 300cc"
    } else if displacement < 500.0 {
        "300-500cc"
    } else if displacement < 750.0 {
        "500-750cc"
    } else if displacement < 1000.0 {
        "750-1000cc"
    } else if displacement < 1300.0 {
        "1000-1300cc"
    } else {
        "1300cc+"
    }
}

/// Partition records into clusters for the given mode, assign anchor
/// positions on the universe sphere and a display color per group. Pure and
/// deterministic: identical input always yields the identical cluster list,
/// ordered lexicographically by label.
pub fn build_clusters(records: &[MotorbikeRecord], mode: GroupingMode) -> Vec<Cluster> {
    let mut groups: BTreeMap<String, Vec<MotorbikeRecord>> = BTreeMap::new();
    for record in records {
        groups
            .entry(cluster_key(record, mode))
            .or_default()
            .push(record.clone());
    }

    let range = if mode.is_heatmap() {
        value_range(records, mode)
    } else {
        None
    };

    let positions = sphere::sphere_positions(groups.len(), UNIVERSE_RADIUS);

    groups
        .into_iter()
        .zip(positions)
        .enumerate()
        .map(|(index, ((label, members), position))| {
            // Undefined values count as zero in the sum and stay in the
            // denominator. Only the dedicated N/A bucket can contain them
            // under the bucketing rules above, so its average reads 0.
            let average_value = mode.is_heatmap().then(|| {
                let sum: f64 = members
                    .iter()
                    .map(|record| mode.numeric_value(record).unwrap_or(0.0))
                    .sum();
                sum / members.len() as f64
            });

            let color = match mode {
                GroupingMode::Category => color::category_color(&label),
                GroupingMode::Brand => color::brand_color(index),
                GroupingMode::Price | GroupingMode::Displacement => {
                    let has_value = members
                        .iter()
                        .any(|record| mode.numeric_value(record).is_some());
                    match (range, average_value) {
                        (Some((min, max)), Some(average)) if has_value => {
                            color::heatmap_color(average, min, max)
                        }
                        _ => color::NEUTRAL_COLOR,
                    }
                }
            };

            Cluster {
                label,
                members,
                color,
                position,
                average_value,
            }
        })
        .collect()
}

/// Global min/max of the mode's numeric field over records that define it.
/// None when no record does.
fn value_range(records: &[MotorbikeRecord], mode: GroupingMode) -> Option<(f64, f64)> {
    records
        .iter()
        .filter_map(|record| mode.numeric_value(record))
        .fold(None, |range, value| match range {
            None => Some((value, value)),
            Some((min, max)) => Some((min.min(value), max.max(value))),
        })
}
