//! Public API integration tests: partitioning, layout and color assignment
//! over the full clustering pipeline, plus a seeded catalog round trip.

use std::collections::HashSet;

use motorbike_universe::cluster::{build_clusters, GroupingMode, UNIVERSE_RADIUS};
use motorbike_universe::color::NEUTRAL_COLOR;
use motorbike_universe::db::CatalogDb;
use motorbike_universe::model::MotorbikeRecord;
use motorbike_universe::seed::seed_catalog;
use motorbike_universe::sphere::sphere_positions;
use three_d::InnerSpace;

fn record(
    id: &str,
    category: Option<&str>,
    manufacturer: Option<&str>,
    price: Option<f64>,
    displacement: Option<f64>,
) -> MotorbikeRecord {
    MotorbikeRecord {
        id: id.to_string(),
        name: format!("Bike {}", id),
        category: category.map(str::to_string),
        manufacturer: manufacturer.map(str::to_string),
        horsepower_hp: None,
        price_eur: price,
        engine_displacement_cc: displacement,
    }
}

fn mixed_records() -> Vec<MotorbikeRecord> {
    vec![
        record("a", Some("Sport"), Some("Ducati"), Some(39_500.0), Some(1_103.0)),
        record("b", Some("Sport"), Some("Yamaha"), Some(9_199.0), Some(689.0)),
        record("c", Some("Naked"), Some("Yamaha"), Some(8_299.0), Some(689.0)),
        record("d", Some("Cruiser"), None, None, Some(349.0)),
        record("e", None, Some("Zero Motorcycles"), Some(21_995.0), None),
        record("f", None, None, None, None),
        record("g", Some("Adventure"), Some("BMW"), Some(18_995.0), Some(1_254.0)),
        record("h", Some("Naked"), Some("CFMoto"), Some(4_599.0), Some(292.0)),
    ]
}

#[test]
fn every_record_lands_in_exactly_one_cluster() {
    let records = mixed_records();

    for mode in GroupingMode::ALL {
        let clusters = build_clusters(&records, mode);

        let mut seen = HashSet::new();
        let mut total = 0;
        for cluster in &clusters {
            for member in &cluster.members {
                assert!(
                    seen.insert(member.id.clone()),
                    "record {} appears twice under {:?}",
                    member.id,
                    mode
                );
                total += 1;
            }
        }

        assert_eq!(total, records.len(), "records lost under {:?}", mode);
    }
}

#[test]
fn cluster_labels_are_distinct_and_sorted() {
    let records = mixed_records();

    for mode in GroupingMode::ALL {
        let labels: Vec<String> = build_clusters(&records, mode)
            .iter()
            .map(|c| c.label.clone())
            .collect();

        for pair in labels.windows(2) {
            assert!(
                pair[0] < pair[1],
                "labels out of order under {:?}: {:?}",
                mode,
                labels
            );
        }
    }
}

#[test]
fn anchors_lie_on_the_universe_sphere() {
    let records = mixed_records();

    for mode in GroupingMode::ALL {
        for cluster in build_clusters(&records, mode) {
            let distance = cluster.position.magnitude();
            assert!(
                (distance - UNIVERSE_RADIUS).abs() < UNIVERSE_RADIUS * 1e-5,
                "cluster {} sits at |p|={} under {:?}",
                cluster.label,
                distance,
                mode
            );
        }
    }
}

#[test]
fn sphere_generator_is_deterministic_across_calls() {
    for &count in &[1_usize, 5, 33] {
        assert_eq!(sphere_positions(count, 18.0), sphere_positions(count, 18.0));
    }
}

#[test]
fn price_boundaries_bucket_upward() {
    let clusters = build_clusters(
        &[record("x", None, None, Some(5_000.0), None)],
        GroupingMode::Price,
    );
    assert_eq!(clusters.len(), 1);
    assert_eq!(clusters[0].label, "€5k - €10k");

    let clusters = build_clusters(
        &[record("y", None, None, Some(30_000.0), None)],
        GroupingMode::Price,
    );
    assert_eq!(clusters[0].label, "€30k+");
}

#[test]
fn displacement_boundary_buckets_upward() {
    let clusters = build_clusters(
        &[record("x", None, None, None, Some(1_000.0))],
        GroupingMode::Displacement,
    );
    assert_eq!(clusters.len(), 1);
    assert_eq!(clusters[0].label, "1000-1300cc");
}

#[test]
fn category_example_scenario() {
    let records = vec![
        record("1", Some("Sport"), None, Some(12_000.0), None),
        record("2", Some("Sport"), None, Some(8_000.0), None),
        record("3", Some("Cruiser"), None, None, None),
    ];

    let clusters = build_clusters(&records, GroupingMode::Category);

    assert_eq!(clusters.len(), 2);
    assert_eq!(clusters[0].label, "Cruiser");
    assert_eq!(clusters[0].members.len(), 1);
    assert_eq!(clusters[1].label, "Sport");
    assert_eq!(clusters[1].members.len(), 2);
}

#[test]
fn price_example_scenario_heatmap_endpoints() {
    let records = vec![
        record("1", Some("Sport"), None, Some(12_000.0), None),
        record("2", Some("Sport"), None, Some(8_000.0), None),
        record("3", Some("Cruiser"), None, None, None),
    ];

    let clusters = build_clusters(&records, GroupingMode::Price);

    let labels: Vec<&str> = clusters.iter().map(|c| c.label.as_str()).collect();
    assert_eq!(clusters.len(), 3);
    assert!(labels.contains(&"€5k - €10k"));
    assert!(labels.contains(&"€10k - €15k"));
    assert!(labels.contains(&"Price N/A"));

    // Global range is [8000, 12000]: the low bucket resolves to the blue end
    // of the gradient, the high bucket to the red end, and the N/A bucket to
    // the neutral fallback.
    let low = clusters.iter().find(|c| c.label == "€5k - €10k").unwrap();
    assert_eq!(low.average_value, Some(8_000.0));
    assert_eq!(low.color, (0, 0, 255));

    let high = clusters.iter().find(|c| c.label == "€10k - €15k").unwrap();
    assert_eq!(high.average_value, Some(12_000.0));
    assert_eq!(high.color, (255, 0, 0));

    let na = clusters.iter().find(|c| c.label == "Price N/A").unwrap();
    assert_eq!(na.color, NEUTRAL_COLOR);
}

#[test]
fn degenerate_heatmap_range_resolves_to_blue() {
    let records = vec![
        record("1", None, None, Some(9_000.0), None),
        record("2", None, None, Some(9_000.0), None),
    ];

    let clusters = build_clusters(&records, GroupingMode::Price);

    assert_eq!(clusters.len(), 1);
    assert_eq!(clusters[0].color, (0, 0, 255));
}

#[test]
fn all_undefined_values_fall_back_to_neutral() {
    let records = vec![
        record("1", None, None, None, None),
        record("2", None, None, None, None),
    ];

    for mode in [GroupingMode::Price, GroupingMode::Displacement] {
        let clusters = build_clusters(&records, mode);
        assert_eq!(clusters.len(), 1);
        assert_eq!(clusters[0].color, NEUTRAL_COLOR);
    }
}

#[test]
fn empty_input_yields_empty_output() {
    for mode in GroupingMode::ALL {
        assert!(build_clusters(&[], mode).is_empty());
    }
}

#[test]
fn rebuilding_with_identical_input_is_stable() {
    let records = mixed_records();

    for mode in GroupingMode::ALL {
        let first = build_clusters(&records, mode);
        let second = build_clusters(&records, mode);

        assert_eq!(first.len(), second.len());
        for (a, b) in first.iter().zip(&second) {
            assert_eq!(a.label, b.label);
            assert_eq!(a.color, b.color);
            assert_eq!(a.position, b.position);
            assert_eq!(a.average_value, b.average_value);
            assert_eq!(a.members, b.members);
        }
    }
}

#[test]
fn seeded_catalog_clusters_across_all_modes() {
    let db = CatalogDb::open_in_memory().unwrap();
    seed_catalog(&db).unwrap();

    let records = db.fetch_records(None).unwrap();
    assert!(records.len() > 30);

    for mode in GroupingMode::ALL {
        let clusters = build_clusters(&records, mode);
        assert!(!clusters.is_empty());

        let total: usize = clusters.iter().map(|c| c.members.len()).sum();
        assert_eq!(total, records.len());
    }

    // Electric machines are stored with 0 cc and must surface in the N/A
    // displacement bucket rather than "< 300cc".
    let clusters = build_clusters(&records, GroupingMode::Displacement);
    let na = clusters.iter().find(|c| c.label == "N/A").unwrap();
    assert!(na.members.iter().any(|m| m.name.contains("LiveWire")));
    assert_eq!(na.color, NEUTRAL_COLOR);

    // The sold-out limited edition has no price and lands in Price N/A.
    let clusters = build_clusters(&records, GroupingMode::Price);
    assert!(clusters.iter().any(|c| c.label == "Price N/A"));
}

#[test]
fn catalog_search_filters_records() {
    let db = CatalogDb::open_in_memory().unwrap();
    seed_catalog(&db).unwrap();

    let ducati = db.fetch_records(Some("Ducati")).unwrap();
    assert!(!ducati.is_empty());
    assert!(ducati
        .iter()
        .all(|r| r.manufacturer.as_deref() == Some("Ducati")));

    let sport = db.fetch_records(Some("Sport")).unwrap();
    assert!(sport
        .iter()
        .any(|r| r.category.as_deref() == Some("Sport Touring")));
}
