use std::sync::{Arc, Mutex};
use std::thread;
use std::time::Instant;

use log::{info, warn};

use crate::cluster::{self, GroupingMode};
use crate::db::CatalogDb;
use crate::result::Result;
use crate::state::State;

/// Load the catalog (optionally filtered) and cluster it on a background
/// thread, publishing the result into the shared state when done.
pub fn do_load_and_cluster(
    db_path: String,
    search: String,
    mode: GroupingMode,
    state: Arc<Mutex<State>>,
) {
    thread::spawn(move || {
        if let Err(err) = load_and_cluster(&db_path, &search, mode, &state) {
            log::error!("Catalog load failed: {:?}", err);
            state.lock().unwrap().processing = false;
        }
    });
}

pub fn load_and_cluster(
    db_path: &str,
    search: &str,
    mode: GroupingMode,
    state: &Arc<Mutex<State>>,
) -> Result<()> {
    {
        let mut state = state.lock().unwrap();
        if state.processing {
            warn!("Load already in progress, ignoring request");
            return Ok(());
        }
        state.processing = true;
    }

    let load_start = Instant::now();
    let db = CatalogDb::open(db_path)?;
    let search = search.trim();
    let filter = (!search.is_empty()).then_some(search);
    let records = db.fetch_records(filter)?;
    let load_ms = load_start.elapsed().as_millis();
    info!("Loaded {} records from {}", records.len(), db_path);

    let cluster_start = Instant::now();
    let clusters = cluster::build_clusters(&records, mode);
    let cluster_ms = cluster_start.elapsed().as_millis();
    info!("Built {} clusters in {}ms", clusters.len(), cluster_ms);

    let mut state = state.lock().unwrap();
    state.records = Some(records);
    state.clusters = Some(clusters);
    state.generation += 1;
    state.stats.load_ms = load_ms;
    state.stats.cluster_ms = cluster_ms;
    state.processing = false;

    Ok(())
}

/// Recompute clusters from the cached records after a grouping-mode change.
/// Clusters are pure derived data, so the previous list is simply replaced.
pub fn rebuild_clusters(state: &Arc<Mutex<State>>, mode: GroupingMode) {
    let mut state = state.lock().unwrap();
    let clusters = state
        .records
        .as_ref()
        .map(|records| cluster::build_clusters(records, mode));

    if let Some(clusters) = clusters {
        state.clusters = Some(clusters);
        state.generation += 1;
    }
}
