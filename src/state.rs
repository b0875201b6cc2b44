use crate::cluster::Cluster;
use crate::model::MotorbikeRecord;

#[derive(Default)]
pub struct ProcessingStatistics {
    pub load_ms: u128,
    pub cluster_ms: u128,
}

/// Shared between the render loop and the background catalog loader.
/// `generation` bumps every time `clusters` is replaced so the renderer knows
/// to rebuild its scene geometry.
#[derive(Default)]
pub struct State {
    pub processing: bool,
    pub records: Option<Vec<MotorbikeRecord>>,
    pub clusters: Option<Vec<Cluster>>,
    pub generation: u64,
    pub stats: ProcessingStatistics,
}
