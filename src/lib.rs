//! Motorbike Universe: a motorcycle catalog with an interactive 3D
//! visualization that clusters bikes by category, brand, price or engine
//! displacement and lays the clusters out on a sphere.

pub mod cluster;
pub mod color;
pub mod db;
pub mod gui;
pub mod model;
pub mod object;
pub mod param;
pub mod processing;
pub mod result;
pub mod scene;
pub mod seed;
pub mod sphere;
pub mod state;

pub use cluster::{build_clusters, cluster_key, Cluster, GroupingMode};
pub use model::MotorbikeRecord;

pub const CONTROL_PANEL_WIDTH: f32 = 260.0;
