use crate::cluster::GroupingMode;

#[derive(Eq, PartialEq, Copy, Clone)]
pub enum InteractionMode {
    Orbit,
    ManualOrbit,
}

#[derive(PartialEq, Clone)]
pub struct VisParams {
    pub interaction_mode: InteractionMode,
    pub grouping_mode: GroupingMode,
    pub dark_mode: bool,
}

#[derive(PartialEq, Clone)]
pub struct DataParams {
    pub db_path: String,
    pub search: String,
}
