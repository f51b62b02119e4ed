use crate::domain::model::{Bundle, CapacityTrackConfig};

/// Source of the pool constants and the bundle table.
pub trait ConfigProvider {
    fn item_bag(&self) -> CapacityTrackConfig;
    fn pokemon_storage(&self) -> CapacityTrackConfig;
    fn bundles(&self) -> &[Bundle];
    fn default_bundle(&self) -> usize;
}
