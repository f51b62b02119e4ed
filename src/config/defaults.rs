use crate::domain::model::{Bundle, CapacityTrackConfig};
use crate::domain::ports::ConfigProvider;

pub const ITEM_BAG: CapacityTrackConfig = CapacityTrackConfig {
    default: 350,
    max: 2500,
    step: 50,
    cost_per_step: 200,
};

pub const POKEMON_STORAGE: CapacityTrackConfig = CapacityTrackConfig {
    default: 300,
    max: 3000,
    step: 50,
    cost_per_step: 200,
};

pub const DEFAULT_BUNDLE_INDEX: usize = 0;

pub fn default_bundles() -> Vec<Bundle> {
    vec![
        Bundle::new(110, 0.99, "110 PokéCoin - $0.99"),
        Bundle::new(600, 4.99, "600 PokéCoin - $4.99"),
        Bundle::new(1300, 9.99, "1,300 PokéCoin - $9.99"),
        Bundle::new(2700, 19.99, "2,700 PokéCoin - $19.99"),
        Bundle::new(5600, 39.99, "5,600 PokéCoin - $39.99"),
        Bundle::new(15500, 99.99, "15,500 PokéCoin - $99.99"),
    ]
}

/// The in-game store as shipped, used when no configuration file is given.
#[derive(Debug, Clone)]
pub struct BuiltinConfig {
    bundles: Vec<Bundle>,
}

impl Default for BuiltinConfig {
    fn default() -> Self {
        Self {
            bundles: default_bundles(),
        }
    }
}

impl ConfigProvider for BuiltinConfig {
    fn item_bag(&self) -> CapacityTrackConfig {
        ITEM_BAG
    }

    fn pokemon_storage(&self) -> CapacityTrackConfig {
        POKEMON_STORAGE
    }

    fn bundles(&self) -> &[Bundle] {
        &self.bundles
    }

    fn default_bundle(&self) -> usize {
        DEFAULT_BUNDLE_INDEX
    }
}
