use crate::core::bundle::BundleSelector;
use crate::core::cost::compute_costs;
use crate::core::track::CapacityTrack;
use crate::domain::model::{CalculatorReport, CostBreakdown, SelectedBundle, TrackKind};
use crate::domain::ports::ConfigProvider;

/// Session state: both capacity tracks and the shared bundle selector.
///
/// Derived values are computed on read, so every report reflects the latest transition.
#[derive(Debug, Clone)]
pub struct UpgradeCalculator {
    item_bag: CapacityTrack,
    pokemon_storage: CapacityTrack,
    bundles: BundleSelector,
}

impl UpgradeCalculator {
    pub fn new<C: ConfigProvider + ?Sized>(config: &C) -> Self {
        Self {
            item_bag: CapacityTrack::new(TrackKind::ItemBag, config.item_bag()),
            pokemon_storage: CapacityTrack::new(TrackKind::PokemonStorage, config.pokemon_storage()),
            bundles: BundleSelector::new(config.bundles().to_vec(), config.default_bundle()),
        }
    }

    pub fn track(&self, kind: TrackKind) -> &CapacityTrack {
        match kind {
            TrackKind::ItemBag => &self.item_bag,
            TrackKind::PokemonStorage => &self.pokemon_storage,
        }
    }

    fn track_mut(&mut self, kind: TrackKind) -> &mut CapacityTrack {
        match kind {
            TrackKind::ItemBag => &mut self.item_bag,
            TrackKind::PokemonStorage => &mut self.pokemon_storage,
        }
    }

    pub fn bundles(&self) -> &BundleSelector {
        &self.bundles
    }

    pub fn set_slider(&mut self, kind: TrackKind, offset: i64) {
        self.track_mut(kind).set_slider(offset);
    }

    pub fn commit_baseline(&mut self, kind: TrackKind) {
        self.track_mut(kind).commit_baseline();
    }

    pub fn reset_baseline(&mut self, kind: TrackKind) {
        self.track_mut(kind).reset_baseline();
    }

    pub fn select_bundle(&mut self, index: usize) -> bool {
        self.bundles.select_bundle(index)
    }

    pub fn costs(&self) -> CostBreakdown {
        let track_costs: Vec<(TrackKind, u64)> = TrackKind::ALL
            .iter()
            .map(|&kind| (kind, self.track(kind).step_cost()))
            .collect();
        compute_costs(&track_costs, self.bundles.exchange_rate())
    }

    pub fn report(&self) -> CalculatorReport {
        let selected = self.bundles.selected();
        CalculatorReport {
            tracks: TrackKind::ALL
                .iter()
                .map(|&kind| self.track(kind).snapshot())
                .collect(),
            costs: self.costs(),
            bundle: SelectedBundle {
                index: self.bundles.selected_index(),
                label: selected.label.clone(),
                units: selected.units,
                price: selected.price,
            },
            exchange_rate: self.bundles.exchange_rate(),
        }
    }
}
