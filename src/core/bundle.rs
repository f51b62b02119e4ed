use crate::config::defaults::default_bundles;
use crate::domain::model::Bundle;

/// Holds the bundle table and the currently selected entry.
#[derive(Debug, Clone, PartialEq)]
pub struct BundleSelector {
    bundles: Vec<Bundle>,
    selected_index: usize,
}

impl BundleSelector {
    /// An empty table falls back to the built-in bundles. Prices are assumed positive.
    pub fn new(bundles: Vec<Bundle>, selected_index: usize) -> Self {
        let bundles = if bundles.is_empty() {
            tracing::warn!("Bundle table is empty, using the built-in bundles");
            default_bundles()
        } else {
            bundles
        };
        let selected_index = if selected_index < bundles.len() {
            selected_index
        } else {
            0
        };
        Self {
            bundles,
            selected_index,
        }
    }

    pub fn bundles(&self) -> &[Bundle] {
        &self.bundles
    }

    pub fn labels(&self) -> impl Iterator<Item = &str> {
        self.bundles.iter().map(|bundle| bundle.label.as_str())
    }

    pub fn selected_index(&self) -> usize {
        self.selected_index
    }

    pub fn selected(&self) -> &Bundle {
        &self.bundles[self.selected_index]
    }

    pub fn exchange_rate(&self) -> f64 {
        self.selected().exchange_rate()
    }

    /// Returns `false` and leaves the selection untouched for an out-of-range index.
    pub fn select_bundle(&mut self, index: usize) -> bool {
        if index >= self.bundles.len() {
            tracing::warn!(
                "Ignoring bundle index {} (table has {} bundles)",
                index,
                self.bundles.len()
            );
            return false;
        }
        self.selected_index = index;
        tracing::debug!("Selected bundle {}: {}", index, self.selected().describe());
        true
    }
}
