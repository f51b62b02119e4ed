use crate::utils::error::CalcError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

pub const COIN_NAME: &str = "PokéCoin";
pub const MONEY_CODE: &str = "USD";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TrackKind {
    ItemBag,
    PokemonStorage,
}

impl TrackKind {
    pub const ALL: [TrackKind; 2] = [TrackKind::ItemBag, TrackKind::PokemonStorage];

    pub fn display_name(self) -> &'static str {
        match self {
            TrackKind::ItemBag => "Item Bag",
            TrackKind::PokemonStorage => "Pokémon Storage",
        }
    }
}

impl fmt::Display for TrackKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

impl FromStr for TrackKind {
    type Err = CalcError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "bag" | "items" | "item-bag" | "item_bag" | "itembag" => Ok(TrackKind::ItemBag),
            "storage" | "pokemon" | "pokémon" | "pokemon-storage" | "pokemon_storage"
            | "pokémon-storage" => Ok(TrackKind::PokemonStorage),
            _ => Err(CalcError::CommandError {
                input: s.to_string(),
                reason: "unknown track, expected 'bag' or 'storage'".to_string(),
            }),
        }
    }
}

/// Constants for one upgradeable capacity pool.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CapacityTrackConfig {
    pub default: u32,
    pub max: u32,
    pub step: u32,
    pub cost_per_step: u64,
}

/// A fixed real-money price for a fixed quantity of in-game currency.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Bundle {
    pub units: u32,
    pub price: f64,
    pub label: String,
}

impl Bundle {
    pub fn new(units: u32, price: f64, label: impl Into<String>) -> Self {
        Self {
            units,
            price,
            label: label.into(),
        }
    }

    /// Currency units per unit of real money.
    pub fn exchange_rate(&self) -> f64 {
        f64::from(self.units) / self.price
    }

    pub fn describe(&self) -> String {
        format!("{} ({} {} @ ${})", self.label, self.units, COIN_NAME, self.price)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum BaselineAction {
    SetBaseline { enabled: bool },
    ResetBaseline,
}

impl BaselineAction {
    pub fn label(&self) -> &'static str {
        match self {
            BaselineAction::SetBaseline { .. } => "Set Baseline",
            BaselineAction::ResetBaseline => "Reset Baseline",
        }
    }
}

/// Read-only view of a capacity track after the latest transition.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrackSnapshot {
    pub kind: TrackKind,
    pub slider_offset: u32,
    pub max_slider_offset: u32,
    pub resulting_size: u32,
    pub max: u32,
    pub baseline: u32,
    pub is_custom_baseline: bool,
    pub baseline_label_if_custom: Option<u32>,
    pub step_cost: u64,
    pub action: BaselineAction,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrackCost {
    pub kind: TrackKind,
    pub coins: u64,
    pub money: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CostBreakdown {
    pub per_track: Vec<TrackCost>,
    pub total_coins: u64,
    pub total_money: f64,
}

impl CostBreakdown {
    pub fn for_track(&self, kind: TrackKind) -> Option<&TrackCost> {
        self.per_track.iter().find(|cost| cost.kind == kind)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SelectedBundle {
    pub index: usize,
    pub label: String,
    pub units: u32,
    pub price: f64,
}

/// Everything the presentation layer reads after a transition.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CalculatorReport {
    pub tracks: Vec<TrackSnapshot>,
    pub costs: CostBreakdown,
    pub bundle: SelectedBundle,
    pub exchange_rate: f64,
}

/// Money is only rounded when shown. Half-cent ties round up.
pub fn format_money(amount: f64) -> String {
    format!("{:.2}", (amount * 100.0).round() / 100.0)
}
