pub mod bundle;
pub mod calculator;
pub mod cost;
pub mod track;

pub use crate::domain::model::{Bundle, CapacityTrackConfig, CostBreakdown, TrackSnapshot};
pub use crate::domain::ports::ConfigProvider;
pub use crate::utils::error::Result;
