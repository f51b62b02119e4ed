use crate::domain::model::{BaselineAction, CapacityTrackConfig, TrackKind, TrackSnapshot};

/// One upgradeable pool: a committed baseline plus staged upgrades on a slider.
///
/// Baseline only ever moves by whole multiples of `step` away from the pool
/// default, which keeps `reset_baseline` exact.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CapacityTrack {
    kind: TrackKind,
    config: CapacityTrackConfig,
    baseline: u32,
    slider_offset: u32,
    is_custom_baseline: bool,
}

impl CapacityTrack {
    pub fn new(kind: TrackKind, config: CapacityTrackConfig) -> Self {
        Self {
            kind,
            config,
            baseline: config.default,
            slider_offset: 0,
            is_custom_baseline: false,
        }
    }

    pub fn kind(&self) -> TrackKind {
        self.kind
    }

    pub fn config(&self) -> &CapacityTrackConfig {
        &self.config
    }

    pub fn baseline(&self) -> u32 {
        self.baseline
    }

    pub fn slider_offset(&self) -> u32 {
        self.slider_offset
    }

    pub fn is_custom_baseline(&self) -> bool {
        self.is_custom_baseline
    }

    /// Steps of headroom left between the current baseline and the ceiling.
    pub fn max_slider_offset(&self) -> u32 {
        self.config.max.saturating_sub(self.baseline) / self.config.step
    }

    pub fn resulting_size(&self) -> u32 {
        self.baseline + self.slider_offset * self.config.step
    }

    /// Coin cost of the staged upgrades.
    pub fn step_cost(&self) -> u64 {
        u64::from(self.slider_offset) * self.config.cost_per_step
    }

    /// Out-of-range requests are clamped into `[0, max_slider_offset]`.
    pub fn set_slider(&mut self, offset: i64) {
        let max = self.max_slider_offset();
        let clamped = offset.clamp(0, i64::from(max)) as u32;
        if clamped as i64 != offset {
            tracing::debug!(
                "{} slider request {} clamped to {} (max {})",
                self.kind,
                offset,
                clamped,
                max
            );
        }
        self.slider_offset = clamped;
    }

    pub fn commit_baseline(&mut self) {
        self.baseline += self.slider_offset * self.config.step;
        self.slider_offset = 0;
        self.is_custom_baseline = true;
        tracing::debug!(
            "{} baseline committed at {} (headroom {} steps)",
            self.kind,
            self.baseline,
            self.max_slider_offset()
        );
    }

    /// Returns to the pool default while keeping the same upgrade count on the slider.
    pub fn reset_baseline(&mut self) {
        let previous = self.baseline;
        self.baseline = self.config.default;
        self.slider_offset = previous.saturating_sub(self.config.default) / self.config.step;
        self.is_custom_baseline = false;
        tracing::debug!(
            "{} baseline reset from {} to {}, slider at {}",
            self.kind,
            previous,
            self.baseline,
            self.slider_offset
        );
    }

    pub fn snapshot(&self) -> TrackSnapshot {
        let action = if self.is_custom_baseline {
            BaselineAction::ResetBaseline
        } else {
            BaselineAction::SetBaseline {
                enabled: self.slider_offset > 0,
            }
        };

        TrackSnapshot {
            kind: self.kind,
            slider_offset: self.slider_offset,
            max_slider_offset: self.max_slider_offset(),
            resulting_size: self.resulting_size(),
            max: self.config.max,
            baseline: self.baseline,
            is_custom_baseline: self.is_custom_baseline,
            baseline_label_if_custom: self.is_custom_baseline.then_some(self.baseline),
            step_cost: self.step_cost(),
            action,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::defaults::{ITEM_BAG, POKEMON_STORAGE};

    fn item_bag() -> CapacityTrack {
        CapacityTrack::new(TrackKind::ItemBag, ITEM_BAG)
    }

    #[test]
    fn test_new_track_starts_at_default() {
        let track = item_bag();
        assert_eq!(track.baseline(), 350);
        assert_eq!(track.slider_offset(), 0);
        assert!(!track.is_custom_baseline());
        assert_eq!(track.max_slider_offset(), 43);
        assert_eq!(track.resulting_size(), 350);
        assert_eq!(track.step_cost(), 0);
    }

    #[test]
    fn test_set_slider_clamps_out_of_range_requests() {
        let mut track = item_bag();
        track.set_slider(-4);
        assert_eq!(track.slider_offset(), 0);

        track.set_slider(1_000);
        assert_eq!(track.slider_offset(), 43);
        assert_eq!(track.resulting_size(), 2500);
    }

    #[test]
    fn test_set_slider_is_idempotent() {
        let mut once = item_bag();
        once.set_slider(7);
        let mut twice = item_bag();
        twice.set_slider(7);
        twice.set_slider(7);
        assert_eq!(once, twice);
    }

    #[test]
    fn test_slider_stays_within_bounds_for_every_offset() {
        for config in [ITEM_BAG, POKEMON_STORAGE] {
            let mut track = CapacityTrack::new(TrackKind::ItemBag, config);
            let max = track.max_slider_offset();
            for offset in -2..=i64::from(max) + 2 {
                track.set_slider(offset);
                assert!(track.slider_offset() <= track.max_slider_offset());
                assert!(track.resulting_size() <= config.max);
                assert_eq!(
                    track.resulting_size(),
                    track.baseline() + track.slider_offset() * config.step
                );
            }
        }
    }

    #[test]
    fn test_commit_then_reset_restores_state() {
        let mut track = item_bag();
        track.set_slider(12);
        let before = track.clone();

        track.commit_baseline();
        assert_eq!(track.baseline(), 950);
        assert_eq!(track.slider_offset(), 0);
        assert!(track.is_custom_baseline());

        track.reset_baseline();
        assert_eq!(track, before);
    }

    #[test]
    fn test_commit_at_max_leaves_no_headroom() {
        for (kind, config) in [(TrackKind::ItemBag, ITEM_BAG), (TrackKind::PokemonStorage, POKEMON_STORAGE)] {
            let mut track = CapacityTrack::new(kind, config);
            track.set_slider(i64::from(track.max_slider_offset()));
            track.commit_baseline();
            assert_eq!(track.baseline(), config.max);
            assert_eq!(track.max_slider_offset(), 0);

            track.set_slider(5);
            assert_eq!(track.slider_offset(), 0);
        }
    }

    #[test]
    fn test_commit_with_zero_slider_marks_custom() {
        let mut track = item_bag();
        track.commit_baseline();
        assert_eq!(track.baseline(), 350);
        assert!(track.is_custom_baseline());
        assert_eq!(track.snapshot().action, BaselineAction::ResetBaseline);
    }

    #[test]
    fn test_repeated_commits_accumulate() {
        let mut track = item_bag();
        track.set_slider(2);
        track.commit_baseline();
        track.set_slider(3);
        track.commit_baseline();
        assert_eq!(track.baseline(), 600);

        track.reset_baseline();
        assert_eq!(track.baseline(), 350);
        assert_eq!(track.slider_offset(), 5);
    }

    #[test]
    fn test_reset_from_default_clears_slider() {
        let mut track = item_bag();
        track.set_slider(4);
        track.reset_baseline();
        assert_eq!(track.baseline(), 350);
        assert_eq!(track.slider_offset(), 0);
        assert!(!track.is_custom_baseline());
    }

    #[test]
    fn test_snapshot_reflects_custom_baseline() {
        let mut track = item_bag();
        let snapshot = track.snapshot();
        assert_eq!(snapshot.baseline_label_if_custom, None);
        assert_eq!(snapshot.action, BaselineAction::SetBaseline { enabled: false });

        track.set_slider(3);
        assert_eq!(
            track.snapshot().action,
            BaselineAction::SetBaseline { enabled: true }
        );

        track.commit_baseline();
        let snapshot = track.snapshot();
        assert_eq!(snapshot.baseline_label_if_custom, Some(500));
        assert_eq!(snapshot.max_slider_offset, 40);
        assert_eq!(snapshot.max, 2500);
    }
}
