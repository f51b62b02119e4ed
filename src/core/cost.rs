use crate::domain::model::{CostBreakdown, TrackCost, TrackKind};

/// Converts each track's coin cost to money at `exchange_rate` (coins per unit of money).
///
/// Coin totals stay exact; money values are left unrounded for the renderer.
pub fn compute_costs(track_costs: &[(TrackKind, u64)], exchange_rate: f64) -> CostBreakdown {
    debug_assert!(exchange_rate > 0.0, "exchange rate must be positive");

    let per_track: Vec<TrackCost> = track_costs
        .iter()
        .map(|&(kind, coins)| TrackCost {
            kind,
            coins,
            money: coins as f64 / exchange_rate,
        })
        .collect();

    let total_coins: u64 = per_track.iter().map(|cost| cost.coins).sum();

    CostBreakdown {
        per_track,
        total_coins,
        total_money: total_coins as f64 / exchange_rate,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::model::format_money;

    #[test]
    fn test_money_conversion_with_smallest_bundle() {
        let costs = compute_costs(&[(TrackKind::ItemBag, 200)], 110.0 / 0.99);
        assert_eq!(format_money(costs.per_track[0].money), "1.80");
        assert_eq!(costs.total_coins, 200);
    }

    #[test]
    fn test_totals_sum_both_tracks() {
        let rate = 1300.0 / 9.99;
        let costs = compute_costs(
            &[(TrackKind::ItemBag, 600), (TrackKind::PokemonStorage, 1000)],
            rate,
        );
        assert_eq!(costs.total_coins, 1600);
        assert_eq!(format_money(costs.for_track(TrackKind::ItemBag).unwrap().money), "4.61");
        assert_eq!(format_money(costs.total_money), format_money(1600.0 / rate));
    }

    #[test]
    fn test_zero_cost_is_zero_money() {
        let costs = compute_costs(
            &[(TrackKind::ItemBag, 0), (TrackKind::PokemonStorage, 0)],
            15500.0 / 99.99,
        );
        assert_eq!(costs.total_coins, 0);
        assert_eq!(costs.total_money, 0.0);
    }
}
