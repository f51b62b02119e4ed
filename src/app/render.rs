use crate::domain::model::{
    format_money, BaselineAction, CalculatorReport, TrackSnapshot, COIN_NAME, MONEY_CODE,
};
use crate::utils::error::{CalcError, Result};
use serde::{Deserialize, Serialize};
use std::fmt::Write;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
    Csv,
}

pub fn render(report: &CalculatorReport, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Text => Ok(render_text(report)),
        OutputFormat::Json => render_json(report),
        OutputFormat::Csv => render_csv(report),
    }
}

fn action_hint(action: &BaselineAction) -> String {
    match action {
        BaselineAction::SetBaseline { enabled: false } => format!("[{} (disabled)]", action.label()),
        _ => format!("[{}]", action.label()),
    }
}

fn write_track(out: &mut String, track: &TrackSnapshot, money: f64) {
    let _ = writeln!(out, "{}  {}", track.kind, action_hint(&track.action));
    let _ = writeln!(
        out,
        "  Upgrades: {} / {}",
        track.slider_offset, track.max_slider_offset
    );
    let _ = write!(out, "  Size: {} / {}", track.resulting_size, track.max);
    if let Some(baseline) = track.baseline_label_if_custom {
        let _ = write!(out, "  Baseline: {}", baseline);
    }
    out.push('\n');
    let _ = writeln!(
        out,
        "  Cost: {} {} (${} {})",
        track.step_cost,
        COIN_NAME,
        format_money(money),
        MONEY_CODE
    );
}

pub fn render_text(report: &CalculatorReport) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "Pokémon Go Cost Calculator");
    let _ = writeln!(
        out,
        "{} Bundle: [{}] {}",
        COIN_NAME, report.bundle.index, report.bundle.label
    );
    out.push('\n');

    for track in &report.tracks {
        let money = report
            .costs
            .for_track(track.kind)
            .map(|cost| cost.money)
            .unwrap_or_default();
        write_track(&mut out, track, money);
        out.push('\n');
    }

    let _ = writeln!(
        out,
        "Total: {} {} (${} {})",
        report.costs.total_coins,
        COIN_NAME,
        format_money(report.costs.total_money),
        MONEY_CODE
    );
    let _ = writeln!(
        out,
        "Bundle: {} ({} {} @ ${})",
        report.bundle.label, report.bundle.units, COIN_NAME, report.bundle.price
    );
    out
}

pub fn render_json(report: &CalculatorReport) -> Result<String> {
    let mut json = serde_json::to_string_pretty(report)?;
    json.push('\n');
    Ok(json)
}

#[derive(Debug, Serialize)]
struct CsvRow<'a> {
    track: &'a str,
    upgrades: Option<u32>,
    max_upgrades: Option<u32>,
    size: Option<u32>,
    max: Option<u32>,
    baseline: Option<u32>,
    custom_baseline: Option<bool>,
    coins: u64,
    money: String,
}

pub fn render_csv(report: &CalculatorReport) -> Result<String> {
    let mut writer = csv::Writer::from_writer(Vec::new());

    for track in &report.tracks {
        let money = report
            .costs
            .for_track(track.kind)
            .map(|cost| cost.money)
            .unwrap_or_default();
        writer.serialize(CsvRow {
            track: track.kind.display_name(),
            upgrades: Some(track.slider_offset),
            max_upgrades: Some(track.max_slider_offset),
            size: Some(track.resulting_size),
            max: Some(track.max),
            baseline: Some(track.baseline),
            custom_baseline: Some(track.is_custom_baseline),
            coins: track.step_cost,
            money: format_money(money),
        })?;
    }

    writer.serialize(CsvRow {
        track: "Total",
        upgrades: None,
        max_upgrades: None,
        size: None,
        max: None,
        baseline: None,
        custom_baseline: None,
        coins: report.costs.total_coins,
        money: format_money(report.costs.total_money),
    })?;

    let data = writer
        .into_inner()
        .map_err(|e| CalcError::IoError(e.into_error()))?;
    String::from_utf8(data)
        .map_err(|e| CalcError::IoError(std::io::Error::new(std::io::ErrorKind::InvalidData, e)))
}

pub fn render_bundle_list<'a>(labels: impl IntoIterator<Item = &'a str>, selected: usize) -> String {
    let mut out = String::new();
    for (i, label) in labels.into_iter().enumerate() {
        let marker = if i == selected { '*' } else { ' ' };
        let _ = writeln!(out, "{} [{}] {}", marker, i, label);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::defaults::{default_bundles, BuiltinConfig};
    use crate::core::calculator::UpgradeCalculator;
    use crate::domain::model::TrackKind;

    fn staged_report() -> CalculatorReport {
        let mut calc = UpgradeCalculator::new(&BuiltinConfig::default());
        calc.select_bundle(2);
        calc.set_slider(TrackKind::ItemBag, 3);
        calc.report()
    }

    #[test]
    fn test_render_text_shows_sizes_and_costs() {
        let text = render_text(&staged_report());
        assert!(text.contains("PokéCoin Bundle: [2] 1,300 PokéCoin - $9.99"));
        assert!(text.contains("Item Bag  [Set Baseline]"));
        assert!(text.contains("Size: 500 / 2500"));
        assert!(text.contains("Cost: 600 PokéCoin ($4.61 USD)"));
        assert!(text.contains("Pokémon Storage  [Set Baseline (disabled)]"));
        assert!(text.contains("Total: 600 PokéCoin ($4.61 USD)"));
        assert!(text.contains("Bundle: 1,300 PokéCoin - $9.99 (1300 PokéCoin @ $9.99)"));
        assert!(!text.contains("Baseline: "));
    }

    #[test]
    fn test_render_text_tags_custom_baseline() {
        let mut calc = UpgradeCalculator::new(&BuiltinConfig::default());
        calc.set_slider(TrackKind::PokemonStorage, 4);
        calc.commit_baseline(TrackKind::PokemonStorage);

        let text = render_text(&calc.report());
        assert!(text.contains("Pokémon Storage  [Reset Baseline]"));
        assert!(text.contains("Size: 500 / 3000  Baseline: 500"));
    }

    #[test]
    fn test_render_json_round_trips_report() {
        let report = staged_report();
        let json = render_json(&report).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["costs"]["total_coins"], 600);
        assert_eq!(value["tracks"][0]["kind"], "item_bag");
        assert_eq!(value["tracks"][0]["action"]["kind"], "set_baseline");
        assert_eq!(value["bundle"]["units"], 1300);
    }

    #[test]
    fn test_render_csv_has_track_and_total_rows() {
        let csv = render_csv(&staged_report()).unwrap();
        let lines: Vec<&str> = csv.lines().collect();
        assert_eq!(lines.len(), 4);
        assert_eq!(
            lines[0],
            "track,upgrades,max_upgrades,size,max,baseline,custom_baseline,coins,money"
        );
        assert_eq!(lines[1], "Item Bag,3,43,500,2500,350,false,600,4.61");
        assert_eq!(lines[3], "Total,,,,,,,600,4.61");
    }

    #[test]
    fn test_render_bundle_list_marks_selection() {
        let bundles = default_bundles();
        let list = render_bundle_list(bundles.iter().map(|b| b.label.as_str()), 1);
        assert!(list.contains("  [0] 110 PokéCoin - $0.99"));
        assert!(list.contains("* [1] 600 PokéCoin - $4.99"));
    }
}
