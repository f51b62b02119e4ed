use crate::app::command::{Command, HELP_TEXT};
use crate::app::render::{render, render_bundle_list, OutputFormat};
use crate::core::calculator::UpgradeCalculator;
use crate::utils::error::Result;
use std::io::{BufRead, Write};

/// Applies one command. Returns `false` when the session should end.
pub fn apply_command<W: Write>(
    calc: &mut UpgradeCalculator,
    command: Command,
    output: &mut W,
    format: OutputFormat,
) -> Result<bool> {
    match command {
        Command::Slider { track, offset } => calc.set_slider(track, offset),
        Command::Commit(track) => calc.commit_baseline(track),
        Command::Reset(track) => calc.reset_baseline(track),
        Command::Bundle(index) => {
            if !calc.select_bundle(index) {
                writeln!(
                    output,
                    "Bundle {} does not exist (choose 0-{})",
                    index,
                    calc.bundles().bundles().len() - 1
                )?;
                return Ok(true);
            }
        }
        Command::Bundles => {
            let list = render_bundle_list(calc.bundles().labels(), calc.bundles().selected_index());
            write!(output, "{}", list)?;
            return Ok(true);
        }
        Command::Help => {
            writeln!(output, "{}", HELP_TEXT)?;
            return Ok(true);
        }
        Command::Quit => return Ok(false),
        Command::Show => {}
    }

    write!(output, "{}", render(&calc.report(), format)?)?;
    Ok(true)
}

/// Reads commands line by line until `quit` or end of input.
///
/// Bad commands are reported on `output` and the session keeps going.
pub fn run_session<R: BufRead, W: Write>(
    calc: &mut UpgradeCalculator,
    input: R,
    mut output: W,
    format: OutputFormat,
) -> Result<()> {
    for line in input.lines() {
        let line = line?;
        let trimmed = line.trim();
        if trimmed.is_empty() || trimmed.starts_with('#') {
            continue;
        }

        let command = match trimmed.parse::<Command>() {
            Ok(command) => command,
            Err(e) => {
                tracing::debug!("Rejected command: {}", e);
                writeln!(output, "❌ {}", e.user_friendly_message())?;
                writeln!(output, "💡 {}", e.recovery_suggestion())?;
                continue;
            }
        };

        tracing::debug!("Applying {:?}", command);
        if !apply_command(calc, command, &mut output, format)? {
            break;
        }
    }

    output.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::defaults::BuiltinConfig;
    use crate::domain::model::TrackKind;
    use std::io::Cursor;

    fn run(script: &str) -> (UpgradeCalculator, String) {
        let mut calc = UpgradeCalculator::new(&BuiltinConfig::default());
        let mut output = Vec::new();
        run_session(&mut calc, Cursor::new(script), &mut output, OutputFormat::Text).unwrap();
        (calc, String::from_utf8(output).unwrap())
    }

    #[test]
    fn test_session_applies_commands_in_order() {
        let (calc, output) = run("slider bag 3\ncommit bag\nslider storage 2\n");
        let bag = calc.track(TrackKind::ItemBag);
        assert_eq!(bag.baseline(), 500);
        assert!(bag.is_custom_baseline());
        assert_eq!(calc.track(TrackKind::PokemonStorage).slider_offset(), 2);
        assert_eq!(output.matches("Total:").count(), 3);
    }

    #[test]
    fn test_session_continues_after_bad_command() {
        let (calc, output) = run("jump\nslider bag 1\n");
        assert!(output.contains("Invalid command 'jump'"));
        assert!(output.contains("help"));
        assert_eq!(calc.track(TrackKind::ItemBag).slider_offset(), 1);
    }

    #[test]
    fn test_session_stops_at_quit() {
        let (calc, _) = run("slider bag 1\nquit\nslider bag 5\n");
        assert_eq!(calc.track(TrackKind::ItemBag).slider_offset(), 1);
    }

    #[test]
    fn test_unknown_bundle_is_reported_and_ignored() {
        let (calc, output) = run("bundle 3\nbundle 12\n");
        assert_eq!(calc.bundles().selected_index(), 3);
        assert!(output.contains("Bundle 12 does not exist (choose 0-5)"));
    }

    #[test]
    fn test_bundles_and_help_do_not_render_report() {
        let (_, output) = run("# listing\nbundles\nhelp\n");
        assert!(output.contains("* [0] 110 PokéCoin - $0.99"));
        assert!(output.contains("Commands:"));
        assert!(!output.contains("Total:"));
    }
}
