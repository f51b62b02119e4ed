use crate::domain::model::TrackKind;
use crate::utils::error::CalcError;
use std::str::FromStr;

pub const HELP_TEXT: &str = "\
Commands:
  slider <track> <n>   stage n upgrades above the baseline (clamped to the pool)
  commit <track>       fold staged upgrades into a new baseline
  reset <track>        return to the default baseline, keeping the upgrade count
  bundle <index>       choose the PokéCoin bundle used for money conversion
  bundles              list the available bundles
  show                 print the current report
  help                 print this help
  quit                 leave the calculator
Tracks: bag, storage";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Slider { track: TrackKind, offset: i64 },
    Commit(TrackKind),
    Reset(TrackKind),
    Bundle(usize),
    Bundles,
    Show,
    Help,
    Quit,
}

fn command_error(input: &str, reason: impl Into<String>) -> CalcError {
    CalcError::CommandError {
        input: input.to_string(),
        reason: reason.into(),
    }
}

impl FromStr for Command {
    type Err = CalcError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let parts: Vec<&str> = s.split_whitespace().collect();
        let Some((name, args)) = parts.split_first() else {
            return Err(command_error(s, "empty command"));
        };

        let track_arg = || -> Result<TrackKind, CalcError> {
            args.first()
                .ok_or_else(|| command_error(s, "missing track"))?
                .parse()
        };

        let command = match name.to_lowercase().as_str() {
            "slider" | "set" => {
                let track = track_arg()?;
                let raw = args
                    .get(1)
                    .ok_or_else(|| command_error(s, "missing upgrade count"))?;
                let offset = raw
                    .parse::<i64>()
                    .map_err(|_| command_error(s, format!("'{}' is not a whole number", raw)))?;
                Command::Slider { track, offset }
            }
            "commit" => Command::Commit(track_arg()?),
            "reset" => Command::Reset(track_arg()?),
            "bundle" => {
                let raw = args
                    .first()
                    .ok_or_else(|| command_error(s, "missing bundle index"))?;
                let index = raw
                    .parse::<usize>()
                    .map_err(|_| command_error(s, format!("'{}' is not a bundle index", raw)))?;
                Command::Bundle(index)
            }
            "bundles" => Command::Bundles,
            "show" => Command::Show,
            "help" | "?" => Command::Help,
            "quit" | "exit" | "q" => Command::Quit,
            _ => return Err(command_error(s, "unknown command")),
        };

        Ok(command)
    }
}
