use clap::Parser;
use std::io::{self, Write};
use storage_calc::app::{render, session};
use storage_calc::domain::ports::ConfigProvider;
use storage_calc::utils::error::{CalcError, ErrorSeverity};
use storage_calc::utils::{logger, validation::Validate};
use storage_calc::{BuiltinConfig, CliConfig, TomlConfig, TrackKind, UpgradeCalculator};

fn load_config(config: &CliConfig) -> storage_calc::Result<Box<dyn ConfigProvider>> {
    match &config.config {
        Some(path) => {
            tracing::info!("📁 Loading configuration from: {}", path);
            let toml_config = TomlConfig::from_file(path)?;
            toml_config.validate()?;
            tracing::info!("✅ Configuration loaded and validated successfully");
            Ok(Box::new(toml_config))
        }
        None => Ok(Box::new(BuiltinConfig::default())),
    }
}

fn run(config: &CliConfig) -> storage_calc::Result<()> {
    let provider = load_config(config)?;
    let mut calc = UpgradeCalculator::new(provider.as_ref());

    if let Some(index) = config.bundle {
        calc.select_bundle(index);
    }
    calc.set_slider(TrackKind::ItemBag, config.item_bag);
    calc.set_slider(TrackKind::PokemonStorage, config.pokemon_storage);

    let stdout = io::stdout();
    let mut out = stdout.lock();
    write!(out, "{}", render::render(&calc.report(), config.format)?)?;

    if config.interactive {
        tracing::info!("Interactive mode, type 'help' for commands");
        session::run_session(&mut calc, io::stdin().lock(), &mut out, config.format)?;
    }

    Ok(())
}

fn main() -> anyhow::Result<()> {
    let config = CliConfig::parse();

    logger::init_cli_logger(config.verbose);

    tracing::info!("Starting storage-calc");
    if config.verbose {
        tracing::debug!("CLI config: {:?}", config);
    }

    if let Err(e) = run(&config) {
        report_failure(&e);
    }

    Ok(())
}

fn report_failure(e: &CalcError) {
    tracing::error!(
        "❌ storage-calc failed: {} (Category: {:?}, Severity: {:?})",
        e,
        e.category(),
        e.severity()
    );
    tracing::error!("💡 Recovery suggestion: {}", e.recovery_suggestion());

    eprintln!("❌ {}", e.user_friendly_message());
    eprintln!("💡 Suggestion: {}", e.recovery_suggestion());

    let exit_code = match e.severity() {
        ErrorSeverity::Low => 0, // input errors are not fatal
        ErrorSeverity::Medium => 2,
        ErrorSeverity::High => 1,
        ErrorSeverity::Critical => 3,
    };

    if exit_code > 0 {
        std::process::exit(exit_code);
    }
}
