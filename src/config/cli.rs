use crate::app::render::OutputFormat;
use clap::Parser;

#[derive(Debug, Clone, Parser)]
#[command(name = "storage-calc")]
#[command(about = "Estimate the PokéCoin and real-money cost of bag and storage upgrades")]
pub struct CliConfig {
    /// Path to a TOML file overriding pool constants or the bundle table
    #[arg(short, long)]
    pub config: Option<String>,

    /// Index of the PokéCoin bundle used for money conversion
    #[arg(short, long)]
    pub bundle: Option<usize>,

    /// Item Bag upgrades staged on the slider
    #[arg(long, default_value = "0", allow_negative_numbers = true)]
    pub item_bag: i64,

    /// Pokémon Storage upgrades staged on the slider
    #[arg(long, default_value = "0", allow_negative_numbers = true)]
    pub pokemon_storage: i64,

    #[arg(short, long, value_enum, default_value = "text")]
    pub format: OutputFormat,

    /// Read commands from stdin after printing the first report
    #[arg(short, long)]
    pub interactive: bool,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,
}
