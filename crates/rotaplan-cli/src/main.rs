use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand, ValueEnum};
use tracing_subscriber::{EnvFilter, FmtSubscriber};

mod commands;
mod output;

use output::OutputFormat;

#[derive(Parser, Debug)]
#[command(author, version, about = "Road-network route planning utilities")]
struct Cli {
    /// Path to a JSON network file; uses the built-in sample network when omitted.
    #[arg(long, global = true)]
    network: Option<PathBuf>,

    /// Output format for command results.
    #[arg(long, global = true, value_enum, default_value_t = FormatArg::Text)]
    format: FormatArg,

    /// Currency convention used when rendering costs.
    #[arg(long, global = true, value_enum, default_value_t = CurrencyArg::Plain)]
    currency: CurrencyArg,

    #[command(subcommand)]
    command: Command,
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
enum FormatArg {
    Text,
    Rich,
    Json,
}

impl From<FormatArg> for OutputFormat {
    fn from(value: FormatArg) -> Self {
        match value {
            FormatArg::Text => OutputFormat::Text,
            FormatArg::Rich => OutputFormat::Rich,
            FormatArg::Json => OutputFormat::Json,
        }
    }
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
enum CurrencyArg {
    Plain,
    PtBr,
}

impl CurrencyArg {
    fn style(self) -> rotaplan_lib::CurrencyStyle {
        match self {
            CurrencyArg::Plain => rotaplan_lib::CurrencyStyle::plain(),
            CurrencyArg::PtBr => rotaplan_lib::CurrencyStyle::pt_br(),
        }
    }
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Compute the minimum-distance route between two locations.
    Route(commands::route::RouteArgs),
    /// List the locations registered in the network.
    Locations,
    /// Great-circle distance between two registered locations.
    Distance {
        /// Starting location name.
        #[arg(long = "from")]
        from: String,
        /// Destination location name.
        #[arg(long = "to")]
        to: String,
    },
}

fn main() -> Result<()> {
    init_tracing();
    let cli = Cli::parse();

    let network = commands::load_network(cli.network.as_deref())?;
    let format = OutputFormat::from(cli.format);

    match cli.command {
        Command::Route(args) => {
            commands::route::handle_route(&network, &args, format, &cli.currency.style())
        }
        Command::Locations => commands::locations::handle_locations(&network, format),
        Command::Distance { from, to } => {
            commands::distance::handle_distance(&network, &from, &to, format)
        }
    }
}

fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .finish();

    let _ = tracing::subscriber::set_global_default(subscriber);
}
