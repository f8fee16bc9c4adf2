use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing_subscriber::{EnvFilter, FmtSubscriber};

use campusroute_cli::campus::sample_campus;
use campusroute_cli::commands::nodes::handle_nodes_command;
use campusroute_cli::commands::route::{handle_route_command, AlgorithmArg, RouteCommandArgs};
use campusroute_cli::output::OutputFormat;

#[derive(Parser, Debug)]
#[command(author, version, about = "Campus route planner")]
struct Cli {
    /// Output format.
    #[arg(long, value_enum, default_value_t = OutputFormat::Text, global = true)]
    format: OutputFormat,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Compute a route between two locations on the sample campus.
    Route {
        /// Starting location name.
        #[arg(long = "from")]
        from: String,
        /// Destination location name.
        #[arg(long = "to")]
        to: String,
        /// Only use accessible connections (unlocks lifts).
        #[arg(long)]
        accessible: bool,
        /// Plan an evacuation route (unlocks fire exits, avoids blocked corridors).
        #[arg(long)]
        emergency: bool,
        /// Start the journey by car; the car is left at the first usable parking spot.
        #[arg(long)]
        by_car: bool,
        /// Search strategy.
        #[arg(long, value_enum, default_value_t = AlgorithmArg::Dijkstra)]
        algorithm: AlgorithmArg,
    },
    /// List the locations on the sample campus.
    Nodes,
}

fn main() -> Result<()> {
    init_tracing();
    let cli = Cli::parse();
    let graph = sample_campus().context("failed to build the sample campus")?;

    match cli.command {
        Command::Route {
            from,
            to,
            accessible,
            emergency,
            by_car,
            algorithm,
        } => {
            let args = RouteCommandArgs {
                from,
                to,
                accessible,
                emergency,
                by_car,
                algorithm,
            };
            handle_route_command(&graph, &args, cli.format)
        }
        Command::Nodes => handle_nodes_command(&graph, cli.format),
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
