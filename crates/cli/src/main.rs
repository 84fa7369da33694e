mod commands;
mod logging;
mod output;
mod plot;

use clap::{Parser, Subcommand};
use queue_sweep_shared::config::{NETWORK_SERVERS, SERVICE_RATE};

use crate::commands::SweepArgs;

#[derive(Parser)]
#[command(
    name = "queue-sweep",
    about = "Monte Carlo sweeps over M/M/1 queues and queue networks"
)]
struct Cli {
    /// Log level used when RUST_LOG is not set
    #[arg(long, default_value = "warn", global = true)]
    log_level: String,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Sweep arrival rates of a single M/M/1 queue
    Queue {
        /// Service rate (mu) held fixed across the sweep
        #[arg(long, default_value_t = SERVICE_RATE)]
        service_rate: f64,
        #[command(flatten)]
        sweep: SweepArgs,
    },
    /// Sweep load factors of a chain of identical queues
    Network {
        /// Number of servers in the chain
        #[arg(long, default_value_t = NETWORK_SERVERS)]
        servers: usize,
        #[command(flatten)]
        sweep: SweepArgs,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    logging::init(&cli.log_level);

    match cli.command {
        Commands::Queue {
            service_rate,
            sweep,
        } => commands::queue::run(service_rate, &sweep),
        Commands::Network { servers, sweep } => commands::network::run(servers, &sweep),
    }
}
