mod commands;
mod logging;
mod output;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "pinger-sweep", about = "Pinger localization sweep error analysis")]
struct Cli {
    /// Default log level (RUST_LOG takes precedence)
    #[arg(long, global = true, default_value = "warn")]
    log_level: String,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Mean absolute error per sweep point, per series
    Errors {
        /// Path to the sweep JSON (params, actual, simulated, optional scene)
        file: String,
        /// Compare angles modulo 2π (no shortest-arc correction)
        #[arg(long, conflicts_with = "shortest_arc")]
        angular: bool,
        /// Compare angles along the shorter arc
        #[arg(long)]
        shortest_arc: bool,
        /// Number of parallel workers (0 = sequential)
        #[arg(long, default_value = "0")]
        workers: usize,
        /// Factor applied to the sweep parameter axis
        #[arg(long, default_value = "1.0")]
        scale_x: f64,
        /// Factor applied to the error axis
        #[arg(long, default_value = "1.0")]
        scale_y: f64,
        /// Mark the curves for a polar axis
        #[arg(long)]
        polar: bool,
        /// Plot title
        #[arg(long)]
        title: Option<String>,
        /// Print the plot as JSON instead of a table
        #[arg(long)]
        json: bool,
    },
    /// Estimated pinger positions against the scene ground truth
    Positions {
        /// Path to the positions JSON (scene, estimates, sigma, optional initial_guess)
        file: String,
        /// Print the plot as JSON instead of a summary
        #[arg(long)]
        json: bool,
    },
    /// Summarize raw hydrophone signals
    Signals {
        /// Path to a JSON array of signals
        file: String,
        /// Plot title
        #[arg(long)]
        title: Option<String>,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    logging::init_logging(&cli.log_level);

    match cli.command {
        Commands::Errors {
            file,
            angular,
            shortest_arc,
            workers,
            scale_x,
            scale_y,
            polar,
            title,
            json,
        } => commands::errors::run(
            &file,
            commands::errors::Options {
                angular,
                shortest_arc,
                workers,
                scale_x,
                scale_y,
                polar,
                title,
                json,
            },
        ),
        Commands::Positions { file, json } => commands::positions::run(&file, json),
        Commands::Signals { file, title } => commands::signals::run(&file, title.as_deref()),
    }
}
