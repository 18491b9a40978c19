use crate::demo::{run_demo, run_predict, run_scenario, DemoArgs, PredictArgs, ScenarioArgs};
use crate::server;
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;
use wildfire_readiness::error::AppError;

#[derive(Parser, Debug)]
#[command(
    name = "Wildfire Readiness",
    about = "Serve and demonstrate wildfire readiness risk predictions",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Start the HTTP service (default command)
    Serve(ServeArgs),
    /// Show the historical scenario generated for a ZIP code
    Scenario(ScenarioArgs),
    /// Score a single set of weather and distance features
    Predict(PredictArgs),
    /// Run the distance diagnostic and one scenario per region
    Demo(DemoArgs),
}

#[derive(Args, Debug, Default)]
pub(crate) struct ServeArgs {
    /// Override the configured host for the HTTP server
    #[arg(long)]
    pub(crate) host: Option<String>,
    /// Override the configured port for the HTTP server
    #[arg(long)]
    pub(crate) port: Option<u16>,
    /// Model file to try before the standard locations
    #[arg(long)]
    pub(crate) model: Option<PathBuf>,
}

pub(crate) async fn run() -> Result<(), AppError> {
    let cli = Cli::parse();
    let command = cli
        .command
        .unwrap_or_else(|| Command::Serve(ServeArgs::default()));

    match command {
        Command::Serve(args) => server::run(args).await,
        Command::Scenario(args) => run_scenario(args),
        Command::Predict(args) => run_predict(args),
        Command::Demo(args) => run_demo(args),
    }
}
