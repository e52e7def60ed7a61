use crate::demo::run_demo;
use crate::evaluate::{run_cohort, run_evaluate, CohortArgs, EvaluateArgs};
use crate::server;
use clap::{Args, Parser, Subcommand};
use hf_therapy::error::AppError;

#[derive(Parser, Debug)]
#[command(
    name = "HF Therapy Advisor",
    about = "Serve and run heart-failure device and GDMT decision support from the command line",
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
    /// Evaluate one patient from a JSON file of clinical parameters
    Evaluate(EvaluateArgs),
    /// Evaluate a patient worklist exported as CSV
    Cohort(CohortArgs),
    /// Walk through reference patients covering each device pathway and safety rule
    Demo,
}

#[derive(Args, Debug, Default)]
pub(crate) struct ServeArgs {
    /// Override the configured host for the HTTP server
    #[arg(long)]
    pub(crate) host: Option<String>,
    /// Override the configured port for the HTTP server
    #[arg(long)]
    pub(crate) port: Option<u16>,
}

pub(crate) async fn run() -> Result<(), AppError> {
    let cli = Cli::parse();
    let command = cli
        .command
        .unwrap_or_else(|| Command::Serve(ServeArgs::default()));

    match command {
        Command::Serve(args) => server::run(args).await,
        Command::Evaluate(args) => run_evaluate(args),
        Command::Cohort(args) => run_cohort(args),
        Command::Demo => run_demo(),
    }
}
